use super::{board, sq};
use crate::board::{attackers_of, is_attacked, Board, Color, Square};

#[test]
fn test_starting_position_reach() {
    let start = Board::new();
    for col in 0..8 {
        assert!(is_attacked(Color::Black, Square(5, col), &start));
        assert!(!is_attacked(Color::Black, Square(4, col), &start));
        assert!(is_attacked(Color::White, Square(2, col), &start));
        assert!(!is_attacked(Color::White, Square(3, col), &start));
    }
}

#[test]
fn test_pawns_attack_diagonally_only() {
    let b = board(
        "
        k.......
        ........
        ........
        ........
        ....P...
        ........
        ........
        .......K
        ",
    );
    assert!(is_attacked(Color::Black, sq("d5"), &b));
    assert!(is_attacked(Color::Black, sq("f5"), &b));
    assert!(!is_attacked(Color::Black, sq("e5"), &b));
    assert!(!is_attacked(Color::Black, sq("d3"), &b));
}

#[test]
fn test_sliders_are_blocked() {
    let b = board(
        "
        k.......
        ........
        ........
        ....n...
        ........
        ........
        ........
        R...R..K
        ",
    );
    assert!(is_attacked(Color::Black, sq("e4"), &b));
    assert!(is_attacked(Color::Black, sq("e5"), &b));
    assert!(!is_attacked(Color::Black, sq("e6"), &b));
    assert!(is_attacked(Color::Black, sq("a8"), &b));
    assert!(is_attacked(Color::Black, sq("c1"), &b));
    assert!(!is_attacked(Color::Black, sq("f2"), &b));
}

#[test]
fn test_knight_and_king_reach() {
    let b = board(
        "
        ........
        ........
        ........
        ....k...
        ........
        ........
        .....n..
        K.......
        ",
    );
    assert!(is_attacked(Color::White, sq("h1"), &b));
    assert!(is_attacked(Color::White, sq("d1"), &b));
    assert!(is_attacked(Color::White, sq("e4"), &b));
    assert!(is_attacked(Color::White, sq("f6"), &b));
    assert!(!is_attacked(Color::White, sq("e3"), &b));
    assert!(is_attacked(Color::Black, sq("b2"), &b));
}

#[test]
fn test_attackers_of_lists_every_attacker() {
    let b = board(
        "
        ....k...
        ........
        ........
        ...r....
        ........
        .....n..
        ...p....
        ...QK...
        ",
    );
    let mut found = attackers_of(Color::White, sq("e1"), &b);
    found.sort();
    assert_eq!(found, vec![sq("f3"), sq("d2")]);

    // the pawn shields d1 from the rook and never attacks straight ahead
    assert!(attackers_of(Color::White, sq("d1"), &b).is_empty());
    assert_eq!(attackers_of(Color::Black, sq("d2"), &b), vec![sq("d1"), sq("e1")]);
}
