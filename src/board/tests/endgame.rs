use super::board;
use crate::board::{classify, has_any_legal_move, Board, BoardError, CastlingRights, Color, GameStatus};

fn status(diagram: &str, to_move: Color) -> GameStatus {
    classify(to_move, &board(diagram), &CastlingRights::none()).unwrap()
}

#[test]
fn test_starting_position_in_progress() {
    let start = Board::new();
    for color in Color::BOTH {
        assert_eq!(
            classify(color, &start, &CastlingRights::all()),
            Ok(GameStatus::InProgress)
        );
    }
}

#[test]
fn test_back_rank_mate() {
    let mate = "
        R......k
        ......pp
        ........
        ........
        ........
        ........
        ........
        ......K.
    ";
    let result = status(mate, Color::Black);
    assert_eq!(
        result,
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
    assert!(result.is_terminal());
    assert_eq!(result.winner(), Some(Color::White));
}

#[test]
fn test_interposition_prevents_mate() {
    let blockable = "
        R......k
        ...r..pp
        ........
        ........
        ........
        ........
        ........
        ......K.
    ";
    assert_eq!(status(blockable, Color::Black), GameStatus::InProgress);
}

#[test]
fn test_queen_stalemate() {
    let stale = "
        .......k
        ........
        ......Q.
        ........
        ........
        ........
        ........
        K.......
    ";
    assert_eq!(status(stale, Color::Black), GameStatus::Stalemate);
    assert_eq!(status(stale, Color::White), GameStatus::InProgress);
    assert_eq!(
        has_any_legal_move(Color::Black, &board(stale), &CastlingRights::none()),
        Ok(false)
    );
}

#[test]
fn test_bare_kings_are_stalemate_for_both_sides() {
    let bare = "
        ........
        ........
        ...k....
        ........
        ...K....
        ........
        ........
        ........
    ";
    assert_eq!(status(bare, Color::White), GameStatus::Stalemate);
    assert_eq!(status(bare, Color::Black), GameStatus::Stalemate);
}

#[test]
fn test_smothered_mate() {
    let smothered = "
        ......rk
        .....Npp
        ........
        ........
        ........
        ........
        ........
        K.......
    ";
    assert_eq!(
        status(smothered, Color::Black),
        GameStatus::Checkmate {
            winner: Color::White
        }
    );
}

#[test]
fn test_missing_king() {
    let no_black_king = board(
        "
        ........
        ........
        ........
        ........
        ........
        ........
        p.......
        ....K...
        ",
    );
    assert_eq!(
        classify(Color::Black, &no_black_king, &CastlingRights::none()),
        Err(BoardError::MissingKing {
            color: Color::Black
        })
    );
}
