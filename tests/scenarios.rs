use chess_rules::board::{
    classify, BoardBuilder, CastleSide, CastlingRights, ColoredPiece, IllegalReason, MoveError,
};
use chess_rules::{Board, Color, GameSession, GameStatus, Piece, Square};

fn sq(name: &str) -> Square {
    name.parse().unwrap()
}

fn play(game: &mut GameSession, moves: &[&str]) {
    for text in moves {
        let mv: chess_rules::Move = text.parse().unwrap();
        game.apply_move(mv.from, mv.to)
            .unwrap_or_else(|err| panic!("{text} rejected: {err}"));
    }
}

#[test]
fn pawn_double_step_from_start() {
    let mut game = GameSession::new();
    let record = game.apply_move(sq("e2"), sq("e4")).unwrap();
    assert_eq!(record.captured, None);
    assert!(game.board().is_empty(sq("e2")));
    assert_eq!(
        game.board().piece_at(sq("e4")),
        Some(ColoredPiece::new(Color::White, Piece::Pawn))
    );

    for blocker in ["e3", "e4"] {
        let mut game = BoardBuilder::starting_position()
            .piece(sq(blocker), Color::Black, Piece::Knight)
            .build_session()
            .unwrap();
        assert_eq!(
            game.apply_move(sq("e2"), sq("e4")),
            Err(MoveError::Illegal(IllegalReason::BlockedPath))
        );
    }
}

#[test]
fn check_on_open_file_must_be_answered() {
    let mut game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("b1"), Color::White, Piece::Knight)
        .piece(sq("a4"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::Rook)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build_session()
        .unwrap();
    assert!(game.in_check());

    for (from, to) in [("b1", "c3"), ("b1", "d2"), ("a4", "a5"), ("e1", "e2")] {
        assert_eq!(
            game.apply_move(sq(from), sq(to)),
            Err(MoveError::Illegal(IllegalReason::KingInCheckUnresolved)),
            "{from}{to}"
        );
    }
    assert_eq!(game.move_number(), 1);
    assert!(game.apply_move(sq("a4"), sq("e4")).is_ok());
}

#[test]
fn kingside_castle_relocates_rook() {
    let mut game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("a1"), Color::White, Piece::Rook)
        .piece(sq("h1"), Color::White, Piece::Rook)
        .piece(sq("e8"), Color::Black, Piece::King)
        .castle_kingside(Color::White)
        .castle_queenside(Color::White)
        .build_session()
        .unwrap();

    let record = game.apply_move(sq("e1"), sq("g1")).unwrap();
    assert_eq!(record.castle, Some(CastleSide::Kingside));
    let rook = Some(ColoredPiece::new(Color::White, Piece::Rook));
    assert_eq!(game.board().piece_at(sq("f1")), rook);
    assert_eq!(game.board().piece_at(sq("a1")), rook);
    assert!(game.board().is_empty(sq("h1")));
    assert!(game.board().is_empty(sq("e1")));
}

#[test]
fn bare_kings_are_stalemate() {
    let board = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build();
    for color in Color::BOTH {
        assert_eq!(
            classify(color, &board, &CastlingRights::none()),
            Ok(GameStatus::Stalemate)
        );
    }

    let mut game = BoardBuilder::new()
        .piece(sq("a1"), Color::White, Piece::King)
        .piece(sq("b3"), Color::White, Piece::Knight)
        .piece(sq("c2"), Color::Black, Piece::Bishop)
        .piece(sq("h8"), Color::Black, Piece::King)
        .build_session()
        .unwrap();
    let record = game.apply_move(sq("a1"), sq("b2")).unwrap();
    assert_eq!(record.status, GameStatus::InProgress);
    let record = game.apply_move(sq("c2"), sq("b3")).unwrap();
    assert_eq!(record.status, GameStatus::InProgress);
    let record = game.apply_move(sq("b2"), sq("b3")).unwrap();
    assert_eq!(record.status, GameStatus::Stalemate);
    assert_eq!(
        game.apply_move(sq("h8"), sq("h7")),
        Err(MoveError::GameOver(GameStatus::Stalemate))
    );
}

#[test]
fn pawns_promote_to_queens() {
    let mut game = BoardBuilder::new()
        .piece(sq("e1"), Color::White, Piece::King)
        .piece(sq("b7"), Color::White, Piece::Pawn)
        .piece(sq("g2"), Color::Black, Piece::Pawn)
        .piece(sq("h5"), Color::Black, Piece::King)
        .build_session()
        .unwrap();

    let record = game.apply_move(sq("b7"), sq("b8")).unwrap();
    assert!(record.promoted);
    assert_eq!(
        game.board().piece_at(sq("b8")),
        Some(ColoredPiece::new(Color::White, Piece::Queen))
    );

    let record = game.apply_move(sq("g2"), sq("g1")).unwrap();
    assert!(record.promoted);
    assert_eq!(record.piece, ColoredPiece::new(Color::Black, Piece::Pawn));
    assert_eq!(
        game.board().piece_at(sq("g1")),
        Some(ColoredPiece::new(Color::Black, Piece::Queen))
    );

    game.undo();
    assert_eq!(
        game.board().piece_at(sq("g2")),
        Some(ColoredPiece::new(Color::Black, Piece::Pawn))
    );
    assert!(game.board().is_empty(sq("g1")));
}

#[test]
fn fools_mate() {
    let mut game = GameSession::new();
    play(&mut game, &["f2f3", "e7e5", "g2g4", "d8h4"]);
    assert_eq!(
        game.status(),
        GameStatus::Checkmate {
            winner: Color::Black
        }
    );
    assert!(game.in_check());
    assert_eq!(game.side_to_move(), Color::White);
}

#[test]
fn full_undo_returns_to_start() {
    let mut game = GameSession::new();
    play(
        &mut game,
        &["e2e4", "e7e5", "g1f3", "b8c6", "f1c4", "g8f6", "e1g1", "f6e4"],
    );
    assert!(game.castling_rights().king_moved(Color::White));
    assert_eq!(game.history().len(), 8);

    assert_eq!(game.undo_to(1), 8);
    assert_eq!(game.board(), &Board::new());
    assert_eq!(game.castling_rights(), CastlingRights::all());
    assert_eq!(game.move_number(), 1);
}
