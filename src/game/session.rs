#[cfg(feature = "logging")]
use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::history::{History, HistoryEntry};
use crate::board::{
    castle_check, check_move, classify, is_in_check, legal_destinations, Board, BoardError,
    BoardSnapshot, CastleSide, CastlingRights, Color, ColoredPiece, GameStatus, Move,
    MoveContext, MoveError, Square,
};

/// What an accepted move did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    pub mv: Move,
    /// The piece that moved, before any promotion
    pub piece: ColoredPiece,
    pub captured: Option<ColoredPiece>,
    pub castle: Option<CastleSide>,
    pub promoted: bool,
    /// Status for the side that moves next
    pub status: GameStatus,
    /// Number of the move just played
    pub move_number: u32,
}

/// Answer to a move request from a front end.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveResult {
    pub accepted: bool,
    pub rejection: Option<MoveError>,
    /// Board after the request, unchanged when rejected
    pub board: BoardSnapshot,
    pub captured: Option<ColoredPiece>,
    pub status: GameStatus,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum UndoResult {
    Undone {
        board: BoardSnapshot,
        move_number: u32,
        /// Piece the undone move had captured, now back on the board
        restored_capture: Option<ColoredPiece>,
    },
    NothingToUndo,
}

/// One game from a starting position.
///
/// The move counter starts at 1 and rises by one per half-move; odd numbers
/// are White's turn, even numbers Black's.
#[derive(Clone, Debug)]
pub struct GameSession {
    board: Board,
    rights: CastlingRights,
    move_number: u32,
    status: GameStatus,
    history: History,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Standard initial position, White to move.
    #[must_use]
    pub fn new() -> Self {
        GameSession {
            board: Board::new(),
            rights: CastlingRights::all(),
            move_number: 1,
            status: GameStatus::InProgress,
            history: History::new(),
        }
    }

    /// Start from an arbitrary position.
    ///
    /// Both kings must be present. With Black to move the counter starts at 2
    /// so that its parity still names the side to move.
    pub fn from_position(board: Board, side_to_move: Color, rights: CastlingRights) -> Result<Self, BoardError> {
        for color in Color::BOTH {
            board.find_king(color)?;
        }
        let status = classify(side_to_move, &board, &rights)?;
        let move_number = match side_to_move {
            Color::White => 1,
            Color::Black => 2,
        };
        Ok(GameSession {
            board,
            rights,
            move_number,
            status,
            history: History::new(),
        })
    }

    /// Back to the standard initial position with an empty history.
    pub fn reset(&mut self) {
        #[cfg(feature = "logging")]
        debug!("session reset");
        self.board = Board::new();
        self.rights = CastlingRights::all();
        self.move_number = 1;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.board.snapshot()
    }

    #[inline]
    #[must_use]
    pub const fn side_to_move(&self) -> Color {
        if self.move_number % 2 == 1 {
            Color::White
        } else {
            Color::Black
        }
    }

    #[inline]
    #[must_use]
    pub const fn move_number(&self) -> u32 {
        self.move_number
    }

    #[inline]
    #[must_use]
    pub const fn castling_rights(&self) -> CastlingRights {
        self.rights
    }

    /// Could `color` castle on `side` right now, if it were its turn?
    #[must_use]
    pub fn castling_available(&self, color: Color, side: CastleSide) -> bool {
        castle_check(color, side, &self.board, &self.rights).is_ok()
    }

    #[inline]
    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    /// Is the side to move in check?
    #[must_use]
    pub fn in_check(&self) -> bool {
        matches!(is_in_check(self.side_to_move(), &self.board), Ok(true))
    }

    /// Destinations for the piece on `from`; empty unless it belongs to the
    /// side to move and the game is still running.
    #[must_use]
    pub fn legal_destinations(&self, from: Square) -> Vec<Square> {
        if self.status.is_terminal() || self.board.color_on(from) != Some(self.side_to_move()) {
            return Vec::new();
        }
        legal_destinations(from, &self.board, &self.rights)
    }

    #[inline]
    #[must_use]
    pub fn history(&self) -> &History {
        &self.history
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }

    /// Play `from -> to` for the side to move.
    ///
    /// On any error the session is left exactly as it was.
    pub fn apply_move(&mut self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        if let Some(&sq) = [from, to].iter().find(|sq| !sq.is_on_board()) {
            return Err(MoveError::OffBoard(sq));
        }
        if self.status.is_terminal() {
            return Err(MoveError::GameOver(self.status));
        }
        let mover = self
            .board
            .piece_at(from)
            .filter(|p| p.color == self.side_to_move())
            .ok_or(MoveError::NoSelection)?;

        check_move(from, to, &self.board, &self.rights, MoveContext::Player)?;

        let mut board = self.board.clone();
        let applied = board.apply(from, to).ok_or(MoveError::NoSelection)?;
        let mut rights = self.rights;
        rights.record_departure(from, mover);
        let status = classify(mover.color.opponent(), &board, &rights)?;

        let mv = Move::new(from, to);
        let played = self.move_number;
        self.history.push(HistoryEntry {
            mv,
            board: std::mem::replace(&mut self.board, board),
            captured: applied.captured,
            castling: self.rights,
            status: self.status,
        });
        self.rights = rights;
        self.move_number += 1;
        self.status = status;

        #[cfg(feature = "logging")]
        debug!(
            "move {played}: {} {mv}{}{} -> {status}",
            mover.color,
            applied.captured.map_or(String::new(), |c| format!(" takes {}", c.piece)),
            if applied.promoted { " =Q" } else { "" },
        );

        Ok(MoveRecord {
            mv,
            piece: applied.piece,
            captured: applied.captured,
            castle: applied.castle,
            promoted: applied.promoted,
            status,
            move_number: played,
        })
    }

    /// Front-end form of [`apply_move`](Self::apply_move): `selection` is the
    /// square the player picked, if any.
    pub fn request_move(&mut self, selection: Option<Square>, to: Square) -> MoveResult {
        let outcome = match selection {
            Some(from) => self.apply_move(from, to),
            None => Err(MoveError::NoSelection),
        };
        let (accepted, rejection, captured) = match outcome {
            Ok(record) => (true, None, record.captured),
            Err(err) => (false, Some(err), None),
        };
        MoveResult {
            accepted,
            rejection,
            board: self.snapshot(),
            captured,
            status: self.status,
        }
    }

    /// Take back the last move, restoring board, castling flags, counter and
    /// status as they were before it.
    pub fn undo(&mut self) -> UndoResult {
        let Some(entry) = self.history.pop() else {
            return UndoResult::NothingToUndo;
        };
        self.board = entry.board;
        self.rights = entry.castling;
        self.status = entry.status;
        self.move_number -= 1;
        #[cfg(feature = "logging")]
        debug!("undo {} (move {})", entry.mv, self.move_number);

        UndoResult::Undone {
            board: self.board.snapshot(),
            move_number: self.move_number,
            restored_capture: entry.captured,
        }
    }

    /// Undo until the counter is back at `move_number`. Returns how many moves
    /// were taken back.
    pub fn undo_to(&mut self, move_number: u32) -> usize {
        let mut undone = 0;
        while self.move_number > move_number {
            match self.undo() {
                UndoResult::Undone { .. } => undone += 1,
                UndoResult::NothingToUndo => break,
            }
        }
        undone
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BoardBuilder, IllegalReason, Piece};

    fn sq(name: &str) -> Square {
        name.parse().unwrap()
    }

    #[test]
    fn test_new_session() {
        let game = GameSession::new();
        assert_eq!(game.side_to_move(), Color::White);
        assert_eq!(game.move_number(), 1);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.can_undo());
        assert!(!game.in_check());
    }

    #[test]
    fn test_turns_alternate() {
        let mut game = GameSession::new();
        game.apply_move(sq("e2"), sq("e4")).unwrap();
        assert_eq!(game.side_to_move(), Color::Black);
        assert_eq!(game.move_number(), 2);

        let err = game.apply_move(sq("d2"), sq("d4")).unwrap_err();
        assert_eq!(err, MoveError::NoSelection);
        assert_eq!(game.move_number(), 2);
    }

    #[test]
    fn test_empty_source_is_no_selection() {
        let mut game = GameSession::new();
        assert_eq!(
            game.apply_move(sq("e4"), sq("e5")),
            Err(MoveError::NoSelection)
        );
    }

    #[test]
    fn test_off_board_squares_rejected() {
        let mut game = GameSession::new();
        assert_eq!(
            game.apply_move(Square(8, 4), Square(4, 4)),
            Err(MoveError::OffBoard(Square(8, 4)))
        );
        assert_eq!(
            game.apply_move(sq("e2"), Square(4, 9)),
            Err(MoveError::OffBoard(Square(4, 9)))
        );
        let result = game.request_move(Some(Square(6, 12)), sq("e4"));
        assert_eq!(result.rejection, Some(MoveError::OffBoard(Square(6, 12))));
        assert!(game.legal_destinations(Square(9, 9)).is_empty());
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn test_rejected_move_leaves_state() {
        let mut game = GameSession::new();
        let before = game.board().clone();
        let err = game.apply_move(sq("e2"), sq("e5")).unwrap_err();
        assert_eq!(err, MoveError::Illegal(IllegalReason::WrongShape));
        assert_eq!(game.board(), &before);
        assert!(!game.can_undo());
    }

    #[test]
    fn test_undo_restores_capture() {
        let mut game = GameSession::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            game.apply_move(sq(from), sq(to)).unwrap();
        }
        let record = game.apply_move(sq("e4"), sq("d5")).unwrap();
        assert_eq!(
            record.captured,
            Some(ColoredPiece::new(Color::Black, Piece::Pawn))
        );

        match game.undo() {
            UndoResult::Undone {
                move_number,
                restored_capture,
                board,
            } => {
                assert_eq!(move_number, 3);
                assert_eq!(
                    restored_capture,
                    Some(ColoredPiece::new(Color::Black, Piece::Pawn))
                );
                assert_eq!(
                    board.get(sq("d5")),
                    Some(ColoredPiece::new(Color::Black, Piece::Pawn))
                );
            }
            UndoResult::NothingToUndo => panic!("expected an undo"),
        }
        assert_eq!(game.side_to_move(), Color::White);
    }

    #[test]
    fn test_undo_on_empty_history() {
        let mut game = GameSession::new();
        assert_eq!(game.undo(), UndoResult::NothingToUndo);
        assert_eq!(game.move_number(), 1);
    }

    #[test]
    fn test_undo_to() {
        let mut game = GameSession::new();
        for (from, to) in [("e2", "e4"), ("e7", "e5"), ("g1", "f3"), ("b8", "c6")] {
            game.apply_move(sq(from), sq(to)).unwrap();
        }
        assert_eq!(game.undo_to(2), 3);
        assert_eq!(game.move_number(), 2);
        assert_eq!(game.history().moves().collect::<Vec<_>>(), vec![Move::new(sq("e2"), sq("e4"))]);
        assert_eq!(game.undo_to(5), 0);
    }

    #[test]
    fn test_fools_mate_ends_game() {
        let mut game = GameSession::new();
        for (from, to) in [("f2", "f3"), ("e7", "e5"), ("g2", "g4")] {
            game.apply_move(sq(from), sq(to)).unwrap();
        }
        let record = game.apply_move(sq("d8"), sq("h4")).unwrap();
        let mate = GameStatus::Checkmate {
            winner: Color::Black,
        };
        assert_eq!(record.status, mate);
        assert!(game.in_check());
        assert_eq!(
            game.apply_move(sq("a2"), sq("a3")),
            Err(MoveError::GameOver(mate))
        );
        assert!(game.legal_destinations(sq("a2")).is_empty());

        game.undo();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.apply_move(sq("d8"), sq("h4")).is_ok());
    }

    #[test]
    fn test_castling_updates_rights() {
        let mut game = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("h1"), Color::White, Piece::Rook)
            .piece(sq("a1"), Color::White, Piece::Rook)
            .piece(sq("e8"), Color::Black, Piece::King)
            .castle_kingside(Color::White)
            .castle_queenside(Color::White)
            .build_session()
            .unwrap();
        assert!(game.castling_available(Color::White, CastleSide::Kingside));

        let record = game.apply_move(sq("e1"), sq("g1")).unwrap();
        assert_eq!(record.castle, Some(CastleSide::Kingside));
        assert_eq!(
            game.board().piece_at(sq("f1")),
            Some(ColoredPiece::new(Color::White, Piece::Rook))
        );
        assert!(game.castling_rights().king_moved(Color::White));
        assert!(!game.castling_available(Color::White, CastleSide::Queenside));

        game.undo();
        assert!(game.castling_available(Color::White, CastleSide::Kingside));
        assert!(game.castling_available(Color::White, CastleSide::Queenside));
    }

    #[test]
    fn test_black_to_move_starts_at_two() {
        let game = BoardBuilder::new()
            .piece(sq("e1"), Color::White, Piece::King)
            .piece(sq("e8"), Color::Black, Piece::King)
            .piece(sq("a7"), Color::Black, Piece::Pawn)
            .side_to_move(Color::Black)
            .build_session()
            .unwrap();
        assert_eq!(game.move_number(), 2);
        assert_eq!(game.side_to_move(), Color::Black);
    }

    #[test]
    fn test_request_move_without_selection() {
        let mut game = GameSession::new();
        let result = game.request_move(None, sq("e4"));
        assert!(!result.accepted);
        assert_eq!(result.rejection, Some(MoveError::NoSelection));
        assert_eq!(result.board, game.snapshot());
    }

    #[test]
    fn test_request_move_reports_capture() {
        let mut game = GameSession::new();
        for (from, to) in [("e2", "e4"), ("d7", "d5")] {
            assert!(game.request_move(Some(sq(from)), sq(to)).accepted);
        }
        let result = game.request_move(Some(sq("e4")), sq("d5"));
        assert!(result.accepted);
        assert_eq!(result.rejection, None);
        assert_eq!(
            result.captured,
            Some(ColoredPiece::new(Color::Black, Piece::Pawn))
        );
        assert_eq!(result.status, GameStatus::InProgress);
    }

    #[test]
    fn test_reset() {
        let mut game = GameSession::new();
        game.apply_move(sq("e2"), sq("e4")).unwrap();
        game.reset();
        assert_eq!(game.board(), &Board::new());
        assert_eq!(game.move_number(), 1);
        assert!(!game.can_undo());
    }
}
