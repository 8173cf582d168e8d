pub mod board;
pub mod driver;
pub mod game;
pub mod sync;

pub use board::{Board, CastleSide, CastlingRights, Color, GameStatus, Move, Piece, Square};
pub use game::GameSession;
pub use sync::SharedSession;
