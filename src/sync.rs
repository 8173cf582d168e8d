//! Sharing one game between threads.
//!
//! The rules engine itself is single-threaded. A front end that hands the same
//! game to several threads wraps it here so that moves and undos are
//! serialised.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::board::{BoardSnapshot, GameStatus, MoveError, Square};
use crate::game::{GameSession, MoveRecord, UndoResult};

/// A cloneable handle to one locked [`GameSession`].
#[derive(Clone, Debug, Default)]
pub struct SharedSession(Arc<Mutex<GameSession>>);

impl SharedSession {
    #[must_use]
    pub fn new() -> Self {
        SharedSession(Arc::new(Mutex::new(GameSession::new())))
    }

    #[inline]
    pub fn apply_move(&self, from: Square, to: Square) -> Result<MoveRecord, MoveError> {
        self.0.lock().apply_move(from, to)
    }

    #[inline]
    pub fn undo(&self) -> UndoResult {
        self.0.lock().undo()
    }

    #[must_use]
    pub fn snapshot(&self) -> BoardSnapshot {
        self.0.lock().snapshot()
    }

    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.0.lock().status()
    }

    /// Run `f` against the session while holding the lock.
    pub fn with<R>(&self, f: impl FnOnce(&GameSession) -> R) -> R {
        f(&self.0.lock())
    }

    /// Run `f` against the session mutably while holding the lock.
    pub fn with_mut<R>(&self, f: impl FnOnce(&mut GameSession) -> R) -> R {
        f(&mut self.0.lock())
    }
}

impl From<GameSession> for SharedSession {
    fn from(session: GameSession) -> Self {
        SharedSession(Arc::new(Mutex::new(session)))
    }
}
