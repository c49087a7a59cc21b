use thiserror::Error;

use crate::levels::LevelId;

/// Rejected game transitions. None of these change state; screens may
/// simply ignore them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("level {0} does not exist")]
    UnknownLevel(LevelId),
    #[error("level {id} is locked until level {prev} is completed", id = .0, prev = .0.saturating_sub(1))]
    LevelLocked(LevelId),
    #[error("no level is being played")]
    NotPlaying,
}
