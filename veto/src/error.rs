use crate::model::SubMode;

/// Errors raised by the veto engine and its map pool.
///
/// A rejected action never changes engine state, so every variant is
/// recoverable by retrying with different input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VetoError {
    #[error("invalid state: {0}")]
    InvalidState(String),
    #[error("invalid action: {0}")]
    InvalidAction(String),
    #[error("{map:?} not found in the {mode} pool")]
    NotFound { mode: SubMode, map: String },
}

/// Failures when assembling a match record.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("exactly 2 distinct teams required, got {0}")]
    InvalidTeamCount(usize),
    #[error("best-of must be an odd positive number, got {0}")]
    InvalidBestOf(u32),
    #[error("best-of {best_of} needs at least {best_of} maps, only {available} selected")]
    InsufficientMaps { best_of: u32, available: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown game title {0:?}")]
    UnknownTitle(String),
    #[error("unknown side {0:?}")]
    UnknownSide(String),
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("{0} requires an argument")]
    MissingArgument(&'static str),
}
