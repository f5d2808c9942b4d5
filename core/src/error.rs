use alloc::string::String;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("A spin is already in flight")]
    SpinInFlight,
    #[error("Could not write attempt count: {0}")]
    Storage(String),
}

pub type Result<T> = core::result::Result<T, GameError>;
