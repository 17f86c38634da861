use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Chunks must hold at least one element.
    #[error("Invalid chunk size: {0}")]
    InvalidChunkSize(isize),
}

pub type Result<T> = std::result::Result<T, Error>;
