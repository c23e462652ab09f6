use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("incorrect dimensions of the maze")]
    Dimension,
    #[error("incorrect maze structure")]
    Structure,
    #[error("incorrect data about the beginning or end of the way")]
    Endpoint,
    #[error("the way was not found")]
    NoPath,
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// True for the errors raised while turning raw input into a query.
    pub fn is_validation(&self) -> bool {
        match self {
            Error::Dimension | Error::Structure | Error::Endpoint => true,
            Error::NoPath | Error::Io(_) => false,
        }
    }
}
