//! Error type shared by every stage of the search.

use std::io;

use thiserror::Error;

/// Top-level error type for the crate.
#[derive(Debug, Error)]
pub enum RCalcError {
    /// The desired value is missing, unparseable or not strictly positive.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A combination or match step received a value outside its domain.
    #[error("domain error: {0}")]
    Domain(String),
    /// Input ended before a valid desired value was read.
    #[error("input ended before a valid value was entered")]
    EndOfInput,
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, RCalcError>;
