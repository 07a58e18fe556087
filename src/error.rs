//! Error types for input parsing and the run pipeline.

use thiserror::Error;

/// Why a bound could not be parsed from input text.
///
/// Never surfaces from [`read_n`](crate::input::read_n), which substitutes
/// [`DEFAULT_N`](crate::input::DEFAULT_N) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("no input token")]
    Empty,

    #[error("token does not start with an integer: {token:?}")]
    Invalid { token: String },

    #[error("integer out of 64-bit range: {digits}")]
    OutOfRange { digits: String },
}

/// Errors from a full read-compute-write run.
#[derive(Error, Debug)]
pub enum SumError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SumResult<T> = Result<T, SumError>;
