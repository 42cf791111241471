//! Error types for Masthead Core

use crate::limits::ValidationError;
use thiserror::Error;

/// Result type alias using Masthead's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Masthead error types
#[derive(Error, Debug)]
pub enum Error {
    /// A field received a value of the wrong fundamental type
    #[error("Type error: {field} must be a string, got {found}")]
    Type {
        field: &'static str,
        found: &'static str,
    },

    /// A string field violated a length bound
    #[error("Range error: {0}")]
    Range(#[from] ValidationError),

    /// A field that is fixed after construction was written to
    #[error("Immutable field: {field} cannot be changed once set")]
    ImmutableField { field: &'static str },
}

/// Coarse classification of an [`Error`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Type,
    Range,
    ImmutableField,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Range(_) => ErrorKind::Range,
            Self::ImmutableField { .. } => ErrorKind::ImmutableField,
        }
    }
}
