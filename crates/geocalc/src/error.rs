//! Error type shared by all shape constructors and dispatchers.
//!
//! Two kinds only:
//! - `Type`: an argument is not a number, or a record does not describe a shape.
//!   Only the dynamic boundary (`operand`) can produce it; typed callers never see it.
//! - `Value`: a number lies outside the shape's domain (negative radius,
//!   non-positive side, degenerate triangle, non-finite input).

use std::fmt;

/// Coarse classification of a [`ShapeError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Type,
    Value,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Type => write!(f, "type"),
            ErrorKind::Value => write!(f, "value"),
        }
    }
}

/// Validation failure raised while building or dispatching a shape.
#[derive(Clone, Debug, PartialEq)]
pub enum ShapeError {
    Type { reason: String },
    Value { reason: String },
}

impl ShapeError {
    pub fn type_mismatch(reason: impl Into<String>) -> Self {
        Self::Type {
            reason: reason.into(),
        }
    }

    pub fn out_of_domain(reason: impl Into<String>) -> Self {
        Self::Value {
            reason: reason.into(),
        }
    }

    #[inline]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Type { .. } => ErrorKind::Type,
            Self::Value { .. } => ErrorKind::Value,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            Self::Type { reason } | Self::Value { reason } => reason,
        }
    }
}

impl fmt::Display for ShapeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type { reason } => write!(f, "type error: {reason}"),
            Self::Value { reason } => write!(f, "value error: {reason}"),
        }
    }
}

impl std::error::Error for ShapeError {}
