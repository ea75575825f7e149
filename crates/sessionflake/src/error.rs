use crate::encoder::Field;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors returned by bucketing and session id encoding.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum Error {
    #[error("expected 5 fields (year, month, day, hour, minute), got {got}")]
    Arity { got: usize },
    #[error(
        "{field} (field {}) out of range: {value}; expected 0..{}",
        .field.index() + 1,
        .field.limit()
    )]
    OutOfRange { field: Field, value: i64 },
    #[error("instant cannot be decomposed into a calendar time: {0}")]
    InvalidInstant(String),
    #[error("unknown time zone: {0}")]
    UnknownTimeZone(String),
}
