use thiserror::Error;

use crate::field::ValueRange;

/// Errors raised by date construction, field access and date arithmetic.
///
/// All validation happens eagerly, at constructors and at each `with`/`plus`
/// call boundary. None of these conditions are transient; they always
/// indicate bad input and are propagated rather than retried.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The field is not resolvable, neither by the calendar nor by the field
    /// itself.
    #[error("unsupported field: {0}")]
    UnsupportedField(&'static str),

    /// A field value fell outside its valid range.
    #[error("invalid value for {field}: {value} is outside {range}")]
    InvalidValue {
        field: &'static str,
        value: i64,
        range: ValueRange,
    },

    /// An era value other than 0 (before AM) or 1 (AM).
    #[error("invalid era value: {0}")]
    InvalidEra(i64),

    /// Unit arithmetic overflowed the i64 range.
    #[error("date arithmetic overflowed")]
    ArithmeticOverflow,
}
