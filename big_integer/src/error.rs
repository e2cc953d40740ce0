use thiserror::Error;

/// Error returned when parsing a [`BigInt`](crate::BigInt) from decimal text fails.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseBigIntError {
    #[error("cannot parse integer from empty string")]
    Empty,

    #[error("invalid digit {ch:?} at byte {index}")]
    InvalidDigit { ch: char, index: usize },
}
