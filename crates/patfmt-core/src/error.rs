use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum CoreError {
    #[error("Invalid timezone: {0}")]
    InvalidTimezone(String),

    #[error("Unknown locale: {0}")]
    InvalidLocale(String),

    #[error("Invalid instant: {0}")]
    InvalidInstant(String),

    #[error("Instant out of range: {0} microseconds since the Unix epoch")]
    InstantOutOfRange(i64),
}
