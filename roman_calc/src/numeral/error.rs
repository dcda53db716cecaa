use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumeralError {
    #[error("`{0}` cannot be converted to an arabic number")]
    Malformed(String),
    #[error("`{0}` must be within the range (0, 4000]")]
    OutOfRange(i64),
}
