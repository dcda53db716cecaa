use thiserror::Error;

use crate::numeral::error::NumeralError;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExpressionError {
    #[error("Invalid input format: `{0}`")]
    UnrecognizedFormat(String),
    #[error("Operand `{0}` must be between 0 and 10")]
    InvalidOperandRange(i64),
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}
