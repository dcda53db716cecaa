//! Calculator for single binary expressions written either with Arabic
//! operands (`0`..=`10`) or with Roman operands made of `I`, `V` and `X`.
//!
//! ```
//! use roman_calc::calculate;
//!
//! assert_eq!(calculate("X + V").unwrap().to_string(), "XV");
//! assert_eq!(calculate("7 / 2").unwrap().to_string(), "3.5");
//! ```

use thiserror::Error;

use evaluation::{error::EvalError, Decimal};
use expression::{error::ExpressionError, NumeralSystem};
use numeral::{error::NumeralError, RomanNumeral};

mod convert;
mod display;
pub mod evaluation;
pub mod expression;
pub mod numeral;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    #[error(transparent)]
    Expression(#[from] ExpressionError),
    #[error(transparent)]
    Eval(#[from] EvalError),
    #[error(transparent)]
    Numeral(#[from] NumeralError),
}

/// Result of one line, formatted in the numeral system of its operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Answer {
    Roman(RomanNumeral),
    Arabic(Decimal),
}

impl Answer {
    pub fn system(&self) -> NumeralSystem {
        match self {
            Answer::Roman(_) => NumeralSystem::Roman,
            Answer::Arabic(_) => NumeralSystem::Arabic,
        }
    }
}

/// Recognizes, evaluates and formats one input line.
///
/// Roman results drop any fraction before being encoded, so they must land in
/// `(0, 4000]` after truncation.
pub fn calculate(input: &str) -> Result<Answer, CalcError> {
    let expression = expression::recognize(input)?;
    let value = expression.evaluate()?;
    log::debug!("{expression} = {value}");

    let answer = match expression.system {
        NumeralSystem::Roman => Answer::Roman(RomanNumeral::try_from(value)?),
        NumeralSystem::Arabic => Answer::Arabic(value),
    };

    Ok(answer)
}

#[macro_export]
macro_rules! calc_it {
    ($input:expr) => {
        $crate::calculate($input).unwrap().to_string()
    };
}

#[cfg(test)]
mod tests {
    use crate::{
        calculate,
        evaluation::error::EvalError,
        expression::{error::ExpressionError, NumeralSystem},
        numeral::error::NumeralError,
        CalcError,
    };

    #[test]
    fn test_arabic_expression() {
        assert_eq!(calc_it!("2 + 3"), "5");
        assert_eq!(calc_it!("7 / 2"), "3.5");
        assert_eq!(calc_it!("1 - 10"), "-9");
        assert_eq!(calc_it!("10 * 10"), "100");
        assert_eq!(calc_it!("2 / 3"), "0.67");
    }

    #[test]
    fn test_roman_expression() {
        assert_eq!(calc_it!("X + V"), "XV");
        assert_eq!(calc_it!("V * III"), "XV");
        assert_eq!(calc_it!("x * x"), "C");
        assert_eq!(calc_it!("X / III"), "III");
        assert_eq!(calc_it!("XXX * XXX"), "CM");
    }

    #[test]
    fn test_answer_system() {
        assert_eq!(calculate("I + I").unwrap().system(), NumeralSystem::Roman);
        assert_eq!(calculate("1 + 1").unwrap().system(), NumeralSystem::Arabic);
    }

    #[test]
    fn test_roman_result_out_of_range() {
        assert_eq!(
            calculate("I - II"),
            Err(CalcError::Numeral(NumeralError::OutOfRange(-1)))
        );
        assert_eq!(
            calculate("V - V"),
            Err(CalcError::Numeral(NumeralError::OutOfRange(0)))
        );
        assert_eq!(
            calculate("I / II"),
            Err(CalcError::Numeral(NumeralError::OutOfRange(0)))
        );
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            calculate("IIII + I"),
            Err(CalcError::Expression(ExpressionError::UnrecognizedFormat("IIII + I".into())))
        );
        assert_eq!(
            calculate("11 + 1"),
            Err(CalcError::Expression(ExpressionError::InvalidOperandRange(11)))
        );
        assert_eq!(calculate("5 / 0"), Err(CalcError::Eval(EvalError::DivisionByZero)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            calculate("abc").unwrap_err().to_string(),
            "Invalid input format: `abc`"
        );
        assert_eq!(
            calculate("I - V").unwrap_err().to_string(),
            "`-4` must be within the range (0, 4000]"
        );
    }
}
