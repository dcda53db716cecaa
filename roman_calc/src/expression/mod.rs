use lazy_static::lazy_static;
use regex::{Captures, Regex};

use crate::evaluation::{self, EvalResult};
use crate::numeral::from_roman;
use error::ExpressionError;

pub mod error;

pub const MIN_ARABIC_OPERAND: i64 = 0;
pub const MAX_ARABIC_OPERAND: i64 = 10;

lazy_static! {
    static ref ROMAN_EXPRESSION: Regex =
        Regex::new(r"^\s*([XIVxiv]{1,3})\s*([-+*/])\s*([XIVxiv]{1,3})\s*$").unwrap();
    static ref ARABIC_EXPRESSION: Regex =
        Regex::new(r"^\s*([0-9]{1,2})\s*([-+*/])\s*([0-9]{1,2})$").unwrap();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NumeralSystem {
    Roman,
    Arabic,
}

/// Operand texts and operator captured by one of the grammars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawExpression<'a> {
    pub lhs: &'a str,
    pub operator: char,
    pub rhs: &'a str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Expression {
    pub lhs: i64,
    pub operator: char,
    pub rhs: i64,
    pub system: NumeralSystem,
}

impl Expression {
    pub fn evaluate(&self) -> EvalResult {
        evaluation::apply(self.lhs, self.operator, self.rhs)
    }
}

fn to_raw_expression(captures: Captures<'_>) -> Option<RawExpression<'_>> {
    Some(RawExpression {
        lhs: captures.get(1)?.as_str(),
        operator: captures.get(2)?.as_str().chars().next()?,
        rhs: captures.get(3)?.as_str(),
    })
}

/// Two operands of one to three characters from `{X, I, V}`, in either case.
pub fn match_roman(input: &str) -> Option<RawExpression<'_>> {
    ROMAN_EXPRESSION.captures(input).and_then(to_raw_expression)
}

/// Two operands of one or two decimal digits.
pub fn match_arabic(input: &str) -> Option<RawExpression<'_>> {
    ARABIC_EXPRESSION.captures(input).and_then(to_raw_expression)
}

fn parse_arabic_operand(operand: &str) -> Result<i64, ExpressionError> {
    let value = operand
        .parse::<i64>()
        .map_err(|_| ExpressionError::UnrecognizedFormat(operand.to_string()))?;

    if !(MIN_ARABIC_OPERAND..=MAX_ARABIC_OPERAND).contains(&value) {
        return Err(ExpressionError::InvalidOperandRange(value));
    }

    Ok(value)
}

/// Classifies a line as a Roman or Arabic expression and decodes its operands.
///
/// The Roman grammar is tried first; a line matching neither grammar yields
/// [`ExpressionError::UnrecognizedFormat`].
pub fn recognize(input: &str) -> Result<Expression, ExpressionError> {
    if let Some(raw) = match_roman(input) {
        log::debug!("roman expression: {raw:?}");
        return Ok(Expression {
            lhs: from_roman(raw.lhs)? as i64,
            operator: raw.operator,
            rhs: from_roman(raw.rhs)? as i64,
            system: NumeralSystem::Roman,
        });
    }

    if let Some(raw) = match_arabic(input) {
        log::debug!("arabic expression: {raw:?}");
        return Ok(Expression {
            lhs: parse_arabic_operand(raw.lhs)?,
            operator: raw.operator,
            rhs: parse_arabic_operand(raw.rhs)?,
            system: NumeralSystem::Arabic,
        });
    }

    Err(ExpressionError::UnrecognizedFormat(input.to_string()))
}
