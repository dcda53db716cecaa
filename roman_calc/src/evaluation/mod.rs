use error::EvalError;

pub use self::decimal::Decimal;

pub mod decimal;
pub mod error;

pub type EvalResult = Result<Decimal, EvalError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    pub const SYMBOLS: [char; 4] = ['+', '-', '*', '/'];

    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    pub fn apply(&self, lhs: i64, rhs: i64) -> EvalResult {
        let checked = |result: Option<i64>| result.ok_or(EvalError::Overflow);

        match self {
            Operator::Add => Decimal::from_integer(checked(lhs.checked_add(rhs))?),
            Operator::Sub => Decimal::from_integer(checked(lhs.checked_sub(rhs))?),
            Operator::Mul => Decimal::from_integer(checked(lhs.checked_mul(rhs))?),
            Operator::Div => Decimal::divide(lhs, rhs),
        }
    }
}

pub fn evaluate(lhs: i64, operator: Operator, rhs: i64) -> EvalResult {
    let result = operator.apply(lhs, rhs);
    log::debug!("{lhs} {operator} {rhs} = {result:?}");
    result
}

/// Evaluates with an operator given as a raw character.
pub fn apply(lhs: i64, operator: char, rhs: i64) -> EvalResult {
    evaluate(lhs, Operator::try_from(operator)?, rhs)
}
