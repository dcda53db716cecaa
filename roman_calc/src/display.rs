use std::fmt::Formatter;

use crate::{
    evaluation::{Decimal, Operator},
    expression::{Expression, NumeralSystem},
    numeral::RomanNumeral,
    Answer,
};

impl std::fmt::Display for RomanNumeral {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.encode())
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

// Trailing zeros of the fraction are dropped: `5`, `3.5`, `0.05`.
impl std::fmt::Display for Decimal {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let sign = if self.is_negative() { "-" } else { "" };
        let integer = self.integer_part();
        let fraction = self.fractional_part();

        match fraction {
            0 => write!(f, "{sign}{integer}"),
            n if n % 10 == 0 => write!(f, "{sign}{integer}.{}", n / 10),
            n => write!(f, "{sign}{integer}.{n:02}"),
        }
    }
}

impl std::fmt::Display for NumeralSystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            NumeralSystem::Roman => write!(f, "roman"),
            NumeralSystem::Arabic => write!(f, "arabic"),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {} ({})", self.lhs, self.operator, self.rhs, self.system)
    }
}

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Answer::Roman(numeral) => write!(f, "{}", numeral),
            Answer::Arabic(value) => write!(f, "{}", value),
        }
    }
}
