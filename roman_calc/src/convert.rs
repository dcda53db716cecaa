use crate::{
    evaluation::{error::EvalError, Decimal, Operator},
    numeral::{error::NumeralError, RomanNumeral},
};

impl TryFrom<char> for Operator {
    type Error = EvalError;

    fn try_from(symbol: char) -> Result<Self, Self::Error> {
        match symbol {
            '+' => Ok(Operator::Add),
            '-' => Ok(Operator::Sub),
            '*' => Ok(Operator::Mul),
            '/' => Ok(Operator::Div),
            other => Err(EvalError::UnknownOperator(other)),
        }
    }
}

impl From<Operator> for char {
    fn from(operator: Operator) -> Self {
        operator.symbol()
    }
}

impl TryFrom<u32> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        RomanNumeral::new(value.into())
    }
}

impl TryFrom<i64> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        RomanNumeral::new(value)
    }
}

impl TryFrom<Decimal> for RomanNumeral {
    type Error = NumeralError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        RomanNumeral::new(value.trunc())
    }
}

impl From<RomanNumeral> for u32 {
    fn from(numeral: RomanNumeral) -> Self {
        numeral.value()
    }
}

impl TryFrom<i64> for Decimal {
    type Error = EvalError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        Decimal::from_integer(n)
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        evaluation::{error::EvalError, Decimal, Operator},
        numeral::{error::NumeralError, RomanNumeral},
    };

    #[test]
    fn test_operator_from_char() {
        assert_eq!(Operator::try_from('-'), Ok(Operator::Sub));
        assert_eq!(Operator::try_from('^'), Err(EvalError::UnknownOperator('^')));
        assert_eq!(char::from(Operator::Mul), '*');
    }

    #[test]
    fn test_roman_numeral_from_decimal() {
        let third = Decimal::divide(10, 3).unwrap();
        assert_eq!(RomanNumeral::try_from(third).map(u32::from), Ok(3));

        let half = Decimal::divide(1, 2).unwrap();
        assert_eq!(RomanNumeral::try_from(half), Err(NumeralError::OutOfRange(0)));
    }

    #[test]
    fn test_roman_numeral_from_integer() {
        assert_eq!(RomanNumeral::try_from(15u32).map(u32::from), Ok(15));
        assert_eq!(RomanNumeral::try_from(-2i64), Err(NumeralError::OutOfRange(-2)));
    }
}
