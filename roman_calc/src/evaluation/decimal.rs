use super::error::EvalError;

const SCALE: i64 = 100;

/// Fixed-point number with two fractional digits, stored as hundredths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Decimal {
    hundredths: i64,
}

impl Decimal {
    pub fn from_integer(n: i64) -> Result<Self, EvalError> {
        n.checked_mul(SCALE)
            .map(|hundredths| Self { hundredths })
            .ok_or(EvalError::Overflow)
    }

    /// Divides to two fractional digits, rounding to nearest with ties toward zero.
    pub fn divide(dividend: i64, divisor: i64) -> Result<Self, EvalError> {
        if divisor == 0 {
            return Err(EvalError::DivisionByZero);
        }

        let scaled = dividend.checked_mul(SCALE).ok_or(EvalError::Overflow)?;
        let quotient = scaled.checked_div(divisor).ok_or(EvalError::Overflow)?;
        let remainder = scaled % divisor;

        let hundredths = if 2 * remainder.unsigned_abs() > divisor.unsigned_abs() {
            quotient + scaled.signum() * divisor.signum()
        } else {
            quotient
        };

        Ok(Self { hundredths })
    }

    /// Integer part, dropping the fraction toward zero.
    pub fn trunc(&self) -> i64 {
        self.hundredths / SCALE
    }

    pub fn is_negative(&self) -> bool {
        self.hundredths < 0
    }

    pub(crate) fn integer_part(&self) -> u64 {
        self.hundredths.unsigned_abs() / SCALE as u64
    }

    pub(crate) fn fractional_part(&self) -> u64 {
        self.hundredths.unsigned_abs() % SCALE as u64
    }
}
