use std::str::FromStr;

use error::NumeralError;

pub mod error;

pub const MIN_VALUE: u32 = 1;
pub const MAX_VALUE: u32 = 4000;

/// Subtractive-notation tokens in strictly descending value order.
///
/// Both conversion directions walk this table front to back.
pub const SYMBOL_TABLE: [(&str, u32); 13] = [
    ("M", 1000),
    ("CM", 900),
    ("D", 500),
    ("CD", 400),
    ("C", 100),
    ("XC", 90),
    ("L", 50),
    ("XL", 40),
    ("X", 10),
    ("IX", 9),
    ("V", 5),
    ("IV", 4),
    ("I", 1),
];

/// An integer known to lie in `(0, 4000]`, rendered in canonical Roman form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RomanNumeral(u32);

impl RomanNumeral {
    pub fn new(value: i64) -> Result<Self, NumeralError> {
        if value < MIN_VALUE as i64 || value > MAX_VALUE as i64 {
            return Err(NumeralError::OutOfRange(value));
        }

        Ok(Self(value as u32))
    }

    pub fn value(&self) -> u32 {
        self.0
    }

    /// Greedy subtraction over [`SYMBOL_TABLE`].
    pub(crate) fn encode(&self) -> String {
        let mut remaining = self.0;
        let mut symbols = SYMBOL_TABLE.iter();
        let mut current = symbols.next();
        let mut result = String::new();

        while remaining > 0 {
            let Some(&(token, value)) = current else {
                break;
            };

            if value <= remaining {
                result.push_str(token);
                remaining -= value;
            } else {
                current = symbols.next();
            }
        }

        result
    }
}

impl FromStr for RomanNumeral {
    type Err = NumeralError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(from_roman(s)? as i64)
    }
}

pub fn to_roman(number: i64) -> Result<String, NumeralError> {
    let result = RomanNumeral::new(number)?.encode();
    log::trace!("{number} -> {result}");
    Ok(result)
}

/// Greedy prefix decoding over [`SYMBOL_TABLE`], case-insensitive.
///
/// Accepts any string that the table consumes completely in descending order,
/// so non-canonical forms such as `IIII` decode to 4.
pub fn from_roman(input: &str) -> Result<u32, NumeralError> {
    let normalized = input.to_uppercase();
    let mut rest = normalized.as_str();
    let mut result = 0u32;

    if rest.is_empty() {
        return Err(NumeralError::Malformed(input.to_string()));
    }

    for &(token, value) in SYMBOL_TABLE.iter() {
        while let Some(stripped) = rest.strip_prefix(token) {
            result = result
                .checked_add(value)
                .ok_or_else(|| NumeralError::Malformed(input.to_string()))?;
            rest = stripped;
        }

        if rest.is_empty() {
            break;
        }
    }

    if !rest.is_empty() {
        return Err(NumeralError::Malformed(input.to_string()));
    }

    log::trace!("{input} -> {result}");
    Ok(result)
}
