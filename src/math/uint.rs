//! Checked unsigned 128-bit value type
//!
//! All operations take two operands and produce a fresh value; operands are
//! never mutated. Overflow, underflow and division by zero are hard errors.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Arithmetic errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    #[error("Arithmetic overflow: {a} + {b} exceeds the 128-bit range")]
    ArithmeticOverflow { a: u128, b: u128 },
    #[error("Arithmetic underflow: cannot subtract {b} from {a}")]
    ArithmeticUnderflow { a: u128, b: u128 },
    #[error("Division by zero")]
    DivisionByZero,
    #[error("Value out of range: {0} does not fit in 128 bits")]
    OutOfRange(String),
    #[error("Invalid decimal literal: {0}")]
    InvalidLiteral(String),
}

/// An unsigned integer in `[0, 2^128)` with checked arithmetic.
///
/// The type has no sign; subtraction can never produce a negative value.
/// Comparison is by magnitude only, with no implicit conversions.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SafeU128(u128);

impl SafeU128 {
    /// The zero amount
    pub const ZERO: Self = Self(0);

    /// The largest representable amount
    pub const MAX: Self = Self(u128::MAX);

    /// Wrap a raw magnitude
    pub const fn from_raw(raw: u128) -> Self {
        Self(raw)
    }

    /// Unwrap to the raw magnitude
    pub const fn raw(self) -> u128 {
        self.0
    }

    /// Whether this is the zero amount
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Checked addition
    pub fn add(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_add(other.0)
            .map(Self)
            .ok_or(MathError::ArithmeticOverflow {
                a: self.0,
                b: other.0,
            })
    }

    /// Checked subtraction; fails whenever `other > self`
    pub fn sub(self, other: Self) -> Result<Self, MathError> {
        self.0
            .checked_sub(other.0)
            .map(Self)
            .ok_or(MathError::ArithmeticUnderflow {
                a: self.0,
                b: other.0,
            })
    }

    /// Checked multiplication
    pub fn mul(self, other: Self) -> Result<Self, MathError> {
        if self.is_zero() {
            return Ok(Self::ZERO);
        }
        self.0
            .checked_mul(other.0)
            .map(Self)
            .ok_or(MathError::ArithmeticOverflow {
                a: self.0,
                b: other.0,
            })
    }

    /// Checked integer division, truncating the remainder
    pub fn div(self, other: Self) -> Result<Self, MathError> {
        if other.is_zero() {
            return Err(MathError::DivisionByZero);
        }
        Ok(Self(self.0 / other.0))
    }
}

impl fmt::Display for SafeU128 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u128> for SafeU128 {
    fn from(raw: u128) -> Self {
        Self(raw)
    }
}

impl FromStr for SafeU128 {
    type Err = MathError;

    /// Parse a decimal literal. Literals above `2^128 - 1` are rejected
    /// rather than truncated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        use std::num::IntErrorKind;

        match s.parse::<u128>() {
            Ok(raw) => Ok(Self(raw)),
            Err(e) if *e.kind() == IntErrorKind::PosOverflow => {
                Err(MathError::OutOfRange(s.to_string()))
            }
            Err(_) => Err(MathError::InvalidLiteral(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(raw: u128) -> SafeU128 {
        SafeU128::from_raw(raw)
    }

    #[test]
    fn test_add_sub_round_trip() {
        let a = v(123_456_789);
        let b = v(987_654_321);

        let sum = a.add(b).unwrap();
        assert_eq!(sum.sub(b).unwrap(), a);
    }

    #[test]
    fn test_add_commutative() {
        let a = v(42);
        let b = v(7_000_000_000_000_000_000_000);

        assert_eq!(a.add(b).unwrap(), b.add(a).unwrap());
    }

    #[test]
    fn test_add_overflow() {
        let result = SafeU128::MAX.add(v(1));
        assert!(matches!(result, Err(MathError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_sub_underflow() {
        let result = v(5).sub(v(6));
        assert!(matches!(result, Err(MathError::ArithmeticUnderflow { .. })));
    }

    #[test]
    fn test_sub_to_zero() {
        assert_eq!(v(5).sub(v(5)).unwrap(), SafeU128::ZERO);
    }

    #[test]
    fn test_mul_by_zero() {
        assert_eq!(SafeU128::ZERO.mul(v(u128::MAX)).unwrap(), SafeU128::ZERO);
        assert_eq!(v(u128::MAX).mul(SafeU128::ZERO).unwrap(), SafeU128::ZERO);
    }

    #[test]
    fn test_mul_overflow() {
        let result = SafeU128::MAX.mul(v(2));
        assert!(matches!(result, Err(MathError::ArithmeticOverflow { .. })));
    }

    #[test]
    fn test_div_identity() {
        let a = v(1_000_000_000_000_000_000_000_000);
        assert_eq!(a.div(v(1)).unwrap(), a);
    }

    #[test]
    fn test_div_truncates() {
        assert_eq!(v(7).div(v(2)).unwrap(), v(3));
    }

    #[test]
    fn test_div_by_zero() {
        assert_eq!(v(7).div(SafeU128::ZERO), Err(MathError::DivisionByZero));
    }

    #[test]
    fn test_ordering() {
        assert!(v(1) < v(2));
        assert!(v(2) <= v(2));
        assert!(v(3) > v(2));
        assert!(v(3) >= v(3));
        assert_eq!(v(4), v(4));
    }

    #[test]
    fn test_parse_decimal() {
        let parsed: SafeU128 = "1000000000000000000000000".parse().unwrap();
        assert_eq!(parsed, v(1_000_000_000_000_000_000_000_000));
    }

    #[test]
    fn test_parse_max() {
        let parsed: SafeU128 = u128::MAX.to_string().parse().unwrap();
        assert_eq!(parsed, SafeU128::MAX);
    }

    #[test]
    fn test_parse_oversized() {
        // 2^128, one past the maximum
        let result = "340282366920938463463374607431768211456".parse::<SafeU128>();
        assert!(matches!(result, Err(MathError::OutOfRange(_))));
    }

    #[test]
    fn test_parse_garbage() {
        assert!(matches!(
            "12abc".parse::<SafeU128>(),
            Err(MathError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "-5".parse::<SafeU128>(),
            Err(MathError::InvalidLiteral(_))
        ));
        assert!(matches!(
            "".parse::<SafeU128>(),
            Err(MathError::InvalidLiteral(_))
        ));
    }

    #[test]
    fn test_display() {
        assert_eq!(v(12345).to_string(), "12345");
    }
}
