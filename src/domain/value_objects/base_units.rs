//! # Base Units
//!
//! Exact integer token amounts as stored on chain.
//!
//! A human-readable amount `a` of a token with `d` decimals is `a × 10^d`
//! base units. The conversion only accepts values that already fit the
//! token's decimals, so no rounding happens here; callers truncate first.

use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::ArithmeticError;
use ethers::types::U256;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use std::fmt;

/// Integer amount of a token in its smallest unit.
///
/// Serialized as a decimal string, the form order signers consume.
///
/// # Examples
///
/// ```
/// use quote_relay::domain::value_objects::base_units::BaseUnits;
/// use rust_decimal::Decimal;
///
/// let amount = BaseUnits::from_decimal(Decimal::new(15, 1), 6).unwrap();
/// assert_eq!(amount.to_string(), "1500000");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct BaseUnits(U256);

impl BaseUnits {
    /// Zero base units.
    #[must_use]
    pub fn zero() -> Self {
        Self(U256::zero())
    }

    /// Scales a decimal amount by `10^decimals`.
    ///
    /// # Errors
    ///
    /// - `DomainError::InvalidAmount` if `value` is negative or carries more
    ///   fractional digits than `decimals`
    /// - `DomainError::Arithmetic` if the result, or `10^decimals` itself,
    ///   does not fit 256 bits
    pub fn from_decimal(value: Decimal, decimals: u32) -> DomainResult<Self> {
        if value.is_sign_negative() && !value.is_zero() {
            return Err(DomainError::InvalidAmount(format!(
                "negative amount {}",
                value
            )));
        }
        let normalized = value.normalize();
        let scale = normalized.scale();
        if scale > decimals {
            return Err(DomainError::InvalidAmount(format!(
                "{} has more than {} fractional digits",
                value, decimals
            )));
        }
        let mantissa = U256::from(normalized.mantissa().unsigned_abs());
        let factor = U256::from(10u8)
            .checked_pow(U256::from(decimals - scale))
            .ok_or(DomainError::Arithmetic(ArithmeticError::Overflow))?;
        mantissa
            .checked_mul(factor)
            .map(Self)
            .ok_or(DomainError::Arithmetic(ArithmeticError::Overflow))
    }

    /// Returns true if the amount is zero.
    #[inline]
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for BaseUnits {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for BaseUnits {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn scales_whole_amount() {
        let amount = BaseUnits::from_decimal(dec("2000"), 18).unwrap();
        assert_eq!(amount.to_string(), "2000000000000000000000");
    }

    #[test]
    fn scales_fractional_amount() {
        let amount = BaseUnits::from_decimal(dec("0.123456"), 6).unwrap();
        assert_eq!(amount.to_string(), "123456");
    }

    #[test]
    fn trailing_zeros_do_not_count_as_precision() {
        let amount = BaseUnits::from_decimal(dec("1.500000000"), 2).unwrap();
        assert_eq!(amount.to_string(), "150");
    }

    #[test]
    fn rejects_excess_precision() {
        assert!(BaseUnits::from_decimal(dec("0.1234567"), 6).is_err());
    }

    #[test]
    fn rejects_negative() {
        assert!(BaseUnits::from_decimal(dec("-1"), 6).is_err());
    }

    #[test]
    fn largest_power_that_fits() {
        let amount = BaseUnits::from_decimal(Decimal::ONE, 77).unwrap();
        assert_eq!(amount.to_string(), format!("1{}", "0".repeat(77)));
    }

    #[test]
    fn too_many_decimals_overflow() {
        assert_eq!(
            BaseUnits::from_decimal(Decimal::ONE, 80),
            Err(DomainError::Arithmetic(ArithmeticError::Overflow))
        );
        assert_eq!(
            BaseUnits::from_decimal(dec("1000"), 76),
            Err(DomainError::Arithmetic(ArithmeticError::Overflow))
        );
    }

    #[test]
    fn zero_is_zero() {
        assert!(BaseUnits::zero().is_zero());
        assert_eq!(BaseUnits::from_decimal(Decimal::ZERO, 18).unwrap(), BaseUnits::zero());
    }

    #[test]
    fn serializes_as_decimal_string() {
        let amount = BaseUnits::from_decimal(dec("10"), 18).unwrap();
        let json = serde_json::to_string(&amount).unwrap();
        assert_eq!(json, "\"10000000000000000000\"");
    }
}
