//! # Fee Factor Resolution
//!
//! Picks the fee factor attached to an order from three pre-fetched
//! sources. Highest priority wins:
//!
//! 1. the caller's override, when it parses as a non-negative number
//! 2. the maker token's configured override
//! 3. the global configured default
//! 4. [`DEFAULT_FEE_FACTOR`]

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;

/// Fee factor used when no source provides one.
pub const DEFAULT_FEE_FACTOR: u32 = 10;

/// Parses a caller-supplied override.
///
/// Fractional values are truncated. Negative, non-numeric, or out of range
/// input yields `None`.
#[must_use]
pub fn parse_fee_factor_override(raw: &str) -> Option<u32> {
    let value = Decimal::from_str(raw.trim()).ok()?;
    if value.is_sign_negative() && !value.is_zero() {
        return None;
    }
    value.trunc().to_u32()
}

/// Resolves the fee factor for an order.
///
/// # Examples
///
/// ```
/// use quote_relay::domain::services::fee_factor::resolve_fee_factor;
///
/// assert_eq!(resolve_fee_factor(Some(10), Some(25), Some("30")), 30);
/// assert_eq!(resolve_fee_factor(Some(10), Some(25), Some("-1")), 25);
/// assert_eq!(resolve_fee_factor(Some(10), None, None), 10);
/// assert_eq!(resolve_fee_factor(None, None, None), 10);
/// ```
#[must_use]
pub fn resolve_fee_factor(
    config_default: Option<u32>,
    per_token_override: Option<u32>,
    caller_override: Option<&str>,
) -> u32 {
    caller_override
        .and_then(parse_fee_factor_override)
        .or(per_token_override)
        .or(config_default)
        .unwrap_or(DEFAULT_FEE_FACTOR)
}
