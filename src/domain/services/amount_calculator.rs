//! # Amount Calculator
//!
//! Converts a human-readable trade amount and a quoted rate into exact
//! maker/taker asset amounts in token base units.
//!
//! # Algorithm
//!
//! ```text
//! BUY:  maker = trunc(amount,        maker.precision)
//!       taker = trunc(amount / rate, suitable_precision(taker.decimals))
//! SELL: maker = trunc(amount * rate, suitable_precision(maker.decimals))
//!       taker = trunc(amount,        taker.precision)
//! ```
//!
//! Every truncation is toward zero and additionally capped at the token's
//! decimals, so scaling by `10^decimals` always lands on an integer.

use crate::domain::entities::token::TokenDescriptor;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::arithmetic::{CheckedArithmetic, truncate_dp};
use crate::domain::value_objects::{BaseUnits, OrderSide};
use rust_decimal::Decimal;

/// Returns the number of fractional digits kept for rate-derived amounts.
///
/// Low-decimal tokens (stablecoins) keep 6 digits, everything else 8.
///
/// # Examples
///
/// ```
/// use quote_relay::domain::services::amount_calculator::find_suitable_precision;
///
/// assert_eq!(find_suitable_precision(6), 6);
/// assert_eq!(find_suitable_precision(18), 8);
/// ```
#[inline]
#[must_use]
pub const fn find_suitable_precision(decimals: u32) -> u32 {
    if decimals < 8 { 6 } else { 8 }
}

/// Maker and taker amounts in whole tokens, after truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TradeAmounts {
    /// Amount of the maker token.
    pub maker: Decimal,
    /// Amount of the taker token.
    pub taker: Decimal,
}

/// Maker and taker amounts in base units.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetAmounts {
    /// Maker asset amount.
    pub maker_asset_amount: BaseUnits,
    /// Taker asset amount.
    pub taker_asset_amount: BaseUnits,
}

/// Truncates `value` to `precision` digits, never beyond the token's decimals.
fn truncate_for(token: &TokenDescriptor, value: Decimal, precision: u32) -> Decimal {
    truncate_dp(value, precision.min(token.decimals()))
}

/// Computes truncated maker/taker amounts in whole tokens.
///
/// # Errors
///
/// - `DomainError::InvalidAmount` if `amount` is not positive or either
///   side truncates to zero
/// - `DomainError::InvalidRate` if `rate` is not positive
/// - `DomainError::Arithmetic` on overflow
pub fn compute_trade_amounts(
    maker_token: &TokenDescriptor,
    taker_token: &TokenDescriptor,
    side: OrderSide,
    rate: Decimal,
    amount: Decimal,
) -> DomainResult<TradeAmounts> {
    if amount <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(format!(
            "amount must be positive, got {}",
            amount
        )));
    }
    if rate <= Decimal::ZERO {
        return Err(DomainError::InvalidRate(format!(
            "rate must be positive, got {}",
            rate
        )));
    }

    let amounts = match side {
        OrderSide::Buy => {
            let maker = truncate_for(maker_token, amount, maker_token.precision());
            let precision = find_suitable_precision(taker_token.decimals());
            let mut taker = truncate_for(taker_token, amount.safe_div(rate)?, precision);
            // Decimal division rounds its last digit; keep taker * rate <= amount.
            if taker.safe_mul(rate)? > amount {
                let step = Decimal::new(1, precision.min(taker_token.decimals()));
                taker = taker.safe_sub(step)?;
            }
            TradeAmounts { maker, taker }
        }
        OrderSide::Sell => {
            let precision = find_suitable_precision(maker_token.decimals());
            let maker = truncate_for(maker_token, amount.safe_mul(rate)?, precision);
            let taker = truncate_for(taker_token, amount, taker_token.precision());
            TradeAmounts { maker, taker }
        }
    };

    if amounts.maker <= Decimal::ZERO || amounts.taker <= Decimal::ZERO {
        return Err(DomainError::InvalidAmount(format!(
            "amount {} is too small to trade at rate {}",
            amount, rate
        )));
    }
    Ok(amounts)
}

/// Computes maker/taker asset amounts in base units.
///
/// # Errors
///
/// See [`compute_trade_amounts`]; scaling can additionally overflow.
pub fn compute_asset_amounts(
    maker_token: &TokenDescriptor,
    taker_token: &TokenDescriptor,
    side: OrderSide,
    rate: Decimal,
    amount: Decimal,
) -> DomainResult<AssetAmounts> {
    let amounts = compute_trade_amounts(maker_token, taker_token, side, rate, amount)?;
    Ok(AssetAmounts {
        maker_asset_amount: BaseUnits::from_decimal(amounts.maker, maker_token.decimals())?,
        taker_asset_amount: BaseUnits::from_decimal(amounts.taker, taker_token.decimals())?,
    })
}
