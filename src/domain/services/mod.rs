//! # Domain Services
//!
//! Pure computations that don't belong to a single entity.
//!
//! ## Services
//!
//! - [`amount_calculator`]: Rate and amount to exact base-unit asset amounts
//! - [`fee_factor`]: Fee factor priority resolution

pub mod amount_calculator;
pub mod fee_factor;

pub use amount_calculator::{
    AssetAmounts, TradeAmounts, compute_asset_amounts, compute_trade_amounts,
    find_suitable_precision,
};
pub use fee_factor::{DEFAULT_FEE_FACTOR, parse_fee_factor_override, resolve_fee_factor};
