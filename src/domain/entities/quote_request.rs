//! # Quote Requests
//!
//! The raw swap request as received from the relay front end and the
//! normalized query the rest of the pipeline works with.
//!
//! [`QuoteRequest`] is deliberately loose: every field is an optional
//! string so that malformed input reaches the validator instead of failing
//! deserialization. [`NormalizedQuery`] is only ever produced by
//! [`crate::application::services::validator::validate_request`].

use crate::domain::value_objects::{Address, OrderSide, Protocol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A swap request exactly as submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    /// `BUY` or `SELL`.
    pub side: Option<String>,
    /// Base token contract address.
    pub base: Option<String>,
    /// Quote token contract address.
    pub quote: Option<String>,
    /// Trade amount in whole base tokens.
    pub amount: Option<String>,
    /// Amount the user wants to receive on BUY; preferred over `amount`.
    pub buy_amount: Option<String>,
    /// Protocol tag; PMMV5 when absent.
    pub protocol: Option<String>,
    /// Caller-supplied fee factor override.
    #[serde(alias = "feefactor")]
    pub fee_factor: Option<String>,
    /// The user's wallet address.
    pub user_addr: Option<String>,
    /// Unique request id.
    pub uniq_id: Option<String>,
}

/// A validated, normalized swap request.
///
/// Forwarded to the quoter as-is, so it serializes with the market
/// maker's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedQuery {
    /// Trade direction.
    pub side: OrderSide,
    /// Base token address.
    pub base: Address,
    /// Quote token address.
    pub quote: Address,
    /// Positive trade amount.
    pub amount: Decimal,
    /// Order protocol variant.
    pub protocol: Protocol,
    /// Raw caller fee factor override; interpreted by the fee factor resolver.
    #[serde(rename = "feefactor", skip_serializing_if = "Option::is_none")]
    pub fee_factor: Option<String>,
    /// The user's wallet address.
    pub user_addr: Address,
    /// Unique request id.
    pub uniq_id: String,
}
