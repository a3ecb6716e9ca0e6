//! # Price Quote
//!
//! The market maker's answer to a normalized query.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Price and bounds quoted by the market maker for one request.
///
/// Produced once per request and never mutated afterwards; the protocol
/// dispatcher derives overridden bounds without touching the quote.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceQuote {
    /// Maker asset per taker asset, as the amount calculator interprets it.
    pub rate: Decimal,
    /// Minimum tradable amount.
    pub min_amount: Decimal,
    /// Maximum tradable amount.
    pub max_amount: Decimal,
    /// Market maker's quote identifier.
    pub quote_id: String,
    /// Protocol-specific opaque data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<String>,
    /// Salt to sign the order with.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salt: Option<String>,
}

impl PriceQuote {
    /// Creates a quote without payload or salt.
    #[must_use]
    pub fn new(
        rate: Decimal,
        min_amount: Decimal,
        max_amount: Decimal,
        quote_id: impl Into<String>,
    ) -> Self {
        Self {
            rate,
            min_amount,
            max_amount,
            quote_id: quote_id.into(),
            payload: None,
            salt: None,
        }
    }

    /// Attaches an opaque payload.
    #[must_use]
    pub fn with_payload(mut self, payload: impl Into<String>) -> Self {
        self.payload = Some(payload.into());
        self
    }

    /// Attaches a salt.
    #[must_use]
    pub fn with_salt(mut self, salt: impl Into<String>) -> Self {
        self.salt = Some(salt.into());
        self
    }
}
