//! # Response Assembler
//!
//! The uniform public response shape. Successes carry the finalized order
//! with the rate and bounds; failures carry only a message, never a
//! partial order.

use crate::application::error::ApplicationError;
use crate::domain::entities::Order;
use rust_decimal::Decimal;
use serde::Serialize;

/// Response returned for every quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    /// Whether the request succeeded.
    pub result: bool,
    /// Whether the pair can be traded at the returned terms.
    pub exchangeable: bool,
    /// Quoted rate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rate: Option<Decimal>,
    /// Minimum trade amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_amount: Option<Decimal>,
    /// Maximum trade amount.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_amount: Option<Decimal>,
    /// The finalized order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
    /// Failure reason.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl QuoteResponse {
    /// Wraps a finalized order.
    #[must_use]
    pub fn success(order: Order, rate: Decimal, min_amount: Decimal, max_amount: Decimal) -> Self {
        Self {
            result: true,
            exchangeable: true,
            rate: Some(rate),
            min_amount: Some(min_amount),
            max_amount: Some(max_amount),
            order: Some(order),
            message: None,
        }
    }

    /// Wraps a failure.
    #[must_use]
    pub fn failure(error: &ApplicationError) -> Self {
        Self {
            result: false,
            exchangeable: false,
            rate: None,
            min_amount: None,
            max_amount: None,
            order: None,
            message: Some(error.to_string()),
        }
    }

    /// Returns true for a successful response.
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result
    }
}

impl From<ApplicationError> for QuoteResponse {
    fn from(error: ApplicationError) -> Self {
        Self::failure(&error)
    }
}
