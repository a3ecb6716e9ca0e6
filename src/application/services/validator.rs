//! # Quote Validator
//!
//! Normalizes a raw [`QuoteRequest`] into a [`NormalizedQuery`] before any
//! external call is made. Pure and side-effect free.
//!
//! Checks run in a fixed order and the first failure wins:
//!
//! 1. protocol (defaults to PMMV5 when absent)
//! 2. amount (`buyAmount` takes precedence for BUY requests)
//! 3. `uniqId` and `userAddr`
//! 4. side, base and quote
//!
//! # Examples
//!
//! ```
//! use quote_relay::application::services::validator::validate_request;
//! use quote_relay::domain::entities::QuoteRequest;
//! use quote_relay::domain::value_objects::Protocol;
//!
//! let request = QuoteRequest {
//!     side: Some("SELL".to_string()),
//!     base: Some("0x1111111111111111111111111111111111111111".to_string()),
//!     quote: Some("0x2222222222222222222222222222222222222222".to_string()),
//!     amount: Some("10".to_string()),
//!     user_addr: Some("0x3333333333333333333333333333333333333333".to_string()),
//!     uniq_id: Some("req-1".to_string()),
//!     ..QuoteRequest::default()
//! };
//!
//! let query = validate_request(&request).unwrap();
//! assert_eq!(query.protocol, Protocol::PmmV5);
//! ```

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{NormalizedQuery, QuoteRequest};
use crate::domain::value_objects::{Address, OrderSide, Protocol};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Returns the trimmed value if present and non-empty.
fn present(value: Option<&String>) -> Option<&str> {
    value.map(|v| v.trim()).filter(|v| !v.is_empty())
}

fn parse_protocol(raw: Option<&String>) -> ApplicationResult<Protocol> {
    match present(raw) {
        None => Ok(Protocol::default()),
        Some(tag) => {
            Protocol::from_str(tag).map_err(|_| ApplicationError::unrecognized_protocol(tag))
        }
    }
}

fn parse_amount(request: &QuoteRequest, side: Option<OrderSide>) -> ApplicationResult<Decimal> {
    let buy_amount = present(request.buy_amount.as_ref()).filter(|_| side == Some(OrderSide::Buy));
    let raw = buy_amount
        .or_else(|| present(request.amount.as_ref()))
        .ok_or_else(|| ApplicationError::validation("amount is required"))?;

    match Decimal::from_str(raw) {
        Ok(amount) if amount > Decimal::ZERO => Ok(amount),
        _ => Err(ApplicationError::validation(format!(
            "amount must be a positive number, got '{}'",
            raw
        ))),
    }
}

fn parse_address(field: &str, raw: Option<&String>) -> ApplicationResult<Address> {
    let raw = present(raw)
        .ok_or_else(|| ApplicationError::validation(format!("{} is required", field)))?;
    Address::parse(raw).map_err(|_| {
        ApplicationError::validation(format!("{} is not a valid address: '{}'", field, raw))
    })
}

/// Validates and normalizes a raw quote request.
///
/// # Errors
///
/// - `ApplicationError::UnrecognizedProtocol` for an unknown protocol tag
/// - `ApplicationError::Validation` for any other malformed field
pub fn validate_request(request: &QuoteRequest) -> ApplicationResult<NormalizedQuery> {
    let protocol = parse_protocol(request.protocol.as_ref())?;

    let side = present(request.side.as_ref()).and_then(|s| OrderSide::from_str(s).ok());
    let amount = parse_amount(request, side)?;

    let uniq_id = present(request.uniq_id.as_ref())
        .ok_or_else(|| ApplicationError::validation("uniqId is required"))?
        .to_string();
    let user_addr = parse_address("userAddr", request.user_addr.as_ref())?;

    let side = side.ok_or_else(|| ApplicationError::validation("side must be BUY or SELL"))?;
    let base = parse_address("base", request.base.as_ref())?;
    let quote = parse_address("quote", request.quote.as_ref())?;
    if base == quote {
        return Err(ApplicationError::validation(
            "base and quote must be different tokens",
        ));
    }

    Ok(NormalizedQuery {
        side,
        base,
        quote,
        amount,
        protocol,
        fee_factor: present(request.fee_factor.as_ref()).map(str::to_string),
        user_addr,
        uniq_id,
    })
}
