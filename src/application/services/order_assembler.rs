//! # Order Assembler
//!
//! Builds the protocol-agnostic core of an order from a normalized query,
//! the quoted rate and the request's configuration snapshot.
//!
//! BUY maps maker = base and taker = quote; SELL inverts. Native-asset
//! sentinels are replaced by the wrapped-native contract on both sides
//! independently, except the RFQV2 taker side which always keeps the raw
//! token contract. Every address comes out lower-case.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{NormalizedQuery, Order, OrderTerms, TokenDescriptor};
use crate::domain::services::{compute_asset_amounts, resolve_fee_factor};
use crate::domain::value_objects::{Address, OrderSide, Protocol, Timestamp};
use crate::infrastructure::config::{Snapshot, SystemConfig};
use rust_decimal::Decimal;

fn lookup<'a>(snapshot: &'a Snapshot, address: &Address) -> ApplicationResult<&'a TokenDescriptor> {
    snapshot
        .tokens()
        .get_by_address(address)
        .ok_or_else(|| ApplicationError::token_not_found(address.as_str()))
}

/// Returns the asset contract used on chain for `token`.
fn asset_address(config: &SystemConfig, token: &TokenDescriptor) -> Address {
    if config.is_native(token.contract_address()) {
        config.wrapped_native_address.clone()
    } else {
        token.contract_address().clone()
    }
}

/// Returns the taker asset contract. RFQV2 settles the raw taker token and
/// never substitutes the wrapped-native contract.
fn taker_asset_address(
    protocol: Protocol,
    config: &SystemConfig,
    token: &TokenDescriptor,
) -> Address {
    match protocol {
        Protocol::RfqV2 => token.contract_address().clone(),
        Protocol::AmmV1 | Protocol::AmmV2 | Protocol::PmmV5 | Protocol::RfqV1 => {
            asset_address(config, token)
        }
    }
}

/// Assembles an unsigned order expiring relative to `now`.
///
/// # Errors
///
/// - `ApplicationError::TokenNotFound` if the maker or taker token is not
///   in the registry
/// - `ApplicationError::Domain` if the amounts cannot be computed
/// - `ApplicationError::Validation` if the expiration overflows
pub fn assemble_order_at(
    query: &NormalizedQuery,
    rate: Decimal,
    snapshot: &Snapshot,
    now: Timestamp,
) -> ApplicationResult<Order> {
    let config = snapshot.config();
    let (maker_address, taker_address) = match query.side {
        OrderSide::Buy => (&query.base, &query.quote),
        OrderSide::Sell => (&query.quote, &query.base),
    };
    let maker_token = lookup(snapshot, maker_address)?;
    let taker_token = lookup(snapshot, taker_address)?;

    let amounts = compute_asset_amounts(maker_token, taker_token, query.side, rate, query.amount)?;

    let fee_factor = resolve_fee_factor(
        config.fee_factor,
        snapshot.token_fee_factor(maker_token.symbol()),
        query.fee_factor.as_deref(),
    );

    let expiration = i64::try_from(config.order_expiration_seconds)
        .ok()
        .and_then(|secs| now.checked_add_secs(secs))
        .ok_or_else(|| ApplicationError::validation("order expiration is out of range"))?;

    let order = Order::new(OrderTerms {
        maker_address: config.maker_address.clone(),
        taker_address: config.taker_address.clone(),
        maker_asset_address: asset_address(config, maker_token),
        taker_asset_address: taker_asset_address(query.protocol, config, taker_token),
        maker_asset_amount: amounts.maker_asset_amount,
        taker_asset_amount: amounts.taker_asset_amount,
        sender_address: config.sender_address.clone(),
        fee_recipient_address: config.fee_recipient_address.clone(),
        exchange_address: config.exchange_address.clone(),
        expiration,
        fee_factor,
    })?;
    Ok(order)
}

/// Assembles an unsigned order expiring relative to the current time.
///
/// # Errors
///
/// See [`assemble_order_at`].
pub fn assemble_order(
    query: &NormalizedQuery,
    rate: Decimal,
    snapshot: &Snapshot,
) -> ApplicationResult<Order> {
    assemble_order_at(query, rate, snapshot, Timestamp::now())
}
