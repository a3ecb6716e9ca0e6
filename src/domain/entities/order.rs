//! # Order Entity
//!
//! The order structure handed to protocol signers and returned to the user.
//!
//! An order is built fresh for every request by the order assembler,
//! finalized by exactly one protocol branch of the dispatcher, then
//! serialized into the response and dropped. Nothing persists it.
//!
//! `protocol` and `quote_id` belong to the dispatcher: the setter is
//! crate-private, so signers implemented outside this crate can not touch
//! them, and the dispatcher stamps both after the signer returns.

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Address, BaseUnits, Protocol, Timestamp};
use serde::Serialize;
use std::fmt;

/// The protocol-agnostic terms of an order, as computed by the assembler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderTerms {
    /// Market maker address.
    pub maker_address: Address,
    /// Taker address.
    pub taker_address: Address,
    /// Token the maker gives, after wrapped-native substitution.
    pub maker_asset_address: Address,
    /// Token the maker receives, after wrapped-native substitution.
    pub taker_asset_address: Address,
    /// Maker asset amount in base units.
    pub maker_asset_amount: BaseUnits,
    /// Taker asset amount in base units.
    pub taker_asset_amount: BaseUnits,
    /// Sender address.
    pub sender_address: Address,
    /// Fee recipient address.
    pub fee_recipient_address: Address,
    /// Exchange contract address.
    pub exchange_address: Address,
    /// Expiration time.
    pub expiration: Timestamp,
    /// Fee factor attached to the order.
    pub fee_factor: u32,
}

/// An order ready for (or already carrying) a protocol signature.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    protocol: Option<Protocol>,
    quote_id: Option<String>,
    maker_address: Address,
    maker_asset_amount: BaseUnits,
    maker_asset_address: Address,
    maker_asset_data: String,
    maker_fee: BaseUnits,
    taker_address: Address,
    taker_asset_amount: BaseUnits,
    taker_asset_address: Address,
    taker_asset_data: String,
    taker_fee: BaseUnits,
    sender_address: Address,
    fee_recipient_address: Address,
    exchange_address: Address,
    expiration_time_seconds: i64,
    fee_factor: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    salt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    payload: Option<String>,
}

impl Order {
    /// Builds an unsigned order from its terms.
    ///
    /// Maker and taker fees are always zero; asset data is derived from the
    /// asset addresses.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if an asset address can not be encoded.
    pub fn new(terms: OrderTerms) -> DomainResult<Self> {
        Ok(Self {
            protocol: None,
            quote_id: None,
            maker_asset_data: terms.maker_asset_address.encode_asset_data()?,
            taker_asset_data: terms.taker_asset_address.encode_asset_data()?,
            maker_address: terms.maker_address,
            maker_asset_amount: terms.maker_asset_amount,
            maker_asset_address: terms.maker_asset_address,
            maker_fee: BaseUnits::zero(),
            taker_address: terms.taker_address,
            taker_asset_amount: terms.taker_asset_amount,
            taker_asset_address: terms.taker_asset_address,
            taker_fee: BaseUnits::zero(),
            sender_address: terms.sender_address,
            fee_recipient_address: terms.fee_recipient_address,
            exchange_address: terms.exchange_address,
            expiration_time_seconds: terms.expiration.timestamp_secs(),
            fee_factor: terms.fee_factor,
            salt: None,
            signature: None,
            payload: None,
        })
    }

    /// Returns the protocol stamped by the dispatcher.
    #[inline]
    #[must_use]
    pub fn protocol(&self) -> Option<Protocol> {
        self.protocol
    }

    /// Returns the quote id stamped by the dispatcher.
    #[inline]
    #[must_use]
    pub fn quote_id(&self) -> Option<&str> {
        self.quote_id.as_deref()
    }

    /// Returns the maker address.
    #[inline]
    #[must_use]
    pub fn maker_address(&self) -> &Address {
        &self.maker_address
    }

    /// Returns the maker asset amount.
    #[inline]
    #[must_use]
    pub fn maker_asset_amount(&self) -> BaseUnits {
        self.maker_asset_amount
    }

    /// Returns the maker asset address.
    #[inline]
    #[must_use]
    pub fn maker_asset_address(&self) -> &Address {
        &self.maker_asset_address
    }

    /// Returns the encoded maker asset data.
    #[inline]
    #[must_use]
    pub fn maker_asset_data(&self) -> &str {
        &self.maker_asset_data
    }

    /// Returns the maker fee (always zero).
    #[inline]
    #[must_use]
    pub fn maker_fee(&self) -> BaseUnits {
        self.maker_fee
    }

    /// Returns the taker address.
    #[inline]
    #[must_use]
    pub fn taker_address(&self) -> &Address {
        &self.taker_address
    }

    /// Returns the taker asset amount.
    #[inline]
    #[must_use]
    pub fn taker_asset_amount(&self) -> BaseUnits {
        self.taker_asset_amount
    }

    /// Returns the taker asset address.
    #[inline]
    #[must_use]
    pub fn taker_asset_address(&self) -> &Address {
        &self.taker_asset_address
    }

    /// Returns the encoded taker asset data.
    #[inline]
    #[must_use]
    pub fn taker_asset_data(&self) -> &str {
        &self.taker_asset_data
    }

    /// Returns the taker fee (always zero).
    #[inline]
    #[must_use]
    pub fn taker_fee(&self) -> BaseUnits {
        self.taker_fee
    }

    /// Returns the sender address.
    #[inline]
    #[must_use]
    pub fn sender_address(&self) -> &Address {
        &self.sender_address
    }

    /// Returns the fee recipient address.
    #[inline]
    #[must_use]
    pub fn fee_recipient_address(&self) -> &Address {
        &self.fee_recipient_address
    }

    /// Returns the exchange address.
    #[inline]
    #[must_use]
    pub fn exchange_address(&self) -> &Address {
        &self.exchange_address
    }

    /// Returns the expiration as Unix seconds.
    #[inline]
    #[must_use]
    pub fn expiration_time_seconds(&self) -> i64 {
        self.expiration_time_seconds
    }

    /// Returns the fee factor.
    #[inline]
    #[must_use]
    pub fn fee_factor(&self) -> u32 {
        self.fee_factor
    }

    /// Returns the salt, if set.
    #[inline]
    #[must_use]
    pub fn salt(&self) -> Option<&str> {
        self.salt.as_deref()
    }

    /// Returns the signature, if signed.
    #[inline]
    #[must_use]
    pub fn signature(&self) -> Option<&str> {
        self.signature.as_deref()
    }

    /// Returns the protocol payload, if any.
    #[inline]
    #[must_use]
    pub fn payload(&self) -> Option<&str> {
        self.payload.as_deref()
    }

    /// Replaces the maker address.
    pub fn set_maker_address(&mut self, maker_address: Address) {
        self.maker_address = maker_address;
    }

    /// Replaces the maker asset, re-encoding its asset data.
    ///
    /// # Errors
    ///
    /// Returns a `DomainError` if the address can not be encoded.
    pub fn set_maker_asset_address(&mut self, address: Address) -> DomainResult<()> {
        self.maker_asset_data = address.encode_asset_data()?;
        self.maker_asset_address = address;
        Ok(())
    }

    /// Sets the salt the order is signed with.
    pub fn set_salt(&mut self, salt: impl Into<String>) {
        self.salt = Some(salt.into());
    }

    /// Attaches a signature.
    pub fn set_signature(&mut self, signature: impl Into<String>) {
        self.signature = Some(signature.into());
    }

    /// Attaches an opaque protocol payload.
    pub fn set_payload(&mut self, payload: Option<String>) {
        self.payload = payload;
    }

    /// Stamps the dispatcher-owned fields.
    pub(crate) fn stamp(&mut self, protocol: Protocol, quote_id: impl Into<String>) {
        self.protocol = Some(protocol);
        self.quote_id = Some(quote_id.into());
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Order({} {} -> {} {}",
            self.maker_asset_amount,
            self.maker_asset_address,
            self.taker_asset_amount,
            self.taker_asset_address
        )?;
        if let Some(protocol) = self.protocol {
            write!(f, " via {}", protocol)?;
        }
        write!(f, ")")
    }
}
