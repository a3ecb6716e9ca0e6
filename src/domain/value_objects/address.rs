//! # EVM Address
//!
//! Canonical lower-case contract and wallet addresses.
//!
//! External signers canonicalize orders before hashing, so every address
//! the relay emits is stored in its lower-case `0x`-prefixed form.
//!
//! # Examples
//!
//! ```
//! use quote_relay::domain::value_objects::address::Address;
//!
//! let addr = Address::parse("0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2").unwrap();
//! assert_eq!(addr.as_str(), "0xc02aaa39b223fe8d0a0e5c4f27ead9083c756cc2");
//! ```

use crate::domain::errors::{DomainError, DomainResult};
use ethers::abi::{Token, encode};
use ethers::types::H160;
use ethers::utils::hex;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Selector of the ERC-20 asset proxy, prefixed to encoded asset data.
pub const ERC20_PROXY_ID: [u8; 4] = [0xf4, 0x72, 0x61, 0xb0];

/// A well-formed, lower-cased EVM address.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Address(String);

impl Address {
    /// The all-zero address.
    pub const ZERO_STR: &'static str = "0x0000000000000000000000000000000000000000";

    /// Parses an address, accepting any letter case.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` unless the input is `0x`
    /// followed by exactly 40 hex digits.
    pub fn parse(value: &str) -> DomainResult<Self> {
        let value = value.trim();
        let invalid = || DomainError::InvalidAddress(value.to_string());
        // H160 parsing alone would also take bare hex.
        let digits = value
            .strip_prefix("0x")
            .or_else(|| value.strip_prefix("0X"))
            .ok_or_else(invalid)?;
        let parsed = H160::from_str(digits).map_err(|_| invalid())?;
        Ok(Self(format!("{:#x}", parsed)))
    }

    /// Returns the zero address.
    #[must_use]
    pub fn zero() -> Self {
        Self(Self::ZERO_STR.to_string())
    }

    /// Returns the address as a lower-case string slice.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true for the zero address.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0 == Self::ZERO_STR
    }

    /// Converts to the ethers representation.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the stored value is not
    /// decodable, which cannot happen for values built through [`Address::parse`].
    pub fn to_h160(&self) -> DomainResult<H160> {
        H160::from_str(&self.0).map_err(|_| DomainError::InvalidAddress(self.0.clone()))
    }

    /// Encodes the address as ERC-20 proxy asset data.
    ///
    /// The result is `0xf47261b0` followed by the ABI-encoded address.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAddress` if the address cannot be decoded.
    pub fn encode_asset_data(&self) -> DomainResult<String> {
        let encoded = encode(&[Token::Address(self.to_h160()?)]);
        let mut data = Vec::with_capacity(ERC20_PROXY_ID.len() + encoded.len());
        data.extend_from_slice(&ERC20_PROXY_ID);
        data.extend_from_slice(&encoded);
        Ok(format!("0x{}", hex::encode(data)))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for Address {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'de> Deserialize<'de> for Address {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
