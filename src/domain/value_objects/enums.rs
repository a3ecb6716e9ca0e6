//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`OrderSide`] - Buy or Sell direction of the user's swap
//! - [`Protocol`] - The five order protocol variants the relay can build
//! - [`WalletType`] - Market maker wallet flavor used by RFQ signers
//! - [`PermitType`] - How the RFQV2 maker grants token spending
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Order side indicating buy or sell direction.
///
/// The side decides which of the base/quote tokens the market maker gives:
/// on `Buy` the maker gives the base token, on `Sell` the quote token.
///
/// # Examples
///
/// ```
/// use quote_relay::domain::value_objects::enums::OrderSide;
///
/// assert_eq!("sell".parse::<OrderSide>().unwrap(), OrderSide::Sell);
/// assert_eq!(OrderSide::Buy.to_string(), "BUY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum OrderSide {
    /// User buys the base token.
    Buy = 0,
    /// User sells the base token.
    Sell = 1,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for OrderSide {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ParseEnumError::InvalidValue("OrderSide", s.to_string())),
        }
    }
}

/// Order protocol variant.
///
/// Each variant finalizes and signs orders differently; see
/// [`crate::application::services::protocol_dispatcher`].
///
/// # Examples
///
/// ```
/// use quote_relay::domain::value_objects::enums::Protocol;
///
/// let protocol: Protocol = "rfqv2".parse().unwrap();
/// assert_eq!(protocol, Protocol::RfqV2);
/// assert!(protocol.requires_signature());
/// assert!(Protocol::AmmV1.is_amm());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Protocol {
    /// AMM wrapper, first generation.
    AmmV1,
    /// AMM wrapper with opaque routing payload.
    AmmV2,
    /// Private market maker order, version 5.
    #[default]
    PmmV5,
    /// Request-for-quote order, first generation.
    RfqV1,
    /// Request-for-quote order with permit support.
    RfqV2,
}

impl Protocol {
    /// All recognized variants.
    pub const ALL: [Protocol; 5] = [
        Self::AmmV1,
        Self::AmmV2,
        Self::PmmV5,
        Self::RfqV1,
        Self::RfqV2,
    ];

    /// Returns the wire tag of the protocol.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AmmV1 => "AMMV1",
            Self::AmmV2 => "AMMV2",
            Self::PmmV5 => "PMMV5",
            Self::RfqV1 => "RFQV1",
            Self::RfqV2 => "RFQV2",
        }
    }

    /// Returns true for the AMM wrapper variants.
    #[inline]
    #[must_use]
    pub const fn is_amm(self) -> bool {
        matches!(self, Self::AmmV1 | Self::AmmV2)
    }

    /// Returns true if orders of this protocol are signed by a maker signer.
    #[inline]
    #[must_use]
    pub const fn requires_signature(self) -> bool {
        !self.is_amm()
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Protocol {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError::InvalidValue("Protocol", s.to_string()))
    }
}

/// Wallet flavor of the market maker, forwarded to RFQ signers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WalletType {
    /// Market maker proxy contract, version 4.
    #[serde(rename = "MMP_VERSION_4")]
    #[default]
    MmpVersion4,
    /// Externally owned account.
    Eoa,
    /// ERC-1271 contract wallet.
    Erc1271,
    /// ERC-1271 contract wallet validating EIP-712 digests.
    Erc1271Eip712,
    /// ERC-1271 contract wallet validating EIP-712 digests wrapped in EIP-191.
    Erc1271Eip712Eip191,
}

impl WalletType {
    /// Returns the wire tag of the wallet type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MmpVersion4 => "MMP_VERSION_4",
            Self::Eoa => "EOA",
            Self::Erc1271 => "ERC1271",
            Self::Erc1271Eip712 => "ERC1271_EIP712",
            Self::Erc1271Eip712Eip191 => "ERC1271_EIP712_EIP191",
        }
    }
}

impl fmt::Display for WalletType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WalletType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MMP_VERSION_4" => Ok(Self::MmpVersion4),
            "EOA" => Ok(Self::Eoa),
            "ERC1271" => Ok(Self::Erc1271),
            "ERC1271_EIP712" => Ok(Self::Erc1271Eip712),
            "ERC1271_EIP712_EIP191" => Ok(Self::Erc1271Eip712Eip191),
            _ => Err(ParseEnumError::InvalidValue("WalletType", s.to_string())),
        }
    }
}

/// How an RFQV2 maker authorizes the settlement contract to move its tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PermitType {
    /// Allowance granted to the shared allowance target.
    #[default]
    AllowanceTarget,
    /// Direct approval of the RFQV2 contract.
    ApproveRfqv2,
}

impl PermitType {
    /// Returns the wire tag of the permit type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AllowanceTarget => "ALLOWANCE_TARGET",
            Self::ApproveRfqv2 => "APPROVE_RFQV2",
        }
    }
}

impl fmt::Display for PermitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PermitType {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ALLOWANCE_TARGET" => Ok(Self::AllowanceTarget),
            "APPROVE_RFQV2" => Ok(Self::ApproveRfqv2),
            _ => Err(ParseEnumError::InvalidValue("PermitType", s.to_string())),
        }
    }
}

/// Error type for parsing enum values from strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseEnumError {
    /// The provided string value is not valid for the enum.
    InvalidValue(&'static str, String),
}

impl fmt::Display for ParseEnumError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidValue(enum_name, value) => {
                write!(f, "invalid {} value: '{}'", enum_name, value)
            }
        }
    }
}

impl std::error::Error for ParseEnumError {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    mod order_side {
        use super::*;

        #[test]
        fn from_str_is_case_insensitive() {
            assert_eq!("buy".parse::<OrderSide>().unwrap(), OrderSide::Buy);
            assert_eq!("SELL".parse::<OrderSide>().unwrap(), OrderSide::Sell);
            assert!("HOLD".parse::<OrderSide>().is_err());
        }

        #[test]
        fn serde_uses_uppercase() {
            let json = serde_json::to_string(&OrderSide::Sell).unwrap();
            assert_eq!(json, "\"SELL\"");
        }
    }

    mod protocol {
        use super::*;

        #[test]
        fn parses_every_variant() {
            for protocol in Protocol::ALL {
                assert_eq!(protocol.as_str().parse::<Protocol>().unwrap(), protocol);
            }
        }

        #[test]
        fn rejects_unknown_tag() {
            let err = "PMMV4".parse::<Protocol>().unwrap_err();
            assert_eq!(err.to_string(), "invalid Protocol value: 'PMMV4'");
        }

        #[test]
        fn default_is_pmmv5() {
            assert_eq!(Protocol::default(), Protocol::PmmV5);
        }

        #[test]
        fn serde_matches_wire_tag() {
            for protocol in Protocol::ALL {
                let json = serde_json::to_string(&protocol).unwrap();
                assert_eq!(json, format!("\"{}\"", protocol.as_str()));
            }
        }

        #[test]
        fn amm_variants_are_unsigned() {
            assert!(!Protocol::AmmV1.requires_signature());
            assert!(!Protocol::AmmV2.requires_signature());
            assert!(Protocol::PmmV5.requires_signature());
        }
    }

    mod wallet_and_permit {
        use super::*;

        #[test]
        fn wallet_type_serde_matches_wire_tag() {
            let json = serde_json::to_string(&WalletType::MmpVersion4).unwrap();
            assert_eq!(json, "\"MMP_VERSION_4\"");
            let json = serde_json::to_string(&WalletType::Erc1271Eip712Eip191).unwrap();
            assert_eq!(json, "\"ERC1271_EIP712_EIP191\"");
        }

        #[test]
        fn permit_type_roundtrips_through_str() {
            assert_eq!(
                "approve_rfqv2".parse::<PermitType>().unwrap(),
                PermitType::ApproveRfqv2
            );
            let json = serde_json::to_string(&PermitType::ApproveRfqv2).unwrap();
            assert_eq!(json, "\"APPROVE_RFQV2\"");
        }
    }
}
