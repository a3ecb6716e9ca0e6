//! # System Configuration
//!
//! The read-only configuration snapshot consumed per request: chain
//! parameters, contract addresses, per-protocol address book, fee factor
//! default and collaborator endpoints.
//!
//! Configuration is layered: an optional file (toml, yaml or json) is read
//! first, then `QUOTE_RELAY__*` environment variables override it. A `.env`
//! file is loaded into the environment beforehand when present.
//!
//! # Examples
//!
//! ```no_run
//! use quote_relay::infrastructure::config::SystemConfig;
//!
//! let config = SystemConfig::load("config/relay.toml")?;
//! println!("chain {}", config.chain_id);
//! # Ok::<(), quote_relay::infrastructure::config::ConfigError>(())
//! ```

use crate::domain::value_objects::{Address, PermitType, WalletType};
use crate::infrastructure::config::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Prefix of environment variable overrides.
pub const ENV_PREFIX: &str = "QUOTE_RELAY";

/// Separator between nested keys in environment variable overrides.
pub const ENV_SEPARATOR: &str = "__";

/// Default order lifetime in seconds.
pub const DEFAULT_ORDER_EXPIRATION_SECS: u64 = 600;

/// Default quoter timeout in milliseconds.
pub const DEFAULT_QUOTER_TIMEOUT_MS: u64 = 5000;

/// Configuration loading failure.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or parsed.
    #[error("configuration source error: {0}")]
    Source(#[from] config::ConfigError),

    /// The merged configuration is inconsistent.
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

impl ConfigError {
    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid(message.into())
    }
}

/// Per-chain contract addresses used during order construction and signing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressBook {
    /// PMMV5 verifying contract.
    pub pmm: Address,
    /// RFQV1 verifying contract.
    pub rfqv1: Address,
    /// RFQV2 verifying contract.
    pub rfqv2: Address,
    /// AMMV1 wrapper, the maker of AMMV1 orders.
    pub amm_wrapper: Address,
    /// AMMV2 wrapper, the maker of AMMV2 orders.
    pub amm_wrapper_v2: Address,
}

/// Market maker quoter endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoterConfig {
    /// Base URL; prices are requested from `{endpoint}/price`.
    pub endpoint: String,
    /// Request timeout in milliseconds.
    #[serde(default = "default_quoter_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_quoter_timeout_ms() -> u64 {
    DEFAULT_QUOTER_TIMEOUT_MS
}

fn default_order_expiration_secs() -> u64 {
    DEFAULT_ORDER_EXPIRATION_SECS
}

/// Per-token configuration published alongside the token list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenConfig {
    /// Token symbol the entry applies to, matched case-insensitively.
    pub symbol: String,
    /// Fee factor override for orders where this token is the maker asset.
    #[serde(default)]
    pub fee_factor: Option<u32>,
}

impl TokenConfig {
    /// Creates an entry with a fee factor override.
    #[must_use]
    pub fn new(symbol: impl Into<String>, fee_factor: Option<u32>) -> Self {
        Self {
            symbol: symbol.into(),
            fee_factor,
        }
    }

    /// Returns true if this entry applies to `symbol`.
    #[inline]
    #[must_use]
    pub fn matches(&self, symbol: &str) -> bool {
        self.symbol.eq_ignore_ascii_case(symbol)
    }
}

/// Read-only system configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemConfig {
    /// Chain id passed to the signers.
    pub chain_id: u64,
    /// Global fee factor default.
    #[serde(default)]
    pub fee_factor: Option<u32>,
    /// Sentinel contract address designating the native chain asset.
    #[serde(default = "Address::zero")]
    pub native_token_address: Address,
    /// Wrapped-native token contract substituted for the native sentinel.
    pub wrapped_native_address: Address,
    /// Maker address of assembled orders.
    pub maker_address: Address,
    /// Taker address of assembled orders (the user proxy).
    pub taker_address: Address,
    /// Exchange contract.
    pub exchange_address: Address,
    /// Sender address.
    pub sender_address: Address,
    /// Fee recipient address.
    pub fee_recipient_address: Address,
    /// Order lifetime added to the current time.
    #[serde(default = "default_order_expiration_secs")]
    pub order_expiration_seconds: u64,
    /// Remote signing endpoint for PMMV5, RFQV1 and RFQV2.
    #[serde(default)]
    pub signing_url: Option<String>,
    /// Market maker wallet type passed to RFQ signers.
    #[serde(default)]
    pub wallet_type: WalletType,
    /// Permit type passed to the RFQV2 signer.
    #[serde(default)]
    pub permit_type: PermitType,
    /// Per-protocol contract addresses.
    pub addresses: AddressBook,
    /// Quoter endpoint.
    pub quoter: QuoterConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl SystemConfig {
    /// Loads configuration from `path` (optional) layered under
    /// `QUOTE_RELAY__*` environment variables.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source cannot be parsed, a required key is
    /// missing, or the merged configuration is inconsistent.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let settings = config::Config::builder()
            .add_source(config::File::from(path.as_ref()).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Parses configuration from an in-memory TOML document.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the document is malformed or inconsistent.
    pub fn from_toml_str(document: &str) -> Result<Self, ConfigError> {
        let settings = config::Config::builder()
            .add_source(config::File::from_str(document, config::FileFormat::Toml))
            .build()?;

        let loaded: Self = settings.try_deserialize()?;
        loaded.validate()?;
        Ok(loaded)
    }

    /// Checks cross-field consistency.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` describing the first inconsistency.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.native_token_address == self.wrapped_native_address {
            return Err(ConfigError::invalid(
                "wrapped_native_address must differ from native_token_address",
            ));
        }
        if self.order_expiration_seconds == 0 {
            return Err(ConfigError::invalid(
                "order_expiration_seconds must be positive",
            ));
        }
        if self.quoter.endpoint.trim().is_empty() {
            return Err(ConfigError::invalid("quoter.endpoint must not be empty"));
        }
        Ok(())
    }

    /// Returns true if `address` is the native asset sentinel.
    #[inline]
    #[must_use]
    pub fn is_native(&self, address: &Address) -> bool {
        *address == self.native_token_address
    }
}
