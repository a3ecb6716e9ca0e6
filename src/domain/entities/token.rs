//! # Token Entities
//!
//! Token descriptors published by the token registry and the per-refresh
//! lookup table built over them.
//!
//! # Examples
//!
//! ```
//! use quote_relay::domain::entities::token::{TokenDescriptor, TokenList};
//! use quote_relay::domain::value_objects::Address;
//! use rust_decimal::Decimal;
//!
//! let usdt = TokenDescriptor::new(
//!     "USDT",
//!     Address::parse("0xdAC17F958D2ee523a2206206994597C13D831ec7").unwrap(),
//!     6,
//! );
//! let list = TokenList::new(vec![usdt]);
//!
//! let found = list
//!     .get_by_address(&Address::parse("0xdac17f958d2ee523a2206206994597c13d831ec7").unwrap())
//!     .unwrap();
//! assert_eq!(found.symbol(), "USDT");
//! ```

use crate::domain::value_objects::Address;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Default display precision when the registry publishes none.
pub const DEFAULT_PRECISION: u32 = 4;

/// A tradable token as published by the token registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenDescriptor {
    /// Ticker symbol.
    symbol: String,
    /// Token contract address (the native sentinel for the chain asset).
    contract_address: Address,
    /// Number of decimals of the on-chain representation.
    decimals: u32,
    /// Display precision, in fractional digits.
    #[serde(default = "default_precision")]
    precision: u32,
    /// Minimum trade amount, in whole tokens.
    #[serde(default)]
    min_trade_amount: Decimal,
    /// Maximum trade amount, in whole tokens.
    #[serde(default)]
    max_trade_amount: Decimal,
}

fn default_precision() -> u32 {
    DEFAULT_PRECISION
}

impl TokenDescriptor {
    /// Creates a descriptor with default precision and no trade bounds.
    #[must_use]
    pub fn new(symbol: impl Into<String>, contract_address: Address, decimals: u32) -> Self {
        Self {
            symbol: symbol.into(),
            contract_address,
            decimals,
            precision: DEFAULT_PRECISION,
            min_trade_amount: Decimal::ZERO,
            max_trade_amount: Decimal::ZERO,
        }
    }

    /// Sets the display precision.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the trade bounds.
    #[must_use]
    pub fn with_trade_bounds(mut self, min: Decimal, max: Decimal) -> Self {
        self.min_trade_amount = min;
        self.max_trade_amount = max;
        self
    }

    /// Returns the symbol.
    #[inline]
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Returns the contract address.
    #[inline]
    #[must_use]
    pub fn contract_address(&self) -> &Address {
        &self.contract_address
    }

    /// Returns the number of decimals.
    #[inline]
    #[must_use]
    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    /// Returns the display precision.
    #[inline]
    #[must_use]
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// Returns the minimum trade amount.
    #[inline]
    #[must_use]
    pub fn min_trade_amount(&self) -> Decimal {
        self.min_trade_amount
    }

    /// Returns the maximum trade amount.
    #[inline]
    #[must_use]
    pub fn max_trade_amount(&self) -> Decimal {
        self.max_trade_amount
    }
}

impl fmt::Display for TokenDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.symbol, self.contract_address)
    }
}

/// Immutable token list for one registry refresh cycle.
///
/// The address index is rebuilt together with the list, so a lookup can
/// never observe a descriptor from an older refresh.
#[derive(Debug, Clone, Default)]
pub struct TokenList {
    tokens: Vec<TokenDescriptor>,
    by_address: HashMap<Address, usize>,
}

impl TokenList {
    /// Builds the list and its address index.
    ///
    /// When two descriptors share an address the first one wins.
    #[must_use]
    pub fn new(tokens: Vec<TokenDescriptor>) -> Self {
        let mut by_address = HashMap::with_capacity(tokens.len());
        for (idx, token) in tokens.iter().enumerate() {
            by_address
                .entry(token.contract_address().clone())
                .or_insert(idx);
        }
        Self { tokens, by_address }
    }

    /// Returns the token registered at `address`.
    #[must_use]
    pub fn get_by_address(&self, address: &Address) -> Option<&TokenDescriptor> {
        self.by_address
            .get(address)
            .and_then(|idx| self.tokens.get(*idx))
    }

    /// Returns all supported tokens.
    #[must_use]
    pub fn tokens(&self) -> &[TokenDescriptor] {
        &self.tokens
    }

    /// Returns the number of tokens.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Returns true if the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
