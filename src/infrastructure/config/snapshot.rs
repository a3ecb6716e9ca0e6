//! # Configuration Snapshots
//!
//! The token list, token configuration and system configuration are
//! refreshed out of band. Each request reads one immutable [`Snapshot`] at
//! entry and passes it through the pipeline, so a refresh never changes the
//! view of a request already in flight.
//!
//! # Examples
//!
//! ```ignore
//! let store = SnapshotStore::new(Snapshot::new(config, TokenList::default(), vec![]));
//! store.replace_tokens(TokenList::new(refreshed));
//! let snapshot = store.current();
//! ```

use crate::domain::entities::TokenList;
use crate::infrastructure::config::settings::{SystemConfig, TokenConfig};
use parking_lot::RwLock;
use std::sync::Arc;

/// Immutable view of configuration and token registry for one request.
#[derive(Debug, Clone)]
pub struct Snapshot {
    config: Arc<SystemConfig>,
    tokens: Arc<TokenList>,
    token_configs: Arc<[TokenConfig]>,
}

impl Snapshot {
    /// Creates a snapshot.
    #[must_use]
    pub fn new(config: SystemConfig, tokens: TokenList, token_configs: Vec<TokenConfig>) -> Self {
        Self {
            config: Arc::new(config),
            tokens: Arc::new(tokens),
            token_configs: token_configs.into(),
        }
    }

    /// Returns the system configuration.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    /// Returns the token registry.
    #[inline]
    #[must_use]
    pub fn tokens(&self) -> &TokenList {
        &self.tokens
    }

    /// Returns the per-token configuration entries.
    #[inline]
    #[must_use]
    pub fn token_configs(&self) -> &[TokenConfig] {
        &self.token_configs
    }

    /// Returns the fee factor override configured for `symbol`, if any.
    #[must_use]
    pub fn token_fee_factor(&self, symbol: &str) -> Option<u32> {
        self.token_configs
            .iter()
            .find(|entry| entry.matches(symbol))
            .and_then(|entry| entry.fee_factor)
    }

    fn with_tokens(&self, tokens: TokenList) -> Self {
        Self {
            config: Arc::clone(&self.config),
            tokens: Arc::new(tokens),
            token_configs: Arc::clone(&self.token_configs),
        }
    }

    fn with_token_configs(&self, token_configs: Vec<TokenConfig>) -> Self {
        Self {
            config: Arc::clone(&self.config),
            tokens: Arc::clone(&self.tokens),
            token_configs: token_configs.into(),
        }
    }

    fn with_config(&self, config: SystemConfig) -> Self {
        Self {
            config: Arc::new(config),
            tokens: Arc::clone(&self.tokens),
            token_configs: Arc::clone(&self.token_configs),
        }
    }
}

/// Shared holder of the current snapshot, written by refreshers.
#[derive(Debug)]
pub struct SnapshotStore {
    current: RwLock<Arc<Snapshot>>,
}

impl SnapshotStore {
    /// Creates a store holding `initial`.
    #[must_use]
    pub fn new(initial: Snapshot) -> Self {
        Self {
            current: RwLock::new(Arc::new(initial)),
        }
    }

    /// Returns the current snapshot.
    #[must_use]
    pub fn current(&self) -> Arc<Snapshot> {
        Arc::clone(&self.current.read())
    }

    /// Publishes a refreshed token list.
    pub fn replace_tokens(&self, tokens: TokenList) {
        let mut guard = self.current.write();
        *guard = Arc::new(guard.with_tokens(tokens));
    }

    /// Publishes refreshed per-token configuration.
    pub fn replace_token_configs(&self, token_configs: Vec<TokenConfig>) {
        let mut guard = self.current.write();
        *guard = Arc::new(guard.with_token_configs(token_configs));
    }

    /// Publishes a refreshed system configuration.
    pub fn replace_config(&self, config: SystemConfig) {
        let mut guard = self.current.write();
        *guard = Arc::new(guard.with_config(config));
    }
}
