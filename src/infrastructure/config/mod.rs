//! # Configuration
//!
//! System configuration, per-token configuration and the snapshot store
//! that out-of-band refreshers publish into.

pub mod logging;
pub mod settings;
pub mod snapshot;

pub use logging::{LogFormat, LoggingConfig};
pub use settings::{AddressBook, ConfigError, QuoterConfig, SystemConfig, TokenConfig};
pub use snapshot::{Snapshot, SnapshotStore};
