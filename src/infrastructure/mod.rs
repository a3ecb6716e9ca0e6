//! # Infrastructure Layer
//!
//! Adapters for the collaborators the pipeline awaits and the read-only
//! configuration it consumes.
//!
//! - [`config`]: System configuration, token configuration and snapshots
//! - [`quoter`]: Market maker price source
//! - [`signers`]: Per-protocol order finalization and signing
//! - [`upstream`]: Shared HTTP client and upstream error type
//! - [`telemetry`]: Tracing subscriber setup

pub mod config;
pub mod quoter;
pub mod signers;
pub mod telemetry;
pub mod upstream;
