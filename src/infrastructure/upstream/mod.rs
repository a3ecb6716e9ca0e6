//! # Upstream Plumbing
//!
//! Error type and HTTP client shared by the quoter and signer adapters.

pub mod error;
pub mod http_client;

pub use error::{UpstreamError, UpstreamResult};
pub use http_client::UpstreamHttpClient;
