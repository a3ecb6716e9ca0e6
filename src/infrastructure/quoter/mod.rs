//! # Quoter Port
//!
//! The market maker pricing collaborator. One call per request, awaited,
//! never retried by the pipeline.
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::quoter::Quoter;
//!
//! let quote = quoter.get_price(&query).await?;
//! println!("rate {} quote {}", quote.rate, quote.quote_id);
//! ```

pub mod http;

use crate::domain::entities::{NormalizedQuery, PriceQuote};
use crate::infrastructure::upstream::error::UpstreamResult;
use async_trait::async_trait;

pub use http::HttpQuoter;

/// Collaborator name used in upstream errors.
pub const QUOTER_SERVICE: &str = "quoter";

/// Source of price quotes.
#[async_trait]
pub trait Quoter: Send + Sync + std::fmt::Debug {
    /// Requests a price for a normalized query.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` if the market maker cannot be reached, answers
    /// malformed data, or declines to quote.
    async fn get_price(&self, query: &NormalizedQuery) -> UpstreamResult<PriceQuote>;
}
