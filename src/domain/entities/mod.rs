//! # Domain Entities
//!
//! - [`QuoteRequest`] / [`NormalizedQuery`]: The user's swap request, raw and validated
//! - [`PriceQuote`]: The market maker's price for a request
//! - [`TokenDescriptor`] / [`TokenList`]: Registry tokens and their lookup table
//! - [`Order`]: The order handed to signers and returned to the user

pub mod order;
pub mod price_quote;
pub mod quote_request;
pub mod token;

pub use order::{Order, OrderTerms};
pub use price_quote::PriceQuote;
pub use quote_request::{NormalizedQuery, QuoteRequest};
pub use token::{TokenDescriptor, TokenList};
