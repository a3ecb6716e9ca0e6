//! # Application Layer
//!
//! The quote-to-order pipeline and its error taxonomy.

pub mod error;
pub mod services;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use use_cases::NewOrderService;
