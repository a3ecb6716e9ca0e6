//! # Use Cases
//!
//! Entry points that drive the application services end to end.

pub mod new_order;

pub use new_order::NewOrderService;
