//! # Domain Layer
//!
//! Value objects, entities and pure services of the quote-to-order core.
//! Nothing in this layer performs I/O.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;
