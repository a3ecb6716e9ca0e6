//! # Application Services
//!
//! The stages of the quote-to-order pipeline:
//!
//! - [`validator`]: Raw request to normalized query
//! - [`order_assembler`]: Query and rate to unsigned order
//! - [`protocol_dispatcher`]: Per-protocol finalization and signing
//! - [`response`]: Uniform success/failure response

pub mod order_assembler;
pub mod protocol_dispatcher;
pub mod response;
pub mod validator;

pub use order_assembler::{assemble_order, assemble_order_at};
pub use protocol_dispatcher::{DispatchOutcome, dispatch, signing_request, trade_bounds};
pub use response::QuoteResponse;
pub use validator::validate_request;
