//! # Quote Relay
//!
//! Quote-to-order construction core of a decentralized-exchange relay.
//!
//! A user's swap request is validated, priced by the market maker's quoter,
//! converted into exact on-chain asset amounts and assembled into an order
//! for one of five protocols (AMMV1, AMMV2, PMMV5, RFQV1, RFQV2), which is
//! then finalized by that protocol's signer.
//!
//! ## Layers
//!
//! - [`domain`]: Value objects, entities and pure computations
//! - [`application`]: The pipeline stages and [`application::NewOrderService`]
//! - [`infrastructure`]: Quoter and signer adapters, configuration, tracing
//!
//! Every request yields a [`application::services::QuoteResponse`]; errors
//! never escape the pipeline.

pub mod application;
pub mod domain;
pub mod infrastructure;
