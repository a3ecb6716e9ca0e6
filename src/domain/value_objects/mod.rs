//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Chain Types
//!
//! - [`Address`]: Lower-cased EVM address with asset-data encoding
//! - [`BaseUnits`]: Exact on-chain integer token amount
//!
//! ## Arithmetic
//!
//! - [`ArithmeticError`]: Error type for arithmetic failures
//! - [`CheckedArithmetic`]: Trait for safe arithmetic operations
//! - [`truncate_dp`]: Truncation toward zero
//!
//! ## Domain Enums
//!
//! - [`OrderSide`]: Buy or Sell
//! - [`Protocol`]: The five order protocol variants
//! - [`WalletType`], [`PermitType`]: Signing extras for RFQ orders

pub mod address;
pub mod arithmetic;
pub mod base_units;
pub mod enums;
pub mod salt;
pub mod timestamp;

pub use address::Address;
pub use arithmetic::{ArithmeticError, ArithmeticResult, CheckedArithmetic, truncate_dp};
pub use base_units::BaseUnits;
pub use enums::{OrderSide, ParseEnumError, PermitType, Protocol, WalletType};
pub use salt::generate_salt;
pub use timestamp::Timestamp;
