//! # Domain Errors
//!
//! Errors raised by value objects and pure domain services.

use crate::domain::value_objects::arithmetic::ArithmeticError;
use thiserror::Error;

/// Domain layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    /// Address is not `0x` followed by 40 hex digits.
    #[error("invalid address: '{0}'")]
    InvalidAddress(String),

    /// Amount is not a usable positive decimal.
    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    /// Quoted rate is not a usable positive decimal.
    #[error("invalid rate: {0}")]
    InvalidRate(String),

    /// Checked arithmetic failed.
    #[error(transparent)]
    Arithmetic(#[from] ArithmeticError),
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
