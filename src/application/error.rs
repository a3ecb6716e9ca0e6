//! # Application Errors
//!
//! Error types for the quote-to-order pipeline.
//!
//! Every variant is fatal for the request that raised it. The response
//! assembler converts each of them into a uniform failure response, so the
//! `Display` output of these errors is what the user reads.
//!
//! # Error Hierarchy
//!
//! ```text
//! ApplicationError
//! ├── Validation(String)           - Malformed or unsafe request
//! ├── TokenNotFound(String)        - Token missing from the registry
//! ├── UnrecognizedProtocol(String) - Unknown protocol tag
//! ├── Upstream(UpstreamError)      - Quoter or signer failure
//! └── Domain(DomainError)          - Amount or address computation failure
//! ```
//!
//! # Examples
//!
//! ```
//! use quote_relay::application::error::ApplicationError;
//!
//! let err = ApplicationError::validation("uniqId is required");
//! assert!(err.is_validation());
//! assert_eq!(err.to_string(), "uniqId is required");
//!
//! let err = ApplicationError::unrecognized_protocol("PMMV9");
//! assert_eq!(err.to_string(), "Unrecognized protocol: PMMV9");
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::upstream::error::UpstreamError;
use thiserror::Error;

/// Application layer error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplicationError {
    /// Request validation failed. The message is surfaced verbatim.
    #[error("{0}")]
    Validation(String),

    /// A token referenced by the request is not in the registry.
    #[error("token not found: {0}")]
    TokenNotFound(String),

    /// The protocol tag is not one of the supported variants.
    #[error("Unrecognized protocol: {0}")]
    UnrecognizedProtocol(String),

    /// Quoter or signer failure.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    /// Amount or address computation failure.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a token not found error.
    #[must_use]
    pub fn token_not_found(address: impl Into<String>) -> Self {
        Self::TokenNotFound(address.into())
    }

    /// Creates an unrecognized protocol error.
    #[must_use]
    pub fn unrecognized_protocol(tag: impl Into<String>) -> Self {
        Self::UnrecognizedProtocol(tag.into())
    }

    /// Returns true if the caller sent a malformed request.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::UnrecognizedProtocol(_))
    }

    /// Returns true if a registry lookup failed.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::TokenNotFound(_))
    }

    /// Returns true if an external collaborator failed.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream(_))
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[cfg(test)]
mod tests {
    use super::*;

    mod construction {
        use super::*;

        #[test]
        fn validation_message_is_verbatim() {
            let err = ApplicationError::validation("amount must be a positive number");
            assert_eq!(err.to_string(), "amount must be a positive number");
        }

        #[test]
        fn token_not_found_names_address() {
            let err = ApplicationError::token_not_found("0xabc");
            assert_eq!(err.to_string(), "token not found: 0xabc");
        }

        #[test]
        fn upstream_is_transparent() {
            let err: ApplicationError = UpstreamError::rejected("quoter", "pair disabled").into();
            assert_eq!(err.to_string(), "quoter rejected: pair disabled");
        }

        #[test]
        fn domain_is_transparent() {
            let err: ApplicationError = DomainError::InvalidAddress("0x1".to_string()).into();
            assert_eq!(err.to_string(), "invalid address: '0x1'");
        }
    }

    mod classification {
        use super::*;

        #[test]
        fn predicates() {
            assert!(ApplicationError::validation("x").is_validation());
            assert!(ApplicationError::unrecognized_protocol("X").is_validation());
            assert!(ApplicationError::token_not_found("0x").is_not_found());
            assert!(ApplicationError::from(UpstreamError::timeout("quoter", "t")).is_upstream());
            assert!(!ApplicationError::validation("x").is_upstream());
        }
    }
}
