//! # Upstream Errors
//!
//! Failures of the external collaborators the core awaits: the market
//! maker's quoter and the protocol signers.
//!
//! Every variant names the collaborator that failed so the message that
//! reaches the user carries that context. The core never retries; the
//! retryable classification is informational for callers.
//!
//! # Examples
//!
//! ```
//! use quote_relay::infrastructure::upstream::error::UpstreamError;
//!
//! let error = UpstreamError::timeout("quoter", "request timed out after 5000ms");
//! assert!(error.is_retryable());
//! assert_eq!(error.service(), "quoter");
//!
//! let error = UpstreamError::rejected("quoter", "pair not supported");
//! assert!(!error.is_retryable());
//! ```

use thiserror::Error;

/// Error type for quoter and signer calls.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UpstreamError {
    /// Request timed out.
    #[error("{service} timeout: {message}")]
    Timeout {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// Network or connection error.
    #[error("{service} connection error: {message}")]
    Connection {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// Authentication or authorization failure.
    #[error("{service} authentication error: {message}")]
    Authentication {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// Rate limit exceeded.
    #[error("{service} rate limit exceeded: {message}")]
    RateLimited {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// The collaborator refused the request parameters.
    #[error("{service} invalid request: {message}")]
    InvalidRequest {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// The collaborator answered but declined (e.g. not exchangeable).
    #[error("{service} rejected: {message}")]
    Rejected {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// Response could not be understood.
    #[error("{service} protocol error: {message}")]
    Protocol {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },

    /// The collaborator is not configured for this request.
    #[error("{service} misconfigured: {message}")]
    Misconfigured {
        /// Collaborator name.
        service: String,
        /// Error message.
        message: String,
    },
}

impl UpstreamError {
    /// Creates a timeout error.
    #[must_use]
    pub fn timeout(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Timeout {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a connection error.
    #[must_use]
    pub fn connection(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Connection {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an authentication error.
    #[must_use]
    pub fn authentication(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Authentication {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a rate limited error.
    #[must_use]
    pub fn rate_limited(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::RateLimited {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates an invalid request error.
    #[must_use]
    pub fn invalid_request(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRequest {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a rejection error.
    #[must_use]
    pub fn rejected(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Rejected {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a protocol error.
    #[must_use]
    pub fn protocol(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Protocol {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Creates a misconfiguration error.
    #[must_use]
    pub fn misconfigured(service: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Misconfigured {
            service: service.into(),
            message: message.into(),
        }
    }

    /// Returns the name of the failing collaborator.
    #[must_use]
    pub fn service(&self) -> &str {
        match self {
            Self::Timeout { service, .. }
            | Self::Connection { service, .. }
            | Self::Authentication { service, .. }
            | Self::RateLimited { service, .. }
            | Self::InvalidRequest { service, .. }
            | Self::Rejected { service, .. }
            | Self::Protocol { service, .. }
            | Self::Misconfigured { service, .. } => service,
        }
    }

    /// Returns true if this error is transient.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::Timeout { .. } | Self::Connection { .. } | Self::RateLimited { .. }
        )
    }
}

/// Result type for upstream calls.
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_is_retryable() {
        assert!(UpstreamError::timeout("quoter", "slow").is_retryable());
        assert!(UpstreamError::connection("quoter", "refused").is_retryable());
        assert!(UpstreamError::rate_limited("quoter", "429").is_retryable());
    }

    #[test]
    fn rejection_is_not_retryable() {
        assert!(!UpstreamError::rejected("quoter", "no").is_retryable());
        assert!(!UpstreamError::misconfigured("signer", "no url").is_retryable());
    }

    #[test]
    fn display_folds_service_context() {
        let error = UpstreamError::protocol("signer:PMMV5", "missing signature");
        assert_eq!(
            error.to_string(),
            "signer:PMMV5 protocol error: missing signature"
        );
        assert_eq!(error.service(), "signer:PMMV5");
    }
}
