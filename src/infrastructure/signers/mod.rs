//! # Signer Port
//!
//! One order signer per protocol. Each protocol needs a different set of
//! extra parameters, modeled by [`SigningRequest`]; the dispatcher builds
//! the variant and the [`SignerRegistry`] routes it to the signer for that
//! protocol.
//!
//! # Examples
//!
//! ```ignore
//! use quote_relay::infrastructure::signers::{SignerRegistry, SigningRequest};
//!
//! let registry = SignerRegistry::from_timeout(5000)?;
//! let signed = registry.for_protocol(request.protocol()).sign(order, &request).await?;
//! ```

pub mod amm;
pub mod remote;

use crate::domain::entities::Order;
use crate::domain::value_objects::{Address, PermitType, Protocol, WalletType};
use crate::infrastructure::upstream::error::UpstreamResult;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;

pub use amm::AmmOrderBuilder;
pub use remote::RemoteOrderSigner;

/// Returns the collaborator name used in upstream errors for `protocol`.
#[must_use]
pub fn signer_service(protocol: Protocol) -> String {
    format!("signer:{}", protocol)
}

/// Where and with which salt a signature is produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SigningContext {
    /// Remote signing endpoint.
    pub signing_url: Option<String>,
    /// Salt the order is signed with.
    pub salt: String,
}

impl SigningContext {
    /// Creates a signing context.
    #[must_use]
    pub fn new(signing_url: Option<String>, salt: impl Into<String>) -> Self {
        Self {
            signing_url,
            salt: salt.into(),
        }
    }
}

/// Protocol-specific signing parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SigningRequest {
    /// AMMV1: maker is the AMM wrapper.
    AmmV1 {
        /// AMM wrapper address.
        maker_address: Address,
        /// Configured native-asset sentinel.
        native_token: Address,
        /// Wrapped-native token contract.
        wrapped_native: Address,
    },
    /// AMMV2: like AMMV1 plus the quote's opaque payload.
    AmmV2 {
        /// AMM wrapper v2 address.
        maker_address: Address,
        /// Configured native-asset sentinel.
        native_token: Address,
        /// Wrapped-native token contract.
        wrapped_native: Address,
        /// Opaque payload from the quote.
        payload: Option<String>,
    },
    /// PMMV5: signed by the market maker signer.
    PmmV5 {
        /// User address, lower-cased.
        user_addr: Address,
        /// Chain id.
        chain_id: u64,
        /// PMM contract from the address book.
        verifying_contract: Address,
        /// Endpoint and salt.
        context: SigningContext,
    },
    /// RFQV1: like PMMV5 plus the wallet type.
    RfqV1 {
        /// User address, lower-cased.
        user_addr: Address,
        /// Chain id.
        chain_id: u64,
        /// RFQV1 contract from the address book.
        verifying_contract: Address,
        /// Market maker wallet type.
        wallet_type: WalletType,
        /// Endpoint and salt.
        context: SigningContext,
    },
    /// RFQV2: like RFQV1 plus the permit type.
    RfqV2 {
        /// User address, lower-cased.
        user_addr: Address,
        /// Chain id.
        chain_id: u64,
        /// RFQV2 contract from the address book.
        verifying_contract: Address,
        /// Market maker wallet type.
        wallet_type: WalletType,
        /// Token permit type.
        permit_type: PermitType,
        /// Endpoint and salt.
        context: SigningContext,
    },
}

impl SigningRequest {
    /// Returns the protocol this request belongs to.
    #[must_use]
    pub const fn protocol(&self) -> Protocol {
        match self {
            Self::AmmV1 { .. } => Protocol::AmmV1,
            Self::AmmV2 { .. } => Protocol::AmmV2,
            Self::PmmV5 { .. } => Protocol::PmmV5,
            Self::RfqV1 { .. } => Protocol::RfqV1,
            Self::RfqV2 { .. } => Protocol::RfqV2,
        }
    }

    /// Returns the signing context of signature-bearing protocols.
    #[must_use]
    pub fn context(&self) -> Option<&SigningContext> {
        match self {
            Self::AmmV1 { .. } | Self::AmmV2 { .. } => None,
            Self::PmmV5 { context, .. }
            | Self::RfqV1 { context, .. }
            | Self::RfqV2 { context, .. } => Some(context),
        }
    }
}

/// Finalizes an order for one protocol.
#[async_trait]
pub trait OrderSigner: Send + Sync + fmt::Debug {
    /// Applies protocol overrides and attaches a signature where required.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError` if the signer rejects the order, cannot be
    /// reached, or receives a request for another protocol.
    async fn sign(&self, order: Order, request: &SigningRequest) -> UpstreamResult<Order>;
}

/// One signer per protocol.
#[derive(Debug, Clone)]
pub struct SignerRegistry {
    amm_v1: Arc<dyn OrderSigner>,
    amm_v2: Arc<dyn OrderSigner>,
    pmm_v5: Arc<dyn OrderSigner>,
    rfq_v1: Arc<dyn OrderSigner>,
    rfq_v2: Arc<dyn OrderSigner>,
}

impl SignerRegistry {
    /// Creates a registry routing every protocol to `signer`.
    #[must_use]
    pub fn uniform(signer: Arc<dyn OrderSigner>) -> Self {
        Self {
            amm_v1: Arc::clone(&signer),
            amm_v2: Arc::clone(&signer),
            pmm_v5: Arc::clone(&signer),
            rfq_v1: Arc::clone(&signer),
            rfq_v2: signer,
        }
    }

    /// Creates the standard registry: the AMM builder for AMMV1/AMMV2 and
    /// remote signers for PMMV5, RFQV1 and RFQV2.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Misconfigured` if an HTTP client cannot be built.
    pub fn from_timeout(timeout_ms: u64) -> UpstreamResult<Self> {
        let amm: Arc<dyn OrderSigner> = Arc::new(AmmOrderBuilder::new());
        Ok(Self {
            amm_v1: Arc::clone(&amm),
            amm_v2: amm,
            pmm_v5: Arc::new(RemoteOrderSigner::new(Protocol::PmmV5, timeout_ms)?),
            rfq_v1: Arc::new(RemoteOrderSigner::new(Protocol::RfqV1, timeout_ms)?),
            rfq_v2: Arc::new(RemoteOrderSigner::new(Protocol::RfqV2, timeout_ms)?),
        })
    }

    /// Replaces the signer for `protocol`.
    #[must_use]
    pub fn with_signer(mut self, protocol: Protocol, signer: Arc<dyn OrderSigner>) -> Self {
        match protocol {
            Protocol::AmmV1 => self.amm_v1 = signer,
            Protocol::AmmV2 => self.amm_v2 = signer,
            Protocol::PmmV5 => self.pmm_v5 = signer,
            Protocol::RfqV1 => self.rfq_v1 = signer,
            Protocol::RfqV2 => self.rfq_v2 = signer,
        }
        self
    }

    /// Returns the signer for `protocol`.
    #[must_use]
    pub fn for_protocol(&self, protocol: Protocol) -> &dyn OrderSigner {
        match protocol {
            Protocol::AmmV1 => self.amm_v1.as_ref(),
            Protocol::AmmV2 => self.amm_v2.as_ref(),
            Protocol::PmmV5 => self.pmm_v5.as_ref(),
            Protocol::RfqV1 => self.rfq_v1.as_ref(),
            Protocol::RfqV2 => self.rfq_v2.as_ref(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::upstream::error::UpstreamError;

    #[derive(Debug)]
    struct Refusing(&'static str);

    #[async_trait]
    impl OrderSigner for Refusing {
        async fn sign(&self, _order: Order, request: &SigningRequest) -> UpstreamResult<Order> {
            Err(UpstreamError::rejected(
                signer_service(request.protocol()),
                self.0,
            ))
        }
    }

    fn addr(byte: char) -> Address {
        Address::parse(&format!("0x{}", byte.to_string().repeat(40))).unwrap()
    }

    #[test]
    fn request_reports_protocol_and_context() {
        let amm = SigningRequest::AmmV1 {
            maker_address: addr('1'),
            native_token: Address::zero(),
            wrapped_native: addr('2'),
        };
        assert_eq!(amm.protocol(), Protocol::AmmV1);
        assert!(amm.context().is_none());

        let rfq = SigningRequest::RfqV2 {
            user_addr: addr('3'),
            chain_id: 1,
            verifying_contract: addr('4'),
            wallet_type: WalletType::Eoa,
            permit_type: PermitType::ApproveRfqv2,
            context: SigningContext::new(None, "0x01"),
        };
        assert_eq!(rfq.protocol(), Protocol::RfqV2);
        assert_eq!(rfq.context().unwrap().salt, "0x01");
    }

    #[test]
    fn service_name_includes_protocol() {
        assert_eq!(signer_service(Protocol::RfqV1), "signer:RFQV1");
    }

    #[test]
    fn with_signer_routes_one_protocol() {
        let registry = SignerRegistry::uniform(Arc::new(Refusing("default")))
            .with_signer(Protocol::AmmV1, Arc::new(AmmOrderBuilder::new()));

        assert!(format!("{:?}", registry.for_protocol(Protocol::AmmV1)).contains("AmmOrderBuilder"));
        assert!(format!("{:?}", registry.for_protocol(Protocol::PmmV5)).contains("Refusing"));
    }

    #[test]
    fn standard_registry_builds() {
        let registry = SignerRegistry::from_timeout(1000).unwrap();
        assert!(format!("{:?}", registry.for_protocol(Protocol::AmmV2)).contains("AmmOrderBuilder"));
        assert!(
            format!("{:?}", registry.for_protocol(Protocol::RfqV2)).contains("RemoteOrderSigner")
        );
    }
}
