//! # Remote Order Signer
//!
//! Signs PMMV5, RFQV1 and RFQV2 orders through the market maker's signing
//! endpoint. The order (with its salt) and the protocol extras are POSTed
//! as JSON; the endpoint answers `{"signature": "0x..."}`.

use crate::domain::entities::Order;
use crate::domain::value_objects::{Address, PermitType, Protocol, WalletType};
use crate::infrastructure::signers::{OrderSigner, SigningRequest, signer_service};
use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use crate::infrastructure::upstream::http_client::UpstreamHttpClient;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SignBody<'a> {
    protocol: Protocol,
    order: &'a Order,
    user_addr: &'a Address,
    chain_id: u64,
    verifying_contract: &'a Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    wallet_type: Option<WalletType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    permit_type: Option<PermitType>,
}

impl<'a> SignBody<'a> {
    fn from_request(order: &'a Order, request: &'a SigningRequest) -> Option<Self> {
        let body = match request {
            SigningRequest::AmmV1 { .. } | SigningRequest::AmmV2 { .. } => return None,
            SigningRequest::PmmV5 {
                user_addr,
                chain_id,
                verifying_contract,
                ..
            } => Self {
                protocol: Protocol::PmmV5,
                order,
                user_addr,
                chain_id: *chain_id,
                verifying_contract,
                wallet_type: None,
                permit_type: None,
            },
            SigningRequest::RfqV1 {
                user_addr,
                chain_id,
                verifying_contract,
                wallet_type,
                ..
            } => Self {
                protocol: Protocol::RfqV1,
                order,
                user_addr,
                chain_id: *chain_id,
                verifying_contract,
                wallet_type: Some(*wallet_type),
                permit_type: None,
            },
            SigningRequest::RfqV2 {
                user_addr,
                chain_id,
                verifying_contract,
                wallet_type,
                permit_type,
                ..
            } => Self {
                protocol: Protocol::RfqV2,
                order,
                user_addr,
                chain_id: *chain_id,
                verifying_contract,
                wallet_type: Some(*wallet_type),
                permit_type: Some(*permit_type),
            },
        };
        Some(body)
    }
}

#[derive(Debug, Deserialize)]
struct SignResponse {
    signature: Option<String>,
}

/// Signer delegating to a remote signing endpoint.
#[derive(Debug, Clone)]
pub struct RemoteOrderSigner {
    protocol: Protocol,
    client: UpstreamHttpClient,
}

impl RemoteOrderSigner {
    /// Creates a signer for `protocol`.
    ///
    /// # Errors
    ///
    /// Returns `UpstreamError::Misconfigured` if the HTTP client cannot be built.
    pub fn new(protocol: Protocol, timeout_ms: u64) -> UpstreamResult<Self> {
        Ok(Self {
            protocol,
            client: UpstreamHttpClient::new(signer_service(protocol), timeout_ms)?,
        })
    }

    /// Returns the protocol this signer handles.
    #[inline]
    #[must_use]
    pub fn protocol(&self) -> Protocol {
        self.protocol
    }

    fn misconfigured(&self, message: impl Into<String>) -> UpstreamError {
        UpstreamError::misconfigured(signer_service(self.protocol), message)
    }
}

#[async_trait]
impl OrderSigner for RemoteOrderSigner {
    async fn sign(&self, mut order: Order, request: &SigningRequest) -> UpstreamResult<Order> {
        if request.protocol() != self.protocol {
            return Err(self.misconfigured(format!(
                "received a {} request",
                request.protocol()
            )));
        }
        let context = request
            .context()
            .ok_or_else(|| self.misconfigured("request carries no signing context"))?;
        let url = context
            .signing_url
            .as_deref()
            .ok_or_else(|| self.misconfigured("no signing endpoint configured"))?;

        order.set_salt(context.salt.clone());

        let body = SignBody::from_request(&order, request)
            .ok_or_else(|| self.misconfigured("request carries no signing parameters"))?;
        let response: SignResponse = self.client.post(url, &body).await?;

        match response.signature {
            Some(signature) if !signature.is_empty() => {
                order.set_signature(signature);
                Ok(order)
            }
            _ => Err(UpstreamError::protocol(
                signer_service(self.protocol),
                "response carries no signature",
            )),
        }
    }
}
