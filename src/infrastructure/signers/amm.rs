//! # AMM Order Builder
//!
//! Finalizes AMMV1 and AMMV2 orders. AMM orders are filled by the wrapper
//! contract on chain, so they carry no signature: the builder only points
//! the maker at the wrapper and wraps a maker asset that is still the
//! configured native sentinel.

use crate::domain::entities::Order;
use crate::domain::value_objects::Address;
use crate::infrastructure::signers::{OrderSigner, SigningRequest, signer_service};
use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
use async_trait::async_trait;

/// Builder for AMMV1 and AMMV2 orders.
#[derive(Debug, Clone, Copy, Default)]
pub struct AmmOrderBuilder;

impl AmmOrderBuilder {
    /// Creates the builder.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn finalize(
        mut order: Order,
        request: &SigningRequest,
        maker_address: &Address,
        native_token: &Address,
        wrapped_native: &Address,
        payload: Option<String>,
    ) -> UpstreamResult<Order> {
        order.set_maker_address(maker_address.clone());
        if order.maker_asset_address() == native_token {
            order
                .set_maker_asset_address(wrapped_native.clone())
                .map_err(|e| {
                    UpstreamError::invalid_request(signer_service(request.protocol()), e.to_string())
                })?;
        }
        order.set_payload(payload);
        Ok(order)
    }
}

#[async_trait]
impl OrderSigner for AmmOrderBuilder {
    async fn sign(&self, order: Order, request: &SigningRequest) -> UpstreamResult<Order> {
        match request {
            SigningRequest::AmmV1 {
                maker_address,
                native_token,
                wrapped_native,
            } => Self::finalize(
                order,
                request,
                maker_address,
                native_token,
                wrapped_native,
                None,
            ),
            SigningRequest::AmmV2 {
                maker_address,
                native_token,
                wrapped_native,
                payload,
            } => Self::finalize(
                order,
                request,
                maker_address,
                native_token,
                wrapped_native,
                payload.clone(),
            ),
            other => Err(UpstreamError::misconfigured(
                signer_service(other.protocol()),
                "AMM builder cannot finalize this protocol",
            )),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::OrderTerms;
    use crate::domain::value_objects::{BaseUnits, Timestamp};
    use crate::infrastructure::signers::SigningContext;

    fn addr(byte: char) -> Address {
        Address::parse(&format!("0x{}", byte.to_string().repeat(40))).unwrap()
    }

    fn order_with_maker_asset(maker_asset: Address) -> Order {
        Order::new(OrderTerms {
            maker_address: addr('1'),
            taker_address: addr('2'),
            maker_asset_address: maker_asset,
            taker_asset_address: addr('4'),
            maker_asset_amount: BaseUnits::zero(),
            taker_asset_amount: BaseUnits::zero(),
            sender_address: addr('5'),
            fee_recipient_address: addr('6'),
            exchange_address: addr('7'),
            expiration: Timestamp::from_secs(1_700_000_000).unwrap(),
            fee_factor: 10,
        })
        .unwrap()
    }

    #[tokio::test]
    async fn ammv1_sets_wrapper_as_maker() {
        let request = SigningRequest::AmmV1 {
            maker_address: addr('9'),
            native_token: Address::zero(),
            wrapped_native: addr('c'),
        };
        let order = AmmOrderBuilder::new()
            .sign(order_with_maker_asset(addr('3')), &request)
            .await
            .unwrap();

        assert_eq!(order.maker_address(), &addr('9'));
        assert_eq!(order.maker_asset_address(), &addr('3'));
        assert!(order.signature().is_none());
        assert!(order.payload().is_none());
    }

    #[tokio::test]
    async fn native_sentinel_maker_asset_is_wrapped() {
        let request = SigningRequest::AmmV1 {
            maker_address: addr('9'),
            native_token: addr('e'),
            wrapped_native: addr('c'),
        };
        let order = AmmOrderBuilder::new()
            .sign(order_with_maker_asset(addr('e')), &request)
            .await
            .unwrap();

        assert_eq!(order.maker_asset_address(), &addr('c'));
        assert!(order.maker_asset_data().ends_with(&"c".repeat(40)));
    }

    #[tokio::test]
    async fn zero_address_is_not_the_sentinel_unless_configured() {
        let request = SigningRequest::AmmV2 {
            maker_address: addr('a'),
            native_token: addr('e'),
            wrapped_native: addr('c'),
            payload: None,
        };
        let order = AmmOrderBuilder::new()
            .sign(order_with_maker_asset(Address::zero()), &request)
            .await
            .unwrap();

        assert!(order.maker_asset_address().is_zero());
    }

    #[tokio::test]
    async fn ammv2_attaches_payload() {
        let request = SigningRequest::AmmV2 {
            maker_address: addr('a'),
            native_token: Address::zero(),
            wrapped_native: addr('c'),
            payload: Some("0xdeadbeef".to_string()),
        };
        let order = AmmOrderBuilder::new()
            .sign(order_with_maker_asset(addr('3')), &request)
            .await
            .unwrap();

        assert_eq!(order.maker_address(), &addr('a'));
        assert_eq!(order.payload(), Some("0xdeadbeef"));
    }

    #[tokio::test]
    async fn refuses_signature_protocols() {
        let request = SigningRequest::PmmV5 {
            user_addr: addr('b'),
            chain_id: 1,
            verifying_contract: addr('6'),
            context: SigningContext::new(None, "0x01"),
        };
        let err = AmmOrderBuilder::new()
            .sign(order_with_maker_asset(addr('3')), &request)
            .await
            .unwrap_err();
        assert!(matches!(err, UpstreamError::Misconfigured { .. }));
        assert_eq!(err.service(), "signer:PMMV5");
    }
}
