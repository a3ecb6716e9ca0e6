//! # Protocol Dispatcher
//!
//! Selects the finalization and signing path for each protocol variant.
//!
//! | Protocol | Before signing |
//! |----------|----------------|
//! | AMMV1 | min/max from the base token's trade bounds; maker = AMM wrapper |
//! | AMMV2 | as AMMV1 with the AMM wrapper v2 and the quote payload |
//! | PMMV5 | user address, chain id, PMM contract, signing context |
//! | RFQV1 | as PMMV5 with the RFQV1 contract and wallet type |
//! | RFQV2 | as RFQV1 with the RFQV2 contract and permit type |
//!
//! Tags outside these five never reach the dispatcher: the validator
//! rejects them as unrecognized. After the signer returns, the order's
//! `protocol` and `quoteId` are overwritten from the request and quote.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::domain::entities::{NormalizedQuery, Order, PriceQuote};
use crate::domain::value_objects::{Protocol, generate_salt};
use crate::infrastructure::config::Snapshot;
use crate::infrastructure::signers::{
    SignerRegistry, SigningContext, SigningRequest, signer_service,
};
use crate::infrastructure::upstream::error::UpstreamError;
use rust_decimal::Decimal;
use tracing::debug;

/// A finalized order together with the bounds reported to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// The signed (or AMM-finalized) order.
    pub order: Order,
    /// Minimum trade amount.
    pub min_amount: Decimal,
    /// Maximum trade amount.
    pub max_amount: Decimal,
}

/// Builds the protocol-specific signing request.
///
/// The salt is the quote's salt, or a fresh random one when the quoter
/// supplied none.
#[must_use]
pub fn signing_request(
    query: &NormalizedQuery,
    quote: &PriceQuote,
    snapshot: &Snapshot,
) -> SigningRequest {
    let config = snapshot.config();
    let context = || {
        SigningContext::new(
            config.signing_url.clone(),
            quote.salt.clone().unwrap_or_else(generate_salt),
        )
    };

    match query.protocol {
        Protocol::AmmV1 => SigningRequest::AmmV1 {
            maker_address: config.addresses.amm_wrapper.clone(),
            native_token: config.native_token_address.clone(),
            wrapped_native: config.wrapped_native_address.clone(),
        },
        Protocol::AmmV2 => SigningRequest::AmmV2 {
            maker_address: config.addresses.amm_wrapper_v2.clone(),
            native_token: config.native_token_address.clone(),
            wrapped_native: config.wrapped_native_address.clone(),
            payload: quote.payload.clone(),
        },
        Protocol::PmmV5 => SigningRequest::PmmV5 {
            user_addr: query.user_addr.clone(),
            chain_id: config.chain_id,
            verifying_contract: config.addresses.pmm.clone(),
            context: context(),
        },
        Protocol::RfqV1 => SigningRequest::RfqV1 {
            user_addr: query.user_addr.clone(),
            chain_id: config.chain_id,
            verifying_contract: config.addresses.rfqv1.clone(),
            wallet_type: config.wallet_type,
            context: context(),
        },
        Protocol::RfqV2 => SigningRequest::RfqV2 {
            user_addr: query.user_addr.clone(),
            chain_id: config.chain_id,
            verifying_contract: config.addresses.rfqv2.clone(),
            wallet_type: config.wallet_type,
            permit_type: config.permit_type,
            context: context(),
        },
    }
}

/// Returns the min/max bounds reported for `query`.
///
/// AMM protocols ignore the quoted bounds and use the base token's
/// configured trade bounds.
///
/// # Errors
///
/// Returns `ApplicationError::TokenNotFound` if an AMM base token is not in
/// the registry.
pub fn trade_bounds(
    query: &NormalizedQuery,
    quote: &PriceQuote,
    snapshot: &Snapshot,
) -> ApplicationResult<(Decimal, Decimal)> {
    if !query.protocol.is_amm() {
        return Ok((quote.min_amount, quote.max_amount));
    }
    let base = snapshot
        .tokens()
        .get_by_address(&query.base)
        .ok_or_else(|| ApplicationError::token_not_found(query.base.as_str()))?;
    Ok((base.min_trade_amount(), base.max_trade_amount()))
}

/// Finalizes `order` through the signer for the query's protocol.
///
/// # Errors
///
/// - `ApplicationError::TokenNotFound` if an AMM base token is missing
/// - `ApplicationError::Upstream` if the signer fails, or returns an
///   unsigned order for a protocol that requires a signature
pub async fn dispatch(
    order: Order,
    query: &NormalizedQuery,
    quote: &PriceQuote,
    snapshot: &Snapshot,
    signers: &SignerRegistry,
) -> ApplicationResult<DispatchOutcome> {
    let (min_amount, max_amount) = trade_bounds(query, quote, snapshot)?;
    let request = signing_request(query, quote, snapshot);

    debug!(protocol = %query.protocol, "signing order");
    let mut order = signers
        .for_protocol(query.protocol)
        .sign(order, &request)
        .await?;
    if query.protocol.requires_signature() && order.signature().is_none() {
        return Err(UpstreamError::protocol(
            signer_service(query.protocol),
            "signer returned an unsigned order",
        )
        .into());
    }
    order.stamp(query.protocol, quote.quote_id.clone());

    Ok(DispatchOutcome {
        order,
        min_amount,
        max_amount,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::application::services::order_assembler::fixtures::*;
    use crate::application::services::order_assembler::assemble_order;
    use crate::domain::value_objects::{Address, OrderSide, PermitType, WalletType};
    use crate::infrastructure::signers::OrderSigner;
    use crate::infrastructure::upstream::error::{UpstreamError, UpstreamResult};
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use std::sync::Arc;

    #[derive(Debug, Default)]
    struct RecordingSigner {
        seen: Mutex<Vec<SigningRequest>>,
    }

    #[async_trait]
    impl OrderSigner for RecordingSigner {
        async fn sign(&self, mut order: Order, request: &SigningRequest) -> UpstreamResult<Order> {
            self.seen.lock().push(request.clone());
            if let Some(context) = request.context() {
                order.set_salt(context.salt.clone());
                order.set_signature("0xsig");
            }
            // A builder-set tag must be overwritten by the dispatcher.
            order.stamp(Protocol::AmmV1, "builder-id");
            Ok(order)
        }
    }

    #[derive(Debug)]
    struct PassthroughSigner;

    #[async_trait]
    impl OrderSigner for PassthroughSigner {
        async fn sign(&self, order: Order, _request: &SigningRequest) -> UpstreamResult<Order> {
            Ok(order)
        }
    }

    #[derive(Debug)]
    struct FailingSigner;

    #[async_trait]
    impl OrderSigner for FailingSigner {
        async fn sign(&self, _order: Order, request: &SigningRequest) -> UpstreamResult<Order> {
            Err(UpstreamError::rejected(
                format!("signer:{}", request.protocol()),
                "order refused",
            ))
        }
    }

    fn query(protocol: Protocol) -> NormalizedQuery {
        NormalizedQuery {
            side: OrderSide::Sell,
            base: addr('a'),
            quote: addr('b'),
            amount: Decimal::from(10),
            protocol,
            fee_factor: None,
            user_addr: addr('e'),
            uniq_id: "req-1".to_string(),
        }
    }

    fn price_quote() -> PriceQuote {
        PriceQuote::new(Decimal::from(200), Decimal::from(1), Decimal::from(100), "q-7")
            .with_payload("0xpayload")
            .with_salt("0x0abc")
    }

    mod requests {
        use super::*;

        #[test]
        fn amm_requests_carry_wrapper_and_wrapped_native() {
            let snapshot = snapshot();
            match signing_request(&query(Protocol::AmmV1), &price_quote(), &snapshot) {
                SigningRequest::AmmV1 {
                    maker_address,
                    native_token,
                    wrapped_native,
                } => {
                    assert_eq!(maker_address, addr('9'));
                    assert!(native_token.is_zero());
                    assert_eq!(wrapped_native, addr('c'));
                }
                other => panic!("unexpected {:?}", other),
            }
            match signing_request(&query(Protocol::AmmV2), &price_quote(), &snapshot) {
                SigningRequest::AmmV2 {
                    maker_address,
                    payload,
                    ..
                } => {
                    assert_eq!(maker_address, addr('d'));
                    assert_eq!(payload.as_deref(), Some("0xpayload"));
                }
                other => panic!("unexpected {:?}", other),
            }
        }

        #[test]
        fn rfq_requests_carry_protocol_extras() {
            let snapshot = snapshot();
            match signing_request(&query(Protocol::RfqV2), &price_quote(), &snapshot) {
                SigningRequest::RfqV2 {
                    user_addr,
                    chain_id,
                    verifying_contract,
                    wallet_type,
                    permit_type,
                    context,
                } => {
                    assert_eq!(user_addr, addr('e'));
                    assert_eq!(chain_id, 1);
                    assert_eq!(verifying_contract, addr('8'));
                    assert_eq!(wallet_type, WalletType::Erc1271);
                    assert_eq!(permit_type, PermitType::ApproveRfqv2);
                    assert_eq!(context.salt, "0x0abc");
                    assert_eq!(context.signing_url.as_deref(), Some("http://signer.local/sign"));
                }
                other => panic!("unexpected {:?}", other),
            }
            match signing_request(&query(Protocol::RfqV1), &price_quote(), &snapshot) {
                SigningRequest::RfqV1 {
                    verifying_contract, ..
                } => assert_eq!(verifying_contract, addr('7')),
                other => panic!("unexpected {:?}", other),
            }
        }

        #[test]
        fn missing_salt_is_generated() {
            let quote = PriceQuote::new(Decimal::from(200), Decimal::ZERO, Decimal::ZERO, "q");
            let request = signing_request(&query(Protocol::PmmV5), &quote, &snapshot());
            let salt = &request.context().unwrap().salt;
            assert!(salt.starts_with("0x"));
            assert_eq!(salt.len(), 66);
        }
    }

    mod bounds {
        use super::*;

        #[test]
        fn amm_uses_base_token_bounds() {
            for protocol in [Protocol::AmmV1, Protocol::AmmV2] {
                let (min, max) = trade_bounds(&query(protocol), &price_quote(), &snapshot()).unwrap();
                assert_eq!(min, Decimal::new(1, 1));
                assert_eq!(max, Decimal::from(500));
            }
        }

        #[test]
        fn signed_protocols_use_quoted_bounds() {
            let (min, max) =
                trade_bounds(&query(Protocol::PmmV5), &price_quote(), &snapshot()).unwrap();
            assert_eq!(min, Decimal::from(1));
            assert_eq!(max, Decimal::from(100));
        }

        #[test]
        fn amm_missing_base_token() {
            let mut q = query(Protocol::AmmV1);
            q.base = Address::parse("0xffffffffffffffffffffffffffffffffffffffff").unwrap();
            assert!(trade_bounds(&q, &price_quote(), &snapshot()).unwrap_err().is_not_found());
        }
    }

    mod dispatching {
        use super::*;

        #[tokio::test]
        async fn stamps_protocol_and_quote_id() {
            let snapshot = snapshot();
            let recorder = Arc::new(RecordingSigner::default());
            let signers = SignerRegistry::uniform(recorder.clone());

            for protocol in Protocol::ALL {
                let q = query(protocol);
                let order = assemble_order(&q, Decimal::from(200), &snapshot).unwrap();
                let outcome = dispatch(order, &q, &price_quote(), &snapshot, &signers)
                    .await
                    .unwrap();
                assert_eq!(outcome.order.protocol(), Some(protocol));
                assert_eq!(outcome.order.quote_id(), Some("q-7"));
            }
            let seen = recorder.seen.lock();
            let protocols: Vec<Protocol> = seen.iter().map(SigningRequest::protocol).collect();
            assert_eq!(protocols, Protocol::ALL.to_vec());
        }

        #[tokio::test]
        async fn signer_failure_propagates() {
            let snapshot = snapshot();
            let signers = SignerRegistry::uniform(Arc::new(FailingSigner));
            let q = query(Protocol::RfqV1);
            let order = assemble_order(&q, Decimal::from(200), &snapshot).unwrap();

            let err = dispatch(order, &q, &price_quote(), &snapshot, &signers)
                .await
                .unwrap_err();
            assert!(err.is_upstream());
            assert_eq!(err.to_string(), "signer:RFQV1 rejected: order refused");
        }

        #[tokio::test]
        async fn unsigned_order_is_rejected_for_signed_protocols() {
            let snapshot = snapshot();
            let signers = SignerRegistry::uniform(Arc::new(PassthroughSigner));

            for protocol in [Protocol::PmmV5, Protocol::RfqV1, Protocol::RfqV2] {
                let q = query(protocol);
                let order = assemble_order(&q, Decimal::from(200), &snapshot).unwrap();
                let err = dispatch(order, &q, &price_quote(), &snapshot, &signers)
                    .await
                    .unwrap_err();
                assert!(err.is_upstream());
                assert_eq!(
                    err.to_string(),
                    format!("signer:{} protocol error: signer returned an unsigned order", protocol)
                );
            }
        }

        #[tokio::test]
        async fn amm_orders_need_no_signature() {
            let snapshot = snapshot();
            let signers = SignerRegistry::uniform(Arc::new(PassthroughSigner));

            for protocol in [Protocol::AmmV1, Protocol::AmmV2] {
                let q = query(protocol);
                let order = assemble_order(&q, Decimal::from(200), &snapshot).unwrap();
                let outcome = dispatch(order, &q, &price_quote(), &snapshot, &signers)
                    .await
                    .unwrap();
                assert_eq!(outcome.order.signature(), None);
                assert_eq!(outcome.order.protocol(), Some(protocol));
            }
        }
    }
}
