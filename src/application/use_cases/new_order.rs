//! # New Order Use Case
//!
//! Runs one quote request through the whole pipeline:
//!
//! ```text
//! validate → quoter.get_price → assemble → dispatch/sign → respond
//! ```
//!
//! Every failure is caught here and turned into a failure response; the
//! caller always receives a [`QuoteResponse`].
//!
//! # Examples
//!
//! ```ignore
//! let service = NewOrderService::new(Arc::new(quoter), SignerRegistry::from_timeout(5000)?);
//! let response = service.new_order(&request, &store.current()).await;
//! ```

use crate::application::error::ApplicationResult;
use crate::application::services::{QuoteResponse, assemble_order, dispatch, validate_request};
use crate::domain::entities::QuoteRequest;
use crate::infrastructure::config::Snapshot;
use crate::infrastructure::quoter::Quoter;
use crate::infrastructure::signers::SignerRegistry;
use std::sync::Arc;
use tracing::{Instrument, debug, info_span, warn};

/// The quote-to-order pipeline.
#[derive(Debug, Clone)]
pub struct NewOrderService {
    quoter: Arc<dyn Quoter>,
    signers: SignerRegistry,
}

impl NewOrderService {
    /// Creates the service.
    #[must_use]
    pub fn new(quoter: Arc<dyn Quoter>, signers: SignerRegistry) -> Self {
        Self { quoter, signers }
    }

    /// Handles one request against `snapshot`.
    pub async fn new_order(&self, request: &QuoteRequest, snapshot: &Snapshot) -> QuoteResponse {
        let span = info_span!(
            "new_order",
            uniq_id = request.uniq_id.as_deref().unwrap_or_default(),
            side = request.side.as_deref().unwrap_or_default(),
            protocol = request.protocol.as_deref().unwrap_or_default(),
        );

        match self.run(request, snapshot).instrument(span.clone()).await {
            Ok(response) => response,
            Err(error) => {
                span.in_scope(|| warn!(error = %error, "quote request failed"));
                QuoteResponse::failure(&error)
            }
        }
    }

    async fn run(
        &self,
        request: &QuoteRequest,
        snapshot: &Snapshot,
    ) -> ApplicationResult<QuoteResponse> {
        let query = validate_request(request)?;
        let quote = self.quoter.get_price(&query).await?;
        debug!(
            quote_id = %quote.quote_id,
            rate = %quote.rate,
            min_amount = %quote.min_amount,
            max_amount = %quote.max_amount,
            "quote received"
        );

        let order = assemble_order(&query, quote.rate, snapshot)?;
        let outcome = dispatch(order, &query, &quote, snapshot, &self.signers).await?;

        Ok(QuoteResponse::success(
            outcome.order,
            quote.rate,
            outcome.min_amount,
            outcome.max_amount,
        ))
    }
}
