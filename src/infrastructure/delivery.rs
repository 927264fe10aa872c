//! Delivery adapter that hands results to the log.

use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::Mutex;

use crate::application::{DeliveryGateway, GatewayError, GatewayResult};
use crate::domain::SummarizationResult;

/// Logs each delivered result and keeps a copy of it.
#[derive(Debug, Default)]
pub struct TracingDelivery {
    delivered: Mutex<Vec<SummarizationResult>>,
    failing: AtomicBool,
}

impl TracingDelivery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn delivered(&self) -> Vec<SummarizationResult> {
        self.delivered.lock().clone()
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

impl DeliveryGateway for TracingDelivery {
    fn deliver(&self, result: &SummarizationResult) -> GatewayResult<()> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(GatewayError::new("deliver", "recipient unreachable"));
        }

        tracing::info!(
            actor_id = %result.actor.id(),
            window_start = %result.window_start,
            statements = result.statements.len(),
            "Summarization result delivered"
        );
        self.delivered.lock().push(result.clone());
        Ok(())
    }
}

static_assertions::assert_impl_all!(TracingDelivery: Send, Sync);
