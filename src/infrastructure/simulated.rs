use crate::domain::ports::{GatewayOutcome, PaymentGateway};
use crate::domain::request::DonationRequest;
use crate::error::Result;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;
use uuid::Uuid;

/// Processing time of the simulated gateway when none is given.
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(1500);

/// How the simulated gateway answers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SimulationMode {
    #[default]
    Succeed,
    Cancel,
    Fail,
    /// Never answers; exercises the controller's deadline.
    Hang,
}

/// Stand-in for a real card / PayPal integration.
///
/// Waits a fixed processing delay, then answers according to its mode.
/// Successful charges get a fresh `TXN-<uuid>` transaction id.
#[derive(Debug, Clone)]
pub struct SimulatedGateway {
    mode: SimulationMode,
    delay: Duration,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self::new(SimulationMode::Succeed)
    }
}

impl SimulatedGateway {
    pub fn new(mode: SimulationMode) -> Self {
        Self {
            mode,
            delay: DEFAULT_PROCESSING_DELAY,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl PaymentGateway for SimulatedGateway {
    async fn submit_donation(&self, request: &DonationRequest) -> Result<GatewayOutcome> {
        debug!(
            amount_cents = request.amount_minor_units(),
            currency = request.currency(),
            method = %request.payment_method(),
            mode = ?self.mode,
            "Simulating payment"
        );

        if self.mode == SimulationMode::Hang {
            return std::future::pending().await;
        }
        tokio::time::sleep(self.delay).await;

        Ok(match self.mode {
            SimulationMode::Succeed => GatewayOutcome::Success {
                transaction_id: format!("TXN-{}", Uuid::new_v4().simple()),
            },
            SimulationMode::Cancel => GatewayOutcome::Cancelled,
            SimulationMode::Fail | SimulationMode::Hang => GatewayOutcome::Error {
                message: "payment processor declined the charge".to_string(),
            },
        })
    }
}
