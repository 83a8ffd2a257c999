use crate::domain::ports::{
    GatewayOutcome, Notification, Notifier, PaymentGateway, Receipt, ReceiptSender, Router,
};
use crate::domain::request::DonationRequest;
use crate::error::{DonationError, Result};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Debug, Clone)]
enum ScriptStep {
    Respond(GatewayOutcome, Duration),
    Fail(String),
    Hang,
}

/// A payment gateway that replays a queue of canned responses.
///
/// Every request is recorded, whether or not a response is scripted for it.
/// Clones share the same script and history, so a test can keep one handle
/// and give another to the controller.
#[derive(Default, Clone)]
pub struct ScriptedGateway {
    script: Arc<Mutex<VecDeque<ScriptStep>>>,
    requests: Arc<RwLock<Vec<DonationRequest>>>,
}

impl ScriptedGateway {
    /// Creates a gateway with an empty script.
    pub fn new() -> Self {
        Self::default()
    }

    fn push(self, step: ScriptStep) -> Self {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(step);
        self
    }

    pub fn then_succeed(self, transaction_id: &str) -> Self {
        self.then_succeed_after(Duration::ZERO, transaction_id)
    }

    pub fn then_succeed_after(self, delay: Duration, transaction_id: &str) -> Self {
        self.push(ScriptStep::Respond(
            GatewayOutcome::Success {
                transaction_id: transaction_id.to_string(),
            },
            delay,
        ))
    }

    pub fn then_cancel(self) -> Self {
        self.push(ScriptStep::Respond(GatewayOutcome::Cancelled, Duration::ZERO))
    }

    /// Scripts an explicit `error` outcome from the gateway.
    pub fn then_fail(self, message: &str) -> Self {
        self.push(ScriptStep::Respond(
            GatewayOutcome::Error {
                message: message.to_string(),
            },
            Duration::ZERO,
        ))
    }

    /// Scripts a transport-level failure: the call itself returns `Err`.
    pub fn then_error(self, message: &str) -> Self {
        self.push(ScriptStep::Fail(message.to_string()))
    }

    /// Scripts a call that never resolves.
    pub fn then_hang(self) -> Self {
        self.push(ScriptStep::Hang)
    }

    pub async fn invocations(&self) -> usize {
        self.requests.read().await.len()
    }

    pub async fn requests(&self) -> Vec<DonationRequest> {
        self.requests.read().await.clone()
    }

    fn next_step(&self) -> Option<ScriptStep> {
        self.script
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .pop_front()
    }
}

#[async_trait]
impl PaymentGateway for ScriptedGateway {
    async fn submit_donation(&self, request: &DonationRequest) -> Result<GatewayOutcome> {
        self.requests.write().await.push(request.clone());

        match self.next_step() {
            Some(ScriptStep::Respond(outcome, delay)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                Ok(outcome)
            }
            Some(ScriptStep::Fail(message)) => Err(DonationError::Gateway(message)),
            Some(ScriptStep::Hang) => std::future::pending().await,
            None => Err(DonationError::Gateway("no scripted response".to_string())),
        }
    }
}

/// Collects every notification in order; the `failing` variant records and
/// then rejects each one.
#[derive(Default, Clone)]
pub struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<Notification>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notification: Notification) -> Result<()> {
        self.notifications
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notification);
        if self.fail {
            return Err(DonationError::Notification("toast queue closed".to_string()));
        }
        Ok(())
    }
}

/// Collects every path navigated to, in order.
#[derive(Default, Clone)]
pub struct RecordingRouter {
    paths: Arc<Mutex<Vec<String>>>,
    fail: bool,
}

impl RecordingRouter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Router for RecordingRouter {
    fn navigate_to(&self, path: &str) -> Result<()> {
        self.paths
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
        if self.fail {
            return Err(DonationError::Routing(format!("no route for {path}")));
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone, Copy)]
enum Delivery {
    #[default]
    Accept,
    Reject,
    Hang,
}

/// Collects receipts. The `failing` variant rejects every delivery after
/// recording it; the `hanging` variant records it and never returns.
#[derive(Default, Clone)]
pub struct RecordingReceiptSender {
    receipts: Arc<RwLock<Vec<Receipt>>>,
    delivery: Delivery,
}

impl RecordingReceiptSender {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            delivery: Delivery::Reject,
            ..Self::default()
        }
    }

    pub fn hanging() -> Self {
        Self {
            delivery: Delivery::Hang,
            ..Self::default()
        }
    }

    pub async fn receipts(&self) -> Vec<Receipt> {
        self.receipts.read().await.clone()
    }
}

#[async_trait]
impl ReceiptSender for RecordingReceiptSender {
    async fn send_receipt(&self, receipt: Receipt) -> Result<()> {
        self.receipts.write().await.push(receipt);
        match self.delivery {
            Delivery::Accept => Ok(()),
            Delivery::Reject => Err(DonationError::Receipt("mail server unavailable".to_string())),
            Delivery::Hang => std::future::pending().await,
        }
    }
}
