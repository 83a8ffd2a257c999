use async_trait::async_trait;
use donation_intake::application::controller::SubmissionController;
use donation_intake::application::page::DonationPage;
use donation_intake::config::IntakeConfig;
use donation_intake::domain::ports::{GatewayOutcome, PaymentGateway, PaymentGatewayBox};
use donation_intake::domain::request::DonationRequest;
use donation_intake::error::Result;
use donation_intake::infrastructure::in_memory::{
    RecordingNotifier, RecordingReceiptSender, RecordingRouter,
};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tokio::sync::Notify;

pub struct Collaborators {
    pub notifier: RecordingNotifier,
    pub router: RecordingRouter,
    pub receipts: RecordingReceiptSender,
}

/// Mounts a page with recording collaborators and no suggested preset, so
/// every test states the amount it uses.
#[allow(dead_code)]
pub fn mount(gateway: PaymentGatewayBox, timeout_ms: u64) -> (DonationPage, Collaborators) {
    let collaborators = Collaborators {
        notifier: RecordingNotifier::new(),
        router: RecordingRouter::new(),
        receipts: RecordingReceiptSender::new(),
    };
    let config = IntakeConfig {
        gateway_timeout_ms: timeout_ms,
        suggested_preset: None,
        ..IntakeConfig::default()
    };
    let controller = SubmissionController::new(
        config,
        gateway,
        Box::new(collaborators.notifier.clone()),
        Box::new(collaborators.router.clone()),
        Box::new(collaborators.receipts.clone()),
    );
    (DonationPage::mount(controller), collaborators)
}

/// A gateway whose answer is released by the test.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct ManualGateway {
    pub entered: Arc<Notify>,
    pub release: Arc<Notify>,
    calls: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl ManualGateway {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PaymentGateway for ManualGateway {
    async fn submit_donation(&self, _request: &DonationRequest) -> Result<GatewayOutcome> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.entered.notify_one();
        self.release.notified().await;
        Ok(GatewayOutcome::Success {
            transaction_id: "TXN-LATE".to_string(),
        })
    }
}
