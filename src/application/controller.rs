use super::outcome::{PAYMENT_FAILED_DETAIL, PAYMENT_FAILED_TITLE};
use crate::config::IntakeConfig;
use crate::domain::amount::Amount;
use crate::domain::ports::{
    GatewayOutcome, Notification, NotifierBox, PaymentGatewayBox, Receipt, ReceiptSenderBox,
    RouterBox,
};
use crate::domain::request::{DonationRequest, DonationSnapshot, ValidationErrors};
use crate::domain::state::{FailureReason, SubmissionEvent, SubmissionState};
use crate::error::Result;
use tokio::sync::{RwLock, watch};
use tracing::{debug, info, instrument, warn};

/// What a call to [`SubmissionController::submit`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Another attempt was still validating or submitting; nothing happened.
    AlreadyInFlight,
    /// The controller was torn down; nothing happened.
    Unmounted,
    /// Validation failed and the gateway was not contacted.
    Rejected(ValidationErrors),
    /// The attempt reached a terminal state.
    Completed(SubmissionState),
    /// The controller was torn down while the gateway call was outstanding,
    /// or a newer attempt had replaced this one. The response, if any, was
    /// dropped.
    Discarded,
}

#[derive(Debug, Default)]
struct AttemptState {
    current: SubmissionState,
    attempt: u64,
    amount: Option<Amount>,
}

impl AttemptState {
    fn apply(&mut self, event: SubmissionEvent) -> Result<()> {
        let from = self.current.name();
        let event_name = event.name();
        // a refused event leaves the current state in place
        self.current = self.current.clone().transition(event)?;
        debug!(
            attempt = self.attempt,
            from,
            event = event_name,
            to = self.current.name(),
            "Submission state changed"
        );
        Ok(())
    }
}

/// Drives a donation attempt from validation through the payment gateway to
/// a terminal state.
///
/// Holds the only copy of the [`SubmissionState`]. The state lock is never
/// held while the gateway is awaited, so a second `submit` arriving during
/// that window sees `Submitting` and returns straight away.
pub struct SubmissionController {
    state: RwLock<AttemptState>,
    gateway: PaymentGatewayBox,
    notifier: NotifierBox,
    router: RouterBox,
    receipts: ReceiptSenderBox,
    config: IntakeConfig,
    mounted: watch::Sender<bool>,
}

impl SubmissionController {
    pub fn new(
        config: IntakeConfig,
        gateway: PaymentGatewayBox,
        notifier: NotifierBox,
        router: RouterBox,
        receipts: ReceiptSenderBox,
    ) -> Self {
        let (mounted, _) = watch::channel(true);
        Self {
            state: RwLock::new(AttemptState::default()),
            gateway,
            notifier,
            router,
            receipts,
            config,
            mounted,
        }
    }

    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    pub async fn state(&self) -> SubmissionState {
        self.state.read().await.current.clone()
    }

    /// Amount of the most recent attempt that passed validation.
    pub async fn last_amount(&self) -> Option<Amount> {
        self.state.read().await.amount
    }

    pub fn is_mounted(&self) -> bool {
        *self.mounted.borrow()
    }

    /// Marks the page as gone. An outstanding gateway call is abandoned and
    /// nothing it returns is applied.
    pub fn teardown(&self) {
        if self.mounted.send_replace(false) {
            info!("Donation controller torn down");
        }
    }

    /// Validates `snapshot` and, if it is acceptable, sends it to the payment
    /// gateway.
    pub async fn submit(&self, snapshot: DonationSnapshot) -> Result<SubmitOutcome> {
        if !self.is_mounted() {
            return Ok(SubmitOutcome::Unmounted);
        }

        let (attempt, request) = {
            let mut state = self.state.write().await;
            if state.current.is_in_flight() {
                debug!(attempt = state.attempt, "Submit ignored, attempt in flight");
                return Ok(SubmitOutcome::AlreadyInFlight);
            }
            if state.current.is_terminal() {
                state.apply(SubmissionEvent::Reset)?;
            }
            state.attempt += 1;
            state.amount = None;
            state.apply(SubmissionEvent::Begin)?;

            match snapshot.validate() {
                Ok(request) => {
                    state.apply(SubmissionEvent::Accepted)?;
                    state.amount = Some(request.amount());
                    (state.attempt, request)
                }
                Err(errors) => {
                    state.apply(SubmissionEvent::Rejected(errors.clone()))?;
                    drop(state);
                    info!(errors = errors.len(), "Donation rejected by validation");
                    for error in errors.iter() {
                        self.notify(Notification::error(error.title(), error.detail()));
                    }
                    return Ok(SubmitOutcome::Rejected(errors));
                }
            }
        };

        self.notify(Notification::info(
            "Processing donation...",
            format!("Thank you for your {} donation!", request.amount()),
        ));

        let Some(event) = self.call_gateway(attempt, &request).await else {
            info!(attempt, "Gateway response discarded after teardown");
            return Ok(SubmitOutcome::Discarded);
        };

        let next = {
            let mut state = self.state.write().await;
            if !self.is_mounted() {
                info!(attempt, "Gateway response discarded after teardown");
                return Ok(SubmitOutcome::Discarded);
            }
            if state.attempt != attempt {
                info!(
                    attempt,
                    current = state.attempt,
                    "Gateway response discarded, attempt superseded"
                );
                return Ok(SubmitOutcome::Discarded);
            }
            state.apply(event)?;
            state.current.clone()
        };

        self.finish(&next, &request).await;
        Ok(SubmitOutcome::Completed(next))
    }

    /// Clears a validation failure once the user starts correcting input.
    pub async fn on_field_edited(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if matches!(
            state.current,
            SubmissionState::Failed(FailureReason::Validation(_))
        ) {
            state.apply(SubmissionEvent::Reset)?;
        }
        Ok(())
    }

    /// Returns to `Idle` from a terminal state. Refused while an attempt is
    /// validating or submitting; the state is left as it was.
    pub async fn reset(&self) -> Result<()> {
        let mut state = self.state.write().await;
        if state.current != SubmissionState::Idle {
            state.apply(SubmissionEvent::Reset)?;
        }
        Ok(())
    }

    pub fn return_home(&self) -> Result<()> {
        self.router.navigate_to(&self.config.home_path)
    }

    /// Awaits the gateway under the configured deadline. Yields `None` if the
    /// controller is torn down first.
    #[instrument(
        skip(self, request),
        fields(amount = %request.amount(), method = %request.payment_method())
    )]
    async fn call_gateway(
        &self,
        attempt: u64,
        request: &DonationRequest,
    ) -> Option<SubmissionEvent> {
        let mut mounted = self.mounted.subscribe();
        let deadline = self.config.gateway_timeout();

        tokio::select! {
            result = tokio::time::timeout(deadline, self.gateway.submit_donation(request)) => {
                Some(match result {
                    Ok(Ok(outcome)) => SubmissionEvent::Resolved(outcome),
                    Ok(Err(e)) => {
                        warn!(attempt, error = %e, "Gateway call failed");
                        SubmissionEvent::Resolved(GatewayOutcome::Error {
                            message: e.to_string(),
                        })
                    }
                    Err(_) => {
                        warn!(
                            attempt,
                            timeout_ms = self.config.gateway_timeout_ms,
                            "Gateway call timed out"
                        );
                        SubmissionEvent::TimedOut
                    }
                })
            }
            _ = mounted.wait_for(|still_mounted| !*still_mounted) => None,
        }
    }

    async fn finish(&self, state: &SubmissionState, request: &DonationRequest) {
        match state {
            SubmissionState::Succeeded(transaction_id) => {
                info!(transaction_id = %transaction_id, amount = %request.amount(), "Donation succeeded");
                self.navigate(&self.config.success_path);
                let receipt = Receipt {
                    donor_email: request.donor_email().to_string(),
                    amount: request.amount(),
                    transaction_id: transaction_id.clone(),
                };
                let deadline = self.config.gateway_timeout();
                match tokio::time::timeout(deadline, self.receipts.send_receipt(receipt)).await {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => {
                        warn!(transaction_id = %transaction_id, error = %e, "Receipt delivery failed");
                    }
                    Err(_) => {
                        warn!(transaction_id = %transaction_id, "Receipt delivery timed out");
                    }
                }
            }
            SubmissionState::Cancelled => {
                info!("Donation cancelled by donor");
                self.navigate(&self.config.cancel_path);
            }
            SubmissionState::Failed(reason) => {
                info!(reason = ?reason, "Donation failed");
                self.notify(Notification::error(PAYMENT_FAILED_TITLE, PAYMENT_FAILED_DETAIL));
            }
            SubmissionState::Idle | SubmissionState::Validating | SubmissionState::Submitting => {}
        }
    }

    fn navigate(&self, path: &str) {
        if let Err(e) = self.router.navigate_to(path) {
            warn!(path, error = %e, "Navigation failed");
        }
    }

    fn notify(&self, notification: Notification) {
        if let Err(e) = self.notifier.notify(notification) {
            warn!(error = %e, "Notification failed");
        }
    }
}
