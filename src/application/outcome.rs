use crate::domain::amount::Amount;
use crate::domain::state::{FailureReason, SubmissionState};
use serde::Serialize;
use std::fmt;

pub(crate) const PAYMENT_FAILED_TITLE: &str = "Payment could not be completed";
pub(crate) const PAYMENT_FAILED_DETAIL: &str = "Something went wrong while processing your donation. You have not been charged; please try again.";

/// Follow-up actions offered on an outcome view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeAction {
    /// Start a new donation with cleared form fields.
    DonateAgain,
    /// Leave the donation flow.
    ReturnHome,
    /// Try again, keeping what the donor already entered.
    Retry,
}

impl fmt::Display for OutcomeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomeAction::DonateAgain => write!(f, "donate again"),
            OutcomeAction::ReturnHome => write!(f, "return home"),
            OutcomeAction::Retry => write!(f, "retry"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeKind {
    Succeeded,
    Cancelled,
    Failed,
}

/// Everything needed to render a terminal outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeView {
    pub kind: OutcomeKind,
    pub title: String,
    pub messages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
    pub actions: Vec<OutcomeAction>,
}

impl OutcomeView {
    pub fn offers(&self, action: OutcomeAction) -> bool {
        self.actions.contains(&action)
    }
}

pub struct OutcomePresenter;

impl OutcomePresenter {
    /// Builds the view for a terminal state. Non-terminal states have
    /// nothing to present.
    pub fn present(state: &SubmissionState, amount: Option<Amount>) -> Option<OutcomeView> {
        let view = match state {
            SubmissionState::Succeeded(transaction_id) => OutcomeView {
                kind: OutcomeKind::Succeeded,
                title: "Thank You for Your Generosity!".to_string(),
                messages: vec![
                    "Your donation has been processed successfully.".to_string(),
                    "A tax-deductible receipt will be sent to your email.".to_string(),
                ],
                amount,
                transaction_id: Some(transaction_id.clone()),
                actions: vec![OutcomeAction::DonateAgain, OutcomeAction::ReturnHome],
            },
            SubmissionState::Cancelled => OutcomeView {
                kind: OutcomeKind::Cancelled,
                title: "Payment Cancelled".to_string(),
                messages: vec![
                    "Your payment was cancelled and you haven't been charged.".to_string(),
                    "You can try again with a different payment method, or contact us to donate by bank transfer or check.".to_string(),
                ],
                amount,
                transaction_id: None,
                actions: vec![OutcomeAction::Retry, OutcomeAction::ReturnHome],
            },
            SubmissionState::Failed(reason) => OutcomeView {
                kind: OutcomeKind::Failed,
                title: failure_title(reason).to_string(),
                messages: failure_messages(reason),
                amount,
                transaction_id: None,
                actions: vec![OutcomeAction::Retry, OutcomeAction::ReturnHome],
            },
            SubmissionState::Idle | SubmissionState::Validating | SubmissionState::Submitting => {
                return None;
            }
        };
        Some(view)
    }
}

fn failure_title(reason: &FailureReason) -> &'static str {
    match reason {
        FailureReason::Validation(_) => "Please check your donation details",
        FailureReason::Gateway(_) | FailureReason::Timeout => PAYMENT_FAILED_TITLE,
    }
}

fn failure_messages(reason: &FailureReason) -> Vec<String> {
    match reason {
        FailureReason::Validation(errors) => errors.iter().map(|e| e.to_string()).collect(),
        // gateway wording stays generic; the raw message only goes to the logs
        FailureReason::Gateway(_) | FailureReason::Timeout => vec![PAYMENT_FAILED_DETAIL.to_string()],
    }
}
