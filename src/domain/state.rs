use super::ports::GatewayOutcome;
use super::request::ValidationErrors;
use crate::error::{DonationError, Result};
use serde::Serialize;

/// Why an attempt ended in `Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "detail", rename_all = "snake_case")]
pub enum FailureReason {
    Validation(ValidationErrors),
    Gateway(String),
    Timeout,
}

/// Where the current donation attempt stands.
///
/// A normal attempt runs `Idle -> Validating -> Submitting` and ends in one
/// of the three terminal states. Only [`SubmissionState::transition`] moves
/// between states.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum SubmissionState {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded(String),
    Failed(FailureReason),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionEvent {
    Begin,
    Rejected(ValidationErrors),
    Accepted,
    Resolved(GatewayOutcome),
    TimedOut,
    Reset,
}

impl SubmissionEvent {
    pub fn name(&self) -> &'static str {
        match self {
            SubmissionEvent::Begin => "begin",
            SubmissionEvent::Rejected(_) => "rejected",
            SubmissionEvent::Accepted => "accepted",
            SubmissionEvent::Resolved(_) => "resolved",
            SubmissionEvent::TimedOut => "timed_out",
            SubmissionEvent::Reset => "reset",
        }
    }
}

impl SubmissionState {
    pub fn transition(self, event: SubmissionEvent) -> Result<Self> {
        use SubmissionEvent as E;
        use SubmissionState as S;

        match (self, event) {
            (S::Idle, E::Begin) => Ok(S::Validating),
            (S::Validating, E::Rejected(errors)) => {
                Ok(S::Failed(FailureReason::Validation(errors)))
            }
            (S::Validating, E::Accepted) => Ok(S::Submitting),
            (S::Submitting, E::Resolved(outcome)) => Ok(match outcome {
                GatewayOutcome::Success { transaction_id } => S::Succeeded(transaction_id),
                GatewayOutcome::Cancelled => S::Cancelled,
                GatewayOutcome::Error { message } => S::Failed(FailureReason::Gateway(message)),
            }),
            (S::Submitting, E::TimedOut) => Ok(S::Failed(FailureReason::Timeout)),
            (state, E::Reset) if !state.is_in_flight() => Ok(S::Idle),
            (state, event) => Err(DonationError::InvalidTransition {
                from: state.name().to_string(),
                event: event.name().to_string(),
            }),
        }
    }

    pub fn is_in_flight(&self) -> bool {
        matches!(self, SubmissionState::Validating | SubmissionState::Submitting)
    }

    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SubmissionState::Succeeded(_) | SubmissionState::Failed(_) | SubmissionState::Cancelled
        )
    }

    pub fn name(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Validating => "validating",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded(_) => "succeeded",
            SubmissionState::Failed(_) => "failed",
            SubmissionState::Cancelled => "cancelled",
        }
    }
}
