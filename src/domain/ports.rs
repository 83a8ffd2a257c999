use super::amount::Amount;
use super::request::DonationRequest;
use crate::error::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// What the payment gateway reported for one donation request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum GatewayOutcome {
    Success {
        #[serde(rename = "transactionId")]
        transaction_id: String,
    },
    Cancelled,
    Error {
        message: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Info,
    Error,
}

/// Short user-visible feedback, shown as a toast by the UI shell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub kind: NotificationKind,
    pub title: String,
    pub detail: String,
}

impl Notification {
    pub fn info(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Info,
            title: title.into(),
            detail: detail.into(),
        }
    }

    pub fn error(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            kind: NotificationKind::Error,
            title: title.into(),
            detail: detail.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Receipt {
    pub donor_email: String,
    pub amount: Amount,
    pub transaction_id: String,
}

/// Settles donations. Implementations must resolve in bounded time; the
/// controller still enforces its own deadline.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn submit_donation(&self, request: &DonationRequest) -> Result<GatewayOutcome>;
}

/// Fire-and-forget user feedback. Errors are logged by the caller and
/// otherwise ignored.
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: Notification) -> Result<()>;
}

pub trait Router: Send + Sync {
    fn navigate_to(&self, path: &str) -> Result<()>;
}

/// Best-effort receipt delivery after a successful donation.
#[async_trait]
pub trait ReceiptSender: Send + Sync {
    async fn send_receipt(&self, receipt: Receipt) -> Result<()>;
}

pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type NotifierBox = Box<dyn Notifier>;
pub type RouterBox = Box<dyn Router>;
pub type ReceiptSenderBox = Box<dyn ReceiptSender>;
