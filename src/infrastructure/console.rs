use crate::domain::ports::{Notification, NotificationKind, Notifier, Receipt, ReceiptSender, Router};
use crate::error::{DonationError, Result};
use async_trait::async_trait;
use tracing::{error, info};

/// Reports notifications through `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, notification: Notification) -> Result<()> {
        match notification.kind {
            NotificationKind::Info => {
                info!(title = %notification.title, detail = %notification.detail, "notify")
            }
            NotificationKind::Error => {
                error!(title = %notification.title, detail = %notification.detail, "notify")
            }
        }
        Ok(())
    }
}

/// Logs navigation requests instead of performing them.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingRouter;

impl Router for TracingRouter {
    fn navigate_to(&self, path: &str) -> Result<()> {
        if !path.starts_with('/') {
            return Err(DonationError::Routing(format!("{path} is not an absolute path")));
        }
        info!(path, "navigate");
        Ok(())
    }
}

/// Logs receipt requests; actual mail delivery lives outside this crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReceiptSender;

#[async_trait]
impl ReceiptSender for TracingReceiptSender {
    async fn send_receipt(&self, receipt: Receipt) -> Result<()> {
        info!(
            transaction_id = %receipt.transaction_id,
            amount = %receipt.amount,
            "Receipt queued"
        );
        Ok(())
    }
}
