use rust_decimal::Decimal;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DonationError {
    #[error("{0} is not one of the preset donation amounts")]
    UnknownPreset(u32),
    #[error("Invalid amount: {0}")]
    InvalidAmount(Decimal),
    #[error("Unknown payment method: {0}")]
    UnknownPaymentMethod(String),
    #[error("Invalid state transition: {from} on {event}")]
    InvalidTransition { from: String, event: String },
    #[error("Action {0} is not available for the current outcome")]
    ActionUnavailable(String),
    #[error("Gateway error: {0}")]
    Gateway(String),
    #[error("Notification error: {0}")]
    Notification(String),
    #[error("Routing error: {0}")]
    Routing(String),
    #[error("Receipt error: {0}")]
    Receipt(String),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DonationError>;
