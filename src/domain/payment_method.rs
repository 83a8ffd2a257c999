use crate::error::DonationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Settlement channel used for the donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    PayPal,
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentMethod::Card => write!(f, "card"),
            PaymentMethod::PayPal => write!(f, "paypal"),
        }
    }
}

impl FromStr for PaymentMethod {
    type Err = DonationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "card" => Ok(PaymentMethod::Card),
            "paypal" => Ok(PaymentMethod::PayPal),
            other => Err(DonationError::UnknownPaymentMethod(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PaymentMethodSelector {
    method: PaymentMethod,
}

impl PaymentMethodSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select(&mut self, method: PaymentMethod) {
        self.method = method;
    }

    pub fn current(&self) -> PaymentMethod {
        self.method
    }
}
