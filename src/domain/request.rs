use super::amount::{Amount, AmountSelector};
use super::donor::DonorInfoCollector;
use super::payment_method::{PaymentMethod, PaymentMethodSelector};
use rust_decimal::Decimal;
use serde::Serialize;
use std::fmt;

pub const DEFAULT_CURRENCY: &str = "usd";

/// A single problem found while validating a donation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationError {
    Amount,
    Email,
}

impl ValidationError {
    pub fn title(&self) -> &'static str {
        match self {
            ValidationError::Amount => "Please select an amount",
            ValidationError::Email => "Email required",
        }
    }

    pub fn detail(&self) -> &'static str {
        match self {
            ValidationError::Amount => "Enter a valid donation amount of at least $1.00 to continue.",
            ValidationError::Email => {
                "Please enter a valid email to receive your donation receipt."
            }
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title(), self.detail())
    }
}

/// Every validation problem found in one pass, in check order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn contains(&self, error: ValidationError) -> bool {
        self.0.contains(&error)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.0.iter()
    }

    fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }
}

/// A consistent read of all form sub-state, taken at the moment of submit.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationSnapshot {
    pub amount: Option<Decimal>,
    pub donor: DonorInfoCollector,
    pub payment_method: PaymentMethod,
}

impl DonationSnapshot {
    pub fn capture(
        amount: &AmountSelector,
        donor: &DonorInfoCollector,
        payment: &PaymentMethodSelector,
    ) -> Self {
        Self {
            amount: amount.final_amount(),
            donor: donor.clone(),
            payment_method: payment.current(),
        }
    }

    /// Checks amount then email, collecting every failure.
    ///
    /// On success the returned request is the only thing handed to the
    /// payment gateway.
    pub fn validate(&self) -> Result<DonationRequest, ValidationErrors> {
        let mut errors = ValidationErrors::default();

        let amount = self.amount.and_then(|value| Amount::new(value).ok());
        if amount.is_none() {
            errors.push(ValidationError::Amount);
        }

        let email = self
            .donor
            .email()
            .filter(|_| self.donor.is_email_well_formed());
        if email.is_none() {
            errors.push(ValidationError::Email);
        }

        match (amount, email) {
            (Some(amount), Some(donor_email)) => Ok(DonationRequest {
                amount,
                donor_name: self.donor.name(),
                donor_email,
                donor_phone: self.donor.phone(),
                dedication_message: self.donor.dedication_message(),
                payment_method: self.payment_method,
                currency: DEFAULT_CURRENCY.to_string(),
            }),
            _ => Err(errors),
        }
    }
}

/// The validated donation handed to the payment gateway.
///
/// Built fresh for every attempt and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    amount: Amount,
    donor_name: Option<String>,
    donor_email: String,
    donor_phone: Option<String>,
    dedication_message: Option<String>,
    payment_method: PaymentMethod,
    currency: String,
}

impl DonationRequest {
    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn amount_minor_units(&self) -> Option<i64> {
        self.amount.minor_units()
    }

    pub fn donor_name(&self) -> Option<&str> {
        self.donor_name.as_deref()
    }

    pub fn donor_email(&self) -> &str {
        &self.donor_email
    }

    pub fn donor_phone(&self) -> Option<&str> {
        self.donor_phone.as_deref()
    }

    pub fn dedication_message(&self) -> Option<&str> {
        self.dedication_message.as_deref()
    }

    pub fn payment_method(&self) -> PaymentMethod {
        self.payment_method
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn snapshot(amount: Option<Decimal>, email: &str) -> DonationSnapshot {
        let mut donor = DonorInfoCollector::new();
        donor.set_email(email);
        DonationSnapshot {
            amount,
            donor,
            payment_method: PaymentMethod::Card,
        }
    }

    #[test]
    fn test_valid_snapshot_builds_request() {
        let mut snapshot = snapshot(Some(dec!(50)), "a@b.com");
        snapshot.donor.set_name("Jane Doe");
        snapshot.payment_method = PaymentMethod::PayPal;

        let request = snapshot.validate().unwrap();
        assert_eq!(request.amount().value(), dec!(50));
        assert_eq!(request.amount_minor_units(), Some(5000));
        assert_eq!(request.donor_email(), "a@b.com");
        assert_eq!(request.donor_name(), Some("Jane Doe"));
        assert_eq!(request.donor_phone(), None);
        assert_eq!(request.payment_method(), PaymentMethod::PayPal);
        assert_eq!(request.currency(), "usd");
    }

    #[test]
    fn test_all_errors_are_collected() {
        let errors = snapshot(None, "").validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains(ValidationError::Amount));
        assert!(errors.contains(ValidationError::Email));
    }

    #[test]
    fn test_amount_below_minimum_is_rejected() {
        let errors = snapshot(Some(dec!(0.50)), "a@b.com").validate().unwrap_err();
        assert!(errors.contains(ValidationError::Amount));
        assert!(!errors.contains(ValidationError::Email));
    }

    #[test]
    fn test_malformed_email_is_rejected() {
        let errors = snapshot(Some(dec!(25)), "a@b").validate().unwrap_err();
        assert!(errors.contains(ValidationError::Email));
        assert!(!errors.contains(ValidationError::Amount));
    }

    #[test]
    fn test_request_serializes_camel_case() {
        let request = snapshot(Some(dec!(15.50)), "a@b.com").validate().unwrap();
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["donorEmail"], "a@b.com");
        assert_eq!(json["paymentMethod"], "card");
        assert_eq!(json["amount"], "15.50");
        assert!(json["donorName"].is_null());
    }
}
