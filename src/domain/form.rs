use super::amount::AmountSelector;
use super::donor::DonorInfoCollector;
use super::payment_method::PaymentMethodSelector;
use super::request::DonationSnapshot;

/// All editable sub-state of the donation page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonationForm {
    pub amount: AmountSelector,
    pub donor: DonorInfoCollector,
    pub payment: PaymentMethodSelector,
}

impl DonationForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> DonationSnapshot {
        DonationSnapshot::capture(&self.amount, &self.donor, &self.payment)
    }

    /// Wipes every field, as after a completed donation.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::payment_method::PaymentMethod;
    use rust_decimal_macros::dec;

    #[test]
    fn test_snapshot_reads_all_sub_state() {
        let mut form = DonationForm::new();
        form.amount.set_custom_amount("15.50");
        form.donor.set_email("a@b.com");
        form.payment.select(PaymentMethod::PayPal);

        let snapshot = form.snapshot();
        assert_eq!(snapshot.amount, Some(dec!(15.50)));
        assert_eq!(snapshot.donor.email().as_deref(), Some("a@b.com"));
        assert_eq!(snapshot.payment_method, PaymentMethod::PayPal);
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut form = DonationForm::new();
        form.amount.select_preset(100).unwrap();
        form.donor.set_name("Jane");
        form.payment.select(PaymentMethod::PayPal);
        form.clear();

        assert_eq!(form, DonationForm::default());
    }
}
