use crate::error::{DonationError, Result};
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Quick-select donation values, in whole dollars.
pub const PRESET_AMOUNTS: [u32; 6] = [10, 25, 50, 100, 250, 500];

/// Smallest donation the intake flow accepts.
pub const MINIMUM_DONATION: Decimal = dec!(1.00);

/// A validated donation amount.
///
/// Always at least [`MINIMUM_DONATION`] and carries no more than two decimal
/// places, so it can be charged in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Amount(Decimal);

impl Amount {
    pub fn new(value: Decimal) -> Result<Self> {
        if value >= MINIMUM_DONATION && value.normalize().scale() <= 2 {
            Ok(Self(value))
        } else {
            Err(DonationError::InvalidAmount(value))
        }
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The amount in cents. `None` only if it does not fit in an `i64`.
    pub fn minor_units(&self) -> Option<i64> {
        (self.0 * dec!(100)).trunc().to_i64()
    }
}

impl TryFrom<Decimal> for Amount {
    type Error = DonationError;

    fn try_from(value: Decimal) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Amount> for Decimal {
    fn from(amount: Amount) -> Self {
        amount.0
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut value = self.0;
        value.rescale(2);
        write!(f, "${}", value)
    }
}

/// Tracks the donation amount as either a preset choice or a typed value.
///
/// At most one of the two is active at a time: picking a preset wipes the
/// typed value and typing anything wipes the preset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AmountSelector {
    preset: Option<u32>,
    custom_text: String,
}

impl AmountSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn select_preset(&mut self, value: u32) -> Result<()> {
        if !PRESET_AMOUNTS.contains(&value) {
            return Err(DonationError::UnknownPreset(value));
        }
        self.preset = Some(value);
        self.custom_text.clear();
        Ok(())
    }

    /// Records raw input from the custom amount field.
    ///
    /// Never fails: text that is not a positive number simply leaves no
    /// custom amount, and the problem is reported when the donation is
    /// submitted.
    pub fn set_custom_amount(&mut self, text: &str) {
        if text.trim().is_empty() {
            self.custom_text.clear();
            return;
        }
        self.custom_text = text.to_string();
        self.preset = None;
    }

    pub fn preset(&self) -> Option<u32> {
        self.preset
    }

    pub fn custom_text(&self) -> &str {
        &self.custom_text
    }

    pub fn custom_amount(&self) -> Option<Decimal> {
        Decimal::from_str(self.custom_text.trim())
            .ok()
            .filter(|value| *value > Decimal::ZERO)
    }

    pub fn final_amount(&self) -> Option<Decimal> {
        self.custom_amount()
            .or_else(|| self.preset.map(Decimal::from))
    }

    pub fn clear(&mut self) {
        self.preset = None;
        self.custom_text.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_preset_becomes_final_amount() {
        for preset in PRESET_AMOUNTS {
            let mut selector = AmountSelector::new();
            selector.set_custom_amount("42");
            selector.select_preset(preset).unwrap();

            assert_eq!(selector.final_amount(), Some(Decimal::from(preset)));
            assert_eq!(selector.custom_text(), "");
            assert_eq!(selector.custom_amount(), None);
        }
    }

    #[test]
    fn test_unknown_preset_is_rejected() {
        let mut selector = AmountSelector::new();
        selector.select_preset(25).unwrap();

        assert!(matches!(
            selector.select_preset(30),
            Err(DonationError::UnknownPreset(30))
        ));
        assert_eq!(selector.preset(), Some(25));
    }

    #[test]
    fn test_reselecting_preset_is_idempotent() {
        let mut selector = AmountSelector::new();
        selector.select_preset(100).unwrap();
        let before = selector.clone();
        selector.select_preset(100).unwrap();
        assert_eq!(selector, before);
    }

    #[test]
    fn test_custom_amount_clears_preset() {
        let mut selector = AmountSelector::new();
        selector.select_preset(50).unwrap();
        selector.set_custom_amount("15.50");

        assert_eq!(selector.preset(), None);
        assert_eq!(selector.final_amount(), Some(dec!(15.50)));
    }

    #[test]
    fn test_non_numeric_or_non_positive_custom_amount_is_absent() {
        for text in ["abc", "0", "-5", "12..5"] {
            let mut selector = AmountSelector::new();
            selector.select_preset(10).unwrap();
            selector.set_custom_amount(text);

            assert_eq!(selector.final_amount(), None, "input {text:?}");
            assert_eq!(selector.preset(), None);
        }
    }

    #[test]
    fn test_empty_edit_keeps_preset() {
        let mut selector = AmountSelector::new();
        selector.select_preset(250).unwrap();
        selector.set_custom_amount("  ");

        assert_eq!(selector.final_amount(), Some(dec!(250)));
    }

    #[test]
    fn test_nothing_selected_has_no_final_amount() {
        assert_eq!(AmountSelector::new().final_amount(), None);
    }

    #[test]
    fn test_amount_validation() {
        assert!(Amount::new(dec!(1.00)).is_ok());
        assert!(Amount::new(dec!(15.50)).is_ok());
        assert!(matches!(
            Amount::new(dec!(0.99)),
            Err(DonationError::InvalidAmount(_))
        ));
        assert!(matches!(
            Amount::new(dec!(10.005)),
            Err(DonationError::InvalidAmount(_))
        ));
    }

    #[test]
    fn test_amount_display_and_minor_units() {
        let amount = Amount::new(dec!(50)).unwrap();
        assert_eq!(amount.to_string(), "$50.00");
        assert_eq!(amount.minor_units(), Some(5000));

        let amount = Amount::new(dec!(15.5)).unwrap();
        assert_eq!(amount.to_string(), "$15.50");
        assert_eq!(amount.minor_units(), Some(1550));
    }
}
