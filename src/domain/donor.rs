use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is a valid regex")
});

/// Donor identity fields as typed into the form.
///
/// Nothing is validated while editing; [`is_email_present`] and
/// [`is_email_well_formed`] are read at submission time.
///
/// [`is_email_present`]: DonorInfoCollector::is_email_present
/// [`is_email_well_formed`]: DonorInfoCollector::is_email_well_formed
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorInfoCollector {
    name: String,
    email: String,
    phone: String,
    dedication_message: String,
}

impl DonorInfoCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    pub fn set_email(&mut self, email: &str) {
        self.email = email.to_string();
    }

    pub fn set_phone(&mut self, phone: &str) {
        self.phone = phone.to_string();
    }

    pub fn set_dedication_message(&mut self, message: &str) {
        self.dedication_message = message.to_string();
    }

    pub fn name(&self) -> Option<String> {
        non_blank(&self.name)
    }

    pub fn email(&self) -> Option<String> {
        non_blank(&self.email)
    }

    pub fn phone(&self) -> Option<String> {
        non_blank(&self.phone)
    }

    pub fn dedication_message(&self) -> Option<String> {
        non_blank(&self.dedication_message)
    }

    pub fn is_email_present(&self) -> bool {
        !self.email.trim().is_empty()
    }

    pub fn is_email_well_formed(&self) -> bool {
        EMAIL_PATTERN.is_match(self.email.trim())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
