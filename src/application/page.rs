use super::controller::{SubmissionController, SubmitOutcome};
use super::outcome::{OutcomeAction, OutcomePresenter, OutcomeView};
use crate::domain::form::DonationForm;
use crate::domain::payment_method::PaymentMethod;
use crate::domain::state::SubmissionState;
use crate::error::{DonationError, Result};
use tokio::sync::RwLock;
use tracing::{debug, warn};

/// A mounted donation page: the editable form plus the controller that
/// submits it.
///
/// Every field edit goes through the page so a validation failure can be
/// cleared as soon as the donor starts fixing their input.
pub struct DonationPage {
    form: RwLock<DonationForm>,
    controller: SubmissionController,
}

impl DonationPage {
    pub fn mount(controller: SubmissionController) -> Self {
        let form = initial_form(&controller);
        Self {
            form: RwLock::new(form),
            controller,
        }
    }

    pub fn controller(&self) -> &SubmissionController {
        &self.controller
    }

    pub async fn form(&self) -> DonationForm {
        self.form.read().await.clone()
    }

    pub async fn state(&self) -> SubmissionState {
        self.controller.state().await
    }

    pub async fn select_preset(&self, value: u32) -> Result<()> {
        self.form.write().await.amount.select_preset(value)?;
        self.controller.on_field_edited().await
    }

    pub async fn set_custom_amount(&self, text: &str) -> Result<()> {
        self.form.write().await.amount.set_custom_amount(text);
        self.controller.on_field_edited().await
    }

    pub async fn set_name(&self, name: &str) -> Result<()> {
        self.form.write().await.donor.set_name(name);
        self.controller.on_field_edited().await
    }

    pub async fn set_email(&self, email: &str) -> Result<()> {
        self.form.write().await.donor.set_email(email);
        self.controller.on_field_edited().await
    }

    pub async fn set_phone(&self, phone: &str) -> Result<()> {
        self.form.write().await.donor.set_phone(phone);
        self.controller.on_field_edited().await
    }

    pub async fn set_dedication_message(&self, message: &str) -> Result<()> {
        self.form.write().await.donor.set_dedication_message(message);
        self.controller.on_field_edited().await
    }

    pub async fn select_payment_method(&self, method: PaymentMethod) -> Result<()> {
        self.form.write().await.payment.select(method);
        self.controller.on_field_edited().await
    }

    pub async fn submit(&self) -> Result<SubmitOutcome> {
        let snapshot = self.form.read().await.snapshot();
        self.controller.submit(snapshot).await
    }

    pub async fn outcome(&self) -> Option<OutcomeView> {
        let state = self.controller.state().await;
        OutcomePresenter::present(&state, self.controller.last_amount().await)
    }

    /// Applies one of the actions offered by the current outcome view.
    pub async fn apply(&self, action: OutcomeAction) -> Result<()> {
        let offered = self
            .outcome()
            .await
            .is_some_and(|view| view.offers(action));
        if !offered {
            warn!(%action, "Outcome action not available");
            return Err(DonationError::ActionUnavailable(action.to_string()));
        }
        debug!(%action, "Applying outcome action");

        match action {
            OutcomeAction::DonateAgain => {
                self.controller.reset().await?;
                *self.form.write().await = initial_form(&self.controller);
                Ok(())
            }
            OutcomeAction::Retry => self.controller.reset().await,
            OutcomeAction::ReturnHome => self.controller.return_home(),
        }
    }

    pub fn teardown(&self) {
        self.controller.teardown();
    }
}

fn initial_form(controller: &SubmissionController) -> DonationForm {
    let mut form = DonationForm::new();
    if let Some(preset) = controller.config().suggested_preset
        && let Err(e) = form.amount.select_preset(preset)
    {
        warn!(error = %e, "Ignoring suggested preset");
    }
    form
}
