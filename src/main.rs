use clap::{Parser, ValueEnum};
use donation_intake::application::controller::{SubmissionController, SubmitOutcome};
use donation_intake::application::page::DonationPage;
use donation_intake::config::IntakeConfig;
use donation_intake::domain::payment_method::PaymentMethod;
use donation_intake::infrastructure::console::{TracingNotifier, TracingReceiptSender, TracingRouter};
use donation_intake::infrastructure::simulated::{SimulatedGateway, SimulationMode};
use donation_intake::interfaces::outcome_writer::OutcomeWriter;
use miette::{IntoDiagnostic, Result};
use std::io;
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Clone, Copy, ValueEnum)]
enum Method {
    Card,
    Paypal,
}

impl From<Method> for PaymentMethod {
    fn from(method: Method) -> Self {
        match method {
            Method::Card => PaymentMethod::Card,
            Method::Paypal => PaymentMethod::PayPal,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Simulate {
    Succeed,
    Cancel,
    Fail,
    Hang,
}

impl From<Simulate> for SimulationMode {
    fn from(mode: Simulate) -> Self {
        match mode {
            Simulate::Succeed => SimulationMode::Succeed,
            Simulate::Cancel => SimulationMode::Cancel,
            Simulate::Fail => SimulationMode::Fail,
            Simulate::Hang => SimulationMode::Hang,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Preset amount to donate (10, 25, 50, 100, 250 or 500)
    #[arg(long, conflicts_with = "custom")]
    preset: Option<u32>,

    /// Custom amount to donate, e.g. 15.50
    #[arg(long)]
    custom: Option<String>,

    /// Donor email, required for the receipt
    #[arg(long, default_value = "")]
    email: String,

    #[arg(long)]
    name: Option<String>,

    #[arg(long)]
    phone: Option<String>,

    /// Dedication message, e.g. "In honor of..."
    #[arg(long)]
    message: Option<String>,

    #[arg(long, value_enum, default_value = "card")]
    method: Method,

    /// How the simulated payment gateway answers
    #[arg(long, value_enum, default_value = "succeed")]
    simulate: Simulate,

    /// Simulated processing delay in milliseconds
    #[arg(long, default_value_t = 1500)]
    delay_ms: u64,

    /// Gateway deadline in milliseconds (overrides the config file)
    #[arg(long)]
    timeout_ms: Option<u64>,

    /// JSON config file for the intake flow
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the outcome as JSON
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => {
            let source = std::fs::read_to_string(path).into_diagnostic()?;
            IntakeConfig::from_json(&source).into_diagnostic()?
        }
        None => IntakeConfig::default(),
    };
    if let Some(timeout_ms) = cli.timeout_ms {
        config.gateway_timeout_ms = timeout_ms;
    }

    let gateway = SimulatedGateway::new(cli.simulate.into())
        .with_delay(Duration::from_millis(cli.delay_ms));
    let controller = SubmissionController::new(
        config,
        Box::new(gateway),
        Box::new(TracingNotifier),
        Box::new(TracingRouter),
        Box::new(TracingReceiptSender),
    );
    let page = DonationPage::mount(controller);

    if let Some(preset) = cli.preset {
        page.select_preset(preset).await.into_diagnostic()?;
    }
    if let Some(custom) = &cli.custom {
        page.set_custom_amount(custom).await.into_diagnostic()?;
    }
    page.set_email(&cli.email).await.into_diagnostic()?;
    if let Some(name) = &cli.name {
        page.set_name(name).await.into_diagnostic()?;
    }
    if let Some(phone) = &cli.phone {
        page.set_phone(phone).await.into_diagnostic()?;
    }
    if let Some(message) = &cli.message {
        page.set_dedication_message(message).await.into_diagnostic()?;
    }
    page.select_payment_method(cli.method.into())
        .await
        .into_diagnostic()?;

    let outcome = page.submit().await.into_diagnostic()?;
    if !matches!(outcome, SubmitOutcome::Completed(_) | SubmitOutcome::Rejected(_)) {
        warn!(?outcome, "Donation attempt did not complete");
    }

    let stdout = io::stdout();
    let mut writer = OutcomeWriter::new(stdout.lock());
    if let Some(view) = page.outcome().await {
        if cli.json {
            writer.write_json(&view).into_diagnostic()?;
        } else {
            writer.write_text(&view).into_diagnostic()?;
        }
    }

    page.teardown();
    Ok(())
}
