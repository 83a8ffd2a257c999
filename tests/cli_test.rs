use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_cli_successful_donation() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!());
    cmd.args(["--preset", "50", "--email", "a@b.com", "--delay-ms", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Thank You for Your Generosity!"))
        .stdout(predicate::str::contains("amount: $50.00"))
        .stdout(predicate::str::contains("transaction: TXN-"));

    Ok(())
}

#[test]
fn test_cli_validation_failure_lists_errors() {
    let mut cmd = Command::new(cargo_bin!("donation-intake"));
    cmd.args(["--custom", "0.50", "--delay-ms", "0"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Please check your donation details"))
        .stdout(predicate::str::contains("Please select an amount"))
        .stdout(predicate::str::contains("Email required"));
}

#[test]
fn test_cli_cancelled_donation_as_json() {
    let mut cmd = Command::new(cargo_bin!("donation-intake"));
    cmd.args([
        "--email",
        "a@b.com",
        "--method",
        "paypal",
        "--simulate",
        "cancel",
        "--delay-ms",
        "0",
        "--json",
    ]);

    let output = cmd.output().expect("Failed to execute command");
    assert!(output.status.success());
    let view: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(view["kind"], "cancelled");
    assert_eq!(view["actions"][0], "retry");
}

#[test]
fn test_cli_gateway_timeout() {
    let mut cmd = Command::new(cargo_bin!("donation-intake"));
    cmd.args([
        "--email",
        "a@b.com",
        "--simulate",
        "hang",
        "--timeout-ms",
        "100",
    ]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Payment could not be completed"))
        .stdout(predicate::str::contains("next: retry | return home"));
}

#[test]
fn test_cli_rejects_unknown_preset() {
    let mut cmd = Command::new(cargo_bin!("donation-intake"));
    cmd.args(["--preset", "30", "--email", "a@b.com"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not one of the preset donation amounts"));
}

#[test]
fn test_cli_preset_conflicts_with_custom() {
    let mut cmd = Command::new(cargo_bin!("donation-intake"));
    cmd.args(["--preset", "50", "--custom", "12", "--email", "a@b.com"]);

    cmd.assert().failure();
}
