use donation_intake::domain::ports::{
    GatewayOutcome, Notification, NotifierBox, PaymentGatewayBox, Receipt, ReceiptSenderBox,
    RouterBox,
};
use donation_intake::domain::request::DonationSnapshot;
use donation_intake::infrastructure::console::{TracingNotifier, TracingReceiptSender, TracingRouter};
use donation_intake::infrastructure::simulated::{SimulatedGateway, SimulationMode};
use rust_decimal_macros::dec;
use std::time::Duration;

#[tokio::test]
async fn test_adapters_as_trait_objects() {
    let gateway: PaymentGatewayBox =
        Box::new(SimulatedGateway::new(SimulationMode::Cancel).with_delay(Duration::ZERO));
    let notifier: NotifierBox = Box::new(TracingNotifier);
    let router: RouterBox = Box::new(TracingRouter);
    let receipts: ReceiptSenderBox = Box::new(TracingReceiptSender);

    let mut snapshot = DonationSnapshot {
        amount: Some(dec!(25)),
        ..DonationSnapshot::default()
    };
    snapshot.donor.set_email("a@b.com");
    let request = snapshot.validate().unwrap();

    // Verify Send + Sync by spawning tasks
    let gateway_handle = tokio::spawn(async move { gateway.submit_donation(&request).await });
    let side_effects = tokio::spawn(async move {
        notifier
            .notify(Notification::info("Processing donation...", "Thank you!"))
            .unwrap();
        router.navigate_to("/cancel").unwrap();
        receipts
            .send_receipt(Receipt {
                donor_email: "a@b.com".to_string(),
                amount: donation_intake::domain::amount::Amount::new(dec!(25)).unwrap(),
                transaction_id: "TXN1".to_string(),
            })
            .await
    });

    assert_eq!(
        gateway_handle.await.unwrap().unwrap(),
        GatewayOutcome::Cancelled
    );
    side_effects.await.unwrap().unwrap();
}
