//! End-to-end tests for the submission workflow running against a mocked
//! SMS backend: real SmsClient, real spawn_blocking gateway, mockito server.

use mockito::Server;
use std::sync::Arc;
use std::time::Duration;
use uganda_directory::workflow::{AddNumberOutcome, BroadcastOutcome};
use uganda_directory::{
    Catalog, NotificationKind, SmsClient, SmsGateway, SmsGatewayImpl, SubmissionState,
    SubmissionWorkflow,
};

fn gateway_for(server: &Server) -> Arc<dyn SmsGateway> {
    let client = SmsClient::with_urls(
        server.url(),
        format!("{}/api/districts/broadcast-sms", server.url()),
    );
    Arc::new(SmsGatewayImpl::new(client))
}

fn mbarara_workflow(gateway: Arc<dyn SmsGateway>) -> SubmissionWorkflow {
    let catalog = Catalog::uganda_default();
    let district = catalog.district("Western", "Mbarara").unwrap();
    SubmissionWorkflow::new("Western", district, gateway, Duration::from_secs(3))
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_number_end_to_end() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/districts/Mbarara/phone-numbers")
        .with_status(201)
        .with_header("content-type", "application/json")
        .with_body(r#"{"status": "created"}"#)
        .create_async()
        .await;

    let mut workflow = mbarara_workflow(gateway_for(&server));
    assert_eq!(workflow.list().len(), 2);

    let outcome = workflow.add_number("+256709998877").await;

    mock.assert_async().await;
    assert!(matches!(outcome, AddNumberOutcome::Added));
    assert_eq!(workflow.list().len(), 3);
    assert_eq!(workflow.list().numbers()[2], "+256709998877");
    assert_eq!(workflow.state(), SubmissionState::Idle);
    assert_eq!(
        workflow.notification().unwrap().kind,
        NotificationKind::Success
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_add_number_backend_rejection_end_to_end() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/districts/Mbarara/phone-numbers")
        .with_status(409)
        .with_header("content-type", "application/json")
        .with_body(r#"{"message": "duplicate number"}"#)
        .create_async()
        .await;

    let mut workflow = mbarara_workflow(gateway_for(&server));
    let outcome = workflow.add_number("+256701123456").await;

    mock.assert_async().await;
    assert!(matches!(outcome, AddNumberOutcome::Failed(_)));
    assert_eq!(workflow.list().len(), 2);

    let notification = workflow.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "duplicate number");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_invalid_number_issues_no_request() {
    let mut server = Server::new_async().await;

    // Expect zero hits on the backend
    let mock = server
        .mock("POST", "/districts/Mbarara/phone-numbers")
        .expect(0)
        .create_async()
        .await;

    let mut workflow = mbarara_workflow(gateway_for(&server));
    let outcome = workflow.add_number("256701123456").await;

    mock.assert_async().await;
    assert!(matches!(outcome, AddNumberOutcome::InvalidNumber));
    assert_eq!(workflow.list().len(), 2);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_broadcast_end_to_end() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/districts/broadcast-sms")
        .match_body(mockito::Matcher::Json(serde_json::json!({
            "region": "Western",
            "district": "Mbarara",
            "phoneNumbers": ["+256701123456", "+256772234567"]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"queued": 2}"#)
        .create_async()
        .await;

    let mut workflow = mbarara_workflow(gateway_for(&server));

    let mut confirmed_count = 0;
    let outcome = workflow
        .broadcast(|count| {
            confirmed_count = count;
            true
        })
        .await;

    mock.assert_async().await;
    assert!(matches!(outcome, BroadcastOutcome::Initiated));
    assert_eq!(confirmed_count, 2);
    assert_eq!(
        workflow.notification().unwrap().kind,
        NotificationKind::Success
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_broadcast_declined_issues_no_request() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("POST", "/api/districts/broadcast-sms")
        .expect(0)
        .create_async()
        .await;

    let mut workflow = mbarara_workflow(gateway_for(&server));
    let outcome = workflow.broadcast(|_| false).await;

    mock.assert_async().await;
    assert!(matches!(outcome, BroadcastOutcome::Declined));
    assert_eq!(workflow.state(), SubmissionState::Idle);
    assert!(workflow.notification().is_none());
}

#[tokio::test(flavor = "multi_thread")]
async fn test_transport_failure_surfaces_fallback_message() {
    // Nothing listens here; the request fails at the transport level
    let client = SmsClient::with_urls(
        "http://127.0.0.1:1".to_string(),
        "http://127.0.0.1:1/api/districts/broadcast-sms".to_string(),
    );
    let gateway: Arc<dyn SmsGateway> = Arc::new(SmsGatewayImpl::new(client));

    let mut workflow = mbarara_workflow(gateway);
    let outcome = workflow.add_number("+256709998877").await;

    assert!(matches!(outcome, AddNumberOutcome::Failed(_)));
    assert_eq!(workflow.list().len(), 2);

    let notification = workflow.notification().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert_eq!(notification.message, "Failed to add phone number");
}
