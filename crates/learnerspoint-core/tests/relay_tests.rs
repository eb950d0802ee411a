//! Form relay integration tests against a mock relay server.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::MockRelay;
use learnerspoint_core::relay::SUCCESS_QUERY;
use learnerspoint_core::timer::{drive, Step};
use learnerspoint_core::{
    is_success_redirect, ContactFields, Deadline, FormRelay, HttpRelay, Receipts, SiteError,
    Submission,
};
use parking_lot::Mutex;

fn enrollee() -> ContactFields {
    ContactFields {
        full_name: "Rohan Mehta".to_string(),
        email: "rohan@example.com".to_string(),
        phone: "+91 90000 00000".to_string(),
        message: "Looking for JEE coaching & weekly tests".to_string(),
    }
}

#[tokio::test]
async fn enrollment_is_posted_url_encoded() {
    let relay = MockRelay::accepting().await;
    let http = HttpRelay::new(&relay.settings("office@example.com")).unwrap();

    let submission = Submission::enrollment(&enrollee()).unwrap();
    http.submit(&submission).await.unwrap();

    let captured = relay.captured().await;
    assert_eq!(captured.len(), 1);
    let form = &captured[0];
    assert_eq!(form.destination, "office@example.com");
    assert_eq!(form.field("fullName").as_deref(), Some("Rohan Mehta"));
    assert_eq!(form.field("email").as_deref(), Some("rohan@example.com"));
    assert_eq!(
        form.field("message").as_deref(),
        Some("Looking for JEE coaching & weekly tests")
    );
    assert_eq!(form.field("_subject").as_deref(), Some("New Enrollment Submission"));
    assert_eq!(form.field("_captcha").as_deref(), Some("false"));
}

#[tokio::test]
async fn payment_is_posted_with_method() {
    let relay = MockRelay::accepting().await;
    let http = HttpRelay::new(&relay.settings("office@example.com")).unwrap();

    http.submit(&Submission::payment()).await.unwrap();

    let captured = relay.captured().await;
    assert_eq!(captured[0].field("paymentMethod").as_deref(), Some("UPI"));
    assert_eq!(captured[0].field("fullName"), None);
}

#[tokio::test]
async fn rejected_submission_surfaces_status_and_message() {
    let relay = MockRelay::start(
        StatusCode::UNPROCESSABLE_ENTITY,
        r#"{"success":"false","message":"Form should have at least one field"}"#,
    )
    .await;
    let http = HttpRelay::new(&relay.settings("office@example.com")).unwrap();

    let err = http
        .submit(&Submission::contact(&enrollee()).unwrap())
        .await
        .unwrap_err();

    match err {
        SiteError::RelayRejected { status, message } => {
            assert_eq!(status, 422);
            assert_eq!(message, "Form should have at least one field");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn ok_status_without_success_flag_is_rejected() {
    let relay = MockRelay::start(StatusCode::OK, "<html>activate your form</html>").await;
    let http = HttpRelay::new(&relay.settings("office@example.com")).unwrap();

    let err = http.submit(&Submission::payment()).await.unwrap_err();
    assert!(matches!(err, SiteError::RelayRejected { status: 200, .. }));
}

#[tokio::test]
async fn unreachable_relay_is_a_transport_error() {
    let relay = MockRelay::accepting().await;
    let mut settings = relay.settings("office@example.com");
    // Nothing listens on port 9 locally
    settings.endpoint = "http://127.0.0.1:9".to_string();
    let http = HttpRelay::new(&settings).unwrap();

    let err = http.submit(&Submission::payment()).await.unwrap_err();
    assert!(matches!(err, SiteError::Relay(_)));
}

#[tokio::test]
async fn invalid_form_never_reaches_the_relay() {
    let mut fields = enrollee();
    fields.full_name.clear();
    assert!(matches!(
        Submission::enrollment(&fields),
        Err(SiteError::MissingField("fullName"))
    ));
}

async fn advance(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

/// Submit, come back with the success marker, show the banner for five
/// seconds.
#[tokio::test]
async fn enrollment_round_trip_shows_banner_for_five_seconds() {
    let relay = MockRelay::accepting().await;
    let settings = relay.settings("office@example.com");
    let http = HttpRelay::new(&settings).unwrap();

    http.submit(&Submission::enrollment(&enrollee()).unwrap())
        .await
        .unwrap();
    drop(http);

    // The page the app lands on after the relay accepts
    let query = SUCCESS_QUERY.to_string();
    assert!(is_success_redirect(&query));

    tokio::time::pause();
    let banner = Arc::new(Mutex::new(Deadline::idle(Duration::from_millis(
        settings.banner_ms,
    ))));
    if is_success_redirect(&query) {
        banner.lock().arm();
    }
    let handle = {
        let banner = banner.clone();
        tokio::spawn(async move {
            drive(move |step: Step<Deadline>| step(&mut banner.lock())).await;
        })
    };

    advance(4999).await;
    assert!(banner.lock().is_pending(), "banner hid early");

    advance(2).await;
    assert!(!banner.lock().is_pending());
    assert!(banner.lock().is_elapsed());
    handle.await.unwrap();
}

/// A second accepted submission lands on the same success route, yet the
/// banner comes back for another five seconds.
#[tokio::test]
async fn repeat_submission_shows_the_banner_again() {
    let relay = MockRelay::accepting().await;
    let settings = relay.settings("office@example.com");
    let http = HttpRelay::new(&settings).unwrap();
    let after = Duration::from_millis(settings.banner_ms);

    let mut receipts = Receipts::default();
    let mut seen = receipts.count();
    let mut banner = Deadline::idle(after);

    for round in 1..=2u64 {
        http.submit(&Submission::enrollment(&enrollee()).unwrap())
            .await
            .unwrap();
        receipts.record();

        assert!(receipts.take_new(&mut seen), "round {round} not noticed");
        banner.arm();
        assert!(banner.is_pending());

        tokio::time::pause();
        let start = tokio::time::Instant::now();
        drive(|step: Step<Deadline>| step(&mut banner)).await;
        assert!(banner.is_elapsed());
        assert!(start.elapsed() >= after);
        tokio::time::resume();
    }

    assert_eq!(relay.captured().await.len(), 2);
    assert!(!receipts.take_new(&mut seen));
}
