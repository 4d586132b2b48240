//! Submission flow driven through the controller with an in-process service.

mod common;

use std::sync::Arc;
use std::time::Duration;

use buster::analysis::AnalysisError;
use buster::ui::mvi::UiEffect;
use buster::ui::submission::{Settlement, SubmissionController, SubmissionState};
use common::{media_report, ScriptedService};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver};
use tokio::time::timeout;

fn controller(service: &ScriptedService) -> (SubmissionController, UnboundedReceiver<Settlement>) {
    let (tx, rx) = unbounded_channel();
    let controller = SubmissionController::new(Arc::new(service.clone()), tx, Handle::current());
    (controller, rx)
}

async fn next_settlement(rx: &mut UnboundedReceiver<Settlement>) -> Settlement {
    timeout(Duration::from_secs(2), rx.recv())
        .await
        .expect("settlement in time")
        .expect("channel open")
}

#[tokio::test]
async fn blank_input_is_ignored() {
    let service = ScriptedService::new();
    let (mut controller, _rx) = controller(&service);

    assert_eq!(controller.submit(""), None);
    assert_eq!(controller.submit("   \t"), None);

    assert_eq!(controller.state(), &SubmissionState::Idle);
    assert!(controller.take_effects().is_empty());
    assert_eq!(controller.last_request_id(), 0);

    tokio::task::yield_now().await;
    assert!(service.requests().is_empty());
}

#[tokio::test]
async fn submit_is_pending_before_returning() {
    let service = ScriptedService::new();
    service.reply_after(
        "https://instagram.com/p/abc",
        Duration::from_millis(50),
        Ok(media_report(&["REAL"])),
    );
    let (mut controller, _rx) = controller(&service);

    let id = controller.submit("  https://instagram.com/p/abc  ").unwrap();

    assert_eq!(
        controller.state(),
        &SubmissionState::Pending {
            request_id: id,
            url: "https://instagram.com/p/abc".to_string(),
        }
    );
    assert_eq!(controller.take_effects(), vec![UiEffect::ScrollToResult]);
}

#[tokio::test]
async fn success_settles_and_scrolls_again() {
    let service = ScriptedService::new();
    service.reply("https://example.com/p", Ok(media_report(&["FAKE", "REAL"])));
    let (mut controller, mut rx) = controller(&service);

    let id = controller.submit("https://example.com/p").unwrap();
    assert_eq!(controller.take_effects(), vec![UiEffect::ScrollToResult]);

    let settlement = next_settlement(&mut rx).await;
    assert_eq!(settlement.request_id, id);
    assert!(controller.apply(settlement));

    let report = controller.state().report().expect("success state");
    assert_eq!(report.entry_count(), 2);
    assert!(report.any_fake());
    assert_eq!(controller.take_effects(), vec![UiEffect::ScrollToResult]);

    let requests = service.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, "https://example.com/p");
    assert_eq!(requests[0].version, None);
}

#[tokio::test]
async fn failure_shows_message_without_extra_scroll() {
    let service = ScriptedService::new();
    service.reply(
        "https://example.com/p",
        Err(AnalysisError::Service {
            status: 500,
            message: "blocked".to_string(),
        }),
    );
    let (mut controller, mut rx) = controller(&service);

    controller.submit("https://example.com/p").unwrap();
    controller.take_effects();

    let settlement = next_settlement(&mut rx).await;
    assert!(controller.apply(settlement));

    assert!(controller.state().is_settled());
    assert_eq!(controller.state().error_message(), Some("blocked"));
    assert!(controller.take_effects().is_empty());
}

#[tokio::test]
async fn stale_settlement_is_discarded() {
    let service = ScriptedService::new();
    service
        .reply_after(
            "https://example.com/first",
            Duration::from_secs(5),
            Ok(media_report(&["FAKE"])),
        )
        .reply("https://example.com/second", Ok(media_report(&["REAL"])));
    let (mut controller, mut rx) = controller(&service);

    let first = controller.submit("https://example.com/first").unwrap();
    let second = controller.submit("https://example.com/second").unwrap();
    assert!(second > first);
    assert_eq!(controller.state().url(), Some("https://example.com/second"));

    // A late answer for the superseded request changes nothing.
    let stale = Settlement {
        request_id: first,
        outcome: Ok(media_report(&["FAKE"])),
    };
    assert!(!controller.apply(stale));
    assert!(controller.state().is_pending());
    assert_eq!(controller.state().request_id(), Some(second));

    let settlement = next_settlement(&mut rx).await;
    assert_eq!(settlement.request_id, second);
    assert!(controller.apply(settlement));
    assert!(!controller.state().report().unwrap().any_fake());
}

#[tokio::test]
async fn resubmitting_after_settle_starts_over() {
    let service = ScriptedService::new();
    service
        .reply(
            "https://example.com/p",
            Err(AnalysisError::Transport("connection refused".to_string())),
        )
        .reply("https://example.com/p", Ok(media_report(&["AI-GENERATED"])));
    let (mut controller, mut rx) = controller(&service);

    controller.submit("https://example.com/p").unwrap();
    let settlement = next_settlement(&mut rx).await;
    controller.apply(settlement);
    assert_eq!(controller.state().error_message(), Some("connection refused"));

    controller.submit("https://example.com/p").unwrap();
    assert!(controller.state().is_pending());
    let settlement = next_settlement(&mut rx).await;
    controller.apply(settlement);
    assert!(controller.state().report().unwrap().any_fake());
}

#[tokio::test]
async fn dropping_controller_cancels_request() {
    let service = ScriptedService::new();
    service.reply_after(
        "https://example.com/p",
        Duration::from_secs(5),
        Ok(media_report(&["REAL"])),
    );
    let (mut controller, mut rx) = controller(&service);

    controller.submit("https://example.com/p").unwrap();
    drop(controller);

    let closed = timeout(Duration::from_secs(1), rx.recv())
        .await
        .expect("channel closes once the request is aborted");
    assert!(closed.is_none());
}
