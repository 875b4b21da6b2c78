//! End-to-end tests for the notification stream over HTTP.

mod common;

use common::{batch, notification, MockReply, MockWobble};
use serde_json::json;
use std::time::Duration;
use tokio::time::timeout;
use wobble_core::{ClientConfig, Cursor, NotificationKind, WobbleClient, WobbleError};

const PATIENCE: Duration = Duration::from_secs(5);

#[tokio::test]
async fn test_quiet_server_blocks_retrieval_until_next_batch() {
    let server = MockWobble::start().await;
    server.reply_result(
        "get_notifications",
        batch(vec![notification("new-post", "T1", "P9")], 100.0),
    );
    server.reply_result("get_notifications", batch(vec![], 100.0));

    let client = server.client();
    let mut sub = client.subscribe_notifications();

    let first = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.kind, NotificationKind::NewPost);
    assert_eq!(first.topic_id, "T1");
    assert_eq!(first.post_id, "P9");

    // Third poll is held open by the server
    let calls = server.wait_for_calls("get_notifications", 3).await;
    assert!(timeout(Duration::from_millis(100), sub.next_notification())
        .await
        .is_err());

    assert_eq!(calls[0].param("next_timestamp"), None);
    assert_eq!(calls[1].param("next_timestamp"), Some(&json!(100.0)));
    assert_eq!(calls[2].param("next_timestamp"), Some(&json!(100.0)));

    server.reply_result(
        "get_notifications",
        batch(vec![notification("user-joined", "T1", "")], 140.5),
    );
    let third = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(third.kind, NotificationKind::UserJoined);

    let calls = server.wait_for_calls("get_notifications", 4).await;
    assert_eq!(calls[3].param("next_timestamp"), Some(&json!(140.5)));
}

#[tokio::test]
async fn test_http_500_kills_stream() {
    let server = MockWobble::start().await;
    server.reply("get_notifications", MockReply::Status(500));

    let client = server.client();
    let mut sub = client.subscribe_notifications();

    let err = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err, WobbleError::HttpStatus { status: 500 });

    // Still dead, and no further polls were made
    let again = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(again, err);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(server.calls("get_notifications").len(), 1);
}

#[tokio::test]
async fn test_remote_poll_error_is_verbatim() {
    let server = MockWobble::start().await;
    server.reply(
        "get_notifications",
        MockReply::Error {
            code: 403,
            message: "forbidden".into(),
        },
    );

    let client = server.client();
    let mut sub = client.subscribe_notifications();

    let err = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err.remote_code(), Some(403));
    assert_eq!(err.to_string(), "403: forbidden");
}

#[tokio::test]
async fn test_subscription_keeps_session_it_was_created_with() {
    let server = MockWobble::start().await;
    server.reply_result("user_login", json!({"apikey": "first-key"}));
    server.reply_result("user_signout", json!(true));
    server.reply_result(
        "get_notifications",
        batch(vec![notification("new-topic", "T2", "1")], 7.0),
    );

    let mut client = server.client();
    client.login("me@example.com", "pw").await.unwrap();
    let mut sub = client.subscribe_notifications();

    let first = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(first.kind, NotificationKind::NewTopic);

    client.logout().await.unwrap();
    assert!(!client.session().is_authenticated());

    let calls = server.wait_for_calls("get_notifications", 2).await;
    assert_eq!(calls[0].param("apikey"), Some(&json!("first-key")));
    assert_eq!(calls[1].param("apikey"), Some(&json!("first-key")));
}

#[tokio::test]
async fn test_stop_drains_current_batch_without_polling_again() {
    let server = MockWobble::start().await;
    server.reply_result(
        "get_notifications",
        batch(
            vec![
                notification("new-post", "T", "1"),
                notification("new-post", "T", "2"),
            ],
            11.0,
        ),
    );

    let client = server.client();
    let mut sub = client.subscribe_notifications();

    let first = timeout(PATIENCE, sub.next_notification()).await.unwrap();
    assert_eq!(first.unwrap().post_id, "1");
    sub.stop();
    let second = timeout(PATIENCE, sub.next_notification()).await.unwrap();
    assert_eq!(second.unwrap().post_id, "2");

    let closed = timeout(PATIENCE, sub.next_notification()).await.unwrap();
    assert_eq!(closed.unwrap_err(), WobbleError::SubscriptionClosed);
    assert_eq!(server.calls("get_notifications").len(), 1);
}

#[tokio::test]
async fn test_single_poll_round_trip() {
    let server = MockWobble::start().await;
    server.reply_result(
        "get_notifications",
        json!({
            "messags": [notification("new-post", "T3", "4")],
            "next_timestamp": 55.0
        }),
    );

    let client = server.client();
    let result = client.get_notifications(Cursor::new(50.0)).await.unwrap();

    assert_eq!(result.messages.len(), 1);
    assert_eq!(result.next_timestamp, Cursor::new(55.0));
    assert_eq!(
        server.calls("get_notifications")[0].param("next_timestamp"),
        Some(&json!(50.0))
    );
}

#[tokio::test]
async fn test_poll_held_past_limit_times_out_and_ends_stream() {
    let server = MockWobble::start().await;
    let config = ClientConfig::new(&server.endpoint())
        .unwrap()
        .with_poll_timeout(Duration::ZERO)
        .with_poll_grace(Duration::from_millis(200));
    let client = WobbleClient::new(config).unwrap();
    let mut sub = client.subscribe_notifications();

    // Nothing queued, so the server holds the poll open
    let err = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(err, WobbleError::Timeout(Duration::from_millis(200)));
    assert!(err.is_transport());

    let again = timeout(PATIENCE, sub.next_notification())
        .await
        .unwrap()
        .unwrap_err();
    assert_eq!(again, err);

    timeout(PATIENCE, async {
        while !sub.is_finished() {
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
    })
    .await
    .expect("poll loop still running after timeout");
    assert_eq!(server.calls("get_notifications").len(), 1);
}
