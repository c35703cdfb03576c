use std::time::Duration as StdDuration;

use chartbridge::management::{LOGIN_TIMEOUT, SessionManager};
use chartbridge::types::Credential;
use chrono::{Duration, Utc};

fn credential(access_token: &str) -> Credential {
    Credential {
        access_token: access_token.to_string(),
        refresh_token: format!("{access_token}-refresh"),
        scope: "playlist-modify-public".to_string(),
        expires_at: Utc::now() + Duration::seconds(3600),
    }
}

#[tokio::test]
async fn test_sync_stores_refreshed_credential() {
    let sessions = SessionManager::new();
    let original = credential("access-1");
    sessions.store_credential("s1", original.clone()).await;

    let refreshed = credential("access-1b");
    sessions
        .sync_credential("s1", &original, Some(&refreshed))
        .await;

    assert_eq!(sessions.credential("s1").await, Some(refreshed));
}

#[tokio::test]
async fn test_sync_keeps_login_made_during_request() {
    let sessions = SessionManager::new();
    let original = credential("access-1");
    sessions.store_credential("s1", original.clone()).await;

    // the same session logs in again while a long request is running
    let relogin = credential("access-2");
    sessions.store_credential("s1", relogin.clone()).await;

    sessions.sync_credential("s1", &original, Some(&original)).await;
    assert_eq!(sessions.credential("s1").await, Some(relogin.clone()));

    let refreshed = credential("access-1b");
    sessions
        .sync_credential("s1", &original, Some(&refreshed))
        .await;
    assert_eq!(sessions.credential("s1").await, Some(relogin));
}

#[tokio::test]
async fn test_sync_clears_after_failed_refresh() {
    let sessions = SessionManager::new();
    let original = credential("access-1");
    sessions.store_credential("s1", original.clone()).await;

    sessions.sync_credential("s1", &original, None).await;

    assert!(sessions.credential("s1").await.is_none());
}

#[tokio::test]
async fn test_failed_refresh_does_not_clear_newer_login() {
    let sessions = SessionManager::new();
    let original = credential("access-1");
    sessions.store_credential("s1", original.clone()).await;
    sessions.store_credential("s1", credential("access-2")).await;

    sessions.sync_credential("s1", &original, None).await;

    assert_eq!(
        sessions.credential("s1").await.map(|c| c.access_token),
        Some("access-2".to_string())
    );
}

#[tokio::test]
async fn test_login_state_is_single_use() {
    let sessions = SessionManager::new();
    let state = sessions.begin_login("s1").await;

    assert_eq!(sessions.finish_login(&state).await.as_deref(), Some("s1"));
    assert!(sessions.finish_login(&state).await.is_none());
}

#[tokio::test]
async fn test_new_login_replaces_pending_one() {
    let sessions = SessionManager::new();

    let first = sessions.begin_login("s1").await;
    let second = sessions.begin_login("s1").await;
    sessions.begin_login("s2").await;

    assert_eq!(sessions.pending_logins().await, 2);
    assert!(sessions.finish_login(&first).await.is_none());
    assert_eq!(sessions.finish_login(&second).await.as_deref(), Some("s1"));
}

#[tokio::test(start_paused = true)]
async fn test_login_state_expires() {
    let sessions = SessionManager::new();
    let state = sessions.begin_login("s1").await;

    tokio::time::advance(LOGIN_TIMEOUT + StdDuration::from_secs(1)).await;

    assert!(sessions.finish_login(&state).await.is_none());
}

#[tokio::test(start_paused = true)]
async fn test_expired_logins_are_dropped() {
    let sessions = SessionManager::new();
    for i in 0..50 {
        sessions.begin_login(&format!("s{i}")).await;
    }
    assert_eq!(sessions.pending_logins().await, 50);

    tokio::time::advance(LOGIN_TIMEOUT + StdDuration::from_secs(1)).await;
    sessions.begin_login("late").await;

    assert_eq!(sessions.pending_logins().await, 1);
}
