//! Session-aware flows against a mocked HeadlineAI backend

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use headline_core::session::keys;
use headline_core::{BootstrapOutcome, KeyValueStore, MemoryStore, SessionError, SessionManager};
use headline_http::PublicClient;
use headline_http::flows::{self, FlowError, SESSION_EXPIRED_MESSAGE};
use headline_http::types::SignupRequest;
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("headline=debug")
        .with_test_writer()
        .try_init();
}

/// Unsigned JWT expiring `offset` from now
fn token_expiring_in(offset: Duration) -> String {
    let exp = (Utc::now() + offset).timestamp();
    format!(
        "{}.{}.sig",
        URL_SAFE_NO_PAD.encode(r#"{"alg":"HS256"}"#),
        URL_SAFE_NO_PAD.encode(format!(r#"{{"sub":"reader","exp":{exp}}}"#))
    )
}

fn signed_in_store(access_token: &str) -> MemoryStore {
    MemoryStore::with_entries([
        (keys::EMAIL, "reader@example.com"),
        (keys::ACCESS_TOKEN, access_token),
        (keys::REFRESH_TOKEN, "refresh-1"),
        (keys::DISPLAY_NAME, "Me"),
    ])
}

fn assert_signed_out(store: &MemoryStore) {
    for key in keys::ALL {
        assert!(!store.contains(key), "{key} should be absent");
    }
}

#[tokio::test]
async fn test_sign_in_persists_session() {
    init_tracing();
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": "a.b.c"})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(MemoryStore::new());

    let session = flows::sign_in(&client, &sessions, "reader@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(session.access_token.as_deref(), Some("a.b.c"));
    let store = sessions.store();
    assert_eq!(store.value(keys::ACCESS_TOKEN).as_deref(), Some("a.b.c"));
    assert_eq!(store.value(keys::EMAIL).as_deref(), Some("reader@example.com"));
    assert_eq!(store.value(keys::DISPLAY_NAME).as_deref(), Some("Me"));
    assert!(!store.contains(keys::REFRESH_TOKEN));
}

#[tokio::test]
async fn test_sign_in_stores_refresh_token_when_issued() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "access_token": "a.b.c",
            "refresh_token": "refresh-1"
        })))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(MemoryStore::new());
    flows::sign_in(&client, &sessions, "reader@example.com", "hunter2")
        .await
        .unwrap();

    assert_eq!(
        sessions.store().value(keys::REFRESH_TOKEN).as_deref(),
        Some("refresh-1")
    );
}

#[tokio::test]
async fn test_failed_sign_in_leaves_storage_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect username or password"})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let store = MemoryStore::with_entries([(keys::DISPLAY_NAME, "Previous")]);
    let sessions = SessionManager::new(store);

    let err = flows::sign_in(&client, &sessions, "reader@example.com", "wrong")
        .await
        .unwrap_err();

    assert_eq!(err.user_message(), "Incorrect username or password");
    let store = sessions.store();
    assert!(!store.contains(keys::ACCESS_TOKEN));
    assert!(!store.contains(keys::EMAIL));
    assert_eq!(store.value(keys::DISPLAY_NAME).as_deref(), Some("Previous"));
}

#[tokio::test]
async fn test_sign_up_reports_detail() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/signup"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"detail": "Email already registered"})),
        )
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let err = flows::sign_up(
        &client,
        &SignupRequest {
            username: "reader".into(),
            email: "reader@example.com".into(),
            password: "hunter2".into(),
        },
    )
    .await
    .unwrap_err();

    assert_eq!(err.user_message(), "Email already registered");
    assert!(!err.requires_login());
}

#[tokio::test]
async fn test_bootstrap_refreshes_expired_token_through_auth_service() {
    init_tracing();
    let mock_server = MockServer::start().await;
    let renewed = token_expiring_in(Duration::hours(1));

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .and(body_json(json!({"refresh_token": "refresh-1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": renewed})))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(signed_in_store(&token_expiring_in(-Duration::minutes(5))));

    let outcome = sessions.bootstrap(&client, Utc::now()).await.unwrap();

    assert!(matches!(outcome, BootstrapOutcome::Refreshed(_)));
    assert!(outcome.is_authenticated());
    assert_eq!(
        sessions.store().value(keys::ACCESS_TOKEN).as_deref(),
        Some(renewed.as_str())
    );
}

#[tokio::test]
async fn test_rejected_refresh_signs_out() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"detail": "Refresh token expired"})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(signed_in_store(&token_expiring_in(-Duration::minutes(5))));

    let outcome = sessions.bootstrap(&client, Utc::now()).await.unwrap();

    assert!(matches!(
        outcome,
        BootstrapOutcome::Cleared(SessionError::RefreshFailed { .. })
    ));
    assert_signed_out(sessions.store());
}

#[tokio::test]
async fn test_ask_agent_with_fresh_token() {
    let mock_server = MockServer::start().await;
    let token = token_expiring_in(Duration::hours(1));

    Mock::given(method("POST"))
        .and(path("/ai/call_agent"))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .and(body_json(json!({"query": "hello"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "messages": [{"content": "hello"}, {"content": "<b>hi</b>"}]
        })))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(signed_in_store(&token));

    let reply = flows::ask_agent(&client, &sessions, "hello", Utc::now())
        .await
        .unwrap();
    assert_eq!(reply, "<b>hi</b>");
}

#[tokio::test]
async fn test_ask_agent_refreshes_before_calling() {
    let mock_server = MockServer::start().await;
    let renewed = token_expiring_in(Duration::hours(1));

    Mock::given(method("POST"))
        .and(path("/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access_token": renewed})))
        .expect(1)
        .mount(&mock_server)
        .await;
    Mock::given(method("POST"))
        .and(path("/ai/call_agent"))
        .and(header("authorization", format!("Bearer {renewed}").as_str()))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"messages": [{"content": "fresh"}]})),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(signed_in_store(&token_expiring_in(-Duration::minutes(1))));

    let reply = flows::ask_agent(&client, &sessions, "anything new?", Utc::now())
        .await
        .unwrap();
    assert_eq!(reply, "fresh");
}

#[tokio::test]
async fn test_ask_agent_rejected_token_clears_session() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/call_agent"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "Not authenticated"})))
        .mount(&mock_server)
        .await;

    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(signed_in_store(&token_expiring_in(Duration::hours(1))));

    let err = flows::ask_agent(&client, &sessions, "hello", Utc::now())
        .await
        .unwrap_err();

    assert!(err.requires_login());
    assert_signed_out(sessions.store());
}

#[tokio::test]
async fn test_ask_agent_without_session() {
    let mock_server = MockServer::start().await;
    let client = PublicClient::new(mock_server.uri()).unwrap();
    let sessions = SessionManager::new(MemoryStore::new());

    let err = flows::ask_agent(&client, &sessions, "hello", Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(err, FlowError::NotSignedIn));
    assert!(err.requires_login());
}

#[tokio::test]
async fn test_ask_agent_without_refresh_token_reports_expiry() {
    let mock_server = MockServer::start().await;
    let client = PublicClient::new(mock_server.uri()).unwrap();
    let store = MemoryStore::new();
    store.set(keys::EMAIL, "reader@example.com").unwrap();
    store
        .set(keys::ACCESS_TOKEN, &token_expiring_in(-Duration::minutes(1)))
        .unwrap();
    let sessions = SessionManager::new(store);

    let err = flows::ask_agent(&client, &sessions, "hello", Utc::now())
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        FlowError::Session(SessionError::MissingRefreshToken)
    ));
    assert_eq!(err.user_message(), SESSION_EXPIRED_MESSAGE);
    assert_signed_out(sessions.store());
}
