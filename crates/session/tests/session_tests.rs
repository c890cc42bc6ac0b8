//! Integration tests for the session context against a mock backend

use std::sync::{Arc, Mutex};

use serde_json::json;
use vibeflow_client::{ApiClient, MemoryStorage, StorageKeys, TokenStorage};
use vibeflow_session::{SessionContext, User};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn token_body() -> serde_json::Value {
    json!({
        "access_token": "access-1",
        "refresh_token": "refresh-1",
        "token_type": "bearer"
    })
}

async fn session_for(server: &MockServer) -> (SessionContext, Arc<MemoryStorage>) {
    let storage = Arc::new(MemoryStorage::new());
    let client = Arc::new(
        ApiClient::builder()
            .base_url(server.uri())
            .storage(storage.clone())
            .build()
            .unwrap(),
    );
    (SessionContext::new(client, storage.clone()), storage)
}

#[tokio::test]
async fn login_adopts_and_persists_identity() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&mock_server)
        .await;

    let (session, storage) = session_for(&mock_server).await;
    session.init();

    session.login("a@b.com", "pw").await.unwrap();

    assert_eq!(
        session.current_user(),
        Some(User {
            id: 1,
            email: "a@b.com".into()
        })
    );
    assert!(session.is_authenticated());
    assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN), Some("access-1".into()));

    let stored: User =
        serde_json::from_str(&storage.get(StorageKeys::USER_DATA).unwrap()).unwrap();
    assert_eq!(stored.email, "a@b.com");
}

#[tokio::test]
async fn failed_login_leaves_state_unchanged() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(json!({"detail": "Incorrect email or password"})),
        )
        .mount(&mock_server)
        .await;

    let (session, storage) = session_for(&mock_server).await;
    session.init();

    let error = session.login("a@b.com", "wrong").await.unwrap_err();
    assert_eq!(error, "Incorrect email or password");
    assert_eq!(session.current_user(), None);
    assert_eq!(storage.get(StorageKeys::USER_DATA), None);
}

#[tokio::test]
async fn register_adopts_identity_without_a_token() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(token_body()))
        .mount(&mock_server)
        .await;

    let (session, storage) = session_for(&mock_server).await;
    session.init();

    session.register("new@b.com", "longenough").await.unwrap();

    assert_eq!(
        session.current_user().map(|user| user.email),
        Some("new@b.com".into())
    );
    // Registration does not log the gateway in
    assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN), None);
}

#[tokio::test]
async fn logout_clears_everything() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&mock_server)
        .await;

    let (session, storage) = session_for(&mock_server).await;
    session.init();
    session.login("a@b.com", "pw").await.unwrap();

    session.logout();

    assert_eq!(session.current_user(), None);
    assert_eq!(storage.get(StorageKeys::ACCESS_TOKEN), None);
    assert_eq!(storage.get(StorageKeys::REFRESH_TOKEN), None);
    assert_eq!(storage.get(StorageKeys::USER_DATA), None);
}

#[tokio::test]
async fn subscribers_see_login_and_logout() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(token_body()))
        .mount(&mock_server)
        .await;

    let (session, _storage) = session_for(&mock_server).await;

    let emails = Arc::new(Mutex::new(Vec::new()));
    let sink = emails.clone();
    session.subscribe(move |state| {
        sink.lock()
            .unwrap()
            .push(state.user.as_ref().map(|user| user.email.clone()));
    });

    session.init();
    session.login("a@b.com", "pw").await.unwrap();
    session.logout();

    assert_eq!(
        emails.lock().unwrap().as_slice(),
        &[None, Some("a@b.com".to_string()), None]
    );
}
