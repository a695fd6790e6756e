//! Transport behavior against a mock GraphQL backend: auth header
//! attachment, centralized 429 interception, and verbatim backend errors.

use std::fs;
use std::path::PathBuf;

use rust_decimal_macros::dec;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use warden::notify::RATE_LIMIT_MESSAGE;
use warden::{
    Network, Notifier, SessionStore, Severity, UserInfo, WardenClient, WardenConfig, WardenError,
};

fn session_store(name: &str) -> SessionStore {
    let dir = std::env::temp_dir().join(format!("warden-client-{}-{name}", std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    SessionStore::open(PathBuf::from(dir).join("session.json"))
}

fn client_for(server: &MockServer, session: SessionStore, notifier: Notifier) -> WardenClient {
    let config = WardenConfig::new(server.uri()).unwrap();
    WardenClient::new(&config, session, notifier)
}

fn me_response() -> serde_json::Value {
    json!({
        "data": {
            "me": {
                "id": "1",
                "email": "sam@example.com",
                "wallets": [{
                    "id": "w1",
                    "address": "0x1234567890abcdef",
                    "network": "TESTNET",
                    "createdAt": "2024-05-01T12:00:00Z"
                }]
            }
        }
    })
}

#[tokio::test]
async fn attaches_bearer_token_when_authenticated() {
    let server = MockServer::start().await;
    let session = session_store("bearer");
    session
        .login(
            "tok-123",
            UserInfo {
                id: "1".into(),
                email: "sam@example.com".into(),
            },
        )
        .unwrap();

    Mock::given(method("POST"))
        .and(path("/"))
        .and(header("authorization", "Bearer tok-123"))
        .and(body_partial_json(json!({ "operationName": "Me" })))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session, Notifier::new());
    let me = client.me().await.unwrap();
    assert_eq!(me.email, "sam@example.com");
    assert_eq!(me.wallets.len(), 1);
    assert_eq!(me.wallets[0].network, Network::Testnet);
}

#[tokio::test]
async fn sends_empty_auth_header_without_session() {
    let server = MockServer::start().await;

    // The header is present but empty, never omitted.
    Mock::given(method("POST"))
        .and(header("authorization", ""))
        .respond_with(ResponseTemplate::new(200).set_body_json(me_response()))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_store("no-session"), Notifier::new());
    client.me().await.unwrap();
}

#[tokio::test]
async fn http_429_raises_rate_limit_notification() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429))
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let client = client_for(&server, session_store("rate-limit"), notifier.clone());

    let err = client
        .balance("0xabc", Network::Testnet)
        .await
        .unwrap_err();
    assert!(err.is_rate_limited());

    let active = notifier.active();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].severity, Severity::Warning);
    assert_eq!(active[0].message, RATE_LIMIT_MESSAGE);
}

#[tokio::test]
async fn graphql_errors_propagate_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": null,
            "errors": [{ "message": "Insufficient funds" }]
        })))
        .mount(&server)
        .await;

    let notifier = Notifier::new();
    let client = client_for(&server, session_store("backend-error"), notifier.clone());

    let err = client
        .send_funds("0xabc", "5.0", Network::Testnet, "0x123")
        .await
        .unwrap_err();
    match err {
        WardenError::Backend(message) => assert_eq!(message, "Insufficient funds"),
        other => panic!("expected Backend error, got {other:?}"),
    }
    // Business errors are the caller's to surface, not the interceptor's.
    assert!(notifier.active().is_empty());
}

#[tokio::test]
async fn send_funds_uppercases_network_and_decodes_receipt() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "operationName": "SendFunds",
            "variables": {
                "to": "0xabc",
                "amount": "0.01",
                "network": "TESTNET",
                "walletAddress": "0x123"
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "sendFunds": {
                    "transactionHash": "0xdead",
                    "from": "0x123",
                    "to": "0xabc",
                    "amount": "10000000000000000",
                    "amountInEther": "0.01",
                    "status": "PENDING",
                    "network": "TESTNET"
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, session_store("send"), Notifier::new());
    let receipt = client
        .send_funds("0xabc", "0.01", Network::Testnet, "0x123")
        .await
        .unwrap();

    assert_eq!(receipt.transaction_hash, "0xdead");
    assert_eq!(receipt.amount_in_ether, dec!(0.01));
    assert_eq!(receipt.status, "PENDING");
}

#[tokio::test]
async fn non_success_status_maps_to_http_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("backend down"))
        .mount(&server)
        .await;

    let client = client_for(&server, session_store("http-error"), Notifier::new());
    let err = client.me().await.unwrap_err();
    match err {
        WardenError::Http { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "backend down");
        }
        other => panic!("expected Http error, got {other:?}"),
    }
}
