use std::{collections::HashMap, sync::Arc};

use axum::{Form, Json, Router, http::StatusCode, routing::post};
use moodflow::{server, spotify::auth::exchange_code_pkce, types::PkceState};
use serde_json::{Value, json};
use tokio::sync::Mutex;

async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

// Token endpoint accepting only the expected code/verifier pair
async fn token_endpoint(Form(form): Form<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    let ok = form.get("grant_type").map(String::as_str) == Some("authorization_code")
        && form.get("code").map(String::as_str) == Some("good-code")
        && form.get("code_verifier").map(String::as_str) == Some("the-verifier")
        && form.get("client_id").map(String::as_str) == Some("client-1");

    if ok {
        (
            StatusCode::OK,
            Json(json!({
                "access_token": "BQC-fresh",
                "token_type": "Bearer",
                "scope": "playlist-read-private",
                "expires_in": 3600,
                "refresh_token": "AQD-refresh"
            })),
        )
    } else {
        (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid authorization code" })),
        )
    }
}

async fn token_url() -> String {
    let base = spawn(Router::new().route("/api/token", post(token_endpoint))).await;
    format!("{}/api/token", base)
}

fn pending(token_url: String) -> Arc<Mutex<Option<PkceState>>> {
    Arc::new(Mutex::new(Some(PkceState {
        client_id: "client-1".to_string(),
        redirect_uri: "http://127.0.0.1:8888/callback".to_string(),
        token_url,
        code_verifier: "the-verifier".to_string(),
        state: "nonce".to_string(),
        token: None,
    })))
}

#[tokio::test]
async fn test_exchange_code_pkce() {
    let url = token_url().await;

    let token = exchange_code_pkce(&url, "client-1", "good-code", "the-verifier", "http://x/cb")
        .await
        .unwrap();
    assert_eq!(token.access_token, "BQC-fresh");
    assert_eq!(token.refresh_token.as_deref(), Some("AQD-refresh"));
    assert_eq!(token.expires_in, 3600);
    assert!(token.obtained_at > 0);

    let err = exchange_code_pkce(&url, "client-1", "bad-code", "the-verifier", "http://x/cb").await;
    assert!(err.is_err());
}

#[tokio::test]
async fn test_callback_exchanges_code() {
    let state = pending(token_url().await);
    let base = spawn(server::router(Arc::clone(&state))).await;

    let body = reqwest::get(format!("{}/callback?code=good-code&state=nonce", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Connected"));

    let lock = state.lock().await;
    let token = lock.as_ref().unwrap().token.as_ref().unwrap();
    assert_eq!(token.access_token, "BQC-fresh");
}

#[tokio::test]
async fn test_callback_rejects_wrong_state() {
    let state = pending(token_url().await);
    let base = spawn(server::router(Arc::clone(&state))).await;

    let body = reqwest::get(format!("{}/callback?code=good-code&state=forged", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Invalid OAuth state"));
    assert!(state.lock().await.as_ref().unwrap().token.is_none());
}

#[tokio::test]
async fn test_callback_failed_exchange_leaves_no_token() {
    let state = pending(token_url().await);
    let base = spawn(server::router(Arc::clone(&state))).await;

    let body = reqwest::get(format!("{}/callback?code=bad-code&state=nonce", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Login failed"));
    assert!(state.lock().await.as_ref().unwrap().token.is_none());
}

#[tokio::test]
async fn test_callback_without_pending_login() {
    let state: Arc<Mutex<Option<PkceState>>> = Arc::new(Mutex::new(None));
    let base = spawn(server::router(state)).await;

    let body = reqwest::get(format!("{}/callback?code=good-code&state=nonce", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("Missing PKCE code verifier"));
}

#[tokio::test]
async fn test_callback_provider_error() {
    let state = pending(token_url().await);
    let base = spawn(server::router(state)).await;

    let body = reqwest::get(format!("{}/callback?error=access_denied&state=nonce", base))
        .await
        .unwrap()
        .text()
        .await
        .unwrap();
    assert!(body.contains("rejected"));
}

#[tokio::test]
async fn test_health() {
    let state: Arc<Mutex<Option<PkceState>>> = Arc::new(Mutex::new(None));
    let base = spawn(server::router(state)).await;

    let json: Value = reqwest::get(format!("{}/health", base))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(json["status"], "ok");
    assert_eq!(json["name"], "moodflow");
}
