use std::{collections::HashMap, sync::Arc};

use axum::{Extension, extract::Query, response::Html};
use tokio::sync::Mutex;

use crate::{spotify::auth::exchange_code_pkce, types::PkceState, warning};

pub async fn callback(
    Query(params): Query<HashMap<String, String>>,
    Extension(shared_state): Extension<Arc<Mutex<Option<PkceState>>>>,
) -> Html<&'static str> {
    if let Some(error) = params.get("error") {
        warning!("Authorization was rejected: {}", error);
        return Html("<h4>Authorization was rejected.</h4>");
    }

    let Some(code) = params.get("code") else {
        return Html("<h4>Missing authorization code.</h4>");
    };

    let mut state = shared_state.lock().await;
    let Some(ref mut pkce_state) = state.as_mut() else {
        warning!("Callback received without a pending login.");
        return Html("<h4>Missing PKCE code verifier.</h4>");
    };

    if params.get("state") != Some(&pkce_state.state) {
        warning!("OAuth state mismatch, ignoring callback.");
        return Html("<h4>Invalid OAuth state.</h4>");
    }

    match exchange_code_pkce(
        &pkce_state.token_url,
        &pkce_state.client_id,
        code,
        &pkce_state.code_verifier,
        &pkce_state.redirect_uri,
    )
    .await
    {
        Ok(token) => {
            pkce_state.token = Some(token);
            Html("<h2>Connected to Spotify.</h2><p>You can close this window.</p>")
        }
        Err(e) => {
            warning!("Token exchange failed: {}", e);
            Html("<h4>Login failed.</h4>")
        }
    }
}
