use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    Res, config, info,
    management::{CredentialsManager, KEY_AUTH_STATE, KEY_CODE_VERIFIER, LocalStorage},
    server::start_api_server,
    spotify::{ApiError, check_status},
    success,
    types::{AuthFlow, AuthRequest, AuthResponse, Credentials, PkceState, Token},
    utils, warning,
};

const CALLBACK_TIMEOUT: Duration = Duration::from_secs(120);

/// Runs the interactive login.
///
/// 1. **PKCE Setup**: generates verifier, challenge and state nonce and
///    stores verifier and state locally
/// 2. **Server Start**: launches the local callback server (PKCE only)
/// 3. **Browser Launch**: opens the authorization URL, printing it when no
///    browser can be started
/// 4. **Callback Handling**: the server exchanges the returned code
/// 5. **Token Persistence**: the credentials are saved for later commands
///
/// With `wait_for_callback` unset, or for the implicit flow, the URL is only
/// shown and the user finishes with `moodflow login --redirect-url <url>`.
///
/// Failures are logged and leave the user unauthenticated. There is no
/// retry. Returns whether the user ended up connected.
pub async fn auth(
    shared_state: Arc<Mutex<Option<PkceState>>>,
    manager: &mut CredentialsManager,
    client_id: String,
    flow: AuthFlow,
    wait_for_callback: bool,
) -> Res<bool> {
    let (auth_url, code_verifier, state) =
        start_authorization(manager.storage(), &client_id, flow).await?;

    let use_server = wait_for_callback && flow == AuthFlow::Pkce;
    if use_server {
        {
            let mut lock = shared_state.lock().await;
            *lock = Some(PkceState {
                client_id: client_id.clone(),
                redirect_uri: config::spotify_redirect_uri(),
                token_url: config::spotify_apitoken_url(),
                code_verifier,
                state,
                token: None,
            });
        }

        let server_state = Arc::clone(&shared_state);
        tokio::spawn(async move {
            if let Err(e) = start_api_server(server_state).await {
                warning!("Callback server stopped: {}", e);
            }
        });
    }

    if webbrowser::open(&auth_url).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    } else {
        info!("Opened the Spotify authorization page in your browser.");
    }

    if !use_server {
        info!(
            "After authorizing, copy the address you were redirected to and run:\n    moodflow login --redirect-url '<url>'"
        );
        return Ok(false);
    }

    match wait_for_token(shared_state).await {
        Some(token) => {
            manager
                .set_credentials(Credentials::from_token(client_id, &token))
                .await?;
            clear_pending(manager.storage()).await?;
            success!("Connected to Spotify.");
            Ok(true)
        }
        None => {
            warning!("Authentication failed or timed out.");
            Ok(false)
        }
    }
}

/// Generates PKCE material, stores the verifier and state nonce, and
/// returns the authorization URL together with both values.
pub async fn start_authorization(
    storage: &LocalStorage,
    client_id: &str,
    flow: AuthFlow,
) -> Res<(String, String, String)> {
    let code_verifier = utils::generate_code_verifier();
    let state = utils::generate_state();

    let request = AuthRequest {
        auth_url: config::spotify_apiauth_url(),
        client_id: client_id.to_string(),
        redirect_uri: config::spotify_redirect_uri(),
        scope: config::spotify_scope(),
        state: state.clone(),
        flow,
        code_challenge: match flow {
            AuthFlow::Pkce => Some(utils::generate_code_challenge(&code_verifier)),
            AuthFlow::Implicit => None,
        },
    };
    let auth_url = utils::build_authorize_url(&request)?;

    if flow == AuthFlow::Pkce {
        storage.set_item(KEY_CODE_VERIFIER, &code_verifier).await?;
    }
    storage.set_item(KEY_AUTH_STATE, &state).await?;

    Ok((auth_url, code_verifier, state))
}

/// Finishes a login from the URL the provider redirected to.
///
/// A code is exchanged with the stored PKCE verifier; an implicit-flow
/// token is stored as is. A missing verifier is an error, nothing is
/// retried.
pub async fn complete_from_redirect(
    manager: &mut CredentialsManager,
    client_id: &str,
    redirect_url: &str,
) -> Res<Credentials> {
    let storage = manager.storage().clone();
    let expected_state = storage.get_item(KEY_AUTH_STATE).await?;

    let credentials = match utils::parse_redirect(redirect_url, expected_state.as_deref())? {
        AuthResponse::Code(code) => {
            let Some(verifier) = storage.get_item(KEY_CODE_VERIFIER).await? else {
                return Err("No PKCE code verifier stored, run `moodflow auth` again.".into());
            };
            let token = exchange_code_pkce(
                &config::spotify_apitoken_url(),
                client_id,
                &code,
                &verifier,
                &config::spotify_redirect_uri(),
            )
            .await?;
            Credentials::from_token(client_id.to_string(), &token)
        }
        AuthResponse::Token {
            access_token,
            expires_in,
        } => Credentials {
            client_id: client_id.to_string(),
            access_token,
            refresh_token: None,
            expires_at: expires_in.map(|secs| Utc::now().timestamp() as u64 + secs),
        },
    };

    manager.set_credentials(credentials.clone()).await?;
    clear_pending(&storage).await?;
    Ok(credentials)
}

async fn clear_pending(storage: &LocalStorage) -> Res<()> {
    storage.remove_item(KEY_CODE_VERIFIER).await?;
    storage.remove_item(KEY_AUTH_STATE).await?;
    Ok(())
}

async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceState>>>) -> Option<Token> {
    use std::time::Instant;

    let start = Instant::now();

    while start.elapsed() < CALLBACK_TIMEOUT {
        let lock = shared_state.lock().await;
        if let Some(pkce_state) = lock.as_ref() {
            if let Some(token) = &pkce_state.token {
                return Some(token.clone());
            }
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

pub async fn exchange_code_pkce(
    token_url: &str,
    client_id: &str,
    code: &str,
    verifier: &str,
    redirect_uri: &str,
) -> Result<Token, ApiError> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "authorization_code"),
            ("client_id", client_id),
            ("code", code),
            ("code_verifier", verifier),
            ("redirect_uri", redirect_uri),
        ])
        .send()
        .await?;

    read_token(res).await
}

pub async fn refresh_token(
    token_url: &str,
    client_id: &str,
    refresh_token: &str,
) -> Result<Token, ApiError> {
    let client = Client::new();
    let res = client
        .post(token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
        ])
        .send()
        .await?;

    read_token(res).await
}

async fn read_token(res: reqwest::Response) -> Result<Token, ApiError> {
    let mut token: Token = check_status(res).await?.json().await?;
    token.obtained_at = Utc::now().timestamp() as u64;
    Ok(token)
}
