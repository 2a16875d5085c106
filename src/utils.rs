use base64::{Engine, engine::general_purpose::URL_SAFE_NO_PAD};
use rand::{Rng, distr::Alphanumeric};
use reqwest::Url;
use sha2::{Digest, Sha256};

use crate::types::{AuthFlow, AuthRequest, AuthResponse};

fn random_alphanumeric(len: usize) -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(len)
        .map(char::from)
        .collect()
}

pub fn generate_code_verifier() -> String {
    random_alphanumeric(128)
}

pub fn generate_code_challenge(verifier: &str) -> String {
    let hash = Sha256::digest(verifier.as_bytes());
    URL_SAFE_NO_PAD.encode(hash)
}

/// Random nonce echoed back by the provider on the redirect.
pub fn generate_state() -> String {
    random_alphanumeric(16)
}

/// Builds the provider authorization URL for the given request.
///
/// PKCE requests carry `code_challenge` and `code_challenge_method=S256`;
/// implicit requests ask for `response_type=token` instead of `code`.
pub fn build_authorize_url(request: &AuthRequest) -> Result<String, String> {
    let response_type = match request.flow {
        AuthFlow::Pkce => "code",
        AuthFlow::Implicit => "token",
    };

    let mut params: Vec<(&str, &str)> = vec![
        ("client_id", request.client_id.as_str()),
        ("response_type", response_type),
        ("redirect_uri", request.redirect_uri.as_str()),
        ("scope", request.scope.as_str()),
        ("state", request.state.as_str()),
        ("show_dialog", "true"),
    ];

    if request.flow == AuthFlow::Pkce {
        let Some(challenge) = request.code_challenge.as_deref() else {
            return Err("PKCE authorization requires a code challenge".to_string());
        };
        params.push(("code_challenge_method", "S256"));
        params.push(("code_challenge", challenge));
    }

    Url::parse_with_params(&request.auth_url, &params)
        .map(|url| url.to_string())
        .map_err(|e| format!("Invalid authorization url {}: {}", request.auth_url, e))
}

/// Extracts the authorization code or the implicit-flow token from a
/// redirect URL.
///
/// The code is read from the query string, the token from the
/// `#access_token=...` fragment. When `expected_state` is given, the
/// returned `state` parameter has to match it.
pub fn parse_redirect(redirect: &str, expected_state: Option<&str>) -> Result<AuthResponse, String> {
    let url = Url::parse(redirect.trim()).map_err(|e| format!("Invalid redirect url: {}", e))?;

    let mut params: Vec<(String, String)> = url
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if let Some(fragment) = url.fragment() {
        params.extend(fragment_pairs(fragment));
    }

    let get = |key: &str| {
        params
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.clone())
    };

    if let Some(error) = get("error") {
        return Err(format!("Authorization was rejected: {}", error));
    }

    if let Some(expected) = expected_state {
        match get("state") {
            Some(state) if state == expected => {}
            Some(_) => return Err("OAuth state does not match the stored state".to_string()),
            None => return Err("OAuth state is missing from the redirect".to_string()),
        }
    }

    if let Some(code) = get("code") {
        return Ok(AuthResponse::Code(code));
    }

    if let Some(access_token) = get("access_token") {
        let expires_in = get("expires_in").and_then(|v| v.parse::<u64>().ok());
        return Ok(AuthResponse::Token {
            access_token,
            expires_in,
        });
    }

    Err("Redirect url contains neither a code nor an access token".to_string())
}

/// Formats milliseconds as `m:ss`.
pub fn format_duration(duration_ms: u64) -> String {
    let total_secs = duration_ms / 1000;
    format!("{}:{:02}", total_secs / 60, total_secs % 60)
}

/// Formats a total length in minutes, e.g. `"45 min"`.
pub fn format_total_minutes(duration_ms: u64) -> String {
    let minutes = (duration_ms + 30_000) / 60_000;
    format!("{} min", minutes)
}

/// Decodes an `application/x-www-form-urlencoded` fragment by mounting it
/// as the query of a dummy URL.
fn fragment_pairs(fragment: &str) -> Vec<(String, String)> {
    match Url::parse(&format!("http://localhost/?{}", fragment)) {
        Ok(url) => url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect(),
        Err(_) => Vec::new(),
    }
}
