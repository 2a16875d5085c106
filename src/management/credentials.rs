use chrono::Utc;

use crate::{
    management::storage::{
        KEY_AUTH_STATE, KEY_CODE_VERIFIER, KEY_CREDENTIALS, KEY_TOKEN, LocalStorage, StorageError,
    },
    spotify,
    types::Credentials,
    warning,
};

/// Seconds before expiry at which a token is refreshed.
const EXPIRY_MARGIN_SECS: u64 = 240;

pub struct CredentialsManager {
    storage: LocalStorage,
    credentials: Option<Credentials>,
}

impl CredentialsManager {
    pub fn new(storage: LocalStorage) -> Self {
        CredentialsManager {
            storage,
            credentials: None,
        }
    }

    pub fn storage(&self) -> &LocalStorage {
        &self.storage
    }

    /// Stores the credentials blob and the raw access token.
    pub async fn set_credentials(&mut self, credentials: Credentials) -> Result<(), StorageError> {
        let json = serde_json::to_string(&credentials)?;
        self.storage.set_item(KEY_CREDENTIALS, &json).await?;
        self.storage
            .set_item(KEY_TOKEN, &credentials.access_token)
            .await?;
        self.credentials = Some(credentials);
        Ok(())
    }

    /// Returns the cached credentials, falling back to storage.
    pub async fn get_credentials(&mut self) -> Result<Option<Credentials>, StorageError> {
        if let Some(credentials) = &self.credentials {
            return Ok(Some(credentials.clone()));
        }

        let Some(json) = self.storage.get_item(KEY_CREDENTIALS).await? else {
            return Ok(None);
        };

        let credentials: Credentials = serde_json::from_str(&json)?;
        self.credentials = Some(credentials.clone());
        Ok(Some(credentials))
    }

    /// Forgets the login together with any pending authorization.
    pub async fn clear_credentials(&mut self) -> Result<(), StorageError> {
        self.credentials = None;
        for key in [KEY_CREDENTIALS, KEY_TOKEN, KEY_CODE_VERIFIER, KEY_AUTH_STATE] {
            self.storage.remove_item(key).await?;
        }
        Ok(())
    }

    /// Returns an access token, refreshing it first when it is about to
    /// expire and a refresh token is available. A failed refresh keeps the
    /// old token; the API will answer 401 and the user is asked to log in.
    pub async fn get_valid_token(
        &mut self,
        token_url: &str,
    ) -> Result<Option<String>, StorageError> {
        let Some(credentials) = self.get_credentials().await? else {
            return Ok(None);
        };

        if !is_expired(&credentials) {
            return Ok(Some(credentials.access_token));
        }

        let Some(refresh_token) = credentials.refresh_token.as_deref() else {
            return Ok(Some(credentials.access_token));
        };

        match spotify::auth::refresh_token(token_url, &credentials.client_id, refresh_token).await {
            Ok(token) => {
                let mut refreshed = Credentials::from_token(credentials.client_id.clone(), &token);
                if refreshed.refresh_token.is_none() {
                    refreshed.refresh_token = credentials.refresh_token.clone();
                }
                let access_token = refreshed.access_token.clone();
                self.set_credentials(refreshed).await?;
                Ok(Some(access_token))
            }
            Err(e) => {
                warning!("Token refresh failed: {}", e);
                Ok(Some(credentials.access_token))
            }
        }
    }
}

pub fn is_expired(credentials: &Credentials) -> bool {
    match credentials.expires_at {
        Some(expires_at) => {
            let now = Utc::now().timestamp() as u64;
            now + EXPIRY_MARGIN_SECS >= expires_at
        }
        None => false,
    }
}
