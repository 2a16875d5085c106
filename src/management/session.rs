use crate::{
    config,
    management::{CredentialsManager, StorageError},
    spotify::SpotifyClient,
    types::Credentials,
};

/// Login context handed to commands: who is connected and where to play.
#[derive(Debug, Clone)]
pub struct Session {
    pub credentials: Credentials,
    pub access_token: String,
    pub device_id: Option<String>,
}

impl Session {
    /// Builds the session from stored credentials. `None` means the user is
    /// not connected.
    pub async fn current(
        manager: &mut CredentialsManager,
        device_id: Option<String>,
    ) -> Result<Option<Session>, StorageError> {
        let Some(access_token) = manager
            .get_valid_token(&config::spotify_apitoken_url())
            .await? else {
            return Ok(None);
        };
        let Some(credentials) = manager.get_credentials().await? else {
            return Ok(None);
        };

        Ok(Some(Session {
            credentials,
            access_token,
            device_id: device_id.or_else(config::spotify_device_id),
        }))
    }

    pub fn client(&self) -> SpotifyClient {
        SpotifyClient::new(self.access_token.clone())
    }
}
