use std::{collections::BTreeMap, fmt, io::Error, path::PathBuf};

use crate::config;

pub const KEY_TOKEN: &str = "spotify_token";
pub const KEY_CREDENTIALS: &str = "spotify_credentials";
pub const KEY_CODE_VERIFIER: &str = "spotify_code_verifier";
pub const KEY_AUTH_STATE: &str = "spotify_auth_state";

#[derive(Debug)]
pub enum StorageError {
    IoError(Error),
    SerdeError(serde_json::Error),
}

impl From<Error> for StorageError {
    fn from(err: Error) -> Self {
        StorageError::IoError(err)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(err: serde_json::Error) -> Self {
        StorageError::SerdeError(err)
    }
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::IoError(e) => write!(f, "storage io error: {}", e),
            StorageError::SerdeError(e) => write!(f, "storage is corrupt: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

/// String key/value store persisted as one JSON object on disk.
///
/// Every operation reads the file fresh, so separate invocations (the `auth`
/// command storing a verifier and a later `login` consuming it) see each
/// other's writes. A missing file reads as an empty store.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    path: PathBuf,
}

impl LocalStorage {
    pub fn new(path: PathBuf) -> Self {
        LocalStorage { path }
    }

    /// Storage file in the application data directory.
    pub fn default_location() -> Self {
        Self::new(config::data_dir().join("storage.json"))
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    pub async fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut items = self.read_all().await?;
        Ok(items.remove(key))
    }

    pub async fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut items = self.read_all().await?;
        items.insert(key.to_string(), value.to_string());
        self.write_all(&items).await
    }

    pub async fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let mut items = self.read_all().await?;
        if items.remove(key).is_some() {
            self.write_all(&items).await?;
        }
        Ok(())
    }

    async fn read_all(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match async_fs::read_to_string(&self.path).await {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(StorageError::IoError(e)),
        }
    }

    async fn write_all(&self, items: &BTreeMap<String, String>) -> Result<(), StorageError> {
        if items.is_empty() {
            return match async_fs::remove_file(&self.path).await {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => Err(e.into()),
                _ => Ok(()),
            };
        }

        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let json = serde_json::to_string_pretty(items)?;
        async_fs::write(&self.path, json).await?;
        Ok(())
    }
}
