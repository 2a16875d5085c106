mod credentials;
mod session;
mod storage;

pub use credentials::CredentialsManager;
pub use credentials::is_expired;
pub use session::Session;
pub use storage::KEY_AUTH_STATE;
pub use storage::KEY_CODE_VERIFIER;
pub use storage::KEY_CREDENTIALS;
pub use storage::KEY_TOKEN;
pub use storage::LocalStorage;
pub use storage::StorageError;
