//! File-backed `openg_auth` credential record.
//!
//! The record is a JSON object with at least a `token` field, the same
//! shape the web console keeps in local storage. Unknown fields are
//! preserved on rewrite. A missing file means "not logged in"; an unreadable
//! or malformed file is an error instead of a crash.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::error::ApiError;
use crate::security::AuthToken;

/// Storage key of the credential record.
pub const AUTH_RECORD_KEY: &str = "openg_auth";
const APP_DIR_NAME: &str = "opengovernance";

/// Source of credential material with an explicit lifecycle.
#[async_trait]
pub trait CredentialProvider: Send + Sync + 'static {
    /// Called once at startup.
    async fn load(&self) -> Result<Option<AuthToken>, ApiError>;

    /// Called after the server rejected the current credential.
    async fn refresh(&self) -> Result<Option<AuthToken>, ApiError>;

    /// Called on logout.
    async fn clear(&self) -> Result<(), ApiError>;
}

#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/opengovernance/openg_auth.json`.
    pub fn default_location() -> Result<Self, ApiError> {
        dirs::config_dir()
            .map(|dir| {
                Self::new(
                    dir.join(APP_DIR_NAME)
                        .join(format!("{AUTH_RECORD_KEY}.json")),
                )
            })
            .ok_or_else(|| {
                ApiError::Credential("config directory not found; cannot locate token store".into())
            })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the token. `Ok(None)` when the file is absent, empty or
    /// carries an empty token.
    pub fn read(&self) -> Result<Option<AuthToken>, ApiError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => {
                return Err(ApiError::Credential(format!(
                    "read {}: {e}",
                    self.path.display()
                )))
            }
        };
        if raw.trim().is_empty() {
            return Ok(None);
        }
        let record: Value = serde_json::from_str(&raw).map_err(|e| {
            ApiError::Credential(format!("malformed {AUTH_RECORD_KEY} record: {e}"))
        })?;
        match record.get("token") {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(token)) if token.is_empty() => Ok(None),
            Some(Value::String(token)) => Ok(Some(AuthToken::new(token.clone()))),
            Some(_) => Err(ApiError::Credential(format!(
                "{AUTH_RECORD_KEY} record has a non-string token"
            ))),
        }
    }

    /// Writes `token`, keeping other fields of an existing record.
    pub fn write(&self, token: &AuthToken) -> Result<(), ApiError> {
        let mut record = match fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str::<Value>(&raw).ok())
        {
            Some(Value::Object(map)) => map,
            _ => Map::new(),
        };
        record.insert("token".to_string(), Value::String(token.token.clone()));

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ApiError::Credential(format!("mkdir {}: {e}", parent.display())))?;
        }
        let serialized = serde_json::to_string_pretty(&Value::Object(record))
            .map_err(|e| ApiError::SerializationError(e.to_string()))?;
        fs::write(&self.path, serialized)
            .map_err(|e| ApiError::Credential(format!("write {}: {e}", self.path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&self.path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                ApiError::Credential(format!("chmod {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }

    pub fn delete(&self) -> Result<(), ApiError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ApiError::Credential(format!(
                "delete {}: {e}",
                self.path.display()
            ))),
        }
    }

    /// Runs a file operation on the blocking pool.
    async fn blocking<T, F>(&self, op: F) -> Result<T, ApiError>
    where
        F: FnOnce(&TokenStore) -> Result<T, ApiError> + Send + 'static,
        T: Send + 'static,
    {
        let store = self.clone();
        tokio::task::spawn_blocking(move || op(&store))
            .await
            .map_err(|e| ApiError::Credential(format!("token store task failed: {e}")))?
    }
}

#[async_trait]
impl CredentialProvider for TokenStore {
    async fn load(&self) -> Result<Option<AuthToken>, ApiError> {
        self.blocking(TokenStore::read).await
    }

    /// Another process (the login flow) may have rewritten the record, so a
    /// refresh is a re-read.
    async fn refresh(&self) -> Result<Option<AuthToken>, ApiError> {
        self.blocking(TokenStore::read).await
    }

    async fn clear(&self) -> Result<(), ApiError> {
        self.blocking(TokenStore::delete).await
    }
}

/// A fixed token, for scripts and tests.
#[derive(Debug, Clone)]
pub struct StaticCredentials(Option<AuthToken>);

impl StaticCredentials {
    pub fn new(token: impl Into<String>) -> Self {
        Self(Some(AuthToken::new(token)))
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn load(&self) -> Result<Option<AuthToken>, ApiError> {
        Ok(self.0.clone())
    }

    async fn refresh(&self) -> Result<Option<AuthToken>, ApiError> {
        Ok(self.0.clone())
    }

    async fn clear(&self) -> Result<(), ApiError> {
        Ok(())
    }
}
