//! Single plaintext admin credential stored in its own file.
//!
//! The credential is neither hashed nor salted, and `/readPass` hands it to any caller
//! unless `EXPOSE_PASSWORD=false`. Use `/verifyPassword` from new clients.

use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::services::write_atomically;

pub struct PasswordStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl PasswordStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn exists(&self) -> Result<bool, StoreError> {
        fs::try_exists(&self.path).await.map_err(|e| self.io_error(e))
    }

    /// File contents exactly as stored.
    pub async fn read(&self) -> Result<String, StoreError> {
        fs::read_to_string(&self.path)
            .await
            .map_err(|e| self.io_error(e))
    }

    /// Overwrite the credential with the trimmed `new_password`.
    pub async fn write(&self, new_password: &str) -> Result<(), StoreError> {
        let trimmed = new_password.trim();
        if trimmed.is_empty() {
            return Err(StoreError::validation("New password is required"));
        }

        let _guard = self.write_lock.lock().await;
        write_atomically(&self.path, trimmed.as_bytes())
            .await
            .map_err(|e| self.io_error(e))?;
        tracing::info!(path = %self.path.display(), "Admin password updated");
        Ok(())
    }

    /// Exact comparison against the stored value.
    pub async fn verify(&self, candidate: &str) -> Result<bool, StoreError> {
        Ok(candidate == self.read().await?)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
