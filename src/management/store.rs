use std::{io::ErrorKind, path::PathBuf};

use crate::{error::Result, types::Credential};

/// The single persisted credential slot.
#[derive(Debug, Clone)]
pub struct CredentialStore {
    path: PathBuf,
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialStore {
    pub fn new() -> Self {
        Self {
            path: Self::token_path(),
        }
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the stored credential, or `None` if the slot is empty or unreadable.
    pub async fn load(&self) -> Option<Credential> {
        let content = async_fs::read_to_string(&self.path).await.ok()?;
        let value = content.trim();
        if value.is_empty() {
            return None;
        }
        Some(Credential::new(value))
    }

    pub async fn persist(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        async_fs::write(&self.path, credential.as_str()).await?;
        Ok(())
    }

    /// Empties the slot. Clearing an already empty slot succeeds.
    pub async fn clear(&self) -> Result<()> {
        match async_fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    fn token_path() -> PathBuf {
        let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("toptracks/cache/token");
        path
    }
}
