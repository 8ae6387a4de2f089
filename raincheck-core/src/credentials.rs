use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;
use std::{
    fs, io,
    path::{Path, PathBuf},
};
use tracing::{debug, info};

/// Directory under the user's home that holds the key file.
pub const KEY_DIR_NAME: &str = "weatherCLI";
pub const KEY_FILE_NAME: &str = "apikey";

/// One-line API key persisted on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKeyStore {
    path: PathBuf,
}

impl ApiKeyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at `<home>/weatherCLI/apikey`.
    pub fn default_location() -> Result<Self> {
        let dirs = BaseDirs::new().ok_or_else(|| anyhow!("failed to get user's home directory"))?;

        Ok(Self::new(dirs.home_dir().join(KEY_DIR_NAME).join(KEY_FILE_NAME)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the first line of the key file.
    ///
    /// A missing file and an empty first line both mean "no key yet".
    pub fn read(&self) -> Result<Option<String>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "API key file does not exist");
                return Ok(None);
            }
            Err(err) => {
                return Err(err).with_context(|| {
                    format!("error reading API key: {}", self.path.display())
                });
            }
        };

        let key = contents.lines().next().unwrap_or_default().trim();
        if key.is_empty() { Ok(None) } else { Ok(Some(key.to_string())) }
    }

    /// Replace the stored key, creating the key directory if needed.
    pub fn write(&self, key: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("failed to create API key directory: {}", parent.display())
            })?;
        }

        fs::write(&self.path, key).with_context(|| {
            format!("error writing key to apikey file: {}", self.path.display())
        })?;

        info!(path = %self.path.display(), "stored API key");
        Ok(())
    }

    /// Return the stored key, or ask `prompt` for one and persist it.
    pub fn resolve<F>(&self, prompt: F) -> Result<String>
    where
        F: FnOnce(&Path) -> Result<String>,
    {
        if let Some(key) = self.read()? {
            return Ok(key);
        }

        self.replace(prompt)
    }

    /// Ask `prompt` for a new key and overwrite whatever is stored.
    pub fn replace<F>(&self, prompt: F) -> Result<String>
    where
        F: FnOnce(&Path) -> Result<String>,
    {
        let key = prompt(&self.path)?.trim().to_string();
        if key.is_empty() {
            return Err(anyhow!("API key must not be empty"));
        }

        self.write(&key)?;
        Ok(key)
    }
}
