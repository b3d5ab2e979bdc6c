use std::fs;
use std::path::PathBuf;
#[cfg(unix)]
use std::os::unix::fs::PermissionsExt;

use crate::error::Result;

/// Manages paths for Aktara configuration and local data
#[derive(Debug, Clone)]
pub struct Paths {
    /// Root data directory (~/.aktara)
    pub root: PathBuf,
    /// Configuration file path (~/.aktara/config.toml)
    pub config_file: PathBuf,
    /// Key-value storage file (~/.aktara/storage.json)
    pub storage_file: PathBuf,
    /// Log directory (~/.aktara/logs)
    pub logs_dir: PathBuf,
}

impl Paths {
    /// Create a new Paths instance using the user's home directory
    pub fn new() -> Result<Self> {
        let home = std::env::var("HOME")?;
        Ok(Self::with_root(PathBuf::from(home).join(".aktara")))
    }

    /// Create a Paths instance rooted at an explicit directory
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.toml"),
            storage_file: root.join("storage.json"),
            logs_dir: root.join("logs"),
            root,
        }
    }

    /// Ensure the data directory exists with proper permissions
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.root)?;

        // 700 = owner only
        #[cfg(unix)]
        {
            let perms = fs::Permissions::from_mode(0o700);
            fs::set_permissions(&self.root, perms)?;
        }

        Ok(())
    }

    /// Check if the config file exists
    pub fn config_exists(&self) -> bool {
        self.config_file.exists()
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| Self::with_root(PathBuf::from(".aktara")))
    }
}
