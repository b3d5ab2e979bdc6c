//! Common utilities shared across CLI commands
//!
//! The [`Context`] bundles what every command needs: loaded configuration,
//! data paths, output format and the notification preference.

use std::io::{self, Write};
use std::sync::Arc;

use is_terminal::IsTerminal;

use crate::catalog::{CatalogClient, LocalDataset, StorefrontLinks};
use crate::cli::OutputFormat;
use crate::config::{Config, Paths};
use crate::error::{AktaraError, Result};
use crate::notify::{self, Toast};
use crate::search::SearchService;
use crate::storage::FileStore;

/// Everything a command needs to run
pub struct Context {
    pub config: Config,
    pub paths: Paths,
    pub format: OutputFormat,
    /// Mirror toasts as desktop notifications
    pub notify: bool,
}

impl Context {
    /// The local key-value store under the data directory
    pub fn store(&self) -> FileStore {
        FileStore::new(&self.paths.storage_file)
    }

    /// Page links resolved against the configured storefront
    pub fn links(&self) -> Result<StorefrontLinks> {
        StorefrontLinks::new(&self.config.api.base_url)
    }

    /// A search service over the configured remote endpoint, falling back
    /// to the built-in sample catalog
    pub fn search_service(&self) -> Result<Arc<SearchService>> {
        let remote = CatalogClient::new(&self.config)?;
        Ok(Arc::new(SearchService::new(
            Arc::new(remote),
            LocalDataset::new(),
            self.config.search.loading_delay(),
        )))
    }

    /// Whether progress indicators should be drawn on stderr
    pub fn show_progress(&self) -> bool {
        io::stderr().is_terminal()
    }

    /// Hand a toast to the desktop when notifications are enabled.
    ///
    /// The terminal copy is always part of the command output; this only
    /// adds the desktop mirror.
    pub fn announce(&self, toast: &Toast) {
        if self.notify {
            notify::desktop(toast);
        }
    }
}

/// Read one trimmed line from stdin after printing a prompt.
///
/// # Errors
/// Returns an error if stdin is closed before a line is read.
pub fn prompt_line(label: &str) -> Result<String> {
    print!("{label}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(AktaraError::InvalidArgument(format!(
            "no input for {}",
            label.to_lowercase()
        )));
    }
    Ok(line.trim().to_string())
}

/// Use the given value or prompt for it
pub fn value_or_prompt(value: Option<&str>, label: &str) -> Result<String> {
    match value {
        Some(value) => Ok(value.trim().to_string()),
        None => prompt_line(label),
    }
}

/// Read a password, hidden unless `visible` is set.
///
/// When stdin is not a terminal the password is read as a plain line, so
/// it can be piped in scripts and tests.
pub fn prompt_password(label: &str, visible: bool) -> Result<String> {
    if !visible && io::stdin().is_terminal() {
        return Ok(rpassword::prompt_password(format!("{label}: "))?);
    }

    if visible {
        print!("{label}: ");
        io::stdout().flush()?;
    }
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
