use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const VENDOR_NAME: &str = "veldt";
pub const APP_NAME: &str = "takt";

/// Resolves file locations inside the platform application data directory.
///
/// - **Windows**: `%LOCALAPPDATA%\veldt\takt`
/// - **macOS**: `~/Library/Application Support/veldt/takt`
/// - **Linux**: `~/.local/share/veldt/takt`
#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(VENDOR_NAME).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Returns a subdirectory of the data directory, creating it on first use.
    /// Daily logs live in `logs/`, captured frames in `screenshots/`.
    pub fn get_dir(&self, dir_name: &str) -> Result<PathBuf> {
        let dir = self.base_path.join(dir_name);
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        Ok(dir)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
