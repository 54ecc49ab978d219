//! # Host Configuration
//!
//! Locations of the host state read by the adapters in [`crate::host`].
//! Every field has a default matching a stock Morse Micro driver install,
//! so a config file only needs the entries that differ:
//!
//! ```json
//! { "debugfs_root": "/mnt/debug/ieee80211" }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::HalowError;

pub const DEFAULT_COUNTRY_PARAM: &str = "/sys/module/morse/parameters/country";
pub const DEFAULT_DEBUGFS_ROOT: &str = "/sys/kernel/debug/ieee80211";
pub const DEFAULT_MORSE_CLI: &str = "morse_cli";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Driver module parameter holding the two-letter country code
    pub country_param: PathBuf,
    /// debugfs directory containing one subdirectory per phy
    pub debugfs_root: PathBuf,
    /// Name or path of the `morse_cli` executable
    pub morse_cli: String,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            country_param: PathBuf::from(DEFAULT_COUNTRY_PARAM),
            debugfs_root: PathBuf::from(DEFAULT_DEBUGFS_ROOT),
            morse_cli: DEFAULT_MORSE_CLI.to_string(),
        }
    }
}

impl HostConfig {
    /// Load a JSON config file; absent fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, HalowError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| HalowError::io(path, e))?;
        Self::from_json(&text)
    }

    pub fn from_json(text: &str) -> Result<Self, HalowError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Rate-control table for a phy, e.g. `<debugfs_root>/phy0/morse/mmrc_table`
    pub fn mmrc_table_path(&self, phyname: &str) -> PathBuf {
        self.debugfs_root
            .join(phyname)
            .join("morse")
            .join("mmrc_table")
    }
}
