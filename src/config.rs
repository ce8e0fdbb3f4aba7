use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Whole config file. One `[mail]` table, one `[[accounts]]` table per
/// tracked account. A config problem is a setup defect, so unlike pivot
/// reads it is fatal: `load` propagates instead of degrading to ERROR rows.
#[derive(Debug, Deserialize)]
pub(crate) struct Config {
    /// Static HTML fragment prepended to every report.
    #[serde(default = "default_header")]
    pub header: PathBuf,
    pub mail: MailConfig,
    #[serde(default)]
    pub accounts: Vec<AccountConfig>,
}

fn default_header() -> PathBuf {
    PathBuf::from("head.html")
}

/// SMTP submission settings. The password sits in the config file in clear;
/// the file is expected to live on the scheduler host with its permissions
/// locked down accordingly.
#[derive(Debug, Deserialize)]
pub(crate) struct MailConfig {
    pub sender: String,
    pub recipients: Vec<String>,
    pub host: String,
    pub port: u16,
    pub login: String,
    pub password: String,
}

/// One tracked account: where its pivot files live and which currencies it
/// trades. Evaluation follows `currencies` in the order written here.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct AccountConfig {
    pub pivot_dir: PathBuf,
    pub number: String,
    pub label: String,
    pub currencies: Vec<String>,
}

pub(crate) fn load(path: &Path) -> Result<Config, anyhow::Error> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("cannot read config file {}", path.display()))?;
    toml::from_str(&text).with_context(|| format!("invalid config file {}", path.display()))
}
