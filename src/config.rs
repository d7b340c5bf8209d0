// src/config.rs

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::Path};
use tracing::debug;
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://docs.google.com/spreadsheets/d";
pub const DEFAULT_SHEET_ID: &str = "12bZ5U1hQvvAqY6Sg14dzcbaW9jXwSf_yygnfPXo339Y";
pub const DEFAULT_TAB_ID: &str = "1653490940";

/// Where the company directory lives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SheetConfig {
    pub base_url: String,
    pub sheet_id: String,
    pub tab_id: String,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            sheet_id: DEFAULT_SHEET_ID.to_string(),
            tab_id: DEFAULT_TAB_ID.to_string(),
        }
    }
}

impl SheetConfig {
    /// Load from a YAML file. Keys left out keep their defaults.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .with_context(|| format!("reading config file {}", path.display()))?;
        let cfg: SheetConfig = serde_yaml::from_str(&text)
            .with_context(|| format!("parsing config file {}", path.display()))?;
        debug!(sheet_id = %cfg.sheet_id, tab_id = %cfg.tab_id, "loaded sheet config");
        Ok(cfg)
    }

    /// `{base}/{sheet_id}/gviz/tq?tqx=out:json&gid={tab_id}`
    pub fn query_url(&self) -> Result<Url> {
        let raw = format!(
            "{}/{}/gviz/tq?tqx=out:json&gid={}",
            self.base_url.trim_end_matches('/'),
            self.sheet_id,
            self.tab_id
        );
        Url::parse(&raw).with_context(|| format!("parsing sheet URL {}", raw))
    }
}
