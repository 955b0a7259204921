use anyhow::{Context, Result};
use brief_md::{NarrationLabels, Styles};
use serde::Deserialize;
use std::path::Path;

/// File looked up in the current directory when `--config` is not given.
pub const DEFAULT_CONFIG_FILE: &str = "brief.json";

/// Top-level brief.json schema.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BriefConfig {
    #[serde(default)]
    pub styles: Styles,

    #[serde(default)]
    pub narration: NarrationLabels,

    #[serde(default = "default_page_title")]
    pub page_title: String,
}

fn default_page_title() -> String {
    "Document analysis".to_string()
}

impl Default for BriefConfig {
    fn default() -> Self {
        Self {
            styles: Styles::default(),
            narration: NarrationLabels::default(),
            page_title: default_page_title(),
        }
    }
}

/// Load config from `explicit`, or from brief.json if present.
///
/// A missing brief.json means defaults; a missing explicit path is an error.
pub fn load_config(explicit: Option<&Path>) -> Result<BriefConfig> {
    let config_path = match explicit {
        Some(path) => path.to_path_buf(),
        None => {
            let path = Path::new(DEFAULT_CONFIG_FILE).to_path_buf();
            if !path.exists() {
                tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
                return Ok(BriefConfig::default());
            }
            path
        }
    };

    tracing::debug!(path = %config_path.display(), "loading config");
    let raw = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {}", config_path.display()))?;
    parse_config(&raw).with_context(|| format!("Failed to parse {}", config_path.display()))
}

fn parse_config(raw: &str) -> Result<BriefConfig> {
    Ok(serde_json::from_str(raw)?)
}
