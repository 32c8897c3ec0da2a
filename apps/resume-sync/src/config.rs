use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::sections::RenderRules;
use crate::source::{SourceMode, DEFAULT_DATA_URL, DEFAULT_LOCAL_DATA};

const DEFAULT_SECTIONS_DIR: &str = "src/sections";

/// Runtime configuration loaded from environment variables (and `.env`).
/// Every value has a default; command-line flags override them in `main`.
#[derive(Debug, Clone)]
pub struct Config {
    pub source_mode: SourceMode,
    pub data_url: String,
    pub local_data_path: PathBuf,
    pub sections_dir: PathBuf,
    pub rules_file: Option<PathBuf>,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let source_mode = match lookup("RESUME_SOURCE") {
            Some(raw) => <SourceMode as clap::ValueEnum>::from_str(&raw, true)
                .map_err(|e| anyhow::anyhow!(e))
                .context("RESUME_SOURCE must be one of: auto, local, remote")?,
            None => SourceMode::default(),
        };

        Ok(Config {
            source_mode,
            data_url: lookup("RESUME_DATA_URL").unwrap_or_else(|| DEFAULT_DATA_URL.to_string()),
            local_data_path: lookup("RESUME_LOCAL_DATA")
                .unwrap_or_else(|| DEFAULT_LOCAL_DATA.to_string())
                .into(),
            sections_dir: lookup("RESUME_SECTIONS_DIR")
                .unwrap_or_else(|| DEFAULT_SECTIONS_DIR.to_string())
                .into(),
            rules_file: lookup("RESUME_RULES_FILE").map(PathBuf::from),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }

    /// Render rules from `rules_file`, or the built-in defaults.
    pub fn render_rules(&self) -> Result<RenderRules> {
        match &self.rules_file {
            Some(path) => RenderRules::load(path),
            None => Ok(RenderRules::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.source_mode, SourceMode::Auto);
        assert_eq!(config.data_url, DEFAULT_DATA_URL);
        assert_eq!(config.local_data_path, PathBuf::from("data2.json"));
        assert_eq!(config.sections_dir, PathBuf::from("src/sections"));
        assert!(config.rules_file.is_none());
        assert_eq!(config.rust_log, "info");
    }

    #[test]
    fn test_overrides_from_environment() {
        let config = Config::from_lookup(lookup_from(&[
            ("RESUME_SOURCE", "Remote"),
            ("RESUME_DATA_URL", "https://example.org/resume.json"),
            ("RESUME_SECTIONS_DIR", "tex/parts"),
            ("RESUME_RULES_FILE", "rules.json"),
        ]))
        .unwrap();
        assert_eq!(config.source_mode, SourceMode::Remote);
        assert_eq!(config.data_url, "https://example.org/resume.json");
        assert_eq!(config.sections_dir, PathBuf::from("tex/parts"));
        assert_eq!(config.rules_file, Some(PathBuf::from("rules.json")));
    }

    #[test]
    fn test_invalid_source_mode_is_rejected() {
        let err = Config::from_lookup(lookup_from(&[("RESUME_SOURCE", "ftp")])).unwrap_err();
        assert!(err.to_string().contains("RESUME_SOURCE"));
    }

    #[test]
    fn test_render_rules_default_without_file() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        let rules = config.render_rules().unwrap();
        assert_eq!(rules.spacing_for("Accenture"), "4cm");
    }
}
