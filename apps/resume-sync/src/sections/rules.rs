//! Rendering heuristics that depend on the résumé's content rather than its shape.
//!
//! Defaults reproduce the layout the published résumé was tuned for. A JSON rules
//! file can override any subset of the fields.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use regex::Regex;
use serde::Deserialize;

const DEFAULT_ENTRY_SPACING: &str = "3cm";
const DEFAULT_ROLE_DATE_PATTERN: &str = "Present|20";

/// Raw, deserializable form of the rules. Missing fields take the defaults.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderRulesFile {
    pub default_entry_spacing: String,
    pub company_spacing: HashMap<String, String>,
    pub location_suffixes: Vec<String>,
    pub role_date_pattern: String,
}

impl Default for RenderRulesFile {
    fn default() -> Self {
        Self {
            default_entry_spacing: DEFAULT_ENTRY_SPACING.to_string(),
            // Accenture's entry carries two location sub-sections and needs more room.
            company_spacing: HashMap::from([("Accenture".to_string(), "4cm".to_string())]),
            location_suffixes: vec![" - Singapore".to_string(), " - Yokohama, Japan".to_string()],
            role_date_pattern: DEFAULT_ROLE_DATE_PATTERN.to_string(),
        }
    }
}

/// Compiled rules handed to the renderers.
#[derive(Debug, Clone)]
pub struct RenderRules {
    default_entry_spacing: String,
    company_spacing: HashMap<String, String>,
    location_suffixes: Vec<String>,
    role_date: Regex,
}

impl RenderRules {
    pub fn from_file_rules(rules: RenderRulesFile) -> Result<Self> {
        let role_date = Regex::new(&rules.role_date_pattern).with_context(|| {
            format!(
                "role_date_pattern '{}' is not a valid regex",
                rules.role_date_pattern
            )
        })?;
        Ok(Self {
            default_entry_spacing: rules.default_entry_spacing,
            company_spacing: rules.company_spacing,
            location_suffixes: rules.location_suffixes,
            role_date,
        })
    }

    /// Loads rules from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let body = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file {}", path.display()))?;
        let rules: RenderRulesFile = serde_json::from_str(&body)
            .with_context(|| format!("Rules file {} is not valid JSON", path.display()))?;
        Self::from_file_rules(rules)
    }

    /// Vertical space reserved before an experience entry for `company`.
    pub fn spacing_for(&self, company: &str) -> &str {
        self.company_spacing
            .get(company)
            .map(String::as_str)
            .unwrap_or(&self.default_entry_spacing)
    }

    /// True when `line` ends with one of the sub-section location suffixes.
    pub fn is_location_header(&self, line: &str) -> bool {
        self.location_suffixes
            .iter()
            .any(|suffix| line.ends_with(suffix.as_str()))
    }

    /// Year sniff used to tell role headers from ordinary parenthesised text.
    pub fn mentions_role_date(&self, line: &str) -> bool {
        self.role_date.is_match(line)
    }
}

impl Default for RenderRules {
    fn default() -> Self {
        Self::from_file_rules(RenderRulesFile::default()).expect("default render rules compile")
    }
}
