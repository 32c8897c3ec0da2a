//! Resume sync — orchestrates one full run.
//!
//! Flow: load → validate → convert → for each section: render → write.
//!
//! Load and validation failures abort the run before anything is written.
//! After that every section is independent: a skipped or failed section is
//! recorded and the run moves on to the next one.

use std::path::PathBuf;

use thiserror::Error;
use tracing::{error, info, warn};

use crate::errors::SyncError;
use crate::models::ResumeData;
use crate::sections::{RenderRules, Section};
use crate::source::validation::validate;
use crate::source::DataSource;
use crate::writer::SectionWriter;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_LOAD_FAILURE: i32 = 1;
pub const EXIT_VALIDATION_FAILURE: i32 = 2;
pub const EXIT_WRITE_FAILURE: i32 = 3;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// A failure that stops the run before any section is rendered.
#[derive(Debug, Error)]
pub enum SyncFailure {
    #[error("Failed to load data from {source_label}: {error}")]
    Load {
        source_label: String,
        #[source]
        error: SyncError,
    },

    #[error("Data validation failed: {0}")]
    Validation(#[source] SyncError),
}

impl SyncFailure {
    pub fn exit_code(&self) -> i32 {
        match self {
            SyncFailure::Load { .. } => EXIT_LOAD_FAILURE,
            SyncFailure::Validation(_) => EXIT_VALIDATION_FAILURE,
        }
    }
}

#[derive(Debug)]
pub enum SectionOutcome {
    Written { path: PathBuf, bytes: usize },
    /// Required data was absent; nothing was written.
    Skipped { reason: &'static str },
    Failed { error: SyncError },
}

#[derive(Debug)]
pub struct SectionReport {
    pub section: Section,
    pub outcome: SectionOutcome,
}

/// Result of a run that got past validation.
#[derive(Debug)]
pub struct SyncReport {
    pub source: String,
    pub sections: Vec<SectionReport>,
}

impl SyncReport {
    pub fn written(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections
            .iter()
            .filter(|r| matches!(r.outcome, SectionOutcome::Written { .. }))
            .map(|r| r.section)
    }

    pub fn skipped(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections
            .iter()
            .filter(|r| matches!(r.outcome, SectionOutcome::Skipped { .. }))
            .map(|r| r.section)
    }

    pub fn failed(&self) -> impl Iterator<Item = Section> + '_ {
        self.sections
            .iter()
            .filter(|r| matches!(r.outcome, SectionOutcome::Failed { .. }))
            .map(|r| r.section)
    }

    /// Skipped sections do not count as failures.
    pub fn exit_code(&self) -> i32 {
        if self.failed().next().is_some() {
            EXIT_WRITE_FAILURE
        } else {
            EXIT_SUCCESS
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Sync pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs a full sync from `source` into `writer`'s directory.
///
/// Steps:
/// 1. source.load() → JSON tree
/// 2. validate() → required top-level keys present
/// 3. ResumeData::from_value() → typed model
/// 4. Section::ALL in order: render, then write immediately
pub async fn run_sync(
    source: &dyn DataSource,
    writer: &SectionWriter,
    rules: &RenderRules,
) -> Result<SyncReport, SyncFailure> {
    let source_label = source.describe();
    info!("Starting resume sync from {source_label}...");

    // Step 1: Load
    let tree = source.load().await.map_err(|error| SyncFailure::Load {
        source_label: source_label.clone(),
        error,
    })?;
    info!("Data loaded successfully");

    // Step 2: Validate
    validate(&tree).map_err(SyncFailure::Validation)?;

    // Step 3: Typed model. A present key with the wrong shape fails here.
    let data = ResumeData::from_value(tree).map_err(SyncFailure::Validation)?;

    // Step 4: Render and write each section
    let mut sections = Vec::with_capacity(Section::ALL.len());
    for section in Section::ALL {
        let outcome = sync_section(section, &data, writer, rules).await;
        sections.push(SectionReport { section, outcome });
    }

    let report = SyncReport {
        source: source_label,
        sections,
    };

    let failed = report.failed().count();
    if failed == 0 {
        info!("Resume sync completed!");
    } else {
        error!("Resume sync finished with {failed} failed section(s)");
    }

    Ok(report)
}

async fn sync_section(
    section: Section,
    data: &ResumeData,
    writer: &SectionWriter,
    rules: &RenderRules,
) -> SectionOutcome {
    let text = match section.render(data, rules) {
        Ok(text) => text,
        Err(reason) => {
            warn!("Skipping {section}: {reason}");
            return SectionOutcome::Skipped { reason };
        }
    };

    match writer.write_section(section.name(), &text).await {
        Ok(path) => SectionOutcome::Written {
            path,
            bytes: text.len(),
        },
        Err(error) => {
            error!("Error writing {}: {error}", section.file_name());
            SectionOutcome::Failed { error }
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
