//! Section renderers: one LaTeX fragment per résumé section.
//!
//! Renderers are pure. A renderer returns `None` when the data it needs is missing;
//! `Section::render` turns that into a skip reason, and the orchestrator records
//! the section as skipped instead of failing the run.

pub mod certifications;
pub mod details;
pub mod education;
pub mod experience;
pub mod header;
pub mod projects;
pub mod rules;
pub mod skills;
pub mod summary;

pub use rules::RenderRules;

use crate::models::{Category, ResumeData, TimelineEntry};

/// Every fragment resume-sync produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Header,
    Summary,
    Experience,
    Education,
    Certifications,
    Projects,
    Skills,
}

impl Section {
    /// Render order used by a sync run.
    pub const ALL: [Section; 7] = [
        Section::Header,
        Section::Summary,
        Section::Experience,
        Section::Education,
        Section::Certifications,
        Section::Projects,
        Section::Skills,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Summary => "summary",
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Certifications => "certifications",
            Section::Projects => "projects",
            Section::Skills => "skills",
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.tex", self.name())
    }

    /// Renders this section. `Err` carries the reason it was skipped.
    pub fn render(&self, data: &ResumeData, rules: &RenderRules) -> Result<String, &'static str> {
        match self {
            Section::Header => {
                header::render_header(data).ok_or("config is missing name or email")
            }
            Section::Summary => summary::render_summary(data).ok_or("config has no summary"),
            Section::Experience => Ok(experience::render_experience(data, rules)),
            Section::Education => Ok(education::render_education(data)),
            Section::Certifications => Ok(certifications::render_certifications(data)),
            Section::Projects => Ok(projects::render_projects(data)),
            Section::Skills => skills::render_skills(data).ok_or("no skill categories"),
        }
    }
}

impl std::fmt::Display for Section {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.name())
    }
}

/// Timeline entries of `category`, highest `order` first.
/// The sort is stable, so entries sharing an `order` keep their document order.
pub fn sorted_entries(data: &ResumeData, category: Category) -> Vec<&TimelineEntry> {
    let mut entries = data.entries_in(category);
    entries.sort_by(|a, b| b.order.cmp(&a.order));
    entries
}

/// Last whitespace-separated token of a free-text date ("Jul 2024" -> "2024").
pub fn last_token(date: &str) -> &str {
    date.split_whitespace().next_back().unwrap_or("")
}
