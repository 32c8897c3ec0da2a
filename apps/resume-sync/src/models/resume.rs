use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::errors::SyncError;

/// Top-level résumé document as published by the portfolio site.
/// Every field defaults so that a partially filled document still renders.
/// A field that is present but `null` counts as missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeData {
    #[serde(deserialize_with = "null_as_default")]
    pub config: ProfileConfig,
    #[serde(deserialize_with = "null_as_default")]
    pub social: Vec<SocialLink>,
    #[serde(deserialize_with = "null_as_default")]
    pub timeline: Vec<TimelineEntry>,
    #[serde(deserialize_with = "null_as_default")]
    pub showcase: Vec<ShowcaseProject>,
    /// Category name -> technologies. Document order is preserved.
    #[serde(deserialize_with = "null_as_default")]
    pub skills: Map<String, Value>,
}

impl ResumeData {
    /// Converts an already-validated JSON tree into the typed model.
    pub fn from_value(tree: Value) -> Result<Self, SyncError> {
        Ok(serde_json::from_value(tree)?)
    }

    /// Timeline entries of one category, in document order.
    pub fn entries_in(&self, category: Category) -> Vec<&TimelineEntry> {
        self.timeline
            .iter()
            .filter(|e| e.category == category.as_str())
            .collect()
    }

    /// Skill categories with their technology names, in document order.
    /// Non-string members of a category are ignored.
    pub fn skill_categories(&self) -> Vec<(&str, Vec<&str>)> {
        self.skills
            .iter()
            .map(|(name, techs)| {
                let techs = match techs {
                    Value::Array(items) => items.iter().filter_map(Value::as_str).collect(),
                    Value::String(single) => vec![single.as_str()],
                    _ => Vec::new(),
                };
                (name.as_str(), techs)
            })
            .collect()
    }
}

/// `null` -> `T::default()`, for fields the document may leave unset.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub real_name: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub email: String,
    #[serde(deserialize_with = "null_as_default")]
    pub website: String,
    #[serde(deserialize_with = "null_as_default")]
    pub summary: String,
}

impl ProfileConfig {
    /// `real_name` wins over `name` when both are set.
    pub fn display_name(&self) -> &str {
        match self.real_name.as_deref() {
            Some(real) if !real.is_empty() => real,
            _ => &self.name,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialLink {
    #[serde(deserialize_with = "null_as_default")]
    pub platform: String,
    #[serde(deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Education,
    Certification,
    Work,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Education => "education",
            Category::Certification => "certification",
            Category::Work => "work",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TimelineEntry {
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub start_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub end_date: String,
    #[serde(deserialize_with = "null_as_default")]
    pub order: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub modal_content: TimelineDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TimelineDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub location: String,
    #[serde(deserialize_with = "null_as_default")]
    pub details: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ShowcaseProject {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub technologies: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub modal_content: ShowcaseDetails,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ShowcaseDetails {
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_value_fills_missing_fields_with_defaults() {
        let tree = serde_json::json!({
            "config": { "name": "Jane" },
            "timeline": [{ "category": "work", "company": "Acme" }],
            "showcase": [],
            "skills": {}
        });
        let data = ResumeData::from_value(tree).unwrap();
        assert_eq!(data.config.email, "");
        assert_eq!(data.timeline[0].order, 0);
        assert!(data.timeline[0].modal_content.details.is_empty());
        assert!(data.social.is_empty());
    }

    #[test]
    fn test_from_value_reads_camel_case_fields() {
        let tree = serde_json::json!({
            "timeline": [{
                "category": "education",
                "startDate": "Aug 2019",
                "endDate": "May 2023",
                "order": 4,
                "modalContent": { "location": "Singapore", "details": ["a"] }
            }]
        });
        let data = ResumeData::from_value(tree).unwrap();
        let entry = &data.timeline[0];
        assert_eq!(entry.start_date, "Aug 2019");
        assert_eq!(entry.end_date, "May 2023");
        assert_eq!(entry.order, 4);
        assert_eq!(entry.modal_content.location, "Singapore");
    }

    #[test]
    fn test_from_value_treats_null_as_missing() {
        let tree = serde_json::json!({
            "config": { "name": "Jane", "email": null, "website": null, "real_name": null },
            "social": null,
            "timeline": [{
                "category": "work",
                "company": null,
                "startDate": "Jan 2020",
                "endDate": null,
                "order": null,
                "modalContent": { "location": null, "details": null }
            }],
            "showcase": [{ "title": "Tool", "technologies": null, "modalContent": null }],
            "skills": null
        });
        let data = ResumeData::from_value(tree).unwrap();
        assert_eq!(data.config.email, "");
        assert_eq!(data.config.display_name(), "Jane");
        assert!(data.social.is_empty());
        assert!(data.skills.is_empty());

        let entry = &data.timeline[0];
        assert_eq!(entry.company, "");
        assert_eq!(entry.end_date, "");
        assert_eq!(entry.order, 0);
        assert!(entry.modal_content.details.is_empty());

        let project = &data.showcase[0];
        assert!(project.technologies.is_empty());
        assert_eq!(project.modal_content.description, "");
    }

    #[test]
    fn test_from_value_rejects_wrong_shape() {
        let tree = serde_json::json!({ "timeline": "not a list" });
        assert!(matches!(
            ResumeData::from_value(tree),
            Err(SyncError::Parse(_))
        ));
    }

    #[test]
    fn test_display_name_prefers_real_name() {
        let mut config = ProfileConfig {
            name: "handle".to_string(),
            real_name: Some("Real Person".to_string()),
            ..Default::default()
        };
        assert_eq!(config.display_name(), "Real Person");
        config.real_name = Some(String::new());
        assert_eq!(config.display_name(), "handle");
        config.real_name = None;
        assert_eq!(config.display_name(), "handle");
    }

    #[test]
    fn test_skill_categories_keep_document_order() {
        let tree = serde_json::json!({
            "skills": {
                "zeta": ["b", "a"],
                "alpha": [],
                "middle": ["x"]
            }
        });
        let data = ResumeData::from_value(tree).unwrap();
        let names: Vec<&str> = data.skill_categories().iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["zeta", "alpha", "middle"]);
    }

    #[test]
    fn test_entries_in_filters_by_category() {
        let tree = serde_json::json!({
            "timeline": [
                { "category": "work", "company": "A" },
                { "category": "education", "company": "B" },
                { "category": "work", "company": "C" }
            ]
        });
        let data = ResumeData::from_value(tree).unwrap();
        let work: Vec<&str> = data
            .entries_in(Category::Work)
            .iter()
            .map(|e| e.company.as_str())
            .collect();
        assert_eq!(work, vec!["A", "C"]);
    }
}
