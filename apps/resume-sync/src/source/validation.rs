use serde_json::Value;

use crate::errors::SyncError;

/// Top-level keys every résumé document must carry.
pub const REQUIRED_SECTIONS: &[&str] = &["config", "timeline", "showcase", "skills"];

/// Checks that the loaded tree has every required top-level key.
///
/// Presence only: shapes and types are not inspected here. A `null`, an empty
/// object or an empty array is `EmptyData`; anything else missing keys reports
/// all of them at once.
pub fn validate(tree: &Value) -> Result<(), SyncError> {
    let is_empty = match tree {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    };
    if is_empty {
        return Err(SyncError::EmptyData);
    }

    let missing: Vec<String> = REQUIRED_SECTIONS
        .iter()
        .filter(|&&key| tree.get(key).is_none())
        .map(|&key| key.to_string())
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(SyncError::MissingSections(missing))
    }
}
