use std::path::PathBuf;

use thiserror::Error;

/// Sync-level error type.
/// Load and validation variants abort a run; `Io` is also raised per section by the writer.
#[derive(Debug, Error)]
pub enum SyncError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("No data loaded")]
    EmptyData,

    #[error("Missing required sections: {}", .0.join(", "))]
    MissingSections(Vec<String>),
}

impl SyncError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SyncError::Io {
            path: path.into(),
            source,
        }
    }

    /// Short machine-readable code used in the run summary.
    pub fn code(&self) -> &'static str {
        match self {
            SyncError::Network(_) => "NETWORK_ERROR",
            SyncError::Io { .. } => "IO_ERROR",
            SyncError::Parse(_) => "PARSE_ERROR",
            SyncError::EmptyData => "EMPTY_DATA",
            SyncError::MissingSections(_) => "MISSING_SECTIONS",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_sections_message_lists_every_name() {
        let err = SyncError::MissingSections(vec!["timeline".to_string(), "skills".to_string()]);
        assert_eq!(err.to_string(), "Missing required sections: timeline, skills");
        assert_eq!(err.code(), "MISSING_SECTIONS");
    }

    #[test]
    fn test_io_error_carries_path() {
        let err = SyncError::io(
            "out/header.tex",
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        );
        assert!(err.to_string().contains("out/header.tex"));
        assert_eq!(err.code(), "IO_ERROR");
    }
}
