use std::path::PathBuf;

use tracing::info;

use crate::errors::SyncError;

/// Writes rendered fragments into the LaTeX project's sections directory.
///
/// The directory must already exist; it belongs to the document build.
#[derive(Debug, Clone)]
pub struct SectionWriter {
    output_dir: PathBuf,
}

impl SectionWriter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// Path of the fragment for section `name`.
    pub fn path_for(&self, name: &str) -> PathBuf {
        self.output_dir.join(format!("{name}.tex"))
    }

    /// Overwrites `<output_dir>/<name>.tex` with `text`, returning the path written.
    pub async fn write_section(&self, name: &str, text: &str) -> Result<PathBuf, SyncError> {
        let path = self.path_for(name);
        tokio::fs::write(&path, text.as_bytes())
            .await
            .map_err(|e| SyncError::io(&path, e))?;
        info!("Updated {name}.tex");
        Ok(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_section_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SectionWriter::new(dir.path());

        writer.write_section("summary", "first version, much longer").await.unwrap();
        let path = writer.write_section("summary", "second").await.unwrap();

        assert_eq!(path, dir.path().join("summary.tex"));
        assert_eq!(std::fs::read_to_string(path).unwrap(), "second");
    }

    #[tokio::test]
    async fn test_write_section_keeps_utf8() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SectionWriter::new(dir.path());

        let path = writer.write_section("projects", "Résumé • naïve").await.unwrap();
        assert_eq!(std::fs::read_to_string(path).unwrap(), "Résumé • naïve");
    }

    #[tokio::test]
    async fn test_missing_directory_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SectionWriter::new(dir.path().join("does-not-exist"));

        let err = writer.write_section("header", "x").await.unwrap_err();
        match err {
            SyncError::Io { path, .. } => assert!(path.ends_with("header.tex")),
            other => panic!("expected Io, got {other:?}"),
        }
    }
}
