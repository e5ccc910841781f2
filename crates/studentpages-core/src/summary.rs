//! Summary of a generation run, with JSON persistence.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Everything one `generate` run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationSummary {
    pub generated_at: DateTime<Utc>,
    pub output_dir: PathBuf,
    pub students: Vec<GeneratedStudent>,
    /// Ids that could not be turned into file names.
    #[serde(default)]
    pub skipped: Vec<String>,
    pub duration_ms: u64,
}

/// The pair of pages written for one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedStudent {
    pub niat_id: String,
    pub student_name: String,
    pub user_id: String,
    pub report_file: String,
    pub practice_file: String,
}

impl GenerationSummary {
    pub fn new(output_dir: &Path) -> Self {
        Self {
            generated_at: Utc::now(),
            output_dir: output_dir.to_path_buf(),
            students: Vec::new(),
            skipped: Vec::new(),
            duration_ms: 0,
        }
    }

    /// Total number of files written.
    pub fn file_count(&self) -> usize {
        self.students.len() * 2
    }

    /// Save the summary as pretty JSON.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize summary")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write summary to {}", path.display()))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_writes_readable_manifest() {
        let dir = tempfile::tempdir().unwrap();
        let mut summary = GenerationSummary::new(dir.path());
        summary.students.push(GeneratedStudent {
            niat_id: "S1".into(),
            student_name: "Alice".into(),
            user_id: "U1".into(),
            report_file: "report-S1.html".into(),
            practice_file: "practice_questions-S1.html".into(),
        });
        summary.skipped.push("../evil".into());

        let path = dir.path().join("nested").join("manifest.json");
        summary.save_json(&path).unwrap();
        let loaded: GenerationSummary =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();

        assert_eq!(loaded.students.len(), 1);
        assert_eq!(loaded.file_count(), 2);
        assert_eq!(loaded.skipped, vec!["../evil".to_string()]);
        assert_eq!(loaded.generated_at, summary.generated_at);
    }

    #[test]
    fn save_into_unwritable_path_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("file");
        std::fs::write(&blocker, "").unwrap();

        let summary = GenerationSummary::new(dir.path());
        let err = summary.save_json(&blocker.join("manifest.json")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to create"));
    }
}
