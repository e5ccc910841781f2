//! The `studentpages generate` command.

use std::path::PathBuf;

use anyhow::Result;

use studentpages_core::summary::{GeneratedStudent, GenerationSummary};
use studentpages_render::{generate_site, GenerationReporter, MANIFEST_FILE};

use crate::SourceArgs;

/// Console progress reporter.
struct ConsoleReporter;

impl GenerationReporter for ConsoleReporter {
    fn on_student_generated(&self, student: &GeneratedStudent) {
        println!("Generated pages for student {}", student.niat_id);
    }

    fn on_student_skipped(&self, student_id: &str, reason: &str) {
        eprintln!("  Skipped {student_id:?}: {reason}");
    }

    fn on_complete(&self, summary: &GenerationSummary) {
        eprintln!(
            "\nComplete: {} students, {} files in {} ({:.1}s)",
            summary.students.len(),
            summary.file_count(),
            summary.output_dir.display(),
            summary.duration_ms as f64 / 1000.0
        );
        if !summary.skipped.is_empty() {
            eprintln!("{} student(s) skipped", summary.skipped.len());
        }
    }
}

pub async fn execute(
    source_args: SourceArgs,
    output: Option<PathBuf>,
    manifest: bool,
) -> Result<()> {
    let config = super::resolve_config(&source_args)?;
    let output = output.unwrap_or_else(|| config.output_dir.clone());
    let source = super::http_source(&config)?;

    let summary = generate_site(&source, &output, &ConsoleReporter).await?;

    if manifest {
        let path = output.join(MANIFEST_FILE);
        summary.save_json(&path)?;
        eprintln!("Manifest: {}", path.display());
    }

    Ok(())
}
