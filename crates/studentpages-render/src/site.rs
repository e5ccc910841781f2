//! Site generator: fetch, index, render, write.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use thiserror::Error;

use studentpages_core::index::{StudentEntry, StudentIndex};
use studentpages_core::summary::{GeneratedStudent, GenerationSummary};
use studentpages_core::traits::DataSource;

use crate::practice_page::{render_practice_page, PracticePage};
use crate::report_page::{render_report_page, ReportPage};

/// File name of the optional run manifest.
pub const MANIFEST_FILE: &str = "manifest.json";

#[derive(Debug, Error)]
pub enum PageError {
    /// The id would escape the output directory or is not a valid name.
    #[error("student id {0:?} cannot be used in a file name")]
    InvalidFileName(String),
}

/// Where pages go and which datasets they point at.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub output_dir: PathBuf,
    pub proficiency_url: String,
    pub recommendation_url: String,
}

impl SiteConfig {
    /// Take the dataset URLs from the source the index was built from.
    pub fn for_source(output_dir: &Path, source: &dyn DataSource) -> Self {
        Self {
            output_dir: output_dir.to_path_buf(),
            proficiency_url: source.proficiency_url().to_string(),
            recommendation_url: source.recommendation_url().to_string(),
        }
    }
}

/// Progress callbacks for a generation run.
pub trait GenerationReporter: Send + Sync {
    fn on_student_generated(&self, student: &GeneratedStudent);
    fn on_student_skipped(&self, student_id: &str, reason: &str);
    fn on_complete(&self, summary: &GenerationSummary);
}

/// No-op reporter.
pub struct NoopReporter;

impl GenerationReporter for NoopReporter {
    fn on_student_generated(&self, _: &GeneratedStudent) {}
    fn on_student_skipped(&self, _: &str, _: &str) {}
    fn on_complete(&self, _: &GenerationSummary) {}
}

fn checked_id(student_id: &str) -> Result<&str, PageError> {
    let invalid = student_id.is_empty()
        || student_id == "."
        || student_id == ".."
        || student_id.contains(['/', '\\', '\0']);
    if invalid {
        Err(PageError::InvalidFileName(student_id.to_string()))
    } else {
        Ok(student_id)
    }
}

/// `report-<id>.html`
pub fn report_file_name(student_id: &str) -> Result<String, PageError> {
    Ok(format!("report-{}.html", checked_id(student_id)?))
}

/// `practice_questions-<id>.html`
pub fn practice_file_name(student_id: &str) -> Result<String, PageError> {
    Ok(format!("practice_questions-{}.html", checked_id(student_id)?))
}

/// Fetch the proficiency dataset once and write both pages for every student.
pub async fn generate_site(
    source: &dyn DataSource,
    output_dir: &Path,
    reporter: &dyn GenerationReporter,
) -> Result<GenerationSummary> {
    let start = Instant::now();

    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("failed to create output directory {}", output_dir.display()))?;

    tracing::info!(
        source = source.name(),
        url = source.proficiency_url(),
        "fetching proficiency data"
    );
    let records = source.fetch_proficiency().await?;
    let index = StudentIndex::build(&records);
    tracing::info!(records = records.len(), students = index.len(), "built student index");

    let config = SiteConfig::for_source(output_dir, source);
    let mut summary = write_pages(&index, &config, reporter).await?;
    summary.duration_ms = start.elapsed().as_millis() as u64;

    reporter.on_complete(&summary);
    Ok(summary)
}

/// Write both pages for every student in `index`, in index order.
pub async fn write_pages(
    index: &StudentIndex,
    config: &SiteConfig,
    reporter: &dyn GenerationReporter,
) -> Result<GenerationSummary> {
    let mut summary = GenerationSummary::new(&config.output_dir);

    for (student_id, entry) in index.iter() {
        match write_student(student_id, entry, config).await {
            Ok(student) => {
                tracing::info!(student = student_id, "generated pages");
                reporter.on_student_generated(&student);
                summary.students.push(student);
            }
            Err(err) => match err.downcast_ref::<PageError>() {
                Some(page_err) => {
                    tracing::warn!(student = student_id, "{page_err}, skipping");
                    reporter.on_student_skipped(student_id, &page_err.to_string());
                    summary.skipped.push(student_id.to_string());
                }
                None => return Err(err),
            },
        }
    }

    Ok(summary)
}

async fn write_student(
    student_id: &str,
    entry: &StudentEntry,
    config: &SiteConfig,
) -> Result<GeneratedStudent> {
    let report_file = report_file_name(student_id)?;
    let practice_file = practice_file_name(student_id)?;

    let report_html = render_report_page(&ReportPage {
        student_id,
        proficiency_url: &config.proficiency_url,
        practice_file: &practice_file,
    });
    let practice_html = render_practice_page(&PracticePage {
        student_id,
        user_id: &entry.user_id,
        recommendation_url: &config.recommendation_url,
    });

    let report_path = config.output_dir.join(&report_file);
    tokio::fs::write(&report_path, report_html)
        .await
        .with_context(|| format!("failed to write {}", report_path.display()))?;
    let practice_path = config.output_dir.join(&practice_file);
    tokio::fs::write(&practice_path, practice_html)
        .await
        .with_context(|| format!("failed to write {}", practice_path.display()))?;

    Ok(GeneratedStudent {
        niat_id: student_id.to_string(),
        student_name: entry.student_name.clone(),
        user_id: entry.user_id.clone(),
        report_file,
        practice_file,
    })
}
