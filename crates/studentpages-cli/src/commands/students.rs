//! The `studentpages students` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use studentpages_core::index::StudentIndex;
use studentpages_core::traits::DataSource;
use studentpages_render::site::{practice_file_name, report_file_name};

use crate::SourceArgs;

const SKIPPED: &str = "(skipped: invalid id)";

pub async fn execute(source_args: SourceArgs) -> Result<()> {
    let config = super::resolve_config(&source_args)?;
    let source = super::http_source(&config)?;

    let records = source.fetch_proficiency().await?;
    let index = StudentIndex::build(&records);

    let mut table = Table::new();
    table.set_header(vec!["Student ID", "Name", "User ID", "Report", "Practice"]);
    for (student_id, entry) in index.iter() {
        table.add_row(vec![
            Cell::new(student_id),
            Cell::new(&entry.student_name),
            Cell::new(&entry.user_id),
            Cell::new(report_file_name(student_id).unwrap_or_else(|_| SKIPPED.into())),
            Cell::new(practice_file_name(student_id).unwrap_or_else(|_| SKIPPED.into())),
        ]);
    }

    println!("{table}");
    println!("{} students from {} records", index.len(), records.len());

    Ok(())
}
