//! The `studentpages report` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use studentpages_core::grid::ProficiencyGrid;
use studentpages_core::index::StudentIndex;
use studentpages_core::model::Difficulty;
use studentpages_core::traits::DataSource;

use crate::SourceArgs;

pub async fn execute(niat_id: String, source_args: SourceArgs) -> Result<()> {
    let config = super::resolve_config(&source_args)?;
    let source = super::http_source(&config)?;

    let records = source.fetch_proficiency().await?;
    let student_id = niat_id.trim();
    let index = StudentIndex::build(&records);

    match index.get(student_id) {
        Some(entry) => println!("Student ID: {student_id}\nName: {}", entry.student_name),
        None => {
            tracing::warn!(student = student_id, "student not found in proficiency data");
            println!("Student ID: {student_id}\nName: (not found)");
        }
    }

    let grid = ProficiencyGrid::for_student(&records, student_id);

    let mut table = Table::new();
    let mut header = vec!["Concept Name"];
    header.extend(Difficulty::ALL.iter().map(|d| d.label()));
    table.set_header(header);
    for row in grid.rows() {
        let mut cells = vec![Cell::new(row.topic)];
        cells.extend(Difficulty::ALL.iter().map(|&d| Cell::new(row.cell(d).symbol())));
        table.add_row(cells);
    }

    println!("{table}");
    println!("{} of {} cells measured", grid.measured_cells(), grid.rows().len() * 3);

    Ok(())
}
