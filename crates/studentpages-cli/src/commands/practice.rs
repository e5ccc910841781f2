//! The `studentpages practice` command.

use anyhow::Result;
use comfy_table::{Cell, Table};

use studentpages_core::practice::QuestionBuckets;
use studentpages_core::traits::DataSource;

use crate::SourceArgs;

pub async fn execute(user_id: String, source_args: SourceArgs) -> Result<()> {
    let config = super::resolve_config(&source_args)?;
    let source = super::http_source(&config)?;

    let questions = source.fetch_recommendations().await?;
    let user_id = user_id.trim();
    let buckets = QuestionBuckets::for_user(&questions, user_id);

    if buckets.total() == 0 {
        println!("No questions found for user {user_id}.");
        return Ok(());
    }

    for (difficulty, questions) in buckets.non_empty() {
        println!("\n{difficulty} Questions ({})", questions.len());
        let mut table = Table::new();
        table.set_header(vec!["Question", "Link"]);
        for q in questions {
            table.add_row(vec![
                Cell::new(q.question_short_text.as_deref().unwrap_or("")),
                Cell::new(q.link.as_deref().unwrap_or("")),
            ]);
        }
        println!("{table}");
    }

    Ok(())
}
