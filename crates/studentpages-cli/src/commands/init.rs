//! The `studentpages init` command.

use std::path::Path;

use anyhow::Result;

use studentpages_sources::config::{
    CONFIG_FILE_NAME, DEFAULT_PROFICIENCY_URL, DEFAULT_RECOMMENDATION_URL,
};

pub fn execute() -> Result<()> {
    if Path::new(CONFIG_FILE_NAME).exists() {
        println!("{CONFIG_FILE_NAME} already exists, skipping.");
        return Ok(());
    }

    std::fs::write(CONFIG_FILE_NAME, sample_config())?;
    println!("Created {CONFIG_FILE_NAME}");

    println!("\nNext steps:");
    println!("  1. Point the URLs in {CONFIG_FILE_NAME} at your datasets");
    println!("  2. Run: studentpages students");
    println!("  3. Run: studentpages generate");

    Ok(())
}

fn sample_config() -> String {
    format!(
        r#"# studentpages configuration

# Fetched by the generator and again by every report page.
proficiency_url = "{DEFAULT_PROFICIENCY_URL}"

# Fetched by every practice page.
recommendation_url = "{DEFAULT_RECOMMENDATION_URL}"

output_dir = "output"
"#
    )
}
