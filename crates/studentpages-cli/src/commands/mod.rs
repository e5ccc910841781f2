pub mod generate;
pub mod init;
pub mod practice;
pub mod report;
pub mod students;

use anyhow::Result;

use studentpages_sources::{load_config_from, HttpSource, StudentPagesConfig};

use crate::SourceArgs;

/// Load the config file and apply command-line overrides.
fn resolve_config(args: &SourceArgs) -> Result<StudentPagesConfig> {
    let mut config = load_config_from(args.config.as_deref())?;
    if let Some(url) = &args.proficiency_url {
        config.proficiency_url = url.clone();
    }
    if let Some(url) = &args.recommendation_url {
        config.recommendation_url = url.clone();
    }
    Ok(config)
}

fn http_source(config: &StudentPagesConfig) -> Result<HttpSource> {
    HttpSource::from_config(config)
}
