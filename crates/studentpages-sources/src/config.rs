//! studentpages configuration.
//!
//! Every key has a default, so a run with no config file reads the public
//! datasets and writes to `output/`.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_PROFICIENCY_URL: &str =
    "https://manojpanchothi.github.io/proficiency_report/student_proficiency_data.json";
pub const DEFAULT_RECOMMENDATION_URL: &str =
    "https://manojpanchothi.github.io/recommendation/data.json";
pub const CONFIG_FILE_NAME: &str = "studentpages.toml";

/// Top-level studentpages configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentPagesConfig {
    /// Proficiency dataset, fetched by the generator and by every report page.
    #[serde(default = "default_proficiency_url")]
    pub proficiency_url: String,
    /// Recommendation dataset, fetched by every practice page.
    #[serde(default = "default_recommendation_url")]
    pub recommendation_url: String,
    /// Where the generated pages go.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_proficiency_url() -> String {
    DEFAULT_PROFICIENCY_URL.to_string()
}
fn default_recommendation_url() -> String {
    DEFAULT_RECOMMENDATION_URL.to_string()
}
fn default_output_dir() -> PathBuf {
    PathBuf::from("output")
}
fn default_user_agent() -> String {
    concat!("studentpages/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for StudentPagesConfig {
    fn default() -> Self {
        Self {
            proficiency_url: default_proficiency_url(),
            recommendation_url: default_recommendation_url(),
            output_dir: default_output_dir(),
            user_agent: default_user_agent(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load config from an explicit path, or search the default locations.
///
/// Search order without a path:
/// 1. `studentpages.toml` in the current directory
/// 2. `~/.config/studentpages/config.toml`
///
/// Environment variable overrides: `STUDENTPAGES_PROFICIENCY_URL`,
/// `STUDENTPAGES_RECOMMENDATION_URL`.
pub fn load_config_from(path: Option<&Path>) -> Result<StudentPagesConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from(CONFIG_FILE_NAME);
        if local.exists() {
            Some(local)
        } else {
            dirs_path()
                .map(|home| home.join("config.toml"))
                .filter(|global| global.exists())
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            let config = toml::from_str::<StudentPagesConfig>(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            config
        }
        None => StudentPagesConfig::default(),
    };

    if let Ok(url) = std::env::var("STUDENTPAGES_PROFICIENCY_URL") {
        config.proficiency_url = url;
    }
    if let Ok(url) = std::env::var("STUDENTPAGES_RECOMMENDATION_URL") {
        config.recommendation_url = url;
    }

    config.proficiency_url = resolve_env_vars(&config.proficiency_url);
    config.recommendation_url = resolve_env_vars(&config.recommendation_url);

    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("studentpages"))
}
