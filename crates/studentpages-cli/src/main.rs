//! studentpages CLI — generate per-student report and practice pages.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;

const DEFAULT_LOG_FILTER: &str =
    "studentpages_cli=info,studentpages_core=info,studentpages_sources=info,studentpages_render=info";

#[derive(Parser)]
#[command(
    name = "studentpages",
    version,
    about = "Static proficiency report and practice page generator"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Where to read the datasets from.
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Proficiency dataset URL (overrides config)
    #[arg(long)]
    proficiency_url: Option<String>,

    /// Recommendation dataset URL (overrides config)
    #[arg(long)]
    recommendation_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the proficiency data and write two pages per student
    Generate {
        #[command(flatten)]
        source: SourceArgs,

        /// Output directory (default: "output")
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also write manifest.json describing the run
        #[arg(long)]
        manifest: bool,
    },

    /// List the unique students in the proficiency data
    Students {
        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show one student's proficiency grid
    Report {
        /// Student id (niat_id)
        niat_id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Show the recommended questions for one user
    Practice {
        /// User id (user_id)
        user_id: String,

        #[command(flatten)]
        source: SourceArgs,
    },

    /// Create a starter studentpages.toml
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            source,
            output,
            manifest,
        } => commands::generate::execute(source, output, manifest).await,
        Commands::Students { source } => commands::students::execute(source).await,
        Commands::Report { niat_id, source } => commands::report::execute(niat_id, source).await,
        Commands::Practice { user_id, source } => {
            commands::practice::execute(user_id, source).await
        }
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        tracing::error!("run failed: {e:#}");
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
