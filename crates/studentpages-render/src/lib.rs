//! studentpages-render — Static page generation.
//!
//! Renders the per-student report and practice pages and writes them to an
//! output directory.

pub mod escape;
pub mod practice_page;
pub mod report_page;
pub mod site;

pub use site::{generate_site, GenerationReporter, NoopReporter, SiteConfig, MANIFEST_FILE};
