//! The data source seam.
//!
//! Implemented by `studentpages-sources` for real endpoints and for
//! in-memory fixtures.

use async_trait::async_trait;

use crate::model::{ProficiencyRecord, QuestionRecord};

/// Somewhere the two datasets can be read from.
#[async_trait]
pub trait DataSource: Send + Sync {
    /// Short name for logs (e.g. "http").
    fn name(&self) -> &str;

    /// Where the proficiency dataset lives. The report page fetches it again
    /// from this address in the browser.
    fn proficiency_url(&self) -> &str;

    /// Where the recommendation dataset lives, used by the practice page.
    fn recommendation_url(&self) -> &str;

    /// Fetch the full proficiency dataset.
    async fn fetch_proficiency(&self) -> anyhow::Result<Vec<ProficiencyRecord>>;

    /// Fetch the full recommendation dataset.
    async fn fetch_recommendations(&self) -> anyhow::Result<Vec<QuestionRecord>>;
}
