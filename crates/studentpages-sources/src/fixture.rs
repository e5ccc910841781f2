//! In-memory data source for tests and offline runs.

use std::sync::atomic::{AtomicU32, Ordering};

use anyhow::Context;
use async_trait::async_trait;

use studentpages_core::model::{ProficiencyRecord, QuestionRecord};
use studentpages_core::traits::DataSource;

const FIXTURE_PROFICIENCY_URL: &str = "https://fixtures.invalid/student_proficiency_data.json";
const FIXTURE_RECOMMENDATION_URL: &str = "https://fixtures.invalid/recommendation.json";

/// Serves fixed datasets and counts how often each was requested.
pub struct StaticSource {
    proficiency: Vec<ProficiencyRecord>,
    recommendations: Vec<QuestionRecord>,
    proficiency_url: String,
    recommendation_url: String,
    proficiency_calls: AtomicU32,
    recommendation_calls: AtomicU32,
}

impl StaticSource {
    pub fn new(proficiency: Vec<ProficiencyRecord>, recommendations: Vec<QuestionRecord>) -> Self {
        Self {
            proficiency,
            recommendations,
            proficiency_url: FIXTURE_PROFICIENCY_URL.to_string(),
            recommendation_url: FIXTURE_RECOMMENDATION_URL.to_string(),
            proficiency_calls: AtomicU32::new(0),
            recommendation_calls: AtomicU32::new(0),
        }
    }

    /// Build from raw JSON arrays, as they would arrive over the wire.
    pub fn from_json(
        proficiency: serde_json::Value,
        recommendations: serde_json::Value,
    ) -> anyhow::Result<Self> {
        let proficiency =
            serde_json::from_value(proficiency).context("invalid proficiency fixture")?;
        let recommendations =
            serde_json::from_value(recommendations).context("invalid recommendation fixture")?;
        Ok(Self::new(proficiency, recommendations))
    }

    /// Override the URLs reported to the page templates.
    pub fn with_urls(mut self, proficiency_url: &str, recommendation_url: &str) -> Self {
        self.proficiency_url = proficiency_url.to_string();
        self.recommendation_url = recommendation_url.to_string();
        self
    }

    pub fn proficiency_calls(&self) -> u32 {
        self.proficiency_calls.load(Ordering::Relaxed)
    }

    pub fn recommendation_calls(&self) -> u32 {
        self.recommendation_calls.load(Ordering::Relaxed)
    }
}

#[async_trait]
impl DataSource for StaticSource {
    fn name(&self) -> &str {
        "static"
    }

    fn proficiency_url(&self) -> &str {
        &self.proficiency_url
    }

    fn recommendation_url(&self) -> &str {
        &self.recommendation_url
    }

    async fn fetch_proficiency(&self) -> anyhow::Result<Vec<ProficiencyRecord>> {
        self.proficiency_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.proficiency.clone())
    }

    async fn fetch_recommendations(&self) -> anyhow::Result<Vec<QuestionRecord>> {
        self.recommendation_calls.fetch_add(1, Ordering::Relaxed);
        Ok(self.recommendations.clone())
    }
}
