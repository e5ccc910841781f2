//! HTTP data source.
//!
//! One GET per dataset, with no timeout and no retry. A failure surfaces as a
//! `FetchError` and ends the run.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::instrument;

use studentpages_core::error::FetchError;
use studentpages_core::model::{ProficiencyRecord, QuestionRecord};
use studentpages_core::traits::DataSource;

use crate::config::StudentPagesConfig;

/// Fetches both datasets from fixed URLs.
pub struct HttpSource {
    proficiency_url: String,
    recommendation_url: String,
    client: reqwest::Client,
}

impl HttpSource {
    pub fn new(
        proficiency_url: &str,
        recommendation_url: &str,
        user_agent: &str,
    ) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;

        Ok(Self {
            proficiency_url: proficiency_url.to_string(),
            recommendation_url: recommendation_url.to_string(),
            client,
        })
    }

    pub fn from_config(config: &StudentPagesConfig) -> anyhow::Result<Self> {
        Self::new(
            &config.proficiency_url,
            &config.recommendation_url,
            &config.user_agent,
        )
    }

    /// GET `url` and decode the body as JSON.
    #[instrument(skip(self))]
    pub async fn fetch_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Http {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Network {
            url: url.to_string(),
            message: e.to_string(),
        })?;
        tracing::debug!(bytes = body.len(), "fetched dataset");

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl DataSource for HttpSource {
    fn name(&self) -> &str {
        "http"
    }

    fn proficiency_url(&self) -> &str {
        &self.proficiency_url
    }

    fn recommendation_url(&self) -> &str {
        &self.recommendation_url
    }

    async fn fetch_proficiency(&self) -> anyhow::Result<Vec<ProficiencyRecord>> {
        Ok(self.fetch_json(&self.proficiency_url).await?)
    }

    async fn fetch_recommendations(&self) -> anyhow::Result<Vec<QuestionRecord>> {
        Ok(self.fetch_json(&self.recommendation_url).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn source(server: &MockServer) -> HttpSource {
        HttpSource::new(
            &format!("{}/proficiency.json", server.uri()),
            &format!("{}/recommendation.json", server.uri()),
            "studentpages-test",
        )
        .unwrap()
    }

    #[tokio::test]
    async fn fetches_proficiency_records() {
        let server = MockServer::start().await;

        let body = serde_json::json!([
            {
                "niat_id": "S1",
                "student_name": "Alice",
                "user_id": "U1",
                "sub_topic": "LOOPS_FOR",
                "difficulty": "EASY",
                "percentage_of_questions_solved": 0.7
            },
            {"niat_id": "S2"}
        ]);

        Mock::given(method("GET"))
            .and(path("/proficiency.json"))
            .and(header("user-agent", "studentpages-test"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .expect(1)
            .mount(&server)
            .await;

        let records = source(&server).fetch_proficiency().await.unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].student_id(), Some("S1"));
        assert!(records[0].percentage_of_questions_solved.passes());
        assert!(records[1].user_id.is_none());
    }

    #[tokio::test]
    async fn fetches_recommendations() {
        let server = MockServer::start().await;

        let body = serde_json::json!([
            {"user_id": "U1", "difficulty": "HARD", "LINK": "https://q.test/1", "question_short_text": "Q1"}
        ]);

        Mock::given(method("GET"))
            .and(path("/recommendation.json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&body))
            .mount(&server)
            .await;

        let questions = source(&server).fetch_recommendations().await.unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].link.as_deref(), Some("https://q.test/1"));
    }

    #[tokio::test]
    async fn non_success_status_is_http_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/proficiency.json"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let err = source(&server).fetch_proficiency().await.unwrap_err();
        let fetch = err.downcast_ref::<FetchError>().unwrap();
        assert_eq!(fetch.status(), Some(404));
        assert!(err.to_string().contains("HTTP error 404"));
    }

    #[tokio::test]
    async fn malformed_body_is_decode_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/proficiency.json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"not\": \"an array\"}"))
            .mount(&server)
            .await;

        let err = source(&server).fetch_proficiency().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Decode { .. })
        ));
    }

    #[tokio::test]
    async fn unreachable_host_is_network_error() {
        let source = HttpSource::new(
            "http://127.0.0.1:1/proficiency.json",
            "http://127.0.0.1:1/recommendation.json",
            "studentpages-test",
        )
        .unwrap();

        let err = source.fetch_proficiency().await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FetchError>(),
            Some(FetchError::Network { .. })
        ));
    }
}
