//! Feedback submission client
//!
//! Posts a completed survey as JSON to the feedback endpoint.

use async_trait::async_trait;
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

use super::status_error;
use crate::config::settings::FeedbackSettings;
use crate::error::{VerziError, VerziResult};
use crate::models::feedback::FeedbackSubmission;
use crate::services::FeedbackSink;

/// Client posting surveys to the feedback endpoint
#[derive(Debug, Clone)]
pub struct FeedbackClient {
    endpoint: Url,
    http: reqwest::Client,
}

impl FeedbackClient {
    pub fn new(endpoint: &str) -> VerziResult<Self> {
        let endpoint = Url::parse(endpoint)
            .map_err(|err| VerziError::Config(format!("invalid feedback endpoint: {err}")))?;
        Ok(Self {
            endpoint,
            http: reqwest::Client::new(),
        })
    }

    pub fn from_settings(settings: &FeedbackSettings) -> VerziResult<Self> {
        let mut client = Self::new(&settings.endpoint)?;
        client.http = reqwest::Client::builder()
            .timeout(Duration::from_secs(settings.timeout_secs))
            .build()?;
        Ok(client)
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl FeedbackSink for FeedbackClient {
    async fn submit(&self, submission: &FeedbackSubmission<'_>) -> VerziResult<()> {
        debug!(endpoint = %self.endpoint, "posting feedback");

        let res = self
            .http
            .post(self.endpoint.clone())
            .json(submission)
            .send()
            .await?;

        let status = res.status();
        if status.is_success() {
            return Ok(());
        }

        let body = res.text().await.unwrap_or_default();
        Err(VerziError::Feedback(status_error(status, body.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackSurvey;

    #[test]
    fn test_invalid_endpoint() {
        assert!(matches!(
            FeedbackClient::new("::"),
            Err(VerziError::Config(_))
        ));
    }

    #[test]
    fn test_from_settings_uses_endpoint() {
        let client = FeedbackClient::from_settings(&FeedbackSettings::default()).unwrap();
        assert_eq!(
            client.endpoint().as_str(),
            "https://api.example.com/submit-feedback"
        );
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_http_error() {
        let client = FeedbackClient::new("http://127.0.0.1:9/submit-feedback").unwrap();
        let survey = FeedbackSurvey::new();
        let err = client.submit(&survey.submission()).await.unwrap_err();
        assert!(matches!(err, VerziError::Http(_)));
    }
}
