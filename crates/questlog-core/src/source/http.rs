//! HTTP plan source posting to the planner service.

use log::{debug, warn};
use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::PlanSource;
use crate::{
    config::BoardConfig,
    error::{FetchResultExt, QuestError, Result, ResultExt},
    intake::RawPlan,
    params::CreateQuest,
};

/// Error body returned by the planner on failure.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Plan source backed by a single JSON POST.
#[derive(Debug, Clone)]
pub struct HttpPlanSource {
    client: Client,
    endpoint: String,
}

impl HttpPlanSource {
    /// Builds a client for the configured endpoint and timeout.
    ///
    /// # Errors
    ///
    /// Returns `QuestError::Configuration` if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &BoardConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout())
            .build()
            .with_context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: config.planner_url.clone(),
        })
    }

    /// Endpoint receiving the POST.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl PlanSource for HttpPlanSource {
    async fn fetch_plan(&self, request: &CreateQuest) -> Result<RawPlan> {
        debug!("requesting plan for '{}' from {}", request.title, self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .fetch_context("Failed to reach planner")?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let message = error_message(status, &body);
            warn!("planner rejected request: {message}");
            return Err(QuestError::plan_fetch(message));
        }

        response
            .json::<RawPlan>()
            .await
            .fetch_context("Planner returned an unreadable plan")
    }
}

/// The planner's own `message` when present, otherwise a status line.
fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.is_empty())
        .unwrap_or_else(|| format!("HTTP error! status: {}", status.as_u16()))
}
