//! HTTP client for communicating with the practice journal backend

use practice_core::{
    AnalyticsSummary, Error, Instrument, NewPracticeLog, PracticeDay, PracticeLog,
    PracticeTemplate, RecordId, Result, config::BackendConfig,
};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// API client for making HTTP requests to the backend
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_root: String,
    api_key: Option<String>,
    logs_limit: u32,
}

impl ApiClient {
    /// Create a new API client
    ///
    /// `base_url` is the backend root; API routes live under `{base_url}/api`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::from_config(&BackendConfig {
            base_url: base_url.into(),
            ..BackendConfig::default()
        })
    }

    /// Create an API client from backend configuration
    #[must_use]
    pub fn from_config(config: &BackendConfig) -> Self {
        Self {
            client: Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_root: config.api_root(),
            api_key: config.api_key.clone(),
            logs_limit: config.logs_limit,
        }
    }

    /// Set the API key for authentication
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// List every instrument
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_instruments(&self) -> Result<Vec<Instrument>> {
        self.get_json("instruments", "/instruments/").await
    }

    /// Get one instrument by id
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_instrument(&self, id: RecordId) -> Result<Instrument> {
        self.get_json("instrument", &format!("/instruments/{id}"))
            .await
    }

    /// List template summaries, without their days
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_templates(&self) -> Result<Vec<PracticeTemplate>> {
        self.get_json("templates", "/templates/").await
    }

    /// Get a template with its full day, block and exercise tree
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_template(&self, id: RecordId) -> Result<PracticeTemplate> {
        self.get_json("template", &format!("/templates/{id}")).await
    }

    /// Get a single day of a template
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_practice_day(
        &self,
        template_id: RecordId,
        day_number: u32,
    ) -> Result<PracticeDay> {
        self.get_json(
            "practice day",
            &format!("/templates/{template_id}/days/{day_number}"),
        )
        .await
    }

    /// List the most recent logs of a template, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn list_logs(&self, template_id: RecordId) -> Result<Vec<PracticeLog>> {
        let request = self
            .client
            .get(self.url("/logs/"))
            .query(&[("template_id", template_id.to_string())])
            .query(&[("limit", self.logs_limit.to_string())]);

        self.send_json("logs", request).await
    }

    /// Get one log by id
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_log(&self, id: RecordId) -> Result<PracticeLog> {
        self.get_json("log", &format!("/logs/{id}")).await
    }

    /// Get aggregate statistics for a template
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn get_analytics(&self, template_id: RecordId) -> Result<AnalyticsSummary> {
        let request = self
            .client
            .get(self.url("/analytics/"))
            .query(&[("template_id", template_id.to_string())]);

        self.send_json("analytics", request).await
    }

    /// Store a new practice log
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP request fails or the response cannot be parsed.
    pub async fn create_log(&self, log: &NewPracticeLog) -> Result<PracticeLog> {
        let request = self.client.post(self.url("/logs/")).json(log);
        self.send_json("created log", request).await
    }

    /// Check whether the backend answers its health endpoint
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be reached or reports a failure.
    pub async fn health(&self) -> Result<serde_json::Value> {
        let request = self.client.get(format!("{}/health", self.base_url));
        self.send_json("backend health", request).await
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.api_root)
    }

    async fn get_json<T: DeserializeOwned>(&self, what: &str, path: &str) -> Result<T> {
        let request = self.client.get(self.url(path));
        self.send_json(what, request).await
    }

    async fn send_json<T: DeserializeOwned>(&self, what: &str, request: RequestBuilder) -> Result<T> {
        let mut request = request;

        if let Some(ref api_key) = self.api_key {
            request = request.header("X-API-Key", api_key);
        }

        let response = request.send().await.map_err(|e| {
            warn!("Failed to fetch {what}: {e}");
            Error::Network(format!("Failed to fetch {what}: {e}"))
        })?;

        let response = Self::check_status(what, response).await?;
        debug!(status = %response.status(), "Fetched {what}");

        response
            .json()
            .await
            .map_err(|e| Error::Decode(format!("{what}: {e}")))
    }

    async fn check_status(what: &str, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_detail(&body)
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());

        warn!(status = status.as_u16(), "Backend rejected {what} request: {message}");

        Err(Error::Api {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pull the `detail` message out of an error body, if there is one
fn extract_detail(body: &str) -> Option<String> {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()?
        .get("detail")?
        .as_str()
        .map(ToString::to_string)
}
