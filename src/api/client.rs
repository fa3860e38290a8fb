//! HTTP client for the editor backend.
//!
//! One struct per resource group, each shaping exactly one request per named
//! operation. The client performs no retries, no timeouts, and no error
//! classification beyond the [`ApiError`] variants — recovery policy belongs
//! to the caller.

use std::fmt;

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use super::types::{
    Character, CharacterCreate, CharacterUpdate, DialogueLine, DialogueLineCreate, ExportResult,
};

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Errors surfaced by facade calls.
/// Variants carry enough info to determine retryability (future use).
#[derive(Debug)]
pub enum ApiError {
    /// Network-level failure (timeout, DNS, connection refused). Retryable.
    Network(String),
    /// Backend returned a non-success status. Retryable if status >= 500 or 429.
    Api { status: u16, message: String },
    /// Response body did not decode as the expected shape. Not retryable.
    Parse(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "network error: {msg}"),
            ApiError::Api { status, message } => {
                write!(f, "API error (HTTP {status}): {message}")
            }
            ApiError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

/// Client for the editor backend, fixed to one base URL at construction.
pub struct ApiClient {
    base_url: String,
    http: reqwest::Client,
}

impl ApiClient {
    /// Creates a client. Base URL precedence: explicit argument, then the
    /// `VNED_BACKEND_URL` env var, then the local development default.
    pub fn new(base_url: Option<String>) -> Self {
        let env_url = std::env::var("VNED_BACKEND_URL").ok();
        let final_url = base_url
            .or(env_url)
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        Self {
            base_url: final_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Character resource operations.
    pub fn characters(&self) -> CharacterApi<'_> {
        CharacterApi { client: self }
    }

    /// Dialogue and export operations.
    pub fn dialogue(&self) -> DialogueApi<'_> {
        DialogueApi { client: self }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Sends a request and maps transport and status failures.
    async fn execute(
        &self,
        request: reqwest::RequestBuilder,
    ) -> Result<reqwest::Response, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        debug!("Backend response status: {}", status);

        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Backend error: {} - {}", status, message);
            return Err(ApiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        Ok(response)
    }

    async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, ApiError> {
        response
            .json()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

// ============================================================================
// Character Facade
// ============================================================================

pub struct CharacterApi<'a> {
    client: &'a ApiClient,
}

impl CharacterApi<'_> {
    /// POST `/api/characters/`
    pub async fn create(&self, payload: &CharacterCreate) -> Result<Character, ApiError> {
        info!(
            "Creating character '{}' in project {}",
            payload.name, payload.project_id
        );
        let request = self
            .client
            .http
            .post(self.client.url("/api/characters/"))
            .json(payload);
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// GET `/api/characters/{project_id}`
    pub async fn by_project(&self, project_id: &str) -> Result<Vec<Character>, ApiError> {
        let request = self
            .client
            .http
            .get(self.client.url(&format!("/api/characters/{project_id}")));
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// GET `/api/characters/character/{character_id}`
    pub async fn get(&self, character_id: &str) -> Result<Character, ApiError> {
        let request = self.client.http.get(
            self.client
                .url(&format!("/api/characters/character/{character_id}")),
        );
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// PUT `/api/characters/{character_id}`
    pub async fn update(
        &self,
        character_id: &str,
        payload: &CharacterUpdate,
    ) -> Result<Character, ApiError> {
        info!("Updating character {}", character_id);
        let request = self
            .client
            .http
            .put(self.client.url(&format!("/api/characters/{character_id}")))
            .json(payload);
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// DELETE `/api/characters/{character_id}` — any response body is ignored.
    pub async fn delete(&self, character_id: &str) -> Result<(), ApiError> {
        info!("Deleting character {}", character_id);
        let request = self
            .client
            .http
            .delete(self.client.url(&format!("/api/characters/{character_id}")));
        self.client.execute(request).await?;
        Ok(())
    }
}

// ============================================================================
// Dialogue Facade
// ============================================================================

pub struct DialogueApi<'a> {
    client: &'a ApiClient,
}

impl DialogueApi<'_> {
    /// POST `/api/dialogue/{project_id}/lines`
    pub async fn add_line(
        &self,
        project_id: &str,
        payload: &DialogueLineCreate,
    ) -> Result<DialogueLine, ApiError> {
        info!("Adding dialogue line to project {}", project_id);
        let request = self
            .client
            .http
            .post(self.client.url(&format!("/api/dialogue/{project_id}/lines")))
            .json(payload);
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// GET `/api/dialogue/{project_id}/lines`
    pub async fn lines(&self, project_id: &str) -> Result<Vec<DialogueLine>, ApiError> {
        let request = self
            .client
            .http
            .get(self.client.url(&format!("/api/dialogue/{project_id}/lines")));
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }

    /// POST `/api/export/{project_id}` — renders the project script server-side.
    pub async fn export(&self, project_id: &str) -> Result<ExportResult, ApiError> {
        info!("Exporting project {}", project_id);
        let request = self
            .client
            .http
            .post(self.client.url(&format!("/api/export/{project_id}")));
        let response = self.client.execute(request).await?;
        ApiClient::decode(response).await
    }
}
