//! REST API client for the portfolio backend.
//!
//! Wraps the five HTTP endpoints (project list/create/update/delete
//! and site configuration) using [`reqwest`]. No retry, no timeout,
//! no cancellation: each call is a single attempt whose failure is
//! surfaced immediately.

use serde::Deserialize;
use vitrine_core::project::{Project, ProjectDraft};
use vitrine_core::site::SiteConfig;
use vitrine_core::types::DbId;

/// HTTP client for a single portfolio backend.
pub struct PortfolioApi {
    client: reqwest::Client,
    /// Base URL including the `/api` prefix, e.g. `http://host:5001/api`.
    base_url: String,
}

/// Error payload the backend returns on 4xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: Option<String>,
}

/// Errors from the portfolio REST layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS, etc.).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {message}")]
    Rejected {
        /// HTTP status code.
        status: u16,
        /// Message from the response's `error` field, or the
        /// operation's fallback text when the body carries none.
        message: String,
    },
}

impl PortfolioApi {
    /// Create a new API client.
    ///
    /// * `base_url` - base URL including the `/api` prefix.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Fetch the full project collection. `GET /projects`.
    pub async fn list_projects(&self) -> Result<Vec<Project>, ApiError> {
        let response = self
            .client
            .get(format!("{}/projects", self.base_url))
            .send()
            .await?;

        Self::parse_response(response, "failed to load projects").await
    }

    /// Fetch the site configuration singleton. `GET /config`.
    pub async fn fetch_config(&self) -> Result<SiteConfig, ApiError> {
        let response = self
            .client
            .get(format!("{}/config", self.base_url))
            .send()
            .await?;

        Self::parse_response(response, "failed to load site configuration").await
    }

    /// Create a project from a draft. `POST /projects`.
    ///
    /// Returns the created project with its server-assigned id.
    pub async fn create_project(&self, draft: &ProjectDraft) -> Result<Project, ApiError> {
        let response = self
            .client
            .post(format!("{}/projects", self.base_url))
            .json(draft)
            .send()
            .await?;

        Self::parse_response(response, "failed to add project").await
    }

    /// Update an existing project. `PUT /projects/{id}`.
    ///
    /// The body is the full editing draft including its id, mirroring
    /// what the edit dialog stages.
    pub async fn update_project(&self, project: &Project) -> Result<Project, ApiError> {
        let response = self
            .client
            .put(format!("{}/projects/{}", self.base_url, project.id))
            .json(project)
            .send()
            .await?;

        Self::parse_response(response, "failed to update project").await
    }

    /// Delete a project. `DELETE /projects/{id}`.
    pub async fn delete_project(&self, id: DbId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(format!("{}/projects/{}", self.base_url, id))
            .send()
            .await?;

        Self::check_status(response, "failed to delete project").await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status. On failure, decode the
    /// `{ "error": string }` payload into [`ApiError::Rejected`],
    /// falling back to `fallback` when the body has no usable message.
    async fn ensure_success(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = match response.json::<ErrorBody>().await {
            Ok(ErrorBody { error: Some(msg) }) if !msg.is_empty() => msg,
            _ => fallback.to_string(),
        };

        Err(ApiError::Rejected {
            status: status.as_u16(),
            message,
        })
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
        fallback: &str,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response, fallback).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert a success status, discarding the body.
    async fn check_status(response: reqwest::Response, fallback: &str) -> Result<(), ApiError> {
        Self::ensure_success(response, fallback).await?;
        Ok(())
    }
}
