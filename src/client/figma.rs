//! Figma API client implementation

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client as HttpClient, Method};
use serde::Deserialize;
use serde_json::Value;

use super::{Comment, ExecutionContext, FigmaApi, File, NewComment, Project, WebhookRequest};
use crate::config::Config;
use crate::error::{ApiError, ConfigError, Result};

/// Figma API base URL
const API_BASE_URL: &str = "https://api.figma.com";

/// Environment variable overriding the base URL (used by http tests)
const API_HOST_ENV: &str = "FIGMA_API_HOST";

/// Request timeout for all API calls
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Figma API client
///
/// Stateless apart from the read-only credential: each call is an
/// independent round trip, so a single client can be shared freely across
/// concurrently resolved dropdowns without any coordination.
pub struct FigmaClient {
    http: HttpClient,
    base_url: String,
    access_token: String,
    team_id: Option<String>,
}

impl FigmaClient {
    /// Create a new client from a bearer token and optional team id.
    pub fn new(access_token: impl Into<String>, team_id: Option<String>) -> Result<Self> {
        let http = HttpClient::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let base_url =
            std::env::var(API_HOST_ENV).unwrap_or_else(|_| API_BASE_URL.to_string());

        Ok(Self {
            http,
            base_url,
            access_token: access_token.into(),
            team_id,
        })
    }

    /// Create a client from a resolved [`Config`].
    pub fn from_config(config: &Config) -> Result<Self> {
        let token = config
            .access_token
            .clone()
            .ok_or(ConfigError::MissingAccessToken)?;
        Self::new(token, config.team_id.clone())
    }

    /// Override the base URL, e.g. to point at a mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Make an authenticated API request.
    ///
    /// Injects the `Authorization` and `Content-Type` headers on every call
    /// and maps any non-success status to [`ApiError::Request`] with the
    /// remote status and body untouched. Empty bodies (DELETE responses)
    /// deserialize as JSON `null`.
    async fn request<T: for<'de> Deserialize<'de>>(
        &self,
        ctx: &ExecutionContext,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<T> {
        log::debug!(
            "{} {} (invocation: {})",
            method,
            path,
            ctx.invocation_id.as_deref().unwrap_or("-")
        );

        let url = format!("{}{}", self.base_url, path);
        let mut request = self
            .http
            .request(method, &url)
            .header("Authorization", format!("Bearer {}", self.access_token))
            .header("Content-Type", "application/json");

        if let Some(body) = body {
            request = request.body(body.to_string());
        }

        let response = request.send().await.map_err(ApiError::from)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Request {
                status: status.as_u16(),
                body,
            }
            .into());
        }

        let text = response.text().await.map_err(ApiError::from)?;
        let payload = if text.trim().is_empty() { "null" } else { &text };
        serde_json::from_str(payload).map_err(|e| {
            ApiError::InvalidResponse(format!("Failed to parse response: {}", e)).into()
        })
    }
}

#[async_trait]
impl FigmaApi for FigmaClient {
    async fn list_team_projects(
        &self,
        ctx: &ExecutionContext,
        team_id: &str,
    ) -> Result<Vec<Project>> {
        #[derive(Deserialize)]
        struct ProjectsResponse {
            #[serde(default)]
            projects: Vec<Project>,
        }

        let path = format!("/v1/teams/{}/projects", team_id);
        let response: ProjectsResponse = self.request(ctx, Method::GET, &path, None).await?;
        Ok(response.projects)
    }

    async fn list_project_files(
        &self,
        ctx: &ExecutionContext,
        project_id: &str,
    ) -> Result<Vec<File>> {
        #[derive(Deserialize)]
        struct FilesResponse {
            #[serde(default)]
            files: Vec<File>,
        }

        let path = format!("/v1/projects/{}/files", project_id);
        let response: FilesResponse = self.request(ctx, Method::GET, &path, None).await?;
        Ok(response.files)
    }

    async fn list_file_comments(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
    ) -> Result<Vec<Comment>> {
        #[derive(Deserialize)]
        struct CommentsResponse {
            #[serde(default)]
            comments: Vec<Comment>,
        }

        let path = format!("/v1/files/{}/comments", file_id);
        let response: CommentsResponse = self.request(ctx, Method::GET, &path, None).await?;
        Ok(response.comments)
    }

    async fn post_comment(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        comment: &NewComment,
    ) -> Result<Comment> {
        let path = format!("/v1/files/{}/comments", file_id);
        let body = serde_json::to_value(comment)?;
        self.request(ctx, Method::POST, &path, Some(body)).await
    }

    async fn delete_comment(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        comment_id: &str,
    ) -> Result<Value> {
        let path = format!("/v1/files/{}/comments/{}", file_id, comment_id);
        self.request(ctx, Method::DELETE, &path, None).await
    }

    async fn create_hook(
        &self,
        ctx: &ExecutionContext,
        event_type: &str,
        team_id: &str,
        endpoint: &str,
        passcode: &str,
    ) -> Result<String> {
        #[derive(Deserialize)]
        struct HookResponse {
            id: String,
        }

        let body = serde_json::to_value(WebhookRequest {
            event_type: event_type.to_string(),
            team_id: team_id.to_string(),
            endpoint: endpoint.to_string(),
            passcode: passcode.to_string(),
        })?;

        let hook: HookResponse = self
            .request(ctx, Method::POST, "/v2/webhooks", Some(body))
            .await?;
        Ok(hook.id)
    }

    async fn delete_hook(&self, ctx: &ExecutionContext, hook_id: &str) -> Result<Value> {
        let path = format!("/v2/webhooks/{}", hook_id);
        self.request(ctx, Method::DELETE, &path, None).await
    }

    fn default_team_id(&self) -> Option<&str> {
        self.team_id.as_deref()
    }
}
