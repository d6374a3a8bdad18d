//! Figma API client

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

pub mod figma;
#[cfg(test)]
pub mod fixtures;
pub mod models;

pub use figma::FigmaClient;
#[cfg(test)]
#[allow(unused_imports)]
pub use mock::MockFigmaClient;
pub use models::{Comment, CommentUser, File, NewComment, Project, WebhookRequest};

/// Per-call execution context used for request attribution.
///
/// The host passes one of these into every operation; the adapter logs the
/// invocation id alongside each outgoing request and otherwise leaves the
/// context alone. There is no hidden default binding: callers that have no
/// attribution to carry pass [`ExecutionContext::default`].
#[derive(Debug, Clone, Default)]
pub struct ExecutionContext {
    /// Opaque id of the host-side invocation that triggered this call
    pub invocation_id: Option<String>,
}

impl ExecutionContext {
    /// Context with no attribution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Context attributed to a host invocation.
    pub fn for_invocation(invocation_id: impl Into<String>) -> Self {
        Self {
            invocation_id: Some(invocation_id.into()),
        }
    }
}

/// Figma API operations used by automation actions and option providers.
///
/// Every method is a single request/response round trip; nothing is cached
/// or retried locally. List operations default a missing array field in the
/// response to an empty sequence rather than raising.
#[async_trait]
pub trait FigmaApi: Send + Sync {
    /// List the projects of a team, in the order the service returns them.
    async fn list_team_projects(
        &self,
        ctx: &ExecutionContext,
        team_id: &str,
    ) -> Result<Vec<Project>>;

    /// List the files of a project.
    async fn list_project_files(
        &self,
        ctx: &ExecutionContext,
        project_id: &str,
    ) -> Result<Vec<File>>;

    /// List the comments on a file, roots and replies alike.
    async fn list_file_comments(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
    ) -> Result<Vec<Comment>>;

    /// Create a comment on a file, optionally replying to a root comment.
    ///
    /// Returns the created comment exactly as the service represents it.
    async fn post_comment(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        comment: &NewComment,
    ) -> Result<Comment>;

    /// Delete a comment from a file.
    ///
    /// No local existence check is made; the remote's (possibly empty)
    /// response is returned unmodified, an empty body as `Value::Null`.
    async fn delete_comment(
        &self,
        ctx: &ExecutionContext,
        file_id: &str,
        comment_id: &str,
    ) -> Result<Value>;

    /// Register a webhook subscription and return the new hook's id.
    async fn create_hook(
        &self,
        ctx: &ExecutionContext,
        event_type: &str,
        team_id: &str,
        endpoint: &str,
        passcode: &str,
    ) -> Result<String>;

    /// Remove a webhook subscription.
    async fn delete_hook(&self, ctx: &ExecutionContext, hook_id: &str) -> Result<Value>;

    /// Team id from the credential, if the host supplied one.
    ///
    /// Used as the implicit team when a project dropdown is resolved
    /// without an explicit team id.
    fn default_team_id(&self) -> Option<&str>;
}
