//! Dynamic dropdown option providers
//!
//! Cascading parameter selection for the host UI: team → projects → files →
//! comments. Each provider re-fetches from the remote service on every call
//! and projects the items into `{label, value}` pairs; nothing is cached.

use serde::Serialize;

use crate::client::{Comment, ExecutionContext, FigmaApi};
use crate::error::{ConfigError, Result};

/// Maximum number of message characters shown in a comment label before
/// truncation kicks in.
const COMMENT_LABEL_MAX_CHARS: usize = 50;

/// One dropdown entry presented by the host UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    /// Human-readable text shown in the dropdown
    pub label: String,

    /// Identifier submitted when the entry is chosen
    pub value: String,
}

/// Project choices for a team.
///
/// Falls back to the credential's team id when `team_id` is not given, the
/// same implicit default the host applies when rendering a fresh project
/// dropdown. Errors with [`ConfigError::MissingTeamId`] when neither is
/// available.
pub async fn project_options(
    api: &dyn FigmaApi,
    ctx: &ExecutionContext,
    team_id: Option<&str>,
) -> Result<Vec<SelectOption>> {
    let team_id = team_id
        .or_else(|| api.default_team_id())
        .ok_or(ConfigError::MissingTeamId)?;

    let projects = api.list_team_projects(ctx, team_id).await?;
    Ok(projects
        .into_iter()
        .map(|project| SelectOption {
            label: project.name,
            value: project.id,
        })
        .collect())
}

/// File choices for a project. Values are file keys.
pub async fn file_options(
    api: &dyn FigmaApi,
    ctx: &ExecutionContext,
    project_id: &str,
) -> Result<Vec<SelectOption>> {
    let files = api.list_project_files(ctx, project_id).await?;
    Ok(files
        .into_iter()
        .map(|file| SelectOption {
            label: file.name,
            value: file.key,
        })
        .collect())
}

/// Reply-target choices for a file.
///
/// Labels carry a message excerpt plus author handle and creation time for
/// disambiguation. All comments are listed; the remote service is the one
/// that rejects replies to non-root comments.
pub async fn comment_options(
    api: &dyn FigmaApi,
    ctx: &ExecutionContext,
    file_id: &str,
) -> Result<Vec<SelectOption>> {
    let comments = api.list_file_comments(ctx, file_id).await?;
    Ok(comments
        .into_iter()
        .map(|comment| SelectOption {
            label: comment_label(&comment),
            value: comment.id,
        })
        .collect())
}

/// Format a comment into a dropdown label.
///
/// Messages longer than 50 characters are cut to their first 50 characters
/// (character-based, so multibyte text is never split) with an ellipsis
/// marker appended; shorter messages appear unmodified.
fn comment_label(comment: &Comment) -> String {
    let message = if comment.message.chars().count() > COMMENT_LABEL_MAX_CHARS {
        let excerpt: String = comment
            .message
            .chars()
            .take(COMMENT_LABEL_MAX_CHARS)
            .collect();
        format!("{}...", excerpt)
    } else {
        comment.message.clone()
    };

    format!(
        "\"{}\" - by {} at {}",
        message,
        comment.user.handle,
        comment.created_at.to_rfc3339()
    )
}
