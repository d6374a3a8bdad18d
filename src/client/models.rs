//! Wire models for the Figma REST API
//!
//! All of these are transient request/response shapes owned by the remote
//! service. The adapter never stores or mutates them; unknown fields are
//! ignored on the way in and optional fields are omitted on the way out.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Project within a team
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project ID
    pub id: String,

    /// Project name
    pub name: String,
}

/// Design file within a project
///
/// Files are addressed by `key`, not by a numeric id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    /// File key used in all file-scoped endpoints
    pub key: String,

    /// File name
    pub name: String,

    /// Last modification time (optional, not in all responses)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<DateTime<Utc>>,

    /// Thumbnail image URL (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

/// Threaded annotation on a file
///
/// Root comments have no `parent_id`; replies carry the root's id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Comment {
    /// Comment ID
    pub id: String,

    /// Comment message body
    pub message: String,

    /// Author of the comment
    pub user: CommentUser,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,

    /// Id of the root comment this replies to, absent on root comments
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Comment author identity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentUser {
    /// Author handle
    pub handle: String,
}

/// Payload for creating a comment on a file
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewComment {
    /// Message body of the comment
    pub message: String,

    /// Root comment to reply to. Must reference a root comment; the remote
    /// service rejects replies to replies.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_id: Option<String>,
}

impl NewComment {
    /// New root comment with the given message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            comment_id: None,
        }
    }

    /// Turn this into a reply to the given root comment.
    pub fn in_reply_to(mut self, comment_id: impl Into<String>) -> Self {
        self.comment_id = Some(comment_id.into());
        self
    }
}

/// Payload for registering a webhook subscription
///
/// Field names match the `/v2/webhooks` wire format exactly.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// Event type to subscribe to (e.g. `FILE_COMMENT`)
    pub event_type: String,

    /// Team the subscription is scoped to
    pub team_id: String,

    /// Callback URL notified on each event
    pub endpoint: String,

    /// Passcode echoed back in webhook payloads for verification
    pub passcode: String,
}
