//! Test fixtures and builders for API model types
//!
//! Provides builder patterns for creating test data with sensible defaults.
//! Import via `use crate::client::fixtures::*` in test modules.

#![allow(dead_code)] // Builder methods are available for future tests

use chrono::{DateTime, TimeZone, Utc};

use super::models::{Comment, CommentUser, File, Project};

/// Builder for creating test Project instances.
#[derive(Debug, Clone)]
pub struct ProjectBuilder {
    id: String,
    name: String,
}

impl ProjectBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: format!("Project {}", &id),
            id,
        }
    }

    /// Set the project name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn build(self) -> Project {
        Project {
            id: self.id,
            name: self.name,
        }
    }
}

/// Builder for creating test File instances.
#[derive(Debug, Clone)]
pub struct FileBuilder {
    key: String,
    name: String,
    last_modified: Option<DateTime<Utc>>,
    thumbnail_url: Option<String>,
}

impl FileBuilder {
    /// Create a new builder with the given file key.
    pub fn new(key: impl Into<String>) -> Self {
        let key = key.into();
        Self {
            name: format!("File {}", &key),
            key,
            last_modified: None,
            thumbnail_url: None,
        }
    }

    /// Set the file name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the last modification time.
    pub fn last_modified(mut self, at: DateTime<Utc>) -> Self {
        self.last_modified = Some(at);
        self
    }

    pub fn build(self) -> File {
        File {
            key: self.key,
            name: self.name,
            last_modified: self.last_modified,
            thumbnail_url: self.thumbnail_url,
        }
    }
}

/// Builder for creating test Comment instances.
///
/// Defaults to a root comment by `tester` created at a fixed timestamp so
/// label assertions are deterministic.
#[derive(Debug, Clone)]
pub struct CommentBuilder {
    id: String,
    message: String,
    handle: String,
    created_at: DateTime<Utc>,
    parent_id: Option<String>,
}

impl CommentBuilder {
    /// Create a new builder with the given ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            message: "Looks good to me".to_string(),
            handle: "tester".to_string(),
            created_at: Utc.with_ymd_and_hms(2024, 3, 1, 9, 30, 0).unwrap(),
            parent_id: None,
        }
    }

    /// Set the comment message.
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Set the author handle.
    pub fn handle(mut self, handle: impl Into<String>) -> Self {
        self.handle = handle.into();
        self
    }

    /// Set the creation timestamp.
    pub fn created_at(mut self, at: DateTime<Utc>) -> Self {
        self.created_at = at;
        self
    }

    /// Turn the comment into a reply to the given root comment.
    pub fn parent(mut self, parent_id: impl Into<String>) -> Self {
        self.parent_id = Some(parent_id.into());
        self
    }

    pub fn build(self) -> Comment {
        Comment {
            id: self.id,
            message: self.message,
            user: CommentUser {
                handle: self.handle,
            },
            created_at: self.created_at,
            parent_id: self.parent_id,
        }
    }
}
