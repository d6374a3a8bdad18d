//! Thin adapter exposing the Figma REST API to a workflow-automation host.
//!
//! The crate translates host-initiated actions into authenticated HTTP
//! requests against `https://api.figma.com` and provides the list-fetching
//! helpers used by dynamic dropdown option providers (team → projects →
//! files → comments). Credential storage and refresh belong to the host;
//! the adapter only reads a bearer token and team id per call.
//!
//! Every operation is a single stateless request/response round trip. There
//! are no retries, no pagination handling and no caching: failures propagate
//! to the host carrying whatever status and body the remote service returned.

pub mod client;
pub mod config;
pub mod error;
pub mod options;

pub use client::{ExecutionContext, FigmaApi, FigmaClient};
pub use config::Config;
pub use error::{ApiError, ConfigError, Error, Result};
