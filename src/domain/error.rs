//! Domain error types for the history dialog.
//!
//! `ServiceError` is what a version service reports; it is cloned into
//! state and actions, so it carries plain data only. `HistoryError` wraps
//! it with the channel the failure belongs to.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::ticket::RequestTicket;
use super::version::VersionNumber;

/// Failures reported by a version service.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceError {
    #[error("Item not found: {path} (site {site})")]
    NotFound { site: String, path: String },

    #[error("Version {version} not found for {path}")]
    VersionNotFound {
        path: String,
        version: VersionNumber,
    },

    #[error("Not authorized: {message}")]
    Unauthorized { message: String },

    #[error("Service request failed: {message}")]
    Transport {
        status: Option<u16>,
        message: String,
    },
}

impl ServiceError {
    /// HTTP-like status code, when one applies.
    pub fn status(&self) -> Option<u16> {
        match self {
            ServiceError::NotFound { .. } | ServiceError::VersionNotFound { .. } => Some(404),
            ServiceError::Unauthorized { .. } => Some(401),
            ServiceError::Transport { status, .. } => *status,
        }
    }
}

/// Errors surfaced by the history dialog orchestration.
#[derive(Debug, Error)]
pub enum HistoryError {
    /// Listing versions or loading a single version failed.
    #[error("Failed to fetch: {0}")]
    Fetch(ServiceError),

    /// Reverting failed. Routed to notifications, never to the dialog's error.
    #[error("Failed to revert content: {0}")]
    Revert(ServiceError),

    /// A response arrived for a request the dialog no longer waits on.
    #[error("Stale response dropped (expected {expected}, received {received})")]
    Consistency {
        expected: RequestTicket,
        received: RequestTicket,
    },

    #[error("Invalid transition: {0}")]
    InvalidTransition(&'static str),
}
