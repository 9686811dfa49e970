//! Human-readable notifications emitted by store operations.
//!
//! Each notification is a short title plus a description, meant for
//! transient display. Emitting one never blocks and returns nothing.

use serde::Serialize;
use utoipa::ToSchema;

/// Visual weight of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Confirmation of a completed action.
    Info,
    /// Something the user tried did not work.
    Destructive,
}

/// A title/description pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    title: String,
    description: String,
    severity: Severity,
}

impl Notification {
    /// Informational notification.
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
        }
    }

    /// Destructive (failure) notification.
    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Destructive,
        }
    }

    /// Short heading.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Body text.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Visual weight.
    pub fn severity(&self) -> Severity {
        self.severity
    }
}
