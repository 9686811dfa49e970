//! Seed record types.
//!
//! These mirror the JSON shape of the seed document. They carry no backend
//! invariants beyond what [`crate::SeedDocument`] validates as a whole.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role granted to a seeded user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedRole {
    /// May manage resources and view every user.
    Admin,
    /// May only view resources assigned to them.
    Employee,
}

/// Status recorded for a seeded resource.
///
/// The backend recomputes status from the assignments, so this value is
/// informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeedResourceStatus {
    /// Not held by anyone.
    Available,
    /// Held by exactly one user.
    Assigned,
}

/// A seeded user record.
///
/// # Example
///
/// ```
/// use mock_data::{SeedRole, SeedUser};
///
/// let user = SeedUser {
///     id: "1".to_owned(),
///     name: "Admin User".to_owned(),
///     email: "admin@example.com".to_owned(),
///     role: SeedRole::Admin,
///     avatar: None,
/// };
/// assert_eq!(user.role, SeedRole::Admin);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedUser {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Login email, unique across the document.
    pub email: String,
    /// Granted role.
    pub role: SeedRole,
    /// Optional avatar URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A seeded resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedResource {
    /// Stable identifier.
    pub id: String,
    /// Short title.
    pub title: String,
    /// Longer description.
    pub description: String,
    /// Free-form category such as `document` or `equipment`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Recorded status.
    pub status: SeedResourceStatus,
    /// Creation instant.
    pub created_at: DateTime<Utc>,
    /// Last modification instant.
    pub updated_at: DateTime<Utc>,
}

/// A seeded assignment of one resource to one user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SeedAssignment {
    /// Stable identifier.
    pub id: String,
    /// Holder of the resource.
    pub user_id: String,
    /// Resource being held.
    pub resource_id: String,
    /// Instant the assignment was made.
    pub assigned_at: DateTime<Utc>,
    /// Optional return date.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
}
