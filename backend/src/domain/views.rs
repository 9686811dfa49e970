//! Read models derived from the store tables.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use super::{Resource, ResourceStatus, User};

/// Narrowing applied to resource listings.
///
/// `search` is matched case-insensitively as a substring of the title or
/// the description. `kind` and `status` are exact matches.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ResourceFilter {
    /// Free-text search term.
    pub search: Option<String>,
    /// Exact resource type, e.g. `equipment`.
    #[serde(rename = "type")]
    pub kind: Option<String>,
    /// Exact status.
    pub status: Option<ResourceStatus>,
}

impl ResourceFilter {
    /// Filter with only a search term.
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search: Some(term.into()),
            ..Self::default()
        }
    }

    /// Whether `resource` matches the search term. An empty term matches;
    /// whitespace is matched literally.
    pub fn matches_search(&self, resource: &Resource) -> bool {
        let Some(term) = self.search.as_deref() else {
            return true;
        };
        if term.is_empty() {
            return true;
        }
        let needle = term.to_lowercase();
        resource.title().to_lowercase().contains(&needle)
            || resource.description().to_lowercase().contains(&needle)
    }

    /// Whether `resource` matches every populated criterion.
    pub fn matches(&self, resource: &Resource) -> bool {
        self.matches_search(resource)
            && self
                .kind
                .as_deref()
                .is_none_or(|kind| resource.kind() == kind)
            && self.status.is_none_or(|status| resource.status() == status)
    }
}

/// Counts and the resource list shown on the dashboard.
///
/// Totals are only populated for admins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    /// Resources assigned to the current identity.
    pub my_resources: usize,
    /// Every resource in the store.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_resources: Option<usize>,
    /// Resources currently assigned to anyone.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_assigned: Option<usize>,
    /// Admins get the first [`DASHBOARD_RECENT_LIMIT`] resources in table
    /// order; employees get their own.
    pub resources: Vec<Resource>,
}

/// How many resources the admin dashboard lists.
pub const DASHBOARD_RECENT_LIMIT: usize = 6;

/// A user together with what they hold.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserOverview {
    pub user: User,
    pub resource_count: usize,
    pub resource_titles: Vec<String>,
}

/// A resource together with its assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ResourceDetails {
    pub resource: Resource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<User>,
}
