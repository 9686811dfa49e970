//! Assignments record which user currently holds which resource.

use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use super::identifier::define_identifier;
use super::{ResourceId, UserId};

define_identifier! {
    /// Stable assignment identifier.
    AssignmentId
}

/// "This resource is currently held by this user."
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Assignment {
    #[schema(value_type = String)]
    id: AssignmentId,
    #[schema(value_type = String)]
    user_id: UserId,
    #[schema(value_type = String)]
    resource_id: ResourceId,
    assigned_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    due_date: Option<DateTime<Utc>>,
}

impl Assignment {
    /// Build an assignment record.
    pub fn new(
        id: AssignmentId,
        user_id: UserId,
        resource_id: ResourceId,
        assigned_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_id,
            resource_id,
            assigned_at,
            due_date: None,
        }
    }

    /// Attach an optional due date.
    pub fn with_due_date(mut self, due_date: Option<DateTime<Utc>>) -> Self {
        self.due_date = due_date;
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &AssignmentId {
        &self.id
    }

    /// Holder of the resource.
    pub fn user_id(&self) -> &UserId {
        &self.user_id
    }

    /// Resource being held.
    pub fn resource_id(&self) -> &ResourceId {
        &self.resource_id
    }

    /// Instant of the most recent (re)assignment.
    pub fn assigned_at(&self) -> DateTime<Utc> {
        self.assigned_at
    }

    /// Optional return date.
    pub fn due_date(&self) -> Option<DateTime<Utc>> {
        self.due_date
    }
}
