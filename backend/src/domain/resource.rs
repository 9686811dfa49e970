//! Resources: documents, equipment, licences, and anything else that can be
//! handed to an employee.
//!
//! `status` is owned by the store. Callers can change a resource's text
//! fields through [`ResourcePatch`] but never its status; the store derives
//! status from the assignment table.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::identifier::define_identifier;
use super::IdentifierValidationError;

define_identifier! {
    /// Stable resource identifier.
    ResourceId
}

/// Validation errors for resource inputs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceValidationError {
    /// The identifier was malformed.
    #[error("resource id is invalid: {0}")]
    Id(#[from] IdentifierValidationError),
    /// Title was blank once trimmed.
    #[error("title must not be empty")]
    EmptyTitle,
    /// Description was blank once trimmed.
    #[error("description must not be empty")]
    EmptyDescription,
    /// Type was blank once trimmed.
    #[error("type must not be empty")]
    EmptyKind,
}

impl ResourceValidationError {
    /// Name of the offending input field as clients spell it.
    pub fn field(&self) -> &'static str {
        match self {
            Self::Id(_) => "id",
            Self::EmptyTitle => "title",
            Self::EmptyDescription => "description",
            Self::EmptyKind => "type",
        }
    }
}

fn require_text(
    value: String,
    error: ResourceValidationError,
) -> Result<String, ResourceValidationError> {
    if value.trim().is_empty() {
        Err(error)
    } else {
        Ok(value)
    }
}

/// Whether a resource is currently held by someone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ResourceStatus {
    /// No assignment exists.
    Available,
    /// Exactly one assignment exists.
    Assigned,
}

/// Validated fields for a new resource.
///
/// # Examples
/// ```
/// use resource_desk::domain::ResourceDraft;
///
/// let draft = ResourceDraft::try_new("Laptop", "MacBook Pro", "equipment").expect("valid");
/// assert_eq!(draft.title(), "Laptop");
/// assert!(ResourceDraft::try_new(" ", "MacBook Pro", "equipment").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceDraft {
    title: String,
    description: String,
    kind: String,
}

impl ResourceDraft {
    /// Validate the three caller-supplied fields.
    pub fn try_new(
        title: impl Into<String>,
        description: impl Into<String>,
        kind: impl Into<String>,
    ) -> Result<Self, ResourceValidationError> {
        Ok(Self {
            title: require_text(title.into(), ResourceValidationError::EmptyTitle)?,
            description: require_text(
                description.into(),
                ResourceValidationError::EmptyDescription,
            )?,
            kind: require_text(kind.into(), ResourceValidationError::EmptyKind)?,
        })
    }

    /// Title of the new resource.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description of the new resource.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Category of the new resource.
    pub fn kind(&self) -> &str {
        &self.kind
    }
}

/// Partial update naming exactly which fields may change.
///
/// Unset fields are left untouched when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResourcePatch {
    title: Option<String>,
    description: Option<String>,
    kind: Option<String>,
}

impl ResourcePatch {
    /// Validate each supplied field; `None` means "leave unchanged".
    pub fn try_new(
        title: Option<String>,
        description: Option<String>,
        kind: Option<String>,
    ) -> Result<Self, ResourceValidationError> {
        Ok(Self {
            title: title
                .map(|value| require_text(value, ResourceValidationError::EmptyTitle))
                .transpose()?,
            description: description
                .map(|value| require_text(value, ResourceValidationError::EmptyDescription))
                .transpose()?,
            kind: kind
                .map(|value| require_text(value, ResourceValidationError::EmptyKind))
                .transpose()?,
        })
    }

    /// Patch that only replaces the title.
    pub fn title(title: impl Into<String>) -> Result<Self, ResourceValidationError> {
        Self::try_new(Some(title.into()), None, None)
    }

    /// Whether the patch changes nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none() && self.kind.is_none()
    }
}

/// A resource record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    #[schema(value_type = String, example = "1")]
    id: ResourceId,
    #[schema(example = "Company Laptop")]
    title: String,
    description: String,
    #[serde(rename = "type")]
    #[schema(example = "equipment")]
    kind: String,
    status: ResourceStatus,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Resource {
    /// Build a freshly created, available resource.
    pub fn create(id: ResourceId, draft: ResourceDraft, now: DateTime<Utc>) -> Self {
        let ResourceDraft {
            title,
            description,
            kind,
        } = draft;
        Self {
            id,
            title,
            description,
            kind,
            status: ResourceStatus::Available,
            created_at: now,
            updated_at: now,
        }
    }

    /// Rebuild a stored resource, e.g. from seed data.
    pub fn restore(
        id: ResourceId,
        draft: ResourceDraft,
        status: ResourceStatus,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            status,
            created_at,
            updated_at,
            ..Self::create(id, draft, created_at)
        }
    }

    /// Stable identifier.
    pub fn id(&self) -> &ResourceId {
        &self.id
    }

    /// Title.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Free-form category.
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Current status.
    pub fn status(&self) -> ResourceStatus {
        self.status
    }

    /// Creation instant.
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Last modification instant.
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub(crate) fn apply(&mut self, patch: ResourcePatch, now: DateTime<Utc>) {
        let ResourcePatch {
            title,
            description,
            kind,
        } = patch;
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(kind) = kind {
            self.kind = kind;
        }
        self.updated_at = now;
    }

    pub(crate) fn set_status(&mut self, status: ResourceStatus, now: DateTime<Utc>) {
        self.status = status;
        self.updated_at = now;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use rstest::rstest;

    fn instant(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, day, 9, 0, 0)
            .single()
            .expect("valid fixture timestamp")
    }

    fn laptop() -> Resource {
        let draft =
            ResourceDraft::try_new("Company Laptop", "MacBook Pro", "equipment").expect("draft");
        Resource::create(ResourceId::new("1").expect("id"), draft, instant(1))
    }

    #[rstest]
    #[case("", "d", "t", ResourceValidationError::EmptyTitle)]
    #[case("t", "  ", "t", ResourceValidationError::EmptyDescription)]
    #[case("t", "d", "\t", ResourceValidationError::EmptyKind)]
    fn draft_rejects_blank_fields(
        #[case] title: &str,
        #[case] description: &str,
        #[case] kind: &str,
        #[case] expected: ResourceValidationError,
    ) {
        assert_eq!(
            ResourceDraft::try_new(title, description, kind),
            Err(expected)
        );
    }

    #[test]
    fn created_resource_is_available() {
        let resource = laptop();
        assert_eq!(resource.status(), ResourceStatus::Available);
        assert_eq!(resource.created_at(), resource.updated_at());
    }

    #[test]
    fn patch_changes_only_named_fields() {
        let mut resource = laptop();
        let patch = ResourcePatch::title("Spare Laptop").expect("patch");
        resource.apply(patch, instant(2));

        assert_eq!(resource.title(), "Spare Laptop");
        assert_eq!(resource.description(), "MacBook Pro");
        assert_eq!(resource.kind(), "equipment");
        assert_eq!(resource.created_at(), instant(1));
        assert_eq!(resource.updated_at(), instant(2));
    }

    #[test]
    fn patch_rejects_blank_replacement() {
        let result = ResourcePatch::try_new(None, Some(" ".to_owned()), None);
        assert_eq!(result, Err(ResourceValidationError::EmptyDescription));
    }

    #[test]
    fn serialises_type_field_name() {
        let value = serde_json::to_value(laptop()).expect("serialise");
        assert_eq!(value["type"], "equipment");
        assert_eq!(value["status"], "available");
        assert!(value.get("createdAt").is_some());
    }
}
