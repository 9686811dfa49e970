//! Maps validated seed documents from `mock-data` into store tables.
//!
//! `mock-data` checks the document's internal consistency; this module
//! re-validates each value against the domain rules, which are stricter in
//! places (identifiers must not carry surrounding whitespace).

use camino::Utf8Path;
use mock_data::{
    SeedAssignment, SeedDocument, SeedError, SeedResource, SeedResourceStatus, SeedRole, SeedUser,
};
use thiserror::Error;

use crate::domain::{
    Assignment, AssignmentId, IdentifierValidationError, Resource, ResourceDraft, ResourceId,
    ResourceStatus, ResourceValidationError, StoreTables, User, UserId, UserRole,
    UserValidationError,
};

/// Errors raised while loading or converting seed data.
#[derive(Debug, Error)]
pub enum SeedMappingError {
    /// The document could not be read or failed its own validation.
    #[error("seed document rejected: {0}")]
    Document(#[from] SeedError),
    /// A seeded user violates a domain rule.
    #[error("seed user {id} is invalid: {source}")]
    User {
        id: String,
        #[source]
        source: UserValidationError,
    },
    /// A seeded resource violates a domain rule.
    #[error("seed resource {id} is invalid: {source}")]
    Resource {
        id: String,
        #[source]
        source: ResourceValidationError,
    },
    /// A seeded assignment carries a malformed identifier.
    #[error("seed assignment {id} is invalid: {source}")]
    Assignment {
        id: String,
        #[source]
        source: IdentifierValidationError,
    },
}

/// Tables built from the demo data shipped with `mock-data`.
pub fn builtin_tables() -> Result<StoreTables, SeedMappingError> {
    tables_from_document(mock_data::builtin_seed()?)
}

/// Tables built from a seed document on disk.
pub fn tables_from_path(path: &Utf8Path) -> Result<StoreTables, SeedMappingError> {
    tables_from_document(SeedDocument::from_path(path)?)
}

/// Convert a validated document into store tables.
pub fn tables_from_document(document: SeedDocument) -> Result<StoreTables, SeedMappingError> {
    let (users, resources, assignments) = document.into_parts();
    let users = users
        .into_iter()
        .map(map_user)
        .collect::<Result<Vec<_>, _>>()?;
    let resources = resources
        .into_iter()
        .map(map_resource)
        .collect::<Result<Vec<_>, _>>()?;
    let assignments = assignments
        .into_iter()
        .map(map_assignment)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(StoreTables::new(users, resources, assignments))
}

fn map_role(role: SeedRole) -> UserRole {
    match role {
        SeedRole::Admin => UserRole::Admin,
        SeedRole::Employee => UserRole::Employee,
    }
}

fn map_status(status: SeedResourceStatus) -> ResourceStatus {
    match status {
        SeedResourceStatus::Available => ResourceStatus::Available,
        SeedResourceStatus::Assigned => ResourceStatus::Assigned,
    }
}

fn map_user(seed: SeedUser) -> Result<User, SeedMappingError> {
    let SeedUser {
        id,
        name,
        email,
        role,
        avatar,
    } = seed;
    User::try_from_strings(&id, &name, &email, map_role(role))
        .map(|user| user.with_avatar(avatar))
        .map_err(|source| SeedMappingError::User { id, source })
}

fn map_resource(seed: SeedResource) -> Result<Resource, SeedMappingError> {
    let SeedResource {
        id,
        title,
        description,
        kind,
        status,
        created_at,
        updated_at,
    } = seed;
    let parts = ResourceId::new(id.as_str())
        .map_err(ResourceValidationError::from)
        .and_then(|resource_id| {
            ResourceDraft::try_new(title, description, kind).map(|draft| (resource_id, draft))
        });
    let (resource_id, draft) =
        parts.map_err(|source| SeedMappingError::Resource { id, source })?;
    Ok(Resource::restore(
        resource_id,
        draft,
        map_status(status),
        created_at,
        updated_at,
    ))
}

fn map_assignment(seed: SeedAssignment) -> Result<Assignment, SeedMappingError> {
    let SeedAssignment {
        id,
        user_id,
        resource_id,
        assigned_at,
        due_date,
    } = seed;
    let ids = AssignmentId::new(id.as_str()).and_then(|assignment_id| {
        Ok((
            assignment_id,
            UserId::new(user_id)?,
            ResourceId::new(resource_id)?,
        ))
    });
    let (assignment_id, user_id, resource_id) =
        ids.map_err(|source| SeedMappingError::Assignment { id, source })?;
    Ok(Assignment::new(assignment_id, user_id, resource_id, assigned_at).with_due_date(due_date))
}
