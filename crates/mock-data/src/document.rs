//! Seed document parsing and validation.
//!
//! A seed document is the JSON bootstrap for the backend's in-memory tables.
//! Parsing rejects anything the backend could not load without breaking its
//! invariants: dangling assignment references, a resource assigned twice,
//! duplicate identifiers, or duplicate login emails.

use std::collections::HashSet;

use camino::Utf8Path;
use cap_std::{ambient_authority, fs::Dir};
use serde::Deserialize;

use crate::error::SeedError;
use crate::records::{SeedAssignment, SeedResource, SeedUser};
use crate::validation::{is_blank, is_valid_email};

/// Current supported document version.
pub const SUPPORTED_VERSION: u32 = 1;

/// The demo data set shipped with the crate.
pub const BUILTIN_SEED_JSON: &str = include_str!("../fixtures/seed.json");

/// Parse the built-in demo seed.
///
/// # Errors
///
/// Returns [`SeedError`] only if the bundled fixture has been edited into an
/// invalid state.
pub fn builtin_seed() -> Result<SeedDocument, SeedError> {
    SeedDocument::from_json(BUILTIN_SEED_JSON)
}

/// A validated seed document.
///
/// # Example
///
/// ```
/// use mock_data::SeedDocument;
///
/// let json = r#"{
///     "version": 1,
///     "users": [
///         {"id": "1", "name": "Admin User", "email": "admin@example.com", "role": "admin"}
///     ],
///     "resources": [],
///     "assignments": []
/// }"#;
///
/// let seed = SeedDocument::from_json(json).expect("valid seed");
/// assert_eq!(seed.users()[0].email, "admin@example.com");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedDocument {
    version: u32,
    users: Vec<SeedUser>,
    resources: Vec<SeedResource>,
    assignments: Vec<SeedAssignment>,
}

impl SeedDocument {
    /// Parses and validates a seed document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError`] if the JSON is malformed, the version is
    /// unsupported, or the records violate a cross-record rule.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let raw: RawSeedDocument =
            serde_json::from_str(json).map_err(|e| SeedError::ParseError {
                message: e.to_string(),
            })?;
        Self::from_raw(raw)
    }

    /// Loads a seed document from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::IoError`] if the file cannot be read, otherwise
    /// any error [`SeedDocument::from_json`] reports.
    pub fn from_path(path: &Utf8Path) -> Result<Self, SeedError> {
        let io_error = |message: String| SeedError::IoError {
            path: path.to_path_buf(),
            message,
        };
        let file_name = path
            .file_name()
            .ok_or_else(|| io_error("seed path must name a file".to_owned()))?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };
        let dir = Dir::open_ambient_dir(parent, ambient_authority())
            .map_err(|e| io_error(e.to_string()))?;
        let contents = dir
            .read_to_string(file_name)
            .map_err(|e| io_error(e.to_string()))?;
        Self::from_json(&contents)
    }

    fn from_raw(raw: RawSeedDocument) -> Result<Self, SeedError> {
        if raw.version != SUPPORTED_VERSION {
            return Err(SeedError::UnsupportedVersion {
                expected: SUPPORTED_VERSION,
                actual: raw.version,
            });
        }
        if raw.users.is_empty() {
            return Err(SeedError::EmptyUsers);
        }

        let user_ids = validate_users(&raw.users)?;
        let resource_ids = validate_resources(&raw.resources)?;
        validate_assignments(&raw.assignments, &user_ids, &resource_ids)?;

        Ok(Self {
            version: raw.version,
            users: raw.users,
            resources: raw.resources,
            assignments: raw.assignments,
        })
    }

    /// Returns the document version.
    #[must_use]
    pub const fn version(&self) -> u32 {
        self.version
    }

    /// Returns the seeded users in document order.
    #[must_use]
    pub fn users(&self) -> &[SeedUser] {
        &self.users
    }

    /// Returns the seeded resources in document order.
    #[must_use]
    pub fn resources(&self) -> &[SeedResource] {
        &self.resources
    }

    /// Returns the seeded assignments in document order.
    #[must_use]
    pub fn assignments(&self) -> &[SeedAssignment] {
        &self.assignments
    }

    /// Consumes the document, yielding its three tables.
    #[must_use]
    pub fn into_parts(self) -> (Vec<SeedUser>, Vec<SeedResource>, Vec<SeedAssignment>) {
        (self.users, self.resources, self.assignments)
    }
}

fn require_text(
    entity: &'static str,
    index: usize,
    field: &'static str,
    value: &str,
) -> Result<(), SeedError> {
    if is_blank(value) {
        return Err(SeedError::BlankField {
            entity,
            index,
            field,
        });
    }
    Ok(())
}

fn validate_users(users: &[SeedUser]) -> Result<HashSet<&str>, SeedError> {
    let mut ids = HashSet::new();
    let mut emails = HashSet::new();
    for (index, user) in users.iter().enumerate() {
        require_text("user", index, "id", &user.id)?;
        require_text("user", index, "name", &user.name)?;
        if !is_valid_email(&user.email) {
            return Err(SeedError::InvalidEmail {
                index,
                value: user.email.clone(),
            });
        }
        if !ids.insert(user.id.as_str()) {
            return Err(SeedError::DuplicateId {
                entity: "user",
                id: user.id.clone(),
            });
        }
        if !emails.insert(user.email.as_str()) {
            return Err(SeedError::DuplicateEmail {
                email: user.email.clone(),
            });
        }
    }
    Ok(ids)
}

fn validate_resources(resources: &[SeedResource]) -> Result<HashSet<&str>, SeedError> {
    let mut ids = HashSet::new();
    for (index, resource) in resources.iter().enumerate() {
        require_text("resource", index, "id", &resource.id)?;
        require_text("resource", index, "title", &resource.title)?;
        require_text("resource", index, "description", &resource.description)?;
        require_text("resource", index, "type", &resource.kind)?;
        if resource.updated_at < resource.created_at {
            return Err(SeedError::UpdatedBeforeCreated {
                id: resource.id.clone(),
            });
        }
        if !ids.insert(resource.id.as_str()) {
            return Err(SeedError::DuplicateId {
                entity: "resource",
                id: resource.id.clone(),
            });
        }
    }
    Ok(ids)
}

fn validate_assignments(
    assignments: &[SeedAssignment],
    user_ids: &HashSet<&str>,
    resource_ids: &HashSet<&str>,
) -> Result<(), SeedError> {
    let mut ids = HashSet::new();
    let mut held = HashSet::new();
    for (index, assignment) in assignments.iter().enumerate() {
        require_text("assignment", index, "id", &assignment.id)?;
        if !ids.insert(assignment.id.as_str()) {
            return Err(SeedError::DuplicateId {
                entity: "assignment",
                id: assignment.id.clone(),
            });
        }
        if !user_ids.contains(assignment.user_id.as_str()) {
            return Err(SeedError::UnknownUser {
                assignment_id: assignment.id.clone(),
                user_id: assignment.user_id.clone(),
            });
        }
        if !resource_ids.contains(assignment.resource_id.as_str()) {
            return Err(SeedError::UnknownResource {
                assignment_id: assignment.id.clone(),
                resource_id: assignment.resource_id.clone(),
            });
        }
        if !held.insert(assignment.resource_id.as_str()) {
            return Err(SeedError::ResourceAssignedTwice {
                resource_id: assignment.resource_id.clone(),
            });
        }
    }
    Ok(())
}

/// Raw JSON representation for deserialization.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct RawSeedDocument {
    version: u32,
    users: Vec<SeedUser>,
    #[serde(default)]
    resources: Vec<SeedResource>,
    #[serde(default)]
    assignments: Vec<SeedAssignment>,
}
