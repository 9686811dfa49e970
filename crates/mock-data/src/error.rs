//! Error types for the mock-data crate.

use camino::Utf8PathBuf;
use thiserror::Error;

/// Errors raised while loading or validating a seed document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file at '{path}': {message}")]
    IoError {
        /// Path to the seed file.
        path: Utf8PathBuf,
        /// Description of the I/O error.
        message: String,
    },

    /// The seed JSON is malformed or missing required fields.
    #[error("invalid seed JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// The document version is not supported.
    #[error("unsupported seed version: expected {expected}, found {actual}")]
    UnsupportedVersion {
        /// Expected version number.
        expected: u32,
        /// Version found in the document.
        actual: u32,
    },

    /// The document defines no users, so nobody could log in.
    #[error("seed contains no users")]
    EmptyUsers,

    /// A required text field is blank once trimmed.
    #[error("{entity} at index {index} has a blank {field}")]
    BlankField {
        /// Record kind (`user`, `resource`, `assignment`).
        entity: &'static str,
        /// Index of the record in its array.
        index: usize,
        /// Name of the blank field.
        field: &'static str,
    },

    /// Two records of the same kind share an identifier.
    #[error("duplicate {entity} id '{id}'")]
    DuplicateId {
        /// Record kind.
        entity: &'static str,
        /// The repeated identifier.
        id: String,
    },

    /// A user email does not look like an email address.
    #[error("user at index {index} has an invalid email: {value}")]
    InvalidEmail {
        /// Index of the user in the array.
        index: usize,
        /// The rejected value.
        value: String,
    },

    /// Two users share a login email.
    #[error("duplicate user email '{email}'")]
    DuplicateEmail {
        /// The repeated email.
        email: String,
    },

    /// A resource claims to have been updated before it was created.
    #[error("resource '{id}' was updated before it was created")]
    UpdatedBeforeCreated {
        /// Offending resource id.
        id: String,
    },

    /// An assignment references a user that is not in the document.
    #[error("assignment '{assignment_id}' references unknown user '{user_id}'")]
    UnknownUser {
        /// Offending assignment id.
        assignment_id: String,
        /// Missing user id.
        user_id: String,
    },

    /// An assignment references a resource that is not in the document.
    #[error("assignment '{assignment_id}' references unknown resource '{resource_id}'")]
    UnknownResource {
        /// Offending assignment id.
        assignment_id: String,
        /// Missing resource id.
        resource_id: String,
    },

    /// More than one assignment exists for the same resource.
    #[error("resource '{resource_id}' is assigned more than once")]
    ResourceAssignedTwice {
        /// Resource with several assignments.
        resource_id: String,
    },
}
