//! User directory entries.
//!
//! Users only come from seed data and are never mutated at runtime. The
//! email is the login key and is compared exactly, including case.

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use super::identifier::define_identifier;
use super::IdentifierValidationError;

define_identifier! {
    /// Stable user identifier.
    UserId
}

/// Validation errors returned by the user constructors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UserValidationError {
    /// The identifier was malformed.
    #[error("user id is invalid: {0}")]
    Id(#[from] IdentifierValidationError),
    /// The display name was blank once trimmed.
    #[error("display name must not be empty")]
    EmptyDisplayName,
    /// The email is not shaped like an address.
    #[error("email must look like name@domain")]
    InvalidEmail,
}

/// Human readable display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DisplayName(String);

impl DisplayName {
    /// Validate and construct a [`DisplayName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyDisplayName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for DisplayName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for DisplayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<DisplayName> for String {
    fn from(value: DisplayName) -> Self {
        value.0
    }
}

impl TryFrom<String> for DisplayName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Login email.
///
/// Equality is exact and case-sensitive; no normalisation is applied.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate and construct an [`Email`].
    ///
    /// # Examples
    /// ```
    /// use resource_desk::domain::Email;
    ///
    /// assert!(Email::new("admin@example.com").is_ok());
    /// assert!(Email::new("admin").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<Email> for String {
    fn from(value: Email) -> Self {
        value.0
    }
}

impl TryFrom<String> for Email {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Role controlling which pages and operations a user may reach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Manages resources and sees every user.
    Admin,
    /// Sees only the resources assigned to them.
    Employee,
}

/// Application user.
///
/// The serialised form is the record persisted in the identity slot:
/// `{id, name, email, role, avatar?}`.
///
/// # Examples
/// ```
/// use resource_desk::domain::{User, UserRole};
///
/// let user = User::try_from_strings("1", "Admin User", "admin@example.com", UserRole::Admin)
///     .expect("valid user");
/// assert!(user.is_admin());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[serde(try_from = "UserDto", into = "UserDto")]
pub struct User {
    #[schema(value_type = String, example = "2")]
    id: UserId,
    #[schema(value_type = String, example = "John Employee")]
    name: DisplayName,
    #[schema(value_type = String, example = "john@example.com")]
    email: Email,
    role: UserRole,
    avatar: Option<String>,
}

impl User {
    /// Build a user from validated components.
    pub fn new(id: UserId, name: DisplayName, email: Email, role: UserRole) -> Self {
        Self {
            id,
            name,
            email,
            role,
            avatar: None,
        }
    }

    /// Fallible constructor from raw strings.
    pub fn try_from_strings(
        id: &str,
        name: &str,
        email: &str,
        role: UserRole,
    ) -> Result<Self, UserValidationError> {
        Ok(Self::new(
            UserId::new(id)?,
            DisplayName::new(name)?,
            Email::new(email)?,
            role,
        ))
    }

    /// Attach an avatar URL; blank values clear it.
    pub fn with_avatar(mut self, avatar: Option<String>) -> Self {
        self.avatar = avatar.filter(|url| !url.trim().is_empty());
        self
    }

    /// Stable identifier.
    pub fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &DisplayName {
        &self.name
    }

    /// Login email.
    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Granted role.
    pub fn role(&self) -> UserRole {
        self.role
    }

    /// Avatar URL, if any.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar.as_deref()
    }

    /// Whether the user holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserDto {
    id: String,
    name: String,
    email: String,
    role: UserRole,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    avatar: Option<String>,
}

impl From<User> for UserDto {
    fn from(value: User) -> Self {
        Self {
            id: value.id.into(),
            name: value.name.into(),
            email: value.email.into(),
            role: value.role,
            avatar: value.avatar,
        }
    }
}

impl TryFrom<UserDto> for User {
    type Error = UserValidationError;

    fn try_from(value: UserDto) -> Result<Self, Self::Error> {
        let UserDto {
            id,
            name,
            email,
            role,
            avatar,
        } = value;
        Ok(Self::try_from_strings(&id, &name, &email, role)?.with_avatar(avatar))
    }
}
