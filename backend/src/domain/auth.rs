//! Login input validation.
//!
//! Login is a lookup by email. A password may be supplied by clients but is
//! never inspected, so it is not retained.

use thiserror::Error;

/// Domain error returned when login payload values are invalid.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginValidationError {
    /// Email was missing or blank once trimmed.
    #[error("Please enter an email address")]
    EmptyEmail,
}

/// Validated login request.
///
/// ## Invariants
/// - `email` is non-blank. It is kept exactly as supplied because the user
///   lookup is an exact, case-sensitive comparison.
///
/// # Examples
/// ```
/// use resource_desk::domain::LoginRequest;
///
/// let request = LoginRequest::try_from_parts("admin@example.com", Some("ignored")).unwrap();
/// assert_eq!(request.email(), "admin@example.com");
/// assert!(LoginRequest::try_from_parts("   ", None).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginRequest {
    email: String,
}

impl LoginRequest {
    /// Construct a login request from raw inputs.
    pub fn try_from_parts(
        email: &str,
        _password: Option<&str>,
    ) -> Result<Self, LoginValidationError> {
        if email.trim().is_empty() {
            return Err(LoginValidationError::EmptyEmail);
        }
        Ok(Self {
            email: email.to_owned(),
        })
    }

    /// Email to look up.
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}
