//! Value checks shared by seed validation.
//!
//! The email rule matches the backend's `Email` type in
//! `backend/src/domain/user.rs`: one `@`, non-empty local and domain parts,
//! and no whitespace anywhere.

/// Returns `true` when `value` is shaped like an email address.
///
/// # Examples
///
/// ```
/// use mock_data::is_valid_email;
///
/// assert!(is_valid_email("admin@example.com"));
/// assert!(!is_valid_email("admin"));
/// assert!(!is_valid_email("a@b@c"));
/// assert!(!is_valid_email("john doe@example.com"));
/// ```
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(local), Some(domain), None) => !local.is_empty() && !domain.is_empty(),
        _ => false,
    }
}

pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("jane@example.com", true)]
    #[case("x@y", true)]
    #[case("", false)]
    #[case("@example.com", false)]
    #[case("jane@", false)]
    #[case("jane@example.com ", false)]
    fn email_shape(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_valid_email(value), expected);
    }

    #[rstest]
    #[case("", true)]
    #[case("   ", true)]
    #[case(" a ", false)]
    fn blank_detection(#[case] value: &str, #[case] expected: bool) {
        assert_eq!(is_blank(value), expected);
    }
}
