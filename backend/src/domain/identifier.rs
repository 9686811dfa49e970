//! String identifiers shared by users, resources, and assignments.
//!
//! Seeded records use short numeric strings (`"1"`, `"2"`); records created
//! at runtime receive random UUID v4 strings. Both forms are accepted as long
//! as the value is non-empty and carries no surrounding whitespace.

use thiserror::Error;

/// Validation errors for identifier newtypes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum IdentifierValidationError {
    /// The identifier was empty.
    #[error("identifier must not be empty")]
    Empty,
    /// The identifier had leading or trailing whitespace.
    #[error("identifier must not have surrounding whitespace")]
    SurroundingWhitespace,
}

pub(crate) fn validate_identifier(raw: &str) -> Result<(), IdentifierValidationError> {
    if raw.is_empty() {
        return Err(IdentifierValidationError::Empty);
    }
    if raw.trim() != raw {
        return Err(IdentifierValidationError::SurroundingWhitespace);
    }
    Ok(())
}

macro_rules! define_identifier {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Validate and construct the identifier.
            pub fn new(
                id: impl Into<String>,
            ) -> Result<Self, $crate::domain::IdentifierValidationError> {
                let id = id.into();
                $crate::domain::identifier::validate_identifier(&id)?;
                Ok(Self(id))
            }

            /// Generate a fresh random identifier.
            pub fn random() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            /// Borrow the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                self.0.as_str()
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl TryFrom<String> for $name {
            type Error = $crate::domain::IdentifierValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                Self::new(value)
            }
        }
    };
}

pub(crate) use define_identifier;

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    define_identifier! {
        /// Identifier used only by these tests.
        SampleId
    }

    #[rstest]
    #[case("1")]
    #[case("3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    fn accepts_seed_and_uuid_forms(#[case] raw: &str) {
        let id = SampleId::new(raw).expect("valid identifier");
        assert_eq!(id.as_str(), raw);
    }

    #[rstest]
    #[case("", IdentifierValidationError::Empty)]
    #[case(" 1", IdentifierValidationError::SurroundingWhitespace)]
    #[case("1\n", IdentifierValidationError::SurroundingWhitespace)]
    fn rejects_malformed_values(#[case] raw: &str, #[case] expected: IdentifierValidationError) {
        assert_eq!(SampleId::new(raw), Err(expected));
    }

    #[test]
    fn random_identifiers_differ() {
        assert_ne!(SampleId::random(), SampleId::random());
    }

    #[test]
    fn serde_rejects_blank_identifier() {
        let result = serde_json::from_str::<SampleId>("\"\"");
        assert!(result.is_err());
    }
}
