//! Error types for the author registry.

use thiserror::Error;

use crate::registry::AuthorKey;

/// Result type alias using `AuthorError`.
pub type Result<T> = std::result::Result<T, AuthorError>;

/// Errors raised by author-key parsing and registry validation.
///
/// The registry's read operations are infallible; these variants only occur
/// when resolving externally supplied key strings or when sanity-checking the
/// table itself.
#[derive(Error, Debug)]
pub enum AuthorError {
    /// A string key that does not name any registry entry.
    #[error("unknown author key: {key}")]
    UnknownKey { key: String },

    /// Two registry entries share a `personId`.
    #[error("duplicate personId in author registry: {person_id}")]
    DuplicatePersonId { person_id: String },

    /// A registry entry has an empty or whitespace-only display name.
    #[error("author entry `{key}` has a blank name")]
    BlankName { key: AuthorKey },

    /// The entry designated as the default article author is missing.
    #[error("author registry has no entry for the default key `{key}`")]
    MissingDefaultAuthor { key: AuthorKey },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_key_error() {
        let err = AuthorError::UnknownKey {
            key: "nobody".to_string(),
        };
        assert!(err.to_string().contains("unknown author key"));
        assert!(err.to_string().contains("nobody"));
    }

    #[test]
    fn test_duplicate_person_id_error() {
        let err = AuthorError::DuplicatePersonId {
            person_id: "https://example.com/people/x#person".to_string(),
        };
        assert!(err.to_string().contains("duplicate personId"));
        assert!(err.to_string().contains("people/x"));
    }

    #[test]
    fn test_blank_name_error() {
        let err = AuthorError::BlankName {
            key: AuthorKey::SamDonegan,
        };
        assert!(err.to_string().contains("blank name"));
        assert!(err.to_string().contains("samDonegan"));
    }
}
