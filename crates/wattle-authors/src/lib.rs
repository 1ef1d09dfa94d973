//! Wattle Authors
//!
//! Static author registry and byline defaults for the Wattle content site.
//! The registry is compiled-in, immutable, process-wide data; everything here
//! is a synchronous pure read, safe to call from any thread or task with no
//! locking.

pub mod byline;
pub mod error;
pub mod profile;
pub mod registry;

pub use byline::{AuthorByline, FALLBACK_AUTHOR_NAME, FALLBACK_AVATAR_URL};
pub use error::{AuthorError, Result};
pub use profile::{Affiliation, AuthorProfile, SocialLink};
pub use registry::{AuthorKey, AuthorRegistry, DEFAULT_AUTHOR_KEY};

/// The full profile for a specific named author.
pub fn author_profile(key: AuthorKey) -> &'static AuthorProfile {
    AuthorRegistry::shared().get(key)
}

/// The rendering-ready byline for the default editorial author.
///
/// Routes through the defensive lookup so the result is fully formed even if
/// the default entry ever goes missing from the table.
pub fn default_article_byline() -> AuthorByline {
    AuthorByline::resolve(AuthorRegistry::shared().lookup(DEFAULT_AUTHOR_KEY))
}

/// All author profiles in registry declaration order, as an owned snapshot.
pub fn all_authors() -> Vec<AuthorProfile> {
    AuthorRegistry::shared().authors()
}
