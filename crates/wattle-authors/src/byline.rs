//! UI-ready byline for the default article author.

use serde::{Deserialize, Serialize};

use crate::profile::AuthorProfile;

/// Display name used when the default profile has no usable name.
///
/// Deliberately an independent literal rather than a value read from the
/// registry, matching the site's behavior. It currently duplicates the
/// default entry's display name; a registry edit will not update it, so the
/// two must be kept in sync by hand.
pub const FALLBACK_AUTHOR_NAME: &str = "Dr Sam Donegan";

/// Placeholder image used when the default profile has no avatar.
pub const FALLBACK_AVATAR_URL: &str = "https://placehold.co/256x256?text=Wattle";

/// Byline fields for "whoever the default editorial author is", shaped for
/// direct rendering.
///
/// `name`, `avatar_url`, and `avatar_alt` are always populated via the
/// fallback chain; callers never null-check them. `role`, `credentials`, and
/// `bio` are verbatim passthroughs with no fallback and stay `None` when the
/// profile has no value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorByline {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    pub avatar_url: String,
    pub avatar_alt: String,
}

impl AuthorByline {
    /// Resolve a byline from a possibly-missing profile.
    ///
    /// The `Option` input keeps the defensive-lookup path explicit: the
    /// registry structurally guarantees the default entry exists today, but a
    /// future edit could remove it, and the byline must still render fully
    /// formed. Resolution order:
    ///
    /// 1. `name`: the profile's name when non-empty after trimming, else
    ///    [`FALLBACK_AUTHOR_NAME`];
    /// 2. `role`, `credentials`, `bio`: verbatim, no fallback;
    /// 3. `avatar_url`: the profile's value, else [`FALLBACK_AVATAR_URL`]
    ///    exactly (never a derived URL);
    /// 4. `avatar_alt`: the profile's value, else the resolved name — which
    ///    itself already bottoms out at [`FALLBACK_AUTHOR_NAME`].
    ///
    /// Total: never panics, never logs, never returns a partial shape.
    pub fn resolve(profile: Option<&AuthorProfile>) -> Self {
        let name = match profile {
            Some(p) if !p.name.trim().is_empty() => p.name.clone(),
            _ => FALLBACK_AUTHOR_NAME.to_string(),
        };

        let avatar_url = profile
            .and_then(|p| p.avatar_url.clone())
            .unwrap_or_else(|| FALLBACK_AVATAR_URL.to_string());

        let avatar_alt = profile
            .and_then(|p| p.avatar_alt.clone())
            .unwrap_or_else(|| name.clone());

        Self {
            name,
            role: profile.and_then(|p| p.role.clone()),
            credentials: profile.and_then(|p| p.credentials.clone()),
            bio: profile.and_then(|p| p.bio.clone()),
            avatar_url,
            avatar_alt,
        }
    }
}
