//! Author profile records.

use serde::{Deserialize, Serialize};

/// One external profile link (e.g. LinkedIn, ORCID).
///
/// Order within a profile's `same_as` list is display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    /// Human-readable link label.
    pub label: String,
    /// Link target.
    pub href: String,
}

/// A single organisational affiliation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Affiliation {
    /// Organisation name.
    pub name: String,
    /// Organisation URL.
    pub url: String,
}

/// The full record for one person creditable as an article author.
///
/// `person_id` and `name` are always present; every other field is optional,
/// and absence means "not provided", never an error. Consumers fall back to
/// their own defaults for absent fields. Serialized field names are camelCase
/// to match the site's JSON shape (`personId`, `avatarUrl`, `sameAs`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthorProfile {
    /// Stable unique identifier for the person, unique across the registry.
    pub person_id: String,

    /// Display name.
    pub name: String,

    /// Canonical profile URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Title such as "Dr".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honorific_prefix: Option<String>,

    /// Free-text qualifications.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,

    /// Free-text role or position description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,

    /// Biography paragraph.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    /// One organisational affiliation (single-valued, not a list).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<Affiliation>,

    /// External profile links in display order. Empty means "not provided".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub same_as: Vec<SocialLink>,

    /// Avatar image URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    /// Accessibility text for the avatar.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_alt: Option<String>,

    /// Topic tags in display order. Empty means "not provided".
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub knows_about: Vec<String>,

    /// Professional registration identifier (free text).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub registration_number: Option<String>,
}

impl AuthorProfile {
    /// Create a profile with only the required fields set.
    ///
    /// Registry entries extend this with struct-update syntax, keeping
    /// `person_id` and `name` non-optional at construction.
    pub fn new(person_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            person_id: person_id.into(),
            name: name.into(),
            url: None,
            honorific_prefix: None,
            credentials: None,
            role: None,
            bio: None,
            affiliation: None,
            same_as: Vec::new(),
            avatar_url: None,
            avatar_alt: None,
            knows_about: Vec::new(),
            registration_number: None,
        }
    }
}
