//! The static author registry.
//!
//! The registry is compiled-in reference data: a fixed, insertion-ordered
//! table built once on first access and never mutated afterwards. It is not a
//! cache and has no invalidation or teardown. All reads are pure, so any
//! number of threads may call into it without coordination.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::{AuthorError, Result};
use crate::profile::{Affiliation, AuthorProfile, SocialLink};

/// Closed set of valid registry keys.
///
/// Invalid keys are unrepresentable: keyed access has no "not found" failure
/// mode by construction. The serialized/string form of each key is the site's
/// camelCase token (e.g. `"samDonegan"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthorKey {
    SamDonegan,
    JunKaiChang,
    JuliaPonder,
}

impl AuthorKey {
    /// All keys in registry declaration order.
    pub const ALL: [Self; 3] = [Self::SamDonegan, Self::JunKaiChang, Self::JuliaPonder];

    /// The camelCase token used in routes and serialized payloads.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::SamDonegan => "samDonegan",
            Self::JunKaiChang => "junKaiChang",
            Self::JuliaPonder => "juliaPonder",
        }
    }
}

impl fmt::Display for AuthorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuthorKey {
    type Err = AuthorError;

    /// Parse an externally supplied key token.
    ///
    /// An unknown token is a contract violation by the caller and fails
    /// loudly; it must never flow into rendering as a silent "no author".
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "samDonegan" => Ok(Self::SamDonegan),
            "junKaiChang" => Ok(Self::JunKaiChang),
            "juliaPonder" => Ok(Self::JuliaPonder),
            other => Err(AuthorError::UnknownKey {
                key: other.to_string(),
            }),
        }
    }
}

/// The registry entry used when an article does not credit a specific author.
pub const DEFAULT_AUTHOR_KEY: AuthorKey = AuthorKey::SamDonegan;

static REGISTRY: Lazy<AuthorRegistry> = Lazy::new(AuthorRegistry::site_default);

/// Immutable mapping from [`AuthorKey`] to [`AuthorProfile`].
///
/// Iteration order equals declaration order. The registry exclusively owns
/// the canonical data; no mutating access is exposed.
#[derive(Debug)]
pub struct AuthorRegistry {
    entries: IndexMap<AuthorKey, AuthorProfile>,
}

impl AuthorRegistry {
    /// The process-wide registry, built on first access.
    pub fn shared() -> &'static Self {
        &REGISTRY
    }

    fn site_default() -> Self {
        let mut entries = IndexMap::new();
        entries.insert(AuthorKey::SamDonegan, sam_donegan());
        entries.insert(AuthorKey::JunKaiChang, jun_kai_chang());
        entries.insert(AuthorKey::JuliaPonder, julia_ponder());
        Self { entries }
    }

    /// Defensive lookup returning `None` on a miss.
    ///
    /// Every `AuthorKey` variant is inserted at construction, so callers that
    /// hold a key may use [`AuthorRegistry::get`] instead; the byline
    /// resolution path routes through this deliberately, as a hedge against a
    /// future edit removing the default entry without updating
    /// [`DEFAULT_AUTHOR_KEY`].
    pub fn lookup(&self, key: AuthorKey) -> Option<&AuthorProfile> {
        self.entries.get(&key)
    }

    /// The profile stored under `key`.
    ///
    /// # Panics
    ///
    /// Panics if the table and the key enum have drifted apart, which only a
    /// registry edit can cause.
    pub fn get(&self, key: AuthorKey) -> &AuthorProfile {
        match self.lookup(key) {
            Some(profile) => profile,
            None => panic!("author registry has no entry for key `{key}`"),
        }
    }

    /// Snapshot of all profiles in declaration order.
    ///
    /// Returns owned clones so callers can never write back into the
    /// registry through the result.
    pub fn authors(&self) -> Vec<AuthorProfile> {
        self.entries.values().cloned().collect()
    }

    /// Number of registry entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sanity-check the table contents.
    ///
    /// Fails on a missing default entry, a blank display name, or a
    /// `personId` shared by two entries. Duplicate social links within one
    /// profile are only warned about; display code tolerates them.
    pub fn validate(&self) -> Result<()> {
        if self.lookup(DEFAULT_AUTHOR_KEY).is_none() {
            return Err(AuthorError::MissingDefaultAuthor {
                key: DEFAULT_AUTHOR_KEY,
            });
        }

        let mut seen: HashMap<&str, AuthorKey> = HashMap::new();
        for (key, profile) in &self.entries {
            if profile.name.trim().is_empty() {
                return Err(AuthorError::BlankName { key: *key });
            }

            if seen.insert(profile.person_id.as_str(), *key).is_some() {
                return Err(AuthorError::DuplicatePersonId {
                    person_id: profile.person_id.clone(),
                });
            }

            let mut hrefs: Vec<&str> = Vec::new();
            for link in &profile.same_as {
                if hrefs.contains(&link.href.as_str()) {
                    tracing::warn!(author = %key, href = %link.href, "duplicate social link on author profile");
                }
                hrefs.push(link.href.as_str());
            }
        }

        Ok(())
    }
}

fn sam_donegan() -> AuthorProfile {
    AuthorProfile {
        url: Some("https://wattleai.org.au/people/sam-donegan".to_string()),
        honorific_prefix: Some("Dr".to_string()),
        credentials: Some("MBBS, FRACGP".to_string()),
        role: Some("Clinical Director, Wattle AI Collective".to_string()),
        bio: Some(
            "Sam is a practising GP and leads Wattle's clinical editorial programme, \
             reviewing every health-adjacent article for accuracy before publication. \
             Their work focuses on safe, evidence-based adoption of AI tools in \
             Australian primary care."
                .to_string(),
        ),
        affiliation: Some(Affiliation {
            name: "Wattle AI Collective".to_string(),
            url: "https://wattleai.org.au".to_string(),
        }),
        same_as: vec![
            SocialLink {
                label: "LinkedIn".to_string(),
                href: "https://www.linkedin.com/in/sam-donegan".to_string(),
            },
            SocialLink {
                label: "ORCID".to_string(),
                href: "https://orcid.org/0000-0002-4418-391X".to_string(),
            },
        ],
        avatar_url: Some("https://wattleai.org.au/images/people/sam-donegan.jpg".to_string()),
        avatar_alt: Some("Portrait of Dr Sam Donegan".to_string()),
        knows_about: vec![
            "Clinical decision support".to_string(),
            "AI safety in primary care".to_string(),
            "Digital health policy".to_string(),
        ],
        registration_number: Some("MED0002418391".to_string()),
        ..AuthorProfile::new(
            "https://wattleai.org.au/people/sam-donegan#person",
            "Dr Sam Donegan",
        )
    }
}

fn jun_kai_chang() -> AuthorProfile {
    AuthorProfile {
        url: Some("https://wattleai.org.au/people/jun-kai-chang".to_string()),
        role: Some("Machine Learning Engineer".to_string()),
        bio: Some(
            "Jun Kai builds the evaluation tooling behind Wattle's model write-ups and \
             contributes the technical deep-dives in the article series."
                .to_string(),
        ),
        affiliation: Some(Affiliation {
            name: "Wattle AI Collective".to_string(),
            url: "https://wattleai.org.au".to_string(),
        }),
        same_as: vec![SocialLink {
            label: "GitHub".to_string(),
            href: "https://github.com/junkaichang".to_string(),
        }],
        avatar_url: Some("https://wattleai.org.au/images/people/jun-kai-chang.jpg".to_string()),
        avatar_alt: Some("Portrait of Jun Kai Chang".to_string()),
        knows_about: vec![
            "Model evaluation".to_string(),
            "Retrieval-augmented generation".to_string(),
        ],
        ..AuthorProfile::new(
            "https://wattleai.org.au/people/jun-kai-chang#person",
            "Jun Kai Chang",
        )
    }
}

fn julia_ponder() -> AuthorProfile {
    AuthorProfile {
        url: Some("https://wattleai.org.au/people/julia-ponder".to_string()),
        role: Some("Community and Education Lead".to_string()),
        bio: Some(
            "Julia runs Wattle's workshop programme and writes the practical guides \
             aimed at small organisations adopting AI for the first time."
                .to_string(),
        ),
        same_as: vec![SocialLink {
            label: "LinkedIn".to_string(),
            href: "https://www.linkedin.com/in/julia-ponder".to_string(),
        }],
        knows_about: vec!["AI literacy".to_string(), "Community education".to_string()],
        ..AuthorProfile::new(
            "https://wattleai.org.au/people/julia-ponder#person",
            "Julia Ponder",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_key_has_an_entry() {
        let registry = AuthorRegistry::shared();
        for key in AuthorKey::ALL {
            assert!(registry.lookup(key).is_some(), "missing entry for {key}");
        }
        assert_eq!(registry.len(), AuthorKey::ALL.len());
        assert!(!registry.is_empty());
    }

    #[test]
    fn test_person_ids_are_unique() {
        let registry = AuthorRegistry::shared();
        for a in AuthorKey::ALL {
            for b in AuthorKey::ALL {
                if a != b {
                    assert_ne!(registry.get(a).person_id, registry.get(b).person_id);
                }
            }
        }
    }

    #[test]
    fn test_declaration_order_matches_key_order() {
        let authors = AuthorRegistry::shared().authors();
        let expected: Vec<&str> = AuthorKey::ALL
            .iter()
            .map(|key| AuthorRegistry::shared().get(*key).person_id.as_str())
            .collect();
        let actual: Vec<&str> = authors.iter().map(|p| p.person_id.as_str()).collect();
        assert_eq!(actual, expected);
    }

    #[test]
    fn test_authors_returns_independent_snapshots() {
        let mut first = AuthorRegistry::shared().authors();
        first.clear();
        let second = AuthorRegistry::shared().authors();
        assert_eq!(second.len(), AuthorKey::ALL.len());
    }

    #[test]
    fn test_key_token_round_trip() {
        for key in AuthorKey::ALL {
            let parsed: AuthorKey = key.as_str().parse().expect("parse key token");
            assert_eq!(parsed, key);
            assert_eq!(key.to_string(), key.as_str());
        }
    }

    #[test]
    fn test_unknown_key_token_fails_loudly() {
        let err = "drSamDonegan".parse::<AuthorKey>().expect_err("must fail");
        assert!(err.to_string().contains("drSamDonegan"));
    }

    #[test]
    fn test_key_serializes_to_camel_case_token() {
        let json = serde_json::to_string(&AuthorKey::SamDonegan).expect("serialize key");
        assert_eq!(json, "\"samDonegan\"");
        let key: AuthorKey = serde_json::from_str("\"juliaPonder\"").expect("deserialize key");
        assert_eq!(key, AuthorKey::JuliaPonder);
    }

    #[test]
    fn test_site_registry_validates() {
        AuthorRegistry::shared().validate().expect("valid registry");
    }

    #[test]
    fn test_validate_rejects_blank_name() {
        let mut entries = IndexMap::new();
        entries.insert(AuthorKey::SamDonegan, AuthorProfile::new("p1", "   "));
        let registry = AuthorRegistry { entries };

        let err = registry.validate().expect_err("blank name must fail");
        assert!(matches!(err, AuthorError::BlankName { .. }));
    }

    #[test]
    fn test_validate_rejects_duplicate_person_id() {
        let mut entries = IndexMap::new();
        entries.insert(AuthorKey::SamDonegan, AuthorProfile::new("p1", "A"));
        entries.insert(AuthorKey::JunKaiChang, AuthorProfile::new("p1", "B"));
        let registry = AuthorRegistry { entries };

        let err = registry.validate().expect_err("duplicate id must fail");
        assert!(matches!(err, AuthorError::DuplicatePersonId { .. }));
    }

    #[test]
    fn test_validate_rejects_missing_default_entry() {
        let mut entries = IndexMap::new();
        entries.insert(AuthorKey::JuliaPonder, AuthorProfile::new("p1", "Julia"));
        let registry = AuthorRegistry { entries };

        let err = registry.validate().expect_err("missing default must fail");
        assert!(matches!(err, AuthorError::MissingDefaultAuthor { .. }));
    }
}
