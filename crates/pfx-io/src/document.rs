//! Document envelope.

use pfx_legacy::LegacyProfile;
use pfx_profile::Profile;
use serde::{Deserialize, Serialize};

/// Schema number of legacy profile documents.
pub const LEGACY_SCHEMA: u32 = 1;

/// Schema number of current profile documents.
pub const PROFILE_SCHEMA: u32 = 2;

/// A profile document: schema number, display name and body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document<T> {
    /// Schema number of `profile`.
    pub schema: u32,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Profile body.
    pub profile: T,
}

/// A legacy profile document.
pub type LegacyDocument = Document<LegacyProfile>;

/// A current profile document.
pub type ProfileDocument = Document<Profile>;

impl LegacyDocument {
    /// Wraps a legacy profile.
    pub fn legacy(name: impl Into<String>, profile: LegacyProfile) -> Self {
        Self {
            schema: LEGACY_SCHEMA,
            name: name.into(),
            profile,
        }
    }
}

impl ProfileDocument {
    /// Wraps a current profile.
    pub fn current(name: impl Into<String>, profile: Profile) -> Self {
        Self {
            schema: PROFILE_SCHEMA,
            name: name.into(),
            profile,
        }
    }
}

/// Reads only the `schema` key; everything else is skipped.
#[derive(Debug, Deserialize)]
pub(crate) struct SchemaProbe {
    #[serde(default)]
    pub schema: Option<u32>,
}
