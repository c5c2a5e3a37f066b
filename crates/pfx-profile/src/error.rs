//! Error types for profile assembly.
//!
//! # Usage
//!
//! ```rust
//! use pfx_profile::{Bloom, EffectKind, Profile, ProfileError};
//!
//! let mut profile = Profile::new();
//! profile.insert(Bloom::default()).unwrap();
//! let err = profile.insert(Bloom::default()).unwrap_err();
//! assert!(matches!(err, ProfileError::DuplicateEffect { kind: EffectKind::Bloom }));
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Profile`] - insertion and deserialization
//! - `pfx-convert` - wrapped in `ConvertError::Profile`

use thiserror::Error;

use crate::EffectKind;

/// Result type alias using [`ProfileError`] as the error type.
pub type ProfileResult<T> = std::result::Result<T, ProfileError>;

/// Errors raised while assembling a [`crate::Profile`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileError {
    /// An entry of this effect type is already present.
    #[error("profile already contains a {kind} entry")]
    DuplicateEffect {
        /// Effect type inserted twice
        kind: EffectKind,
    },

    /// An entry is stored under a key that does not match its own type.
    #[error("entry stored as {expected} holds {found} settings")]
    KindMismatch {
        /// Key the entry was looked up by
        expected: EffectKind,
        /// Actual type of the entry
        found: EffectKind,
    },
}
