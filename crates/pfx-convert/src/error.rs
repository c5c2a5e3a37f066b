//! Error types for profile conversion.
//!
//! Converting a well-formed legacy profile along the direct path cannot
//! fail. Errors come from the legacy-LUT path, which depends on a
//! host-supplied [`crate::LutBaker`], and from profile assembly.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::Converter`] - conversion entry points
//! - `pfx-cli` - CPU baker implementation

use pfx_core::CoreError;
use pfx_profile::ProfileError;
use thiserror::Error;

/// Result type alias using [`ConvertError`] as the error type.
pub type ConvertResult<T> = std::result::Result<T, ConvertError>;

/// Errors raised during conversion.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// The legacy-LUT path was selected without a baker.
    #[error("legacy LUT color grading requires a LUT baker")]
    BakerUnavailable,

    /// The baker could not produce a lookup table.
    #[error("LUT bake failed: {reason}")]
    Bake {
        /// Failure description from the baker
        reason: String,
    },

    /// Profile assembly failed.
    #[error(transparent)]
    Profile(#[from] ProfileError),

    /// A baked texture could not be constructed.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl ConvertError {
    /// Creates a [`ConvertError::Bake`] error.
    pub fn bake(reason: impl Into<String>) -> Self {
        Self::Bake { reason: reason.into() }
    }
}
