//! # pfx-profile
//!
//! The current post-processing profile schema (schema 2).
//!
//! A [`Profile`] is an open collection of effect entries keyed by
//! [`EffectKind`]; each kind appears at most once and the rule is enforced
//! by [`Profile::insert`] as well as when a profile is decoded. Every field
//! of every entry is a [`pfx_core::Param`], carrying its own override flag.
//!
//! # Quick Start
//!
//! ```rust
//! use pfx_profile::{Bloom, EffectSettings, Profile};
//!
//! let mut bloom = Bloom::default();
//! bloom.intensity.set(1.5);
//!
//! let mut profile = Profile::new();
//! profile.insert(bloom).unwrap();
//!
//! let bloom = profile.settings::<Bloom>().unwrap();
//! assert_eq!(bloom.overridden_fields(), vec!["intensity"]);
//! ```
//!
//! # Dependencies
//!
//! - `pfx-core` - [`pfx_core::Param`], curves, textures
//! - [`serde`] - document encoding
//! - [`thiserror`] - error derive
//!
//! # Used By
//!
//! - `pfx-convert` - conversion target
//! - `pfx-io` - document persistence

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod kind;
mod profile;
mod spline;
pub mod effects;

pub use effects::{
    AmbientOcclusion, AmbientOcclusionMode, AmbientOcclusionQuality, AutoExposure, Bloom,
    ChromaticAberration, ColorGrading, DepthOfField, Effect, EffectSettings, EyeAdaptation, Grain,
    GradingMode, KernelSize, MotionBlur, ScreenSpaceReflectionPreset,
    ScreenSpaceReflectionResolution, ScreenSpaceReflections, Tonemapper, Vignette, VignetteMode,
};
pub use error::{ProfileError, ProfileResult};
pub use kind::EffectKind;
pub use profile::Profile;
pub use spline::Spline;
