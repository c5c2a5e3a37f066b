//! # pfx-convert
//!
//! Converts legacy (schema 1) post-processing profiles into current
//! (schema 2) ones.
//!
//! Conversion is a single pass over the legacy sections. Each enabled
//! section with a destination goes through its converter in
//! [`converters`]; enum values go through the tables in [`mapping`]; the
//! color grading section takes one of two paths chosen by
//! [`ConvertOptions`]. Anti-aliasing, dithering and fog are never
//! converted.
//!
//! Every field a converter writes carries its override flag. Fields with no
//! legacy source are listed per converter and surface in the
//! [`ConversionReport`].
//!
//! # Quick Start
//!
//! ```rust
//! use pfx_legacy::LegacyProfile;
//! use pfx_profile::{AmbientOcclusion, EffectKind};
//!
//! let mut legacy = LegacyProfile::default();
//! legacy.ambient_occlusion.enabled = true;
//! legacy.ambient_occlusion.settings.intensity = 1.0;
//! legacy.fog.enabled = true;
//!
//! let profile = pfx_convert::convert(&legacy).unwrap();
//! assert_eq!(profile.len(), 1);
//! let ao = profile.settings::<AmbientOcclusion>().unwrap();
//! assert_eq!(ao.intensity.get(), 0.5);
//! ```
//!
//! # Legacy LUT path
//!
//! [`ColorGradingPath::LegacyLut`] bakes the legacy grading into a lookup
//! table through a host-supplied [`LutBaker`] instead of translating its
//! fields. Selecting it without a baker fails with
//! [`ConvertError::BakerUnavailable`].
//!
//! # Dependencies
//!
//! - `pfx-legacy`, `pfx-profile` - source and target models
//! - [`tracing`] - per-effect diagnostics
//! - [`thiserror`] - error derive
//!
//! # Used By
//!
//! - `pfx-cli` - the `pfx convert` command

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod baker;
mod converter;
mod error;
mod options;
mod report;
pub mod converters;
pub mod curves;
pub mod mapping;

pub use baker::LutBaker;
pub use converter::{convert, Converter, EXCLUDED, USER_LUT_UNSUPPORTED};
pub use error::{ConvertError, ConvertResult};
pub use options::{ColorGradingPath, ConvertOptions};
pub use report::{ConversionReport, DroppedFields, UnmappedValue};
