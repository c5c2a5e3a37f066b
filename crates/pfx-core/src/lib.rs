//! # pfx-core
//!
//! Core value types shared by both post-processing profile schemas.
//!
//! This crate provides the small vocabulary that the legacy (schema 1) and
//! current (schema 2) profile models are built from:
//!
//! - [`Vector2`], [`Vector3`], [`Vector4`], [`Color`] - plain value types
//! - [`Keyframe`] and [`Curve`] - animation curves with Hermite evaluation
//! - [`TextureRef`], [`BakedTexture`], [`Texture`] - texture slots
//! - [`Param`] - a value paired with its override flag
//!
//! # Quick Start
//!
//! ```rust
//! use pfx_core::{Curve, Param};
//!
//! // Overridable parameter: writing through `set` marks it authoritative
//! let mut intensity = Param::new(0.0_f32);
//! assert!(!intensity.overridden());
//! intensity.set(1.5);
//! assert!(intensity.overridden());
//!
//! // Identity curve as initialized by the legacy editor
//! let curve = Curve::identity();
//! assert_eq!(curve.evaluate(0.25), 0.25);
//! ```
//!
//! # Dependencies
//!
//! - [`serde`] - every type round-trips through profile documents
//! - [`thiserror`] - error derive
//!
//! # Used By
//!
//! - `pfx-legacy` - legacy section settings
//! - `pfx-profile` - new effect settings
//! - `pfx-convert` - the conversion engine

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
mod math;
mod param;
pub mod curve;
pub mod texture;

pub use error::{CoreError, CoreResult};
pub use math::{Color, Vector2, Vector3, Vector4, REC709_LUMA_B, REC709_LUMA_G, REC709_LUMA_R, luminance_rec709};
pub use param::Param;
pub use curve::{Curve, Keyframe};
pub use texture::{BakedTexture, Texture, TextureRef};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::{Color, Curve, Keyframe, Param, Texture, TextureRef, Vector2, Vector3, Vector4};
}
