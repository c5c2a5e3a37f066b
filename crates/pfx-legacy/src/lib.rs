//! # pfx-legacy
//!
//! The legacy post-processing profile schema (schema 1).
//!
//! A legacy profile is a fixed set of fourteen named sections. Every
//! section is a [`LegacySection`]: an `enabled` flag plus a settings record
//! specific to the effect. Unlike the current schema there are no per-field
//! override flags; a section is either on, with all of its settings, or off.
//!
//! The model is read-only input for the converter. Defaults reproduce the
//! values the legacy editor writes into a freshly created profile, so a
//! partial document deserializes to what the editor would have shown.
//!
//! # Example
//!
//! ```rust
//! use pfx_legacy::{LegacyEffect, LegacyProfile};
//!
//! let mut profile = LegacyProfile::default();
//! profile.bloom.enabled = true;
//! profile.bloom.settings.bloom.intensity = 1.2;
//!
//! assert!(profile.is_enabled(LegacyEffect::Bloom));
//! assert_eq!(profile.enabled_effects(), vec![LegacyEffect::Bloom]);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod profile;
pub mod color_grading;
pub mod effects;

pub use profile::{LegacyEffect, LegacyProfile, LegacySection};
pub use color_grading::{
    BasicSettings, ChannelMixerSettings, ColorGradingCurve, ColorGradingSettings, ColorWheelMode,
    ColorWheelsSettings, CurvesSettings, LinearWheelsSettings, LogWheelsSettings, Tonemapper,
    TonemappingSettings,
};
pub use effects::{
    AmbientOcclusionSettings, AntialiasingMethod, AntialiasingSettings, BloomSettings, BloomCore,
    ChromaticAberrationSettings, DepthOfFieldSettings, DitheringSettings, EyeAdaptationSettings,
    EyeAdaptationType, FogSettings, FxaaPreset, FxaaSettings, GrainSettings, KernelSize,
    LensDirtSettings, MotionBlurSettings, SampleCount, ScreenEdgeMask, SsrBlendType,
    SsrIntensitySettings, SsrReflectionSettings, SsrResolution, ScreenSpaceReflectionSettings,
    TaaSettings, UserLutSettings, VignetteMode, VignetteSettings,
};
