//! The legacy profile document and its section wrapper.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::color_grading::ColorGradingSettings;
use crate::effects::*;

/// An effect section: on/off switch plus settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LegacySection<T> {
    /// Whether the effect renders.
    pub enabled: bool,
    /// Effect parameters, kept even while disabled.
    pub settings: T,
}

impl<T> LegacySection<T> {
    /// Creates an enabled section.
    pub fn enabled(settings: T) -> Self {
        Self { enabled: true, settings }
    }
}

/// Legacy section names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LegacyEffect {
    /// Anti-aliasing.
    Antialiasing,
    /// Ambient occlusion.
    AmbientOcclusion,
    /// Bloom.
    Bloom,
    /// Chromatic aberration.
    ChromaticAberration,
    /// Color grading.
    ColorGrading,
    /// Depth of field.
    DepthOfField,
    /// Dithering.
    Dithering,
    /// Eye adaptation.
    EyeAdaptation,
    /// Fog.
    Fog,
    /// Film grain.
    Grain,
    /// Motion blur.
    MotionBlur,
    /// Screen-space reflection.
    ScreenSpaceReflection,
    /// User lookup table.
    UserLut,
    /// Vignette.
    Vignette,
}

impl LegacyEffect {
    /// All sections in document order.
    pub const ALL: [LegacyEffect; 14] = [
        Self::Antialiasing,
        Self::AmbientOcclusion,
        Self::Bloom,
        Self::ChromaticAberration,
        Self::ColorGrading,
        Self::DepthOfField,
        Self::Dithering,
        Self::EyeAdaptation,
        Self::Fog,
        Self::Grain,
        Self::MotionBlur,
        Self::ScreenSpaceReflection,
        Self::UserLut,
        Self::Vignette,
    ];

    /// Document key of the section.
    pub fn key(self) -> &'static str {
        match self {
            Self::Antialiasing => "antialiasing",
            Self::AmbientOcclusion => "ambientOcclusion",
            Self::Bloom => "bloom",
            Self::ChromaticAberration => "chromaticAberration",
            Self::ColorGrading => "colorGrading",
            Self::DepthOfField => "depthOfField",
            Self::Dithering => "dithering",
            Self::EyeAdaptation => "eyeAdaptation",
            Self::Fog => "fog",
            Self::Grain => "grain",
            Self::MotionBlur => "motionBlur",
            Self::ScreenSpaceReflection => "screenSpaceReflection",
            Self::UserLut => "userLut",
            Self::Vignette => "vignette",
        }
    }
}

impl fmt::Display for LegacyEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A complete legacy profile.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LegacyProfile {
    /// Anti-aliasing.
    pub antialiasing: LegacySection<AntialiasingSettings>,
    /// Ambient occlusion.
    pub ambient_occlusion: LegacySection<AmbientOcclusionSettings>,
    /// Bloom.
    pub bloom: LegacySection<BloomSettings>,
    /// Chromatic aberration.
    pub chromatic_aberration: LegacySection<ChromaticAberrationSettings>,
    /// Color grading.
    pub color_grading: LegacySection<ColorGradingSettings>,
    /// Depth of field.
    pub depth_of_field: LegacySection<DepthOfFieldSettings>,
    /// Dithering.
    pub dithering: LegacySection<DitheringSettings>,
    /// Eye adaptation.
    pub eye_adaptation: LegacySection<EyeAdaptationSettings>,
    /// Fog.
    pub fog: LegacySection<FogSettings>,
    /// Film grain.
    pub grain: LegacySection<GrainSettings>,
    /// Motion blur.
    pub motion_blur: LegacySection<MotionBlurSettings>,
    /// Screen-space reflection.
    pub screen_space_reflection: LegacySection<ScreenSpaceReflectionSettings>,
    /// User lookup table.
    pub user_lut: LegacySection<UserLutSettings>,
    /// Vignette.
    pub vignette: LegacySection<VignetteSettings>,
}

impl LegacyProfile {
    /// Returns the `enabled` flag of a section.
    pub fn is_enabled(&self, effect: LegacyEffect) -> bool {
        match effect {
            LegacyEffect::Antialiasing => self.antialiasing.enabled,
            LegacyEffect::AmbientOcclusion => self.ambient_occlusion.enabled,
            LegacyEffect::Bloom => self.bloom.enabled,
            LegacyEffect::ChromaticAberration => self.chromatic_aberration.enabled,
            LegacyEffect::ColorGrading => self.color_grading.enabled,
            LegacyEffect::DepthOfField => self.depth_of_field.enabled,
            LegacyEffect::Dithering => self.dithering.enabled,
            LegacyEffect::EyeAdaptation => self.eye_adaptation.enabled,
            LegacyEffect::Fog => self.fog.enabled,
            LegacyEffect::Grain => self.grain.enabled,
            LegacyEffect::MotionBlur => self.motion_blur.enabled,
            LegacyEffect::ScreenSpaceReflection => self.screen_space_reflection.enabled,
            LegacyEffect::UserLut => self.user_lut.enabled,
            LegacyEffect::Vignette => self.vignette.enabled,
        }
    }

    /// Enabled sections in document order.
    pub fn enabled_effects(&self) -> Vec<LegacyEffect> {
        LegacyEffect::ALL.into_iter().filter(|&e| self.is_enabled(e)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_profile_has_nothing_enabled() {
        assert!(LegacyProfile::default().enabled_effects().is_empty());
    }

    #[test]
    fn section_keys_match_document() {
        let yaml = "motionBlur:\n  enabled: true\n  settings:\n    shutterAngle: 180.0\nfog:\n  enabled: true\n";
        let p: LegacyProfile = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(p.enabled_effects(), vec![LegacyEffect::Fog, LegacyEffect::MotionBlur]);
        assert_eq!(p.motion_blur.settings.shutter_angle, 180.0);
        assert_eq!(p.motion_blur.settings.sample_count, 10);
        assert!(p.fog.settings.exclude_skybox);
    }

    #[test]
    fn display_uses_document_key() {
        assert_eq!(LegacyEffect::ScreenSpaceReflection.to_string(), "screenSpaceReflection");
    }
}
