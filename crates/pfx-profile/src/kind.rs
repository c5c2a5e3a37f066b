//! Effect type tags.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies an effect type in a [`crate::Profile`].
///
/// A profile holds at most one entry per kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EffectKind {
    /// Ambient occlusion.
    AmbientOcclusion,
    /// Automatic exposure (eye adaptation).
    AutoExposure,
    /// Bloom and lens dirt.
    Bloom,
    /// Chromatic aberration.
    ChromaticAberration,
    /// Color grading.
    ColorGrading,
    /// Depth of field.
    DepthOfField,
    /// Film grain.
    Grain,
    /// Motion blur.
    MotionBlur,
    /// Screen-space reflections.
    ScreenSpaceReflections,
    /// Vignette.
    Vignette,
}

impl EffectKind {
    /// All effect kinds.
    pub const ALL: [EffectKind; 10] = [
        Self::AmbientOcclusion,
        Self::AutoExposure,
        Self::Bloom,
        Self::ChromaticAberration,
        Self::ColorGrading,
        Self::DepthOfField,
        Self::Grain,
        Self::MotionBlur,
        Self::ScreenSpaceReflections,
        Self::Vignette,
    ];

    /// Type name as written in profile documents.
    pub fn name(self) -> &'static str {
        match self {
            Self::AmbientOcclusion => "AmbientOcclusion",
            Self::AutoExposure => "AutoExposure",
            Self::Bloom => "Bloom",
            Self::ChromaticAberration => "ChromaticAberration",
            Self::ColorGrading => "ColorGrading",
            Self::DepthOfField => "DepthOfField",
            Self::Grain => "Grain",
            Self::MotionBlur => "MotionBlur",
            Self::ScreenSpaceReflections => "ScreenSpaceReflections",
            Self::Vignette => "Vignette",
        }
    }
}

impl fmt::Display for EffectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
