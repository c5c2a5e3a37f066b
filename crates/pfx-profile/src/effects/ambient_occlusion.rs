//! Ambient occlusion settings.

use pfx_core::{Color, Param};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Occlusion technique.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmbientOcclusionMode {
    /// Scalable ambient obscurance, the variant the legacy renderer used.
    ScalableAmbientObscurance,
    /// Multi-scale volumetric obscurance.
    #[default]
    MultiScaleVolumetricObscurance,
}

/// Sample quality of [`AmbientOcclusionMode::ScalableAmbientObscurance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AmbientOcclusionQuality {
    /// 4 samples.
    Lowest,
    /// 6 samples.
    Low,
    /// 10 samples.
    #[default]
    Medium,
    /// 16 samples.
    High,
    /// 20 samples.
    Ultra,
}

/// Ambient occlusion.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmbientOcclusion {
    /// Technique.
    pub mode: Param<AmbientOcclusionMode>,
    /// Darkness.
    pub intensity: Param<f32>,
    /// Occlusion tint.
    pub color: Param<Color>,
    /// Apply only to ambient lighting.
    pub ambient_only: Param<bool>,
    /// Volumetric: noise filter tolerance.
    pub noise_filter_tolerance: Param<f32>,
    /// Volumetric: blur tolerance.
    pub blur_tolerance: Param<f32>,
    /// Volumetric: upsample tolerance.
    pub upsample_tolerance: Param<f32>,
    /// Volumetric: assumed object thickness.
    pub thickness_modifier: Param<f32>,
    /// Volumetric: share of direct lighting affected.
    pub direct_lighting_strength: Param<f32>,
    /// Scalable: sample radius.
    pub radius: Param<f32>,
    /// Scalable: sample count.
    pub quality: Param<AmbientOcclusionQuality>,
}

impl Default for AmbientOcclusion {
    fn default() -> Self {
        Self {
            mode: Param::new(AmbientOcclusionMode::MultiScaleVolumetricObscurance),
            intensity: Param::new(0.0),
            color: Param::new(Color::BLACK),
            ambient_only: Param::new(true),
            noise_filter_tolerance: Param::new(0.0),
            blur_tolerance: Param::new(-4.6),
            upsample_tolerance: Param::new(-12.0),
            thickness_modifier: Param::new(1.0),
            direct_lighting_strength: Param::new(0.0),
            radius: Param::new(0.25),
            quality: Param::new(AmbientOcclusionQuality::Medium),
        }
    }
}

impl From<AmbientOcclusion> for Effect {
    fn from(settings: AmbientOcclusion) -> Self {
        Effect::AmbientOcclusion(settings)
    }
}

impl EffectSettings for AmbientOcclusion {
    const KIND: EffectKind = EffectKind::AmbientOcclusion;

    fn set_all_overrides(&mut self, state: bool) {
        self.mode.set_override(state);
        self.intensity.set_override(state);
        self.color.set_override(state);
        self.ambient_only.set_override(state);
        self.noise_filter_tolerance.set_override(state);
        self.blur_tolerance.set_override(state);
        self.upsample_tolerance.set_override(state);
        self.thickness_modifier.set_override(state);
        self.direct_lighting_strength.set_override(state);
        self.radius.set_override(state);
        self.quality.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("mode", self.mode.overridden()),
            ("intensity", self.intensity.overridden()),
            ("color", self.color.overridden()),
            ("ambientOnly", self.ambient_only.overridden()),
            ("noiseFilterTolerance", self.noise_filter_tolerance.overridden()),
            ("blurTolerance", self.blur_tolerance.overridden()),
            ("upsampleTolerance", self.upsample_tolerance.overridden()),
            ("thicknessModifier", self.thickness_modifier.overridden()),
            ("directLightingStrength", self.direct_lighting_strength.overridden()),
            ("radius", self.radius.overridden()),
            ("quality", self.quality.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::AmbientOcclusion(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::AmbientOcclusion(s) => Some(s),
            _ => None,
        }
    }
}
