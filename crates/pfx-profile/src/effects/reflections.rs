//! Screen-space reflection settings.

use pfx_core::Param;
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Quality preset. Everything except [`ScreenSpaceReflectionPreset::Custom`]
/// overrides the iteration count and resolution at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScreenSpaceReflectionPreset {
    /// Lowest quality.
    Lower,
    /// Low quality.
    Low,
    /// Medium quality.
    #[default]
    Medium,
    /// High quality.
    High,
    /// Higher quality.
    Higher,
    /// Ultra quality.
    Ultra,
    /// Beyond ultra.
    Overkill,
    /// Use the explicit iteration count and resolution.
    Custom,
}

/// Ray-march buffer resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ScreenSpaceReflectionResolution {
    /// Half resolution.
    #[default]
    Downsampled,
    /// Full resolution.
    FullSize,
    /// Double resolution.
    Supersampled,
}

/// Screen-space reflections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenSpaceReflections {
    /// Quality preset.
    pub preset: Param<ScreenSpaceReflectionPreset>,
    /// Ray-march step limit.
    pub maximum_iteration_count: Param<i32>,
    /// Ray-march buffer resolution.
    pub resolution: Param<ScreenSpaceReflectionResolution>,
    /// Object thickness used for hit detection.
    pub thickness: Param<f32>,
    /// Longest ray distance in world units.
    pub maximum_march_distance: Param<f32>,
    /// Fade distance near the march limit.
    pub distance_fade: Param<f32>,
    /// Screen-edge fade.
    pub vignette: Param<f32>,
}

impl Default for ScreenSpaceReflections {
    fn default() -> Self {
        Self {
            preset: Param::new(ScreenSpaceReflectionPreset::Medium),
            maximum_iteration_count: Param::new(16),
            resolution: Param::new(ScreenSpaceReflectionResolution::Downsampled),
            thickness: Param::new(8.0),
            maximum_march_distance: Param::new(100.0),
            distance_fade: Param::new(0.5),
            vignette: Param::new(0.5),
        }
    }
}

impl From<ScreenSpaceReflections> for Effect {
    fn from(settings: ScreenSpaceReflections) -> Self {
        Effect::ScreenSpaceReflections(settings)
    }
}

impl EffectSettings for ScreenSpaceReflections {
    const KIND: EffectKind = EffectKind::ScreenSpaceReflections;

    fn set_all_overrides(&mut self, state: bool) {
        self.preset.set_override(state);
        self.maximum_iteration_count.set_override(state);
        self.resolution.set_override(state);
        self.thickness.set_override(state);
        self.maximum_march_distance.set_override(state);
        self.distance_fade.set_override(state);
        self.vignette.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("preset", self.preset.overridden()),
            ("maximumIterationCount", self.maximum_iteration_count.overridden()),
            ("resolution", self.resolution.overridden()),
            ("thickness", self.thickness.overridden()),
            ("maximumMarchDistance", self.maximum_march_distance.overridden()),
            ("distanceFade", self.distance_fade.overridden()),
            ("vignette", self.vignette.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::ScreenSpaceReflections(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::ScreenSpaceReflections(s) => Some(s),
            _ => None,
        }
    }
}
