//! Bloom settings.

use pfx_core::{Color, Param, Texture};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Bloom with optional lens dirt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Bloom {
    /// Strength.
    pub intensity: Param<f32>,
    /// Brightness threshold in gamma space.
    pub threshold: Param<f32>,
    /// Threshold knee between 0 (hard) and 1 (soft).
    pub soft_knee: Param<f32>,
    /// Upper clamp on source brightness.
    pub clamp: Param<f32>,
    /// Extent of the veiling effect.
    pub diffusion: Param<f32>,
    /// Negative stretches vertically, positive horizontally.
    pub anamorphic_ratio: Param<f32>,
    /// Tint.
    pub color: Param<Color>,
    /// Lower-quality fast path.
    pub fast_mode: Param<bool>,
    /// Lens dirt texture.
    pub dirt_texture: Param<Option<Texture>>,
    /// Lens dirt strength.
    pub dirt_intensity: Param<f32>,
}

impl Default for Bloom {
    fn default() -> Self {
        Self {
            intensity: Param::new(0.0),
            threshold: Param::new(1.0),
            soft_knee: Param::new(0.5),
            clamp: Param::new(65472.0),
            diffusion: Param::new(7.0),
            anamorphic_ratio: Param::new(0.0),
            color: Param::new(Color::WHITE),
            fast_mode: Param::new(false),
            dirt_texture: Param::new(None),
            dirt_intensity: Param::new(0.0),
        }
    }
}

impl From<Bloom> for Effect {
    fn from(settings: Bloom) -> Self {
        Effect::Bloom(settings)
    }
}

impl EffectSettings for Bloom {
    const KIND: EffectKind = EffectKind::Bloom;

    fn set_all_overrides(&mut self, state: bool) {
        self.intensity.set_override(state);
        self.threshold.set_override(state);
        self.soft_knee.set_override(state);
        self.clamp.set_override(state);
        self.diffusion.set_override(state);
        self.anamorphic_ratio.set_override(state);
        self.color.set_override(state);
        self.fast_mode.set_override(state);
        self.dirt_texture.set_override(state);
        self.dirt_intensity.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("intensity", self.intensity.overridden()),
            ("threshold", self.threshold.overridden()),
            ("softKnee", self.soft_knee.overridden()),
            ("clamp", self.clamp.overridden()),
            ("diffusion", self.diffusion.overridden()),
            ("anamorphicRatio", self.anamorphic_ratio.overridden()),
            ("color", self.color.overridden()),
            ("fastMode", self.fast_mode.overridden()),
            ("dirtTexture", self.dirt_texture.overridden()),
            ("dirtIntensity", self.dirt_intensity.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::Bloom(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::Bloom(s) => Some(s),
            _ => None,
        }
    }
}
