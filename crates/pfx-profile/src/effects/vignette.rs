//! Vignette settings.

use pfx_core::{Color, Param, Texture, Vector2};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Vignette shape source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VignetteMode {
    /// Procedural ellipse.
    #[default]
    Classic,
    /// Texture mask.
    Masked,
}

/// Darkening towards the frame edges.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Vignette {
    /// Shape source.
    pub mode: Param<VignetteMode>,
    /// Tint color.
    pub color: Param<Color>,
    /// Screen-space center.
    pub center: Param<Vector2>,
    /// Strength.
    pub intensity: Param<f32>,
    /// Border softness.
    pub smoothness: Param<f32>,
    /// Lower values give a more square shape.
    pub roundness: Param<f32>,
    /// Keep the shape circular regardless of aspect ratio.
    pub rounded: Param<bool>,
    /// Mask texture for [`VignetteMode::Masked`].
    pub mask: Param<Option<Texture>>,
    /// Mask opacity.
    pub opacity: Param<f32>,
}

impl Default for Vignette {
    fn default() -> Self {
        Self {
            mode: Param::new(VignetteMode::Classic),
            color: Param::new(Color::BLACK),
            center: Param::new(Vector2::new(0.5, 0.5)),
            intensity: Param::new(0.0),
            smoothness: Param::new(0.2),
            roundness: Param::new(1.0),
            rounded: Param::new(false),
            mask: Param::new(None),
            opacity: Param::new(1.0),
        }
    }
}

impl From<Vignette> for Effect {
    fn from(settings: Vignette) -> Self {
        Effect::Vignette(settings)
    }
}

impl EffectSettings for Vignette {
    const KIND: EffectKind = EffectKind::Vignette;

    fn set_all_overrides(&mut self, state: bool) {
        self.mode.set_override(state);
        self.color.set_override(state);
        self.center.set_override(state);
        self.intensity.set_override(state);
        self.smoothness.set_override(state);
        self.roundness.set_override(state);
        self.rounded.set_override(state);
        self.mask.set_override(state);
        self.opacity.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("mode", self.mode.overridden()),
            ("color", self.color.overridden()),
            ("center", self.center.overridden()),
            ("intensity", self.intensity.overridden()),
            ("smoothness", self.smoothness.overridden()),
            ("roundness", self.roundness.overridden()),
            ("rounded", self.rounded.overridden()),
            ("mask", self.mask.overridden()),
            ("opacity", self.opacity.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::Vignette(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::Vignette(s) => Some(s),
            _ => None,
        }
    }
}
