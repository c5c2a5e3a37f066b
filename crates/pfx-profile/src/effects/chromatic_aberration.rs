//! Chromatic aberration settings.

use pfx_core::{Param, Texture};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Lateral color fringing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromaticAberration {
    /// Spectral lookup texture; the built-in one is used when empty.
    pub spectral_lut: Param<Option<Texture>>,
    /// Strength.
    pub intensity: Param<f32>,
    /// Cheaper single-pass variant.
    pub fast_mode: Param<bool>,
}

impl Default for ChromaticAberration {
    fn default() -> Self {
        Self {
            spectral_lut: Param::new(None),
            intensity: Param::new(0.0),
            fast_mode: Param::new(false),
        }
    }
}

impl From<ChromaticAberration> for Effect {
    fn from(settings: ChromaticAberration) -> Self {
        Effect::ChromaticAberration(settings)
    }
}

impl EffectSettings for ChromaticAberration {
    const KIND: EffectKind = EffectKind::ChromaticAberration;

    fn set_all_overrides(&mut self, state: bool) {
        self.spectral_lut.set_override(state);
        self.intensity.set_override(state);
        self.fast_mode.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("spectralLut", self.spectral_lut.overridden()),
            ("intensity", self.intensity.overridden()),
            ("fastMode", self.fast_mode.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::ChromaticAberration(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::ChromaticAberration(s) => Some(s),
            _ => None,
        }
    }
}
