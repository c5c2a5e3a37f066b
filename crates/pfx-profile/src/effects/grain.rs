//! Film grain settings.

use pfx_core::Param;
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Film grain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Grain {
    /// Colored or monochrome grain.
    pub colored: Param<bool>,
    /// Strength.
    pub intensity: Param<f32>,
    /// Particle size.
    pub size: Param<f32>,
    /// Luminance response; lower values keep grain in bright areas.
    pub lum_contrib: Param<f32>,
}

impl Default for Grain {
    fn default() -> Self {
        Self {
            colored: Param::new(true),
            intensity: Param::new(0.0),
            size: Param::new(1.0),
            lum_contrib: Param::new(0.8),
        }
    }
}

impl From<Grain> for Effect {
    fn from(settings: Grain) -> Self {
        Effect::Grain(settings)
    }
}

impl EffectSettings for Grain {
    const KIND: EffectKind = EffectKind::Grain;

    fn set_all_overrides(&mut self, state: bool) {
        self.colored.set_override(state);
        self.intensity.set_override(state);
        self.size.set_override(state);
        self.lum_contrib.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("colored", self.colored.overridden()),
            ("intensity", self.intensity.overridden()),
            ("size", self.size.overridden()),
            ("lumContrib", self.lum_contrib.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::Grain(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::Grain(s) => Some(s),
            _ => None,
        }
    }
}
