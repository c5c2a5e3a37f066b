//! Motion blur settings.

use pfx_core::Param;
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Camera motion blur.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionBlur {
    /// Shutter angle in degrees.
    pub shutter_angle: Param<f32>,
    /// Samples per pixel.
    pub sample_count: Param<i32>,
}

impl Default for MotionBlur {
    fn default() -> Self {
        Self {
            shutter_angle: Param::new(270.0),
            sample_count: Param::new(10),
        }
    }
}

impl From<MotionBlur> for Effect {
    fn from(settings: MotionBlur) -> Self {
        Effect::MotionBlur(settings)
    }
}

impl EffectSettings for MotionBlur {
    const KIND: EffectKind = EffectKind::MotionBlur;

    fn set_all_overrides(&mut self, state: bool) {
        self.shutter_angle.set_override(state);
        self.sample_count.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("shutterAngle", self.shutter_angle.overridden()),
            ("sampleCount", self.sample_count.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::MotionBlur(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::MotionBlur(s) => Some(s),
            _ => None,
        }
    }
}
