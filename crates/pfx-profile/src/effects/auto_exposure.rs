//! Automatic exposure settings.

use pfx_core::{Param, Vector2};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// How exposure follows scene luminance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum EyeAdaptation {
    /// Adapt over time using the speed settings.
    #[default]
    Progressive,
    /// Jump to the target exposure immediately.
    Fixed,
}

/// Histogram-driven automatic exposure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AutoExposure {
    /// Lower and upper histogram percentages used to find the average.
    pub filtering: Param<Vector2>,
    /// Minimum average luminance in EV.
    pub min_luminance: Param<f32>,
    /// Maximum average luminance in EV.
    pub max_luminance: Param<f32>,
    /// Exposure compensation.
    pub key_value: Param<f32>,
    /// Adaptation mode.
    pub eye_adaptation: Param<EyeAdaptation>,
    /// Dark-to-light adaptation speed.
    pub speed_up: Param<f32>,
    /// Light-to-dark adaptation speed.
    pub speed_down: Param<f32>,
}

impl Default for AutoExposure {
    fn default() -> Self {
        Self {
            filtering: Param::new(Vector2::new(50.0, 95.0)),
            min_luminance: Param::new(0.0),
            max_luminance: Param::new(0.0),
            key_value: Param::new(1.0),
            eye_adaptation: Param::new(EyeAdaptation::Progressive),
            speed_up: Param::new(2.0),
            speed_down: Param::new(1.0),
        }
    }
}

impl From<AutoExposure> for Effect {
    fn from(settings: AutoExposure) -> Self {
        Effect::AutoExposure(settings)
    }
}

impl EffectSettings for AutoExposure {
    const KIND: EffectKind = EffectKind::AutoExposure;

    fn set_all_overrides(&mut self, state: bool) {
        self.filtering.set_override(state);
        self.min_luminance.set_override(state);
        self.max_luminance.set_override(state);
        self.key_value.set_override(state);
        self.eye_adaptation.set_override(state);
        self.speed_up.set_override(state);
        self.speed_down.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("filtering", self.filtering.overridden()),
            ("minLuminance", self.min_luminance.overridden()),
            ("maxLuminance", self.max_luminance.overridden()),
            ("keyValue", self.key_value.overridden()),
            ("eyeAdaptation", self.eye_adaptation.overridden()),
            ("speedUp", self.speed_up.overridden()),
            ("speedDown", self.speed_down.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::AutoExposure(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::AutoExposure(s) => Some(s),
            _ => None,
        }
    }
}
