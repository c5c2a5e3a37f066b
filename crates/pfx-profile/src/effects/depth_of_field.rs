//! Depth of field settings.

use pfx_core::Param;
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::EffectKind;

/// Bokeh filter size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum KernelSize {
    /// Small kernel.
    Small,
    /// Medium kernel.
    #[default]
    Medium,
    /// Large kernel.
    Large,
    /// Very large kernel.
    VeryLarge,
}

/// Depth of field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepthOfField {
    /// Distance to the point of focus.
    pub focus_distance: Param<f32>,
    /// F-stop.
    pub aperture: Param<f32>,
    /// Lens focal length in millimetres.
    pub focal_length: Param<f32>,
    /// Bokeh filter size.
    pub kernel_size: Param<KernelSize>,
}

impl Default for DepthOfField {
    fn default() -> Self {
        Self {
            focus_distance: Param::new(10.0),
            aperture: Param::new(5.6),
            focal_length: Param::new(50.0),
            kernel_size: Param::new(KernelSize::Medium),
        }
    }
}

impl From<DepthOfField> for Effect {
    fn from(settings: DepthOfField) -> Self {
        Effect::DepthOfField(settings)
    }
}

impl EffectSettings for DepthOfField {
    const KIND: EffectKind = EffectKind::DepthOfField;

    fn set_all_overrides(&mut self, state: bool) {
        self.focus_distance.set_override(state);
        self.aperture.set_override(state);
        self.focal_length.set_override(state);
        self.kernel_size.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("focusDistance", self.focus_distance.overridden()),
            ("aperture", self.aperture.overridden()),
            ("focalLength", self.focal_length.overridden()),
            ("kernelSize", self.kernel_size.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::DepthOfField(s) => Some(s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::DepthOfField(s) => Some(s),
            _ => None,
        }
    }
}
