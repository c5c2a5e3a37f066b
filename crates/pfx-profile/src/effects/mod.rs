//! Effect settings records.
//!
//! Every record is a struct of [`pfx_core::Param`] fields and implements
//! [`EffectSettings`]. The closed set of records is wrapped in [`Effect`],
//! which is what a [`crate::Profile`] stores.

mod ambient_occlusion;
mod auto_exposure;
mod bloom;
mod chromatic_aberration;
mod color_grading;
mod depth_of_field;
mod grain;
mod motion_blur;
mod reflections;
mod vignette;

pub use ambient_occlusion::{AmbientOcclusion, AmbientOcclusionMode, AmbientOcclusionQuality};
pub use auto_exposure::{AutoExposure, EyeAdaptation};
pub use bloom::Bloom;
pub use chromatic_aberration::ChromaticAberration;
pub use color_grading::{ColorGrading, GradingMode, Tonemapper};
pub use depth_of_field::{DepthOfField, KernelSize};
pub use grain::Grain;
pub use motion_blur::MotionBlur;
pub use reflections::{ScreenSpaceReflectionPreset, ScreenSpaceReflectionResolution, ScreenSpaceReflections};
pub use vignette::{Vignette, VignetteMode};

use serde::{Deserialize, Serialize};

use crate::EffectKind;

/// Behaviour shared by all effect settings records.
pub trait EffectSettings: Default + Into<Effect> {
    /// Type tag of the record.
    const KIND: EffectKind;

    /// Sets the override flag of every field, leaving values untouched.
    fn set_all_overrides(&mut self, state: bool);

    /// Field names paired with their override flags, in declaration order.
    fn overrides(&self) -> Vec<(&'static str, bool)>;

    /// Borrows the record out of an [`Effect`] of the matching type.
    fn from_effect(effect: &Effect) -> Option<&Self>;

    /// Mutably borrows the record out of an [`Effect`] of the matching type.
    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self>;

    /// Names of the fields whose override flag is set.
    fn overridden_fields(&self) -> Vec<&'static str> {
        self.overrides()
            .into_iter()
            .filter_map(|(name, state)| state.then_some(name))
            .collect()
    }
}

/// One entry of a profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Effect {
    /// Ambient occlusion.
    AmbientOcclusion(AmbientOcclusion),
    /// Automatic exposure.
    AutoExposure(AutoExposure),
    /// Bloom.
    Bloom(Bloom),
    /// Chromatic aberration.
    ChromaticAberration(ChromaticAberration),
    /// Color grading.
    ColorGrading(Box<ColorGrading>),
    /// Depth of field.
    DepthOfField(DepthOfField),
    /// Film grain.
    Grain(Grain),
    /// Motion blur.
    MotionBlur(MotionBlur),
    /// Screen-space reflections.
    ScreenSpaceReflections(ScreenSpaceReflections),
    /// Vignette.
    Vignette(Vignette),
}

impl Effect {
    /// Type tag of the entry.
    pub fn kind(&self) -> EffectKind {
        match self {
            Self::AmbientOcclusion(_) => EffectKind::AmbientOcclusion,
            Self::AutoExposure(_) => EffectKind::AutoExposure,
            Self::Bloom(_) => EffectKind::Bloom,
            Self::ChromaticAberration(_) => EffectKind::ChromaticAberration,
            Self::ColorGrading(_) => EffectKind::ColorGrading,
            Self::DepthOfField(_) => EffectKind::DepthOfField,
            Self::Grain(_) => EffectKind::Grain,
            Self::MotionBlur(_) => EffectKind::MotionBlur,
            Self::ScreenSpaceReflections(_) => EffectKind::ScreenSpaceReflections,
            Self::Vignette(_) => EffectKind::Vignette,
        }
    }

    /// Field names paired with their override flags.
    pub fn overrides(&self) -> Vec<(&'static str, bool)> {
        match self {
            Self::AmbientOcclusion(e) => e.overrides(),
            Self::AutoExposure(e) => e.overrides(),
            Self::Bloom(e) => e.overrides(),
            Self::ChromaticAberration(e) => e.overrides(),
            Self::ColorGrading(e) => e.overrides(),
            Self::DepthOfField(e) => e.overrides(),
            Self::Grain(e) => e.overrides(),
            Self::MotionBlur(e) => e.overrides(),
            Self::ScreenSpaceReflections(e) => e.overrides(),
            Self::Vignette(e) => e.overrides(),
        }
    }

    /// Sets the override flag of every field.
    pub fn set_all_overrides(&mut self, state: bool) {
        match self {
            Self::AmbientOcclusion(e) => e.set_all_overrides(state),
            Self::AutoExposure(e) => e.set_all_overrides(state),
            Self::Bloom(e) => e.set_all_overrides(state),
            Self::ChromaticAberration(e) => e.set_all_overrides(state),
            Self::ColorGrading(e) => e.set_all_overrides(state),
            Self::DepthOfField(e) => e.set_all_overrides(state),
            Self::Grain(e) => e.set_all_overrides(state),
            Self::MotionBlur(e) => e.set_all_overrides(state),
            Self::ScreenSpaceReflections(e) => e.set_all_overrides(state),
            Self::Vignette(e) => e.set_all_overrides(state),
        }
    }

    /// Number of fields whose override flag is set.
    pub fn overridden_count(&self) -> usize {
        self.overrides().iter().filter(|(_, state)| *state).count()
    }
}
