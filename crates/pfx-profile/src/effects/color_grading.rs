//! Color grading settings.
//!
//! The record mirrors the new grading pass: a mode selecting the working
//! range, white balance, tone, a 3x3 channel mixer in percent, trackballs
//! stored as 4-vectors (rgb offset plus a w luminance term) and eight
//! splines. Mixer identity is 100 on the diagonal; trackball identity is
//! `(1, 1, 1, 0)`.

use pfx_core::{Color, Curve, Param, Texture, Vector4};
use serde::{Deserialize, Serialize};

use super::{Effect, EffectSettings};
use crate::{EffectKind, Spline};

/// Working range of the grading pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GradingMode {
    /// Low dynamic range, the only range the legacy pass supported.
    LowDefinitionRange,
    /// High dynamic range.
    #[default]
    HighDefinitionRange,
    /// Externally authored 3D lookup table.
    External,
}

/// Tonemapping operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Tonemapper {
    /// No tonemapping.
    #[default]
    None,
    /// Neutral operator.
    Neutral,
    /// ACES reference operator.
    #[serde(rename = "ACES")]
    Aces,
    /// Artist-driven curve.
    Custom,
}

/// Color grading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorGrading {
    /// Working range.
    pub grading_mode: Param<GradingMode>,
    /// 3D lookup table for [`GradingMode::External`].
    pub external_lut: Param<Option<Texture>>,
    /// Tonemapping operator.
    pub tonemapper: Param<Tonemapper>,
    /// Custom curve: toe strength.
    pub tone_curve_toe_strength: Param<f32>,
    /// Custom curve: toe length.
    pub tone_curve_toe_length: Param<f32>,
    /// Custom curve: shoulder strength.
    pub tone_curve_shoulder_strength: Param<f32>,
    /// Custom curve: shoulder length.
    pub tone_curve_shoulder_length: Param<f32>,
    /// Custom curve: shoulder angle.
    pub tone_curve_shoulder_angle: Param<f32>,
    /// Custom curve: gamma.
    pub tone_curve_gamma: Param<f32>,
    /// Strip lookup table applied in [`GradingMode::LowDefinitionRange`].
    pub ldr_lut: Param<Option<Texture>>,
    /// Blend weight of `ldr_lut`.
    pub ldr_lut_contribution: Param<f32>,
    /// White balance temperature.
    pub temperature: Param<f32>,
    /// White balance tint.
    pub tint: Param<f32>,
    /// Multiplicative tint.
    pub color_filter: Param<Color>,
    /// Hue rotation in degrees.
    pub hue_shift: Param<f32>,
    /// Saturation offset in percent.
    pub saturation: Param<f32>,
    /// Brightness offset in percent (LDR only).
    pub brightness: Param<f32>,
    /// Exposure in EV (HDR only).
    pub post_exposure: Param<f32>,
    /// Contrast offset in percent.
    pub contrast: Param<f32>,
    /// Red output from red input, percent.
    pub mixer_red_out_red_in: Param<f32>,
    /// Red output from green input, percent.
    pub mixer_red_out_green_in: Param<f32>,
    /// Red output from blue input, percent.
    pub mixer_red_out_blue_in: Param<f32>,
    /// Green output from red input, percent.
    pub mixer_green_out_red_in: Param<f32>,
    /// Green output from green input, percent.
    pub mixer_green_out_green_in: Param<f32>,
    /// Green output from blue input, percent.
    pub mixer_green_out_blue_in: Param<f32>,
    /// Blue output from red input, percent.
    pub mixer_blue_out_red_in: Param<f32>,
    /// Blue output from green input, percent.
    pub mixer_blue_out_green_in: Param<f32>,
    /// Blue output from blue input, percent.
    pub mixer_blue_out_blue_in: Param<f32>,
    /// Shadows trackball.
    pub lift: Param<Vector4>,
    /// Midtones trackball.
    pub gamma: Param<Vector4>,
    /// Highlights trackball.
    pub gain: Param<Vector4>,
    /// Luminance curve.
    pub master_curve: Param<Spline>,
    /// Red channel curve.
    pub red_curve: Param<Spline>,
    /// Green channel curve.
    pub green_curve: Param<Spline>,
    /// Blue channel curve.
    pub blue_curve: Param<Spline>,
    /// Hue remap by hue.
    pub hue_vs_hue_curve: Param<Spline>,
    /// Saturation by hue.
    pub hue_vs_sat_curve: Param<Spline>,
    /// Saturation by saturation.
    pub sat_vs_sat_curve: Param<Spline>,
    /// Saturation by luminance.
    pub lum_vs_sat_curve: Param<Spline>,
}

impl Default for ColorGrading {
    fn default() -> Self {
        let trackball = Vector4::new(1.0, 1.0, 1.0, 0.0);
        Self {
            grading_mode: Param::new(GradingMode::HighDefinitionRange),
            external_lut: Param::new(None),
            tonemapper: Param::new(Tonemapper::None),
            tone_curve_toe_strength: Param::new(0.0),
            tone_curve_toe_length: Param::new(0.5),
            tone_curve_shoulder_strength: Param::new(0.0),
            tone_curve_shoulder_length: Param::new(0.5),
            tone_curve_shoulder_angle: Param::new(0.0),
            tone_curve_gamma: Param::new(1.0),
            ldr_lut: Param::new(None),
            ldr_lut_contribution: Param::new(1.0),
            temperature: Param::new(0.0),
            tint: Param::new(0.0),
            color_filter: Param::new(Color::WHITE),
            hue_shift: Param::new(0.0),
            saturation: Param::new(0.0),
            brightness: Param::new(0.0),
            post_exposure: Param::new(0.0),
            contrast: Param::new(0.0),
            mixer_red_out_red_in: Param::new(100.0),
            mixer_red_out_green_in: Param::new(0.0),
            mixer_red_out_blue_in: Param::new(0.0),
            mixer_green_out_red_in: Param::new(0.0),
            mixer_green_out_green_in: Param::new(100.0),
            mixer_green_out_blue_in: Param::new(0.0),
            mixer_blue_out_red_in: Param::new(0.0),
            mixer_blue_out_green_in: Param::new(0.0),
            mixer_blue_out_blue_in: Param::new(100.0),
            lift: Param::new(trackball),
            gamma: Param::new(trackball),
            gain: Param::new(trackball),
            master_curve: Param::new(Spline::new(Curve::identity(), 0.0, false)),
            red_curve: Param::new(Spline::new(Curve::identity(), 0.0, false)),
            green_curve: Param::new(Spline::new(Curve::identity(), 0.0, false)),
            blue_curve: Param::new(Spline::new(Curve::identity(), 0.0, false)),
            hue_vs_hue_curve: Param::new(Spline::new(Curve::empty(), 0.5, true)),
            hue_vs_sat_curve: Param::new(Spline::new(Curve::empty(), 0.5, true)),
            sat_vs_sat_curve: Param::new(Spline::new(Curve::empty(), 0.5, false)),
            lum_vs_sat_curve: Param::new(Spline::new(Curve::empty(), 0.5, false)),
        }
    }
}

impl ColorGrading {
    /// Channel mixer as rows of output channels, in percent.
    pub fn mixer(&self) -> [[f32; 3]; 3] {
        [
            [
                self.mixer_red_out_red_in.get(),
                self.mixer_red_out_green_in.get(),
                self.mixer_red_out_blue_in.get(),
            ],
            [
                self.mixer_green_out_red_in.get(),
                self.mixer_green_out_green_in.get(),
                self.mixer_green_out_blue_in.get(),
            ],
            [
                self.mixer_blue_out_red_in.get(),
                self.mixer_blue_out_green_in.get(),
                self.mixer_blue_out_blue_in.get(),
            ],
        ]
    }
}

impl From<ColorGrading> for Effect {
    fn from(settings: ColorGrading) -> Self {
        Effect::ColorGrading(Box::new(settings))
    }
}

impl EffectSettings for ColorGrading {
    const KIND: EffectKind = EffectKind::ColorGrading;

    fn set_all_overrides(&mut self, state: bool) {
        self.grading_mode.set_override(state);
        self.external_lut.set_override(state);
        self.tonemapper.set_override(state);
        self.tone_curve_toe_strength.set_override(state);
        self.tone_curve_toe_length.set_override(state);
        self.tone_curve_shoulder_strength.set_override(state);
        self.tone_curve_shoulder_length.set_override(state);
        self.tone_curve_shoulder_angle.set_override(state);
        self.tone_curve_gamma.set_override(state);
        self.ldr_lut.set_override(state);
        self.ldr_lut_contribution.set_override(state);
        self.temperature.set_override(state);
        self.tint.set_override(state);
        self.color_filter.set_override(state);
        self.hue_shift.set_override(state);
        self.saturation.set_override(state);
        self.brightness.set_override(state);
        self.post_exposure.set_override(state);
        self.contrast.set_override(state);
        self.mixer_red_out_red_in.set_override(state);
        self.mixer_red_out_green_in.set_override(state);
        self.mixer_red_out_blue_in.set_override(state);
        self.mixer_green_out_red_in.set_override(state);
        self.mixer_green_out_green_in.set_override(state);
        self.mixer_green_out_blue_in.set_override(state);
        self.mixer_blue_out_red_in.set_override(state);
        self.mixer_blue_out_green_in.set_override(state);
        self.mixer_blue_out_blue_in.set_override(state);
        self.lift.set_override(state);
        self.gamma.set_override(state);
        self.gain.set_override(state);
        self.master_curve.set_override(state);
        self.red_curve.set_override(state);
        self.green_curve.set_override(state);
        self.blue_curve.set_override(state);
        self.hue_vs_hue_curve.set_override(state);
        self.hue_vs_sat_curve.set_override(state);
        self.sat_vs_sat_curve.set_override(state);
        self.lum_vs_sat_curve.set_override(state);
    }

    fn overrides(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("gradingMode", self.grading_mode.overridden()),
            ("externalLut", self.external_lut.overridden()),
            ("tonemapper", self.tonemapper.overridden()),
            ("toneCurveToeStrength", self.tone_curve_toe_strength.overridden()),
            ("toneCurveToeLength", self.tone_curve_toe_length.overridden()),
            ("toneCurveShoulderStrength", self.tone_curve_shoulder_strength.overridden()),
            ("toneCurveShoulderLength", self.tone_curve_shoulder_length.overridden()),
            ("toneCurveShoulderAngle", self.tone_curve_shoulder_angle.overridden()),
            ("toneCurveGamma", self.tone_curve_gamma.overridden()),
            ("ldrLut", self.ldr_lut.overridden()),
            ("ldrLutContribution", self.ldr_lut_contribution.overridden()),
            ("temperature", self.temperature.overridden()),
            ("tint", self.tint.overridden()),
            ("colorFilter", self.color_filter.overridden()),
            ("hueShift", self.hue_shift.overridden()),
            ("saturation", self.saturation.overridden()),
            ("brightness", self.brightness.overridden()),
            ("postExposure", self.post_exposure.overridden()),
            ("contrast", self.contrast.overridden()),
            ("mixerRedOutRedIn", self.mixer_red_out_red_in.overridden()),
            ("mixerRedOutGreenIn", self.mixer_red_out_green_in.overridden()),
            ("mixerRedOutBlueIn", self.mixer_red_out_blue_in.overridden()),
            ("mixerGreenOutRedIn", self.mixer_green_out_red_in.overridden()),
            ("mixerGreenOutGreenIn", self.mixer_green_out_green_in.overridden()),
            ("mixerGreenOutBlueIn", self.mixer_green_out_blue_in.overridden()),
            ("mixerBlueOutRedIn", self.mixer_blue_out_red_in.overridden()),
            ("mixerBlueOutGreenIn", self.mixer_blue_out_green_in.overridden()),
            ("mixerBlueOutBlueIn", self.mixer_blue_out_blue_in.overridden()),
            ("lift", self.lift.overridden()),
            ("gamma", self.gamma.overridden()),
            ("gain", self.gain.overridden()),
            ("masterCurve", self.master_curve.overridden()),
            ("redCurve", self.red_curve.overridden()),
            ("greenCurve", self.green_curve.overridden()),
            ("blueCurve", self.blue_curve.overridden()),
            ("hueVsHueCurve", self.hue_vs_hue_curve.overridden()),
            ("hueVsSatCurve", self.hue_vs_sat_curve.overridden()),
            ("satVsSatCurve", self.sat_vs_sat_curve.overridden()),
            ("lumVsSatCurve", self.lum_vs_sat_curve.overridden()),
        ]
    }

    fn from_effect(effect: &Effect) -> Option<&Self> {
        match effect {
            Effect::ColorGrading(s) => Some(&**s),
            _ => None,
        }
    }

    fn from_effect_mut(effect: &mut Effect) -> Option<&mut Self> {
        match effect {
            Effect::ColorGrading(s) => Some(&mut **s),
            _ => None,
        }
    }
}
