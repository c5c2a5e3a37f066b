//! Legacy color grading settings.
//!
//! The legacy grading stack only ever ran in low dynamic range. Its
//! parameters use unit scales (contrast and saturation are multipliers
//! centered on 1.0, channel mixer coefficients are fractions) and its
//! color wheels come in two incompatible flavours, linear lift/gamma/gain
//! and logarithmic slope/power/offset, of which exactly one is active.

use pfx_core::{Color, Curve, Vector2, Vector3};
use serde::{Deserialize, Serialize};

/// Tonemapping operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Tonemapper {
    /// No tonemapping.
    None,
    /// ACES filmic curve.
    #[serde(rename = "ACES")]
    Aces,
    /// Neutral curve with custom black/white parameters.
    #[default]
    Neutral,
}

/// Tonemapping parameters.
///
/// The `neutral_*` fields shape the neutral operator and have no
/// counterpart in the current schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TonemappingSettings {
    /// Operator.
    pub tonemapper: Tonemapper,
    /// Neutral black input level.
    pub neutral_black_in: f32,
    /// Neutral white input level.
    pub neutral_white_in: f32,
    /// Neutral black output level.
    pub neutral_black_out: f32,
    /// Neutral white output level.
    pub neutral_white_out: f32,
    /// Neutral white level.
    pub neutral_white_level: f32,
    /// Neutral white clip.
    pub neutral_white_clip: f32,
}

impl Default for TonemappingSettings {
    fn default() -> Self {
        Self {
            tonemapper: Tonemapper::Neutral,
            neutral_black_in: 0.02,
            neutral_white_in: 10.0,
            neutral_black_out: 0.0,
            neutral_white_out: 10.0,
            neutral_white_level: 5.3,
            neutral_white_clip: 10.0,
        }
    }
}

/// Basic grading parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BasicSettings {
    /// Exposure offset in EV.
    pub post_exposure: f32,
    /// White balance temperature.
    pub temperature: f32,
    /// White balance tint.
    pub tint: f32,
    /// Hue rotation in degrees.
    pub hue_shift: f32,
    /// Saturation multiplier (1 = unchanged).
    pub saturation: f32,
    /// Contrast multiplier (1 = unchanged).
    pub contrast: f32,
}

impl Default for BasicSettings {
    fn default() -> Self {
        Self {
            post_exposure: 0.0,
            temperature: 0.0,
            tint: 0.0,
            hue_shift: 0.0,
            saturation: 1.0,
            contrast: 1.0,
        }
    }
}

/// 3x3 channel mixer, one row per output channel.
///
/// Row components are the fractions of red, green and blue input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChannelMixerSettings {
    /// Red output row.
    pub red: Vector3,
    /// Green output row.
    pub green: Vector3,
    /// Blue output row.
    pub blue: Vector3,
    /// Editor UI state.
    pub current_editing_channel: i32,
}

impl Default for ChannelMixerSettings {
    fn default() -> Self {
        Self {
            red: Vector3::new(1.0, 0.0, 0.0),
            green: Vector3::new(0.0, 1.0, 0.0),
            blue: Vector3::new(0.0, 0.0, 1.0),
            current_editing_channel: 0,
        }
    }
}

/// Which set of color wheels is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ColorWheelMode {
    /// Lift/gamma/gain.
    Linear,
    /// Slope/power/offset.
    #[default]
    Log,
}

/// Logarithmic color wheels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogWheelsSettings {
    /// Slope wheel.
    pub slope: Color,
    /// Power wheel.
    pub power: Color,
    /// Offset wheel.
    pub offset: Color,
}

/// Linear color wheels.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LinearWheelsSettings {
    /// Lift wheel.
    pub lift: Color,
    /// Gamma wheel.
    pub gamma: Color,
    /// Gain wheel.
    pub gain: Color,
}

/// Color wheel parameters.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorWheelsSettings {
    /// Active wheel set.
    pub mode: ColorWheelMode,
    /// Logarithmic wheels.
    pub log: LogWheelsSettings,
    /// Linear wheels.
    pub linear: LinearWheelsSettings,
}

/// A grading curve with its evaluation context.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorGradingCurve {
    /// Control points.
    pub curve: Curve,
    /// Value returned when the curve has no keys.
    pub zero_value: f32,
    /// Wrap the input into `[0, 1)` before evaluation.
    #[serde(rename = "loop")]
    pub looped: bool,
    /// Editor display bounds.
    pub bounds: Vector2,
}

impl Default for ColorGradingCurve {
    fn default() -> Self {
        Self::new(Curve::empty(), 0.0, false)
    }
}

impl ColorGradingCurve {
    /// Creates a curve with unit bounds.
    pub fn new(curve: Curve, zero_value: f32, looped: bool) -> Self {
        Self {
            curve,
            zero_value,
            looped,
            bounds: Vector2::new(0.0, 1.0),
        }
    }

    /// Evaluates the curve, honouring `zero_value` and `looped`.
    pub fn evaluate(&self, t: f32) -> f32 {
        if self.curve.is_empty() {
            return self.zero_value;
        }
        let t = if self.looped { t.rem_euclid(1.0) } else { t };
        self.curve.evaluate(t)
    }
}

/// The eight grading curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CurvesSettings {
    /// Luminance curve.
    pub master: ColorGradingCurve,
    /// Red channel curve.
    pub red: ColorGradingCurve,
    /// Green channel curve.
    pub green: ColorGradingCurve,
    /// Blue channel curve.
    pub blue: ColorGradingCurve,
    /// Hue versus hue.
    #[serde(rename = "hueVShue")]
    pub hue_vs_hue: ColorGradingCurve,
    /// Hue versus saturation.
    #[serde(rename = "hueVSsat")]
    pub hue_vs_sat: ColorGradingCurve,
    /// Saturation versus saturation.
    #[serde(rename = "satVSsat")]
    pub sat_vs_sat: ColorGradingCurve,
    /// Luminance versus saturation.
    #[serde(rename = "lumVSsat")]
    pub lum_vs_sat: ColorGradingCurve,
}

impl Default for CurvesSettings {
    fn default() -> Self {
        Self {
            master: ColorGradingCurve::new(Curve::identity(), 0.0, false),
            red: ColorGradingCurve::new(Curve::identity(), 0.0, false),
            green: ColorGradingCurve::new(Curve::identity(), 0.0, false),
            blue: ColorGradingCurve::new(Curve::identity(), 0.0, false),
            hue_vs_hue: ColorGradingCurve::new(Curve::empty(), 0.5, true),
            hue_vs_sat: ColorGradingCurve::new(Curve::empty(), 0.5, true),
            sat_vs_sat: ColorGradingCurve::new(Curve::empty(), 0.5, false),
            lum_vs_sat: ColorGradingCurve::new(Curve::empty(), 0.5, false),
        }
    }
}

impl CurvesSettings {
    /// The four per-channel tone curves in red, green, blue, master order.
    pub fn tone_curves(&self) -> [&Curve; 4] {
        [&self.red.curve, &self.green.curve, &self.blue.curve, &self.master.curve]
    }
}

/// Color grading section settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColorGradingSettings {
    /// Tonemapping.
    pub tonemapping: TonemappingSettings,
    /// Basic parameters.
    pub basic: BasicSettings,
    /// Channel mixer.
    pub channel_mixer: ChannelMixerSettings,
    /// Color wheels.
    pub color_wheels: ColorWheelsSettings,
    /// Grading curves.
    pub curves: CurvesSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_tone_curves_are_identity() {
        let curves = CurvesSettings::default();
        for c in curves.tone_curves() {
            assert_eq!(c, &Curve::identity());
        }
    }

    #[test]
    fn empty_curve_returns_zero_value() {
        let c = CurvesSettings::default().hue_vs_sat;
        assert_eq!(c.evaluate(0.3), 0.5);
    }

    #[test]
    fn looped_curve_wraps_input() {
        let c = ColorGradingCurve::new(Curve::identity(), 0.0, true);
        approx::assert_relative_eq!(c.evaluate(1.25), 0.25, epsilon = 1e-6);
    }

    #[test]
    fn aces_name_on_disk() {
        let t: TonemappingSettings = serde_yaml::from_str("tonemapper: ACES\n").unwrap();
        assert_eq!(t.tonemapper, Tonemapper::Aces);
        assert_eq!(t.neutral_white_level, 5.3);
    }

    #[test]
    fn secondary_curve_keys() {
        let yaml = "hueVShue:\n  zeroValue: 0.5\n  loop: true\n  curve:\n    - time: 0.0\n      value: 0.5\n      inTangent: 0.0\n      outTangent: 0.0\n";
        let c: CurvesSettings = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(c.hue_vs_hue.curve.len(), 1);
        assert!(c.hue_vs_hue.looped);
        assert_eq!(c.master.curve, Curve::identity());
    }
}
