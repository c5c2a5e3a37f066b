//! Direct color grading conversion.
//!
//! Translates the legacy grading record field by field. The legacy pass
//! only worked in low dynamic range, so the result does too, unless the
//! tone curves were never edited (see [`crate::curves`]), in which case
//! nothing ties the grade to LDR and the high dynamic range mode is used.
//!
//! Known losses:
//! - the neutral tonemapper's black/white in/out parameters have no
//!   destination;
//! - log (slope/power/offset) trackballs are copied onto gain/gamma/lift
//!   without a transform. The two wheel models are not equivalent, so the
//!   result only approximates the legacy grade.

use pfx_core::{Color, Curve, Param, Vector3, Vector4};
use pfx_legacy::{ColorGradingSettings, ColorWheelMode, ColorWheelsSettings};
use pfx_profile::{ColorGrading, EffectSettings, GradingMode, Spline};
use tracing::{debug, trace};

use crate::curves::is_default_tone_curves;
use crate::mapping::{self, TONEMAPPER};

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &[
    "tonemapping.neutralBlackIn",
    "tonemapping.neutralWhiteIn",
    "tonemapping.neutralBlackOut",
    "tonemapping.neutralWhiteOut",
    "tonemapping.neutralWhiteLevel",
    "tonemapping.neutralWhiteClip",
    "channelMixer.currentEditingChannel",
];

/// Legacy unit fractions to destination percentages.
pub const PERCENT: f32 = 100.0;

/// Converts a legacy multiplier centred on 1 to a percentage offset
/// centred on 0.
#[inline]
pub fn centered_percent(legacy: f32) -> f32 {
    (legacy - 1.0) * PERCENT
}

/// Converts legacy color grading settings.
pub fn convert(settings: &ColorGradingSettings) -> ColorGrading {
    let basic = &settings.basic;
    trace!(
        contrast = basic.contrast,
        saturation = basic.saturation,
        wheels = ?settings.color_wheels.mode,
        "converters::color_grading"
    );
    let mut out = ColorGrading::default();
    out.set_all_overrides(true);

    out.grading_mode.set(GradingMode::LowDefinitionRange);

    out.post_exposure.set(basic.post_exposure);
    out.contrast.set(centered_percent(basic.contrast));
    out.hue_shift.set(basic.hue_shift);
    out.saturation.set(centered_percent(basic.saturation));
    out.temperature.set(basic.temperature);
    out.tint.set(basic.tint);

    let mixer = &settings.channel_mixer;
    convert_mixer(&mut out, &mixer.red, &mixer.green, &mixer.blue);

    let curves = &settings.curves;
    replace_curve(&mut out.master_curve, &curves.master.curve);
    replace_curve(&mut out.red_curve, &curves.red.curve);
    replace_curve(&mut out.green_curve, &curves.green.curve);
    replace_curve(&mut out.blue_curve, &curves.blue.curve);

    if is_default_tone_curves(curves.tone_curves()) {
        debug!("Tone curves untouched, grading in high dynamic range");
        out.grading_mode.set(GradingMode::HighDefinitionRange);
    }

    replace_curve(&mut out.hue_vs_hue_curve, &curves.hue_vs_hue.curve);
    replace_curve(&mut out.hue_vs_sat_curve, &curves.hue_vs_sat.curve);
    replace_curve(&mut out.lum_vs_sat_curve, &curves.lum_vs_sat.curve);
    replace_curve(&mut out.sat_vs_sat_curve, &curves.sat_vs_sat.curve);

    mapping::assign(
        &mut out.tonemapper,
        TONEMAPPER,
        settings.tonemapping.tonemapper,
        "tonemapper",
    );

    convert_wheels(&mut out, &settings.color_wheels);
    out
}

fn convert_mixer(out: &mut ColorGrading, red: &Vector3, green: &Vector3, blue: &Vector3) {
    out.mixer_red_out_red_in.set(red.x * PERCENT);
    out.mixer_red_out_green_in.set(red.y * PERCENT);
    out.mixer_red_out_blue_in.set(red.z * PERCENT);
    out.mixer_green_out_red_in.set(green.x * PERCENT);
    out.mixer_green_out_green_in.set(green.y * PERCENT);
    out.mixer_green_out_blue_in.set(green.z * PERCENT);
    out.mixer_blue_out_red_in.set(blue.x * PERCENT);
    out.mixer_blue_out_green_in.set(blue.y * PERCENT);
    out.mixer_blue_out_blue_in.set(blue.z * PERCENT);
}

// Keys only; zero value, looping and range stay those of the destination.
fn replace_curve(param: &mut Param<Spline>, curve: &Curve) {
    let spline = param.value().clone().with_curve(curve.clone());
    param.set(spline);
}

fn convert_wheels(out: &mut ColorGrading, wheels: &ColorWheelsSettings) {
    match wheels.mode {
        ColorWheelMode::Linear => {
            out.gain.set(wheels.linear.gain.into());
            out.gamma.set(wheels.linear.gamma.into());
            out.lift.set(wheels.linear.lift.into());
        }
        ColorWheelMode::Log => {
            out.gain.set(log_wheel(wheels.log.slope));
            out.gamma.set(log_wheel(wheels.log.power));
            out.lift.set(log_wheel(wheels.log.offset));
        }
    }
}

// Slope/power/offset stored as-is. Inverting them into lift/gamma/gain
// space needs a fitted transform; none is applied yet.
fn log_wheel(c: Color) -> Vector4 {
    c.into()
}
