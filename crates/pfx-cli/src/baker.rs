//! CPU reference LUT baker.
//!
//! Renders the legacy color grading stack into a strip lookup table:
//! an `N^3` identity lattice laid out as `N*N x N` pixels, each pixel
//! pushed through the grading operators in order:
//!
//! 1. post-exposure (`2^ev`)
//! 2. white balance (von Kries scaling in LMS)
//! 3. channel mixer
//! 4. lift/gamma/gain or slope/power/offset, whichever wheel set is active
//! 5. hue shift
//! 6. saturation (Rec.709 luma)
//! 7. contrast around mid grey
//! 8. master curve, then the red/green/blue curves
//!
//! The result is clamped to `[0, 1]`; the legacy stack only ever graded
//! in low dynamic range.

use anyhow::{bail, Context, Result};
use pfx_convert::{ConvertResult, LutBaker};
use pfx_core::{luminance_rec709, BakedTexture, Color, CoreError, CoreResult, Texture};
use pfx_legacy::{ColorGradingCurve, ColorGradingSettings, ColorWheelMode, CurvesSettings};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
#[allow(unused_imports)]
use tracing::{debug, trace};

/// Default lattice size.
pub const DEFAULT_LUT_SIZE: u32 = 32;

/// Smallest lattice size that still has both endpoints.
pub const MIN_LUT_SIZE: u32 = 2;

/// Largest lattice size accepted.
pub const MAX_LUT_SIZE: u32 = 64;

const CONTRAST_PIVOT: f32 = 0.5;

// D65 white in LMS.
const D65_LMS: [f32; 3] = [0.949237, 1.03542, 1.08728];

const LIN_TO_LMS: [[f32; 3]; 3] = [
    [3.90405e-1, 5.49941e-1, 8.92632e-3],
    [7.08416e-2, 9.63172e-1, 1.35775e-3],
    [2.31082e-2, 1.28021e-1, 9.36245e-1],
];

const LMS_TO_LIN: [[f32; 3]; 3] = [
    [2.85847e+0, -1.62879e+0, -2.48910e-2],
    [-2.10182e-1, 1.15820e+0, 3.24281e-4],
    [-4.18120e-2, -1.18169e-1, 1.06867e+0],
];

/// Bakes legacy grading on the CPU.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StripLutBaker {
    size: u32,
}

impl Default for StripLutBaker {
    fn default() -> Self {
        Self { size: DEFAULT_LUT_SIZE }
    }
}

impl StripLutBaker {
    /// Creates a baker for an `size^3` lattice.
    pub fn new(size: u32) -> CoreResult<Self> {
        if !(MIN_LUT_SIZE..=MAX_LUT_SIZE).contains(&size) {
            return Err(CoreError::InvalidLutSize {
                size,
                min: MIN_LUT_SIZE,
                max: MAX_LUT_SIZE,
            });
        }
        Ok(Self { size })
    }

    /// Lattice size.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Bakes `settings` into a strip texture.
    pub fn bake_strip(&self, settings: &ColorGradingSettings) -> CoreResult<BakedTexture> {
        let n = self.size;
        trace!(size = n, "StripLutBaker::bake_strip");

        let grade = Grade::new(settings);
        let scale = 1.0 / (n - 1) as f32;
        let width = n * n;
        let mut pixels = Vec::with_capacity((width * n) as usize);

        for y in 0..n {
            for x in 0..width {
                let rgb = [
                    (x % n) as f32 * scale,
                    y as f32 * scale,
                    (x / n) as f32 * scale,
                ];
                let [r, g, b] = grade.apply(rgb);
                pixels.push([r, g, b, 1.0]);
            }
        }

        debug!(size = n, width, height = n, "Baked legacy grading");
        BakedTexture::new(format!("Baked Lut {n}"), width, n, pixels)
    }
}

impl LutBaker for StripLutBaker {
    fn bake(&self, settings: &ColorGradingSettings) -> ConvertResult<Texture> {
        Ok(self.bake_strip(settings)?.into())
    }
}

enum Wheels {
    LiftGammaGain {
        lift: [f32; 3],
        gamma: [f32; 3],
        gain: [f32; 3],
    },
    SlopePowerOffset {
        slope: [f32; 3],
        power: [f32; 3],
        offset: [f32; 3],
    },
}

/// Legacy grading parameters resolved once per bake.
struct Grade<'a> {
    exposure: f32,
    balance: [f32; 3],
    mixer: [[f32; 3]; 3],
    wheels: Wheels,
    hue_shift: f32,
    saturation: f32,
    contrast: f32,
    curves: &'a CurvesSettings,
}

impl<'a> Grade<'a> {
    fn new(settings: &'a ColorGradingSettings) -> Self {
        let basic = &settings.basic;
        let mixer = &settings.channel_mixer;
        let wheels = &settings.color_wheels;

        let wheels = match wheels.mode {
            ColorWheelMode::Linear => Wheels::LiftGammaGain {
                lift: trackball(&wheels.linear.lift, 0.0),
                gamma: trackball(&wheels.linear.gamma, 1.0),
                gain: trackball(&wheels.linear.gain, 1.0),
            },
            ColorWheelMode::Log => Wheels::SlopePowerOffset {
                slope: trackball(&wheels.log.slope, 1.0),
                power: trackball(&wheels.log.power, 1.0),
                offset: trackball(&wheels.log.offset, 0.0),
            },
        };

        Self {
            exposure: basic.post_exposure.exp2(),
            balance: white_balance(basic.temperature, basic.tint),
            mixer: [
                [mixer.red.x, mixer.red.y, mixer.red.z],
                [mixer.green.x, mixer.green.y, mixer.green.z],
                [mixer.blue.x, mixer.blue.y, mixer.blue.z],
            ],
            wheels,
            hue_shift: basic.hue_shift,
            saturation: basic.saturation,
            contrast: basic.contrast,
            curves: &settings.curves,
        }
    }

    fn apply(&self, rgb: [f32; 3]) -> [f32; 3] {
        let mut c = rgb.map(|v| v * self.exposure);

        let mut lms = mul(&LIN_TO_LMS, c);
        for i in 0..3 {
            lms[i] *= self.balance[i];
        }
        c = mul(&LMS_TO_LIN, lms);

        c = mul(&self.mixer, c);

        match &self.wheels {
            Wheels::LiftGammaGain { lift, gamma, gain } => {
                for i in 0..3 {
                    let v = c[i] * gain[i] + lift[i] * (1.0 - c[i]);
                    c[i] = v.max(0.0).powf(1.0 / gamma[i].max(1e-4));
                }
            }
            Wheels::SlopePowerOffset { slope, power, offset } => {
                for i in 0..3 {
                    let v = (c[i] * slope[i] + offset[i]).max(0.0);
                    if power[i] != 1.0 {
                        c[i] = v.powf(power[i]);
                    } else {
                        c[i] = v;
                    }
                }
            }
        }

        if self.hue_shift != 0.0 {
            let (h, s, v) = rgb_to_hsv(c);
            c = hsv_to_rgb((h + self.hue_shift).rem_euclid(360.0), s, v);
        }

        let luma = luminance_rec709(c);
        c = c.map(|v| luma + self.saturation * (v - luma));

        c = c.map(|v| (v - CONTRAST_PIVOT) * self.contrast + CONTRAST_PIVOT);

        c = c.map(|v| tone(&self.curves.master, v.clamp(0.0, 1.0)));
        c[0] = tone(&self.curves.red, c[0]);
        c[1] = tone(&self.curves.green, c[1]);
        c[2] = tone(&self.curves.blue, c[2]);

        c.map(|v| v.clamp(0.0, 1.0))
    }
}

/// Per-channel wheel value: `neutral + rgb + alpha`.
fn trackball(c: &Color, neutral: f32) -> [f32; 3] {
    [neutral + c.r + c.a, neutral + c.g + c.a, neutral + c.b + c.a]
}

/// LMS scale factors moving the white point by `temperature` and `tint`
/// (both in `[-100, 100]`).
fn white_balance(temperature: f32, tint: f32) -> [f32; 3] {
    let t1 = temperature / 100.0;
    let t2 = tint / 100.0;

    // Daylight locus
    let x = 0.31271 - t1 * if t1 < 0.0 { 0.1 } else { 0.05 };
    let y = 2.87 * x - 3.0 * x * x - 0.275_095_07 + t2 * 0.05;

    let w = xy_to_lms(x, y);
    [D65_LMS[0] / w[0], D65_LMS[1] / w[1], D65_LMS[2] / w[2]]
}

fn xy_to_lms(x: f32, y: f32) -> [f32; 3] {
    let big_x = x / y;
    let big_z = (1.0 - x - y) / y;
    [
        0.7328 * big_x + 0.4296 - 0.1624 * big_z,
        -0.7036 * big_x + 1.6975 + 0.0061 * big_z,
        0.0030 * big_x + 0.0136 + 0.9834 * big_z,
    ]
}

/// Curves with no keys leave the channel alone.
fn tone(curve: &ColorGradingCurve, v: f32) -> f32 {
    if curve.curve.is_empty() {
        return v;
    }
    curve.evaluate(v)
}

#[inline]
fn mul(m: &[[f32; 3]; 3], v: [f32; 3]) -> [f32; 3] {
    [
        m[0][0] * v[0] + m[0][1] * v[1] + m[0][2] * v[2],
        m[1][0] * v[0] + m[1][1] * v[1] + m[1][2] * v[2],
        m[2][0] * v[0] + m[2][1] * v[1] + m[2][2] * v[2],
    ]
}

/// RGB to (hue degrees, saturation, value).
fn rgb_to_hsv(rgb: [f32; 3]) -> (f32, f32, f32) {
    let [r, g, b] = rgb;
    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    if delta <= f32::EPSILON || max <= 0.0 {
        return (0.0, 0.0, max);
    }

    let h = if max == r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };
    (h, delta / max, max)
}

fn hsv_to_rgb(h: f32, s: f32, v: f32) -> [f32; 3] {
    let c = v * s;
    let h_prime = h / 60.0;
    let x = c * (1.0 - ((h_prime % 2.0) - 1.0).abs());

    let (r1, g1, b1) = if h_prime < 1.0 {
        (c, x, 0.0)
    } else if h_prime < 2.0 {
        (x, c, 0.0)
    } else if h_prime < 3.0 {
        (0.0, c, x)
    } else if h_prime < 4.0 {
        (0.0, x, c)
    } else if h_prime < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };

    let m = v - c;
    [r1 + m, g1 + m, b1 + m]
}

/// Writes a strip LUT as an Adobe/Resolve `.cube` 3D LUT.
pub fn write_cube<P: AsRef<Path>>(path: P, lut: &BakedTexture) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path).with_context(|| format!("Failed to create: {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_cube_to(&mut writer, lut)?;
    writer.flush()?;
    Ok(())
}

/// Writes `.cube` text for a strip LUT to `writer`.
pub fn write_cube_to<W: Write>(writer: &mut W, lut: &BakedTexture) -> Result<()> {
    let Some(size) = lut.lut_size() else {
        bail!("{}x{} texture is not a strip LUT", lut.width, lut.height);
    };

    // Header
    writeln!(writer, "# Generated by pfx")?;
    writeln!(writer, "TITLE \"{}\"", lut.name)?;
    writeln!(writer, "LUT_3D_SIZE {}", size)?;
    writeln!(writer)?;

    // Data - R fastest, then G, then B
    for b in 0..size {
        for g in 0..size {
            for r in 0..size {
                let Some(px) = lut.pixel(r + b * size, g) else {
                    bail!("strip LUT is missing pixel ({}, {})", r + b * size, g);
                };
                writeln!(writer, "{:.6} {:.6} {:.6}", px[0], px[1], px[2])?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn bake(settings: &ColorGradingSettings, size: u32) -> BakedTexture {
        StripLutBaker::new(size).unwrap().bake_strip(settings).unwrap()
    }

    #[test]
    fn rejects_out_of_range_sizes() {
        assert!(matches!(
            StripLutBaker::new(1),
            Err(CoreError::InvalidLutSize { size: 1, .. })
        ));
        assert!(StripLutBaker::new(65).is_err());
        assert_eq!(StripLutBaker::new(2).unwrap().size(), 2);
        assert_eq!(StripLutBaker::default().size(), DEFAULT_LUT_SIZE);
    }

    #[test]
    fn strip_layout() {
        let lut = bake(&ColorGradingSettings::default(), 4);
        assert_eq!((lut.width, lut.height), (16, 4));
        assert_eq!(lut.lut_size(), Some(4));
        assert_eq!(lut.pixels.len(), 64);
    }

    #[test]
    fn default_grading_is_near_identity() {
        let n = 5;
        let lut = bake(&ColorGradingSettings::default(), n);
        let step = 1.0 / (n - 1) as f32;
        for b in 0..n {
            for g in 0..n {
                for r in 0..n {
                    let px = lut.pixel(r + b * n, g).unwrap();
                    assert_abs_diff_eq!(px[0], r as f32 * step, epsilon = 2e-3);
                    assert_abs_diff_eq!(px[1], g as f32 * step, epsilon = 2e-3);
                    assert_abs_diff_eq!(px[2], b as f32 * step, epsilon = 2e-3);
                    assert_eq!(px[3], 1.0);
                }
            }
        }
    }

    #[test]
    fn neutral_white_balance() {
        let w = white_balance(0.0, 0.0);
        for v in w {
            assert_abs_diff_eq!(v, 1.0, epsilon = 1e-3);
        }
        // Warmer: less blue
        let warm = white_balance(50.0, 0.0);
        assert!(warm[2] < w[2]);
    }

    #[test]
    fn exposure_brightens() {
        let mut settings = ColorGradingSettings::default();
        settings.basic.post_exposure = 1.0;
        let lut = bake(&settings, 3);
        // Mid grey lattice point (1,1,1) doubles and clips
        let px = lut.pixel(1 + 3, 1).unwrap();
        assert_abs_diff_eq!(px[0], 1.0, epsilon = 2e-3);
    }

    #[test]
    fn zero_saturation_is_grey() {
        let mut settings = ColorGradingSettings::default();
        settings.basic.saturation = 0.0;
        let lut = bake(&settings, 3);
        // Pure red corner
        let px = lut.pixel(2, 0).unwrap();
        assert_abs_diff_eq!(px[0], px[1], epsilon = 1e-4);
        assert_abs_diff_eq!(px[1], px[2], epsilon = 1e-4);
    }

    #[test]
    fn hue_shift_rotates_primaries() {
        let [r, g, b] = hsv_to_rgb(120.0, 1.0, 1.0);
        assert_abs_diff_eq!(r, 0.0, epsilon = 1e-6);
        assert_abs_diff_eq!(g, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(b, 0.0, epsilon = 1e-6);

        let (h, s, v) = rgb_to_hsv([0.0, 0.0, 1.0]);
        assert_abs_diff_eq!(h, 240.0, epsilon = 1e-4);
        assert_eq!((s, v), (1.0, 1.0));
    }

    #[test]
    fn mixer_swaps_channels() {
        let mut settings = ColorGradingSettings::default();
        settings.channel_mixer.red = pfx_core::Vector3::new(0.0, 0.0, 1.0);
        settings.channel_mixer.blue = pfx_core::Vector3::new(1.0, 0.0, 0.0);
        let lut = bake(&settings, 2);
        // Input pure blue (x = 0 + 1*2) comes out red
        let px = lut.pixel(2, 0).unwrap();
        assert!(px[0] > 0.9);
        assert!(px[2] < 0.1);
    }

    #[test]
    fn cube_text() {
        let lut = bake(&ColorGradingSettings::default(), 2);
        let mut out = Vec::new();
        write_cube_to(&mut out, &lut).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("LUT_3D_SIZE 2"));
        let rows: Vec<&str> = text
            .lines()
            .filter(|l| l.chars().next().is_some_and(|c| c.is_ascii_digit() || c == '-'))
            .collect();
        assert_eq!(rows.len(), 8);
        // Second row is r = 1, g = 0, b = 0
        let second: Vec<f32> = rows[1].split_whitespace().map(|v| v.parse().unwrap()).collect();
        assert_abs_diff_eq!(second[0], 1.0, epsilon = 2e-3);
        assert_abs_diff_eq!(second[1], 0.0, epsilon = 2e-3);
    }

    #[test]
    fn cube_rejects_non_strip() {
        let tex = BakedTexture::new("flat", 3, 2, vec![[0.0; 4]; 6]).unwrap();
        assert!(write_cube_to(&mut Vec::new(), &tex).is_err());
    }

    #[test]
    fn usable_as_capability() {
        let baker = StripLutBaker::new(2).unwrap();
        let tex = LutBaker::bake(&baker, &ColorGradingSettings::default()).unwrap();
        assert!(matches!(tex, Texture::Baked(t) if t.lut_size() == Some(2)));
    }
}
