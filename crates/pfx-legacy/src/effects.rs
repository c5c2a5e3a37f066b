//! Settings records for every legacy section except color grading.
//!
//! Field names follow the legacy document keys (camelCase on disk).
//! Defaults are the values of a freshly created legacy profile.

use pfx_core::{Color, TextureRef, Vector2};
use serde::{Deserialize, Serialize};

// ============================================================================
// Vignette
// ============================================================================

/// Vignette rendering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum VignetteMode {
    /// Procedural elliptical vignette.
    #[default]
    Classic,
    /// Texture-masked vignette.
    Masked,
}

/// Vignette section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct VignetteSettings {
    /// Rendering mode.
    pub mode: VignetteMode,
    /// Vignette tint.
    pub color: Color,
    /// Screen-space center.
    pub center: Vector2,
    /// Strength of the darkening.
    pub intensity: f32,
    /// Border falloff.
    pub smoothness: f32,
    /// Shape roundness (lower is squarer).
    pub roundness: f32,
    /// Mask texture for [`VignetteMode::Masked`].
    pub mask: Option<TextureRef>,
    /// Mask opacity.
    pub opacity: f32,
    /// Force a perfectly round shape.
    pub rounded: bool,
}

impl Default for VignetteSettings {
    fn default() -> Self {
        Self {
            mode: VignetteMode::Classic,
            color: Color::BLACK,
            center: Vector2::new(0.5, 0.5),
            intensity: 0.45,
            smoothness: 0.2,
            roundness: 1.0,
            mask: None,
            opacity: 1.0,
            rounded: false,
        }
    }
}

// ============================================================================
// Screen-space reflections
// ============================================================================

/// Reflection blending model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SsrBlendType {
    /// Energy-conserving blend.
    #[default]
    PhysicallyBased,
    /// Additive blend.
    Additive,
}

/// Reflection buffer resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SsrResolution {
    /// Full resolution.
    High,
    /// Intermediate resolution written by some editor builds.
    Medium,
    /// Half resolution.
    #[default]
    Low,
}

/// Ray-marching parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SsrReflectionSettings {
    /// Blending model.
    pub blend_type: SsrBlendType,
    /// Buffer resolution.
    pub reflection_quality: SsrResolution,
    /// Maximum ray distance in world units.
    pub max_distance: f32,
    /// Maximum march iterations.
    pub iteration_count: i32,
    /// Pixels skipped per step.
    pub step_size: i32,
    /// Assumed surface thickness.
    pub width_modifier: f32,
    /// Blur applied to reflections.
    pub reflection_blur: f32,
    /// Allow back-face hits.
    pub reflect_backfaces: bool,
}

impl Default for SsrReflectionSettings {
    fn default() -> Self {
        Self {
            blend_type: SsrBlendType::PhysicallyBased,
            reflection_quality: SsrResolution::Low,
            max_distance: 100.0,
            iteration_count: 256,
            step_size: 3,
            width_modifier: 0.5,
            reflection_blur: 1.0,
            reflect_backfaces: false,
        }
    }
}

/// Reflection strength parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SsrIntensitySettings {
    /// Reflection multiplier.
    pub reflection_multiplier: f32,
    /// Distance over which reflections fade out.
    pub fade_distance: f32,
    /// Fresnel fade amount.
    pub fresnel_fade: f32,
    /// Fresnel fade exponent.
    pub fresnel_fade_power: f32,
}

impl Default for SsrIntensitySettings {
    fn default() -> Self {
        Self {
            reflection_multiplier: 1.0,
            fade_distance: 100.0,
            fresnel_fade: 1.0,
            fresnel_fade_power: 1.0,
        }
    }
}

/// Screen-edge fade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenEdgeMask {
    /// Edge fade strength.
    pub intensity: f32,
}

impl Default for ScreenEdgeMask {
    fn default() -> Self {
        Self { intensity: 0.03 }
    }
}

/// Screen-space reflection section settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScreenSpaceReflectionSettings {
    /// Ray-marching parameters.
    pub reflection: SsrReflectionSettings,
    /// Strength parameters.
    pub intensity: SsrIntensitySettings,
    /// Screen-edge fade.
    pub screen_edge_mask: ScreenEdgeMask,
}

// ============================================================================
// Motion blur, grain, chromatic aberration
// ============================================================================

/// Motion blur section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MotionBlurSettings {
    /// Shutter angle in degrees.
    pub shutter_angle: f32,
    /// Samples per pixel.
    pub sample_count: i32,
    /// Multi-frame blending strength.
    pub frame_blending: f32,
}

impl Default for MotionBlurSettings {
    fn default() -> Self {
        Self {
            shutter_angle: 270.0,
            sample_count: 10,
            frame_blending: 0.0,
        }
    }
}

/// Film grain section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GrainSettings {
    /// Colored instead of monochrome grain.
    pub colored: bool,
    /// Grain strength.
    pub intensity: f32,
    /// Grain particle size.
    pub size: f32,
    /// How much scene luminance attenuates grain.
    pub luminance_contribution: f32,
}

impl Default for GrainSettings {
    fn default() -> Self {
        Self {
            colored: true,
            intensity: 0.5,
            size: 1.0,
            luminance_contribution: 0.8,
        }
    }
}

/// Chromatic aberration section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ChromaticAberrationSettings {
    /// Spectral lookup texture; `None` uses the built-in one.
    pub spectral_texture: Option<TextureRef>,
    /// Fringe strength.
    pub intensity: f32,
}

impl Default for ChromaticAberrationSettings {
    fn default() -> Self {
        Self {
            spectral_texture: None,
            intensity: 0.1,
        }
    }
}

// ============================================================================
// Depth of field
// ============================================================================

/// Bokeh kernel size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum KernelSize {
    /// Smallest kernel.
    Small,
    /// Medium kernel.
    #[default]
    Medium,
    /// Large kernel.
    Large,
    /// Largest kernel.
    VeryLarge,
}

/// Depth of field section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DepthOfFieldSettings {
    /// Distance to the focus plane.
    pub focus_distance: f32,
    /// F-stop.
    pub aperture: f32,
    /// Lens focal length in millimetres.
    pub focal_length: f32,
    /// Derive focal length from the camera field of view.
    pub use_camera_fov: bool,
    /// Bokeh kernel size.
    pub kernel_size: KernelSize,
}

impl Default for DepthOfFieldSettings {
    fn default() -> Self {
        Self {
            focus_distance: 10.0,
            aperture: 5.6,
            focal_length: 50.0,
            use_camera_fov: false,
            kernel_size: KernelSize::Medium,
        }
    }
}

// ============================================================================
// Eye adaptation
// ============================================================================

/// Exposure adaptation behaviour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EyeAdaptationType {
    /// Smoothly adapt over time.
    #[default]
    Progressive,
    /// Snap immediately.
    Fixed,
}

/// Eye adaptation section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EyeAdaptationSettings {
    /// Lower histogram percentile.
    pub low_percent: f32,
    /// Upper histogram percentile.
    pub high_percent: f32,
    /// Minimum average luminance (EV).
    pub min_luminance: f32,
    /// Maximum average luminance (EV).
    pub max_luminance: f32,
    /// Exposure key value.
    pub key_value: f32,
    /// Derive the key value from scene luminance.
    pub dynamic_key_value: bool,
    /// Adaptation behaviour.
    pub adaptation_type: EyeAdaptationType,
    /// Adaptation speed from dark to light.
    pub speed_up: f32,
    /// Adaptation speed from light to dark.
    pub speed_down: f32,
    /// Histogram lower bound (EV).
    pub log_min: i32,
    /// Histogram upper bound (EV).
    pub log_max: i32,
}

impl Default for EyeAdaptationSettings {
    fn default() -> Self {
        Self {
            low_percent: 45.0,
            high_percent: 95.0,
            min_luminance: -5.0,
            max_luminance: 1.0,
            key_value: 0.25,
            dynamic_key_value: true,
            adaptation_type: EyeAdaptationType::Progressive,
            speed_up: 2.0,
            speed_down: 1.0,
            log_min: -8,
            log_max: 4,
        }
    }
}

// ============================================================================
// Bloom
// ============================================================================

/// Core bloom parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BloomCore {
    /// Bloom strength.
    pub intensity: f32,
    /// Brightness threshold (gamma space).
    pub threshold: f32,
    /// Threshold knee.
    pub soft_knee: f32,
    /// Spread of the glow.
    pub radius: f32,
    /// Temporal flicker reduction.
    pub anti_flicker: bool,
}

impl Default for BloomCore {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            threshold: 1.1,
            soft_knee: 0.5,
            radius: 4.0,
            anti_flicker: false,
        }
    }
}

/// Lens dirt overlay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LensDirtSettings {
    /// Dirt texture; `None` disables the overlay.
    pub texture: Option<TextureRef>,
    /// Dirt strength.
    pub intensity: f32,
}

impl Default for LensDirtSettings {
    fn default() -> Self {
        Self {
            texture: None,
            intensity: 3.0,
        }
    }
}

/// Bloom section settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BloomSettings {
    /// Core parameters.
    pub bloom: BloomCore,
    /// Lens dirt overlay.
    pub lens_dirt: LensDirtSettings,
}

// ============================================================================
// Ambient occlusion
// ============================================================================

/// Ambient occlusion sample count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SampleCount {
    /// 3 samples.
    Lowest,
    /// 6 samples.
    Low,
    /// 10 samples.
    #[default]
    Medium,
    /// 16 samples.
    High,
}

/// Ambient occlusion section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AmbientOcclusionSettings {
    /// Darkening strength.
    pub intensity: f32,
    /// Sampling radius in world units.
    pub radius: f32,
    /// Samples per pixel.
    pub sample_count: SampleCount,
    /// Render at half resolution.
    pub downsampling: bool,
    /// Force the forward-compatible code path.
    pub force_forward_compatibility: bool,
    /// Apply only to ambient lighting.
    pub ambient_only: bool,
    /// Use a high precision occlusion buffer.
    pub high_precision: bool,
}

impl Default for AmbientOcclusionSettings {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            radius: 0.3,
            sample_count: SampleCount::Medium,
            downsampling: true,
            force_forward_compatibility: false,
            ambient_only: false,
            high_precision: false,
        }
    }
}

// ============================================================================
// User LUT, dithering, fog, anti-aliasing
// ============================================================================

/// User lookup table section settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UserLutSettings {
    /// Lookup table texture.
    pub lut: Option<TextureRef>,
    /// Blend amount.
    pub contribution: f32,
}

impl Default for UserLutSettings {
    fn default() -> Self {
        Self {
            lut: None,
            contribution: 1.0,
        }
    }
}

/// Dithering has no parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DitheringSettings {}

/// Fog section settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FogSettings {
    /// Leave the skybox unfogged.
    pub exclude_skybox: bool,
}

impl Default for FogSettings {
    fn default() -> Self {
        Self { exclude_skybox: true }
    }
}

/// Anti-aliasing algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AntialiasingMethod {
    /// Fast approximate anti-aliasing.
    Fxaa,
    /// Temporal anti-aliasing.
    #[default]
    Taa,
}

/// FXAA quality preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FxaaPreset {
    /// Fastest preset.
    ExtremePerformance,
    /// Performance preset.
    Performance,
    /// Balanced preset.
    #[default]
    Default,
    /// Quality preset.
    Quality,
    /// Highest quality preset.
    ExtremeQuality,
}

/// FXAA parameters.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FxaaSettings {
    /// Quality preset.
    pub preset: FxaaPreset,
}

/// TAA parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TaaSettings {
    /// Jitter spread in pixels.
    pub jitter_spread: f32,
    /// Sharpening strength.
    pub sharpen: f32,
    /// History blend for static pixels.
    pub stationary_blending: f32,
    /// History blend for moving pixels.
    pub motion_blending: f32,
}

impl Default for TaaSettings {
    fn default() -> Self {
        Self {
            jitter_spread: 0.75,
            sharpen: 0.3,
            stationary_blending: 0.95,
            motion_blending: 0.85,
        }
    }
}

/// Anti-aliasing section settings.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AntialiasingSettings {
    /// Selected algorithm.
    pub method: AntialiasingMethod,
    /// FXAA parameters.
    pub fxaa_settings: FxaaSettings,
    /// TAA parameters.
    pub taa_settings: TaaSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_section_keeps_defaults() {
        let s: BloomSettings = serde_yaml::from_str("bloom:\n  intensity: 2.0\n").unwrap();
        assert_eq!(s.bloom.intensity, 2.0);
        assert_eq!(s.bloom.radius, 4.0);
        assert_eq!(s.lens_dirt.intensity, 3.0);
    }

    #[test]
    fn enum_names_on_disk() {
        let s: DepthOfFieldSettings = serde_yaml::from_str("kernelSize: VeryLarge\nuseCameraFov: true\n").unwrap();
        assert_eq!(s.kernel_size, KernelSize::VeryLarge);
        assert!(s.use_camera_fov);
    }

    #[test]
    fn ssr_defaults() {
        let s = ScreenSpaceReflectionSettings::default();
        assert_eq!(s.reflection.reflection_quality, SsrResolution::Low);
        assert_eq!(s.reflection.iteration_count, 256);
        assert_eq!(s.screen_edge_mask.intensity, 0.03);
    }

    #[test]
    fn texture_reference_parses() {
        let s: ChromaticAberrationSettings =
            serde_yaml::from_str("spectralTexture:\n  guid: 0f1e2d\nintensity: 0.4\n").unwrap();
        assert_eq!(s.spectral_texture.map(|t| t.guid), Some("0f1e2d".to_string()));
    }
}
