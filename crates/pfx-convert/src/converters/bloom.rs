//! Bloom and lens dirt.

use pfx_core::Texture;
use pfx_legacy::BloomSettings;
use pfx_profile::Bloom;
use tracing::trace;

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &["bloom.antiFlicker"];

/// Legacy intensity to new intensity. Matched visually against the legacy
/// renderer; keep exact.
pub const INTENSITY_SCALE: f32 = 3.0;

/// Legacy radius to new diffusion. Matched visually against the legacy
/// renderer; keep exact.
pub const RADIUS_TO_DIFFUSION: f32 = 2.0;

/// Converts legacy bloom settings.
///
/// The dirt texture is only marked overridden when the legacy document
/// has one.
pub fn convert(settings: &BloomSettings) -> Bloom {
    let core = &settings.bloom;
    trace!(intensity = core.intensity, radius = core.radius, "converters::bloom");
    let mut out = Bloom::default();
    out.intensity.set(core.intensity * INTENSITY_SCALE);
    out.diffusion.set(core.radius * RADIUS_TO_DIFFUSION);
    out.soft_knee.set(core.soft_knee);
    out.threshold.set(core.threshold);

    let dirt = &settings.lens_dirt;
    out.dirt_intensity.set(dirt.intensity);
    let texture = dirt.texture.clone().map(Texture::from);
    let present = texture.is_some();
    out.dirt_texture.set_with_override(texture, present);
    out
}
