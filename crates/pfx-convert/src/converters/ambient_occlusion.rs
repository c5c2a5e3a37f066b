//! Ambient occlusion.

use pfx_legacy::AmbientOcclusionSettings;
use pfx_profile::AmbientOcclusion;
use tracing::trace;

use crate::mapping::{self, AO_QUALITY};

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &["downsampling", "forceForwardCompatibility", "highPrecision"];

/// Legacy intensity to new intensity.
pub const INTENSITY_SCALE: f32 = 0.5;

/// Converts legacy ambient occlusion settings.
pub fn convert(settings: &AmbientOcclusionSettings) -> AmbientOcclusion {
    trace!(intensity = settings.intensity, samples = ?settings.sample_count, "converters::ambient_occlusion");
    let mut out = AmbientOcclusion::default();
    out.ambient_only.set(settings.ambient_only);
    out.intensity.set(settings.intensity * INTENSITY_SCALE);
    mapping::assign(&mut out.quality, AO_QUALITY, settings.sample_count, "quality");
    out.radius.set(settings.radius);
    out
}
