//! Film grain.

use pfx_legacy::GrainSettings;
use pfx_profile::Grain;
use tracing::trace;

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &[];

/// Converts legacy grain settings.
pub fn convert(settings: &GrainSettings) -> Grain {
    trace!(intensity = settings.intensity, "converters::grain");
    let mut out = Grain::default();
    out.colored.set(settings.colored);
    out.intensity.set(settings.intensity);
    out.lum_contrib.set(settings.luminance_contribution);
    out.size.set(settings.size);
    out
}
