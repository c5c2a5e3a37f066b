//! Vignette.

use pfx_core::Texture;
use pfx_legacy::VignetteSettings;
use pfx_profile::Vignette;
use tracing::trace;

use crate::mapping::{self, VIGNETTE_MODE};

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &[];

/// Converts legacy vignette settings.
///
/// Every field has a destination. The mask is marked overridden even when
/// the legacy document has none, clearing any inherited mask.
pub fn convert(settings: &VignetteSettings) -> Vignette {
    trace!(intensity = settings.intensity, mode = ?settings.mode, "converters::vignette");
    let mut out = Vignette::default();
    out.center.set(settings.center);
    out.color.set(settings.color);
    out.intensity.set(settings.intensity);
    out.mask.set(settings.mask.clone().map(Texture::from));
    mapping::assign(&mut out.mode, VIGNETTE_MODE, settings.mode, "mode");
    out.opacity.set(settings.opacity);
    out.rounded.set(settings.rounded);
    out.roundness.set(settings.roundness);
    out.smoothness.set(settings.smoothness);
    out
}
