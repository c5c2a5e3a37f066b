//! Depth of field.

use pfx_legacy::DepthOfFieldSettings;
use pfx_profile::DepthOfField;
use tracing::trace;

use crate::mapping::{self, KERNEL_SIZE};

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &["useCameraFov"];

/// Converts legacy depth of field settings.
pub fn convert(settings: &DepthOfFieldSettings) -> DepthOfField {
    trace!(
        focus_distance = settings.focus_distance,
        aperture = settings.aperture,
        "converters::depth_of_field"
    );
    let mut out = DepthOfField::default();
    out.aperture.set(settings.aperture);
    out.focal_length.set(settings.focal_length);
    out.focus_distance.set(settings.focus_distance);
    mapping::assign(&mut out.kernel_size, KERNEL_SIZE, settings.kernel_size, "kernelSize");
    out
}
