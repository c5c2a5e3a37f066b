//! Eye adaptation to auto exposure.

use pfx_legacy::EyeAdaptationSettings;
use pfx_profile::AutoExposure;
use tracing::trace;

use crate::mapping;

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &["dynamicKeyValue", "highPercent", "logMax", "logMin", "lowPercent"];

/// Converts legacy eye adaptation settings.
///
/// The histogram filtering range is not derived from the legacy
/// percentages and stays unowned.
pub fn convert(settings: &EyeAdaptationSettings) -> AutoExposure {
    trace!(kind = ?settings.adaptation_type, "converters::eye_adaptation");
    let mut out = AutoExposure::default();
    out.eye_adaptation.set(mapping::eye_adaptation(settings.adaptation_type));
    out.key_value.set(settings.key_value);
    out.max_luminance.set(settings.max_luminance);
    out.min_luminance.set(settings.min_luminance);
    out.speed_down.set(settings.speed_down);
    out.speed_up.set(settings.speed_up);
    out
}
