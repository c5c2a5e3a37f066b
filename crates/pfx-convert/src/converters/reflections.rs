//! Screen-space reflections.

use pfx_legacy::ScreenSpaceReflectionSettings;
use pfx_profile::{EffectSettings, ScreenSpaceReflections};
use tracing::trace;

use crate::mapping::{self, SSR_RESOLUTION};

/// Legacy fields with no destination.
pub const UNSUPPORTED: &[&str] = &[
    "intensity.fresnelFade",
    "intensity.fresnelFadePower",
    "intensity.reflectionMultiplier",
    "reflection.blendType",
    "reflection.reflectBackfaces",
    "reflection.reflectionBlur",
    "reflection.stepSize",
];

/// Converts legacy screen-space reflection settings.
///
/// Every destination field is marked overridden first, so fields without a
/// legacy source (the preset in particular) adopt the destination default
/// while still being owned by this profile.
pub fn convert(settings: &ScreenSpaceReflectionSettings) -> ScreenSpaceReflections {
    let reflection = &settings.reflection;
    trace!(
        iterations = reflection.iteration_count,
        quality = ?reflection.reflection_quality,
        "converters::reflections"
    );
    let mut out = ScreenSpaceReflections::default();
    out.set_all_overrides(true);

    out.distance_fade.set(settings.intensity.fade_distance);
    out.maximum_iteration_count.set(reflection.iteration_count);
    out.maximum_march_distance.set(reflection.max_distance);
    mapping::assign(
        &mut out.resolution,
        SSR_RESOLUTION,
        reflection.reflection_quality,
        "resolution",
    );
    out.thickness.set(reflection.width_modifier);
    out.vignette.set(settings.screen_edge_mask.intensity);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pfx_legacy::SsrResolution;
    use pfx_profile::{ScreenSpaceReflectionPreset, ScreenSpaceReflectionResolution};

    #[test]
    fn assigns_mapped_fields() {
        let mut legacy = ScreenSpaceReflectionSettings::default();
        legacy.intensity.fade_distance = 42.0;
        legacy.reflection.iteration_count = 128;
        legacy.reflection.max_distance = 250.0;
        legacy.reflection.width_modifier = 0.75;
        legacy.reflection.reflection_quality = SsrResolution::High;
        legacy.screen_edge_mask.intensity = 0.1;

        let s = convert(&legacy);
        assert_eq!(s.distance_fade.get(), 42.0);
        assert_eq!(s.maximum_iteration_count.get(), 128);
        assert_eq!(s.maximum_march_distance.get(), 250.0);
        assert_eq!(s.thickness.get(), 0.75);
        assert_eq!(s.vignette.get(), 0.1);
        assert_eq!(s.resolution.get(), ScreenSpaceReflectionResolution::FullSize);
    }

    #[test]
    fn unsourced_fields_owned_at_default() {
        let s = convert(&ScreenSpaceReflectionSettings::default());
        assert!(s.preset.overridden());
        assert_eq!(s.preset.get(), ScreenSpaceReflectionPreset::Medium);
        assert!(s.overrides().iter().all(|(_, o)| *o));
    }

    #[test]
    fn low_quality_is_downsampled() {
        let s = convert(&ScreenSpaceReflectionSettings::default());
        assert_eq!(s.resolution.get(), ScreenSpaceReflectionResolution::Downsampled);
    }

    #[test]
    fn medium_quality_keeps_destination_default() {
        let mut legacy = ScreenSpaceReflectionSettings::default();
        legacy.reflection.reflection_quality = SsrResolution::Medium;
        let s = convert(&legacy);
        assert!(s.resolution.overridden());
        assert_eq!(s.resolution.get(), ScreenSpaceReflectionResolution::default());
    }
}
