//! Enum translation tables.
//!
//! Each table lists every legacy value that has a destination. A legacy
//! value missing from its table is reported as unmapped: the destination
//! field keeps its default value (still marked overridden) and a warning is
//! logged. Eye adaptation is not a table but a many-to-one collapse, see
//! [`eye_adaptation`].

use std::fmt::Debug;

use pfx_core::Param;
use pfx_legacy as v1;
use pfx_legacy::{LegacyEffect, LegacyProfile};
use pfx_profile as v2;
use tracing::warn;

use crate::report::UnmappedValue;

/// Vignette mode.
pub const VIGNETTE_MODE: &[(v1::VignetteMode, v2::VignetteMode)] = &[
    (v1::VignetteMode::Classic, v2::VignetteMode::Classic),
    (v1::VignetteMode::Masked, v2::VignetteMode::Masked),
];

/// Reflection buffer resolution. `Medium` has no destination.
pub const SSR_RESOLUTION: &[(v1::SsrResolution, v2::ScreenSpaceReflectionResolution)] = &[
    (v1::SsrResolution::High, v2::ScreenSpaceReflectionResolution::FullSize),
    (v1::SsrResolution::Low, v2::ScreenSpaceReflectionResolution::Downsampled),
];

/// Depth of field kernel size.
pub const KERNEL_SIZE: &[(v1::KernelSize, v2::KernelSize)] = &[
    (v1::KernelSize::Small, v2::KernelSize::Small),
    (v1::KernelSize::Medium, v2::KernelSize::Medium),
    (v1::KernelSize::Large, v2::KernelSize::Large),
    (v1::KernelSize::VeryLarge, v2::KernelSize::VeryLarge),
];

/// Ambient occlusion sample count to quality. `Ultra` has no source.
pub const AO_QUALITY: &[(v1::SampleCount, v2::AmbientOcclusionQuality)] = &[
    (v1::SampleCount::Lowest, v2::AmbientOcclusionQuality::Lowest),
    (v1::SampleCount::Low, v2::AmbientOcclusionQuality::Low),
    (v1::SampleCount::Medium, v2::AmbientOcclusionQuality::Medium),
    (v1::SampleCount::High, v2::AmbientOcclusionQuality::High),
];

/// Tonemapping operator. `Custom` has no source.
pub const TONEMAPPER: &[(v1::Tonemapper, v2::Tonemapper)] = &[
    (v1::Tonemapper::None, v2::Tonemapper::None),
    (v1::Tonemapper::Aces, v2::Tonemapper::Aces),
    (v1::Tonemapper::Neutral, v2::Tonemapper::Neutral),
];

/// Looks up `key` in `table`.
pub fn lookup<A: PartialEq + Copy, B: Copy>(table: &[(A, B)], key: A) -> Option<B> {
    table.iter().find(|(from, _)| *from == key).map(|(_, to)| *to)
}

/// Collapses the legacy adaptation type: `Fixed` stays fixed, anything
/// else adapts progressively.
pub fn eye_adaptation(kind: v1::EyeAdaptationType) -> v2::EyeAdaptation {
    match kind {
        v1::EyeAdaptationType::Fixed => v2::EyeAdaptation::Fixed,
        _ => v2::EyeAdaptation::Progressive,
    }
}

/// Marks `param` overridden and writes the mapped value, if any.
pub(crate) fn assign<A, B>(param: &mut Param<B>, table: &[(A, B)], key: A, field: &str)
where
    A: PartialEq + Copy + Debug,
    B: Copy,
{
    param.set_override(true);
    match lookup(table, key) {
        Some(value) => param.set(value),
        None => warn!(field, value = ?key, "No mapping for legacy value, keeping destination default"),
    }
}

/// Lists the table-mapped fields of enabled sections whose value has no
/// destination.
pub fn unmapped_values(legacy: &LegacyProfile) -> Vec<UnmappedValue> {
    let mut out = Vec::new();
    let mut check = |effect: LegacyEffect, field: &'static str, found: bool, value: &dyn Debug| {
        if legacy.is_enabled(effect) && !found {
            out.push(UnmappedValue {
                effect,
                field,
                value: format!("{value:?}"),
            });
        }
    };

    let v = &legacy.vignette.settings;
    check(
        LegacyEffect::Vignette,
        "mode",
        lookup(VIGNETTE_MODE, v.mode).is_some(),
        &v.mode,
    );
    let q = legacy.screen_space_reflection.settings.reflection.reflection_quality;
    check(
        LegacyEffect::ScreenSpaceReflection,
        "reflection.reflectionQuality",
        lookup(SSR_RESOLUTION, q).is_some(),
        &q,
    );
    let k = legacy.depth_of_field.settings.kernel_size;
    check(
        LegacyEffect::DepthOfField,
        "kernelSize",
        lookup(KERNEL_SIZE, k).is_some(),
        &k,
    );
    let s = legacy.ambient_occlusion.settings.sample_count;
    check(
        LegacyEffect::AmbientOcclusion,
        "sampleCount",
        lookup(AO_QUALITY, s).is_some(),
        &s,
    );
    let t = legacy.color_grading.settings.tonemapping.tonemapper;
    check(
        LegacyEffect::ColorGrading,
        "tonemapping.tonemapper",
        lookup(TONEMAPPER, t).is_some(),
        &t,
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ao_quality_is_bijective_over_four_levels() {
        let sources = [
            v1::SampleCount::Lowest,
            v1::SampleCount::Low,
            v1::SampleCount::Medium,
            v1::SampleCount::High,
        ];
        let mapped: Vec<_> = sources.iter().map(|s| lookup(AO_QUALITY, *s).unwrap()).collect();
        assert_eq!(
            mapped,
            vec![
                v2::AmbientOcclusionQuality::Lowest,
                v2::AmbientOcclusionQuality::Low,
                v2::AmbientOcclusionQuality::Medium,
                v2::AmbientOcclusionQuality::High,
            ]
        );
        for (i, a) in mapped.iter().enumerate() {
            for b in &mapped[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn kernel_size_is_total() {
        for k in [
            v1::KernelSize::Small,
            v1::KernelSize::Medium,
            v1::KernelSize::Large,
            v1::KernelSize::VeryLarge,
        ] {
            assert!(lookup(KERNEL_SIZE, k).is_some(), "{k:?}");
        }
    }

    #[test]
    fn tonemapper_is_total() {
        assert_eq!(lookup(TONEMAPPER, v1::Tonemapper::Aces), Some(v2::Tonemapper::Aces));
        assert_eq!(lookup(TONEMAPPER, v1::Tonemapper::None), Some(v2::Tonemapper::None));
        assert_eq!(lookup(TONEMAPPER, v1::Tonemapper::Neutral), Some(v2::Tonemapper::Neutral));
    }

    #[test]
    fn ssr_medium_is_unmapped() {
        assert_eq!(
            lookup(SSR_RESOLUTION, v1::SsrResolution::High),
            Some(v2::ScreenSpaceReflectionResolution::FullSize)
        );
        assert_eq!(lookup(SSR_RESOLUTION, v1::SsrResolution::Medium), None);
    }

    #[test]
    fn eye_adaptation_collapses() {
        assert_eq!(eye_adaptation(v1::EyeAdaptationType::Fixed), v2::EyeAdaptation::Fixed);
        assert_eq!(
            eye_adaptation(v1::EyeAdaptationType::Progressive),
            v2::EyeAdaptation::Progressive
        );
    }

    #[test]
    fn assign_keeps_default_and_override_for_unmapped() {
        let mut p = Param::new(v2::ScreenSpaceReflectionResolution::Supersampled);
        assign(&mut p, SSR_RESOLUTION, v1::SsrResolution::Medium, "resolution");
        assert!(p.overridden());
        assert_eq!(p.get(), v2::ScreenSpaceReflectionResolution::Supersampled);
    }

    #[test]
    fn unmapped_only_for_enabled_sections() {
        let mut legacy = LegacyProfile::default();
        legacy.screen_space_reflection.settings.reflection.reflection_quality = v1::SsrResolution::Medium;
        assert!(unmapped_values(&legacy).is_empty());

        legacy.screen_space_reflection.enabled = true;
        let found = unmapped_values(&legacy);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].effect, LegacyEffect::ScreenSpaceReflection);
        assert_eq!(found[0].value, "Medium");
    }
}
