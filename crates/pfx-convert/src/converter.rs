//! Conversion orchestrator.

use pfx_core::Texture;
use pfx_legacy::{LegacyEffect, LegacyProfile};
use pfx_profile::{ColorGrading, Effect, EffectKind, Profile};
use tracing::{debug, info};

use crate::converters;
use crate::mapping::unmapped_values;
use crate::report::{ConversionReport, DroppedFields};
use crate::{ColorGradingPath, ConvertError, ConvertOptions, ConvertResult, LutBaker};

/// Blend weight of the legacy user table; the external table is always
/// applied at full strength.
pub const USER_LUT_UNSUPPORTED: &[&str] = &["userLut.contribution"];

/// Legacy sections that never produce an entry: anti-aliasing is a camera
/// concern, dithering has no equivalent and fog lives outside profiles.
pub const EXCLUDED: [LegacyEffect; 3] = [
    LegacyEffect::Antialiasing,
    LegacyEffect::Dithering,
    LegacyEffect::Fog,
];

/// Converts legacy profiles into current ones.
///
/// A converter holds only options and an optional baker; every call starts
/// from a fresh profile, so one converter can be shared across threads.
///
/// # Example
///
/// ```rust
/// use pfx_convert::{ConvertOptions, Converter};
/// use pfx_legacy::LegacyProfile;
/// use pfx_profile::{Bloom, EffectKind};
///
/// let mut legacy = LegacyProfile::default();
/// legacy.bloom.enabled = true;
/// legacy.bloom.settings.bloom.intensity = 0.5;
///
/// let profile = Converter::new(ConvertOptions::default()).convert(&legacy).unwrap();
/// assert!(profile.contains(EffectKind::Bloom));
/// assert_eq!(profile.settings::<Bloom>().unwrap().intensity.get(), 1.5);
/// ```
#[derive(Clone, Copy, Default)]
pub struct Converter<'a> {
    options: ConvertOptions,
    baker: Option<&'a dyn LutBaker>,
}

impl<'a> Converter<'a> {
    /// Creates a converter without a LUT baker.
    pub fn new(options: ConvertOptions) -> Self {
        Self { options, baker: None }
    }

    /// Supplies the baker used by [`ColorGradingPath::LegacyLut`].
    pub fn with_baker(mut self, baker: &'a dyn LutBaker) -> Self {
        self.baker = Some(baker);
        self
    }

    /// Options in use.
    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }

    /// Converts `legacy`, discarding the report.
    pub fn convert(&self, legacy: &LegacyProfile) -> ConvertResult<Profile> {
        self.convert_with_report(legacy).map(|(profile, _)| profile)
    }

    /// Converts `legacy` and reports what was excluded, dropped or left
    /// unmapped.
    pub fn convert_with_report(&self, legacy: &LegacyProfile) -> ConvertResult<(Profile, ConversionReport)> {
        let mut profile = Profile::new();
        let mut report = ConversionReport::default();

        let mut add = |profile: &mut Profile, effect: Effect, dropped: &'static [&'static str]| -> ConvertResult<()> {
            let kind = effect.kind();
            profile.insert(effect)?;
            debug!(effect = %kind, overridden = profile.get(kind).map_or(0, Effect::overridden_count), "Converted");
            report.converted.push(kind);
            report.dropped.push(DroppedFields { effect: kind, fields: dropped });
            Ok(())
        };

        if legacy.vignette.enabled {
            let e = converters::vignette::convert(&legacy.vignette.settings);
            add(&mut profile, e.into(), converters::vignette::UNSUPPORTED)?;
        }
        if legacy.screen_space_reflection.enabled {
            let e = converters::reflections::convert(&legacy.screen_space_reflection.settings);
            add(&mut profile, e.into(), converters::reflections::UNSUPPORTED)?;
        }
        if legacy.motion_blur.enabled {
            let e = converters::motion_blur::convert(&legacy.motion_blur.settings);
            add(&mut profile, e.into(), converters::motion_blur::UNSUPPORTED)?;
        }
        if legacy.grain.enabled {
            let e = converters::grain::convert(&legacy.grain.settings);
            add(&mut profile, e.into(), converters::grain::UNSUPPORTED)?;
        }
        if legacy.chromatic_aberration.enabled {
            let e = converters::chromatic_aberration::convert(&legacy.chromatic_aberration.settings);
            add(&mut profile, e.into(), converters::chromatic_aberration::UNSUPPORTED)?;
        }
        if legacy.depth_of_field.enabled {
            let e = converters::depth_of_field::convert(&legacy.depth_of_field.settings);
            add(&mut profile, e.into(), converters::depth_of_field::UNSUPPORTED)?;
        }
        if legacy.eye_adaptation.enabled {
            let e = converters::eye_adaptation::convert(&legacy.eye_adaptation.settings);
            add(&mut profile, e.into(), converters::eye_adaptation::UNSUPPORTED)?;
        }
        if legacy.ambient_occlusion.enabled {
            let e = converters::ambient_occlusion::convert(&legacy.ambient_occlusion.settings);
            add(&mut profile, e.into(), converters::ambient_occlusion::UNSUPPORTED)?;
        }
        if legacy.bloom.enabled {
            let e = converters::bloom::convert(&legacy.bloom.settings);
            add(&mut profile, e.into(), converters::bloom::UNSUPPORTED)?;
        }

        if legacy.color_grading.enabled {
            let settings = &legacy.color_grading.settings;
            match self.options.color_grading {
                ColorGradingPath::Direct => {
                    let e = converters::color_grading::convert(settings);
                    add(&mut profile, e.into(), converters::color_grading::UNSUPPORTED)?;
                }
                ColorGradingPath::LegacyLut => {
                    let baker = self.baker.ok_or(ConvertError::BakerUnavailable)?;
                    let had_exposure = profile.contains(EffectKind::AutoExposure);
                    converters::lut::convert(&mut profile, settings, baker)?;
                    report.converted.push(EffectKind::ColorGrading);
                    report.dropped.push(DroppedFields {
                        effect: EffectKind::ColorGrading,
                        fields: converters::lut::UNSUPPORTED,
                    });
                    if !had_exposure {
                        report.converted.push(EffectKind::AutoExposure);
                    }
                    debug!(effect = %EffectKind::ColorGrading, "Converted through baked LUT");
                }
            }
        }

        if apply_user_lut(&mut profile, legacy) {
            report.dropped.push(DroppedFields {
                effect: EffectKind::ColorGrading,
                fields: USER_LUT_UNSUPPORTED,
            });
        }

        for effect in LegacyEffect::ALL {
            if EXCLUDED.contains(&effect) {
                if legacy.is_enabled(effect) {
                    debug!(effect = %effect, "Skipped, section has no destination");
                    report.excluded.push(effect);
                }
            } else if !legacy.is_enabled(effect) {
                debug!(effect = %effect, "Skipped, section disabled");
            }
        }

        report.unmapped = unmapped_values(legacy);
        info!(
            converted = report.converted.len(),
            excluded = report.excluded.len(),
            dropped = report.dropped_count(),
            unmapped = report.unmapped.len(),
            "Conversion complete"
        );
        Ok((profile, report))
    }
}

/// Reuses the legacy user lookup table as the grading entry's external
/// table, whichever path produced that entry. Returns whether it did.
fn apply_user_lut(profile: &mut Profile, legacy: &LegacyProfile) -> bool {
    let Some(lut) = &legacy.user_lut.settings.lut else {
        return false;
    };
    let Some(grading) = profile.settings_mut::<ColorGrading>() else {
        return false;
    };
    debug!(guid = %lut.guid, "Carrying user LUT over as external LUT");
    grading.external_lut.set(Some(Texture::Asset(lut.clone())));
    true
}

/// Converts `legacy` with default options: direct color grading, no baker.
pub fn convert(legacy: &LegacyProfile) -> ConvertResult<Profile> {
    Converter::default().convert(legacy)
}
