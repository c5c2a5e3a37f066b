//! Color grading through a baked lookup table.
//!
//! Instead of translating fields, the legacy grading is baked by a
//! [`LutBaker`] and attached as the LDR lookup table at full contribution.
//! Auto exposure is pinned to a fixed neutral exposure so the baked table
//! sees the same input range the legacy pass did.

use pfx_legacy::ColorGradingSettings;
use pfx_profile::{AutoExposure, ColorGrading, EffectKind, EyeAdaptation, GradingMode, Profile};
use tracing::{trace, warn};

use crate::{ConvertResult, LutBaker};

/// Legacy fields with no destination: all of them are folded into the
/// baked table.
pub const UNSUPPORTED: &[&str] = &[];

/// Weight of the baked table.
pub const LUT_CONTRIBUTION: f32 = 1.0;

/// Exposure key value that leaves the image unchanged.
pub const NEUTRAL_KEY_VALUE: f32 = 1.0;

/// Bakes `settings` and adds the resulting grading entry to `profile`.
///
/// An auto exposure entry already present (from a converted eye adaptation
/// section) is updated in place rather than duplicated.
pub fn convert(
    profile: &mut Profile,
    settings: &ColorGradingSettings,
    baker: &dyn LutBaker,
) -> ConvertResult<()> {
    trace!("converters::lut");
    let lut = baker.bake(settings)?;

    let mut grading = ColorGrading::default();
    grading.grading_mode.set(GradingMode::LowDefinitionRange);
    grading.ldr_lut.set(Some(lut));
    grading.ldr_lut_contribution.set(LUT_CONTRIBUTION);
    profile.insert(grading)?;

    if profile.contains(EffectKind::AutoExposure) {
        warn!("Auto exposure already converted, pinning it to a fixed neutral exposure");
    }
    let exposure = profile.get_or_insert_default::<AutoExposure>()?;
    exposure.eye_adaptation.set(EyeAdaptation::Fixed);
    exposure.key_value.set(NEUTRAL_KEY_VALUE);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ConvertError;
    use pfx_core::{Texture, TextureRef};
    use pfx_profile::EffectSettings;

    fn fixed_baker(_: &ColorGradingSettings) -> ConvertResult<Texture> {
        Ok(Texture::Asset(TextureRef::new("baked")))
    }

    #[test]
    fn attaches_baked_table() {
        let mut p = Profile::new();
        convert(&mut p, &ColorGradingSettings::default(), &fixed_baker).unwrap();

        let cg = p.settings::<ColorGrading>().unwrap();
        assert_eq!(cg.grading_mode.get(), GradingMode::LowDefinitionRange);
        assert_eq!(cg.ldr_lut.value(), &Some(Texture::Asset(TextureRef::new("baked"))));
        assert_eq!(cg.ldr_lut_contribution.get(), 1.0);
        assert_eq!(
            cg.overridden_fields(),
            vec!["gradingMode", "ldrLut", "ldrLutContribution"]
        );

        let ae = p.settings::<AutoExposure>().unwrap();
        assert_eq!(ae.eye_adaptation.get(), EyeAdaptation::Fixed);
        assert_eq!(ae.key_value.get(), 1.0);
        assert_eq!(ae.overridden_fields(), vec!["keyValue", "eyeAdaptation"]);
    }

    #[test]
    fn merges_into_existing_auto_exposure() {
        let mut p = Profile::new();
        let mut ae = AutoExposure::default();
        ae.speed_up.set(4.0);
        ae.key_value.set(0.3);
        p.insert(ae).unwrap();

        convert(&mut p, &ColorGradingSettings::default(), &fixed_baker).unwrap();

        let ae = p.settings::<AutoExposure>().unwrap();
        assert_eq!(ae.speed_up.get(), 4.0);
        assert_eq!(ae.key_value.get(), NEUTRAL_KEY_VALUE);
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn baker_failure_propagates() {
        let failing = |_: &ColorGradingSettings| -> ConvertResult<Texture> { Err(ConvertError::bake("no device")) };
        let mut p = Profile::new();
        let err = convert(&mut p, &ColorGradingSettings::default(), &failing).unwrap_err();
        assert!(matches!(err, ConvertError::Bake { .. }));
        assert!(p.is_empty());
    }
}
