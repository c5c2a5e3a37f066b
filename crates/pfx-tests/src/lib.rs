//! Integration tests for pfx crates.
//!
//! End-to-end checks across `pfx-io` and `pfx-convert`: documents are
//! written to a temporary directory, read back, converted and written
//! again next to the source, the way a host migrates profiles on disk.

/// A hand-authored legacy document exercising most sections.
pub const NIGHT_LEGACY_YAML: &str = r#"
schema: 1
name: Night Exterior
profile:
  antialiasing:
    enabled: true
  fog:
    enabled: true
  vignette:
    enabled: true
    settings:
      mode: Classic
      intensity: 0.35
      smoothness: 0.4
      center: { x: 0.5, y: 0.45 }
  screenSpaceReflection:
    enabled: true
    settings:
      reflection:
        reflectionQuality: Medium
        maxDistance: 80
        iterationCount: 128
  bloom:
    enabled: true
    settings:
      bloom:
        intensity: 0.8
        threshold: 0.9
        radius: 3
      lensDirt:
        texture: { guid: "5f1c0d2e9a3b4c7d8e9f0a1b2c3d4e5f" }
        intensity: 2
  ambientOcclusion:
    enabled: true
    settings:
      intensity: 1.4
      radius: 0.5
      sampleCount: High
  eyeAdaptation:
    enabled: true
    settings:
      adaptationType: Fixed
      keyValue: 0.18
  colorGrading:
    enabled: true
    settings:
      tonemapping:
        tonemapper: ACES
      basic:
        postExposure: 0.5
        saturation: 1.2
        contrast: 0.9
      channelMixer:
        red: { x: 0.9, y: 0.1, z: 0 }
  userLut:
    enabled: false
    settings:
      lut: { guid: "0a0b0c0d" }
      contribution: 0.6
"#;

#[cfg(test)]
mod tests {
    use super::NIGHT_LEGACY_YAML;
    use approx::assert_relative_eq;
    use pfx_convert::{ColorGradingPath, ConvertOptions, Converter, LutBaker};
    use pfx_core::{BakedTexture, Texture, TextureRef};
    use pfx_io::{LegacyDocument, ProfileDocument, LEGACY_SCHEMA, PROFILE_SCHEMA};
    use pfx_legacy::{ColorGradingSettings, LegacyEffect, LegacyProfile};
    use pfx_profile::{
        AmbientOcclusion, AmbientOcclusionQuality, AutoExposure, Bloom, ColorGrading, EffectKind,
        EyeAdaptation, GradingMode, Profile, ScreenSpaceReflections, Tonemapper, Vignette,
    };
    use std::fs;
    use tempfile::tempdir;

    fn write_fixture(dir: &std::path::Path) -> std::path::PathBuf {
        let path = dir.join("night.yaml");
        fs::write(&path, NIGHT_LEGACY_YAML).unwrap();
        path
    }

    /// Migrates `input` the way the host does: convert, then write next to it.
    fn migrate(input: &std::path::Path, converter: &Converter<'_>) -> std::path::PathBuf {
        let legacy = pfx_io::read_legacy(input).unwrap();
        let profile = converter.convert(&legacy.profile).unwrap();
        let target = pfx_io::unique_path(input);
        pfx_io::write_profile(&target, &ProfileDocument::current(legacy.name, profile)).unwrap();
        target
    }

    #[test]
    fn test_fixture_parses() {
        let doc: LegacyDocument = serde_yaml::from_str(NIGHT_LEGACY_YAML).unwrap();
        assert_eq!(doc.schema, LEGACY_SCHEMA);
        assert_eq!(doc.name, "Night Exterior");

        let enabled = doc.profile.enabled_effects();
        assert!(enabled.contains(&LegacyEffect::Bloom));
        assert!(!enabled.contains(&LegacyEffect::UserLut));
        // Untouched fields keep their legacy defaults
        assert_eq!(doc.profile.bloom.settings.bloom.soft_knee, 0.5);
    }

    #[test]
    fn test_migrate_on_disk() {
        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path());

        let output = migrate(&input, &Converter::default());
        assert_eq!(output, dir.path().join("night 1.yaml"));

        // Source is untouched
        assert_eq!(fs::read_to_string(&input).unwrap(), NIGHT_LEGACY_YAML);
        assert_eq!(pfx_io::peek_schema(&output).unwrap(), PROFILE_SCHEMA);

        let doc = pfx_io::read_profile(&output).unwrap();
        assert_eq!(doc.name, "Night Exterior");

        let kinds: Vec<EffectKind> = doc.profile.kinds().collect();
        assert_eq!(kinds.len(), 6);
        for kind in [
            EffectKind::Vignette,
            EffectKind::ScreenSpaceReflections,
            EffectKind::Bloom,
            EffectKind::AmbientOcclusion,
            EffectKind::AutoExposure,
            EffectKind::ColorGrading,
        ] {
            assert!(doc.profile.contains(kind), "missing {kind}");
        }
    }

    #[test]
    fn test_second_migration_gets_next_name() {
        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path());

        let first = migrate(&input, &Converter::default());
        let second = migrate(&input, &Converter::default());
        assert_eq!(first, dir.path().join("night 1.yaml"));
        assert_eq!(second, dir.path().join("night 2.yaml"));
        assert_eq!(
            pfx_io::read_profile(&first).unwrap(),
            pfx_io::read_profile(&second).unwrap()
        );
    }

    #[test]
    fn test_converted_values_survive_disk() {
        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path());
        let doc = pfx_io::read_profile(migrate(&input, &Converter::default())).unwrap();
        let p = &doc.profile;

        let bloom = p.settings::<Bloom>().unwrap();
        assert_relative_eq!(bloom.intensity.get(), 2.4, epsilon = 1e-6);
        assert_eq!(bloom.diffusion.get(), 6.0);
        assert!(bloom.dirt_texture.overridden());
        assert_eq!(
            bloom.dirt_texture.value(),
            &Some(Texture::Asset(TextureRef::new("5f1c0d2e9a3b4c7d8e9f0a1b2c3d4e5f")))
        );

        let ao = p.settings::<AmbientOcclusion>().unwrap();
        assert_relative_eq!(ao.intensity.get(), 0.7, epsilon = 1e-6);
        assert_eq!(ao.quality.get(), AmbientOcclusionQuality::High);

        let ae = p.settings::<AutoExposure>().unwrap();
        assert_eq!(ae.eye_adaptation.get(), EyeAdaptation::Fixed);

        let vignette = p.settings::<Vignette>().unwrap();
        assert_relative_eq!(vignette.intensity.get(), 0.35);
        assert!(vignette.mask.overridden());

        // Medium has no table entry: default kept, flag still set
        let ssr = p.settings::<ScreenSpaceReflections>().unwrap();
        assert!(ssr.resolution.overridden());
        assert_eq!(ssr.resolution.value(), ScreenSpaceReflections::default().resolution.value());
        assert_eq!(ssr.maximum_iteration_count.get(), 128);

        // Tone curves were never edited
        let cg = p.settings::<ColorGrading>().unwrap();
        assert_eq!(cg.grading_mode.get(), GradingMode::HighDefinitionRange);
        assert_eq!(cg.tonemapper.get(), Tonemapper::Aces);
        assert_relative_eq!(cg.saturation.get(), 20.0, epsilon = 1e-4);
        assert_relative_eq!(cg.contrast.get(), -10.0, epsilon = 1e-4);
        assert_relative_eq!(cg.mixer_red_out_red_in.get(), 90.0, epsilon = 1e-4);
        assert_relative_eq!(cg.post_exposure.get(), 0.5);
        // Disabled user LUT section still carries its texture
        assert!(cg.external_lut.overridden());
        assert_eq!(cg.external_lut.value(), &Some(Texture::Asset(TextureRef::new("0a0b0c0d"))));
    }

    #[test]
    fn test_report_lists_losses() {
        let doc: LegacyDocument = serde_yaml::from_str(NIGHT_LEGACY_YAML).unwrap();
        let (_, report) = Converter::default().convert_with_report(&doc.profile).unwrap();

        assert_eq!(report.excluded, [LegacyEffect::Antialiasing, LegacyEffect::Fog]);
        assert_eq!(report.unmapped.len(), 1);
        assert_eq!(report.unmapped[0].value, "Medium");
        assert!(!report.is_lossless());

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["converted"].as_array().unwrap().len(), 6);
    }

    #[test]
    fn test_json_output() {
        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path());
        let legacy = pfx_io::read_legacy(&input).unwrap();
        let profile = pfx_convert::convert(&legacy.profile).unwrap();

        let target = dir.path().join("night.json");
        pfx_io::write_profile(&target, &ProfileDocument::current("Night", profile.clone())).unwrap();
        let text = fs::read_to_string(&target).unwrap();
        assert!(text.contains("\"schema\": 2"));
        assert!(text.contains("\"type\": \"Bloom\""));

        assert_eq!(pfx_io::read_profile(&target).unwrap().profile, profile);
    }

    #[test]
    fn test_legacy_lut_path() {
        struct Flat;
        impl LutBaker for Flat {
            fn bake(&self, _: &ColorGradingSettings) -> pfx_convert::ConvertResult<Texture> {
                Ok(BakedTexture::new("flat", 4, 2, vec![[0.5, 0.5, 0.5, 1.0]; 8])?.into())
            }
        }

        let dir = tempdir().unwrap();
        let input = write_fixture(dir.path());
        let baker = Flat;
        let converter = Converter::new(ConvertOptions {
            color_grading: ColorGradingPath::LegacyLut,
        })
        .with_baker(&baker);

        let doc = pfx_io::read_profile(migrate(&input, &converter)).unwrap();
        let cg = doc.profile.settings::<ColorGrading>().unwrap();
        assert_eq!(cg.grading_mode.get(), GradingMode::LowDefinitionRange);
        assert_eq!(cg.ldr_lut_contribution.get(), 1.0);
        assert!(matches!(cg.ldr_lut.value(), Some(Texture::Baked(t)) if t.name == "flat"));

        // Merged into the entry converted from eye adaptation
        let ae = doc.profile.settings::<AutoExposure>().unwrap();
        assert_eq!(ae.eye_adaptation.get(), EyeAdaptation::Fixed);
        assert_eq!(ae.key_value.get(), 1.0);
    }

    #[test]
    fn test_schema_mismatch() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("new.yaml");
        pfx_io::write_profile(&path, &ProfileDocument::current("New", Profile::new())).unwrap();

        let err = pfx_io::read_legacy(&path).unwrap_err();
        assert!(matches!(
            err,
            pfx_io::IoError::SchemaMismatch { expected: LEGACY_SCHEMA, found: PROFILE_SCHEMA }
        ));
    }

    #[test]
    fn test_empty_legacy_document() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("empty.asset");
        pfx_io::write(&path, &LegacyDocument::legacy("Empty", LegacyProfile::default())).unwrap();

        let output = migrate(&path, &Converter::default());
        assert_eq!(output, dir.path().join("empty 1.asset"));
        assert!(pfx_io::read_profile(&output).unwrap().profile.is_empty());
    }
}
