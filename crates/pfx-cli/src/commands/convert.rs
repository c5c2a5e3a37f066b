//! Profile conversion command
//!
//! Inputs that are not legacy profile documents are skipped, so a glob over
//! a mixed directory converts only what needs converting.

use crate::baker::StripLutBaker;
use crate::ConvertArgs;
use anyhow::{bail, Context, Result};
use pfx_convert::{ColorGradingPath, ConvertOptions, Converter, LutBaker};
use pfx_io::{IoError, ProfileDocument, LEGACY_SCHEMA};
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
#[allow(unused_imports)]
use tracing::{debug, info, trace};

/// What happened to one input.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Converted and written to the path.
    Converted(PathBuf),
    /// Not a legacy profile document.
    Skipped,
}

pub fn run(args: ConvertArgs, verbose: u8) -> Result<()> {
    trace!(inputs = args.input.len(), "convert::run");

    let files = super::expand_inputs(&args.input)?;
    let many = files.len() > 1;
    if many {
        if let Some(dir) = &args.output {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
        }
    }

    let options = ConvertOptions {
        color_grading: args.color_grading.into(),
    };
    let baker = match options.color_grading {
        ColorGradingPath::LegacyLut => Some(StripLutBaker::new(args.lut_size)?),
        ColorGradingPath::Direct => None,
    };
    let mut converter = Converter::new(options);
    if let Some(baker) = &baker {
        converter = converter.with_baker(baker as &dyn LutBaker);
    }

    info!(files = files.len(), path = ?converter.options().color_grading, "Starting conversion");

    let targets = plan_targets(&files, args.output.as_deref(), args.force);
    let results: Vec<Result<Outcome>> = files
        .par_iter()
        .zip(targets.par_iter())
        .map(|(input, target)| convert_file(input, target, &converter, args.report, verbose))
        .collect();

    // Report results
    let mut success = 0;
    let mut skipped = 0;
    let mut failed = 0;
    for r in results {
        match r {
            Ok(Outcome::Converted(path)) => {
                success += 1;
                debug!(path = %path.display(), "Converted");
            }
            Ok(Outcome::Skipped) => skipped += 1,
            Err(e) => {
                failed += 1;
                eprintln!("Error: {:#}", e);
            }
        }
    }

    info!(success, skipped, failed, "Conversion complete");
    if many || verbose > 0 {
        println!("Converted: {} success, {} skipped, {} failed", success, skipped, failed);
    }

    if failed > 0 {
        bail!("{} files failed", failed);
    }

    Ok(())
}

/// Converts one document. `target` is where the result would land; an
/// existing file there is only replaced when `target` came from `--force`.
pub fn convert_file(
    input: &Path,
    target: &Path,
    converter: &Converter<'_>,
    report: bool,
    verbose: u8,
) -> Result<Outcome> {
    match pfx_io::peek_schema(input) {
        Ok(LEGACY_SCHEMA) => {}
        Ok(schema) => {
            info!(path = %input.display(), schema, "Not a legacy profile, skipping");
            return Ok(Outcome::Skipped);
        }
        Err(e @ (IoError::MissingSchema { .. } | IoError::UnsupportedFormat { .. })) => {
            info!(path = %input.display(), reason = %e, "Not a profile document, skipping");
            return Ok(Outcome::Skipped);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read: {}", input.display()));
        }
    }

    let legacy = super::load_legacy(input)?;
    let (profile, conversion) = converter
        .convert_with_report(&legacy.profile)
        .with_context(|| format!("Failed to convert: {}", input.display()))?;

    if report {
        let json = serde_json::to_string_pretty(&conversion).context("Failed to encode report")?;
        println!("{}", json);
    }

    let doc = ProfileDocument::current(legacy.name, profile);
    super::save_profile(target, &doc)?;

    if verbose > 0 {
        println!(
            "{} -> {} ({} effects)",
            input.display(),
            target.display(),
            doc.profile.len()
        );
    }

    Ok(Outcome::Converted(target.to_path_buf()))
}

/// Picks the output path of every input, in order.
///
/// Without `--output` each result goes next to its input. An explicit output
/// is overwritten under `--force`; every other clash resolves to a free
/// sibling name. Names handed to earlier inputs count as taken, so no two
/// inputs share a target and no input document is ever replaced.
pub fn plan_targets(files: &[PathBuf], output: Option<&Path>, force: bool) -> Vec<PathBuf> {
    let many = files.len() > 1;
    let mut claimed: HashSet<PathBuf> = files.iter().cloned().collect();
    let mut targets = Vec::with_capacity(files.len());
    for input in files {
        let base = base_target(input, output, many);
        let target = if force && !claimed.contains(&base) {
            base
        } else {
            pfx_io::unique_path_with(base, |p| p.exists() || claimed.contains(p))
        };
        trace!(input = %input.display(), target = %target.display(), "Planned output");
        claimed.insert(target.clone());
        targets.push(target);
    }
    targets
}

fn base_target(input: &Path, output: Option<&Path>, many: bool) -> PathBuf {
    match output {
        Some(dir) if many => match input.file_name() {
            Some(name) => dir.join(name),
            None => dir.to_path_buf(),
        },
        Some(path) => path.to_path_buf(),
        None => input.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::baker::DEFAULT_LUT_SIZE;
    use crate::GradingPath;
    use pfx_io::{LegacyDocument, PROFILE_SCHEMA};
    use pfx_legacy::{BloomSettings, GrainSettings, LegacyProfile, LegacySection};
    use pfx_profile::{Bloom, Grain, Profile};
    use std::fs;
    use tempfile::tempdir;

    fn legacy_with_bloom() -> LegacyDocument {
        let mut profile = LegacyProfile::default();
        profile.bloom = LegacySection::enabled(BloomSettings::default());
        LegacyDocument::legacy("Night", profile)
    }

    fn legacy_with_grain() -> LegacyDocument {
        let mut profile = LegacyProfile::default();
        profile.grain = LegacySection::enabled(GrainSettings::default());
        LegacyDocument::legacy("Noise", profile)
    }

    fn one(input: &Path, output: Option<&Path>, force: bool) -> PathBuf {
        plan_targets(&[input.to_path_buf()], output, force).remove(0)
    }

    fn batch_args(inputs: &[&Path], output: &Path, force: bool) -> ConvertArgs {
        ConvertArgs {
            input: inputs.iter().map(|p| p.display().to_string()).collect(),
            output: Some(output.to_path_buf()),
            color_grading: GradingPath::Direct,
            lut_size: DEFAULT_LUT_SIZE,
            force,
            report: false,
        }
    }

    /// Writes `a/x.yaml` (bloom) and `b/x.yaml` (grain) under `root`.
    fn same_named_inputs(root: &Path) -> (PathBuf, PathBuf) {
        let a = root.join("a").join("x.yaml");
        let b = root.join("b").join("x.yaml");
        fs::create_dir_all(a.parent().unwrap()).unwrap();
        fs::create_dir_all(b.parent().unwrap()).unwrap();
        pfx_io::write(&a, &legacy_with_bloom()).unwrap();
        pfx_io::write(&b, &legacy_with_grain()).unwrap();
        (a, b)
    }

    #[test]
    fn sibling_output_never_replaces_input() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("night.yaml");
        fs::write(&input, "schema: 1\n").unwrap();

        assert_eq!(one(&input, None, false), dir.path().join("night 1.yaml"));
        assert_eq!(one(&input, None, true), dir.path().join("night 1.yaml"));
    }

    #[test]
    fn explicit_output_and_force() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("night.yaml");
        let out = dir.path().join("out.json");
        fs::write(&out, "{}").unwrap();

        assert_eq!(one(&input, Some(&out), true), out);
        assert_eq!(one(&input, Some(&out), false), dir.path().join("out 1.json"));
    }

    #[test]
    fn output_directory_for_batches() {
        let dir = tempdir().unwrap();
        let files = [
            PathBuf::from("profiles/night.asset"),
            PathBuf::from("profiles/noon.asset"),
        ];
        assert_eq!(
            plan_targets(&files, Some(dir.path()), false),
            [dir.path().join("night.asset"), dir.path().join("noon.asset")]
        );
    }

    #[test]
    fn same_named_inputs_get_distinct_targets() {
        let dir = tempdir().unwrap();
        let files = [PathBuf::from("a/x.yaml"), PathBuf::from("b/x.yaml")];
        for force in [false, true] {
            assert_eq!(
                plan_targets(&files, Some(dir.path()), force),
                [dir.path().join("x.yaml"), dir.path().join("x 1.yaml")]
            );
        }
    }

    #[test]
    fn forced_target_never_replaces_another_input() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("out");
        let files = [dir.path().join("a").join("x.yaml"), out.join("x.yaml")];
        let targets = plan_targets(&files, Some(&out), true);
        assert_eq!(targets, [out.join("x 1.yaml"), out.join("x 2.yaml")]);
    }

    #[test]
    fn batch_with_same_names_keeps_every_result() {
        for force in [false, true] {
            let dir = tempdir().unwrap();
            let (a, b) = same_named_inputs(dir.path());
            let out = dir.path().join("out");

            run(batch_args(&[&a, &b], &out, force), 0).unwrap();

            let first = pfx_io::read_profile(out.join("x.yaml")).unwrap();
            let second = pfx_io::read_profile(out.join("x 1.yaml")).unwrap();
            assert!(first.profile.settings::<Bloom>().is_some());
            assert!(first.profile.settings::<Grain>().is_none());
            assert!(second.profile.settings::<Grain>().is_some());
            assert!(second.profile.settings::<Bloom>().is_none());
        }
    }

    #[test]
    fn converts_legacy_document() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("night.yaml");
        pfx_io::write(&input, &legacy_with_bloom()).unwrap();

        let target = one(&input, None, false);
        let converter = Converter::default();
        let outcome = convert_file(&input, &target, &converter, false, 0).unwrap();
        assert_eq!(outcome, Outcome::Converted(dir.path().join("night 1.yaml")));

        let doc = pfx_io::read_profile(&target).unwrap();
        assert_eq!(doc.schema, PROFILE_SCHEMA);
        assert_eq!(doc.name, "Night");
        assert_eq!(doc.profile.settings::<Bloom>().unwrap().intensity.get(), 1.5);
    }

    #[test]
    fn skips_current_documents() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("new.yaml");
        pfx_io::write_profile(&input, &ProfileDocument::current("New", Profile::new())).unwrap();

        let target = dir.path().join("out.yaml");
        let outcome = convert_file(&input, &target, &Converter::default(), false, 0).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
        assert!(!target.exists());
    }

    #[test]
    fn skips_unknown_files() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("readme.txt");
        fs::write(&input, "hello").unwrap();
        let outcome = convert_file(&input, &dir.path().join("x.yaml"), &Converter::default(), false, 0).unwrap();
        assert_eq!(outcome, Outcome::Skipped);
    }

    #[test]
    fn missing_input_is_an_error() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("gone.yaml");
        assert!(convert_file(&input, &dir.path().join("x.yaml"), &Converter::default(), false, 0).is_err());
    }
}
