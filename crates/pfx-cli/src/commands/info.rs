//! Profile info command.
//!
//! Summarises either schema: the enabled sections of a legacy document, or
//! the effect entries of a current document with their override counts.

use crate::InfoArgs;
use anyhow::{bail, Context, Result};
use pfx_io::{LegacyDocument, ProfileDocument, LEGACY_SCHEMA, PROFILE_SCHEMA};
use pfx_legacy::LegacyEffect;
use std::path::Path;

/// Runs the info command.
pub fn run(args: InfoArgs, verbose: u8) -> Result<()> {
    for path in &args.input {
        let schema = pfx_io::peek_schema(path)
            .with_context(|| format!("Failed to read: {}", path.display()))?;

        match schema {
            LEGACY_SCHEMA => {
                let doc = super::load_legacy(path)?;
                print!("{}", legacy_text(path, &doc, verbose > 0 || args.all));
            }
            PROFILE_SCHEMA => {
                let doc = super::load_profile(path)?;
                print!("{}", profile_text(path, &doc, verbose > 0 || args.all));
            }
            other => bail!("{}: unknown schema {}", path.display(), other),
        }

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

fn legacy_text(path: &Path, doc: &LegacyDocument, all: bool) -> String {
    let enabled = doc.profile.enabled_effects();
    let mut out = String::new();
    out += &format!("{}\n", path.display());
    out += &format!("  Name:     {}\n", doc.name);
    out += &format!("  Schema:   {} (legacy)\n", doc.schema);
    out += &format!("  Enabled:  {} of {}\n", enabled.len(), LegacyEffect::ALL.len());

    let shown: Vec<LegacyEffect> = if all { LegacyEffect::ALL.to_vec() } else { enabled };
    for effect in shown {
        let mark = if doc.profile.is_enabled(effect) { "on" } else { "off" };
        out += &format!("    {:<24} {}\n", effect.key(), mark);
    }
    out
}

fn profile_text(path: &Path, doc: &ProfileDocument, all: bool) -> String {
    let mut out = String::new();
    out += &format!("{}\n", path.display());
    out += &format!("  Name:     {}\n", doc.name);
    out += &format!("  Schema:   {}\n", doc.schema);
    out += &format!("  Effects:  {}\n", doc.profile.len());

    for effect in doc.profile.iter() {
        let overrides = effect.overrides();
        out += &format!(
            "    {:<24} {}/{} overridden\n",
            effect.kind().name(),
            effect.overridden_count(),
            overrides.len()
        );
        if all {
            for (field, state) in overrides.into_iter().filter(|(_, on)| *on) {
                out += &format!("      {} {}\n", field, state);
            }
        }
    }
    out
}
