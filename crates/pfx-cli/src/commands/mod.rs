//! CLI command implementations

pub mod bake;
pub mod convert;
pub mod info;

use anyhow::{bail, Context, Result};
use pfx_io::{LegacyDocument, ProfileDocument};
use std::path::{Path, PathBuf};

/// Load a legacy profile document
pub fn load_legacy(path: &Path) -> Result<LegacyDocument> {
    pfx_io::read_legacy(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Load a current profile document
pub fn load_profile(path: &Path) -> Result<ProfileDocument> {
    pfx_io::read_profile(path).with_context(|| format!("Failed to load: {}", path.display()))
}

/// Save a current profile document
pub fn save_profile(path: &Path, doc: &ProfileDocument) -> Result<()> {
    pfx_io::write_profile(path, doc).with_context(|| format!("Failed to save: {}", path.display()))
}

/// Expands glob patterns; plain paths pass through unchanged.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for pattern in patterns {
        if !pattern.contains(['*', '?', '[']) {
            files.push(PathBuf::from(pattern));
            continue;
        }
        let matched: Vec<PathBuf> = glob::glob(pattern)
            .with_context(|| format!("Invalid pattern: {}", pattern))?
            .filter_map(|r| r.ok())
            .filter(|p| p.is_file())
            .collect();
        if matched.is_empty() {
            bail!("No files match pattern: {}", pattern);
        }
        files.extend(matched);
    }
    files.sort();
    files.dedup();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn plain_paths_pass_through() {
        let files = expand_inputs(&["b.yaml".into(), "a.yaml".into(), "b.yaml".into()]).unwrap();
        assert_eq!(files, [PathBuf::from("a.yaml"), PathBuf::from("b.yaml")]);
    }

    #[test]
    fn globs_expand() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("one.yaml"), "schema: 1\n").unwrap();
        fs::write(dir.path().join("two.yaml"), "schema: 1\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "").unwrap();

        let pattern = format!("{}/*.yaml", dir.path().display());
        let files = expand_inputs(&[pattern]).unwrap();
        assert_eq!(files.len(), 2);

        let empty = format!("{}/*.json", dir.path().display());
        assert!(expand_inputs(&[empty]).is_err());
    }
}
