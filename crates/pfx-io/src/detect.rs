//! Encoding detection.
//!
//! Profile documents are YAML or JSON; the encoding follows the file
//! extension. `.asset` files are host assets, which are YAML.

use std::path::Path;

/// Document encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// YAML (`.yaml`, `.yml`, `.asset`).
    Yaml,
    /// JSON (`.json`).
    Json,
    /// Unknown/unsupported encoding.
    Unknown,
}

impl Format {
    /// Detects the encoding from the file extension.
    pub fn from_extension<P: AsRef<Path>>(path: P) -> Self {
        let ext = path
            .as_ref()
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        match ext.as_deref() {
            Some("yaml") | Some("yml") | Some("asset") => Format::Yaml,
            Some("json") => Format::Json,
            _ => Format::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_by_extension() {
        assert_eq!(Format::from_extension("a/b.yaml"), Format::Yaml);
        assert_eq!(Format::from_extension("b.YML"), Format::Yaml);
        assert_eq!(Format::from_extension("Profile.asset"), Format::Yaml);
        assert_eq!(Format::from_extension("p.json"), Format::Json);
        assert_eq!(Format::from_extension("p.toml"), Format::Unknown);
        assert_eq!(Format::from_extension("noext"), Format::Unknown);
    }
}
