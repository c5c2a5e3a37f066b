//! Conversion options.

use serde::{Deserialize, Serialize};

/// How an enabled legacy color grading section is converted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ColorGradingPath {
    /// Field-by-field translation into the new grading record.
    #[default]
    Direct,
    /// Bake the legacy grading into a strip LUT through a [`crate::LutBaker`].
    LegacyLut,
}

/// Options for a [`crate::Converter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConvertOptions {
    /// Color grading conversion path.
    pub color_grading: ColorGradingPath,
}

impl ConvertOptions {
    /// Options selecting the legacy-LUT color grading path.
    pub fn legacy_lut() -> Self {
        Self {
            color_grading: ColorGradingPath::LegacyLut,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_direct_path() {
        assert_eq!(ConvertOptions::default().color_grading, ColorGradingPath::Direct);
        let opts: ConvertOptions = serde_json::from_str("{}").unwrap();
        assert_eq!(opts.color_grading, ColorGradingPath::Direct);
    }

    #[test]
    fn path_names() {
        let opts: ConvertOptions = serde_json::from_str(r#"{"colorGrading":"legacy-lut"}"#).unwrap();
        assert_eq!(opts, ConvertOptions::legacy_lut());
    }
}
