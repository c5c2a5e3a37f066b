//! Conversion report.

use pfx_legacy::LegacyEffect;
use pfx_profile::EffectKind;
use serde::Serialize;

/// Legacy fields of one converted effect that have no destination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DroppedFields {
    /// Destination entry the section was converted into.
    pub effect: EffectKind,
    /// Legacy field paths.
    pub fields: &'static [&'static str],
}

/// A legacy enum value without a table entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnmappedValue {
    /// Section holding the value.
    pub effect: LegacyEffect,
    /// Field path within the section settings.
    pub field: &'static str,
    /// The legacy value.
    pub value: String,
}

/// What a conversion did besides producing the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ConversionReport {
    /// Entries produced, in conversion order.
    pub converted: Vec<EffectKind>,
    /// Enabled legacy sections that are never converted.
    pub excluded: Vec<LegacyEffect>,
    /// Fields lost per converted entry.
    pub dropped: Vec<DroppedFields>,
    /// Enum values left at the destination default.
    pub unmapped: Vec<UnmappedValue>,
}

impl ConversionReport {
    /// True if nothing was excluded, dropped or left unmapped.
    pub fn is_lossless(&self) -> bool {
        self.excluded.is_empty()
            && self.unmapped.is_empty()
            && self.dropped.iter().all(|d| d.fields.is_empty())
    }

    /// Total number of dropped legacy fields.
    pub fn dropped_count(&self) -> usize {
        self.dropped.iter().map(|d| d.fields.len()).sum()
    }
}
