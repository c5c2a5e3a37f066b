//! The profile container.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::effects::{Effect, EffectSettings};
use crate::{EffectKind, ProfileError, ProfileResult};

/// A set of effect entries, at most one per [`EffectKind`].
///
/// Serialized as a list of entries tagged by `type`; decoding a list with a
/// repeated type fails with [`ProfileError::DuplicateEffect`].
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(try_from = "Vec<Effect>", into = "Vec<Effect>")]
pub struct Profile {
    effects: BTreeMap<EffectKind, Effect>,
}

impl Profile {
    /// Creates an empty profile.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an entry. Fails if an entry of the same type is present.
    pub fn insert(&mut self, effect: impl Into<Effect>) -> ProfileResult<()> {
        let effect = effect.into();
        match self.effects.entry(effect.kind()) {
            Entry::Occupied(o) => Err(ProfileError::DuplicateEffect { kind: *o.key() }),
            Entry::Vacant(v) => {
                v.insert(effect);
                Ok(())
            }
        }
    }

    /// Returns the entry of type `kind`.
    pub fn get(&self, kind: EffectKind) -> Option<&Effect> {
        self.effects.get(&kind)
    }

    /// Returns the typed settings record `T`, if present.
    pub fn settings<T: EffectSettings>(&self) -> Option<&T> {
        self.effects.get(&T::KIND).and_then(T::from_effect)
    }

    /// Returns the typed settings record `T` mutably, if present.
    pub fn settings_mut<T: EffectSettings>(&mut self) -> Option<&mut T> {
        self.effects.get_mut(&T::KIND).and_then(T::from_effect_mut)
    }

    /// Returns the record `T`, inserting a default one first if absent.
    pub fn get_or_insert_default<T: EffectSettings>(&mut self) -> ProfileResult<&mut T> {
        let effect = self
            .effects
            .entry(T::KIND)
            .or_insert_with(|| T::default().into());
        let found = effect.kind();
        T::from_effect_mut(effect).ok_or(ProfileError::KindMismatch {
            expected: T::KIND,
            found,
        })
    }

    /// True if an entry of type `kind` is present.
    pub fn contains(&self, kind: EffectKind) -> bool {
        self.effects.contains_key(&kind)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.effects.len()
    }

    /// True if the profile has no entries.
    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Entry types in key order.
    pub fn kinds(&self) -> impl Iterator<Item = EffectKind> + '_ {
        self.effects.keys().copied()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Effect> {
        self.effects.values()
    }
}

impl TryFrom<Vec<Effect>> for Profile {
    type Error = ProfileError;

    fn try_from(effects: Vec<Effect>) -> ProfileResult<Self> {
        let mut profile = Profile::new();
        for effect in effects {
            profile.insert(effect)?;
        }
        Ok(profile)
    }
}

impl From<Profile> for Vec<Effect> {
    fn from(profile: Profile) -> Self {
        profile.effects.into_values().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{AutoExposure, Bloom, ColorGrading, EyeAdaptation, Grain};

    #[test]
    fn insert_rejects_second_entry_of_same_type() {
        let mut p = Profile::new();
        p.insert(Bloom::default()).unwrap();
        p.insert(Grain::default()).unwrap();
        let err = p.insert(Bloom::default()).unwrap_err();
        assert_eq!(err, ProfileError::DuplicateEffect { kind: EffectKind::Bloom });
        assert_eq!(p.len(), 2);
    }

    #[test]
    fn typed_access() {
        let mut p = Profile::new();
        p.insert(ColorGrading::default()).unwrap();
        assert!(p.settings::<ColorGrading>().is_some());
        assert!(p.settings::<Bloom>().is_none());

        p.settings_mut::<ColorGrading>().unwrap().contrast.set(12.0);
        assert_eq!(p.settings::<ColorGrading>().unwrap().contrast.get(), 12.0);
    }

    #[test]
    fn get_or_insert_keeps_existing_entry() {
        let mut p = Profile::new();
        let mut ae = AutoExposure::default();
        ae.speed_up.set(7.0);
        p.insert(ae).unwrap();

        let merged = p.get_or_insert_default::<AutoExposure>().unwrap();
        merged.eye_adaptation.set(EyeAdaptation::Fixed);

        let ae = p.settings::<AutoExposure>().unwrap();
        assert_eq!(ae.speed_up.get(), 7.0);
        assert_eq!(ae.eye_adaptation.get(), EyeAdaptation::Fixed);
        assert_eq!(p.len(), 1);
    }

    #[test]
    fn serde_round_trip() {
        let mut p = Profile::new();
        let mut bloom = Bloom::default();
        bloom.intensity.set(1.5);
        p.insert(bloom).unwrap();
        p.insert(Grain::default()).unwrap();

        let yaml = serde_yaml::to_string(&p).unwrap();
        let back: Profile = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(back, p);
    }

    #[test]
    fn decoding_duplicate_types_fails() {
        let json = r#"[{"type":"Grain"},{"type":"Grain"}]"#;
        let err = serde_json::from_str::<Profile>(json).unwrap_err();
        assert!(err.to_string().contains("Grain"));
    }

    #[test]
    fn decoding_fills_missing_fields_with_defaults() {
        let json = r#"[{"type":"MotionBlur","sampleCount":{"value":4,"overrideState":true}}]"#;
        let p: Profile = serde_json::from_str(json).unwrap();
        let mb = p.settings::<crate::MotionBlur>().unwrap();
        assert_eq!(mb.sample_count.get(), 4);
        assert!(mb.sample_count.overridden());
        assert_eq!(mb.shutter_angle.get(), 270.0);
        assert!(!mb.shutter_angle.overridden());
    }
}
