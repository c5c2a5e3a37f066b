//! Overridable parameter container.
//!
//! Every field of a new-schema effect record is a [`Param`]: the value
//! itself plus an independent override flag. A parameter whose flag is
//! cleared falls back to the default or inherited value at render time,
//! whatever its stored value says.
//!
//! Fields are private so that the only way to write a value is through
//! [`Param::set`], which raises the flag in the same call. The flag alone
//! can be changed with [`Param::set_override`] (bulk override) or chosen
//! explicitly with [`Param::set_with_override`] when a missing source
//! value must not be marked authoritative.

use serde::{Deserialize, Serialize};

/// A value paired with its override flag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Param<T> {
    value: T,
    override_state: bool,
}

impl<T> Param<T> {
    /// Creates a non-overridden parameter holding `value`.
    #[inline]
    pub const fn new(value: T) -> Self {
        Self {
            value,
            override_state: false,
        }
    }

    /// Creates an overridden parameter holding `value`.
    #[inline]
    pub const fn overridden_with(value: T) -> Self {
        Self {
            value,
            override_state: true,
        }
    }

    /// Writes `value` and marks the parameter authoritative.
    #[inline]
    pub fn set(&mut self, value: T) {
        self.value = value;
        self.override_state = true;
    }

    /// Writes `value` with an explicit override flag.
    ///
    /// Used where an absent source value (e.g. a missing texture) should be
    /// stored without claiming ownership of the field.
    #[inline]
    pub fn set_with_override(&mut self, value: T, state: bool) {
        self.value = value;
        self.override_state = state;
    }

    /// Changes only the override flag.
    #[inline]
    pub fn set_override(&mut self, state: bool) {
        self.override_state = state;
    }

    /// Returns the stored value.
    #[inline]
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Returns true if the value is authoritative.
    #[inline]
    pub fn overridden(&self) -> bool {
        self.override_state
    }
}

impl<T: Copy> Param<T> {
    /// Returns a copy of the stored value.
    #[inline]
    pub fn get(&self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_is_not_overridden() {
        let p = Param::new(3.0_f32);
        assert_eq!(p.get(), 3.0);
        assert!(!p.overridden());
    }

    #[test]
    fn set_raises_flag() {
        let mut p = Param::new(0_i32);
        p.set(16);
        assert_eq!(p.get(), 16);
        assert!(p.overridden());
    }

    #[test]
    fn bulk_override_keeps_value() {
        let mut p = Param::new(String::from("default"));
        p.set_override(true);
        assert_eq!(p.value(), "default");
        assert!(p.overridden());
    }

    #[test]
    fn explicit_override_for_missing_value() {
        let mut p: Param<Option<u32>> = Param::overridden_with(Some(1));
        p.set_with_override(None, false);
        assert_eq!(p.get(), None);
        assert!(!p.overridden());
    }

    #[test]
    fn serialized_field_names() {
        let yaml = serde_yaml::to_string(&Param::overridden_with(0.5_f32)).unwrap();
        assert!(yaml.contains("value: 0.5"));
        assert!(yaml.contains("overrideState: true"));
    }
}
