//! Records synthesized during resolution: aliases, key overrides and
//! custom keycodes.
//!
//! All tables keep insertion order so that emission is deterministic, and
//! all of them accept re-registration of an identical entry.

use crate::error::{GenerateError, GenerateResult};
use crate::models::{Keycode, Mode};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// Name synthesized for a (mode, logical key) pair, e.g. `Sym_EKC_1`.
#[must_use]
pub fn synthesized_name(mode: Mode, key: &str) -> String {
    format!("{}_{key}", mode.name())
}

/// A shift override: on `mode`, shift + `base` produces `shifted`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Override {
    /// Layer the rule is restricted to
    pub mode: Mode,
    /// Logical key the rule was synthesized for
    pub key: String,
    /// Trigger keycode
    #[serde(serialize_with = "serialize_display")]
    pub base: Keycode,
    /// Replacement keycode
    #[serde(serialize_with = "serialize_display")]
    pub shifted: Keycode,
}

impl Override {
    /// Firmware identifier of the rule.
    #[must_use]
    pub fn name(&self) -> String {
        synthesized_name(self.mode, &self.key)
    }
}

impl fmt::Display for Override {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {} on {}", self.base, self.shifted, self.mode)
    }
}

/// A synthesized keycode whose shifted form is a unicode character sent at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomKey {
    /// Layer the key belongs to
    pub mode: Mode,
    /// Synthesized keycode name
    pub name: String,
    /// Keycode sent when unshifted
    #[serde(serialize_with = "serialize_display")]
    pub base: Keycode,
    /// Unicode keycode sent when shifted
    #[serde(serialize_with = "serialize_display")]
    pub shifted: Keycode,
    /// Unicode index of the shifted keycode
    pub index: String,
}

impl fmt::Display for CustomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {} on {}", self.base, self.index, self.mode)
    }
}

fn serialize_display<S: serde::Serializer>(
    value: &Keycode,
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_str(value)
}

/// Synthesized `#define` names and the keycode expression they expand to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AliasTable {
    aliases: IndexMap<String, Keycode>,
}

impl AliasTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `name` for `value` and returns the keycode referencing it.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AliasConflict`] if `name` is already
    /// registered with a different value.
    pub fn register(&mut self, name: &str, value: Keycode) -> GenerateResult<Keycode> {
        match self.aliases.get(name) {
            Some(existing) if *existing != value => {
                return Err(GenerateError::AliasConflict {
                    name: name.to_string(),
                    existing: existing.to_string(),
                    new: value.to_string(),
                });
            }
            Some(_) => {}
            None => {
                self.aliases.insert(name.to_string(), value);
            }
        }
        Ok(Keycode::Basic(name.to_string()))
    }

    /// Gets the value registered under a name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Keycode> {
        self.aliases.get(name)
    }

    /// Iterates over (name, value) in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Keycode)> {
        self.aliases.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.aliases.len()
    }

    /// Returns true if no alias was registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.aliases.is_empty()
    }
}

/// A record stored under its synthesized name.
pub trait Record: Clone + PartialEq + fmt::Display {
    /// Unique identifier of the record.
    fn record_name(&self) -> String;
    /// Layer the record belongs to.
    fn mode(&self) -> Mode;
}

impl Record for Override {
    fn record_name(&self) -> String {
        self.name()
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

impl Record for CustomKey {
    fn record_name(&self) -> String {
        self.name.clone()
    }

    fn mode(&self) -> Mode {
        self.mode
    }
}

/// Insertion-ordered set of records keyed by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordTable<T> {
    records: IndexMap<String, T>,
}

impl<T> Default for RecordTable<T> {
    fn default() -> Self {
        Self {
            records: IndexMap::new(),
        }
    }
}

impl<T: Record> RecordTable<T> {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a record.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::RecordConflict`] if a different record
    /// already uses the same name.
    pub fn insert(&mut self, record: T) -> GenerateResult<()> {
        let name = record.record_name();
        if let Some(existing) = self.records.get(&name) {
            if *existing != record {
                return Err(GenerateError::RecordConflict {
                    name,
                    existing: existing.to_string(),
                    new: record.to_string(),
                });
            }
            return Ok(());
        }
        self.records.insert(name, record);
        Ok(())
    }

    /// Gets a record by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.records.get(name)
    }

    /// Records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.records.values()
    }

    /// Records belonging to one mode, in insertion order.
    pub fn for_mode(&self, mode: Mode) -> impl Iterator<Item = &T> {
        self.records.values().filter(move |r| r.mode() == mode)
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn override_for(key: &str, shifted: &str) -> Override {
        Override {
            mode: Mode::Base,
            key: key.to_string(),
            base: Keycode::parse("KC_MINS"),
            shifted: Keycode::parse(shifted),
        }
    }

    #[test]
    fn test_synthesized_names() {
        assert_eq!(synthesized_name(Mode::Sym, "EKC_1"), "Sym_EKC_1");
        assert_eq!(synthesized_name(Mode::DeadKey, "EKC_A"), "DK_EKC_A");
        assert_eq!(override_for("EKC_MNS", "KC_QUES").name(), "Base_EKC_MNS");
    }

    #[test]
    fn test_alias_registration_is_idempotent() {
        let mut aliases = AliasTable::new();
        let value = Keycode::parse("UM(EURO_SIGN)");

        for _ in 0..3 {
            let kc = aliases.register("DK_EKC_E", value.clone()).unwrap();
            assert_eq!(kc, Keycode::Basic("DK_EKC_E".to_string()));
        }
        assert_eq!(aliases.len(), 1);
        assert_eq!(aliases.get("DK_EKC_E"), Some(&value));
    }

    #[test]
    fn test_alias_conflict() {
        let mut aliases = AliasTable::new();
        aliases
            .register("DK_EKC_E", Keycode::parse("UM(EURO_SIGN)"))
            .unwrap();
        let err = aliases
            .register("DK_EKC_E", Keycode::parse("UM(CENT_SIGN)"))
            .unwrap_err();

        assert_eq!(
            err,
            GenerateError::AliasConflict {
                name: "DK_EKC_E".to_string(),
                existing: "UM(EURO_SIGN)".to_string(),
                new: "UM(CENT_SIGN)".to_string(),
            }
        );
        assert_eq!(aliases.len(), 1);
    }

    #[test]
    fn test_alias_order_is_registration_order() {
        let mut aliases = AliasTable::new();
        aliases.register("Sym_B", Keycode::parse("UM(B)")).unwrap();
        aliases.register("Sym_A", Keycode::parse("UM(A)")).unwrap();
        let names: Vec<&str> = aliases.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["Sym_B", "Sym_A"]);
    }

    #[test]
    fn test_record_table_accepts_identical_records() {
        let mut overrides = RecordTable::new();
        overrides.insert(override_for("EKC_MNS", "KC_QUES")).unwrap();
        overrides.insert(override_for("EKC_MNS", "KC_QUES")).unwrap();
        assert_eq!(overrides.len(), 1);
    }

    #[test]
    fn test_record_table_conflict() {
        let mut overrides = RecordTable::new();
        overrides.insert(override_for("EKC_MNS", "KC_QUES")).unwrap();
        let err = overrides
            .insert(override_for("EKC_MNS", "KC_EXLM"))
            .unwrap_err();
        assert!(matches!(err, GenerateError::RecordConflict { ref name, .. } if name == "Base_EKC_MNS"));
    }

    #[test]
    fn test_records_for_mode() {
        let mut overrides = RecordTable::new();
        overrides.insert(override_for("EKC_MNS", "KC_QUES")).unwrap();
        overrides
            .insert(Override {
                mode: Mode::Sym,
                ..override_for("EKC_P", "KC_DLR")
            })
            .unwrap();

        let sym: Vec<String> = overrides.for_mode(Mode::Sym).map(Override::name).collect();
        assert_eq!(sym, vec!["Sym_EKC_P"]);
        assert_eq!(overrides.for_mode(Mode::Nav).count(), 0);
    }
}
