//! Per-character key records and the host key table.

use crate::models::keycode::{Keycode, KC_TRNS};
use crate::models::mode::Mode;
use indexmap::IndexMap;

/// Compact keycode literal used by the built-in data tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sym {
    /// Symbolic keycode
    Kc(&'static str),
    /// Unicode code point
    Uc(u32),
}

/// Transparent entry for data tables.
pub const TRNS: Sym = Sym::Kc(KC_TRNS);

impl From<Sym> for Keycode {
    fn from(sym: Sym) -> Self {
        match sym {
            Sym::Kc(name) => Self::parse(name),
            Sym::Uc(cp) => Self::Unicode(cp),
        }
    }
}

/// Static description of one logical key, as written in the locale tables.
#[derive(Debug, Clone, Copy)]
pub struct KeyRow {
    /// Logical key name referenced from layer grids (`EKC_Q`)
    pub name: &'static str,
    /// Base layer keycode
    pub base: &'static str,
    /// Base layer shifted keycode (`None` when shift is the OS default)
    pub shifted: Option<Sym>,
    /// Dead-key layer keycode
    pub dk_base: Sym,
    /// Dead-key layer shifted keycode
    pub dk_shifted: Sym,
    /// Symbol layer keycode
    pub sym_base: Sym,
    /// Symbol layer shifted keycode
    pub sym_shifted: Sym,
}

/// Keycodes substituted at one logical key position, per mode family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key {
    /// Base layer keycode
    pub base: Keycode,
    /// Base layer shifted keycode
    pub shifted: Option<Keycode>,
    /// Dead-key layer keycode
    pub dk_base: Keycode,
    /// Dead-key layer shifted keycode
    pub dk_shifted: Option<Keycode>,
    /// Symbol layer keycode
    pub sym_base: Keycode,
    /// Symbol layer shifted keycode
    pub sym_shifted: Option<Keycode>,
}

impl Key {
    /// Returns the (keycode, shifted keycode) pair for a mode.
    ///
    /// An unset shifted keycode means shift behaves as on the base keycode.
    /// Modes the key table does not describe yield a transparent pair.
    #[must_use]
    pub fn keycodes(&self, mode: Mode) -> (Keycode, Keycode) {
        let (kc, skc) = match mode {
            Mode::Base => (&self.base, self.shifted.as_ref()),
            Mode::DeadKey => (&self.dk_base, self.dk_shifted.as_ref()),
            Mode::Sym => (&self.sym_base, self.sym_shifted.as_ref()),
            _ => return (Keycode::transparent(), Keycode::transparent()),
        };
        (kc.clone(), skc.unwrap_or(kc).clone())
    }
}

impl From<&KeyRow> for Key {
    fn from(row: &KeyRow) -> Self {
        Self {
            base: Keycode::parse(row.base),
            shifted: row.shifted.map(Keycode::from),
            dk_base: row.dk_base.into(),
            dk_shifted: Some(row.dk_shifted.into()),
            sym_base: row.sym_base.into(),
            sym_shifted: Some(row.sym_shifted.into()),
        }
    }
}

/// Host-specific table of logical keys, in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyTable {
    keys: IndexMap<String, Key>,
}

impl KeyTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from static rows.
    #[must_use]
    pub fn from_rows(rows: &[KeyRow]) -> Self {
        let keys = rows
            .iter()
            .map(|row| (row.name.to_string(), Key::from(row)))
            .collect();
        Self { keys }
    }

    /// Adds or replaces a key.
    pub fn insert(&mut self, name: impl Into<String>, key: Key) {
        self.keys.insert(name.into(), key);
    }

    /// Looks up a logical key by the name used in layer grids.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Key> {
        self.keys.get(name)
    }

    /// Iterates over (name, key) in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Key)> {
        self.keys.iter().map(|(name, key)| (name.as_str(), key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Sym::{Kc, Uc};

    fn row() -> KeyRow {
        KeyRow {
            name: "EKC_1",
            base: "KC_1",
            shifted: Some(Uc(0x20AC)),
            dk_base: Uc(0x201E),
            dk_shifted: TRNS,
            sym_base: Kc("KC_CIRC"),
            sym_shifted: Uc(0x0302),
        }
    }

    #[test]
    fn test_keycodes_per_mode() {
        let key = Key::from(&row());
        assert_eq!(
            key.keycodes(Mode::Base),
            (Keycode::parse("KC_1"), Keycode::Unicode(0x20AC))
        );
        assert_eq!(
            key.keycodes(Mode::DeadKey),
            (Keycode::Unicode(0x201E), Keycode::parse(KC_TRNS))
        );
        assert_eq!(
            key.keycodes(Mode::Sym),
            (Keycode::parse("KC_CIRC"), Keycode::Unicode(0x0302))
        );
    }

    #[test]
    fn test_missing_shift_defaults_to_base() {
        let mut r = row();
        r.shifted = None;
        let key = Key::from(&r);
        let (kc, skc) = key.keycodes(Mode::Base);
        assert_eq!(kc, skc);
    }

    #[test]
    fn test_undescribed_modes_are_transparent() {
        let key = Key::from(&row());
        for mode in [Mode::Qwerty, Mode::Nav, Mode::Fn] {
            let (kc, skc) = key.keycodes(mode);
            assert!(kc.is_transparent());
            assert!(skc.is_transparent());
        }
    }

    #[test]
    fn test_table_keeps_declaration_order() {
        let mut second = row();
        second.name = "EKC_0";
        let table = KeyTable::from_rows(&[row(), second]);
        let names: Vec<&str> = table.iter().map(|(name, _)| name).collect();
        assert_eq!(names, vec!["EKC_1", "EKC_0"]);
        assert!(table.get("EKC_0").is_some());
        assert!(table.get("EKC_9").is_none());
    }
}
