//! Keyboard modes (firmware layers).

use serde::{Deserialize, Serialize};
use std::fmt;

/// One named layer of the generated keymap.
///
/// The variant order is the order layers are enumerated in the generated
/// firmware source. It carries no other meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// Ergo-L base layer
    Base,
    /// Plain QWERTY fallback layer
    Qwerty,
    /// Dead-key layer (one-shot)
    #[serde(rename = "DK")]
    DeadKey,
    /// Symbol layer
    Sym,
    /// Symbol layer used together with the QWERTY layer
    SymQwerty,
    /// Navigation layer
    Nav,
    /// Number pad layer
    Num,
    /// Media controls
    Media,
    /// Function keys
    Fn,
}

impl Mode {
    /// Every mode, in emission order.
    pub const ALL: [Self; 9] = [
        Self::Base,
        Self::Qwerty,
        Self::DeadKey,
        Self::Sym,
        Self::SymQwerty,
        Self::Nav,
        Self::Num,
        Self::Media,
        Self::Fn,
    ];

    /// Identifier used for this layer in the generated C source.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Base => "Base",
            Self::Qwerty => "Qwerty",
            Self::DeadKey => "DK",
            Self::Sym => "Sym",
            Self::SymQwerty => "SymQwerty",
            Self::Nav => "Nav",
            Self::Num => "Num",
            Self::Media => "Media",
            Self::Fn => "Fn",
        }
    }

    /// Iterates over all modes in emission order.
    pub fn iter() -> impl Iterator<Item = Self> {
        Self::ALL.into_iter()
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// How a (base, shifted) keycode pair has to be emitted.
///
/// Consumers match on this exhaustively; a new outcome must be handled
/// everywhere it is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ShiftMode {
    /// Shift behaves like the host OS default, the base keycode is enough
    Default,
    /// A static key override rule replaces the shifted symbol
    Override,
    /// A custom keycode dispatched at runtime (shifted side is unicode)
    CustomKey,
    /// A dual code point unicode map entry
    UnicodeMap,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_names_are_unique() {
        let mut names: Vec<&str> = Mode::iter().map(Mode::name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), Mode::ALL.len());
    }

    #[test]
    fn test_dead_key_layer_uses_short_name() {
        assert_eq!(Mode::DeadKey.to_string(), "DK");
    }

    #[test]
    fn test_emission_order_starts_with_base() {
        let modes: Vec<Mode> = Mode::iter().collect();
        assert_eq!(modes.first(), Some(&Mode::Base));
        assert_eq!(modes.last(), Some(&Mode::Fn));
        assert!(Mode::DeadKey < Mode::Sym);
    }
}
