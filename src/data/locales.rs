//! Per-host key tables for the Ergo-L layout.
//!
//! Each row names a logical key (`EKC_*`, referenced from layer grids) and
//! the keycodes it produces on the base, dead-key and symbol layers. Base
//! keycodes depend on the keyboard layout configured on the host OS: the
//! `fr` table uses the `FR_*` names from QMK's `keymap_french.h`.

use crate::models::{KeyRow, KeyTable, Sym, TRNS};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;
use Sym::{Kc, Uc};

/// Keyboard layout configured on the host the keyboard is plugged into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Host {
    /// US QWERTY host layout
    #[default]
    Us,
    /// French AZERTY host layout
    Fr,
}

impl Host {
    /// Every supported host.
    pub const ALL: [Self; 2] = [Self::Us, Self::Fr];

    /// Name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Us => "us",
            Self::Fr => "fr",
        }
    }

    /// Builds the key table for this host.
    #[must_use]
    pub fn key_table(self) -> KeyTable {
        match self {
            Self::Us => KeyTable::from_rows(US_KEYS),
            Self::Fr => KeyTable::from_rows(FR_KEYS),
        }
    }

    /// Extra headers the generated keymap must include.
    #[must_use]
    pub const fn extra_includes(self) -> &'static [&'static str] {
        match self {
            Self::Us => &[],
            Self::Fr => &["keymap_french.h", "sendstring_french.h"],
        }
    }
}

impl fmt::Display for Host {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[allow(clippy::too_many_arguments)]
const fn row(
    name: &'static str,
    base: &'static str,
    shifted: Option<Sym>,
    dk_base: Sym,
    dk_shifted: Sym,
    sym_base: Sym,
    sym_shifted: Sym,
) -> KeyRow {
    KeyRow {
        name,
        base,
        shifted,
        dk_base,
        dk_shifted,
        sym_base,
        sym_shifted,
    }
}

#[rustfmt::skip]
const US_KEYS: &[KeyRow] = &[
    row("EKC_Q", "KC_Q", None, Uc(0x00E2), Uc(0x00C2), Kc("KC_CIRC"), Uc(0x0302)),
    row("EKC_C", "KC_C", None, Uc(0x00E7), Uc(0x00C7), Kc("KC_LABK"), Uc(0x2264)),
    row("EKC_O", "KC_O", None, Uc(0x0153), Uc(0x0152), Kc("KC_RABK"), Uc(0x2265)),
    row("EKC_P", "KC_P", None, Uc(0x00F4), Uc(0x00D4), Kc("KC_DLR"), TRNS),
    row("EKC_W", "KC_W", None, TRNS, TRNS, Kc("KC_PERC"), Uc(0x2030)),

    row("EKC_J", "KC_J", None, TRNS, TRNS, Kc("KC_AT"), Uc(0x030A)),
    row("EKC_M", "KC_M", None, Uc(0x00B5), TRNS, Kc("KC_AMPR"), TRNS),
    row("EKC_D", "KC_D", None, Kc("KC_UNDS"), TRNS, Kc("KC_ASTR"), Uc(0x00D7)),
    row("EKC_DK", "OSL(DK)", Some(Kc("KC_EXLM")), Uc(0x0308), Uc(0x00A1), Kc("KC_QUOT"), Uc(0x0301)),
    row("EKC_Y", "KC_Y", None, Uc(0x00FB), Uc(0x00DB), Kc("KC_GRV"), Uc(0x0300)),

    row("EKC_A", "KC_A", None, Uc(0x00E0), Uc(0x00C0), Kc("KC_LCBR"), Uc(0x030C)),
    row("EKC_S", "KC_S", None, Uc(0x00E9), Uc(0x00C9), Kc("KC_LPRN"), TRNS),
    row("EKC_E", "KC_E", None, Uc(0x00E8), Uc(0x00C8), Kc("KC_RPRN"), TRNS),
    row("EKC_N", "KC_N", None, Uc(0x00EA), Uc(0x00CA), Kc("KC_RCBR"), Uc(0x0307)),
    row("EKC_F", "KC_F", None, Uc(0x00F1), Uc(0x00D1), Kc("KC_EQL"), Uc(0x2260)),

    row("EKC_L", "KC_L", None, Kc("KC_LPRN"), TRNS, Kc("KC_BSLS"), Uc(0x0338)),
    row("EKC_R", "KC_R", None, Kc("KC_RPRN"), TRNS, Kc("KC_PLUS"), Uc(0x2A72)),
    row("EKC_T", "KC_T", None, Uc(0x00EE), Uc(0x00CE), Kc("KC_MINS"), Uc(0x0304)),
    row("EKC_I", "KC_I", None, Uc(0x00EF), Uc(0x00CF), Kc("KC_SLSH"), Uc(0x00F7)),
    row("EKC_U", "KC_U", None, Uc(0x00F9), Uc(0x00D9), Kc("KC_DQUO"), Uc(0x030B)),

    row("EKC_Z", "KC_Z", None, Uc(0x00E6), Uc(0x00C6), Kc("KC_TILD"), Uc(0x0303)),
    row("EKC_X", "KC_X", None, Uc(0x00DF), Uc(0x1E9E), Kc("KC_LBRC"), Uc(0x0326)),
    row("EKC_MNS", "KC_MINS", Some(Kc("KC_QUES")), Uc(0x2011), Uc(0x00BF), Kc("KC_RBRC"), Uc(0x0328)),
    row("EKC_V", "KC_V", None, Uc(0x2013), TRNS, Kc("KC_UNDS"), Uc(0x2013)),
    row("EKC_B", "KC_B", None, Uc(0x2014), TRNS, Kc("KC_HASH"), TRNS),

    row("EKC_DOT", "KC_DOT", Some(Kc("KC_COLN")), Uc(0x2026), TRNS, Kc("KC_PIPE"), Uc(0x00A6)),
    row("EKC_H", "KC_H", None, TRNS, TRNS, Kc("KC_EXLM"), Uc(0x00AC)),
    row("EKC_G", "KC_G", None, TRNS, TRNS, Kc("KC_SCLN"), Uc(0x0312)),
    row("EKC_COMM", "KC_COMM", Some(Kc("KC_SCLN")), Uc(0x00B7), Uc(0x2022), Kc("KC_COLN"), TRNS),
    row("EKC_K", "KC_K", None, TRNS, TRNS, Kc("KC_QUES"), Uc(0x0306)),

    row("EKC_1", "KC_1", Some(Uc(0x20AC)), Uc(0x201E), Uc(0x201A), Uc(0x2081), Uc(0x00B9)),
    row("EKC_2", "KC_2", Some(Uc(0x00AB)), Uc(0x201C), Uc(0x2018), Uc(0x2082), Uc(0x00B2)),
    row("EKC_3", "KC_3", Some(Uc(0x00BB)), Uc(0x201D), Uc(0x2019), Uc(0x2083), Uc(0x00B3)),
    row("EKC_4", "KC_4", Some(Kc("KC_DLR")), Uc(0x00A2), TRNS, Uc(0x2084), Uc(0x2074)),
    row("EKC_5", "KC_5", Some(Kc("KC_PERC")), Uc(0x2030), TRNS, Uc(0x2085), Uc(0x2075)),
    row("EKC_6", "KC_6", Some(Kc("KC_CIRC")), TRNS, TRNS, Uc(0x2086), Uc(0x2076)),

    row("EKC_7", "KC_7", Some(Kc("KC_AMPR")), TRNS, TRNS, Uc(0x2087), Uc(0x2077)),
    row("EKC_8", "KC_8", Some(Kc("KC_ASTR")), Uc(0x00A7), TRNS, Uc(0x2088), Uc(0x2078)),
    row("EKC_9", "KC_9", Some(Kc("KC_HASH")), Uc(0x00B6), TRNS, Uc(0x2089), Uc(0x2079)),
    row("EKC_0", "KC_0", Some(Kc("KC_AT")), Uc(0x00B0), TRNS, Uc(0x2080), Uc(0x2070)),

    row("EKC_SPC", "KC_SPC", Some(Uc(0x202F)), Uc(0x2019), TRNS, Kc("KC_SPC"), TRNS),
];

#[rustfmt::skip]
const FR_KEYS: &[KeyRow] = &[
    row("EKC_Q", "FR_Q", None, Uc(0x00E2), Uc(0x00C2), Uc(0x005E), Uc(0x0302)),
    row("EKC_C", "FR_C", None, Kc("FR_CCED"), Uc(0x00C7), Kc("FR_LABK"), Uc(0x2264)),
    row("EKC_O", "FR_O", None, Uc(0x0153), Uc(0x0152), Kc("FR_RABK"), Uc(0x2265)),
    row("EKC_P", "FR_P", None, Uc(0x00F4), Uc(0x00D4), Kc("FR_DLR"), TRNS),
    row("EKC_W", "FR_W", None, TRNS, TRNS, Kc("FR_PERC"), Uc(0x2030)),

    row("EKC_J", "FR_J", None, TRNS, TRNS, Kc("FR_AT"), Uc(0x030A)),
    row("EKC_M", "FR_M", None, Uc(0x00B5), TRNS, Kc("FR_AMPR"), TRNS),
    row("EKC_D", "FR_D", None, Kc("FR_UNDS"), TRNS, Kc("FR_ASTR"), Uc(0x00D7)),
    row("EKC_DK", "OSL(DK)", Some(Kc("KC_EXLM")), Uc(0x0308), Uc(0x00A1), Kc("FR_QUOT"), Uc(0x0301)),
    row("EKC_Y", "FR_Y", None, Uc(0x00FB), Uc(0x00DB), Kc("FR_GRV"), Uc(0x0300)),

    row("EKC_A", "FR_A", None, Kc("FR_AGRV"), Uc(0x00C0), Kc("FR_LCBR"), Uc(0x030C)),
    row("EKC_S", "FR_S", None, Kc("FR_EACU"), Uc(0x00C9), Kc("FR_LPRN"), TRNS),
    row("EKC_E", "FR_E", None, Kc("FR_EGRV"), Uc(0x00C8), Kc("FR_RPRN"), TRNS),
    row("EKC_N", "FR_N", None, Uc(0x00EA), Uc(0x00CA), Kc("FR_RCBR"), Uc(0x0307)),
    row("EKC_F", "FR_F", None, Uc(0x00F1), Uc(0x00D1), Kc("FR_EQL"), Uc(0x2260)),

    row("EKC_L", "FR_L", None, Kc("FR_LPRN"), TRNS, Kc("FR_BSLS"), Uc(0x0338)),
    row("EKC_R", "FR_R", None, Kc("FR_RPRN"), TRNS, Kc("FR_PLUS"), Uc(0x2A72)),
    row("EKC_T", "FR_T", None, Uc(0x00EE), Uc(0x00CE), Kc("FR_MINS"), Uc(0x0304)),
    row("EKC_I", "FR_I", None, Uc(0x00EF), Uc(0x00CF), Kc("FR_SLSH"), Uc(0x00F7)),
    row("EKC_U", "FR_U", None, Uc(0x00F9), Uc(0x00D9), Kc("FR_DQUO"), Uc(0x030B)),

    row("EKC_Z", "FR_Z", None, Uc(0x00E6), Uc(0x00C6), Kc("FR_TILD"), Uc(0x0303)),
    row("EKC_X", "FR_X", None, Uc(0x00DF), Uc(0x1E9E), Kc("FR_LBRC"), Uc(0x0326)),
    row("EKC_MNS", "FR_MINS", Some(Kc("FR_QUES")), Uc(0x2011), Uc(0x00BF), Kc("FR_RBRC"), Uc(0x0328)),
    row("EKC_V", "FR_V", None, Uc(0x2013), TRNS, Kc("FR_UNDS"), Uc(0x2013)),
    row("EKC_B", "FR_B", None, Uc(0x2014), TRNS, Kc("FR_HASH"), TRNS),

    row("EKC_DOT", "FR_DOT", Some(Kc("FR_COLN")), Uc(0x2026), TRNS, Kc("FR_PIPE"), Uc(0x00A6)),
    row("EKC_H", "FR_H", None, TRNS, TRNS, Kc("FR_EXLM"), Uc(0x00AC)),
    row("EKC_G", "FR_G", None, TRNS, TRNS, Kc("FR_SCLN"), Uc(0x0312)),
    row("EKC_COMM", "FR_COMM", Some(Kc("FR_SCLN")), Uc(0x00B7), Uc(0x2022), Kc("FR_COLN"), TRNS),
    row("EKC_K", "FR_K", None, TRNS, TRNS, Kc("FR_QUES"), Uc(0x0306)),

    row("EKC_1", "FR_1", Some(Uc(0x20AC)), Uc(0x201E), Uc(0x201A), Uc(0x2081), Uc(0x00B9)),
    row("EKC_2", "FR_2", Some(Uc(0x00AB)), Uc(0x201C), Uc(0x2018), Uc(0x2082), Uc(0x00B2)),
    row("EKC_3", "FR_3", Some(Uc(0x00BB)), Uc(0x201D), Uc(0x2019), Uc(0x2083), Uc(0x00B3)),
    row("EKC_4", "FR_4", Some(Kc("FR_DLR")), Uc(0x00A2), TRNS, Uc(0x2084), Uc(0x2074)),
    row("EKC_5", "FR_5", Some(Kc("FR_PERC")), Uc(0x2030), TRNS, Uc(0x2085), Uc(0x2075)),
    row("EKC_6", "FR_6", Some(Uc(0x005E)), TRNS, TRNS, Uc(0x2086), Uc(0x2076)),

    row("EKC_7", "FR_7", Some(Kc("FR_AMPR")), TRNS, TRNS, Uc(0x2087), Uc(0x2077)),
    row("EKC_8", "FR_8", Some(Kc("FR_ASTR")), Kc("FR_SECT"), TRNS, Uc(0x2088), Uc(0x2078)),
    row("EKC_9", "FR_9", Some(Kc("FR_HASH")), Uc(0x00B6), TRNS, Uc(0x2089), Uc(0x2079)),
    row("EKC_0", "FR_0", Some(Kc("FR_AT")), Kc("FR_DEG"), TRNS, Uc(0x2080), Uc(0x2070)),

    row("EKC_SPC", "KC_SPC", Some(Uc(0x202F)), Uc(0x2019), TRNS, Kc("KC_SPC"), TRNS),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Keycode, Mode};

    #[test]
    fn test_tables_describe_the_same_keys() {
        let us: Vec<String> = Host::Us.key_table().iter().map(|(n, _)| n.to_string()).collect();
        let fr: Vec<String> = Host::Fr.key_table().iter().map(|(n, _)| n.to_string()).collect();
        assert_eq!(us, fr);
        assert_eq!(us.iter().count(), 41);
    }

    #[test]
    fn test_base_keycodes_are_basic() {
        for host in Host::ALL {
            for (name, key) in host.key_table().iter() {
                assert!(key.base.is_basic(), "{host} {name} base is not basic");
            }
        }
    }

    #[test]
    fn test_host_specific_base_names() {
        let us = Host::Us.key_table();
        let fr = Host::Fr.key_table();
        assert_eq!(us.get("EKC_Q").unwrap().base, Keycode::parse("KC_Q"));
        assert_eq!(fr.get("EKC_Q").unwrap().base, Keycode::parse("FR_Q"));
        assert_eq!(
            fr.get("EKC_C").unwrap().keycodes(Mode::DeadKey),
            (Keycode::parse("FR_CCED"), Keycode::Unicode(0x00C7))
        );
    }

    #[test]
    fn test_extra_includes() {
        assert!(Host::Us.extra_includes().is_empty());
        assert_eq!(
            Host::Fr.extra_includes(),
            &["keymap_french.h", "sendstring_french.h"]
        );
    }
}
