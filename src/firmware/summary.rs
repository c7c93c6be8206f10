//! Machine-readable summary of a resolution pass.

use crate::firmware::generator::ResolvedKeymap;
use crate::firmware::tables::{CustomKey, Override};
use crate::models::Mode;
use indexmap::IndexMap;
use serde::Serialize;

/// One unicode map entry as shown in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnicodeSummary {
    /// Index name
    pub index: String,
    /// Code point as `U+XXXX`
    pub codepoint: String,
    /// The character
    pub character: String,
}

/// Everything the generated keymap defines, minus the grids.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeymapSummary {
    /// Host key table name
    pub host: String,
    /// Preset name
    pub keymap: String,
    /// Layers emitted, in order
    pub layers: Vec<Mode>,
    /// Entries of the custom keycode enum
    pub custom_keycodes: Vec<String>,
    /// `#define` aliases
    pub aliases: IndexMap<String, String>,
    /// Unicode map
    pub unicode: Vec<UnicodeSummary>,
    /// Key override rules
    pub overrides: Vec<OverrideSummary>,
    /// Custom keycodes with runtime unicode dispatch
    pub custom_keys: Vec<CustomKey>,
}

/// An override and the identifier it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OverrideSummary {
    /// Firmware identifier
    pub name: String,
    /// The rule
    #[serde(flatten)]
    pub rule: Override,
}

impl KeymapSummary {
    /// Summarizes a resolved keymap.
    #[must_use]
    pub fn new(resolved: &ResolvedKeymap, host: &str, keymap: &str) -> Self {
        Self {
            host: host.to_string(),
            keymap: keymap.to_string(),
            layers: resolved.active_modes(),
            custom_keycodes: resolved.custom_keycode_names(),
            aliases: resolved
                .aliases()
                .iter()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect(),
            unicode: resolved
                .unicode()
                .entries()
                .map(|entry| UnicodeSummary {
                    codepoint: format!("U+{:04X}", entry.codepoint),
                    character: entry.display(),
                    index: entry.index,
                })
                .collect(),
            overrides: resolved
                .overrides()
                .iter()
                .map(|ovr| OverrideSummary {
                    name: ovr.name(),
                    rule: ovr.clone(),
                })
                .collect(),
            custom_keys: resolved.custom_keys().iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{Host, Preset};
    use crate::firmware::generator::FirmwareGenerator;

    #[test]
    fn test_summary_of_std_keymap() {
        let resolved = FirmwareGenerator::for_preset(Host::Us, Preset::Std)
            .unwrap()
            .resolve()
            .unwrap();
        let summary = KeymapSummary::new(&resolved, "us", "std");

        assert_eq!(summary.layers.first(), Some(&Mode::Base));
        assert!(summary.layers.contains(&Mode::Fn));
        assert!(summary
            .unicode
            .iter()
            .any(|u| u.index == "EURO_SIGN" && u.codepoint == "U+20AC"));

        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["host"], "us");
        assert_eq!(json["aliases"]["Sym_EKC_1"], "UP(SUBSCRIPT_ONE, SUPERSCRIPT_ONE)");
        assert!(json["layers"]
            .as_array()
            .unwrap()
            .iter()
            .any(|layer| layer == "DK"));
        assert_eq!(json["custom_keys"][0]["mode"], "Base");
    }
}
