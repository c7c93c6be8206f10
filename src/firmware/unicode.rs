//! Unicode index table.
//!
//! Every unicode code point used by the key table gets a symbolic index named
//! after its Unicode character name (`EURO_SIGN`). The firmware references
//! code points through these indices (`UM(EURO_SIGN)`), never literally.

use crate::error::{GenerateError, GenerateResult};
use crate::models::{KeyTable, Keycode, Mode};
use indexmap::IndexMap;
use tracing::debug;

/// Derives the index name of a code point from its Unicode name.
///
/// Spaces and hyphens become underscores.
///
/// # Errors
///
/// Returns [`GenerateError::UnknownUnicodeName`] for unnamed or invalid
/// code points.
pub fn index_name(codepoint: u32) -> GenerateResult<String> {
    let name = char::from_u32(codepoint)
        .and_then(unicode_names2::name)
        .ok_or(GenerateError::UnknownUnicodeName { codepoint })?;

    Ok(name.to_string().replace([' ', '-'], "_"))
}

/// One unicode map entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnicodeEntry {
    /// Symbolic index name
    pub index: String,
    /// Code point
    pub codepoint: u32,
}

impl UnicodeEntry {
    /// The character itself, for comments in generated code.
    #[must_use]
    pub fn display(&self) -> String {
        char::from_u32(self.codepoint)
            .map(String::from)
            .unwrap_or_default()
    }
}

/// Code point → index table, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UnicodeTable {
    indices: IndexMap<u32, String>,
}

impl UnicodeTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Collects every unicode keycode of a key table.
    ///
    /// Walks keys in table order, modes in emission order, base then
    /// shifted, so indices are stable across runs.
    ///
    /// # Errors
    ///
    /// Fails if a code point has no name or two names collide.
    pub fn build(keys: &KeyTable) -> GenerateResult<Self> {
        let mut table = Self::new();
        for (_, key) in keys.iter() {
            for mode in Mode::iter() {
                let (kc, skc) = key.keycodes(mode);
                for keycode in [&kc, &skc] {
                    if let Some(cp) = keycode.codepoint() {
                        table.insert(cp)?;
                    }
                }
            }
        }
        debug!(entries = table.len(), "built unicode table");
        Ok(table)
    }

    /// Indexes a code point, returning its index name.
    ///
    /// Inserting an already indexed code point is a no-op.
    ///
    /// # Errors
    ///
    /// Fails if the code point has no name, or its name is already used by
    /// another code point.
    pub fn insert(&mut self, codepoint: u32) -> GenerateResult<&str> {
        if !self.indices.contains_key(&codepoint) {
            let index = index_name(codepoint)?;
            if let Some((&existing, _)) = self.indices.iter().find(|(_, idx)| **idx == index) {
                return Err(GenerateError::UnicodeIndexConflict {
                    index,
                    existing,
                    new: codepoint,
                });
            }
            self.indices.insert(codepoint, index);
        }

        Ok(self.indices[&codepoint].as_str())
    }

    /// Index name of a unicode keycode.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::MissingUnicodeIndex`] if the keycode is not
    /// unicode or was never indexed; both mean the pre-pass did not run
    /// over the data being resolved.
    pub fn index_of(&self, keycode: &Keycode) -> GenerateResult<&str> {
        keycode
            .codepoint()
            .and_then(|cp| self.indices.get(&cp))
            .map(String::as_str)
            .ok_or_else(|| GenerateError::MissingUnicodeIndex {
                keycode: keycode.to_string(),
            })
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> impl Iterator<Item = UnicodeEntry> + '_ {
        self.indices.iter().map(|(&codepoint, index)| UnicodeEntry {
            index: index.clone(),
            codepoint,
        })
    }

    /// Number of indexed code points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns true if nothing was indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}
