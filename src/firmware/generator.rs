//! Keycode resolution engine.
//!
//! Walks every mode and every position of the base grid, looks up the
//! logical key named there in the host key table, classifies the resulting
//! (keycode, shifted keycode) pair and writes the keycode to emit into the
//! mode's layer. Aliases, overrides and custom keycodes needed by the emitted
//! keycodes are recorded along the way.

use crate::data::{moonlander, Host, Preset};
use crate::error::{GenerateError, GenerateResult};
use crate::firmware::classify::classify;
use crate::firmware::tables::{synthesized_name, AliasTable, CustomKey, Override, RecordTable};
use crate::firmware::unicode::UnicodeTable;
use crate::models::{Coord, KeyTable, Keycode, Keymaps, Mode, ShiftMode};
use tracing::{debug, info, trace};

/// Prefix of the keycodes that move to a layer.
pub const LAYER_MOVE_PREFIX: &str = "CKC_LMOVE_";

/// Owns the grids and synthesized tables for one resolution pass.
#[derive(Debug)]
pub struct FirmwareGenerator {
    keys: KeyTable,
    keymaps: Keymaps,
    unicode: UnicodeTable,
    aliases: AliasTable,
    overrides: RecordTable<Override>,
    custom_keys: RecordTable<CustomKey>,
}

impl FirmwareGenerator {
    /// Creates a generator over a key table and the preset grids.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::NonBasicBaseKeycode`] if a key's Base layer
    /// keycode is not a symbolic keycode.
    pub fn new(keys: KeyTable, keymaps: Keymaps) -> GenerateResult<Self> {
        for (name, key) in keys.iter() {
            if !key.base.is_basic() {
                return Err(GenerateError::NonBasicBaseKeycode {
                    key: name.to_string(),
                    keycode: key.base.to_string(),
                });
            }
        }

        Ok(Self {
            keys,
            keymaps,
            unicode: UnicodeTable::new(),
            aliases: AliasTable::new(),
            overrides: RecordTable::new(),
            custom_keys: RecordTable::new(),
        })
    }

    /// Creates a generator for a built-in host table and preset on the
    /// Moonlander layout.
    ///
    /// # Errors
    ///
    /// Fails if the preset grids do not fit the layout.
    pub fn for_preset(host: Host, preset: Preset) -> GenerateResult<Self> {
        debug!(%host, %preset, "loading preset");
        let keymaps = Keymaps::from_preset(moonlander::LAYOUT_TEMPLATE, preset.grids())?;
        Self::new(host.key_table(), keymaps)
    }

    /// Runs the resolution pass.
    ///
    /// Unicode indices are assigned for the whole key table first, then
    /// every mode is resolved in emission order.
    ///
    /// # Errors
    ///
    /// Any conflict aborts the pass; nothing is returned partially.
    pub fn resolve(mut self) -> GenerateResult<ResolvedKeymap> {
        self.unicode = UnicodeTable::build(&self.keys)?;

        for mode in Mode::iter() {
            self.resolve_mode(mode)?;
        }

        let resolved = ResolvedKeymap {
            keymaps: self.keymaps,
            unicode: self.unicode,
            aliases: self.aliases,
            overrides: self.overrides,
            custom_keys: self.custom_keys,
        };
        info!(
            layers = resolved.active_modes().len(),
            aliases = resolved.aliases.len(),
            overrides = resolved.overrides.len(),
            custom_keys = resolved.custom_keys.len(),
            unicode = resolved.unicode.len(),
            "resolved keymap"
        );
        Ok(resolved)
    }

    fn resolve_mode(&mut self, mode: Mode) -> GenerateResult<()> {
        self.keymaps.add_layer(mode, None)?;

        let positions: Vec<(Coord, Keycode)> = self
            .keymaps
            .base_keys()
            .map(|(coord, slot)| (coord, slot.clone()))
            .collect();

        for (coord, slot) in positions {
            if let Some(keycode) = self.resolve_position(mode, coord, &slot)? {
                self.keymaps.add_layer(mode, None)?.set_key(coord, keycode)?;
            }
        }

        debug!(%mode, active = self.keymaps.has_keys(mode), "resolved layer");
        Ok(())
    }

    /// Keycode to write at `coord` on `mode`, or `None` to leave it alone.
    fn resolve_position(
        &mut self,
        mode: Mode,
        coord: Coord,
        slot: &Keycode,
    ) -> GenerateResult<Option<Keycode>> {
        let key = match slot.raw() {
            Keycode::Basic(name) => self.keys.get(name).cloned().map(|key| (name, key)),
            _ => None,
        };

        let Some((name, key)) = key else {
            return Ok((mode == Mode::Base).then(|| slot.clone()));
        };

        let position = if mode == Mode::Base {
            slot.clone()
        } else {
            slot.without_function()
        };

        let (raw, shifted) = key.keycodes(mode);
        let keycode = position
            .with_raw(raw.clone())
            .ok_or_else(|| GenerateError::NestedFunction {
                mode,
                coord,
                outer: position.to_string(),
                inner: raw.to_string(),
            })?;

        self.emit(mode, name, keycode, shifted).map(Some)
    }

    /// Classifies a pair and records whatever the emitted keycode needs.
    fn emit(
        &mut self,
        mode: Mode,
        key: &str,
        kc: Keycode,
        skc: Keycode,
    ) -> GenerateResult<Keycode> {
        let name = synthesized_name(mode, key);
        let shift_mode = classify(&kc, Some(&skc));
        trace!(%mode, key, %kc, %skc, ?shift_mode, "classified");

        match shift_mode {
            ShiftMode::Default => {
                if kc.is_unicode() {
                    let value = self.unicode_map(&kc)?;
                    return self.aliases.register(&name, value);
                }
                Ok(kc)
            }
            ShiftMode::Override => {
                let shifted = if skc.is_unicode() {
                    self.unicode_map(&skc)?
                } else if skc.is_transparent() {
                    kc.clone()
                } else {
                    skc
                };
                self.overrides.insert(Override {
                    mode,
                    key: key.to_string(),
                    base: kc.clone(),
                    shifted,
                })?;
                Ok(kc)
            }
            ShiftMode::CustomKey => {
                if !skc.is_unicode() {
                    return Err(GenerateError::UnsupportedCustomKey {
                        name,
                        shifted: skc.to_string(),
                    });
                }
                if let Some(wrapped) = [&kc, &skc].into_iter().find(|kc| kc.has_function()) {
                    return Err(GenerateError::FunctionMisuse {
                        name,
                        keycode: wrapped.to_string(),
                    });
                }

                let index = self.unicode.index_of(&skc)?.to_string();
                self.custom_keys.insert(CustomKey {
                    mode,
                    name: name.clone(),
                    base: kc,
                    shifted: skc,
                    index,
                })?;
                Ok(Keycode::Basic(name))
            }
            ShiftMode::UnicodeMap => {
                let value = Keycode::Basic(format!(
                    "UP({}, {})",
                    self.unicode.index_of(&kc)?,
                    self.unicode.index_of(&skc)?
                ));
                self.aliases.register(&name, value)
            }
        }
    }

    fn unicode_map(&self, keycode: &Keycode) -> GenerateResult<Keycode> {
        Ok(Keycode::Basic(format!(
            "UM({})",
            self.unicode.index_of(keycode)?
        )))
    }
}

/// Output of a resolution pass, read-only from here on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedKeymap {
    keymaps: Keymaps,
    unicode: UnicodeTable,
    aliases: AliasTable,
    overrides: RecordTable<Override>,
    custom_keys: RecordTable<CustomKey>,
}

impl ResolvedKeymap {
    /// Resolved grids.
    #[must_use]
    pub const fn keymaps(&self) -> &Keymaps {
        &self.keymaps
    }

    /// Unicode index table.
    #[must_use]
    pub const fn unicode(&self) -> &UnicodeTable {
        &self.unicode
    }

    /// Synthesized aliases.
    #[must_use]
    pub const fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    /// Key override rules.
    #[must_use]
    pub const fn overrides(&self) -> &RecordTable<Override> {
        &self.overrides
    }

    /// Synthesized custom keycodes.
    #[must_use]
    pub const fn custom_keys(&self) -> &RecordTable<CustomKey> {
        &self.custom_keys
    }

    /// Modes with at least one key, in emission order.
    #[must_use]
    pub fn active_modes(&self) -> Vec<Mode> {
        self.keymaps.active_modes()
    }

    /// Layer move keycodes, one per active mode.
    #[must_use]
    pub fn layer_moves(&self) -> Vec<(String, Mode)> {
        self.active_modes()
            .into_iter()
            .map(|mode| (format!("{LAYER_MOVE_PREFIX}{mode}"), mode))
            .collect()
    }

    /// Every entry of the `custom_keycodes` enum: layer moves first, then
    /// synthesized custom keys.
    #[must_use]
    pub fn custom_keycode_names(&self) -> Vec<String> {
        self.layer_moves()
            .into_iter()
            .map(|(name, _)| name)
            .chain(self.custom_keys.iter().map(|ckc| ckc.name.clone()))
            .collect()
    }
}
