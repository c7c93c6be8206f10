//! Base grid and per-mode layers of a keymap preset.

use crate::error::{GenerateError, GenerateResult};
use crate::models::keycode::{Keycode, TRANSPARENT};
use crate::models::layer::{Coord, Layer};
use crate::models::mode::Mode;
use std::collections::BTreeMap;

/// Parses a textual layer grid.
///
/// One row per non-empty line, slots separated by commas. Lines starting
/// with `//` are comments.
#[must_use]
pub fn parse_grid(text: &str) -> Vec<Vec<Keycode>> {
    text.lines()
        .map(str::trim_start)
        .filter(|line| !line.starts_with("//"))
        .map(|line| {
            line.split(',')
                .map(str::trim)
                .filter(|slot| !slot.is_empty())
                .map(Keycode::parse)
                .collect::<Vec<_>>()
        })
        .filter(|row| !row.is_empty())
        .collect()
}

fn shape_of(rows: &[Vec<Keycode>]) -> Vec<usize> {
    rows.iter().map(Vec::len).collect()
}

/// All grids of one keymap: the base grid naming logical keys, and the
/// layers that will be emitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keymaps {
    layout_template: String,
    shape: Vec<usize>,
    base: Vec<Vec<Keycode>>,
    layers: BTreeMap<Mode, Layer>,
}

impl Keymaps {
    /// Creates empty keymaps for a physical layout template.
    ///
    /// The template holds one `{}` per physical key; its line structure
    /// defines the grid shape every layer must match.
    #[must_use]
    pub fn new(layout_template: &str) -> Self {
        let key_count = layout_template.matches("{}").count();
        let filled = layout_template.replace("{}", TRANSPARENT);
        let base = parse_grid(&filled);
        debug_assert_eq!(base.iter().map(Vec::len).sum::<usize>(), key_count);

        Self {
            layout_template: layout_template.to_string(),
            shape: shape_of(&base),
            base,
            layers: BTreeMap::new(),
        }
    }

    /// Builds keymaps from a preset's (mode, grid text) list.
    ///
    /// The Base grid becomes the base grid; every other grid seeds its
    /// mode's layer.
    ///
    /// # Errors
    ///
    /// Fails when a grid does not match the layout shape, a mode appears
    /// twice, or the preset has no Base grid.
    pub fn from_preset(layout_template: &str, grids: &[(Mode, &str)]) -> GenerateResult<Self> {
        let mut keymaps = Self::new(layout_template);
        let mut has_base = false;

        for (mode, text) in grids {
            if *mode == Mode::Base {
                if has_base {
                    return Err(GenerateError::DuplicateLayer { mode: Mode::Base });
                }
                keymaps.set_base(text)?;
                has_base = true;
            } else {
                keymaps.add_layer(*mode, Some(text))?;
            }
        }

        if !has_base {
            return Err(GenerateError::MissingBaseLayer);
        }
        Ok(keymaps)
    }

    fn check_shape(&self, mode: Mode, rows: &[Vec<Keycode>]) -> GenerateResult<()> {
        let found = shape_of(rows);
        if found != self.shape {
            return Err(GenerateError::LayerShapeMismatch {
                mode,
                expected: self.shape.clone(),
                found,
            });
        }
        Ok(())
    }

    /// Sets the base grid, whose slots name logical keys.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::LayerShapeMismatch`] if the grid does not
    /// match the layout.
    pub fn set_base(&mut self, text: &str) -> GenerateResult<()> {
        let rows = parse_grid(text);
        self.check_shape(Mode::Base, &rows)?;
        self.base = rows;
        Ok(())
    }

    /// Adds the layer for `mode`, seeded from `preset` or transparent.
    ///
    /// Without a preset an existing layer is returned unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::DuplicateLayer`] when a preset is given for a
    /// mode that already has a layer, and
    /// [`GenerateError::LayerShapeMismatch`] for a badly shaped preset.
    pub fn add_layer(&mut self, mode: Mode, preset: Option<&str>) -> GenerateResult<&mut Layer> {
        if self.layers.contains_key(&mode) && preset.is_some() {
            return Err(GenerateError::DuplicateLayer { mode });
        }

        let layer = match preset {
            Some(text) => {
                let rows = parse_grid(text);
                self.check_shape(mode, &rows)?;
                Layer::from_rows(mode, rows)
            }
            None => Layer::transparent(mode, &self.shape),
        };

        Ok(self.layers.entry(mode).or_insert(layer))
    }

    /// Iterates over base grid slots with their coordinates, row by row.
    pub fn base_keys(&self) -> impl Iterator<Item = (Coord, &Keycode)> {
        self.base.iter().enumerate().flat_map(|(row, cols)| {
            cols.iter()
                .enumerate()
                .map(move |(col, kc)| (Coord::new(row, col), kc))
        })
    }

    /// Gets the layer for a mode, if one was added.
    #[must_use]
    pub fn layer(&self, mode: Mode) -> Option<&Layer> {
        self.layers.get(&mode)
    }

    /// Returns true if the mode's layer holds at least one non-transparent key.
    #[must_use]
    pub fn has_keys(&self, mode: Mode) -> bool {
        self.layers.get(&mode).is_some_and(Layer::has_keys)
    }

    /// Modes worth emitting, in emission order.
    #[must_use]
    pub fn active_modes(&self) -> Vec<Mode> {
        Mode::iter().filter(|mode| self.has_keys(*mode)).collect()
    }

    /// Renders a mode's layer into the layout template.
    ///
    /// A mode without a layer renders as fully transparent.
    ///
    /// # Errors
    ///
    /// Propagates [`Layer::format`] errors.
    pub fn format(&self, mode: Mode) -> GenerateResult<String> {
        match self.layers.get(&mode) {
            Some(layer) => layer.format(&self.layout_template),
            None => Layer::transparent(mode, &self.shape).format(&self.layout_template),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEMPLATE: &str = "
        {}, {}, {},
        {}, {}
    ";

    #[test]
    fn test_parse_grid_skips_comments_and_blank_lines() {
        let rows = parse_grid(
            "
            // top row
            KC_A , LT(Fn|KC_ESC),

            _______, KC_B
            ",
        );
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][1].to_string(), "LT(Fn, KC_ESC)");
        assert!(rows[1][0].is_transparent());
    }

    #[test]
    fn test_new_derives_shape_from_template() {
        let keymaps = Keymaps::new(TEMPLATE);
        assert_eq!(keymaps.shape, vec![3, 2]);
        assert!(keymaps.active_modes().is_empty());
    }

    #[test]
    fn test_from_preset() {
        let keymaps = Keymaps::from_preset(
            TEMPLATE,
            &[
                (Mode::Base, "EKC_A, EKC_B, KC_ESC,\nKC_TAB, _______"),
                (Mode::Fn, "KC_F1, _______, _______,\n_______, _______"),
            ],
        )
        .unwrap();

        let base: Vec<String> = keymaps.base_keys().map(|(_, kc)| kc.to_string()).collect();
        assert_eq!(base, vec!["EKC_A", "EKC_B", "KC_ESC", "KC_TAB", "_______"]);
        assert_eq!(keymaps.active_modes(), vec![Mode::Fn]);
    }

    #[test]
    fn test_base_keys_coordinates() {
        let keymaps =
            Keymaps::from_preset(TEMPLATE, &[(Mode::Base, "A, B, C,\nD, E")]).unwrap();
        let coords: Vec<Coord> = keymaps.base_keys().map(|(coord, _)| coord).collect();
        assert_eq!(coords[3], Coord::new(1, 0));
        assert_eq!(coords.len(), 5);
    }

    #[test]
    fn test_shape_mismatch() {
        let err = Keymaps::from_preset(TEMPLATE, &[(Mode::Base, "A, B,\nC, D")]).unwrap_err();
        assert_eq!(
            err,
            GenerateError::LayerShapeMismatch {
                mode: Mode::Base,
                expected: vec![3, 2],
                found: vec![2, 2],
            }
        );
    }

    #[test]
    fn test_missing_base_layer() {
        let err =
            Keymaps::from_preset(TEMPLATE, &[(Mode::Fn, "A, B, C,\nD, E")]).unwrap_err();
        assert_eq!(err, GenerateError::MissingBaseLayer);
    }

    #[test]
    fn test_duplicate_preset_layer() {
        let mut keymaps = Keymaps::new(TEMPLATE);
        keymaps.add_layer(Mode::Nav, Some("A, B, C,\nD, E")).unwrap();
        let err = keymaps
            .add_layer(Mode::Nav, Some("A, B, C,\nD, E"))
            .unwrap_err();
        assert_eq!(err, GenerateError::DuplicateLayer { mode: Mode::Nav });

        // Without a preset the existing layer is reused.
        let layer = keymaps.add_layer(Mode::Nav, None).unwrap();
        assert!(layer.has_keys());
    }

    #[test]
    fn test_layer_activity() {
        let mut keymaps = Keymaps::new(TEMPLATE);
        keymaps.add_layer(Mode::Sym, None).unwrap();
        keymaps.add_layer(Mode::Media, None).unwrap();
        keymaps
            .add_layer(Mode::Sym, None)
            .unwrap()
            .set_key(Coord::new(0, 0), Keycode::parse("KC_A"))
            .unwrap();

        assert!(keymaps.has_keys(Mode::Sym));
        assert!(!keymaps.has_keys(Mode::Media));
        assert_eq!(keymaps.active_modes(), vec![Mode::Sym]);
    }
}
