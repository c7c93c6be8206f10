//! Layer grids and physical coordinates.

use crate::error::{GenerateError, GenerateResult};
use crate::models::keycode::Keycode;
use crate::models::mode::Mode;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Physical position of a key in the layout grid.
///
/// Rows and columns follow the layer grid text, not the electrical matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Coord {
    /// Grid row (0-based)
    pub row: usize,
    /// Column within the row (0-based)
    pub col: usize,
}

impl Coord {
    /// Creates a new Coord with the given row and column.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Grid of keycode slots for one mode.
///
/// # Invariants
///
/// - Every slot starts transparent unless seeded from a preset grid
/// - Assigning a transparent keycode is a no-op
/// - A non-transparent slot only accepts an identical value afterwards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layer {
    mode: Mode,
    rows: Vec<Vec<Keycode>>,
    has_keys: bool,
    max_length: usize,
}

impl Layer {
    /// Creates a layer seeded with the given rows.
    #[must_use]
    pub fn from_rows(mode: Mode, rows: Vec<Vec<Keycode>>) -> Self {
        let has_keys = rows.iter().flatten().any(|kc| !kc.is_transparent());
        let max_length = rows
            .iter()
            .flatten()
            .map(Keycode::rendered_len)
            .max()
            .unwrap_or(0);

        Self {
            mode,
            rows,
            has_keys,
            max_length,
        }
    }

    /// Creates a fully transparent layer with the given row lengths.
    #[must_use]
    pub fn transparent(mode: Mode, shape: &[usize]) -> Self {
        let rows = shape
            .iter()
            .map(|&len| vec![Keycode::transparent(); len])
            .collect();
        Self::from_rows(mode, rows)
    }

    /// Mode this layer belongs to.
    #[must_use]
    pub const fn mode(&self) -> Mode {
        self.mode
    }

    /// Rows of keycodes.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Keycode>] {
        &self.rows
    }

    /// Gets the keycode at a coordinate.
    #[must_use]
    pub fn get(&self, coord: Coord) -> Option<&Keycode> {
        self.rows.get(coord.row)?.get(coord.col)
    }

    /// Returns true once any slot holds a non-transparent keycode.
    #[must_use]
    pub const fn has_keys(&self) -> bool {
        self.has_keys
    }

    /// Number of slots in the grid.
    #[must_use]
    pub fn key_count(&self) -> usize {
        self.rows.iter().map(Vec::len).sum()
    }

    /// Assigns a keycode to a slot.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::SlotConflict`] if the slot already holds a
    /// different non-transparent keycode, and
    /// [`GenerateError::CoordOutOfRange`] if the coordinate is outside the grid.
    pub fn set_key(&mut self, coord: Coord, key: Keycode) -> GenerateResult<()> {
        if key.is_transparent() {
            return Ok(());
        }

        let mode = self.mode;
        let slot = self
            .rows
            .get_mut(coord.row)
            .and_then(|row| row.get_mut(coord.col))
            .ok_or(GenerateError::CoordOutOfRange { mode, coord })?;

        if !slot.is_transparent() && *slot != key {
            return Err(GenerateError::SlotConflict {
                mode,
                coord,
                existing: slot.to_string(),
                new: key.to_string(),
            });
        }

        self.max_length = self.max_length.max(key.rendered_len());
        self.has_keys = true;
        *slot = key;
        Ok(())
    }

    /// Renders the grid into a layout template.
    ///
    /// Each `{}` in `template` receives the next keycode, centred to the
    /// widest keycode of the layer. An empty template joins rows with
    /// `",\n"` instead.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::TemplateArity`] if the template slot count
    /// differs from the number of keys.
    pub fn format(&self, template: &str) -> GenerateResult<String> {
        if template.is_empty() {
            return Ok(self
                .rows
                .iter()
                .map(|row| {
                    row.iter()
                        .map(ToString::to_string)
                        .collect::<Vec<_>>()
                        .join(", ")
                })
                .collect::<Vec<_>>()
                .join(",\n"));
        }

        let pieces: Vec<&str> = template.split("{}").collect();
        let expected = pieces.len() - 1;
        let found = self.key_count();
        if expected != found {
            return Err(GenerateError::TemplateArity {
                mode: self.mode,
                expected,
                found,
            });
        }

        let width = self.max_length;
        let mut out = String::with_capacity(template.len() + found * width);
        out.push_str("\n// clang-format off");
        for (piece, kc) in pieces.iter().zip(self.rows.iter().flatten()) {
            out.push_str(piece);
            out.push_str(&format!("{:^width$}", kc.to_string()));
        }
        if let Some(last) = pieces.last() {
            out.push_str(last);
        }
        out.push_str("\n// clang-format on\n");
        Ok(out)
    }
}
