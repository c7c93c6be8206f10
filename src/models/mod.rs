//! Data models for keycodes, key tables, layers and modes.
//!
//! This module contains the core data structures used throughout the compiler.
//! Models are independent of the resolution engine and of the output format.

pub mod key;
pub mod keycode;
pub mod keymaps;
pub mod layer;
pub mod mode;

// Re-export all model types
pub use key::{Key, KeyRow, KeyTable, Sym, TRNS};
pub use keycode::{KeyFunction, Keycode, KC_TRNS, TRANSPARENT};
pub use keymaps::{parse_grid, Keymaps};
pub use layer::{Coord, Layer};
pub use mode::{Mode, ShiftMode};
