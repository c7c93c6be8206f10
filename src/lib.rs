//! keymapc library
//!
//! Compiles built-in Ergo-L keymap presets into QMK `keymap.c` sources:
//! layer grids, unicode maps, key overrides and custom keycodes.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod data;
pub mod error;
pub mod firmware;
pub mod models;
