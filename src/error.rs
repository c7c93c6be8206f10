//! Errors raised while resolving and emitting a keymap.
//!
//! Every variant is fatal: inputs are static tables, so an error is a
//! data or configuration bug and generation stops without partial output.

use crate::models::{Coord, Mode};
use thiserror::Error;

/// Result alias for keymap generation.
pub type GenerateResult<T> = Result<T, GenerateError>;

/// Keymap generation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// A non-transparent slot was assigned a different value
    #[error("key at {coord} on layer {mode} is not transparent: {existing}, cannot set {new}")]
    SlotConflict {
        /// Layer being written
        mode: Mode,
        /// Offending position
        coord: Coord,
        /// Value already in the slot
        existing: String,
        /// Value that was rejected
        new: String,
    },

    /// A synthesized alias was registered twice with different values
    #[error("conflict for alias {name}: we have {existing} and {new}")]
    AliasConflict {
        /// Alias name
        name: String,
        /// Registered value
        existing: String,
        /// Rejected value
        new: String,
    },

    /// An override or custom key was synthesized twice with different values
    #[error("conflicting definitions for {name}: {existing} and {new}")]
    RecordConflict {
        /// Synthesized name
        name: String,
        /// Registered definition
        existing: String,
        /// Rejected definition
        new: String,
    },

    /// A custom key's shifted side is not a unicode keycode
    #[error("custom key {name} must be mapped to a unicode keycode, got {shifted}")]
    UnsupportedCustomKey {
        /// Synthesized custom key name
        name: String,
        /// Offending shifted keycode
        shifted: String,
    },

    /// A custom key would be built from a function-wrapped keycode
    #[error(
        "custom keycode {name} cannot be created with keycode using special function (LT/mod-tap): {keycode}"
    )]
    FunctionMisuse {
        /// Synthesized custom key name
        name: String,
        /// Wrapped keycode
        keycode: String,
    },

    /// A unicode keycode was referenced before the unicode pre-pass indexed it
    #[error("internal error: no unicode index for {keycode}")]
    MissingUnicodeIndex {
        /// Keycode without an index
        keycode: String,
    },

    /// A code point has no Unicode character name to derive an index from
    #[error("code point U+{codepoint:04X} has no unicode name")]
    UnknownUnicodeName {
        /// Offending code point
        codepoint: u32,
    },

    /// Two code points normalise to the same index name
    #[error("unicode index {index} is used by both U+{existing:04X} and U+{new:04X}")]
    UnicodeIndexConflict {
        /// Index name
        index: String,
        /// Code point already indexed
        existing: u32,
        /// Code point that collided
        new: u32,
    },

    /// A key table entry has a non-basic base layer keycode
    #[error("base keycode of {key} must be basic, got {keycode}")]
    NonBasicBaseKeycode {
        /// Logical key name
        key: String,
        /// Offending keycode
        keycode: String,
    },

    /// A layer grid does not match the physical layout
    #[error("layer {mode} has row lengths {found:?}, the physical layout has {expected:?}")]
    LayerShapeMismatch {
        /// Layer being loaded
        mode: Mode,
        /// Row lengths of the physical layout
        expected: Vec<usize>,
        /// Row lengths of the grid
        found: Vec<usize>,
    },

    /// A preset defines the same mode twice
    #[error("there is already a layer for mode {mode}")]
    DuplicateLayer {
        /// Duplicated mode
        mode: Mode,
    },

    /// A preset without a Base grid
    #[error("keymap preset has no Base layer")]
    MissingBaseLayer,

    /// A function-wrapped position received a function-wrapped keycode
    #[error("key at {coord} on layer {mode} already wraps {outer} and cannot wrap {inner}")]
    NestedFunction {
        /// Layer being resolved
        mode: Mode,
        /// Offending position
        coord: Coord,
        /// Position keycode
        outer: String,
        /// Substituted keycode
        inner: String,
    },

    /// A coordinate outside the layer grid
    #[error("coordinate {coord} is outside layer {mode}")]
    CoordOutOfRange {
        /// Layer being written
        mode: Mode,
        /// Offending position
        coord: Coord,
    },

    /// Two autoshift entries share a base keycode with different results
    #[error("autoshift conflict on layer {mode} for {keycode}: {existing} and {new}")]
    AutoshiftConflict {
        /// Layer of both entries
        mode: Mode,
        /// Shared base keycode
        keycode: String,
        /// Shifted value already dispatched
        existing: String,
        /// Rejected shifted value
        new: String,
    },

    /// The LED index layout is not a permutation of `0..n`
    #[error("invalid LED layout: {reason}")]
    InvalidLedLayout {
        /// What is wrong with the layout
        reason: String,
    },

    /// The layout template and a grid disagree on the number of keys
    #[error("layout template has {expected} key slots, layer {mode} has {found} keys")]
    TemplateArity {
        /// Layer being rendered
        mode: Mode,
        /// Number of `{}` slots in the template
        expected: usize,
        /// Number of keys in the layer
        found: usize,
    },
}
