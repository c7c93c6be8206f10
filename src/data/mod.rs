//! Built-in input data: host key tables, keymap presets and the physical layout.

pub mod locales;
pub mod moonlander;
pub mod presets;

pub use locales::Host;
pub use presets::Preset;
