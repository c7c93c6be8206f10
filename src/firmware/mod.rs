//! Keymap resolution and firmware source generation.
//!
//! [`generator`] resolves every (key, mode) pair into the keycode a layer
//! must hold, [`template`] renders the result as a QMK `keymap.c`, and
//! [`summary`] describes it as JSON.

pub mod autoshift;
pub mod classify;
pub mod generator;
pub mod leds;
pub mod summary;
pub mod tables;
pub mod template;
pub mod unicode;

// Re-export firmware types
pub use autoshift::AutoshiftPlan;
pub use classify::classify;
pub use generator::{FirmwareGenerator, ResolvedKeymap};
pub use summary::KeymapSummary;
pub use tables::{AliasTable, CustomKey, Override};
pub use template::{render_keymap, RenderOptions};
pub use unicode::UnicodeTable;

use crate::data::{Host, Preset};
use crate::error::GenerateResult;

/// Resolves a built-in preset for a host and renders its `keymap.c`.
///
/// # Errors
///
/// Returns the first resolution or rendering error.
pub fn generate_keymap_c(host: Host, preset: Preset, autoshift: bool) -> GenerateResult<String> {
    let resolved = FirmwareGenerator::for_preset(host, preset)?.resolve()?;
    render_keymap(
        &resolved,
        RenderOptions {
            extra_includes: host.extra_includes(),
            autoshift,
        },
    )
}
