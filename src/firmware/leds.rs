//! `LED_LAYOUT` macros for RGB matrix keymaps.
//!
//! The LED indices of the board are listed in physical order. The generated
//! `LED_LAYOUT(...)` macro takes one color per key in that physical order and
//! expands to the `rgb_matrix` index order, so per-layer color tables can be
//! written like the keymap grids.

use crate::error::{GenerateError, GenerateResult};

/// Parses a whitespace separated LED index layout.
///
/// # Errors
///
/// Returns [`GenerateError::InvalidLedLayout`] if a token is not a number,
/// an index repeats, or the indices do not cover `0..n`.
pub fn parse_led_layout(layout: &str) -> GenerateResult<Vec<usize>> {
    let indices = layout
        .split_whitespace()
        .map(|token| {
            token.parse::<usize>().map_err(|_| GenerateError::InvalidLedLayout {
                reason: format!("'{token}' is not an LED index"),
            })
        })
        .collect::<GenerateResult<Vec<_>>>()?;

    let mut seen = vec![false; indices.len()];
    for &index in &indices {
        match seen.get_mut(index) {
            Some(slot) if !*slot => *slot = true,
            Some(_) => {
                return Err(GenerateError::InvalidLedLayout {
                    reason: format!("LED {index} appears twice"),
                })
            }
            None => {
                return Err(GenerateError::InvalidLedLayout {
                    reason: format!("LED {index} is out of range for {} keys", indices.len()),
                })
            }
        }
    }

    Ok(indices)
}

/// Renders the `LED_LAYOUT` and `LED_LAYOUT_ALL` macros.
///
/// # Errors
///
/// Propagates [`parse_led_layout`] errors.
pub fn render_led_macros(layout: &str) -> GenerateResult<String> {
    let indices = parse_led_layout(layout)?;

    let params = indices
        .iter()
        .map(|i| format!("l{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let ordered = (0..indices.len())
        .map(|i| format!("l{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    let colors = vec!["(color)"; indices.len()].join(",");

    Ok(format!(
        "# define LED_LAYOUT({params})\\\n    {ordered}\n\n# define LED_LAYOUT_ALL(color) \\\n    LED_LAYOUT({colors})\n"
    ))
}
