//! Shift behavior classification.

use crate::models::{Keycode, ShiftMode};

/// Decides how a (keycode, shifted keycode) pair must be emitted.
///
/// Total over every input: the final `CustomKey` branch catches every pair
/// the earlier rules do not claim. A missing shifted keycode behaves like the
/// base keycode.
///
/// | base              | shifted                    | result       |
/// |-------------------|----------------------------|--------------|
/// | basic             | absent / identical         | `Default`    |
/// | wrapped `F(x)`    | raw `x`                    | `Default`    |
/// | basic             | other basic or transparent | `Override`   |
/// | unicode           | unicode                    | `UnicodeMap` |
/// | unicode           | transparent                | `Default`    |
/// | anything else     |                            | `CustomKey`  |
#[must_use]
pub fn classify(kc: &Keycode, skc: Option<&Keycode>) -> ShiftMode {
    let skc = skc.unwrap_or(kc);

    if kc.is_basic() {
        if kc == skc {
            return ShiftMode::Default;
        }
        if kc.has_function() && kc.raw() == skc.raw() {
            return ShiftMode::Default;
        }
        if skc.is_basic() {
            return ShiftMode::Override;
        }
    } else if kc.is_unicode() {
        if skc.is_unicode() {
            return ShiftMode::UnicodeMap;
        }
        if skc.is_transparent() {
            return ShiftMode::Default;
        }
    }

    ShiftMode::CustomKey
}
