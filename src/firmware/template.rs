//! `keymap.c` rendering.
//!
//! Pure formatting over a [`ResolvedKeymap`]: no decision made here changes
//! what a key does.

use crate::error::GenerateResult;
use crate::firmware::autoshift::{AutoshiftCase, AutoshiftPlan};
use crate::firmware::generator::ResolvedKeymap;
use crate::models::Mode;

const INDENT: &str = "    ";

/// Options that do not come from resolution.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions<'a> {
    /// Headers included after the QMK ones
    pub extra_includes: &'a [&'a str],
    /// Emit the auto shift callbacks
    pub autoshift: bool,
}

/// Renders the complete `keymap.c`.
///
/// # Errors
///
/// Fails if a layer does not fit the layout template, or if the auto shift
/// dispatch tables conflict.
pub fn render_keymap(resolved: &ResolvedKeymap, options: RenderOptions<'_>) -> GenerateResult<String> {
    let mut output = String::new();

    output.push_str(&render_includes(options.extra_includes));
    output.push('\n');
    output.push_str(&render_layers_enum(resolved));
    output.push('\n');
    output.push_str(&render_custom_keycodes_enum(resolved));
    output.push('\n');
    output.push_str(&render_aliases(resolved));
    output.push('\n');
    output.push_str(&render_unicode_map(resolved));
    output.push('\n');
    output.push_str(&render_overrides(resolved));
    output.push('\n');
    output.push_str(&render_keymaps(resolved)?);
    output.push('\n');
    output.push_str(&render_process_record(resolved));

    if options.autoshift {
        let plan = AutoshiftPlan::build(resolved)?;
        output.push('\n');
        output.push_str(&render_autoshift(&plan));
    }

    Ok(output)
}

fn render_includes(extra_includes: &[&str]) -> String {
    let mut output = String::from("#include QMK_KEYBOARD_H\n\n#include <stdint.h>\n\n");
    output.push_str("#include \"keycodes.h\"\n#include \"version.h\"\n");
    for include in extra_includes {
        output.push_str(&format!("#include \"{include}\"\n"));
    }
    output
}

/// Renders `items` as the body of a C initializer list, one per line.
fn list_body<I, S>(items: I, depth: usize) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let indent = INDENT.repeat(depth);
    items
        .into_iter()
        .map(|item| format!("{indent}{},\n", item.as_ref()))
        .collect()
}

fn render_layers_enum(resolved: &ResolvedKeymap) -> String {
    format!(
        "enum layers {{\n{}}};\n",
        list_body(resolved.active_modes().iter().map(|m| m.name()), 1)
    )
}

fn render_custom_keycodes_enum(resolved: &ResolvedKeymap) -> String {
    let names = std::iter::once("_FIRST = SAFE_RANGE".to_string())
        .chain(resolved.custom_keycode_names());
    format!("enum custom_keycodes {{\n{}}};\n", list_body(names, 1))
}

fn render_aliases(resolved: &ResolvedKeymap) -> String {
    resolved
        .aliases()
        .iter()
        .map(|(name, value)| format!("#define {name} {value}\n"))
        .collect()
}

fn render_unicode_map(resolved: &ResolvedKeymap) -> String {
    let entries: Vec<_> = resolved.unicode().entries().collect();

    let indices = list_body(entries.iter().map(|e| e.index.as_str()), 1);
    let lines = list_body(
        entries.iter().map(|e| {
            format!(
                "[{}]  = {:#06x} /* {} */",
                e.index,
                e.codepoint,
                e.display()
            )
        }),
        1,
    );

    format!(
        "enum unicode_names {{\n{indices}}};\n\nconst uint32_t PROGMEM unicode_map[] = {{\n{lines}}};\n"
    )
}

fn render_overrides(resolved: &ResolvedKeymap) -> String {
    let mut output = String::new();
    for ovr in resolved.overrides().iter() {
        output.push_str(&format!(
            "const key_override_t {} = ko_make_with_layers(MOD_MASK_SHIFT, {}, {}, (1 << {}));\n",
            ovr.name(),
            ovr.base,
            ovr.shifted,
            ovr.mode
        ));
    }

    let names = resolved
        .overrides()
        .iter()
        .map(|ovr| format!("&{}", ovr.name()))
        .chain(std::iter::once("NULL".to_string()));
    output.push_str(&format!(
        "\nconst key_override_t *key_overrides[] = (const key_override_t *[]){{\n{}}};\n",
        list_body(names, 1)
    ));
    output
}

fn render_keymaps(resolved: &ResolvedKeymap) -> GenerateResult<String> {
    let mut layouts = Vec::new();
    for mode in resolved.active_modes() {
        let grid = resolved.keymaps().format(mode)?;
        layouts.push(format!("[{mode}] = LAYOUT({grid})"));
    }

    Ok(format!(
        "const uint16_t PROGMEM keymaps[][MATRIX_ROWS][MATRIX_COLS] = {{\n{}}};\n",
        list_body(layouts, 1)
    ))
}

fn render_process_record(resolved: &ResolvedKeymap) -> String {
    let mut cases = String::new();
    for (name, mode) in resolved.layer_moves() {
        cases.push_str(&format!(
            "    case {name}:\n        layer_move({mode});\n        return false;\n"
        ));
    }
    for ckc in resolved.custom_keys().iter() {
        cases.push_str(&format!(
            "    case {}:\n        kc = {};\n        skc_idx = {};\n        break;\n",
            ckc.name, ckc.base, ckc.index
        ));
    }

    format!(
        r"bool process_record_user(uint16_t keycode, keyrecord_t *record) {{
    const bool key_pressed = record->event.pressed;
    const bool shifted = (get_mods() & MOD_MASK_SHIFT) != 0;
    uint16_t kc;
    uint8_t skc_idx;
    switch (keycode) {{
    default:
        return true;
{cases}    }}

    if (shifted) {{
        if (key_pressed) {{
            uint8_t temp_mod = get_mods();
            clear_mods();
            uint32_t skc = unicodemap_get_code_point(skc_idx);
            register_unicode(skc);
            set_mods(temp_mod);
            return false;
        }}
    }} else {{
        if (key_pressed) {{
            register_code16(kc);
        }} else {{
            unregister_code16(kc);
        }}
    }}

    return true;
}}
"
    )
}

fn render_guards(guards: &[Mode]) -> String {
    guards
        .iter()
        .map(|mode| format!("    if (IS_LAYER_ON({mode})) return false;\n"))
        .collect()
}

fn render_case(case: &AutoshiftCase) -> String {
    let mut output = format!(
        "        case {}:\n            kc = {};\n            skc_or_skc_idx = {};\n",
        case.trigger, case.keycode, case.shifted
    );
    if case.shifted.is_unicode() {
        output.push_str("            tap_unicode = true;\n");
    }
    output.push_str("            break;\n");
    output
}

fn render_switches(plan: &AutoshiftPlan) -> String {
    let mut output = String::new();
    for (mode, cases) in plan.dispatch() {
        let cases: String = cases.iter().map(render_case).collect();
        output.push_str(&format!(
            "    if (IS_LAYER_ON({mode})) {{\n        switch (keycode) {{\n        default:\n            return false;\n{cases}        }}\n    }}\n"
        ));
    }
    output
}

fn render_autoshift(plan: &AutoshiftPlan) -> String {
    let guards = render_guards(plan.guards());
    let switches = render_switches(plan);

    format!(
        r"static bool _autoshift_press_user(uint16_t keycode, bool shifted, keyrecord_t *record) {{
{guards}
    bool tap_unicode = false;
    uint16_t kc;
    uint32_t skc_or_skc_idx;

{switches}
    if (shifted && tap_unicode) {{
        uint8_t temp_mod = get_mods();
        clear_mods();
        uint32_t skc = unicodemap_get_code_point(skc_or_skc_idx);
        register_unicode(skc);
        set_mods(temp_mod);
        return false;
    }}

    register_code16(!shifted ? kc : skc_or_skc_idx);
    return true;
}}

void autoshift_press_user(uint16_t keycode, bool shifted, keyrecord_t *record) {{
    if (_autoshift_press_user(keycode, shifted, record)) return;
    if (shifted) {{
        add_weak_mods(MOD_BIT(KC_LSFT));
    }}
    // & 0xFF gets the Tap key for Tap Holds, required when using Retro Shift
    register_code16((IS_RETRO(keycode)) ? keycode & 0xFF : keycode);
}}

static bool _autoshift_release_user(uint16_t keycode, bool shifted, keyrecord_t *record) {{
{guards}
    bool tap_unicode = false;
    uint16_t kc;
    uint32_t skc_or_skc_idx;

{switches}
    if (shifted && tap_unicode) {{
        return false;
    }}

    unregister_code16(!shifted ? kc : skc_or_skc_idx);
    return true;
}}

void autoshift_release_user(uint16_t keycode, bool shifted, keyrecord_t *record) {{
    if (_autoshift_release_user(keycode, shifted, record)) return;
    unregister_code16((IS_RETRO(keycode)) ? keycode & 0xFF : keycode);
}}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::generator::FirmwareGenerator;
    use crate::models::{KeyRow, KeyTable, Keymaps, Sym, TRNS};

    const TEMPLATE: &str = "\n{}, {}, {}\n";

    fn resolved() -> ResolvedKeymap {
        let rows = [
            KeyRow {
                name: "EKC_1",
                base: "KC_1",
                shifted: Some(Sym::Uc(0x20AC)),
                dk_base: TRNS,
                dk_shifted: TRNS,
                sym_base: Sym::Uc(0x2081),
                sym_shifted: Sym::Uc(0x00B9),
            },
            KeyRow {
                name: "EKC_MNS",
                base: "KC_MINS",
                shifted: Some(Sym::Kc("KC_QUES")),
                dk_base: TRNS,
                dk_shifted: TRNS,
                sym_base: TRNS,
                sym_shifted: TRNS,
            },
        ];
        let keymaps = Keymaps::from_preset(
            TEMPLATE,
            &[
                (Mode::Base, "EKC_1, EKC_MNS, KC_ESC"),
                (Mode::Fn, "KC_F1, _______, _______"),
            ],
        )
        .unwrap();
        FirmwareGenerator::new(KeyTable::from_rows(&rows), keymaps)
            .unwrap()
            .resolve()
            .unwrap()
    }

    #[test]
    fn test_sections_in_order() {
        let output = render_keymap(&resolved(), RenderOptions::default()).unwrap();

        let positions: Vec<usize> = [
            "#include QMK_KEYBOARD_H",
            "enum layers {",
            "enum custom_keycodes {",
            "#define Sym_EKC_1",
            "enum unicode_names {",
            "const uint32_t PROGMEM unicode_map[]",
            "const key_override_t Base_EKC_MNS",
            "const uint16_t PROGMEM keymaps",
            "bool process_record_user",
        ]
        .iter()
        .map(|marker| output.find(marker).unwrap_or_else(|| panic!("missing {marker}")))
        .collect();

        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(!output.contains("autoshift_press_user"));
    }

    #[test]
    fn test_enums() {
        let output = render_keymap(&resolved(), RenderOptions::default()).unwrap();

        assert!(output.contains("enum layers {\n    Base,\n    Sym,\n    Fn,\n};"));
        assert!(output.contains(
            "    _FIRST = SAFE_RANGE,\n    CKC_LMOVE_Base,\n    CKC_LMOVE_Sym,\n    CKC_LMOVE_Fn,\n    Base_EKC_1,\n"
        ));
    }

    #[test]
    fn test_unicode_map_lines() {
        let output = render_keymap(&resolved(), RenderOptions::default()).unwrap();

        assert!(output.contains("    [EURO_SIGN]  = 0x20ac /* € */,\n"));
        assert!(output.contains("#define Sym_EKC_1 UP(SUBSCRIPT_ONE, SUPERSCRIPT_ONE)\n"));
    }

    #[test]
    fn test_overrides_and_dispatch() {
        let output = render_keymap(&resolved(), RenderOptions::default()).unwrap();

        assert!(output.contains(
            "const key_override_t Base_EKC_MNS = ko_make_with_layers(MOD_MASK_SHIFT, KC_MINS, KC_QUES, (1 << Base));"
        ));
        assert!(output.contains("    &Base_EKC_MNS,\n    NULL,\n"));
        assert!(output.contains("    case CKC_LMOVE_Fn:\n        layer_move(Fn);\n"));
        assert!(output.contains(
            "    case Base_EKC_1:\n        kc = KC_1;\n        skc_idx = EURO_SIGN;\n        break;\n"
        ));
    }

    #[test]
    fn test_keymaps_use_layout_macro() {
        let output = render_keymap(&resolved(), RenderOptions::default()).unwrap();

        assert!(output.contains("[Base] = LAYOUT(\n// clang-format off\n"));
        assert!(output.contains("[Fn] = LAYOUT("));
        assert!(!output.contains("[DK] = LAYOUT("));
    }

    #[test]
    fn test_extra_includes() {
        let options = RenderOptions {
            extra_includes: &["keymap_french.h", "sendstring_french.h"],
            autoshift: false,
        };
        let output = render_keymap(&resolved(), options).unwrap();
        assert!(output.contains(
            "#include \"version.h\"\n#include \"keymap_french.h\"\n#include \"sendstring_french.h\"\n"
        ));
    }

    #[test]
    fn test_autoshift_callbacks() {
        let options = RenderOptions {
            extra_includes: &[],
            autoshift: true,
        };
        let output = render_keymap(&resolved(), options).unwrap();

        assert!(output.contains("void autoshift_press_user("));
        assert!(output.contains("void autoshift_release_user("));
        // Sym and Fn have no records.
        assert_eq!(output.matches("if (IS_LAYER_ON(Sym)) return false;").count(), 2);
        assert_eq!(output.matches("if (IS_LAYER_ON(Fn)) return false;").count(), 2);
        assert!(output.contains(
            "        case KC_MINS:\n            kc = KC_MINS;\n            skc_or_skc_idx = KC_QUES;\n            break;\n"
        ));
        assert!(output.contains(
            "        case Base_EKC_1:\n            kc = KC_1;\n            skc_or_skc_idx = EURO_SIGN;\n            tap_unicode = true;\n"
        ));
    }
}
