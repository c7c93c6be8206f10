//! Keycode values as they appear in key tables and layer grids.
//!
//! Keycodes are parsed once when a table or grid is loaded. Function
//! wrappers such as `LT(Fn|KC_ESC)` or `LSFT_T(KC_ESC)` become an explicit
//! [`Keycode::Wrapped`] value so nothing downstream has to look at the text
//! again.

use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

/// QMK transparent keycode alias used in layer grids.
pub const TRANSPARENT: &str = "_______";

/// Long form of the transparent keycode.
pub const KC_TRNS: &str = "KC_TRNS";

/// Mod-tap functions taking a single keycode argument.
///
/// See <https://docs.qmk.fm/mod_tap>.
pub const MOD_TAP_FUNCTIONS: &[&str] = &[
    "ALGR_T", "ALL_T", "ALT_T", "CMD_T", "CTL_T", "C_S_T", "GUI_T", "HYPR_T", "LAG_T", "LALT_T",
    "LCAG_T", "LCA_T", "LCMD_T", "LCTL_T", "LOPT_T", "LSA_T", "LSFT_T", "LSG_T", "LWIN_T", "MEH_T",
    "OPT_T", "RALT_T", "RCAG_T", "RCMD_T", "RGUI_T", "RSA_T", "RSG_T", "RWIN_T", "SAGR_T", "SCMD_T",
    "SFT_T", "SGUI_T", "SWIN_T", "WIN_T",
];

// Grid slots are comma separated, so layer-tap uses `|` between its arguments.
static LAYER_TAP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^LT\((?P<layer>\w+)\|\s*(?P<keycode>\w+)\)$").expect("valid layer-tap pattern")
});

static UNARY_FUNCTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<function>\w+)\((?P<keycode>\w+)\)$").expect("valid function pattern")
});

/// A behavior modifier wrapping a keycode, e.g. "hold for layer, tap for key".
///
/// `args` are the leading arguments; the wrapped keycode is always rendered
/// last (`LT(Fn, KC_ESC)` has `args == ["Fn"]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyFunction {
    /// Function name (`LT`, `LSFT_T`, ...)
    pub name: String,
    /// Arguments preceding the wrapped keycode
    pub args: Vec<String>,
}

impl KeyFunction {
    /// Layer-tap: momentary `layer` while held, `kc` when tapped.
    pub fn layer_tap(layer: impl Into<String>) -> Self {
        Self {
            name: "LT".to_string(),
            args: vec![layer.into()],
        }
    }

    /// Unary mod-tap such as `LSFT_T`.
    pub fn mod_tap(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            args: Vec::new(),
        }
    }
}

/// One keycode slot value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Keycode {
    /// Symbolic QMK keycode or macro expression (`KC_A`, `MO(Sym)`, `UM(EURO_SIGN)`)
    Basic(String),
    /// Unicode code point to be emitted through the unicode map
    Unicode(u32),
    /// Function wrapping a raw keycode. The inner value is never itself wrapped.
    Wrapped(KeyFunction, Box<Keycode>),
}

impl Keycode {
    /// Parses a keycode as written in a layer grid or key table.
    ///
    /// Recognises layer-tap (`LT(layer|kc)`) and the known unary mod-tap
    /// functions. Anything else, including other function-like macros such as
    /// `MO(Sym)` or `LGUI(KC_P)`, stays a basic keycode.
    pub fn parse(text: &str) -> Self {
        let text = text.trim();

        if let Some(caps) = LAYER_TAP_RE.captures(text) {
            return Self::Wrapped(
                KeyFunction::layer_tap(&caps["layer"]),
                Box::new(Self::Basic(caps["keycode"].to_string())),
            );
        }

        if let Some(caps) = UNARY_FUNCTION_RE.captures(text) {
            let function = &caps["function"];
            if MOD_TAP_FUNCTIONS.contains(&function) {
                return Self::Wrapped(
                    KeyFunction::mod_tap(function),
                    Box::new(Self::Basic(caps["keycode"].to_string())),
                );
            }
        }

        Self::Basic(text.to_string())
    }

    /// The transparent keycode.
    #[must_use]
    pub fn transparent() -> Self {
        Self::Basic(TRANSPARENT.to_string())
    }

    /// Innermost keycode, with any function wrapper removed.
    #[must_use]
    pub fn raw(&self) -> &Self {
        match self {
            Self::Wrapped(_, inner) => inner.raw(),
            other => other,
        }
    }

    /// Returns true if this keycode carries a function wrapper.
    #[must_use]
    pub const fn has_function(&self) -> bool {
        matches!(self, Self::Wrapped(..))
    }

    /// Returns true if the raw keycode is symbolic (transparent included).
    #[must_use]
    pub fn is_basic(&self) -> bool {
        matches!(self.raw(), Self::Basic(_))
    }

    /// Returns true if the raw keycode is a unicode code point.
    #[must_use]
    pub fn is_unicode(&self) -> bool {
        matches!(self.raw(), Self::Unicode(_))
    }

    /// Checks if the raw keycode is transparent (falls through to lower layers).
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        matches!(self.raw(), Self::Basic(name) if name == TRANSPARENT || name == KC_TRNS)
    }

    /// Code point of the raw keycode, if it is unicode.
    #[must_use]
    pub fn codepoint(&self) -> Option<u32> {
        match self.raw() {
            Self::Unicode(cp) => Some(*cp),
            _ => None,
        }
    }

    /// Drops the function wrapper, keeping the raw keycode.
    #[must_use]
    pub fn without_function(&self) -> Self {
        self.raw().clone()
    }

    /// Substitutes `raw` for this keycode's raw value, keeping the wrapper.
    ///
    /// Returns `None` when both sides carry a function, since functions
    /// never nest.
    #[must_use]
    pub fn with_raw(&self, raw: Self) -> Option<Self> {
        match self {
            Self::Wrapped(function, _) => {
                if raw.has_function() {
                    None
                } else {
                    Some(Self::Wrapped(function.clone(), Box::new(raw)))
                }
            }
            _ => Some(raw),
        }
    }

    /// Width of the rendered keycode, used to align grid columns.
    #[must_use]
    pub fn rendered_len(&self) -> usize {
        self.to_string().len()
    }
}

impl fmt::Display for Keycode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic(name) => f.write_str(name),
            Self::Unicode(cp) => write!(f, "{cp:#06x}"),
            Self::Wrapped(function, inner) => {
                write!(f, "{}(", function.name)?;
                for arg in &function.args {
                    write!(f, "{arg}, ")?;
                }
                write!(f, "{inner})")
            }
        }
    }
}

impl From<&str> for Keycode {
    fn from(text: &str) -> Self {
        Self::parse(text)
    }
}

impl From<u32> for Keycode {
    fn from(cp: u32) -> Self {
        Self::Unicode(cp)
    }
}
