//! Built-in keymap presets.
//!
//! A preset is a list of textual layer grids. The Base grid names, at each
//! physical position, a logical key from the host key table (`EKC_*`), a
//! literal keycode, or the transparent marker. Grids for other modes are
//! copied into those layers before key table resolution.

use crate::models::Mode;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Named keymap preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum)]
pub enum Preset {
    /// Ergo-L with a function layer
    #[default]
    #[serde(rename = "std")]
    #[value(name = "std")]
    Std,
    /// Ergo-L with QWERTY, media and function layers
    #[serde(rename = "daedric")]
    #[value(name = "daedric")]
    Daedric,
    /// 34-key variant with home row mods and a navigation layer
    #[serde(rename = "daedric_34")]
    #[value(name = "daedric_34")]
    Daedric34,
}

impl Preset {
    /// Every preset.
    pub const ALL: [Self; 3] = [Self::Std, Self::Daedric, Self::Daedric34];

    /// Name used on the command line and in config files.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Std => "std",
            Self::Daedric => "daedric",
            Self::Daedric34 => "daedric_34",
        }
    }

    /// Layer grids of this preset, in declaration order.
    #[must_use]
    pub const fn grids(self) -> &'static [(Mode, &'static str)] {
        match self {
            Self::Std => STD,
            Self::Daedric => DAEDRIC,
            Self::Daedric34 => DAEDRIC_34,
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

const STD: &[(Mode, &str)] = &[
    (
        Mode::Base,
        "
        KC_ESC ,  EKC_1 ,  EKC_2 ,  EKC_3 ,  EKC_4 ,  EKC_5 , LT(Fn|KC_ESC),                               LT(Fn|KC_ESC),  EKC_6 ,  EKC_7,   EKC_8 ,  EKC_9 ,  EKC_0 , KC_INS,
        KC_TAB ,  EKC_Q ,  EKC_C ,  EKC_O ,  EKC_P ,  EKC_W , KC_DEL ,                                     KC_BSPC,  EKC_J ,  EKC_M ,  EKC_D , EKC_DK ,  EKC_Y , _______,
        KC_GRV ,  EKC_A ,  EKC_S ,  EKC_E ,  EKC_N ,  EKC_F , _______,                                     _______,  EKC_L ,  EKC_R ,  EKC_T ,  EKC_I , _______, _______,
        KC_LSFT,  EKC_Z ,  EKC_X , EKC_MNS,  EKC_V ,  EKC_B ,                                                             EKC_DOT,  EKC_H ,  EKC_G ,EKC_COMM,  EKC_K , KC_RSFT,
        KC_LCTL, _______, KC_LEFT,KC_RIGHT, KC_LGUI,          _______,                            _______,                          KC_UP , KC_DOWN, _______, _______, _______,
                                            MO(Sym), _______, _______,                            KC_LALT, KC_ENTER, EKC_SPC
        ",
    ),
    (
        Mode::Fn,
        "
        KC_F1 ,  KC_F2 ,  KC_F3 ,  KC_F4 ,  KC_F5 ,  KC_F6 ,  _______,           _______,  KC_F7 ,  KC_F8 ,  KC_F9 ,  KC_F10, KC_F11 , KC_F12 ,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______, _______,                    _______, _______, _______, _______, _______, _______,
        _______, _______, UC_PREV, UC_NEXT, QK_BOOT,         _______,     _______,       _______, _______, _______, _______, _______,
                                           _______, _______, _______,     _______, _______, _______
        ",
    ),
];

const DAEDRIC: &[(Mode, &str)] = &[
    (
        Mode::Base,
        "
        KC_ESC ,  EKC_1 ,  EKC_2 ,  EKC_3 ,  EKC_4 ,  EKC_5 , LT(Fn|KC_ESC),                               LT(Fn|KC_ESC),  EKC_6 ,  EKC_7,   EKC_8 ,  EKC_9 ,  EKC_0 , KC_INS,
        KC_TAB ,  EKC_Q ,  EKC_C ,  EKC_O ,  EKC_P ,  EKC_W , KC_DEL ,                                     KC_BSPC,  EKC_J ,  EKC_M ,  EKC_D , EKC_DK ,  EKC_Y , _______,
        KC_GRV ,  EKC_A ,  EKC_S ,  EKC_E ,  EKC_N ,  EKC_F , _______,                                     _______,  EKC_L ,  EKC_R ,  EKC_T ,  EKC_I ,  LT(Media|EKC_U), _______,
        KC_LSFT,  EKC_Z ,  EKC_X , EKC_MNS,  EKC_V ,  EKC_B ,                                                             EKC_DOT,  EKC_H ,  EKC_G ,EKC_COMM,  EKC_K , KC_RSFT,
        KC_LCTL, _______, KC_LEFT,KC_RIGHT, KC_LGUI,          LGUI(KC_P),            LGUI(LSFT(KC_SPACE)),                          KC_UP , KC_DOWN, _______, _______, CKC_LMOVE_Qwerty,
                                            MO(Sym), _______, LGUI(KC_R),            KC_LALT, KC_ENTER, EKC_SPC
        ",
    ),
    (
        Mode::Qwerty,
        "
        KC_ESC ,   KC_1 ,   KC_2 ,   KC_3 ,   KC_4 ,   KC_5 ,   LT(Fn|KC_ESC),     LT(Fn|KC_ESC),  KC_6 ,  KC_7 ,  KC_8 ,  KC_9, KC_0 , KC_INS,
        KC_TAB ,   KC_Q,    KC_W,    KC_E,    KC_R,    KC_T,    KC_DEL,           KC_BSPC,         KC_Y,   KC_U,   KC_I,   KC_O, KC_P, KC_BSLS,
        KC_GRV,    KC_A,    KC_S,    KC_D,    KC_F,    KC_G,    KC_EQL,           KC_MINS,         KC_H,   KC_J,   KC_K,   KC_L, LT(Media|KC_SCLN), KC_QUOT,
        KC_LSFT,   KC_Z,    KC_X,    KC_C,    KC_V,    KC_B,                                       KC_N,   KC_M,   KC_COMM,KC_DOT, KC_SLSH, KC_RSFT,
        KC_LCTL, _______,   KC_LEFT, KC_RIGHT, KC_LGUI,         LGUI(KC_P),     LGUI(LSFT(KC_SPC)),KC_UP,  KC_DOWN, KC_LBRC, KC_RBRC, CKC_LMOVE_Base,
                                               KC_SPC , KC_LCTL,LGUI(KC_R),     KC_LALT, KC_ENTER, KC_SPC
        ",
    ),
    (
        Mode::Media,
        "
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, KC_PWR, QK_BOOT,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, KC_MPRV, KC_MNXT, _______, KC_MPLY,
        _______, _______, _______, _______, _______, _______,                             _______, _______, _______, _______, _______, _______,
        _______, _______, UC_PREV, UC_NEXT, _______,          _______,           _______,          KC_PGUP, KC_PGDN , _______, _______, _______,
                                            _______, _______, _______,           _______, _______, _______
        ",
    ),
    (
        Mode::Fn,
        "
        KC_F1 ,  KC_F2 ,  KC_F3 ,  KC_F4 ,  KC_F5 ,  KC_F6 ,  _______,           _______,  KC_F7 ,  KC_F8 ,  KC_F9 ,  KC_F10, KC_F11 , KC_F12 ,
        _______, _______, _______, _______, _______, _______, RGB_VAI,           _______, _______, _______, _______, _______, _______, _______,
        _______, AC_TOGG, AS_TOGG, _______, _______, _______, RGB_VAD,           _______, _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______, _______,                             _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______,         _______,            _______,          _______, _______, _______, _______, _______,
                                           _______, _______, _______,            _______, _______, _______
        ",
    ),
];

const DAEDRIC_34: &[(Mode, &str)] = &[
    (
        Mode::Base,
        "
        _______, _______, _______, _______, _______, _______, _______,            _______, _______, _______, _______, _______, _______, _______,
        _______,  EKC_Q ,  EKC_C ,  EKC_O ,  EKC_P ,  EKC_W , _______,            _______,  EKC_J ,  EKC_M ,  EKC_D , EKC_DK ,  EKC_Y , _______,
        _______,  EKC_A ,  EKC_S ,  EKC_E ,  EKC_N ,  EKC_F , _______,            _______,  EKC_L ,  EKC_R ,  EKC_T ,  EKC_I ,  LT(Media|EKC_U), _______,
        _______,  EKC_Z ,  EKC_X , EKC_MNS,  EKC_V ,  EKC_B ,                              EKC_DOT,  EKC_H ,  EKC_G ,EKC_COMM,  EKC_K , _______,
        _______, _______, _______, _______, KC_LGUI,          _______,            _______,          _______, _______, _______, _______, CKC_LMOVE_Qwerty,
                              LT(Nav|KC_BSPC),LSFT_T(KC_ESC), _______,                    _______, LT(Nav|KC_ENTER), LT(Sym|KC_SPC)
        ",
    ),
    (
        Mode::Qwerty,
        "
        _______, _______, _______, _______, _______, _______, _______,                    _______, _______, _______, _______, _______, _______, _______,
        _______,   KC_Q,    KC_W,    KC_E,    KC_R,    KC_T,  _______,                    _______, KC_Y,   KC_U,   KC_I,   KC_O, KC_P, _______,
        _______,   KC_A,LALT_T(KC_S),LCTL_T(KC_D),LSFT_T(KC_F),LGUI_T(KC_G), _______,     _______, KC_H,LSFT_T(KC_J),LCTL_T(KC_K),LALT_T(KC_L), LT(Media|KC_SCLN), _______,
        _______,   KC_Z,    KC_X,    KC_C,    KC_V,    KC_B,                                       KC_N,   KC_M,   KC_COMM,KC_DOT, KC_SLSH, _______,
        _______, _______,  _______, _______, KC_LGUI,         _______,                    _______,          _______, _______, _______, _______, CKC_LMOVE_Base,
                              LT(Nav|KC_BSPC),LSFT_T(KC_ESC), _______,                    _______, LT(Nav|KC_ENTER) , LT(SymQwerty|KC_SPC)
        ",
    ),
    (
        Mode::SymQwerty,
        "
        _______, _______, _______, _______, _______, _______, _______,            _______, _______, _______, _______, _______, _______, _______,
        _______, KC_CIRC,  KC_LT ,  KC_GT , KC_DLR , KC_PERC, _______,            _______,  KC_AT , KC_AMPR, KC_ASTR, KC_QUOT, KC_GRV , _______,
        _______, KC_LCBR, KC_LPRN, KC_RPRN, KC_RCBR, KC_EQL , _______,            _______, KC_BSLS, KC_PLUS, KC_MINS, KC_SLSH, KC_DQT , _______,
        _______, KC_TILD, KC_LBRC, KC_RBRC, KC_UNDS, KC_HASH,                              KC_PIPE, KC_EXLM, KC_SCLN, KC_COLN, KC_QUES, _______,
        _______, _______, _______, _______, _______,          _______,            _______,          _______, _______, _______, _______, _______,
                                            _______, _______, _______,            _______, _______, _______
        ",
    ),
    (
        Mode::Nav,
        "
        _______, _______, _______, _______, _______, _______, _______,            _______, _______, _______, _______, _______, _______, _______,
        _______, KC_TAB , KC_HOME,  KC_UP ,  KC_END, KC_PGUP,  _______,           _______, KC_PPLS,   KC_7 ,   KC_8 ,   KC_9 , _______, _______,
        _______, KC_LCAP, KC_LEFT, KC_DOWN, KC_RGHT, KC_PGDN,  _______,           _______, KC_PMNS,   KC_4 ,   KC_5 ,   KC_6 , _______, _______,
        _______, _______, _______, _______, _______, KC_DEL ,                                KC_0 ,   KC_1 ,   KC_2,    KC_3 , _______, _______,
        _______, _______,  _______, _______, KC_LGUI,         _______,            _______,          _______, _______, _______, _______, _______,
                                            _______, _______, _______,            _______, _______, _______
        ",
    ),
    (
        Mode::Media,
        "
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, _______, _______, KC_PWR , QK_BOOT,
        _______, _______, _______, _______, _______, _______, _______,           _______, _______, _______, KC_MPRV, KC_MNXT, _______, KC_MPLY,
        _______, _______, UC_PREV, UC_NEXT, _______, _______,                             _______, _______, _______, _______, _______, _______,
        _______, _______, _______, _______, _______,          _______,           _______,          _______, _______, _______, _______, _______,
                                            _______, _______, _______,           _______, _______, _______
        ",
    ),
    (
        Mode::Fn,
        "
        _______, _______, _______, _______, _______, _______, _______,            _______, _______, _______, _______, _______, _______, _______,
        _______, AC_TOGG, _______, _______, _______, _______, _______,            _______, _______, _______, _______, _______, _______, _______,
        _______,  KC_F1 ,  KC_F2 ,  KC_F3 ,  KC_F4 ,  KC_F5 , _______,            _______,  KC_F6 ,  KC_F7 ,  KC_F8 ,  KC_F9 ,  KC_F10, _______,
        _______, _______, _______, _______, _______, _______,                               KC_F11,  KC_F12, _______, _______, _______, _______,
        _______, _______, _______, _______, _______,          _______,            _______,          _______, _______, _______, _______, _______,
                                            _______, _______, _______,            _______, _______, _______
        ",
    ),
];
