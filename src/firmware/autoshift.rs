//! Per-layer dispatch tables for QMK's auto shift feature.
//!
//! Auto shift sends the shifted keycode itself, bypassing key overrides and
//! `process_record_user`. Every override and custom keycode therefore gets a
//! `case` in a per-layer switch telling the auto shift callbacks what to send.

use crate::error::{GenerateError, GenerateResult};
use crate::firmware::generator::ResolvedKeymap;
use crate::models::{Keycode, Mode};
use indexmap::IndexMap;
use std::fmt;
use tracing::debug;

/// What a held key sends.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShiftedOutput {
    /// A regular keycode
    Keycode(Keycode),
    /// A unicode map index, sent with `register_unicode`
    Unicode(String),
}

impl ShiftedOutput {
    /// Returns true if the output needs unicode emission.
    #[must_use]
    pub const fn is_unicode(&self) -> bool {
        matches!(self, Self::Unicode(_))
    }
}

impl fmt::Display for ShiftedOutput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Keycode(kc) => write!(f, "{kc}"),
            Self::Unicode(index) => f.write_str(index),
        }
    }
}

/// One `case` of a layer's dispatch switch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutoshiftCase {
    /// Keycode the switch matches on
    pub trigger: Keycode,
    /// Keycode sent on tap
    pub keycode: Keycode,
    /// Value sent on hold
    pub shifted: ShiftedOutput,
}

/// Dispatch switches for layers with records, and pass-through guards for
/// the other active layers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutoshiftPlan {
    dispatch: IndexMap<Mode, Vec<AutoshiftCase>>,
    guards: Vec<Mode>,
}

impl AutoshiftPlan {
    /// Groups the overrides and custom keycodes of a resolved keymap by layer.
    ///
    /// # Errors
    ///
    /// Returns [`GenerateError::AutoshiftConflict`] if two records of the
    /// same layer match the same keycode but send different values.
    pub fn build(resolved: &ResolvedKeymap) -> GenerateResult<Self> {
        let mut plan = Self::default();

        for mode in Mode::iter() {
            let overrides = resolved.overrides().for_mode(mode).map(|ovr| AutoshiftCase {
                trigger: ovr.base.clone(),
                keycode: ovr.base.clone(),
                shifted: ShiftedOutput::Keycode(ovr.shifted.clone()),
            });
            let custom_keys = resolved.custom_keys().for_mode(mode).map(|ckc| AutoshiftCase {
                trigger: Keycode::Basic(ckc.name.clone()),
                keycode: ckc.base.clone(),
                shifted: ShiftedOutput::Unicode(ckc.index.clone()),
            });

            for case in overrides.chain(custom_keys) {
                plan.push(mode, case)?;
            }
        }

        plan.guards = resolved
            .active_modes()
            .into_iter()
            .filter(|mode| !plan.dispatch.contains_key(mode))
            .collect();

        debug!(
            layers = plan.dispatch.len(),
            guards = plan.guards.len(),
            "built autoshift plan"
        );
        Ok(plan)
    }

    fn push(&mut self, mode: Mode, case: AutoshiftCase) -> GenerateResult<()> {
        let cases = self.dispatch.entry(mode).or_default();
        if let Some(existing) = cases.iter().find(|c| c.trigger == case.trigger) {
            if *existing != case {
                return Err(GenerateError::AutoshiftConflict {
                    mode,
                    keycode: case.trigger.to_string(),
                    existing: existing.shifted.to_string(),
                    new: case.shifted.to_string(),
                });
            }
            return Ok(());
        }
        cases.push(case);
        Ok(())
    }

    /// Layers with a dispatch switch, in emission order.
    pub fn dispatch(&self) -> impl Iterator<Item = (Mode, &[AutoshiftCase])> {
        self.dispatch
            .iter()
            .map(|(mode, cases)| (*mode, cases.as_slice()))
    }

    /// Active layers without records; auto shift is left to QMK there.
    #[must_use]
    pub fn guards(&self) -> &[Mode] {
        &self.guards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::firmware::generator::FirmwareGenerator;
    use crate::models::{KeyRow, KeyTable, Keymaps, Sym, TRNS};

    const TEMPLATE: &str = "{}, {}, {}";

    fn row(name: &'static str, base: &'static str, shifted: Option<Sym>, sym: Sym) -> KeyRow {
        KeyRow {
            name,
            base,
            shifted,
            dk_base: TRNS,
            dk_shifted: TRNS,
            sym_base: sym,
            sym_shifted: TRNS,
        }
    }

    fn plan(rows: &[KeyRow], base: &str, extra: &[(Mode, &str)]) -> GenerateResult<AutoshiftPlan> {
        let mut grids = vec![(Mode::Base, base)];
        grids.extend_from_slice(extra);
        let keymaps = Keymaps::from_preset(TEMPLATE, &grids)?;
        let resolved = FirmwareGenerator::new(KeyTable::from_rows(rows), keymaps)?.resolve()?;
        AutoshiftPlan::build(&resolved)
    }

    #[test]
    fn test_records_are_grouped_by_layer() {
        let rows = [
            row("EKC_1", "KC_1", Some(Sym::Uc(0x20AC)), TRNS),
            row("EKC_MNS", "KC_MINS", Some(Sym::Kc("KC_QUES")), Sym::Kc("KC_DLR")),
        ];
        let plan = plan(&rows, "EKC_1, EKC_MNS, _______", &[]).unwrap();

        let layers: Vec<Mode> = plan.dispatch().map(|(mode, _)| mode).collect();
        assert_eq!(layers, vec![Mode::Base, Mode::Sym]);

        let (_, base) = plan.dispatch().next().unwrap();
        assert_eq!(base.len(), 2);
        assert_eq!(base[0].trigger.to_string(), "KC_MINS");
        assert_eq!(base[0].shifted.to_string(), "KC_QUES");
        assert_eq!(base[1].trigger.to_string(), "Base_EKC_1");
        assert_eq!(base[1].keycode.to_string(), "KC_1");
        assert!(base[1].shifted.is_unicode());
        assert!(plan.guards().is_empty());
    }

    #[test]
    fn test_layers_without_records_are_guarded() {
        let rows = [row("EKC_A", "KC_A", None, TRNS)];
        let plan = plan(&rows, "EKC_A, _______, _______", &[(Mode::Fn, "KC_F1, _______, _______")])
            .unwrap();

        assert_eq!(plan.dispatch().count(), 0);
        assert_eq!(plan.guards(), &[Mode::Base, Mode::Fn]);
    }

    #[test]
    fn test_records_on_inactive_layer_are_dispatched() {
        // A transparent Sym keycode with a shifted symbol leaves Sym empty
        // but still records an override there.
        let rows = [KeyRow {
            name: "EKC_A",
            base: "KC_A",
            shifted: None,
            dk_base: TRNS,
            dk_shifted: TRNS,
            sym_base: TRNS,
            sym_shifted: Sym::Kc("KC_HASH"),
        }];
        let plan = plan(&rows, "EKC_A, _______, _______", &[]).unwrap();

        let layers: Vec<Mode> = plan.dispatch().map(|(mode, _)| mode).collect();
        assert_eq!(layers, vec![Mode::Sym]);
        assert_eq!(plan.guards(), &[Mode::Base]);
    }

    #[test]
    fn test_identical_cases_are_emitted_once() {
        // Both keys put a KC_DLR override on Sym.
        let rows = [
            row("EKC_P", "KC_P", None, Sym::Kc("KC_DLR")),
            row("EKC_W", "KC_W", None, Sym::Kc("KC_DLR")),
        ];
        let plan = plan(&rows, "EKC_P, EKC_W, _______", &[]).unwrap();

        let sym: Vec<_> = plan
            .dispatch()
            .filter(|(mode, _)| *mode == Mode::Sym)
            .flat_map(|(_, cases)| cases.iter())
            .collect();
        assert_eq!(sym.len(), 1);
        assert_eq!(sym[0].trigger.to_string(), "KC_DLR");
    }

    #[test]
    fn test_same_trigger_different_result_conflicts() {
        let rows = [
            row("EKC_A", "KC_A", Some(Sym::Kc("KC_B")), TRNS),
            row("EKC_C", "KC_A", Some(Sym::Kc("KC_C")), TRNS),
        ];
        let err = plan(&rows, "EKC_A, EKC_C, _______", &[]).unwrap_err();

        assert_eq!(
            err,
            GenerateError::AutoshiftConflict {
                mode: Mode::Base,
                keycode: "KC_A".to_string(),
                existing: "KC_B".to_string(),
                new: "KC_C".to_string(),
            }
        );
    }
}
