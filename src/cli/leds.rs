//! Leds command: prints the LED_LAYOUT macros of the keyboard.

use crate::cli::common::{atomic_write, CliError, CliResult};
use crate::data::moonlander::{KEY_COUNT, LED_LAYOUT};
use crate::firmware::leds::{parse_led_layout, render_led_macros};
use clap::Args;
use std::path::PathBuf;

/// Print the LED_LAYOUT / LED_LAYOUT_ALL macros
#[derive(Debug, Clone, Default, Args)]
pub struct LedsArgs {
    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl LedsArgs {
    /// Execute the leds command
    pub fn execute(&self) -> CliResult<()> {
        let leds = parse_led_layout(LED_LAYOUT)?.len();
        if leds != KEY_COUNT {
            return Err(CliError::validation(format!(
                "LED layout covers {leds} keys, keyboard has {KEY_COUNT}"
            )));
        }

        let macros = render_led_macros(LED_LAYOUT)?;

        match &self.output {
            Some(path) => atomic_write(path, &macros).map_err(|e| CliError::io(format!("{e:#}")))?,
            None => print!("{macros}"),
        }

        Ok(())
    }
}
