//! List command: shows the built-in hosts, keymaps and modes.

use crate::cli::common::{CliError, CliResult};
use crate::data::{Host, Preset};
use crate::models::Mode;
use clap::Args;
use serde::Serialize;

/// List available hosts, keymaps and modes
#[derive(Debug, Clone, Default, Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Listing {
    hosts: Vec<&'static str>,
    keymaps: Vec<&'static str>,
    modes: Vec<&'static str>,
}

impl Listing {
    fn collect() -> Self {
        Self {
            hosts: Host::ALL.iter().map(|h| h.name()).collect(),
            keymaps: Preset::ALL.iter().map(|p| p.name()).collect(),
            modes: Mode::iter().map(Mode::name).collect(),
        }
    }

    fn to_text(&self) -> String {
        let mut output = String::new();
        output.push_str(&format!("hosts:   {}\n", self.hosts.join(", ")));
        output.push_str(&format!("keymaps: {}\n", self.keymaps.join(", ")));
        output.push_str(&format!("modes:   {}\n", self.modes.join(", ")));
        output
    }
}

impl ListArgs {
    /// Execute the list command
    pub fn execute(&self) -> CliResult<()> {
        let listing = Listing::collect();

        if self.json {
            let json = serde_json::to_string_pretty(&listing)
                .map_err(|e| CliError::io(format!("Failed to serialize listing: {e}")))?;
            println!("{json}");
        } else {
            print!("{}", listing.to_text());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listing_text() {
        let text = Listing::collect().to_text();
        assert!(text.contains("hosts:   us, fr\n"));
        assert!(text.contains("keymaps: std, daedric, daedric_34\n"));
        assert!(text.starts_with("hosts:"));
        assert!(text.contains("DK"));
    }
}
