//! Generate command for keymap source files.

use crate::cli::common::{atomic_write, CliError, CliResult};
use crate::config::{Config, GenerateConfig};
use crate::data::{Host, Preset};
use crate::firmware::{generate_keymap_c, FirmwareGenerator, KeymapSummary};
use clap::{Args, ValueEnum};
use std::path::PathBuf;
use tracing::{debug, info};

/// Output format of the generate command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// QMK `keymap.c` source
    #[default]
    C,
    /// JSON summary of the resolved keymap
    Json,
}

/// Generate a QMK keymap from a built-in preset
#[derive(Debug, Clone, Default, Args)]
pub struct GenerateArgs {
    /// Keyboard layout configured on the host OS
    #[arg(long, value_enum, value_name = "HOST")]
    pub host: Option<Host>,

    /// Keymap preset
    #[arg(short, long, value_enum, value_name = "NAME")]
    pub keymap: Option<Preset>,

    /// Emit the auto shift callbacks
    #[arg(long, conflicts_with = "no_autoshift")]
    pub autoshift: bool,

    /// Do not emit the auto shift callbacks, even if the config enables them
    #[arg(long)]
    pub no_autoshift: bool,

    /// Output file (stdout if omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::C)]
    pub format: OutputFormat,

    /// Config file to read defaults from
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl GenerateArgs {
    /// Execute the generate command
    pub fn execute(&self) -> CliResult<()> {
        let config = self.load_config()?;
        let settings = self.merge(config.generate);
        debug!(
            "Generating {} keymap for host {} (autoshift: {})",
            settings.keymap, settings.host, settings.autoshift
        );

        let content = match self.format {
            OutputFormat::C => {
                generate_keymap_c(settings.host, settings.keymap, settings.autoshift)?
            }
            OutputFormat::Json => {
                let resolved =
                    FirmwareGenerator::for_preset(settings.host, settings.keymap)?.resolve()?;
                let summary =
                    KeymapSummary::new(&resolved, settings.host.name(), settings.keymap.name());
                let mut json = serde_json::to_string_pretty(&summary)
                    .map_err(|e| CliError::io(format!("Failed to serialize summary: {e}")))?;
                json.push('\n');
                json
            }
        };

        match &settings.output {
            Some(path) => {
                atomic_write(path, &content).map_err(|e| CliError::io(format!("{e:#}")))?;
                info!("Wrote {}", path.display());
            }
            None => print!("{content}"),
        }

        Ok(())
    }

    fn load_config(&self) -> CliResult<Config> {
        let config = match &self.config {
            Some(path) => Config::load_from(path),
            None => Config::load(),
        };
        config.map_err(|e| CliError::io(format!("Failed to load config: {e:#}")))
    }

    /// Applies command line flags over config values.
    fn merge(&self, config: GenerateConfig) -> GenerateConfig {
        let autoshift = if self.autoshift {
            true
        } else if self.no_autoshift {
            false
        } else {
            config.autoshift
        };

        GenerateConfig {
            host: self.host.unwrap_or(config.host),
            keymap: self.keymap.unwrap_or(config.keymap),
            autoshift,
            output: self.output.clone().or(config.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_config() -> GenerateConfig {
        GenerateConfig {
            host: Host::Fr,
            keymap: Preset::Daedric,
            autoshift: true,
            output: Some(PathBuf::from("from_config.c")),
        }
    }

    #[test]
    fn test_merge_uses_config_without_flags() {
        let args = GenerateArgs::default();
        assert_eq!(args.merge(file_config()), file_config());
    }

    #[test]
    fn test_merge_flags_win() {
        let args = GenerateArgs {
            host: Some(Host::Us),
            keymap: Some(Preset::Daedric34),
            no_autoshift: true,
            output: Some(PathBuf::from("flag.c")),
            ..GenerateArgs::default()
        };

        let merged = args.merge(file_config());
        assert_eq!(merged.host, Host::Us);
        assert_eq!(merged.keymap, Preset::Daedric34);
        assert!(!merged.autoshift);
        assert_eq!(merged.output, Some(PathBuf::from("flag.c")));
    }

    #[test]
    fn test_merge_autoshift_flag_enables() {
        let args = GenerateArgs {
            autoshift: true,
            ..GenerateArgs::default()
        };
        assert!(args.merge(GenerateConfig::default()).autoshift);
    }
}
