//! keymapc - build-time QMK keymap compiler
//!
//! Resolves a keymap preset against a host key table and writes the
//! resulting `keymap.c` (or a JSON summary of it).

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use keymapc::cli::{ExitCode, GenerateArgs, LedsArgs, ListArgs};
use keymapc::constants::APP_BINARY_NAME;

/// keymapc - QMK keymap compiler for Ergo-L layouts
#[derive(Parser, Debug)]
#[command(name = APP_BINARY_NAME, author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate keymap.c from a preset
    Generate(GenerateArgs),
    /// Print the LED_LAYOUT macros
    Leds(LedsArgs),
    /// List hosts, keymaps and modes
    List(ListArgs),
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries generated output
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let result = match &cli.command {
        Command::Generate(args) => args.execute(),
        Command::Leds(args) => args.execute(),
        Command::List(args) => args.execute(),
    };

    let code = match result {
        Ok(()) => ExitCode::Success,
        Err(err) => {
            eprintln!("Error: {err}");
            err.exit_code()
        }
    };

    std::process::exit(code.code());
}
