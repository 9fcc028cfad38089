//! Command-line parsing and dispatch.

mod assess;
mod batch;
mod common;
mod config;
mod init;
mod stats;
mod validate;

use clap::{Parser, Subcommand};
use std::ffi::OsString;
use std::io::Write;

pub use assess::{AssessArgs, assess_shipment};
pub use batch::{BatchArgs, score_batch};
pub use common::LogLevel;
pub use config::{CONFIG_FILE_NAME, Config, DEFAULT_CONFIG_TOML};
pub use init::{InitArgs, init_config};
pub use stats::{StatsArgs, show_stats};
pub use validate::{ValidateArgs, validate_config};

use crate::misc::ColorMode;

/// Exit code reported when a command fails
const FAILURE_EXIT_CODE: i32 = 1;

/// The environment a command runs in.
///
/// The binary wires this to the real process; tests capture everything in memory.
pub trait Host {
    fn output(&mut self) -> impl Write;
    fn error(&mut self) -> impl Write;
    fn exit(&mut self, code: i32);
}

#[derive(Debug, Parser)]
#[command(name = "chainsight", version, about = "Score the delay risk of supply-chain shipments")]
struct Cli {
    /// Verbosity of diagnostic logging on stderr
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Warn, value_name = "LEVEL")]
    log_level: LogLevel,

    /// When to color console output
    #[arg(long, global = true, value_enum, default_value_t = ColorMode::Auto, value_name = "WHEN")]
    color: ColorMode,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a single shipment
    Assess(AssessArgs),

    /// Score every shipment in a CSV file
    Batch(BatchArgs),

    /// Show reference statistics about the historical shipment set
    Stats(StatsArgs),

    /// Write the default weights file
    Init(InitArgs),

    /// Check that a weights file loads and is consistent
    Validate(ValidateArgs),
}

/// Parse `args` and run the selected command against `host`.
///
/// Usage errors exit with clap's code, command failures print the error to the host's error
/// stream and exit with 1.
pub fn run<H, I, T>(host: &mut H, args: I)
where
    H: Host,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let cli = match Cli::try_parse_from(args) {
        Ok(cli) => cli,
        Err(e) => {
            if e.use_stderr() {
                _ = write!(host.error(), "{e}");
            } else {
                _ = write!(host.output(), "{e}");
            }
            host.exit(e.exit_code());
            return;
        }
    };

    // A logger may already be installed when `run` is called more than once in a process
    _ = env_logger::Builder::new()
        .filter_level(cli.log_level.into())
        .parse_default_env()
        .try_init();

    let colors = cli.color.enabled();
    let result = match &cli.command {
        Command::Assess(args) => assess_shipment(host, args, colors),
        Command::Batch(args) => score_batch(host, args, colors),
        Command::Stats(args) => show_stats(host, args, colors),
        Command::Init(args) => init_config(host, args),
        Command::Validate(args) => validate_config(host, args),
    };

    if let Err(e) = result {
        _ = writeln!(host.error(), "error: {e}");
        host.exit(FAILURE_EXIT_CODE);
    }
}
