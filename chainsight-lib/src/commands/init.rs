use super::{CONFIG_FILE_NAME, Config, Host};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Args;
use ohno::{IntoAppError, bail};
use std::io::Write;

/// Log target for the init command
const LOG_TARGET: &str = "init";

#[derive(Args, Debug)]
pub struct InitArgs {
    /// Where to write the weights file
    #[arg(long, value_name = "PATH", default_value = CONFIG_FILE_NAME)]
    pub output: Utf8PathBuf,

    /// Replace an existing file
    #[arg(long)]
    pub force: bool,
}

pub fn init_config<H: Host>(host: &mut H, args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        bail!("'{}' already exists, pass --force to replace it", args.output);
    }

    Config::save_default(&args.output)?;
    log::info!(target: LOG_TARGET, "Default weights written to '{}'", args.output);

    writeln!(host.output(), "Wrote default weights to '{}'", args.output).into_app_err("writing command output")?;
    Ok(())
}
