use super::common::current_dir;
use super::{CONFIG_FILE_NAME, Config, Host};
use crate::Result;
use camino::Utf8PathBuf;
use clap::Args;
use ohno::{IntoAppError, bail};
use std::io::Write;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Weights file to check, defaults to chainsight.toml in the working directory
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let search_dir = current_dir()?;
    let path = match &args.config {
        Some(path) => path.clone(),
        None => {
            let path = search_dir.join(CONFIG_FILE_NAME);
            if !path.exists() {
                bail!("could not find configuration file '{path}'");
            }
            path
        }
    };

    let weights = Config::load(&search_dir, Some(&path))?.weights;
    writeln!(
        host.output(),
        "'{path}' is valid: {} route, {} product and {} origin weights",
        weights.routes.entries.len(),
        weights.products.entries.len(),
        weights.origins.entries.len()
    )
    .into_app_err("writing command output")?;
    Ok(())
}
