use super::Host;
use super::common::console_style;
use crate::Result;
use crate::catalog::{Catalog, Section};
use crate::misc::OutputFormat;
use crate::reports::{generate_catalog_console, generate_catalog_json};
use clap::Args;
use ohno::bail;
use strum::IntoEnumIterator;

#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Sections to show, all of them when omitted
    #[arg(long = "section", value_enum, value_name = "SECTION")]
    pub sections: Vec<Section>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

pub fn show_stats<H: Host>(host: &mut H, args: &StatsArgs, colors: bool) -> Result<()> {
    let sections: Vec<Section> = if args.sections.is_empty() {
        Section::iter().collect()
    } else {
        args.sections.clone()
    };

    let catalog = Catalog::builtin();
    match args.format {
        OutputFormat::Console => generate_catalog_console(&catalog, &sections, &mut host.output(), console_style(colors)),
        OutputFormat::Json => generate_catalog_json(&catalog, &sections, &mut host.output()),
        OutputFormat::Csv => bail!("reference statistics can only be shown as console or json output"),
    }
}
