use super::Host;
use super::common::{console_style, load_scorer};
use crate::Result;
use crate::misc::OutputFormat;
use crate::reports::{ScoredShipment, generate_console, generate_csv, generate_json};
use crate::scoring::{RawShipment, RiskScorer, ShipmentInput};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Args;
use ohno::{IntoAppError, app_err};
use std::io::Read;

/// Log target for the batch command
const LOG_TARGET: &str = "batch";

#[derive(Args, Debug)]
pub struct BatchArgs {
    /// CSV file with one shipment per row
    #[arg(value_name = "CSV")]
    pub input: Utf8PathBuf,

    /// Weights file, defaults to chainsight.toml in the working directory when present
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

pub fn score_batch<H: Host>(host: &mut H, args: &BatchArgs, colors: bool) -> Result<()> {
    let scorer = load_scorer(args.config.as_ref())?;
    let file = std::fs::File::open(&args.input).into_app_err_with(|| format!("opening shipment file '{}'", args.input))?;
    let entries = score_reader(&scorer, file, &args.input)?;

    log::info!(target: LOG_TARGET, "Scored {} shipments from '{}'", entries.len(), args.input);

    match args.format {
        OutputFormat::Console => generate_console(&entries, &mut host.output(), console_style(colors)),
        OutputFormat::Json => generate_json(&entries, &mut host.output()),
        OutputFormat::Csv => generate_csv(&entries, &mut host.output()),
    }
}

/// Score every CSV row read from `reader`, failing on the first row that does not describe
/// a valid shipment.
fn score_reader(scorer: &RiskScorer, reader: impl Read, source: &Utf8Path) -> Result<Vec<ScoredShipment>> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut entries = Vec::new();

    for (index, row) in csv_reader.deserialize::<RawShipment>().enumerate() {
        // Row 1 is the header
        let line = index + 2;
        let raw = row.map_err(|e| app_err!("reading row {line} of '{source}': {e}"))?;
        let input = ShipmentInput::try_from(&raw).map_err(|e| app_err!("row {line} of '{source}': {e}"))?;

        let id = match raw.shipment_id.as_deref() {
            Some(id) if !id.is_empty() => id.to_string(),
            _ => (index + 1).to_string(),
        };

        let assessment = scorer.predict(&input);
        log::debug!(target: LOG_TARGET, "Row {line}: shipment '{id}' is {}", assessment.risk_label.as_str());
        entries.push(ScoredShipment::new(id, input, assessment));
    }

    Ok(entries)
}
