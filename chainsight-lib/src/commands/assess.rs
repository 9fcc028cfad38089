use super::Host;
use super::common::{console_style, load_scorer};
use crate::Result;
use crate::misc::OutputFormat;
use crate::reports::{ScoredShipment, generate_console, generate_csv, generate_json};
use crate::scoring::{RawShipment, ShipmentInput};
use camino::Utf8PathBuf;
use clap::Args;
use ohno::app_err;

/// Log target for the assess command
const LOG_TARGET: &str = "assess";

#[derive(Args, Debug)]
pub struct AssessArgs {
    /// Port of origin, e.g. "Shanghai, CN"
    #[arg(long, value_name = "CITY")]
    pub origin: String,

    /// Shipping lane, e.g. Suez or Pacific
    #[arg(long, value_name = "ROUTE")]
    pub route: String,

    /// Sea or Air
    #[arg(long, value_name = "MODE")]
    pub mode: String,

    /// Goods category, e.g. Perishables
    #[arg(long, value_name = "CATEGORY")]
    pub product: String,

    /// Nominal transit time in days
    #[arg(long, value_name = "DAYS", allow_hyphen_values = true)]
    pub base_lead: String,

    /// Planned transit time in days
    #[arg(long, value_name = "DAYS", allow_hyphen_values = true)]
    pub scheduled_lead: String,

    /// Geopolitical risk index between 0 and 1
    #[arg(long, value_name = "INDEX", allow_hyphen_values = true)]
    pub geo: String,

    /// Weather severity index between 0 and 10
    #[arg(long, value_name = "INDEX", allow_hyphen_values = true)]
    pub weather: String,

    /// Identifier shown in reports
    #[arg(long, default_value = "1")]
    pub id: String,

    /// Weights file, defaults to chainsight.toml in the working directory when present
    #[arg(long, value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Console)]
    pub format: OutputFormat,
}

impl AssessArgs {
    fn raw(&self) -> RawShipment {
        RawShipment {
            shipment_id: Some(self.id.clone()),
            origin_city: self.origin.clone(),
            route_type: self.route.clone(),
            transport_mode: self.mode.clone(),
            product_category: self.product.clone(),
            base_lead_time_days: self.base_lead.clone(),
            scheduled_lead_time_days: self.scheduled_lead.clone(),
            geopolitical_risk: self.geo.clone(),
            weather_severity: self.weather.clone(),
        }
    }
}

pub fn assess_shipment<H: Host>(host: &mut H, args: &AssessArgs, colors: bool) -> Result<()> {
    let input = ShipmentInput::try_from(&args.raw()).map_err(|e| app_err!("{e}"))?;
    let scorer = load_scorer(args.config.as_ref())?;

    let assessment = scorer.predict(&input);
    log::info!(target: LOG_TARGET, "Shipment '{}' scored {:.2}", args.id, assessment.probability);

    let entries = [ScoredShipment::new(&args.id, input, assessment)];
    match args.format {
        OutputFormat::Console => generate_console(&entries, &mut host.output(), console_style(colors)),
        OutputFormat::Json => generate_json(&entries, &mut host.output()),
        OutputFormat::Csv => generate_csv(&entries, &mut host.output()),
    }
}
