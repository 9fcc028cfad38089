use super::ScoredShipment;
use crate::Result;
use crate::scoring::Factor;
use ohno::IntoAppError;
use std::io::Write;
use strum::IntoEnumIterator;

const LEADING_COLUMNS: &[&str] = &[
    "shipment_id",
    "origin_city",
    "route_type",
    "transport_mode",
    "product_category",
    "base_lead_time_days",
    "scheduled_lead_time_days",
    "geopolitical_risk",
    "weather_severity",
    "probability",
    "risk_label",
];

/// Write one CSV row per shipment, with a percentage column for every factor.
pub fn generate(entries: &[ScoredShipment], writer: &mut impl Write) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    let header: Vec<String> = LEADING_COLUMNS
        .iter()
        .map(|column| (*column).to_string())
        .chain(Factor::iter().map(|factor| format!("{}_pct", factor.key())))
        .collect();
    csv_writer.write_record(&header).into_app_err("writing CSV header")?;

    for entry in entries {
        let input = &entry.input;
        let assessment = &entry.assessment;

        let mut record = vec![
            entry.id.to_string(),
            input.origin_city().to_string(),
            input.route_type().to_string(),
            input.transport_mode().to_string(),
            input.product_category().to_string(),
            input.base_lead_time_days().to_string(),
            input.scheduled_lead_time_days().to_string(),
            input.geopolitical_risk().to_string(),
            input.weather_severity().to_string(),
            assessment.probability.to_string(),
            assessment.risk_label.as_str().to_string(),
        ];
        record.extend(assessment.factor_breakdown.iter().map(|score| score.percentage.to_string()));

        csv_writer
            .write_record(&record)
            .into_app_err_with(|| format!("writing CSV row for shipment '{}'", entry.id))?;
    }

    csv_writer.flush().into_app_err("flushing CSV report")?;
    Ok(())
}
