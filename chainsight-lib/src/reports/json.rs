use super::ScoredShipment;
use crate::Result;
use crate::catalog::{Catalog, Section};
use crate::scoring::{FactorBand, RiskLabel, TransportMode};
use ohno::IntoAppError;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::Write;

#[derive(Serialize)]
struct JsonShipment<'a> {
    id: &'a str,
    origin_city: &'a str,
    route_type: &'a str,
    transport_mode: TransportMode,
    product_category: &'a str,
    base_lead_time_days: f64,
    scheduled_lead_time_days: f64,
    lead_time_buffer: f64,
    geopolitical_risk: f64,
    weather_severity: f64,
    probability: f64,
    percent: u8,
    risk_label: RiskLabel,
    summary: String,
    factors: Vec<JsonFactor>,
}

#[derive(Serialize)]
struct JsonFactor {
    key: &'static str,
    name: String,
    percentage: u8,
    band: FactorBand,
}

impl<'a> From<&'a ScoredShipment> for JsonShipment<'a> {
    fn from(entry: &'a ScoredShipment) -> Self {
        let input = &entry.input;
        let assessment = &entry.assessment;

        Self {
            id: &entry.id,
            origin_city: input.origin_city(),
            route_type: input.route_type(),
            transport_mode: input.transport_mode(),
            product_category: input.product_category(),
            base_lead_time_days: input.base_lead_time_days(),
            scheduled_lead_time_days: input.scheduled_lead_time_days(),
            lead_time_buffer: input.lead_time_buffer(),
            geopolitical_risk: input.geopolitical_risk(),
            weather_severity: input.weather_severity(),
            probability: assessment.probability,
            percent: assessment.percent(),
            risk_label: assessment.risk_label,
            summary: assessment.summary(),
            factors: assessment
                .factor_breakdown
                .iter()
                .map(|score| JsonFactor {
                    key: score.factor.key(),
                    name: score.factor.to_string(),
                    percentage: score.percentage,
                    band: score.band(),
                })
                .collect(),
        }
    }
}

/// Write shipment assessments as a pretty-printed JSON array.
pub fn generate(entries: &[ScoredShipment], writer: &mut impl Write) -> Result<()> {
    let shipments: Vec<JsonShipment<'_>> = entries.iter().map(JsonShipment::from).collect();
    serde_json::to_writer_pretty(&mut *writer, &shipments).into_app_err("serializing JSON report")?;
    writeln!(writer).into_app_err("writing JSON report")?;
    Ok(())
}

/// Write the requested catalog sections as a JSON object keyed by section name.
pub fn generate_catalog(catalog: &Catalog, sections: &[Section], writer: &mut impl Write) -> Result<()> {
    let mut object = Map::new();
    for section in sections {
        _ = object.insert(section.to_string(), section_value(catalog, *section)?);
    }

    serde_json::to_writer_pretty(&mut *writer, &Value::Object(object)).into_app_err("serializing JSON catalog")?;
    writeln!(writer).into_app_err("writing JSON catalog")?;
    Ok(())
}

fn section_value(catalog: &Catalog, section: Section) -> Result<Value> {
    let value = match section {
        Section::Overview => {
            let mut overview = serde_json::to_value(catalog.kpis).into_app_err("serializing overview")?;
            if let Value::Object(map) = &mut overview {
                _ = map.insert("on_time_rate_pct".to_string(), Value::from(catalog.kpis.on_time_rate_pct()));
                _ = map.insert(
                    "destinations".to_string(),
                    serde_json::to_value(catalog.destinations).into_app_err("serializing destinations")?,
                );
            }
            overview
        }
        Section::Highlights => serde_json::to_value(catalog.highlights).into_app_err("serializing highlights")?,
        Section::Routes => serde_json::to_value(catalog.routes).into_app_err("serializing route delays")?,
        Section::Products => serde_json::to_value(catalog.products).into_app_err("serializing product delays")?,
        Section::Origins => serde_json::to_value(catalog.origins).into_app_err("serializing origin delays")?,
        Section::Modes => serde_json::to_value(catalog.modes).into_app_err("serializing mode delays")?,
        Section::Monthly => serde_json::to_value(catalog.monthly).into_app_err("serializing monthly volume")?,
        Section::Models => serde_json::to_value(catalog.models).into_app_err("serializing model benchmarks")?,
        Section::Confusion => {
            let mut confusion = serde_json::to_value(catalog.confusion).into_app_err("serializing confusion matrix")?;
            if let Value::Object(map) = &mut confusion {
                _ = map.insert("total".to_string(), Value::from(catalog.confusion.total()));
                _ = map.insert("accuracy_pct".to_string(), Value::from(catalog.confusion.accuracy_pct()));
            }
            confusion
        }
        Section::Features => serde_json::to_value(catalog.features).into_app_err("serializing feature importance")?,
        Section::Delays => serde_json::to_value(catalog.delays).into_app_err("serializing delay histogram")?,
        Section::Correlations => serde_json::to_value(catalog.correlations).into_app_err("serializing correlations")?,
        Section::Disruptions => serde_json::to_value(catalog.disruptions).into_app_err("serializing disruptions")?,
        Section::Findings => serde_json::to_value(catalog.findings).into_app_err("serializing findings")?,
    };

    Ok(value)
}
