use super::{ScoreError, TransportMode};
use core::fmt::{Display, Formatter, Result as FmtResult};
use core::ops::RangeInclusive;
use serde::Deserialize;
use std::sync::Arc;

const GEOPOLITICAL_RANGE: RangeInclusive<f64> = 0.0..=1.0;
const WEATHER_RANGE: RangeInclusive<f64> = 0.0..=10.0;

/// The descriptive attributes of a shipment, validated on construction.
///
/// Instances can only be obtained through [`ShipmentInput::builder`] or by converting a
/// [`RawShipment`], so every value in circulation satisfies the field constraints.
#[derive(Debug, Clone, PartialEq)]
pub struct ShipmentInput {
    origin_city: Arc<str>,
    route_type: Arc<str>,
    transport_mode: TransportMode,
    product_category: Arc<str>,
    base_lead_time_days: f64,
    scheduled_lead_time_days: f64,
    geopolitical_risk: f64,
    weather_severity: f64,
}

impl ShipmentInput {
    #[must_use]
    pub fn builder() -> ShipmentBuilder {
        ShipmentBuilder::default()
    }

    #[must_use]
    pub fn origin_city(&self) -> &str {
        &self.origin_city
    }

    #[must_use]
    pub fn route_type(&self) -> &str {
        &self.route_type
    }

    #[must_use]
    pub const fn transport_mode(&self) -> TransportMode {
        self.transport_mode
    }

    #[must_use]
    pub fn product_category(&self) -> &str {
        &self.product_category
    }

    #[must_use]
    pub const fn base_lead_time_days(&self) -> f64 {
        self.base_lead_time_days
    }

    #[must_use]
    pub const fn scheduled_lead_time_days(&self) -> f64 {
        self.scheduled_lead_time_days
    }

    #[must_use]
    pub const fn geopolitical_risk(&self) -> f64 {
        self.geopolitical_risk
    }

    #[must_use]
    pub const fn weather_severity(&self) -> f64 {
        self.weather_severity
    }

    /// Slack between the scheduled and the base lead time, in days. May be negative.
    #[must_use]
    pub fn lead_time_buffer(&self) -> f64 {
        self.scheduled_lead_time_days - self.base_lead_time_days
    }
}

impl Display for ShipmentInput {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "{} via {} ({}), {}",
            self.origin_city, self.route_type, self.transport_mode, self.product_category
        )
    }
}

/// Collects shipment attributes and validates them in [`ShipmentBuilder::build`].
#[derive(Debug, Clone, Default)]
pub struct ShipmentBuilder {
    origin_city: Option<Arc<str>>,
    route_type: Option<Arc<str>>,
    transport_mode: Option<TransportMode>,
    product_category: Option<Arc<str>>,
    base_lead_time_days: Option<f64>,
    scheduled_lead_time_days: Option<f64>,
    geopolitical_risk: Option<f64>,
    weather_severity: Option<f64>,
}

impl ShipmentBuilder {
    #[must_use]
    pub fn origin_city(mut self, origin_city: impl AsRef<str>) -> Self {
        self.origin_city = Some(Arc::from(origin_city.as_ref()));
        self
    }

    #[must_use]
    pub fn route_type(mut self, route_type: impl AsRef<str>) -> Self {
        self.route_type = Some(Arc::from(route_type.as_ref()));
        self
    }

    #[must_use]
    pub const fn transport_mode(mut self, transport_mode: TransportMode) -> Self {
        self.transport_mode = Some(transport_mode);
        self
    }

    #[must_use]
    pub fn product_category(mut self, product_category: impl AsRef<str>) -> Self {
        self.product_category = Some(Arc::from(product_category.as_ref()));
        self
    }

    #[must_use]
    pub const fn base_lead_time_days(mut self, days: f64) -> Self {
        self.base_lead_time_days = Some(days);
        self
    }

    #[must_use]
    pub const fn scheduled_lead_time_days(mut self, days: f64) -> Self {
        self.scheduled_lead_time_days = Some(days);
        self
    }

    #[must_use]
    pub const fn geopolitical_risk(mut self, risk: f64) -> Self {
        self.geopolitical_risk = Some(risk);
        self
    }

    #[must_use]
    pub const fn weather_severity(mut self, severity: f64) -> Self {
        self.weather_severity = Some(severity);
        self
    }

    /// Validate the collected attributes and produce an immutable [`ShipmentInput`].
    pub fn build(self) -> Result<ShipmentInput, ScoreError> {
        Ok(ShipmentInput {
            origin_city: require_name("origin_city", self.origin_city)?,
            route_type: require_name("route_type", self.route_type)?,
            transport_mode: self.transport_mode.ok_or_else(|| ScoreError::invalid("transport_mode", "missing"))?,
            product_category: require_name("product_category", self.product_category)?,
            base_lead_time_days: require_lead_time("base_lead_time_days", self.base_lead_time_days)?,
            scheduled_lead_time_days: require_lead_time("scheduled_lead_time_days", self.scheduled_lead_time_days)?,
            geopolitical_risk: require_in_range("geopolitical_risk", self.geopolitical_risk, &GEOPOLITICAL_RANGE)?,
            weather_severity: require_in_range("weather_severity", self.weather_severity, &WEATHER_RANGE)?,
        })
    }
}

fn require_name(field: &'static str, value: Option<Arc<str>>) -> Result<Arc<str>, ScoreError> {
    let value = value.ok_or_else(|| ScoreError::invalid(field, "missing"))?;
    if value.trim().is_empty() {
        return Err(ScoreError::invalid(field, "must not be empty"));
    }

    Ok(value)
}

fn require_number(field: &'static str, value: Option<f64>) -> Result<f64, ScoreError> {
    let value = value.ok_or_else(|| ScoreError::invalid(field, "missing"))?;
    if !value.is_finite() {
        return Err(ScoreError::invalid(field, format!("{value} is not a finite number")));
    }

    Ok(value)
}

fn require_lead_time(field: &'static str, value: Option<f64>) -> Result<f64, ScoreError> {
    let value = require_number(field, value)?;
    if value <= 0.0 {
        return Err(ScoreError::invalid(field, format!("{value} must be greater than 0")));
    }

    Ok(value)
}

fn require_in_range(field: &'static str, value: Option<f64>, range: &RangeInclusive<f64>) -> Result<f64, ScoreError> {
    let value = require_number(field, value)?;
    if !range.contains(&value) {
        return Err(ScoreError::invalid(
            field,
            format!("{value} is outside the range [{}, {}]", range.start(), range.end()),
        ));
    }

    Ok(value)
}

/// A shipment record with every field still in textual form, as read from a CSV file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawShipment {
    #[serde(default)]
    pub shipment_id: Option<String>,
    pub origin_city: String,
    pub route_type: String,
    pub transport_mode: String,
    pub product_category: String,
    pub base_lead_time_days: String,
    pub scheduled_lead_time_days: String,
    pub geopolitical_risk: String,
    pub weather_severity: String,
}

fn parse_number(field: &'static str, text: &str) -> Result<f64, ScoreError> {
    text.trim()
        .parse::<f64>()
        .map_err(|_err| ScoreError::invalid(field, format!("'{text}' is not a number")))
}

impl TryFrom<&RawShipment> for ShipmentInput {
    type Error = ScoreError;

    fn try_from(raw: &RawShipment) -> Result<Self, Self::Error> {
        Self::builder()
            .origin_city(raw.origin_city.trim())
            .route_type(raw.route_type.trim())
            .transport_mode(TransportMode::parse(&raw.transport_mode)?)
            .product_category(raw.product_category.trim())
            .base_lead_time_days(parse_number("base_lead_time_days", &raw.base_lead_time_days)?)
            .scheduled_lead_time_days(parse_number("scheduled_lead_time_days", &raw.scheduled_lead_time_days)?)
            .geopolitical_risk(parse_number("geopolitical_risk", &raw.geopolitical_risk)?)
            .weather_severity(parse_number("weather_severity", &raw.weather_severity)?)
            .build()
    }
}
