use core::fmt;
use serde::Serialize;
use strum::{Display, EnumIter};

/// One of the six indicators shown in a factor breakdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, Display)]
#[serde(rename_all = "snake_case")]
pub enum Factor {
    #[strum(to_string = "Lead Time Buffer")]
    LeadTimeBuffer,
    #[strum(to_string = "Route Risk")]
    RouteRisk,
    #[strum(to_string = "Geopolitical Risk")]
    GeopoliticalRisk,
    #[strum(to_string = "Weather Severity")]
    WeatherSeverity,
    #[strum(to_string = "Transport Mode Risk")]
    TransportModeRisk,
    #[strum(to_string = "Product Category")]
    ProductCategory,
}

impl Factor {
    /// Machine-friendly name used for JSON keys and CSV columns.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::LeadTimeBuffer => "lead_time_buffer",
            Self::RouteRisk => "route_risk",
            Self::GeopoliticalRisk => "geopolitical_risk",
            Self::WeatherSeverity => "weather_severity",
            Self::TransportModeRisk => "transport_mode_risk",
            Self::ProductCategory => "product_category",
        }
    }
}

/// Visual intensity of a factor bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FactorBand {
    Low,
    Elevated,
    High,
}

/// A single entry of a factor breakdown.
///
/// Percentages are independently scaled display indicators; they are not a decomposition
/// of the overall probability and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FactorScore {
    pub factor: Factor,
    pub percentage: u8,
}

impl FactorScore {
    #[must_use]
    pub const fn new(factor: Factor, percentage: u8) -> Self {
        Self { factor, percentage }
    }

    #[must_use]
    pub const fn band(&self) -> FactorBand {
        if self.percentage > 70 {
            FactorBand::High
        } else if self.percentage > 40 {
            FactorBand::Elevated
        } else {
            FactorBand::Low
        }
    }
}

impl fmt::Display for FactorScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}%", self.factor, self.percentage)
    }
}
