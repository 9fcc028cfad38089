use super::{Factor, FactorScore, RiskLabel};
use serde::Serialize;

/// Number of entries in every factor breakdown.
pub const FACTOR_COUNT: usize = 6;

/// The outcome of scoring a shipment.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskAssessment {
    /// Clamped delay probability, always within [0.02, 0.97]
    pub probability: f64,
    pub risk_label: RiskLabel,
    pub factor_breakdown: [FactorScore; FACTOR_COUNT],
}

impl RiskAssessment {
    #[must_use]
    pub const fn new(probability: f64, risk_label: RiskLabel, factor_breakdown: [FactorScore; FACTOR_COUNT]) -> Self {
        Self {
            probability,
            risk_label,
            factor_breakdown,
        }
    }

    /// The probability as a whole percentage, as shown on the gauge.
    #[must_use]
    pub fn percent(&self) -> u8 {
        to_percentage(self.probability * 100.0)
    }

    /// The percentage recorded for a single factor.
    #[must_use]
    pub fn factor(&self, factor: Factor) -> u8 {
        self.factor_breakdown
            .iter()
            .find(|score| score.factor == factor)
            .map_or(0, |score| score.percentage)
    }

    /// A one-sentence recommendation matching the risk label.
    #[must_use]
    pub fn summary(&self) -> String {
        let pct = self.percent();
        match self.risk_label {
            RiskLabel::High => format!(
                "{pct}% probability of delay. Tight lead time buffer and high-risk route/origin combination. Consider expedited air freight."
            ),
            RiskLabel::Moderate => {
                format!("{pct}% delay probability. Some risk factors present, monitor geopolitical and weather conditions.")
            }
            RiskLabel::Low => format!("Only {pct}% delay probability. Shipment parameters look healthy. Proceed with standard shipping."),
        }
    }
}

/// Round half-to-even and clamp into a 0..=100 percentage.
#[must_use]
pub(crate) fn to_percentage(value: f64) -> u8 {
    let rounded = value.round_ties_even().clamp(0.0, 100.0);

    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss, reason = "value is clamped to 0..=100")]
    let pct = rounded as u8;
    pct
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn breakdown() -> [FactorScore; FACTOR_COUNT] {
        [
            FactorScore::new(Factor::LeadTimeBuffer, 30),
            FactorScore::new(Factor::RouteRisk, 50),
            FactorScore::new(Factor::GeopoliticalRisk, 55),
            FactorScore::new(Factor::WeatherSeverity, 45),
            FactorScore::new(Factor::TransportModeRisk, 65),
            FactorScore::new(Factor::ProductCategory, 22),
        ]
    }

    #[test]
    fn test_to_percentage_rounds_half_to_even() {
        assert_eq!(to_percentage(22.5), 22);
        assert_eq!(to_percentage(23.5), 24);
        assert_eq!(to_percentage(45.999_999), 46);
    }

    #[test]
    fn test_to_percentage_clamps() {
        assert_eq!(to_percentage(-4.0), 0);
        assert_eq!(to_percentage(187.5), 100);
    }

    #[test]
    fn test_percent() {
        let assessment = RiskAssessment::new(0.34, RiskLabel::Moderate, breakdown());
        assert_eq!(assessment.percent(), 34);
    }

    #[test]
    fn test_factor_lookup() {
        let assessment = RiskAssessment::new(0.34, RiskLabel::Moderate, breakdown());
        assert_eq!(assessment.factor(Factor::TransportModeRisk), 65);
        assert_eq!(assessment.factor(Factor::ProductCategory), 22);
    }

    #[test]
    fn test_summary_per_label() {
        let high = RiskAssessment::new(0.83, RiskLabel::High, breakdown());
        assert!(high.summary().starts_with("83% probability of delay."));

        let moderate = RiskAssessment::new(0.34, RiskLabel::Moderate, breakdown());
        assert!(moderate.summary().starts_with("34% delay probability."));

        let low = RiskAssessment::new(0.16, RiskLabel::Low, breakdown());
        assert!(low.summary().starts_with("Only 16% delay probability."));
    }
}
