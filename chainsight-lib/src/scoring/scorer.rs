//! The additive delay-risk heuristic.

use super::assessment::to_percentage;
use super::weights::WeightIndex;
use super::{Factor, FactorScore, RiskAssessment, RiskLabel, RiskWeights, ShipmentInput, TransportMode};
use crate::Result;

/// Log target for the scorer
const LOG_TARGET: &str = "scorer";

/// Score every shipment starts from.
pub const BASE_SCORE: f64 = 0.05;

/// Lower bound of a reported probability.
pub const MIN_PROBABILITY: f64 = 0.02;

/// Upper bound of a reported probability.
pub const MAX_PROBABILITY: f64 = 0.97;

/// Lead time buffer buckets: (inclusive upper bound in days, score weight, factor percentage).
const LEAD_TIME_BUCKETS: &[(f64, f64, u8)] = &[(1.0, 0.30, 90), (2.0, 0.18, 60), (4.0, 0.08, 30)];
const LEAD_TIME_SLACK: (f64, u8) = (0.01, 10);

/// Geopolitical buckets: (exclusive lower bound, score weight).
const GEOPOLITICAL_BUCKETS: &[(f64, f64)] = &[(0.7, 0.08), (0.5, 0.04)];
const GEOPOLITICAL_FLOOR: f64 = 0.01;

/// Weather buckets: (exclusive lower bound, score weight).
const WEATHER_BUCKETS: &[(f64, f64)] = &[(7.0, 0.07), (5.0, 0.04)];
const WEATHER_FLOOR: f64 = 0.01;

const SEA_WEIGHT: f64 = 0.06;
const AIR_WEIGHT: f64 = 0.02;
const SEA_FACTOR: u8 = 65;
const AIR_FACTOR: u8 = 25;

/// Route weight shown as a full bar.
const ROUTE_FACTOR_SCALE: f64 = 0.16;

/// Product weight mapped onto the top of the 10..=70 product bar.
const PRODUCT_FACTOR_SCALE: f64 = 0.05;

/// Converts shipments into risk assessments using fixed lookup tables.
///
/// The tables are read-only once the scorer exists, so a single scorer can be shared
/// freely between threads and callers.
#[derive(Debug, Clone)]
pub struct RiskScorer {
    routes: WeightIndex,
    products: WeightIndex,
    origins: WeightIndex,
}

impl RiskScorer {
    /// Create a scorer from validated weight tables.
    pub fn new(weights: &RiskWeights) -> Result<Self> {
        weights.validate()?;
        Ok(Self::from_weights(weights))
    }

    fn from_weights(weights: &RiskWeights) -> Self {
        Self {
            routes: WeightIndex::new(&weights.routes),
            products: WeightIndex::new(&weights.products),
            origins: WeightIndex::new(&weights.origins),
        }
    }

    /// Score a shipment.
    #[must_use]
    pub fn predict(&self, input: &ShipmentInput) -> RiskAssessment {
        let buffer = input.lead_time_buffer();
        let (buffer_weight, buffer_pct) = lead_time_contribution(buffer);
        let route_weight = self.routes.get(input.route_type());
        let (mode_weight, mode_pct) = match input.transport_mode() {
            TransportMode::Sea => (SEA_WEIGHT, SEA_FACTOR),
            TransportMode::Air => (AIR_WEIGHT, AIR_FACTOR),
        };
        let geo_weight = bucket_weight(input.geopolitical_risk(), GEOPOLITICAL_BUCKETS, GEOPOLITICAL_FLOOR);
        let weather_weight = bucket_weight(input.weather_severity(), WEATHER_BUCKETS, WEATHER_FLOOR);
        let product_weight = self.products.get(input.product_category());
        let origin_weight = self.origins.get(input.origin_city());

        let score =
            BASE_SCORE + buffer_weight + route_weight + mode_weight + geo_weight + weather_weight + product_weight + origin_weight;

        // Weights are two-decimal values; drop the float noise their sum accumulates
        let probability = ((score * 10_000.0).round() / 10_000.0).clamp(MIN_PROBABILITY, MAX_PROBABILITY);
        let risk_label = RiskLabel::from_probability(probability);

        log::debug!(
            target: LOG_TARGET,
            "Scored '{input}' (buffer {buffer} days): raw score {score:.4}, probability {probability:.2}, {}",
            risk_label.as_str()
        );

        let factor_breakdown = [
            FactorScore::new(Factor::LeadTimeBuffer, buffer_pct),
            FactorScore::new(Factor::RouteRisk, to_percentage(route_weight / ROUTE_FACTOR_SCALE * 100.0)),
            FactorScore::new(Factor::GeopoliticalRisk, to_percentage(input.geopolitical_risk() * 100.0)),
            FactorScore::new(Factor::WeatherSeverity, to_percentage(input.weather_severity() * 10.0)),
            FactorScore::new(Factor::TransportModeRisk, mode_pct),
            FactorScore::new(
                Factor::ProductCategory,
                to_percentage(product_weight / PRODUCT_FACTOR_SCALE * 60.0 + 10.0),
            ),
        ];

        RiskAssessment::new(probability, risk_label, factor_breakdown)
    }
}

impl Default for RiskScorer {
    /// A scorer using the built-in lookup tables.
    fn default() -> Self {
        Self::from_weights(&RiskWeights::default())
    }
}

fn lead_time_contribution(buffer: f64) -> (f64, u8) {
    LEAD_TIME_BUCKETS
        .iter()
        .find(|(upper, _, _)| buffer <= *upper)
        .map_or(LEAD_TIME_SLACK, |(_, weight, pct)| (*weight, *pct))
}

fn bucket_weight(value: f64, buckets: &[(f64, f64)], floor: f64) -> f64 {
    buckets
        .iter()
        .find(|(lower, _)| value > *lower)
        .map_or(floor, |(_, weight)| *weight)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::scoring::{ShipmentBuilder, WeightTable};

    #[expect(clippy::too_many_arguments, reason = "mirrors the shipment fields")]
    fn shipment(
        base: f64,
        scheduled: f64,
        route: &str,
        mode: TransportMode,
        product: &str,
        geo: f64,
        weather: f64,
        origin: &str,
    ) -> ShipmentInput {
        ShipmentBuilder::default()
            .base_lead_time_days(base)
            .scheduled_lead_time_days(scheduled)
            .route_type(route)
            .transport_mode(mode)
            .product_category(product)
            .geopolitical_risk(geo)
            .weather_severity(weather)
            .origin_city(origin)
            .build()
            .unwrap()
    }

    fn assert_probability(assessment: &RiskAssessment, expected: f64) {
        assert!(
            (assessment.probability - expected).abs() < 1e-9,
            "expected probability {expected}, got {}",
            assessment.probability
        );
    }

    #[test]
    fn test_moderate_scenario() {
        let input = shipment(18.0, 21.0, "Pacific", TransportMode::Sea, "Textiles", 0.55, 4.5, "Shanghai CN");
        let assessment = RiskScorer::default().predict(&input);

        assert_probability(&assessment, 0.34);
        assert_eq!(assessment.risk_label, RiskLabel::Moderate);
        assert_eq!(assessment.percent(), 34);

        let pcts: Vec<_> = assessment.factor_breakdown.iter().map(|f| f.percentage).collect();
        assert_eq!(pcts, [30, 50, 55, 45, 65, 22]);
    }

    #[test]
    fn test_high_scenario() {
        let input = shipment(10.0, 11.0, "Suez", TransportMode::Sea, "Perishables", 0.8, 8.0, "Santos BR");
        let assessment = RiskScorer::default().predict(&input);

        assert_probability(&assessment, 0.83);
        assert_eq!(assessment.risk_label, RiskLabel::High);
        assert_eq!(assessment.factor(Factor::LeadTimeBuffer), 90);
        assert_eq!(assessment.factor(Factor::RouteRisk), 100);
        assert_eq!(assessment.factor(Factor::ProductCategory), 70);
    }

    #[test]
    fn test_low_scenario() {
        let input = shipment(20.0, 30.0, "Intra-Asia", TransportMode::Air, "Raw Materials", 0.2, 1.0, "Tokyo JP");
        let assessment = RiskScorer::default().predict(&input);

        assert_probability(&assessment, 0.16);
        assert_eq!(assessment.risk_label, RiskLabel::Low);
        assert_eq!(assessment.factor(Factor::LeadTimeBuffer), 10);
        assert_eq!(assessment.factor(Factor::RouteRisk), 25);
        assert_eq!(assessment.factor(Factor::TransportModeRisk), 25);
        assert_eq!(assessment.factor(Factor::WeatherSeverity), 10);
    }

    #[test]
    fn test_sum_landing_on_threshold_is_low() {
        // 0.05 + 0.08 + 0.06 + 0.02 + 0.01 + 0.01 + 0.01 + 0.01
        let input = shipment(10.0, 13.0, "Atlantic", TransportMode::Air, "Textiles", 0.2, 1.0, "Tokyo, JP");
        let assessment = RiskScorer::default().predict(&input);

        assert_probability(&assessment, 0.25);
        assert_eq!(assessment.risk_label, RiskLabel::Low);
    }

    #[test]
    fn test_sum_landing_on_high_threshold_is_moderate() {
        // 0.05 + 0.18 + 0.16 + 0.02 + 0.01 + 0.01 + 0.02 + 0.05, which accumulates to 0.5000000000000001 unrounded
        let input = shipment(10.0, 12.0, "Suez", TransportMode::Air, "Pharmaceuticals", 0.1, 1.0, "Mumbai, IN");
        let assessment = RiskScorer::default().predict(&input);

        assert_eq!(assessment.probability.to_bits(), 0.5_f64.to_bits());
        assert_eq!(assessment.risk_label, RiskLabel::Moderate);
        assert_eq!(assessment.percent(), 50);
    }

    #[test]
    fn test_lead_time_buckets() {
        let scorer = RiskScorer::default();
        let cases = [(0.5, 90), (1.0, 90), (1.5, 60), (2.0, 60), (3.0, 30), (4.0, 30), (4.5, 10), (-5.0, 90)];
        for (buffer, expected) in cases {
            let input = shipment(20.0, 20.0 + buffer, "Pacific", TransportMode::Sea, "Textiles", 0.1, 1.0, "Tokyo, JP");
            assert_eq!(scorer.predict(&input).factor(Factor::LeadTimeBuffer), expected, "buffer {buffer}");
        }
    }

    #[test]
    fn test_bucket_boundaries_are_exclusive() {
        assert!((bucket_weight(0.7, GEOPOLITICAL_BUCKETS, GEOPOLITICAL_FLOOR) - 0.04).abs() < f64::EPSILON);
        assert!((bucket_weight(0.71, GEOPOLITICAL_BUCKETS, GEOPOLITICAL_FLOOR) - 0.08).abs() < f64::EPSILON);
        assert!((bucket_weight(0.5, GEOPOLITICAL_BUCKETS, GEOPOLITICAL_FLOOR) - 0.01).abs() < f64::EPSILON);
        assert!((bucket_weight(7.0, WEATHER_BUCKETS, WEATHER_FLOOR) - 0.04).abs() < f64::EPSILON);
        assert!((bucket_weight(5.0, WEATHER_BUCKETS, WEATHER_FLOOR) - 0.01).abs() < f64::EPSILON);
    }

    #[test]
    fn test_unknown_route_uses_default() {
        let scorer = RiskScorer::default();
        let known = scorer.predict(&shipment(18.0, 21.0, "Atlantic", TransportMode::Sea, "Textiles", 0.55, 4.5, "Tokyo, JP"));
        let unknown = scorer.predict(&shipment(18.0, 21.0, "Unknown", TransportMode::Sea, "Textiles", 0.55, 4.5, "Tokyo, JP"));

        // Atlantic carries exactly the default route weight
        assert_eq!(known, unknown);
    }

    #[test]
    fn test_origin_names_match_with_or_without_comma() {
        let scorer = RiskScorer::default();
        let a = scorer.predict(&shipment(10.0, 11.0, "Suez", TransportMode::Sea, "Perishables", 0.8, 8.0, "Santos, BR"));
        let b = scorer.predict(&shipment(10.0, 11.0, "Suez", TransportMode::Sea, "Perishables", 0.8, 8.0, "santos br"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_deterministic() {
        let scorer = RiskScorer::default();
        let input = shipment(18.0, 21.0, "Pacific", TransportMode::Sea, "Textiles", 0.55, 4.5, "Shanghai CN");
        assert_eq!(scorer.predict(&input), scorer.predict(&input));
    }

    #[test]
    fn test_clamped_above() {
        let mut weights = RiskWeights::default();
        weights.routes.default = 1.0;
        weights.products.default = 1.0;
        let scorer = RiskScorer::new(&weights).unwrap();

        let assessment = scorer.predict(&shipment(10.0, 11.0, "Arctic", TransportMode::Sea, "Ore", 0.8, 8.0, "Santos, BR"));
        assert_probability(&assessment, MAX_PROBABILITY);
        assert_eq!(assessment.risk_label, RiskLabel::High);
        assert_eq!(assessment.factor(Factor::RouteRisk), 100);
        assert_eq!(assessment.factor(Factor::ProductCategory), 100);
    }

    #[test]
    fn test_zero_tables_keep_fixed_terms() {
        let weights = RiskWeights {
            routes: WeightTable::from_entries(0.0, &[]),
            products: WeightTable::from_entries(0.0, &[]),
            origins: WeightTable::from_entries(0.0, &[]),
        };
        let scorer = RiskScorer::new(&weights).unwrap();

        // base, slack buffer, air, calm geopolitics and weather
        let assessment = scorer.predict(&shipment(10.0, 30.0, "Pacific", TransportMode::Air, "Textiles", 0.0, 0.0, "Tokyo, JP"));
        assert_probability(&assessment, 0.10);
        assert!(assessment.probability >= MIN_PROBABILITY);
    }

    #[test]
    fn test_probability_always_in_range() {
        let scorer = RiskScorer::default();
        let routes = ["Suez", "Commodity", "Pacific", "Atlantic", "Intra-Asia", "Unknown"];
        let products = ["Perishables", "Semiconductors", "Consumer Electronics", "Pharmaceuticals", "Textiles"];
        let origins = ["Santos, BR", "Mumbai, IN", "Shenzhen, CN", "Tokyo, JP"];

        for route in routes {
            for product in products {
                for origin in origins {
                    for mode in [TransportMode::Sea, TransportMode::Air] {
                        for (base, scheduled) in [(10.0, 10.5), (10.0, 12.0), (10.0, 14.0), (10.0, 40.0)] {
                            for (geo, weather) in [(0.0, 0.0), (0.6, 6.0), (1.0, 10.0)] {
                                let assessment =
                                    scorer.predict(&shipment(base, scheduled, route, mode, product, geo, weather, origin));
                                assert!((MIN_PROBABILITY..=MAX_PROBABILITY).contains(&assessment.probability));
                                assert_eq!(assessment.risk_label, RiskLabel::from_probability(assessment.probability));
                                assert!(assessment.factor_breakdown.iter().all(|f| f.percentage <= 100));
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_new_rejects_invalid_weights() {
        let mut weights = RiskWeights::default();
        weights.routes.default = 2.0;
        assert!(RiskScorer::new(&weights).is_err());
    }

    #[test]
    fn test_scorer_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RiskScorer>();
    }
}
