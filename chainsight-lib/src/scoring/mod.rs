//! Shipment delay-risk scoring.

mod assessment;
mod error;
mod factor;
mod risk_label;
mod scorer;
mod shipment;
mod transport_mode;
mod weights;

pub use assessment::{FACTOR_COUNT, RiskAssessment};
pub use error::ScoreError;
pub use factor::{Factor, FactorBand, FactorScore};
pub use risk_label::{HIGH_RISK_THRESHOLD, MODERATE_RISK_THRESHOLD, RiskLabel};
pub use scorer::{BASE_SCORE, MAX_PROBABILITY, MIN_PROBABILITY, RiskScorer};
pub use shipment::{RawShipment, ShipmentBuilder, ShipmentInput};
pub use transport_mode::TransportMode;
pub use weights::{
    DEFAULT_ORIGIN_WEIGHT, DEFAULT_PRODUCT_WEIGHT, DEFAULT_ROUTE_WEIGHT, ORIGIN_WEIGHTS, PRODUCT_WEIGHTS, ROUTE_WEIGHTS, RiskWeights,
    WeightTable, normalize_name,
};
