mod console;
mod csv;
mod json;

use crate::scoring::{RiskAssessment, ShipmentInput};
use std::sync::Arc;

pub use console::{ConsoleStyle, generate as generate_console, generate_catalog as generate_catalog_console};
pub use self::csv::generate as generate_csv;
pub use json::{generate as generate_json, generate_catalog as generate_catalog_json};

/// A shipment paired with the assessment it received.
#[derive(Debug, Clone)]
pub struct ScoredShipment {
    pub id: Arc<str>,
    pub input: ShipmentInput,
    pub assessment: RiskAssessment,
}

impl ScoredShipment {
    #[must_use]
    pub fn new(id: impl AsRef<str>, input: ShipmentInput, assessment: RiskAssessment) -> Self {
        Self {
            id: Arc::from(id.as_ref()),
            input,
            assessment,
        }
    }
}
