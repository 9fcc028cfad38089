use serde::Serialize;
use strum::{EnumIter, IntoStaticStr};

/// Probabilities above this are labelled [`RiskLabel::High`].
pub const HIGH_RISK_THRESHOLD: f64 = 0.5;

/// Probabilities above this (and not above [`HIGH_RISK_THRESHOLD`]) are labelled [`RiskLabel::Moderate`].
pub const MODERATE_RISK_THRESHOLD: f64 = 0.25;

/// The delay-risk level assigned to a shipment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, EnumIter, IntoStaticStr)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskLabel {
    Low,
    Moderate,
    High,
}

impl RiskLabel {
    #[must_use]
    pub fn from_probability(probability: f64) -> Self {
        if probability > HIGH_RISK_THRESHOLD {
            Self::High
        } else if probability > MODERATE_RISK_THRESHOLD {
            Self::Moderate
        } else {
            Self::Low
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

impl core::fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Low => write!(f, "LOW RISK"),
            Self::Moderate => write!(f, "MODERATE RISK"),
            Self::High => write!(f, "HIGH DELAY RISK"),
        }
    }
}
