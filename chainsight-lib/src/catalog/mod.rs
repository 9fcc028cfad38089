//! Reference statistics describing the historical shipment set the scoring tables were tuned on.
//!
//! Everything here is static data. Nothing is computed from live shipments.

mod data;

use clap::ValueEnum;
use serde::Serialize;
use strum::{Display, EnumIter};

pub use data::{
    CONFUSION_MATRIX, CORRELATIONS, DELAY_HISTOGRAM, DESTINATIONS, DISRUPTIONS, FEATURE_IMPORTANCE, FINDINGS, HIGHLIGHTS, KPIS,
    MODE_DELAYS, MODEL_BENCHMARKS, MONTHLY_VOLUME, ORIGIN_DELAYS, PRODUCT_DELAYS, ROUTE_DELAYS,
};

/// Headline numbers for the whole shipment set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Kpis {
    pub total_shipments: u32,
    pub origin_cities: u32,
    pub delayed_shipments: u32,
    pub delayed_rate_pct: f64,
    pub avg_delay_days: f64,
    pub max_delay_days: u32,
    pub best_roc_auc: f64,
}

impl Kpis {
    #[must_use]
    pub fn on_time_rate_pct(&self) -> f64 {
        100.0 - self.delayed_rate_pct
    }
}

/// Mean delay in days for one value of a categorical attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DelayAverage {
    pub label: &'static str,
    pub avg_delay_days: f64,
}

impl DelayAverage {
    #[must_use]
    pub const fn new(label: &'static str, avg_delay_days: f64) -> Self {
        Self { label, avg_delay_days }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyVolume {
    pub month: &'static str,
    pub shipments: u32,
    pub delayed: u32,
}

impl MonthlyVolume {
    #[must_use]
    pub const fn new(month: &'static str, shipments: u32, delayed: u32) -> Self {
        Self { month, shipments, delayed }
    }
}

/// Offline evaluation results of the candidate classifiers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ModelBenchmark {
    pub name: &'static str,
    pub accuracy_pct: f64,
    pub roc_auc: f64,
}

impl ModelBenchmark {
    #[must_use]
    pub const fn new(name: &'static str, accuracy_pct: f64, roc_auc: f64) -> Self {
        Self {
            name,
            accuracy_pct,
            roc_auc,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FeatureImportance {
    pub feature: &'static str,
    pub importance: f64,
}

impl FeatureImportance {
    #[must_use]
    pub const fn new(feature: &'static str, importance: f64) -> Self {
        Self { feature, importance }
    }
}

/// Number of shipments that arrived `delay_days` late. The last bin collects the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DelayBin {
    pub delay_days: u8,
    pub shipments: u32,
}

impl DelayBin {
    #[must_use]
    pub const fn new(delay_days: u8, shipments: u32) -> Self {
        Self { delay_days, shipments }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Correlation {
    pub feature: &'static str,
    pub coefficient: f64,
}

impl Correlation {
    #[must_use]
    pub const fn new(feature: &'static str, coefficient: f64) -> Self {
        Self { feature, coefficient }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DisruptionCount {
    pub event: &'static str,
    pub shipments: u32,
}

impl DisruptionCount {
    #[must_use]
    pub const fn new(event: &'static str, shipments: u32) -> Self {
        Self { event, shipments }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display)]
#[serde(rename_all = "UPPERCASE")]
pub enum Impact {
    #[strum(to_string = "HIGH")]
    High,
    #[strum(to_string = "MED")]
    Medium,
    #[strum(to_string = "LOW")]
    Low,
    #[strum(to_string = "NOTE")]
    Note,
}

/// An analyst note from exploring the shipment set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Finding {
    pub finding: &'static str,
    pub variable: &'static str,
    pub impact: Impact,
}

impl Finding {
    #[must_use]
    pub const fn new(finding: &'static str, variable: &'static str, impact: Impact) -> Self {
        Self {
            finding,
            variable,
            impact,
        }
    }
}

/// A headline figure with a short explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub label: &'static str,
    pub value: &'static str,
    pub note: &'static str,
}

impl Highlight {
    #[must_use]
    pub const fn new(label: &'static str, value: &'static str, note: &'static str) -> Self {
        Self { label, value, note }
    }
}

/// Predicted versus actual outcome counts for a classifier on the held-out test set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ConfusionMatrix {
    pub model: &'static str,
    pub true_positive: u32,
    pub false_positive: u32,
    pub false_negative: u32,
    pub true_negative: u32,
}

impl ConfusionMatrix {
    #[must_use]
    pub const fn new(model: &'static str, true_positive: u32, false_positive: u32, false_negative: u32, true_negative: u32) -> Self {
        Self {
            model,
            true_positive,
            false_positive,
            false_negative,
            true_negative,
        }
    }

    /// Number of test shipments the matrix covers.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.true_positive + self.false_positive + self.false_negative + self.true_negative
    }

    /// Share of test shipments classified correctly, in percent.
    #[must_use]
    pub fn accuracy_pct(&self) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }

        f64::from(self.true_positive + self.true_negative) / f64::from(total) * 100.0
    }
}

/// A group of related statistics that can be reported on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, EnumIter, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Section {
    Overview,
    Highlights,
    Routes,
    Products,
    Origins,
    Modes,
    Monthly,
    Models,
    Confusion,
    Features,
    Delays,
    Correlations,
    Disruptions,
    Findings,
}

/// The complete reference data set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Catalog {
    pub kpis: Kpis,
    pub highlights: &'static [Highlight],
    pub routes: &'static [DelayAverage],
    pub products: &'static [DelayAverage],
    pub origins: &'static [DelayAverage],
    pub modes: &'static [DelayAverage],
    pub destinations: &'static [&'static str],
    pub monthly: &'static [MonthlyVolume],
    pub models: &'static [ModelBenchmark],
    pub confusion: ConfusionMatrix,
    pub features: &'static [FeatureImportance],
    pub delays: &'static [DelayBin],
    pub correlations: &'static [Correlation],
    pub disruptions: &'static [DisruptionCount],
    pub findings: &'static [Finding],
}

impl Catalog {
    #[must_use]
    pub const fn builtin() -> Self {
        Self {
            kpis: KPIS,
            highlights: HIGHLIGHTS,
            routes: ROUTE_DELAYS,
            products: PRODUCT_DELAYS,
            origins: ORIGIN_DELAYS,
            modes: MODE_DELAYS,
            destinations: DESTINATIONS,
            monthly: MONTHLY_VOLUME,
            models: MODEL_BENCHMARKS,
            confusion: CONFUSION_MATRIX,
            features: FEATURE_IMPORTANCE,
            delays: DELAY_HISTOGRAM,
            correlations: CORRELATIONS,
            disruptions: DISRUPTIONS,
            findings: FINDINGS,
        }
    }

    /// The benchmark with the highest ROC-AUC.
    #[must_use]
    pub fn best_model(&self) -> Option<&'static ModelBenchmark> {
        let models: &'static [ModelBenchmark] = self.models;
        models.iter().max_by(|a, b| a.roc_auc.total_cmp(&b.roc_auc))
    }

    /// Total number of shipments covered by the delay histogram.
    #[must_use]
    pub fn histogram_total(&self) -> u32 {
        self.delays.iter().map(|bin| bin.shipments).sum()
    }

    /// Shipments that arrived on time according to the delay histogram.
    #[must_use]
    pub fn on_time_shipments(&self) -> u32 {
        self.delays
            .iter()
            .find(|bin| bin.delay_days == 0)
            .map_or(0, |bin| bin.shipments)
    }
}
