//! Lookup tables mapping route, product and origin names to score contributions.

use crate::{HashMap, Result, hash_map_with_capacity};
use ohno::{app_err, bail};
use serde::Deserialize;
use std::collections::BTreeMap;

pub const DEFAULT_ROUTE_WEIGHT: f64 = 0.06;
pub const DEFAULT_PRODUCT_WEIGHT: f64 = 0.01;
pub const DEFAULT_ORIGIN_WEIGHT: f64 = 0.01;

pub const ROUTE_WEIGHTS: &[(&str, f64)] = &[
    ("Suez", 0.16),
    ("Commodity", 0.12),
    ("Pacific", 0.08),
    ("Atlantic", 0.06),
    ("Intra-Asia", 0.04),
];

pub const PRODUCT_WEIGHTS: &[(&str, f64)] = &[
    ("Perishables", 0.05),
    ("Semiconductors", 0.04),
    ("Consumer Electronics", 0.03),
    ("Pharmaceuticals", 0.02),
];

pub const ORIGIN_WEIGHTS: &[(&str, f64)] = &[("Santos, BR", 0.06), ("Mumbai, IN", 0.05), ("Shenzhen, CN", 0.03)];

/// A named set of weights with a fallback for names that are not listed.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WeightTable {
    /// Weight used for any name missing from `entries`
    pub default: f64,

    #[serde(default)]
    pub entries: BTreeMap<String, f64>,
}

impl WeightTable {
    #[must_use]
    pub fn from_entries(default: f64, entries: &[(&str, f64)]) -> Self {
        Self {
            default,
            entries: entries.iter().map(|(name, weight)| ((*name).to_string(), *weight)).collect(),
        }
    }

    /// The largest weight this table can produce, including its default.
    #[must_use]
    pub fn max_weight(&self) -> f64 {
        self.entries.values().copied().fold(self.default, f64::max)
    }

    fn validate(&self, table: &str) -> Result<()> {
        check_weight(table, "default", self.default)?;

        let mut seen = hash_map_with_capacity::<String, &str>(self.entries.len());
        for (name, weight) in &self.entries {
            check_weight(table, name, *weight)?;

            let key = normalize_name(name);
            if key.is_empty() {
                bail!("{table}: entry '{name}' has no usable characters");
            }

            if let Some(previous) = seen.insert(key, name) {
                bail!("{table}: entries '{previous}' and '{name}' refer to the same name");
            }
        }

        Ok(())
    }
}

fn check_weight(table: &str, name: &str, weight: f64) -> Result<()> {
    if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
        return Err(app_err!("{table}: weight for '{name}' must be between 0 and 1, got {weight}"));
    }

    Ok(())
}

/// The three lookup tables consulted by the scorer.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RiskWeights {
    pub routes: WeightTable,
    pub products: WeightTable,
    pub origins: WeightTable,
}

impl RiskWeights {
    /// Check that every weight is within [0, 1] and no two entries collide after normalization.
    pub fn validate(&self) -> Result<()> {
        self.routes.validate("routes")?;
        self.products.validate("products")?;
        self.origins.validate("origins")?;
        Ok(())
    }
}

impl Default for RiskWeights {
    fn default() -> Self {
        Self {
            routes: WeightTable::from_entries(DEFAULT_ROUTE_WEIGHT, ROUTE_WEIGHTS),
            products: WeightTable::from_entries(DEFAULT_PRODUCT_WEIGHT, PRODUCT_WEIGHTS),
            origins: WeightTable::from_entries(DEFAULT_ORIGIN_WEIGHT, ORIGIN_WEIGHTS),
        }
    }
}

/// A [`WeightTable`] compiled for lookups by normalized name.
#[derive(Debug, Clone)]
pub(crate) struct WeightIndex {
    default: f64,
    weights: HashMap<String, f64>,
}

impl WeightIndex {
    pub(crate) fn new(table: &WeightTable) -> Self {
        let mut weights = hash_map_with_capacity(table.entries.len());
        for (name, weight) in &table.entries {
            _ = weights.insert(normalize_name(name), *weight);
        }

        Self {
            default: table.default,
            weights,
        }
    }

    pub(crate) fn get(&self, name: &str) -> f64 {
        self.weights.get(&normalize_name(name)).copied().unwrap_or(self.default)
    }
}

/// Fold a display name into a lookup key.
///
/// Letters are lowercased, and every run of punctuation or whitespace becomes a single
/// space, so `"Santos, BR"`, `"santos br"` and `"SANTOS-BR"` share a key.
#[must_use]
pub fn normalize_name(name: &str) -> String {
    let mut key = String::with_capacity(name.len());
    let mut pending_space = false;

    for c in name.chars() {
        if c.is_alphanumeric() {
            if pending_space && !key.is_empty() {
                key.push(' ');
            }
            pending_space = false;
            key.extend(c.to_lowercase());
        } else {
            pending_space = true;
        }
    }

    key
}
