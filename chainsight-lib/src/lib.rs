#![doc(hidden)]
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! This is an implementation detail of the chainsight tool. Only the [`scoring`] module is meant
//! to be embedded by other front ends; everything else may change without warning.

// Core library for chainsight
//
// This library scores the delay risk of supply-chain shipments with a fixed additive
// heuristic and renders the results for the command line.
//
// # Module Organization
//
// - [`scoring`]: The risk scorer, its inputs, outputs, and lookup tables
// - [`catalog`]: Static reference statistics about the historical shipment set
// - [`commands`]: Command-line interface and orchestration
// - [`reports`]: Report generation in multiple formats
// - [`misc`]: Small shared helpers

pub type Result<T, E = ohno::AppError> = core::result::Result<T, E>;
pub(crate) type HashMap<K, V> = rustc_hash::FxHashMap<K, V>;

pub(crate) fn hash_map_with_capacity<K, V>(capacity: usize) -> HashMap<K, V> {
    HashMap::with_capacity_and_hasher(capacity, rustc_hash::FxBuildHasher)
}

macro_rules! declare_modules {
    ($($mod:ident),+ $(,)?) => {
        $(
            #[cfg(debug_assertions)]
            pub mod $mod;
            #[cfg(not(debug_assertions))]
            mod $mod;
        )+
    };
}

declare_modules!(catalog, commands, misc, reports);

pub mod scoring;

pub use crate::commands::{Host, run};
pub use crate::scoring::{RiskAssessment, RiskLabel, RiskScorer, ScoreError, ShipmentInput};
