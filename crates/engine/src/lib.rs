//! Multi-source risk aggregation engine.
//!
//! Fans out one call per risk dimension to a [`probe_providers::RiskProvider`],
//! absorbs provider failures into zero-risk defaults, and combines the five
//! dimension results into a single composite score in [0, 1].

pub mod aggregator;
pub mod combiner;
pub mod outcome;

pub use aggregator::RiskAggregator;
pub use combiner::{RiskBundle, RiskWeights};
pub use outcome::DimensionOutcome;
