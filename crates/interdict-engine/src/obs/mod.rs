//! Engine observability.

pub mod counters;

pub use counters::DecisionCounters;
