//! Deterministic analytics toolkit: pure numeric functions with structured
//! error values, no shared state.

pub mod correlation;
pub mod gap;
pub mod index;
pub mod stats;
pub mod trend;
pub mod types;

pub use correlation::correlation;
pub use gap::gap_analysis;
pub use index::composite_index;
pub use stats::describe;
pub use trend::trend;
pub use types::{
    AnalyticsError, CompositeIndex, Contribution, CorrelationReport, Direction, GapReport,
    StatsSummary, Strength, TrendKind, TrendReport,
};
