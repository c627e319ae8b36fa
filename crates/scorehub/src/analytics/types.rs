use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Failure modes of the analytics toolkit. Always carried as data, never
/// raised through the orchestration loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnalyticsError {
    /// The input sequence or indicator set was empty.
    EmptyInput,
    /// Paired series had different lengths, or fewer than two points.
    ShapeMismatch,
    /// The input has no variance (or no usable weight mass) to work with.
    DegenerateInput,
}

impl fmt::Display for AnalyticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AnalyticsError::EmptyInput => write!(f, "empty input"),
            AnalyticsError::ShapeMismatch => {
                write!(f, "series must have equal length and at least 2 values")
            }
            AnalyticsError::DegenerateInput => write!(f, "degenerate input: zero variance"),
        }
    }
}

impl std::error::Error for AnalyticsError {}

/// Round to 2 decimal places for presentation.
pub(crate) fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round to 4 decimal places, used for coefficients and slopes.
pub(crate) fn round4(value: f64) -> f64 {
    (value * 10_000.0).round() / 10_000.0
}

/// Descriptive statistics over one numeric series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatsSummary {
    pub count: usize,
    pub sum: f64,
    pub mean: f64,
    pub median: f64,
    pub min: f64,
    pub max: f64,
    pub range: f64,
    pub std_dev: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strength {
    Weak,
    Moderate,
    Strong,
}

impl fmt::Display for Strength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strength::Weak => write!(f, "weak"),
            Strength::Moderate => write!(f, "moderate"),
            Strength::Strong => write!(f, "strong"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Positive,
    Negative,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Positive => write!(f, "positive"),
            Direction::Negative => write!(f, "negative"),
        }
    }
}

/// Pearson correlation between two series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CorrelationReport {
    pub coefficient: f64,
    pub strength: Strength,
    pub direction: Direction,
    pub interpretation: String,
    pub r_squared: f64,
    pub sample_size: usize,
}

/// One indicator's share of a composite index.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Contribution {
    pub value: f64,
    pub weight: f64,
    pub contribution: f64,
}

/// Weighted aggregate of heterogeneous indicators into one score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompositeIndex {
    pub composite_index: f64,
    pub indicators: BTreeMap<String, f64>,
    pub weights_used: BTreeMap<String, f64>,
    pub components: BTreeMap<String, Contribution>,
}

/// Distance between a current value and a target, optionally against a
/// baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GapReport {
    pub current_value: f64,
    pub target_value: f64,
    pub absolute_gap: f64,
    pub gap_percentage: f64,
    pub achievement_rate: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub baseline: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_from_baseline: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub progress_percentage: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendKind {
    Stable,
    Increasing,
    Decreasing,
}

/// Ordinary least-squares fit over (year, value) pairs, with forecasts.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendReport {
    pub slope: f64,
    pub intercept: f64,
    pub trend_type: TrendKind,
    pub annual_change: f64,
    pub forecasts: BTreeMap<i64, f64>,
    pub data_points: usize,
}
