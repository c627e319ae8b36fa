use std::collections::BTreeMap;

use super::types::{round2, round4, AnalyticsError, TrendKind, TrendReport};

/// Linear trend over (year, value) pairs with forecasts 5 and 10 years past
/// the last observed year.
pub fn trend(values: &[f64], years: &[i64]) -> Result<TrendReport, AnalyticsError> {
    if values.len() != years.len() || values.len() < 2 {
        return Err(AnalyticsError::ShapeMismatch);
    }

    let n = values.len() as f64;
    let mean_x = years.iter().map(|y| *y as f64).sum::<f64>() / n;
    let mean_y = values.iter().sum::<f64>() / n;

    let numerator: f64 = years
        .iter()
        .zip(values)
        .map(|(x, y)| (*x as f64 - mean_x) * (y - mean_y))
        .sum();
    let denominator: f64 = years.iter().map(|x| (*x as f64 - mean_x).powi(2)).sum();

    if denominator == 0.0 {
        return Err(AnalyticsError::DegenerateInput);
    }

    let slope = numerator / denominator;
    let intercept = mean_y - slope * mean_x;

    let last_year = *years.iter().max().expect("non-empty years");
    let mut forecasts = BTreeMap::new();
    for horizon in [5, 10] {
        let year = last_year + horizon;
        forecasts.insert(year, round2(intercept + slope * year as f64));
    }

    let trend_type = if slope.abs() < 0.1 {
        TrendKind::Stable
    } else if slope > 0.0 {
        TrendKind::Increasing
    } else {
        TrendKind::Decreasing
    };

    Ok(TrendReport {
        slope: round4(slope),
        intercept: round2(intercept),
        trend_type,
        annual_change: round2(slope),
        forecasts,
        data_points: values.len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_mismatch_is_rejected() {
        assert_eq!(
            trend(&[1.0, 2.0], &[2020]),
            Err(AnalyticsError::ShapeMismatch)
        );
    }

    #[test]
    fn single_point_is_rejected() {
        assert_eq!(trend(&[1.0], &[2020]), Err(AnalyticsError::ShapeMismatch));
    }

    #[test]
    fn repeated_year_is_degenerate() {
        assert_eq!(
            trend(&[1.0, 2.0], &[2020, 2020]),
            Err(AnalyticsError::DegenerateInput)
        );
    }

    #[test]
    fn linear_series_fits_exactly() {
        let report = trend(&[10.0, 20.0, 30.0], &[2020, 2021, 2022]).unwrap();
        assert_eq!(report.slope, 10.0);
        assert_eq!(report.trend_type, TrendKind::Increasing);
        assert_eq!(report.data_points, 3);
        // Forecasts lie on the fitted line.
        assert_eq!(report.forecasts[&2027], 80.0);
        assert_eq!(report.forecasts[&2032], 130.0);
    }

    #[test]
    fn falling_series_is_decreasing() {
        let report = trend(&[30.0, 20.0, 10.0], &[2020, 2021, 2022]).unwrap();
        assert_eq!(report.slope, -10.0);
        assert_eq!(report.trend_type, TrendKind::Decreasing);
    }

    #[test]
    fn near_flat_series_is_stable() {
        let report = trend(&[50.0, 50.05, 50.1], &[2020, 2021, 2022]).unwrap();
        assert_eq!(report.trend_type, TrendKind::Stable);
    }
}
