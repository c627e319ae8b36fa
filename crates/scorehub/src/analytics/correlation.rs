use super::types::{round4, AnalyticsError, CorrelationReport, Direction, Strength};

/// Pearson correlation between two equally long series.
///
/// Computed from population covariance over population standard deviations.
/// Either series having zero variance is a degenerate input.
pub fn correlation(xs: &[f64], ys: &[f64]) -> Result<CorrelationReport, AnalyticsError> {
    if xs.len() != ys.len() || xs.len() < 2 {
        return Err(AnalyticsError::ShapeMismatch);
    }

    let n = xs.len() as f64;
    let mean_x = xs.iter().sum::<f64>() / n;
    let mean_y = ys.iter().sum::<f64>() / n;

    let covariance = xs
        .iter()
        .zip(ys)
        .map(|(x, y)| (x - mean_x) * (y - mean_y))
        .sum::<f64>()
        / n;
    let std_x = (xs.iter().map(|x| (x - mean_x).powi(2)).sum::<f64>() / n).sqrt();
    let std_y = (ys.iter().map(|y| (y - mean_y).powi(2)).sum::<f64>() / n).sqrt();

    if std_x == 0.0 || std_y == 0.0 {
        return Err(AnalyticsError::DegenerateInput);
    }

    let r = covariance / (std_x * std_y);

    let strength = if r.abs() > 0.7 {
        Strength::Strong
    } else if r.abs() > 0.4 {
        Strength::Moderate
    } else {
        Strength::Weak
    };
    let direction = if r > 0.0 {
        Direction::Positive
    } else {
        Direction::Negative
    };

    Ok(CorrelationReport {
        coefficient: round4(r),
        strength,
        direction,
        interpretation: format!("{strength} {direction} correlation"),
        r_squared: round4(r * r),
        sample_size: xs.len(),
    })
}
