use super::types::{round2, AnalyticsError, StatsSummary};

/// Descriptive statistics for a numeric series.
///
/// Standard deviation and variance are the sample statistics (n − 1
/// denominator) and are 0 for a single-element series. All outputs are
/// rounded to 2 decimal places.
pub fn describe(values: &[f64]) -> Result<StatsSummary, AnalyticsError> {
    if values.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let count = values.len();
    let sum: f64 = values.iter().sum();
    let mean = sum / count as f64;

    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let median = if count % 2 == 1 {
        sorted[count / 2]
    } else {
        (sorted[count / 2 - 1] + sorted[count / 2]) / 2.0
    };

    let min = sorted[0];
    let max = sorted[count - 1];

    let (variance, std_dev) = if count > 1 {
        let variance =
            values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (count as f64 - 1.0);
        (variance, variance.sqrt())
    } else {
        (0.0, 0.0)
    };

    Ok(StatsSummary {
        count,
        sum: round2(sum),
        mean: round2(mean),
        median: round2(median),
        min: round2(min),
        max: round2(max),
        range: round2(max - min),
        std_dev: round2(std_dev),
        variance: round2(variance),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(describe(&[]), Err(AnalyticsError::EmptyInput));
    }

    #[test]
    fn single_value_has_zero_spread() {
        let summary = describe(&[7.5]).unwrap();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.mean, 7.5);
        assert_eq!(summary.median, 7.5);
        assert_eq!(summary.std_dev, 0.0);
        assert_eq!(summary.variance, 0.0);
        assert_eq!(summary.range, 0.0);
    }

    #[test]
    fn basic_series() {
        let summary = describe(&[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0]).unwrap();
        assert_eq!(summary.count, 8);
        assert_eq!(summary.sum, 40.0);
        assert_eq!(summary.mean, 5.0);
        assert_eq!(summary.median, 4.5);
        assert_eq!(summary.min, 2.0);
        assert_eq!(summary.max, 9.0);
        assert_eq!(summary.range, 7.0);
        // Sample variance of this classic series is 32/7.
        assert_eq!(summary.variance, round2(32.0 / 7.0));
    }

    #[test]
    fn median_of_odd_count_is_middle_element() {
        let summary = describe(&[9.0, 1.0, 5.0]).unwrap();
        assert_eq!(summary.median, 5.0);
    }

    #[test]
    fn mean_lies_between_min_and_max() {
        let cases: [&[f64]; 3] = [
            &[1.0, 2.0, 3.0],
            &[-10.0, 0.0, 25.5, 3.2],
            &[42.0],
        ];
        for values in cases {
            let summary = describe(values).unwrap();
            assert!(summary.mean >= summary.min && summary.mean <= summary.max);
        }
    }
}
