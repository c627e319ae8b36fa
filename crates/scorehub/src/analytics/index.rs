use std::collections::BTreeMap;

use super::types::{round2, AnalyticsError, CompositeIndex, Contribution};

/// Weighted composite index over named indicators.
///
/// Omitted weights mean equal weighting. Supplied weights are normalized to
/// sum to 1 before the weighted sum; an indicator absent from the weight map
/// gets weight 0. Weights are reported unrounded so they always sum to 1.
pub fn composite_index(
    indicators: &BTreeMap<String, f64>,
    weights: Option<&BTreeMap<String, f64>>,
) -> Result<CompositeIndex, AnalyticsError> {
    if indicators.is_empty() {
        return Err(AnalyticsError::EmptyInput);
    }

    let raw_weights: BTreeMap<String, f64> = match weights {
        Some(weights) => weights.clone(),
        None => indicators.keys().map(|k| (k.clone(), 1.0)).collect(),
    };

    let total: f64 = raw_weights.values().sum();
    if total <= 0.0 {
        return Err(AnalyticsError::DegenerateInput);
    }

    let normalized: BTreeMap<String, f64> = raw_weights
        .iter()
        .map(|(k, v)| (k.clone(), v / total))
        .collect();

    let mut components = BTreeMap::new();
    let mut weighted_sum = 0.0;
    for (name, value) in indicators {
        let weight = normalized.get(name).copied().unwrap_or(0.0);
        weighted_sum += value * weight;
        components.insert(
            name.clone(),
            Contribution {
                value: *value,
                weight,
                contribution: round2(value * weight),
            },
        );
    }

    Ok(CompositeIndex {
        composite_index: round2(weighted_sum),
        indicators: indicators.clone(),
        weights_used: normalized,
        components,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indicators(pairs: &[(&str, f64)]) -> BTreeMap<String, f64> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn empty_indicators_are_rejected() {
        assert_eq!(
            composite_index(&BTreeMap::new(), None),
            Err(AnalyticsError::EmptyInput)
        );
    }

    #[test]
    fn equal_weights_average_the_indicators() {
        let result =
            composite_index(&indicators(&[("a", 40.0), ("b", 60.0)]), None).unwrap();
        assert_eq!(result.composite_index, 50.0);
        assert_eq!(result.weights_used["a"], 0.5);
        assert_eq!(result.weights_used["b"], 0.5);
    }

    #[test]
    fn normalized_weights_sum_to_one() {
        for scale in [0.001, 1.0, 7.0, 1_000_000.0] {
            let weights = indicators(&[("a", 3.0 * scale), ("b", 1.0 * scale), ("c", 6.0 * scale)]);
            let result = composite_index(
                &indicators(&[("a", 10.0), ("b", 20.0), ("c", 30.0)]),
                Some(&weights),
            )
            .unwrap();
            let sum: f64 = result.weights_used.values().sum();
            assert!((sum - 1.0).abs() < 1e-9, "scale {scale}: weights sum {sum}");
        }
    }

    #[test]
    fn components_carry_contribution_breakdown() {
        let weights = indicators(&[("a", 1.0), ("b", 3.0)]);
        let result = composite_index(
            &indicators(&[("a", 80.0), ("b", 40.0)]),
            Some(&weights),
        )
        .unwrap();
        assert_eq!(result.components["a"].weight, 0.25);
        assert_eq!(result.components["a"].contribution, 20.0);
        assert_eq!(result.components["b"].contribution, 30.0);
        assert_eq!(result.composite_index, 50.0);
    }

    #[test]
    fn indicator_missing_from_weight_map_gets_zero_weight() {
        let weights = indicators(&[("a", 2.0)]);
        let result = composite_index(
            &indicators(&[("a", 10.0), ("b", 99.0)]),
            Some(&weights),
        )
        .unwrap();
        assert_eq!(result.components["b"].weight, 0.0);
        assert_eq!(result.composite_index, 10.0);
    }

    #[test]
    fn zero_weight_total_is_degenerate() {
        let weights = indicators(&[("a", 0.0), ("b", 0.0)]);
        assert_eq!(
            composite_index(&indicators(&[("a", 1.0), ("b", 2.0)]), Some(&weights)),
            Err(AnalyticsError::DegenerateInput)
        );
    }
}
