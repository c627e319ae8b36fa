use super::types::{round2, AnalyticsError, GapReport};

/// Gap between a current value and a target, optionally measured against a
/// baseline. Percentages are 0 whenever their denominator is 0.
pub fn gap_analysis(
    current: f64,
    target: f64,
    baseline: Option<f64>,
) -> Result<GapReport, AnalyticsError> {
    let gap = target - current;
    let gap_percentage = if target != 0.0 { gap / target * 100.0 } else { 0.0 };
    let achievement_rate = if target != 0.0 {
        current / target * 100.0
    } else {
        0.0
    };

    let mut report = GapReport {
        current_value: current,
        target_value: target,
        absolute_gap: round2(gap),
        gap_percentage: round2(gap_percentage),
        achievement_rate: round2(achievement_rate),
        baseline: None,
        progress_from_baseline: None,
        progress_percentage: None,
    };

    if let Some(baseline) = baseline {
        let progress = current - baseline;
        let total_needed = target - baseline;
        let progress_percentage = if total_needed != 0.0 {
            progress / total_needed * 100.0
        } else {
            0.0
        };
        report.baseline = Some(baseline);
        report.progress_from_baseline = Some(round2(progress));
        report.progress_percentage = Some(round2(progress_percentage));
    }

    Ok(report)
}
