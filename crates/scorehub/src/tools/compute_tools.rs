//! Numeric tools: thin adapters from JSON params onto the analytics
//! toolkit, with analytics failures mapped into error envelopes.

use std::collections::BTreeMap;

use serde_json::{json, Value};

use super::outcome::{ToolErrorKind, ToolOutcome};
use super::registry::{ToolContext, ToolRegistry};
use super::schema::ToolDescriptor;
use crate::analytics;

pub fn register(registry: &mut ToolRegistry) {
    registry.register(
        ToolDescriptor::new(
            "compute_statistics",
            "Descriptive statistics (mean, median, std dev, ...) over a numeric series",
            json!({
                "type": "object",
                "required": ["values"],
                "properties": {
                    "values": {"type": "array"},
                    "label": {"type": "string"},
                }
            }),
        ),
        Box::new(compute_statistics),
    );

    registry.register(
        ToolDescriptor::new(
            "compute_correlation",
            "Pearson correlation between two equal-length numeric series",
            json!({
                "type": "object",
                "required": ["x_values", "y_values"],
                "properties": {
                    "x_values": {"type": "array"},
                    "y_values": {"type": "array"},
                    "x_label": {"type": "string"},
                    "y_label": {"type": "string"},
                }
            }),
        ),
        Box::new(compute_correlation),
    );

    registry.register(
        ToolDescriptor::new(
            "compute_composite_index",
            "Weighted composite score from named indicators",
            json!({
                "type": "object",
                "required": ["indicators"],
                "properties": {
                    "indicators": {"type": "object"},
                    "weights": {"type": "object"},
                }
            }),
        ),
        Box::new(compute_composite_index),
    );

    registry.register(
        ToolDescriptor::new(
            "compute_gap_analysis",
            "Gap between a current value and a target, optionally from a baseline",
            json!({
                "type": "object",
                "required": ["current", "target"],
                "properties": {
                    "current": {"type": "number"},
                    "target": {"type": "number"},
                    "baseline": {"type": "number"},
                }
            }),
        ),
        Box::new(compute_gap_analysis),
    );

    registry.register(
        ToolDescriptor::new(
            "compute_trend",
            "Linear trend over (year, value) pairs with 5- and 10-year forecasts",
            json!({
                "type": "object",
                "required": ["values", "years"],
                "properties": {
                    "values": {"type": "array"},
                    "years": {"type": "array"},
                }
            }),
        ),
        Box::new(compute_trend),
    );
}

fn number_series(value: &Value, field: &str) -> Result<Vec<f64>, ToolOutcome> {
    let arr = value[field].as_array().ok_or_else(|| {
        ToolOutcome::err(ToolErrorKind::InvalidParams, format!("{field} must be an array"))
    })?;
    arr.iter()
        .map(|v| {
            v.as_f64().ok_or_else(|| {
                ToolOutcome::err(
                    ToolErrorKind::InvalidParams,
                    format!("{field} must contain only numbers"),
                )
            })
        })
        .collect()
}

fn number_map(value: &Value, field: &str) -> Result<BTreeMap<String, f64>, ToolOutcome> {
    let obj = value[field].as_object().ok_or_else(|| {
        ToolOutcome::err(ToolErrorKind::InvalidParams, format!("{field} must be an object"))
    })?;
    obj.iter()
        .map(|(key, v)| {
            v.as_f64().map(|n| (key.clone(), n)).ok_or_else(|| {
                ToolOutcome::err(
                    ToolErrorKind::InvalidParams,
                    format!("{field}.{key} must be a number"),
                )
            })
        })
        .collect()
}

fn compute_statistics(params: &Value, _ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let values = match number_series(params, "values") {
        Ok(values) => values,
        Err(outcome) => return outcome,
    };
    let summary = match analytics::describe(&values) {
        Ok(summary) => summary,
        Err(err) => return ToolOutcome::Err(err.into()),
    };
    let mut payload = json!(summary);
    if let Some(label) = params.get("label").and_then(Value::as_str) {
        payload["label"] = json!(label);
    }
    ToolOutcome::ok(payload)
}

fn compute_correlation(params: &Value, _ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let xs = match number_series(params, "x_values") {
        Ok(xs) => xs,
        Err(outcome) => return outcome,
    };
    let ys = match number_series(params, "y_values") {
        Ok(ys) => ys,
        Err(outcome) => return outcome,
    };
    let report = match analytics::correlation(&xs, &ys) {
        Ok(report) => report,
        Err(err) => return ToolOutcome::Err(err.into()),
    };
    let mut payload = json!(report);
    if let Some(label) = params.get("x_label").and_then(Value::as_str) {
        payload["x_label"] = json!(label);
    }
    if let Some(label) = params.get("y_label").and_then(Value::as_str) {
        payload["y_label"] = json!(label);
    }
    ToolOutcome::ok(payload)
}

fn compute_composite_index(params: &Value, _ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let indicators = match number_map(params, "indicators") {
        Ok(map) => map,
        Err(outcome) => return outcome,
    };
    let weights = if params.get("weights").map_or(false, |w| !w.is_null()) {
        match number_map(params, "weights") {
            Ok(map) => Some(map),
            Err(outcome) => return outcome,
        }
    } else {
        None
    };
    match analytics::composite_index(&indicators, weights.as_ref()) {
        Ok(index) => ToolOutcome::ok(json!(index)),
        Err(err) => ToolOutcome::Err(err.into()),
    }
}

fn compute_gap_analysis(params: &Value, _ctx: &mut ToolContext<'_>) -> ToolOutcome {
    // Schema already guarantees current/target are numbers.
    let current = params["current"].as_f64().unwrap_or_default();
    let target = params["target"].as_f64().unwrap_or_default();
    let baseline = params.get("baseline").and_then(Value::as_f64);
    match analytics::gap_analysis(current, target, baseline) {
        Ok(report) => ToolOutcome::ok(json!(report)),
        Err(err) => ToolOutcome::Err(err.into()),
    }
}

fn compute_trend(params: &Value, _ctx: &mut ToolContext<'_>) -> ToolOutcome {
    let values = match number_series(params, "values") {
        Ok(values) => values,
        Err(outcome) => return outcome,
    };
    let years: Vec<i64> = match params["years"].as_array() {
        Some(arr) => {
            let mut years = Vec::with_capacity(arr.len());
            for v in arr {
                match v.as_i64() {
                    Some(year) => years.push(year),
                    None => {
                        return ToolOutcome::err(
                            ToolErrorKind::InvalidParams,
                            "years must contain only integers",
                        )
                    }
                }
            }
            years
        }
        None => return ToolOutcome::err(ToolErrorKind::InvalidParams, "years must be an array"),
    };
    match analytics::trend(&values, &years) {
        Ok(report) => ToolOutcome::ok(json!(report)),
        Err(err) => ToolOutcome::Err(err.into()),
    }
}
