//! Data-query tools over the bank hub: source listing, country profiles,
//! per-bank queries, comparisons, and regional aggregates.

use std::sync::Arc;

use serde_json::{json, Map, Value};

use super::outcome::{ToolErrorKind, ToolOutcome};
use super::registry::ToolRegistry;
use super::schema::ToolDescriptor;
use crate::analytics;
use crate::databank::DataHub;

pub fn register(registry: &mut ToolRegistry, hub: Arc<DataHub>) {
    let h = hub.clone();
    registry.register(
        ToolDescriptor::new(
            "list_data_sources",
            "List the available data sources and the countries they cover",
            json!({"type": "object"}),
        ),
        Box::new(move |_params, _ctx| list_data_sources(&h)),
    );

    let h = hub.clone();
    registry.register(
        ToolDescriptor::new(
            "get_country_profile",
            "Full profile for one country, merged across every data source",
            json!({
                "type": "object",
                "required": ["country"],
                "properties": {"country": {"type": "string"}}
            }),
        ),
        Box::new(move |params, _ctx| get_country_profile(&h, params)),
    );

    let h = hub.clone();
    registry.register(
        ToolDescriptor::new(
            "query_bank",
            "Query one data source for one country",
            json!({
                "type": "object",
                "required": ["bank", "country"],
                "properties": {
                    "bank": {"type": "string"},
                    "country": {"type": "string"},
                }
            }),
        ),
        Box::new(move |params, _ctx| query_bank(&h, params)),
    );

    let h = hub.clone();
    registry.register(
        ToolDescriptor::new(
            "compare_countries",
            "Side-by-side records for two or more countries",
            json!({
                "type": "object",
                "required": ["countries"],
                "properties": {
                    "countries": {"type": "array"},
                    "banks": {"type": "array"},
                }
            }),
        ),
        Box::new(move |params, _ctx| compare_countries(&h, params)),
    );

    let h = hub;
    registry.register(
        ToolDescriptor::new(
            "get_regional_data",
            "Scorecard data for every country in a region, with aggregate statistics",
            json!({
                "type": "object",
                "required": ["region"],
                "properties": {"region": {"type": "string"}}
            }),
        ),
        Box::new(move |params, _ctx| get_regional_data(&h, params)),
    );
}

fn list_data_sources(hub: &DataHub) -> ToolOutcome {
    ToolOutcome::ok(json!({
        "sources": hub.sources(),
        "countries_covered": hub.catalog().countries().len(),
    }))
}

fn get_country_profile(hub: &DataHub, params: &Value) -> ToolOutcome {
    let query = params["country"].as_str().unwrap_or_default();
    let country = match hub.resolve(query) {
        Some(country) => country,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::NotFound,
                format!("no country matching '{query}'"),
            )
        }
    };

    let mut data = Map::new();
    for bank in hub.banks() {
        if let Some(record) = bank.country_record(country.code) {
            data.insert(bank.id().to_string(), record);
        }
    }

    ToolOutcome::ok(json!({
        "country": country,
        "data": data,
    }))
}

fn query_bank(hub: &DataHub, params: &Value) -> ToolOutcome {
    let bank_id = params["bank"].as_str().unwrap_or_default();
    let bank = match hub.bank(bank_id) {
        Some(bank) => bank,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::NotFound,
                format!("unknown data source '{bank_id}'"),
            )
        }
    };

    let query = params["country"].as_str().unwrap_or_default();
    let country = match hub.resolve(query) {
        Some(country) => country,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::NotFound,
                format!("no country matching '{query}'"),
            )
        }
    };

    match bank.country_record(country.code) {
        Some(record) => ToolOutcome::ok(json!({
            "bank": bank.id(),
            "country": country.name,
            "record": record,
        })),
        None => ToolOutcome::err(
            ToolErrorKind::NotFound,
            format!("'{}' has no data for {}", bank.id(), country.name),
        ),
    }
}

fn compare_countries(hub: &DataHub, params: &Value) -> ToolOutcome {
    let queries = match params["countries"].as_array() {
        Some(arr) => arr,
        None => return ToolOutcome::err(ToolErrorKind::InvalidParams, "countries must be an array"),
    };

    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();
    for query in queries {
        let q = query.as_str().unwrap_or_default();
        match hub.resolve(q) {
            Some(country) => resolved.push(country),
            None => unresolved.push(q.to_string()),
        }
    }
    if resolved.len() < 2 {
        return ToolOutcome::err(
            ToolErrorKind::InvalidParams,
            "need at least two resolvable countries to compare",
        );
    }

    let banks: Vec<_> = match params.get("banks").and_then(Value::as_array) {
        Some(ids) => {
            let mut selected = Vec::with_capacity(ids.len());
            for id in ids {
                let id = id.as_str().unwrap_or_default();
                match hub.bank(id) {
                    Some(bank) => selected.push(bank.clone()),
                    None => {
                        return ToolOutcome::err(
                            ToolErrorKind::NotFound,
                            format!("unknown data source '{id}'"),
                        )
                    }
                }
            }
            selected
        }
        None => hub.banks().to_vec(),
    };

    let mut comparison = Map::new();
    for bank in &banks {
        let mut per_country = Map::new();
        for country in &resolved {
            if let Some(record) = bank.country_record(country.code) {
                per_country.insert(country.name.to_string(), record);
            }
        }
        comparison.insert(bank.id().to_string(), Value::Object(per_country));
    }

    let mut payload = json!({
        "countries": resolved.iter().map(|c| c.name).collect::<Vec<_>>(),
        "comparison": comparison,
    });
    if !unresolved.is_empty() {
        payload["unresolved"] = json!(unresolved);
    }
    ToolOutcome::ok(payload)
}

fn get_regional_data(hub: &DataHub, params: &Value) -> ToolOutcome {
    let region = params["region"].as_str().unwrap_or_default();
    let countries = hub.catalog().in_region(region);
    if countries.is_empty() {
        return ToolOutcome::err(
            ToolErrorKind::NotFound,
            format!("no countries in region matching '{region}'"),
        );
    }

    let scorecard = hub.bank("unwomen");
    let mut rows = Vec::new();
    let mut scores = Vec::new();
    for country in &countries {
        let score = scorecard
            .as_ref()
            .and_then(|bank| bank.indicator(country.code, "overall_score"));
        if let Some(score) = score {
            scores.push(score);
        }
        rows.push(json!({
            "code": country.code,
            "name": country.name,
            "region": country.region,
            "overall_score": score,
        }));
    }

    let mut payload = json!({
        "region": region,
        "countries": rows,
    });
    if let Ok(summary) = analytics::describe(&scores) {
        payload["score_statistics"] = json!(summary);
    }
    ToolOutcome::ok(payload)
}
