//! Synthesis tools: cross-source correlation studies and per-country
//! policy briefs.

use std::sync::Arc;

use serde_json::{json, Value};

use super::outcome::{ToolErrorKind, ToolOutcome};
use super::registry::ToolRegistry;
use super::schema::ToolDescriptor;
use crate::analytics;
use crate::databank::synthetic::DIMENSIONS;
use crate::databank::{Country, DataHub};

pub fn register(registry: &mut ToolRegistry, hub: Arc<DataHub>) {
    let h = hub.clone();
    registry.register(
        ToolDescriptor::new(
            "cross_reference_analysis",
            "Correlate indicators across data sources (climate_gender_nexus, \
             care_climate_burden, economic_health_link, vulnerability_inequality)",
            json!({
                "type": "object",
                "required": ["analysis_type"],
                "properties": {
                    "analysis_type": {"type": "string"},
                    "region": {"type": "string"},
                }
            }),
        ),
        Box::new(move |params, _ctx| cross_reference_analysis(&h, params)),
    );

    let h = hub;
    registry.register(
        ToolDescriptor::new(
            "generate_policy_brief",
            "Policy brief for one country: key indicators, weakest dimensions, recommendations",
            json!({
                "type": "object",
                "required": ["country"],
                "properties": {"country": {"type": "string"}}
            }),
        ),
        Box::new(move |params, _ctx| generate_policy_brief(&h, params)),
    );
}

/// (bank, indicator) pair on each axis of one cross-source study.
struct Study {
    x: (&'static str, &'static str),
    y: (&'static str, &'static str),
    framing: &'static str,
}

fn study_for(analysis_type: &str) -> Option<Study> {
    match analysis_type {
        "climate_gender_nexus" => Some(Study {
            x: ("climate", "climate_vulnerability_index"),
            y: ("unwomen", "overall_score"),
            framing: "climate vulnerability vs gender-responsive policy score",
        }),
        "care_climate_burden" => Some(Study {
            x: ("ilo", "unpaid_care_hours_female"),
            y: ("climate", "climate_vulnerability_index"),
            framing: "female unpaid care hours vs climate vulnerability",
        }),
        "economic_health_link" => Some(Study {
            x: ("worldbank", "female_labor_force_participation"),
            y: ("who", "maternal_mortality_ratio"),
            framing: "female labor force participation vs maternal mortality",
        }),
        "vulnerability_inequality" => Some(Study {
            x: ("climate", "climate_vulnerability_index"),
            y: ("undp", "gender_inequality_index"),
            framing: "climate vulnerability vs gender inequality index",
        }),
        _ => None,
    }
}

fn cross_reference_analysis(hub: &DataHub, params: &Value) -> ToolOutcome {
    let analysis_type = params["analysis_type"].as_str().unwrap_or_default();
    let study = match study_for(analysis_type) {
        Some(study) => study,
        None => {
            return ToolOutcome::err(
                ToolErrorKind::InvalidParams,
                format!(
                    "unknown analysis_type '{analysis_type}'; expected one of \
                     climate_gender_nexus, care_climate_burden, economic_health_link, \
                     vulnerability_inequality"
                ),
            )
        }
    };

    let countries: Vec<&Country> = match params.get("region").and_then(Value::as_str) {
        Some(region) => {
            let filtered = hub.catalog().in_region(region);
            if filtered.is_empty() {
                return ToolOutcome::err(
                    ToolErrorKind::NotFound,
                    format!("no countries in region matching '{region}'"),
                );
            }
            filtered
        }
        None => hub.catalog().countries().iter().collect(),
    };

    let (x_bank, x_key) = study.x;
    let (y_bank, y_key) = study.y;
    let (x_bank, y_bank) = match (hub.bank(x_bank), hub.bank(y_bank)) {
        (Some(x), Some(y)) => (x, y),
        _ => return ToolOutcome::err(ToolErrorKind::NotFound, "required data source missing"),
    };

    let mut xs = Vec::new();
    let mut ys = Vec::new();
    let mut analyzed = Vec::new();
    for country in countries {
        if let (Some(x), Some(y)) = (
            x_bank.indicator(country.code, x_key),
            y_bank.indicator(country.code, y_key),
        ) {
            xs.push(x);
            ys.push(y);
            analyzed.push(country.name);
        }
    }

    let report = match analytics::correlation(&xs, &ys) {
        Ok(report) => report,
        Err(err) => return ToolOutcome::Err(err.into()),
    };

    ToolOutcome::ok(json!({
        "analysis_type": analysis_type,
        "indicators": {
            "x": format!("{}.{x_key}", x_bank.id()),
            "y": format!("{}.{y_key}", y_bank.id()),
        },
        "countries_analyzed": analyzed.len(),
        "countries": analyzed,
        "correlation": report,
        "interpretation": format!(
            "{}: {} ({} countries)",
            study.framing, report.interpretation, xs.len()
        ),
    }))
}

fn recommendation_for(dimension: &str) -> &'static str {
    match dimension {
        "economic_security" => {
            "Expand women's access to climate finance, green jobs, and land tenure"
        }
        "unpaid_care" => {
            "Invest in care infrastructure and count unpaid care work in climate planning"
        }
        "gender_based_violence" => {
            "Integrate GBV prevention and response into disaster preparedness"
        }
        "health" => "Strengthen climate-resilient health services for women and girls",
        "participation" => {
            "Set quotas for women's representation in climate delegations and decision bodies"
        }
        "gender_mainstreaming" => {
            "Mandate gender analysis and gender budgeting across climate programmes"
        }
        _ => "Strengthen gender-responsive climate policy",
    }
}

fn sdg_for(dimension: &str) -> &'static str {
    match dimension {
        "economic_security" => "SDG 8 (Decent Work)",
        "unpaid_care" => "SDG 5.4 (Unpaid Care)",
        "gender_based_violence" => "SDG 5.2 (Violence Against Women)",
        "health" => "SDG 3 (Health)",
        "participation" => "SDG 5.5 (Leadership)",
        "gender_mainstreaming" => "SDG 13 (Climate Action)",
        _ => "SDG 5 (Gender Equality)",
    }
}

fn generate_policy_brief(hub: &DataHub, params: &Value) -> ToolOutcome {
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

    let indicator = |bank: &str, key: &str| {
        hub.bank(bank)
            .and_then(|bank| bank.indicator(country.code, key))
    };

    let mut dimensions: Vec<(&str, f64)> = DIMENSIONS
        .iter()
        .filter_map(|(key, _)| {
            indicator("unwomen", &format!("dimensions.{key}")).map(|score| (*key, score))
        })
        .collect();
    dimensions.sort_by(|a, b| a.1.total_cmp(&b.1));
    let weakest: Vec<&(&str, f64)> = dimensions.iter().take(2).collect();

    let recommendations: Vec<&str> = weakest
        .iter()
        .map(|(dim, _)| recommendation_for(dim))
        .collect();
    let mut sdg_alignment: Vec<&str> = vec!["SDG 5 (Gender Equality)", "SDG 13 (Climate Action)"];
    for (dim, _) in &weakest {
        let sdg = sdg_for(dim);
        if !sdg_alignment.contains(&sdg) {
            sdg_alignment.push(sdg);
        }
    }

    ToolOutcome::ok(json!({
        "country": country.name,
        "region": country.region,
        "overall_score": indicator("unwomen", "overall_score"),
        "key_indicators": {
            "women_in_climate_delegation": indicator("unwomen", "women_in_delegation"),
            "female_labor_force_participation": indicator("worldbank", "female_labor_force_participation"),
            "gender_inequality_index": indicator("undp", "gender_inequality_index"),
            "climate_vulnerability_index": indicator("climate", "climate_vulnerability_index"),
            "maternal_mortality_ratio": indicator("who", "maternal_mortality_ratio"),
            "unpaid_care_hours_female": indicator("ilo", "unpaid_care_hours_female"),
        },
        "weakest_dimensions": weakest
            .iter()
            .map(|(dim, score)| json!({"dimension": dim, "score": score}))
            .collect::<Vec<_>>(),
        "recommendations": recommendations,
        "sdg_alignment": sdg_alignment,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::databank::synthetic_hub;
    use crate::tools::registry::ToolContext;

    fn registry() -> ToolRegistry {
        let mut registry = ToolRegistry::new();
        register(&mut registry, Arc::new(synthetic_hub(42)));
        registry
    }

    fn invoke(registry: &ToolRegistry, name: &str, params: Value) -> Value {
        let mut plan = None;
        let mut ctx = ToolContext { plan: &mut plan };
        registry.invoke(name, &params, &mut ctx).into_value()
    }

    #[test]
    fn every_analysis_type_produces_a_correlation() {
        let registry = registry();
        for analysis_type in [
            "climate_gender_nexus",
            "care_climate_burden",
            "economic_health_link",
            "vulnerability_inequality",
        ] {
            let value = invoke(
                &registry,
                "cross_reference_analysis",
                json!({"analysis_type": analysis_type}),
            );
            assert_eq!(value["analysis_type"], analysis_type, "{analysis_type}");
            assert_eq!(value["countries_analyzed"], 25);
            let coefficient = value["correlation"]["coefficient"].as_f64().unwrap();
            assert!((-1.0..=1.0).contains(&coefficient));
        }
    }

    #[test]
    fn unknown_analysis_type_is_invalid_params() {
        let registry = registry();
        let value = invoke(
            &registry,
            "cross_reference_analysis",
            json!({"analysis_type": "astrology"}),
        );
        assert_eq!(value["error"]["kind"], "invalid_params");
    }

    #[test]
    fn region_filter_narrows_the_sample() {
        let registry = registry();
        let value = invoke(
            &registry,
            "cross_reference_analysis",
            json!({"analysis_type": "climate_gender_nexus", "region": "africa"}),
        );
        let analyzed = value["countries_analyzed"].as_u64().unwrap();
        assert!(analyzed > 1 && analyzed < 25);

        let value = invoke(
            &registry,
            "cross_reference_analysis",
            json!({"analysis_type": "climate_gender_nexus", "region": "atlantis"}),
        );
        assert_eq!(value["error"]["kind"], "not_found");
    }

    #[test]
    fn policy_brief_picks_the_two_weakest_dimensions() {
        let registry = registry();
        let value = invoke(&registry, "generate_policy_brief", json!({"country": "kenya"}));
        assert_eq!(value["country"], "Kenya");

        let weakest = value["weakest_dimensions"].as_array().unwrap();
        assert_eq!(weakest.len(), 2);
        let first = weakest[0]["score"].as_f64().unwrap();
        let second = weakest[1]["score"].as_f64().unwrap();
        assert!(first <= second);
        assert_eq!(value["recommendations"].as_array().unwrap().len(), 2);

        let sdgs = value["sdg_alignment"].as_array().unwrap();
        assert!(sdgs.iter().any(|s| s.as_str().unwrap().contains("SDG 5")));
        assert!(sdgs.iter().any(|s| s.as_str().unwrap().contains("SDG 13")));
    }

    #[test]
    fn policy_brief_for_unknown_country_is_not_found() {
        let registry = registry();
        let value = invoke(&registry, "generate_policy_brief", json!({"country": "narnia"}));
        assert_eq!(value["error"]["kind"], "not_found");
    }
}
