//! Tool catalog and dispatch.
//!
//! Tools never raise business failures as Rust errors: every outcome is a
//! JSON envelope ([`ToolOutcome`]) the reasoning oracle observes, so a bad
//! parameter or an unknown country keeps the session alive.

pub mod compute_tools;
pub mod data_tools;
pub mod outcome;
pub mod plan_tools;
pub mod registry;
pub mod report_tools;
pub mod schema;

use std::sync::Arc;

pub use outcome::{ToolError, ToolErrorKind, ToolOutcome};
pub use registry::{ToolContext, ToolHandler, ToolRegistry};
pub use schema::{validate_params, ToolDescriptor};

use crate::databank::DataHub;

/// The full built-in catalog, in its stable advertised order: plan control,
/// data queries, numeric analysis, synthesis.
pub fn builtin_registry(hub: Arc<DataHub>) -> ToolRegistry {
    let mut registry = ToolRegistry::new();
    plan_tools::register(&mut registry);
    data_tools::register(&mut registry, hub.clone());
    compute_tools::register(&mut registry);
    report_tools::register(&mut registry, hub);
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::databank::synthetic_hub;

    #[test]
    fn builtin_catalog_order_is_stable() {
        let registry = builtin_registry(Arc::new(synthetic_hub(1)));
        let names: Vec<String> = registry.descriptors().into_iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "create_analysis_plan",
                "update_plan_progress",
                "list_data_sources",
                "get_country_profile",
                "query_bank",
                "compare_countries",
                "get_regional_data",
                "compute_statistics",
                "compute_correlation",
                "compute_composite_index",
                "compute_gap_analysis",
                "compute_trend",
                "cross_reference_analysis",
                "generate_policy_brief",
            ]
        );
    }
}
