use std::sync::Arc;

use serde::Serialize;
use serde_json::Value;

use super::catalog::{Country, CountryCatalog};

/// One thematic data source (scorecard, labour statistics, ...).
///
/// `country_record` returns the full structured payload for a country, or
/// `None` when the source has no data for it. `indicator` exposes single
/// numeric values for cross-source computations.
pub trait DataBank: Send + Sync {
    fn id(&self) -> &'static str;
    fn name(&self) -> &'static str;
    fn description(&self) -> &'static str;
    fn country_record(&self, code: &str) -> Option<Value>;
    fn indicator(&self, code: &str, key: &str) -> Option<f64>;
}

#[derive(Debug, Clone, Serialize)]
pub struct SourceInfo {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

/// Ordered collection of data banks plus the shared country catalog.
pub struct DataHub {
    catalog: CountryCatalog,
    banks: Vec<Arc<dyn DataBank>>,
}

impl DataHub {
    pub fn new(catalog: CountryCatalog, banks: Vec<Arc<dyn DataBank>>) -> Self {
        Self { catalog, banks }
    }

    pub fn catalog(&self) -> &CountryCatalog {
        &self.catalog
    }

    pub fn banks(&self) -> &[Arc<dyn DataBank>] {
        &self.banks
    }

    pub fn bank(&self, id: &str) -> Option<&Arc<dyn DataBank>> {
        self.banks.iter().find(|b| b.id() == id)
    }

    pub fn sources(&self) -> Vec<SourceInfo> {
        self.banks
            .iter()
            .map(|b| SourceInfo {
                id: b.id(),
                name: b.name(),
                description: b.description(),
            })
            .collect()
    }

    pub fn resolve(&self, query: &str) -> Option<&Country> {
        self.catalog.resolve(query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct FixedBank;

    impl DataBank for FixedBank {
        fn id(&self) -> &'static str {
            "fixed"
        }
        fn name(&self) -> &'static str {
            "Fixed Bank"
        }
        fn description(&self) -> &'static str {
            "test fixture"
        }
        fn country_record(&self, code: &str) -> Option<Value> {
            (code == "KEN").then(|| json!({"score": 42.0}))
        }
        fn indicator(&self, code: &str, key: &str) -> Option<f64> {
            (code == "KEN" && key == "score").then_some(42.0)
        }
    }

    fn hub() -> DataHub {
        DataHub::new(CountryCatalog::default(), vec![Arc::new(FixedBank)])
    }

    #[test]
    fn bank_lookup_by_id() {
        let hub = hub();
        assert!(hub.bank("fixed").is_some());
        assert!(hub.bank("missing").is_none());
    }

    #[test]
    fn sources_lists_banks_in_order() {
        let sources = hub().sources();
        assert_eq!(sources.len(), 1);
        assert_eq!(sources[0].id, "fixed");
    }

    #[test]
    fn record_and_indicator_pass_through() {
        let hub = hub();
        let bank = hub.bank("fixed").unwrap();
        assert_eq!(bank.country_record("KEN").unwrap()["score"], 42.0);
        assert_eq!(bank.indicator("KEN", "score"), Some(42.0));
        assert!(bank.country_record("SWE").is_none());
    }
}
