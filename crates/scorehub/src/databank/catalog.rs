use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IncomeLevel {
    High,
    UpperMiddle,
    LowerMiddle,
    Low,
}

impl IncomeLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            IncomeLevel::High => "high",
            IncomeLevel::UpperMiddle => "upper_middle",
            IncomeLevel::LowerMiddle => "lower_middle",
            IncomeLevel::Low => "low",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub region: &'static str,
    pub income: IncomeLevel,
    pub population_millions: f64,
}

/// Fixed catalog of countries covered by the scorecard sources.
#[derive(Debug, Clone)]
pub struct CountryCatalog {
    countries: Vec<Country>,
}

impl CountryCatalog {
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn get(&self, code: &str) -> Option<&Country> {
        self.countries.iter().find(|c| c.code == code)
    }

    /// Resolve a free-text query to a country: case-insensitive exact match
    /// on code or name first, then substring match on the name.
    pub fn resolve(&self, query: &str) -> Option<&Country> {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return None;
        }
        self.countries
            .iter()
            .find(|c| q == c.code.to_lowercase() || q == c.name.to_lowercase())
            .or_else(|| {
                self.countries
                    .iter()
                    .find(|c| c.name.to_lowercase().contains(&q))
            })
    }

    /// Countries whose region contains `filter`, case-insensitively.
    pub fn in_region(&self, filter: &str) -> Vec<&Country> {
        let f = filter.trim().to_lowercase();
        self.countries
            .iter()
            .filter(|c| c.region.to_lowercase().contains(&f))
            .collect()
    }
}

impl Default for CountryCatalog {
    fn default() -> Self {
        use IncomeLevel::*;
        let c = |code, name, region, income, population_millions| Country {
            code,
            name,
            region,
            income,
            population_millions,
        };
        Self::new(vec![
            c("BRA", "Brazil", "South America", UpperMiddle, 215.0),
            c("IND", "India", "South Asia", LowerMiddle, 1420.0),
            c("KEN", "Kenya", "East Africa", LowerMiddle, 54.0),
            c("SWE", "Sweden", "Europe", High, 10.0),
            c("DEU", "Germany", "Europe", High, 84.0),
            c("JPN", "Japan", "East Asia", High, 125.0),
            c("NGA", "Nigeria", "West Africa", LowerMiddle, 218.0),
            c("ZAF", "South Africa", "Southern Africa", UpperMiddle, 60.0),
            c("MEX", "Mexico", "North America", UpperMiddle, 128.0),
            c("IDN", "Indonesia", "Southeast Asia", UpperMiddle, 275.0),
            c("BGD", "Bangladesh", "South Asia", LowerMiddle, 170.0),
            c("ETH", "Ethiopia", "East Africa", Low, 120.0),
            c("PHL", "Philippines", "Southeast Asia", LowerMiddle, 115.0),
            c("VNM", "Vietnam", "Southeast Asia", LowerMiddle, 98.0),
            c("COL", "Colombia", "South America", UpperMiddle, 52.0),
            c("CAN", "Canada", "North America", High, 39.0),
            c("NZL", "New Zealand", "Pacific", High, 5.0),
            c("CHL", "Chile", "South America", High, 19.0),
            c("RWA", "Rwanda", "East Africa", Low, 13.0),
            c("NPL", "Nepal", "South Asia", LowerMiddle, 30.0),
            c("GHA", "Ghana", "West Africa", LowerMiddle, 33.0),
            c("PER", "Peru", "South America", UpperMiddle, 34.0),
            c("CRI", "Costa Rica", "Central America", UpperMiddle, 5.0),
            c("FJI", "Fiji", "Pacific", UpperMiddle, 0.9),
            c("MWI", "Malawi", "Southern Africa", Low, 20.0),
        ])
    }
}
