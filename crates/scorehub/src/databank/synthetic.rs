//! Seeded synthetic datasets standing in for the six external scorecard
//! sources. Identical seed, identical data — tests and demos rely on that.

use std::collections::BTreeMap;
use std::sync::Arc;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde_json::{json, Value};

use super::bank::{DataBank, DataHub};
use super::catalog::{CountryCatalog, IncomeLevel};

/// The six gender dimensions of the climate scorecard.
pub const DIMENSIONS: [(&str, &str); 6] = [
    ("economic_security", "Economic Security"),
    ("unpaid_care", "Unpaid Care Work"),
    ("gender_based_violence", "Gender-Based Violence"),
    ("health", "Health"),
    ("participation", "Participation & Leadership"),
    ("gender_mainstreaming", "Gender Mainstreaming"),
];

/// Build a [`DataHub`] with all six synthetic banks over the default
/// country catalog.
pub fn synthetic_hub(seed: u64) -> DataHub {
    let catalog = CountryCatalog::default();
    let banks: Vec<Arc<dyn DataBank>> = vec![
        Arc::new(ScorecardBank::generate(&catalog, seed)),
        Arc::new(EconomicGenderBank::generate(&catalog, seed.wrapping_add(1))),
        Arc::new(HumanDevelopmentBank::generate(&catalog, seed.wrapping_add(2))),
        Arc::new(ClimateBank::generate(&catalog, seed.wrapping_add(3))),
        Arc::new(HealthBank::generate(&catalog, seed.wrapping_add(4))),
        Arc::new(LabourBank::generate(&catalog, seed.wrapping_add(5))),
    ];
    DataHub::new(catalog, banks)
}

fn r1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

fn r2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn r3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

fn base_score(income: IncomeLevel) -> f64 {
    match income {
        IncomeLevel::High => 70.0,
        IncomeLevel::UpperMiddle => 55.0,
        IncomeLevel::LowerMiddle => 45.0,
        IncomeLevel::Low => 38.0,
    }
}

struct ScorecardRecord {
    country: &'static str,
    overall_score: f64,
    dimensions: BTreeMap<&'static str, f64>,
    women_in_delegation: f64,
    has_gender_focal_point: bool,
    ndc_gender_references: i64,
}

/// Gender-responsive climate policy scores: six dimensions per country.
pub struct ScorecardBank {
    records: BTreeMap<&'static str, ScorecardRecord>,
}

impl ScorecardBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            let base = base_score(country.income);
            let dimensions: BTreeMap<&'static str, f64> = DIMENSIONS
                .iter()
                .map(|(key, _)| {
                    let score = (base + rng.gen_range(-15.0..20.0)).clamp(0.0, 100.0);
                    (*key, r1(score))
                })
                .collect();
            let overall = dimensions.values().sum::<f64>() / dimensions.len() as f64;
            records.insert(
                country.code,
                ScorecardRecord {
                    country: country.name,
                    overall_score: r1(overall),
                    dimensions,
                    women_in_delegation: r1(rng.gen_range(18.0..52.0)),
                    has_gender_focal_point: rng.gen_bool(0.65),
                    ndc_gender_references: rng.gen_range(5..=45),
                },
            );
        }
        Self { records }
    }
}

impl DataBank for ScorecardBank {
    fn id(&self) -> &'static str {
        "unwomen"
    }

    fn name(&self) -> &'static str {
        "UN Women Climate Scorecard"
    }

    fn description(&self) -> &'static str {
        "Gender dimensions of climate policies: 6 dimensions, 50+ indicators"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        let dimensions: BTreeMap<&str, f64> = DIMENSIONS
            .iter()
            .map(|(key, label)| (*label, r.dimensions[key]))
            .collect();
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "overall_score": r.overall_score,
            "dimensions": dimensions,
            "women_in_climate_delegation": r.women_in_delegation,
            "gender_focal_point": r.has_gender_focal_point,
            "ndc_gender_references": r.ndc_gender_references,
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "overall_score" => Some(r.overall_score),
            "women_in_delegation" => Some(r.women_in_delegation),
            "ndc_gender_references" => Some(r.ndc_gender_references as f64),
            _ => key
                .strip_prefix("dimensions.")
                .and_then(|dim| r.dimensions.get(dim).copied()),
        }
    }
}

struct EconomicGenderRecord {
    country: &'static str,
    female_labor_force_participation: f64,
    gender_wage_gap: f64,
    female_account_ownership: f64,
    female_secondary_education: f64,
    female_tertiary_education: f64,
    women_in_parliament: f64,
    female_land_ownership: f64,
    female_entrepreneurship: f64,
}

/// Economic gender indicators: employment, education, access to finance.
pub struct EconomicGenderBank {
    records: BTreeMap<&'static str, EconomicGenderRecord>,
}

impl EconomicGenderBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            let base_labor = match country.income {
                IncomeLevel::High => 65.0,
                IncomeLevel::UpperMiddle => 52.0,
                IncomeLevel::LowerMiddle => 35.0,
                IncomeLevel::Low => 28.0,
            };
            records.insert(
                country.code,
                EconomicGenderRecord {
                    country: country.name,
                    female_labor_force_participation: r1(base_labor + rng.gen_range(-10.0..15.0)),
                    gender_wage_gap: r1(rng.gen_range(10.0..35.0)),
                    female_account_ownership: r1(rng.gen_range(30.0..90.0)),
                    female_secondary_education: r1(rng.gen_range(40.0..98.0)),
                    female_tertiary_education: r1(rng.gen_range(15.0..70.0)),
                    women_in_parliament: r1(rng.gen_range(8.0..48.0)),
                    female_land_ownership: r1(rng.gen_range(5.0..45.0)),
                    female_entrepreneurship: r1(rng.gen_range(15.0..40.0)),
                },
            );
        }
        Self { records }
    }
}

impl DataBank for EconomicGenderBank {
    fn id(&self) -> &'static str {
        "worldbank"
    }

    fn name(&self) -> &'static str {
        "World Bank Gender Data"
    }

    fn description(&self) -> &'static str {
        "Economic gender indicators: employment, education, access to finance"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "labor_force": {
                "female_participation": r.female_labor_force_participation,
                "gender_wage_gap": r.gender_wage_gap,
            },
            "education": {
                "female_secondary": r.female_secondary_education,
                "female_tertiary": r.female_tertiary_education,
            },
            "economic_empowerment": {
                "account_ownership": r.female_account_ownership,
                "land_ownership": r.female_land_ownership,
                "entrepreneurship_rate": r.female_entrepreneurship,
            },
            "political": {
                "women_in_parliament": r.women_in_parliament,
            },
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "female_labor_force_participation" => Some(r.female_labor_force_participation),
            "gender_wage_gap" => Some(r.gender_wage_gap),
            "female_account_ownership" => Some(r.female_account_ownership),
            "women_in_parliament" => Some(r.women_in_parliament),
            "female_land_ownership" => Some(r.female_land_ownership),
            _ => None,
        }
    }
}

struct HumanDevelopmentRecord {
    country: &'static str,
    hdi: f64,
    hdi_rank: usize,
    gender_inequality_index: f64,
    gender_development_index: f64,
    mpi_headcount: f64,
    life_expectancy_female: f64,
    expected_schooling_female: f64,
    gni_per_capita_female: f64,
}

/// Human development: HDI, gender inequality, multidimensional poverty.
pub struct HumanDevelopmentBank {
    records: BTreeMap<&'static str, HumanDevelopmentRecord>,
}

impl HumanDevelopmentBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            let base_hdi = match country.income {
                IncomeLevel::High => 0.92,
                IncomeLevel::UpperMiddle => 0.76,
                IncomeLevel::LowerMiddle => 0.62,
                IncomeLevel::Low => 0.48,
            };
            let hdi = (base_hdi + rng.gen_range(-0.08_f64..0.08)).clamp(0.3, 1.0);
            let gii = (1.0 - hdi + rng.gen_range(-0.1_f64..0.15)).clamp(0.05, 0.7);
            records.insert(
                country.code,
                HumanDevelopmentRecord {
                    country: country.name,
                    hdi: r3(hdi),
                    hdi_rank: 0,
                    gender_inequality_index: r3(gii),
                    gender_development_index: r3(hdi * (1.0 - gii / 2.0)),
                    mpi_headcount: r1(((1.0 - hdi) * 60.0 + rng.gen_range(-10.0_f64..10.0)).max(0.0)),
                    life_expectancy_female: r1(70.0 + hdi * 15.0 + rng.gen_range(-3.0..3.0)),
                    expected_schooling_female: r1(8.0 + hdi * 8.0 + rng.gen_range(-1.0..1.0)),
                    gni_per_capita_female: (5000.0 + hdi * 45000.0
                        + rng.gen_range(-5000.0_f64..5000.0))
                        .round(),
                },
            );
        }

        let mut by_hdi: Vec<(&'static str, f64)> =
            records.iter().map(|(code, r)| (*code, r.hdi)).collect();
        by_hdi.sort_by(|a, b| b.1.total_cmp(&a.1));
        for (rank, (code, _)) in by_hdi.iter().enumerate() {
            if let Some(record) = records.get_mut(code) {
                record.hdi_rank = rank + 1;
            }
        }

        Self { records }
    }

    fn hdi_category(hdi: f64) -> &'static str {
        if hdi >= 0.8 {
            "Very High"
        } else if hdi >= 0.7 {
            "High"
        } else if hdi >= 0.55 {
            "Medium"
        } else {
            "Low"
        }
    }
}

impl DataBank for HumanDevelopmentBank {
    fn id(&self) -> &'static str {
        "undp"
    }

    fn name(&self) -> &'static str {
        "UNDP Human Development"
    }

    fn description(&self) -> &'static str {
        "Human Development Index, Gender Inequality Index, Multidimensional Poverty"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "human_development": {
                "hdi": r.hdi,
                "hdi_rank": r.hdi_rank,
                "category": Self::hdi_category(r.hdi),
            },
            "gender_indices": {
                "gender_inequality_index": r.gender_inequality_index,
                "gender_development_index": r.gender_development_index,
            },
            "poverty": {
                "mpi_headcount": r.mpi_headcount,
            },
            "female_indicators": {
                "life_expectancy": r.life_expectancy_female,
                "expected_schooling": r.expected_schooling_female,
                "gni_per_capita": r.gni_per_capita_female,
            },
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "hdi" => Some(r.hdi),
            "gender_inequality_index" => Some(r.gender_inequality_index),
            "gender_development_index" => Some(r.gender_development_index),
            "mpi_headcount" => Some(r.mpi_headcount),
            _ => None,
        }
    }
}

struct ClimateRecord {
    country: &'static str,
    total_emissions_mtco2: f64,
    emissions_per_capita: f64,
    ndc_target_2030: String,
    ndc_year: i64,
    net_zero_year: Option<i64>,
    adaptation_plan: bool,
    climate_vulnerability_index: f64,
    renewable_energy_share: f64,
    climate_finance_received_musd: f64,
}

/// NDC commitments, emissions, climate targets and adaptation plans.
pub struct ClimateBank {
    records: BTreeMap<&'static str, ClimateRecord>,
}

impl ClimateBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            let base_emissions = match country.income {
                IncomeLevel::High => 8.0,
                IncomeLevel::UpperMiddle => 5.0,
                IncomeLevel::LowerMiddle => 2.0,
                IncomeLevel::Low => 0.5,
            };
            let net_zero_year = if rng.gen_bool(0.6) {
                Some(*[2050, 2060, 2070].get(rng.gen_range(0..3)).unwrap_or(&2050))
            } else {
                None
            };
            records.insert(
                country.code,
                ClimateRecord {
                    country: country.name,
                    total_emissions_mtco2: r1(
                        country.population_millions * base_emissions * rng.gen_range(0.7..1.3),
                    ),
                    emissions_per_capita: r2(base_emissions * rng.gen_range(0.8..1.2)),
                    ndc_target_2030: format!("-{}%", rng.gen_range(25..=55)),
                    ndc_year: rng.gen_range(2021..=2024),
                    net_zero_year,
                    adaptation_plan: rng.gen_bool(0.5),
                    climate_vulnerability_index: r2(rng.gen_range(0.2..0.8)),
                    renewable_energy_share: r1(rng.gen_range(5.0..65.0)),
                    climate_finance_received_musd: if country.income == IncomeLevel::High {
                        0.0
                    } else {
                        rng.gen_range(10.0_f64..2000.0).round()
                    },
                },
            );
        }
        Self { records }
    }
}

impl DataBank for ClimateBank {
    fn id(&self) -> &'static str {
        "climate"
    }

    fn name(&self) -> &'static str {
        "Climate Watch"
    }

    fn description(&self) -> &'static str {
        "NDC commitments, emissions data, climate targets, adaptation plans"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "emissions": {
                "total_mtco2": r.total_emissions_mtco2,
                "per_capita": r.emissions_per_capita,
            },
            "ndc_commitments": {
                "target_2030": r.ndc_target_2030,
                "ndc_submission_year": r.ndc_year,
                "net_zero_target": r.net_zero_year,
            },
            "adaptation": {
                "national_adaptation_plan": r.adaptation_plan,
                "vulnerability_index": r.climate_vulnerability_index,
            },
            "energy_and_finance": {
                "renewable_share": r.renewable_energy_share,
                "climate_finance_received": r.climate_finance_received_musd,
            },
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "climate_vulnerability_index" => Some(r.climate_vulnerability_index),
            "emissions_per_capita" => Some(r.emissions_per_capita),
            "renewable_energy_share" => Some(r.renewable_energy_share),
            "climate_finance_received_musd" => Some(r.climate_finance_received_musd),
            _ => None,
        }
    }
}

struct HealthRecord {
    country: &'static str,
    maternal_mortality_ratio: f64,
    skilled_birth_attendance: f64,
    contraceptive_prevalence: f64,
    antenatal_care_coverage: f64,
    adolescent_birth_rate: f64,
    female_hiv_prevalence: f64,
    uhc_service_coverage_index: f64,
    heat_wave_mortality_female: f64,
}

/// Health indicators focused on women: maternal and reproductive health.
pub struct HealthBank {
    records: BTreeMap<&'static str, HealthRecord>,
}

impl HealthBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            let base_mmr = match country.income {
                IncomeLevel::High => 8.0,
                IncomeLevel::UpperMiddle => 45.0,
                IncomeLevel::LowerMiddle => 150.0,
                IncomeLevel::Low => 400.0,
            };
            let hiv = if country.region.ends_with("Africa") {
                r2(rng.gen_range(0.1..8.0))
            } else {
                r2(rng.gen_range(0.05..0.5))
            };
            records.insert(
                country.code,
                HealthRecord {
                    country: country.name,
                    maternal_mortality_ratio: (base_mmr * rng.gen_range(0.6_f64..1.4)).round(),
                    skilled_birth_attendance: r1(
                        (100.0 - base_mmr / 5.0 + rng.gen_range(-5.0_f64..10.0)).min(100.0),
                    ),
                    contraceptive_prevalence: r1(rng.gen_range(25.0..80.0)),
                    antenatal_care_coverage: r1(rng.gen_range(50.0..98.0)),
                    adolescent_birth_rate: r1(rng.gen_range(5.0..120.0)),
                    female_hiv_prevalence: hiv,
                    uhc_service_coverage_index: rng.gen_range(35.0_f64..85.0).round(),
                    heat_wave_mortality_female: r1(rng.gen_range(0.5..15.0)),
                },
            );
        }
        Self { records }
    }
}

impl DataBank for HealthBank {
    fn id(&self) -> &'static str {
        "who"
    }

    fn name(&self) -> &'static str {
        "WHO Health Data"
    }

    fn description(&self) -> &'static str {
        "Health indicators focused on women: maternal mortality, reproductive health"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "maternal_health": {
                "maternal_mortality_ratio": r.maternal_mortality_ratio,
                "skilled_birth_attendance": r.skilled_birth_attendance,
                "antenatal_care": r.antenatal_care_coverage,
            },
            "reproductive_health": {
                "contraceptive_prevalence": r.contraceptive_prevalence,
                "adolescent_birth_rate": r.adolescent_birth_rate,
            },
            "climate_health_nexus": {
                "heat_wave_mortality_female": r.heat_wave_mortality_female,
            },
            "health_system": {
                "uhc_coverage_index": r.uhc_service_coverage_index,
            },
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "maternal_mortality_ratio" => Some(r.maternal_mortality_ratio),
            "skilled_birth_attendance" => Some(r.skilled_birth_attendance),
            "female_hiv_prevalence" => Some(r.female_hiv_prevalence),
            "heat_wave_mortality_female" => Some(r.heat_wave_mortality_female),
            _ => None,
        }
    }
}

struct LabourRecord {
    country: &'static str,
    female_unemployment: f64,
    youth_female_neet: f64,
    unpaid_care_hours_female: f64,
    unpaid_care_hours_male: f64,
    informal_employment_female: f64,
    green_jobs_female_share: f64,
    female_managers_share: f64,
    maternity_leave_weeks: i64,
    childcare_enrollment: f64,
}

/// Labour market, unpaid care work, green employment.
pub struct LabourBank {
    records: BTreeMap<&'static str, LabourRecord>,
}

impl LabourBank {
    fn generate(catalog: &CountryCatalog, seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut records = BTreeMap::new();
        for country in catalog.countries() {
            records.insert(
                country.code,
                LabourRecord {
                    country: country.name,
                    female_unemployment: r1(rng.gen_range(3.0..25.0)),
                    youth_female_neet: r1(rng.gen_range(8.0..45.0)),
                    unpaid_care_hours_female: r1(rng.gen_range(15.0..45.0)),
                    unpaid_care_hours_male: r1(rng.gen_range(3.0..15.0)),
                    informal_employment_female: r1(rng.gen_range(15.0..85.0)),
                    green_jobs_female_share: r1(rng.gen_range(15.0..45.0)),
                    female_managers_share: r1(rng.gen_range(15.0..45.0)),
                    maternity_leave_weeks: rng.gen_range(6..=26),
                    childcare_enrollment: r1(rng.gen_range(5.0..65.0)),
                },
            );
        }
        Self { records }
    }
}

impl DataBank for LabourBank {
    fn id(&self) -> &'static str {
        "ilo"
    }

    fn name(&self) -> &'static str {
        "ILO Labour Statistics"
    }

    fn description(&self) -> &'static str {
        "Labour market, unpaid care work, green employment, working conditions"
    }

    fn country_record(&self, code: &str) -> Option<Value> {
        let r = self.records.get(code)?;
        let care_gap = r1(r.unpaid_care_hours_female - r.unpaid_care_hours_male);
        Some(json!({
            "source": self.name(),
            "country": r.country,
            "employment": {
                "female_unemployment": r.female_unemployment,
                "youth_female_neet": r.youth_female_neet,
                "informal_employment": r.informal_employment_female,
            },
            "unpaid_care_work": {
                "female_hours_per_week": r.unpaid_care_hours_female,
                "male_hours_per_week": r.unpaid_care_hours_male,
                "gender_gap": care_gap,
            },
            "green_economy": {
                "female_share_green_jobs": r.green_jobs_female_share,
            },
            "work_family_balance": {
                "maternity_leave": r.maternity_leave_weeks,
                "childcare_enrollment": r.childcare_enrollment,
            },
            "leadership": {
                "female_managers": r.female_managers_share,
            },
        }))
    }

    fn indicator(&self, code: &str, key: &str) -> Option<f64> {
        let r = self.records.get(code)?;
        match key {
            "unpaid_care_hours_female" => Some(r.unpaid_care_hours_female),
            "unpaid_care_hours_male" => Some(r.unpaid_care_hours_male),
            "green_jobs_female_share" => Some(r.green_jobs_female_share),
            "female_unemployment" => Some(r.female_unemployment),
            "female_managers_share" => Some(r.female_managers_share),
            _ => None,
        }
    }
}
