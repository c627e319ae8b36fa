//! Data collaborator seam: country catalog, fuzzy resolution, and the
//! [`DataBank`] trait the data-query tools dispatch into. The synthetic
//! fixture mirrors the thematic sources of the original scorecard hub.

pub mod bank;
pub mod catalog;
pub mod synthetic;

pub use bank::{DataBank, DataHub, SourceInfo};
pub use catalog::{Country, CountryCatalog, IncomeLevel};
pub use synthetic::synthetic_hub;
