// crates/countrydb-core/src/common.rs

//! Types shared between the catalog operations and their callers.

use crate::error::{CatalogError, Result};
use crate::model::Country;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Aggregate statistics over the catalog.
///
/// Returned by [`Catalog::statistics`](crate::Catalog::statistics), which
/// yields `None` for an empty catalog instead of dividing by zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub count: usize,
    pub total_population: u128,
    pub total_area: u128,
    pub avg_population: f64,
    pub avg_area: f64,
    /// First record with the highest population in current order.
    pub max_population: Country,
    /// First record with the lowest population in current order.
    pub min_population: Country,
    /// Occurrences per exact continent value, in first-seen order.
    pub continent_counts: Vec<ContinentCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContinentCount {
    pub continent: String,
    pub count: usize,
}

/// Numeric fields usable with
/// [`Catalog::filter_by_range`](crate::Catalog::filter_by_range).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RangeField {
    Population,
    Area,
}

impl RangeField {
    pub fn value_of(self, country: &Country) -> u64 {
        match self {
            RangeField::Population => country.population,
            RangeField::Area => country.area,
        }
    }
}

/// Keys usable with [`Catalog::sort`](crate::Catalog::sort).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortField {
    Name,
    Population,
    Area,
}

impl fmt::Display for RangeField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RangeField::Population => "population",
            RangeField::Area => "area",
        })
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SortField::Name => "name",
            SortField::Population => "population",
            SortField::Area => "area",
        })
    }
}

impl FromStr for RangeField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "population" => Ok(RangeField::Population),
            "area" => Ok(RangeField::Area),
            other => Err(CatalogError::Validation(format!(
                "unknown range field '{other}' (expected population or area)"
            ))),
        }
    }
}

impl FromStr for SortField {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "population" => Ok(SortField::Population),
            "area" => Ok(SortField::Area),
            other => Err(CatalogError::Validation(format!(
                "unknown sort field '{other}' (expected name, population or area)"
            ))),
        }
    }
}
