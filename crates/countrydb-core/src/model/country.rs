// crates/countrydb-core/src/model/country.rs
use crate::error::{CatalogError, Result};
use crate::text::require_nonnegative_integer;
use serde::{Deserialize, Serialize};

/// A country entry in the catalog.
///
/// Field order matches the CSV column order (`name, population, area,
/// continent`), which is what the writer relies on when serializing.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    pub name: String,
    pub population: u64,
    /// Surface in km².
    pub area: u64,
    pub continent: String,
}

impl Country {
    pub fn new(
        name: impl Into<String>,
        population: u64,
        area: u64,
        continent: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            population,
            area,
            continent: continent.into(),
        }
    }

    /// Builds a record from raw text fields, validating both numbers.
    pub fn parse(name: &str, population: &str, area: &str, continent: &str) -> Result<Self> {
        let population = require_nonnegative_integer(population)
            .map_err(|e| field_error("population", e))?;
        let area = require_nonnegative_integer(area).map_err(|e| field_error("area", e))?;
        Ok(Self::new(name, population, area, continent))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn population(&self) -> u64 {
        self.population
    }

    pub fn area(&self) -> u64 {
        self.area
    }

    pub fn continent(&self) -> &str {
        &self.continent
    }
}

/// A pending change to a record's numeric fields.
///
/// `None` leaves the field untouched.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CountryUpdate {
    pub population: Option<u64>,
    pub area: Option<u64>,
}

impl CountryUpdate {
    /// Parses raw user input for an update.
    ///
    /// Blank text means "keep the current value". Every non-blank field is
    /// validated before the update is returned, so a bad area rejects the
    /// whole change even when the population was fine.
    ///
    /// ```rust
    /// use countrydb_core::CountryUpdate;
    ///
    /// let change = CountryUpdate::parse("1000", "").unwrap();
    /// assert_eq!(change.population, Some(1000));
    /// assert_eq!(change.area, None);
    ///
    /// assert!(CountryUpdate::parse("1000", "lots").is_err());
    /// ```
    pub fn parse(population: &str, area: &str) -> Result<Self> {
        Ok(Self {
            population: parse_optional(population).map_err(|e| field_error("population", e))?,
            area: parse_optional(area).map_err(|e| field_error("area", e))?,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.population.is_none() && self.area.is_none()
    }

    pub(crate) fn apply(&self, country: &mut Country) {
        if let Some(population) = self.population {
            country.population = population;
        }
        if let Some(area) = self.area {
            country.area = area;
        }
    }
}

fn parse_optional(raw: &str) -> Result<Option<u64>> {
    if raw.trim().is_empty() {
        return Ok(None);
    }
    require_nonnegative_integer(raw).map(Some)
}

fn field_error(field: &str, err: CatalogError) -> CatalogError {
    match err {
        CatalogError::Validation(msg) => CatalogError::Validation(format!("{field}: {msg}")),
        other => other,
    }
}
