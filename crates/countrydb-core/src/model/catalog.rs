// crates/countrydb-core/src/model/catalog.rs
use super::country::{Country, CountryUpdate};
use crate::error::{CatalogError, Result};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// The ordered in-memory collection of countries.
///
/// Iteration order is display order. Records are appended by [`Catalog::add`]
/// and only ever reordered by [`Catalog::sort`](crate::Catalog::sort); there
/// is no removal.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    countries: Vec<Country>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing sequence without validating it.
    ///
    /// Used by the loader, which has already checked each row.
    pub fn from_countries(countries: Vec<Country>) -> Self {
        Self { countries }
    }

    /// All countries in current order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Country> {
        self.countries.iter()
    }

    pub fn get(&self, index: usize) -> Option<&Country> {
        self.countries.get(index)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    pub fn into_countries(self) -> Vec<Country> {
        self.countries
    }

    pub(crate) fn countries_mut(&mut self) -> &mut Vec<Country> {
        &mut self.countries
    }

    /// Appends a new country and returns its index.
    ///
    /// Name and continent are stored trimmed. Checks run in this order:
    /// blank name, duplicate name (normalized, see
    /// [`normalize_for_compare`](crate::text::normalize_for_compare)), blank
    /// continent. Nothing is modified when a check fails.
    pub fn add(&mut self, candidate: Country) -> Result<usize> {
        let name = candidate.name.trim();
        if name.is_empty() {
            return Err(CatalogError::Validation("name must not be empty".into()));
        }
        if self.find_exact(name).is_some() {
            return Err(CatalogError::Duplicate(name.to_string()));
        }
        let continent = candidate.continent.trim();
        if continent.is_empty() {
            return Err(CatalogError::Validation("continent must not be empty".into()));
        }

        let country = Country::new(name, candidate.population, candidate.area, continent);
        debug!(name = %country.name, "adding country");
        self.countries.push(country);
        Ok(self.countries.len() - 1)
    }

    /// Applies `change` to the country named `name` and returns its index.
    ///
    /// The change is validated up front (see [`CountryUpdate::parse`]), so
    /// the record is either fully updated or untouched.
    pub fn update(&mut self, name: &str, change: CountryUpdate) -> Result<usize> {
        let index = self
            .find_exact(name)
            .ok_or_else(|| CatalogError::NotFound(name.trim().to_string()))?;
        let country = &mut self.countries[index];
        change.apply(country);
        debug!(
            name = %country.name,
            population = country.population,
            area = country.area,
            "updated country"
        );
        Ok(index)
    }
}

impl From<Vec<Country>> for Catalog {
    fn from(countries: Vec<Country>) -> Self {
        Self::from_countries(countries)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Country;
    type IntoIter = std::slice::Iter<'a, Country>;

    fn into_iter(self) -> Self::IntoIter {
        self.countries.iter()
    }
}
