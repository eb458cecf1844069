// crates/countrydb-core/src/search.rs

//! Read-only queries over a [`Catalog`]: exact lookup, substring search,
//! filters and statistics. All of them are linear scans in current order.

use crate::common::{CatalogStats, ContinentCount, RangeField};
use crate::model::{Catalog, Country};
use crate::text::contains_ignore_case;
use crate::traits::NameMatch;

impl Catalog {
    /// Index of the first country whose normalized name equals the
    /// normalized `name`, or `None`.
    pub fn find_exact(&self, name: &str) -> Option<usize> {
        self.iter().position(|c| c.is_named(name))
    }

    /// The first country matching `name` exactly (see [`Catalog::find_exact`]).
    pub fn find(&self, name: &str) -> Option<&Country> {
        self.find_exact(name).and_then(|i| self.get(i))
    }

    /// Countries whose name contains `query`, ignoring case.
    ///
    /// Whitespace is compared as typed. An empty query matches nothing.
    pub fn search_substring(&self, query: &str) -> Vec<&Country> {
        if query.is_empty() {
            return Vec::new();
        }
        self.iter().filter(|c| c.name_contains(query)).collect()
    }

    /// Countries whose continent contains `query`, ignoring case.
    ///
    /// This is a substring test, so `"ame"` matches `"America"`. An empty
    /// query matches nothing.
    pub fn filter_by_continent(&self, query: &str) -> Vec<&Country> {
        if query.is_empty() {
            return Vec::new();
        }
        self.iter()
            .filter(|c| contains_ignore_case(&c.continent, query))
            .collect()
    }

    /// Countries with `min <= field <= max`. Empty when `min > max`.
    pub fn filter_by_range(&self, field: RangeField, min: u64, max: u64) -> Vec<&Country> {
        self.iter()
            .filter(|c| (min..=max).contains(&field.value_of(c)))
            .collect()
    }

    /// Aggregate statistics, or `None` for an empty catalog.
    pub fn statistics(&self) -> Option<CatalogStats> {
        let first = self.countries().first()?;

        let mut total_population: u128 = 0;
        let mut total_area: u128 = 0;
        let mut max = first;
        let mut min = first;
        let mut continent_counts: Vec<ContinentCount> = Vec::new();

        for c in self.iter() {
            total_population += u128::from(c.population);
            total_area += u128::from(c.area);

            // Strict comparisons keep the first record on ties.
            if c.population > max.population {
                max = c;
            }
            if c.population < min.population {
                min = c;
            }

            match continent_counts
                .iter_mut()
                .find(|entry| entry.continent == c.continent)
            {
                Some(entry) => entry.count += 1,
                None => continent_counts.push(ContinentCount {
                    continent: c.continent.clone(),
                    count: 1,
                }),
            }
        }

        let count = self.len();
        Some(CatalogStats {
            count,
            total_population,
            total_area,
            avg_population: total_population as f64 / count as f64,
            avg_area: total_area as f64 / count as f64,
            max_population: max.clone(),
            min_population: min.clone(),
            continent_counts,
        })
    }
}
