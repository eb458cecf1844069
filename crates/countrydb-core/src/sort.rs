// crates/countrydb-core/src/sort.rs
use crate::common::SortField;
use crate::model::{Catalog, Country};
use std::cmp::Ordering;
use tracing::debug;

impl Catalog {
    /// Reorders the catalog in place by `field`.
    ///
    /// The sort is stable in both directions: countries with equal keys keep
    /// their relative order whether `descending` is set or not. Names are
    /// compared as raw strings (no case folding).
    pub fn sort(&mut self, field: SortField, descending: bool) {
        debug!(%field, descending, "sorting catalog");
        self.countries_mut().sort_by(|a, b| {
            let ord = compare(field, a, b);
            if descending {
                ord.reverse()
            } else {
                ord
            }
        });
    }
}

fn compare(field: SortField, a: &Country, b: &Country) -> Ordering {
    match field {
        SortField::Name => a.name.cmp(&b.name),
        SortField::Population => a.population.cmp(&b.population),
        SortField::Area => a.area.cmp(&b.area),
    }
}
