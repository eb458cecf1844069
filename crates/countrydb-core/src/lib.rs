// crates/countrydb-core/src/lib.rs

//! countrydb-core
//! ==============
//!
//! A small in-memory catalog of country records (name, population, area,
//! continent) persisted to a CSV file.
//!
//! ```no_run
//! use countrydb_core::prelude::*;
//!
//! let (mut store, report) = CountryStore::open("countries.csv");
//! if report.used_fallback() {
//!     println!("started from the built-in dataset");
//! }
//!
//! store.add(Country::new("Peru", 34_000_000, 1_285_216, "America"))?;
//! store.catalog_mut().sort(SortField::Population, true);
//!
//! for c in store.catalog().filter_by_continent("america") {
//!     println!("{} ({})", c.name(), c.population());
//! }
//! store.save()?;
//! # Ok::<(), countrydb_core::CatalogError>(())
//! ```

pub mod common;
pub mod error;
pub mod loader;
pub mod model;
pub mod prelude;
pub mod search;
pub mod sort;
pub mod text;
pub mod traits;

// Re-exports
pub use crate::common::{CatalogStats, ContinentCount, RangeField, SortField};
pub use crate::error::{CatalogError, Result};
pub use crate::loader::{
    fallback_dataset, load, save, FallbackReason, LoadReport, LoadSource, Loaded, SkippedRow,
};
pub use crate::model::{Catalog, Country, CountryStore, CountryUpdate};
pub use crate::traits::NameMatch;
