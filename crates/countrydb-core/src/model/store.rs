// crates/countrydb-core/src/model/store.rs
use super::{Catalog, Country, CountryUpdate};
use crate::error::Result;
use crate::loader::{self, LoadReport};
use std::path::{Path, PathBuf};

/// A [`Catalog`] bound to the CSV file it was loaded from.
///
/// `add` and `update` are save points: after a successful mutation the whole
/// catalog is written back. If that write fails the mutation stays in memory,
/// the error is returned, and the store remains usable (a later [`save`]
/// retries).
///
/// [`save`]: CountryStore::save
#[derive(Debug, Clone)]
pub struct CountryStore {
    catalog: Catalog,
    path: PathBuf,
}

impl CountryStore {
    /// Loads the catalog from `path`, falling back to the built-in dataset
    /// when the file is missing, unreadable or has no valid rows.
    pub fn open(path: impl AsRef<Path>) -> (Self, LoadReport) {
        let path = path.as_ref().to_path_buf();
        let loaded = loader::load(&path);
        let store = Self {
            catalog: Catalog::from_countries(loaded.countries),
            path,
        };
        (store, loaded.report)
    }

    pub fn with_catalog(catalog: Catalog, path: impl Into<PathBuf>) -> Self {
        Self {
            catalog,
            path: path.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Mutable access for operations that are not save points (sorting).
    pub fn catalog_mut(&mut self) -> &mut Catalog {
        &mut self.catalog
    }

    pub fn add(&mut self, candidate: Country) -> Result<usize> {
        let index = self.catalog.add(candidate)?;
        self.save()?;
        Ok(index)
    }

    pub fn update(&mut self, name: &str, change: CountryUpdate) -> Result<usize> {
        let index = self.catalog.update(name, change)?;
        self.save()?;
        Ok(index)
    }

    /// Writes the full catalog to the store's path.
    pub fn save(&self) -> Result<()> {
        loader::save(self.catalog.countries(), &self.path)
    }

    pub fn into_catalog(self) -> Catalog {
        self.catalog
    }
}
