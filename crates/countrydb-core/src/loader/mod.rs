// crates/countrydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (opening files, atomic replacement) and
//! delegates row parsing and writing to the CSV codec.
//!
//! Loading never fails: a missing file, an unreadable file, or a file without
//! a single valid row all yield the built-in fallback dataset, and every
//! irregularity is reported in the [`LoadReport`] and logged as a warning.

use crate::error::{CatalogError, Result};
use crate::model::{Catalog, Country};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::{info, warn};

mod csv_io;

pub use csv_io::{read_countries, write_countries, CSV_HEADER};

/// Countries used when no usable data file exists.
pub const FALLBACK_COUNTRIES: [(&str, u64, u64, &str); 7] = [
    ("Argentina", 45_376_763, 2_780_400, "America"),
    ("Brasil", 213_993_437, 8_515_767, "America"),
    ("Chile", 19_116_201, 756_102, "America"),
    ("Espana", 47_351_567, 505_990, "Europa"),
    ("Francia", 67_750_000, 551_695, "Europa"),
    ("Japon", 125_800_000, 377_975, "Asia"),
    ("Australia", 25_920_000, 7_692_024, "Oceania"),
];

/// The built-in dataset as owned records.
pub fn fallback_dataset() -> Vec<Country> {
    FALLBACK_COUNTRIES
        .iter()
        .map(|&(name, population, area, continent)| {
            Country::new(name, population, area, continent)
        })
        .collect()
}

impl Catalog {
    pub fn default_dataset_filename() -> &'static str {
        "countries.csv"
    }

    /// A catalog holding only the built-in dataset.
    pub fn fallback() -> Self {
        Self::from_countries(fallback_dataset())
    }
}

/// Result of [`load`]: the records plus what happened while reading them.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded {
    pub countries: Vec<Country>,
    pub report: LoadReport,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct LoadReport {
    pub source: LoadSource,
    /// Rows that were dropped, in file order.
    pub skipped: Vec<SkippedRow>,
}

impl LoadReport {
    pub fn used_fallback(&self) -> bool {
        matches!(self.source, LoadSource::Fallback(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LoadSource {
    /// Records came from the file.
    #[default]
    File,
    /// The built-in dataset was substituted.
    Fallback(FallbackReason),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    FileMissing,
    Unreadable(String),
    NoValidRows,
}

/// A data row that was not loaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based line number in the file (the header is line 1).
    pub line: u64,
    pub reason: String,
}

/// Loads countries from the CSV file at `path`.
pub fn load(path: impl AsRef<Path>) -> Loaded {
    let path = path.as_ref();

    if !path.exists() {
        warn!(
            "Data file {} not found; using the built-in dataset",
            path.display()
        );
        return fallback(FallbackReason::FileMissing, Vec::new());
    }

    let parsed = open_stream(path).and_then(read_countries);
    let (countries, skipped) = match parsed {
        Ok(parsed) => parsed,
        Err(e) => {
            warn!(
                "Data file {} could not be read ({e}); using the built-in dataset",
                path.display()
            );
            return fallback(FallbackReason::Unreadable(e.to_string()), Vec::new());
        }
    };

    for row in &skipped {
        warn!("Skipping malformed row at line {}: {}", row.line, row.reason);
    }

    if countries.is_empty() {
        warn!(
            "Data file {} has no valid rows; using the built-in dataset",
            path.display()
        );
        return fallback(FallbackReason::NoValidRows, skipped);
    }

    info!("Loaded {} countries from {}", countries.len(), path.display());
    Loaded {
        countries,
        report: LoadReport {
            source: LoadSource::File,
            skipped,
        },
    }
}

fn fallback(reason: FallbackReason, skipped: Vec<SkippedRow>) -> Loaded {
    Loaded {
        countries: fallback_dataset(),
        report: LoadReport {
            source: LoadSource::Fallback(reason),
            skipped,
        },
    }
}

/// Writes `countries` to `path`, replacing any previous content.
///
/// The data goes to a hidden sibling file first, which is synced and then
/// renamed over `path`; a failed save leaves the old file in place.
pub fn save(countries: &[Country], path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let tmp = temp_path_for(path)?;

    let written = write_file(countries, &tmp).and_then(|()| {
        fs::rename(&tmp, path).map_err(|e| CatalogError::io(path, e))
    });
    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        warn!("Saving to {} failed: {e}", path.display());
        return Err(e);
    }

    info!("Saved {} countries to {}", countries.len(), path.display());
    Ok(())
}

fn write_file(countries: &[Country], tmp: &Path) -> Result<()> {
    let file = File::create(tmp).map_err(|e| CatalogError::io(tmp, e))?;
    let mut writer = BufWriter::new(file);
    write_countries(countries, &mut writer)?;
    writer.flush().map_err(|e| CatalogError::io(tmp, e))?;
    let file = writer
        .into_inner()
        .map_err(|e| CatalogError::io(tmp, e.into_error()))?;
    file.sync_all().map_err(|e| CatalogError::io(tmp, e))
}

fn temp_path_for(path: &Path) -> Result<PathBuf> {
    let file_name = path.file_name().ok_or_else(|| {
        CatalogError::io(
            path,
            std::io::Error::new(std::io::ErrorKind::InvalidInput, "path has no file name"),
        )
    })?;
    let mut tmp_name = std::ffi::OsString::from(".");
    tmp_name.push(file_name);
    tmp_name.push(".tmp");
    Ok(path.with_file_name(tmp_name))
}

/// Opens a file and buffers it.
fn open_stream(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    Ok(BufReader::new(file))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fallback_dataset_is_the_seven_builtin_countries() {
        let data = fallback_dataset();
        assert_eq!(data.len(), 7);
        assert_eq!(data[0], Country::new("Argentina", 45_376_763, 2_780_400, "America"));
        assert_eq!(data[6], Country::new("Australia", 25_920_000, 7_692_024, "Oceania"));
    }

    #[test]
    fn temp_file_sits_next_to_target() {
        let tmp = temp_path_for(Path::new("data/countries.csv")).unwrap();
        assert_eq!(tmp, Path::new("data/.countries.csv.tmp"));
    }

    #[test]
    fn save_leaves_no_temp_file_behind() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.csv");
        save(&fallback_dataset(), &path).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from("countries.csv")]);
    }

    #[test]
    fn save_overwrites_previous_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("countries.csv");
        save(&fallback_dataset(), &path).unwrap();
        save(&[Country::new("Malta", 1, 2, "Europa")], &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "name,population,area,continent\nMalta,1,2,Europa\n");
    }

    #[test]
    fn directory_path_is_unreadable() {
        let dir = tempfile::tempdir().unwrap();
        let loaded = load(dir.path());
        assert!(matches!(
            loaded.report.source,
            LoadSource::Fallback(FallbackReason::Unreadable(_))
        ));
        assert_eq!(loaded.countries, fallback_dataset());
    }
}
