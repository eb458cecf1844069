//! Persistence tests: load fallbacks, skipped rows and save/load round trips.

use countrydb_core::prelude::*;
use countrydb_core::{fallback_dataset, SkippedRow};
use std::fs;
use tempfile::TempDir;

fn scratch() -> TempDir {
    tempfile::tempdir().unwrap()
}

#[test]
fn missing_file_yields_exact_fallback_dataset() {
    let dir = scratch();
    let loaded = load(dir.path().join("nope.csv"));

    assert_eq!(
        loaded.report.source,
        LoadSource::Fallback(FallbackReason::FileMissing)
    );
    let expected = vec![
        Country::new("Argentina", 45_376_763, 2_780_400, "America"),
        Country::new("Brasil", 213_993_437, 8_515_767, "America"),
        Country::new("Chile", 19_116_201, 756_102, "America"),
        Country::new("Espana", 47_351_567, 505_990, "Europa"),
        Country::new("Francia", 67_750_000, 551_695, "Europa"),
        Country::new("Japon", 125_800_000, 377_975, "Asia"),
        Country::new("Australia", 25_920_000, 7_692_024, "Oceania"),
    ];
    assert_eq!(loaded.countries, expected);
}

#[test]
fn non_numeric_population_row_is_skipped() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    fs::write(
        &path,
        "name,population,area,continent\n\
         Argentina,45376763,2780400,America\n\
         Brasil,lots,8515767,America\n\
         Chile,19116201,756102,America\n",
    )
    .unwrap();

    let loaded = load(&path);
    assert_eq!(loaded.report.source, LoadSource::File);
    assert_eq!(
        loaded
            .countries
            .iter()
            .map(|c| c.name.as_str())
            .collect::<Vec<_>>(),
        ["Argentina", "Chile"]
    );
    assert_eq!(loaded.report.skipped.len(), 1);
    let SkippedRow { line, reason } = &loaded.report.skipped[0];
    assert_eq!(*line, 3);
    assert!(reason.contains("lots"));
}

#[test]
fn header_only_file_falls_back() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    fs::write(&path, "name,population,area,continent\n").unwrap();

    let loaded = load(&path);
    assert_eq!(
        loaded.report.source,
        LoadSource::Fallback(FallbackReason::NoValidRows)
    );
    assert_eq!(loaded.countries, fallback_dataset());
}

#[test]
fn all_rows_malformed_falls_back_and_reports_them() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    fs::write(
        &path,
        "name,population,area,continent\nA,1.5,2,X\nB,3,,Y\n",
    )
    .unwrap();

    let loaded = load(&path);
    assert!(loaded.report.used_fallback());
    assert_eq!(loaded.report.skipped.len(), 2);
    assert_eq!(loaded.countries.len(), 7);
}

#[test]
fn empty_file_falls_back() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    fs::write(&path, "").unwrap();

    let loaded = load(&path);
    assert_eq!(loaded.countries, fallback_dataset());
}

#[test]
fn save_then_load_round_trips_in_order() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    let countries = vec![
        Country::new("Zambia", 19_610_000, 752_612, "Africa"),
        Country::new("Côte d'Ivoire", 28_160_000, 322_463, "Africa"),
        Country::new("Bosnia, Herzegovina", 3_233_000, 51_209, "Europa"),
        Country::new("The \"Bahamas\"", 407_906, 13_943, "America"),
        Country::new("Nauru", 0, 21, "Oceania"),
    ];

    save(&countries, &path).unwrap();
    let loaded = load(&path);

    assert_eq!(loaded.report, LoadReport::default());
    assert_eq!(loaded.countries, countries);
}

#[test]
fn saving_empty_catalog_reloads_as_fallback() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");

    save(&[], &path).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "name,population,area,continent\n"
    );
    assert_eq!(load(&path).countries, fallback_dataset());
}

#[test]
fn saved_file_uses_lf_line_endings() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    save(&fallback_dataset(), &path).unwrap();

    let text = fs::read_to_string(&path).unwrap();
    assert!(!text.contains('\r'));
    assert_eq!(text.lines().count(), 8);
    assert_eq!(text.lines().nth(1).unwrap(), "Argentina,45376763,2780400,America");
}

#[test]
fn save_to_missing_directory_fails_without_creating_files() {
    let dir = scratch();
    let path = dir.path().join("sub").join("countries.csv");

    let err = save(&fallback_dataset(), &path).unwrap_err();
    assert!(matches!(err, CatalogError::Io { .. }));
    assert!(!err.is_user_error());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn store_update_is_persisted() {
    let dir = scratch();
    let path = dir.path().join("countries.csv");
    let (mut store, _) = CountryStore::open(&path);

    let change = CountryUpdate::parse("46000000", "").unwrap();
    store.update(" argentina ", change).unwrap();

    let reloaded = load(&path);
    assert_eq!(reloaded.countries[0].population, 46_000_000);
    assert_eq!(reloaded.countries[0].area, 2_780_400);
}
