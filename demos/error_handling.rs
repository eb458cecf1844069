//! Error handling example for countrydb-rs
//!
//! This example demonstrates how each error kind surfaces and that the
//! catalog stays usable after every one of them

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Error Handling Example ===\n");

    // Example 1: Loading a file with broken rows
    println!("--- Example 1: Loading a file with malformed rows ---");
    let path = std::env::temp_dir().join("countrydb-error-handling.csv");
    std::fs::write(
        &path,
        "name,population,area,continent\nChile,19116201,756102,America\nPeru,lots,1285216,America\n",
    )
    .map_err(|e| CatalogError::Validation(format!("cannot prepare demo file: {e}")))?;
    let (mut store, report) = CountryStore::open(&path);
    println!("✓ Loaded {} countries", store.catalog().len());
    for row in &report.skipped {
        println!("  Skipped line {}: {}", row.line, row.reason);
    }
    println!();

    // Example 2: Duplicate names
    println!("--- Example 2: Adding a duplicate ---");
    match store.add(Country::new("  chile ", 1, 1, "America")) {
        Ok(_) => println!("  Added"),
        Err(e) => println!("  Rejected: {e}"),
    }
    println!();

    // Example 3: Invalid numbers
    println!("--- Example 3: Invalid numeric input ---");
    for raw in ["12.5", "-3", "1,000", "42"] {
        match require_nonnegative_integer(raw) {
            Ok(n) => println!("  {raw:>6} -> {n}"),
            Err(e) => println!("  {raw:>6} -> {e}"),
        }
    }
    println!();

    // Example 4: Updates are all-or-nothing
    println!("--- Example 4: Update with one bad field ---");
    match CountryUpdate::parse("20000000", "huge") {
        Ok(change) => {
            store.update("Chile", change)?;
        }
        Err(e) => println!("  Rejected before touching the record: {e}"),
    }
    println!();

    // Example 5: Unknown names
    println!("--- Example 5: Updating a missing country ---");
    match store.update("Atlantis", CountryUpdate::parse("1", "")?) {
        Ok(_) => println!("  Updated"),
        Err(CatalogError::NotFound(name)) => println!("  Not found: {name}"),
        Err(e) => return Err(e),
    }

    Ok(())
}
