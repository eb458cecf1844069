//! Basic usage example for countrydb-rs
//!
//! This example demonstrates how to:
//! - Open a catalog backed by a CSV file
//! - Look up, search and filter countries
//! - Add and update records (each one a save point)
//! - Compute statistics

use countrydb_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Basic Usage Example ===\n");

    let path = std::env::temp_dir().join("countrydb-basic-usage.csv");
    let _ = std::fs::remove_file(&path);

    // Open the catalog (no file yet, so the built-in dataset is used)
    println!("Opening catalog at {} ...", path.display());
    let (mut store, report) = CountryStore::open(&path);
    println!(
        "✓ Loaded {} countries (fallback: {})\n",
        store.catalog().len(),
        report.used_fallback()
    );

    // Example 1: List all countries
    println!("--- Example 1: List all countries ---");
    for (i, country) in store.catalog().iter().enumerate() {
        println!("{}. {} ({})", i + 1, country.name(), country.continent());
    }
    println!();

    // Example 2: Exact lookup ignores case and extra spaces
    println!("--- Example 2: Find country by name ---");
    if let Some(country) = store.catalog().find("  JAPON ") {
        println!("Found: {}", country.name());
        println!("Population: {}", country.population());
        println!("Area: {} km²", country.area());
    }
    println!();

    // Example 3: Substring search
    println!("--- Example 3: Countries whose name contains 'an' ---");
    for country in store.catalog().search_substring("an") {
        println!("- {}", country.name());
    }
    println!();

    // Example 4: Add a country (written to disk immediately)
    println!("--- Example 4: Add a country ---");
    store.add(Country::new("Peru", 34_000_000, 1_285_216, "America"))?;
    println!("Countries now: {}", store.catalog().len());
    println!();

    // Example 5: Update population only
    println!("--- Example 5: Update a country ---");
    let change = CountryUpdate::parse("34500000", "")?;
    store.update("peru", change)?;
    if let Some(peru) = store.catalog().find("Peru") {
        println!("Peru population: {}", peru.population());
    }
    println!();

    // Example 6: Statistics
    println!("--- Example 6: Catalog statistics ---");
    if let Some(stats) = store.catalog().statistics() {
        println!("Total countries: {}", stats.count);
        println!("Total population: {}", stats.total_population);
        println!("Average area: {:.0} km²", stats.avg_area);
        println!("Most populated: {}", stats.max_population.name());
        for entry in &stats.continent_counts {
            println!("- {}: {}", entry.continent, entry.count);
        }
    }

    // Example 7: Reload from disk
    println!("\n--- Example 7: Reload ---");
    let reloaded = load(&path);
    println!(
        "Reloaded {} countries, {} skipped rows",
        reloaded.countries.len(),
        reloaded.report.skipped.len()
    );

    println!("\n=== Example completed successfully ===");
    Ok(())
}
