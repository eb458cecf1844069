//! Advanced filtering example for countrydb-rs
//!
//! This example demonstrates continent and range filters and in-place sorting

use countrydb_core::prelude::*;

fn main() -> Result<()> {
    println!("=== countrydb-rs Advanced Filtering Example ===\n");

    let mut catalog = Catalog::fallback();
    catalog.add(Country::new("Mexico", 128_900_000, 1_964_375, "America"))?;
    catalog.add(Country::new("Nueva Zelanda", 5_120_000, 268_021, "Oceania"))?;

    // Example 1: Continent filter is a substring match
    println!("--- Example 1: Countries in 'ame' (matches America) ---");
    for country in catalog.filter_by_continent("ame") {
        println!("- {} ({})", country.name(), country.continent());
    }
    println!();

    // Example 2: Inclusive population range
    println!("--- Example 2: Population between 20M and 70M ---");
    for country in catalog.filter_by_range(RangeField::Population, 20_000_000, 70_000_000) {
        println!("- {} ({})", country.name(), country.population());
    }
    println!();

    // Example 3: An inverted range matches nothing
    println!("--- Example 3: Inverted range ---");
    let none = catalog.filter_by_range(RangeField::Area, 1_000_000, 10);
    println!("Matches: {}", none.len());
    println!();

    // Example 4: Top 5 by area
    println!("--- Example 4: Top 5 countries by area ---");
    catalog.sort(SortField::Area, true);
    for (i, country) in catalog.iter().take(5).enumerate() {
        println!("{}. {} - {} km²", i + 1, country.name(), country.area());
    }
    println!();

    // Example 5: Alphabetical order (raw string comparison)
    println!("--- Example 5: Sorted by name ---");
    catalog.sort(SortField::Name, false);
    let names: Vec<_> = catalog.iter().map(|c| c.name()).collect();
    println!("{}", names.join(", "));

    Ok(())
}
