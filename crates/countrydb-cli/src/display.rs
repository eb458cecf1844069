use countrydb_core::{CatalogStats, Country};
use std::io::{self, Write};

/// Formats an integer with `,` thousands separators (`1234567` -> `1,234,567`).
pub fn group_thousands(n: impl Into<u128>) -> String {
    let digits = n.into().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn write_country_list<'a, W: Write>(
    out: &mut W,
    countries: impl IntoIterator<Item = &'a Country>,
) -> io::Result<()> {
    let mut any = false;
    for (i, c) in countries.into_iter().enumerate() {
        any = true;
        writeln!(
            out,
            "{}. {} - Population: {} - Area: {} km² - Continent: {}",
            i + 1,
            c.name,
            group_thousands(c.population),
            group_thousands(c.area),
            c.continent
        )?;
    }
    if !any {
        writeln!(out, "No countries to show.")?;
    }
    Ok(())
}

/// One `-> name, Population: n` line per hit.
pub fn write_hits<W: Write>(out: &mut W, hits: &[&Country]) -> io::Result<()> {
    for c in hits {
        writeln!(
            out,
            "-> {}, Population: {}",
            c.name,
            group_thousands(c.population)
        )?;
    }
    Ok(())
}

pub fn write_stats<W: Write>(out: &mut W, stats: &CatalogStats) -> io::Result<()> {
    writeln!(out, "Countries registered: {}", stats.count)?;
    writeln!(
        out,
        "Most populated: {} ({} inhabitants)",
        stats.max_population.name,
        group_thousands(stats.max_population.population)
    )?;
    writeln!(
        out,
        "Least populated: {} ({} inhabitants)",
        stats.min_population.name,
        group_thousands(stats.min_population.population)
    )?;
    writeln!(
        out,
        "Total population: {} inhabitants",
        group_thousands(stats.total_population)
    )?;
    writeln!(out, "Total area: {} km²", group_thousands(stats.total_area))?;
    writeln!(
        out,
        "Average population: {} inhabitants",
        group_thousands(stats.avg_population.round() as u128)
    )?;
    writeln!(
        out,
        "Average area: {} km²",
        group_thousands(stats.avg_area.round() as u128)
    )?;
    writeln!(out)?;
    writeln!(out, "Countries per continent:")?;
    for entry in &stats.continent_counts {
        writeln!(out, "- {}: {}", entry.continent, entry.count)?;
    }
    Ok(())
}
