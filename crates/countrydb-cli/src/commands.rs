//! One-shot subcommands: run a single operation against the store and exit.

use crate::args::Commands;
use crate::display::{group_thousands, write_country_list, write_hits, write_stats};
use anyhow::{bail, Context};
use countrydb_core::{Country, CountryStore, CountryUpdate};
use std::io::Write;

pub fn run<W: Write>(command: Commands, store: &mut CountryStore, out: &mut W) -> anyhow::Result<()> {
    match command {
        Commands::Menu => bail!("the menu is interactive; start it without a subcommand"),

        Commands::List { json } => {
            if json {
                serde_json::to_writer_pretty(&mut *out, store.catalog().countries())?;
                writeln!(out)?;
            } else {
                write_country_list(out, store.catalog())?;
            }
        }

        Commands::Search { query } => {
            let query = non_empty(&query, "search text")?;
            let hits = store.catalog().search_substring(query);
            if hits.is_empty() {
                writeln!(out, "No countries found matching: {query}")?;
            } else {
                write_hits(out, &hits)?;
            }
        }

        Commands::Continent { query } => {
            let query = non_empty(&query, "continent")?;
            let hits = store.catalog().filter_by_continent(query);
            if hits.is_empty() {
                writeln!(out, "No countries found in: {query}")?;
            } else {
                write_hits(out, &hits)?;
            }
        }

        Commands::Range { field, min, max } => {
            let hits = store.catalog().filter_by_range(field, min, max);
            if hits.is_empty() {
                writeln!(
                    out,
                    "No countries with {field} between {} and {}",
                    group_thousands(min),
                    group_thousands(max)
                )?;
            } else {
                for c in hits {
                    writeln!(
                        out,
                        "-> {} ({})",
                        c.name,
                        group_thousands(field.value_of(c))
                    )?;
                }
            }
        }

        Commands::Sort { field, desc, save } => {
            store.catalog_mut().sort(field, desc);
            write_country_list(out, store.catalog())?;
            if save {
                store.save().context("saving sorted catalog")?;
            }
        }

        Commands::Stats { json } => match store.catalog().statistics() {
            Some(stats) if json => {
                serde_json::to_writer_pretty(&mut *out, &stats)?;
                writeln!(out)?;
            }
            Some(stats) => write_stats(out, &stats)?,
            None => writeln!(out, "No countries to compute statistics for.")?,
        },

        Commands::Add {
            name,
            population,
            area,
            continent,
        } => {
            let index = store.add(Country::new(name, population, area, continent))?;
            let added = &store.catalog().countries()[index];
            writeln!(out, "Added '{}'.", added.name)?;
        }

        Commands::Update {
            name,
            population,
            area,
        } => {
            let change = CountryUpdate::parse(
                population.as_deref().unwrap_or(""),
                area.as_deref().unwrap_or(""),
            )?;
            if change.is_empty() {
                bail!("nothing to update: pass --population and/or --area");
            }
            let index = store.update(&name, change)?;
            let c = &store.catalog().countries()[index];
            writeln!(
                out,
                "Updated '{}': population {}, area {} km².",
                c.name,
                group_thousands(c.population),
                group_thousands(c.area)
            )?;
        }
    }
    Ok(())
}

fn non_empty<'a>(text: &'a str, what: &str) -> anyhow::Result<&'a str> {
    let text = text.trim();
    if text.is_empty() {
        bail!("{what} must not be empty");
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use countrydb_core::{RangeField, SortField};

    fn run_to_string(command: Commands, store: &mut CountryStore) -> anyhow::Result<String> {
        let mut out = Vec::new();
        run(command, store, &mut out)?;
        Ok(String::from_utf8(out).unwrap())
    }

    fn store() -> (tempfile::TempDir, CountryStore) {
        let dir = tempfile::tempdir().unwrap();
        let (store, _) = CountryStore::open(dir.path().join("countries.csv"));
        (dir, store)
    }

    #[test]
    fn range_prints_matching_values() {
        let (_dir, mut store) = store();
        let text = run_to_string(
            Commands::Range {
                field: RangeField::Population,
                min: 0,
                max: 30_000_000,
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(text, "-> Chile (19,116,201)\n-> Australia (25,920,000)\n");
    }

    #[test]
    fn blank_search_is_rejected() {
        let (_dir, mut store) = store();
        assert!(run_to_string(Commands::Search { query: "  ".into() }, &mut store).is_err());
    }

    #[test]
    fn sort_without_save_does_not_write() {
        let (dir, mut store) = store();
        run_to_string(
            Commands::Sort {
                field: SortField::Name,
                desc: true,
                save: false,
            },
            &mut store,
        )
        .unwrap();
        assert_eq!(store.catalog().countries()[0].name, "Japon");
        assert!(!dir.path().join("countries.csv").exists());
    }

    #[test]
    fn update_needs_a_field() {
        let (_dir, mut store) = store();
        let err = run_to_string(
            Commands::Update {
                name: "Chile".into(),
                population: None,
                area: Some(" ".into()),
            },
            &mut store,
        )
        .unwrap_err();
        assert!(err.to_string().contains("nothing to update"));
    }

    #[test]
    fn stats_json_is_valid() {
        let (_dir, mut store) = store();
        let text = run_to_string(Commands::Stats { json: true }, &mut store).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["count"], 7);
        assert_eq!(value["max_population"]["name"], "Brasil");
    }
}
