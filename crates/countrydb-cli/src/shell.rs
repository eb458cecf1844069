//! Interactive numbered menu.
//!
//! Reads choices and field values line by line from any `BufRead`, so the
//! same loop drives stdin and scripted input in tests. Invalid choices and
//! invalid numbers re-prompt; end of input aborts the current operation and
//! then exits through the normal save path.

use crate::display::{group_thousands, write_country_list, write_hits, write_stats};
use countrydb_core::{
    CatalogError, Country, CountryStore, CountryUpdate, RangeField, SortField,
};
use countrydb_core::text::require_nonnegative_integer;
use std::io::{self, BufRead, Write};
use std::str::FromStr;
use tracing::error;

/// Top-level menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Search,
    Update,
    FilterContinent,
    FilterRange,
    Sort,
    Statistics,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.trim() {
            "1" => MenuChoice::Add,
            "2" => MenuChoice::List,
            "3" => MenuChoice::Search,
            "4" => MenuChoice::Update,
            "5" => MenuChoice::FilterContinent,
            "6" => MenuChoice::FilterRange,
            "7" => MenuChoice::Sort,
            "8" => MenuChoice::Statistics,
            "9" => MenuChoice::Exit,
            _ => return Err(()),
        })
    }
}

/// Sort submenu: options 1-6 map to a field and direction.
fn sort_choice(raw: &str) -> Option<(SortField, bool)> {
    Some(match raw.trim() {
        "1" => (SortField::Name, false),
        "2" => (SortField::Name, true),
        "3" => (SortField::Population, false),
        "4" => (SortField::Population, true),
        "5" => (SortField::Area, false),
        "6" => (SortField::Area, true),
        _ => return None,
    })
}

const MENU: &str = "
\t--- COUNTRY CATALOG ---
1. Add country
2. List countries
3. Search country by name
4. Update population/area
5. Filter by continent
6. Filter by range (population/area)
7. Sort countries
8. Statistics
9. Exit (saves the CSV)
------------------------------------------";

pub struct Shell<R, W> {
    input: R,
    out: W,
    store: CountryStore,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, out: W, store: CountryStore) -> Self {
        Self { input, out, store }
    }

    pub fn into_store(self) -> CountryStore {
        self.store
    }

    /// Runs the menu until the user exits or input ends.
    ///
    /// Only failures writing to the terminal end the loop early; catalog
    /// errors are printed and the menu comes back.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n*** Country catalog started ***")?;
        loop {
            writeln!(self.out, "{MENU}")?;
            let Some(line) = self.prompt("Select an option: ")? else {
                return self.exit();
            };
            let Ok(choice) = line.parse::<MenuChoice>() else {
                writeln!(self.out, "ERROR: choose a number from 1 to 9.")?;
                continue;
            };
            match choice {
                MenuChoice::Add => self.add()?,
                MenuChoice::List => self.list()?,
                MenuChoice::Search => self.search()?,
                MenuChoice::Update => self.update()?,
                MenuChoice::FilterContinent => self.filter_continent()?,
                MenuChoice::FilterRange => self.filter_range()?,
                MenuChoice::Sort => self.sort()?,
                MenuChoice::Statistics => self.statistics()?,
                MenuChoice::Exit => return self.exit(),
            }
        }
    }

    /// Prints `label` and reads one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.out)?;
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    /// Prompts until a non-negative integer is entered; `None` at end of input.
    fn prompt_number(&mut self, label: &str) -> io::Result<Option<u64>> {
        loop {
            let Some(line) = self.prompt(label)? else {
                return Ok(None);
            };
            match require_nonnegative_integer(&line) {
                Ok(n) => return Ok(Some(n)),
                Err(_) => writeln!(self.out, "ERROR: only whole numbers are allowed. Try again.")?,
            }
        }
    }

    fn report(&mut self, err: &CatalogError) -> io::Result<()> {
        if !err.is_user_error() {
            error!("{err}");
        }
        writeln!(self.out, "ERROR: {err}")
    }

    fn add(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Add country ---")?;
        let Some(name) = self.prompt("Name: ")? else { return Ok(()) };
        if name.is_empty() {
            return writeln!(self.out, "ERROR: the name must not be empty.");
        }
        if self.store.catalog().find_exact(&name).is_some() {
            return writeln!(self.out, "ERROR: '{name}' is already in the catalog.");
        }
        let Some(population) = self.prompt_number("Population (digits only): ")? else {
            return Ok(());
        };
        let Some(area) = self.prompt_number("Area in km² (digits only): ")? else {
            return Ok(());
        };
        let Some(continent) = self.prompt("Continent: ")? else { return Ok(()) };

        match self.store.add(Country::new(name, population, area, continent)) {
            Ok(index) => {
                let added = self.store.catalog().countries()[index].name.clone();
                writeln!(self.out, "Added '{added}' to the catalog.")
            }
            Err(e @ CatalogError::Io { .. }) => {
                self.report(&e)?;
                writeln!(self.out, "The country was added in memory; it will be saved on exit.")
            }
            Err(e) => self.report(&e),
        }
    }

    fn list(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Countries ---")?;
        write_country_list(&mut self.out, self.store.catalog())
    }

    fn search(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Search country ---")?;
        let Some(query) = self.prompt("Part of the name to look for: ")? else {
            return Ok(());
        };
        if query.is_empty() {
            return writeln!(self.out, "ERROR: nothing to search for.");
        }
        let hits = self.store.catalog().search_substring(&query);
        if hits.is_empty() {
            return writeln!(self.out, "No countries match '{query}'.");
        }
        writeln!(self.out, "\nResults for '{query}':")?;
        write_hits(&mut self.out, &hits)
    }

    fn update(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Update population/area ---")?;
        let Some(name) = self.prompt("Name of the country to change: ")? else {
            return Ok(());
        };
        let Some(current) = self.store.catalog().find(&name).cloned() else {
            return writeln!(self.out, "ERROR: '{name}' is not in the catalog.");
        };
        writeln!(
            self.out,
            "Changing {} (population: {}, area: {} km²)",
            current.name,
            group_thousands(current.population),
            group_thousands(current.area)
        )?;
        writeln!(self.out, "Leave a field blank to keep its value.")?;
        let Some(population) = self.prompt("New population: ")? else { return Ok(()) };
        let Some(area) = self.prompt("New area: ")? else { return Ok(()) };

        let result = CountryUpdate::parse(&population, &area)
            .and_then(|change| self.store.update(&name, change));
        match result {
            Ok(_) => writeln!(self.out, "'{}' updated.", current.name),
            Err(e @ CatalogError::Io { .. }) => {
                self.report(&e)?;
                writeln!(self.out, "The change was applied in memory; it will be saved on exit.")
            }
            Err(e) => {
                self.report(&e)?;
                writeln!(self.out, "Nothing was changed.")
            }
        }
    }

    fn filter_continent(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Filter by continent ---")?;
        let Some(query) = self.prompt("Which continent?: ")? else { return Ok(()) };
        if query.is_empty() {
            return writeln!(self.out, "ERROR: type the name of a continent.");
        }
        let hits = self.store.catalog().filter_by_continent(&query);
        if hits.is_empty() {
            return writeln!(self.out, "No countries found in '{query}'. Try another filter.");
        }
        writeln!(self.out, "\nCountries in '{query}':")?;
        write_hits(&mut self.out, &hits)
    }

    fn filter_range(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Filter by range ---")?;
        writeln!(self.out, "1. By population")?;
        writeln!(self.out, "2. By area")?;
        let Some(option) = self.prompt("Choose 1 or 2: ")? else { return Ok(()) };
        let (field, unit) = match option.as_str() {
            "1" => (RangeField::Population, "inhabitants"),
            "2" => (RangeField::Area, "km²"),
            _ => return writeln!(self.out, "ERROR: choose 1 or 2."),
        };
        let Some(min) = self.prompt_number("Minimum value: ")? else { return Ok(()) };
        let Some(max) = self.prompt_number("Maximum value: ")? else { return Ok(()) };

        let hits = self.store.catalog().filter_by_range(field, min, max);
        if hits.is_empty() {
            return writeln!(self.out, "No countries in that range.");
        }
        writeln!(
            self.out,
            "\nCountries with {field} between {} and {} {unit}:",
            group_thousands(min),
            group_thousands(max)
        )?;
        for c in hits {
            writeln!(
                self.out,
                "-> {} ({} {unit})",
                c.name,
                group_thousands(field.value_of(c))
            )?;
        }
        Ok(())
    }

    fn sort(&mut self) -> io::Result<()> {
        if self.store.catalog().is_empty() {
            return writeln!(self.out, "No countries to sort.");
        }
        writeln!(self.out, "\n\t--- Sort countries ---")?;
        writeln!(self.out, "1. Name (A-Z)")?;
        writeln!(self.out, "2. Name (Z-A)")?;
        writeln!(self.out, "3. Population (ascending)")?;
        writeln!(self.out, "4. Population (descending)")?;
        writeln!(self.out, "5. Area (ascending)")?;
        writeln!(self.out, "6. Area (descending)")?;
        let Some(option) = self.prompt("How do you want to sort (1-6): ")? else {
            return Ok(());
        };
        let Some((field, descending)) = sort_choice(&option) else {
            return writeln!(self.out, "ERROR: invalid option, choose a number from 1 to 6.");
        };

        self.store.catalog_mut().sort(field, descending);
        writeln!(self.out, "Sorted by {field}.")?;
        self.list()
    }

    fn statistics(&mut self) -> io::Result<()> {
        writeln!(self.out, "\n\t--- Statistics ---")?;
        match self.store.catalog().statistics() {
            Some(stats) => write_stats(&mut self.out, &stats),
            None => writeln!(self.out, "No countries to compute statistics for."),
        }
    }

    fn exit(&mut self) -> io::Result<()> {
        match self.store.save() {
            Ok(()) => writeln!(
                self.out,
                "Changes saved to '{}'. Goodbye!",
                self.store.path().display()
            ),
            Err(e) => {
                self.report(&e)?;
                writeln!(self.out, "Exiting without saving.")
            }
        }
    }
}
