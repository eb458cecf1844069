// crates/countrydb-core/src/loader/csv_io.rs

//! CSV codec for the catalog file.
//!
//! Columns are matched by header name, so files with reordered or extra
//! columns still load. The Spanish column names of older data files are
//! accepted as aliases.

use super::SkippedRow;
use crate::error::{CatalogError, Result};
use crate::model::Country;
use crate::text::require_nonnegative_integer;
use serde::Deserialize;
use std::io::{Read, Write};

/// Header row written by [`write_countries`].
pub const CSV_HEADER: [&str; 4] = ["name", "population", "area", "continent"];

/// One data row as it appears in the file, before validation.
#[derive(Debug, Default, Deserialize)]
struct CountryRow {
    #[serde(default, alias = "nombre")]
    name: String,
    #[serde(default, alias = "poblacion")]
    population: String,
    #[serde(default, alias = "superficie")]
    area: String,
    #[serde(default, alias = "continente")]
    continent: String,
}

impl CountryRow {
    fn into_country(self) -> std::result::Result<Country, String> {
        let population = require_nonnegative_integer(&self.population)
            .map_err(|_| format!("population '{}' is not a whole number", self.population))?;
        let area = require_nonnegative_integer(&self.area)
            .map_err(|_| format!("area '{}' is not a whole number", self.area))?;
        if self.name.trim().is_empty() {
            return Err("name is empty".into());
        }
        if self.continent.trim().is_empty() {
            return Err("continent is empty".into());
        }
        Ok(Country::new(self.name, population, area, self.continent))
    }
}

/// Reads every row from `reader`.
///
/// Rows with a bad number, a blank name or continent, or broken encoding are
/// returned as [`SkippedRow`]s. Only a failure to read the stream itself is
/// an error.
pub fn read_countries<R: Read>(reader: R) -> Result<(Vec<Country>, Vec<SkippedRow>)> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers()?.clone();

    let mut countries = Vec::new();
    let mut skipped = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        // Header is line 1; used when the reader has no position to offer.
        let fallback_line = i as u64 + 2;
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => return Err(CatalogError::Csv(e)),
            Err(e) => {
                let line = e
                    .position()
                    .map(|p| p.line())
                    .unwrap_or(fallback_line);
                skipped.push(SkippedRow {
                    line,
                    reason: e.to_string(),
                });
                continue;
            }
        };
        let line = record
            .position()
            .map(|p| p.line())
            .unwrap_or(fallback_line);

        let parsed = record
            .deserialize::<CountryRow>(Some(&headers))
            .map_err(|e| e.to_string())
            .and_then(CountryRow::into_country);
        match parsed {
            Ok(country) => countries.push(country),
            Err(reason) => skipped.push(SkippedRow { line, reason }),
        }
    }

    Ok((countries, skipped))
}

/// Writes the header and one row per country, `\n`-terminated.
pub fn write_countries<W: Write>(countries: &[Country], writer: W) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(writer);

    wtr.write_record(CSV_HEADER)?;
    for country in countries {
        wtr.serialize(country)?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read(text: &str) -> (Vec<Country>, Vec<SkippedRow>) {
        read_countries(text.as_bytes()).unwrap()
    }

    #[test]
    fn reads_rows_in_file_order() {
        let (countries, skipped) =
            read("name,population,area,continent\nChile,19116201,756102,America\nJapon,125800000,377975,Asia\n");
        assert!(skipped.is_empty());
        assert_eq!(
            countries,
            vec![
                Country::new("Chile", 19_116_201, 756_102, "America"),
                Country::new("Japon", 125_800_000, 377_975, "Asia"),
            ]
        );
    }

    #[test]
    fn skips_rows_with_bad_numbers() {
        let (countries, skipped) = read(
            "name,population,area,continent\n\
             Chile,many,756102,America\n\
             Peru,34000000,-1,America\n\
             Japon,125800000,377975,Asia\n",
        );
        assert_eq!(countries.len(), 1);
        assert_eq!(countries[0].name, "Japon");
        assert_eq!(skipped.len(), 2);
        assert_eq!(skipped[0].line, 2);
        assert!(skipped[0].reason.contains("population"));
        assert_eq!(skipped[1].line, 3);
        assert!(skipped[1].reason.contains("area"));
    }

    #[test]
    fn skips_short_rows_and_blank_names() {
        let (countries, skipped) = read(
            "name,population,area,continent\n\
             Chile,19116201\n\
             ,1,2,Asia\n\
             Japon,125800000,377975,Asia\n",
        );
        assert_eq!(countries.len(), 1);
        assert_eq!(skipped.len(), 2);
    }

    #[test]
    fn accepts_legacy_spanish_headers_and_crlf() {
        let (countries, skipped) = read(
            "nombre,poblacion,superficie,continente\r\nEspana,47351567,505990,Europa\r\n",
        );
        assert!(skipped.is_empty());
        assert_eq!(countries, vec![Country::new("Espana", 47_351_567, 505_990, "Europa")]);
    }

    #[test]
    fn columns_are_matched_by_header() {
        let (countries, _) = read("continent,area,name,population\nAsia,377975,Japon,125800000\n");
        assert_eq!(countries, vec![Country::new("Japon", 125_800_000, 377_975, "Asia")]);
    }

    #[test]
    fn writes_quoted_fields_and_header_for_empty_input() {
        let mut out = Vec::new();
        write_countries(&[], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "name,population,area,continent\n");

        let mut out = Vec::new();
        write_countries(
            &[Country::new("Korea, \"South\"", 51_700_000, 100_210, "Asia")],
            &mut out,
        )
        .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "name,population,area,continent\n\"Korea, \"\"South\"\"\",51700000,100210,Asia\n"
        );
    }

    #[test]
    fn quoted_fields_read_back() {
        let (countries, _) = read(
            "name,population,area,continent\n\"Korea, \"\"South\"\"\",51700000,100210,Asia\n",
        );
        assert_eq!(countries[0].name, "Korea, \"South\"");
    }
}
