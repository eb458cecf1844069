use clap::{Parser, Subcommand};
use countrydb_core::text::require_nonnegative_integer;
use countrydb_core::{RangeField, SortField};
use std::path::PathBuf;

/// CLI arguments for countrydb
#[derive(Debug, Parser)]
#[command(
    name = "countrydb",
    version,
    about = "Manage a CSV-backed catalog of countries from the terminal"
)]
pub struct CliArgs {
    /// Path to the CSV data file (default: countries.csv in the current directory)
    #[arg(short = 'd', long = "data", env = "COUNTRYDB_DATA", global = true)]
    pub data: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset (e.g. warn, info, debug)
    #[arg(long = "log-level", default_value = "info", global = true)]
    pub log_level: String,

    /// Subcommand to run; without one the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Interactive numbered menu (default)
    Menu,

    /// List all countries in stored order
    List {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Search countries whose name contains a substring (case-insensitive)
    Search { query: String },

    /// List countries whose continent contains a substring (case-insensitive)
    Continent { query: String },

    /// List countries whose population or area lies in [MIN, MAX]
    Range {
        /// population or area
        field: RangeField,
        #[arg(value_parser = parse_count)]
        min: u64,
        #[arg(value_parser = parse_count)]
        max: u64,
    },

    /// Sort the catalog and print it
    Sort {
        /// name, population or area
        field: SortField,
        /// Largest first (Z-A for names)
        #[arg(long)]
        desc: bool,
        /// Write the new order back to the data file
        #[arg(long)]
        save: bool,
    },

    /// Show totals, averages, extremes and per-continent counts
    Stats {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Add a country and save
    Add {
        name: String,
        #[arg(value_parser = parse_count)]
        population: u64,
        #[arg(value_parser = parse_count)]
        area: u64,
        continent: String,
    },

    /// Change the population and/or area of a country and save
    Update {
        name: String,
        #[arg(long)]
        population: Option<String>,
        #[arg(long)]
        area: Option<String>,
    },
}

fn parse_count(raw: &str) -> Result<u64, String> {
    require_nonnegative_integer(raw).map_err(|e| e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_menu() {
        let args = CliArgs::try_parse_from(["countrydb"]).unwrap();
        assert!(args.command.is_none());
        assert_eq!(args.log_level, "info");
    }

    #[test]
    fn range_rejects_signed_bounds() {
        assert!(CliArgs::try_parse_from(["countrydb", "range", "area", "+1", "5"]).is_err());
        let args = CliArgs::try_parse_from(["countrydb", "range", "area", "1", "5"]).unwrap();
        assert!(matches!(
            args.command,
            Some(Commands::Range { field: RangeField::Area, min: 1, max: 5 })
        ));
    }

    #[test]
    fn sort_field_is_parsed() {
        let args =
            CliArgs::try_parse_from(["countrydb", "--data", "x.csv", "sort", "population", "--desc"])
                .unwrap();
        assert_eq!(args.data, Some(PathBuf::from("x.csv")));
        assert!(matches!(
            args.command,
            Some(Commands::Sort { field: SortField::Population, desc: true, save: false })
        ));
    }
}
