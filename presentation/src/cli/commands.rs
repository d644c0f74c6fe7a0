//! CLI command definitions

use clap::{Parser, ValueEnum};
use estimator_domain::{Currency, FormSnapshot, Location, fields};
use std::path::PathBuf;

/// Output format for a submission
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Live terminal rendering with spinner and animation
    Full,
    /// JSON report of the submission
    Json,
}

impl From<OutputFormat> for estimator_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => estimator_domain::OutputFormat::Full,
            OutputFormat::Json => estimator_domain::OutputFormat::Json,
        }
    }
}

/// CLI arguments for house-estimator
#[derive(Parser, Debug)]
#[command(name = "house-estimator")]
#[command(author, version, about = "Estimate a house price with a remote prediction service")]
#[command(long_about = r#"
house-estimator fills in the estimate form from the command line (or
interactively), posts it to the service's /predict endpoint and shows the
estimated price.

Configuration files are loaded from (in priority order):
1. ESTIMATOR_* environment variables (e.g. ESTIMATOR_ENDPOINT__BASE_URL)
2. --config <path>     Explicit config file
3. ./estimator.toml    Project-level config
4. ~/.config/house-estimator/config.toml   Global config

Example:
  house-estimator --bedrooms 3 --bathrooms 2 --sqft 1500 --floors 1 --age 10 --garage
  house-estimator --location "City Center" --currency INR --sqft 2200 -o json
  house-estimator --interactive
"#)]
pub struct Cli {
    /// Number of bedrooms
    #[arg(long, value_name = "N")]
    pub bedrooms: Option<String>,

    /// Number of bathrooms
    #[arg(long, value_name = "N")]
    pub bathrooms: Option<String>,

    /// Living area in square feet
    #[arg(long, value_name = "SQFT")]
    pub sqft: Option<String>,

    /// Number of floors (e.g. 1, 1.5, 2)
    #[arg(long, value_name = "N")]
    pub floors: Option<String>,

    /// Age of the house in years
    #[arg(long, value_name = "YEARS")]
    pub age: Option<String>,

    /// Location: Suburb, City Center or Rural (defaults to the configured one)
    #[arg(long, value_name = "LOCATION")]
    pub location: Option<String>,

    /// Currency: USD or INR (defaults to the configured one)
    #[arg(long, value_name = "CURRENCY")]
    pub currency: Option<String>,

    /// The house has a waterfront view
    #[arg(long)]
    pub waterfront: bool,

    /// The house has a garage
    #[arg(long)]
    pub garage: bool,

    /// The house has a garden
    #[arg(long)]
    pub garden: bool,

    /// Prompt for every field, then offer another estimate
    #[arg(short, long)]
    pub interactive: bool,

    /// Base URL of the estimation service (overrides config)
    #[arg(long, value_name = "URL")]
    pub endpoint: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress spinner and animation
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a daily-rolling file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

impl Cli {
    /// Form contents given on the command line
    ///
    /// Omitted text fields stay unset; omitted select fields take the
    /// given defaults, as a select input always holds an option.
    pub fn form_snapshot(&self, location: Location, currency: Currency) -> FormSnapshot {
        let mut form = FormSnapshot::new();
        let text_fields = [
            (fields::BEDROOMS, &self.bedrooms),
            (fields::BATHROOMS, &self.bathrooms),
            (fields::SQFT, &self.sqft),
            (fields::FLOORS, &self.floors),
            (fields::AGE, &self.age),
        ];
        for (name, value) in text_fields {
            if let Some(value) = value {
                form.set_value(name, value.as_str());
            }
        }

        form.set_value(
            fields::LOCATION,
            self.location.as_deref().unwrap_or(location.as_str()),
        );
        form.set_value(
            fields::CURRENCY,
            self.currency.as_deref().unwrap_or(currency.as_str()),
        );

        form.set_checkbox(fields::WATERFRONT, self.waterfront);
        form.set_checkbox(fields::GARAGE, self.garage);
        form.set_checkbox(fields::GARDEN, self.garden);
        form
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_fields_and_flags() {
        let cli = Cli::parse_from([
            "house-estimator",
            "--bedrooms",
            "3",
            "--sqft",
            "1500",
            "--location",
            "Rural",
            "--garage",
            "-o",
            "json",
        ]);
        assert_eq!(cli.bedrooms.as_deref(), Some("3"));
        assert!(cli.garage);
        assert!(!cli.waterfront);
        assert_eq!(cli.output, Some(OutputFormat::Json));

        let form = cli.form_snapshot(Location::Suburb, Currency::Usd);
        assert_eq!(form.value(fields::BEDROOMS), Some("3"));
        assert_eq!(form.value(fields::BATHROOMS), None);
        assert_eq!(form.value(fields::LOCATION), Some("Rural"));
        assert_eq!(form.value(fields::CURRENCY), Some("USD"));
        assert!(form.is_checked(fields::GARAGE));
    }

    #[test]
    fn test_select_defaults_apply() {
        let cli = Cli::parse_from(["house-estimator"]);
        let form = cli.form_snapshot(Location::CityCenter, Currency::Inr);
        assert_eq!(form.value(fields::LOCATION), Some("City Center"));
        assert_eq!(form.value(fields::CURRENCY), Some("INR"));
    }

    #[test]
    fn test_verbosity_counts() {
        let cli = Cli::parse_from(["house-estimator", "-vv", "--quiet"]);
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
    }

    #[test]
    fn test_output_format_maps_to_domain() {
        assert_eq!(
            estimator_domain::OutputFormat::from(OutputFormat::Json),
            estimator_domain::OutputFormat::Json
        );
    }
}
