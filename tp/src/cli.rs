//! CLI command definitions

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing::debug;

use crate::domain::{RequestError, TravelType, TripRequest};

/// tripplan - weather- and budget-gated trip planner
#[derive(Parser)]
#[command(
    name = "tp",
    about = "Plan multi-day trips with weather and flight-budget gates",
    version,
)]
pub struct Cli {
    /// Path to config file
    #[arg(short, long, global = true, help = "Path to config file")]
    pub config: Option<PathBuf>,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(
        short = 'l',
        long = "log-level",
        global = true,
        help = "Log level (TRACE, DEBUG, INFO, WARN, ERROR)"
    )]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Plan a trip end to end
    Plan(PlanArgs),

    /// Print the effective configuration
    Config,
}

/// Arguments describing the trip to plan
#[derive(Debug, Args)]
pub struct PlanArgs {
    /// Departure city
    #[arg(long, value_name = "CITY")]
    pub from: String,

    /// Destination city
    #[arg(long, value_name = "CITY")]
    pub to: String,

    /// Trip start date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub start: NaiveDate,

    /// Trip end date (YYYY-MM-DD)
    #[arg(long, value_name = "DATE")]
    pub end: NaiveDate,

    /// Total budget for the trip
    #[arg(long, default_value_t = 2000.0)]
    pub budget: f64,

    /// ISO currency code
    #[arg(long, default_value = "USD")]
    pub currency: String,

    /// Travel style (relaxation, adventure, sightseeing, business, family)
    #[arg(long = "travel-type", default_value = "sightseeing")]
    pub travel_type: TravelType,

    /// Number of travelers
    #[arg(long, default_value_t = 1)]
    pub travelers: u32,

    /// Preference tag; repeat for multiple
    #[arg(long = "prefer", value_name = "TAG")]
    pub preferences: Vec<String>,

    /// Suppress step-by-step progress, print only the final result
    #[arg(long)]
    pub batch: bool,
}

impl PlanArgs {
    /// Build and validate the trip request these arguments describe
    pub fn to_request(&self) -> Result<TripRequest, RequestError> {
        debug!(from = %self.from, to = %self.to, "PlanArgs::to_request: called");
        // Inclusive day count; reversed dates fall out in validate()
        let duration_days = (self.end - self.start).num_days().max(0) as u32 + 1;

        let request = TripRequest {
            origin: self.from.clone(),
            destination: self.to.clone(),
            start_date: self.start,
            end_date: self.end,
            duration_days,
            budget: self.budget,
            currency: self.currency.clone(),
            travel_type: self.travel_type,
            num_travelers: self.travelers,
            preferences: self.preferences.clone(),
        };
        request.validate()?;
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plan_args(extra: &[&str]) -> Cli {
        let mut argv = vec![
            "tp", "plan", "--from", "New York", "--to", "Paris", "--start", "2026-09-01", "--end", "2026-09-05",
        ];
        argv.extend_from_slice(extra);
        Cli::parse_from(argv)
    }

    #[test]
    fn test_plan_defaults() {
        let cli = plan_args(&[]);
        let Command::Plan(args) = cli.command else {
            panic!("Expected Plan command");
        };
        assert_eq!(args.budget, 2000.0);
        assert_eq!(args.currency, "USD");
        assert_eq!(args.travel_type, TravelType::Sightseeing);
        assert_eq!(args.travelers, 1);
        assert!(!args.batch);
    }

    #[test]
    fn test_plan_to_request_inclusive_duration() {
        let Command::Plan(args) = plan_args(&[]).command else {
            panic!("Expected Plan command");
        };
        let request = args.to_request().unwrap();
        assert_eq!(request.duration_days, 5);
        assert_eq!(request.destination, "Paris");
    }

    #[test]
    fn test_plan_with_preferences_and_type() {
        let Command::Plan(args) =
            plan_args(&["--travel-type", "adventure", "--prefer", "hiking", "--prefer", "food"]).command
        else {
            panic!("Expected Plan command");
        };
        assert_eq!(args.travel_type, TravelType::Adventure);
        assert_eq!(args.preferences, vec!["hiking", "food"]);
    }

    #[test]
    fn test_reversed_dates_rejected_at_request_build() {
        let cli = Cli::parse_from([
            "tp", "plan", "--from", "A", "--to", "B", "--start", "2026-09-05", "--end", "2026-09-01",
        ]);
        let Command::Plan(args) = cli.command else {
            panic!("Expected Plan command");
        };
        assert!(args.to_request().is_err());
    }

    #[test]
    fn test_global_config_flag() {
        let cli = Cli::parse_from(["tp", "-c", "/path/to/tripplan.yml", "config"]);
        assert_eq!(cli.config, Some(PathBuf::from("/path/to/tripplan.yml")));
        assert!(matches!(cli.command, Command::Config));
    }
}
