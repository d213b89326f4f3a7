//! tripplan - weather- and budget-gated trip planner
//!
//! CLI entry point: wires the HTTP adapters and the text-generation client
//! into the planner and renders progress and the final result.

use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use colored::Colorize;
use eyre::{Context, Result};
use tokio::sync::mpsc;
use tracing::{debug, info};

use tripplan::cli::{Cli, Command, PlanArgs};
use tripplan::config::Config;
use tripplan::domain::TripItinerary;
use tripplan::llm::{GeminiClient, TextGenerator};
use tripplan::planner::Planner;
use tripplan::providers::{
    OpenWeatherClient, SerpApiAttractionClient, SerpApiFlightClient, SerpApiHotelClient,
};
use tripplan::state::PlanningState;

fn setup_logging(cli_log_level: Option<&str>, config_log_level: Option<&str>) -> Result<()> {
    // Note: Can't log params here since logging isn't initialized yet
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("tripplan")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    // Priority: CLI --log-level > config file > default (INFO)
    let level = match cli_log_level.or(config_log_level).map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("INFO") | None => tracing::Level::INFO,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    let log_file = fs::File::create(log_dir.join("tripplan.log")).context("Failed to create log file")?;

    tracing_subscriber::fmt()
        .with_writer(log_file)
        .with_ansi(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()))
        .init();

    info!("Logging initialized (level: {:?})", level);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_log_level = Config::load_log_level(cli.config.as_ref());
    setup_logging(cli.log_level.as_deref(), config_log_level.as_deref()).context("Failed to setup logging")?;

    let config = Config::load(cli.config.as_ref()).context("Failed to load configuration")?;
    info!("tripplan loaded config: model={}", config.llm.model);

    debug!("main: dispatching command");
    match cli.command {
        Command::Plan(args) => cmd_plan(&config, args).await,
        Command::Config => cmd_config(&config),
    }
}

/// Print the effective configuration
fn cmd_config(config: &Config) -> Result<()> {
    debug!("cmd_config: called");
    print!("{}", serde_yaml::to_string(config)?);
    Ok(())
}

/// Plan a trip end to end
async fn cmd_plan(config: &Config, args: PlanArgs) -> Result<()> {
    debug!(from = %args.from, to = %args.to, "cmd_plan: called");
    config.validate()?;

    let request = args.to_request().context("Invalid trip request")?;

    let llm: Arc<dyn TextGenerator> = Arc::new(GeminiClient::from_config(&config.llm)?);
    let planner = Planner::new(
        Arc::new(OpenWeatherClient::from_config(&config.providers.openweather)?),
        Arc::new(SerpApiFlightClient::from_config(&config.providers.serpapi)?),
        Arc::new(SerpApiHotelClient::from_config(&config.providers.serpapi)?),
        Arc::new(SerpApiAttractionClient::from_config(&config.providers.serpapi, llm.clone())?),
        llm,
        config.budget,
    );

    println!(
        "{}",
        format!(
            "Planning {} → {} ({} to {}, ${:.2})",
            request.origin, request.destination, request.start_date, request.end_date, request.budget
        )
        .bold()
    );
    println!();

    let state = if args.batch {
        debug!("cmd_plan: batch mode");
        let state = planner.run(request).await;
        for message in &state.messages {
            println!("{}", message);
        }
        state
    } else {
        debug!("cmd_plan: stepwise mode");
        let (tx, mut rx) = mpsc::channel::<PlanningState>(16);
        let printer = tokio::spawn(async move {
            let mut printed = 0;
            while let Some(snapshot) = rx.recv().await {
                for message in &snapshot.messages[printed..] {
                    println!("{}", message);
                }
                printed = snapshot.messages.len();
            }
        });
        let state = planner.run_stepwise(request, tx).await;
        printer.await.context("Progress printer task failed")?;
        state
    };

    render_final(&state);
    Ok(())
}

/// Render the terminal state: the itinerary, or whatever the run ended with
fn render_final(state: &PlanningState) {
    debug!(step = %state.current_step, "render_final: called");

    if !state.errors.is_empty() {
        println!();
        println!("{}", "Issues encountered:".yellow().bold());
        for error in &state.errors {
            println!("  {} {}", "•".yellow(), error);
        }
    }

    if let Some(itinerary) = &state.itinerary {
        render_itinerary(itinerary);
    } else if !state.is_terminal() {
        println!();
        println!("{}", "Planning did not complete.".red().bold());
    }
}

fn render_itinerary(itinerary: &TripItinerary) {
    println!();
    println!("{}", format!("🗺️  Trip to {}", itinerary.destination).bold());
    println!("   {} to {}", itinerary.start_date, itinerary.end_date);
    println!("   Weather: {}", itinerary.weather_summary);
    println!(
        "   Estimated cost: {} (budget ${:.2})",
        format!("${:.2}", itinerary.estimated_cost).green().bold(),
        itinerary.total_budget
    );

    if !itinerary.flights.is_empty() {
        println!();
        println!("{}", "✈️  Flights".bold());
        for flight in &itinerary.flights {
            println!(
                "   {} - ${:.2} ({}, {} stops)",
                flight.airline, flight.price, flight.duration, flight.stops
            );
        }
    }

    if !itinerary.hotels.is_empty() {
        println!();
        println!("{}", "🏨 Hotels".bold());
        for hotel in &itinerary.hotels {
            let rating = hotel.rating.map(|r| format!("⭐ {}/5", r)).unwrap_or_default();
            println!("   {} - ${:.2}/night {}", hotel.name, hotel.price_per_night, rating);
        }
    }

    for day in &itinerary.daily_plans {
        println!();
        println!("{}", format!("Day {} ({})", day.day, day.date).cyan().bold());
        for activity in &day.activities {
            let cost = activity.estimated_cost.as_deref().unwrap_or("");
            println!("   {} - {} {}", activity.time_of_day, activity.description, cost.dimmed());
        }
        for meal in &day.meals {
            let cost = meal.estimated_cost.as_deref().unwrap_or("");
            println!("   {}: {} {}", meal.meal_type, meal.suggestion, cost.dimmed());
        }
        if let Some(notes) = &day.notes {
            println!("   {} {}", "Note:".dimmed(), notes.dimmed());
        }
    }

    if let Some(notes) = &itinerary.notes {
        println!();
        println!("{}", notes.dimmed());
    }
}
