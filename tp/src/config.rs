//! Configuration types and loading
//!
//! YAML configuration with a fallback chain, kebab-case keys, and API keys
//! taken from the environment. The budget policy constants shared by the
//! adapter pre-filters and the decision gates live here so the two sides
//! can never drift apart.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// External data provider endpoints and keys
    pub providers: ProvidersConfig,

    /// Text-generation configuration
    pub llm: LlmConfig,

    /// Budget policy constants
    pub budget: BudgetPolicy,

    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[serde(rename = "log-level")]
    pub log_level: Option<String>,
}

impl Config {
    /// Validate configuration before use
    ///
    /// Checks the API-key environment variables early to fail fast with a
    /// clear message instead of deep inside a provider call.
    pub fn validate(&self) -> Result<()> {
        for (name, env) in [
            ("weather", &self.providers.openweather.api_key_env),
            ("search", &self.providers.serpapi.api_key_env),
            ("llm", &self.llm.api_key_env),
        ] {
            if std::env::var(env).is_err() {
                return Err(eyre::eyre!(
                    "{} API key not found. Set the {} environment variable.",
                    name,
                    env
                ));
            }
        }
        Ok(())
    }

    /// Load configuration with fallback chain
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        // Try project-local config: .tripplan.yml
        let local_config = PathBuf::from(".tripplan.yml");
        if local_config.exists() {
            match Self::load_from_file(&local_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    tracing::warn!("Failed to load config from {}: {}", local_config.display(), e);
                }
            }
        }

        // Try user config: ~/.config/tripplan/tripplan.yml
        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join("tripplan").join("tripplan.yml");
            if user_config.exists() {
                match Self::load_from_file(&user_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        tracing::warn!("Failed to load config from {}: {}", user_config.display(), e);
                    }
                }
            }
        }

        // No config file found, use defaults
        tracing::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    /// Peek at the configured log level before full config load
    ///
    /// Used at startup so logging can be initialized before the config is
    /// parsed (and before parse failures are reported through it).
    pub fn load_log_level(config_path: Option<&PathBuf>) -> Option<String> {
        let path = config_path.cloned().or_else(|| {
            let local = PathBuf::from(".tripplan.yml");
            local.exists().then_some(local)
        })?;
        let content = fs::read_to_string(path).ok()?;
        let config: Config = serde_yaml::from_str(&content).ok()?;
        config.log_level
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        tracing::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }
}

/// Provider endpoint configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProvidersConfig {
    /// OpenWeatherMap (weather lookup)
    pub openweather: ApiEndpoint,

    /// SerpAPI (flights, hotels, attractions)
    pub serpapi: ApiEndpoint,
}

impl Default for ProvidersConfig {
    fn default() -> Self {
        Self {
            openweather: ApiEndpoint {
                api_key_env: "OPENWEATHERMAP_API_KEY".to_string(),
                base_url: "https://api.openweathermap.org".to_string(),
                timeout_ms: 15_000,
            },
            serpapi: ApiEndpoint {
                api_key_env: "SERPAPI_KEY".to_string(),
                base_url: "https://serpapi.com".to_string(),
                timeout_ms: 30_000,
            },
        }
    }
}

/// One external HTTP endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEndpoint {
    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl ApiEndpoint {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("Environment variable {} not set", self.api_key_env))
    }
}

/// Text-generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LlmConfig {
    /// Model identifier
    pub model: String,

    /// Environment variable containing the API key
    #[serde(rename = "api-key-env")]
    pub api_key_env: String,

    /// API base URL
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Maximum tokens per response
    #[serde(rename = "max-tokens")]
    pub max_tokens: u32,

    /// Sampling temperature
    pub temperature: f32,

    /// Request timeout in milliseconds
    #[serde(rename = "timeout-ms")]
    pub timeout_ms: u64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "gemini-2.5-flash".to_string(),
            api_key_env: "GEMINI_API_KEY".to_string(),
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            max_tokens: 2000,
            temperature: 0.7,
            timeout_ms: 60_000,
        }
    }
}

impl LlmConfig {
    /// Read the API key from the configured environment variable
    pub fn get_api_key(&self) -> Result<String> {
        std::env::var(&self.api_key_env).context(format!("Environment variable {} not set", self.api_key_env))
    }
}

/// Budget policy constants
///
/// Both the adapter pre-filters and the decision gates read these, so a
/// single configured value governs each threshold end to end.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(default)]
pub struct BudgetPolicy {
    /// Flights may consume at most this percentage of the total budget
    #[serde(rename = "flight-share-pct")]
    pub flight_share_pct: f64,

    /// Share of the total budget assumed to go to hotels
    #[serde(rename = "hotel-budget-share")]
    pub hotel_budget_share: f64,

    /// Nominal nights the hotel share is amortized over, regardless of the
    /// actual trip duration
    #[serde(rename = "hotel-nights-baseline")]
    pub hotel_nights_baseline: u32,
}

impl Default for BudgetPolicy {
    fn default() -> Self {
        Self {
            flight_share_pct: 60.0,
            hotel_budget_share: 0.3,
            hotel_nights_baseline: 7,
        }
    }
}

impl BudgetPolicy {
    /// Flight sub-budget: the price ceiling the flight adapter filters at
    pub fn flight_ceiling(&self, total_budget: f64) -> f64 {
        total_budget * self.flight_share_pct / 100.0
    }

    /// Percentage of the total budget a given flight price consumes
    pub fn flight_share_of(&self, price: f64, total_budget: f64) -> f64 {
        price / total_budget * 100.0
    }

    /// Gate re-check: does this price blow the flight share of the budget?
    pub fn exceeds_flight_share(&self, price: f64, total_budget: f64) -> bool {
        self.flight_share_of(price, total_budget) > self.flight_share_pct
    }

    /// Per-night hotel budget ceiling, amortized over the baseline nights
    pub fn per_night_ceiling(&self, total_budget: f64) -> f64 {
        total_budget * self.hotel_budget_share / self.hotel_nights_baseline as f64
    }
}
