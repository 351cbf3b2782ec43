use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub server: ServerSettings,
    #[serde(default)]
    pub extractor: ExtractorSettings,
    #[serde(default)]
    pub data: DataSettings,
    #[serde(default)]
    pub classifier: ClassifierSettings,
    #[serde(default)]
    pub scheduling: SchedulingSettings,
    #[serde(default)]
    pub scoring: ScoringSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5200,
            workers: None,
        }
    }
}

/// Where event descriptions are sent for extraction
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ExtractorSettings {
    pub endpoint: String,
    pub api_key: String,
    pub model: String,
}

impl Default for ExtractorSettings {
    fn default() -> Self {
        Self {
            endpoint: "https://generativelanguage.googleapis.com/v1beta".to_string(),
            api_key: String::new(),
            model: "gemini-2.5-pro".to_string(),
        }
    }
}

/// Spreadsheet exports the calendar tables are loaded from
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DataSettings {
    pub holidays_file: String,
    pub exams_file: String,
    pub availability_file: String,
    pub venues_file: String,
}

impl Default for DataSettings {
    fn default() -> Self {
        Self {
            holidays_file: "data/holidays.csv".to_string(),
            exams_file: "data/exams.csv".to_string(),
            availability_file: "data/venue_availability.csv".to_string(),
            venues_file: "data/venues.csv".to_string(),
        }
    }
}

/// Optional pre-trained priority classifier
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ClassifierSettings {
    pub model_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SchedulingSettings {
    pub search_horizon_days: u32,
}

impl Default for SchedulingSettings {
    fn default() -> Self {
        Self {
            search_horizon_days: 30,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoringSettings {
    #[serde(default)]
    pub weights: WeightsConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WeightsConfig {
    pub academic: i32,
    pub auditorium: i32,
    pub large_attendance: i32,
    pub attendance_threshold: i64,
    pub ml_weight: i32,
    pub high_cutoff: i32,
    pub medium_cutoff: i32,
}

impl Default for WeightsConfig {
    fn default() -> Self {
        Self {
            academic: 2,
            auditorium: 1,
            large_attendance: 2,
            attendance_threshold: 100,
            ml_weight: 3,
            high_cutoff: 4,
            medium_cutoff: 2,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    pub level: String,
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: "json".to_string(),
        }
    }
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the structs
    /// 2. Configuration file (config/default.toml)
    /// 3. Environment variables (prefixed with EVENTRA_)
    pub fn load() -> Result<Self, ConfigError> {
        let mut settings = Config::builder()
            // Add default config file
            .add_source(File::with_name("config/default").required(false))
            // Add local config file (for development overrides)
            .add_source(File::with_name("config/local").required(false))
            // Add environment variables (prefixed with EVENTRA_)
            // e.g., EVENTRA_SERVER__PORT -> server.port
            .add_source(
                Environment::with_prefix("EVENTRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings = substitute_env_vars(settings)?;

        settings.try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let settings = Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(
                Environment::with_prefix("EVENTRA")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}

/// Pick up the extraction API key from the conventional environment variable
/// when the prefixed form is not set
fn substitute_env_vars(settings: Config) -> Result<Config, ConfigError> {
    use std::env;

    let api_key = env::var("GEMINI_API_KEY")
        .or_else(|_| env::var("EVENTRA_EXTRACTOR__API_KEY"))
        .ok();

    let mut builder = Config::builder().add_source(settings);

    if let Some(api_key) = api_key {
        builder = builder.set_override("extractor.api_key", api_key)?;
    }

    builder.build()
}
