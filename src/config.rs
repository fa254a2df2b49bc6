use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use ipm_cadence_resolver::{Resolver, ResolverError, SystemClock, WeekStart};
use ipm_cadence_shared::{RawScheduleEntry, Schedule, ScheduleError};
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub schedule: Vec<RawScheduleEntry>,
    /// Locate weeks Monday..Sunday instead of Sunday..Saturday
    #[serde(default)]
    pub monday_start_of_week: bool,
    /// IANA name, host local offset when unset
    #[serde(default)]
    pub timezone: Option<String>,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    #[serde(default = "default_placeholder")]
    pub placeholder: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            placeholder: default_placeholder(),
        }
    }
}

fn default_placeholder() -> String {
    "—".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (IPM_CADENCE__MONDAY_START_OF_WEEK, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("monday_start_of_week", false)?
            .set_default("observability.log_level", "info")?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("IPM_CADENCE")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    ///
    /// Unknown day names and time zones are rejected here, before anything
    /// is resolved.
    pub fn validate(&self) -> Result<(), String> {
        self.parse_schedule().map_err(|e| e.to_string())?;
        self.clock().map_err(|e| e.to_string())?;

        if self.display.placeholder.is_empty() {
            return Err("Display placeholder must not be empty".to_string());
        }

        Ok(())
    }

    pub fn week_start(&self) -> WeekStart {
        WeekStart::from_monday_start(self.monday_start_of_week)
    }

    pub fn parse_schedule(&self) -> Result<Schedule, ScheduleError> {
        Schedule::from_raw(self.schedule.iter().cloned())
    }

    pub fn resolver(&self) -> Result<Resolver, ScheduleError> {
        Ok(Resolver::new(self.parse_schedule()?, self.week_start()))
    }

    pub fn clock(&self) -> Result<SystemClock, ResolverError> {
        SystemClock::from_config(self.timezone.as_deref())
    }
}
