use crate::core::calendar::{
    CalendarOracle, HolidayProvider, MunicipalHoliday, StaticHolidays, provider_for,
};
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use crate::utils::time::parse_duration_hours;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

pub mod migrate; // use submodule at src/config/migrate.rs

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_daily_target")]
    pub daily_target: String,
    #[serde(default = "default_jurisdiction")]
    pub jurisdiction: String,
    #[serde(default = "default_municipal_holiday")]
    pub municipal_holiday: Option<MunicipalHoliday>,
    #[serde(default)]
    pub calendar_file: Option<String>,
    #[serde(default = "default_show_weekday")]
    pub show_weekday: bool,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_daily_target() -> String {
    "8h".to_string()
}
fn default_jurisdiction() -> String {
    "BR-SP".to_string()
}
fn default_municipal_holiday() -> Option<MunicipalHoliday> {
    Some(MunicipalHoliday::sao_paulo_anniversary())
}
fn default_show_weekday() -> bool {
    true
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            daily_target: default_daily_target(),
            jurisdiction: default_jurisdiction(),
            municipal_holiday: default_municipal_holiday(),
            calendar_file: None,
            show_weekday: default_show_weekday(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("hourbank")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".hourbank")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hourbank.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hourbank.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    /// Initialize configuration and database files
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            Self::database_file()
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if let Some(parent) = db_path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }

    /// Daily target in hours, parsed from `daily_target`.
    pub fn daily_target_hours(&self) -> AppResult<f64> {
        parse_duration_hours(&self.daily_target).ok_or_else(|| {
            AppError::Config(format!("invalid daily_target '{}'", self.daily_target))
        })
    }

    /// Build the calendar oracle described by this configuration.
    ///
    /// A `calendar_file` replaces the built-in jurisdiction data.
    pub fn calendar(&self) -> AppResult<CalendarOracle> {
        let provider: Box<dyn HolidayProvider> = match &self.calendar_file {
            Some(file) => Box::new(StaticHolidays::load(&expand_tilde(file))?),
            None => provider_for(&self.jurisdiction)?,
        };

        Ok(CalendarOracle::new(provider)
            .with_municipal(self.municipal_holiday.clone())
            .with_daily_target(self.daily_target_hours()?))
    }
}
