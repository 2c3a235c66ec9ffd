use std::env;
use std::fmt;
use std::path::PathBuf;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub storage: StorageConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("FRONTDESK_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_file = match env::var("FRONTDESK_DATA_FILE") {
            Ok(value) if value.trim().is_empty() => return Err(ConfigError::EmptyDataFile),
            Ok(value) => PathBuf::from(value),
            Err(_) => PathBuf::from("frontdesk.json"),
        };

        let log_level = env::var("FRONTDESK_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            storage: StorageConfig { data_file },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Settings controlling where the record set lives on disk.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub data_file: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    EmptyDataFile,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyDataFile => {
                write!(f, "FRONTDESK_DATA_FILE must not be empty when set")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("FRONTDESK_ENV");
        env::remove_var("FRONTDESK_DATA_FILE");
        env::remove_var("FRONTDESK_LOG_LEVEL");
    }

    #[test]
    fn defaults_apply_when_nothing_is_set() {
        let _lock = env_guard().lock().expect("env guard");
        reset_env();

        let config = AppConfig::load().expect("defaults load");
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(config.storage.data_file, PathBuf::from("frontdesk.json"));
        assert_eq!(config.telemetry.log_level, "info");
    }

    #[test]
    fn environment_aliases_are_recognized() {
        let _lock = env_guard().lock().expect("env guard");
        reset_env();

        env::set_var("FRONTDESK_ENV", "PROD");
        let config = AppConfig::load().expect("load");
        assert_eq!(config.environment, AppEnvironment::Production);

        env::set_var("FRONTDESK_ENV", "ci");
        let config = AppConfig::load().expect("load");
        assert_eq!(config.environment, AppEnvironment::Test);

        reset_env();
    }

    #[test]
    fn blank_data_file_is_rejected() {
        let _lock = env_guard().lock().expect("env guard");
        reset_env();

        env::set_var("FRONTDESK_DATA_FILE", "   ");
        assert!(matches!(AppConfig::load(), Err(ConfigError::EmptyDataFile)));

        reset_env();
    }

    #[test]
    fn data_file_override_is_used_verbatim() {
        let _lock = env_guard().lock().expect("env guard");
        reset_env();

        env::set_var("FRONTDESK_DATA_FILE", "/var/lib/frontdesk/records.json");
        let config = AppConfig::load().expect("load");
        assert_eq!(
            config.storage.data_file,
            PathBuf::from("/var/lib/frontdesk/records.json")
        );

        reset_env();
    }
}
