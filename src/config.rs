use crate::domain::{FilterConfig, Language};
use crate::error::{Result, StaffError};
use std::env;
use std::path::PathBuf;

/// Top-level configuration, passed explicitly to whatever needs it.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub language: Language,
    pub telemetry: TelemetryConfig,
    /// Seniority range the dashboard filter starts with
    pub default_seniority: (f64, f64),
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            language: Language::default(),
            telemetry: TelemetryConfig {
                log_level: "info".to_string(),
            },
            default_seniority: FilterConfig::default().seniority,
        }
    }
}

impl AppConfig {
    /// Reads `.env` if present, then the `PCMS_*` environment variables
    pub fn load() -> Result<Self> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let data_dir = env::var("PCMS_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.data_dir);

        let language = match env::var("PCMS_LANGUAGE") {
            Ok(value) => value.parse().map_err(StaffError::ConfigError)?,
            Err(_) => defaults.language,
        };

        let log_level = env::var("PCMS_LOG_LEVEL").unwrap_or(defaults.telemetry.log_level);

        let min = read_years("PCMS_SENIORITY_MIN", defaults.default_seniority.0)?;
        let max = read_years("PCMS_SENIORITY_MAX", defaults.default_seniority.1)?;

        let config = Self {
            data_dir,
            language,
            telemetry: TelemetryConfig { log_level },
            default_seniority: (min, max),
        };

        config
            .default_filters()
            .validate()
            .map_err(|err| StaffError::ConfigError(err.to_string()))?;

        Ok(config)
    }

    /// Filter config the dashboard starts from
    pub fn default_filters(&self) -> FilterConfig {
        let (min, max) = self.default_seniority;
        FilterConfig::default().with_seniority(min, max)
    }
}

fn read_years(key: &str, default: f64) -> Result<f64> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse::<f64>()
            .map_err(|_| StaffError::ConfigError(format!("{} must be a number of years", key))),
        Err(_) => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Mutex, OnceLock};

    fn env_guard() -> &'static Mutex<()> {
        static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
        GUARD.get_or_init(|| Mutex::new(()))
    }

    fn reset_env() {
        env::remove_var("PCMS_DATA_DIR");
        env::remove_var("PCMS_LANGUAGE");
        env::remove_var("PCMS_LOG_LEVEL");
        env::remove_var("PCMS_SENIORITY_MIN");
        env::remove_var("PCMS_SENIORITY_MAX");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        let config = AppConfig::load().expect("config loads with defaults");

        assert_eq!(config.data_dir, PathBuf::from("."));
        assert_eq!(config.language, Language::Zh);
        assert_eq!(config.telemetry.log_level, "info");
        assert_eq!(config.default_filters(), FilterConfig::default());
    }

    #[test]
    fn load_reads_overrides() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("PCMS_DATA_DIR", "/srv/pcms");
        env::set_var("PCMS_LANGUAGE", "bi");
        env::set_var("PCMS_SENIORITY_MAX", "50");

        let config = AppConfig::load().expect("config loads");

        assert_eq!(config.data_dir, PathBuf::from("/srv/pcms"));
        assert_eq!(config.language, Language::Bi);
        assert_eq!(config.default_filters().seniority, (0.0, 50.0));
        reset_env();
    }

    #[test]
    fn load_rejects_invalid_values() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();

        env::set_var("PCMS_SENIORITY_MIN", "ten");
        assert!(matches!(AppConfig::load(), Err(StaffError::ConfigError(_))));

        env::set_var("PCMS_SENIORITY_MIN", "20");
        env::set_var("PCMS_SENIORITY_MAX", "10");
        assert!(matches!(AppConfig::load(), Err(StaffError::ConfigError(_))));

        reset_env();
        env::set_var("PCMS_LANGUAGE", "fr");
        assert!(matches!(AppConfig::load(), Err(StaffError::ConfigError(_))));
        reset_env();
    }
}
