use crate::packing::WorkIntensity;
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
    pub planner: PlannerConfig,
    pub export: ExportConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Reads `.env` and the environment. Values are checked where they are used,
    /// so a stale variable only fails the runs that depend on it.
    pub fn load() -> Self {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("NOMAD_PACK_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let default_work_intensity = env::var("NOMAD_PACK_DEFAULT_WORK_INTENSITY").ok();

        let directory = env::var("NOMAD_PACK_EXPORT_DIR")
            .map(|raw| PathBuf::from(raw.trim()))
            .unwrap_or_else(|_| PathBuf::from("."));

        let log_level = env::var("NOMAD_PACK_LOG_LEVEL").unwrap_or_else(|_| "warn".to_string());

        Self {
            environment,
            planner: PlannerConfig {
                default_work_intensity,
            },
            export: ExportConfig { directory },
            telemetry: TelemetryConfig { log_level },
        }
    }
}

/// Defaults applied when the caller leaves a trip parameter unspecified.
#[derive(Debug, Clone, Default)]
pub struct PlannerConfig {
    /// Raw `NOMAD_PACK_DEFAULT_WORK_INTENSITY`, if set.
    pub default_work_intensity: Option<String>,
}

impl PlannerConfig {
    pub fn work_intensity(&self) -> Result<WorkIntensity, ConfigError> {
        match &self.default_work_intensity {
            Some(raw) => raw
                .parse::<WorkIntensity>()
                .map_err(|_| ConfigError::InvalidWorkIntensity { value: raw.clone() }),
            None => Ok(WorkIntensity::default()),
        }
    }
}

/// Where Markdown exports land when no filename is given.
#[derive(Debug, Clone)]
pub struct ExportConfig {
    pub directory: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidWorkIntensity { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidWorkIntensity { value } => write!(
                f,
                "NOMAD_PACK_DEFAULT_WORK_INTENSITY must be light, medium, or heavy (got '{}')",
                value
            ),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::env_guard;
    use std::env;

    fn reset_env() {
        env::remove_var("NOMAD_PACK_ENV");
        env::remove_var("NOMAD_PACK_DEFAULT_WORK_INTENSITY");
        env::remove_var("NOMAD_PACK_EXPORT_DIR");
        env::remove_var("NOMAD_PACK_LOG_LEVEL");
    }

    #[test]
    fn load_uses_defaults_when_env_missing() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let config = AppConfig::load();
        assert_eq!(config.environment, AppEnvironment::Development);
        assert_eq!(
            config.planner.work_intensity().expect("default intensity"),
            WorkIntensity::Medium
        );
        assert_eq!(config.export.directory, PathBuf::from("."));
        assert_eq!(config.telemetry.log_level, "warn");
    }

    #[test]
    fn env_overrides_defaults() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let dir = tempfile::tempdir().expect("temp dir");
        env::set_var("NOMAD_PACK_ENV", "ci");
        env::set_var("NOMAD_PACK_DEFAULT_WORK_INTENSITY", "Heavy");
        env::set_var("NOMAD_PACK_EXPORT_DIR", dir.path());
        env::set_var("NOMAD_PACK_LOG_LEVEL", "nomad_pack=debug");

        let config = AppConfig::load();
        reset_env();

        assert_eq!(config.environment, AppEnvironment::Test);
        assert_eq!(
            config.planner.work_intensity().expect("heavy parses"),
            WorkIntensity::Heavy
        );
        assert_eq!(config.export.directory, dir.path());
        assert_eq!(config.telemetry.log_level, "nomad_pack=debug");
    }

    #[test]
    fn unknown_work_intensity_only_fails_when_resolved() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        env::set_var("NOMAD_PACK_DEFAULT_WORK_INTENSITY", "extreme");
        let config = AppConfig::load();
        reset_env();

        let err = config
            .planner
            .work_intensity()
            .expect_err("invalid intensity rejected");
        assert!(matches!(err, ConfigError::InvalidWorkIntensity { ref value } if value == "extreme"));
    }

    #[test]
    fn missing_export_dir_does_not_block_loading() {
        let _lock = env_guard().lock().expect("env mutex poisoned");
        reset_env();
        let dir = tempfile::tempdir().expect("temp dir");
        let missing = dir.path().join("not-here");
        env::set_var("NOMAD_PACK_EXPORT_DIR", &missing);
        let config = AppConfig::load();
        reset_env();

        assert_eq!(config.export.directory, missing);
    }
}
