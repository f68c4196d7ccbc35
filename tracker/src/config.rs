//! Runtime configuration
//!
//! Values come from the environment, after loading a `.env` file from the
//! current directory or its parents when one exists. Command-line flags
//! override whatever is found here.
//!
//! ## Variables
//! - `TRACKER_DATA_DIR`: directory of the file-backed store (default `./data`)
//! - `TRACKER_LOG_LEVEL`: base tracing level (default `info`)
//! - `TRACKER_TARGET_REPS`: rep count the rep-range recommendation calibrates to (default 6)

use std::path::PathBuf;

use crate::core::EngineConfig;
use crate::error::{TrackerError, TrackerResult};
use crate::services::FileStore;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackerConfig {
    pub data_dir: PathBuf,
    pub log_level: String,
    pub engine: EngineConfig,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(FileStore::DEFAULT_DIR),
            log_level: "info".to_string(),
            engine: EngineConfig::default(),
        }
    }
}

impl TrackerConfig {
    pub const DATA_DIR_VAR: &'static str = "TRACKER_DATA_DIR";
    pub const LOG_LEVEL_VAR: &'static str = "TRACKER_LOG_LEVEL";
    pub const TARGET_REPS_VAR: &'static str = "TRACKER_TARGET_REPS";

    /// Load `.env` if present, then read the process environment
    pub fn from_env() -> TrackerResult<Self> {
        // Missing .env files are fine; dotenv never overrides variables already set
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable source
    pub fn from_lookup<F>(lookup: F) -> TrackerResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(Self::DATA_DIR_VAR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(Self::LOG_LEVEL_VAR).filter(|v| !v.trim().is_empty()) {
            config.log_level = normalize_level(&level);
        }
        if let Some(raw) = lookup(Self::TARGET_REPS_VAR) {
            config.engine.default_target_reps = parse_target_reps(&raw)?;
        }

        Ok(config)
    }

    pub fn with_data_dir(mut self, data_dir: Option<PathBuf>) -> Self {
        if let Some(dir) = data_dir {
            self.data_dir = dir;
        }
        self
    }

    pub fn with_log_level(mut self, log_level: Option<String>) -> Self {
        if let Some(level) = log_level.filter(|v| !v.trim().is_empty()) {
            self.log_level = normalize_level(&level);
        }
        self
    }

    pub fn with_target_reps(mut self, target_reps: Option<u32>) -> TrackerResult<Self> {
        if let Some(reps) = target_reps {
            self.engine.default_target_reps = parse_target_reps(&reps.to_string())?;
        }
        Ok(self)
    }
}

fn normalize_level(raw: &str) -> String {
    raw.trim().to_lowercase()
}

fn parse_target_reps(raw: &str) -> TrackerResult<u32> {
    match raw.trim().parse::<u32>() {
        Ok(reps) if reps > 0 => Ok(reps),
        _ => Err(TrackerError::config(format!(
            "{} must be a positive integer, got '{}'",
            TrackerConfig::TARGET_REPS_VAR,
            raw
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_variables() {
        let config = TrackerConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, TrackerConfig::default());
        assert_eq!(config.engine.default_target_reps, 6);
    }

    #[test]
    fn test_reads_variables() {
        let config = TrackerConfig::from_lookup(lookup_from(&[
            ("TRACKER_DATA_DIR", "/tmp/lifts"),
            ("TRACKER_LOG_LEVEL", "DEBUG"),
            ("TRACKER_TARGET_REPS", "8"),
        ]))
        .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/tmp/lifts"));
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.engine.default_target_reps, 8);
    }

    #[test]
    fn test_invalid_target_reps_is_a_configuration_error() {
        for bad in ["zero", "0", "-3", ""] {
            let result = TrackerConfig::from_lookup(lookup_from(&[("TRACKER_TARGET_REPS", bad)]));
            assert!(matches!(result, Err(TrackerError::Configuration { .. })), "{bad}");
        }
    }

    #[test]
    fn test_flag_overrides() {
        let config = TrackerConfig::default()
            .with_data_dir(Some(PathBuf::from("elsewhere")))
            .with_log_level(None)
            .with_target_reps(Some(10))
            .unwrap();

        assert_eq!(config.data_dir, PathBuf::from("elsewhere"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.engine.default_target_reps, 10);
        assert!(TrackerConfig::default().with_target_reps(Some(0)).is_err());
    }

    #[test]
    fn test_log_level_flag_is_normalized_like_the_variable() {
        let from_flag = TrackerConfig::default().with_log_level(Some("  WARN ".to_string()));
        let from_env = TrackerConfig::from_lookup(lookup_from(&[("TRACKER_LOG_LEVEL", "  WARN ")])).unwrap();

        assert_eq!(from_flag.log_level, "warn");
        assert_eq!(from_flag.log_level, from_env.log_level);
        assert_eq!(TrackerConfig::default().with_log_level(Some("  ".to_string())).log_level, "info");
    }
}
