use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Top-level cadence configuration.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CadenceConfig {
    /// Reporting window.
    pub period: PeriodToml,

    /// I/O settings.
    #[serde(default)]
    pub io: IoConfig,

    /// Request selection and bucketing settings.
    #[serde(default)]
    pub report: ReportToml,
}

impl CadenceConfig {
    /// Reads and parses a TOML config file.
    pub fn load(path: &Path) -> Result<Self> {
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

/// Window bounds as RFC 3339 strings.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PeriodToml {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    pub events: Option<PathBuf>,
    pub output: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ReportToml {
    #[serde(default = "default_lifecycle")]
    pub lifecycle: String,
    #[serde(default = "default_utc_offset")]
    pub utc_offset: String,
    #[serde(default)]
    pub project: Option<u64>,
    #[serde(default = "default_true")]
    pub created_within_period: bool,
}

impl Default for ReportToml {
    fn default() -> Self {
        Self {
            lifecycle: default_lifecycle(),
            utc_offset: default_utc_offset(),
            project: None,
            created_within_period: true,
        }
    }
}

fn default_lifecycle() -> String {
    "merged".to_string()
}
fn default_utc_offset() -> String {
    "+00:00".to_string()
}
fn default_true() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_uses_defaults() {
        let config: CadenceConfig = toml::from_str(
            r#"
            [period]
            start = "2022-10-01T00:00:00Z"
            end = "2023-03-28T00:00:00Z"
            "#,
        )
        .unwrap();
        assert_eq!(config.period.start, "2022-10-01T00:00:00Z");
        assert!(config.io.events.is_none());
        assert_eq!(config.report.lifecycle, "merged");
        assert_eq!(config.report.utc_offset, "+00:00");
        assert_eq!(config.report.project, None);
        assert!(config.report.created_within_period);
    }

    #[test]
    fn full_config() {
        let config: CadenceConfig = toml::from_str(
            r#"
            [period]
            start = "2022-02-01T00:00:00+01:00"
            end = "2022-02-28T00:00:00+01:00"

            [io]
            events = "events.json"
            output = "report.json"

            [report]
            lifecycle = "closed"
            utc_offset = "+01:00"
            project = 7
            created_within_period = false
            "#,
        )
        .unwrap();
        assert_eq!(config.io.events, Some(PathBuf::from("events.json")));
        assert_eq!(config.io.output, Some(PathBuf::from("report.json")));
        assert_eq!(config.report.lifecycle, "closed");
        assert_eq!(config.report.project, Some(7));
        assert!(!config.report.created_within_period);
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result: Result<CadenceConfig, _> = toml::from_str(
            r#"
            [period]
            start = "2022-02-01T00:00:00Z"
            end = "2022-02-28T00:00:00Z"

            [report]
            average = true
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn period_is_required() {
        let result: Result<CadenceConfig, _> = toml::from_str("[io]\nevents = \"e.json\"\n");
        assert!(result.is_err());
    }

    #[test]
    fn load_missing_file() {
        let err = CadenceConfig::load(Path::new("/no/such/cadence.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
