use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // Data source configuration
    pub data_source_mode: DataSourceMode,
    pub data_file: String,
    pub data_url: Option<String>,
    pub output_directory: Option<String>,
    // Initial menu selections
    pub default_country: String,
    pub default_year: i32,
    /// Historical name -> canonical name, applied to winners and runners-up
    pub name_aliases: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataSourceMode {
    #[serde(rename = "local")]
    Local,
    #[serde(rename = "internet")]
    Internet,
}

impl Default for Config {
    fn default() -> Self {
        let mut name_aliases = BTreeMap::new();
        name_aliases.insert("West Germany".to_string(), "Germany".to_string());

        Self {
            data_source_mode: DataSourceMode::Local,
            data_file: "data/world_cup_finals.csv".to_string(),
            data_url: None,
            output_directory: Some("output".to_string()),
            default_country: "Argentina".to_string(),
            default_year: 2022,
            name_aliases,
        }
    }
}

impl Config {
    pub fn load_from_file(file_path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(file_path).map_err(|source| ConfigError::Read {
            path: file_path.to_string(),
            source,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: file_path.to_string(),
            message: e.to_string(),
        })
    }

    pub fn save_to_file(&self, file_path: &str) -> Result<(), ConfigError> {
        let write_err = |message: String| ConfigError::Write {
            path: file_path.to_string(),
            message,
        };
        let content = toml::to_string_pretty(self).map_err(|e| write_err(e.to_string()))?;
        std::fs::write(file_path, content).map_err(|e| write_err(e.to_string()))
    }
}

/// One World Cup final. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Winners")]
    pub winner: String,
    #[serde(rename = "Runners-up")]
    pub runner_up: String,
    #[serde(rename = "Venue")]
    pub venue: String,
    #[serde(rename = "Location")]
    pub location: String,
    #[serde(rename = "Attendance")]
    pub attendance: Option<u64>,
}

/// Per-country tally of final appearances.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    #[serde(rename = "Country")]
    pub country: String,
    #[serde(rename = "Wins")]
    pub wins: u32,
    #[serde(rename = "RunnerUps")]
    pub runner_ups: u32,
}

/// Replace non-breaking spaces with ordinary spaces and trim the result
pub fn normalize_text(value: &str) -> String {
    value.replace('\u{a0}', " ").trim().to_string()
}
