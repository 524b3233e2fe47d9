//! Error taxonomy for loading, configuration and lookups.

/// Startup failure while reading or parsing the finals dataset. Fatal.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("Failed to read dataset {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch dataset from {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset is missing required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },

    #[error("Missing {column} on data line {line}")]
    MissingField { line: usize, column: String },

    #[error("Invalid year {value:?} on data line {line}")]
    InvalidYear { line: usize, value: String },
}

/// A query key that is not present in the loaded data. Recoverable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LookupError {
    #[error("No World Cup record for country {0:?}")]
    CountryNotFound(String),

    #[error("No World Cup final was played in {0}")]
    YearNotFound(i32),
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error in {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Failed to write config {path}: {message}")]
    Write { path: String, message: String },

    #[error("Name aliases form a cycle through {0:?}")]
    AliasCycle(String),
}
