use crate::error::LoadError;
use crate::models::{normalize_text, MatchRecord};
use crate::names::CanonicalNames;
use csv::{ReaderBuilder, StringRecord};
use regex::Regex;
use std::collections::HashSet;
use std::fs;
use std::sync::OnceLock;
use tracing::{debug, info, warn};

/// Accepted header spellings for each required column, first one is canonical.
const YEAR: &[&str] = &["Year"];
const WINNER: &[&str] = &["Winners", "Winner"];
const RUNNER_UP: &[&str] = &["Runners-up", "Runner-up", "Runners up", "Runner up"];
const VENUE: &[&str] = &["Venue"];
const LOCATION: &[&str] = &["Location"];
const ATTENDANCE: &[&str] = &["Attendance"];

fn attendance_regex() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^(\d{1,3}(?:,\d{3})+|\d+)(?:[^\d,]|$)").expect("attendance pattern is valid")
    })
}

struct Columns {
    year: usize,
    winner: usize,
    runner_up: usize,
    venue: usize,
    location: usize,
    attendance: usize,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, LoadError> {
        let normalized: Vec<String> = headers
            .iter()
            .map(|h| normalize_text(h.trim_start_matches('\u{feff}')).to_lowercase())
            .collect();

        let mut missing = Vec::new();
        let mut find = |names: &[&str]| -> usize {
            let found = normalized
                .iter()
                .position(|h| names.iter().any(|n| n.to_lowercase() == *h));
            found.unwrap_or_else(|| {
                missing.push(names[0].to_string());
                usize::MAX
            })
        };

        let columns = Columns {
            year: find(YEAR),
            winner: find(WINNER),
            runner_up: find(RUNNER_UP),
            venue: find(VENUE),
            location: find(LOCATION),
            attendance: find(ATTENDANCE),
        };

        if missing.is_empty() {
            Ok(columns)
        } else {
            Err(LoadError::MissingColumns { columns: missing })
        }
    }
}

/// Reads the finals table from disk or over HTTP into normalized records.
pub struct DatasetLoader<'a> {
    client: reqwest::Client,
    names: &'a CanonicalNames,
}

impl<'a> DatasetLoader<'a> {
    pub fn new(names: &'a CanonicalNames) -> Self {
        Self {
            client: reqwest::Client::new(),
            names,
        }
    }

    pub fn load_file(&self, file_path: &str) -> Result<Vec<MatchRecord>, LoadError> {
        let bytes = fs::read(file_path).map_err(|source| LoadError::Io {
            path: file_path.to_string(),
            source,
        })?;
        info!(path = file_path, bytes = bytes.len(), "read dataset");

        self.parse_bytes(bytes)
    }

    pub async fn load_url(&self, url: &str) -> Result<Vec<MatchRecord>, LoadError> {
        println!("🌐 Fetching data from: {}", url);
        let fetch_err = |message: String| LoadError::Fetch {
            url: url.to_string(),
            message,
        };

        let response = self
            .client
            .get(url)
            .timeout(std::time::Duration::from_secs(30))
            .send()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;

        if !response.status().is_success() {
            return Err(fetch_err(format!("HTTP status {}", response.status())));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| fetch_err(e.to_string()))?;
        info!(url, bytes = bytes.len(), "fetched dataset");

        self.parse_bytes(bytes.to_vec())
    }

    /// The published dataset is Latin-1; anything that is valid UTF-8 is taken as such.
    pub fn parse_bytes(&self, bytes: Vec<u8>) -> Result<Vec<MatchRecord>, LoadError> {
        let content = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                debug!("dataset is not UTF-8, decoding as Latin-1");
                e.into_bytes().into_iter().map(char::from).collect()
            }
        };
        self.parse_content(&content)
    }

    pub fn parse_content(&self, content: &str) -> Result<Vec<MatchRecord>, LoadError> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .from_reader(content.as_bytes());

        let columns = Columns::resolve(reader.headers()?)?;

        let mut records = Vec::new();
        for (index, row) in reader.records().enumerate() {
            let row = row?;
            if row.iter().all(|cell| normalize_text(cell).is_empty()) {
                continue;
            }
            records.push(self.parse_row(&row, &columns, index + 1)?);
        }

        warn_on_duplicate_years(&records);
        info!(records = records.len(), "loaded World Cup finals");
        Ok(records)
    }

    fn parse_row(&self, row: &StringRecord, columns: &Columns, line: usize) -> Result<MatchRecord, LoadError> {
        // a short row is malformed; a present but blank cell is not
        let cell = |index: usize, column: &[&str]| {
            row.get(index).ok_or_else(|| LoadError::MissingField {
                line,
                column: column[0].to_string(),
            })
        };
        let country = |index: usize, column: &[&str]| -> Result<String, LoadError> {
            let name = self.names.canonicalize(cell(index, column)?);
            if name.is_empty() {
                return Err(LoadError::MissingField {
                    line,
                    column: column[0].to_string(),
                });
            }
            Ok(name)
        };

        let raw_year = cell(columns.year, YEAR)?;
        let year = parse_year(raw_year).ok_or_else(|| LoadError::InvalidYear {
            line,
            value: raw_year.to_string(),
        })?;

        Ok(MatchRecord {
            year,
            winner: country(columns.winner, WINNER)?,
            runner_up: country(columns.runner_up, RUNNER_UP)?,
            venue: normalize_text(cell(columns.venue, VENUE)?),
            location: normalize_text(cell(columns.location, LOCATION)?),
            attendance: parse_attendance(cell(columns.attendance, ATTENDANCE)?),
        })
    }
}

fn parse_year(value: &str) -> Option<i32> {
    let value = normalize_text(value);
    if let Ok(year) = value.parse::<i32>() {
        return Some(year);
    }
    // spreadsheet exports sometimes write "1930.0"
    value
        .strip_suffix(".0")
        .and_then(|whole| whole.parse::<i32>().ok())
}

/// Leading number with optional thousands separators; footnote markers are
/// ignored. A badly grouped number such as "62,50" is unknown, not 62.
pub fn parse_attendance(value: &str) -> Option<u64> {
    let value = normalize_text(value);
    attendance_regex()
        .captures(&value)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().replace(',', "").parse::<u64>().ok())
}

fn warn_on_duplicate_years(records: &[MatchRecord]) {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.year) {
            warn!(
                year = record.year,
                "duplicate year in dataset; lookups use the first occurrence"
            );
        }
    }
}
