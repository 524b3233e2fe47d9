//! Display-ready views of lookup results.

use crate::aggregator::Summary;
use crate::error::LookupError;
use crate::models::{CountrySummary, MatchRecord};
use std::fmt;

pub const UNKNOWN: &str = "unknown";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryView {
    pub country: String,
    pub heading: String,
    pub wins_label: String,
    pub runner_ups_label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearView {
    pub year: i32,
    pub heading: String,
    pub winner_label: String,
    pub runner_up_label: String,
    pub venue_label: String,
    pub location_label: String,
    pub attendance_label: String,
}

pub fn describe_country(summary: &CountrySummary) -> CountryView {
    CountryView {
        country: summary.country.clone(),
        heading: format!("Stats for {}:", summary.country),
        wins_label: format!("🏆 Wins: {}", summary.wins),
        runner_ups_label: format!("🥈 Runner-up finishes: {}", summary.runner_ups),
    }
}

pub fn describe_year(record: &MatchRecord) -> YearView {
    let attendance = record
        .attendance
        .map(group_thousands)
        .unwrap_or_else(|| UNKNOWN.to_string());

    YearView {
        year: record.year,
        heading: format!("World Cup {} Results:", record.year),
        winner_label: format!("🏆 Winner: {}", record.winner),
        runner_up_label: format!("🥈 Runner-up: {}", record.runner_up),
        venue_label: format!("🏟️ Venue: {}", record.venue),
        location_label: format!("📍 Location: {}", record.location),
        attendance_label: format!("👥 Attendance: {}", attendance),
    }
}

/// Panel shown in place of a view when the selection has no data.
pub fn placeholder(error: &LookupError) -> String {
    format!("⚠️  {}\n", error)
}

impl fmt::Display for CountryView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        writeln!(f, "   {}", self.wins_label)?;
        writeln!(f, "   {}", self.runner_ups_label)
    }
}

impl fmt::Display for YearView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.heading)?;
        for label in [
            &self.winner_label,
            &self.runner_up_label,
            &self.venue_label,
            &self.location_label,
            &self.attendance_label,
        ] {
            writeln!(f, "   {}", label)?;
        }
        Ok(())
    }
}

/// Win counts per country as a text bar chart, most wins first.
/// Countries that only reached finals are listed with an empty bar.
pub fn map_legend(summary: &Summary) -> String {
    let mut rows: Vec<&CountrySummary> = summary.countries.iter().collect();
    rows.sort_by(|a, b| b.wins.cmp(&a.wins).then_with(|| a.country.cmp(&b.country)));

    let width = rows
        .iter()
        .map(|c| c.country.chars().count())
        .max()
        .unwrap_or(0);

    let mut content = String::new();
    content.push_str("FIFA World Cup Wins by Country\n");
    content.push_str("==============================\n");
    for row in rows {
        let bar = if row.wins == 0 {
            "·".to_string()
        } else {
            "█".repeat(row.wins as usize)
        };
        content.push_str(&format!(
            "{:<width$}  {} {}\n",
            row.country,
            bar,
            row.wins,
            width = width
        ));
    }
    content
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::aggregate;

    fn record(attendance: Option<u64>) -> MatchRecord {
        MatchRecord {
            year: 2022,
            winner: "Argentina".to_string(),
            runner_up: "France".to_string(),
            venue: "Lusail Stadium".to_string(),
            location: "Lusail, Qatar".to_string(),
            attendance,
        }
    }

    #[test]
    fn country_view_labels() {
        let view = describe_country(&CountrySummary {
            country: "Netherlands".to_string(),
            wins: 0,
            runner_ups: 3,
        });

        assert_eq!(view.country, "Netherlands");
        assert_eq!(view.heading, "Stats for Netherlands:");
        assert_eq!(view.wins_label, "🏆 Wins: 0");
        assert_eq!(view.runner_ups_label, "🥈 Runner-up finishes: 3");
    }

    #[test]
    fn year_view_keeps_record_fields() {
        let view = describe_year(&record(Some(88_966)));

        assert_eq!(view.year, 2022);
        assert_eq!(view.heading, "World Cup 2022 Results:");
        assert_eq!(view.winner_label, "🏆 Winner: Argentina");
        assert_eq!(view.runner_up_label, "🥈 Runner-up: France");
        assert_eq!(view.venue_label, "🏟️ Venue: Lusail Stadium");
        assert_eq!(view.location_label, "📍 Location: Lusail, Qatar");
        assert_eq!(view.attendance_label, "👥 Attendance: 88,966");
    }

    #[test]
    fn missing_attendance_is_unknown() {
        let view = describe_year(&record(None));
        assert_eq!(view.attendance_label, "👥 Attendance: unknown");
    }

    #[test]
    fn views_render_every_label() {
        let text = describe_year(&record(None)).to_string();
        assert_eq!(text.lines().count(), 6);
        assert!(text.starts_with("World Cup 2022 Results:\n"));
    }

    #[test]
    fn placeholder_mentions_the_missing_key() {
        let text = placeholder(&LookupError::CountryNotFound("Atlantis".to_string()));
        assert!(text.contains("Atlantis"));
    }

    #[test]
    fn legend_orders_by_wins_and_keeps_zero_win_countries() {
        let mut records = vec![record(None), record(None)];
        records[1].year = 1986;
        records[1].runner_up = "Germany".to_string();

        let legend = map_legend(&aggregate(&records));
        let lines: Vec<&str> = legend.lines().skip(2).collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Argentina"));
        assert!(lines[0].ends_with("██ 2"));
        assert!(lines[1].starts_with("France"));
        assert!(lines[2].starts_with("Germany"));
        assert!(lines[2].ends_with("· 0"));
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(173_850), "173,850");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
    }
}
