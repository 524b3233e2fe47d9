use crate::aggregator::{aggregate, distinct_years, Summary};
use crate::error::LookupError;
use crate::models::{normalize_text, CountrySummary, MatchRecord};
use tracing::{debug, warn};

/// The finals and their per-country summary, built once at startup and only
/// read afterwards.
#[derive(Debug, Clone)]
pub struct Dashboard {
    records: Vec<MatchRecord>,
    summary: Summary,
    years: Vec<i32>,
}

impl Dashboard {
    pub fn new(records: Vec<MatchRecord>) -> Self {
        let summary = aggregate(&records);
        let years = distinct_years(&records);
        Self {
            records,
            summary,
            years,
        }
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn summary(&self) -> &Summary {
        &self.summary
    }

    pub fn years(&self) -> &[i32] {
        &self.years
    }

    /// The query gets the same whitespace cleanup as the loaded names.
    pub fn stats_for_country(&self, name: &str) -> Result<&CountrySummary, LookupError> {
        let name = normalize_text(name);
        debug!(country = %name, "country lookup");
        self.summary
            .countries
            .binary_search_by(|c| c.country.as_str().cmp(name.as_str()))
            .map(|index| &self.summary.countries[index])
            .map_err(|_| LookupError::CountryNotFound(name))
    }

    /// First record for `year` in load order. A second record for the same
    /// year is a data error and is logged, not merged.
    pub fn stats_for_year(&self, year: i32) -> Result<&MatchRecord, LookupError> {
        debug!(year, "year lookup");
        let mut matches = self.records.iter().filter(|r| r.year == year);
        let first = matches.next().ok_or(LookupError::YearNotFound(year))?;

        let extra = matches.count();
        if extra > 0 {
            warn!(
                year,
                duplicates = extra,
                winner = %first.winner,
                "multiple finals recorded for one year; using the first"
            );
        }
        Ok(first)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn final_of(year: i32, winner: &str, runner_up: &str, attendance: Option<u64>) -> MatchRecord {
        MatchRecord {
            year,
            winner: winner.to_string(),
            runner_up: runner_up.to_string(),
            venue: format!("{year} Stadium"),
            location: format!("{year} City"),
            attendance,
        }
    }

    fn dashboard() -> Dashboard {
        Dashboard::new(vec![
            final_of(2014, "Germany", "Argentina", Some(74_738)),
            final_of(2018, "France", "Croatia", Some(78_011)),
            final_of(2022, "Argentina", "France", Some(88_966)),
        ])
    }

    #[test]
    fn country_lookup_returns_summary() {
        let dashboard = dashboard();
        let argentina = dashboard.stats_for_country("Argentina").unwrap();
        assert_eq!((argentina.wins, argentina.runner_ups), (1, 1));

        let croatia = dashboard.stats_for_country("Croatia").unwrap();
        assert_eq!((croatia.wins, croatia.runner_ups), (0, 1));
    }

    #[test]
    fn country_query_is_normalized_before_lookup() {
        let dashboard = dashboard();
        let padded = dashboard.stats_for_country(" Argentina\u{a0}").unwrap();
        assert_eq!(padded.country, "Argentina");
        assert_eq!(
            dashboard.stats_for_country("Cote\u{a0}d'Ivoire ").unwrap_err(),
            LookupError::CountryNotFound("Cote d'Ivoire".to_string())
        );
    }

    #[test]
    fn unknown_country_is_not_found() {
        let err = dashboard().stats_for_country("Nonexistent").unwrap_err();
        assert_eq!(err, LookupError::CountryNotFound("Nonexistent".to_string()));
    }

    #[test]
    fn year_lookup_returns_record_unchanged() {
        let dashboard = dashboard();
        let record = dashboard.stats_for_year(2022).unwrap();
        assert_eq!(record, &final_of(2022, "Argentina", "France", Some(88_966)));
    }

    #[test]
    fn unknown_year_is_not_found() {
        assert_eq!(
            dashboard().stats_for_year(1942).unwrap_err(),
            LookupError::YearNotFound(1942)
        );
    }

    #[test]
    fn duplicate_year_resolves_to_first_in_load_order() {
        let dashboard = Dashboard::new(vec![
            final_of(1950, "Uruguay", "Brazil", Some(173_850)),
            final_of(1950, "Brazil", "Uruguay", None),
        ]);
        let record = dashboard.stats_for_year(1950).unwrap();
        assert_eq!(record.winner, "Uruguay");
        assert_eq!(dashboard.years(), &[1950]);
    }

    #[test]
    fn lookups_are_repeatable() {
        let dashboard = dashboard();
        assert_eq!(
            dashboard.stats_for_country("France").unwrap(),
            dashboard.stats_for_country("France").unwrap()
        );
        assert_eq!(
            dashboard.stats_for_year(2018).unwrap(),
            dashboard.stats_for_year(2018).unwrap()
        );
    }

    #[test]
    fn empty_dashboard_finds_nothing() {
        let dashboard = Dashboard::new(Vec::new());
        assert!(dashboard.summary().is_empty());
        assert!(dashboard.stats_for_country("Brazil").is_err());
        assert!(dashboard.stats_for_year(2022).is_err());
    }
}
