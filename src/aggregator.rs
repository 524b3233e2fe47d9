use crate::models::{CountrySummary, MatchRecord};
use std::collections::{BTreeMap, BTreeSet};

/// Per-country tallies derived from the finals, sorted by country name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub countries: Vec<CountrySummary>,
}

impl Summary {
    /// Sorted country names for the country menu
    pub fn country_names(&self) -> Vec<&str> {
        self.countries.iter().map(|c| c.country.as_str()).collect()
    }

    pub fn total_wins(&self) -> u32 {
        self.countries.iter().map(|c| c.wins).sum()
    }

    pub fn total_runner_ups(&self) -> u32 {
        self.countries.iter().map(|c| c.runner_ups).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }
}

/// Count wins and runner-up finishes per country.
///
/// The two tallies are outer-joined: a country that only ever lost a final
/// still gets an entry with zero wins, and vice versa.
pub fn aggregate(records: &[MatchRecord]) -> Summary {
    let mut tallies: BTreeMap<&str, (u32, u32)> = BTreeMap::new();

    for record in records {
        tallies.entry(record.winner.as_str()).or_default().0 += 1;
        tallies.entry(record.runner_up.as_str()).or_default().1 += 1;
    }

    let countries = tallies
        .into_iter()
        .map(|(country, (wins, runner_ups))| CountrySummary {
            country: country.to_string(),
            wins,
            runner_ups,
        })
        .collect();

    Summary { countries }
}

/// Sorted distinct years for the year menu
pub fn distinct_years(records: &[MatchRecord]) -> Vec<i32> {
    records
        .iter()
        .map(|r| r.year)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
