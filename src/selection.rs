use crate::lookup::Dashboard;
use crate::presenter::{describe_country, describe_year, placeholder};
use anyhow::Result;
use std::io::{BufRead, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Country(String),
    Year(i32),
    ListCountries,
    ListYears,
    Help,
    Quit,
}

const HELP: &str = "\
Commands:
   country <name>   show wins and runner-up finishes for a country
   year <yyyy>      show the final played in that year
   countries        list selectable countries
   years            list selectable years
   quit             exit
";

pub fn parse_selection(line: &str) -> std::result::Result<Selection, String> {
    let line = line.trim();
    let (command, argument) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match (command.to_lowercase().as_str(), argument) {
        ("country", "") => Err("usage: country <name>".to_string()),
        ("country", name) => Ok(Selection::Country(name.to_string())),
        ("year", value) => value
            .parse::<i32>()
            .map(Selection::Year)
            .map_err(|_| "usage: year <yyyy>".to_string()),
        ("countries", _) => Ok(Selection::ListCountries),
        ("years", _) => Ok(Selection::ListYears),
        ("help", _) | ("?", _) => Ok(Selection::Help),
        ("quit", _) | ("exit", _) => Ok(Selection::Quit),
        _ => Err(format!("unknown command {:?}, try `help`", command)),
    }
}

/// Render one selection. Missing countries or years become a placeholder panel.
pub fn render_selection(dashboard: &Dashboard, selection: &Selection) -> String {
    match selection {
        Selection::Country(name) => match dashboard.stats_for_country(name) {
            Ok(summary) => describe_country(summary).to_string(),
            Err(e) => placeholder(&e),
        },
        Selection::Year(year) => match dashboard.stats_for_year(*year) {
            Ok(record) => describe_year(record).to_string(),
            Err(e) => placeholder(&e),
        },
        Selection::ListCountries => format!("{}\n", dashboard.summary().country_names().join(", ")),
        Selection::ListYears => {
            let years: Vec<String> = dashboard.years().iter().map(|y| y.to_string()).collect();
            format!("{}\n", years.join(", "))
        }
        Selection::Help => HELP.to_string(),
        Selection::Quit => String::new(),
    }
}

/// Read selections line by line until `quit` or end of input.
pub fn run_selection_loop<R: BufRead, W: Write>(
    dashboard: &Dashboard,
    input: R,
    mut output: W,
) -> Result<()> {
    write!(output, "{}", HELP)?;
    write!(output, "> ")?;
    output.flush()?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            write!(output, "> ")?;
            output.flush()?;
            continue;
        }

        match parse_selection(&line) {
            Ok(Selection::Quit) => break,
            Ok(selection) => write!(output, "{}", render_selection(dashboard, &selection))?,
            Err(message) => writeln!(output, "{}", message)?,
        }
        write!(output, "> ")?;
        output.flush()?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MatchRecord;

    fn dashboard() -> Dashboard {
        Dashboard::new(vec![
            MatchRecord {
                year: 1986,
                winner: "Argentina".to_string(),
                runner_up: "Germany".to_string(),
                venue: "Estadio Azteca".to_string(),
                location: "Mexico City, Mexico".to_string(),
                attendance: Some(114_600),
            },
            MatchRecord {
                year: 1990,
                winner: "Germany".to_string(),
                runner_up: "Argentina".to_string(),
                venue: "Stadio Olimpico".to_string(),
                location: "Rome, Italy".to_string(),
                attendance: Some(73_603),
            },
        ])
    }

    #[test]
    fn parses_commands() {
        assert_eq!(
            parse_selection("country  United States "),
            Ok(Selection::Country("United States".to_string()))
        );
        assert_eq!(parse_selection("YEAR 1990"), Ok(Selection::Year(1990)));
        assert_eq!(parse_selection("countries"), Ok(Selection::ListCountries));
        assert_eq!(parse_selection("exit"), Ok(Selection::Quit));
        assert!(parse_selection("year nineteen").is_err());
        assert!(parse_selection("country").is_err());
        assert!(parse_selection("dance").is_err());
    }

    #[test]
    fn renders_country_and_year_panels() {
        let dashboard = dashboard();

        let country = render_selection(&dashboard, &Selection::Country("Germany".to_string()));
        assert!(country.contains("🏆 Wins: 1"));
        assert!(country.contains("🥈 Runner-up finishes: 1"));

        let year = render_selection(&dashboard, &Selection::Year(1986));
        assert!(year.contains("🏟️ Venue: Estadio Azteca"));
        assert!(year.contains("👥 Attendance: 114,600"));
    }

    #[test]
    fn unknown_selection_renders_placeholder() {
        let dashboard = dashboard();
        let text = render_selection(&dashboard, &Selection::Year(1942));
        assert!(text.starts_with("⚠️"));
        assert!(text.contains("1942"));
    }

    #[test]
    fn loop_stops_at_quit() {
        let dashboard = dashboard();
        let input = "countries\nyear 1990\nquit\nyear 1986\n".as_bytes();
        let mut output = Vec::new();

        run_selection_loop(&dashboard, input, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();

        assert!(text.contains("Argentina, Germany"));
        assert!(text.contains("World Cup 1990 Results:"));
        assert!(!text.contains("World Cup 1986 Results:"));
    }
}
