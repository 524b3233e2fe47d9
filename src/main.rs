mod aggregator;
mod error;
mod loader;
mod logging;
mod lookup;
mod models;
mod names;
mod presenter;
mod selection;

use anyhow::{Context, Result};
use clap::{value_parser, Arg, ArgAction, Command};
use loader::DatasetLoader;
use lookup::Dashboard;
use models::{Config, DataSourceMode, MatchRecord};
use names::CanonicalNames;
use selection::{render_selection, run_selection_loop, Selection};
use std::fs;
use std::path::Path;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    logging::init_tracing();

    let matches = Command::new("worldcup-dashboard")
        .version("1.0")
        .about("Summarizes FIFA World Cup finals by country and year")
        .arg(
            Arg::new("config")
                .short('c')
                .long("config")
                .value_name("FILE")
                .help("Configuration file path")
                .default_value("config.toml"),
        )
        .arg(
            Arg::new("country")
                .long("country")
                .value_name("NAME")
                .help("Initially selected country"),
        )
        .arg(
            Arg::new("year")
                .long("year")
                .value_name("YEAR")
                .value_parser(value_parser!(i32))
                .help("Initially selected World Cup year"),
        )
        .arg(
            Arg::new("interactive")
                .short('i')
                .long("interactive")
                .action(ArgAction::SetTrue)
                .help("Keep reading country/year selections from stdin"),
        )
        .get_matches();

    let config_file = matches
        .get_one::<String>("config")
        .map(String::as_str)
        .unwrap_or("config.toml");

    // Load or create configuration
    let config = if Path::new(config_file).exists() {
        println!("📋 Loading configuration from: {}", config_file);
        Config::load_from_file(config_file)?
    } else {
        println!("📝 Creating default configuration file: {}", config_file);
        let default_config = Config::default();
        default_config.save_to_file(config_file)?;
        default_config
    };

    let names = CanonicalNames::new(&config.name_aliases)?;
    info!(aliases = names.len(), "canonical name mapping ready");

    let records = load_records(&config, &names).await?;
    let dashboard = Dashboard::new(records);
    if dashboard.summary().is_empty() {
        println!("⚠️  The dataset contains no finals");
    }
    info!(
        finals = dashboard.records().len(),
        countries = dashboard.summary().countries.len(),
        wins = dashboard.summary().total_wins(),
        runner_ups = dashboard.summary().total_runner_ups(),
        "summary built"
    );

    let output_dir = config.output_directory.as_deref().unwrap_or("output");
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;
    clean_output_directory(output_dir)?;

    generate_country_summary_csv(&dashboard, output_dir)?;
    generate_finals_csv(dashboard.records(), output_dir)?;
    generate_menus_report(&dashboard, output_dir)?;

    let country = matches
        .get_one::<String>("country")
        .cloned()
        .unwrap_or_else(|| config.default_country.clone());
    let year = matches
        .get_one::<i32>("year")
        .copied()
        .unwrap_or(config.default_year);

    println!("\n⚽ FIFA World Cup Dashboard");
    println!("==========================\n");
    print!("{}", presenter::map_legend(dashboard.summary()));
    println!();
    print!("{}", render_selection(&dashboard, &Selection::Country(country)));
    println!();
    print!("{}", render_selection(&dashboard, &Selection::Year(year)));

    println!("\n📂 Reports written to: {}", output_dir);

    if matches.get_flag("interactive") {
        println!();
        let stdin = std::io::stdin();
        run_selection_loop(&dashboard, stdin.lock(), std::io::stdout())?;
    }

    Ok(())
}

async fn load_records(config: &Config, names: &CanonicalNames) -> Result<Vec<MatchRecord>> {
    let loader = DatasetLoader::new(names);

    let records = match config.data_source_mode {
        DataSourceMode::Local => {
            println!("📂 Reading finals from: {}", config.data_file);
            loader.load_file(&config.data_file)?
        }
        DataSourceMode::Internet => {
            let url = config
                .data_url
                .as_deref()
                .context("data_source_mode is \"internet\" but data_url is not set")?;
            loader.load_url(url).await?
        }
    };

    println!("   ✅ Loaded {} World Cup finals", records.len());
    Ok(records)
}

/// Map feed: one row per country with its wins and runner-up finishes.
fn generate_country_summary_csv(dashboard: &Dashboard, output_dir: &str) -> Result<()> {
    use csv::Writer;

    let csv_path = Path::new(output_dir).join("country_summary.csv");
    let mut writer = Writer::from_path(&csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;

    for summary in &dashboard.summary().countries {
        writer.serialize(summary)?;
    }

    writer.flush()?;
    Ok(())
}

fn generate_finals_csv(records: &[MatchRecord], output_dir: &str) -> Result<()> {
    use csv::Writer;

    let csv_path = Path::new(output_dir).join("finals.csv");
    let mut writer = Writer::from_path(&csv_path)
        .with_context(|| format!("Failed to create {}", csv_path.display()))?;

    for record in records {
        writer.serialize(record)?;
    }

    writer.flush()?;
    Ok(())
}

fn generate_menus_report(dashboard: &Dashboard, output_dir: &str) -> Result<()> {
    let mut content = String::new();
    content.push_str("Selectable Countries\n");
    content.push_str("====================\n");
    for country in &dashboard.summary().countries {
        content.push_str(&format!(
            "{} ({} wins, {} runner-up finishes)\n",
            country.country,
            country.wins,
            country.runner_ups
        ));
    }

    content.push_str("\nSelectable Years\n");
    content.push_str("================\n");
    for year in dashboard.years() {
        content.push_str(&format!("{}\n", year));
    }

    fs::write(Path::new(output_dir).join("menus.txt"), content)?;
    Ok(())
}

fn clean_output_directory(output_dir: &str) -> Result<()> {
    let output_path = Path::new(output_dir);

    if !output_path.exists() {
        return Ok(());
    }

    let items_to_clean = ["country_summary.csv", "finals.csv", "menus.txt"];

    for item in &items_to_clean {
        let item_path = output_path.join(item);
        if item_path.exists() {
            fs::remove_file(&item_path)
                .with_context(|| format!("Failed to remove {}", item_path.display()))?;
        }
    }

    Ok(())
}
