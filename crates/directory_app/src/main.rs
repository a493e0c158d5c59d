//! Command-line entry point for the directory scraper.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use directory_engine::{
    harvest, write_csv, FetchSettings, ReqwestFetcher, ScrapeConfig, SelectorSpec, Selectors,
};

/// Scrape business-directory listings into a CSV file.
#[derive(Debug, Parser)]
#[command(name = "directory_scraper")]
struct Cli {
    /// Number of result pages to visit.
    #[arg(default_value_t = 6000)]
    pages: u32,

    /// Where to write the CSV output.
    #[arg(long, default_value = "professionals.csv")]
    output: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    engine_logging::initialize_terminal(log::LevelFilter::Info);
    let cli = Cli::parse();

    let config = ScrapeConfig::default();
    let selectors =
        Selectors::compile(&SelectorSpec::default()).context("selector configuration")?;
    let fetcher = ReqwestFetcher::new(FetchSettings::default());

    let report = harvest(&fetcher, &config, &selectors, cli.pages).await;
    if report.summary.stopped_early {
        log::warn!(
            "run stopped early after {} pages",
            report.summary.pages_visited
        );
    }

    match write_csv(&cli.output, &report.records).context("writing output file")? {
        Some(path) => log::info!(
            "wrote {} records to {}",
            report.records.len(),
            path.display()
        ),
        None => log::warn!("no records were collected; output file not created"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn cli_defaults_match_the_production_run() {
        let cli = Cli::parse_from(["directory_scraper"]);
        assert_eq!(cli.pages, 6000);
        assert_eq!(cli.output, PathBuf::from("professionals.csv"));
    }

    #[test]
    fn cli_accepts_page_count_and_output_path() {
        let cli = Cli::parse_from(["directory_scraper", "12", "--output", "out.csv"]);
        assert_eq!(cli.pages, 12);
        assert_eq!(cli.output, PathBuf::from("out.csv"));
    }
}
