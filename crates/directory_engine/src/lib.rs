//! Directory engine: IO pipeline for the scraping run.
mod config;
mod export;
mod extract;
mod fetch;
mod locate;
mod run;
mod types;

pub use config::{ConfigError, FetchSettings, ScrapeConfig, SelectorSpec, Selectors};
pub use export::{write_csv, ExportError};
pub use extract::extract_record;
pub use fetch::{Fetcher, ReqwestFetcher};
pub use locate::{scan_page, LocatedListings};
pub use run::{harvest, RunReport};
pub use types::{FailureKind, FetchError};
