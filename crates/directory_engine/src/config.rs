use std::time::Duration;

use scraper::Selector;
use thiserror::Error;

/// Where to scrape and when to give up.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    pub base_url: String,
    /// Value of the fixed `what=` query parameter appended to every page URL.
    pub search_param: String,
    /// Consecutive non-productive pages tolerated before the run stops.
    pub max_failed_attempts: u32,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            base_url: "https://www.paginasamarillas.es/search/profesionales/all-ma/all-pr/all-is/all-ci/all-ba/all-pu/all-nc/"
                .to_string(),
            search_param: "profesionales".to_string(),
            max_failed_attempts: 5,
        }
    }
}

impl ScrapeConfig {
    /// URL for one result page: `{base_url}{page}?what={search_param}`.
    pub fn page_url(&self, page: u32) -> String {
        format!("{}{}?what={}", self.base_url, page, self.search_param)
    }
}

/// Transport-level settings for the page fetcher.
#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    /// Bounds of the uniform random pause before each request, in seconds.
    pub min_delay_secs: f64,
    pub max_delay_secs: f64,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            user_agent: "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                         (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                .to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            min_delay_secs: 2.0,
            max_delay_secs: 5.0,
        }
    }
}

/// CSS selector strings for the directory's page layout.
///
/// [`Selectors::compile`] turns them into usable selectors.
#[derive(Debug, Clone)]
pub struct SelectorSpec {
    pub listing_item: String,
    pub website: String,
    pub address_container: String,
    pub street: String,
    pub postal_code: String,
    pub locality: String,
    pub phone: String,
    pub no_results: String,
}

impl Default for SelectorSpec {
    fn default() -> Self {
        Self {
            listing_item: "div.listado-item".to_string(),
            website: "a.web".to_string(),
            address_container: "div.adress-row".to_string(),
            street: r#"span[itemprop="streetAddress"]"#.to_string(),
            postal_code: r#"span[itemprop="postalCode"]"#.to_string(),
            locality: r#"span[itemprop="addressLocality"]"#.to_string(),
            phone: r#"span[itemprop="telephone"]"#.to_string(),
            no_results: "div.text-center".to_string(),
        }
    }
}

/// Compiled selectors, built once before any page is fetched.
#[derive(Debug, Clone)]
pub struct Selectors {
    pub listing_item: Selector,
    pub website: Selector,
    pub address_container: Selector,
    pub street: Selector,
    pub postal_code: Selector,
    pub locality: Selector,
    pub phone: Selector,
    pub no_results: Selector,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid selector `{selector}`: {message}")]
    InvalidSelector { selector: String, message: String },
}

impl Selectors {
    /// Compiles every selector in `spec`, failing on the first invalid one.
    pub fn compile(spec: &SelectorSpec) -> Result<Self, ConfigError> {
        Ok(Self {
            listing_item: compile(&spec.listing_item)?,
            website: compile(&spec.website)?,
            address_container: compile(&spec.address_container)?,
            street: compile(&spec.street)?,
            postal_code: compile(&spec.postal_code)?,
            locality: compile(&spec.locality)?,
            phone: compile(&spec.phone)?,
            no_results: compile(&spec.no_results)?,
        })
    }
}

fn compile(selector: &str) -> Result<Selector, ConfigError> {
    Selector::parse(selector).map_err(|err| ConfigError::InvalidSelector {
        selector: selector.to_string(),
        message: err.to_string(),
    })
}
