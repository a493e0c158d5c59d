use directory_core::{update, BusinessRecord, PageOutcome, RunState, RunSummary, Step};

use crate::config::{ScrapeConfig, Selectors};
use crate::fetch::Fetcher;
use crate::locate::scan_page;

/// Everything a finished run hands back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Accumulated records in extraction order.
    pub records: Vec<BusinessRecord>,
    pub summary: RunSummary,
}

/// Scrapes pages `1..=page_count` sequentially.
///
/// One page is fully fetched, scanned and extracted before the next starts;
/// the only early exit is the consecutive-failure threshold. Partial results
/// are always returned.
pub async fn harvest(
    fetcher: &dyn Fetcher,
    config: &ScrapeConfig,
    selectors: &Selectors,
    page_count: u32,
) -> RunReport {
    let mut state = RunState::new(config.max_failed_attempts);

    for page in 1..=page_count {
        let url = config.page_url(page);
        log::info!("scraping page {page}: {url}");

        let outcome = match fetcher.fetch(&url).await {
            Ok(markup) => {
                let located = scan_page(&markup, selectors);
                if located.records.is_empty() {
                    match located.no_results_notice {
                        Some(notice) => log::warn!("page {page} has no listings: {notice}"),
                        None => log::warn!(
                            "page {page} has no listings and no notice; \
                             the page layout may have changed"
                        ),
                    }
                    PageOutcome::Empty
                } else {
                    log::info!("found {} listings on page {page}", located.records.len());
                    PageOutcome::Listings(located.records)
                }
            }
            Err(err) => {
                log::error!("failed to fetch page {page}: {err}");
                PageOutcome::Failed
            }
        };

        let (next, step) = update(state, outcome);
        state = next;
        if let Step::Stop(reason) = step {
            log::warn!("stopping after page {page}: {reason}");
            break;
        }
    }

    let summary = state.summary();
    RunReport {
        records: state.into_records(),
        summary,
    }
}
