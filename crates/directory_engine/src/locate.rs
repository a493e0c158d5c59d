use directory_core::BusinessRecord;
use scraper::{ElementRef, Html};

use crate::config::Selectors;
use crate::extract::extract_record;

/// Listings found on one page, or the diagnostic notice shown instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocatedListings {
    pub records: Vec<BusinessRecord>,
    /// Trimmed text of the "no results" element, looked up only when no
    /// listing matched. Diagnostic; never changes control flow.
    pub no_results_notice: Option<String>,
}

/// Parses `html` and extracts every listing fragment in document order.
///
/// Malformed markup never fails: the parser keeps whatever it understood,
/// and a page with no recognizable fragments comes back empty.
pub fn scan_page(html: &str, selectors: &Selectors) -> LocatedListings {
    let doc = Html::parse_document(html);
    let fragments: Vec<ElementRef<'_>> = doc.select(&selectors.listing_item).collect();

    if fragments.is_empty() {
        let no_results_notice = doc
            .select(&selectors.no_results)
            .next()
            .map(|notice| notice.text().collect::<String>().trim().to_string());
        return LocatedListings {
            records: Vec::new(),
            no_results_notice,
        };
    }

    let records = fragments
        .into_iter()
        .map(|fragment| extract_record(fragment, selectors))
        .collect();

    LocatedListings {
        records,
        no_results_notice: None,
    }
}
