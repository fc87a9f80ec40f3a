//! Listing-page parsing: pagination resolution and link collection.

use scraper::{ElementRef, Html};

use crate::error::{LarderError, Result};
use crate::selectors::{ARTICLE, LINK, PAGE_LINK, PAGINATION, PAGINATION_NEXT};

/// Resolve how many pages the listing archive spans.
///
/// The theme renders numbered page links followed by a next-page
/// control, so the element right before the control is the last
/// numbered page. Its link text holds the page count.
///
/// A listing with no pagination control at all reports
/// [`LarderError::NoPagination`]; a control that is present but cannot
/// be read reports [`LarderError::Pagination`]. Never guesses.
pub fn resolve_max_page(doc: &Html) -> Result<u32> {
    let pagination = doc
        .select(&PAGINATION)
        .next()
        .ok_or(LarderError::NoPagination)?;
    let next = pagination
        .select(&PAGINATION_NEXT)
        .next()
        .ok_or_else(|| LarderError::Pagination("no next-page control".into()))?;
    let last = next
        .prev_siblings()
        .find_map(ElementRef::wrap)
        .ok_or_else(|| LarderError::Pagination("nothing precedes the next-page control".into()))?;
    let text = last
        .select(&PAGE_LINK)
        .next()
        .map(|a| a.text().collect::<String>())
        .ok_or_else(|| LarderError::Pagination("last page entry has no link".into()))?;

    let digits: String = text
        .chars()
        .skip_while(|c| !c.is_ascii_digit())
        .take_while(|c| c.is_ascii_digit())
        .collect();
    if digits.is_empty() {
        return Err(LarderError::Pagination(format!(
            "no page number in {text:?}"
        )));
    }
    digits
        .parse()
        .map_err(|_| LarderError::Pagination(format!("page number out of range in {text:?}")))
}

/// Every recipe link on a listing page, in document order: the first
/// href-carrying anchor of each article entry. Duplicates across pages
/// are kept; storage is keyed by URL, so a duplicate write overwrites
/// an identical file.
pub fn collect_links(doc: &Html) -> Vec<String> {
    doc.select(&ARTICLE)
        .filter_map(|article| article.select(&LINK).next())
        .filter_map(|a| a.value().attr("href"))
        .map(str::to_string)
        .collect()
}
