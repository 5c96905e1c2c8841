//! Hemisphere image extractor.
//!
//! Walks the hemisphere listing page, and for every item follows its detail
//! link, reads the full-resolution image URL and the title, then navigates
//! back so the next item is processed from the restored listing.
//!
//! # All-or-nothing
//!
//! A failure on any detail page (missing link, missing anchor, navigation
//! error) aborts the whole extraction and discards the records accumulated
//! so far; the caller sees a single error, never a partial list. Per-item
//! recovery would be a behavior change and is deliberately not done here.

use crate::error::ExtractError;
use crate::models::HemisphereRecord;
use crate::session::Session;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{debug, info, instrument};
use url::Url;

/// The hemisphere listing page, also the base for all relative links on it.
pub const HEMISPHERES_URL: &str = "https://marshemispheres.com/";

static ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("div.item").unwrap());
static HEADING: Lazy<Selector> = Lazy::new(|| Selector::parse("h3").unwrap());
static ITEM_LINK: Lazy<Selector> =
    Lazy::new(|| Selector::parse("a.itemLink.product-item").unwrap());
static LIST_ITEM: Lazy<Selector> = Lazy::new(|| Selector::parse("li").unwrap());
static ANCHOR: Lazy<Selector> = Lazy::new(|| Selector::parse("a").unwrap());

/// A listing entry before its detail page has been visited.
#[derive(Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Display title from the item heading.
    pub title: String,
    /// Detail page path, relative to [`HEMISPHERES_URL`].
    pub href: String,
}

/// Collect an image/title record for every hemisphere in listing order.
#[instrument(level = "info", skip_all)]
pub async fn hemisphere_images(
    session: &mut dyn Session,
) -> Result<Vec<HemisphereRecord>, ExtractError> {
    session.navigate(HEMISPHERES_URL).await?;
    let listing_html = session.html().await?;
    let entries = parse_listing(&listing_html)?;
    debug!(count = entries.len(), "found listing entries");

    let base = Url::parse(HEMISPHERES_URL)?;
    let mut records = Vec::with_capacity(entries.len());
    for entry in entries {
        let detail_url = base.join(&entry.href)?;
        session.navigate(detail_url.as_str()).await?;

        let detail_html = session.html().await?;
        let rel_img = parse_detail_image(&detail_html)?;
        let img_url = base.join(&rel_img)?;

        records.push(HemisphereRecord {
            img_url: img_url.to_string(),
            title: entry.title,
        });

        // The listing must be current again before the next item is read.
        session.back().await?;
    }

    info!(count = records.len(), "extracted hemisphere records");
    Ok(records)
}

/// Parse the listing page into ordered entries.
///
/// Every `div.item` must carry a heading and a detail link; an item missing
/// either is a structural error for the whole listing.
pub fn parse_listing(html: &str) -> Result<Vec<ListingEntry>, ExtractError> {
    let document = Html::parse_document(html);

    let mut entries = Vec::new();
    for item in document.select(&ITEM) {
        let title = item
            .select(&HEADING)
            .next()
            .ok_or(ExtractError::Structural("div.item h3"))?
            .text()
            .collect::<String>();
        let href = item
            .select(&ITEM_LINK)
            .next()
            .and_then(|a| a.value().attr("href"))
            .ok_or(ExtractError::Structural("a.itemLink.product-item[href]"))?
            .to_string();
        entries.push(ListingEntry { title, href });
    }

    Ok(entries)
}

/// Pull the full-resolution image path from a detail page.
///
/// The downloads block renders as a list whose first `<li>` anchor points at
/// the full image.
pub fn parse_detail_image(html: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);

    document
        .select(&LIST_ITEM)
        .next()
        .and_then(|li| li.select(&ANCHOR).next())
        .and_then(|a| a.value().attr("href"))
        .map(str::to_string)
        .ok_or(ExtractError::Structural("li a[href]"))
}
