//! Mars facts table extractor.
//!
//! Unlike the other extractors this one does not use the browser session:
//! the facts page is static, so a plain HTTP fetch is enough. The first
//! `<table>` on the page is re-columned to Description/Mars/Earth and
//! rendered back out as a styled HTML fragment.

use crate::error::ExtractError;
use crate::models::{FactsRow, FactsTable};
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument};

/// The Mars facts page.
pub const MARS_FACTS_URL: &str =
    "https://data-class-mars-facts.s3.amazonaws.com/Mars_Facts/index.html";

static TABLE: Lazy<Selector> = Lazy::new(|| Selector::parse("table").unwrap());
static ROW: Lazy<Selector> = Lazy::new(|| Selector::parse("tr").unwrap());
static CELL: Lazy<Selector> = Lazy::new(|| Selector::parse("th, td").unwrap());

/// Fetch the facts page and render its comparison table as HTML.
#[instrument(level = "info")]
pub async fn mars_facts() -> Result<String, ExtractError> {
    facts_from(MARS_FACTS_URL).await
}

/// Fetch a facts page from `url` and render its first table as HTML.
///
/// Split out from [`mars_facts`] so tests can point it at a local server.
pub async fn facts_from(url: &str) -> Result<String, ExtractError> {
    let html = reqwest::get(url).await?.text().await?;
    let table = parse_facts_table(&html)?;
    info!(rows = table.rows.len(), "extracted facts table");
    Ok(table.to_html())
}

/// Parse the first table in the markup into a [`FactsTable`].
///
/// Whatever column names the source uses are discarded: a leading all-`<th>`
/// row is treated as a header and skipped, and every remaining row must have
/// exactly three cells to map onto Description/Mars/Earth.
pub fn parse_facts_table(html: &str) -> Result<FactsTable, ExtractError> {
    let document = Html::parse_document(html);

    let table = document
        .select(&TABLE)
        .next()
        .ok_or(ExtractError::Structural("table"))?;

    let mut rows = Vec::new();
    for (i, tr) in table.select(&ROW).enumerate() {
        let cells: Vec<String> = tr
            .select(&CELL)
            .map(|cell| cell.text().collect::<String>().trim().to_string())
            .collect();

        if i == 0 && tr.select(&CELL).all(|c| c.value().name() == "th") {
            continue;
        }
        if cells.len() != 3 {
            return Err(ExtractError::Structural("three-cell table row"));
        }

        let mut cells = cells.into_iter();
        rows.push(FactsRow {
            description: cells.next().unwrap_or_default(),
            mars: cells.next().unwrap_or_default(),
            earth: cells.next().unwrap_or_default(),
        });
    }

    if rows.is_empty() {
        return Err(ExtractError::Structural("table rows"));
    }

    Ok(FactsTable { rows })
}
