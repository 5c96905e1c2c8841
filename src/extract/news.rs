//! Mars news headline extractor.
//!
//! Scrapes the most recent entry from the Mars news listing page. The page
//! renders each story inside a `div.list_text` block holding a title and a
//! teaser paragraph; only the first block is read.

use crate::error::ExtractError;
use crate::session::Session;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use std::time::Duration;
use tracing::{debug, info, instrument};

/// The Mars news listing page.
pub const MARS_NEWS_URL: &str = "https://data-class-mars.s3.amazonaws.com/Mars/index.html";

/// How long to wait for the story list before parsing anyway.
const LIST_WAIT: Duration = Duration::from_secs(1);

static LIST_TEXT: Lazy<Selector> = Lazy::new(|| Selector::parse("div.list_text").unwrap());
static CONTENT_TITLE: Lazy<Selector> = Lazy::new(|| Selector::parse("div.content_title").unwrap());
static TEASER_BODY: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.article_teaser_body").unwrap());

/// Fetch the latest headline and teaser from the news listing.
///
/// Navigates the session to [`MARS_NEWS_URL`], waits briefly for the story
/// list to render, and parses the first entry.
#[instrument(level = "info", skip_all)]
pub async fn latest_headline(
    session: &mut dyn Session,
) -> Result<(String, String), ExtractError> {
    session.navigate(MARS_NEWS_URL).await?;

    // Best effort: the list usually renders immediately, so a miss here is
    // logged and parsing proceeds on whatever markup is present.
    if !session.wait_for_css("div.list_text", LIST_WAIT).await {
        debug!("story list did not appear within the wait window");
    }

    let html = session.html().await?;
    let (title, teaser) = parse_news(&html)?;
    info!(%title, "extracted latest news entry");
    Ok((title, teaser))
}

/// Parse the first story entry out of the listing markup.
pub fn parse_news(html: &str) -> Result<(String, String), ExtractError> {
    let document = Html::parse_document(html);

    let slide = document
        .select(&LIST_TEXT)
        .next()
        .ok_or(ExtractError::Structural("div.list_text"))?;
    let title = slide
        .select(&CONTENT_TITLE)
        .next()
        .ok_or(ExtractError::Structural("div.content_title"))?
        .text()
        .collect::<String>();
    let teaser = slide
        .select(&TEASER_BODY)
        .next()
        .ok_or(ExtractError::Structural("div.article_teaser_body"))?
        .text()
        .collect::<String>();

    Ok((title, teaser))
}
