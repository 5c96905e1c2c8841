//! Featured image extractor for the JPL gallery page.
//!
//! The gallery hides the full-size image behind a "FULL IMAGE" control;
//! clicking it injects an `img.fancybox-image` node whose `src` is relative
//! to the site root.

use crate::error::{ExtractError, SessionError};
use crate::session::Session;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::{info, instrument, warn};
use url::Url;

/// Site root used to absolutize the relative image path.
pub const JPL_BASE_URL: &str = "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/";

/// The gallery page itself.
pub const JPL_GALLERY_URL: &str =
    "https://data-class-jpl-space.s3.amazonaws.com/JPL_Space/index.html";

/// Position of the "FULL IMAGE" control among the page's `<button>` elements.
///
/// The gallery page renders a navigation button first and the full-image
/// control second. The control carries no stable id or name, so the lookup
/// is positional and breaks if the page gains or loses a leading button.
pub const FULL_IMAGE_BUTTON_INDEX: usize = 1;

static FANCYBOX_IMAGE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("img.fancybox-image").unwrap());

/// Fetch the absolute URL of the currently featured image.
///
/// Navigates to the gallery, clicks the full-image control, and reads the
/// revealed image's source. A missing control or image node is a structural
/// error, not a crash.
#[instrument(level = "info", skip_all)]
pub async fn featured_image(session: &mut dyn Session) -> Result<String, ExtractError> {
    session.navigate(JPL_GALLERY_URL).await?;

    match session.click_button(FULL_IMAGE_BUTTON_INDEX).await {
        Ok(()) => {}
        Err(SessionError::ControlNotFound { .. }) => {
            warn!(
                index = FULL_IMAGE_BUTTON_INDEX,
                "gallery page has no full-image button at the expected position"
            );
            return Err(ExtractError::Structural("full-image button"));
        }
        Err(e) => return Err(e.into()),
    }

    let html = session.html().await?;
    let url = parse_featured_image(&html)?;
    info!(%url, "extracted featured image");
    Ok(url)
}

/// Read the revealed image's relative source and absolutize it against
/// [`JPL_BASE_URL`].
pub fn parse_featured_image(html: &str) -> Result<String, ExtractError> {
    let document = Html::parse_document(html);

    let rel = document
        .select(&FANCYBOX_IMAGE)
        .next()
        .and_then(|img| img.value().attr("src"))
        .ok_or(ExtractError::Structural("img.fancybox-image[src]"))?;

    let absolute = Url::parse(JPL_BASE_URL)?.join(rel)?;
    Ok(absolute.to_string())
}
