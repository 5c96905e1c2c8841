//! Orchestration of one scrape pass.
//!
//! One browser session is shared by every navigating extractor, each invoked
//! exactly once and strictly in sequence. An extractor failure is logged and
//! recorded as an absent field; it never aborts the pass. The session is
//! released before the snapshot is returned, on every path.

use crate::extract::{facts, featured, hemispheres, news};
use crate::models::Snapshot;
use crate::session::Session;
use chrono::Local;
use tracing::{info, instrument, warn};

/// Run every extractor against `session` and assemble the snapshot.
///
/// Extractors that navigate leave the session's current page behind as a
/// side effect; each one starts with its own navigation, so invocation order
/// only matters for log readability.
pub async fn scrape_all(session: &mut dyn Session) -> Snapshot {
    scrape_all_with(session, facts::MARS_FACTS_URL).await
}

/// [`scrape_all`] with an explicit facts-page URL, for tests that serve the
/// facts fixture locally.
#[instrument(level = "info", skip_all)]
pub async fn scrape_all_with(session: &mut dyn Session, facts_url: &str) -> Snapshot {
    let (news_title, news_paragraph) = match news::latest_headline(session).await {
        Ok((title, teaser)) => (Some(title), Some(teaser)),
        Err(e) => {
            warn!(error = %e, "news extraction failed; field will be absent");
            (None, None)
        }
    };

    let featured_image = match featured::featured_image(session).await {
        Ok(url) => Some(url),
        Err(e) => {
            warn!(error = %e, "featured image extraction failed; field will be absent");
            None
        }
    };

    let facts = match facts::facts_from(facts_url).await {
        Ok(html) => Some(html),
        Err(e) => {
            warn!(error = %e, "facts extraction failed; field will be absent");
            None
        }
    };

    let hemispheres = match hemispheres::hemisphere_images(session).await {
        Ok(records) => Some(records),
        Err(e) => {
            warn!(error = %e, "hemisphere extraction failed; field will be absent");
            None
        }
    };

    Snapshot {
        news_title,
        news_paragraph,
        featured_image,
        facts,
        last_modified: Local::now(),
        hemispheres,
    }
}

/// Run a full pass over an owned session, releasing it on every path.
///
/// Extractor failures are already absorbed by [`scrape_all`], so the close
/// happens unconditionally after the sequence; a close failure is logged
/// rather than discarding the collected snapshot.
pub async fn run_snapshot<S: Session>(mut session: S) -> Snapshot {
    let snapshot = scrape_all(&mut session).await;
    release(session).await;
    snapshot
}

/// [`run_snapshot`] with an explicit facts-page URL.
pub async fn run_snapshot_with<S: Session>(mut session: S, facts_url: &str) -> Snapshot {
    let snapshot = scrape_all_with(&mut session, facts_url).await;
    release(session).await;
    snapshot
}

async fn release<S: Session>(mut session: S) {
    match session.close().await {
        Ok(()) => info!("session released"),
        Err(e) => warn!(error = %e, "failed to release session"),
    }
}
