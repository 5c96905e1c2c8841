//! Data models for the scraped snapshot.
//!
//! This module defines the structures assembled by one scrape pass:
//! - [`Snapshot`]: the full result record, one per invocation
//! - [`HemisphereRecord`]: an image/title pair for one Martian hemisphere
//! - [`FactsTable`] / [`FactsRow`]: the Mars/Earth comparison table and its
//!   HTML rendering
//!
//! All entities are transient: constructed during one pass, serialized for
//! the caller, and discarded. Absent fields are `None`, which serializes to
//! JSON `null` so a consumer can tell "extractor failed" apart from an empty
//! string.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// CSS classes applied to the rendered facts table, matching the Bootstrap
/// styling the consuming page expects.
pub const FACTS_TABLE_CLASSES: &str = "table table-striped";

/// One snapshot of all scraped sources.
///
/// Every field except `last_modified` is all-or-nothing: a structural
/// mismatch or navigation failure in the corresponding extractor leaves the
/// whole field `None`, never a partial value.
#[derive(Debug, Serialize)]
pub struct Snapshot {
    /// Headline of the most recent news entry.
    pub news_title: Option<String>,
    /// Teaser paragraph accompanying the headline.
    pub news_paragraph: Option<String>,
    /// Absolute URL of the currently featured full-size image.
    pub featured_image: Option<String>,
    /// The comparison table rendered as an HTML fragment.
    pub facts: Option<String>,
    /// When this snapshot was assembled.
    pub last_modified: DateTime<Local>,
    /// One record per hemisphere, in source listing order.
    pub hemispheres: Option<Vec<HemisphereRecord>>,
}

/// An image/title pair for one hemisphere.
///
/// Records keep the order of the source listing; no uniqueness is enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HemisphereRecord {
    /// Absolute URL of the full-resolution hemisphere image.
    pub img_url: String,
    /// Display title of the hemisphere.
    pub title: String,
}

/// One row of the comparison table, keyed by its description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsRow {
    /// The row key, e.g. "Diameter:".
    pub description: String,
    /// The Mars value for this row.
    pub mars: String,
    /// The Earth value for this row.
    pub earth: String,
}

/// The ordered Mars/Earth comparison table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FactsTable {
    /// Rows in source order.
    pub rows: Vec<FactsRow>,
}

impl FactsTable {
    /// Render the table as an HTML fragment.
    ///
    /// The output mirrors a dataframe-style rendering: a header row naming
    /// the three columns, the description as a row-header cell, and the
    /// [`FACTS_TABLE_CLASSES`] styling classes on the `<table>` element.
    pub fn to_html(&self) -> String {
        let mut html = String::new();
        html.push_str(&format!(
            "<table border=\"1\" class=\"dataframe {FACTS_TABLE_CLASSES}\">\n"
        ));
        html.push_str("  <thead>\n    <tr>\n");
        for heading in ["Description", "Mars", "Earth"] {
            html.push_str(&format!("      <th>{heading}</th>\n"));
        }
        html.push_str("    </tr>\n  </thead>\n  <tbody>\n");
        for row in &self.rows {
            html.push_str("    <tr>\n");
            html.push_str(&format!("      <th>{}</th>\n", escape(&row.description)));
            html.push_str(&format!("      <td>{}</td>\n", escape(&row.mars)));
            html.push_str(&format!("      <td>{}</td>\n", escape(&row.earth)));
            html.push_str("    </tr>\n");
        }
        html.push_str("  </tbody>\n</table>");
        html
    }
}

/// Minimal HTML escaping for text landing inside table cells.
fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
