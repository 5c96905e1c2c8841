//! # Mars Snapshot
//!
//! A data-collection tool that visits a handful of public Mars-themed pages
//! and normalizes them into one structured snapshot record: the latest news
//! headline and teaser, the currently featured JPL image, a Mars/Earth
//! comparison table rendered as HTML, and an image/title pair for each
//! Martian hemisphere.
//!
//! ## Usage
//!
//! ```sh
//! mars_snapshot --webdriver-url http://localhost:9515 --pretty
//! ```
//!
//! ## Architecture
//!
//! The tool is a strictly sequential pipeline driven by one browser session:
//! 1. **Session**: connect to a WebDriver endpoint (headless by default)
//! 2. **Extraction**: run each extractor in turn against the shared session
//! 3. **Assembly**: merge the results into a [`models::Snapshot`] with a
//!    timestamp
//! 4. **Output**: dump the snapshot as JSON to stdout (and optionally a file)
//!
//! Extractors never fail the run: a page whose structure does not match is
//! recorded as an absent field in the snapshot.

pub mod cli;
pub mod error;
pub mod extract;
pub mod models;
pub mod scrape;
pub mod session;
