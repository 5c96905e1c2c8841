//! Extractors for each scraped source.
//!
//! Each submodule handles one page (or page family) and follows the same
//! two-layer pattern:
//!
//! 1. **Flow**: an async function that drives the [`Session`](crate::session::Session)
//!    (navigate, optional click/back, read markup)
//! 2. **Parsing**: pure functions over the retrieved markup that do the
//!    actual selection and return typed results
//!
//! # Sources
//!
//! | Source | Module | Needs session | Notes |
//! |--------|--------|---------------|-------|
//! | Mars news listing | [`news`] | yes | headline + teaser of first entry |
//! | JPL image gallery | [`featured`] | yes | one click to reveal the full image |
//! | Mars facts table | [`facts`] | no | plain HTTP fetch, first `<table>` |
//! | Hemisphere listing | [`hemispheres`] | yes | follows one detail link per item |
//!
//! Extractors return `Result<_, ExtractError>`; a structural mismatch in the
//! page is an error value, never a panic. The orchestrator converts errors
//! into absent snapshot fields.

pub mod facts;
pub mod featured;
pub mod hemispheres;
pub mod news;
