//! Shared test doubles for the extractor and orchestrator tests.

use async_trait::async_trait;
use mars_snapshot::error::SessionError;
use mars_snapshot::session::Session;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// One canned page served by [`MockSession`].
pub struct PageFixture {
    /// Markup returned by `html()` before any click.
    pub html: String,
    /// Markup returned after a successful button click, when present.
    pub after_click: Option<String>,
    /// How many `<button>` controls the page exposes.
    pub buttons: usize,
}

/// In-memory [`Session`] over a map of canned pages.
///
/// Tracks the current-page cursor and a history stack the same way a real
/// browser session would, so back-navigation behavior is observable.
pub struct MockSession {
    pages: HashMap<String, PageFixture>,
    current: Option<String>,
    history: Vec<String>,
    clicked: bool,
    /// Every URL passed to `navigate`, in order.
    pub visits: Vec<String>,
    /// How many times `back()` was called.
    pub backs: usize,
    released: Arc<AtomicBool>,
}

impl MockSession {
    pub fn new() -> Self {
        Self {
            pages: HashMap::new(),
            current: None,
            history: Vec::new(),
            clicked: false,
            visits: Vec::new(),
            backs: 0,
            released: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Register a plain page with no clickable controls.
    pub fn page(mut self, url: &str, html: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            PageFixture {
                html: html.to_string(),
                after_click: None,
                buttons: 0,
            },
        );
        self
    }

    /// Register a page that swaps its markup after a button click.
    pub fn page_with_click(mut self, url: &str, html: &str, buttons: usize, after: &str) -> Self {
        self.pages.insert(
            url.to_string(),
            PageFixture {
                html: html.to_string(),
                after_click: Some(after.to_string()),
                buttons,
            },
        );
        self
    }

    /// Register a page exposing `buttons` controls but whose markup never
    /// changes on click.
    pub fn page_with_buttons(mut self, url: &str, html: &str, buttons: usize) -> Self {
        self.pages.insert(
            url.to_string(),
            PageFixture {
                html: html.to_string(),
                after_click: None,
                buttons,
            },
        );
        self
    }

    /// Handle that outlives the session, for asserting release.
    pub fn released_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.released)
    }

    /// URL of the page the session currently shows.
    pub fn current_url(&self) -> Option<&str> {
        self.current.as_deref()
    }

    fn fixture(&self) -> &PageFixture {
        let url = self
            .current
            .as_ref()
            .expect("mock session used before any navigation");
        self.pages
            .get(url)
            .unwrap_or_else(|| panic!("mock session has no page for {url}"))
    }
}

#[async_trait]
impl Session for MockSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        assert!(
            self.pages.contains_key(url),
            "mock session has no page for {url}"
        );
        if let Some(previous) = self.current.take() {
            self.history.push(previous);
        }
        self.current = Some(url.to_string());
        self.clicked = false;
        self.visits.push(url.to_string());
        Ok(())
    }

    async fn html(&mut self) -> Result<String, SessionError> {
        let fixture = self.fixture();
        let html = match (&fixture.after_click, self.clicked) {
            (Some(after), true) => after.clone(),
            _ => fixture.html.clone(),
        };
        Ok(html)
    }

    async fn click_button(&mut self, index: usize) -> Result<(), SessionError> {
        let buttons = self.fixture().buttons;
        if index >= buttons {
            return Err(SessionError::ControlNotFound {
                control: "button",
                index,
            });
        }
        self.clicked = true;
        Ok(())
    }

    async fn wait_for_css(&mut self, _selector: &str, _timeout: Duration) -> bool {
        true
    }

    async fn back(&mut self) -> Result<(), SessionError> {
        let previous = self
            .history
            .pop()
            .expect("mock session back() with empty history");
        self.current = Some(previous);
        self.clicked = false;
        self.backs += 1;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        self.released.store(true, Ordering::SeqCst);
        Ok(())
    }
}
