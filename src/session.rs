//! The navigable browser session capability.
//!
//! Extractors do not talk to WebDriver directly; they go through the
//! [`Session`] trait, which models exactly the capabilities this tool needs
//! from a browser: navigate, read the rendered markup, click a button by
//! position, wait briefly for an element, and go back in history.
//!
//! # Shared navigation state
//!
//! A session has one current-page cursor. Every navigating call overwrites
//! it, and extractors that follow links must restore it (via [`Session::back`])
//! before reading listing state again. Extractors therefore always begin with
//! their own `navigate` call and never assume anything about the page a
//! previous extractor left behind.
//!
//! The production implementation is [`WebDriverSession`], a thin wrapper
//! around a `fantoccini` client; tests substitute an in-memory fake.

use crate::error::SessionError;
use async_trait::async_trait;
use fantoccini::{Client, ClientBuilder, Locator};
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// The browser capabilities required by the extractors.
#[async_trait]
pub trait Session: Send {
    /// Load `url`, replacing the current page.
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError>;

    /// Return the fully rendered markup of the current page.
    async fn html(&mut self) -> Result<String, SessionError>;

    /// Click the `index`-th (zero-based) `<button>` on the current page.
    ///
    /// Fails with [`SessionError::ControlNotFound`] when the page exposes
    /// fewer buttons, so positional lookups surface as a typed error rather
    /// than an out-of-range crash.
    async fn click_button(&mut self, index: usize) -> Result<(), SessionError>;

    /// Best-effort wait for an element matching `selector` to exist.
    ///
    /// Returns whether the element appeared within `timeout`. Callers treat
    /// a `false` as "carry on anyway"; it never aborts an extraction.
    async fn wait_for_css(&mut self, selector: &str, timeout: Duration) -> bool;

    /// Go back one step in the session history.
    async fn back(&mut self) -> Result<(), SessionError>;

    /// Release the underlying browser session.
    async fn close(&mut self) -> Result<(), SessionError>;
}

/// A [`Session`] backed by a WebDriver endpoint (e.g. Chromedriver).
pub struct WebDriverSession {
    client: Client,
}

impl WebDriverSession {
    /// Connect to a running WebDriver service.
    ///
    /// With `headless` set, the browser is asked to run without a window via
    /// `goog:chromeOptions`.
    #[instrument(level = "info", skip_all, fields(%webdriver_url, headless))]
    pub async fn connect(webdriver_url: &str, headless: bool) -> Result<Self, SessionError> {
        let mut caps = serde_json::Map::new();
        if headless {
            caps.insert(
                "goog:chromeOptions".to_string(),
                json!({ "args": ["--headless=new", "--disable-gpu"] }),
            );
        }

        let client = ClientBuilder::native()
            .capabilities(caps)
            .connect(webdriver_url)
            .await?;
        info!("WebDriver session established");
        Ok(Self { client })
    }
}

#[async_trait]
impl Session for WebDriverSession {
    async fn navigate(&mut self, url: &str) -> Result<(), SessionError> {
        debug!(%url, "navigating");
        self.client.goto(url).await?;
        Ok(())
    }

    async fn html(&mut self) -> Result<String, SessionError> {
        Ok(self.client.source().await?)
    }

    async fn click_button(&mut self, index: usize) -> Result<(), SessionError> {
        let buttons = self.client.find_all(Locator::Css("button")).await?;
        let button = buttons
            .into_iter()
            .nth(index)
            .ok_or(SessionError::ControlNotFound {
                control: "button",
                index,
            })?;
        button.click().await?;
        Ok(())
    }

    async fn wait_for_css(&mut self, selector: &str, timeout: Duration) -> bool {
        self.client
            .wait()
            .at_most(timeout)
            .for_element(Locator::Css(selector))
            .await
            .is_ok()
    }

    async fn back(&mut self) -> Result<(), SessionError> {
        self.client.back().await?;
        Ok(())
    }

    async fn close(&mut self) -> Result<(), SessionError> {
        // Client is a cloneable handle; closing one handle ends the session.
        self.client.clone().close().await?;
        info!("WebDriver session closed");
        Ok(())
    }
}
