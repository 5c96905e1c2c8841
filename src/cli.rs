//! Command-line interface definitions.
//!
//! All options can be provided via command-line flags; the WebDriver
//! endpoint can also come from the environment.

use clap::Parser;

/// Command-line arguments for the Mars snapshot tool.
///
/// # Examples
///
/// ```sh
/// # Default headless run against a local Chromedriver
/// mars_snapshot
///
/// # Watch the browser and keep a copy of the output
/// mars_snapshot --no-headless --output snapshot.json --pretty
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// WebDriver endpoint driving the browser session
    #[arg(long, env = "WEBDRIVER_URL", default_value = "http://localhost:9515")]
    pub webdriver_url: String,

    /// Run the browser with a visible window instead of headless
    #[arg(long)]
    pub no_headless: bool,

    /// Also write the snapshot JSON to this path
    #[arg(short, long)]
    pub output: Option<String>,

    /// Pretty-print the JSON dump
    #[arg(short, long)]
    pub pretty: bool,
}
