use clap::Parser;
use mars_snapshot::cli::Cli;
use mars_snapshot::scrape;
use mars_snapshot::session::WebDriverSession;
use std::error::Error;
use tracing::{error, info};
use tracing_subscriber::{fmt as tfmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        // Logs go to stderr so stdout carries only the snapshot dump.
        .with_writer(std::io::stderr)
        .init();

    let start_time = std::time::Instant::now();
    info!("mars_snapshot starting up");

    let args = Cli::parse();

    let session = WebDriverSession::connect(&args.webdriver_url, !args.no_headless).await?;
    let snapshot = scrape::run_snapshot(session).await;

    let json = if args.pretty {
        serde_json::to_string_pretty(&snapshot)?
    } else {
        serde_json::to_string(&snapshot)?
    };

    if let Some(path) = &args.output {
        if let Err(e) = tokio::fs::write(path, &json).await {
            error!(path = %path, error = %e, "failed writing snapshot JSON");
        } else {
            info!(path = %path, "wrote snapshot JSON");
        }
    }

    println!("{json}");

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        millis = elapsed.subsec_millis(),
        "Execution complete"
    );

    Ok(())
}
