use eyre::Result;
use tracing::info;

use webcalc::config::AppConfig;
use webcalc::{CalcServer, browser};

pub fn build_logger() -> Result<()> {
    // Default to "info" level if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .try_init()
        .map_err(|e| eyre::eyre!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Startup banner with usage instructions, mirrored on the console for the
/// operator.
fn print_banner(url: &str) {
    info!("==================================================");
    info!("Web Calculator v{}", env!("CARGO_PKG_VERSION"));
    info!("==================================================");
    info!("Serving at {}", url);
    info!("Instructions:");
    info!("  1. The browser will open automatically");
    info!("  2. If it does not, visit: {}", url);
    info!("  3. Use the mouse or the keyboard to calculate");
    info!("  4. Press Ctrl+C to stop the server");
    info!("Keyboard controls:");
    info!("  - Digits: 0-9");
    info!("  - Operators: +, -, *, /");
    info!("  - Decimal: .");
    info!("  - Calculate: Enter or =");
    info!("  - Clear: Esc or C");
    info!("==================================================");
}

#[tokio::main]
async fn main() -> Result<()> {
    build_logger()?;

    let config = AppConfig::default();
    let bind_addr = config.server.bind_addr()?;
    let url = config.server.local_url();

    let server = CalcServer::new(bind_addr);
    // A taken port is fatal; nothing is served and the process exits
    // non-zero through the error return.
    let listener = server.bind().await?;

    print_banner(&url);
    browser::open_browser(&url);

    server.serve(listener).await?;

    info!("Server stopped.");
    info!("Thanks for using the calculator!");
    Ok(())
}
