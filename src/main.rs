//! app-assets - resolve catalog icon and favicon paths from the command line.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use app_assets::cli;

fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    let default_filter = if cli::is_verbose() {
        "app_assets=info"
    } else {
        "app_assets=warn"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    cli::run()
}
