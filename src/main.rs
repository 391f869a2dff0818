use tokio::sync::mpsc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solartrace::app::App;
use solartrace::backend::BackendClient;
use solartrace::common::AppState;
use solartrace::config::Config;
use solartrace::view::DashboardController;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing; the alternate screen owns stdout, so log to stderr
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,solartrace=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    tracing::info!("Starting solartrace...");

    // Load configuration (fail-fast)
    let config = Config::from_env()?;
    tracing::info!(
        backend = %config.backend_base_url,
        poll_interval = config.poll_interval_seconds,
        "Configuration loaded"
    );

    // Create backend client
    let client = BackendClient::new(&config);
    tracing::info!("Backend client initialized");

    // Create application state around the update channel
    let (update_tx, update_rx) = mpsc::unbounded_channel();
    let tick_rate_ms = config.tick_rate_ms;
    let state = AppState::new(config, client, update_tx);

    // Run the dashboard until the user quits
    let controller = DashboardController::new(state);
    let mut app = App::new(controller, update_rx, tick_rate_ms);
    app.run()?;

    tracing::info!("Dashboard closed");
    Ok(())
}
