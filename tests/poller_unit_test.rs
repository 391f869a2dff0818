//! Unit tests for view poller module.
//!
//! Run with: cargo test --test poller_unit_test

use std::time::Duration;

use tokio::sync::mpsc;

use solartrace::backend::BackendClient;
use solartrace::common::AppState;
use solartrace::config::Config;
use solartrace::view::{DashboardUpdate, ViewMode, poller};

/// State wired to a port nothing listens on, so every fetch fails fast.
fn unreachable_state() -> (AppState, mpsc::UnboundedReceiver<DashboardUpdate>) {
    let config = Config {
        backend_base_url: "http://127.0.0.1:9".to_string(),
        request_timeout_seconds: 1,
        poll_interval_seconds: 1,
        lux_min: 0.0,
        lux_max: 2000.0,
        tick_rate_ms: 50,
    };
    let client = BackendClient::new(&config);
    let (tx, rx) = mpsc::unbounded_channel();
    (AppState::new(config, client, tx), rx)
}

#[tokio::test]
async fn live_poll_survives_backend_failures_silently() {
    let (state, mut rx) = unreachable_state();
    let handle = tokio::spawn(poller::run_live_poll(state));

    // Long enough for the immediate fetch plus one scheduled tick
    tokio::time::sleep(Duration::from_millis(1300)).await;
    assert!(!handle.is_finished());
    handle.abort();

    // Failed live fetches stay out of the update stream entirely
    assert!(rx.try_recv().is_err());
}

#[tokio::test]
async fn history_refresh_reports_each_failed_leg() {
    let (state, mut rx) = unreachable_state();
    poller::run_history_refresh(&state, ViewMode::SevenDays).await;

    let mut sources = Vec::new();
    while let Ok(update) = rx.try_recv() {
        match update {
            DashboardUpdate::CycleFailed {
                mode: ViewMode::SevenDays,
                source,
            } => sources.push(source),
            other => panic!("unexpected update: {other:?}"),
        }
    }
    sources.sort_unstable();
    assert_eq!(sources, ["historial", "resumen"]);
}
