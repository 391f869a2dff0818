use std::time::Duration;

use tokio::time::interval;

use crate::common::AppState;
use crate::view::controller::{DashboardUpdate, ViewMode};

/// Poll the current readings endpoint until the task is aborted.
///
/// The first fetch happens immediately, then once per configured poll
/// interval. A failed fetch is only logged; the loop keeps ticking and the
/// dashboard keeps showing the last readings it got.
pub async fn run_live_poll(state: AppState) {
    let mut ticker = interval(Duration::from_secs(state.config.poll_interval_seconds));
    loop {
        ticker.tick().await;
        refresh_live(&state).await;
    }
}

async fn refresh_live(state: &AppState) {
    match state.client.current().await {
        Ok(readings) => {
            let _ = state.update_tx.send(DashboardUpdate::Live {
                mode: ViewMode::Live,
                readings,
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "Live poll failed");
        }
    }
}

/// Spawn one history and summary cycle for a historical view.
pub fn spawn_history_refresh(state: AppState, mode: ViewMode) {
    tokio::spawn(async move {
        run_history_refresh(&state, mode).await;
    });
}

/// Fetch history and summary concurrently and push each result as it is.
///
/// A failed leg reports itself without blocking the other leg's data.
pub async fn run_history_refresh(state: &AppState, mode: ViewMode) {
    let Some(range_days) = mode.range_days() else {
        return;
    };
    let (history, summary) = futures::join!(
        state.client.historical(range_days),
        state.client.summary(range_days),
    );
    match history {
        Ok(series) => {
            let _ = state
                .update_tx
                .send(DashboardUpdate::Historical { mode, series });
        }
        Err(e) => {
            tracing::error!(error = %e, days = range_days, "Historical fetch failed");
            let _ = state.update_tx.send(DashboardUpdate::CycleFailed {
                mode,
                source: "historial",
            });
        }
    }
    match summary {
        Ok(metrics) => {
            let _ = state
                .update_tx
                .send(DashboardUpdate::Summary { mode, metrics });
        }
        Err(e) => {
            tracing::error!(error = %e, days = range_days, "Summary fetch failed");
            let _ = state.update_tx.send(DashboardUpdate::CycleFailed {
                mode,
                source: "resumen",
            });
        }
    }
}
