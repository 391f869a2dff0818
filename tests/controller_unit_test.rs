//! Unit tests for view controller module.
//!
//! Run with: cargo test --test controller_unit_test

use chrono::DateTime;
use tokio::sync::mpsc;

use solartrace::backend::BackendClient;
use solartrace::backend::models::{
    CurrentResponse, HistoricalResponse, HistoryPoint, SpectralReading, SummaryMetrics,
    SummaryResponse,
};
use solartrace::charts::ChartKind;
use solartrace::common::AppState;
use solartrace::config::Config;
use solartrace::view::{DashboardController, DashboardUpdate, ViewMode};

/// State wired to a port nothing listens on, so spawned fetches fail fast.
fn test_state() -> (AppState, mpsc::UnboundedReceiver<DashboardUpdate>) {
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

fn uniform(value: f64) -> SpectralReading {
    SpectralReading {
        ch_415: value,
        ch_440: value,
        ch_485: value,
        ch_515: value,
        ch_555: value,
        ch_590: value,
        ch_610: value,
        ch_680: value,
        ch_730: value,
        ch_760: value,
        ch_860: value,
        ch_clear: value,
        ..Default::default()
    }
}

#[test]
fn view_modes_map_to_backend_ranges() {
    assert_eq!(ViewMode::Live.range_days(), None);
    assert_eq!(ViewMode::Today.range_days(), Some(1));
    assert_eq!(ViewMode::SevenDays.range_days(), Some(7));

    assert_eq!(ViewMode::Live.title_suffix(), "En Vivo");
    assert_eq!(ViewMode::Today.title_suffix(), "de Hoy");
    assert_eq!(ViewMode::SevenDays.title_suffix(), "de 7 Días");
}

#[tokio::test]
async fn reselecting_the_active_view_is_a_no_op() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    let mut readings = CurrentResponse::new();
    readings.insert(
        "Referencia".to_string(),
        Some(SpectralReading {
            ppfd_total: 88.0,
            ..Default::default()
        }),
    );
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings,
    });
    assert_eq!(controller.panel("Referencia").unwrap().ppfd, "88");

    controller.set_view(ViewMode::Live);

    // Metrics survive and no refresh was kicked off
    assert_eq!(controller.panel("Referencia").unwrap().ppfd, "88");
    assert!(!controller.polling_active());
}

#[tokio::test]
async fn switching_views_drives_the_polling_lifecycle() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    controller.refresh();
    assert!(controller.polling_active());

    controller.set_view(ViewMode::Today);
    assert!(!controller.polling_active());

    controller.set_view(ViewMode::Live);
    assert!(controller.polling_active());

    controller.shutdown();
    assert!(!controller.polling_active());
}

#[tokio::test]
async fn stale_updates_are_discarded() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    let mut readings = CurrentResponse::new();
    readings.insert(
        "Referencia".to_string(),
        Some(SpectralReading {
            ppfd_total: 321.4,
            ..Default::default()
        }),
    );
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings: readings.clone(),
    });
    assert_eq!(controller.panel("Referencia").unwrap().ppfd, "321");

    controller.set_view(ViewMode::Today);
    assert_eq!(controller.panel("Referencia").unwrap().ppfd, "---");

    // A live response that raced the switch must not land
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings,
    });
    assert_eq!(controller.panel("Referencia").unwrap().ppfd, "---");
}

#[tokio::test]
async fn live_readings_update_transmission_against_reference() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    let mut readings = CurrentResponse::new();
    readings.insert("Referencia".to_string(), Some(uniform(100.0)));
    readings.insert("Cama_1".to_string(), Some(uniform(50.0)));
    readings.insert("Cama_2".to_string(), None);
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings,
    });

    // Only the bed with a reading gets a series, clear channel excluded
    let series = controller.transmission().series();
    assert_eq!(series.len(), 1);
    assert_eq!(series[0].0, "Cama 1 vs Referencia");
    assert_eq!(series[0].1.len(), 11);
    assert!(series[0].1.iter().all(|v| (*v - 50.0).abs() < f64::EPSILON));

    // The reference chart itself stays a spectrum
    let chart = controller.chart("Referencia").unwrap();
    assert_eq!(chart.kind(), ChartKind::Bar);
    assert_eq!(chart.spectrum().len(), 12);
}

#[tokio::test]
async fn losing_the_reference_clears_the_transmission_chart() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    let mut full = CurrentResponse::new();
    full.insert("Referencia".to_string(), Some(uniform(100.0)));
    full.insert("Cama_1".to_string(), Some(uniform(50.0)));
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings: full.clone(),
    });
    assert_eq!(controller.transmission().series().len(), 1);

    // The reference reports no rows while the bed keeps reporting
    let mut no_rows = full.clone();
    no_rows.insert("Referencia".to_string(), None);
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings: no_rows,
    });
    assert!(controller.transmission().series().is_empty());

    // The bed's own spectrum still updates without a reference
    assert_eq!(controller.chart("Cama_1").unwrap().spectrum().len(), 12);

    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings: full,
    });
    assert_eq!(controller.transmission().series().len(), 1);

    // A payload missing the reference key behaves like a null one
    let mut absent = CurrentResponse::new();
    absent.insert("Cama_1".to_string(), Some(uniform(50.0)));
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings: absent,
    });
    assert!(controller.transmission().series().is_empty());
}

#[tokio::test]
async fn historical_data_recreates_charts_as_line() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    let mut readings = CurrentResponse::new();
    readings.insert("Referencia".to_string(), Some(uniform(100.0)));
    readings.insert("Cama_1".to_string(), Some(uniform(50.0)));
    controller.apply_update(DashboardUpdate::Live {
        mode: ViewMode::Live,
        readings,
    });

    controller.set_view(ViewMode::Today);
    let mut series = HistoricalResponse::new();
    series.insert(
        "Referencia".to_string(),
        vec![HistoryPoint {
            created_at: DateTime::from_timestamp(1_700_000_000, 0).unwrap(),
            ppfd_total: 100.0,
        }],
    );
    controller.apply_update(DashboardUpdate::Historical {
        mode: ViewMode::Today,
        series,
    });

    let chart = controller.chart("Referencia").unwrap();
    assert_eq!(chart.kind(), ChartKind::Line);
    assert_eq!(chart.generation(), 1);
    assert_eq!(chart.series().len(), 1);

    // Sensors with no rows are cleared, not left showing stale data
    let empty = controller.chart("Cama_1").unwrap();
    assert_eq!(empty.kind(), ChartKind::Line);
    assert!(empty.series().is_empty());

    // The transmission comparison is only fed by live cycles
    assert_eq!(controller.transmission().series().len(), 1);
}

#[tokio::test]
async fn summary_fills_daily_metrics_and_failures_surface() {
    let (state, _rx) = test_state();
    let mut controller = DashboardController::new(state);

    controller.set_view(ViewMode::Today);
    let mut metrics = SummaryResponse::new();
    metrics.insert(
        "Cama_1".to_string(),
        SummaryMetrics {
            dli: 12.3456,
            avg_rfr: 1.087,
        },
    );
    controller.apply_update(DashboardUpdate::Summary {
        mode: ViewMode::Today,
        metrics,
    });

    assert_eq!(controller.panel("Cama_1").unwrap().dli, "12.35");
    assert_eq!(controller.panel("Cama_1").unwrap().avg_red_far_red, "1.09");
    // Sensors missing from the summary fall back to placeholders
    assert_eq!(controller.panel("Cama_2").unwrap().dli, "---");
    assert!(!controller.connection_error());

    controller.apply_update(DashboardUpdate::CycleFailed {
        mode: ViewMode::Today,
        source: "resumen",
    });
    assert!(controller.connection_error());
    assert_eq!(controller.status_line(), "Error al cargar resumen");

    // Leaving the view blanks the summary metrics along with the rest
    controller.set_view(ViewMode::SevenDays);
    assert_eq!(controller.panel("Cama_1").unwrap().dli, "---");
    assert_eq!(controller.panel("Cama_1").unwrap().avg_red_far_red, "---");
}
