use std::collections::HashMap;

use chrono::{DateTime, Local};
use tokio::task::JoinHandle;

use crate::backend::models::{
    BED_SENSORS, CurrentResponse, HistoricalResponse, REFERENCE_SENSOR, SENSORS, SummaryResponse,
    display_name,
};
use crate::charts::{ChartKind, SensorChart, TransmissionChart};
use crate::common::AppState;
use crate::display::{SensorPanel, transmission_series};
use crate::view::poller;

/// The three dashboard views.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    Live,
    Today,
    SevenDays,
}

impl ViewMode {
    /// Day range the historical endpoints take, `None` for the live view.
    #[must_use]
    pub fn range_days(self) -> Option<u32> {
        match self {
            Self::Live => None,
            Self::Today => Some(1),
            Self::SevenDays => Some(7),
        }
    }

    /// Qualifier the chart titles carry for this view.
    #[must_use]
    pub fn title_suffix(self) -> &'static str {
        match self {
            Self::Live => "En Vivo",
            Self::Today => "de Hoy",
            Self::SevenDays => "de 7 Días",
        }
    }
}

/// A fetch result tagged with the view it was requested for.
///
/// The controller drops results whose tag no longer matches the active view,
/// so a response that arrives late cannot overwrite a newer view's data.
#[derive(Debug)]
pub enum DashboardUpdate {
    Live {
        mode: ViewMode,
        readings: CurrentResponse,
    },
    Historical {
        mode: ViewMode,
        series: HistoricalResponse,
    },
    Summary {
        mode: ViewMode,
        metrics: SummaryResponse,
    },
    CycleFailed {
        mode: ViewMode,
        source: &'static str,
    },
}

impl DashboardUpdate {
    fn mode(&self) -> ViewMode {
        match self {
            Self::Live { mode, .. }
            | Self::Historical { mode, .. }
            | Self::Summary { mode, .. }
            | Self::CycleFailed { mode, .. } => *mode,
        }
    }
}

/// Owns the dashboard state and the live polling task.
///
/// All mutation funnels through [`set_view`](Self::set_view),
/// [`refresh`](Self::refresh) and [`apply_update`](Self::apply_update); the
/// render layer only reads.
pub struct DashboardController {
    state: AppState,
    mode: ViewMode,
    poll_handle: Option<JoinHandle<()>>,
    charts: HashMap<String, SensorChart>,
    panels: HashMap<String, SensorPanel>,
    transmission: TransmissionChart,
    last_updated: Option<DateTime<Local>>,
    error: Option<String>,
}

impl DashboardController {
    /// Build a controller in the live view with empty charts and panels.
    ///
    /// No task is spawned until [`refresh`](Self::refresh) is called.
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let charts = SENSORS
            .iter()
            .map(|sensor| ((*sensor).to_string(), SensorChart::new(ChartKind::Bar)))
            .collect();
        let panels = SENSORS
            .iter()
            .map(|sensor| ((*sensor).to_string(), SensorPanel::default()))
            .collect();
        Self {
            state,
            mode: ViewMode::Live,
            poll_handle: None,
            charts,
            panels,
            transmission: TransmissionChart::new(),
            last_updated: None,
            error: None,
        }
    }

    /// Switch views. Selecting the view that is already active does nothing;
    /// otherwise the live poller is cancelled, every panel metric is blanked
    /// to its placeholder, and a refresh is kicked off.
    pub fn set_view(&mut self, mode: ViewMode) {
        if mode == self.mode {
            return;
        }
        tracing::info!(from = ?self.mode, to = ?mode, "Switching dashboard view");
        self.cancel_polling();
        self.mode = mode;
        for panel in self.panels.values_mut() {
            panel.clear_live();
            panel.clear_summary();
        }
        self.refresh();
    }

    /// Re-fetch the active view. In the live view this restarts the poller,
    /// which fetches immediately and then every poll interval; in the
    /// historical views it spawns one concurrent history and summary cycle.
    pub fn refresh(&mut self) {
        match self.mode {
            ViewMode::Live => self.restart_polling(),
            mode => poller::spawn_history_refresh(self.state.clone(), mode),
        }
    }

    /// Apply a fetch result, dropping it when its view tag is stale.
    pub fn apply_update(&mut self, update: DashboardUpdate) {
        let mode = update.mode();
        if mode != self.mode {
            tracing::debug!(requested = ?mode, active = ?self.mode, "Discarding stale update");
            return;
        }
        match update {
            DashboardUpdate::Live { readings, .. } => self.apply_live(&readings),
            DashboardUpdate::Historical { series, .. } => self.apply_historical(&series),
            DashboardUpdate::Summary { metrics, .. } => self.apply_summary(&metrics),
            DashboardUpdate::CycleFailed { source, .. } => {
                self.error = Some(format!("Error al cargar {source}"));
            }
        }
    }

    fn apply_live(&mut self, readings: &CurrentResponse) {
        for sensor in SENSORS {
            // Sensors with no reading yet keep whatever they showed before.
            let Some(Some(reading)) = readings.get(sensor) else {
                continue;
            };
            if let Some(panel) = self.panels.get_mut(sensor) {
                panel.apply_live(reading, self.state.config.lux_min, self.state.config.lux_max);
            }
            if let Some(chart) = self.charts.get_mut(sensor) {
                chart.ensure_kind(ChartKind::Bar);
                chart.set_spectrum(reading.spectral_channels().to_vec());
            }
        }
        // The comparison is rebuilt from scratch each tick; no reference
        // reading means no series.
        let series = match readings.get(REFERENCE_SENSOR) {
            Some(Some(reference)) => BED_SENSORS
                .iter()
                .filter_map(|bed| {
                    readings.get(*bed).and_then(Option::as_ref).map(|reading| {
                        (
                            format!("{} vs Referencia", display_name(bed)),
                            transmission_series(reading, reference),
                        )
                    })
                })
                .collect(),
            _ => Vec::new(),
        };
        self.transmission.set_series(series);
        self.mark_refreshed();
    }

    fn apply_historical(&mut self, series: &HistoricalResponse) {
        for sensor in SENSORS {
            let Some(chart) = self.charts.get_mut(sensor) else {
                continue;
            };
            chart.ensure_kind(ChartKind::Line);
            match series.get(sensor) {
                Some(points) if !points.is_empty() => {
                    chart.set_series(
                        points
                            .iter()
                            .map(|point| (point.created_at.timestamp() as f64, point.ppfd_total))
                            .collect(),
                    );
                }
                _ => chart.clear(),
            }
        }
        self.mark_refreshed();
    }

    fn apply_summary(&mut self, metrics: &SummaryResponse) {
        for sensor in SENSORS {
            let Some(panel) = self.panels.get_mut(sensor) else {
                continue;
            };
            match metrics.get(sensor) {
                Some(summary) => panel.apply_summary(summary),
                None => panel.clear_summary(),
            }
        }
        self.mark_refreshed();
    }

    fn mark_refreshed(&mut self) {
        self.last_updated = Some(Local::now());
        self.error = None;
    }

    fn restart_polling(&mut self) {
        self.cancel_polling();
        self.poll_handle = Some(tokio::spawn(poller::run_live_poll(self.state.clone())));
    }

    /// Abort the live poller if one is running.
    pub fn cancel_polling(&mut self) {
        if let Some(handle) = self.poll_handle.take() {
            handle.abort();
        }
    }

    /// Whether a live polling task is currently running.
    #[must_use]
    pub fn polling_active(&self) -> bool {
        self.poll_handle
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Stop background work before the terminal is torn down.
    pub fn shutdown(&mut self) {
        self.cancel_polling();
    }

    #[must_use]
    pub fn mode(&self) -> ViewMode {
        self.mode
    }

    #[must_use]
    pub fn chart(&self, sensor: &str) -> Option<&SensorChart> {
        self.charts.get(sensor)
    }

    #[must_use]
    pub fn panel(&self, sensor: &str) -> Option<&SensorPanel> {
        self.panels.get(sensor)
    }

    #[must_use]
    pub fn transmission(&self) -> &TransmissionChart {
        &self.transmission
    }

    /// Header status line: the last error, the last refresh time, or the
    /// connecting placeholder.
    #[must_use]
    pub fn status_line(&self) -> String {
        if let Some(error) = &self.error {
            return error.clone();
        }
        self.last_updated.map_or_else(
            || "Conectando...".to_string(),
            |at| format!("Última actualización: {}", at.format("%H:%M:%S")),
        )
    }

    /// Whether the status line is reporting a failure.
    #[must_use]
    pub fn connection_error(&self) -> bool {
        self.error.is_some()
    }
}
