use chrono::DateTime;

/// Visual type of a sensor chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Line,
}

/// Retained chart state for one sensor.
///
/// The kind tag decides how the chart is drawn: `Bar` holds the 12-channel
/// spectrum, `Line` holds a PPFD time series. Changing the kind discards the
/// state wholesale; updating data of the current kind happens in place.
#[derive(Debug, Clone)]
pub struct SensorChart {
    kind: ChartKind,
    generation: u64,
    spectrum: Vec<f64>,
    series: Vec<(f64, f64)>,
}

impl SensorChart {
    #[must_use]
    pub fn new(kind: ChartKind) -> Self {
        Self {
            kind,
            generation: 0,
            spectrum: Vec::new(),
            series: Vec::new(),
        }
    }

    /// Rebuild the chart when `kind` differs from the current one.
    ///
    /// Returns `true` when the chart was discarded and recreated. Data and
    /// generation are untouched when the kind already matches.
    pub fn ensure_kind(&mut self, kind: ChartKind) -> bool {
        if self.kind == kind {
            return false;
        }
        let generation = self.generation + 1;
        *self = Self::new(kind);
        self.generation = generation;
        true
    }

    /// Replace the spectrum values of a bar chart.
    pub fn set_spectrum(&mut self, values: Vec<f64>) {
        self.spectrum = values;
    }

    /// Replace the (epoch seconds, PPFD) series of a line chart.
    pub fn set_series(&mut self, series: Vec<(f64, f64)>) {
        self.series = series;
    }

    /// Drop the data but keep the chart as it is.
    pub fn clear(&mut self) {
        self.spectrum.clear();
        self.series.clear();
    }

    #[must_use]
    pub fn kind(&self) -> ChartKind {
        self.kind
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn spectrum(&self) -> &[f64] {
        &self.spectrum
    }

    #[must_use]
    pub fn series(&self) -> &[(f64, f64)] {
        &self.series
    }
}

/// The shared transmission comparison chart.
///
/// Always a line chart with one series of per-channel transmission
/// percentages per bed sensor. Created once, updated in place on every live
/// tick, never recreated.
#[derive(Debug, Clone, Default)]
pub struct TransmissionChart {
    series: Vec<(String, Vec<f64>)>,
}

impl TransmissionChart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all series, in bed-sensor order.
    pub fn set_series(&mut self, series: Vec<(String, Vec<f64>)>) {
        self.series = series;
    }

    #[must_use]
    pub fn series(&self) -> &[(String, Vec<f64>)] {
        &self.series
    }
}

/// Evenly spaced `HH:MM` labels spanning a time-axis series.
#[must_use]
pub fn time_axis_labels(series: &[(f64, f64)], count: usize) -> Vec<String> {
    if series.is_empty() || count == 0 {
        return Vec::new();
    }
    let first = series.first().map_or(0.0, |(t, _)| *t);
    let last = series.last().map_or(first, |(t, _)| *t);
    if count == 1 || last <= first {
        return vec![format_hour_minute(first)];
    }
    (0..count)
        .map(|i| {
            let t = first + (last - first) * (i as f64) / ((count - 1) as f64);
            format_hour_minute(t)
        })
        .collect()
}

fn format_hour_minute(epoch_secs: f64) -> String {
    DateTime::from_timestamp(epoch_secs as i64, 0)
        .map_or_else(|| "--:--".to_string(), |dt| dt.format("%H:%M").to_string())
}
