use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::HashMap;

/// Sensor names as reported by the backend.
pub const REFERENCE_SENSOR: &str = "Referencia";
pub const BED_SENSORS: [&str; 2] = ["Cama_1", "Cama_2"];
pub const SENSORS: [&str; 3] = ["Referencia", "Cama_1", "Cama_2"];

/// Spectral channel labels in wavelength order, `Clear` last.
pub const CHANNEL_LABELS: [&str; 12] = [
    "415nm", "440nm", "485nm", "515nm", "555nm", "590nm", "610nm", "680nm", "730nm", "760nm",
    "860nm", "Clear",
];

/// Channels plotted in the transmission comparison (`Clear` excluded).
pub const TRANSMISSION_CHANNELS: usize = 11;

/// Response from `/api/data/current`, keyed by sensor name.
/// A sensor with no readings yet maps to `null`.
pub type CurrentResponse = HashMap<String, Option<SpectralReading>>;

/// Response from `/api/data/historical`, keyed by sensor name.
pub type HistoricalResponse = HashMap<String, Vec<HistoryPoint>>;

/// Response from `/api/data/summary`, keyed by sensor name.
pub type SummaryResponse = HashMap<String, SummaryMetrics>;

/// One snapshot of an AS7341 spectral sensor.
///
/// Channel fields are raw intensities; missing or null fields
/// deserialize as zero.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SpectralReading {
    #[serde(default)]
    pub ch_415: f64,
    #[serde(default)]
    pub ch_440: f64,
    #[serde(default)]
    pub ch_485: f64,
    #[serde(default)]
    pub ch_515: f64,
    #[serde(default)]
    pub ch_555: f64,
    #[serde(default)]
    pub ch_590: f64,
    #[serde(default)]
    pub ch_610: f64,
    #[serde(default)]
    pub ch_680: f64,
    #[serde(default)]
    pub ch_730: f64,
    #[serde(default)]
    pub ch_760: f64,
    #[serde(default)]
    pub ch_860: f64,
    #[serde(default)]
    pub ch_clear: f64,
    /// Total illuminance in lux.
    #[serde(default)]
    pub total_lux: f64,
    /// Photosynthetic photon flux density, in umol m^-2 s^-1.
    #[serde(default)]
    pub ppfd_total: f64,
}

impl SpectralReading {
    /// Channel intensities in `CHANNEL_LABELS` order.
    #[must_use]
    pub fn spectral_channels(&self) -> [f64; 12] {
        [
            self.ch_415,
            self.ch_440,
            self.ch_485,
            self.ch_515,
            self.ch_555,
            self.ch_590,
            self.ch_610,
            self.ch_680,
            self.ch_730,
            self.ch_760,
            self.ch_860,
            self.ch_clear,
        ]
    }

    /// Red to far-red ratio (680nm / 730nm), or `None` when the
    /// far-red channel reads zero.
    #[must_use]
    pub fn red_far_red(&self) -> Option<f64> {
        (self.ch_730 > 0.0).then(|| self.ch_680 / self.ch_730)
    }
}

/// One historical PPFD sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryPoint {
    #[serde(deserialize_with = "deserialize_timestamp")]
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub ppfd_total: f64,
}

/// Aggregated metrics for a sensor over a day range.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SummaryMetrics {
    /// Daily light integral, mol m^-2 day^-1.
    #[serde(default)]
    pub dli: f64,
    /// Average red to far-red ratio over the range.
    #[serde(default)]
    pub avg_rfr: f64,
}

/// Human-facing sensor name (`Cama_1` -> `Cama 1`).
#[must_use]
pub fn display_name(sensor: &str) -> String {
    sensor.replace('_', " ")
}

/// The backend emits `created_at` both as RFC 3339 with an offset and as a
/// bare `isoformat()` string; the bare form is taken as UTC.
fn deserialize_timestamp<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| raw.parse::<NaiveDateTime>().map(|naive| naive.and_utc()))
        .map_err(|e| serde::de::Error::custom(format!("invalid created_at '{raw}': {e}")))
}
