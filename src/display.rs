//! Value formatting and color mapping for the dashboard panels.

use ratatui::style::Color;

use crate::backend::models::{SpectralReading, SummaryMetrics, TRANSMISSION_CHANNELS};

/// Shown for metrics that do not apply to the current view.
pub const PLACEHOLDER: &str = "---";

/// Shown for the R:FR ratio when the far-red channel reads zero.
pub const NOT_AVAILABLE: &str = "N/A";

/// Swatch color for sensors at or below the minimum lux.
pub const NEUTRAL_SWATCH: Color = Color::Rgb(163, 177, 198);

/// Upper bound of the transmission chart's y axis, leaving headroom over
/// a full 100 percent.
pub const TRANSMISSION_MAX_PERCENT: f64 = 110.0;

/// Per-channel transmission of a bed sensor against the reference, in
/// percent rounded to one decimal. A reference at or below zero yields 0.0
/// for the channel instead of dividing by it.
#[must_use]
pub fn transmission_percent(value: f64, reference: f64) -> f64 {
    if reference <= 0.0 {
        return 0.0;
    }
    (value / reference * 100.0 * 10.0).round() / 10.0
}

/// Transmission percentages for the visible channels of one bed sensor.
///
/// The clear channel is excluded, leaving the 11 wavelength bands.
#[must_use]
pub fn transmission_series(reading: &SpectralReading, reference: &SpectralReading) -> Vec<f64> {
    let values = reading.spectral_channels();
    let reference = reference.spectral_channels();
    values
        .iter()
        .zip(reference.iter())
        .take(TRANSMISSION_CHANNELS)
        .map(|(value, reference)| transmission_percent(*value, *reference))
        .collect()
}

/// Live PPFD, rendered as a whole number.
#[must_use]
pub fn format_ppfd(ppfd: f64) -> String {
    format!("{ppfd:.0}")
}

/// Two-decimal rendering used by the DLI and average R:FR metrics.
#[must_use]
pub fn format_two_decimals(value: f64) -> String {
    format!("{value:.2}")
}

/// Live R:FR ratio, or `N/A` when the far-red channel is zero.
#[must_use]
pub fn format_red_far_red(reading: &SpectralReading) -> String {
    reading
        .red_far_red()
        .map_or_else(|| NOT_AVAILABLE.to_string(), |ratio| format!("{ratio:.2}"))
}

/// Map a lux value onto the blue-to-amber intensity ramp.
///
/// At or below `lux_min` the neutral swatch is returned. Above it the
/// position within `[lux_min, lux_max]` is clamped to `[0, 1]` and drives
/// hue from 210 down to 60 degrees with saturation and lightness rising
/// alongside it.
#[must_use]
pub fn lux_to_color(lux: f64, lux_min: f64, lux_max: f64) -> Color {
    if lux <= lux_min {
        return NEUTRAL_SWATCH;
    }
    let ratio = ((lux - lux_min) / (lux_max - lux_min)).clamp(0.0, 1.0);
    let hue = 210.0 - 150.0 * ratio;
    let saturation = 70.0 + 10.0 * ratio;
    let lightness = 55.0 + 15.0 * ratio;
    let (r, g, b) = hsl_to_rgb(hue, saturation, lightness);
    Color::Rgb(r, g, b)
}

fn hsl_to_rgb(hue: f64, saturation: f64, lightness: f64) -> (u8, u8, u8) {
    let s = saturation / 100.0;
    let l = lightness / 100.0;
    let c = (1.0 - (2.0 * l - 1.0).abs()) * s;
    let hp = (hue.rem_euclid(360.0)) / 60.0;
    let x = c * (1.0 - (hp % 2.0 - 1.0).abs());
    let (r1, g1, b1) = if hp < 1.0 {
        (c, x, 0.0)
    } else if hp < 2.0 {
        (x, c, 0.0)
    } else if hp < 3.0 {
        (0.0, c, x)
    } else if hp < 4.0 {
        (0.0, x, c)
    } else if hp < 5.0 {
        (x, 0.0, c)
    } else {
        (c, 0.0, x)
    };
    let m = l - c / 2.0;
    let channel = |v: f64| ((v + m) * 255.0).round() as u8;
    (channel(r1), channel(g1), channel(b1))
}

/// Formatted metric card for one sensor.
#[derive(Debug, Clone)]
pub struct SensorPanel {
    pub lux: String,
    pub ppfd: String,
    pub red_far_red: String,
    pub dli: String,
    pub avg_red_far_red: String,
    pub swatch: Color,
}

impl Default for SensorPanel {
    fn default() -> Self {
        Self {
            lux: PLACEHOLDER.to_string(),
            ppfd: PLACEHOLDER.to_string(),
            red_far_red: PLACEHOLDER.to_string(),
            dli: PLACEHOLDER.to_string(),
            avg_red_far_red: PLACEHOLDER.to_string(),
            swatch: NEUTRAL_SWATCH,
        }
    }
}

impl SensorPanel {
    /// Fill the live metrics from a fresh reading.
    pub fn apply_live(&mut self, reading: &SpectralReading, lux_min: f64, lux_max: f64) {
        self.lux = format!("{:.0} lux", reading.total_lux);
        self.ppfd = format_ppfd(reading.ppfd_total);
        self.red_far_red = format_red_far_red(reading);
        self.swatch = lux_to_color(reading.total_lux, lux_min, lux_max);
    }

    /// Fill the daily metrics from a summary row.
    pub fn apply_summary(&mut self, metrics: &SummaryMetrics) {
        self.dli = format_two_decimals(metrics.dli);
        self.avg_red_far_red = format_two_decimals(metrics.avg_rfr);
    }

    /// Blank the live metrics, keeping the daily ones.
    pub fn clear_live(&mut self) {
        self.lux = PLACEHOLDER.to_string();
        self.ppfd = PLACEHOLDER.to_string();
        self.red_far_red = PLACEHOLDER.to_string();
        self.swatch = NEUTRAL_SWATCH;
    }

    /// Blank the daily metrics, keeping the live ones.
    pub fn clear_summary(&mut self) {
        self.dli = PLACEHOLDER.to_string();
        self.avg_red_far_red = PLACEHOLDER.to_string();
    }
}
