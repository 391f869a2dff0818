//! Unit tests for display module.
//!
//! Run with: cargo test --test display_unit_test

use ratatui::style::Color;
use solartrace::backend::models::{SpectralReading, SummaryMetrics};
use solartrace::display::{
    NEUTRAL_SWATCH, PLACEHOLDER, SensorPanel, format_ppfd, format_red_far_red,
    format_two_decimals, lux_to_color, transmission_percent, transmission_series,
};

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
fn transmission_handles_zero_reference() {
    assert!((transmission_percent(50.0, 100.0) - 50.0).abs() < f64::EPSILON);
    assert!((transmission_percent(100.0, 100.0) - 100.0).abs() < f64::EPSILON);

    // A dead reference channel yields zero, never a division artifact
    assert!(transmission_percent(123.0, 0.0).abs() < f64::EPSILON);
    assert!(transmission_percent(123.0, -4.0).abs() < f64::EPSILON);

    // One decimal of precision
    assert!((transmission_percent(1.0, 3.0) - 33.3).abs() < f64::EPSILON);
}

#[test]
fn transmission_series_excludes_clear() {
    let series = transmission_series(&uniform(50.0), &uniform(100.0));
    assert_eq!(series.len(), 11);
    assert!(series.iter().all(|v| (*v - 50.0).abs() < f64::EPSILON));

    // A zeroed reference channel zeroes only its own slot
    let mut reference = uniform(100.0);
    reference.ch_440 = 0.0;
    let series = transmission_series(&uniform(50.0), &reference);
    assert!((series[0] - 50.0).abs() < f64::EPSILON);
    assert!(series[1].abs() < f64::EPSILON);
}

#[test]
fn metric_formats_match_the_cards() {
    assert_eq!(format_ppfd(241.7), "242");
    assert_eq!(format_ppfd(0.4), "0");
    assert_eq!(format_two_decimals(12.3456), "12.35");
    assert_eq!(format_two_decimals(1.087), "1.09");

    let reading = SpectralReading {
        ch_680: 40.0,
        ch_730: 80.0,
        ..Default::default()
    };
    assert_eq!(format_red_far_red(&reading), "0.50");

    let dark = SpectralReading {
        ch_680: 40.0,
        ..Default::default()
    };
    assert_eq!(format_red_far_red(&dark), "N/A");
}

#[test]
fn lux_ramp_is_neutral_at_the_floor_and_clamps_at_the_ceiling() {
    assert_eq!(NEUTRAL_SWATCH, Color::Rgb(163, 177, 198));
    assert_eq!(lux_to_color(0.0, 0.0, 2000.0), NEUTRAL_SWATCH);
    assert_eq!(lux_to_color(-5.0, 0.0, 2000.0), NEUTRAL_SWATCH);

    // Just above the floor the ramp starts in blue
    let Color::Rgb(r, _, b) = lux_to_color(1.0, 0.0, 2000.0) else {
        panic!("expected an RGB color");
    };
    assert!(b > r);

    // Past the ceiling the ramp clamps to the ceiling color, a warm yellow
    assert_eq!(
        lux_to_color(2000.0, 0.0, 2000.0),
        lux_to_color(99_999.0, 0.0, 2000.0)
    );
    let Color::Rgb(r, _, b) = lux_to_color(2000.0, 0.0, 2000.0) else {
        panic!("expected an RGB color");
    };
    assert!(r > b);
}

#[test]
fn sensor_panel_blanks_each_half_independently() {
    let mut panel = SensorPanel::default();
    assert_eq!(panel.ppfd, PLACEHOLDER);
    assert_eq!(panel.swatch, NEUTRAL_SWATCH);

    let reading = SpectralReading {
        ppfd_total: 321.4,
        total_lux: 900.0,
        ch_680: 10.0,
        ch_730: 20.0,
        ..Default::default()
    };
    panel.apply_live(&reading, 0.0, 2000.0);
    panel.apply_summary(&SummaryMetrics {
        dli: 12.3456,
        avg_rfr: 1.087,
    });
    assert_eq!(panel.lux, "900 lux");
    assert_eq!(panel.ppfd, "321");
    assert_eq!(panel.red_far_red, "0.50");
    assert_eq!(panel.dli, "12.35");
    assert_eq!(panel.avg_red_far_red, "1.09");
    assert_ne!(panel.swatch, NEUTRAL_SWATCH);

    // The live half blanks without touching the daily metrics
    panel.clear_live();
    assert_eq!(panel.lux, PLACEHOLDER);
    assert_eq!(panel.ppfd, PLACEHOLDER);
    assert_eq!(panel.red_far_red, PLACEHOLDER);
    assert_eq!(panel.swatch, NEUTRAL_SWATCH);
    assert_eq!(panel.dli, "12.35");

    // And the daily half blanks on its own
    panel.clear_summary();
    assert_eq!(panel.dli, PLACEHOLDER);
    assert_eq!(panel.avg_red_far_red, PLACEHOLDER);
}
