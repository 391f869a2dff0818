//! Terminal rendering of the dashboard.

pub mod charts;
pub mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Color;

use crate::backend::models::SENSORS;
use crate::view::DashboardController;

/// Sensor palette matching the web dashboard, plus shared UI colors.
pub mod colors {
    use ratatui::style::Color;

    // One fixed color per sensor
    pub const REFERENCE: Color = Color::Rgb(54, 162, 235); // Blue
    pub const BED_1: Color = Color::Rgb(75, 192, 192); // Teal
    pub const BED_2: Color = Color::Rgb(255, 206, 86); // Amber

    // UI colors
    pub const BORDER: Color = Color::Rgb(80, 80, 120);
    pub const HEADER_BG: Color = Color::Rgb(30, 30, 50);
    pub const HELP_KEY: Color = Color::Rgb(255, 200, 0);
    pub const LIVE_INDICATOR: Color = Color::Rgb(255, 50, 50);
    pub const HISTORY_INDICATOR: Color = Color::Rgb(100, 200, 255);
    pub const STATUS_OK: Color = Color::Rgb(100, 255, 100);
    pub const STATUS_ERROR: Color = Color::Rgb(255, 80, 80);
}

/// Color assigned to a sensor's charts and panel border.
#[must_use]
pub fn sensor_color(sensor: &str) -> Color {
    match sensor {
        "Cama_1" => colors::BED_1,
        "Cama_2" => colors::BED_2,
        _ => colors::REFERENCE,
    }
}

/// Render one frame of the dashboard.
pub fn draw(f: &mut Frame, controller: &DashboardController) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Header with status
            Constraint::Min(15),    // Sensor columns
            Constraint::Length(10), // Transmission comparison
            Constraint::Length(1),  // Footer key hints
        ])
        .split(f.area());

    panels::draw_header(f, chunks[0], controller);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chunks[1]);
    for (sensor, column) in SENSORS.iter().zip(columns.iter()) {
        draw_sensor_column(f, *column, controller, sensor);
    }

    charts::draw_transmission(f, chunks[2], controller);
    panels::draw_footer(f, chunks[3], controller);
}

fn draw_sensor_column(f: &mut Frame, area: Rect, controller: &DashboardController, sensor: &str) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(8)])
        .split(area);
    panels::draw_metrics(f, rows[0], controller, sensor);
    charts::draw_sensor_chart(f, rows[1], controller, sensor);
}
