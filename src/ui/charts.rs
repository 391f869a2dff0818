//! Chart widgets for the sensor columns and the transmission panel.

use ratatui::Frame;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, BarChart, Block, Borders, Chart, Dataset, GraphType, Paragraph};

use crate::backend::models::{CHANNEL_LABELS, TRANSMISSION_CHANNELS, display_name};
use crate::charts::{ChartKind, time_axis_labels};
use crate::display::TRANSMISSION_MAX_PERCENT;
use crate::ui::{colors, sensor_color};
use crate::view::DashboardController;

/// Draw a sensor's chart as whatever kind its retained state holds.
pub fn draw_sensor_chart(f: &mut Frame, area: Rect, controller: &DashboardController, sensor: &str) {
    let Some(chart) = controller.chart(sensor) else {
        return;
    };
    let name = display_name(sensor);
    match chart.kind() {
        ChartKind::Bar => {
            let title = format!("Espectro de {name} (En Vivo)");
            draw_spectrum(f, area, sensor, chart.spectrum(), &title);
        }
        ChartKind::Line => {
            // A line chart can outlive a switch back to the live view until
            // fresh readings land; drop the range qualifier in that window.
            let title = match controller.mode().range_days() {
                Some(_) => format!(
                    "Historial PPFD de {name} ({})",
                    controller.mode().title_suffix()
                ),
                None => format!("Historial PPFD de {name}"),
            };
            draw_history(f, area, sensor, chart.series(), &title);
        }
    }
}

fn draw_spectrum(f: &mut Frame, area: Rect, sensor: &str, values: &[f64], title: &str) {
    if values.is_empty() {
        draw_waiting(f, area, title);
        return;
    }

    let data: Vec<(&str, u64)> = CHANNEL_LABELS
        .iter()
        .zip(values.iter())
        .map(|(label, value)| (*label, value.max(0.0).round() as u64))
        .collect();

    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(sensor_color(sensor)))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(Color::White),
                ))
                .title_bottom(Line::from(Span::styled(
                    " Canales del sensor AS7341. ",
                    Style::default().fg(Color::DarkGray),
                ))),
        )
        .direction(Direction::Horizontal)
        .data(&data)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(sensor_color(sensor)))
        .value_style(Style::default().fg(Color::Black).bg(sensor_color(sensor)));

    f.render_widget(chart, area);
}

fn draw_history(f: &mut Frame, area: Rect, sensor: &str, series: &[(f64, f64)], title: &str) {
    if series.is_empty() {
        draw_waiting(f, area, title);
        return;
    }

    let min_ppfd = series.iter().map(|(_, v)| *v).fold(f64::INFINITY, f64::min);
    let max_ppfd = series
        .iter()
        .map(|(_, v)| *v)
        .fold(f64::NEG_INFINITY, f64::max);
    let first = series.first().map_or(0.0, |(t, _)| *t);
    let last = series.last().map_or(1.0, |(t, _)| *t);

    let y_margin = (max_ppfd - min_ppfd).max(0.1) * 0.15;
    let y_min = (min_ppfd - y_margin).max(0.0);
    let y_max = max_ppfd + y_margin;

    let datasets = vec![
        Dataset::default()
            .name(display_name(sensor))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(sensor_color(sensor)))
            .data(series),
    ];

    let x_labels: Vec<Span> = time_axis_labels(series, 3)
        .into_iter()
        .map(Span::raw)
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(sensor_color(sensor)))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(Color::White),
                ))
                .title_bottom(Line::from(Span::styled(
                    " Evolución de μmol·m⁻²·s⁻¹. ",
                    Style::default().fg(Color::DarkGray),
                ))),
        )
        .x_axis(
            Axis::default()
                .title("Hora del Día")
                .style(Style::default().fg(Color::Gray))
                .bounds([first, last])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("PPFD (μmol·m⁻²·s⁻¹)")
                .style(Style::default().fg(Color::Gray))
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::raw(format!("{y_min:.0}")),
                    Span::raw(format!("{y_max:.0}")),
                ]),
        );

    f.render_widget(chart, area);
}

/// The bed-vs-reference transmission comparison, fed by live cycles only.
pub fn draw_transmission(f: &mut Frame, area: Rect, controller: &DashboardController) {
    let title = "Transmisión de Luz por Canal (Cama vs Referencia)";
    let series = controller.transmission().series();
    if series.is_empty() {
        draw_waiting(f, area, title);
        return;
    }

    let points: Vec<Vec<(f64, f64)>> = series
        .iter()
        .map(|(_, values)| {
            values
                .iter()
                .enumerate()
                .map(|(i, v)| (i as f64, *v))
                .collect()
        })
        .collect();

    let datasets: Vec<Dataset> = series
        .iter()
        .zip(points.iter())
        .map(|((name, _), data)| {
            Dataset::default()
                .name(name.clone())
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(series_color(name)))
                .data(data)
        })
        .collect();

    let x_labels: Vec<Span> = [0, TRANSMISSION_CHANNELS / 2, TRANSMISSION_CHANNELS - 1]
        .iter()
        .map(|&i| Span::raw(CHANNEL_LABELS[i]))
        .collect();

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .title(Span::styled(
                    format!(" {title} "),
                    Style::default().fg(Color::White),
                )),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, (TRANSMISSION_CHANNELS - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title("Transmisión (%)")
                .style(Style::default().fg(Color::Gray))
                .bounds([0.0, TRANSMISSION_MAX_PERCENT])
                .labels(vec![Span::raw("0"), Span::raw("55"), Span::raw("110")]),
        );

    f.render_widget(chart, area);
}

fn series_color(name: &str) -> Color {
    if name.starts_with("Cama 2") {
        colors::BED_2
    } else {
        colors::BED_1
    }
}

fn draw_waiting(f: &mut Frame, area: Rect, title: &str) {
    let msg = Paragraph::new("Esperando datos...")
        .style(Style::default().fg(Color::Gray))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::BORDER))
                .title(format!(" {title} ")),
        );
    f.render_widget(msg, area);
}
