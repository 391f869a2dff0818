//! Header, metric cards and footer.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::backend::models::display_name;
use crate::display::SensorPanel;
use crate::ui::{colors, sensor_color};
use crate::view::{DashboardController, ViewMode};

pub fn draw_header(f: &mut Frame, area: Rect, controller: &DashboardController) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(40), Constraint::Length(16)])
        .split(area);

    let status_color = if controller.connection_error() {
        colors::STATUS_ERROR
    } else {
        colors::STATUS_OK
    };
    let status = Paragraph::new(Line::from(Span::styled(
        controller.status_line(),
        Style::default().fg(status_color),
    )))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER))
            .title(Span::styled(
                " Dashboard de Monitoreo Solar ",
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(status, chunks[0]);

    let mode_str = match controller.mode() {
        ViewMode::Live => "● EN VIVO",
        ViewMode::Today => "◆ HOY",
        ViewMode::SevenDays => "◆ 7 DÍAS",
    };
    let mode_color = match controller.mode() {
        ViewMode::Live => colors::LIVE_INDICATOR,
        _ => colors::HISTORY_INDICATOR,
    };
    let mode = Paragraph::new(Line::from(Span::styled(
        mode_str,
        Style::default().fg(mode_color).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(colors::BORDER)),
    );
    f.render_widget(mode, chunks[1]);
}

/// Metric card for one sensor. The dot carries the lux intensity color.
pub fn draw_metrics(f: &mut Frame, area: Rect, controller: &DashboardController, sensor: &str) {
    let fallback = SensorPanel::default();
    let panel = controller.panel(sensor).unwrap_or(&fallback);

    let lines = vec![
        Line::from(vec![
            Span::styled("● ", Style::default().fg(panel.swatch)),
            Span::styled("Luz: ", Style::default().fg(Color::Gray)),
            Span::styled(&panel.lux, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  PPFD: ", Style::default().fg(Color::Gray)),
            Span::styled(&panel.ppfd, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  R:FR: ", Style::default().fg(Color::Gray)),
            Span::styled(&panel.red_far_red, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  DLI: ", Style::default().fg(Color::Gray)),
            Span::styled(&panel.dli, Style::default().fg(Color::White)),
        ]),
        Line::from(vec![
            Span::styled("  Prom. R:FR: ", Style::default().fg(Color::Gray)),
            Span::styled(&panel.avg_red_far_red, Style::default().fg(Color::White)),
        ]),
    ];

    let card = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(sensor_color(sensor)))
            .title(Span::styled(
                format!(" {} ", display_name(sensor)),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}

pub fn draw_footer(f: &mut Frame, area: Rect, controller: &DashboardController) {
    let mode_str = match controller.mode() {
        ViewMode::Live => "●VIVO",
        ViewMode::Today => "◆HOY",
        ViewMode::SevenDays => "◆7D",
    };
    let mode_color = match controller.mode() {
        ViewMode::Live => colors::LIVE_INDICATOR,
        _ => colors::HISTORY_INDICATOR,
    };

    let footer = Paragraph::new(Line::from(vec![
        Span::styled(format!(" [{mode_str}] "), Style::default().fg(mode_color)),
        Span::styled("1/l", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":en vivo  "),
        Span::styled("2/t", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":hoy  "),
        Span::styled("3/7", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":7 días  "),
        Span::styled("Tab", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":vista  "),
        Span::styled("r", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":actualizar  "),
        Span::styled("q", Style::default().fg(colors::HELP_KEY)),
        Span::raw(":salir"),
    ]))
    .style(Style::default().bg(colors::HEADER_BG));

    f.render_widget(footer, area);
}
