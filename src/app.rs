//! Terminal lifecycle and input handling.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc::UnboundedReceiver;

use crate::error::AppResult;
use crate::ui;
use crate::view::{DashboardController, DashboardUpdate, ViewMode};

/// RAII guard to ensure terminal state is restored even on panic.
struct TerminalCleanup;

impl Drop for TerminalCleanup {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen);
    }
}

/// The terminal application: drains fetch results into the controller and
/// turns key presses into view changes.
pub struct App {
    controller: DashboardController,
    update_rx: UnboundedReceiver<DashboardUpdate>,
    tick_rate: Duration,
    should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(
        controller: DashboardController,
        update_rx: UnboundedReceiver<DashboardUpdate>,
        tick_rate_ms: u64,
    ) -> Self {
        Self {
            controller,
            update_rx,
            tick_rate: Duration::from_millis(tick_rate_ms),
            should_quit: false,
        }
    }

    /// Run the dashboard until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error when the terminal cannot be set up or drawn to.
    pub fn run(&mut self) -> AppResult<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;

        // RAII guard ensures terminal cleanup even on panic
        let _cleanup = TerminalCleanup;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        self.controller.refresh();

        let result = self.main_loop(&mut terminal);

        self.controller.shutdown();

        // Explicit cleanup (guard will also clean up on drop, but explicit is clearer)
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

        // Forget the guard to avoid double cleanup
        std::mem::forget(_cleanup);

        result
    }

    fn main_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> AppResult<()> {
        while !self.should_quit {
            while let Ok(update) = self.update_rx.try_recv() {
                self.controller.apply_update(update);
            }

            terminal.draw(|f| ui::draw(f, &self.controller))?;

            if event::poll(self.tick_rate)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key.code);
                    }
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyCode) {
        match key {
            // Quit
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            // View selection
            KeyCode::Char('1') | KeyCode::Char('l') => self.controller.set_view(ViewMode::Live),
            KeyCode::Char('2') | KeyCode::Char('t') => self.controller.set_view(ViewMode::Today),
            KeyCode::Char('3') | KeyCode::Char('7') => {
                self.controller.set_view(ViewMode::SevenDays);
            }
            KeyCode::Tab => {
                let next = match self.controller.mode() {
                    ViewMode::Live => ViewMode::Today,
                    ViewMode::Today => ViewMode::SevenDays,
                    ViewMode::SevenDays => ViewMode::Live,
                };
                self.controller.set_view(next);
            }

            // Manual refresh of the active view
            KeyCode::Char('r') => self.controller.refresh(),

            _ => {}
        }
    }
}
