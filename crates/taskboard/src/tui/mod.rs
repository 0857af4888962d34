use std::io::{self, Stdout};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event as CrosstermEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::subscriber::NoSubscriber;

use crate::config::TuiConfig;

mod board;
pub mod constants;
mod handlers;
mod view;
mod widgets;

use self::view::Ui;

/// Launch the interactive task board.
///
/// With `mute_logs` set, tracing output is discarded while the terminal is
/// in raw mode so it cannot corrupt the screen.
pub fn run(config: &TuiConfig, mute_logs: bool) -> Result<()> {
    enable_raw_mode().context("failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = if mute_logs {
        tracing::subscriber::with_default(NoSubscriber::default(), || {
            run_event_loop(&mut terminal, config)
        })
    } else {
        run_event_loop(&mut terminal, config)
    };

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

fn run_event_loop(terminal: &mut Terminal<CrosstermBackend<Stdout>>, config: &TuiConfig) -> Result<()> {
    let mut ui = Ui::new(config);
    tracing::info!("Task board started");

    let tick_rate = config.tick_rate();
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|f| ui.draw(f))?;
        if ui.should_quit {
            break;
        }

        let timeout = tick_rate.checked_sub(last_tick.elapsed()).unwrap_or_default();

        if event::poll(timeout)?
            && let CrosstermEvent::Key(key) = event::read()?
        {
            ui.handle_key(key);
        }

        if last_tick.elapsed() >= tick_rate {
            ui.tick();
            last_tick = Instant::now();
        }
    }

    tracing::info!(tasks = ui.board().rows.len(), "Task board closed");
    Ok(())
}

#[cfg(test)]
mod tests;
