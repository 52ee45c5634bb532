//! termfolio entry point.
//!
//! A portfolio presented as a shell session inside the real terminal.
//! Type `help` for commands; Tab completes, Up/Down recall history,
//! Alt+1..9 picks a completion, Ctrl+C or Esc on an empty line quits.

mod app_state;
mod input;
mod render;

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event};
use crossterm::{cursor, execute, terminal};

use app_state::{AppState, InputResult};
use termfolio_types::config::FolioConfig;
use termfolio_types::error::FolioError;

/// Target frame interval.
const FRAME: Duration = Duration::from_millis(16);

/// Raw mode and the alternate screen, undone on drop.
struct TerminalGuard {
    out: Stdout,
}

/// Wrap a crossterm failure while `action` was in progress.
fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> FolioError {
    move |e| FolioError::Terminal(format!("{action}: {e}"))
}

impl TerminalGuard {
    fn enter() -> termfolio_types::error::Result<Self> {
        terminal::enable_raw_mode().map_err(terminal_error("enabling raw mode"))?;
        let mut out = io::stdout();
        if let Err(e) = execute!(out, terminal::EnterAlternateScreen, cursor::Show) {
            let _ = terminal::disable_raw_mode();
            return Err(terminal_error("entering alternate screen")(e));
        }
        Ok(Self { out })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show);
        let _ = terminal::disable_raw_mode();
        let _ = self.out.flush();
    }
}

fn run(state: &mut AppState, out: &mut impl Write) -> Result<()> {
    let mut last = Instant::now();
    let (mut cols, mut rows) =
        terminal::size().map_err(terminal_error("reading terminal size"))?;
    render::draw(out, state, cols, rows)?;

    loop {
        if event::poll(FRAME)? {
            match event::read()? {
                Event::Key(key) => {
                    let empty = state.input.text().is_empty();
                    if let Some(ev) = input::map_key(&key, empty)
                        && state.handle(ev) == InputResult::Quit
                    {
                        log::info!("Quit requested");
                        return Ok(());
                    }
                },
                Event::Resize(c, r) => {
                    cols = c;
                    rows = r;
                },
                _ => {},
            }
        }

        let now = Instant::now();
        let dt = u32::try_from(now.duration_since(last).as_millis()).unwrap_or(u32::MAX);
        last = now;
        state.tick(dt);
        render::draw(out, state, cols, rows)?;
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    // Resolve config from CLI arg, TERMFOLIO_CONFIG env var, or defaults.
    let config = FolioConfig::resolve(std::env::args().nth(1))?;
    log::info!(
        "Starting termfolio (prompt {:?}, downloads in {})",
        config.prompt,
        config.download_dir.display()
    );

    let mut state = AppState::new(config)?;
    let mut guard = TerminalGuard::enter()?;
    let result = run(&mut state, &mut guard.out);
    drop(guard);

    if let Err(e) = &result {
        log::error!("termfolio exited with error: {e:#}");
    }
    result
}
