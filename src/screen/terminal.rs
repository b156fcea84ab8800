//! Full-screen terminal rendering with crossterm

use super::{Event, FrameMeta, Screen};
use crate::game_of_life::Grid;
use crate::utils::GridFormatter;
use crossterm::{
    cursor,
    event::{self, Event as TermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::Print,
    terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Stdout, Write};
use std::time::Duration;
use tracing::debug;

/// Terminal screen; raw mode and the alternate screen are released on drop
pub struct TerminalScreen {
    out: Stdout,
    grid_height: usize,
}

impl TerminalScreen {
    pub fn new() -> io::Result<Self> {
        let mut out = io::stdout();
        terminal::enable_raw_mode()?;
        execute!(out, EnterAlternateScreen, cursor::Hide, cursor::MoveTo(0, 0))?;
        Ok(Self { out, grid_height: 0 })
    }

    fn read_event(&mut self) -> io::Result<Event> {
        if !event::poll(Duration::from_millis(0))? {
            return Ok(Event::None);
        }
        match event::read()? {
            TermEvent::Key(key) => Ok(map_key(key)),
            _ => Ok(Event::None),
        }
    }
}

impl Drop for TerminalScreen {
    fn drop(&mut self) {
        let _ = execute!(self.out, cursor::Show, LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

impl Screen for TerminalScreen {
    fn render(&mut self, grid: &Grid, meta: &FrameMeta) -> io::Result<()> {
        self.grid_height = grid.height;
        queue!(self.out, terminal::Clear(ClearType::All))?;

        let lines = GridFormatter::format_frame(grid, meta.generation, meta.cadence_seconds);
        for (row, line) in lines.iter().enumerate() {
            queue!(self.out, cursor::MoveTo(0, to_row(row)), Print(line))?;
        }

        self.out.flush()
    }

    fn poll_event(&mut self) -> Event {
        self.read_event().unwrap_or_else(|err| {
            debug!(error = %err, "input poll failed");
            Event::None
        })
    }

    fn wait_key(&mut self) -> io::Result<()> {
        loop {
            if let TermEvent::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(());
                }
            }
        }
    }

    fn show_message(&mut self, message: &str) -> io::Result<()> {
        let row = GridFormatter::message_row(self.grid_height);
        queue!(self.out, cursor::MoveTo(0, to_row(row)), Print(message))?;
        self.out.flush()
    }
}

fn to_row(row: usize) -> u16 {
    u16::try_from(row).unwrap_or(u16::MAX)
}

/// Translate a key press into a session event. Up lengthens the cadence,
/// Down shortens it.
pub fn map_key(key: KeyEvent) -> Event {
    if key.kind != KeyEventKind::Press {
        return Event::None;
    }

    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Event::Quit,
        (KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc, _) => Event::Quit,
        (KeyCode::Up, _) => Event::DecreaseSpeed,
        (KeyCode::Down, _) => Event::IncreaseSpeed,
        _ => Event::None,
    }
}
