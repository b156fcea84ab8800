//! Display collaborator used by the session loop

pub mod terminal;

pub use terminal::TerminalScreen;

use crate::game_of_life::Grid;
use std::io;

/// User input observed between generations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Shorten the cadence
    IncreaseSpeed,
    /// Lengthen the cadence
    DecreaseSpeed,
    Quit,
    None,
}

/// Metadata rendered alongside the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameMeta {
    pub generation: u64,
    pub cadence_seconds: f64,
}

/// Renders frames and reports key presses.
///
/// The engine never talks to a terminal directly; anything implementing this
/// trait can drive a session, including headless doubles.
pub trait Screen {
    fn render(&mut self, grid: &Grid, meta: &FrameMeta) -> io::Result<()>;

    /// Non-blocking poll. Failures are reported as [`Event::None`].
    fn poll_event(&mut self) -> Event;

    /// Block until any key is pressed
    fn wait_key(&mut self) -> io::Result<()>;

    /// Show a message below the most recent frame
    fn show_message(&mut self, message: &str) -> io::Result<()>;
}
