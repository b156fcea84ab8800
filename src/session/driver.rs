//! Generation loop tying the engine to a screen

use super::Cadence;
use crate::config::{Settings, DEFAULT_HEIGHT, DEFAULT_WIDTH};
use crate::game_of_life::{Advance, LifeEngine, LoadError};
use crate::screen::{Event, FrameMeta, Screen};
use crate::utils::display::STABILIZED_MESSAGE;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info};

/// Why the loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionOutcome {
    Quit,
    Stabilized,
}

/// End-of-session report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    pub outcome: SessionOutcome,
    pub generation: u64,
    pub living_cells: usize,
    pub final_cadence_seconds: f64,
}

impl SessionSummary {
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// A running simulation: the engine plus the user-controlled cadence
pub struct Session {
    engine: LifeEngine,
    cadence: Cadence,
}

impl Session {
    pub fn new(engine: LifeEngine, cadence: Cadence) -> Self {
        Self { engine, cadence }
    }

    /// Load a `DEFAULT_HEIGHT` x `DEFAULT_WIDTH` grid from `path` with the configured cadence
    pub fn from_settings<P: AsRef<Path>>(path: P, settings: &Settings) -> Result<Self, LoadError> {
        let engine = LifeEngine::from_file(path, DEFAULT_HEIGHT, DEFAULT_WIDTH)?;
        Ok(Self::new(engine, Cadence::from_config(&settings.cadence)))
    }

    pub fn engine(&self) -> &LifeEngine {
        &self.engine
    }

    pub fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    /// Run until the user quits or the grid stops changing
    pub fn run<S: Screen>(&mut self, screen: &mut S) -> io::Result<SessionOutcome> {
        self.run_with_sleeper(screen, std::thread::sleep)
    }

    /// Same as [`Session::run`] with the inter-generation delay delegated to `sleeper`
    pub fn run_with_sleeper<S, F>(&mut self, screen: &mut S, mut sleeper: F) -> io::Result<SessionOutcome>
    where
        S: Screen,
        F: FnMut(Duration),
    {
        info!(
            height = self.engine.grid().height,
            width = self.engine.grid().width,
            living = self.engine.grid().living_count(),
            cadence = self.cadence.seconds(),
            "session started"
        );

        loop {
            screen.render(self.engine.grid(), &self.frame_meta())?;

            match screen.poll_event() {
                Event::IncreaseSpeed => {
                    self.cadence.speed_up();
                    debug!(cadence = self.cadence.seconds(), "speed increased");
                }
                Event::DecreaseSpeed => {
                    self.cadence.slow_down();
                    debug!(cadence = self.cadence.seconds(), "speed decreased");
                }
                Event::Quit => {
                    info!(generation = self.engine.generation(), "quit requested");
                    return Ok(SessionOutcome::Quit);
                }
                Event::None => {}
            }

            match self.engine.advance() {
                Advance::Changed => sleeper(self.cadence.as_duration()),
                Advance::Stable => {
                    info!(generation = self.engine.generation(), "grid stabilized");
                    screen.show_message(STABILIZED_MESSAGE)?;
                    screen.wait_key()?;
                    return Ok(SessionOutcome::Stabilized);
                }
            }
        }
    }

    pub fn summary(&self, outcome: SessionOutcome) -> SessionSummary {
        SessionSummary {
            outcome,
            generation: self.engine.generation(),
            living_cells: self.engine.grid().living_count(),
            final_cadence_seconds: self.cadence.seconds(),
        }
    }

    fn frame_meta(&self) -> FrameMeta {
        FrameMeta {
            generation: self.engine.generation(),
            cadence_seconds: self.cadence.seconds(),
        }
    }
}
