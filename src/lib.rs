//! Toroidal Game of Life
//!
//! Simulates Conway's Game of Life on a fixed-size grid whose edges wrap
//! around, rendering each generation to a terminal with live speed control.

pub mod config;
pub mod game_of_life;
pub mod screen;
pub mod session;
pub mod utils;

pub use config::Settings;
pub use game_of_life::{Advance, Grid, LifeEngine, LoadError};
pub use session::{Cadence, Session, SessionOutcome, SessionSummary};
