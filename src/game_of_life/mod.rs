//! Game of Life core functionality

pub mod engine;
pub mod grid;
pub mod io;
pub mod rules;

pub use engine::{Advance, LifeEngine};
pub use grid::Grid;
pub use io::{grid_to_string, load_grid_from_file, parse_grid_from_string, save_grid_to_file, LoadError};
pub use rules::GameOfLifeRules;
