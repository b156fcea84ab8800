//! Display and output formatting utilities

use crate::game_of_life::Grid;

pub const TITLE: &str = "Conway's Game of Life";
pub const STABILIZED_MESSAGE: &str =
    "All organisms are either dead or stationary. Press any key to exit...";

/// Format grids and frame headers for text output
pub struct GridFormatter;

impl GridFormatter {
    /// Status line shown under the title; speed is reported as frames per second
    pub fn format_status(generation: u64, cadence_seconds: f64) -> String {
        format!(
            "Generation: {} | Speed: {:.1} FPS (Up/Down to adjust, q to quit)",
            generation,
            1.0 / cadence_seconds
        )
    }

    /// One line per grid row, `*` for alive and `.` for dead
    pub fn format_rows(grid: &Grid) -> Vec<String> {
        grid.rows()
            .map(|row| row.iter().map(|&cell| if cell { '*' } else { '.' }).collect())
            .collect()
    }

    /// Full frame: title, status line and the grid
    pub fn format_frame(grid: &Grid, generation: u64, cadence_seconds: f64) -> Vec<String> {
        let mut lines = Vec::with_capacity(grid.height + 2);
        lines.push(TITLE.to_string());
        lines.push(Self::format_status(generation, cadence_seconds));
        lines.extend(Self::format_rows(grid));
        lines
    }

    /// Screen row for messages shown below the grid
    pub fn message_row(grid_height: usize) -> usize {
        grid_height + 3
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        use std::io::IsTerminal;
        std::io::stdout().is_terminal()
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Blue => 34,
        }
    }
}
