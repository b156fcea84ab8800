//! File I/O operations for Game of Life grids

use super::Grid;
use anyhow::Context;
use itertools::Itertools;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal failure while loading the initial grid
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read grid file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid token '{token}' at line {line}, column {column} of {path}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        token: String,
    },

    #[error("Cell value {value} at line {line}, column {column} of {path} must be 0 or 1")]
    InvalidCell {
        path: PathBuf,
        line: usize,
        column: usize,
        value: i64,
    },
}

/// Load a `height` x `width` grid from a text file.
///
/// Format: up to `height` lines of whitespace-separated integers, one row per
/// line. Missing rows or trailing columns are dead, columns past `width` and
/// lines past `height` are ignored.
pub fn load_grid_from_file<P: AsRef<Path>>(
    path: P,
    height: usize,
    width: usize,
) -> Result<Grid, LoadError> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    parse_rows(&content, path, height, width)
}

/// Parse a grid from a string representation
pub fn parse_grid_from_string(content: &str, height: usize, width: usize) -> Result<Grid, LoadError> {
    parse_rows(content, Path::new("<input>"), height, width)
}

fn parse_rows(content: &str, source: &Path, height: usize, width: usize) -> Result<Grid, LoadError> {
    let mut cells = vec![false; height * width];

    for (row_idx, line) in content.lines().take(height).enumerate() {
        for (col_idx, token) in line.split_whitespace().enumerate().take(width) {
            let value: i64 = token.parse().map_err(|_| LoadError::Parse {
                path: source.to_path_buf(),
                line: row_idx + 1,
                column: col_idx + 1,
                token: token.to_string(),
            })?;

            cells[row_idx * width + col_idx] = match value {
                0 => false,
                1 => true,
                other => {
                    return Err(LoadError::InvalidCell {
                        path: source.to_path_buf(),
                        line: row_idx + 1,
                        column: col_idx + 1,
                        value: other,
                    })
                }
            };
        }
    }

    Ok(Grid::with_cells(height, width, cells))
}

/// Save a grid to a text file in the same format the loader reads
pub fn save_grid_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> anyhow::Result<()> {
    let content = grid_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write grid to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its whitespace-separated string representation
pub fn grid_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.height * (grid.width * 2 + 1));

    for row in grid.rows() {
        result.push_str(&row.iter().map(|&cell| if cell { '1' } else { '0' }).join(" "));
        result.push('\n');
    }

    result
}
