//! Game of Life rules implementation

use super::Grid;

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Apply Game of Life rules to compute the next generation.
    ///
    /// The current grid is only read; every neighbor count is taken against it
    /// and the result is written into a fresh grid.
    pub fn evolve(current: &Grid) -> Grid {
        let next_cells: Vec<bool> = (0..current.height)
            .flat_map(|row| {
                (0..current.width).map(move |col| {
                    Self::should_be_alive(current.get(row, col), current.count_neighbors(row, col))
                })
            })
            .collect();

        Grid::with_cells(current.height, current.width, next_cells)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid);
        }
        grid
    }

    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_life_block() {
        let cells = vec![
            vec![false, false, false, false],
            vec![false, true, true, false],
            vec![false, true, true, false],
            vec![false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(grid, evolved);
    }

    #[test]
    fn test_oscillator_blinker() {
        let cells = vec![
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
            vec![false, true, true, true, false],
            vec![false, false, false, false, false],
            vec![false, false, false, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        let evolved = GameOfLifeRules::evolve(&grid);

        assert_eq!(evolved.living_cells(), vec![(1, 2), (2, 2), (3, 2)]);

        let evolved_twice = GameOfLifeRules::evolve(&evolved);
        assert_eq!(grid, evolved_twice);
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8u8 {
            assert_eq!(GameOfLifeRules::should_be_alive(true, n), n == 2 || n == 3, "live cell, {} neighbors", n);
            assert_eq!(GameOfLifeRules::should_be_alive(false, n), n == 3, "dead cell, {} neighbors", n);
        }
    }

    #[test]
    fn test_updates_do_not_leak_within_a_generation() {
        // Every cell of the result must match the rule applied to the snapshot
        let mut grid = Grid::new(6, 6);
        for (r, c) in [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)] {
            grid.set(r, c, true).unwrap();
        }

        let snapshot = grid.clone();
        let next = GameOfLifeRules::evolve(&grid);
        assert_eq!(grid, snapshot);

        for row in 0..grid.height {
            for col in 0..grid.width {
                let expected = GameOfLifeRules::should_be_alive(
                    snapshot.get(row, col),
                    snapshot.count_neighbors(row, col),
                );
                assert_eq!(next.get(row, col), expected, "cell ({}, {})", row, col);
            }
        }
    }

    #[test]
    fn test_evolve_generations() {
        let grid = Grid::from_cells(vec![
            vec![false, false, false, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, true, false, false],
            vec![false, false, false, false, false],
        ])
        .unwrap();

        assert_eq!(GameOfLifeRules::evolve_generations(grid.clone(), 2), grid);
        assert_ne!(GameOfLifeRules::evolve_generations(grid.clone(), 3), grid);
    }
}
