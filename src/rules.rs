//! This module contains the classic Sudoku rules: the placement predicate
//! that the expansion rule in [search](crate::search) consults to enumerate
//! candidates, and the full-grid goal test.
//!
//! Both are pure functions over a [SudokuGrid](crate::SudokuGrid). They check
//! digit uniqueness in each row, each column, and each 3x3 block, and nothing
//! else.

use crate::{BLOCK_SIZE, SIZE, SudokuGrid};

/// Indicates whether placing `number` into the cell at the given position
/// would violate no row, column, or block rule given the current content of
/// the grid. The content of the target cell itself is not considered, so the
/// check is meaningful for blank and filled cells alike.
///
/// # Arguments
///
/// * `grid`: The grid into which the placement is probed. It is not mutated.
/// * `column`: The column (x-coordinate) of the probed cell. Must be in the
/// range `[0, 9[`.
/// * `row`: The row (y-coordinate) of the probed cell. Must be in the range
/// `[0, 9[`.
/// * `number`: The digit whose placement is probed. Numbers outside the range
/// `[1, 9]` occur nowhere in a grid, so for them the placement is always
/// admitted.
pub fn admits(grid: &SudokuGrid, column: usize, row: usize, number: usize)
        -> bool {
    for i in 0..SIZE {
        if grid.has_number(i, row, number).unwrap() ||
                grid.has_number(column, i, number).unwrap() {
            return false;
        }
    }

    let block_column = column - column % BLOCK_SIZE;
    let block_row = row - row % BLOCK_SIZE;

    for y in block_row..(block_row + BLOCK_SIZE) {
        for x in block_column..(block_column + BLOCK_SIZE) {
            if grid.has_number(x, y, number).unwrap() {
                return false;
            }
        }
    }

    true
}

fn group_solved(cells: impl Iterator<Item = Option<usize>>) -> bool {
    let mut seen = [false; SIZE];

    for cell in cells {
        match cell {
            Some(number) if !seen[number - 1] => seen[number - 1] = true,
            _ => return false
        }
    }

    seen.iter().all(|&s| s)
}

/// Indicates whether the given grid is a solution, i.e. every row, every
/// column, and every 3x3 block contains each of the digits 1 to 9 exactly
/// once. A grid with any blank cell is never a solution.
pub fn is_solved(grid: &SudokuGrid) -> bool {
    for row in 0..SIZE {
        if !group_solved((0..SIZE)
                .map(|column| grid.get_cell(column, row).unwrap())) {
            return false;
        }
    }

    for column in 0..SIZE {
        if !group_solved((0..SIZE)
                .map(|row| grid.get_cell(column, row).unwrap())) {
            return false;
        }
    }

    for block_row in (0..SIZE).step_by(BLOCK_SIZE) {
        for block_column in (0..SIZE).step_by(BLOCK_SIZE) {
            let block = (block_row..(block_row + BLOCK_SIZE))
                .flat_map(|row| (block_column..(block_column + BLOCK_SIZE))
                    .map(move |column| (column, row)))
                .map(|(column, row)| grid.get_cell(column, row).unwrap());

            if !group_solved(block) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {

    use super::*;

    const SOLVED: &str = "\
        534678912\
        672195348\
        198342567\
        859761423\
        426853791\
        713924856\
        961537284\
        287419635\
        345286179";

    fn solved_grid() -> SudokuGrid {
        SudokuGrid::parse(SOLVED).unwrap()
    }

    #[test]
    fn empty_grid_admits_everything() {
        let grid = SudokuGrid::new();

        for number in 1..=9 {
            assert!(admits(&grid, 0, 0, number));
            assert!(admits(&grid, 8, 8, number));
        }
    }

    #[test]
    fn row_conflict_rejected() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(5, 2, 7).unwrap();

        assert!(!admits(&grid, 0, 2, 7));
        assert!(!admits(&grid, 8, 2, 7));
        assert!(admits(&grid, 0, 2, 6));
        assert!(admits(&grid, 0, 3, 7));
    }

    #[test]
    fn column_conflict_rejected() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(5, 2, 7).unwrap();

        assert!(!admits(&grid, 5, 0, 7));
        assert!(!admits(&grid, 5, 8, 7));
        assert!(admits(&grid, 5, 0, 6));

        // (4, 0) avoids the column but still shares the block with (5, 2);
        // (2, 0) shares neither and (4, 3) only the block column.
        assert!(!admits(&grid, 4, 0, 7));
        assert!(admits(&grid, 2, 0, 7));
        assert!(admits(&grid, 4, 3, 7));
    }

    #[test]
    fn block_conflict_rejected() {
        let mut grid = SudokuGrid::new();
        grid.set_cell(4, 4, 7).unwrap();

        // (3, 5) shares the center block with (4, 4), but neither the row
        // nor the column.
        assert!(!admits(&grid, 3, 5, 7));
        assert!(admits(&grid, 3, 5, 6));

        // (2, 5) is in the neighboring block.
        assert!(admits(&grid, 2, 5, 7));
    }

    #[test]
    fn solved_grid_is_solved() {
        assert!(is_solved(&solved_grid()));
    }

    #[test]
    fn blank_cell_fails_goal_test() {
        let mut grid = solved_grid();
        grid.clear_cell(4, 7).unwrap();

        assert!(!is_solved(&grid));
    }

    #[test]
    fn any_flipped_cell_fails_goal_test() {
        // Overwriting any single cell with a different digit introduces a
        // duplicate in its row, so the goal test must reject all 81 * 8
        // mutations.
        let solved = solved_grid();

        for row in 0..SIZE {
            for column in 0..SIZE {
                let original = solved.get_cell(column, row).unwrap().unwrap();

                for number in 1..=SIZE {
                    if number == original {
                        continue;
                    }

                    let mut flipped = solved.clone();
                    flipped.set_cell(column, row, number).unwrap();
                    assert!(!is_solved(&flipped),
                        "Grid with duplicate accepted by goal test.");
                }
            }
        }
    }

    #[test]
    fn full_inconsistent_grid_fails_goal_test() {
        let mut grid = solved_grid();

        // Duplicates the 3 already present in row 0.
        grid.set_cell(0, 0, 3).unwrap();

        assert!(grid.is_full());
        assert!(!is_solved(&grid));
    }
}
