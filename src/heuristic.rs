//! This module contains the heuristics used by the informed search
//! strategies in [search](crate::search).
//!
//! Both heuristics estimate how far a partial grid is from a solution.
//! [empty_cells] is the plain count of blanks, which equals the number of
//! fills still required. [row_relaxation] solves a relaxed puzzle in which
//! column and block rules are dropped, so it reacts to how constrained the
//! individual rows already are.

use crate::{SIZE, SudokuGrid};

/// The number of blank cells in the given grid. Since the expansion rule
/// fills exactly one cell per step, this is exactly the number of steps
/// remaining on any path to a full grid.
pub fn empty_cells(grid: &SudokuGrid) -> usize {
    grid.cells().iter().filter(|cell| cell.is_none()).count()
}

/// For each row, the number of blank cells in that row multiplied by the
/// number of digits from 1 to 9 absent from that row, summed over all nine
/// rows. Column and block rules are ignored, making this a relaxation of the
/// full puzzle: the lower the value, the fewer ways remain to complete the
/// rows. A solved grid scores 0.
pub fn row_relaxation(grid: &SudokuGrid) -> usize {
    grid.cells()
        .chunks(SIZE)
        .map(|row| {
            let blanks = row.iter().filter(|cell| cell.is_none()).count();
            let absent = (1..=SIZE)
                .filter(|number| !row.contains(&Some(*number)))
                .count();
            blanks * absent
        })
        .sum()
}
