// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(missing_docs)]

//! This crate implements an easy-to-understand 9x9 Sudoku solver based on
//! state-space search. It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking the validity of individual placements and of complete grids
//! * Solving Sudoku with five interchangeable search strategies: breadth-first
//! search, depth-limited and iterative-deepening search, uniform-cost search,
//! greedy best-first search, and A*
//!
//! All strategies share one state representation, one expansion rule, and one
//! goal test, so their results are directly comparable: every strategy reports
//! how many nodes it expanded alongside its outcome.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange grids, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and display
//! a grid is provided below.
//!
//! ```
//! use sudoku_search::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("\
//!     534678912\
//!     672195348\
//!     198342567\
//!     859761423\
//!     426853791\
//!     713924856\
//!     961537284\
//!     287419635\
//!     345286179").unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Solving Sudoku
//!
//! This crate offers a [Strategy](search::Strategy) trait for structs that
//! search the space of partial grids, and the [Algorithm](search::Algorithm)
//! enumeration to select one of the five provided implementations by name.
//!
//! ```
//! use sudoku_search::SudokuGrid;
//! use sudoku_search::search::{Algorithm, SearchOutcome};
//!
//! // A puzzle with a single blank cell in the top-left corner.
//! let grid = SudokuGrid::parse("\
//!     034678912\
//!     672195348\
//!     198342567\
//!     859761423\
//!     426853791\
//!     713924856\
//!     961537284\
//!     287419635\
//!     345286179").unwrap();
//!
//! let report = Algorithm::AStar.search(&grid);
//!
//! assert_eq!(1, report.expanded());
//!
//! match report.outcome() {
//!     SearchOutcome::Solved(solution) => {
//!         assert!(solution.is_full());
//!         assert_eq!(Ok(Some(5)), solution.get_cell(0, 0));
//!     },
//!     _ => panic!("puzzle with one legal completion was not solved")
//! }
//! ```
//!
//! # Note regarding performance
//!
//! The uninformed strategies enumerate the space of consistent partial grids
//! exhaustively, so their frontier can grow very large on puzzles with many
//! blanks. The informed strategies are much better behaved, but no strategy
//! bounds its memory use. It is strongly recommended to use at least
//! `opt-level = 2`, even in tests that run searches.

pub mod error;
pub mod heuristic;
pub mod rules;
pub mod search;

use error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};

use serde::{Deserialize, Serialize};

use std::convert::TryFrom;
use std::fmt::{self, Display, Formatter};

/// The number of cells along one axis of the grid, i.e. the number of cells
/// in each row, column, and block.
pub const SIZE: usize = 9;

/// The number of cells along one axis of a single 3x3 block.
pub const BLOCK_SIZE: usize = 3;

const CELL_COUNT: usize = SIZE * SIZE;

pub(crate) fn index(column: usize, row: usize) -> usize {
    row * SIZE + column
}

/// A 9x9 Sudoku grid composed of 81 cells, organized into nine 3x3 blocks.
/// Each cell may or may not be occupied by a digit from 1 to 9.
///
/// Two grids are equal if and only if they agree on the content of every
/// cell. Hashing is consistent with this notion of equality, which is what
/// the search strategies rely on when deduplicating states in their frontier
/// and explored sets.
///
/// Grids are serialized as their code string (see [SudokuGrid::parse]), and
/// deserialization validates the code, so malformed grids cannot enter
/// through serde.
#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(into = "String")]
#[serde(try_from = "String")]
pub struct SudokuGrid {
    cells: Vec<Option<usize>>
}

fn to_char(cell: Option<usize>) -> char {
    if let Some(n) = cell {
        (b'0' + n as u8) as char
    }
    else {
        ' '
    }
}

fn line(start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let mut result = String::new();

    for x in 0..SIZE {
        if x == 0 {
            result.push(start);
        }
        else if x % BLOCK_SIZE == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row() -> String {
    line('╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line() -> String {
    line('╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line() -> String {
    line('╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row() -> String {
    line('╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line('║', '║', '│', |x| to_char(grid.cells[index(x, y)]), ' ', '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let thin_separator_line = thin_separator_line();
        let thick_separator_line = thick_separator_line();

        for y in 0..SIZE {
            if y == 0 {
                f.write_str(top_row().as_str())?;
            }
            else if y % BLOCK_SIZE == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row().as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty 9x9 Sudoku grid, i.e. one in which all 81 cells
    /// are blank.
    pub fn new() -> SudokuGrid {
        SudokuGrid {
            cells: vec![None; CELL_COUNT]
        }
    }

    /// Parses a code encoding a Sudoku grid. The code consists of exactly 81
    /// cell characters in left-to-right, top-to-bottom order, where each row
    /// is completed before the next one is started. A digit from `'1'` to
    /// `'9'` fills the cell with that digit, while `'0'` leaves it blank. Any
    /// ASCII whitespace is ignored to allow for more intuitive formatting,
    /// such as writing each row on its own line.
    ///
    /// As an example, the code `"12000000000...0"` (81 characters total) will
    /// parse to a grid whose first row starts with 1 and 2 and which is
    /// otherwise blank.
    ///
    /// # Errors
    ///
    /// * `SudokuParseError::InvalidCharacter` if the code contains a
    /// character that is neither a digit nor whitespace.
    /// * `SudokuParseError::WrongNumberOfCells` if the code does not contain
    /// exactly 81 cell characters.
    pub fn parse(code: &str) -> SudokuParseResult<SudokuGrid> {
        let mut cells = Vec::with_capacity(CELL_COUNT);

        for c in code.chars() {
            if c.is_ascii_whitespace() {
                continue;
            }

            match c.to_digit(10) {
                Some(0) => cells.push(None),
                Some(digit) => cells.push(Some(digit as usize)),
                None => return Err(SudokuParseError::InvalidCharacter)
            }
        }

        if cells.len() != CELL_COUNT {
            return Err(SudokuParseError::WrongNumberOfCells);
        }

        Ok(SudokuGrid {
            cells
        })
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse](#method.parse). That is, a grid that is converted
    /// to a string and parsed again will not change, as is illustrated below.
    ///
    /// ```
    /// use sudoku_search::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 5).unwrap();
    ///
    /// let grid_str = grid.to_parseable_string();
    /// let grid_parsed = SudokuGrid::parse(grid_str.as_str()).unwrap();
    /// assert_eq!(grid, grid_parsed);
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|cell| match cell {
                Some(n) => (b'0' + *n as u8) as char,
                None => '0'
            })
            .collect()
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        if column >= SIZE || row >= SIZE {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row)])
        }
    }

    /// Indicates whether the cell at the specified position has the given
    /// number. This will return `false` if there is a different number in
    /// that cell or it is blank.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the checked cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the checked cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to check whether it is in the specified cell.
    /// If it is *not* in the range `[1, 9]`, `false` will always be returned.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn has_number(&self, column: usize, row: usize, number: usize)
            -> SudokuResult<bool> {
        if let Some(content) = self.get_cell(column, row)? {
            Ok(number == content)
        }
        else {
            Ok(false)
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// number. If the cell was not blank, the old number will be overwritten.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    /// range `[0, 9[`.
    /// * `number`: The number to assign to the specified cell. Must be in the
    /// range `[1, 9]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    /// the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    /// range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > SIZE {
            return Err(SudokuError::InvalidNumber);
        }

        self.cells[index(column, row)] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a number, that number is removed. If the cell is already
    /// blank, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    /// the range `[0, 9[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    /// range `[0, 9[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        if column >= SIZE || row >= SIZE {
            return Err(SudokuError::OutOfBounds);
        }

        self.cells[index(column, row)] = None;
        Ok(())
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// number. Note that a full grid is not necessarily a valid solution, as
    /// it may contain duplicates; see [rules::is_solved](rules::is_solved).
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Gets a slice of the 81 cells of this grid. They are in left-to-right,
    /// top-to-bottom order, where rows are together.
    pub fn cells(&self) -> &[Option<usize>] {
        &self.cells
    }
}

impl Default for SudokuGrid {
    fn default() -> SudokuGrid {
        SudokuGrid::new()
    }
}

impl From<SudokuGrid> for String {
    fn from(grid: SudokuGrid) -> String {
        grid.to_parseable_string()
    }
}

impl TryFrom<String> for SudokuGrid {
    type Error = SudokuParseError;

    fn try_from(code: String) -> SudokuParseResult<SudokuGrid> {
        SudokuGrid::parse(code.as_str())
    }
}
