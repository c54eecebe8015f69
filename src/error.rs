//! This module contains some error and result definitions used in this crate.

use std::fmt::{self, Display, Formatter};

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not exclude errors that occur when
/// parsing grids, see [SudokuParseError](enum.SudokuParseError.html) for that.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the 9x9 grid. This is the case if they are greater than or equal to 9.
    OutOfBounds,

    /// Indicates that some number is invalid for a cell. This is the case if
    /// it is less than 1 or greater than 9.
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a
/// [SudokuGrid](../struct.SudokuGrid.html) from its code.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code does not contain exactly 81 cell characters
    /// once whitespace has been removed.
    WrongNumberOfCells,

    /// Indicates that the code contains a character that is neither a digit
    /// nor whitespace.
    InvalidCharacter
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;

impl Display for SudokuParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            SudokuParseError::WrongNumberOfCells =>
                write!(f, "wrong number of cells"),
            SudokuParseError::InvalidCharacter =>
                write!(f, "invalid character")
        }
    }
}

/// An enumeration of the errors that may occur when parsing an
/// [Algorithm](../search/enum.Algorithm.html) selector.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum AlgorithmParseError {

    /// Indicates that the given string matches none of the known algorithm
    /// codes.
    UnknownAlgorithm
}

impl Display for AlgorithmParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmParseError::UnknownAlgorithm =>
                write!(f, "unknown algorithm")
        }
    }
}
