//! A small command line driver around the library: it parses an algorithm
//! code and a grid from the arguments, runs the search, and prints the
//! expansion count, the elapsed wall-clock time, and the result.
//!
//! Usage: `sudoku-search <B|I|U|G|A> <row> ... <row>` where each of the nine
//! rows is a string of nine digits, `0` denoting a blank cell.

use sudoku_search::SudokuGrid;
use sudoku_search::search::{Algorithm, SearchOutcome};

use std::env;
use std::process;
use std::time::Instant;

const USAGE: &str = "usage: sudoku-search <B|I|U|G|A> <row1> ... <row9>";

fn parse_args(args: &[String]) -> Result<(Algorithm, SudokuGrid), String> {
    if args.len() != 10 {
        return Err(String::from(USAGE));
    }

    let algorithm = args[0].parse::<Algorithm>()
        .map_err(|e| format!("{}: {}", args[0], e))?;
    let code = args[1..].concat();
    let grid = SudokuGrid::parse(code.as_str())
        .map_err(|e| format!("invalid grid: {}", e))?;

    Ok((algorithm, grid))
}

fn main() {
    let args: Vec<String> = env::args().skip(1).collect();
    let (algorithm, grid) = match parse_args(&args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    let start = Instant::now();
    let report = algorithm.search(&grid);
    let elapsed = start.elapsed();

    println!("expanded {} nodes in {} ms", report.expanded(),
        elapsed.as_millis());

    match report.into_outcome() {
        SearchOutcome::Solved(solution) => println!("{}", solution),
        SearchOutcome::Failure => println!("no solution exists"),
        SearchOutcome::Cutoff => println!("cut off at the depth limit")
    }
}
