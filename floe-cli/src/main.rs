//! floe — frozen-pond escape solver.
//!
//! Reads a puzzle file whose first line is a whitespace-separated header
//! (third token = zero-based escape row) followed by one pond row per line,
//! and prints how many sliding moves each cell needs to reach the escape
//! point, grouped by distance.

use std::env;
use std::fmt;
use std::fs;
use std::process::ExitCode;

use floe_core::{Point, Pond};
use floe_paths::{DistanceMap, GraphBuilder, escape_point, shortest_path_map};

/// Errors in the puzzle file header line.
#[derive(Debug, Clone, PartialEq, Eq)]
enum HeaderError {
    /// The header line is missing or has fewer than three tokens.
    MissingEscapeRow,
    /// The escape-row token is not an integer.
    BadEscapeRow(String),
}

impl fmt::Display for HeaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeaderError::MissingEscapeRow => {
                write!(f, "header line is missing the escape-row token")
            }
            HeaderError::BadEscapeRow(token) => {
                write!(f, "escape-row token {token:?} is not an integer")
            }
        }
    }
}

impl std::error::Error for HeaderError {}

/// Extract the zero-based escape row: the third whitespace-separated token.
fn parse_header(line: &str) -> Result<i32, HeaderError> {
    let token = line
        .split_whitespace()
        .nth(2)
        .ok_or(HeaderError::MissingEscapeRow)?;
    token
        .parse()
        .map_err(|_| HeaderError::BadEscapeRow(token.to_string()))
}

/// Render the distance map: ascending distances first, the no-path bucket
/// (key 0) last.
fn report(map: &DistanceMap) -> String {
    let mut out = String::new();
    for (dist, cells) in map {
        if *dist == 0 {
            continue;
        }
        out.push_str(&format!("{dist} : {}\n", join(cells)));
    }
    if let Some(cells) = map.get(&0) {
        out.push_str(&format!("No path : {}\n", join(cells)));
    }
    out
}

fn join(cells: &[Point]) -> String {
    let parts: Vec<String> = cells.iter().map(Point::to_string).collect();
    parts.join(" ")
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let (header, body) = text.split_once('\n').unwrap_or((text.as_str(), ""));
    let escape_row = parse_header(header)?;
    let pond = Pond::parse(body)?;
    let graph = GraphBuilder::new().build(&pond, escape_row)?;
    let map = shortest_path_map(&graph, escape_point(&pond, escape_row));
    print!("{}", report(&map));
    Ok(())
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: floe <file>");
        return ExitCode::from(1);
    }
    match run(&args[1]) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("floe: {err}");
            ExitCode::from(1)
        }
    }
}
