//! The pond: a rectangular grid of cell markers.
//!
//! A [`Pond`] is parsed from the body of a puzzle file, one row per line,
//! with cells given either as whitespace-separated single-character tokens
//! or as a compact run of characters. The pond is read-only input to the
//! graph builder; nothing mutates it after parsing.

use std::fmt;

use crate::geom::{Point, Range};

/// A single grid cell marker.
///
/// `'.'` marks open ice and `'*'` marks a stone by convention; any other
/// character is carried through verbatim and interpreted by the builder's
/// configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Marker(pub char);

impl Marker {
    /// Open ice: `.`
    pub const OPEN: Self = Self('.');
    /// A stone blocking movement: `*`
    pub const STONE: Self = Self('*');

    /// The underlying character.
    pub const fn value(self) -> char {
        self.0
    }
}

impl Default for Marker {
    fn default() -> Self {
        Self::OPEN
    }
}

impl From<char> for Marker {
    fn from(ch: char) -> Self {
        Self(ch)
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A rectangular grid of [`Marker`] cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pond {
    cells: Vec<Marker>,
    bounds: Range,
}

impl Pond {
    /// Create a new pond filled with [`Marker::OPEN`].
    pub fn new(width: i32, height: i32) -> Self {
        let bounds = Range::new(0, 0, width.max(0), height.max(0));
        Self {
            cells: vec![Marker::OPEN; bounds.len()],
            bounds,
        }
    }

    /// Parse a pond from an ASCII block, one row per line.
    ///
    /// Each line is either whitespace-separated single-character tokens
    /// (`. . * .`) or a compact run of characters (`..*.`). Blank lines are
    /// skipped. All rows must have the same width, since the sliding scan
    /// assumes a rectangular grid.
    pub fn parse(s: &str) -> Result<Self, PondError> {
        let mut cells = Vec::new();
        let mut width: Option<usize> = None;
        let mut rows = 0usize;

        for line in s.lines() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let start = cells.len();
            let tokens: Vec<&str> = line.split_whitespace().collect();
            if tokens.len() == 1 && tokens[0].chars().count() > 1 {
                // Compact form: one character per cell.
                cells.extend(tokens[0].chars().map(Marker));
            } else {
                for token in tokens {
                    let mut chars = token.chars();
                    match (chars.next(), chars.next()) {
                        (Some(ch), None) => cells.push(Marker(ch)),
                        _ => {
                            return Err(PondError::BadMarker {
                                row: rows,
                                token: token.to_string(),
                            });
                        }
                    }
                }
            }
            let found = cells.len() - start;
            match width {
                None => width = Some(found),
                Some(expected) if expected != found => {
                    return Err(PondError::RaggedRow {
                        row: rows,
                        expected,
                        found,
                    });
                }
                Some(_) => {}
            }
            rows += 1;
        }

        let Some(width) = width else {
            return Err(PondError::Empty);
        };
        Ok(Self {
            cells,
            bounds: Range::new(0, 0, width as i32, rows as i32),
        })
    }

    /// The bounding range of the pond.
    pub fn bounds(&self) -> Range {
        self.bounds
    }

    /// Width of the pond in cells.
    pub fn width(&self) -> i32 {
        self.bounds.width()
    }

    /// Height of the pond in cells.
    pub fn height(&self) -> i32 {
        self.bounds.height()
    }

    /// Whether the pond contains the given point.
    pub fn contains(&self, p: Point) -> bool {
        self.bounds.contains(p)
    }

    /// The marker at a point, or `None` if out of bounds.
    pub fn at(&self, p: Point) -> Option<Marker> {
        self.idx(p).map(|i| self.cells[i])
    }

    /// Set the marker at a point. Out-of-bounds writes are ignored.
    pub fn set(&mut self, p: Point, m: Marker) {
        if let Some(i) = self.idx(p) {
            self.cells[i] = m;
        }
    }

    fn idx(&self, p: Point) -> Option<usize> {
        if !self.bounds.contains(p) {
            return None;
        }
        Some((p.y * self.bounds.width() + p.x) as usize)
    }
}

impl fmt::Display for Pond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height() {
            if y > 0 {
                writeln!(f)?;
            }
            for x in 0..self.width() {
                if let Some(m) = self.at(Point::new(x, y)) {
                    write!(f, "{m}")?;
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors that can occur when parsing a pond.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PondError {
    /// The input contained no rows.
    Empty,
    /// A row's width differs from the first row's.
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// A cell token was not a single character.
    BadMarker { row: usize, token: String },
}

impl fmt::Display for PondError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PondError::Empty => write!(f, "pond input has no rows"),
            PondError::RaggedRow {
                row,
                expected,
                found,
            } => write!(
                f,
                "row {row} has {found} cells, expected {expected} (pond must be rectangular)"
            ),
            PondError::BadMarker { row, token } => {
                write!(f, "row {row}: cell token {token:?} is not a single character")
            }
        }
    }
}

impl std::error::Error for PondError {}
