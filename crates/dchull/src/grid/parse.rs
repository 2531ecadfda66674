use std::fmt;
use std::fs;
use std::path::Path;

use crate::hull2::Point;

/// Largest coordinate magnitude (and grid unit) accepted from input.
///
/// Framed coordinates then stay within `±2^62`, where `cross` is exact.
pub const COORD_LIMIT: i64 = 1 << 60;

/// True if both coordinates lie within `±COORD_LIMIT`.
#[inline]
pub fn in_range(p: Point) -> bool {
    (-COORD_LIMIT..=COORD_LIMIT).contains(&p.x) && (-COORD_LIMIT..=COORD_LIMIT).contains(&p.y)
}

/// Contents of a grid file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridInput {
    /// Lattice spacing `g` (> 0).
    pub unit: i64,
    /// Points in file order.
    pub points: Vec<Point>,
}

/// Errors surfaced while reading a grid file. Line numbers are 1-based.
#[derive(Debug)]
pub enum ParseError {
    Io(std::io::Error),
    /// The unit or count line is missing.
    MissingHeader { what: &'static str },
    /// A token is not an integer (or the count is negative).
    BadInteger { line: usize, token: String },
    /// A point line does not hold exactly two integers.
    BadArity { line: usize, found: usize },
    /// Fewer point lines than the count announced.
    Truncated { expected: usize, found: usize },
    NonPositiveUnit { unit: i64 },
    /// A coordinate or the unit exceeds `COORD_LIMIT` in magnitude.
    OutOfRange { line: usize, value: i64 },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Io(e) => write!(f, "reading grid file: {e}"),
            ParseError::MissingHeader { what } => {
                write!(f, "grid file is missing the {what} line")
            }
            ParseError::BadInteger { line, token } => {
                write!(f, "line {line}: expected an integer, found {token:?}")
            }
            ParseError::BadArity { line, found } => {
                write!(f, "line {line}: expected `x y`, found {found} value(s)")
            }
            ParseError::Truncated { expected, found } => {
                write!(f, "grid file announces {expected} points but holds {found}")
            }
            ParseError::NonPositiveUnit { unit } => {
                write!(f, "grid unit must be positive, got {unit}")
            }
            ParseError::OutOfRange { line, value } => {
                write!(f, "line {line}: {value} is outside ±{COORD_LIMIT}")
            }
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ParseError::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ParseError {
    fn from(e: std::io::Error) -> Self {
        ParseError::Io(e)
    }
}

fn int<T: std::str::FromStr>(token: &str, line: usize) -> Result<T, ParseError> {
    token.parse().map_err(|_| ParseError::BadInteger {
        line,
        token: token.to_string(),
    })
}

/// Parse the grid text format.
///
/// ```text
/// 10        grid unit g
/// 3         number of points n
/// 0 0       n lines of `x y`
/// 10 0
/// 10 10
/// ```
///
/// Lines after the announced points are ignored.
pub fn parse_grid(text: &str) -> Result<GridInput, ParseError> {
    let mut lines = text.lines().enumerate().map(|(i, l)| (i + 1, l.trim()));

    let (ln, unit_line) = lines
        .next()
        .ok_or(ParseError::MissingHeader { what: "grid unit" })?;
    let unit: i64 = int(unit_line, ln)?;
    if unit <= 0 {
        return Err(ParseError::NonPositiveUnit { unit });
    }
    if unit > COORD_LIMIT {
        return Err(ParseError::OutOfRange {
            line: ln,
            value: unit,
        });
    }
    let (ln, count_line) = lines
        .next()
        .ok_or(ParseError::MissingHeader { what: "point count" })?;
    let count: usize = int(count_line, ln)?;

    let mut points = Vec::with_capacity(count);
    for (ln, line) in lines.take(count) {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.len() != 2 {
            return Err(ParseError::BadArity {
                line: ln,
                found: tokens.len(),
            });
        }
        let p = Point::new(int(tokens[0], ln)?, int(tokens[1], ln)?);
        if !in_range(p) {
            let value = if (-COORD_LIMIT..=COORD_LIMIT).contains(&p.x) {
                p.y
            } else {
                p.x
            };
            return Err(ParseError::OutOfRange { line: ln, value });
        }
        points.push(p);
    }
    if points.len() < count {
        return Err(ParseError::Truncated {
            expected: count,
            found: points.len(),
        });
    }
    Ok(GridInput { unit, points })
}

/// Read and parse a grid file.
pub fn read_grid<P: AsRef<Path>>(path: P) -> Result<GridInput, ParseError> {
    let text = fs::read_to_string(path)?;
    parse_grid(&text)
}
