use crate::core::board::Board;
use crate::core::models::{Cell, Vec2};
use std::fmt;
use std::fs;
use std::io;
use std::path::Path;

/// Error type for level loading. A load failure is fatal to the session:
/// there is no usable partial board.
#[derive(Debug)]
pub enum LevelError {
    /// IO error when reading the level file
    Io(io::Error),
    /// Level content that does not describe a valid board
    InvalidLevel(String),
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LevelError::Io(err) => write!(f, "IO error: {}", err),
            LevelError::InvalidLevel(msg) => write!(f, "Invalid level: {}", msg),
        }
    }
}

impl std::error::Error for LevelError {}

impl From<io::Error> for LevelError {
    fn from(err: io::Error) -> Self {
        LevelError::Io(err)
    }
}

/// Parse a level string into a board of exactly `rows` x `cols` cells.
/// One line per row, consumed verbatim (a blank row is a row of empty
/// cells), trailing line separator discarded; short rows and missing rows
/// are padded with empty cells. The alphabet is the plain-text format:
/// `#` wall, space empty, `$` box, `.` target, `@` avatar,
/// `+` avatar-on-target, `*` box-on-target.
pub fn parse_sized(text: &str, rows: usize, cols: usize) -> Result<Board, LevelError> {
    let lines: Vec<&str> = text.lines().collect();
    parse_lines(&lines, rows, cols)
}

fn parse_lines(lines: &[&str], rows: usize, cols: usize) -> Result<Board, LevelError> {
    let mut grid: Vec<Vec<Cell>> = Vec::with_capacity(rows);
    let mut avatar: Option<Vec2> = None;

    if lines.len() > rows {
        return Err(LevelError::InvalidLevel(format!(
            "{} rows in level, board has {}",
            lines.len(),
            rows
        )));
    }

    for (i, line) in lines.iter().enumerate() {
        let mut row = Vec::with_capacity(cols);
        for (j, ch) in line.chars().enumerate() {
            if j >= cols {
                return Err(LevelError::InvalidLevel(format!(
                    "row {} wider than {} columns",
                    i, cols
                )));
            }
            let cell = Cell::from_char(ch).ok_or_else(|| {
                LevelError::InvalidLevel(format!("unknown character {:?} at row {}", ch, i))
            })?;
            if cell.is_avatar() {
                let pos = Vec2 {
                    i: i as i32,
                    j: j as i32,
                };
                if avatar.replace(pos).is_some() {
                    return Err(LevelError::InvalidLevel(
                        "more than one avatar".to_string(),
                    ));
                }
            }
            row.push(cell);
        }
        row.resize(cols, Cell::Empty);
        grid.push(row);
    }
    grid.resize(rows, vec![Cell::Empty; cols]);

    let avatar = avatar.ok_or_else(|| LevelError::InvalidLevel("no avatar".to_string()))?;
    Ok(Board::from_parts(grid, avatar))
}

/// Parse a level string taking its dimensions from the text itself
/// (row count and widest row). Fixture entry point: raw-string fixtures
/// start and end with a blank line, so blank edge lines are stripped
/// here and only here.
pub fn parse(text: &str) -> Result<Board, LevelError> {
    let lines = trimmed_lines(text);
    let rows = lines.len().max(1);
    let cols = lines.iter().map(|l| l.chars().count()).max().unwrap_or(1);
    parse_lines(&lines, rows, cols.max(1))
}

/// Read a board from a file in the plain-text load format.
pub fn load(path: &Path, rows: usize, cols: usize) -> Result<Board, LevelError> {
    let contents = fs::read_to_string(path)?;
    parse_sized(&contents, rows, cols)
}

/// Write the board to `path` in the load format, from current state.
pub fn save(board: &Board, path: &Path) -> io::Result<()> {
    fs::write(path, board.serialize())
}

// Strip blank edge lines but keep blank interior rows.
fn trimmed_lines(text: &str) -> Vec<&str> {
    let lines: Vec<&str> = text.lines().collect();
    let start = lines
        .iter()
        .position(|l| !l.trim().is_empty())
        .unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map_or(0, |e| e + 1);
    lines[start..end].to_vec()
}
