//! The 3x3 board and the lines a win is checked along.

use crate::types::{CELLS, DIMENSION, Occupant, Player};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A row, column or diagonal of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Line {
    /// Row `y`, varying `x`.
    Row(usize),
    /// Column `x`, varying `y`.
    Column(usize),
    /// Main diagonal from `(0, 0)` to the bottom-right corner.
    Diagonal,
    /// Anti-diagonal from the top-right corner to the bottom-left corner.
    AntiDiagonal,
}

impl Line {
    /// Lines inspected after a move at `(x, y)`.
    ///
    /// Both diagonals are always included, whether or not the cell lies on them.
    pub fn through(x: usize, y: usize) -> [Line; 4] {
        [Line::Row(y), Line::Column(x), Line::Diagonal, Line::AntiDiagonal]
    }

    /// Every row, column and diagonal of the board.
    pub fn all() -> impl Iterator<Item = Line> {
        (0..DIMENSION)
            .map(Line::Row)
            .chain((0..DIMENSION).map(Line::Column))
            .chain([Line::Diagonal, Line::AntiDiagonal])
    }

    /// Coordinates `(x, y)` of the cells on this line.
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        (0..DIMENSION).map(move |i| match self {
            Line::Row(y) => (i, y),
            Line::Column(x) => (x, i),
            Line::Diagonal => (i, i),
            Line::AntiDiagonal => (DIMENSION - (i + 1), i),
        })
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order, indexed `x + DIMENSION * y`.
    cells: [Occupant; CELLS],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Occupant::Empty; CELLS],
        }
    }

    /// Gets the occupant at `(x, y)`, or `None` off the board.
    pub fn get(&self, x: usize, y: usize) -> Option<Occupant> {
        if x >= DIMENSION || y >= DIMENSION {
            return None;
        }
        self.cells.get(index(x, y)).copied()
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Occupant; CELLS] {
        &self.cells
    }

    /// Counts the cells holding `occupant`.
    pub fn count(&self, occupant: Occupant) -> usize {
        self.cells.iter().filter(|&&c| c == occupant).count()
    }

    /// Checks if every cell is marked.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Checks if every cell on `line` carries `player`'s mark.
    pub fn is_owned_by(&self, line: Line, player: Player) -> bool {
        let mark = player.mark();
        line.cells().all(|(x, y)| self.get(x, y) == Some(mark))
    }

    /// Checks if `player` owns any complete line.
    pub fn has_line(&self, player: Player) -> bool {
        Line::all().any(|line| self.is_owned_by(line, player))
    }

    /// Writes `mark` at `(x, y)`. Callers have already checked bounds and emptiness.
    pub(crate) fn place(&mut self, x: usize, y: usize, mark: Occupant) {
        self.cells[index(x, y)] = mark;
    }

    /// Direct cell access. Panics off the board.
    pub(crate) fn at(&self, x: usize, y: usize) -> Occupant {
        self.cells[index(x, y)]
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, occupant) in self.cells.iter().enumerate() {
            write!(f, " {} ", occupant)?;
            if (i + 1) % DIMENSION != 0 {
                f.write_str("|")?;
                continue;
            }

            f.write_str("\n")?;
            if i != CELLS - 1 {
                writeln!(f, "{}", "---".repeat(DIMENSION))?;
            }
        }
        Ok(())
    }
}

fn index(x: usize, y: usize) -> usize {
    x + DIMENSION * y
}
