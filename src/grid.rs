//! Storage of the pieces on the board, column drops and win/tie evaluation

use std::fmt;

use crate::{HEIGHT, RUN_LENGTH, WIDTH};

/// One of the two players
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Player {
    One,
    Two,
}

impl Player {
    /// The numeric identifier of the player, 1 or 2
    pub fn id(self) -> u8 {
        match self {
            Player::One => 1,
            Player::Two => 2,
        }
    }

    pub fn other(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Cell {
    Empty,
    Taken(Player),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }
}

// (dy, dx) steps of the four run directions, each starting from its top-left-most cell
const DIRECTIONS: [(i32, i32); 4] = [
    // horizontal
    (0, 1),
    // vertical
    (1, 0),
    // diagonal down-right
    (1, 1),
    // diagonal down-left
    (1, -1),
];

/// A fixed size board of cells
///
/// Row 0 is the top of the board and row `height - 1` the bottom, so pieces
/// fall towards higher row indices. The dimensions are fixed when the grid is
/// created.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
}

impl Grid {
    /// An empty grid of the default `HEIGHT` x `WIDTH`
    pub fn new() -> Self {
        Self::with_dimensions(HEIGHT, WIDTH)
    }

    /// An empty grid of `height` rows and `width` columns
    ///
    /// # Panics
    /// If either dimension is zero.
    pub fn with_dimensions(height: usize, width: usize) -> Self {
        assert!(height > 0 && width > 0, "grid dimensions must be non-zero");
        Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        }
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// The cell at (`row`, `column`), or `None` if it is outside the grid
    pub fn get(&self, row: usize, column: usize) -> Option<Cell> {
        if row < self.height && column < self.width {
            Some(self.cells[row * self.width + column])
        } else {
            None
        }
    }

    /// The row a piece dropped into `column` would land in
    ///
    /// Returns `None` when the column is full, which is a normal outcome
    /// rather than an error. A column outside the grid can't take a piece
    /// either, so it also gives `None`.
    pub fn find_landing_row(&self, column: usize) -> Option<usize> {
        if column >= self.width {
            return None;
        }
        (0..self.height)
            .rev()
            .find(|&row| self.cells[row * self.width + column].is_empty())
    }

    /// Put a piece of `player` at (`row`, `column`)
    ///
    /// The coordinates must come from [`Grid::find_landing_row`]; the cell is
    /// expected to be empty.
    pub fn place(&mut self, row: usize, column: usize, player: Player) {
        let idx = row * self.width + column;
        debug_assert!(self.cells[idx].is_empty(), "cell ({}, {}) is taken", row, column);
        self.cells[idx] = Cell::Taken(player);
    }

    /// Does `player` have four in a row anywhere on the board?
    ///
    /// Every cell is tried as the start of a run in each of the four
    /// directions. Runs that leave the board don't count.
    pub fn check_win(&self, player: Player) -> bool {
        let target = Cell::Taken(player);
        (0..self.height as i32).any(|y| {
            (0..self.width as i32).any(|x| {
                DIRECTIONS
                    .iter()
                    .any(|&(dy, dx)| self.run_matches(y, x, dy, dx, target))
            })
        })
    }

    /// Is every cell taken?
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Has no piece been placed yet?
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(Cell::is_empty)
    }

    fn run_matches(&self, y: i32, x: i32, dy: i32, dx: i32, target: Cell) -> bool {
        (0..RUN_LENGTH as i32).all(|step| {
            let (row, column) = (y + dy * step, x + dx * step);
            row >= 0
                && column >= 0
                && self.get(row as usize, column as usize) == Some(target)
        })
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            let line: String = row
                .iter()
                .map(|cell| match cell {
                    Cell::Empty => '.',
                    Cell::Taken(Player::One) => '1',
                    Cell::Taken(Player::Two) => '2',
                })
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
