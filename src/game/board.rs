pub const DEFAULT_ROWS: usize = 6;
pub const DEFAULT_COLS: usize = 7;

/// Number of aligned pieces needed to win.
pub const CONNECT: usize = 4;

/// Anchor-relative scan directions: horizontal, vertical,
/// diagonal-down-right, diagonal-down-left.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("board must be at least {CONNECT}x{CONNECT}, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column is full")]
    ColumnFull,

    #[error("column out of range")]
    InvalidColumn,

    #[error("game is already over")]
    GameOver,
}

/// A Connect Four grid with dimensions fixed at construction.
///
/// Cells are stored row-major with row 0 at the top; a dropped piece
/// lands in the highest-indexed empty row of its column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimensions below 4x4 cannot produce a
    /// four-in-a-row and are rejected.
    pub fn new(rows: usize, cols: usize) -> Result<Self, BoardError> {
        if rows < CONNECT || cols < CONNECT {
            return Err(BoardError::InvalidDimensions { rows, cols });
        }
        Ok(Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position.
    /// Row 0 is the top, row `rows - 1` is the bottom.
    ///
    /// Panics when the coordinates are outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        assert!(
            row < self.rows && col < self.cols,
            "cell ({row}, {col}) out of bounds for {}x{} board",
            self.rows,
            self.cols
        );
        self.cells[row * self.cols + col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= self.cols {
            return true;
        }
        self.get(0, col) != Cell::Empty
    }

    /// Row where a piece dropped in `col` would land: the bottom-most
    /// empty cell, or `None` when the column is full. Row 0 is a valid
    /// landing row like any other.
    pub fn landing_row(&self, col: usize) -> Option<usize> {
        (0..self.rows).rev().find(|&row| self.get(row, col) == Cell::Empty)
    }

    /// Drop a piece in a column, returns the row where it landed.
    ///
    /// Placement always routes through [`landing_row`](Self::landing_row),
    /// so an occupied cell is never overwritten.
    pub fn drop_piece(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= self.cols {
            return Err(MoveError::InvalidColumn);
        }

        let row = self.landing_row(col).ok_or(MoveError::ColumnFull)?;
        self.cells[row * self.cols + col] = cell;
        Ok(row)
    }

    /// Reset every cell to empty for a new game.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|&c| c != Cell::Empty)
    }

    /// Check whether `cell` has four in a row anywhere on the board.
    ///
    /// Every cell anchors four candidate lines (horizontal, vertical,
    /// and both diagonals); a line wins only if all four of its
    /// coordinates are in bounds and hold `cell`. Full-board scan, not
    /// incremental.
    pub fn check_win(&self, cell: Cell) -> bool {
        if cell == Cell::Empty {
            return false;
        }

        for row in 0..self.rows {
            for col in 0..self.cols {
                for (dr, dc) in DIRECTIONS {
                    if self.line_wins(row, col, dr, dc, cell) {
                        return true;
                    }
                }
            }
        }
        false
    }

    /// Check the four-cell line anchored at (row, col) along (dr, dc).
    /// Coordinates running off the grid fail the line without ever
    /// touching the cell storage.
    fn line_wins(&self, row: usize, col: usize, dr: isize, dc: isize, cell: Cell) -> bool {
        (0..CONNECT as isize).all(|i| {
            let r = row as isize + dr * i;
            let c = col as isize + dc * i;
            r >= 0
                && r < self.rows as isize
                && c >= 0
                && c < self.cols as isize
                && self.get(r as usize, c as usize) == cell
        })
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            cells: vec![Cell::Empty; DEFAULT_ROWS * DEFAULT_COLS],
        }
    }
}
