//! The board grid: a fixed 10×10 array of composite cells.
//!
//! The grid is the sole mutator of cell state and ownership. Every cell
//! couples its state with the id of the ship occupying it, so the invariant
//! "owned iff a ship stands or stood here" holds by construction instead of
//! by keeping two matrices in lockstep.

use core::fmt;

use crate::common::GridError;
use crate::config::BOARD_SIZE;

/// State of a single cell. Transitions are one-way: `Free → ShipPlaced` on
/// placement, `Free → SpaceAttacked` and `ShipPlaced → ShipAttacked` on
/// attack. Nothing ever returns a cell to `Free`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum CellState {
    Free,
    ShipPlaced,
    SpaceAttacked,
    ShipAttacked,
}

/// One cell: state plus owning ship id. `owner == 0` means no ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub state: CellState,
    pub owner: u32,
}

impl Cell {
    const FREE: Cell = Cell {
        state: CellState::Free,
        owner: 0,
    };

    /// Whether a ship occupies the cell, attacked or not.
    pub fn is_occupied(&self) -> bool {
        self.owner != 0
    }

    fn glyph(&self) -> char {
        match self.state {
            CellState::Free => '·',
            CellState::ShipPlaced => '■',
            CellState::SpaceAttacked => '○',
            CellState::ShipAttacked => '✕',
        }
    }
}

/// A fixed `BOARD_SIZE`×`BOARD_SIZE` grid of cells.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Grid {
    /// Create an empty grid (all cells free and unowned).
    pub fn new() -> Self {
        Grid {
            cells: [[Cell::FREE; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Cell at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Result<Cell, GridError> {
        self.check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    /// Whether a ship occupies (row, col).
    pub fn is_occupied(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.get(row, col)?.is_occupied())
    }

    /// Claim `cells` for the ship `owner`. All-or-nothing: every cell must be
    /// in bounds and free before any cell is mutated. Callers are expected to
    /// have validated the placement already; this re-check guards the
    /// ownership invariant against unvalidated use.
    pub fn set_ship(&mut self, cells: &[(usize, usize)], owner: u32) -> Result<(), GridError> {
        if owner == 0 {
            return Err(GridError::InvalidOwner);
        }
        for &(row, col) in cells {
            self.check_bounds(row, col)?;
            if self.cells[row][col].state != CellState::Free {
                return Err(GridError::Occupied { row, col });
            }
        }
        for &(row, col) in cells {
            self.cells[row][col] = Cell {
                state: CellState::ShipPlaced,
                owner,
            };
        }
        Ok(())
    }

    /// Attack (row, col) and return the cell's *previous* state. Free cells
    /// become `SpaceAttacked`, occupied cells `ShipAttacked`; already
    /// attacked cells keep their terminal state, making repeated attacks
    /// idempotent.
    pub fn attack(&mut self, row: usize, col: usize) -> Result<CellState, GridError> {
        self.check_bounds(row, col)?;
        let cell = &mut self.cells[row][col];
        let previous = cell.state;
        match previous {
            CellState::Free => cell.state = CellState::SpaceAttacked,
            CellState::ShipPlaced => cell.state = CellState::ShipAttacked,
            CellState::SpaceAttacked | CellState::ShipAttacked => {}
        }
        Ok(previous)
    }

    #[inline]
    fn check_bounds(&self, row: usize, col: usize) -> Result<(), GridError> {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            Err(GridError::OutOfBounds { row, col })
        } else {
            Ok(())
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid<{}>:", BOARD_SIZE)?;
        for row in &self.cells {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            if r + 1 < BOARD_SIZE {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
