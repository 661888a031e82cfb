//! Ship placement validation.
//!
//! Pure decision functions: nothing here mutates the grid or the inventory.
//! `Board::place_ship` commits a validated placement as one transaction.

use alloc::vec::Vec;

use crate::common::PlacementError;
use crate::config::BOARD_SIZE;
use crate::grid::{CellState, Grid};
use crate::inventory::FleetInventory;
use crate::ship::{Orientation, Tier};

/// Cells a ship of `length` would occupy from `origin`, origin first.
fn footprint(length: usize, orientation: Orientation, origin: (usize, usize)) -> Vec<(usize, usize)> {
    let (row, col) = origin;
    (0..length)
        .map(|i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
        .collect()
}

/// Check a candidate against bounds and collisions only, returning the
/// ordered occupied cells. This is the generator's validity test; it ignores
/// the fleet inventory. Both orientations scan the full ship length.
pub fn fit_on_grid(
    grid: &Grid,
    length: usize,
    orientation: Orientation,
    origin: (usize, usize),
) -> Result<Vec<(usize, usize)>, PlacementError> {
    let (row, col) = origin;
    // reject a wild origin before walking the footprint
    if row >= BOARD_SIZE || col >= BOARD_SIZE {
        return Err(PlacementError::OutOfBounds { row, col });
    }
    let cells = footprint(length, orientation, origin);
    for &(row, col) in &cells {
        if row >= BOARD_SIZE || col >= BOARD_SIZE {
            return Err(PlacementError::OutOfBounds { row, col });
        }
    }
    for &(row, col) in &cells {
        let cell = grid.get(row, col).map_err(PlacementError::from)?;
        if cell.state != CellState::Free {
            return Err(PlacementError::Collision { row, col });
        }
    }
    Ok(cells)
}

/// Full placement check for an interactive candidate, in order: fleet
/// inventory, bounds, collision. Returns the ordered occupied cells on
/// success.
pub fn validate_placement(
    grid: &Grid,
    fleet: &FleetInventory,
    tier: Tier,
    orientation: Orientation,
    origin: (usize, usize),
) -> Result<Vec<(usize, usize)>, PlacementError> {
    if fleet.remaining(tier) == 0 {
        return Err(PlacementError::TierExhausted(tier));
    }
    fit_on_grid(grid, tier.length(), orientation, origin)
}
