//! One side's board: grid, fleet inventory and the placed-ship ledger.

use alloc::vec::Vec;
use core::fmt;

use crate::ability::{scan_radius, Ability};
use crate::common::{
    ActionResult, AttackError, CellChange, PlacementError, Reveal, ShotOutcome, TurnFlow,
};
use crate::config::BOARD_SIZE;
use crate::grid::{CellState, Grid};
use crate::inventory::FleetInventory;
use crate::placement::validate_placement;
use crate::ship::{Orientation, Ship, Tier};

/// A board owned by exactly one side. Placements go through the fleet
/// inventory; attack resolution is applied to the board being attacked.
pub struct Board {
    grid: Grid,
    fleet: FleetInventory,
    ships: Vec<Ship>,
    next_ship_id: u32,
}

impl Board {
    /// Empty board with the interactive-side fleet.
    pub fn new() -> Self {
        Self::with_fleet(FleetInventory::standard())
    }

    /// Empty board with an explicit fleet inventory.
    pub fn with_fleet(fleet: FleetInventory) -> Self {
        Board {
            grid: Grid::new(),
            fleet,
            ships: Vec::new(),
            next_ship_id: 1,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Ships placed so far, in placement order.
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Placements left for `tier`.
    pub fn remaining(&self, tier: Tier) -> u8 {
        self.fleet.remaining(tier)
    }

    /// True when the whole fleet has been placed.
    pub fn inventory_exhausted(&self) -> bool {
        self.fleet.is_exhausted()
    }

    /// Validate and commit a ship placement. Inventory consumption and grid
    /// mutation land together or not at all.
    pub fn place_ship(
        &mut self,
        tier: Tier,
        orientation: Orientation,
        origin: (usize, usize),
    ) -> Result<Ship, PlacementError> {
        let cells = validate_placement(&self.grid, &self.fleet, tier, orientation, origin)?;
        if !self.fleet.consume(tier) {
            return Err(PlacementError::TierExhausted(tier));
        }
        if let Err(err) = self.grid.set_ship(&cells, self.next_ship_id) {
            self.fleet.refund(tier);
            return Err(err.into());
        }
        Ok(self.record_ship(tier, orientation, origin))
    }

    /// Commit a generator placement that was checked against the grid only.
    /// The matching tier count is decremented when one remains, but never
    /// gates the placement.
    pub(crate) fn commit_generated(
        &mut self,
        tier: Tier,
        orientation: Orientation,
        origin: (usize, usize),
        cells: &[(usize, usize)],
    ) -> Result<Ship, PlacementError> {
        self.grid.set_ship(cells, self.next_ship_id)?;
        self.fleet.consume(tier);
        Ok(self.record_ship(tier, orientation, origin))
    }

    fn record_ship(&mut self, tier: Tier, orientation: Orientation, origin: (usize, usize)) -> Ship {
        let ship = Ship::new(self.next_ship_id, tier, orientation, origin.0, origin.1);
        self.next_ship_id += 1;
        self.ships.push(ship);
        ship
    }

    /// Apply an ability to this board and report the outcome. Bombs and line
    /// assaults mutate cell state; scans only read it. Out-of-bounds targets
    /// are rejected before any mutation.
    pub fn resolve(&mut self, ability: Ability) -> Result<ActionResult, AttackError> {
        match ability {
            Ability::Bomb { row, col } => {
                let (outcome, change) = self.bomb_cell(row, col)?;
                Ok(ActionResult::Bomb {
                    outcome,
                    turn: TurnFlow::from(outcome),
                    changed: change.into_iter().collect(),
                })
            }
            Ability::LineAssault { row, col } => {
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    return Err(AttackError::OutOfBounds { row, col });
                }
                let mut outcomes = Vec::with_capacity(BOARD_SIZE);
                let mut changed = Vec::new();
                for col in 0..BOARD_SIZE {
                    let (outcome, change) = self.bomb_cell(row, col)?;
                    outcomes.push(outcome);
                    changed.extend(change);
                }
                // The sweep never stops early; the turn follows the last cell,
                // matching single-bomb chaining applied once for the row.
                let turn = outcomes
                    .last()
                    .map(|&outcome| TurnFlow::from(outcome))
                    .unwrap_or(TurnFlow::Unchanged);
                Ok(ActionResult::LineAssault {
                    outcomes,
                    turn,
                    changed,
                })
            }
            Ability::Scan {
                row,
                col,
                difficulty,
            } => {
                if row >= BOARD_SIZE || col >= BOARD_SIZE {
                    return Err(AttackError::OutOfBounds { row, col });
                }
                let radius = scan_radius(difficulty);
                let row_start = row.saturating_sub(radius);
                let row_end = (row + radius).min(BOARD_SIZE - 1);
                let col_start = col.saturating_sub(radius);
                let col_end = (col + radius).min(BOARD_SIZE - 1);
                let mut revealed = Vec::new();
                for r in row_start..=row_end {
                    for c in col_start..=col_end {
                        let occupied = self.grid.is_occupied(r, c)?;
                        revealed.push(Reveal {
                            row: r,
                            col: c,
                            occupied,
                        });
                    }
                }
                Ok(ActionResult::Scan { revealed })
            }
        }
    }

    fn bomb_cell(
        &mut self,
        row: usize,
        col: usize,
    ) -> Result<(ShotOutcome, Option<CellChange>), AttackError> {
        let previous = self.grid.attack(row, col)?;
        let (outcome, new_state) = match previous {
            CellState::ShipPlaced => (ShotOutcome::Hit, Some(CellState::ShipAttacked)),
            CellState::Free => (ShotOutcome::Miss, Some(CellState::SpaceAttacked)),
            CellState::SpaceAttacked | CellState::ShipAttacked => (ShotOutcome::Repeat, None),
        };
        let change = new_state.map(|state| CellChange { row, col, state });
        Ok((outcome, change))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{ ships: {}, next_id: {} }}",
            self.ships.len(),
            self.next_ship_id
        )?;
        write!(f, "{:?}", self.grid)
    }
}
