//! Shared outcome and error types for board operations.

use alloc::vec::Vec;

use crate::ability::AbilityKind;
use crate::grid::CellState;
use crate::ship::Tier;

/// Classification of a single bombed cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ShotOutcome {
    /// Shot struck a ship cell.
    Hit,
    /// Shot struck open water.
    Miss,
    /// Cell was attacked before; terminal state re-applied unchanged.
    Repeat,
}

/// What the acting side's turn does after an action resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnFlow {
    /// Actor keeps the turn and may act again.
    Retain,
    /// Turn passes to the other side.
    Pass,
    /// Turn state is left as it was.
    Unchanged,
}

impl From<ShotOutcome> for TurnFlow {
    fn from(outcome: ShotOutcome) -> Self {
        match outcome {
            ShotOutcome::Hit => TurnFlow::Retain,
            ShotOutcome::Miss => TurnFlow::Pass,
            ShotOutcome::Repeat => TurnFlow::Unchanged,
        }
    }
}

/// A cell whose state changed during an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct CellChange {
    pub row: usize,
    pub col: usize,
    /// State the cell holds after the action.
    pub state: CellState,
}

/// One revealed cell of a scan window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Reveal {
    pub row: usize,
    pub col: usize,
    /// Whether a ship occupies the cell. Tier and identity stay hidden.
    pub occupied: bool,
}

/// Structured result of a resolved ability, carrying the minimal set of
/// changed cells so callers can update views without re-scanning the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    Bomb {
        outcome: ShotOutcome,
        turn: TurnFlow,
        changed: Vec<CellChange>,
    },
    LineAssault {
        /// Per-column outcomes across the swept row, in column order.
        outcomes: Vec<ShotOutcome>,
        turn: TurnFlow,
        changed: Vec<CellChange>,
    },
    Scan {
        revealed: Vec<Reveal>,
    },
}

impl ActionResult {
    /// Turn disposition after this action. Scans never touch the turn.
    pub fn turn(&self) -> TurnFlow {
        match self {
            ActionResult::Bomb { turn, .. } | ActionResult::LineAssault { turn, .. } => *turn,
            ActionResult::Scan { .. } => TurnFlow::Unchanged,
        }
    }

    /// Cells mutated by this action, empty for read-only abilities.
    pub fn changed(&self) -> &[CellChange] {
        match self {
            ActionResult::Bomb { changed, .. } | ActionResult::LineAssault { changed, .. } => {
                changed
            }
            ActionResult::Scan { .. } => &[],
        }
    }
}

/// Errors returned by low-level grid operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    /// Row or column index is outside [0, BOARD_SIZE).
    OutOfBounds { row: usize, col: usize },
    /// Target cell already holds a ship.
    Occupied { row: usize, col: usize },
    /// Ship placement with owner id 0, which marks unowned cells.
    InvalidOwner,
}

impl core::fmt::Display for GridError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            GridError::OutOfBounds { row, col } => {
                write!(f, "cell ({}, {}) is outside the board", row, col)
            }
            GridError::Occupied { row, col } => {
                write!(f, "cell ({}, {}) already holds a ship", row, col)
            }
            GridError::InvalidOwner => write!(f, "owner id 0 is reserved for unowned cells"),
        }
    }
}

/// Errors returned when a ship placement is rejected. No variant mutates
/// any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// No ships of this tier remain in the fleet inventory.
    TierExhausted(Tier),
    /// Part of the ship would fall outside the board.
    OutOfBounds { row: usize, col: usize },
    /// First occupied cell clashing with an already placed ship.
    Collision { row: usize, col: usize },
}

impl From<GridError> for PlacementError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { row, col } => PlacementError::OutOfBounds { row, col },
            GridError::Occupied { row, col } => PlacementError::Collision { row, col },
            // Ship ids are assigned starting at 1, so a validated placement
            // never carries owner 0; map the guard to a plain rejection.
            GridError::InvalidOwner => PlacementError::OutOfBounds { row: 0, col: 0 },
        }
    }
}

impl core::fmt::Display for PlacementError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            PlacementError::TierExhausted(tier) => {
                write!(f, "all {} ships have been placed", tier.name())
            }
            PlacementError::OutOfBounds { row, col } => {
                write!(f, "placement at ({}, {}) runs off the board", row, col)
            }
            PlacementError::Collision { row, col } => {
                write!(f, "collision with other ship at ({}, {})", row, col)
            }
        }
    }
}

/// Errors returned when an attack command is rejected. No variant mutates
/// any state; repeated attacks are the [`ShotOutcome::Repeat`] outcome, not
/// an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    /// No uses of this ability remain.
    AbilityExhausted(AbilityKind),
    /// Target cell is outside the board.
    OutOfBounds { row: usize, col: usize },
}

impl From<GridError> for AttackError {
    fn from(err: GridError) -> Self {
        match err {
            GridError::OutOfBounds { row, col }
            | GridError::Occupied { row, col } => AttackError::OutOfBounds { row, col },
            GridError::InvalidOwner => AttackError::OutOfBounds { row: 0, col: 0 },
        }
    }
}

impl core::fmt::Display for AttackError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            AttackError::AbilityExhausted(kind) => {
                write!(f, "no {} uses remaining", kind.name())
            }
            AttackError::OutOfBounds { row, col } => {
                write!(f, "target ({}, {}) is outside the board", row, col)
            }
        }
    }
}
