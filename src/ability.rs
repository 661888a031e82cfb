//! Bounded-use attack abilities.

use core::fmt;

use crate::config::{BOARD_SIZE, SCAN_BASE_RADIUS};

/// The closed set of ability kinds, each with its own use counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AbilityKind {
    Bomb,
    Scan,
    LineAssault,
}

impl AbilityKind {
    pub const ALL: [AbilityKind; 3] = [
        AbilityKind::Bomb,
        AbilityKind::Scan,
        AbilityKind::LineAssault,
    ];

    pub fn name(self) -> &'static str {
        match self {
            AbilityKind::Bomb => "bomb",
            AbilityKind::Scan => "scan",
            AbilityKind::LineAssault => "line assault",
        }
    }

    /// Dense index for per-kind count tables.
    pub(crate) fn index(self) -> usize {
        match self {
            AbilityKind::Bomb => 0,
            AbilityKind::Scan => 1,
            AbilityKind::LineAssault => 2,
        }
    }
}

impl fmt::Display for AbilityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One attack command: an ability kind plus its target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Ability {
    /// Single-cell strike.
    Bomb { row: usize, col: usize },
    /// Read-only reveal of a square window around the target. `difficulty`
    /// comes from the external difficulty source and shrinks the window.
    Scan {
        row: usize,
        col: usize,
        difficulty: i32,
    },
    /// Strike every column of the target's row.
    LineAssault { row: usize, col: usize },
}

impl Ability {
    pub fn kind(&self) -> AbilityKind {
        match self {
            Ability::Bomb { .. } => AbilityKind::Bomb,
            Ability::Scan { .. } => AbilityKind::Scan,
            Ability::LineAssault { .. } => AbilityKind::LineAssault,
        }
    }

    /// Target cell carried by the command.
    pub fn target(&self) -> (usize, usize) {
        match *self {
            Ability::Bomb { row, col }
            | Ability::Scan { row, col, .. }
            | Ability::LineAssault { row, col } => (row, col),
        }
    }
}

/// Scan window radius for `difficulty`: `4 - difficulty`, clamped to the
/// board (0 reveals only the target cell, 9 the whole board).
pub fn scan_radius(difficulty: i32) -> usize {
    SCAN_BASE_RADIUS
        .saturating_sub(difficulty)
        .clamp(0, (BOARD_SIZE - 1) as i32) as usize
}
