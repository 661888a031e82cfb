//! Engine facade: the command surface a presentation layer drives.

use alloc::vec::Vec;

use rand::Rng;

use crate::ability::{Ability, AbilityKind};
use crate::board::Board;
use crate::common::{ActionResult, AttackError, PlacementError};
use crate::generator::{generate_fleet, AutoPlacement};
use crate::inventory::AbilityInventory;
use crate::ship::{Orientation, Ship, Tier};

/// Source of the scan difficulty setting. The engine reads it at scan time
/// and otherwise treats the value as opaque; it owns no difficulty state.
pub trait DifficultySource {
    fn difficulty(&self) -> i32;
}

/// A constant difficulty, for configuration values and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDifficulty(pub i32);

impl DifficultySource for FixedDifficulty {
    fn difficulty(&self) -> i32 {
        self.0
    }
}

/// One side's engine: its own board plus the ability budget it attacks with.
/// Attacks are applied to the opposing side's board, which the caller passes
/// in explicitly; the two sides share no state.
pub struct GameEngine {
    board: Board,
    abilities: AbilityInventory,
}

impl GameEngine {
    /// Engine with the interactive-side fleet and default ability budget.
    pub fn new() -> Self {
        Self::with_parts(Board::new(), AbilityInventory::standard())
    }

    /// Engine from an explicit board and ability budget.
    pub fn with_parts(board: Board, abilities: AbilityInventory) -> Self {
        GameEngine { board, abilities }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// Validate and commit a ship placement on this side's board.
    pub fn place_ship(
        &mut self,
        tier: Tier,
        orientation: Orientation,
        origin: (usize, usize),
    ) -> Result<Ship, PlacementError> {
        self.board.place_ship(tier, orientation, origin)
    }

    /// Placements left for `tier`.
    pub fn remaining(&self, tier: Tier) -> u8 {
        self.board.remaining(tier)
    }

    /// True when the whole fleet has been placed.
    pub fn inventory_exhausted(&self) -> bool {
        self.board.inventory_exhausted()
    }

    /// Auto-place a fleet on this side's board, one report per ship.
    pub fn generate_random_fleet<R: Rng>(
        &mut self,
        rng: &mut R,
        tiers: &[Tier],
    ) -> Vec<AutoPlacement> {
        generate_fleet(&mut self.board, rng, tiers)
    }

    /// Uses left for `kind`.
    pub fn ability_remaining(&self, kind: AbilityKind) -> u8 {
        self.abilities.remaining(kind)
    }

    /// Apply `ability` to `target`, consuming one use of its kind. An
    /// exhausted kind rejects the command before anything is touched; a
    /// rejected resolution refunds the use, so failed commands cost nothing.
    pub fn attack(
        &mut self,
        target: &mut Board,
        ability: Ability,
    ) -> Result<ActionResult, AttackError> {
        let kind = ability.kind();
        if !self.abilities.consume(kind) {
            return Err(AttackError::AbilityExhausted(kind));
        }
        match target.resolve(ability) {
            Ok(result) => Ok(result),
            Err(err) => {
                self.abilities.refund(kind);
                Err(err)
            }
        }
    }

    /// Scan `target` around (row, col), reading the difficulty collaborator
    /// at call time.
    pub fn scan(
        &mut self,
        target: &mut Board,
        row: usize,
        col: usize,
        source: &impl DifficultySource,
    ) -> Result<ActionResult, AttackError> {
        self.attack(
            target,
            Ability::Scan {
                row,
                col,
                difficulty: source.difficulty(),
            },
        )
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}
