//! Random fleet generation for the automated side.
//!
//! Each ship gets one random orientation and a bounded number of random
//! origins over the whole board; the first origin that fits is committed.
//! A ship that finds no fit within the attempt cap is skipped and reported,
//! never failing the run. With the standard fleet on an empty 10×10 board a
//! skip is astronomically unlikely, which is why no backtracking is done.

use alloc::vec::Vec;

use rand::Rng;

use crate::board::Board;
use crate::config::{BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::placement::fit_on_grid;
use crate::ship::{Orientation, Ship, Tier};

/// Per-ship outcome of a generator run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum AutoPlacement {
    /// Ship committed to the board.
    Placed(Ship),
    /// No valid origin found within [`MAX_PLACEMENT_ATTEMPTS`].
    Skipped { tier: Tier },
}

impl AutoPlacement {
    pub fn is_placed(&self) -> bool {
        matches!(self, AutoPlacement::Placed(_))
    }
}

/// Place `tiers` onto `board` in sequence, one report per ship. The caller
/// supplies the RNG so runs are reproducible under a fixed seed.
pub fn generate_fleet<R: Rng>(board: &mut Board, rng: &mut R, tiers: &[Tier]) -> Vec<AutoPlacement> {
    tiers
        .iter()
        .map(|&tier| place_one(board, rng, tier))
        .collect()
}

fn place_one<R: Rng>(board: &mut Board, rng: &mut R, tier: Tier) -> AutoPlacement {
    let orientation = if rng.random() {
        Orientation::Horizontal
    } else {
        Orientation::Vertical
    };
    for _ in 0..MAX_PLACEMENT_ATTEMPTS {
        let origin = (
            rng.random_range(0..BOARD_SIZE),
            rng.random_range(0..BOARD_SIZE),
        );
        let cells = match fit_on_grid(board.grid(), tier.length(), orientation, origin) {
            Ok(cells) => cells,
            Err(_) => continue,
        };
        match board.commit_generated(tier, orientation, origin, &cells) {
            Ok(ship) => return AutoPlacement::Placed(ship),
            Err(_) => continue,
        }
    }
    log::warn!(
        "no valid position for a {} within {} attempts, skipping",
        tier.name(),
        MAX_PLACEMENT_ATTEMPTS
    );
    AutoPlacement::Skipped { tier }
}
