//! Bounded-use inventories gating placements and attacks.

use crate::ability::AbilityKind;
use crate::config::{ABILITY_USES, AUTO_FLEET_COUNTS, PLAYER_FLEET};
use crate::ship::Tier;

/// Remaining ship placements per tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct FleetInventory {
    counts: [u8; Tier::ALL.len()],
}

impl FleetInventory {
    /// Inventory from explicit per-tier counts.
    pub fn new(entries: [(Tier, u8); 4]) -> Self {
        let mut counts = [0u8; Tier::ALL.len()];
        for (tier, count) in entries {
            counts[tier.index()] = count;
        }
        FleetInventory { counts }
    }

    /// Interactive-side fleet: 4 corvettes, 3 gunboats, 2 frigates,
    /// 1 destroyer.
    pub fn standard() -> Self {
        Self::new(PLAYER_FLEET)
    }

    /// Auto-placed side fleet: 9 ships matching the generator sequence.
    pub fn auto() -> Self {
        Self::new(AUTO_FLEET_COUNTS)
    }

    /// Placements left for `tier`.
    pub fn remaining(&self, tier: Tier) -> u8 {
        self.counts[tier.index()]
    }

    /// Take one placement of `tier`. Returns `false` and leaves the count
    /// unchanged when none remain.
    pub fn consume(&mut self, tier: Tier) -> bool {
        let count = &mut self.counts[tier.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Give back one placement of `tier` after a failed commit.
    pub(crate) fn refund(&mut self, tier: Tier) {
        self.counts[tier.index()] += 1;
    }

    /// True when every tier is spent: the placement phase is complete.
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}

/// Remaining uses per ability kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AbilityInventory {
    counts: [u8; AbilityKind::ALL.len()],
}

impl AbilityInventory {
    /// Inventory from explicit per-kind counts.
    pub fn new(entries: [(AbilityKind, u8); 3]) -> Self {
        let mut counts = [0u8; AbilityKind::ALL.len()];
        for (kind, count) in entries {
            counts[kind.index()] = count;
        }
        AbilityInventory { counts }
    }

    /// Default budgets from [`ABILITY_USES`].
    pub fn standard() -> Self {
        Self::new(ABILITY_USES)
    }

    /// Uses left for `kind`.
    pub fn remaining(&self, kind: AbilityKind) -> u8 {
        self.counts[kind.index()]
    }

    /// Take one use of `kind`. Returns `false` and leaves the count
    /// unchanged when none remain.
    pub fn consume(&mut self, kind: AbilityKind) -> bool {
        let count = &mut self.counts[kind.index()];
        if *count == 0 {
            return false;
        }
        *count -= 1;
        true
    }

    /// Give back one use of `kind` after a rejected attack.
    pub(crate) fn refund(&mut self, kind: AbilityKind) {
        self.counts[kind.index()] += 1;
    }

    /// True when every ability kind is spent.
    pub fn is_exhausted(&self) -> bool {
        self.counts.iter().all(|&count| count == 0)
    }
}
