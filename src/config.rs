use crate::ability::AbilityKind;
use crate::ship::Tier;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 10;

/// Interactive-side fleet: remaining placements per tier, smallest first.
pub const PLAYER_FLEET: [(Tier, u8); 4] = [
    (Tier::Corvette, 4),
    (Tier::Gunboat, 3),
    (Tier::Frigate, 2),
    (Tier::Destroyer, 1),
];

/// Auto-placed side fleet, processed largest-first by the generator.
pub const AUTO_FLEET: [Tier; 9] = [
    Tier::Destroyer,
    Tier::Frigate,
    Tier::Frigate,
    Tier::Gunboat,
    Tier::Gunboat,
    Tier::Gunboat,
    Tier::Corvette,
    Tier::Corvette,
    Tier::Corvette,
];

/// Per-tier counts matching [`AUTO_FLEET`].
pub const AUTO_FLEET_COUNTS: [(Tier, u8); 4] = [
    (Tier::Corvette, 3),
    (Tier::Gunboat, 3),
    (Tier::Frigate, 2),
    (Tier::Destroyer, 1),
];

/// Origin samples tried per ship before the generator gives up on it.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 1000;

/// Default ability budgets per kind.
pub const ABILITY_USES: [(AbilityKind, u8); 3] = [
    (AbilityKind::Bomb, 100),
    (AbilityKind::Scan, 4),
    (AbilityKind::LineAssault, 2),
];

/// Scan window radius before difficulty is subtracted.
pub const SCAN_BASE_RADIUS: i32 = 4;
