//! Ship tiers, orientation and placed-ship geometry.

use core::fmt;

/// Ship size class. The tier number equals the ship's length in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    Corvette,
    Gunboat,
    Frigate,
    Destroyer,
}

impl Tier {
    pub const ALL: [Tier; 4] = [Tier::Corvette, Tier::Gunboat, Tier::Frigate, Tier::Destroyer];

    /// Length in cells, 1 through 4.
    pub fn length(self) -> usize {
        match self {
            Tier::Corvette => 1,
            Tier::Gunboat => 2,
            Tier::Frigate => 3,
            Tier::Destroyer => 4,
        }
    }

    /// Display name of the class.
    pub fn name(self) -> &'static str {
        match self {
            Tier::Corvette => "Corvette",
            Tier::Gunboat => "Gunboat",
            Tier::Frigate => "Frigate",
            Tier::Destroyer => "Destroyer",
        }
    }

    /// Tier whose ships span `length` cells.
    pub fn from_length(length: usize) -> Option<Tier> {
        match length {
            1 => Some(Tier::Corvette),
            2 => Some(Tier::Gunboat),
            3 => Some(Tier::Frigate),
            4 => Some(Tier::Destroyer),
            _ => None,
        }
    }

    /// Dense index for per-tier count tables.
    pub(crate) fn index(self) -> usize {
        self.length() - 1
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Layout axis of a ship's occupied cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    /// The other axis.
    pub fn flipped(self) -> Orientation {
        match self {
            Orientation::Horizontal => Orientation::Vertical,
            Orientation::Vertical => Orientation::Horizontal,
        }
    }
}

/// A ship committed to a board. Never mutated after placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Ship {
    id: u32,
    tier: Tier,
    orientation: Orientation,
    row: usize,
    col: usize,
}

impl Ship {
    pub(crate) fn new(id: u32, tier: Tier, orientation: Orientation, row: usize, col: usize) -> Self {
        Ship {
            id,
            tier,
            orientation,
            row,
            col,
        }
    }

    /// Board-unique id, assigned in placement order starting at 1.
    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Origin cell (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Occupied cells, origin first, stepping along the orientation axis.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.tier.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether the ship occupies (row, col).
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|cell| cell == (row, col))
    }
}

/// A ship picked up but not yet committed: the only ship form that may
/// change orientation. Commit it through `Board::place_ship` once an origin
/// is chosen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedShip {
    tier: Tier,
    orientation: Orientation,
}

impl StagedShip {
    /// Stage a ship of `tier`, horizontal by default.
    pub fn new(tier: Tier) -> Self {
        StagedShip {
            tier,
            orientation: Orientation::Horizontal,
        }
    }

    pub fn tier(&self) -> Tier {
        self.tier
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Flip between horizontal and vertical.
    pub fn rotate(&mut self) {
        self.orientation = self.orientation.flipped();
    }
}
