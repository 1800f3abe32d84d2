//! The [`GridCell`] type: per-cell navigation data.

/// Weight marking a cell as impassable. Any weight at or above this value
/// blocks movement.
pub const BLOCKED_WEIGHT: i32 = 10_000;

/// Navigation data stored in each grid cell.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridCell {
    /// Cost contribution of entering this cell.
    pub weight: i32,
    /// Distance to the nearest blocked cell. Not read by the search.
    pub blocker_distance: u32,
}

impl GridCell {
    /// A passable cell with weight 0.
    pub const OPEN: Self = Self {
        weight: 0,
        blocker_distance: 0,
    };

    /// An impassable cell.
    pub const BLOCKED: Self = Self {
        weight: BLOCKED_WEIGHT,
        blocker_distance: 0,
    };

    /// Create a cell with the given weight.
    #[inline]
    pub const fn new(weight: i32) -> Self {
        Self {
            weight,
            blocker_distance: 0,
        }
    }

    /// Set the weight (builder).
    #[inline]
    pub const fn with_weight(mut self, weight: i32) -> Self {
        self.weight = weight;
        self
    }

    /// Set the blocker distance (builder).
    #[inline]
    pub const fn with_blocker_distance(mut self, dist: u32) -> Self {
        self.blocker_distance = dist;
        self
    }

    /// Whether the cell is impassable under the default [`BLOCKED_WEIGHT`].
    ///
    /// A pathfinder configured with a different threshold ignores this; use
    /// [`is_blocked_by`](Self::is_blocked_by) with that threshold instead.
    #[inline]
    pub const fn is_blocked(self) -> bool {
        self.is_blocked_by(BLOCKED_WEIGHT)
    }

    /// Whether the cell is impassable when weights at or above
    /// `blocked_weight` block movement.
    #[inline]
    pub const fn is_blocked_by(self, blocked_weight: i32) -> bool {
        self.weight >= blocked_weight
    }
}

impl From<i32> for GridCell {
    fn from(weight: i32) -> Self {
        Self::new(weight)
    }
}
