//! Hotel constants: layout dimensions, booking bounds, cost weights.
//!
//! Plain `const` values with no runtime dependency. The harness and the
//! logic modules both read from here.

pub mod layout {
    /// Floors are numbered `1..=FLOOR_COUNT`; the lift sits at position 0.
    pub const FLOOR_COUNT: u32 = 10;
    /// Rooms on every floor below the top floor.
    pub const ROOMS_PER_FLOOR: u32 = 10;
    /// Rooms on the top floor.
    pub const TOP_FLOOR_ROOMS: u32 = 7;
    /// `(FLOOR_COUNT - 1) * ROOMS_PER_FLOOR + TOP_FLOOR_ROOMS`
    pub const TOTAL_ROOMS: usize = 97;
    /// Room number = `floor * ROOM_NUMBER_FLOOR_MULTIPLIER + position`.
    pub const ROOM_NUMBER_FLOOR_MULTIPLIER: u32 = 100;
}

pub mod booking {
    //! Counts are signed: callers may pass any integer and out-of-range
    //! values, negatives included, are rejected as invalid.

    /// Smallest number of rooms a single booking may request.
    pub const MIN_ROOMS: i64 = 1;
    /// Largest number of rooms a single booking may request.
    pub const MAX_ROOMS: i64 = 5;
}

pub mod travel {
    /// Cost units per floor crossed by the lift.
    pub const FLOOR_COST: u32 = 2;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_rooms_matches_dimensions() {
        let computed = (layout::FLOOR_COUNT - 1) * layout::ROOMS_PER_FLOOR + layout::TOP_FLOOR_ROOMS;
        assert_eq!(computed as usize, layout::TOTAL_ROOMS);
    }
}
