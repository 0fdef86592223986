//! Room value type: fixed geometry plus two status flags.

use serde::{Deserialize, Serialize};

use crate::constants::layout::ROOM_NUMBER_FLOOR_MULTIPLIER;

/// Derive the room number for a floor and position.
///
/// Floors 1-9 give three-digit numbers (`305`), floor 10 gives `10xx`.
pub fn room_number_for(floor: u32, position_from_lift: u32) -> u32 {
    floor * ROOM_NUMBER_FLOOR_MULTIPLIER + position_from_lift
}

/// A single hotel room.
///
/// `floor` and `position_from_lift` never change after generation. Only
/// the two flags are mutated, and only by [`crate::occupancy::Hotel`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Room {
    pub room_number: u32,
    pub floor: u32,
    /// 1-based horizontal index; position 1 is next to the lift.
    pub position_from_lift: u32,
    /// The room cannot be offered to a new booking.
    pub is_occupied: bool,
    /// The room belongs to the most recent successful booking.
    pub is_booked: bool,
}

impl Room {
    pub fn new(floor: u32, position_from_lift: u32) -> Self {
        Self {
            room_number: room_number_for(floor, position_from_lift),
            floor,
            position_from_lift,
            is_occupied: false,
            is_booked: false,
        }
    }

    /// Ordering key used by the travel-time model and the inventory.
    pub fn sort_key(&self) -> (u32, u32) {
        (self.floor, self.position_from_lift)
    }

    pub fn is_available(&self) -> bool {
        !self.is_occupied
    }
}
