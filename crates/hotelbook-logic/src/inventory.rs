//! Room inventory generation.
//!
//! The hotel has a fixed shape: floors 1-9 hold ten rooms each and the top
//! floor holds seven. Rooms are produced floor by floor, nearest the lift
//! first, so the returned order is ascending `(floor, position_from_lift)`
//! and therefore ascending room number.
//!
//! ```
//! use hotelbook_logic::inventory::generate_rooms;
//!
//! let rooms = generate_rooms();
//! assert_eq!(rooms.len(), 97);
//! assert_eq!(rooms[0].room_number, 101);
//! assert_eq!(rooms[96].room_number, 1007);
//! ```

use std::ops::RangeInclusive;

use crate::constants::layout::{FLOOR_COUNT, ROOMS_PER_FLOOR, TOP_FLOOR_ROOMS, TOTAL_ROOMS};
use crate::room::Room;

/// All floor numbers, bottom to top.
pub fn floors() -> RangeInclusive<u32> {
    1..=FLOOR_COUNT
}

/// Number of rooms on a floor. Floors outside the building have none.
pub fn rooms_on_floor(floor: u32) -> u32 {
    match floor {
        f if f == FLOOR_COUNT => TOP_FLOOR_ROOMS,
        f if (1..FLOOR_COUNT).contains(&f) => ROOMS_PER_FLOOR,
        _ => 0,
    }
}

/// Build the full inventory with every flag cleared.
pub fn generate_rooms() -> Vec<Room> {
    let mut rooms = Vec::with_capacity(TOTAL_ROOMS);
    for floor in floors() {
        for position in 1..=rooms_on_floor(floor) {
            rooms.push(Room::new(floor, position));
        }
    }
    rooms
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_room_count() {
        assert_eq!(generate_rooms().len(), TOTAL_ROOMS);
    }

    #[test]
    fn test_floor_sizes() {
        let rooms = generate_rooms();
        for floor in 1..=9 {
            assert_eq!(rooms.iter().filter(|r| r.floor == floor).count(), 10);
        }
        assert_eq!(rooms.iter().filter(|r| r.floor == 10).count(), 7);
        assert_eq!(rooms_on_floor(0), 0);
        assert_eq!(rooms_on_floor(11), 0);
    }

    #[test]
    fn test_ordering_and_unique_numbers() {
        let rooms = generate_rooms();
        assert!(rooms.windows(2).all(|w| w[0].sort_key() < w[1].sort_key()));
        assert!(rooms.windows(2).all(|w| w[0].room_number < w[1].room_number));
        let numbers: HashSet<u32> = rooms.iter().map(|r| r.room_number).collect();
        assert_eq!(numbers.len(), rooms.len());
    }

    #[test]
    fn test_generation_is_repeatable() {
        assert_eq!(generate_rooms(), generate_rooms());
        assert!(generate_rooms().iter().all(|r| !r.is_occupied && !r.is_booked));
    }
}
