//! Occupancy state and booking orchestration.
//!
//! [`Hotel`] owns the room collection and is the only place room flags are
//! written. Four operations mutate it: [`Hotel::book`],
//! [`Hotel::randomize_occupancy`], [`Hotel::reset`] and construction.
//! Each runs to completion before returning; a host that shares a `Hotel`
//! between actors must serialize calls itself.
//!
//! # Booking sequence
//!
//! 1. Reject counts outside `1..=5` (no mutation).
//! 2. Reject when fewer rooms are free than requested (no mutation).
//! 3. Clear every `is_booked` flag. From here on the previous booking is
//!    no longer highlighted, even if the search fails.
//! 4. Run the [allocator](crate::allocator::allocate).
//! 5. Mark the winners occupied and booked.
//!
//! ```
//! use hotelbook_logic::occupancy::{BookingReport, Hotel};
//!
//! let mut hotel = Hotel::new();
//! let report = BookingReport::from(hotel.book(2));
//! assert!(report.success);
//! assert_eq!(report.room_numbers, vec![101, 102]);
//! assert_eq!(report.cost, 1);
//! ```

use log::{info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::allocator::{allocate, SearchPhase};
use crate::constants::booking::{MAX_ROOMS, MIN_ROOMS};
use crate::constants::layout::FLOOR_COUNT;
use crate::error::BookingError;
use crate::inventory::{floors, generate_rooms};
use crate::room::Room;

/// A successful booking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    pub room_numbers: Vec<u32>,
    pub cost: u32,
    pub phase: SearchPhase,
}

/// Outcome of a booking attempt in the shape a UI or API layer consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingReport {
    pub success: bool,
    pub room_numbers: Vec<u32>,
    pub cost: u32,
    pub message: String,
}

impl From<Result<Booking, BookingError>> for BookingReport {
    fn from(result: Result<Booking, BookingError>) -> Self {
        match result {
            Ok(booking) => {
                let list = booking
                    .room_numbers
                    .iter()
                    .map(|n| n.to_string())
                    .collect::<Vec<_>>()
                    .join(", ");
                BookingReport {
                    success: true,
                    message: format!("Booked rooms {} (travel time {})", list, booking.cost),
                    room_numbers: booking.room_numbers,
                    cost: booking.cost,
                }
            }
            Err(e) => BookingReport {
                success: false,
                room_numbers: Vec::new(),
                cost: 0,
                message: e.to_string(),
            },
        }
    }
}

/// Counts for status displays.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub total: usize,
    pub occupied: usize,
    pub available: usize,
    pub booked: usize,
    /// Free rooms per floor, index 0 is floor 1.
    pub available_by_floor: Vec<usize>,
}

/// The hotel and its occupancy flags.
///
/// Serialize-only: a `Hotel` is always built from a fresh inventory so the
/// room count and `is_booked` implies `is_occupied` hold from the start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hotel {
    rooms: Vec<Room>,
}

impl Hotel {
    /// A hotel with every room free.
    pub fn new() -> Self {
        Self {
            rooms: generate_rooms(),
        }
    }

    /// All rooms in ascending room-number order.
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    pub fn room(&self, room_number: u32) -> Option<&Room> {
        self.rooms.iter().find(|r| r.room_number == room_number)
    }

    /// Free rooms, in inventory order.
    pub fn available_rooms(&self) -> Vec<Room> {
        self.rooms.iter().filter(|r| r.is_available()).copied().collect()
    }

    pub fn available_count(&self) -> usize {
        self.rooms.iter().filter(|r| r.is_available()).count()
    }

    /// Rooms highlighted as the most recent booking.
    pub fn booked_room_numbers(&self) -> Vec<u32> {
        self.rooms
            .iter()
            .filter(|r| r.is_booked)
            .map(|r| r.room_number)
            .collect()
    }

    pub fn summary(&self) -> OccupancySummary {
        let mut available_by_floor = vec![0; FLOOR_COUNT as usize];
        for room in self.rooms.iter().filter(|r| r.is_available()) {
            if floors().contains(&room.floor) {
                available_by_floor[(room.floor - 1) as usize] += 1;
            }
        }
        let available = available_by_floor.iter().sum();
        OccupancySummary {
            total: self.rooms.len(),
            occupied: self.rooms.len() - available,
            available,
            booked: self.rooms.iter().filter(|r| r.is_booked).count(),
            available_by_floor,
        }
    }

    /// Book `count` rooms with the lowest travel time.
    pub fn book(&mut self, count: i64) -> Result<Booking, BookingError> {
        if !(MIN_ROOMS..=MAX_ROOMS).contains(&count) {
            warn!("rejected booking: invalid count {}", count);
            return Err(BookingError::InvalidCount { requested: count });
        }

        let available = self.available_rooms();
        if available.len() < count as usize {
            warn!(
                "rejected booking of {} rooms: only {} free",
                count,
                available.len()
            );
            return Err(BookingError::InsufficientAvailability {
                requested: count,
                available: available.len(),
            });
        }

        for room in &mut self.rooms {
            room.is_booked = false;
        }

        let allocation = match allocate(&available, count) {
            Ok(allocation) => allocation,
            Err(e) => {
                warn!("allocation failed after availability check: {}", e);
                return Err(e);
            }
        };

        let selected = allocation.room_numbers();
        for room in self
            .rooms
            .iter_mut()
            .filter(|r| selected.contains(&r.room_number))
        {
            room.is_occupied = true;
            room.is_booked = true;
        }

        info!(
            "booked rooms {:?} cost={} via {:?}",
            selected, allocation.cost, allocation.phase
        );
        Ok(Booking {
            room_numbers: selected,
            cost: allocation.cost,
            phase: allocation.phase,
        })
    }

    /// Flip an unbiased coin for every room's `is_occupied`, in room order,
    /// and clear all `is_booked` flags.
    pub fn randomize_occupancy<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for room in &mut self.rooms {
            room.is_occupied = rng.gen_bool(0.5);
            room.is_booked = false;
        }
        info!(
            "randomized occupancy: {} of {} rooms free",
            self.available_count(),
            self.rooms.len()
        );
    }

    /// Replace the whole collection with a fresh inventory.
    pub fn reset(&mut self) {
        self.rooms = generate_rooms();
        info!("hotel reset: {} rooms free", self.rooms.len());
    }
}

impl Default for Hotel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Occupy every room except the listed room numbers.
    fn hotel_with_free(free: &[u32]) -> Hotel {
        let mut hotel = Hotel::new();
        for room in &mut hotel.rooms {
            room.is_occupied = !free.contains(&room.room_number);
        }
        hotel
    }

    #[test]
    fn test_new_hotel_is_empty() {
        let hotel = Hotel::new();
        let summary = hotel.summary();
        assert_eq!(summary.total, 97);
        assert_eq!(summary.available, 97);
        assert_eq!(summary.occupied, 0);
        assert_eq!(summary.booked, 0);
        assert_eq!(summary.available_by_floor[0], 10);
        assert_eq!(summary.available_by_floor[9], 7);
    }

    #[test]
    fn test_book_marks_rooms() {
        let mut hotel = Hotel::new();
        let booking = hotel.book(3).unwrap();
        assert_eq!(booking.room_numbers, vec![101, 102, 103]);
        assert_eq!(booking.cost, 2);
        for number in [101, 102, 103] {
            let room = hotel.room(number).unwrap();
            assert!(room.is_occupied && room.is_booked);
        }
        assert!(!hotel.room(104).unwrap().is_occupied);
        assert_eq!(hotel.available_count(), 94);
    }

    #[test]
    fn test_second_booking_moves_highlight() {
        let mut hotel = Hotel::new();
        hotel.book(2).unwrap();
        let second = hotel.book(2).unwrap();
        assert_eq!(second.room_numbers, vec![103, 104]);
        assert_eq!(hotel.booked_room_numbers(), vec![103, 104]);
        assert!(hotel.room(101).unwrap().is_occupied);
        assert!(!hotel.room(101).unwrap().is_booked);
    }

    #[test]
    fn test_invalid_count_does_not_mutate() {
        let mut hotel = Hotel::new();
        hotel.book(1).unwrap();
        let before = hotel.clone();
        assert_eq!(
            hotel.book(0),
            Err(BookingError::InvalidCount { requested: 0 })
        );
        assert_eq!(
            hotel.book(6),
            Err(BookingError::InvalidCount { requested: 6 })
        );
        assert_eq!(
            hotel.book(-1),
            Err(BookingError::InvalidCount { requested: -1 })
        );
        assert_eq!(hotel, before);
    }

    #[test]
    fn test_insufficient_availability_does_not_mutate() {
        let mut hotel = hotel_with_free(&[305, 702]);
        hotel.rooms[0].is_booked = true;
        let before = hotel.clone();
        assert_eq!(
            hotel.book(3),
            Err(BookingError::InsufficientAvailability {
                requested: 3,
                available: 2
            })
        );
        assert_eq!(hotel, before);
    }

    #[test]
    fn test_cross_floor_booking() {
        let mut hotel = hotel_with_free(&[110, 203, 301, 601]);
        let booking = hotel.book(2).unwrap();
        assert_eq!(booking.phase, SearchPhase::CrossFloor);
        assert_eq!(booking.room_numbers, vec![203, 301]);
        assert_eq!(booking.cost, 2);
    }

    #[test]
    fn test_same_floor_pair_preferred_over_cheaper_cross_floor_pair() {
        let mut hotel = hotel_with_free(&[101, 110, 201, 301]);
        let booking = hotel.book(2).unwrap();
        assert_eq!(booking.phase, SearchPhase::SameFloor);
        assert_eq!(booking.room_numbers, vec![101, 110]);
        assert_eq!(booking.cost, 9);
        assert_eq!(hotel.available_count(), 2);
    }

    #[test]
    fn test_booked_implies_occupied() {
        let mut hotel = Hotel::new();
        let mut rng = StdRng::seed_from_u64(7);
        hotel.randomize_occupancy(&mut rng);
        for count in [5, 1, 4, 2, 3] {
            let _ = hotel.book(count);
            assert!(hotel.rooms().iter().all(|r| !r.is_booked || r.is_occupied));
        }
    }

    #[test]
    fn test_randomize_is_seed_deterministic() {
        let mut a = Hotel::new();
        let mut b = Hotel::new();
        a.book(3).unwrap();
        a.randomize_occupancy(&mut StdRng::seed_from_u64(42));
        b.randomize_occupancy(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.booked_room_numbers().is_empty());
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut hotel = Hotel::new();
        hotel.randomize_occupancy(&mut StdRng::seed_from_u64(3));
        hotel.book(1).ok();
        hotel.reset();
        assert_eq!(hotel, Hotel::new());
    }

    #[test]
    fn test_report_messages() {
        let ok = BookingReport::from(Ok(Booking {
            room_numbers: vec![101, 102],
            cost: 1,
            phase: SearchPhase::SameFloor,
        }));
        assert!(ok.success);
        assert_eq!(ok.message, "Booked rooms 101, 102 (travel time 1)");

        let err = BookingReport::from(Err(BookingError::InvalidCount { requested: 9 }));
        assert!(!err.success);
        assert!(err.room_numbers.is_empty());
        assert_eq!(err.message, BookingError::InvalidCount { requested: 9 }.to_string());
    }
}
