//! Booking error kinds.

use crate::constants::booking::{MAX_ROOMS, MIN_ROOMS};

/// Why a booking or allocation attempt did not produce rooms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// Requested count is outside `MIN_ROOMS..=MAX_ROOMS`.
    InvalidCount { requested: i64 },
    /// Fewer free rooms than requested.
    InsufficientAvailability { requested: i64, available: usize },
    /// The allocator exhausted its search space without a candidate.
    NotFound { requested: i64 },
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookingError::InvalidCount { requested } => write!(
                f,
                "Invalid room count {}: choose between {} and {} rooms",
                requested, MIN_ROOMS, MAX_ROOMS
            ),
            BookingError::InsufficientAvailability {
                requested,
                available,
            } => write!(
                f,
                "Not enough rooms available: requested {}, only {} free",
                requested, available
            ),
            BookingError::NotFound { requested } => {
                write!(f, "No suitable combination of {} rooms found", requested)
            }
        }
    }
}

impl std::error::Error for BookingError {}
