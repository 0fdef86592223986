//! Pure room allocation logic for hotelbook.
//!
//! This crate models a fixed-layout hotel (floors 1-9 with ten rooms each,
//! floor 10 with seven) and assigns groups of rooms to booking requests so
//! as to minimise a travel-time cost. Functions take plain data and return
//! results; there is no I/O and no global state, so every piece can be
//! driven from tests, the headless harness, or any future front end.
//!
//! # Module Overview
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`allocator`] | Two-phase search: same floor first, then exhaustive cross-floor |
//! | [`combinations`] | Iterative k-subset walk in exclude-then-include order |
//! | [`constants`] | Layout dimensions, booking bounds, cost weights |
//! | [`error`] | `BookingError` kinds and their user-facing messages |
//! | [`inventory`] | Generation of the 97-room inventory |
//! | [`occupancy`] | `Hotel` state: book, randomize, reset, summaries |
//! | [`room`] | `Room` value type and room-number derivation |
//! | [`travel`] | Travel-time cost of a room set |
//!
//! # Example
//!
//! ```
//! use hotelbook_logic::occupancy::Hotel;
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut hotel = Hotel::new();
//! hotel.randomize_occupancy(&mut StdRng::seed_from_u64(1));
//! match hotel.book(4) {
//!     Ok(booking) => println!("rooms {:?} cost {}", booking.room_numbers, booking.cost),
//!     Err(e) => println!("{}", e),
//! }
//! hotel.reset();
//! assert_eq!(hotel.available_count(), 97);
//! ```

pub mod allocator;
pub mod combinations;
pub mod constants;
pub mod error;
pub mod inventory;
pub mod occupancy;
pub mod room;
pub mod travel;

pub use error::BookingError;
