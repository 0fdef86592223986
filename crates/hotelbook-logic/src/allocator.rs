//! Two-phase room allocator.
//!
//! Given the rooms that are free right now and a requested count, pick the
//! set with the smallest [`travel_time`](crate::travel::travel_time).
//!
//! 1. **Same floor.** Floors are scanned bottom to top. On each floor with
//!    enough free rooms, every run of `count` consecutive entries of that
//!    floor's free list is scored (the run may skip over occupied rooms).
//! 2. **Cross floor.** Only if no single floor can hold the booking, every
//!    `count`-subset of the free rooms is scored, in the order produced by
//!    [`ExcludeFirstCombinations`].
//!
//! Both phases keep the first candidate with the strictly smallest cost, so
//! the scan order alone decides ties.
//!
//! ```
//! use hotelbook_logic::allocator::{allocate, SearchPhase};
//! use hotelbook_logic::inventory::generate_rooms;
//!
//! let rooms = generate_rooms();
//! let allocation = allocate(&rooms, 3).unwrap();
//! assert_eq!(allocation.room_numbers(), vec![101, 102, 103]);
//! assert_eq!(allocation.cost, 2);
//! assert_eq!(allocation.phase, SearchPhase::SameFloor);
//! ```

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::combinations::ExcludeFirstCombinations;
use crate::constants::booking::{MAX_ROOMS, MIN_ROOMS};
use crate::error::BookingError;
use crate::inventory::floors;
use crate::room::Room;
use crate::travel::travel_time;

/// Which search phase produced an allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SearchPhase {
    SameFloor,
    CrossFloor,
}

/// Winning room set for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Allocation {
    /// Selected rooms, in the order they appear in the input.
    pub rooms: Vec<Room>,
    pub cost: u32,
    pub phase: SearchPhase,
    /// Candidate sets scored by the phase that produced this result.
    pub candidates_evaluated: u64,
}

impl Allocation {
    pub fn room_numbers(&self) -> Vec<u32> {
        self.rooms.iter().map(|r| r.room_number).collect()
    }
}

/// Pick the cheapest set of `count` rooms out of `available`.
///
/// Returns `InvalidCount` when `count` is outside the booking bounds and
/// `NotFound` when `available` holds fewer than `count` rooms.
pub fn allocate(available: &[Room], count: i64) -> Result<Allocation, BookingError> {
    if !(MIN_ROOMS..=MAX_ROOMS).contains(&count) {
        return Err(BookingError::InvalidCount { requested: count });
    }
    let k = count as usize;
    if available.len() < k {
        warn!(
            "allocator asked for {} rooms with only {} available",
            count,
            available.len()
        );
        return Err(BookingError::NotFound { requested: count });
    }

    if let Some(allocation) = best_same_floor(available, k) {
        debug!(
            "same-floor allocation {:?} cost={} ({} windows)",
            allocation.room_numbers(),
            allocation.cost,
            allocation.candidates_evaluated
        );
        return Ok(allocation);
    }

    debug!(
        "no floor holds {} free rooms; searching {} cross-floor subsets",
        k,
        ExcludeFirstCombinations::new(available.len(), k).len()
    );
    match best_cross_floor(available, k) {
        Some(allocation) => {
            debug!(
                "cross-floor allocation {:?} cost={}",
                allocation.room_numbers(),
                allocation.cost
            );
            Ok(allocation)
        }
        None => Err(BookingError::NotFound { requested: count }),
    }
}

/// Phase 1: best window of `count` consecutive free rooms on one floor.
///
/// Returns `None` when no floor has `count` free rooms.
pub fn best_same_floor(available: &[Room], count: usize) -> Option<Allocation> {
    if count == 0 {
        return None;
    }

    let mut best: Option<(u32, Vec<Room>)> = None;
    let mut evaluated = 0u64;

    for floor in floors() {
        let on_floor: Vec<Room> = available
            .iter()
            .filter(|r| r.floor == floor)
            .copied()
            .collect();
        if on_floor.len() < count {
            continue;
        }
        for window in on_floor.windows(count) {
            evaluated += 1;
            let cost = travel_time(window);
            if best.as_ref().map_or(true, |(best_cost, _)| cost < *best_cost) {
                best = Some((cost, window.to_vec()));
            }
        }
    }

    best.map(|(cost, rooms)| Allocation {
        rooms,
        cost,
        phase: SearchPhase::SameFloor,
        candidates_evaluated: evaluated,
    })
}

/// Phase 2: exhaustive search over every `count`-subset of `available`.
///
/// Returns `None` only when `available` has fewer than `count` rooms.
pub fn best_cross_floor(available: &[Room], count: usize) -> Option<Allocation> {
    let mut combos = ExcludeFirstCombinations::new(available.len(), count);
    let mut best_cost: Option<u32> = None;
    let mut best_indices: Vec<usize> = Vec::with_capacity(count);
    let mut evaluated = 0u64;

    while let Some(indices) = combos.advance() {
        evaluated += 1;
        let cost = travel_time(indices.iter().map(|&i| &available[i]));
        if best_cost.map_or(true, |b| cost < b) {
            best_cost = Some(cost);
            best_indices.clear();
            best_indices.extend_from_slice(indices);
        }
    }

    best_cost.map(|cost| Allocation {
        rooms: best_indices.iter().map(|&i| available[i]).collect(),
        cost,
        phase: SearchPhase::CrossFloor,
        candidates_evaluated: evaluated,
    })
}
