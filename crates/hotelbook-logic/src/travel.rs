//! Travel-time cost of a set of rooms.
//!
//! Only the two extreme rooms of the set (by `(floor, position_from_lift)`)
//! matter:
//!
//! | Case | Cost |
//! |------|------|
//! | 0 or 1 rooms | `0` |
//! | same floor | `hi.position - lo.position` |
//! | different floors | `2 * (hi.floor - lo.floor) + (hi.position - 1)` |
//!
//! The cross-floor horizontal term only counts the walk from the lift to
//! the highest room. It is not a path length and is not symmetric in the
//! positions of `lo` and `hi`.
//!
//! ```
//! use hotelbook_logic::room::Room;
//! use hotelbook_logic::travel::travel_time;
//!
//! let rooms = [Room::new(1, 10), Room::new(3, 1)];
//! assert_eq!(travel_time(&rooms), 4);
//! ```

use crate::constants::travel::FLOOR_COST;
use crate::room::Room;

/// Cost of serving `rooms` together. Order of the input does not matter.
pub fn travel_time<'a, I>(rooms: I) -> u32
where
    I: IntoIterator<Item = &'a Room>,
{
    let mut iter = rooms.into_iter();
    let Some(first) = iter.next() else {
        return 0;
    };
    let (lo, hi) = iter.fold((first, first), |(lo, hi), room| {
        let key = room.sort_key();
        (
            if key < lo.sort_key() { room } else { lo },
            if key > hi.sort_key() { room } else { hi },
        )
    });
    extreme_pair_cost(lo, hi)
}

fn extreme_pair_cost(lo: &Room, hi: &Room) -> u32 {
    if lo.floor == hi.floor {
        hi.position_from_lift.abs_diff(lo.position_from_lift)
    } else {
        FLOOR_COST * hi.floor.abs_diff(lo.floor) + hi.position_from_lift.saturating_sub(1)
    }
}
