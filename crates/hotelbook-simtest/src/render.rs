//! Plain-text floor map, top floor first.

use hotelbook_logic::inventory::floors;
use hotelbook_logic::occupancy::Hotel;
use hotelbook_logic::room::Room;

const FREE: char = '.';
const OCCUPIED: char = '#';
const BOOKED: char = '*';

fn marker(room: &Room) -> char {
    if room.is_booked {
        BOOKED
    } else if room.is_occupied {
        OCCUPIED
    } else {
        FREE
    }
}

/// One line per floor: `F 3 | lift | 301. 302# 303* ...`
pub fn floor_map(hotel: &Hotel) -> String {
    let mut out = String::new();
    for floor in floors().rev() {
        out.push_str(&format!("F{:>2} | lift |", floor));
        for room in hotel.rooms().iter().filter(|r| r.floor == floor) {
            out.push_str(&format!(" {:>4}{}", room.room_number, marker(room)));
        }
        out.push('\n');
    }
    out.push_str(&format!(
        "legend: {} free  {} occupied  {} booked\n",
        FREE, OCCUPIED, BOOKED
    ));
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_lists_every_floor_top_down() {
        let map = floor_map(&Hotel::new());
        let lines: Vec<&str> = map.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines[0].starts_with("F10"));
        assert!(lines[9].starts_with("F 1"));
        assert!(lines[10].starts_with("legend:"));
        assert!(map.ends_with('\n'));
        assert!(lines[0].ends_with("1007."));
    }

    #[test]
    fn test_map_marks_booking() {
        let mut hotel = Hotel::new();
        hotel.book(2).unwrap();
        let map = floor_map(&hotel);
        assert!(map.contains(" 101*"));
        assert!(map.contains(" 102*"));
        assert!(map.contains(" 103."));
    }
}
