//! Self-check harness: runs the allocation logic through known scenarios
//! and reports pass/fail per check, in-process and without a front end.

use hotelbook_logic::allocator::{allocate, SearchPhase};
use hotelbook_logic::inventory::generate_rooms;
use hotelbook_logic::occupancy::Hotel;
use hotelbook_logic::room::{room_number_for, Room};
use hotelbook_logic::travel::travel_time;
use hotelbook_logic::BookingError;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TestResult {
    pub name: String,
    pub passed: bool,
    pub detail: String,
}

fn check(name: &str, passed: bool, detail: impl Into<String>) -> TestResult {
    TestResult {
        name: name.into(),
        passed,
        detail: detail.into(),
    }
}

pub fn run_all(seed: u64) -> Vec<TestResult> {
    let mut results = Vec::new();
    results.extend(validate_inventory());
    results.extend(validate_travel_time());
    results.extend(validate_allocator());
    results.extend(validate_booking_rules());
    results.extend(validate_randomize(seed));
    results
}

// ── 1. Inventory ────────────────────────────────────────────────────────

fn validate_inventory() -> Vec<TestResult> {
    let rooms = generate_rooms();
    let mut results = Vec::new();

    results.push(check(
        "inventory_room_count",
        rooms.len() == 97,
        format!("{} rooms generated", rooms.len()),
    ));

    let bad_floors: Vec<u32> = (1..=10)
        .filter(|&f| {
            let n = rooms.iter().filter(|r| r.floor == f).count();
            n != if f == 10 { 7 } else { 10 }
        })
        .collect();
    results.push(check(
        "inventory_floor_sizes",
        bad_floors.is_empty(),
        if bad_floors.is_empty() {
            "floors 1-9 hold 10 rooms, floor 10 holds 7".to_string()
        } else {
            format!("wrong room count on floors {:?}", bad_floors)
        },
    ));

    let numbering_ok = rooms
        .iter()
        .all(|r| r.room_number == room_number_for(r.floor, r.position_from_lift))
        && rooms.windows(2).all(|w| w[0].room_number < w[1].room_number);
    results.push(check(
        "inventory_numbering",
        numbering_ok,
        "room numbers unique, ascending and derived from floor/position",
    ));

    results
}

// ── 2. Travel time ──────────────────────────────────────────────────────

fn validate_travel_time() -> Vec<TestResult> {
    let crossing = travel_time(&[Room::new(1, 10), Room::new(3, 1)]);
    let same = travel_time(&[Room::new(4, 2), Room::new(4, 9)]);
    let reversed = travel_time(&[Room::new(4, 9), Room::new(4, 2)]);
    vec![
        check(
            "travel_floor_crossing",
            crossing == 4,
            format!("101->301 style crossing costs {} (expected 4)", crossing),
        ),
        check(
            "travel_same_floor_symmetric",
            same == 7 && reversed == 7,
            format!("402/409 costs {} and {} reversed", same, reversed),
        ),
    ]
}

// ── 3. Allocator ────────────────────────────────────────────────────────

fn validate_allocator() -> Vec<TestResult> {
    let mut results = Vec::new();

    let floor_one: Vec<Room> = (1..=10).map(|p| Room::new(1, p)).collect();
    match allocate(&floor_one, 3) {
        Ok(a) => results.push(check(
            "allocator_first_window",
            a.room_numbers() == vec![101, 102, 103] && a.cost == 2,
            format!("picked {:?} cost {}", a.room_numbers(), a.cost),
        )),
        Err(e) => results.push(check("allocator_first_window", false, e.to_string())),
    }

    let scattered: Vec<Room> = generate_rooms()
        .into_iter()
        .filter(|r| r.position_from_lift == 3 || r.position_from_lift == 6)
        .collect();
    match allocate(&scattered, 4) {
        Ok(a) => results.push(check(
            "allocator_cross_floor_fallback",
            a.phase == SearchPhase::CrossFloor && a.rooms.len() == 4,
            format!(
                "picked {:?} cost {} after {} subsets",
                a.room_numbers(),
                a.cost,
                a.candidates_evaluated
            ),
        )),
        Err(e) => results.push(check("allocator_cross_floor_fallback", false, e.to_string())),
    }

    let too_few = [Room::new(2, 2), Room::new(5, 5)];
    let outcome = allocate(&too_few, 3);
    results.push(check(
        "allocator_not_found",
        outcome == Err(BookingError::NotFound { requested: 3 }),
        format!("{:?}", outcome.map(|a| a.room_numbers())),
    ));

    results
}

// ── 4. Booking rules ────────────────────────────────────────────────────

fn validate_booking_rules() -> Vec<TestResult> {
    let mut results = Vec::new();

    let mut hotel = Hotel::new();
    let before = hotel.clone();
    let zero = hotel.book(0);
    let six = hotel.book(6);
    let negative = hotel.book(-1);
    results.push(check(
        "booking_invalid_count",
        matches!(zero, Err(BookingError::InvalidCount { .. }))
            && matches!(six, Err(BookingError::InvalidCount { .. }))
            && matches!(negative, Err(BookingError::InvalidCount { requested: -1 }))
            && hotel == before,
        "book(0), book(6) and book(-1) rejected without mutation",
    ));

    let first = hotel.book(2);
    let second = hotel.book(3);
    let highlight_ok = match (&first, &second) {
        (Ok(_), Ok(b)) => hotel.booked_room_numbers() == b.room_numbers,
        _ => false,
    };
    results.push(check(
        "booking_highlight_moves",
        highlight_ok,
        format!("booked flags now on {:?}", hotel.booked_room_numbers()),
    ));

    hotel.reset();
    results.push(check(
        "booking_reset",
        hotel == Hotel::new(),
        "reset restores a fully free hotel",
    ));

    results
}

// ── 5. Randomize ────────────────────────────────────────────────────────

fn validate_randomize(seed: u64) -> Vec<TestResult> {
    let mut a = Hotel::new();
    let mut b = Hotel::new();
    a.randomize_occupancy(&mut StdRng::seed_from_u64(seed));
    b.randomize_occupancy(&mut StdRng::seed_from_u64(seed));
    let free = a.available_count();

    let mut results = vec![check(
        "randomize_reproducible",
        a == b,
        format!("seed {} leaves {} of 97 rooms free", seed, free),
    )];

    let invariant_ok = (1..=5).all(|count| {
        let _ = a.book(count);
        a.rooms().iter().all(|r| !r.is_booked || r.is_occupied)
    });
    results.push(check(
        "randomize_then_book_invariant",
        invariant_ok,
        "every booked room is occupied after each booking",
    ));

    results
}
