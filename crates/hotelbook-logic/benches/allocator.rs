use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use hotelbook_logic::allocator::{allocate, best_cross_floor, best_same_floor};
use hotelbook_logic::inventory::generate_rooms;
use hotelbook_logic::room::Room;

/// Free rooms at the given positions on every floor.
fn free_at(positions: &[u32]) -> Vec<Room> {
    generate_rooms()
        .into_iter()
        .filter(|r| positions.contains(&r.position_from_lift))
        .collect()
}

fn bench_same_floor(c: &mut Criterion) {
    let rooms = generate_rooms();
    c.bench_function("same_floor_empty_hotel_count5", |b| {
        b.iter(|| best_same_floor(black_box(&rooms), 5))
    });
}

fn bench_cross_floor(c: &mut Criterion) {
    // Four free rooms per floor: no floor fits five, 40 rooms overall.
    let rooms = free_at(&[1, 4, 6, 7]);
    c.bench_function("cross_floor_40_rooms_count5", |b| {
        b.iter(|| best_cross_floor(black_box(&rooms), 5))
    });

    let sparse = free_at(&[2, 5]);
    c.bench_function("allocate_sparse_count3", |b| {
        b.iter(|| allocate(black_box(&sparse), 3))
    });
}

criterion_group!(benches, bench_same_floor, bench_cross_floor);
criterion_main!(benches);
