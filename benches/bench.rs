// Criterion benchmarks for AHP Search

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion as Bench};
use ahp_search::core::{ahp_weights, rank, score_facility};
use ahp_search::models::{Criterion, CriterionKey, Facility};

const LOCATIONS: [&str; 5] = ["Lisboa", "Porto", "Braga", "Coimbra", "Aveiro"];

fn create_facility(id: usize) -> Facility {
    Facility {
        id: id as i32,
        name: format!("Park {}", id),
        location: LOCATIONS[id % LOCATIONS.len()].to_string(),
        cost: 300.0 + (id % 20) as f64 * 50.0,
        has_parking: id % 2 == 0,
        has_meeting_rooms: id % 3 == 0,
        has_office_with_furniture: id % 4 != 0,
        has_transport: id % 5 < 3,
        has_canteen: id % 7 == 0,
    }
}

fn create_criteria() -> Vec<Criterion> {
    vec![
        Criterion::budget(700.0, 7),
        Criterion::locations(["Lisboa", "Porto"], 4),
        Criterion::amenity(CriterionKey::HasParking, true, 5),
        Criterion::amenity(CriterionKey::HasMeetingRooms, true, 3),
        Criterion::amenity(CriterionKey::HasOfficeWithFurniture, false, 2),
        Criterion::amenity(CriterionKey::HasTransport, true, 6),
        Criterion::amenity(CriterionKey::HasCanteen, true, 1),
    ]
}

fn bench_weights(c: &mut Bench) {
    let priorities = [7.0, 4.0, 5.0, 3.0, 2.0, 6.0, 1.0];
    c.bench_function("ahp_weights_7_criteria", |b| {
        b.iter(|| ahp_weights(black_box(&priorities)));
    });
}

fn bench_score_facility(c: &mut Bench) {
    let criteria = create_criteria();
    let priorities: Vec<f64> = criteria.iter().map(|c| c.priority as f64).collect();
    let (_, weights) = ahp_weights(&priorities);
    let facility = create_facility(42);

    c.bench_function("score_facility", |b| {
        b.iter(|| score_facility(black_box(&facility), black_box(&criteria), black_box(&weights)));
    });
}

fn bench_ranking(c: &mut Bench) {
    let criteria = create_criteria();

    let mut group = c.benchmark_group("ranking");

    for facility_count in [10, 50, 100, 500, 1000].iter() {
        let catalogue: Vec<Facility> = (0..*facility_count).map(create_facility).collect();

        group.bench_with_input(
            BenchmarkId::new("rank", facility_count),
            facility_count,
            |b, _| {
                b.iter(|| rank(black_box(&criteria), black_box(&catalogue)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_weights, bench_score_facility, bench_ranking);

criterion_main!(benches);
