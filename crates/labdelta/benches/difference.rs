use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use labdelta::{ciede_2000, Color, ColorSpace, De2000Version, Float};

const PAIRS: [([Float; 3], [Float; 3]); 4] = [
    ([91.9, 66.1, 4.7], [92.2, 60.1, -4.0]),
    ([11.82, 70.0, -117.827], [11.82, 70.0, -117.75]),
    ([44.0, -75.656, -30.58], [94.7, 19.147, 69.18]),
    ([50.0, 10.0, 0.0], [60.0, -10.0, 0.0]),
];

pub fn run_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("difference");

    group.bench_function("ciede-2000", |b| {
        b.iter(|| {
            for ([l1, a1, b1], [l2, a2, b2]) in PAIRS {
                black_box(ciede_2000(l1, a1, b1, l2, a2, b2));
            }
        });
    });

    group.bench_function("srgb-to-lab", |b| {
        let navy = Color::from_24bit(0x00, 0x00, 0x80);
        b.iter(|| black_box(navy.to(ColorSpace::Lab)));
    });

    group.bench_function("distance-from-srgb", |b| {
        let navy = Color::from_24bit(0x00, 0x00, 0x80);
        let dark_blue = Color::from_24bit(0x00, 0x00, 0x8b);
        b.iter(|| black_box(navy.distance(&dark_blue, De2000Version::Lindbloom)));
    });

    group.finish();
}

criterion_group!(benches, run_benchmarks);
criterion_main!(benches);
