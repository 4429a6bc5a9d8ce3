// Benchmark for the per-frame probe path.
//
// The rendering layer probes every visible sector once per frame (a 45x30
// grid at the reference window size), so `probe` must stay allocation-light
// and branch-predictable. `inspect` runs once per selection and may
// allocate the full planet/moon graph.

use criterion::{Criterion, criterion_group, criterion_main};
use deepsky_universe::Universe;
use std::hint::black_box;

fn bench_probe_scan(c: &mut Criterion) {
    let universe = Universe::default();
    c.bench_function("probe_full_screen_scan", |b| {
        b.iter(|| {
            let mut stars = 0u32;
            for x in 0..45u32 {
                for y in 0..30u32 {
                    if universe.probe(black_box(x), black_box(y)).exists {
                        stars += 1;
                    }
                }
            }
            black_box(stars)
        })
    });
}

fn bench_inspect_single(c: &mut Criterion) {
    let universe = Universe::default();
    // (0, 22) holds a populated system under the reference stream.
    c.bench_function("inspect_selected_system", |b| {
        b.iter(|| black_box(universe.inspect(black_box(0), black_box(22))))
    });
}

criterion_group!(benches, bench_probe_scan, bench_inspect_single);
criterion_main!(benches);
