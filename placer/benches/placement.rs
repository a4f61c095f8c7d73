use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use placer::{Placer, ShapeLimits};
use rand::{SeedableRng, rngs::SmallRng};
use std::hint::black_box;

fn bench_placement(c: &mut Criterion) {
    for side in [64u32, 256] {
        let limits = ShapeLimits::new(side, side).unwrap();

        c.bench_function(&format!("fill_{side}px_10_shapes"), |b| {
            b.iter_batched(
                || (Placer::new(limits.clone()), SmallRng::seed_from_u64(7)),
                |(mut placer, mut rng)| {
                    let mut canvas = placer.canvas();
                    for _ in 0..10 {
                        black_box(placer.place_random(&mut canvas, &mut rng));
                    }
                    canvas
                },
                BatchSize::SmallInput,
            )
        });
    }
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
