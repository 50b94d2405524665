use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use queue_table::Queue;
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn bench_put_10k(c: &mut Criterion) {
    c.bench_function("queue_put_10k", |b| {
        b.iter_batched(
            Queue::<u64>::new,
            |mut q| {
                for x in lcg(1).take(10_000) {
                    q.put(x);
                }
                black_box(q)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_put_get_cycle(c: &mut Criterion) {
    c.bench_function("queue_put_get_cycle", |b| {
        let mut q = Queue::new();
        // Steady-state depth so put/get both exercise a non-empty chain.
        for x in lcg(3).take(1_000) {
            q.put(x);
        }
        let mut src = lcg(5);
        b.iter(|| {
            q.put(src.next().unwrap());
            black_box(q.get().unwrap());
        })
    });
}

fn bench_search_miss_1k(c: &mut Criterion) {
    c.bench_function("queue_search_miss_1k", |b| {
        let mut q = Queue::new();
        for x in lcg(7).take(1_000) {
            q.put(x | 1);
        }
        b.iter(|| {
            // Even target never matches; forces a full scan.
            black_box(q.search(|&e| e == 2));
        })
    });
}

fn bench_concat_1k_into_1k(c: &mut Criterion) {
    c.bench_function("queue_concat_1k_into_1k", |b| {
        b.iter_batched(
            || {
                let mut q1 = Queue::new();
                let mut q2 = Queue::new();
                for x in lcg(11).take(1_000) {
                    q1.put(x);
                }
                for x in lcg(13).take(1_000) {
                    q2.put(x);
                }
                (q1, q2)
            },
            |(mut q1, q2)| {
                q1.concat(q2);
                black_box(q1)
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_put_10k, bench_put_get_cycle, bench_search_miss_1k, bench_concat_1k_into_1k
}
criterion_main!(benches);
