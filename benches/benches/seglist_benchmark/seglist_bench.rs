use std::{collections::VecDeque, hint::black_box, time::Duration};

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use seglist::SegmentedList;

const SIZES: [usize; 3] = [1_000usize, 10_000usize, 100_000usize];
const RANDOM_OPS: usize = 1_000;
const FRAGMENT: i64 = 1000;

// Helper: fill containers with sequential integers 0..n-1
fn fill_vec(n: usize) -> Vec<i32> {
    (0..n as i32).collect()
}

fn fill_vecdeque(n: usize) -> VecDeque<i32> {
    (0..n as i32).collect()
}

fn fill_seglist(
    n: usize,
    fragment: i64,
) -> SegmentedList<i32> {
    let mut list = SegmentedList::with_fragment(fragment).unwrap();
    for i in 0..n as i32 {
        list.push(i);
    }
    list
}

// Indices for a sequence of operations on a list whose length changes by
// `delta` after each op, starting from `len`.
fn random_indices(
    rng: &mut StdRng,
    len: usize,
    delta: isize,
) -> Vec<usize> {
    let mut len = len as isize;
    (0..RANDOM_OPS)
        .map(|_| {
            let upper = if delta > 0 { len + 1 } else { len };
            let i = rng.gen_range(0..upper.max(1) as usize);
            len += delta;
            i
        })
        .collect()
}

// Benchmark: bulk append
fn bench_push(c: &mut Criterion) {
    let mut g = c.benchmark_group("push_bulk");
    g.measurement_time(Duration::from_secs(5));
    for &size in SIZES.iter() {
        g.throughput(Throughput::Elements(size as u64));
        g.bench_with_input(BenchmarkId::new("SegmentedList", size), &size, |b, &n| {
            b.iter(|| {
                let mut list = SegmentedList::with_fragment(FRAGMENT).unwrap();
                for i in 0..n {
                    list.push(black_box(i as i32));
                }
                black_box(list);
            })
        });
        g.bench_with_input(BenchmarkId::new("VecDeque", size), &size, |b, &n| {
            b.iter(|| {
                let mut d = VecDeque::new();
                for i in 0..n {
                    d.push_back(black_box(i as i32));
                }
                black_box(d);
            })
        });
        g.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &n| {
            b.iter(|| {
                let mut v = Vec::new();
                for i in 0..n {
                    v.push(black_box(i as i32));
                }
                black_box(v);
            })
        });
    }
    g.finish();
}

// Benchmark: 1000 positional inserts at random indices
fn bench_random_insert(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_insert_1k");
    g.measurement_time(Duration::from_secs(5));
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    for &size in SIZES.iter() {
        let indices = random_indices(&mut rng, size, 1);
        let v = fill_vec(size);
        let d = fill_vecdeque(size);
        let s = fill_seglist(size, FRAGMENT);

        g.throughput(Throughput::Elements(RANDOM_OPS as u64));

        g.bench_with_input(BenchmarkId::new("Vec", size), &indices, |b, idxs| {
            b.iter_batched(
                || v.clone(),
                |mut v| {
                    for &i in idxs.iter() {
                        v.insert(i, 7);
                    }
                    black_box(v);
                },
                BatchSize::LargeInput,
            )
        });

        g.bench_with_input(BenchmarkId::new("VecDeque", size), &indices, |b, idxs| {
            b.iter_batched(
                || d.clone(),
                |mut d| {
                    for &i in idxs.iter() {
                        d.insert(i, 7);
                    }
                    black_box(d);
                },
                BatchSize::LargeInput,
            )
        });

        g.bench_with_input(
            BenchmarkId::new("SegmentedList", size),
            &indices,
            |b, idxs| {
                b.iter_batched(
                    || s.clone(),
                    |mut s| {
                        for &i in idxs.iter() {
                            s.insert(i, 7).unwrap();
                        }
                        black_box(s);
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }
    g.finish();
}

// Benchmark: 1000 removals at random indices
fn bench_random_remove(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_remove_1k");
    g.measurement_time(Duration::from_secs(5));
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    for &size in SIZES.iter().filter(|&&n| n >= RANDOM_OPS) {
        let indices = random_indices(&mut rng, size, -1);
        let v = fill_vec(size);
        let d = fill_vecdeque(size);
        let s = fill_seglist(size, FRAGMENT);

        g.throughput(Throughput::Elements(RANDOM_OPS as u64));

        g.bench_with_input(BenchmarkId::new("Vec", size), &indices, |b, idxs| {
            b.iter_batched(
                || v.clone(),
                |mut v| {
                    for &i in idxs.iter() {
                        black_box(v.remove(i));
                    }
                },
                BatchSize::LargeInput,
            )
        });

        g.bench_with_input(BenchmarkId::new("VecDeque", size), &indices, |b, idxs| {
            b.iter_batched(
                || d.clone(),
                |mut d| {
                    for &i in idxs.iter() {
                        black_box(d.remove(i));
                    }
                },
                BatchSize::LargeInput,
            )
        });

        g.bench_with_input(
            BenchmarkId::new("SegmentedList", size),
            &indices,
            |b, idxs| {
                b.iter_batched(
                    || s.clone(),
                    |mut s| {
                        for &i in idxs.iter() {
                            black_box(s.remove(i).unwrap());
                        }
                    },
                    BatchSize::LargeInput,
                )
            },
        );
    }
    g.finish();
}

// Benchmark: random_get (1000 random reads)
fn bench_random_get(c: &mut Criterion) {
    let mut g = c.benchmark_group("random_get_1k");
    g.measurement_time(Duration::from_secs(5));
    let mut rng = StdRng::seed_from_u64(0xDEADBEEF);

    for &size in SIZES.iter() {
        let indices: Vec<usize> = (0..RANDOM_OPS).map(|_| rng.gen_range(0..size)).collect();

        let v = fill_vec(size);
        let d = fill_vecdeque(size);
        let s = fill_seglist(size, FRAGMENT);

        g.throughput(Throughput::Elements(RANDOM_OPS as u64));

        g.bench_with_input(BenchmarkId::new("Vec", size), &indices, |b, idxs| {
            b.iter(|| {
                for &i in idxs.iter() {
                    black_box(black_box(&v).get(i));
                }
            })
        });

        g.bench_with_input(BenchmarkId::new("VecDeque", size), &indices, |b, idxs| {
            b.iter(|| {
                for &i in idxs.iter() {
                    black_box(black_box(&d).get(i));
                }
            })
        });

        g.bench_with_input(
            BenchmarkId::new("SegmentedList", size),
            &indices,
            |b, idxs| {
                b.iter(|| {
                    for &i in idxs.iter() {
                        black_box(black_box(&s).get(i).ok());
                    }
                })
            },
        );
    }
    g.finish();
}

// Benchmark: optimize after heavy front insertion, for several fragment sizes
fn bench_optimize(c: &mut Criterion) {
    let mut g = c.benchmark_group("optimize");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let mut skewed = fill_seglist(size, 64);
        for i in 0..(size / 10) as i32 {
            skewed.insert(0, i).unwrap();
        }

        g.throughput(Throughput::Elements(skewed.len() as u64));

        for fragment in [64i64, 1000] {
            g.bench_with_input(
                BenchmarkId::new(format!("fragment_{fragment}"), size),
                &skewed,
                |b, list| {
                    b.iter_batched(
                        || list.clone(),
                        |mut list| {
                            list.optimize(fragment).unwrap();
                            black_box(list);
                        },
                        BatchSize::LargeInput,
                    )
                },
            );
        }
    }
    g.finish();
}

// Benchmark: sequential iterator performance
fn bench_sequential_iter(c: &mut Criterion) {
    let mut g = c.benchmark_group("sequential_iter");
    g.measurement_time(Duration::from_secs(5));

    for &size in SIZES.iter() {
        let v = fill_vec(size);
        let s = fill_seglist(size, FRAGMENT);

        g.throughput(Throughput::Elements(size as u64));

        g.bench_with_input(BenchmarkId::new("Vec", size), &v, |b, v| {
            b.iter(|| {
                for x in v.iter() {
                    black_box(x);
                }
            })
        });

        g.bench_with_input(BenchmarkId::new("SegmentedList", size), &s, |b, s| {
            b.iter(|| {
                for x in s.iter() {
                    black_box(x);
                }
            })
        });
    }
    g.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_push(c);
    bench_random_insert(c);
    bench_random_remove(c);
    bench_random_get(c);
    bench_optimize(c);
    bench_sequential_iter(c);
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(50);
    targets = criterion_benchmark
}
criterion_main!(benches);
