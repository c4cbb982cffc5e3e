use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use linkseq::{DoublyLinkedList, HybridList, Sequence, Value};
use rand::prelude::*;

fn filled<S: Sequence + Default>(len: usize) -> S {
    let mut list = S::default();
    for i in 0..len {
        list.append(i as Value);
    }
    list
}

/// Benchmark O(1) insertion and removal at both ends
fn bench_ends(c: &mut Criterion) {
    let mut group = c.benchmark_group("ends");
    group.throughput(Throughput::Elements(1));

    group.bench_function("doubly_append_pop_back", |b| {
        let mut list: DoublyLinkedList = filled(1000);
        b.iter(|| {
            list.append(black_box(7));
            list.pop_back()
        });
    });

    group.bench_function("doubly_prepend_pop_front", |b| {
        let mut list: DoublyLinkedList = filled(1000);
        b.iter(|| {
            list.prepend(black_box(7));
            list.pop_front()
        });
    });

    group.bench_function("hybrid_append_pop_front", |b| {
        let mut list: HybridList = filled(1000);
        b.iter(|| {
            list.append(black_box(7));
            list.pop_front()
        });
    });

    group.finish();
}

/// Benchmark indexed access with varying list length
fn bench_get(c: &mut Criterion) {
    let mut group = c.benchmark_group("get");

    for len in [100, 1000, 10000] {
        let doubly: DoublyLinkedList = filled(len);
        let hybrid: HybridList = filled(len);
        // Near the tail: the doubly linked list walks backwards
        let index = len - len / 10;

        group.bench_with_input(BenchmarkId::new("doubly", len), &index, |b, &index| {
            b.iter(|| doubly.get(black_box(index)));
        });
        group.bench_with_input(BenchmarkId::new("hybrid", len), &index, |b, &index| {
            b.iter(|| hybrid.get(black_box(index)));
        });
    }

    group.finish();
}

/// Benchmark in-place reversal
fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse");

    for len in [1000, 10000] {
        group.throughput(Throughput::Elements(len as u64));
        group.bench_function(BenchmarkId::new("doubly", len), |b| {
            let mut list: DoublyLinkedList = filled(len);
            b.iter(|| list.reverse());
        });
        group.bench_function(BenchmarkId::new("hybrid", len), |b| {
            let mut list: HybridList = filled(len);
            b.iter(|| list.reverse());
        });
    }

    group.finish();
}

fn mixed_workload<S: Sequence + Default>(rng: &mut StdRng) -> S {
    let mut list = S::default();

    for _ in 0..1000 {
        let op_type = rng.gen_range(0..100);
        let value = rng.gen_range(0..64);

        if op_type < 40 {
            // 40% - Insert at either end
            if rng.gen_bool(0.5) {
                list.append(black_box(value));
            } else {
                list.prepend(black_box(value));
            }
        } else if op_type < 60 {
            // 20% - Insert at a random position
            let index = rng.gen_range(0..=list.len());
            let _ = list.insert_at(black_box(value), index);
        } else if op_type < 80 && !list.is_empty() {
            // 20% - Remove at a random position
            let index = rng.gen_range(0..list.len());
            let _ = list.remove_at(black_box(index));
        } else if op_type < 95 {
            // 15% - Remove by value
            list.remove(black_box(value));
        } else {
            list.reverse();
        }
    }
    list
}

/// Benchmark realistic mixed workload
fn bench_mixed_workload(c: &mut Criterion) {
    let mut group = c.benchmark_group("mixed");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("doubly_1000_ops", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| mixed_workload::<DoublyLinkedList>(&mut rng));
    });

    group.bench_function("hybrid_1000_ops", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| mixed_workload::<HybridList>(&mut rng));
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_ends,
    bench_get,
    bench_reverse,
    bench_mixed_workload,
);
criterion_main!(benches);
