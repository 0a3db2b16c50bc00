use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use corelib::partitioner::PartitionerKind;
use corelib::ring::RingBuilder;

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for kind in PartitionerKind::ALL {
        let ring = (0..16)
            .fold(RingBuilder::new().partitioner(kind).with_replicas(160), |b, i| {
                b.add_node(format!("node{i}"))
            })
            .build()
            .expect("valid ring");
        let keys: Vec<String> = (0..1024).map(|i| format!("key-{i}")).collect();

        group.bench_with_input(BenchmarkId::from_parameter(kind), &keys, |b, keys| {
            let mut i = 0;
            b.iter(|| {
                i = (i + 1) % keys.len();
                black_box(ring.lookup(&keys[i]).expect("non-empty ring"));
            })
        });
    }
    group.finish();
}

fn bench_add_node(c: &mut Criterion) {
    let base = (0..16)
        .fold(RingBuilder::new().with_replicas(160), |b, i| b.add_node(format!("node{i}")))
        .build()
        .expect("valid ring");

    c.bench_function("add_node/160", |b| {
        b.iter_batched(
            || base.clone(),
            |mut ring| ring.add_node("joining", 160).expect("valid node"),
            criterion::BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_lookup, bench_add_node);
criterion_main!(benches);
