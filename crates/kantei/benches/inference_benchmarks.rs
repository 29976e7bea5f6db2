//! Inference performance benchmarks.
//!
//! Measures candidate matching and fixed-point inference as the number of
//! tracked records grows.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use kantei::inference::{CandidateMatcher, IdentityLedger, InferenceEngine};
use kantei::{
    AttributeUpdate, Catalog, Category, ConfirmationSource, InferenceConfig, ItemRecord, Tracker,
};

/// Grass buy prices that leave several candidates each.
const GRASS_PRICES: &[u32] = &[70, 80, 100, 200, 400, 50, 2000, 160, 43];

/// Build a tracker holding `count` priced grass records, skipping prices
/// the current state rejects.
fn populated_tracker(count: usize) -> Tracker {
    let mut tracker = Tracker::new().unwrap();
    for i in 0..count {
        let id = tracker.create_item(Category::Grass, &format!("g{}", i)).unwrap();
        let buy = GRASS_PRICES[i % GRASS_PRICES.len()];
        let _ = tracker.set_attributes(id, AttributeUpdate::new().with_buy_price(buy));
    }
    tracker
}

/// Benchmark matching a single record against the catalog.
fn bench_candidate_matching(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_matching");
    let catalog = Catalog::builtin();
    let config = InferenceConfig::default();
    let matcher = CandidateMatcher::new(&catalog, &config);
    let mut tracker = Tracker::new().unwrap();

    for (name, category, buy) in [
        ("grass_70", Category::Grass, 70),
        ("grass_400", Category::Grass, 400),
        ("scroll_1000", Category::Scroll, 1000),
        ("staff_1200", Category::Staff, 1200),
    ] {
        let id = tracker.create_item(category, name).unwrap();
        let mut record = tracker.record(id).unwrap().clone();
        record.buy_price = Some(buy);
        group.bench_function(name, |b| {
            b.iter(|| black_box(matcher.match_attributes(black_box(&record))))
        });
    }

    group.finish();
}

/// Benchmark a full inference run from an empty ledger.
fn bench_inference_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("inference_run");
    let catalog = Catalog::builtin();
    let config = InferenceConfig::default();
    let engine = InferenceEngine::new(&catalog, &config);

    for size in [5, 10, 20, 27] {
        let records: Vec<ItemRecord> = populated_tracker(size)
            .records()
            .iter()
            .map(|r| {
                let mut r = r.clone();
                if let Some(confirmation) = &r.confirmed {
                    if confirmation.source == ConfirmationSource::Deduced {
                        r.confirmed = None;
                    }
                }
                r
            })
            .collect();

        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("records", size), &records, |b, records| {
            b.iter(|| {
                let mut records = records.clone();
                let mut ledger = IdentityLedger::new();
                black_box(engine.run(&mut records, &mut ledger))
            })
        });
    }

    group.finish();
}

/// Benchmark tracker mutations, which clone state and re-run inference.
fn bench_tracker_mutation(c: &mut Criterion) {
    let mut group = c.benchmark_group("tracker_mutation");

    group.bench_function("create_and_price", |b| {
        b.iter(|| black_box(populated_tracker(10)))
    });

    let tracker = populated_tracker(20);
    group.bench_function("delete_item", |b| {
        b.iter(|| {
            let mut tracker = tracker.clone();
            let id = tracker.records()[0].id;
            black_box(tracker.delete_item(id))
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_candidate_matching,
    bench_inference_run,
    bench_tracker_mutation,
);

criterion_main!(benches);
