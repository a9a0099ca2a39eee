//! Scoring benchmark: feature extraction and model prediction per schema.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use threatwatch::features::extract;
use threatwatch::model::{LogisticModel, OverrideTable, Scorer, ThreatModel};

fn bench_extract(c: &mut Criterion) {
    let mut g = c.benchmark_group("extract");
    for (name, identifier) in [
        ("ipv4", "45.227.253.214"),
        ("domain_short", "bad.example"),
        ("domain_long", "secure-login-account-verification.example-hosting.com"),
    ] {
        g.bench_function(name, |b| b.iter(|| extract(black_box(identifier))));
    }
    g.finish();
}

fn bench_predict(c: &mut Criterion) {
    let model = LogisticModel::default();
    let ipv4 = extract("45.227.253.214");
    let domain = extract("malware-site.com");

    let mut g = c.benchmark_group("predict");
    g.bench_function("ipv4", |b| b.iter(|| model.predict(black_box(&ipv4))));
    g.bench_function("domain", |b| b.iter(|| model.predict(black_box(&domain))));
    g.finish();
}

fn bench_scorer_paths(c: &mut Criterion) {
    let scorer = Scorer::new(
        Box::new(LogisticModel::default()),
        OverrideTable::with_known_threats(),
    );

    let mut g = c.benchmark_group("scorer");
    g.bench_function("override_hit", |b| {
        b.iter(|| scorer.score(black_box("45.227.253.214")))
    });
    g.bench_function("override_miss", |b| {
        b.iter(|| scorer.score(black_box("198.51.100.23")))
    });
    g.finish();
}

criterion_group!(benches, bench_extract, bench_predict, bench_scorer_paths);
criterion_main!(benches);
