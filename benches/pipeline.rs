//! Pipeline benchmark: feed expansion and end-to-end event processing.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use threatwatch::config::RiskConfig;
use threatwatch::feed::ThreatFeed;
use threatwatch::model::{build, OverrideTable, Scorer};
use threatwatch::processor::EventProcessor;
use threatwatch::risk::RiskEngine;

fn make_feed(n: usize) -> ThreatFeed {
    ThreatFeed {
        malicious_ips: (0..n).map(|i| format!("203.0.{}.{}", i / 256, i % 256)).collect(),
        malicious_domains: (0..n).map(|i| format!("host-{}.example.com", i)).collect(),
    }
}

fn bench_feed_expansion(c: &mut Criterion) {
    let feed = make_feed(100);
    c.bench_function("feed_expand_200_events", |b| {
        b.iter(|| black_box(black_box(&feed).events()))
    });
}

fn bench_process_events(c: &mut Criterion) {
    let model = build(&Default::default()).unwrap();
    let scorer = Scorer::new(model, OverrideTable::with_known_threats());
    let processor = EventProcessor::new(scorer, RiskEngine::new(RiskConfig::default()));
    let events = make_feed(100).events();

    c.bench_function("process_200_events", |b| {
        b.iter(|| {
            for event in &events {
                black_box(processor.process(black_box(event)).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_feed_expansion, bench_process_events);
criterion_main!(benches);
