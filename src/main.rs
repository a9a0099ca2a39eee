//! threatwatch entrypoint: periodic threat-feed checks with alerting.
//! Runs a single cycle or a daemon loop with configurable interval; each
//! cycle loads the feed, scores every identifier, and queues medium/high
//! alerts for the render thread.

use std::time::Duration;
use threatwatch::{
    alerts::{AlertSink, ChannelSink, LogSink},
    config::MonitorConfig,
    feed::{FeedClient, ThreatFeed},
    logging::StructuredLogger,
    model::{OverrideTable, Scorer},
    processor::EventProcessor,
    risk::RiskEngine,
};
use tracing::{info, warn};

fn load_feed(config: &MonitorConfig, remote: Option<&FeedClient>) -> ThreatFeed {
    if let Some(client) = remote {
        match client.fetch() {
            Ok(feed) => return feed,
            Err(e) => {
                warn!(url = client.url(), error = %e, "remote feed fetch failed; trying local file");
            }
        }
    }
    ThreatFeed::load(&config.feed.path)
}

fn run_one_cycle(processor: &EventProcessor, config: &MonitorConfig, remote: Option<&FeedClient>) {
    let feed = load_feed(config, remote);
    info!(
        ips = feed.malicious_ips.len(),
        domains = feed.malicious_domains.len(),
        "checking feed identifiers"
    );

    for event in feed.events() {
        match processor.process(&event) {
            Ok(alert) => {
                let (kind, target) = alert.target().unwrap_or(("event", ""));
                info!(
                    kind,
                    target,
                    score = alert.threat_score,
                    severity = %alert.severity,
                    "checked"
                );
            }
            Err(e) => warn!(event_id = %event.id, error = %e, "event not processed"),
        }
    }
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("THREATWATCH_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| MonitorConfig::default_path());
    let config = MonitorConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(feed = %config.feed.path.display(), "threatwatch starting");

    let model = threatwatch::model::build(&config.model)?;
    let scorer = Scorer::new(model, OverrideTable::with_known_threats());
    let risk_engine = RiskEngine::new(config.risk.clone());

    let (sink, alert_rx) = ChannelSink::new();
    let renderer = std::thread::spawn(move || {
        let out = LogSink::stdout();
        for alert in alert_rx {
            let _ = out.deliver(alert);
        }
    });

    let processor = EventProcessor::new(scorer, risk_engine).with_sink(Box::new(sink));

    let remote = match &config.feed.url {
        Some(url) => Some(FeedClient::new(url.clone())?),
        None => None,
    };

    let interval_secs = config.feed.interval_secs;
    let run_daemon = interval_secs > 0;

    if run_daemon {
        info!(interval_secs, "daemon mode (Ctrl+C to stop)");
        static STOP: std::sync::atomic::AtomicBool = std::sync::atomic::AtomicBool::new(false);
        let _ = ctrlc::set_handler(|| {
            STOP.store(true, std::sync::atomic::Ordering::Relaxed);
        });
        let mut cycle: u64 = 0;
        while !STOP.load(std::sync::atomic::Ordering::Relaxed) {
            cycle += 1;
            run_one_cycle(&processor, &config, remote.as_ref());
            info!(cycle, "cycle complete");
            for _ in 0..(interval_secs as u32) {
                if STOP.load(std::sync::atomic::Ordering::Relaxed) {
                    break;
                }
                std::thread::sleep(Duration::from_secs(1));
            }
        }
        info!("threatwatch stopping");
    } else {
        run_one_cycle(&processor, &config, remote.as_ref());
        info!("threatwatch cycle complete");
    }

    drop(processor);
    let _ = renderer.join();

    Ok(())
}
