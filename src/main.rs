use std::fs::File;
use std::time::Instant;

use anyhow::Context;
use itertools::Itertools;
use log::{info, warn};
use outbreak_risk::{
    Disease, EngineConfig, PredictionSnapshot, bootstrap, import_historical, open_storage,
    parse_historical_csv, risk_info,
};

fn main() -> anyhow::Result<()> {
    // Setup logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = EngineConfig::from_env();
    info!("Starting outbreak risk engine with {config}");

    let mut storage = open_storage(&config).context("failed to open storage")?;
    let start = Instant::now();
    let mut snapshot =
        bootstrap(storage.as_mut(), &config).context("failed to prepare predictions")?;
    info!("Predictions ready in {:?}", start.elapsed());

    // Optional: import a historical CSV given on the command line
    if let Some(path) = std::env::args().nth(1) {
        let file = File::open(&path).with_context(|| format!("failed to open {path}"))?;
        let preview = parse_historical_csv(file).with_context(|| format!("failed to parse {path}"))?;
        for error in &preview.errors {
            warn!("{error}");
        }
        let receipt = import_historical(storage.as_mut(), preview, &config)
            .with_context(|| format!("failed to import {path}"))?;
        info!("Imported {} historical records from {path}", receipt.imported);
        snapshot = receipt.snapshot;
    }

    log_dashboard(&snapshot);
    Ok(())
}

fn log_dashboard(snapshot: &PredictionSnapshot) {
    info!(
        "Snapshot updated {} | {} regions | {} at high risk",
        snapshot.last_updated.format("%Y-%m-%d %H:%M UTC"),
        snapshot.regions.len(),
        snapshot.high_risk_region_count()
    );

    let ranked = snapshot
        .regions
        .iter()
        .sorted_by_key(|p| std::cmp::Reverse(p.typhoid_probability.max(p.cholera_probability)));
    for prediction in ranked {
        let summary = Disease::ALL
            .iter()
            .map(|&disease| {
                let probability = prediction.probability(disease);
                format!("{} {probability}% ({})", disease.label(), risk_info(probability).level)
            })
            .join(", ");
        info!("{:<14} {summary}", prediction.region.name());
    }
}
