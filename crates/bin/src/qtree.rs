//! qtree - random workload driver for the quadtree crate.

mod config;
mod workload;

use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("qtree v{}", env!("CARGO_PKG_VERSION"));

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("qtree.toml"));
    let config = config::Config::load(&path)?;
    info!("Loaded configuration");
    info!("  Container: {:?}", config.container);
    info!("  Capacity: {}", config.tree.capacity);
    info!("  Remove empty nodes: {}", config.tree.remove_empty_nodes);
    info!("  Max depth: {}", config.tree.max_depth);

    let report = workload::run(&config)?;
    info!("Seed {}: {} inserted, {} queries, {} removed", report.seed, report.inserted, report.queries, report.removed);

    if report.mismatches > 0 {
        anyhow::bail!("{} results disagreed with the linear scan", report.mismatches);
    }
    Ok(())
}
