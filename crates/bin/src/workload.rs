//! Random workload that cross-checks the tree against a linear scan.

use crate::config::Config;
use quadtree::{Bounds, Point, QuadTree};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Outcome of one workload run.
#[derive(Debug, Default)]
pub struct Report {
    pub seed: u64,
    pub inserted: usize,
    pub queries: usize,
    pub removed: usize,
    /// Queries or removals whose result disagreed with the linear scan.
    pub mismatches: usize,
}

pub fn run(config: &Config) -> anyhow::Result<Report> {
    let seed = config.workload.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let container = config.container;
    let mut tree = QuadTree::with_config(container, config.tree.clone())?;
    let mut report = Report { seed, ..Default::default() };

    let points: Vec<Point> = (0..config.workload.points)
        .map(|_| random_point(&mut rng, &container))
        .collect();

    let start = Instant::now();
    tree.insert_many(points.iter().copied());
    report.inserted = points.len();
    info!(
        "Inserted {} points in {:?} ({} entries, {} nodes, height {})",
        points.len(),
        start.elapsed(),
        tree.len(),
        tree.node_count(),
        tree.height()
    );

    let mut live = points;
    let start = Instant::now();
    for _ in 0..config.workload.queries {
        let range = random_range(&mut rng, &container);
        if !query_matches_scan(&tree, &live, &range) {
            warn!("Query {:?} disagrees with linear scan", range);
            report.mismatches += 1;
        }
        report.queries += 1;
    }
    info!("Ran {} queries in {:?}", report.queries, start.elapsed());

    let removals = config.workload.removals.min(live.len());
    let removed: Vec<Point> = live.drain(..removals).collect();
    tree.remove_many(&removed);
    report.removed = removed.len();

    let remaining = tree.all_points();
    for point in removed.iter().filter(|p| !live.contains(p)) {
        if remaining.contains(point) {
            warn!("Point {:?} still stored after removal", point);
            report.mismatches += 1;
        }
    }
    info!("Removed {} points, {} entries left", report.removed, tree.len());

    if tree.node_count() <= 64 {
        debug!("Tree shape: {}", tree.tree());
    }

    tree.clear();
    if !tree.is_empty() || !tree.is_leaf() {
        warn!("Tree not empty after clear");
        report.mismatches += 1;
    }

    Ok(report)
}

fn query_matches_scan(tree: &QuadTree, live: &[Point], range: &Bounds) -> bool {
    let found = tree.query(range);
    found.iter().all(|p| range.contains(p))
        && live.iter().filter(|p| range.contains(p)).all(|p| found.contains(p))
}

fn random_point(rng: &mut StdRng, container: &Bounds) -> Point {
    Point::new(
        rng.random_range(container.min_x..=container.max_x),
        rng.random_range(container.min_y..=container.max_y),
    )
}

fn random_range(rng: &mut StdRng, container: &Bounds) -> Bounds {
    Bounds::from_corners(random_point(rng, container), random_point(rng, container))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WorkloadConfig;
    use quadtree::TreeConfig;

    fn small_config(tree: TreeConfig) -> Config {
        Config {
            container: Bounds::new(-50.0, -50.0, 100.0, 100.0),
            tree,
            workload: WorkloadConfig {
                points: 300,
                queries: 40,
                removals: 150,
                seed: Some(42),
            },
        }
    }

    #[test]
    fn test_workload_has_no_mismatches() {
        let report = run(&small_config(TreeConfig::default())).unwrap();
        assert_eq!(report.seed, 42);
        assert_eq!(report.inserted, 300);
        assert_eq!(report.queries, 40);
        assert_eq!(report.removed, 150);
        assert_eq!(report.mismatches, 0);
    }

    #[test]
    fn test_workload_with_pruning_and_small_capacity() {
        let tree = TreeConfig::default().with_capacity(1).with_remove_empty_nodes(true).with_max_depth(8);
        let report = run(&small_config(tree)).unwrap();
        assert_eq!(report.mismatches, 0);
    }

    #[test]
    fn test_invalid_tree_config_is_an_error() {
        let tree = TreeConfig::default().with_capacity(0);
        assert!(run(&small_config(tree)).is_err());
    }
}
