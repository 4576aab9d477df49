use std::time::{Duration, Instant};

use drawer_pack::Result;
use drawer_pack::entities::{Catalog, Container, Instance, Item, Layout};
use drawer_pack::occupancy::OccupancyGrid;
use drawer_pack::util::assertions;
use itertools::Itertools;
use log::{debug, info};
use rayon::prelude::*;
use thousands::Separable;

use crate::config::FFPConfig;
use crate::opt::dedup::LayoutDeduplicator;
use crate::opt::strategy::{self, Strategy};
use crate::opt::{filler, placer};

/// Deduplicated layouts of a single container, best first by covered area.
#[derive(Clone, Debug)]
pub struct ContainerResult {
    pub container: Container,
    pub layouts: Vec<Layout>,
    /// Number of strategy runs performed
    pub n_attempts: usize,
    /// Number of runs whose layout was structurally identical to an earlier one
    pub n_duplicates: usize,
}

impl ContainerResult {
    pub fn best(&self) -> Option<&Layout> {
        self.layouts.first()
    }
}

/// Outcome of packing every container of an instance.
#[derive(Clone, Debug)]
pub struct FFPSolution {
    pub results: Vec<ContainerResult>,
    pub run_time: Duration,
}

/// First-Fit Packer: packs every container of an instance independently, trying several orderings of the main items.
pub struct FFPacker {
    pub instance: Instance,
    pub config: FFPConfig,
}

impl FFPacker {
    pub fn new(instance: Instance, config: FFPConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { instance, config })
    }

    pub fn solve(&self) -> FFPSolution {
        let start = Instant::now();

        let results = pack_instance(&self.instance, &self.config);

        let run_time = start.elapsed();
        info!(
            "[FFP] packed {} containers in {:.3}ms",
            results.len(),
            run_time.as_secs_f64() * 1000.0
        );
        for result in results.iter() {
            if let Some(best) = result.best() {
                info!(
                    "[FFP] {}: best layout ({}) covers {} mm² with {} items, fill {:.2}%",
                    result.container.name,
                    best.strategy,
                    best.metrics.covered_area.separate_with_commas(),
                    best.metrics.item_count,
                    best.metrics.fill_ratio * 100.0
                );
            }
        }

        FFPSolution { results, run_time }
    }
}

/// Packs a single container: every configured strategy is run against a fresh grid,
/// followed by the filler pass. Structurally identical layouts are discarded and
/// at most `config.max_layouts` are kept, best first.
///
/// Assumes a validated configuration, see [`FFPConfig::validate`].
pub fn pack_container(container: &Container, catalog: &Catalog, config: &FFPConfig) -> ContainerResult {
    let main_items = catalog.main_items().collect_vec();
    let orderings = strategy::generate(&config.strategies, config.num_strategies, &main_items);

    debug!(
        "[PACK] {} ({}): running {} strategies over {} main and {} filler shapes",
        container.name,
        container.dim,
        orderings.len(),
        main_items.len(),
        catalog.filler_items().count()
    );

    //collected in strategy order, whether or not the runs are parallel
    let layouts: Vec<Layout> = match config.parallel {
        true => orderings
            .par_iter()
            .map(|(s, order)| run_strategy(container, catalog, *s, order, config))
            .collect(),
        false => orderings
            .iter()
            .map(|(s, order)| run_strategy(container, catalog, *s, order, config))
            .collect(),
    };
    let n_attempts = layouts.len();

    let mut dedup = LayoutDeduplicator::new();
    for layout in layouts {
        dedup.offer(layout);
    }
    let n_duplicates = dedup.n_discarded();
    let layouts = dedup.into_best(config.max_layouts);

    debug_assert!(assertions::signatures_pairwise_distinct(&layouts));

    info!(
        "[PACK] {}: {} unique layouts from {} attempts ({} duplicates)",
        container.name,
        layouts.len(),
        n_attempts,
        n_duplicates
    );

    ContainerResult {
        container: container.clone(),
        layouts,
        n_attempts,
        n_duplicates,
    }
}

/// Packs every container of the instance independently, in container order.
pub fn pack_instance(instance: &Instance, config: &FFPConfig) -> Vec<ContainerResult> {
    instance
        .containers
        .iter()
        .map(|container| pack_container(container, &instance.catalog, config))
        .collect()
}

/// A single packing attempt: main pass in the given order, then the filler pass, both on one fresh grid.
pub fn run_strategy(
    container: &Container,
    catalog: &Catalog,
    strategy: Strategy,
    ordering: &[&Item],
    config: &FFPConfig,
) -> Layout {
    let mut grid = OccupancyGrid::new(container);

    let main = placer::place(
        container,
        ordering.iter().copied(),
        &mut grid,
        config.scan_step,
    );
    let filler_placements = filler::fill(
        container,
        catalog.filler_items(),
        &mut grid,
        config.filler_repeat_bound,
        config.scan_step,
    );

    let placements = main
        .placements
        .into_iter()
        .chain(filler_placements)
        .collect_vec();
    let unplaced = main.unplaced.into_iter().cloned().collect_vec();

    debug_assert!(assertions::grid_matches_placements(&grid, &placements));

    let layout = Layout::new(container.clone(), strategy.to_string(), placements, unplaced);

    debug!(
        "[PACK] {} / {}: {} items ({} filler), {} unplaced, fill {:.2}%",
        container.name,
        layout.strategy,
        layout.metrics.item_count,
        layout.metrics.filler_count,
        layout.metrics.unplaced_count,
        layout.metrics.fill_ratio * 100.0
    );

    layout
}
