use std::cmp::Reverse;
use std::collections::HashSet;

use drawer_pack::entities::{Layout, LayoutSignature};
use itertools::Itertools;
use log::debug;

/// Retains only layouts whose [`LayoutSignature`] has not been seen before within one container's run.
#[derive(Debug, Default)]
pub struct LayoutDeduplicator {
    seen: HashSet<LayoutSignature>,
    retained: Vec<Layout>,
    n_discarded: usize,
}

impl LayoutDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Offers a layout, returns `true` if it was retained.
    pub fn offer(&mut self, layout: Layout) -> bool {
        let signature = layout.signature();
        match self.seen.insert(signature) {
            true => {
                self.retained.push(layout);
                true
            }
            false => {
                debug!(
                    "[DEDUP] discarding layout of strategy {}, signature already retained",
                    layout.strategy
                );
                self.n_discarded += 1;
                false
            }
        }
    }

    pub fn n_retained(&self) -> usize {
        self.retained.len()
    }

    pub fn n_discarded(&self) -> usize {
        self.n_discarded
    }

    /// Returns at most `max_layouts` retained layouts, best first by covered area.
    /// Ties keep the order in which the layouts were offered.
    /// If fewer unique layouts were found, all of them are returned.
    pub fn into_best(self, max_layouts: usize) -> Vec<Layout> {
        self.retained
            .into_iter()
            .sorted_by_key(|l| Reverse(l.metrics.covered_area))
            .take(max_layouts)
            .collect()
    }
}
