use std::collections::HashSet;

use itertools::Itertools;
use log::error;

use crate::entities::{Container, Layout, Placement};
use crate::occupancy::OccupancyGrid;

//Various checks to verify correctness of the state of the system
//Used in debug_assert!() blocks and tests

pub fn placements_in_bounds(placements: &[Placement], container: &Container) -> bool {
    let bbox = container.bbox();
    match placements.iter().find(|p| !bbox.contains(&p.rect)) {
        Some(p) => {
            error!("placement {p} exceeds container {} ({})", container.name, container.dim);
            false
        }
        None => true,
    }
}

pub fn placements_disjoint(placements: &[Placement]) -> bool {
    for (a, b) in placements.iter().tuple_combinations() {
        if a.rect.collides_with(&b.rect) {
            error!("placements collide: {a} and {b}");
            return false;
        }
    }
    true
}

/// Checks that the grid's occupied cells are exactly those covered by the placements.
pub fn grid_matches_placements(grid: &OccupancyGrid, placements: &[Placement]) -> bool {
    let covered = placements.iter().map(|p| p.area()).sum::<u64>();
    if covered != grid.occupied_area() {
        error!(
            "grid reports {} occupied cells, placements cover {covered}",
            grid.occupied_area()
        );
        return false;
    }
    placements
        .iter()
        .all(|p| grid.count_occupied_in(p.rect) == p.area())
}

pub fn layout_is_valid(layout: &Layout) -> bool {
    placements_in_bounds(&layout.placements, &layout.container)
        && placements_disjoint(&layout.placements)
        && layout.metrics.covered_area <= layout.container.area()
}

pub fn signatures_pairwise_distinct(layouts: &[Layout]) -> bool {
    let mut seen = HashSet::new();
    layouts.iter().all(|l| seen.insert(l.signature()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Dimension, ItemClass};
    use crate::geometry::Rect;

    fn placement(x: u32, y: u32, w: u32, h: u32) -> Placement {
        Placement {
            item_id: 0,
            class: ItemClass::Main,
            rect: Rect::from_origin(x, y, w, h),
            rotated: false,
        }
    }

    #[test]
    fn detects_overlap_and_out_of_bounds() {
        let container = Container::new(0, "c", Dimension { width: 100, height: 100 });
        let ok = [placement(0, 0, 50, 50), placement(50, 0, 50, 50)];
        assert!(placements_in_bounds(&ok, &container));
        assert!(placements_disjoint(&ok));

        let overlapping = [placement(0, 0, 50, 50), placement(49, 0, 50, 50)];
        assert!(!placements_disjoint(&overlapping));

        let outside = [placement(60, 60, 50, 50)];
        assert!(!placements_in_bounds(&outside, &container));
    }

    #[test]
    fn grid_agrees_with_marked_placements() {
        let mut grid = OccupancyGrid::with_size(100, 100);
        let placements = [placement(0, 0, 30, 20), placement(30, 0, 10, 10)];
        for p in &placements {
            grid.mark_occupied(p.x(), p.y(), p.width(), p.height());
        }
        assert!(grid_matches_placements(&grid, &placements));
        assert!(!grid_matches_placements(&grid, &placements[..1]));
    }
}
