use std::cmp::Reverse;
use std::collections::HashSet;

use drawer_pack::entities::{Container, Dimension, Item, Placement};
use drawer_pack::occupancy::OccupancyGrid;
use itertools::Itertools;
use log::debug;

use crate::opt::placer;

/// Replicates every filler shape `repeat_bound` times and sorts the copies by descending area (stable).
pub fn filler_sequence<'a>(
    filler_items: impl IntoIterator<Item = &'a Item>,
    repeat_bound: usize,
) -> Vec<&'a Item> {
    filler_items
        .into_iter()
        .flat_map(|item| std::iter::repeat_n(item, repeat_bound))
        .sorted_by_key(|item| Reverse(item.area()))
        .collect()
}

/// Fills the gaps left in `grid` by the main pass with copies of the filler items.
///
/// Filler supply is considered abundant: copies that no longer fit are silently dropped.
/// Since the grid only fills up, once a shape fails in both orientations all of its remaining copies are skipped.
pub fn fill<'a>(
    container: &Container,
    filler_items: impl IntoIterator<Item = &'a Item>,
    grid: &mut OccupancyGrid,
    repeat_bound: usize,
    scan_step: u32,
) -> Vec<Placement> {
    let sequence = filler_sequence(filler_items, repeat_bound);
    let mut exhausted: HashSet<Dimension> = HashSet::new();
    let mut placements = vec![];

    for item in sequence.iter() {
        if exhausted.contains(&item.shape) {
            continue;
        }
        match placer::place_item(item, grid, scan_step) {
            Some(p) => placements.push(p),
            None => {
                exhausted.insert(item.shape);
            }
        }
    }

    debug!(
        "[FILL] {}: {}/{} filler copies placed, {} mm² left free",
        container.name,
        placements.len(),
        sequence.len(),
        grid.free_area()
    );

    placements
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_pack::entities::ItemClass;
    use drawer_pack::util::assertions;

    fn filler(id: usize, w: u32, h: u32) -> Item {
        Item {
            id,
            shape: Dimension { width: w, height: h },
            class: ItemClass::Filler,
            multiplicity: 1,
        }
    }

    #[test]
    fn sequence_is_replicated_and_sorted() {
        let items = [filler(0, 10, 10), filler(1, 20, 20)];
        let seq = filler_sequence(&items, 3);
        assert_eq!(seq.iter().map(|i| i.id).collect_vec(), vec![1, 1, 1, 0, 0, 0]);
        assert!(filler_sequence(&items, 0).is_empty());
    }

    #[test]
    fn fills_remaining_space_and_stops() {
        let container = Container::new(0, "c", Dimension { width: 100, height: 50 });
        let mut grid = OccupancyGrid::new(&container);
        grid.mark_occupied(0, 0, 60, 50);
        let items = [filler(0, 20, 25)];

        let placements = fill(&container, &items, &mut grid, 100, 1);

        //the 40x50 gap holds exactly four 20x25 boxes
        assert_eq!(placements.len(), 4);
        let smallest = items[0].area();
        assert!(placements.len() as u64 <= (100 * 50 - 60 * 50) / smallest);
        assert!(placements.iter().all(|p| p.class == ItemClass::Filler && p.x() >= 60));
        assert!(assertions::placements_disjoint(&placements));
        assert_eq!(grid.free_area(), 0);
    }

    #[test]
    fn repeat_bound_limits_supply() {
        let container = Container::new(0, "c", Dimension { width: 100, height: 100 });
        let mut grid = OccupancyGrid::new(&container);
        let items = [filler(0, 10, 10)];
        let placements = fill(&container, &items, &mut grid, 5, 1);
        assert_eq!(placements.len(), 5);
        assert_eq!(grid.occupied_area(), 500);
    }
}
