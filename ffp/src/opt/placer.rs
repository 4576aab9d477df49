use drawer_pack::entities::{Container, Dimension, Item, Placement};
use drawer_pack::geometry::Rect;
use drawer_pack::occupancy::OccupancyGrid;
use drawer_pack::util::assertions;
use log::{debug, trace};

/// Placements made and items rejected by a single pass of [`place`].
#[derive(Clone, Debug, Default)]
pub struct PlacementOutcome<'a> {
    pub placements: Vec<Placement>,
    pub unplaced: Vec<&'a Item>,
}

/// First-fit, one-pass, non-backtracking placement of `items` in the given order.
///
/// Every item is tried in its canonical orientation first and rotated second (square items only once).
/// Each orientation takes the first free origin in row-major scan order (see [`first_fit`]).
/// Items that fit nowhere are recorded as unplaced and the pass continues with the next item.
/// The grid is updated in place, so a subsequent pass can continue from the resulting state.
pub fn place<'a>(
    container: &Container,
    items: impl IntoIterator<Item = &'a Item>,
    grid: &mut OccupancyGrid,
    scan_step: u32,
) -> PlacementOutcome<'a> {
    assert!(scan_step > 0, "scan step must be positive");
    debug_assert!(grid.width() == container.width() && grid.height() == container.height());

    let mut outcome = PlacementOutcome::default();

    for item in items {
        match place_item(item, grid, scan_step) {
            Some(placement) => {
                trace!("[PLACE] {placement}");
                outcome.placements.push(placement);
            }
            None => {
                trace!("[PLACE] item {} ({}) does not fit", item.id, item.shape);
                outcome.unplaced.push(item);
            }
        }
    }

    debug!(
        "[PLACE] {}: {} placed, {} unplaced, {} mm² free",
        container.name,
        outcome.placements.len(),
        outcome.unplaced.len(),
        grid.free_area()
    );
    debug_assert!(assertions::placements_in_bounds(
        &outcome.placements,
        container
    ));
    debug_assert!(assertions::placements_disjoint(&outcome.placements));

    outcome
}

/// Places a single item at the first feasible position of its first feasible orientation, marking the grid.
pub fn place_item(item: &Item, grid: &mut OccupancyGrid, scan_step: u32) -> Option<Placement> {
    orientations(item.shape).find_map(|(dim, rotated)| {
        let (x, y) = first_fit(grid, dim, scan_step)?;
        grid.mark_occupied(x, y, dim.width, dim.height);
        Some(Placement {
            item_id: item.id,
            class: item.class,
            rect: Rect::from_origin(x, y, dim.width, dim.height),
            rotated,
        })
    })
}

/// Scans origins in row-major order (`y` outer, `x` inner) with the given step and
/// returns the first one where a `dim` rectangle fits, i.e. the lexicographically smallest `(y, x)`.
pub fn first_fit(grid: &OccupancyGrid, dim: Dimension, scan_step: u32) -> Option<(u32, u32)> {
    if dim.width > grid.width() || dim.height > grid.height() {
        return None;
    }
    let x_range = 0..=grid.width() - dim.width;
    let y_range = 0..=grid.height() - dim.height;

    for y in y_range.step_by(scan_step as usize) {
        for x in x_range.clone().step_by(scan_step as usize) {
            if grid.can_place(x, y, dim.width, dim.height) {
                return Some((x, y));
            }
        }
    }
    None
}

/// The orientations in which an item is tried, in order: as is, then rotated (unless square).
fn orientations(shape: Dimension) -> impl Iterator<Item = (Dimension, bool)> {
    let rotated = (!shape.is_square()).then_some((shape.rotated(), true));
    std::iter::once((shape, false)).chain(rotated)
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_pack::entities::ItemClass;

    fn item(id: usize, w: u32, h: u32) -> Item {
        Item {
            id,
            shape: Dimension { width: w, height: h }.canonical(),
            class: ItemClass::Main,
            multiplicity: 1,
        }
    }

    fn container(w: u32, h: u32) -> Container {
        Container::new(0, "test", Dimension { width: w, height: h })
    }

    #[test]
    fn first_item_lands_at_origin_and_second_is_adjacent() {
        let container = container(928, 301);
        let items = [item(0, 220, 180), item(1, 350, 185)];
        let mut grid = OccupancyGrid::new(&container);
        let outcome = place(&container, &items, &mut grid, 1);

        assert!(outcome.unplaced.is_empty());
        let [a, b] = &outcome.placements[..] else {
            panic!("expected two placements");
        };
        assert_eq!((a.x(), a.y(), a.width(), a.height()), (0, 0, 180, 220));
        assert!(!a.rotated);
        //185x350 is too tall for the drawer, so it is rotated and placed right next to the first item
        assert_eq!((b.x(), b.y(), b.width(), b.height()), (180, 0, 350, 185));
        assert!(b.rotated);
        assert_eq!(grid.occupied_area(), 220 * 180 + 350 * 185);
    }

    #[test]
    fn oversized_item_is_unplaced() {
        let container = container(100, 100);
        let items = [item(0, 150, 150)];
        let mut grid = OccupancyGrid::new(&container);
        let outcome = place(&container, &items, &mut grid, 1);
        assert!(outcome.placements.is_empty());
        assert_eq!(outcome.unplaced, vec![&items[0]]);
        assert_eq!(grid.occupied_area(), 0);
    }

    #[test]
    fn placement_continues_after_a_misfit() {
        let container = container(100, 100);
        let items = [item(0, 60, 100), item(1, 50, 50), item(2, 40, 100)];
        let mut grid = OccupancyGrid::new(&container);
        let outcome = place(&container, &items, &mut grid, 1);
        assert_eq!(outcome.unplaced.iter().map(|i| i.id).collect::<Vec<_>>(), vec![1]);
        assert_eq!(outcome.placements.len(), 2);
        assert_eq!(outcome.placements[1].x(), 60);
    }

    #[test]
    fn square_items_are_tried_once() {
        let square = Dimension { width: 10, height: 10 };
        assert_eq!(orientations(square).count(), 1);
        let rect = Dimension { width: 10, height: 20 };
        assert_eq!(
            orientations(rect).collect::<Vec<_>>(),
            vec![(rect, false), (rect.rotated(), true)]
        );
    }

    #[test]
    fn scan_is_row_major() {
        let mut grid = OccupancyGrid::with_size(10, 10);
        grid.mark_occupied(0, 0, 4, 2);
        //the free cell at (4, 0) comes before (0, 2) in (y, x) order
        assert_eq!(first_fit(&grid, Dimension { width: 2, height: 2 }, 1), Some((4, 0)));
        grid.mark_occupied(4, 0, 6, 1);
        assert_eq!(first_fit(&grid, Dimension { width: 2, height: 2 }, 1), Some((4, 1)));
    }

    #[test]
    fn coarse_step_only_visits_multiples() {
        let mut grid = OccupancyGrid::with_size(20, 10);
        grid.mark_occupied(0, 0, 3, 10);
        assert_eq!(first_fit(&grid, Dimension { width: 5, height: 5 }, 1), Some((3, 0)));
        assert_eq!(first_fit(&grid, Dimension { width: 5, height: 5 }, 5), Some((5, 0)));
    }

    #[test]
    fn independent_grids_yield_identical_sequences() {
        let container = container(428, 301);
        let items = [
            item(0, 220, 180),
            item(1, 120, 125),
            item(2, 213, 210),
            item(3, 123, 95),
        ];
        let mut grid_a = OccupancyGrid::new(&container);
        let mut grid_b = OccupancyGrid::new(&container);
        let a = place(&container, &items, &mut grid_a, 1);
        let b = place(&container, &items, &mut grid_b, 1);
        assert_eq!(a.placements, b.placements);
        assert!(assertions::grid_matches_placements(&grid_a, &a.placements));
    }
}
