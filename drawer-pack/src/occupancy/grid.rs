use ndarray::{Array2, s};

use crate::entities::Container;
use crate::geometry::Rect;

/// Dense occupancy map of a container: one boolean per square millimetre.
///
/// A cell is occupied if and only if some placed rectangle covers it.
/// Cells are never freed: within one packing run the set of occupied cells only grows.
/// Rows are indexed by `y`, columns by `x`.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    cells: Array2<bool>,
    n_occupied: u64,
}

impl OccupancyGrid {
    /// Creates a grid of the container's size with every cell free.
    pub fn new(container: &Container) -> Self {
        Self::with_size(container.width(), container.height())
    }

    pub fn with_size(width: u32, height: u32) -> Self {
        OccupancyGrid {
            cells: Array2::from_elem((height as usize, width as usize), false),
            n_occupied: 0,
        }
    }

    pub fn width(&self) -> u32 {
        self.cells.ncols() as u32
    }

    pub fn height(&self) -> u32 {
        self.cells.nrows() as u32
    }

    /// Returns true if the `w`×`h` rectangle with origin (`x`, `y`) lies within the grid and covers only free cells.
    /// Out-of-bounds rectangles are rejected before any cell is accessed.
    pub fn can_place(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        if !self.in_bounds(x, y, w, h) {
            return false;
        }
        let (x, y, w, h) = (x as usize, y as usize, w as usize, h as usize);
        !self
            .cells
            .slice(s![y..y + h, x..x + w])
            .iter()
            .any(|&occupied| occupied)
    }

    /// Marks every cell covered by the rectangle as occupied.
    /// The caller must have verified [`can_place`](Self::can_place) for the same rectangle.
    pub fn mark_occupied(&mut self, x: u32, y: u32, w: u32, h: u32) {
        debug_assert!(
            self.can_place(x, y, w, h),
            "marking a rectangle that cannot be placed: ({x}, {y}) {w}x{h}"
        );
        let (xu, yu, wu, hu) = (x as usize, y as usize, w as usize, h as usize);
        self.cells.slice_mut(s![yu..yu + hu, xu..xu + wu]).fill(true);
        self.n_occupied += w as u64 * h as u64;
    }

    pub fn is_occupied(&self, x: u32, y: u32) -> bool {
        self.cells
            .get((y as usize, x as usize))
            .copied()
            .unwrap_or(false)
    }

    pub fn occupied_area(&self) -> u64 {
        self.n_occupied
    }

    pub fn free_area(&self) -> u64 {
        self.total_area() - self.n_occupied
    }

    pub fn total_area(&self) -> u64 {
        self.width() as u64 * self.height() as u64
    }

    /// Counts the occupied cells within `rect` by inspecting the grid itself.
    pub fn count_occupied_in(&self, rect: Rect) -> u64 {
        if !self.in_bounds(rect.x_min, rect.y_min, rect.width(), rect.height()) {
            return 0;
        }
        let (x0, y0, x1, y1) = (
            rect.x_min as usize,
            rect.y_min as usize,
            rect.x_max as usize,
            rect.y_max as usize,
        );
        self.cells
            .slice(s![y0..y1, x0..x1])
            .iter()
            .filter(|&&occupied| occupied)
            .count() as u64
    }

    fn in_bounds(&self, x: u32, y: u32, w: u32, h: u32) -> bool {
        //widen to u64 so that huge origins or sizes cannot overflow
        w > 0
            && h > 0
            && x as u64 + w as u64 <= self.width() as u64
            && y as u64 + h as u64 <= self.height() as u64
    }
}
