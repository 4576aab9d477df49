use crate::entities::Dimension;
use crate::geometry::Rect;

/// A fixed-size rectangular drawer in which [`Item`](crate::entities::Item)s can be placed.
/// Immutable for the duration of a packing run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Container {
    pub id: usize,
    pub name: String,
    pub dim: Dimension,
}

impl Container {
    pub fn new(id: usize, name: impl Into<String>, dim: Dimension) -> Self {
        Container {
            id,
            name: name.into(),
            dim,
        }
    }

    pub fn width(&self) -> u32 {
        self.dim.width
    }

    pub fn height(&self) -> u32 {
        self.dim.height
    }

    pub fn area(&self) -> u64 {
        self.dim.area()
    }

    /// The region available for placements, with its origin at (0, 0).
    pub fn bbox(&self) -> Rect {
        Rect::from_origin(0, 0, self.dim.width, self.dim.height)
    }
}
