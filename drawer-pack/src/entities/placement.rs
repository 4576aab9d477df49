use crate::entities::{Dimension, ItemClass};
use crate::geometry::Rect;
use std::fmt::{Display, Formatter};

/// An [`Item`](crate::entities::Item) placed at a fixed position in a container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Placement {
    /// Id of the placed item in the [`Catalog`](crate::entities::Catalog)
    pub item_id: usize,
    pub class: ItemClass,
    /// Region covered by the item
    pub rect: Rect,
    /// Whether the item was turned by 90 degrees with respect to its canonical shape
    pub rotated: bool,
}

impl Placement {
    pub fn x(&self) -> u32 {
        self.rect.x_min
    }

    pub fn y(&self) -> u32 {
        self.rect.y_min
    }

    pub fn width(&self) -> u32 {
        self.rect.width()
    }

    pub fn height(&self) -> u32 {
        self.rect.height()
    }

    /// The orientation-independent shape of the placed item.
    pub fn shape(&self) -> Dimension {
        Dimension {
            width: self.width(),
            height: self.height(),
        }
        .canonical()
    }

    pub fn area(&self) -> u64 {
        self.rect.area()
    }
}

impl Display for Placement {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} item {} at {}{}",
            self.class,
            self.item_id,
            self.rect,
            if self.rotated { " (rotated)" } else { "" }
        )
    }
}
