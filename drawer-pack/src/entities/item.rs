use crate::entities::Dimension;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Role of an item shape during packing, assigned once by the catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemClass {
    /// Placed during the strategy-ordered main pass
    Main,
    /// Only used to fill residual gaps after the main pass, in abundant supply
    Filler,
}

impl Display for ItemClass {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ItemClass::Main => write!(f, "main"),
            ItemClass::Filler => write!(f, "filler"),
        }
    }
}

/// A distinct item shape of the [`Catalog`](crate::entities::Catalog).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Position of the shape in the catalog, in order of first appearance in the raw input
    pub id: usize,
    /// Canonical shape (width <= height)
    pub shape: Dimension,
    pub class: ItemClass,
    /// Number of times this shape (in either orientation) appeared in the raw input
    pub multiplicity: usize,
}

impl Item {
    pub fn area(&self) -> u64 {
        self.shape.area()
    }
}
