use std::collections::HashSet;

use itertools::Itertools;
use log::{debug, warn};

use crate::entities::{Dimension, Item, ItemClass};
use crate::error::Result;

/// Normalized set of item shapes available for packing.
///
/// Every raw `(width, height)` pair is reduced to its canonical form, so that both orientations of a box
/// count as the same shape. Duplicate shapes collapse into a single [`Item`] with a multiplicity,
/// in order of first appearance. Each shape is statically classified as [`ItemClass::Main`] or
/// [`ItemClass::Filler`] depending on its membership in the filler-shape set.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Validates and normalizes raw `(width, height)` pairs.
    /// Fails with [`PackError::InvalidDimension`](crate::PackError::InvalidDimension) on the first non-positive side,
    /// in either the item list or the filler-shape set.
    pub fn new(raw_items: &[(i64, i64)], filler_shapes: &[(i64, i64)]) -> Result<Self> {
        let raw_items = raw_items
            .iter()
            .map(|&(w, h)| Dimension::try_new(w, h))
            .collect::<Result<Vec<_>>>()?;
        let filler_shapes = filler_shapes
            .iter()
            .map(|&(w, h)| Dimension::try_new(w, h))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::from_dimensions(&raw_items, &filler_shapes))
    }

    /// Normalizes already validated dimensions.
    pub fn from_dimensions(raw_items: &[Dimension], filler_shapes: &[Dimension]) -> Self {
        let filler_set: HashSet<Dimension> = filler_shapes.iter().map(|d| d.canonical()).collect();

        let mut items: Vec<Item> = vec![];
        for shape in raw_items.iter().map(|d| d.canonical()) {
            match items.iter_mut().find(|item| item.shape == shape) {
                Some(item) => item.multiplicity += 1,
                None => {
                    let class = match filler_set.contains(&shape) {
                        true => ItemClass::Filler,
                        false => ItemClass::Main,
                    };
                    items.push(Item {
                        id: items.len(),
                        shape,
                        class,
                        multiplicity: 1,
                    });
                }
            }
        }

        for unused in filler_set
            .iter()
            .filter(|f| !items.iter().any(|i| i.shape == **f))
            .sorted()
        {
            warn!("[CATALOG] filler shape {unused} does not occur in the item list, ignoring it");
        }

        debug!(
            "[CATALOG] {} raw items normalized to {} main and {} filler shapes",
            raw_items.len(),
            items.iter().filter(|i| i.class == ItemClass::Main).count(),
            items.iter().filter(|i| i.class == ItemClass::Filler).count()
        );

        Catalog { items }
    }

    /// All distinct shapes, indexed by [`Item::id`].
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn item(&self, id: usize) -> &Item {
        &self.items[id]
    }

    pub fn main_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.class == ItemClass::Main)
    }

    pub fn filler_items(&self) -> impl Iterator<Item = &Item> {
        self.items.iter().filter(|i| i.class == ItemClass::Filler)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
