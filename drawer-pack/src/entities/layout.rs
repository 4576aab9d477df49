use std::fmt::{Display, Formatter};

use itertools::Itertools;

use crate::entities::{Container, Dimension, Item, ItemClass, Metrics, Placement};

/// A completed packing of one [`Container`], produced by a single strategy run.
#[derive(Clone, Debug)]
pub struct Layout {
    pub container: Container,
    /// Name of the strategy which produced the layout
    pub strategy: String,
    /// Placements in the order they were made: main pass first, then the filler pass
    pub placements: Vec<Placement>,
    /// Main items which did not fit anywhere
    pub unplaced: Vec<Item>,
    pub metrics: Metrics,
}

impl Layout {
    pub fn new(
        container: Container,
        strategy: impl Into<String>,
        placements: Vec<Placement>,
        unplaced: Vec<Item>,
    ) -> Self {
        let metrics = Metrics::compute(&placements, &container, unplaced.len());
        Layout {
            container,
            strategy: strategy.into(),
            placements,
            unplaced,
            metrics,
        }
    }

    pub fn signature(&self) -> LayoutSignature {
        LayoutSignature::from_placements(&self.placements)
    }

    pub fn main_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(|p| p.class == ItemClass::Main)
    }

    pub fn filler_placements(&self) -> impl Iterator<Item = &Placement> {
        self.placements
            .iter()
            .filter(|p| p.class == ItemClass::Filler)
    }
}

/// Position- and order-independent fingerprint of a [`Layout`]: the sorted multiset of its canonical placed shapes.
/// Two layouts with the same shapes at different coordinates have equal signatures.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct LayoutSignature(Vec<Dimension>);

impl LayoutSignature {
    pub fn from_placements(placements: &[Placement]) -> Self {
        LayoutSignature(placements.iter().map(|p| p.shape()).sorted().collect())
    }

    pub fn shapes(&self) -> &[Dimension] {
        &self.0
    }
}

impl Display for LayoutSignature {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}
