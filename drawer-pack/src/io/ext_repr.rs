use serde::{Deserialize, Serialize};

use crate::entities::{ItemClass, Metrics};

/// A packing problem: a list of drawers and the catalog of boxes to fill them with
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtInstance {
    /// The name of the instance
    pub name: String,
    /// Containers to pack, each one independently
    pub containers: Vec<ExtContainer>,
    /// Raw item catalog, duplicates and rotated duplicates allowed
    pub items: Vec<ExtShape>,
    /// Shapes which are only used to fill gaps after the main items are placed
    #[serde(default)]
    pub filler_shapes: Vec<ExtShape>,
}

/// A rectangular container with a unique name
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainer {
    pub name: String,
    /// Width in millimetres
    pub width: i64,
    /// Height in millimetres
    pub height: i64,
}

/// A `[width, height]` pair in millimetres
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExtShape(pub i64, pub i64);

/// All layouts retained for a set of containers
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtSolution {
    pub containers: Vec<ExtContainerSolution>,
    /// The time it took to generate the solution in seconds
    pub run_time_sec: f64,
}

/// Deduplicated layouts of a single container, best first
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtContainerSolution {
    pub container: ExtContainer,
    pub layouts: Vec<ExtLayout>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtLayout {
    /// The strategy that produced the layout
    pub strategy: String,
    /// The items placed in the container and where they were placed
    pub placements: Vec<ExtPlacement>,
    /// Main items that did not fit
    pub unplaced: Vec<ExtShape>,
    /// Some statistics about the layout
    pub metrics: Metrics,
}

/// A placed item, with its origin at the top-left corner of the container
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ExtPlacement {
    /// The id of the item shape in the normalized catalog
    pub item_id: u64,
    pub class: ItemClass,
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
    pub rotated: bool,
}
