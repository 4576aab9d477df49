use crate::entities::{Catalog, Container};

/// A packing problem: a set of containers, each packed independently with the same catalog.
#[derive(Clone, Debug)]
pub struct Instance {
    pub name: String,
    pub containers: Vec<Container>,
    pub catalog: Catalog,
}

impl Instance {
    pub fn new(name: impl Into<String>, containers: Vec<Container>, catalog: Catalog) -> Self {
        assert!(
            containers.iter().enumerate().all(|(i, c)| c.id == i),
            "container ids must match their index"
        );
        Instance {
            name: name.into(),
            containers,
            catalog,
        }
    }

    pub fn container(&self, id: usize) -> &Container {
        &self.containers[id]
    }
}
