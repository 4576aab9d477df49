use std::collections::HashSet;

use log::info;

use crate::PackError;
use crate::entities::{Catalog, Container, Dimension, Instance};
use crate::error::Result;
use crate::io::ext_repr::{ExtContainer, ExtInstance, ExtShape};

/// Converts an external instance into an internal one, validating every dimension.
pub fn import(ext_instance: &ExtInstance) -> Result<Instance> {
    let containers = import_containers(&ext_instance.containers)?;
    let catalog = import_catalog(&ext_instance.items, &ext_instance.filler_shapes)?;

    info!(
        "[IMPORT] instance '{}': {} containers, {} distinct item shapes",
        ext_instance.name,
        containers.len(),
        catalog.items().len()
    );

    Ok(Instance::new(ext_instance.name.clone(), containers, catalog))
}

pub fn import_containers(ext_containers: &[ExtContainer]) -> Result<Vec<Container>> {
    let mut names = HashSet::new();
    ext_containers
        .iter()
        .enumerate()
        .map(|(id, ext_cont)| {
            if !names.insert(ext_cont.name.as_str()) {
                return Err(PackError::DuplicateContainer(ext_cont.name.clone()));
            }
            let dim = Dimension::try_new(ext_cont.width, ext_cont.height)?;
            Ok(Container::new(id, ext_cont.name.clone(), dim))
        })
        .collect()
}

pub fn import_catalog(items: &[ExtShape], filler_shapes: &[ExtShape]) -> Result<Catalog> {
    let raw = items.iter().map(|s| (s.0, s.1)).collect::<Vec<_>>();
    let filler = filler_shapes.iter().map(|s| (s.0, s.1)).collect::<Vec<_>>();
    Catalog::new(&raw, &filler)
}
