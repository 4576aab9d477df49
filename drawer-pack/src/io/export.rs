use crate::entities::{Container, Layout};
use crate::io::ext_repr::{ExtContainer, ExtContainerSolution, ExtLayout, ExtPlacement, ExtShape};

/// Exports a layout to an external representation.
pub fn export_layout(layout: &Layout) -> ExtLayout {
    let placements = layout
        .placements
        .iter()
        .map(|p| ExtPlacement {
            item_id: p.item_id as u64,
            class: p.class,
            x: p.x(),
            y: p.y(),
            width: p.width(),
            height: p.height(),
            rotated: p.rotated,
        })
        .collect();

    ExtLayout {
        strategy: layout.strategy.clone(),
        placements,
        unplaced: layout
            .unplaced
            .iter()
            .map(|i| ExtShape(i.shape.width as i64, i.shape.height as i64))
            .collect(),
        metrics: layout.metrics,
    }
}

pub fn export_container(container: &Container) -> ExtContainer {
    ExtContainer {
        name: container.name.clone(),
        width: container.width() as i64,
        height: container.height() as i64,
    }
}

/// Exports all retained layouts of a container, keeping their order.
pub fn export_container_solution(container: &Container, layouts: &[Layout]) -> ExtContainerSolution {
    ExtContainerSolution {
        container: export_container(container),
        layouts: layouts.iter().map(export_layout).collect(),
    }
}
