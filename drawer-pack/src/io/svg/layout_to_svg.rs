use crate::entities::{ItemClass, Layout};
use crate::geometry::Rect;
use crate::io::svg::svg_util;
use crate::io::svg::svg_util::SvgDrawOptions;
use svg::Document;
use svg::node::element::{Group, Text, Title};

pub fn layout_to_svg(layout: &Layout, options: SvgDrawOptions, title: &str) -> Document {
    let container = &layout.container;
    let bbox = container.bbox();
    let theme = &options.theme;

    let (width, height) = (bbox.width() as f32, bbox.height() as f32);
    let margin = f32::max(width, height) * 0.05;
    let font_size = f32::min(width, height) * 0.04;

    let stroke_width = f32::min(width, height) * 0.001 * theme.stroke_width_multiplier;

    //unplaced items are stacked in a column right of the container
    let unplaced_column = match options.unplaced && !layout.unplaced.is_empty() {
        false => None,
        true => {
            let x = bbox.x_max + margin as u32;
            let mut y = 0;
            let rects = layout
                .unplaced
                .iter()
                .map(|item| {
                    let rect = Rect::from_origin(x, y, item.shape.width, item.shape.height);
                    y += item.shape.height + (margin / 4.0) as u32;
                    (item, rect)
                })
                .collect::<Vec<_>>();
            Some(rects)
        }
    };

    let vbox = {
        let extra_width = unplaced_column
            .as_ref()
            .map(|rects| {
                rects.iter().map(|(_, r)| r.x_max).max().unwrap_or(bbox.x_max) as f32 - width
            })
            .unwrap_or(0.0);
        let extra_height = unplaced_column
            .as_ref()
            .map(|rects| {
                let y_max = rects.iter().map(|(_, r)| r.y_max).max().unwrap_or(0) as f32;
                f32::max(0.0, y_max - height)
            })
            .unwrap_or(0.0);
        (
            -margin,
            -margin - 2.0 * font_size,
            width + extra_width + 2.0 * margin,
            height + extra_height + 2.0 * margin + 2.0 * font_size,
        )
    };

    let label = {
        //print some information above the left top of the container
        let label_content = format!(
            "{} | width: {} | height: {} | fill: {:.2}% | items: {} ({} filler) | {} {}",
            container.name,
            bbox.width(),
            bbox.height(),
            layout.metrics.fill_ratio * 100.0,
            layout.metrics.item_count,
            layout.metrics.filler_count,
            layout.strategy,
            title,
        );
        Text::new(label_content)
            .set("x", 0.0)
            .set("y", -0.5 * font_size)
            .set("font-size", font_size)
            .set("font-family", "monospace")
            .set("font-weight", "500")
    };

    //draw container
    let container_group = Group::new()
        .set("id", format!("container_{}", container.id))
        .add(svg_util::data_to_path(
            svg_util::rect_data(bbox),
            &[
                ("fill", &*format!("{}", theme.container_fill)),
                ("stroke", "black"),
                ("stroke-width", &*format!("{}", 2.0 * stroke_width)),
            ],
        ))
        .add(Title::new(format!(
            "container, name: {}, size: {}",
            container.name, container.dim
        )));

    //draw items
    let items_group = {
        let mut items_group = Group::new().set("id", "items");
        for (i, p) in layout.placements.iter().enumerate() {
            let fill = match p.class {
                ItemClass::Main => theme.main_item_fill,
                ItemClass::Filler => theme.filler_item_fill,
            };
            let stroke = svg_util::change_brightness(fill, 0.5);
            let mut item_group = Group::new()
                .set("id", format!("placement_{i}"))
                .add(svg_util::data_to_path(
                    svg_util::rect_data(p.rect),
                    &[
                        ("fill", &*format!("{fill}")),
                        ("stroke", &*format!("{stroke}")),
                        ("stroke-width", &*format!("{stroke_width}")),
                    ],
                ))
                .add(Title::new(format!(
                    "{} item, id: {}, {}x{} at ({}, {}){}",
                    p.class,
                    p.item_id,
                    p.width(),
                    p.height(),
                    p.x(),
                    p.y(),
                    if p.rotated { ", rotated" } else { "" }
                )));
            if options.labels {
                item_group = item_group.add(rect_label(p.rect, theme.label_color));
            }
            items_group = items_group.add(item_group);
        }
        items_group
    };

    let unplaced_group = unplaced_column.map(|rects| {
        let mut group = Group::new().set("id", "unplaced");
        for (item, rect) in rects {
            group = group.add(
                svg_util::data_to_path(
                    svg_util::rect_data(rect),
                    &[
                        ("fill", &*format!("{}", theme.unplaced_item_fill)),
                        ("fill-opacity", "0.5"),
                        ("stroke", "black"),
                        ("stroke-width", &*format!("{stroke_width}")),
                        ("stroke-dasharray", &*format!("{}", 5.0 * stroke_width)),
                    ],
                )
                .add(Title::new(format!("unplaced item, id: {}, {}", item.id, item.shape))),
            );
            if options.labels {
                group = group.add(rect_label(rect, theme.label_color));
            }
        }
        group
    });

    let document = Document::new()
        .set("viewBox", vbox)
        .add(container_group)
        .add(items_group)
        .add(label);

    match unplaced_group {
        Some(group) => document.add(group),
        None => document,
    }
}

fn rect_label(rect: Rect, color: svg_util::Color) -> Text {
    let (w, h) = (rect.width() as f32, rect.height() as f32);
    let font_size = f32::min(w, h) * 0.18;
    Text::new(format!("{}x{}", rect.width(), rect.height()))
        .set("x", rect.x_min as f32 + w / 2.0)
        .set("y", rect.y_min as f32 + h / 2.0)
        .set("font-size", font_size)
        .set("font-family", "monospace")
        .set("text-anchor", "middle")
        .set("dominant-baseline", "middle")
        .set("fill", format!("{color}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{Container, Dimension, Item, Placement};

    fn layout() -> Layout {
        let container = Container::new(0, "big", Dimension { width: 928, height: 301 });
        let placements = vec![
            Placement {
                item_id: 0,
                class: ItemClass::Main,
                rect: Rect::from_origin(0, 0, 180, 220),
                rotated: false,
            },
            Placement {
                item_id: 1,
                class: ItemClass::Filler,
                rect: Rect::from_origin(180, 0, 123, 95),
                rotated: true,
            },
        ];
        let unplaced = vec![Item {
            id: 2,
            shape: Dimension { width: 400, height: 400 },
            class: ItemClass::Main,
            multiplicity: 1,
        }];
        Layout::new(container, "area_desc", placements, unplaced)
    }

    #[test]
    fn svg_contains_every_placement() {
        let doc = layout_to_svg(&layout(), SvgDrawOptions::default(), "").to_string();
        assert!(doc.contains("placement_0"));
        assert!(doc.contains("placement_1"));
        assert!(doc.contains("180x220"));
        assert!(!doc.contains("id=\"unplaced\""));
    }

    #[test]
    fn unplaced_column_is_optional() {
        let options = SvgDrawOptions {
            unplaced: true,
            ..SvgDrawOptions::default()
        };
        let doc = layout_to_svg(&layout(), options, "").to_string();
        assert!(doc.contains("id=\"unplaced\""));
        assert!(doc.contains("unplaced item, id: 2, 400x400"));
    }
}
