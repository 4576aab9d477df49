use serde::{Deserialize, Serialize};

use crate::entities::{Container, ItemClass, Placement};

/// Number of decimal digits the fill ratio is rounded to.
pub const FILL_RATIO_DECIMALS: i32 = 4;

/// Quality indicators of a completed layout.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Metrics {
    /// Sum of the areas of all placements (mm²)
    pub covered_area: u64,
    /// Total number of placements, main and filler
    pub item_count: usize,
    /// Number of placements made during the filler pass
    pub filler_count: usize,
    /// Number of main items which could not be placed
    pub unplaced_count: usize,
    /// `covered_area` divided by the container area, rounded to [`FILL_RATIO_DECIMALS`] digits
    pub fill_ratio: f64,
}

impl Metrics {
    pub fn compute(placements: &[Placement], container: &Container, unplaced_count: usize) -> Self {
        //placements never overlap, so summing their areas does not double count
        let covered_area = placements.iter().map(|p| p.area()).sum::<u64>();
        debug_assert!(covered_area <= container.area());

        let fill_ratio = round_ratio(covered_area as f64 / container.area() as f64);

        Metrics {
            covered_area,
            item_count: placements.len(),
            filler_count: placements
                .iter()
                .filter(|p| p.class == ItemClass::Filler)
                .count(),
            unplaced_count,
            fill_ratio,
        }
    }
}

fn round_ratio(ratio: f64) -> f64 {
    let factor = 10f64.powi(FILL_RATIO_DECIMALS);
    (ratio * factor).round() / factor
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Dimension;
    use crate::geometry::Rect;
    use float_cmp::approx_eq;

    fn placement(x: u32, y: u32, w: u32, h: u32, class: ItemClass) -> Placement {
        Placement {
            item_id: 0,
            class,
            rect: Rect::from_origin(x, y, w, h),
            rotated: false,
        }
    }

    #[test]
    fn covered_area_and_ratio() {
        let container = Container::new(0, "big", Dimension { width: 928, height: 301 });
        let placements = [
            placement(0, 0, 180, 220, ItemClass::Main),
            placement(180, 0, 350, 185, ItemClass::Main),
            placement(530, 0, 95, 123, ItemClass::Filler),
        ];
        let metrics = Metrics::compute(&placements, &container, 1);
        assert_eq!(metrics.covered_area, 180 * 220 + 350 * 185 + 95 * 123);
        assert_eq!(metrics.item_count, 3);
        assert_eq!(metrics.filler_count, 1);
        assert_eq!(metrics.unplaced_count, 1);
        assert!(approx_eq!(f64, metrics.fill_ratio, 0.4154, epsilon = 1e-9));
    }

    #[test]
    fn empty_layout_has_zero_fill() {
        let container = Container::new(0, "small", Dimension { width: 428, height: 301 });
        let metrics = Metrics::compute(&[], &container, 0);
        assert_eq!(metrics.covered_area, 0);
        assert_eq!(metrics.item_count, 0);
        assert!(approx_eq!(f64, metrics.fill_ratio, 0.0));
    }
}
