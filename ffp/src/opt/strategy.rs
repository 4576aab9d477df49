use std::cmp::Reverse;
use std::fmt::{Display, Formatter};

use drawer_pack::entities::Item;
use itertools::Itertools;
use rand::SeedableRng;
use rand::prelude::SmallRng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Ordering in which the main items are fed to the placement engine.
///
/// All orderings are stable: ties keep the catalog order.
/// Widths and heights refer to the canonical shape (width <= height).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Largest area first
    AreaDesc,
    /// Longest side first
    MaxSideDesc,
    /// Largest short side first
    MinSideDesc,
    /// Narrowest first
    WidthAsc,
    /// Shortest first
    HeightAsc,
    /// Random permutation, reproducible through the seed
    Shuffled { seed: u64 },
}

impl Strategy {
    /// The default strategy list, the named orderings followed by a seeded shuffle.
    pub const DEFAULT: [Strategy; 6] = [
        Strategy::AreaDesc,
        Strategy::MaxSideDesc,
        Strategy::MinSideDesc,
        Strategy::WidthAsc,
        Strategy::HeightAsc,
        Strategy::Shuffled { seed: 0 },
    ];

    /// Returns the items in the order defined by this strategy.
    pub fn order<'a>(&self, items: &[&'a Item]) -> Vec<&'a Item> {
        match *self {
            Strategy::AreaDesc => items
                .iter()
                .copied()
                .sorted_by_key(|i| Reverse(i.area()))
                .collect(),
            Strategy::MaxSideDesc => items
                .iter()
                .copied()
                .sorted_by_key(|i| Reverse(i.shape.max_side()))
                .collect(),
            Strategy::MinSideDesc => items
                .iter()
                .copied()
                .sorted_by_key(|i| Reverse(i.shape.min_side()))
                .collect(),
            Strategy::WidthAsc => items
                .iter()
                .copied()
                .sorted_by_key(|i| i.shape.width)
                .collect(),
            Strategy::HeightAsc => items
                .iter()
                .copied()
                .sorted_by_key(|i| i.shape.height)
                .collect(),
            Strategy::Shuffled { seed } => {
                let mut rng = SmallRng::seed_from_u64(seed);
                let mut shuffled = items.to_vec();
                shuffled.shuffle(&mut rng);
                shuffled
            }
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Strategy::AreaDesc => write!(f, "area_desc"),
            Strategy::MaxSideDesc => write!(f, "max_side_desc"),
            Strategy::MinSideDesc => write!(f, "min_side_desc"),
            Strategy::WidthAsc => write!(f, "width_asc"),
            Strategy::HeightAsc => write!(f, "height_asc"),
            Strategy::Shuffled { seed } => write!(f, "shuffled_{seed}"),
        }
    }
}

/// Produces the orderings of the main items for the first `n` strategies.
/// Each ordering is meant for an independent packing attempt on a fresh grid.
pub fn generate<'a>(
    strategies: &[Strategy],
    n: usize,
    main_items: &[&'a Item],
) -> Vec<(Strategy, Vec<&'a Item>)> {
    strategies
        .iter()
        .take(n)
        .map(|s| (*s, s.order(main_items)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use drawer_pack::entities::{Dimension, ItemClass};
    use test_case::test_case;

    fn items() -> Vec<Item> {
        [(180, 220), (95, 123), (185, 350), (120, 125), (123, 210)]
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| Item {
                id,
                shape: Dimension { width: w, height: h },
                class: ItemClass::Main,
                multiplicity: 1,
            })
            .collect()
    }

    fn ids(order: &[&Item]) -> Vec<usize> {
        order.iter().map(|i| i.id).collect()
    }

    #[test_case(Strategy::AreaDesc, vec![2, 0, 4, 3, 1]; "area descending")]
    #[test_case(Strategy::MaxSideDesc, vec![2, 0, 4, 3, 1]; "max side descending")]
    #[test_case(Strategy::MinSideDesc, vec![2, 0, 4, 3, 1]; "min side descending")]
    #[test_case(Strategy::WidthAsc, vec![1, 3, 4, 0, 2]; "width ascending")]
    #[test_case(Strategy::HeightAsc, vec![1, 3, 4, 0, 2]; "height ascending")]
    fn named_orderings(strategy: Strategy, expected: Vec<usize>) {
        let items = items();
        let refs = items.iter().collect_vec();
        assert_eq!(ids(&strategy.order(&refs)), expected);
    }

    #[test]
    fn ties_keep_catalog_order() {
        let items = [(10, 40), (20, 20), (5, 80)]
            .into_iter()
            .enumerate()
            .map(|(id, (w, h))| Item {
                id,
                shape: Dimension { width: w, height: h },
                class: ItemClass::Main,
                multiplicity: 1,
            })
            .collect_vec();
        let refs = items.iter().collect_vec();
        //all three have an area of 400
        assert_eq!(ids(&Strategy::AreaDesc.order(&refs)), vec![0, 1, 2]);
    }

    #[test]
    fn shuffle_is_reproducible_permutation() {
        let items = items();
        let refs = items.iter().collect_vec();
        let a = Strategy::Shuffled { seed: 42 }.order(&refs);
        let b = Strategy::Shuffled { seed: 42 }.order(&refs);
        assert_eq!(ids(&a), ids(&b));
        assert_eq!(ids(&a).into_iter().sorted().collect_vec(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn generate_takes_the_first_n() {
        let items = items();
        let refs = items.iter().collect_vec();
        let orderings = generate(&Strategy::DEFAULT, 3, &refs);
        assert_eq!(
            orderings.iter().map(|(s, _)| *s).collect_vec(),
            vec![Strategy::AreaDesc, Strategy::MaxSideDesc, Strategy::MinSideDesc]
        );
        assert!(orderings.iter().all(|(_, o)| o.len() == refs.len()));
    }

    #[test]
    fn strategies_serialize_in_snake_case() {
        let json = serde_json::to_string(&Strategy::DEFAULT).unwrap();
        assert_eq!(
            json,
            r#"["area_desc","max_side_desc","min_side_desc","width_asc","height_asc",{"shuffled":{"seed":0}}]"#
        );
    }
}
