use drawer_pack::io::svg::SvgDrawOptions;
use drawer_pack::{PackError, Result};
use serde::{Deserialize, Serialize};

use crate::opt::strategy::Strategy;

/// Configuration for the First-Fit Packer
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FFPConfig {
    /// Orderings of the main items to attempt, in priority order
    pub strategies: Vec<Strategy>,
    /// Number of strategies from `strategies` to run per container
    pub num_strategies: usize,
    /// Number of copies of every filler shape available to the filler pass
    pub filler_repeat_bound: usize,
    /// Distance in mm between two candidate origins during the scan. 1 is exact, larger values trade fidelity for speed
    pub scan_step: u32,
    /// Maximum number of distinct layouts to retain per container
    pub max_layouts: usize,
    /// Run the strategies of a container on separate threads
    #[serde(default)]
    pub parallel: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
}

impl FFPConfig {
    pub fn validate(&self) -> Result<()> {
        if self.scan_step == 0 {
            return Err(PackError::InvalidConfig("scan_step must be at least 1".into()));
        }
        if self.num_strategies == 0 || self.strategies.is_empty() {
            return Err(PackError::InvalidConfig(
                "at least one strategy is required".into(),
            ));
        }
        if self.max_layouts == 0 {
            return Err(PackError::InvalidConfig(
                "max_layouts must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

impl Default for FFPConfig {
    fn default() -> Self {
        Self {
            strategies: Strategy::DEFAULT.to_vec(),
            num_strategies: 5,
            filler_repeat_bound: 10,
            scan_step: 1,
            max_layouts: 5,
            parallel: false,
            svg_draw_options: SvgDrawOptions::default(),
        }
    }
}
