use std::time::Instant;

use drawer_pack::io::export::export_container_solution;
use drawer_pack::io::ext_repr::{ExtInstance, ExtSolution};
use serde::{Deserialize, Serialize};

use crate::config::FFPConfig;
use crate::opt::packer::ContainerResult;

/// Everything written to the solution file: the input instance, the retained layouts and the config used
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct FFPOutput {
    #[serde(flatten)]
    pub instance: ExtInstance,
    pub solution: ExtSolution,
    pub config: FFPConfig,
}

/// Exports the layouts of every container, with the run time measured from `epoch`.
pub fn export(results: &[ContainerResult], epoch: Instant) -> ExtSolution {
    ExtSolution {
        containers: results
            .iter()
            .map(|r| export_container_solution(&r.container, &r.layouts))
            .collect(),
        run_time_sec: epoch.elapsed().as_secs_f64(),
    }
}
