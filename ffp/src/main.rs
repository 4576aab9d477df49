use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use drawer_pack::io::import::import;
use drawer_pack::io::svg::layout_to_svg;
use ffp::config::FFPConfig;
use ffp::io::cli::Cli;
use ffp::io::output::{FFPOutput, export};
use ffp::opt::packer::FFPacker;
use ffp::{EPOCH, io};
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            FFPConfig::default()
        }
        Some(config_file) => {
            let file = File::open(config_file)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader).context("incorrect config file format")?
        }
    };

    info!("[MAIN] Successfully parsed FFPConfig: {config:?}");

    let input_file_stem = args
        .input_file
        .file_stem()
        .and_then(|s| s.to_str())
        .context("input file has no valid name")?
        .to_owned();

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {}",
                args.solution_folder.display()
            )
        })?;
    }

    let ext_instance = io::read_instance(args.input_file.as_path())?;
    let instance = import(&ext_instance)?;
    let packer = FFPacker::new(instance, config.clone())?;
    let sol = packer.solve();

    {
        let output = FFPOutput {
            instance: ext_instance,
            solution: export(&sol.results, *EPOCH),
            config: config.clone(),
        };

        let solution_path = args
            .solution_folder
            .join(format!("sol_{input_file_stem}.json"));
        io::write_json(&output, Path::new(&solution_path))?;
    }

    for result in sol.results.iter() {
        for (i, layout) in result.layouts.iter().enumerate() {
            let svg_path = args.solution_folder.join(format!(
                "sol_{input_file_stem}_{}_{i}.svg",
                result.container.name
            ));
            let title = format!("{} #{i}: {}", result.container.name, layout.strategy);
            let svg = layout_to_svg(layout, config.svg_draw_options, &title);
            io::write_svg(&svg, Path::new(&svg_path))?;
        }
    }

    Ok(())
}
