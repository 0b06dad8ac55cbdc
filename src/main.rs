use clap::Parser;
use log::info;
use zscalerranges::{enrich, Client, Filter, RenderMode};

mod cli;

/*-------------------------------------------------------------------------------------------------
  Main CLI Entry Point
-------------------------------------------------------------------------------------------------*/

fn main() {
    let args = cli::Args::parse();

    stderrlog::new()
        .module(module_path!())
        .verbosity(args.verbose.log_level_filter())
        .init()
        .unwrap();

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        std::process::exit(1);
    }
}

/*--------------------------------------------------------------------------------------
  Run the Pipeline: Load, Filter, Enrich, Project
--------------------------------------------------------------------------------------*/

fn run(args: &cli::Args) -> zscalerranges::Result<()> {
    let run_config = cli::resolve(args)?;

    let client = Client::new(&run_config.cloud);
    let ranges = client.get_ranges()?;
    info!(
        "Retrieved {} blocks across {} regions for {}",
        ranges.block_count(),
        ranges.regions().len(),
        ranges.cloud()
    );

    let filter = Filter::new(run_config.regions, run_config.datacenters);
    let mut ranges = filter.apply(&ranges)?;
    enrich(&mut ranges)?;

    match run_config.mode {
        RenderMode::Simple(format) => cli::output::simple(&ranges, format),
        RenderMode::ByDatacenter(format) => cli::output::by_datacenter(&ranges, format)?,
        RenderMode::Csv => {
            let path = cli::csv::save(&ranges, run_config.path.as_deref())?;
            println!("CSV file written to: {}", path.display());
        }
    }

    Ok(())
}
