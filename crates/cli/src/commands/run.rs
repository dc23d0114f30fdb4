use anyhow::{Context, Result};
use puncsim_sim::simulation::SimulationBuilder;

use crate::args::{OutputFormat, SimulationArgs};
use crate::printing::{log_parameters, print_allele_vectors, print_json_report};

pub fn run_simulation(args: &SimulationArgs) -> Result<()> {
    let config = args.configuration();
    log_parameters(&config);

    let mut sim = SimulationBuilder::from_configuration(config)
        .build()
        .context("Invalid simulation parameters")?;
    let starting_size = sim.configuration().execution.population_size;

    match args.format {
        OutputFormat::Text => {
            println!("Starting simulation for population of size {starting_size}");

            sim.run_with_progress(|generation| println!("generation {generation} reached"))
                .context("Simulation aborted")?;

            print_allele_vectors(sim.trajectory()).context("Failed to write results")?;
        }
        OutputFormat::Json => {
            sim.run().context("Simulation aborted")?;

            print_json_report(sim.configuration(), sim.trajectory())
                .context("Failed to write results")?;
        }
    }

    if let Some((generation, shift)) = sim.trajectory().largest_shift() {
        tracing::info!(generation, shift, "largest shift in mean traits");
    }

    Ok(())
}
