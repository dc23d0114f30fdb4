use puncsim_sim::simulation::{Configuration, Trajectory};
use serde::Serialize;
use std::io::{self, Write};

/// Log the effective parameters at info level.
pub fn log_parameters(config: &Configuration) {
    let execution = &config.execution;
    let evolution = &config.evolution;
    let demography = &config.demography;

    tracing::info!(
        population_size = execution.population_size,
        generations = execution.total_generations,
        seed = ?execution.seed,
        "execution parameters"
    );
    tracing::info!(
        selection_strength = evolution.selection_strength,
        mutation_rate = evolution.mutation_rate,
        mutation_strength = evolution.mutation_strength,
        "evolution parameters"
    );
    if demography.enabled {
        tracing::info!(
            big_size = demography.big_size,
            small_size = demography.small_size,
            big_generations = demography.big_generations,
            small_generations = demography.small_generations,
            "population size oscillates"
        );
    } else {
        tracing::info!("population size is constant");
    }
}

/// Print the trait-A and trait-B mean vectors, one labelled block each.
pub fn print_allele_vectors(trajectory: &Trajectory) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "A Allele Vector: ")?;
    writeln!(out, "{:?}", trajectory.mean_a)?;
    writeln!(out, "B Allele Vector: ")?;
    writeln!(out, "{:?}", trajectory.mean_b)?;
    out.flush()
}

#[derive(Serialize)]
struct Report<'a> {
    configuration: &'a Configuration,
    trajectory: &'a Trajectory,
}

/// Print the configuration and full trajectory as one JSON document.
pub fn print_json_report(config: &Configuration, trajectory: &Trajectory) -> anyhow::Result<()> {
    let report = Report {
        configuration: config,
        trajectory,
    };
    let stdout = io::stdout();
    let mut out = stdout.lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;
    Ok(())
}
