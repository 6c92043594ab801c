use crate::cli::CheckArgs;
use crate::error::Result;
use mdpost::workflows::simulation;
use tracing::info;

pub fn run(args: CheckArgs) -> Result<()> {
    let config = simulation::load_simulation_config(&args.config)?;
    info!(
        "The simulation configuration was successfully loaded from '{}'.",
        args.config.display()
    );

    println!("'{}' is a valid simulation configuration.", args.config.display());
    if let Some(system) = &config.system {
        if let Some(method) = system.nonbonded_method {
            println!("  nonbonded method: {:?}", method);
        }
        if let Some(constraints) = system.constraints {
            println!("  constraints: {:?}", constraints);
        }
    }
    if let Some(integrator) = &config.integrator {
        println!("  integrator: {}", integrator.name());
    }
    if let Some(thermostat) = &config.thermostat {
        println!("  thermostat: {}", thermostat.name());
    }
    if let Some(barostat) = &config.barostat {
        println!("  barostat: {}", barostat.name());
    }
    if let Some(run) = &config.run {
        println!("  steps to run: {}", run.n_steps);
    }
    Ok(())
}
