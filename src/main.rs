use anyhow::{Context, Result};
use itertools::Itertools;
use particle_mcmc::{sample, CostFunction, Problem, Settings, Simulation};
use std::env::VarError;
use tracing_subscriber::EnvFilter;

const SEED_VAR: &str = "PARTICLE_MCMC_SEED";

/// An unset variable means an unseeded run. Anything set must be a valid seed.
fn parse_seed(var: std::result::Result<String, VarError>) -> Result<Option<u64>> {
    match var {
        Ok(value) => {
            let seed = value
                .parse::<u64>()
                .with_context(|| format!("{SEED_VAR} must be an unsigned integer"))?;
            Ok(Some(seed))
        }
        Err(VarError::NotPresent) => Ok(None),
        Err(err @ VarError::NotUnicode(_)) => {
            Err(err).with_context(|| format!("{SEED_VAR} is not valid unicode"))
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let seed = parse_seed(std::env::var(SEED_VAR))?;
    let settings = Settings {
        seed,
        ..Default::default()
    };
    let problem = Problem::reference(&settings).context("Invalid default settings")?;

    let run = sample(&problem, &settings)?;
    let best = &run.best_chain().best;
    tracing::info!("Predicted theta: {:?}", best.theta);
    tracing::info!("Predicted particles: [{}]", best.configuration.iter().join(", "));
    tracing::info!("Expected: [{}]", problem.cost().target().iter().join(", "));
    tracing::info!("Predicted cost: {}", best.cost);

    let ideal_theta = settings.bounds.ideal_theta();
    let mut rng = particle_mcmc::chain_rng(run.seed, settings.num_chains as u64);
    let particles = problem.simulation().simulate(&ideal_theta, &mut rng);
    tracing::info!("Ideal case");
    tracing::info!("Best theta: {:?}", ideal_theta);
    tracing::info!("Simulated particles: [{}]", particles.iter().join(", "));
    tracing::info!("Cost: {}", problem.cost().cost(&particles));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::ffi::OsString;

    #[test]
    fn seed_from_env() -> Result<()> {
        assert_eq!(parse_seed(Ok("17".to_string()))?, Some(17));
        assert_eq!(parse_seed(Err(VarError::NotPresent))?, None);
        assert!(parse_seed(Ok("-3".to_string())).is_err());
        assert!(parse_seed(Err(VarError::NotUnicode(OsString::from("x")))).is_err());
        Ok(())
    }
}
