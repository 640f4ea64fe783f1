use anyhow::{Context, Result};
use itertools::Itertools;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::{prelude::*, ThreadPoolBuilder};
use std::time::Instant;

use crate::{
    chain::{ChainOutput, MetropolisChain},
    cost::CostFunction,
    problem::Problem,
    proposal::GaussianWalk,
    settings::Settings,
    simulate::Simulation,
};

/// The finished chains of a run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    /// The seed all chain streams were derived from.
    pub seed: u64,
    pub chains: Vec<ChainOutput>,
}

impl RunOutput {
    /// The chain with the lowest best-found cost.
    pub fn best_chain(&self) -> &ChainOutput {
        let idx = self
            .chains
            .iter()
            .position_min_by(|a, b| a.best.cost.total_cmp(&b.best.cost))
            .expect("A run contains at least one chain");
        &self.chains[idx]
    }
}

fn resolve_seed(settings: &Settings) -> u64 {
    match settings.seed {
        Some(seed) => seed,
        None => {
            let seed: u64 = rand::rng().random();
            tracing::info!(seed, "No seed given, drawing one from the OS");
            seed
        }
    }
}

/// Random number stream for a chain. Chains of the same run share the seed
/// but never the stream.
pub fn chain_rng(seed: u64, chain_id: u64) -> ChaCha8Rng {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    rng.set_stream(chain_id);
    rng
}

/// Run one chain to completion with the given random number generator.
pub fn run_chain<S, C, R>(
    problem: &Problem<S, C>,
    settings: &Settings,
    chain_id: u64,
    rng: R,
) -> Result<ChainOutput>
where
    S: Simulation,
    C: CostFunction,
    R: Rng,
{
    settings.validate().context("Invalid sampler settings")?;
    let simulation = problem.simulation();
    if settings.num_params != problem.dim() {
        anyhow::bail!(
            "Settings ask for {} parameters but the simulation takes {}",
            settings.num_params,
            problem.dim()
        );
    }
    if settings.num_particles != simulation.num_particles() {
        anyhow::bail!(
            "Settings ask for {} particles but the simulation places {}",
            settings.num_particles,
            simulation.num_particles()
        );
    }
    if settings.bounds != *simulation.bounds() {
        anyhow::bail!(
            "Settings bounds {:?} differ from the simulation bounds {:?}",
            settings.bounds,
            simulation.bounds()
        );
    }

    let start = Instant::now();
    let walk = GaussianWalk::new(settings.proposal_std_dev, simulation.bounds());
    let capacity = if settings.store_trajectory {
        settings.num_steps as usize
    } else {
        0
    };
    let mut chain = MetropolisChain::new(
        problem,
        walk,
        rng,
        chain_id,
        settings.store_trajectory,
        capacity,
    );
    tracing::info!(
        chain = chain_id,
        steps = settings.num_steps,
        initial_cost = chain.cost(),
        "Starting chain"
    );

    for _ in 1..settings.num_steps {
        let progress = chain.draw();
        if settings.log_interval > 0 && progress.step % settings.log_interval == 0 {
            tracing::info!(
                chain = chain_id,
                step = progress.step,
                cost = progress.cost,
                best_cost = progress.best_cost,
                acceptance_rate = chain.stats().acceptance_rate(),
                "Chain progress"
            );
        }
    }

    let output = chain.finish();
    tracing::info!(
        chain = chain_id,
        best_cost = output.best.cost,
        acceptance_rate = output.stats.acceptance_rate(),
        elapsed = ?start.elapsed(),
        "Finished chain"
    );
    Ok(output)
}

/// Run a single chain, seeded from `settings.seed`.
pub fn sample<S, C>(problem: &Problem<S, C>, settings: &Settings) -> Result<RunOutput>
where
    S: Simulation,
    C: CostFunction,
{
    let seed = resolve_seed(settings);
    let output = run_chain(problem, settings, 0, chain_rng(seed, 0))?;
    Ok(RunOutput {
        seed,
        chains: vec![output],
    })
}

/// Run `settings.num_chains` independent chains on a thread pool.
///
/// Chain `i` uses stream `i` of the run seed, so its output does not depend on
/// how many chains run next to it. Chain 0 matches [`sample`] with the same seed.
pub fn sample_parallel<S, C>(problem: &Problem<S, C>, settings: &Settings) -> Result<RunOutput>
where
    S: Simulation,
    C: CostFunction,
{
    settings.validate().context("Invalid sampler settings")?;
    let seed = resolve_seed(settings);
    let pool = ThreadPoolBuilder::new()
        .num_threads(settings.num_chains)
        .build()
        .context("Could not create thread pool for chains")?;

    let chains: Vec<ChainOutput> = pool.install(|| {
        (0..settings.num_chains)
            .into_par_iter()
            .map(|idx| {
                let chain_id = idx as u64;
                run_chain(problem, settings, chain_id, chain_rng(seed, chain_id))
            })
            .collect::<Result<Vec<_>>>()
    })?;

    let run = RunOutput { seed, chains };
    let best = run.best_chain();
    tracing::info!(
        chains = run.chains.len(),
        best_chain = best.chain_id,
        best_cost = best.best.cost,
        "Finished all chains"
    );
    Ok(run)
}
