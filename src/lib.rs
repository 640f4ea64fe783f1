//! Tune the parameters of a stochastic black-box simulation with a Metropolis chain.
//!
//! The simulation maps a parameter vector to a configuration of particles, and a
//! cost function compares that configuration to a target. Every candidate is
//! simulated exactly once, and the chain keeps a record of the lowest cost it has
//! seen.

pub(crate) mod acceptance;
pub(crate) mod bounds;
pub(crate) mod chain;
pub(crate) mod cost;
pub(crate) mod error;
pub(crate) mod particle;
pub(crate) mod problem;
pub(crate) mod proposal;
pub(crate) mod sampler;
pub(crate) mod settings;
pub(crate) mod simulate;

pub use acceptance::{accept, acceptance_probability};
pub use bounds::Bounds;
pub use chain::{BestFound, ChainOutput, ChainStats, MetropolisChain, Progress, Trajectory};
pub use cost::{CostFunction, TargetCost};
pub use error::McmcError;
pub use particle::{Configuration, Particle};
pub use problem::Problem;
pub use proposal::GaussianWalk;
pub use sampler::{chain_rng, run_chain, sample, sample_parallel, RunOutput};
pub use settings::Settings;
pub use simulate::{NoisySimulation, Simulation};
