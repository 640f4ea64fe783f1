use crate::{
    bounds::Bounds,
    error::{McmcError, Result},
};

/// Settings for a Metropolis optimization run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    /// Number of particles the simulation places.
    pub num_particles: usize,
    /// Length of the parameter vector. The reference simulation needs one
    /// parameter per particle.
    pub num_params: usize,
    /// Spatial bounds for particles. Parameters are limited to
    /// `[bounds.theta_min(), bounds.theta_max()]`.
    pub bounds: Bounds,
    /// Standard deviation of the per-component random walk proposal.
    pub proposal_std_dev: f64,
    /// Noise level of the reference simulation.
    pub base_spread: f64,
    /// Length of each chain, counting the initial state.
    pub num_steps: u64,
    /// Seed for all random draws. A seed is drawn from the OS and logged if
    /// this is `None`.
    pub seed: Option<u64>,
    /// Number of independent chains run by [`crate::sample_parallel`].
    pub num_chains: usize,
    /// Keep the parameters and cost of every step, not only the best one.
    pub store_trajectory: bool,
    /// Log progress every this many steps. Zero disables progress messages.
    pub log_interval: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_particles: 4,
            num_params: 4,
            bounds: Bounds::default(),
            proposal_std_dev: 0.1,
            base_spread: 0.75,
            num_steps: 1_000_000,
            seed: None,
            num_chains: 1,
            store_trajectory: true,
            log_interval: 100_000,
        }
    }
}

impl Settings {
    pub fn validate(&self) -> Result<()> {
        if self.num_particles == 0 {
            return Err(McmcError::NoParticles);
        }
        if self.num_params != self.num_particles {
            return Err(McmcError::ParameterMismatch {
                params: self.num_params,
                particles: self.num_particles,
            });
        }
        if !self.bounds.is_valid() {
            let Bounds {
                x_min,
                x_max,
                y_min,
                y_max,
            } = self.bounds;
            return Err(McmcError::InvalidBounds {
                x_min,
                x_max,
                y_min,
                y_max,
            });
        }
        check_spread("proposal_std_dev", self.proposal_std_dev)?;
        check_spread("base_spread", self.base_spread)?;
        if self.num_steps == 0 {
            return Err(McmcError::NoSteps);
        }
        if self.num_chains == 0 {
            return Err(McmcError::NoChains);
        }
        Ok(())
    }
}

fn check_spread(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0. {
        Ok(())
    } else {
        Err(McmcError::InvalidSpread { name, value })
    }
}
