use crate::{
    cost::{CostFunction, TargetCost},
    error::{McmcError, Result},
    settings::Settings,
    simulate::{NoisySimulation, Simulation},
};

/// A simulation together with the cost used to judge its output.
///
/// Construction checks that both sides agree on the number of particles, so
/// the chain never has to.
#[derive(Debug, Clone)]
pub struct Problem<S: Simulation, C: CostFunction> {
    simulation: S,
    cost: C,
}

impl<S: Simulation, C: CostFunction> Problem<S, C> {
    pub fn new(simulation: S, cost: C) -> Result<Self> {
        if simulation.num_particles() == 0 {
            return Err(McmcError::NoParticles);
        }
        if simulation.dim() != simulation.num_particles() {
            return Err(McmcError::ParameterMismatch {
                params: simulation.dim(),
                particles: simulation.num_particles(),
            });
        }
        if cost.num_particles() != simulation.num_particles() {
            return Err(McmcError::TargetMismatch {
                target: cost.num_particles(),
                particles: simulation.num_particles(),
            });
        }
        Ok(Self { simulation, cost })
    }

    pub fn simulation(&self) -> &S {
        &self.simulation
    }

    pub fn cost(&self) -> &C {
        &self.cost
    }

    pub fn dim(&self) -> usize {
        self.simulation.dim()
    }

    /// Starting point of every chain: each component in the middle of its range.
    pub fn init_theta(&self) -> Box<[f64]> {
        vec![self.simulation.bounds().theta_mid(); self.dim()].into()
    }
}

impl Problem<NoisySimulation, TargetCost> {
    /// Four particles that should end up in the corners of the bounds.
    pub fn reference(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        let simulation = NoisySimulation::new(
            settings.bounds,
            settings.num_particles,
            settings.base_spread,
        );
        let cost = TargetCost::new(settings.bounds.corners());
        Self::new(simulation, cost)
    }
}
