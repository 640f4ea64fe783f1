use crate::particle::{Configuration, Particle};

/// Scores a simulated configuration. Lower is better, and the minimum is zero.
pub trait CostFunction: Send + Sync {
    /// Number of particles every scored configuration must contain.
    fn num_particles(&self) -> usize;

    fn cost(&self, configuration: &[Particle]) -> f64;
}

/// Sum of Manhattan distances between each particle and its counterpart in a
/// fixed target.
///
/// Particles are compared slot by slot. The same positions in a different
/// order give a different cost; no assignment between the two sets is searched.
#[derive(Debug, Clone)]
pub struct TargetCost {
    target: Configuration,
}

impl TargetCost {
    pub fn new(target: Configuration) -> Self {
        Self { target }
    }

    pub fn target(&self) -> &[Particle] {
        &self.target
    }
}

impl CostFunction for TargetCost {
    fn num_particles(&self) -> usize {
        self.target.len()
    }

    fn cost(&self, configuration: &[Particle]) -> f64 {
        assert!(configuration.len() == self.target.len());
        self.target
            .iter()
            .zip(configuration)
            .map(|(expected, actual)| expected.manhattan_distance(actual))
            .sum()
    }
}
