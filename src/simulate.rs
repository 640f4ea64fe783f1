//! The black-box simulation whose parameters are being tuned.
//!
//! Each call is assumed to be expensive, so the chain evaluates every
//! candidate exactly once and never averages over repeated runs.

use rand::Rng;
use rand_distr::StandardNormal;

use crate::{
    bounds::Bounds,
    particle::{Configuration, Particle},
};

/// Maps a parameter vector to the resting configuration of the system.
pub trait Simulation: Send + Sync {
    /// Length of the parameter vector.
    fn dim(&self) -> usize;

    fn num_particles(&self) -> usize;

    fn bounds(&self) -> &Bounds;

    fn simulate<R: Rng + ?Sized>(&self, theta: &[f64], rng: &mut R) -> Configuration;
}

/// Reference stochastic simulation.
///
/// Particle `i` gets its x from a normal distribution around `theta[i]`, and
/// its y from a uniform distribution on `[theta[i + 1], theta[i + 1] + spread)`.
/// The y-parameter wraps around to `theta[0]` for the last particle. The y-noise
/// only ever pushes upwards. Both coordinates are clamped into the bounds.
#[derive(Debug, Clone)]
pub struct NoisySimulation {
    bounds: Bounds,
    num_particles: usize,
    spread: f64,
}

impl NoisySimulation {
    pub fn new(bounds: Bounds, num_particles: usize, spread: f64) -> Self {
        Self {
            bounds,
            num_particles,
            spread,
        }
    }

    /// A simulation without noise. Every particle lands on its means.
    pub fn noise_free(bounds: Bounds, num_particles: usize) -> Self {
        Self::new(bounds, num_particles, 0.)
    }

    pub fn spread(&self) -> f64 {
        self.spread
    }
}

impl Simulation for NoisySimulation {
    fn dim(&self) -> usize {
        self.num_particles
    }

    fn num_particles(&self) -> usize {
        self.num_particles
    }

    fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    fn simulate<R: Rng + ?Sized>(&self, theta: &[f64], rng: &mut R) -> Configuration {
        assert!(theta.len() >= self.num_particles);
        (0..self.num_particles)
            .map(|i| {
                let x_mean = theta[i];
                let y_mean = if i + 1 < theta.len() {
                    theta[i + 1]
                } else {
                    theta[0]
                };
                let z: f64 = rng.sample(StandardNormal);
                let u: f64 = rng.random();
                Particle::new(
                    self.bounds.clamp_x(x_mean + self.spread * z),
                    self.bounds.clamp_y(y_mean + self.spread * u),
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cost::{CostFunction, TargetCost};
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn ideal_without_noise_hits_corners() {
        let bounds = Bounds::default();
        let simulation = NoisySimulation::noise_free(bounds, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(42);

        let configuration = simulation.simulate(&bounds.ideal_theta(), &mut rng);
        assert_eq!(configuration, bounds.corners());
        assert_eq!(TargetCost::new(bounds.corners()).cost(&configuration), 0.);
    }

    #[test]
    fn y_wraps_to_first_parameter() {
        let bounds = Bounds::default();
        let simulation = NoisySimulation::noise_free(bounds, 4);
        let mut rng = ChaCha8Rng::seed_from_u64(0);

        let configuration = simulation.simulate(&[1., 2., 3., 4.], &mut rng);
        assert_eq!(
            configuration,
            vec![
                Particle::new(1., 2.),
                Particle::new(2., 3.),
                Particle::new(3., 4.),
                Particle::new(4., 1.),
            ]
        );
    }

    #[test]
    fn y_noise_is_upward() {
        let bounds = Bounds::default();
        let simulation = NoisySimulation::new(bounds, 4, 0.75);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let theta = [4., 4., 4., 4.];

        for _ in 0..1000 {
            for particle in simulation.simulate(&theta, &mut rng) {
                assert!(particle.y() >= 4.);
                assert!(particle.y() <= 4.75);
            }
        }
    }

    #[test]
    fn deterministic() {
        let simulation = NoisySimulation::new(Bounds::default(), 4, 0.75);
        let theta = [4.5; 4];
        let first = simulation.simulate(&theta, &mut ChaCha8Rng::seed_from_u64(3));
        let second = simulation.simulate(&theta, &mut ChaCha8Rng::seed_from_u64(3));
        assert_eq!(first, second);
    }

    proptest! {
        #[test]
        fn particles_within_bounds(
            theta in prop::collection::vec(-5f64..15f64, 4),
            spread in 0f64..20f64,
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::default();
            let simulation = NoisySimulation::new(bounds, 4, spread);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let configuration = simulation.simulate(&theta, &mut rng);
            prop_assert_eq!(configuration.len(), 4);
            for particle in &configuration {
                prop_assert!(bounds.contains(particle));
            }
        }
    }
}
