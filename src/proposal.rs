use rand::Rng;
use rand_distr::StandardNormal;

use crate::bounds::Bounds;

/// Gaussian random walk in parameter space.
///
/// Every component moves independently by `std_dev * z` and is then clamped
/// into `[theta_min, theta_max]`. Clamping makes the walk slightly asymmetric
/// next to the boundary; the acceptance test does not correct for that.
#[derive(Debug, Clone, Copy)]
pub struct GaussianWalk {
    std_dev: f64,
    theta_min: f64,
    theta_max: f64,
}

impl GaussianWalk {
    pub fn new(std_dev: f64, bounds: &Bounds) -> Self {
        Self {
            std_dev,
            theta_min: bounds.theta_min(),
            theta_max: bounds.theta_max(),
        }
    }

    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Write a proposal for `theta` into `out`.
    pub fn propose_into<R: Rng + ?Sized>(&self, theta: &[f64], rng: &mut R, out: &mut [f64]) {
        assert!(theta.len() == out.len());
        theta.iter().zip(out.iter_mut()).for_each(|(&current, out)| {
            let z: f64 = rng.sample(StandardNormal);
            *out = (current + self.std_dev * z).clamp(self.theta_min, self.theta_max);
        });
    }

    pub fn propose<R: Rng + ?Sized>(&self, theta: &[f64], rng: &mut R) -> Box<[f64]> {
        let mut proposal: Box<[f64]> = vec![0f64; theta.len()].into();
        self.propose_into(theta, rng, &mut proposal);
        proposal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn zero_spread_is_identity() {
        let walk = GaussianWalk::new(0., &Bounds::default());
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let theta = [0., 3.25, 9., 4.5];
        assert_eq!(&*walk.propose(&theta, &mut rng), &theta[..]);
    }

    #[test]
    fn centered_on_current() {
        let walk = GaussianWalk::new(0.1, &Bounds::default());
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let theta = [4.5; 4];
        let n = 20_000;
        let mut mean = [0f64; 4];
        for _ in 0..n {
            let proposal = walk.propose(&theta, &mut rng);
            mean.iter_mut()
                .zip(proposal.iter())
                .for_each(|(m, p)| *m += p / n as f64);
        }
        for m in mean {
            assert_abs_diff_eq!(m, 4.5, epsilon = 0.01);
        }
    }

    proptest! {
        #[test]
        fn stays_in_theta_range(
            theta in prop::collection::vec(0f64..=9f64, 4),
            std_dev in 0f64..50f64,
            seed in any::<u64>(),
        ) {
            let bounds = Bounds::default();
            let walk = GaussianWalk::new(std_dev, &bounds);
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let proposal = walk.propose(&theta, &mut rng);
            prop_assert_eq!(proposal.len(), theta.len());
            for value in proposal.iter() {
                prop_assert!(*value >= bounds.theta_min());
                prop_assert!(*value <= bounds.theta_max());
            }
        }
    }
}
