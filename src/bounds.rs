use crate::particle::Particle;

/// Axis-aligned rectangle that every simulated particle is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self {
            x_min: 0.,
            x_max: 9.,
            y_min: 0.,
            y_max: 9.,
        }
    }
}

impl Bounds {
    pub fn new(x_min: f64, x_max: f64, y_min: f64, y_max: f64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    /// Lower limit for every parameter component.
    pub fn theta_min(&self) -> f64 {
        (self.x_min + self.y_min) / 2.
    }

    /// Upper limit for every parameter component.
    pub fn theta_max(&self) -> f64 {
        (self.x_max + self.y_max) / 2.
    }

    pub fn theta_mid(&self) -> f64 {
        (self.theta_min() + self.theta_max()) / 2.
    }

    pub fn clamp_theta(&self, value: f64) -> f64 {
        value.clamp(self.theta_min(), self.theta_max())
    }

    pub fn clamp_x(&self, x: f64) -> f64 {
        x.clamp(self.x_min, self.x_max)
    }

    pub fn clamp_y(&self, y: f64) -> f64 {
        y.clamp(self.y_min, self.y_max)
    }

    pub fn contains(&self, particle: &Particle) -> bool {
        (self.x_min..=self.x_max).contains(&particle.x())
            && (self.y_min..=self.y_max).contains(&particle.y())
    }

    /// The four corners, starting top right and going clockwise.
    ///
    /// This is the order the reference simulation emits its particles in when
    /// driven by [`Bounds::ideal_theta`].
    pub fn corners(&self) -> Vec<Particle> {
        vec![
            Particle::new(self.x_max, self.y_max),
            Particle::new(self.x_max, self.y_min),
            Particle::new(self.x_min, self.y_min),
            Particle::new(self.x_min, self.y_max),
        ]
    }

    /// Parameters that place four noise-free particles exactly on [`Bounds::corners`].
    pub fn ideal_theta(&self) -> Vec<f64> {
        vec![self.x_max, self.y_max, self.x_min, self.y_min]
    }

    pub(crate) fn is_valid(&self) -> bool {
        [self.x_min, self.x_max, self.y_min, self.y_max]
            .iter()
            .all(|v| v.is_finite())
            && self.x_min < self.x_max
            && self.y_min < self.y_max
    }
}
