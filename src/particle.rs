use std::fmt;

/// The state of a simulation run: one particle per slot, in a fixed order.
pub type Configuration = Vec<Particle>;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Particle {
    x: f64,
    y: f64,
}

impl Particle {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    /// `|dx| + |dy|`
    pub fn manhattan_distance(&self, other: &Particle) -> f64 {
        (self.x - other.x).abs() + (self.y - other.y).abs()
    }

    /// `dx² + dy²`
    pub fn squared_distance(&self, other: &Particle) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}, {}}}", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    #[test]
    fn distances() {
        let a = Particle::new(1., 2.);
        let b = Particle::new(4., -2.);
        assert_eq!(a.manhattan_distance(&b), 7.);
        assert_eq!(a.squared_distance(&b), 25.);
        assert_eq!(a.manhattan_distance(&a), 0.);
    }

    #[test]
    fn display() {
        assert_eq!(Particle::new(9., 0.5).to_string(), "{9, 0.5}");
    }

    proptest! {
        #[test]
        fn distances_symmetric(
            ax in -10f64..10f64, ay in -10f64..10f64,
            bx in -10f64..10f64, by in -10f64..10f64,
        ) {
            let a = Particle::new(ax, ay);
            let b = Particle::new(bx, by);
            prop_assert_eq!(a.manhattan_distance(&b), b.manhattan_distance(&a));
            prop_assert_eq!(a.squared_distance(&b), b.squared_distance(&a));
            prop_assert!(a.manhattan_distance(&b) >= 0.);
            prop_assert!(a.squared_distance(&b) >= 0.);
        }
    }
}
