use thiserror::Error;

/// A misconfigured run. These are rejected once, before any chain starts.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum McmcError {
    #[error("simulation takes {params} parameters but places {particles} particles")]
    ParameterMismatch { params: usize, particles: usize },
    #[error("target configuration has {target} particles, expected {particles}")]
    TargetMismatch { target: usize, particles: usize },
    #[error("bounds must be finite and non-empty, got x in [{x_min}, {x_max}], y in [{y_min}, {y_max}]")]
    InvalidBounds {
        x_min: f64,
        x_max: f64,
        y_min: f64,
        y_max: f64,
    },
    #[error("{name} must be finite and non-negative, got {value}")]
    InvalidSpread { name: &'static str, value: f64 },
    #[error("the simulation must place at least one particle")]
    NoParticles,
    #[error("a chain needs at least one step")]
    NoSteps,
    #[error("at least one chain must be sampled")]
    NoChains,
}

pub type Result<T> = std::result::Result<T, McmcError>;
