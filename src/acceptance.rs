use rand::Rng;

/// Metropolis ratio for moving from a state with `old_cost` to one with `new_cost`.
///
/// Costs play the role of energies at a fixed temperature of one. The value is
/// not capped at one; anything at or above one means the move is always taken.
#[inline]
pub fn acceptance_probability(new_cost: f64, old_cost: f64) -> f64 {
    (old_cost - new_cost).exp()
}

/// Draw `u ~ U[0, 1)` and accept iff `u < p`.
///
/// The draw happens even when the move is certain to be accepted, so the
/// number of random numbers consumed per step does not depend on the costs.
pub fn accept<R: Rng + ?Sized>(probability: f64, rng: &mut R) -> bool {
    let u: f64 = rng.random();
    u < probability
}
