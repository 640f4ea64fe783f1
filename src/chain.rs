use rand::Rng;

use crate::{
    acceptance::{accept, acceptance_probability},
    cost::CostFunction,
    particle::Configuration,
    problem::Problem,
    proposal::GaussianWalk,
    simulate::Simulation,
};

/// The lowest-cost state seen so far.
///
/// This is a greedy memo that is independent of where the chain currently is.
/// It is not a draw from the chain's stationary distribution.
#[derive(Debug, Clone, PartialEq)]
pub struct BestFound {
    pub theta: Box<[f64]>,
    pub cost: f64,
    pub configuration: Configuration,
}

/// Parameters and cost of the chain at every step, rejected steps included.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    dim: usize,
    thetas: Vec<f64>,
    costs: Vec<f64>,
}

impl Trajectory {
    fn with_capacity(dim: usize, steps: usize) -> Self {
        Self {
            dim,
            thetas: Vec::with_capacity(dim * steps),
            costs: Vec::with_capacity(steps),
        }
    }

    fn push(&mut self, theta: &[f64], cost: f64) {
        assert!(theta.len() == self.dim);
        self.thetas.extend_from_slice(theta);
        self.costs.push(cost);
    }

    pub fn len(&self) -> usize {
        self.costs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.costs.is_empty()
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn theta(&self, step: usize) -> &[f64] {
        &self.thetas[step * self.dim..(step + 1) * self.dim]
    }

    pub fn thetas(&self) -> impl Iterator<Item = &[f64]> {
        self.thetas.chunks_exact(self.dim)
    }

    pub fn costs(&self) -> &[f64] {
        &self.costs
    }
}

/// Information about a single chain step
#[derive(Debug, Clone)]
#[non_exhaustive]
pub struct Progress {
    /// Index of the chain state this step produced. The initial state is 0.
    pub step: u64,
    pub chain: u64,
    pub accepted: bool,
    /// Cost of the chain after this step.
    pub cost: f64,
    /// Cost of the proposal, whether or not it was accepted.
    pub proposal_cost: f64,
    pub accept_prob: f64,
    pub best_cost: f64,
}

/// Counts over the lifetime of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ChainStats {
    /// Number of chain states, including the initial one.
    pub num_steps: u64,
    pub num_accepted: u64,
}

impl ChainStats {
    pub fn acceptance_rate(&self) -> f64 {
        if self.num_steps <= 1 {
            return 0.;
        }
        self.num_accepted as f64 / (self.num_steps - 1) as f64
    }
}

/// Everything a finished chain exposes.
#[derive(Debug, Clone)]
pub struct ChainOutput {
    pub chain_id: u64,
    pub best: BestFound,
    pub trajectory: Option<Trajectory>,
    pub stats: ChainStats,
}

/// A single Metropolis chain over the parameters of a simulation.
///
/// The chain owns all of its state, including the random number generator,
/// so independent chains never share anything.
pub struct MetropolisChain<'problem, S, C, R>
where
    S: Simulation,
    C: CostFunction,
    R: Rng,
{
    problem: &'problem Problem<S, C>,
    walk: GaussianWalk,
    rng: R,
    chain: u64,
    theta: Box<[f64]>,
    proposal: Box<[f64]>,
    cost: f64,
    best: BestFound,
    trajectory: Option<Trajectory>,
    stats: ChainStats,
}

impl<'problem, S, C, R> MetropolisChain<'problem, S, C, R>
where
    S: Simulation,
    C: CostFunction,
    R: Rng,
{
    /// Place the chain at the middle of the parameter range and simulate once.
    ///
    /// `capacity_hint` is the expected number of steps, used to size the trajectory.
    pub fn new(
        problem: &'problem Problem<S, C>,
        walk: GaussianWalk,
        mut rng: R,
        chain: u64,
        store_trajectory: bool,
        capacity_hint: usize,
    ) -> Self {
        let theta = problem.init_theta();
        let configuration = problem.simulation().simulate(&theta, &mut rng);
        let cost = problem.cost().cost(&configuration);

        let trajectory = store_trajectory.then(|| {
            let mut trajectory = Trajectory::with_capacity(theta.len(), capacity_hint);
            trajectory.push(&theta, cost);
            trajectory
        });

        MetropolisChain {
            problem,
            walk,
            rng,
            chain,
            proposal: theta.clone(),
            best: BestFound {
                theta: theta.clone(),
                cost,
                configuration,
            },
            theta,
            cost,
            trajectory,
            stats: ChainStats {
                num_steps: 1,
                num_accepted: 0,
            },
        }
    }

    /// Propose, simulate, score, and accept or reject one new state.
    pub fn draw(&mut self) -> Progress {
        self.walk
            .propose_into(&self.theta, &mut self.rng, &mut self.proposal);
        let configuration = self
            .problem
            .simulation()
            .simulate(&self.proposal, &mut self.rng);
        let proposal_cost = self.problem.cost().cost(&configuration);
        let accept_prob = acceptance_probability(proposal_cost, self.cost);
        let accepted = accept(accept_prob, &mut self.rng);

        tracing::debug!(
            chain = self.chain,
            step = self.stats.num_steps,
            proposal = ?self.proposal,
            old_cost = self.cost,
            new_cost = proposal_cost,
            accept_prob,
            accepted,
            "chain step"
        );

        if accepted {
            std::mem::swap(&mut self.theta, &mut self.proposal);
            self.cost = proposal_cost;
            self.stats.num_accepted += 1;
            if proposal_cost < self.best.cost {
                tracing::debug!(
                    chain = self.chain,
                    step = self.stats.num_steps,
                    cost = proposal_cost,
                    "new best"
                );
                self.best = BestFound {
                    theta: self.theta.clone(),
                    cost: proposal_cost,
                    configuration,
                };
            }
        }

        if let Some(trajectory) = self.trajectory.as_mut() {
            trajectory.push(&self.theta, self.cost);
        }

        let progress = Progress {
            step: self.stats.num_steps,
            chain: self.chain,
            accepted,
            cost: self.cost,
            proposal_cost,
            accept_prob,
            best_cost: self.best.cost,
        };
        self.stats.num_steps += 1;
        progress
    }

    pub fn theta(&self) -> &[f64] {
        &self.theta
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn best(&self) -> &BestFound {
        &self.best
    }

    pub fn stats(&self) -> ChainStats {
        self.stats
    }

    pub fn trajectory(&self) -> Option<&Trajectory> {
        self.trajectory.as_ref()
    }

    pub fn finish(self) -> ChainOutput {
        ChainOutput {
            chain_id: self.chain,
            best: self.best,
            trajectory: self.trajectory,
            stats: self.stats,
        }
    }
}
