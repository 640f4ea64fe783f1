use criterion::{black_box, criterion_group, criterion_main, Criterion};
use particle_mcmc::{
    chain_rng, GaussianWalk, MetropolisChain, Problem, Settings, Simulation,
};

fn criterion_benchmark(c: &mut Criterion) {
    let settings = Settings::default();
    let problem = Problem::reference(&settings).unwrap();

    let mut rng = chain_rng(42, 0);
    let theta = problem.init_theta();
    c.bench_function("simulate 4 particles", |b| {
        b.iter(|| problem.simulation().simulate(black_box(&theta), &mut rng))
    });

    let walk = GaussianWalk::new(settings.proposal_std_dev, &settings.bounds);
    let mut chain = MetropolisChain::new(&problem, walk, chain_rng(42, 0), 0, false, 0);
    c.bench_function("chain step", |b| b.iter(|| black_box(chain.draw())));

    c.bench_function("chain 10000 steps with trajectory", |b| {
        b.iter(|| {
            let mut chain =
                MetropolisChain::new(&problem, walk, chain_rng(42, 0), 0, true, 10_000);
            for _ in 1..10_000 {
                chain.draw();
            }
            black_box(chain.finish())
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
