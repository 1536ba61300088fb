use criterion::{criterion_group, criterion_main, Criterion};
use seatforge::optimizer::{mutation, Replica};
use seatforge::problem::{Person, Problem};
use seatforge::scorer::{Objective, Scorer};
use std::hint::black_box;
use std::sync::Arc;

fn setup_problem() -> Problem {
    // 120 guests at 12 tables of 10, each naming three others
    let people = (0..120)
        .map(|i| Person {
            name: format!("guest_{}", i),
            preferences: vec![
                format!("guest_{}", (i + 1) % 120),
                format!("guest_{}", (i + 7) % 120),
                format!("guest_{}", (i * 13 + 5) % 120),
            ],
        })
        .collect();

    Problem {
        people,
        tables: vec![10; 12],
        companions: vec![],
    }
}

fn bench_scoring(c: &mut Criterion) {
    let problem = setup_problem();
    let scorer = Scorer::new(&problem, Objective::Hybrid).unwrap();
    let mut rng = fastrand::Rng::with_seed(42);
    let assignment = mutation::random_assignment(&mut rng, &problem.tables, 120).unwrap();

    c.bench_function("hybrid_score_120", |b| {
        b.iter(|| scorer.score(black_box(&assignment)))
    });

    c.bench_function("neighbour_1_swap_120", |b| {
        b.iter(|| mutation::neighbour(&mut rng, black_box(&assignment), 1))
    });
}

fn bench_chain(c: &mut Criterion) {
    let problem = setup_problem();
    let scorer = Arc::new(Scorer::new(&problem, Objective::Hybrid).unwrap());
    let mut rng = fastrand::Rng::with_seed(7);
    let assignment = mutation::random_assignment(&mut rng, &problem.tables, 120).unwrap();

    c.bench_function("replica_evolve_1000", |b| {
        b.iter(|| {
            let mut replica = Replica::new(scorer.clone(), assignment.clone(), 1.0, 1, Some(1));
            replica.evolve(black_box(1000))
        })
    });
}

criterion_group!(benches, bench_scoring, bench_chain);
criterion_main!(benches);
