pub mod mutation;
pub mod runner;

pub use self::runner::{
    exchange_pass, AnnealOptions, NoProgress, OptimizationResult, Optimizer, ProgressCallback,
    RoundReport,
};

use crate::assignment::Assignment;
use crate::scorer::Scorer;
use std::sync::Arc;

/// Metropolis acceptance for a candidate that is not strictly better.
#[inline(always)]
pub fn acceptance_probability(current: f64, candidate: f64, temperature: f64) -> f64 {
    ((candidate - current) / temperature).exp()
}

/// One rung of the temperature ladder: a chain state plus the generator it
/// owns for the whole run.
pub struct Replica {
    pub scorer: Arc<Scorer>,
    pub assignment: Assignment,
    pub score: f64,
    pub temperature: f64,
    pub swap_count: usize,
    pub rng: fastrand::Rng,
}

impl Replica {
    pub fn new(
        scorer: Arc<Scorer>,
        assignment: Assignment,
        temperature: f64,
        swap_count: usize,
        seed: Option<u64>,
    ) -> Self {
        let rng = if let Some(s) = seed {
            fastrand::Rng::with_seed(s)
        } else {
            fastrand::Rng::new()
        };
        let score = scorer.score(&assignment);

        Self {
            scorer,
            assignment,
            score,
            temperature,
            swap_count,
            rng,
        }
    }

    /// Runs `steps` Metropolis iterations at the current temperature.
    /// Returns `(accepted, proposed)`.
    pub fn evolve(&mut self, steps: usize) -> (usize, usize) {
        let mut accepted = 0;

        for _ in 0..steps {
            let candidate = mutation::neighbour(&mut self.rng, &self.assignment, self.swap_count);
            let candidate_score = self.scorer.score(&candidate);

            let accept = candidate_score > self.score
                || self.rng.f64()
                    < acceptance_probability(self.score, candidate_score, self.temperature);

            if accept {
                self.assignment = candidate;
                self.score = candidate_score;
                accepted += 1;
            }
        }

        (accepted, steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acceptance_probability_bounds() {
        assert_eq!(acceptance_probability(5.0, 5.0, 1.0), 1.0);
        let p = acceptance_probability(5.0, 4.0, 1.0);
        assert!(p > 0.0 && p < 1.0);
        assert!(acceptance_probability(5.0, 4.0, 0.01) < acceptance_probability(5.0, 4.0, 10.0));
    }
}
