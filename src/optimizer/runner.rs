use crate::assignment::Assignment;
use crate::config::SearchParams;
use crate::error::{SeatError, SfResult};
use crate::optimizer::{mutation, Replica};
use crate::scorer::Scorer;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq)]
pub struct AnnealOptions {
    pub base_temperature: f64,
    pub final_temperature: f64,
    pub cooling_rate: f64,
    pub internal_iterations: usize,
    pub swap_count: usize,
    pub ladder_size: usize,
    pub seed: Option<u64>,
}

impl Default for AnnealOptions {
    fn default() -> Self {
        Self::from(&SearchParams::default())
    }
}

impl From<&SearchParams> for AnnealOptions {
    fn from(params: &SearchParams) -> Self {
        Self {
            base_temperature: params.base_temperature,
            final_temperature: params.final_temperature,
            cooling_rate: params.cooling_rate,
            internal_iterations: params.iterations,
            swap_count: params.swaps,
            ladder_size: params.annealers,
            seed: params.seed,
        }
    }
}

impl AnnealOptions {
    /// Rejects parameters that would never terminate or divide by zero.
    pub fn validate(&self) -> SfResult<()> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(SeatError::Config(format!(
                "cooling rate must be in (0, 1), got {}",
                self.cooling_rate
            )));
        }
        if !(self.base_temperature.is_finite() && self.base_temperature > 0.0) {
            return Err(SeatError::Config(format!(
                "base temperature must be finite and positive, got {}",
                self.base_temperature
            )));
        }
        if !(self.final_temperature.is_finite() && self.final_temperature > 0.0) {
            return Err(SeatError::Config(format!(
                "final temperature must be finite and positive, got {}",
                self.final_temperature
            )));
        }
        if self.ladder_size < 1 {
            return Err(SeatError::Config("at least one annealer is required".into()));
        }
        Ok(())
    }

    /// Number of cooling rounds the schedule will run.
    pub fn round_count(&self) -> usize {
        let mut temperature = self.base_temperature;
        let mut rounds = 0;
        while temperature > self.final_temperature {
            temperature *= self.cooling_rate;
            rounds += 1;
        }
        rounds
    }
}

/// Snapshot handed to a [`ProgressCallback`] after each exchange pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundReport {
    pub round: usize,
    pub base_temperature: f64,
    pub coldest_score: f64,
    pub best_score: f64,
    pub accepted: usize,
    pub proposed: usize,
    pub exchanges: usize,
}

/// Receives a report between rounds. It cannot stop the schedule.
pub trait ProgressCallback: Send + Sync {
    fn on_round(&self, report: &RoundReport);
}

impl<T: ProgressCallback + ?Sized> ProgressCallback for &T {
    fn on_round(&self, report: &RoundReport) {
        (**self).on_round(report)
    }
}

pub struct NoProgress;

impl ProgressCallback for NoProgress {
    fn on_round(&self, _report: &RoundReport) {}
}

#[derive(Debug, Clone)]
pub struct OptimizationResult {
    pub assignment: Assignment,
    pub score: f64,
    pub initial_score: f64,
    pub rounds: usize,
}

/// Single hottest-to-coldest sweep: whenever a hotter rung holds a better
/// solution than its colder neighbour, their (assignment, score) pairs
/// trade places. Temperatures and generators stay with their rung.
pub fn exchange_pass(replicas: &mut [Replica]) -> usize {
    let mut exchanges = 0;

    for i in (1..replicas.len()).rev() {
        if replicas[i].score > replicas[i - 1].score {
            let (colder, hotter) = replicas.split_at_mut(i);
            let cold = &mut colder[i - 1];
            let hot = &mut hotter[0];

            std::mem::swap(&mut cold.assignment, &mut hot.assignment);
            std::mem::swap(&mut cold.score, &mut hot.score);
            exchanges += 1;
        }
    }

    exchanges
}

pub struct Optimizer {
    scorer: Arc<Scorer>,
    options: AnnealOptions,
}

impl Optimizer {
    pub fn new(scorer: Arc<Scorer>, options: AnnealOptions) -> Self {
        Self { scorer, options }
    }

    pub fn run<CB: ProgressCallback>(&self, callback: CB) -> SfResult<OptimizationResult> {
        let opts = &self.options;
        opts.validate()?;

        // 1. Shared random start, cloned onto every rung
        let mut rng = if let Some(s) = opts.seed {
            fastrand::Rng::with_seed(s.wrapping_add(9999))
        } else {
            fastrand::Rng::new()
        };
        let initial = mutation::random_assignment(
            &mut rng,
            &self.scorer.capacities,
            self.scorer.people_count,
        )?;

        let mut replicas: Vec<Replica> = (0..opts.ladder_size)
            .map(|i| {
                Replica::new(
                    self.scorer.clone(),
                    initial.clone(),
                    opts.base_temperature,
                    opts.swap_count,
                    opts.seed.map(|s| s.wrapping_add(i as u64)),
                )
            })
            .collect();
        let initial_score = replicas[0].score;

        info!(
            "Annealing {} people over {} tables with {} replicas ({} objective, start {:.2})",
            self.scorer.people_count,
            self.scorer.capacities.len(),
            opts.ladder_size,
            self.scorer.objective,
            initial_score
        );

        // 2. Cooling loop
        let start_time = Instant::now();
        let mut base_temperature = opts.base_temperature;
        let mut round = 0;

        while base_temperature > opts.final_temperature {
            // A. Evolve every rung; par_iter_mut is the round barrier
            let (accepted, proposed) = replicas
                .par_iter_mut()
                .enumerate()
                .map(|(i, r)| {
                    r.temperature = base_temperature * 2f64.powi(i as i32);
                    r.evolve(opts.internal_iterations)
                })
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1));

            // B. Move better solutions towards the cold end
            let exchanges = exchange_pass(&mut replicas);

            let report = RoundReport {
                round,
                base_temperature,
                coldest_score: replicas[0].score,
                best_score: replicas
                    .iter()
                    .map(|r| r.score)
                    .fold(f64::NEG_INFINITY, f64::max),
                accepted,
                proposed,
                exchanges,
            };
            debug!(
                "Round {:4} | T {:.6} | Cold: {:.1} | Best: {:.1} | accepted {}/{} | swaps {}",
                round,
                base_temperature,
                report.coldest_score,
                report.best_score,
                accepted,
                proposed,
                exchanges
            );
            callback.on_round(&report);

            // C. Cool
            base_temperature *= opts.cooling_rate;
            round += 1;
        }

        let coldest = replicas.swap_remove(0);
        info!(
            "Finished {} rounds in {:.2?}: score {:.2} (start {:.2})",
            round,
            start_time.elapsed(),
            coldest.score,
            initial_score
        );

        Ok(OptimizationResult {
            assignment: coldest.assignment,
            score: coldest.score,
            initial_score,
            rounds: round,
        })
    }
}
