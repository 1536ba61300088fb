pub mod engine;
pub mod types;

pub use self::types::{ScoreSummary, Tally};
use crate::assignment::Assignment;
use crate::error::{SeatError, SfResult};
use crate::problem::{PersonId, Problem};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};

/// Which objective the search maximises. Fixed for a whole run.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    EnumString,
    Display,
    Serialize,
    Deserialize,
    clap::ValueEnum,
)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum Objective {
    /// Total number of satisfied preferences.
    Sum,
    /// Number of people with at least one satisfied preference.
    Count,
    /// Count first, then sum.
    #[default]
    Hybrid,
}

impl Objective {
    pub fn parse(name: &str) -> SfResult<Self> {
        Self::from_str(name).map_err(|_| {
            let known: Vec<String> = Self::iter().map(|o| o.to_string()).collect();
            SeatError::Config(format!(
                "unknown objective function '{}' (expected one of: {})",
                name,
                known.join(", ")
            ))
        })
    }
}

/// Read-only, index-resolved view of a problem used by every replica.
#[derive(Debug, Clone)]
pub struct Scorer {
    pub objective: Objective,
    pub capacities: Vec<usize>,
    pub people_count: usize,
    /// Raw declared preference count, unresolvable names included.
    pub preference_count: usize,
    /// Resolved preferences; names matching nobody are dropped.
    pub preferences: Vec<Vec<PersonId>>,
    pub companions: Vec<Option<PersonId>>,
    pub hybrid_weight: f64,
}

impl Scorer {
    pub fn new(problem: &Problem, objective: Objective) -> SfResult<Self> {
        problem.validate()?;

        let index = problem.name_index();
        let preferences = problem
            .people
            .iter()
            .map(|p| {
                p.preferences
                    .iter()
                    .filter_map(|name| index.get(name.as_str()).copied())
                    .collect()
            })
            .collect();

        let mut companions = vec![None; problem.headcount()];
        for (one, two) in problem.companion_map()? {
            companions[one] = Some(two);
        }

        let people_count = problem.headcount();
        let preference_count = problem.total_preferences();

        Ok(Self {
            objective,
            capacities: problem.tables.clone(),
            people_count,
            preference_count,
            preferences,
            companions,
            hybrid_weight: people_count.max(preference_count) as f64,
        })
    }

    /// Score under the selected objective. Higher is better.
    #[inline(always)]
    pub fn score(&self, assignment: &Assignment) -> f64 {
        let tally = engine::tally(self, assignment);
        match self.objective {
            Objective::Sum => engine::sum_score(&tally),
            Objective::Count => engine::count_score(&tally),
            Objective::Hybrid => engine::hybrid_score(&tally, self.hybrid_weight),
        }
    }

    pub fn sum_score(&self, assignment: &Assignment) -> f64 {
        engine::sum_score(&engine::tally(self, assignment))
    }

    pub fn count_score(&self, assignment: &Assignment) -> f64 {
        engine::count_score(&engine::tally(self, assignment))
    }

    pub fn hybrid_score(&self, assignment: &Assignment) -> f64 {
        engine::hybrid_score(&engine::tally(self, assignment), self.hybrid_weight)
    }

    pub fn companion_violations(&self, assignment: &Assignment) -> usize {
        engine::tally(self, assignment).companion_violations
    }

    pub fn summary(&self, assignment: &Assignment) -> ScoreSummary {
        let tally = engine::tally(self, assignment);
        let count = engine::count_score(&tally) as i64;
        ScoreSummary {
            satisfied_people: count,
            unsatisfied_people: self.people_count as i64 - count,
            satisfied_preferences: engine::sum_score(&tally) as i64,
            companion_violations: tally.companion_violations,
        }
    }
}
