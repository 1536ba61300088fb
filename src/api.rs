use crate::assignment::Assignment;
use crate::error::SfResult;
use crate::optimizer::{AnnealOptions, Optimizer, ProgressCallback};
use crate::problem::{Problem, SeatingPlan};
use crate::scorer::{Objective, ScoreSummary, Scorer};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::sync::Arc;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SeatedTable {
    pub index: usize,
    pub capacity: usize,
    pub people: Vec<String>,
}

/// Final seating plus the numbers a report needs.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Solution {
    pub objective: Objective,
    pub score: f64,
    pub initial_score: f64,
    pub rounds: usize,
    pub summary: ScoreSummary,
    pub tables: Vec<SeatedTable>,
}

/// Score of an existing seating plan.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Evaluation {
    pub objective: Objective,
    pub score: f64,
    pub summary: ScoreSummary,
    pub tables: Vec<SeatedTable>,
}

pub fn seated_tables(problem: &Problem, assignment: &Assignment) -> Vec<SeatedTable> {
    assignment
        .tables()
        .iter()
        .zip(assignment.names(problem))
        .enumerate()
        .map(|(index, (table, names))| SeatedTable {
            index,
            capacity: table.capacity,
            people: names.into_iter().map(str::to_string).collect(),
        })
        .collect()
}

/// Validates everything, then runs the replica-exchange search.
pub fn solve<CB: ProgressCallback>(
    problem: &Problem,
    objective: Objective,
    options: AnnealOptions,
    callback: CB,
) -> SfResult<Solution> {
    options.validate()?;
    let scorer = Arc::new(Scorer::new(problem, objective)?);

    let optimizer = Optimizer::new(scorer.clone(), options);
    let result = optimizer.run(callback)?;

    Ok(Solution {
        objective,
        score: result.score,
        initial_score: result.initial_score,
        rounds: result.rounds,
        summary: scorer.summary(&result.assignment),
        tables: seated_tables(problem, &result.assignment),
    })
}

pub fn evaluate(problem: &Problem, objective: Objective, plan: &SeatingPlan) -> SfResult<Evaluation> {
    let scorer = Scorer::new(problem, objective)?;
    let assignment = Assignment::from_problem_seats(problem, plan.resolve(problem)?)?;

    Ok(Evaluation {
        objective,
        score: scorer.score(&assignment),
        summary: scorer.summary(&assignment),
        tables: seated_tables(problem, &assignment),
    })
}

/// Writes one row per seat: `table,capacity,seat,name`.
pub fn write_csv<W: Write>(writer: W, tables: &[SeatedTable]) -> SfResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["table", "capacity", "seat", "name"])?;

    for table in tables {
        for (seat, name) in table.people.iter().enumerate() {
            wtr.write_record([
                table.index.to_string(),
                table.capacity.to_string(),
                seat.to_string(),
                name.clone(),
            ])?;
        }
    }

    wtr.flush()?;
    Ok(())
}
