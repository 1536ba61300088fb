mod common;

use common::{four_friends, ProblemBuilder};
use rstest::rstest;
use seatforge::api;
use seatforge::error::SeatError;
use seatforge::optimizer::{AnnealOptions, NoProgress};
use seatforge::problem::{CompanionPair, SeatingPlan};
use seatforge::scorer::Objective;

fn plan(tables: &[&[&str]]) -> SeatingPlan {
    SeatingPlan {
        tables: tables
            .iter()
            .map(|t| t.iter().map(|n| n.to_string()).collect())
            .collect(),
    }
}

#[rstest]
#[case::capacity_too_small(&[2, 1], "sum to 3 but 4")]
#[case::capacity_too_large(&[3, 3], "sum to 6 but 4")]
#[case::zero_capacity(&[4, 0], "zero capacity")]
#[case::no_tables(&[], "No tables")]
fn test_rejects_bad_tables(#[case] tables: &[usize], #[case] fragment: &str) {
    let mut problem = four_friends();
    problem.tables = tables.to_vec();

    match problem.validate() {
        Err(SeatError::Validation(msg)) => assert!(msg.contains(fragment), "message: {}", msg),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[test]
fn test_rejects_duplicate_names() {
    let problem = ProblemBuilder::new()
        .person("A", &[])
        .person("A", &[])
        .tables(&[2])
        .build();
    assert!(matches!(problem.validate(), Err(SeatError::Validation(_))));
}

#[test]
fn test_rejects_unknown_companion() {
    let problem = ProblemBuilder::new()
        .person("A", &[])
        .person("B", &[])
        .tables(&[2])
        .companion("A", "Ghost")
        .build();
    let err = problem.validate().unwrap_err();
    assert!(err.to_string().contains("Ghost"));
}

#[test]
fn test_unknown_preference_is_only_a_warning() {
    let problem = ProblemBuilder::new()
        .person("A", &["Nobody"])
        .person("B", &[])
        .tables(&[2])
        .build();
    assert!(problem.validate().is_ok());
}

#[test]
fn test_solve_rejects_invalid_problem_before_search() {
    let mut problem = four_friends();
    problem.tables = vec![3, 3];
    let res = api::solve(&problem, Objective::Sum, AnnealOptions::default(), NoProgress);
    assert!(matches!(res, Err(SeatError::Validation(_))));
}

#[rstest]
#[case(0.0)]
#[case(1.0)]
#[case(2.0)]
fn test_solve_rejects_bad_cooling_rate(#[case] rate: f64) {
    let opts = AnnealOptions {
        cooling_rate: rate,
        ..AnnealOptions::default()
    };
    let res = api::solve(&four_friends(), Objective::Sum, opts, NoProgress);
    assert!(matches!(res, Err(SeatError::Config(_))));
}

#[test]
fn test_objective_names() {
    assert_eq!(Objective::parse("sum").unwrap(), Objective::Sum);
    assert_eq!(Objective::parse("count").unwrap(), Objective::Count);
    assert_eq!(Objective::parse("hybrid").unwrap(), Objective::Hybrid);
    assert!(matches!(Objective::parse("median"), Err(SeatError::Config(_))));
}

// --- EVALUATE ---

#[rstest]
#[case::together(&[&["A", "B"][..], &["C", "D"][..]][..], 3.0, 3, 1)]
#[case::apart(&[&["A", "C"][..], &["B", "D"][..]][..], 0.0, 0, 4)]
fn test_evaluate_plan(
    #[case] tables: &[&[&str]],
    #[case] expected_sum: f64,
    #[case] satisfied: i64,
    #[case] unsatisfied: i64,
) {
    let problem = four_friends();
    let eval = api::evaluate(&problem, Objective::Sum, &plan(tables)).unwrap();
    assert_eq!(eval.score, expected_sum);
    assert_eq!(eval.summary.satisfied_people, satisfied);
    assert_eq!(eval.summary.unsatisfied_people, unsatisfied);
    assert_eq!(eval.tables.len(), 2);
}

#[test]
fn test_evaluate_rejects_partial_plan() {
    let problem = four_friends();
    let res = api::evaluate(&problem, Objective::Sum, &plan(&[&["A", "B"], &["C"]]));
    assert!(matches!(res, Err(SeatError::Validation(_))));
}

#[test]
fn test_evaluate_reports_companion_violation() {
    let mut problem = four_friends();
    problem.companions.push(CompanionPair::new("A", "C"));
    let eval = api::evaluate(&problem, Objective::Count, &plan(&[&["A", "B"], &["C", "D"]])).unwrap();
    assert_eq!(eval.score, -1.0);
    assert_eq!(eval.summary.companion_violations, 1);
}
