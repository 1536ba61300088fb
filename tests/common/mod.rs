#![allow(dead_code)]

use seatforge::assignment::Assignment;
use seatforge::problem::{CompanionPair, Person, Problem};

/// Builder for Problem to keep fixtures short
pub struct ProblemBuilder {
    problem: Problem,
}

impl ProblemBuilder {
    pub fn new() -> Self {
        Self {
            problem: Problem::default(),
        }
    }

    pub fn person(mut self, name: &str, preferences: &[&str]) -> Self {
        self.problem.people.push(Person::new(name, preferences));
        self
    }

    pub fn tables(mut self, capacities: &[usize]) -> Self {
        self.problem.tables = capacities.to_vec();
        self
    }

    pub fn companion(mut self, one: &str, two: &str) -> Self {
        self.problem.companions.push(CompanionPair::new(one, two));
        self
    }

    pub fn build(self) -> Problem {
        self.problem
    }
}

/// A:[B], B:[A], C:[D], D:[] at two tables of two.
pub fn four_friends() -> Problem {
    ProblemBuilder::new()
        .person("A", &["B"])
        .person("B", &["A"])
        .person("C", &["D"])
        .person("D", &[])
        .tables(&[2, 2])
        .build()
}

/// Eight people, two tables of four, mixed preference shapes.
pub fn two_tables_of_four() -> Problem {
    ProblemBuilder::new()
        .person("A", &["B", "C"])
        .person("B", &[])
        .person("C", &[])
        .person("D", &[])
        .person("E", &["F"])
        .person("F", &[])
        .person("G", &["H"])
        .person("H", &[])
        .tables(&[4, 4])
        .build()
}

/// Seats people by name, in table order.
pub fn seat(problem: &Problem, tables: &[&[&str]]) -> Assignment {
    let index = problem.name_index();
    let seats = tables
        .iter()
        .map(|t| t.iter().map(|n| index[n]).collect())
        .collect();
    Assignment::from_problem_seats(problem, seats).expect("fixture seating is a partition")
}
