mod common;

use common::{four_friends, seat, two_tables_of_four};
use seatforge::assignment::Assignment;
use seatforge::optimizer::mutation;

#[test]
fn test_random_assignment_respects_capacities() {
    let problem = two_tables_of_four();
    for seed in 0..20 {
        let mut rng = fastrand::Rng::with_seed(seed);
        let a = mutation::random_assignment(&mut rng, &problem.tables, problem.headcount()).unwrap();
        assert!(a.is_consistent());
        assert_eq!(a.tables().len(), 2);
        assert_eq!(a.headcount(), 8);
        assert!(a.tables().iter().all(|t| t.seats.len() == 4));
    }
}

#[test]
fn test_random_assignment_shuffles() {
    let problem = two_tables_of_four();
    let first = {
        let mut rng = fastrand::Rng::with_seed(1);
        mutation::random_assignment(&mut rng, &problem.tables, 8).unwrap()
    };
    let differs = (2..30).any(|seed| {
        let mut rng = fastrand::Rng::with_seed(seed);
        mutation::random_assignment(&mut rng, &problem.tables, 8).unwrap() != first
    });
    assert!(differs, "every seed produced the same seating");
}

#[test]
fn test_clone_is_independent() {
    let problem = four_friends();
    let original = seat(&problem, &[&["A", "B"], &["C", "D"]]);
    let copy = original.clone();

    let mut rng = fastrand::Rng::with_seed(5);
    let moved = mutation::neighbour(&mut rng, &copy, 1);

    assert_eq!(copy, original);
    assert_ne!(moved, original);
    assert!(moved.is_consistent());
}

#[test]
fn test_neighbour_changes_at_most_two_slots_per_swap() {
    let problem = two_tables_of_four();
    let mut rng = fastrand::Rng::with_seed(99);
    let base = mutation::random_assignment(&mut rng, &problem.tables, 8).unwrap();

    for k in 0..5 {
        let next = mutation::neighbour(&mut rng, &base, k);
        let changed: usize = base
            .tables()
            .iter()
            .zip(next.tables())
            .map(|(a, b)| a.seats.iter().zip(&b.seats).filter(|(x, y)| x != y).count())
            .sum();
        assert!(changed <= 2 * k, "{} swaps changed {} slots", k, changed);
        assert!(next.is_consistent());
    }
}

#[test]
fn test_zero_swaps_is_identity() {
    let problem = four_friends();
    let a = seat(&problem, &[&["A", "C"], &["B", "D"]]);
    let mut rng = fastrand::Rng::with_seed(0);
    assert_eq!(mutation::neighbour(&mut rng, &a, 0), a);
}

#[test]
fn test_from_seats_rejects_missing_person() {
    let res = Assignment::from_seats(&[2, 1], vec![vec![0, 1], vec![1]], 3);
    assert!(res.is_err());
}

#[test]
fn test_names_follow_seat_order() {
    let problem = four_friends();
    let a = seat(&problem, &[&["D", "A"], &["C", "B"]]);
    assert_eq!(a.names(&problem), vec![vec!["D", "A"], vec!["C", "B"]]);
    assert!(a.seated_together(0, 3));
    assert!(!a.seated_together(0, 1));
}
