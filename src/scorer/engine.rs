use super::types::Tally;
use super::Scorer;
use crate::assignment::Assignment;

/// Single pass over every seated person: companion checks, satisfied
/// preferences (double counting allowed) and people with at least one.
pub fn tally(scorer: &Scorer, assignment: &Assignment) -> Tally {
    debug_assert_eq!(assignment.headcount(), scorer.people_count);
    let mut tally = Tally::default();

    for (t, table) in assignment.tables().iter().enumerate() {
        for &person in &table.seats {
            if let Some(companion) = scorer.companions[person] {
                if assignment.table_of(companion) != t {
                    tally.companion_violations += 1;
                }
            }

            let mut any = false;
            for &wanted in &scorer.preferences[person] {
                if assignment.table_of(wanted) == t {
                    tally.satisfied_preferences += 1;
                    any = true;
                }
            }
            if any {
                tally.satisfied_people += 1;
            }
        }
    }

    tally
}

#[inline(always)]
fn penalised(raw: usize, violations: usize) -> f64 {
    if violations > 0 {
        -(violations as f64)
    } else {
        raw as f64
    }
}

pub fn sum_score(tally: &Tally) -> f64 {
    penalised(tally.satisfied_preferences, tally.companion_violations)
}

pub fn count_score(tally: &Tally) -> f64 {
    penalised(tally.satisfied_people, tally.companion_violations)
}

/// `count * weight + sum`. With violations both terms are already the
/// negative violation count, giving `-v * (weight + 1)`.
pub fn hybrid_score(tally: &Tally, weight: f64) -> f64 {
    count_score(tally) * weight + sum_score(tally)
}
