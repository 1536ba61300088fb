use crate::assignment::Assignment;
use crate::error::{SeatError, SfResult};
use fastrand::Rng;

/// Shuffles everyone (Fisher-Yates) and fills tables front to back.
pub fn random_assignment(rng: &mut Rng, capacities: &[usize], headcount: usize) -> SfResult<Assignment> {
    let total: usize = capacities.iter().sum();
    if total != headcount {
        return Err(SeatError::Validation(format!(
            "Table capacities sum to {} but {} people are listed",
            total, headcount
        )));
    }

    let mut people: Vec<usize> = (0..headcount).collect();
    rng.shuffle(&mut people);

    let mut seats = Vec::with_capacity(capacities.len());
    let mut pos = 0;
    for &capacity in capacities {
        seats.push(people[pos..pos + capacity].to_vec());
        pos += capacity;
    }

    Assignment::from_seats(capacities, seats, headcount)
}

/// Copies `current` and applies `swap_count` random cross-table swaps.
///
/// Each swap picks two distinct tables, then one seat in each. With fewer
/// than two tables there is nothing to exchange and the copy is returned
/// unchanged.
pub fn neighbour(rng: &mut Rng, current: &Assignment, swap_count: usize) -> Assignment {
    let mut next = current.clone();
    let table_count = next.tables().len();
    if table_count < 2 {
        return next;
    }

    for _ in 0..swap_count {
        let t1 = rng.usize(0..table_count);
        let mut t2 = rng.usize(0..table_count - 1);
        if t2 >= t1 {
            t2 += 1;
        }

        let s1 = rng.usize(0..next.tables()[t1].capacity);
        let s2 = rng.usize(0..next.tables()[t2].capacity);
        next.swap_seats((t1, s1), (t2, s2));
    }

    next
}
