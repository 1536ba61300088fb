use crate::error::{SeatError, SfResult};
use crate::problem::{PersonId, Problem};

/// Marks a person not (yet) seated in `Assignment::table_of`.
pub const NOT_SEATED: usize = usize::MAX;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub capacity: usize,
    pub seats: Vec<PersonId>,
}

/// A complete partition of people across tables.
///
/// `table_of` is the membership index shared by every table: it maps each
/// person to the table they sit at, so presence checks are O(1). `Clone`
/// produces a fully independent copy; replicas never alias each other.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    tables: Vec<Table>,
    table_of: Vec<usize>,
}

impl Assignment {
    /// Builds an assignment from explicit seat lists, checking the partition.
    pub fn from_seats(
        capacities: &[usize],
        seats: Vec<Vec<PersonId>>,
        headcount: usize,
    ) -> SfResult<Self> {
        if capacities.len() != seats.len() {
            return Err(SeatError::Validation(format!(
                "Seating has {} tables but {} capacities were declared",
                seats.len(),
                capacities.len()
            )));
        }

        let tables: Vec<Table> = capacities
            .iter()
            .zip(seats)
            .map(|(&capacity, seats)| Table { capacity, seats })
            .collect();

        let mut table_of = vec![NOT_SEATED; headcount];
        for (t, table) in tables.iter().enumerate() {
            if table.seats.len() != table.capacity {
                return Err(SeatError::Validation(format!(
                    "Table {} seats {} people but has capacity {}",
                    t,
                    table.seats.len(),
                    table.capacity
                )));
            }
            for &person in &table.seats {
                if person >= headcount {
                    return Err(SeatError::Validation(format!(
                        "Person #{} does not exist",
                        person
                    )));
                }
                if table_of[person] != NOT_SEATED {
                    return Err(SeatError::Validation(format!(
                        "Person #{} is seated twice",
                        person
                    )));
                }
                table_of[person] = t;
            }
        }

        if let Some(missing) = table_of.iter().position(|&t| t == NOT_SEATED) {
            return Err(SeatError::Validation(format!(
                "Person #{} has no seat",
                missing
            )));
        }

        Ok(Self { tables, table_of })
    }

    pub fn from_problem_seats(problem: &Problem, seats: Vec<Vec<PersonId>>) -> SfResult<Self> {
        Self::from_seats(&problem.tables, seats, problem.headcount())
    }

    pub fn tables(&self) -> &[Table] {
        &self.tables
    }

    pub fn headcount(&self) -> usize {
        self.table_of.len()
    }

    #[inline(always)]
    pub fn table_of(&self, person: PersonId) -> usize {
        self.table_of[person]
    }

    #[inline(always)]
    pub fn seated_together(&self, a: PersonId, b: PersonId) -> bool {
        self.table_of[a] == self.table_of[b]
    }

    /// Exchanges two occupants of distinct tables, keeping seats and
    /// membership in agreement.
    pub(crate) fn swap_seats(&mut self, (t1, s1): (usize, usize), (t2, s2): (usize, usize)) {
        debug_assert_ne!(t1, t2);
        let one = self.tables[t1].seats[s1];
        let two = self.tables[t2].seats[s2];

        self.tables[t1].seats[s1] = two;
        self.tables[t2].seats[s2] = one;
        self.table_of[one] = t2;
        self.table_of[two] = t1;
    }

    /// True when every person sits exactly once, every table is full, and
    /// the membership index matches the seat lists.
    pub fn is_consistent(&self) -> bool {
        let mut seen = vec![false; self.table_of.len()];
        for (t, table) in self.tables.iter().enumerate() {
            if table.seats.len() != table.capacity {
                return false;
            }
            for &person in &table.seats {
                if person >= seen.len() || seen[person] || self.table_of[person] != t {
                    return false;
                }
                seen[person] = true;
            }
        }
        seen.into_iter().all(|s| s)
    }

    /// Occupant names per table, in seat order.
    pub fn names<'a>(&self, problem: &'a Problem) -> Vec<Vec<&'a str>> {
        self.tables
            .iter()
            .map(|t| {
                t.seats
                    .iter()
                    .map(|&p| problem.people[p].name.as_str())
                    .collect()
            })
            .collect()
    }
}
