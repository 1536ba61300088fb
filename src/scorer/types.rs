use serde::{Deserialize, Serialize};

/// Raw counts gathered in one pass over an assignment, before the
/// companion-penalty override is applied.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub satisfied_preferences: usize,
    pub satisfied_people: usize,
    pub companion_violations: usize,
}

/// The three headline numbers of a finished seating, plus how many
/// companion constraints it breaks.
///
/// The first three are computed through the count and sum objectives, so
/// they turn negative when any companion is split up.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoreSummary {
    pub satisfied_people: i64,
    pub unsatisfied_people: i64,
    pub satisfied_preferences: i64,
    pub companion_violations: usize,
}
