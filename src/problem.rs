use crate::error::{read_input, SeatError, SfResult};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::warn;

/// Index of a person in `Problem::people`.
pub type PersonId = usize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Person {
    pub name: String, // must be unique
    #[serde(default)]
    pub preferences: Vec<String>,
}

impl Person {
    pub fn new(name: &str, preferences: &[&str]) -> Self {
        Self {
            name: name.to_string(),
            preferences: preferences.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// "Must be seated with" relation, stored one way: `person_one -> person_two`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompanionPair {
    pub person_one: String,
    pub person_two: String,
}

impl CompanionPair {
    pub fn new(person_one: &str, person_two: &str) -> Self {
        Self {
            person_one: person_one.to_string(),
            person_two: person_two.to_string(),
        }
    }
}

/// A parsed problem description: who is coming, how big the tables are,
/// and which pairs must share a table.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Problem {
    pub people: Vec<Person>,
    pub tables: Vec<usize>,
    #[serde(rename = "plusOnes", default)]
    pub companions: Vec<CompanionPair>,
}

impl Problem {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        Self::from_json_str(&read_input(path)?)
    }

    pub fn from_json_str(content: &str) -> SfResult<Self> {
        Ok(serde_json::from_str(content)?)
    }

    pub fn headcount(&self) -> usize {
        self.people.len()
    }

    pub fn total_capacity(&self) -> usize {
        self.tables.iter().sum()
    }

    /// Number of declared preferences, including ones naming nobody.
    pub fn total_preferences(&self) -> usize {
        self.people.iter().map(|p| p.preferences.len()).sum()
    }

    pub fn name_index(&self) -> HashMap<&str, PersonId> {
        self.people
            .iter()
            .enumerate()
            .map(|(i, p)| (p.name.as_str(), i))
            .collect()
    }

    fn companion_pairs(&self) -> SfResult<Vec<(PersonId, PersonId)>> {
        let index = self.name_index();
        self.companions
            .iter()
            .map(|pair| {
                let one = lookup(&index, &pair.person_one, "companion pair")?;
                let two = lookup(&index, &pair.person_two, "companion pair")?;
                if one == two {
                    return Err(SeatError::Validation(format!(
                        "'{}' is declared as their own companion",
                        pair.person_one
                    )));
                }
                Ok((one, two))
            })
            .collect()
    }

    /// Resolves companion pairs into `person -> companion`.
    /// A later pair for the same `person_one` replaces the earlier one.
    pub fn companion_map(&self) -> SfResult<HashMap<PersonId, PersonId>> {
        let mut map = HashMap::new();
        for (one, two) in self.companion_pairs()? {
            if let Some(previous) = map.insert(one, two) {
                warn!(
                    "Companion for '{}' redeclared: '{}' replaces '{}'",
                    self.people[one].name, self.people[two].name, self.people[previous].name
                );
            }
        }
        Ok(map)
    }

    /// Rejects inputs the annealer cannot work with. Runs before any search.
    pub fn validate(&self) -> SfResult<()> {
        if self.tables.is_empty() {
            return Err(SeatError::Validation("No tables declared".into()));
        }
        if let Some(pos) = self.tables.iter().position(|&c| c == 0) {
            return Err(SeatError::Validation(format!(
                "Table {} has zero capacity",
                pos
            )));
        }

        let mut seen = HashSet::new();
        for person in &self.people {
            if !seen.insert(person.name.as_str()) {
                return Err(SeatError::Validation(format!(
                    "Duplicate person name '{}'",
                    person.name
                )));
            }
        }

        let capacity = self.total_capacity();
        if capacity != self.headcount() {
            return Err(SeatError::Validation(format!(
                "Table capacities sum to {} but {} people are listed",
                capacity,
                self.headcount()
            )));
        }

        self.companion_pairs()?;

        for person in &self.people {
            for pref in &person.preferences {
                if !seen.contains(pref.as_str()) {
                    warn!(
                        "'{}' prefers '{}', who is not on the guest list",
                        person.name, pref
                    );
                }
            }
        }

        Ok(())
    }
}

fn lookup(index: &HashMap<&str, PersonId>, name: &str, context: &str) -> SfResult<PersonId> {
    index
        .get(name)
        .copied()
        .ok_or_else(|| SeatError::Validation(format!("Unknown person '{}' in {}", name, context)))
}

/// An existing seating, by name, in problem table order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeatingPlan {
    pub tables: Vec<Vec<String>>,
}

impl SeatingPlan {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> SfResult<Self> {
        Ok(serde_json::from_str(&read_input(path)?)?)
    }

    pub fn resolve(&self, problem: &Problem) -> SfResult<Vec<Vec<PersonId>>> {
        let index = problem.name_index();
        self.tables
            .iter()
            .enumerate()
            .map(|(t, names)| {
                names
                    .iter()
                    .map(|n| lookup(&index, n, &format!("seating plan table {}", t)))
                    .collect()
            })
            .collect()
    }
}
