use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HabitId(pub u64);

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompletionSet(BTreeSet<NaiveDate>);

impl CompletionSet {
    pub fn has(&self, day: NaiveDate) -> bool {
        self.0.contains(&day)
    }

    pub fn add(&mut self, day: NaiveDate) -> bool {
        self.0.insert(day)
    }

    pub fn remove(&mut self, day: NaiveDate) -> bool {
        self.0.remove(&day)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ascending by calendar date.
    pub fn iter(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NaiveDate> for CompletionSet {
    fn from_iter<I: IntoIterator<Item = NaiveDate>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Habit {
    pub id: HabitId,
    pub name: String,
    pub completions: CompletionSet,
}

impl Habit {
    pub fn new(id: HabitId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            completions: CompletionSet::default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HabitData {
    pub habits: Vec<Habit>,
}

#[derive(Debug, Deserialize)]
pub struct CreateHabitRequest {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RenameHabitRequest {
    pub id: HabitId,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteHabitRequest {
    pub id: HabitId,
}

#[derive(Debug, Deserialize)]
pub struct DayRequest {
    pub id: HabitId,
    pub day: NaiveDate,
}

#[derive(Debug, Deserialize)]
pub struct ReorderRequest {
    pub order: Vec<HabitId>,
}

#[derive(Debug, Serialize)]
pub struct HabitResponse {
    pub id: HabitId,
    pub name: String,
    pub completions: Vec<NaiveDate>,
    pub current_streak: u32,
    pub longest_streak: u32,
}

#[derive(Debug, Serialize)]
pub struct HabitsResponse {
    pub habits: Vec<HabitResponse>,
}
