use crate::models::{CompletionSet, Habit, HabitData, HabitId};
use crate::sync::SyncOp;
use chrono::NaiveDate;
use std::collections::HashMap;
use thiserror::Error;
use tokio::sync::mpsc::UnboundedSender;
use tracing::warn;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown habit id {0}")]
    UnknownHabit(HabitId),
    #[error("reorder must be a permutation of the existing habit ids")]
    InvalidReorder,
}

/// Session-authoritative habit collection. Every mutation lands locally
/// first, then a sync op is dispatched without being awaited; the durable
/// store catches up on its own time.
pub struct HabitStore {
    habits: Vec<Habit>,
    next_id: u64,
    sync: UnboundedSender<SyncOp>,
}

impl HabitStore {
    pub fn new(sync: UnboundedSender<SyncOp>) -> Self {
        Self::hydrate(HabitData::default(), sync)
    }

    /// Replaces local state wholesale with the authoritative snapshot.
    pub fn hydrate(data: HabitData, sync: UnboundedSender<SyncOp>) -> Self {
        let next_id = data
            .habits
            .iter()
            .map(|habit| habit.id.0 + 1)
            .max()
            .unwrap_or(1);
        Self {
            habits: data.habits,
            next_id,
            sync,
        }
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn get(&self, id: HabitId) -> Result<&Habit, StoreError> {
        self.habits
            .iter()
            .find(|habit| habit.id == id)
            .ok_or(StoreError::UnknownHabit(id))
    }

    pub fn create(&mut self, name: impl Into<String>) -> Habit {
        let id = HabitId(self.next_id);
        self.next_id += 1;

        let habit = Habit::new(id, name);
        self.habits.push(habit.clone());
        self.dispatch(SyncOp::Create {
            id,
            name: habit.name.clone(),
        });
        habit
    }

    pub fn rename(&mut self, id: HabitId, name: &str) -> Result<&Habit, StoreError> {
        let habit = self.get_mut(id)?;
        let changed = habit.name != name;
        if changed {
            habit.name = name.to_string();
            self.dispatch(SyncOp::Rename {
                id,
                name: name.to_string(),
            });
        }
        self.get(id)
    }

    pub fn delete(&mut self, id: HabitId) -> Result<(), StoreError> {
        self.get(id)?;
        self.habits.retain(|habit| habit.id != id);
        self.dispatch(SyncOp::Delete { id });
        Ok(())
    }

    pub fn log_day(&mut self, id: HabitId, day: NaiveDate) -> Result<&Habit, StoreError> {
        self.get_mut(id)?.completions.add(day);
        self.dispatch(SyncOp::Log { id, day });
        self.get(id)
    }

    pub fn unlog_day(&mut self, id: HabitId, day: NaiveDate) -> Result<&Habit, StoreError> {
        self.get_mut(id)?.completions.remove(day);
        self.dispatch(SyncOp::Unlog { id, day });
        self.get(id)
    }

    /// Whole-sequence replace. `order` must mention every existing habit id
    /// exactly once; otherwise the current order is left untouched. Order is
    /// a local concern only, so nothing is dispatched.
    pub fn reorder(&mut self, order: &[HabitId]) -> Result<(), StoreError> {
        let positions: HashMap<HabitId, usize> = order
            .iter()
            .enumerate()
            .map(|(position, &id)| (id, position))
            .collect();

        let is_permutation = positions.len() == order.len()
            && order.len() == self.habits.len()
            && self
                .habits
                .iter()
                .all(|habit| positions.contains_key(&habit.id));
        if !is_permutation {
            return Err(StoreError::InvalidReorder);
        }

        self.habits.sort_by_key(|habit| positions[&habit.id]);
        Ok(())
    }

    pub fn completions(&self, id: HabitId) -> Result<&CompletionSet, StoreError> {
        Ok(&self.get(id)?.completions)
    }

    fn get_mut(&mut self, id: HabitId) -> Result<&mut Habit, StoreError> {
        self.habits
            .iter_mut()
            .find(|habit| habit.id == id)
            .ok_or(StoreError::UnknownHabit(id))
    }

    fn dispatch(&self, op: SyncOp) {
        if self.sync.send(op).is_err() {
            warn!("sync channel closed; dropping habit update");
        }
    }
}
