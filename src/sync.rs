use crate::errors::SyncError;
use crate::models::{Habit, HabitData, HabitId};
use crate::storage::{load_data, persist_data};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};
use tokio::sync::mpsc::{self, UnboundedSender};
use tracing::error;

/// One durable-store operation. Every variant is idempotent, so a replayed
/// or out-of-order op leaves the store in the same state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyncOp {
    Create { id: HabitId, name: String },
    Rename { id: HabitId, name: String },
    Delete { id: HabitId },
    Log { id: HabitId, day: NaiveDate },
    Unlog { id: HabitId, day: NaiveDate },
}

/// Starts the background task that drains sync ops into the data file.
/// Sends never block and are never awaited by mutation paths; a failed
/// write is logged and dropped, reconciled only by the next startup load.
pub fn spawn_sync_worker(path: PathBuf) -> UnboundedSender<SyncOp> {
    let (tx, mut rx) = mpsc::unbounded_channel();
    tokio::spawn(async move {
        while let Some(op) = rx.recv().await {
            if let Err(err) = write_op(&path, op).await {
                error!("habit sync failed: {err}");
            }
        }
    });
    tx
}

async fn write_op(path: &Path, op: SyncOp) -> Result<(), SyncError> {
    let mut data = load_data(path).await;
    apply(&mut data, op);
    persist_data(path, &data).await
}

pub fn apply(data: &mut HabitData, op: SyncOp) {
    match op {
        SyncOp::Create { id, name } => {
            if !data.habits.iter().any(|habit| habit.id == id) {
                data.habits.push(Habit::new(id, name));
            }
        }
        SyncOp::Rename { id, name } => {
            if let Some(habit) = data.habits.iter_mut().find(|habit| habit.id == id) {
                habit.name = name;
            }
        }
        SyncOp::Delete { id } => {
            data.habits.retain(|habit| habit.id != id);
        }
        SyncOp::Log { id, day } => {
            if let Some(habit) = data.habits.iter_mut().find(|habit| habit.id == id) {
                habit.completions.add(day);
            }
        }
        SyncOp::Unlog { id, day } => {
            if let Some(habit) = data.habits.iter_mut().find(|habit| habit.id == id) {
                habit.completions.remove(day);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 4, d).unwrap()
    }

    #[test]
    fn create_is_idempotent() {
        let mut data = HabitData::default();
        let op = SyncOp::Create { id: HabitId(1), name: "read".into() };
        apply(&mut data, op.clone());
        apply(&mut data, op);
        assert_eq!(data.habits.len(), 1);
    }

    #[test]
    fn log_and_unlog_are_idempotent() {
        let mut data = HabitData::default();
        apply(&mut data, SyncOp::Create { id: HabitId(1), name: "read".into() });

        let log = SyncOp::Log { id: HabitId(1), day: day(2) };
        apply(&mut data, log.clone());
        apply(&mut data, log);
        assert_eq!(data.habits[0].completions.len(), 1);

        let unlog = SyncOp::Unlog { id: HabitId(1), day: day(2) };
        apply(&mut data, unlog.clone());
        apply(&mut data, unlog);
        assert!(data.habits[0].completions.is_empty());
    }

    #[test]
    fn ops_against_unknown_habits_are_dropped() {
        let mut data = HabitData::default();
        apply(&mut data, SyncOp::Rename { id: HabitId(9), name: "x".into() });
        apply(&mut data, SyncOp::Log { id: HabitId(9), day: day(1) });
        apply(&mut data, SyncOp::Delete { id: HabitId(9) });
        assert!(data.habits.is_empty());
    }

    #[test]
    fn rename_updates_stored_name() {
        let mut data = HabitData::default();
        apply(&mut data, SyncOp::Create { id: HabitId(1), name: "read".into() });
        apply(&mut data, SyncOp::Rename { id: HabitId(1), name: "read daily".into() });
        assert_eq!(data.habits[0].name, "read daily");
    }

    #[tokio::test]
    async fn write_op_round_trips_through_file() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let mut path = std::env::temp_dir();
        path.push(format!("habit_sync_{}_{}.json", std::process::id(), nanos));

        write_op(&path, SyncOp::Create { id: HabitId(7), name: "stretch".into() })
            .await
            .unwrap();
        write_op(&path, SyncOp::Log { id: HabitId(7), day: day(3) })
            .await
            .unwrap();

        let data = load_data(&path).await;
        assert_eq!(data.habits.len(), 1);
        assert!(data.habits[0].completions.has(day(3)));

        let _ = tokio::fs::remove_file(&path).await;
    }
}
