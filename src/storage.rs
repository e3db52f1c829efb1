use crate::errors::SyncError;
use crate::models::HabitData;
use std::{env, path::Path, path::PathBuf};
use tokio::fs;
use tracing::error;

pub fn resolve_data_path() -> Result<PathBuf, std::io::Error> {
    if let Ok(path) = env::var("HABITS_DATA_PATH") {
        return Ok(PathBuf::from(path));
    }

    Ok(PathBuf::from("data/habits.json"))
}

/// Authoritative snapshot used to hydrate local state on startup. A missing
/// or unreadable file yields an empty store rather than a failed boot.
pub async fn load_data(path: &Path) -> HabitData {
    match fs::read(path).await {
        Ok(bytes) => match serde_json::from_slice(&bytes) {
            Ok(data) => data,
            Err(err) => {
                error!("failed to parse habit data file: {err}");
                HabitData::default()
            }
        },
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => HabitData::default(),
        Err(err) => {
            error!("failed to read habit data file: {err}");
            HabitData::default()
        }
    }
}

pub async fn persist_data(path: &Path, data: &HabitData) -> Result<(), SyncError> {
    let payload = serde_json::to_vec_pretty(data)?;
    fs::write(path, payload).await?;
    Ok(())
}
