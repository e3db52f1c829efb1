use crate::models::CompletionSet;
use crate::window::DateWindow;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellState {
    Completed,
    Missed,
    Future,
}

/// One state per window day, in window order (newest first).
pub fn present(window: &DateWindow, completions: &CompletionSet, today: NaiveDate) -> Vec<CellState> {
    window
        .days()
        .iter()
        .map(|&day| {
            if day > today {
                CellState::Future
            } else if completions.has(day) {
                CellState::Completed
            } else {
                CellState::Missed
            }
        })
        .collect()
}
