use chrono::{Datelike, Duration, Local, NaiveDate};

pub const WINDOW_DAYS: usize = 365;

/// Rolling display window of the most recent calendar days, newest first.
#[derive(Debug, Clone)]
pub struct DateWindow {
    days: Vec<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthOffset {
    pub label: String,
    pub start: usize,
}

impl DateWindow {
    pub fn current() -> Self {
        Self::ending_at(Local::now().date_naive())
    }

    pub fn ending_at(reference: NaiveDate) -> Self {
        let days = (0..WINDOW_DAYS as i64)
            .map(|offset| reference - Duration::days(offset))
            .collect();
        Self { days }
    }

    /// Newest first: `reference`, `reference - 1`, ...
    pub fn days(&self) -> &[NaiveDate] {
        &self.days
    }

    pub fn newest(&self) -> NaiveDate {
        self.days[0]
    }

    pub fn oldest_first(&self) -> impl DoubleEndedIterator<Item = NaiveDate> + '_ {
        self.days.iter().rev().copied()
    }

    /// Month labels with the chronological index at which each month starts.
    /// Used for label placement only; the first offset is always 0.
    pub fn month_offsets(&self) -> Vec<MonthOffset> {
        let mut offsets = Vec::new();
        let mut current: Option<(i32, u32)> = None;

        for (index, day) in self.oldest_first().enumerate() {
            let month = (day.year(), day.month());
            if current != Some(month) {
                offsets.push(MonthOffset {
                    label: day.format("%b %Y").to_string(),
                    start: index,
                });
                current = Some(month);
            }
        }

        offsets
    }
}
