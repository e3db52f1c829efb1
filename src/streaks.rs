use crate::models::CompletionSet;
use chrono::{Duration, Local, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StreakStats {
    pub current: u32,
    pub longest: u32,
}

pub fn streaks(completions: &CompletionSet) -> StreakStats {
    streaks_at(Local::now().date_naive(), completions)
}

pub fn streaks_at(today: NaiveDate, completions: &CompletionSet) -> StreakStats {
    let current = current_run(today, completions);
    // An open run ending at today can exceed every closed run.
    let longest = longest_run(completions).max(current);
    StreakStats { current, longest }
}

fn longest_run(completions: &CompletionSet) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for day in completions.iter() {
        run = match prev {
            Some(prev) if (day - prev).num_days() == 1 => run + 1,
            _ => 1,
        };
        longest = longest.max(run);
        prev = Some(day);
    }

    longest
}

fn current_run(today: NaiveDate, completions: &CompletionSet) -> u32 {
    // An unlogged today does not break the streak yet; the day isn't over.
    let anchor = if completions.has(today) {
        today
    } else if completions.has(today - Duration::days(1)) {
        today - Duration::days(1)
    } else {
        return 0;
    };

    let mut run = 0u32;
    let mut day = anchor;
    while completions.has(day) {
        run += 1;
        day = day - Duration::days(1);
    }
    run
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_from_offsets(today: NaiveDate, offsets: &[i64]) -> CompletionSet {
        offsets
            .iter()
            .map(|&offset| today - Duration::days(offset))
            .collect()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn empty_set_has_no_streaks() {
        let stats = streaks_at(today(), &CompletionSet::default());
        assert_eq!(stats, StreakStats { current: 0, longest: 0 });
    }

    #[test]
    fn run_ending_today_counts_fully() {
        let completions = set_from_offsets(today(), &[0, 1, 2]);
        let stats = streaks_at(today(), &completions);
        assert_eq!(stats.current, 3);
        assert_eq!(stats.longest, 3);
    }

    #[test]
    fn unlogged_today_keeps_streak_alive() {
        let completions = set_from_offsets(today(), &[1, 2]);
        let stats = streaks_at(today(), &completions);
        assert_eq!(stats.current, 2);
        assert_eq!(stats.longest, 2);
    }

    #[test]
    fn gap_before_yesterday_breaks_streak() {
        let completions = set_from_offsets(today(), &[2]);
        let stats = streaks_at(today(), &completions);
        assert_eq!(stats.current, 0);
        assert_eq!(stats.longest, 1);
    }

    #[test]
    fn closed_run_longer_than_open_run() {
        let completions = set_from_offsets(today(), &[10, 9, 8, 0, 1]);
        let stats = streaks_at(today(), &completions);
        assert_eq!(stats.current, 2);
        assert_eq!(stats.longest, 3);
    }

    #[test]
    fn open_run_can_exceed_closed_runs() {
        let completions = set_from_offsets(today(), &[10, 9, 0, 1, 2, 3]);
        let stats = streaks_at(today(), &completions);
        assert_eq!(stats.current, 4);
        assert_eq!(stats.longest, 4);
    }

    #[test]
    fn runs_survive_month_boundaries() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let completions = set_from_offsets(today, &[0, 1, 2]);
        let stats = streaks_at(today, &completions);
        assert_eq!(stats.current, 3);
    }
}
