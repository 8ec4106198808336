//! Synthetic week of activity for the progress report. Nothing here is read
//! from or written to storage.

use chrono::{Duration, NaiveDate};

use crate::engine::types::HistoryEntry;

pub const HISTORY_DAYS: usize = 7;

/// `today`, then each of the six days before it.
pub fn synthetic_history(today: NaiveDate) -> Vec<HistoryEntry> {
    (0..HISTORY_DAYS as i64)
        .map(|offset| HistoryEntry {
            date: today - Duration::days(offset),
        })
        .collect()
}

pub fn render_history(history: &[HistoryEntry]) -> String {
    let entries: Vec<String> = history
        .iter()
        .map(|entry| format!("{{\"date\": \"{}\"}}", entry.date.format("%Y-%m-%d")))
        .collect();
    format!("[{}]", entries.join(", "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seven_days_counting_back_from_today() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 2).unwrap();
        let history = synthetic_history(today);

        assert_eq!(history.len(), 7);
        assert_eq!(history[0].date, today);
        // Crosses the leap day.
        assert_eq!(history[2].date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
        assert_eq!(history[6].date, NaiveDate::from_ymd_opt(2024, 2, 25).unwrap());
    }

    #[test]
    fn rendered_as_date_records() {
        let today = NaiveDate::from_ymd_opt(2026, 1, 2).unwrap();
        let rendered = render_history(&synthetic_history(today)[..2]);
        assert_eq!(rendered, r#"[{"date": "2026-01-02"}, {"date": "2026-01-01"}]"#);
    }
}
