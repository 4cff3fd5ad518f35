//! Display labels for task rows.

use chrono::{Datelike, NaiveDate};

use crate::model::task::Priority;

pub const NO_DUE_DATE_LABEL: &str = "No due date";
pub const NO_PRIORITY_LABEL: &str = "None";

/// Long date label, e.g. `October 15th, 2026`.
pub fn long_date(date: NaiveDate) -> String {
    let day = date.day();
    format!(
        "{} {}{}, {}",
        date.format("%B"),
        day,
        ordinal_suffix(day),
        date.year()
    )
}

/// Due-date row label; falls back to `No due date`.
pub fn due_label(due_date: Option<NaiveDate>) -> String {
    match due_date {
        Some(date) => long_date(date),
        None => NO_DUE_DATE_LABEL.to_string(),
    }
}

/// Priority row label, e.g. `Priority: High` or `Priority: None`.
pub fn priority_label(priority: Option<Priority>) -> String {
    let value = priority.map(Priority::as_str).unwrap_or(NO_PRIORITY_LABEL);
    format!("Priority: {value}")
}

fn ordinal_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&(day % 100)) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

#[cfg(test)]
mod tests {
    use super::{due_label, long_date, priority_label};
    use crate::model::task::Priority;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn long_date_uses_ordinal_suffixes() {
        assert_eq!(long_date(date(2026, 10, 1)), "October 1st, 2026");
        assert_eq!(long_date(date(2026, 10, 2)), "October 2nd, 2026");
        assert_eq!(long_date(date(2026, 10, 3)), "October 3rd, 2026");
        assert_eq!(long_date(date(2026, 10, 4)), "October 4th, 2026");
        assert_eq!(long_date(date(2026, 10, 11)), "October 11th, 2026");
        assert_eq!(long_date(date(2026, 10, 12)), "October 12th, 2026");
        assert_eq!(long_date(date(2026, 10, 13)), "October 13th, 2026");
        assert_eq!(long_date(date(2026, 10, 22)), "October 22nd, 2026");
        assert_eq!(long_date(date(2026, 10, 31)), "October 31st, 2026");
    }

    #[test]
    fn missing_values_have_fallback_labels() {
        assert_eq!(due_label(None), "No due date");
        assert_eq!(priority_label(None), "Priority: None");
        assert_eq!(priority_label(Some(Priority::Medium)), "Priority: Medium");
    }
}
