use chrono::Datelike;
use chrono::NaiveDate;
use chrono::Weekday;

const WORKDAYS_PER_WEEK: u64 = 5;

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// First workday on or after `date`.
pub fn next_workday(mut date: NaiveDate) -> Option<NaiveDate> {
    while is_weekend(date) {
        date = date.succ_opt()?;
    }
    Some(date)
}

/// Date on which work of `days` duration finishes when started on `start_date`.
///
/// Partial days count as a full workday. A duration of zero (or less) ends on
/// the first workday on or after the start date, as does a duration of one.
/// Returns `None` if the date leaves chrono's supported range.
pub fn completion_date(start_date: NaiveDate, days: f64) -> Option<NaiveDate> {
    let first = next_workday(start_date)?;
    let days = days.ceil().max(0.0);
    if days <= 1.0 {
        return Some(first);
    }
    if !days.is_finite() || days > u32::MAX as f64 {
        return None;
    }

    let remaining = days as u64 - 1;
    let weeks = remaining / WORKDAYS_PER_WEEK;
    let mut date = first.checked_add_days(chrono::Days::new(weeks * 7))?;
    for _ in 0..remaining % WORKDAYS_PER_WEEK {
        date = next_workday(date.succ_opt()?)?;
    }
    Some(date)
}
