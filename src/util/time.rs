//! Time utility functions

use chrono::{DateTime, Months, NaiveDate, Utc};

/// Get the current UTC timestamp
pub fn now() -> DateTime<Utc> {
    Utc::now()
}

/// Get today's date (UTC)
pub fn today() -> NaiveDate {
    now().date_naive()
}

/// Calendar date `months` after `date`, clamped to the end of shorter months
pub fn months_after(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
