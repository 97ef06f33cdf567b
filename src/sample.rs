//! Events shown when no events file is given.

use calview_core::event::EventRecord;
use chrono::{DateTime, Local, NaiveDate, TimeZone};

fn local(year: i32, month: u32, day: u32, hour: u32) -> Option<DateTime<Local>> {
    Local.with_ymd_and_hms(year, month, day, hour, 0, 0).earliest()
}

/// The month the sample events fall in.
pub fn sample_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 4, 10).unwrap_or_default()
}

pub fn sample_events() -> Vec<EventRecord> {
    let events = [
        local(2025, 4, 10, 14)
            .map(|date| EventRecord::new("1", "Team Meeting", date, "blue").with_duration(60)),
        local(2025, 4, 10, 17)
            .map(|date| EventRecord::new("2", "Fun Meeting", date, "green").with_duration(60)),
        local(2025, 4, 20, 0).map(|date| EventRecord::new("3", "Easter", date, "red").holiday()),
    ];

    events.into_iter().flatten().collect()
}
