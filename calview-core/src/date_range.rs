//! The span of dates a view shows.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::Serialize;

use crate::view::ViewMode;

/// Weeks in a month grid. Always six so the grid height never jumps.
const MONTH_GRID_WEEKS: u64 = 6;

/// Half-open date range `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VisibleRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl VisibleRange {
    /// Range shown by `mode` around `anchor`.
    ///
    /// - month: six Sunday-started weeks covering the anchor's month
    /// - week: the Sunday-started week containing the anchor
    /// - day: the anchor alone
    /// - list: the anchor's month
    ///
    /// Near the ends of the representable calendar the range is cut short
    /// instead of overflowing.
    pub fn for_mode(mode: ViewMode, anchor: NaiveDate) -> Self {
        match mode {
            ViewMode::Month => {
                let start = week_start(first_of_month(anchor));
                VisibleRange {
                    start,
                    end: add_days(start, MONTH_GRID_WEEKS * 7),
                }
            }
            ViewMode::Week => {
                let start = week_start(anchor);
                VisibleRange {
                    start,
                    end: add_days(start, 7),
                }
            }
            ViewMode::Day => VisibleRange {
                start: anchor,
                end: add_days(anchor, 1),
            },
            ViewMode::List => {
                let start = first_of_month(anchor);
                VisibleRange {
                    start,
                    end: start.checked_add_months(Months::new(1)).unwrap_or(NaiveDate::MAX),
                }
            }
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date < self.end
    }

    /// Every date in the range, in order.
    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.start.iter_days().take_while(|d| *d < self.end)
    }

    pub fn len_days(&self) -> i64 {
        (self.end - self.start).num_days()
    }
}

/// Move `anchor` one view unit forward (`steps = 1`) or backward (`-1`).
///
/// Stays on `anchor` when the move would leave the representable calendar.
pub fn shift_anchor(mode: ViewMode, anchor: NaiveDate, steps: i32) -> NaiveDate {
    let shifted = match mode {
        ViewMode::Month | ViewMode::List => {
            let months = Months::new(steps.unsigned_abs());
            if steps >= 0 {
                first_of_month(anchor).checked_add_months(months)
            } else {
                first_of_month(anchor).checked_sub_months(months)
            }
        }
        ViewMode::Week => shift_days(anchor, u64::from(steps.unsigned_abs()) * 7, steps >= 0),
        ViewMode::Day => shift_days(anchor, u64::from(steps.unsigned_abs()), steps >= 0),
    };
    shifted.unwrap_or(anchor)
}

fn shift_days(date: NaiveDate, days: u64, forward: bool) -> Option<NaiveDate> {
    let days = Days::new(days);
    if forward {
        date.checked_add_days(days)
    } else {
        date.checked_sub_days(days)
    }
}

/// Exclusive range end, saturating at the last representable date.
fn add_days(date: NaiveDate, days: u64) -> NaiveDate {
    date.checked_add_days(Days::new(days)).unwrap_or(NaiveDate::MAX)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn week_start(date: NaiveDate) -> NaiveDate {
    let offset = Days::new(u64::from(date.weekday().num_days_from_sunday()));
    date.checked_sub_days(offset).unwrap_or(NaiveDate::MIN)
}
