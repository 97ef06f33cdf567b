//! Per-day styling of the grid.
//!
//! Days with events are tinted with the fill of their first event, and days
//! with more than one event get a count badge. The result is a plain list the
//! rendering layer applies as it draws each cell.

use chrono::NaiveDate;
use serde::Serialize;

use crate::color::Color;
use crate::date_range::VisibleRange;
use crate::day_bucket::DayBuckets;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBadge {
    pub label: String,
    pub background: Color,
    pub foreground: Color,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayStyle {
    pub date: NaiveDate,
    pub background: Option<Color>,
    pub badge: Option<DayBadge>,
    /// Hidden events, for a "+N more" affordance.
    pub overflow: Option<usize>,
}

impl DayStyle {
    fn plain(date: NaiveDate) -> Self {
        DayStyle {
            date,
            background: None,
            badge: None,
            overflow: None,
        }
    }
}

/// One style entry per date in `range`, in date order.
pub fn day_styles(range: &VisibleRange, buckets: &DayBuckets) -> Vec<DayStyle> {
    range
        .days()
        .map(|date| {
            let Some(bucket) = buckets.get(&date) else {
                return DayStyle::plain(date);
            };
            let Some(first) = bucket.first() else {
                return DayStyle::plain(date);
            };

            let count = bucket.len();
            let badge = (count > 1).then(|| DayBadge {
                label: format!("{} events", count),
                background: first.accent,
                foreground: Color::WHITE,
            });

            DayStyle {
                date,
                background: Some(first.fill),
                badge,
                overflow: bucket.has_hidden().then_some(bucket.overflow_count),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::day_bucket::aggregate;
    use crate::event::EventRecord;
    use crate::projector::project;
    use crate::view::ViewMode;
    use chrono::{Local, TimeZone};

    fn d(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    fn buckets() -> DayBuckets {
        let at = |day, hour| Local.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap();
        let mut records = vec![
            EventRecord::new("1", "Team Meeting", at(10, 14), "blue").with_duration(60),
            EventRecord::new("2", "Fun Meeting", at(10, 17), "green").with_duration(60),
            EventRecord::new("3", "Easter", at(20, 0), "red").holiday(),
        ];
        for i in 0..4 {
            records.push(EventRecord::new(&format!("busy{i}"), "Busy", at(22, 9 + i), "mystery"));
        }
        aggregate(&project(&records), 3)
    }

    #[test]
    fn test_one_style_per_visible_day() {
        let range = VisibleRange::for_mode(ViewMode::Month, d(10));
        let styles = day_styles(&range, &buckets());

        assert_eq!(styles.len(), 42);
        assert_eq!(styles.first().unwrap().date, range.start);
        assert!(styles.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn test_styles_follow_first_event_and_count() {
        let range = VisibleRange::for_mode(ViewMode::Month, d(10));
        let styles = day_styles(&range, &buckets());
        let style_for = |day| styles.iter().find(|s| s.date == d(day)).unwrap();

        let meetings = style_for(10);
        assert_eq!(meetings.background.unwrap().to_string(), "#dbeafe");
        let badge = meetings.badge.as_ref().unwrap();
        assert_eq!(badge.label, "2 events");
        assert_eq!(badge.background.to_string(), "#3b82f6");
        assert_eq!(badge.foreground, Color::WHITE);
        assert_eq!(meetings.overflow, None);

        let easter = style_for(20);
        assert_eq!(easter.background.unwrap().to_string(), "#fee2e2");
        assert!(easter.badge.is_none());

        let busy = style_for(22);
        assert_eq!(busy.background, Some(Color::DEFAULT_FILL));
        assert_eq!(busy.overflow, Some(1));

        let empty = style_for(11);
        assert_eq!(*empty, DayStyle::plain(d(11)));
    }

    #[test]
    fn test_days_outside_range_are_ignored() {
        let range = VisibleRange::for_mode(ViewMode::Day, d(11));
        let styles = day_styles(&range, &buckets());

        assert_eq!(styles.len(), 1);
        assert!(styles[0].background.is_none());
    }
}
