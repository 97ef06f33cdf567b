//! Grouping of display events by local calendar day.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use crate::event::DisplayEvent;

/// Events starting on one local calendar day, in projection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayBucket {
    pub date: NaiveDate,
    pub events: Vec<DisplayEvent>,
    pub visible_cap: usize,
    /// Number of events beyond `visible_cap`.
    pub overflow_count: usize,
}

impl DayBucket {
    fn new(date: NaiveDate, visible_cap: usize) -> Self {
        DayBucket {
            date,
            events: Vec::new(),
            visible_cap,
            overflow_count: 0,
        }
    }

    fn push(&mut self, event: DisplayEvent) {
        self.events.push(event);
        self.overflow_count = self.events.len().saturating_sub(self.visible_cap);
    }

    /// The events that fit under the cap.
    pub fn visible(&self) -> &[DisplayEvent] {
        &self.events[..self.events.len().min(self.visible_cap)]
    }

    pub fn has_hidden(&self) -> bool {
        self.overflow_count > 0
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn first(&self) -> Option<&DisplayEvent> {
        self.events.first()
    }
}

/// Buckets keyed by date. Ordered so that iteration is deterministic.
pub type DayBuckets = BTreeMap<NaiveDate, DayBucket>;

/// Group events by the local date of their start.
///
/// A full recomputation every time; the result depends only on the inputs.
pub fn aggregate(events: &[DisplayEvent], visible_cap: usize) -> DayBuckets {
    let mut buckets = DayBuckets::new();

    for event in events {
        let date = event.date();
        buckets
            .entry(date)
            .or_insert_with(|| DayBucket::new(date, visible_cap))
            .push(event.clone());
    }

    tracing::trace!(events = events.len(), days = buckets.len(), "aggregated day buckets");
    buckets
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::EventRecord;
    use crate::projector::project;
    use chrono::{Local, TimeZone};
    use std::collections::HashSet;

    fn at(day: u32, hour: u32) -> chrono::DateTime<Local> {
        Local.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap()
    }

    fn date(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 4, day).unwrap()
    }

    #[test]
    fn test_same_day_events_share_a_bucket() {
        let events = project(&[
            EventRecord::new("1", "Team Meeting", at(10, 14), "blue").with_duration(60),
            EventRecord::new("2", "Fun Meeting", at(10, 17), "green").with_duration(60),
        ]);

        let buckets = aggregate(&events, 3);

        assert_eq!(buckets.len(), 1);
        let bucket = &buckets[&date(10)];
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket.overflow_count, 0);
        assert!(!bucket.has_hidden());
    }

    #[test]
    fn test_overflow_beyond_visible_cap() {
        let records: Vec<_> = (0..5)
            .map(|i| EventRecord::new(&i.to_string(), "Slot", at(12, 8 + i), "purple"))
            .collect();

        let buckets = aggregate(&project(&records), 3);
        let bucket = &buckets[&date(12)];

        assert_eq!(bucket.overflow_count, 2);
        assert!(bucket.has_hidden());
        assert_eq!(bucket.visible().len(), 3);
        assert_eq!(bucket.visible()[0].id.as_str(), "0");
    }

    #[test]
    fn test_bucket_keeps_projection_order() {
        let events = project(&[
            EventRecord::new("late", "Late", at(10, 18), "blue"),
            EventRecord::new("early", "Early", at(10, 7), "blue"),
        ]);

        let buckets = aggregate(&events, 3);
        let ids: Vec<_> = buckets[&date(10)].events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["late", "early"]);
    }

    #[test]
    fn test_aggregation_partitions_events() {
        let records: Vec<_> = (0..20)
            .map(|i| EventRecord::new(&format!("e{i}"), "Event", at(1 + i % 7, 6 + i % 12), "red"))
            .collect();
        let events = project(&records);

        for cap in [0, 1, 3, 10] {
            let buckets = aggregate(&events, cap);

            let mut seen = HashSet::new();
            let mut total = 0;
            for (day, bucket) in &buckets {
                assert_eq!(bucket.overflow_count, bucket.len().saturating_sub(cap));
                for event in &bucket.events {
                    assert_eq!(event.date(), *day);
                    assert!(seen.insert(event.id.clone()), "duplicate {}", event.id);
                    total += 1;
                }
            }
            assert_eq!(total, events.len());
        }
    }

    #[test]
    fn test_aggregation_is_deterministic() {
        let events = project(&[
            EventRecord::new("a", "A", at(3, 9), "blue"),
            EventRecord::new("b", "B", at(1, 9), "blue"),
            EventRecord::new("c", "C", at(3, 10), "blue"),
        ]);

        let first = aggregate(&events, 1);
        let second = aggregate(&events, 1);
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }

    #[test]
    fn test_zero_cap_hides_everything() {
        let events = project(&[EventRecord::new("a", "A", at(3, 9), "blue")]);
        let buckets = aggregate(&events, 0);
        assert!(buckets[&date(3)].visible().is_empty());
        assert_eq!(buckets[&date(3)].overflow_count, 1);
    }
}
