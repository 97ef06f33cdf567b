//! Projection of raw event records into display events.

use chrono::Duration;

use crate::color::{Channel, resolve};
use crate::event::{DisplayEvent, EventId, EventRecord};

/// Project records into display events, preserving count and order.
pub fn project(records: &[EventRecord]) -> Vec<DisplayEvent> {
    let events: Vec<DisplayEvent> = records
        .iter()
        .enumerate()
        .map(|(index, record)| project_one(index, record))
        .collect();

    tracing::trace!(count = events.len(), "projected events");
    events
}

fn project_one(index: usize, record: &EventRecord) -> DisplayEvent {
    let end = record
        .duration
        .filter(|minutes| *minutes > 0)
        .map(|minutes| record.date + Duration::minutes(i64::from(minutes)));

    DisplayEvent {
        id: display_id(index, record),
        title: record.title.clone(),
        start: record.date,
        end,
        duration: record.duration,
        fill: resolve(&record.color, Channel::Fill),
        accent: resolve(&record.color, Channel::Accent),
        is_holiday: record.is_holiday.unwrap_or(false),
        description: record.description.clone(),
    }
}

/// Use the record's id, or derive one from position, title and date.
fn display_id(index: usize, record: &EventRecord) -> EventId {
    if record.id.is_empty() {
        EventId::new(format!("{}-{}-{}", index, record.title, record.date.to_rfc3339()))
    } else {
        EventId::new(record.id.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use chrono::{Local, TimeZone};

    fn records() -> Vec<EventRecord> {
        let d = |day, hour| Local.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap();
        vec![
            EventRecord::new("1", "Team Meeting", d(10, 14), "blue").with_duration(60),
            EventRecord::new("", "Lunch", d(10, 12), "teal"),
            EventRecord::new("3", "Easter", d(20, 0), "red").holiday(),
            EventRecord::new("", "Lunch", d(11, 12), "green").with_duration(0),
        ]
    }

    #[test]
    fn test_project_preserves_count_and_order() {
        let input = records();
        let projected = project(&input);

        assert_eq!(projected.len(), input.len());
        let titles: Vec<_> = projected.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Team Meeting", "Lunch", "Easter", "Lunch"]);
    }

    #[test]
    fn test_identities_are_stable_across_projections() {
        let input = records();
        let first: Vec<_> = project(&input).into_iter().map(|e| e.id).collect();
        let second: Vec<_> = project(&input).into_iter().map(|e| e.id).collect();

        assert_eq!(first, second);
        assert_eq!(first[0].as_str(), "1");
        assert!(first[1].as_str().starts_with("1-Lunch-2025-04-10T12:00:00"));
        // Same title, different position and date
        assert_ne!(first[1], first[3]);
    }

    #[test]
    fn test_end_only_for_positive_duration() {
        let projected = project(&records());

        let meeting = &projected[0];
        assert_eq!(meeting.end, Some(meeting.start + Duration::minutes(60)));
        assert!(projected[1].is_point_in_time());
        assert!(projected[3].is_point_in_time());
        assert_eq!(projected[3].duration, Some(0));
    }

    #[test]
    fn test_colors_and_holiday_flag_flow_through() {
        let projected = project(&records());

        assert_eq!(projected[0].accent.to_string(), "#3b82f6");
        assert_eq!(projected[1].fill, Color::DEFAULT_FILL);
        assert_eq!(projected[1].accent, Color::DEFAULT_ACCENT);
        assert!(projected[2].is_holiday);
        // Holidays get no color override
        assert_eq!(projected[2].fill.to_string(), "#fee2e2");
        assert!(!projected[0].is_holiday);
    }
}
