//! Content of the event detail popup.

use chrono::{DateTime, Local};
use serde::Serialize;

use crate::color::Color;
use crate::event::DisplayEvent;

pub const NO_DESCRIPTION: &str = "No additional details available.";

/// Text shown in the popup for a selected event.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDetails {
    pub title: String,
    pub start: String,
    pub end: Option<String>,
    pub duration: Option<String>,
    pub holiday: bool,
    pub description: String,
    /// Header and button color.
    pub accent: Color,
}

impl EventDetails {
    pub fn from_event(event: &DisplayEvent) -> Self {
        EventDetails {
            title: event.title.clone(),
            start: format_event_time(&event.start),
            end: event.end.as_ref().map(format_event_time),
            duration: event
                .duration
                .filter(|minutes| *minutes > 0)
                .map(|minutes| format!("{} minutes", minutes)),
            holiday: event.is_holiday,
            description: event
                .description
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(NO_DESCRIPTION)
                .to_string(),
            accent: event.accent,
        }
    }
}

/// Format like "Thu, Apr 10, 2:00 PM".
pub fn format_event_time(time: &DateTime<Local>) -> String {
    time.format("%a, %b %-d, %-I:%M %p").to_string()
}
