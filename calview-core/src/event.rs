//! Event records as supplied by the host, and their render-ready projection.
//!
//! `EventRecord` is the raw input: it is deserialized from whatever the host
//! hands over and never mutated. `DisplayEvent` is derived from it on every
//! render pass by [`crate::projector::project`].

use std::fmt;
use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::{CalviewError, CalviewResult};

/// A raw calendar event owned by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    /// May be empty; the projector synthesizes an identity in that case.
    #[serde(default)]
    pub id: String,
    pub title: String,
    #[serde(with = "local_timestamp")]
    pub date: DateTime<Local>,
    /// Semantic color name ("blue", "red", ...). Open set.
    #[serde(default)]
    pub color: String,
    /// Duration in minutes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_holiday: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EventRecord {
    pub fn new(id: &str, title: &str, date: DateTime<Local>, color: &str) -> Self {
        EventRecord {
            id: id.to_string(),
            title: title.to_string(),
            date,
            color: color.to_string(),
            duration: None,
            is_holiday: None,
            description: None,
        }
    }

    pub fn with_duration(mut self, minutes: u32) -> Self {
        self.duration = Some(minutes);
        self
    }

    pub fn holiday(mut self) -> Self {
        self.is_holiday = Some(true);
        self
    }

    pub fn with_description(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }
}

/// Display identity of an event, stable across re-projections.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(String);

impl EventId {
    pub fn new(id: impl Into<String>) -> Self {
        EventId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EventId {
    fn from(s: &str) -> Self {
        EventId(s.to_string())
    }
}

/// A render-ready event.
///
/// `end` is present exactly when the record had a positive duration.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayEvent {
    pub id: EventId,
    pub title: String,
    pub start: DateTime<Local>,
    pub end: Option<DateTime<Local>>,
    /// Duration in minutes, as given by the record.
    pub duration: Option<u32>,
    pub fill: Color,
    pub accent: Color,
    pub is_holiday: bool,
    pub description: Option<String>,
}

impl DisplayEvent {
    /// Local calendar date of the start instant.
    pub fn date(&self) -> NaiveDate {
        self.start.date_naive()
    }

    /// Point-in-time events have no end marker.
    pub fn is_point_in_time(&self) -> bool {
        self.end.is_none()
    }
}

impl fmt::Display for DisplayEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

/// Parse a JSON array of event records.
pub fn parse_events(json: &str) -> CalviewResult<Vec<EventRecord>> {
    serde_json::from_str(json).map_err(|e| CalviewError::EventParse(e.to_string()))
}

/// Load a JSON array of event records from a file.
pub fn load_events(path: &Path) -> CalviewResult<Vec<EventRecord>> {
    let content = std::fs::read_to_string(path)?;
    let events = parse_events(&content)?;
    tracing::debug!(path = %path.display(), count = events.len(), "loaded events");
    Ok(events)
}

/// Parse a timestamp on the host's local clock.
///
/// Accepts RFC 3339 (converted to local time), `YYYY-MM-DDTHH:MM[:SS]` and
/// `YYYY-MM-DD HH:MM` as local wall-clock time, or a bare `YYYY-MM-DD`
/// meaning local midnight.
pub fn parse_timestamp(s: &str) -> Result<DateTime<Local>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Local));
    }

    let naive = ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .or_else(|| {
            NaiveDate::parse_from_str(s, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
        .ok_or_else(|| {
            format!(
                "Invalid date '{}'. Expected RFC 3339, YYYY-MM-DDTHH:MM or YYYY-MM-DD",
                s
            )
        })?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .ok_or_else(|| format!("'{}' does not exist on the local clock", s))
}

mod local_timestamp {
    use chrono::{DateTime, Local};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &DateTime<Local>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&dt.to_rfc3339())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Local>, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_timestamp(&s).map_err(serde::de::Error::custom)
    }
}
