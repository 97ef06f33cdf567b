//! Core of calview: the calendar view model.
//!
//! - `event` and `projector`: raw event records and their display projection
//! - `day_bucket` and `day_style`: per-day grouping, overflow and cell styling
//! - `view` and `date_range`: view mode, layout flag and visible dates
//! - `selection` and `details`: the selected event and its popup
//! - `calendar`: ties the above into one rendering context

pub mod calendar;
pub mod color;
pub mod config;
pub mod date_range;
pub mod day_bucket;
pub mod day_style;
pub mod details;
pub mod error;
pub mod event;
pub mod projector;
pub mod selection;
pub mod shell;
pub mod view;

pub use calendar::{CalendarView, RenderDescription};
pub use config::CalviewConfig;
pub use error::{CalviewError, CalviewResult};
pub use event::{DisplayEvent, EventId, EventRecord};
