use anyhow::{Context, Result};
use calview_core::calendar::CalendarView;
use calview_core::config::CalviewConfig;
use calview_core::event::EventRecord;
use calview_core::view::ViewMode;
use chrono::NaiveDate;

use crate::render::Render;

pub fn run(
    config: CalviewConfig,
    events: &[EventRecord],
    view: ViewMode,
    date: NaiveDate,
    expanded: bool,
    json: bool,
) -> Result<()> {
    let mut calendar = CalendarView::new(config, date);
    calendar.set_events(events);
    calendar.set_mode(view);
    if expanded {
        calendar.toggle_expanded();
    }

    let description = calendar.render();

    if json {
        let output =
            serde_json::to_string_pretty(&description).context("Failed to serialize calendar")?;
        println!("{}", output);
    } else {
        println!("{}", description.render());
    }

    Ok(())
}
