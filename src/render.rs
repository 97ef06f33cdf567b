//! Terminal rendering of calview-core render descriptions.
//!
//! Extension traits that turn core types into colored terminal output using
//! owo_colors.

use calview_core::calendar::{DayRender, ModalRender, RenderDescription};
use calview_core::color::Color;
use calview_core::day_style::DayBadge;
use calview_core::event::DisplayEvent;
use calview_core::selection::Position;
use calview_core::view::{Relayout, ViewMode};
use chrono::{Datelike, NaiveDate};
use owo_colors::OwoColorize;

/// Width of one month grid cell, in characters.
const CELL_WIDTH: usize = 5;

/// Wider cells for the expanded layout.
const EXPANDED_CELL_WIDTH: usize = 8;

const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

trait Paint {
    fn tinted(&self, color: Color) -> String;
    fn filled(&self, color: Color) -> String;
}

impl Paint for str {
    fn tinted(&self, color: Color) -> String {
        self.truecolor(color.r, color.g, color.b).to_string()
    }

    fn filled(&self, color: Color) -> String {
        self.black().on_truecolor(color.r, color.g, color.b).to_string()
    }
}

impl Render for DisplayEvent {
    fn render(&self) -> String {
        let bullet = "●".tinted(self.accent);
        let time = format_time_span(self);
        let holiday = if self.is_holiday {
            format!(" {}", "Holiday".red())
        } else {
            String::new()
        };
        format!("{} {} {}{}", bullet, time.dimmed(), self.title, holiday)
    }
}

impl Render for RenderDescription {
    fn render(&self) -> String {
        let mut lines = vec![title(&self.layout).bold().to_string()];

        match self.layout.mode {
            ViewMode::Month => {
                lines.extend(render_month_grid(self));
                lines.push(String::new());
                lines.extend(render_agenda(&self.days));
            }
            ViewMode::Week | ViewMode::Day => {
                lines.extend(render_agenda(&self.days));
            }
            ViewMode::List => {
                lines.extend(render_list(&self.list));
            }
        }

        if let Some(modal) = &self.modal {
            lines.push(String::new());
            lines.push(modal.render());
        }

        lines.join("\n")
    }
}

impl Render for ModalRender {
    fn render(&self) -> String {
        let details = &self.details;
        let mut lines = Vec::new();

        let accent = details.accent;
        let header = format!(" {} ", details.title);
        lines.push(
            header
                .bold()
                .on_truecolor(accent.r, accent.g, accent.b)
                .to_string(),
        );
        lines.push(format!("  Start: {}", details.start));
        if let Some(end) = &details.end {
            lines.push(format!("  End: {}", end));
        }
        if let Some(duration) = &details.duration {
            lines.push(format!("  Duration: {}", duration));
        }
        if details.holiday {
            lines.push(format!("  {}", "Holiday".red()));
        }
        lines.push(format!("  {}", details.description.dimmed()));
        lines.push(format_position(&self.position).dimmed().to_string());

        lines.join("\n")
    }
}

fn format_position(position: &Position) -> String {
    format!("  (popup at left {:.0}, top {:.0})", position.left, position.top)
}

/// Toolbar title, e.g. "April 2025", "Apr 6 – 12, 2025" or "April 10, 2025".
fn title(layout: &Relayout) -> String {
    match layout.mode {
        ViewMode::Month | ViewMode::List => layout.anchor.format("%B %Y").to_string(),
        ViewMode::Day => layout.anchor.format("%B %-d, %Y").to_string(),
        ViewMode::Week => {
            let first = layout.range.start;
            let last = layout.range.days().last().unwrap_or(first);
            if first.month() == last.month() {
                format!("{} – {}, {}", first.format("%b %-d"), last.day(), last.year())
            } else if first.year() == last.year() {
                format!("{} – {}, {}", first.format("%b %-d"), last.format("%b %-d"), last.year())
            } else {
                format!("{} – {}", first.format("%b %-d, %Y"), last.format("%b %-d, %Y"))
            }
        }
    }
}

fn render_month_grid(description: &RenderDescription) -> Vec<String> {
    let width = if description.layout.expanded {
        EXPANDED_CELL_WIDTH
    } else {
        CELL_WIDTH
    };
    let month = description.layout.anchor.month();

    let mut lines = vec![
        WEEKDAYS
            .iter()
            .map(|d| format!("{:>width$}", d, width = width))
            .collect::<String>()
            .dimmed()
            .to_string(),
    ];

    for week in description.days.chunks(7) {
        let row: String = week.iter().map(|day| render_cell(day, month, width)).collect();
        lines.push(row);
    }

    lines
}

fn render_cell(day: &DayRender, month: u32, width: usize) -> String {
    let mut label = day.date.day().to_string();
    if let Some(badge) = &day.style.badge {
        // "2 events" collapses to a dot count in the grid
        let count = badge.label.split(' ').next().unwrap_or_default();
        label = format!("{}·{}", label, count);
    }
    let padded = format!("{:>width$}", label, width = width);

    match day.style.background {
        Some(color) => padded.filled(color),
        None if day.date.month() != month => padded.dimmed().to_string(),
        None => padded,
    }
}

fn render_agenda(days: &[DayRender]) -> Vec<String> {
    let mut lines = Vec::new();

    for day in days.iter().filter(|d| !d.visible.is_empty()) {
        let heading = format_date_label(day.date).bold().to_string();
        match &day.style.badge {
            Some(badge) => lines.push(format!("{} {}", heading, render_badge(badge))),
            None => lines.push(heading),
        }
        for event in &day.visible {
            lines.push(format!("  {}", event.render()));
        }
        if day.overflow_count > 0 {
            lines.push(format!("  {}", format!("+{} more", day.overflow_count).dimmed()));
        }
    }

    if lines.is_empty() {
        lines.push("No events".dimmed().to_string());
    }

    lines
}

fn render_badge(badge: &DayBadge) -> String {
    let (fg, bg) = (badge.foreground, badge.background);
    format!(" {} ", badge.label)
        .truecolor(fg.r, fg.g, fg.b)
        .on_truecolor(bg.r, bg.g, bg.b)
        .to_string()
}

fn render_list(events: &[DisplayEvent]) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current_date: Option<NaiveDate> = None;

    for event in events {
        let date = event.date();
        if current_date != Some(date) {
            if current_date.is_some() {
                lines.push(String::new());
            }
            lines.push(format_date_label(date).bold().to_string());
            current_date = Some(date);
        }
        lines.push(format!("  {}", event.render()));
    }

    if lines.is_empty() {
        lines.push("No events".dimmed().to_string());
    }

    lines
}

/// e.g. "Thu Apr 10"
fn format_date_label(date: NaiveDate) -> String {
    date.format("%a %b %-d").to_string()
}

/// e.g. "14:00–15:00", "17:00" or "all-day"
fn format_time_span(event: &DisplayEvent) -> String {
    let start = event.start.format("%H:%M").to_string();
    match event.end {
        Some(end) => format!("{}–{}", start, end.format("%H:%M")),
        None if event.is_holiday => "all-day".to_string(),
        None => format!("{:>5}", start),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calview_core::calendar::CalendarView;
    use calview_core::config::CalviewConfig;
    use calview_core::event::{EventId, EventRecord};
    use calview_core::selection::{Rect, Size};
    use chrono::{Local, TimeZone};

    fn calendar() -> CalendarView {
        let at = |day, hour| Local.with_ymd_and_hms(2025, 4, day, hour, 0, 0).unwrap();
        let mut calendar = CalendarView::new(
            CalviewConfig::default(),
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        );
        calendar.set_events(&[
            EventRecord::new("1", "Team Meeting", at(10, 14), "blue").with_duration(60),
            EventRecord::new("2", "Fun Meeting", at(10, 17), "green").with_duration(60),
            EventRecord::new("3", "Easter", at(20, 0), "red").holiday(),
        ]);
        calendar
    }

    #[test]
    fn test_month_render_lists_events() {
        let output = calendar().render().render();

        assert!(output.contains("April 2025"));
        assert!(output.contains("Team Meeting"));
        assert!(output.contains("14:00–15:00"));
        assert!(output.contains("2 events"));
        assert!(output.contains("all-day"));
    }

    #[test]
    fn test_week_title() {
        let mut calendar = calendar();
        let layout = calendar.set_mode(ViewMode::Week);
        assert_eq!(title(&layout), "Apr 6 – 12, 2025");

        let layout = calendar.set_mode(ViewMode::Day);
        assert_eq!(title(&layout), "April 10, 2025");
    }

    #[test]
    fn test_list_render_groups_by_day() {
        let mut calendar = calendar();
        calendar.set_mode(ViewMode::List);
        let output = calendar.render().render();

        assert!(output.contains("Thu Apr 10"));
        assert!(output.contains("Sun Apr 20"));
    }

    #[test]
    fn test_modal_render() {
        let mut calendar = calendar();
        calendar.resize(Size::new(1200.0, 800.0));
        calendar.click_event(&EventId::from("3"), Rect::new(400.0, 500.0, 100.0, 20.0));

        let modal = calendar.render().modal.unwrap().render();
        assert!(modal.contains("Easter"));
        assert!(modal.contains("Holiday"));
        assert!(modal.contains("No additional details available."));
        assert!(modal.contains("left 300, top 290"));
    }
}
