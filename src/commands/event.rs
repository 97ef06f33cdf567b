use anyhow::{Context, Result};
use calview_core::calendar::CalendarView;
use calview_core::config::CalviewConfig;
use calview_core::event::{EventId, EventRecord};
use calview_core::selection::{Rect, Size};

use crate::render::Render;

pub fn run(
    config: CalviewConfig,
    events: &[EventRecord],
    id: &str,
    viewport: Size,
    anchor: Rect,
    json: bool,
) -> Result<()> {
    let today = chrono::Local::now().date_naive();
    let mut calendar = CalendarView::new(config, today);
    calendar.set_events(events);
    calendar.resize(viewport);

    if !calendar.click_event(&EventId::from(id), anchor) {
        let available: Vec<_> = calendar.events().iter().map(|e| e.id.to_string()).collect();
        anyhow::bail!("Event '{}' not found. Available: {}", id, available.join(", "));
    }

    let Some(modal) = calendar.render().modal else {
        return Ok(());
    };

    if json {
        let output = serde_json::to_string_pretty(&modal).context("Failed to serialize event")?;
        println!("{}", output);
    } else {
        println!("{}", modal.render());
    }

    Ok(())
}

/// Parse "WIDTHxHEIGHT".
pub fn parse_size(s: &str) -> Result<Size> {
    let (width, height) = s
        .split_once('x')
        .with_context(|| format!("Invalid size '{}'. Expected WIDTHxHEIGHT", s))?;

    Ok(Size::new(parse_number(width)?, parse_number(height)?))
}

/// Parse "X,Y,WIDTH,HEIGHT".
pub fn parse_rect(s: &str) -> Result<Rect> {
    let parts = s
        .split(',')
        .map(parse_number)
        .collect::<Result<Vec<_>>>()?;

    match parts.as_slice() {
        [x, y, width, height] => Ok(Rect::new(*x, *y, *width, *height)),
        _ => anyhow::bail!("Invalid rectangle '{}'. Expected X,Y,WIDTH,HEIGHT", s),
    }
}

fn parse_number(s: &str) -> Result<f64> {
    s.trim()
        .parse::<f64>()
        .with_context(|| format!("Invalid number '{}'", s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_size() {
        assert_eq!(parse_size("1280x800").unwrap(), Size::new(1280.0, 800.0));
        assert!(parse_size("1280").is_err());
        assert!(parse_size("widex800").is_err());
    }

    #[test]
    fn test_parse_rect() {
        assert_eq!(parse_rect("580, 400, 120, 24").unwrap(), Rect::new(580.0, 400.0, 120.0, 24.0));
        assert!(parse_rect("1,2,3").is_err());
    }
}
