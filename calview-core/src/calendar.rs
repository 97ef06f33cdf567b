//! The calendar view: the single rendering context.
//!
//! `CalendarView` owns the view state, the selection and the derived day
//! buckets. The host feeds it an event list and user actions, and reads back
//! a [`RenderDescription`].

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CalviewConfig;
use crate::date_range::VisibleRange;
use crate::day_bucket::{DayBuckets, aggregate};
use crate::day_style::{DayStyle, day_styles};
use crate::details::EventDetails;
use crate::event::{DisplayEvent, EventId, EventRecord};
use crate::projector::project;
use crate::selection::{Position, Rect, SelectionController, Size};
use crate::view::{Relayout, ViewController, ViewMode, ViewState};

/// One day cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayRender {
    pub date: NaiveDate,
    /// At most `visible_cap` events.
    pub visible: Vec<DisplayEvent>,
    pub overflow_count: usize,
    pub style: DayStyle,
}

/// The open event popup.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModalRender {
    pub details: EventDetails,
    pub position: Position,
}

/// Everything the presentation layer needs to draw the calendar.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderDescription {
    pub layout: Relayout,
    pub days: Vec<DayRender>,
    /// Events in the range sorted by start time (list mode only).
    pub list: Vec<DisplayEvent>,
    pub modal: Option<ModalRender>,
}

pub struct CalendarView {
    config: CalviewConfig,
    events: Vec<DisplayEvent>,
    buckets: DayBuckets,
    view: ViewController,
    selection: SelectionController,
    viewport: Size,
    modal_size: Size,
}

impl CalendarView {
    pub fn new(config: CalviewConfig, today: NaiveDate) -> Self {
        let view = ViewController::new(&config, today);
        let modal_size = Size::new(f64::from(config.modal_width), f64::from(config.modal_height));

        CalendarView {
            config,
            events: Vec::new(),
            buckets: DayBuckets::new(),
            view,
            selection: SelectionController::new(),
            viewport: Size::default(),
            modal_size,
        }
    }

    pub fn config(&self) -> &CalviewConfig {
        &self.config
    }

    /// Replace the event set. Re-derives everything, and drops the selection
    /// if its event disappeared.
    pub fn set_events(&mut self, records: &[EventRecord]) {
        self.events = project(records);
        self.buckets = aggregate(&self.events, self.config.visible_cap);
        self.selection.retain(&self.events);
        tracing::debug!(
            events = self.events.len(),
            days = self.buckets.len(),
            "event set replaced"
        );
    }

    pub fn events(&self) -> &[DisplayEvent] {
        &self.events
    }

    pub fn buckets(&self) -> &DayBuckets {
        &self.buckets
    }

    pub fn view_state(&self) -> ViewState {
        self.view.state()
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> Relayout {
        self.view.set_mode(mode)
    }

    pub fn toggle_expanded(&mut self) -> Relayout {
        self.view.toggle_expanded()
    }

    pub fn prev(&mut self) -> Relayout {
        self.view.prev()
    }

    pub fn next(&mut self) -> Relayout {
        self.view.next()
    }

    pub fn today(&mut self, today: NaiveDate) -> Relayout {
        self.view.today(today)
    }

    /// Select the clicked event. Unknown ids are ignored.
    pub fn click_event(&mut self, id: &EventId, anchor: Rect) -> bool {
        self.selection.select_by_id(id, anchor, &self.events)
    }

    pub fn close_modal(&mut self) {
        self.selection.clear();
    }

    pub fn selected(&self) -> Option<&DisplayEvent> {
        self.selection.selection().map(|s| &s.event)
    }

    /// Record the new viewport size and reposition the popup, if open.
    pub fn resize(&mut self, viewport: Size) -> Option<Position> {
        self.viewport = viewport;
        self.modal_position()
    }

    /// Record the measured popup size and reposition it, if open.
    pub fn measure_modal(&mut self, size: Size) -> Option<Position> {
        self.modal_size = size;
        self.modal_position()
    }

    pub fn modal_position(&self) -> Option<Position> {
        self.selection.modal_position(
            self.modal_size,
            self.viewport,
            f64::from(self.config.modal_margin),
        )
    }

    pub fn range(&self) -> VisibleRange {
        self.view.range()
    }

    pub fn render(&self) -> RenderDescription {
        let layout = self.view.relayout();
        let range = layout.range;

        let days = day_styles(&range, &self.buckets)
            .into_iter()
            .map(|style| {
                let bucket = self.buckets.get(&style.date);
                DayRender {
                    date: style.date,
                    visible: bucket.map(|b| b.visible().to_vec()).unwrap_or_default(),
                    overflow_count: bucket.map(|b| b.overflow_count).unwrap_or(0),
                    style,
                }
            })
            .collect();

        let list = if layout.mode == ViewMode::List {
            let mut list: Vec<DisplayEvent> = self
                .events
                .iter()
                .filter(|e| range.contains(e.date()))
                .cloned()
                .collect();
            list.sort_by_key(|e| e.start);
            list
        } else {
            Vec::new()
        };

        let modal = self.selection.selection().and_then(|s| {
            self.modal_position().map(|position| ModalRender {
                details: EventDetails::from_event(&s.event),
                position,
            })
        });

        RenderDescription {
            layout,
            days,
            list,
            modal,
        }
    }
}
