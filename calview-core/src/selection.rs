//! The selected event and its anchored detail popup.
//!
//! At most one event is selected at a time. The popup is positioned relative
//! to the screen rectangle of the clicked event (the anchor) and has to be
//! positioned again whenever the viewport changes size.

use serde::Serialize;

use crate::event::{DisplayEvent, EventId};

/// A screen rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center_x(&self) -> f64 {
        self.x + self.width / 2.0
    }

    fn is_degenerate(&self) -> bool {
        !(self.x.is_finite() && self.y.is_finite() && self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }

    fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite()) || self.width <= 0.0 || self.height <= 0.0
    }
}

/// Top-left corner of the popup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Position {
    pub left: f64,
    pub top: f64,
}

/// Place a popup of size `modal` next to `anchor` inside `viewport`.
///
/// Prefers directly above the anchor, horizontally centered on it, and
/// falls back to below it when there is no room above. Both coordinates are
/// then clamped to `[margin, viewport - modal - margin]`; if the popup does
/// not fit, the coordinate is `margin`. A zero-size or non-finite viewport
/// or anchor yields `(margin, margin)`.
pub fn compute_modal_position(anchor: Rect, modal: Size, viewport: Size, margin: f64) -> Position {
    let margin = if margin.is_finite() { margin.max(0.0) } else { 0.0 };
    let fallback = Position { left: margin, top: margin };

    if viewport.is_degenerate() || anchor.is_degenerate() {
        return fallback;
    }
    let modal = Size {
        width: if modal.width.is_finite() { modal.width.max(0.0) } else { 0.0 },
        height: if modal.height.is_finite() { modal.height.max(0.0) } else { 0.0 },
    };

    let left = anchor.center_x() - modal.width / 2.0;
    let mut top = anchor.y - modal.height - margin;
    if top < margin {
        top = anchor.bottom() + margin;
    }

    Position {
        left: clamp_axis(left, modal.width, viewport.width, margin),
        top: clamp_axis(top, modal.height, viewport.height, margin),
    }
}

fn clamp_axis(value: f64, extent: f64, viewport: f64, margin: f64) -> f64 {
    let max = viewport - extent - margin;
    if max < margin {
        return margin;
    }
    value.clamp(margin, max)
}

/// The selected event and where it was clicked.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub event: DisplayEvent,
    pub anchor: Rect,
}

/// Single-slot selection.
#[derive(Debug, Clone, Default)]
pub struct SelectionController {
    selection: Option<Selection>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn selected_id(&self) -> Option<&EventId> {
        self.selection.as_ref().map(|s| &s.event.id)
    }

    /// Select `event`, replacing any previous selection.
    pub fn select(&mut self, event: DisplayEvent, anchor: Rect) {
        tracing::debug!(id = %event.id, "event selected");
        self.selection = Some(Selection { event, anchor });
    }

    /// Select the event with `id` from `events`.
    ///
    /// Returns false and leaves the selection untouched when no such event
    /// is displayed, which happens when a click races a data refresh.
    pub fn select_by_id(&mut self, id: &EventId, anchor: Rect, events: &[DisplayEvent]) -> bool {
        match events.iter().find(|e| &e.id == id) {
            Some(event) => {
                self.select(event.clone(), anchor);
                true
            }
            None => {
                tracing::debug!(%id, "ignoring selection of unknown event");
                false
            }
        }
    }

    pub fn clear(&mut self) {
        if self.selection.take().is_some() {
            tracing::debug!("selection cleared");
        }
    }

    /// Drop the selection if its event is no longer in `events`, otherwise
    /// refresh it with the new projection of the same identity.
    pub fn retain(&mut self, events: &[DisplayEvent]) {
        let Some(current) = self.selection.as_mut() else {
            return;
        };

        match events.iter().find(|e| e.id == current.event.id) {
            Some(event) => current.event = event.clone(),
            None => {
                tracing::debug!(id = %current.event.id, "selected event removed, clearing selection");
                self.selection = None;
            }
        }
    }

    /// Popup position for the active selection.
    pub fn modal_position(&self, modal: Size, viewport: Size, margin: f64) -> Option<Position> {
        self.selection
            .as_ref()
            .map(|s| compute_modal_position(s.anchor, modal, viewport, margin))
    }
}
