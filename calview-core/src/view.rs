//! View mode and layout state.
//!
//! Every transition returns a [`Relayout`] describing the grid the rendering
//! layer has to lay out next, since grid dimensions depend on both the mode
//! and the expanded flag.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::CalviewConfig;
use crate::date_range::{VisibleRange, shift_anchor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Month,
    Week,
    Day,
    List,
}

impl ViewMode {
    pub const ALL: [ViewMode; 4] = [ViewMode::Month, ViewMode::Week, ViewMode::Day, ViewMode::List];

    pub fn as_str(self) -> &'static str {
        match self {
            ViewMode::Month => "month",
            ViewMode::Week => "week",
            ViewMode::Day => "day",
            ViewMode::List => "list",
        }
    }

    pub fn grid(self) -> GridKind {
        match self {
            ViewMode::Month => GridKind::DayGrid,
            ViewMode::Week | ViewMode::Day => GridKind::TimeGrid,
            ViewMode::List => GridKind::List,
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s)
            .ok_or_else(|| format!("Unknown view '{}'. Expected month, week, day or list", s))
    }
}

/// How a mode lays out its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GridKind {
    /// One cell per day, events stacked inside.
    DayGrid,
    /// Day columns with hourly slots.
    TimeGrid,
    /// Chronological list grouped by day.
    List,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ViewState {
    pub mode: ViewMode,
    pub expanded: bool,
}

/// Signal to the rendering layer that the grid must be laid out again.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Relayout {
    pub mode: ViewMode,
    pub grid: GridKind,
    pub expanded: bool,
    pub aspect_ratio: f64,
    /// Date the view is anchored on (the period being browsed).
    pub anchor: NaiveDate,
    pub range: VisibleRange,
}

/// Owns the view state and the date the view is anchored on.
#[derive(Debug, Clone)]
pub struct ViewController {
    state: ViewState,
    anchor: NaiveDate,
    expanded_aspect_ratio: f64,
    compact_aspect_ratio: f64,
}

impl ViewController {
    pub fn new(config: &CalviewConfig, anchor: NaiveDate) -> Self {
        ViewController {
            state: ViewState::default(),
            anchor,
            expanded_aspect_ratio: config.expanded_aspect_ratio,
            compact_aspect_ratio: config.compact_aspect_ratio,
        }
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn set_mode(&mut self, mode: ViewMode) -> Relayout {
        tracing::debug!(from = %self.state.mode, to = %mode, "view mode changed");
        self.state.mode = mode;
        self.relayout()
    }

    pub fn toggle_expanded(&mut self) -> Relayout {
        self.state.expanded = !self.state.expanded;
        tracing::debug!(expanded = self.state.expanded, "layout toggled");
        self.relayout()
    }

    pub fn prev(&mut self) -> Relayout {
        self.anchor = shift_anchor(self.state.mode, self.anchor, -1);
        self.relayout()
    }

    pub fn next(&mut self) -> Relayout {
        self.anchor = shift_anchor(self.state.mode, self.anchor, 1);
        self.relayout()
    }

    /// Jump back to `today`.
    pub fn today(&mut self, today: NaiveDate) -> Relayout {
        self.anchor = today;
        self.relayout()
    }

    pub fn aspect_ratio(&self) -> f64 {
        if self.state.expanded {
            self.expanded_aspect_ratio
        } else {
            self.compact_aspect_ratio
        }
    }

    pub fn range(&self) -> VisibleRange {
        VisibleRange::for_mode(self.state.mode, self.anchor)
    }

    /// The layout for the current state.
    pub fn relayout(&self) -> Relayout {
        Relayout {
            mode: self.state.mode,
            grid: self.state.mode.grid(),
            expanded: self.state.expanded,
            aspect_ratio: self.aspect_ratio(),
            anchor: self.anchor,
            range: self.range(),
        }
    }
}
