//! Application shell: which page is shown and whether the menu covers it.
//!
//! The shell state is passed down explicitly to whatever renders the pages;
//! while the menu is open no page is rendered.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Route {
    #[default]
    Calendar,
    Profile,
}

impl Route {
    /// Menu entries, in menu order.
    pub const ALL: [Route; 2] = [Route::Calendar, Route::Profile];

    pub fn label(self) -> &'static str {
        match self {
            Route::Calendar => "Calendar",
            Route::Profile => "Profile",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Calendar => "/calendar",
            Route::Profile => "/profile",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = String;

    /// "/" and "/calendar" both show the calendar.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim_end_matches('/') {
            "" | "/calendar" => Ok(Route::Calendar),
            "/profile" => Ok(Route::Profile),
            other => Err(format!("No page at '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShellState {
    pub route: Route,
    pub menu_open: bool,
}

impl ShellState {
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }

    /// Follow a menu link: switches page and closes the menu.
    pub fn navigate(&mut self, route: Route) {
        tracing::debug!(%route, "navigate");
        self.route = route;
        self.menu_open = false;
    }

    /// The page to render, or `None` while the menu is open.
    pub fn visible_route(&self) -> Option<Route> {
        (!self.menu_open).then_some(self.route)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paths_resolve_to_routes() {
        assert_eq!("/".parse::<Route>().unwrap(), Route::Calendar);
        assert_eq!("/calendar".parse::<Route>().unwrap(), Route::Calendar);
        assert_eq!("/profile/".parse::<Route>().unwrap(), Route::Profile);
        assert!("/settings".parse::<Route>().is_err());
    }

    #[test]
    fn test_open_menu_hides_page() {
        let mut shell = ShellState::default();
        assert_eq!(shell.visible_route(), Some(Route::Calendar));

        shell.toggle_menu();
        assert_eq!(shell.visible_route(), None);

        shell.navigate(Route::Profile);
        assert_eq!(shell.visible_route(), Some(Route::Profile));

        shell.toggle_menu();
        shell.close_menu();
        assert_eq!(shell.visible_route(), Some(Route::Profile));
    }
}
