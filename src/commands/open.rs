use anyhow::{Result, anyhow};
use calview_core::config::CalviewConfig;
use calview_core::event::EventRecord;
use calview_core::shell::{Route, ShellState};
use calview_core::view::ViewMode;
use chrono::NaiveDate;
use owo_colors::OwoColorize;

pub fn run(
    config: CalviewConfig,
    events: &[EventRecord],
    path: &str,
    menu: bool,
    date: NaiveDate,
) -> Result<()> {
    let route: Route = path.parse().map_err(|e: String| anyhow!(e))?;

    let mut shell = ShellState::default();
    shell.navigate(route);
    if menu {
        shell.toggle_menu();
    }

    match shell.visible_route() {
        None => {
            for line in menu_lines(&shell) {
                println!("{}", line);
            }
        }
        Some(Route::Calendar) => {
            crate::commands::show::run(config, events, ViewMode::Month, date, false, false)?;
        }
        Some(Route::Profile) => {
            println!("{}", "Profile".bold());
            println!("{}", "Profile editing is not available in the terminal.".dimmed());
        }
    }

    Ok(())
}

/// Menu entries, with the current page marked.
fn menu_lines(shell: &ShellState) -> Vec<String> {
    Route::ALL
        .iter()
        .map(|route| {
            let marker = if *route == shell.route { "›" } else { " " };
            format!("{} {:<10} {}", marker, route.label(), route.path().dimmed())
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_marks_current_page() {
        let mut shell = ShellState::default();
        shell.navigate(Route::Profile);
        shell.toggle_menu();

        let lines = menu_lines(&shell);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  Calendar"));
        assert!(lines[1].starts_with("› Profile"));
    }

    #[test]
    fn test_unknown_path_is_an_error() {
        let err = run(
            CalviewConfig::default(),
            &[],
            "/settings",
            false,
            NaiveDate::from_ymd_opt(2025, 4, 10).unwrap(),
        )
        .unwrap_err();
        assert!(err.to_string().contains("/settings"));
    }
}
