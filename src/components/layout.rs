//! Layout calculations for the UI

use crate::model::ui::{SplitSizes, PANE_MIN_HEIGHT, PANE_MIN_WIDTH};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const NAV_HEIGHT: u16 = 3;
pub const CONTROLS_HEIGHT: u16 = 3;

/// Outer shell areas, present on every route
pub struct ShellLayout {
    pub nav: Rect,
    pub content: Rect,
    pub controls: Rect,
}

/// The three panes of the home route
pub struct HomeLayout {
    pub chat: Rect,
    pub workspace: Rect,
    pub terminal: Rect,
}

/// Calculate centered popup area
pub fn centered_popup(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let popup_x = area.x + (area.width - width) / 2;
    let popup_y = area.y + (area.height - height) / 2;

    Rect::new(popup_x, popup_y, width, height)
}

/// Nav bar on top, controls at the bottom, content in between
pub fn calculate_shell_layout(area: Rect) -> ShellLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(NAV_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(CONTROLS_HEIGHT),
        ])
        .split(area);

    ShellLayout {
        nav: chunks[0],
        content: chunks[1],
        controls: chunks[2],
    }
}

/// Chat on the left; workspace above terminal on the right
pub fn calculate_home_layout(area: Rect, sizes: &SplitSizes) -> HomeLayout {
    let chat_width = clamp_split(sizes.chat_width, area.width, PANE_MIN_WIDTH);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(chat_width), Constraint::Min(0)])
        .split(area);

    let workspace_height = clamp_split(sizes.workspace_height, horizontal[1].height, PANE_MIN_HEIGHT);
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(workspace_height), Constraint::Min(0)])
        .split(horizontal[1]);

    HomeLayout {
        chat: horizontal[0],
        workspace: vertical[0],
        terminal: vertical[1],
    }
}

/// Size of the first pane of a split, leaving `min` for the second where possible
fn clamp_split(requested: u16, total: u16, min: u16) -> u16 {
    requested
        .min(total.saturating_sub(min))
        .max(min)
        .min(total)
}
