//! Always-mounted surfaces: the error panel and the toast stack

use crate::model::notify::{ErrorLog, ToastLevel, Toasts};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

const TOAST_WIDTH: u16 = 40;
const ERRORS_WIDTH: u16 = 60;

/// Stack toasts in the top-right corner, oldest on top
pub fn draw_toasts(frame: &mut Frame, area: Rect, toasts: &Toasts) {
    let width = TOAST_WIDTH.min(area.width);
    let mut y = area.y + 1;

    for toast in toasts.iter() {
        if y + 3 > area.y + area.height {
            break;
        }
        let color = match toast.level {
            ToastLevel::Info => Color::Cyan,
            ToastLevel::Success => Color::Green,
        };
        let rect = Rect::new(area.x + area.width - width, y, width, 3);

        frame.render_widget(Clear, rect);
        frame.render_widget(
            Paragraph::new(Line::from(Span::raw(toast.message.clone()))).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(color)),
            ),
            rect,
        );
        y += 3;
    }
}

/// Error panel above the control bar; hidden while there is nothing to show
pub fn draw_errors(frame: &mut Frame, area: Rect, errors: &ErrorLog) {
    if errors.is_empty() {
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    for report in errors.iter() {
        lines.push(Line::from(vec![
            Span::styled(
                format!("{} ", report.formatted_time()),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(report.message.clone(), Style::default().fg(Color::Red)),
        ]));
    }

    let width = ERRORS_WIDTH.min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    let rect = Rect::new(
        area.x + area.width - width,
        area.y + area.height - height,
        width,
        height,
    );

    frame.render_widget(Clear, rect);
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Red))
                    .title(" Errors (F8 to dismiss) ")
                    .title_style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
            ),
        rect,
    );
}
