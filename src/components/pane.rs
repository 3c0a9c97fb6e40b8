//! Chat, workspace and terminal panes of the home route
//!
//! The views behind these panes are separate programs; the shell only frames
//! them and marks the focused one.

use crate::components::calculate_home_layout;
use crate::model::ui::{PaneFocus, SplitSizes};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

/// Data the panes read while drawing
pub struct HomeRenderContext<'a> {
    pub sizes: &'a SplitSizes,
    pub focus: PaneFocus,
    pub session: Option<&'a str>,
}

pub fn draw_home_screen(frame: &mut Frame, area: Rect, ctx: &HomeRenderContext) {
    let layout = calculate_home_layout(area, ctx.sizes);

    draw_pane(frame, layout.chat, PaneFocus::Chat, ctx, chat_body(ctx.session));
    draw_pane(
        frame,
        layout.workspace,
        PaneFocus::Workspace,
        ctx,
        vec![Line::from(Span::styled(
            "No file open",
            Style::default().fg(Color::DarkGray),
        ))],
    );
    draw_pane(
        frame,
        layout.terminal,
        PaneFocus::Terminal,
        ctx,
        vec![Line::from(Span::styled("$ ", Style::default().fg(Color::Green)))],
    );
}

fn chat_body(session: Option<&str>) -> Vec<Line<'static>> {
    match session {
        Some(id) => vec![
            Line::from(Span::styled(
                "Agent connected.",
                Style::default().fg(Color::Green),
            )),
            Line::from(Span::styled(
                format!("Session {}", id),
                Style::default().fg(Color::DarkGray),
            )),
        ],
        None => vec![Line::from(Span::styled(
            "Waiting for a session...",
            Style::default().fg(Color::Yellow),
        ))],
    }
}

fn draw_pane(
    frame: &mut Frame,
    area: Rect,
    kind: PaneFocus,
    ctx: &HomeRenderContext,
    body: Vec<Line<'static>>,
) {
    let focused = ctx.focus == kind;
    let border_style = if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title_style = if focused {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .title(Span::styled(format!(" {} ", kind.title()), title_style));

    frame.render_widget(
        Paragraph::new(body).block(block).wrap(Wrap { trim: false }),
        area,
    );
}
