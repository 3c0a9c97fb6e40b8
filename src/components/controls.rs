//! Bottom control bar with agent status and the settings cog

use crate::action::Action;
use crate::component::Component;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const COG_LABEL: &str = " ⚙ Settings (F10) ";
const HINTS_WIDTH: u16 = 30;

#[derive(Default)]
pub struct ControlBar {
    /// Session the agent is attached to
    pub session: Option<String>,
    cog_area: Option<Rect>,
}

impl ControlBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn status_line(&self) -> Line<'static> {
        match &self.session {
            Some(id) => Line::from(vec![
                Span::styled("● ", Style::default().fg(Color::Green)),
                Span::raw("Agent ready  "),
                Span::styled(format!("session {}", id), Style::default().fg(Color::DarkGray)),
            ]),
            None => Line::from(vec![
                Span::styled("○ ", Style::default().fg(Color::Yellow)),
                Span::raw("No active session"),
            ]),
        }
    }
}

impl Component for ControlBar {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let hit = self
            .cog_area
            .is_some_and(|rect| rect.contains(Position::new(mouse.column, mouse.row)));
        Ok(hit.then_some(Action::OpenSettings))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let cog_width = COG_LABEL.chars().count() as u16;
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(HINTS_WIDTH),
                Constraint::Min(0),
                Constraint::Length(cog_width),
            ])
            .split(inner);

        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw(" "),
                Span::styled(
                    "Tab",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" focus  ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    "Alt+←→↑↓",
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" resize  ", Style::default().fg(Color::DarkGray)),
            ])),
            chunks[0],
        );
        frame.render_widget(
            Paragraph::new(self.status_line()).alignment(Alignment::Center),
            chunks[1],
        );

        frame.render_widget(
            Paragraph::new(Span::styled(
                COG_LABEL,
                Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
            )),
            chunks[2],
        );
        self.cog_area = Some(chunks[2]);

        Ok(())
    }
}
