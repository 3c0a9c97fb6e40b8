//! Navigation bar: route links and the model configuration trigger

use crate::action::Action;
use crate::component::Component;
use crate::model::route::Route;
use anyhow::Result;
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NavItem {
    Home,
    Login,
    ModelConfig,
}

impl NavItem {
    const ALL: [NavItem; 3] = [NavItem::Home, NavItem::Login, NavItem::ModelConfig];

    fn label(&self) -> &str {
        match self {
            NavItem::Home => "Home",
            NavItem::Login => "Login",
            NavItem::ModelConfig => "Model Config",
        }
    }

    fn key_hint(&self) -> &str {
        match self {
            NavItem::Home => "F1",
            NavItem::Login => "F2",
            NavItem::ModelConfig => "F3",
        }
    }

    fn action(&self) -> Action {
        match self {
            NavItem::Home => Action::Navigate(Route::Home),
            NavItem::Login => Action::Navigate(Route::Login),
            NavItem::ModelConfig => Action::OpenModelConfig,
        }
    }
}

/// Top navigation bar
#[derive(Default)]
pub struct NavBar {
    /// Route highlighted as current
    pub active: Route,
    /// Screen areas of the items from the last draw, for mouse hits
    hit_areas: Vec<(NavItem, Rect)>,
}

impl NavBar {
    pub fn new() -> Self {
        Self::default()
    }

    fn is_active(&self, item: NavItem) -> bool {
        matches!(
            (item, self.active),
            (NavItem::Home, Route::Home) | (NavItem::Login, Route::Login)
        )
    }
}

impl Component for NavBar {
    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let position = Position::new(mouse.column, mouse.row);
        let action = self
            .hit_areas
            .iter()
            .find(|(_, rect)| rect.contains(position))
            .map(|(item, _)| item.action());
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        self.hit_areas.clear();
        let mut spans = vec![Span::raw(" ")];
        let mut x = inner.x + 1;

        for item in NavItem::ALL {
            let text = format!(" {} {} ", item.key_hint(), item.label());
            let width = text.chars().count() as u16;
            let style = if self.is_active(item) {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            self.hit_areas
                .push((item, Rect::new(x, inner.y, width, 1).intersection(inner)));
            spans.push(Span::styled(text, style));
            spans.push(Span::raw("  "));
            x = x.saturating_add(width + 2);
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), inner);
        Ok(())
    }
}
