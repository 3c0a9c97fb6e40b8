//! Login view
//!
//! Credential form for the `/login` route. Fields are local to the view and
//! submitting only writes a log line.

use crate::action::Action;
use crate::component::Component;
use crate::components::input::TextField;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
    Submit,
}

impl LoginField {
    fn next(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Submit,
            LoginField::Submit => LoginField::Username,
        }
    }

    fn prev(&self) -> LoginField {
        match self {
            LoginField::Username => LoginField::Submit,
            LoginField::Password => LoginField::Username,
            LoginField::Submit => LoginField::Password,
        }
    }
}

#[derive(Debug)]
pub struct LoginForm {
    pub username: TextField,
    pub password: TextField,
    pub focus: LoginField,
}

impl Default for LoginForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            username: TextField::new(),
            password: TextField::masked(),
            focus: LoginField::default(),
        }
    }

    fn submit(&self) {
        tracing::info!(username = %self.username.value, "login attempted");
    }
}

impl Component for LoginForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Enter => match self.focus {
                LoginField::Username => self.focus = LoginField::Password,
                LoginField::Password | LoginField::Submit => self.submit(),
            },
            _ => {
                let field = match self.focus {
                    LoginField::Username => &mut self.username,
                    LoginField::Password => &mut self.password,
                    LoginField::Submit => return Ok(None),
                };
                field.handle_key(key);
            }
        }
        Ok(None)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 50, 10);
        let width = popup.width.saturating_sub(4) as usize;

        let button_style = if self.focus == LoginField::Submit {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(""),
            self.username
                .line("Username", "Username", self.focus == LoginField::Username, width),
            Line::from(""),
            self.password
                .line("Password", "Password", self.focus == LoginField::Password, width),
            Line::from(""),
            Line::from(vec![Span::raw("  "), Span::styled(" Login ", button_style)]),
            Line::from(""),
            Line::from(Span::styled(
                "  Tab/↑↓ move   Enter submit",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Login ")
                .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup);
        Ok(())
    }
}
