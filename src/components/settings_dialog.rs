//! Settings overlay
//!
//! Edits the persisted settings. The dialog only holds the draft; the App
//! writes it to disk when it receives `Action::SaveSettings`.

use crate::action::Action;
use crate::component::Component;
use crate::components::input::TextField;
use crate::components::centered_popup;
use crate::config::Settings;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SettingsRow {
    Model,
    Agent,
    Language,
    ApiKey,
    Save,
}

impl SettingsRow {
    const ALL: [SettingsRow; 5] = [
        SettingsRow::Model,
        SettingsRow::Agent,
        SettingsRow::Language,
        SettingsRow::ApiKey,
        SettingsRow::Save,
    ];
}

#[derive(Debug, Default)]
pub struct SettingsDialog {
    pub llm_model: TextField,
    pub agent: TextField,
    pub language: TextField,
    pub llm_api_key: TextField,
    selected: usize,
}

impl SettingsDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a draft from the given settings and select the first row
    pub fn reset(&mut self, settings: &Settings) {
        self.llm_model = TextField::with_value(settings.llm_model.clone());
        self.agent = TextField::with_value(settings.agent.clone());
        self.language = TextField::with_value(settings.language.clone());
        self.llm_api_key = TextField {
            value: settings.llm_api_key.clone(),
            masked: true,
        };
        self.selected = 0;
    }

    /// The draft as settings, with surrounding whitespace removed
    pub fn draft(&self) -> Settings {
        Settings {
            llm_model: self.llm_model.value.trim().to_string(),
            agent: self.agent.value.trim().to_string(),
            language: self.language.value.trim().to_string(),
            llm_api_key: self.llm_api_key.value.trim().to_string(),
            ..Settings::default()
        }
    }

    fn row(&self) -> SettingsRow {
        SettingsRow::ALL[self.selected % SettingsRow::ALL.len()]
    }

    fn field_mut(&mut self, row: SettingsRow) -> Option<&mut TextField> {
        match row {
            SettingsRow::Model => Some(&mut self.llm_model),
            SettingsRow::Agent => Some(&mut self.agent),
            SettingsRow::Language => Some(&mut self.language),
            SettingsRow::ApiKey => Some(&mut self.llm_api_key),
            SettingsRow::Save => None,
        }
    }
}

impl Component for SettingsDialog {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        let rows = SettingsRow::ALL.len();
        let action = match key.code {
            KeyCode::Esc => Some(Action::CloseSettings),
            KeyCode::Tab | KeyCode::Down => {
                self.selected = (self.selected + 1) % rows;
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                self.selected = (self.selected + rows - 1) % rows;
                None
            }
            KeyCode::Enter => match self.row() {
                SettingsRow::Save => Some(Action::SaveSettings),
                _ => {
                    self.selected = (self.selected + 1) % rows;
                    None
                }
            },
            _ => {
                let row = self.row();
                if let Some(field) = self.field_mut(row) {
                    field.handle_key(key);
                }
                None
            }
        };
        Ok(action)
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 60, 13);
        frame.render_widget(Clear, popup);

        let width = popup.width.saturating_sub(4) as usize;
        let row = self.row();

        let save_style = if row == SettingsRow::Save {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
        };

        let lines = vec![
            Line::from(""),
            self.llm_model.line("Model", "e.g. gpt-4o", row == SettingsRow::Model, width),
            self.agent.line("Agent", "e.g. CodeActAgent", row == SettingsRow::Agent, width),
            self.language.line("Language", "e.g. en", row == SettingsRow::Language, width),
            self.llm_api_key.line("API Key", "optional", row == SettingsRow::ApiKey, width),
            Line::from(""),
            Line::from(vec![Span::raw("  "), Span::styled(" Save ", save_style)]),
            Line::from(""),
            Line::from(Span::styled(
                "  Tab/↑↓ move   Enter next/save   Esc close",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Settings ")
                .title_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
                .border_style(Style::default().fg(Color::Yellow)),
        );
        frame.render_widget(paragraph, popup);
        Ok(())
    }
}
