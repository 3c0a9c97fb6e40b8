//! Model configuration dialog
//!
//! Picks the model backend and its credentials. Like the login view this is a
//! local form: saving writes a log line and nothing is persisted.

use crate::action::Action;
use crate::component::Component;
use crate::components::input::TextField;
use crate::components::centered_popup;
use anyhow::Result;
use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    layout::{Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

const CLOSE_LABEL: &str = "[×]";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ModelType {
    #[default]
    OpenAi,
    Ollama,
    Custom,
}

impl ModelType {
    const ALL: [ModelType; 3] = [ModelType::OpenAi, ModelType::Ollama, ModelType::Custom];

    pub fn value(&self) -> &str {
        match self {
            ModelType::OpenAi => "openai",
            ModelType::Ollama => "ollama",
            ModelType::Custom => "custom",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ModelType::OpenAi => "OpenAI",
            ModelType::Ollama => "Ollama (Local)",
            ModelType::Custom => "Custom",
        }
    }

    fn index(&self) -> usize {
        Self::ALL.iter().position(|m| m == self).unwrap_or(0)
    }

    fn next(&self) -> ModelType {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    fn prev(&self) -> ModelType {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    ModelType,
    ApiKey,
    CustomModelPath,
    Save,
}

#[derive(Debug, Default)]
pub struct ModelConfigForm {
    pub model_type: ModelType,
    pub api_key: TextField,
    pub custom_model_path: TextField,
    focus_index: usize,
    close_area: Option<Rect>,
}

impl ModelConfigForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fields shown for the current model type, top to bottom
    pub fn fields(&self) -> Vec<ConfigField> {
        let mut fields = vec![ConfigField::ModelType];
        match self.model_type {
            ModelType::OpenAi => fields.push(ConfigField::ApiKey),
            ModelType::Custom => fields.push(ConfigField::CustomModelPath),
            ModelType::Ollama => {}
        }
        fields.push(ConfigField::Save);
        fields
    }

    pub fn focus(&self) -> ConfigField {
        let fields = self.fields();
        fields[self.focus_index.min(fields.len() - 1)]
    }

    fn move_focus(&mut self, forward: bool) {
        let len = self.fields().len();
        let current = self.focus_index.min(len - 1);
        self.focus_index = if forward {
            (current + 1) % len
        } else {
            (current + len - 1) % len
        };
    }

    fn save(&self) {
        tracing::info!(model_type = self.model_type.value(), "model configuration saved");
    }
}

impl Component for ModelConfigForm {
    fn handle_key_event(&mut self, key: KeyEvent) -> Result<Option<Action>> {
        if key.code == KeyCode::Esc
            || (key.code == KeyCode::Char('x') && key.modifiers.contains(KeyModifiers::CONTROL))
        {
            return Ok(Some(Action::CloseModelConfig));
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.move_focus(true),
            KeyCode::BackTab | KeyCode::Up => self.move_focus(false),
            _ => match self.focus() {
                ConfigField::ModelType => match key.code {
                    KeyCode::Right | KeyCode::Char(' ') => self.model_type = self.model_type.next(),
                    KeyCode::Left => self.model_type = self.model_type.prev(),
                    _ => {}
                },
                ConfigField::ApiKey => {
                    self.api_key.handle_key(key);
                }
                ConfigField::CustomModelPath => {
                    self.custom_model_path.handle_key(key);
                }
                ConfigField::Save => {
                    if key.code == KeyCode::Enter {
                        self.save();
                    }
                }
            },
        }
        Ok(None)
    }

    fn handle_mouse_event(&mut self, mouse: MouseEvent) -> Result<Option<Action>> {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return Ok(None);
        }
        let hit = self
            .close_area
            .is_some_and(|rect| rect.contains(Position::new(mouse.column, mouse.row)));
        Ok(hit.then_some(Action::CloseModelConfig))
    }

    fn draw(&mut self, frame: &mut Frame, area: Rect) -> Result<()> {
        let popup = centered_popup(area, 56, 12);
        frame.render_widget(Clear, popup);

        let width = popup.width.saturating_sub(4) as usize;
        let focus = self.focus();
        let focused_style = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);

        let select_focused = focus == ConfigField::ModelType;
        let mut lines = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    format!("{} {:<10} ", if select_focused { ">" } else { " " }, "Model"),
                    if select_focused {
                        focused_style
                    } else {
                        Style::default().fg(Color::Gray)
                    },
                ),
                Span::styled("◀ ", Style::default().fg(Color::DarkGray)),
                Span::styled(
                    self.model_type.label().to_string(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ▶", Style::default().fg(Color::DarkGray)),
            ]),
        ];

        match self.model_type {
            ModelType::OpenAi => lines.push(self.api_key.line(
                "API Key",
                "API Key",
                focus == ConfigField::ApiKey,
                width,
            )),
            ModelType::Custom => lines.push(self.custom_model_path.line(
                "Path",
                "Custom Model Path",
                focus == ConfigField::CustomModelPath,
                width,
            )),
            ModelType::Ollama => lines.push(Line::from(Span::styled(
                "  Uses the local Ollama server",
                Style::default().fg(Color::DarkGray),
            ))),
        }

        let save_style = if focus == ConfigField::Save {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Blue)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD)
        };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::raw("  "),
            Span::styled(" Save Configuration ", save_style),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            "  Tab move  ←→ change  Enter save  Esc/Ctrl+X close",
            Style::default().fg(Color::DarkGray),
        )));

        let paragraph = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Model Configuration ")
                .title_style(focused_style)
                .border_style(Style::default().fg(Color::Cyan)),
        );
        frame.render_widget(paragraph, popup);

        let close_width = CLOSE_LABEL.chars().count() as u16;
        let close_area = Rect::new(
            (popup.x + popup.width).saturating_sub(close_width + 1),
            popup.y,
            close_width,
            1,
        )
        .intersection(popup);
        frame.render_widget(
            Paragraph::new(Span::styled(CLOSE_LABEL, Style::default().fg(Color::Gray))),
            close_area,
        );
        self.close_area = Some(close_area);

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_defaults() {
        let form = ModelConfigForm::new();
        assert_eq!(form.model_type, ModelType::OpenAi);
        assert_eq!(form.model_type.value(), "openai");
        assert!(form.api_key.value.is_empty());
        assert!(form.custom_model_path.value.is_empty());
        assert_eq!(form.focus(), ConfigField::ModelType);
    }

    #[test]
    fn test_fields_follow_model_type() {
        let mut form = ModelConfigForm::new();
        assert_eq!(
            form.fields(),
            vec![ConfigField::ModelType, ConfigField::ApiKey, ConfigField::Save]
        );

        form.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(form.model_type, ModelType::Ollama);
        assert_eq!(form.fields(), vec![ConfigField::ModelType, ConfigField::Save]);

        form.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(form.model_type, ModelType::Custom);
        assert_eq!(
            form.fields(),
            vec![ConfigField::ModelType, ConfigField::CustomModelPath, ConfigField::Save]
        );

        form.handle_key_event(key(KeyCode::Right)).unwrap();
        assert_eq!(form.model_type, ModelType::OpenAi);
        form.handle_key_event(key(KeyCode::Left)).unwrap();
        assert_eq!(form.model_type, ModelType::Custom);
    }

    #[test]
    fn test_typing_into_api_key() {
        let mut form = ModelConfigForm::new();
        form.handle_key_event(key(KeyCode::Tab)).unwrap();
        assert_eq!(form.focus(), ConfigField::ApiKey);
        for c in "sk-1".chars() {
            form.handle_key_event(key(KeyCode::Char(c))).unwrap();
        }
        assert_eq!(form.api_key.value, "sk-1");
        assert!(form.custom_model_path.value.is_empty());
    }

    #[test]
    fn test_save_stays_open() {
        let mut form = ModelConfigForm::new();
        form.handle_key_event(key(KeyCode::BackTab)).unwrap();
        assert_eq!(form.focus(), ConfigField::Save);
        assert_eq!(form.handle_key_event(key(KeyCode::Enter)).unwrap(), None);
    }

    #[test]
    fn test_close_controls() {
        let mut form = ModelConfigForm::new();
        assert_eq!(
            form.handle_key_event(key(KeyCode::Esc)).unwrap(),
            Some(Action::CloseModelConfig)
        );
        assert_eq!(
            form.handle_key_event(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL))
                .unwrap(),
            Some(Action::CloseModelConfig)
        );
    }

    #[test]
    fn test_close_button_click() {
        let mut form = ModelConfigForm::new();
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal
            .draw(|frame| {
                form.draw(frame, frame.area()).unwrap();
            })
            .unwrap();

        // Popup is 56x12 centered in 80x24: x 12..68, y 6..18
        let click = MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: 65,
            row: 6,
            modifiers: KeyModifiers::NONE,
        };
        assert_eq!(
            form.handle_mouse_event(click).unwrap(),
            Some(Action::CloseModelConfig)
        );
    }

    #[test]
    fn test_focus_clamps_when_fields_shrink() {
        let mut form = ModelConfigForm::new();
        form.handle_key_event(key(KeyCode::BackTab)).unwrap();
        assert_eq!(form.focus(), ConfigField::Save);
        form.model_type = ModelType::Ollama;
        assert_eq!(form.focus(), ConfigField::Save);
    }
}
