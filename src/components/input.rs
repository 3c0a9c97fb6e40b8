//! Single-line text field shared by the forms

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use unicode_width::UnicodeWidthChar;

/// Editable single-line value with an optional mask
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub masked: bool,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn masked() -> Self {
        Self {
            value: String::new(),
            masked: true,
        }
    }

    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            masked: false,
        }
    }

    /// Apply an editing key. Returns false if the key isn't an edit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => {
                self.value.push(c);
                true
            }
            KeyCode::Backspace => {
                self.value.pop();
                true
            }
            _ => false,
        }
    }

    /// The tail of the value that fits in `width` columns
    pub fn visible(&self, width: usize) -> String {
        let shown: String = if self.masked {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        };

        let mut used = 0;
        let mut tail: Vec<char> = Vec::new();
        for c in shown.chars().rev() {
            let w = c.width().unwrap_or(0);
            if used + w > width {
                break;
            }
            used += w;
            tail.push(c);
        }
        tail.into_iter().rev().collect()
    }

    /// Render as `label: value` with a cursor when focused
    pub fn line(&self, label: &str, placeholder: &str, focused: bool, width: usize) -> Line<'static> {
        let label_style = if focused {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };
        let prefix = format!("{} {:<10} ", if focused { ">" } else { " " }, label);
        let room = width.saturating_sub(prefix.chars().count() + 1);

        let value = if self.value.is_empty() && !focused {
            Span::styled(placeholder.to_string(), Style::default().fg(Color::DarkGray))
        } else {
            let cursor = if focused { "_" } else { "" };
            Span::styled(
                format!("{}{}", self.visible(room), cursor),
                Style::default().fg(Color::White),
            )
        };

        Line::from(vec![Span::styled(prefix, label_style), value])
    }
}
