//! Inline numeric input for hours and parameters

use quoteboard_core::models::Parameter;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// What the typed number will be written to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditTarget {
    Hours { service_id: String, name: String },
    Parameter(Parameter),
}

impl EditTarget {
    pub fn label(&self) -> String {
        match self {
            EditTarget::Hours { name, .. } => format!("Std. für {}", name),
            EditTarget::Parameter(parameter) => parameter.display_name().to_string(),
        }
    }
}

/// Text buffer holding a number being typed
#[derive(Debug, Clone)]
pub struct NumberInput {
    pub target: EditTarget,
    buffer: String,
}

impl NumberInput {
    /// Start editing with the current value pre-filled
    pub fn new(target: EditTarget, current: f64) -> Self {
        Self {
            target,
            buffer: format_plain(current),
        }
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// Accept digits, one decimal separator and a leading minus
    pub fn push(&mut self, c: char) {
        match c {
            '0'..='9' => self.buffer.push(c),
            '.' | ',' if !self.buffer.contains('.') => self.buffer.push('.'),
            '-' if self.buffer.is_empty() => self.buffer.push('-'),
            _ => {}
        }
    }

    pub fn backspace(&mut self) {
        self.buffer.pop();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    /// Parsed value; text that is not a number yields NaN, which the engine
    /// clamps to 0
    pub fn value(&self) -> f64 {
        self.buffer.parse().unwrap_or(f64::NAN)
    }

    /// Whether the buffer holds a finite number
    pub fn is_valid(&self) -> bool {
        self.value().is_finite()
    }

    /// Render as a small centered popup
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let width = 44.min(area.width);
        let height = 3;
        let popup = Rect {
            x: area.x + area.width.saturating_sub(width) / 2,
            y: area.y + area.height.saturating_sub(height) / 2,
            width,
            height,
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(Span::styled(
                format!(" {} ", self.target.label()),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(popup);
        frame.render_widget(Clear, popup);
        frame.render_widget(block, popup);

        let line = Line::from(vec![
            Span::styled(" › ", Style::default().fg(Color::Cyan)),
            Span::raw(self.buffer.as_str()),
            Span::styled("█", Style::default().fg(Color::Cyan)),
            Span::styled(
                "  Enter ok │ Del clear │ Esc abort",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), inner);
    }
}

/// `2.0` → `"2"`, `0.5` → `"0.5"`; non-finite values start empty
fn format_plain(value: f64) -> String {
    if value.is_finite() {
        format!("{}", value)
    } else {
        String::new()
    }
}
