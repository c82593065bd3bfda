//! Help modal component for displaying keybindings

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

const BINDINGS: &[(&str, &[(&str, &str)])] = &[
    (
        "Navigation:",
        &[
            ("  ↑↓ / j k     ", "Select service"),
            ("  g / G        ", "First / last service"),
            ("  q            ", "Quit"),
            ("  ?            ", "Toggle this help"),
        ],
    ),
    (
        "Services:",
        &[
            ("  Space/Enter  ", "Toggle service"),
            ("  + / -        ", "Hours ± 0,1"),
            ("  e            ", "Edit hours"),
            ("  Del          ", "Clear the number being edited"),
        ],
    ),
    (
        "Parameters:",
        &[
            ("  r            ", "Edit hourly rate"),
            ("  s            ", "Edit standard pages"),
            ("  p            ", "Edit pillar pages"),
        ],
    ),
    (
        "Presets:",
        &[
            ("  1 / 2 / 3    ", "Essential / Advanced / Premium"),
            ("  0            ", "Reset everything"),
        ],
    ),
];

/// Help modal displaying keybindings
pub struct HelpModal {
    visible: bool,
}

impl Default for HelpModal {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpModal {
    pub fn new() -> Self {
        Self { visible: false }
    }

    /// Toggle help modal visibility
    pub fn toggle(&mut self) {
        self.visible = !self.visible;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }

    /// Render the help modal as an overlay
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        if !self.visible {
            return;
        }

        let modal_width = 56;
        let modal_height = 24;

        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(area.height.saturating_sub(modal_height) / 2),
                Constraint::Length(modal_height),
                Constraint::Min(0),
            ])
            .split(area);

        let horizontal = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(area.width.saturating_sub(modal_width) / 2),
                Constraint::Length(modal_width),
                Constraint::Min(0),
            ])
            .split(vertical[1]);

        let modal_area = horizontal[1];

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(Span::styled(
                " Help - Keybindings ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ))
            .title_alignment(Alignment::Center);

        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let help_text = Paragraph::new(Self::build_help_content()).wrap(Wrap { trim: false });
        frame.render_widget(help_text, inner);
    }

    fn build_help_content() -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        for (section, keys) in BINDINGS {
            lines.push(Line::from(Span::styled(
                *section,
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            for (key, action) in keys.iter() {
                lines.push(Line::from(vec![
                    Span::styled(*key, Style::default().fg(Color::Cyan)),
                    Span::raw(*action),
                ]));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "Pillar pages count 1,5× in per-page services.",
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }
}
