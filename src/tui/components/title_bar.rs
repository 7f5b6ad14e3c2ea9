//! # TitleBar Component
//!
//! Top status bar: application name, current screen heading, and either
//! the busy spinner or the last status message.
//!
//! ## Conditional Formatting
//!
//! 1. **Busy**: `"Cookbook | Recipes | ⠋ Loading recipe 3"`
//! 2. **Status message**: `"Cookbook | Recipes | 12 recipes"`
//! 3. **Default**: `"Cookbook | Recipes"`
//!
//! A pending request always wins over the status message: the user must
//! see that input is limited to cancel and quit.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

const SPINNER: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Top status bar component.
pub struct TitleBar<'a> {
    pub heading: &'a str,
    pub status_message: &'a str,
    /// Label of the in-flight request, if any.
    pub busy: Option<&'a str>,
    pub spinner_frame: usize,
}

impl Component for TitleBar<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let mut spans = vec![
            Span::styled("Cookbook", Style::default().add_modifier(Modifier::BOLD)),
            Span::raw(" | "),
            Span::raw(self.heading),
        ];

        if let Some(label) = self.busy {
            let glyph = SPINNER[self.spinner_frame % SPINNER.len()];
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                format!("{glyph} {label}"),
                Style::default().fg(Color::Yellow),
            ));
        } else if !self.status_message.is_empty() {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled(
                self.status_message,
                Style::default().fg(Color::DarkGray),
            ));
        }

        frame.render_widget(Line::from(spans), area);
    }
}
