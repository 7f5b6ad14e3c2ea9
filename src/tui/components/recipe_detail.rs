//! # RecipeDetail Component
//!
//! Full recipe: title, ingredients as bullets, numbered steps, then the
//! read-only metadata and reviews. Long entries wrap with a hanging indent so the
//! bullet or step number stays visible in the left column.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Padding, Paragraph};

use crate::tui::component::Component;

pub struct RecipeDetail<'a> {
    pub title: &'a str,
    pub ingredients: &'a [String],
    pub steps: &'a [String],
    pub metadata: &'a [(String, String)],
    pub reviews: &'a [String],
    pub scroll: u16,
}

impl RecipeDetail<'_> {
    /// Builds the wrapped lines for a given content width.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        let heading = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
        let mut lines = vec![
            Line::from(Span::styled(
                self.title.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled("Ingredients", heading)),
        ];

        if self.ingredients.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        for ingredient in self.ingredients {
            push_wrapped(&mut lines, "  • ", ingredient, width);
        }

        lines.push(Line::default());
        lines.push(Line::from(Span::styled("Steps", heading)));
        if self.steps.is_empty() {
            lines.push(Line::from(Span::styled(
                "  (none)",
                Style::default().fg(Color::DarkGray),
            )));
        }
        let number_width = self.steps.len().to_string().len();
        for (i, step) in self.steps.iter().enumerate() {
            let marker = format!("  {:>number_width$}. ", i + 1);
            push_wrapped(&mut lines, &marker, step, width);
        }

        if !self.metadata.is_empty() {
            lines.push(Line::default());
            for (key, value) in self.metadata {
                lines.push(Line::from(vec![
                    Span::styled(format!("{key}: "), Style::default().fg(Color::DarkGray)),
                    Span::raw(value.clone()),
                ]));
            }
        }

        if !self.reviews.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled("Reviews", heading)));
            for review in self.reviews {
                push_wrapped(&mut lines, "  • ", review, width);
            }
        }
        lines
    }

    /// Furthest the content can scroll inside `area` once wrapped.
    pub fn max_scroll(&self, area: Rect) -> u16 {
        let (width, height) = inner_size(area);
        let total = u16::try_from(self.lines(width).len()).unwrap_or(u16::MAX);
        total.saturating_sub(height)
    }
}

/// Content width and height inside the border and padding.
fn inner_size(area: Rect) -> (usize, u16) {
    (area.width.saturating_sub(4) as usize, area.height.saturating_sub(2))
}

fn push_wrapped(lines: &mut Vec<Line<'static>>, marker: &str, text: &str, width: usize) {
    let indent = " ".repeat(marker.chars().count());
    let options = textwrap::Options::new(width.max(marker.len() + 1))
        .initial_indent(marker)
        .subsequent_indent(&indent);
    for line in textwrap::wrap(text, options) {
        lines.push(Line::from(line.into_owned()));
    }
}

impl Component for RecipeDetail<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));
        let (width, height) = inner_size(area);
        let lines = self.lines(width);
        let total = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let scroll = self.scroll.min(total.saturating_sub(height));
        let paragraph = Paragraph::new(lines).block(block).scroll((scroll, 0));
        frame.render_widget(paragraph, area);
    }
}
