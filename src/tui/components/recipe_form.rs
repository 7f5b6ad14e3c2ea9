//! # RecipeForm Component
//!
//! Create/edit form: a single-line title box above two multi-line boxes
//! (one ingredient or step per line). The focused box gets a highlighted
//! border and the terminal cursor sits at the form's cursor position.
//!
//! Multi-line boxes scroll so the cursor line stays visible.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use unicode_width::UnicodeWidthStr;

use crate::core::view::FieldView;
use crate::tui::component::Component;

pub struct RecipeForm<'a> {
    pub fields: &'a [FieldView],
}

impl Component for RecipeForm<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let constraints: Vec<Constraint> = self
            .fields
            .iter()
            .map(|field| {
                if field.multiline {
                    Constraint::Fill(1)
                } else {
                    Constraint::Length(3)
                }
            })
            .collect();
        let areas = Layout::vertical(constraints).split(area);

        for (field, field_area) in self.fields.iter().zip(areas.iter()) {
            render_field(frame, field, *field_area);
        }
    }
}

fn render_field(frame: &mut Frame, field: &FieldView, area: Rect) {
    let border_style = if field.focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label));
    let inner = block.inner(area);

    let (row, col) = cursor_cell(&field.value, field.cursor);
    let scroll = row.saturating_sub(inner.height.saturating_sub(1));
    let paragraph = Paragraph::new(field.value.as_str())
        .block(block)
        .scroll((scroll, 0));
    frame.render_widget(paragraph, area);

    if field.focused && inner.width > 0 && inner.height > 0 {
        let col = col.min(inner.width - 1);
        let row = (row - scroll).min(inner.height - 1);
        frame.set_cursor_position(Position::new(inner.x + col, inner.y + row));
    }
}

/// Line and display column of a byte offset.
fn cursor_cell(text: &str, cursor: usize) -> (u16, u16) {
    let before = text.get(..cursor).unwrap_or(text);
    let row = before.matches('\n').count();
    let line = before.rsplit('\n').next().unwrap_or("");
    (
        u16::try_from(row).unwrap_or(u16::MAX),
        u16::try_from(line.width()).unwrap_or(u16::MAX),
    )
}
