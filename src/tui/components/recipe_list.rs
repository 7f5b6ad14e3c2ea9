//! # RecipeList Component
//!
//! One page of the collection as a selectable list. Rows are `id  title`,
//! truncated by display width so wide glyphs never overflow the border.
//! The bottom border shows which pagination directions are available.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Padding, Paragraph};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::view::ListRow;
use crate::tui::component::Component;

pub struct RecipeList<'a> {
    pub rows: &'a [ListRow],
    pub selected: Option<usize>,
    pub has_prev: bool,
    pub has_next: bool,
}

impl Component for RecipeList<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let pager = match (self.has_prev, self.has_next) {
            (true, true) => " ◀ prev  next ▶ ",
            (true, false) => " ◀ prev ",
            (false, true) => " next ▶ ",
            (false, false) => "",
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(" Recipes ")
            .title_bottom(Line::from(pager).right_aligned())
            .padding(Padding::horizontal(1));

        if self.rows.is_empty() {
            let empty = Paragraph::new("No recipes yet. Press n to add one.")
                .style(Style::default().fg(Color::DarkGray))
                .alignment(Alignment::Center)
                .block(block);
            frame.render_widget(empty, area);
            return;
        }

        // borders + padding
        let inner_width = area.width.saturating_sub(4) as usize;
        let id_width = self
            .rows
            .iter()
            .map(|row| row.id.width())
            .max()
            .unwrap_or(0)
            .min(inner_width / 3);

        let items: Vec<ListItem> = self
            .rows
            .iter()
            .map(|row| {
                let id = truncate_to_width(&row.id, id_width);
                let padded_id = format!("{id}{}", " ".repeat(id_width.saturating_sub(id.width())));
                let title_width = inner_width.saturating_sub(id_width + 2);
                ListItem::new(Line::from(vec![
                    Span::styled(padded_id, Style::default().fg(Color::DarkGray)),
                    Span::raw("  "),
                    Span::raw(truncate_to_width(&row.title, title_width)),
                ]))
            })
            .collect();

        let list = List::new(items).block(block).highlight_style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED),
        );
        let mut state = ListState::default().with_selected(self.selected);
        frame.render_stateful_widget(list, area, &mut state);
    }
}

/// Truncates to at most `max_width` display columns, ending in `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_to_width("Pancakes", 20), "Pancakes");
        assert_eq!(truncate_to_width("Pancakes", 5), "Panc…");
        assert_eq!(truncate_to_width("Pancakes", 0), "");
    }

    #[test]
    fn test_truncate_wide_glyphs_by_width() {
        // Each glyph is two columns wide.
        let truncated = truncate_to_width("寿司寿司寿司", 7);
        assert_eq!(truncated, "寿司寿…");
        assert!(truncated.width() <= 7);
    }

    fn rows() -> Vec<ListRow> {
        vec![
            ListRow {
                id: "1".into(),
                title: "Pancakes".into(),
            },
            ListRow {
                id: "2".into(),
                title: "Soup".into(),
            },
        ]
    }

    fn render_text(list: &mut RecipeList) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, 8)).unwrap();
        terminal.draw(|f| list.render(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_renders_rows_and_pager() {
        let rows = rows();
        let text = render_text(&mut RecipeList {
            rows: &rows,
            selected: Some(1),
            has_prev: false,
            has_next: true,
        });
        assert!(text.contains("Pancakes"));
        assert!(text.contains("Soup"));
        assert!(text.contains("next ▶"));
        assert!(!text.contains("prev"));
    }

    #[test]
    fn test_empty_page_shows_hint() {
        let text = render_text(&mut RecipeList {
            rows: &[],
            selected: None,
            has_prev: false,
            has_next: false,
        });
        assert!(text.contains("No recipes yet"));
    }
}
