//! Edit buffers behind the recipe form.
//!
//! Ingredients and steps are edited as one entry per line. Converting back
//! to a [`RecipeDraft`] drops blank lines; nothing else is validated here,
//! the server decides what a valid recipe is.
//!
//! The focused field has a cursor, kept as a byte offset that always sits
//! on a char boundary. Moving focus puts the cursor at the end of the newly
//! focused field.

use super::dispatch::Key;
use super::model::RecipeDraft;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Title,
    Ingredients,
    Steps,
}

impl FormField {
    pub const ALL: [FormField; 3] = [FormField::Title, FormField::Ingredients, FormField::Steps];

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Title => "Title",
            FormField::Ingredients => "Ingredients (one per line)",
            FormField::Steps => "Steps (one per line)",
        }
    }

    pub fn is_multiline(&self) -> bool {
        !matches!(self, FormField::Title)
    }

    fn index(&self) -> usize {
        match self {
            FormField::Title => 0,
            FormField::Ingredients => 1,
            FormField::Steps => 2,
        }
    }

    /// Field `delta` positions away, wrapping around.
    fn offset(self, delta: i32) -> Self {
        let len = Self::ALL.len() as i32;
        let idx = (self.index() as i32 + delta).rem_euclid(len);
        Self::ALL[idx as usize]
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct RecipeForm {
    pub title: String,
    pub ingredients: String,
    pub steps: String,
    pub focus: FormField,
    /// Byte offset of the cursor in the focused field.
    cursor: usize,
}

impl RecipeForm {
    pub fn from_draft(draft: &RecipeDraft) -> Self {
        Self {
            title: draft.title.clone(),
            ingredients: draft.ingredients.join("\n"),
            steps: draft.steps.join("\n"),
            focus: FormField::Title,
            cursor: draft.title.len(),
        }
    }

    pub fn to_draft(&self) -> RecipeDraft {
        RecipeDraft {
            title: self.title.trim().to_string(),
            ingredients: split_entries(&self.ingredients),
            steps: split_entries(&self.steps),
        }
    }

    pub fn field(&self, field: FormField) -> &str {
        match field {
            FormField::Title => &self.title,
            FormField::Ingredients => &self.ingredients,
            FormField::Steps => &self.steps,
        }
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Title => &mut self.title,
            FormField::Ingredients => &mut self.ingredients,
            FormField::Steps => &mut self.steps,
        }
    }

    pub fn move_focus(&mut self, delta: i32) {
        self.focus = self.focus.offset(delta);
        self.cursor = self.field(self.focus).len();
    }

    /// Cursor position in the focused field, pulled back onto the text if
    /// the field was replaced underneath it.
    pub fn cursor(&self) -> usize {
        let text = self.field(self.focus);
        let mut pos = self.cursor.min(text.len());
        while !text.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    /// Applies a text-editing key to the focused field.
    ///
    /// Returns `true` if the form changed (text or cursor). Keys that mean
    /// nothing to a text field are ignored.
    pub fn handle_key(&mut self, key: Key) -> bool {
        let focus = self.focus;
        let pos = self.cursor();
        match key {
            Key::Char(c) => self.insert(c),
            Key::Enter if focus.is_multiline() => self.insert('\n'),
            Key::Enter => {
                self.move_focus(1);
                true
            }
            Key::Backspace => match prev_boundary(self.field(focus), pos) {
                Some(start) => {
                    self.field_mut(focus).replace_range(start..pos, "");
                    self.cursor = start;
                    true
                }
                None => false,
            },
            Key::Delete => match next_boundary(self.field(focus), pos) {
                Some(end) => {
                    self.field_mut(focus).replace_range(pos..end, "");
                    self.cursor = pos;
                    true
                }
                None => false,
            },
            Key::Left => self.set_cursor(prev_boundary(self.field(focus), pos)),
            Key::Right => self.set_cursor(next_boundary(self.field(focus), pos)),
            Key::Home | Key::Ctrl('a') => {
                let start = line_start(self.field(focus), pos);
                self.set_cursor(Some(start))
            }
            Key::End | Key::Ctrl('e') => {
                let end = line_end(self.field(focus), pos);
                self.set_cursor(Some(end))
            }
            Key::Up => {
                match vertical_target(self.field(focus), pos, -1) {
                    Some(target) => self.cursor = target,
                    None => self.move_focus(-1),
                }
                true
            }
            Key::Down => {
                match vertical_target(self.field(focus), pos, 1) {
                    Some(target) => self.cursor = target,
                    None => self.move_focus(1),
                }
                true
            }
            // Ctrl+U clears the focused field
            Key::Ctrl('u') => {
                let field = self.field_mut(focus);
                let changed = !field.is_empty();
                field.clear();
                self.cursor = 0;
                changed
            }
            _ => false,
        }
    }

    fn insert(&mut self, c: char) -> bool {
        let pos = self.cursor();
        let focus = self.focus;
        self.field_mut(focus).insert(pos, c);
        self.cursor = pos + c.len_utf8();
        true
    }

    fn set_cursor(&mut self, target: Option<usize>) -> bool {
        match target {
            Some(pos) if pos != self.cursor() => {
                self.cursor = pos;
                true
            }
            _ => false,
        }
    }
}

fn prev_boundary(text: &str, pos: usize) -> Option<usize> {
    text[..pos].char_indices().next_back().map(|(i, _)| i)
}

fn next_boundary(text: &str, pos: usize) -> Option<usize> {
    text[pos..].chars().next().map(|c| pos + c.len_utf8())
}

fn line_start(text: &str, pos: usize) -> usize {
    text[..pos].rfind('\n').map_or(0, |i| i + 1)
}

fn line_end(text: &str, pos: usize) -> usize {
    text[pos..].find('\n').map_or(text.len(), |i| pos + i)
}

/// Same column (in chars) on the line above or below, clamped to that
/// line's length. `None` when there is no such line.
fn vertical_target(text: &str, pos: usize, direction: i32) -> Option<usize> {
    let start = line_start(text, pos);
    let column = text[start..pos].chars().count();
    let target_start = if direction < 0 {
        if start == 0 {
            return None;
        }
        line_start(text, start - 1)
    } else {
        let end = line_end(text, pos);
        if end == text.len() {
            return None;
        }
        end + 1
    };
    let target_end = line_end(text, target_start);
    let offset = text[target_start..target_end]
        .char_indices()
        .nth(column)
        .map_or(target_end - target_start, |(i, _)| i);
    Some(target_start + offset)
}

fn split_entries(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
