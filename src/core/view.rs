//! Read-only snapshot of what the renderer should draw.
//!
//! The TUI never reaches into `App` internals; it asks for a `ViewModel`
//! every frame and draws exactly that.

use super::form::FormField;
use super::state::{App, FormMode, Screen};

#[derive(Debug, Clone, PartialEq)]
pub struct ViewModel {
    /// Heading for the current screen.
    pub heading: String,
    pub status: String,
    /// Label of the in-flight request, if any. The renderer shows a spinner.
    pub busy: Option<String>,
    /// Key hints for the footer.
    pub help: &'static str,
    pub body: ViewBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListRow {
    pub id: String,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldView {
    pub label: &'static str,
    pub value: String,
    pub focused: bool,
    pub multiline: bool,
    /// Byte offset of the text cursor; only meaningful when focused.
    pub cursor: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ViewBody {
    List {
        rows: Vec<ListRow>,
        selected: Option<usize>,
        has_prev: bool,
        has_next: bool,
    },
    Detail {
        title: String,
        ingredients: Vec<String>,
        steps: Vec<String>,
        metadata: Vec<(String, String)>,
        reviews: Vec<String>,
        scroll: u16,
    },
    Form {
        fields: Vec<FieldView>,
    },
    Confirm {
        prompt: String,
    },
    Error {
        kind: String,
        message: String,
        status: Option<u16>,
    },
}

const LIST_HELP: &str = "↑/↓ move  Enter open  n new  ←/→ page  r refresh  q quit";
const DETAIL_HELP: &str = "↑/↓ scroll  e edit  d delete  r refresh  Esc back  q quit";
const FORM_HELP: &str = "Tab next field  Ctrl+S save  Ctrl+U clear  Esc cancel";
const CONFIRM_HELP: &str = "y delete  n keep";
const ERROR_HELP: &str = "Enter acknowledge  q quit";
const BUSY_HELP: &str = "Esc cancel  q quit";

impl App {
    pub fn view_model(&self) -> ViewModel {
        let (heading, help, body) = match &self.screen {
            Screen::List(list) => (
                "Recipes".to_string(),
                LIST_HELP,
                ViewBody::List {
                    rows: list
                        .page
                        .items
                        .iter()
                        .map(|item| ListRow {
                            id: item.id.to_string(),
                            title: item.title.clone(),
                        })
                        .collect(),
                    selected: (!list.page.is_empty()).then_some(list.selected),
                    has_prev: list.page.prev.is_some(),
                    has_next: list.page.next.is_some(),
                },
            ),
            Screen::Detail(detail) => (
                format!("Recipe {}", detail.recipe.id),
                DETAIL_HELP,
                ViewBody::Detail {
                    title: detail.recipe.title.clone(),
                    ingredients: detail.recipe.ingredients.clone(),
                    steps: detail.recipe.steps.clone(),
                    metadata: detail
                        .recipe
                        .metadata
                        .iter()
                        .map(|(k, v)| (k.clone(), v.clone()))
                        .collect(),
                    reviews: detail.recipe.reviews.iter().map(|r| r.summary()).collect(),
                    scroll: detail.scroll,
                },
            ),
            Screen::Form(form) => (
                match &form.mode {
                    FormMode::Create => "New recipe".to_string(),
                    FormMode::Edit(id) => format!("Edit recipe {id}"),
                },
                FORM_HELP,
                ViewBody::Form {
                    fields: FormField::ALL
                        .iter()
                        .map(|field| FieldView {
                            label: field.label(),
                            value: form.form.field(*field).to_string(),
                            focused: form.form.focus == *field,
                            multiline: field.is_multiline(),
                            cursor: form.form.cursor(),
                        })
                        .collect(),
                },
            ),
            Screen::Confirm(confirm) => (
                "Delete recipe".to_string(),
                CONFIRM_HELP,
                ViewBody::Confirm {
                    prompt: format!("Delete \"{}\"? This cannot be undone.", confirm.recipe.title),
                },
            ),
            Screen::Error(err) => (
                "Error".to_string(),
                ERROR_HELP,
                ViewBody::Error {
                    kind: err.error.kind.label().to_string(),
                    message: err.error.message.clone(),
                    status: err.error.status,
                },
            ),
        };

        let busy = self.pending.as_ref().map(|p| p.kind.describe());
        ViewModel {
            heading,
            status: self.status_message.clone(),
            help: if busy.is_some() { BUSY_HELP } else { help },
            busy,
            body,
        }
    }
}
