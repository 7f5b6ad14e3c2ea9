//! # Navigation State
//!
//! Exactly one [`Screen`] is current. Screens the user navigated *away*
//! from live on the [`NavigationStack`] so "back" can restore them as they
//! were, selection and all.
//!
//! ```text
//! App
//! ├── screen: Screen                  // what the renderer draws
//! ├── stack: NavigationStack          // explicit forward navigations only
//! ├── pending: Option<PendingRequest> // at most one request in flight
//! └── status_message: String          // one-line feedback
//! ```
//!
//! ```text
//!   List ──select──► Detail ──edit──► Form(Edit)
//!    │                 │
//!    └──new──► Form(Create)   └──delete──► Confirm
//!
//!   any ──failed request──► Error ──acknowledge──► where you were
//! ```
//!
//! State changes only happen through `update(app, action)` in action.rs.

use log::debug;

use super::error::ErrorDetail;
use super::form::RecipeForm;
use super::model::{Recipe, RecipeDraft, RecipeId, RecipeList};
use super::request::{RequestId, RequestKind};

/// Identity of one screen instance.
///
/// A screen keeps its id while it sits on the stack, so a response tagged
/// with it is still recognised once the screen is current again. Newly
/// constructed screens always get a fresh id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ScreenId(pub u64);

#[derive(Debug, Clone, PartialEq)]
pub struct ListScreen {
    pub id: ScreenId,
    pub page: RecipeList,
    /// Cursor this page was fetched with (`None` = first page). Refresh reuses it.
    pub cursor: Option<String>,
    pub selected: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailScreen {
    pub id: ScreenId,
    pub recipe: Recipe,
    pub scroll: u16,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecipeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormScreen {
    pub id: ScreenId,
    pub mode: FormMode,
    pub form: RecipeForm,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConfirmScreen {
    pub id: ScreenId,
    pub recipe: Recipe,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ErrorScreen {
    pub id: ScreenId,
    pub error: ErrorDetail,
    /// Screen to restore on acknowledgement. `None` restores the top of the stack.
    pub resume: Option<Box<Screen>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    List(ListScreen),
    Detail(DetailScreen),
    Form(FormScreen),
    Confirm(ConfirmScreen),
    Error(ErrorScreen),
}

/// Fieldless mirror of [`Screen`], for dispatch tables and assertions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    List,
    Detail,
    CreateForm,
    EditForm,
    Confirm,
    Error,
}

impl Screen {
    pub fn id(&self) -> ScreenId {
        match self {
            Screen::List(s) => s.id,
            Screen::Detail(s) => s.id,
            Screen::Form(s) => s.id,
            Screen::Confirm(s) => s.id,
            Screen::Error(s) => s.id,
        }
    }

    pub fn kind(&self) -> ScreenKind {
        match self {
            Screen::List(_) => ScreenKind::List,
            Screen::Detail(_) => ScreenKind::Detail,
            Screen::Form(FormScreen {
                mode: FormMode::Create,
                ..
            }) => ScreenKind::CreateForm,
            Screen::Form(_) => ScreenKind::EditForm,
            Screen::Confirm(_) => ScreenKind::Confirm,
            Screen::Error(_) => ScreenKind::Error,
        }
    }
}

/// Previously visited screens, most recent last.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NavigationStack {
    entries: Vec<Screen>,
}

impl NavigationStack {
    pub fn push(&mut self, screen: Screen) {
        self.entries.push(screen);
    }

    pub fn pop(&mut self) -> Option<Screen> {
        self.entries.pop()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn kinds(&self) -> Vec<ScreenKind> {
        self.entries.iter().map(Screen::kind).collect()
    }
}

/// The single in-flight request.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingRequest {
    pub id: RequestId,
    /// Screen that was current when the request was issued.
    pub origin: ScreenId,
    pub kind: RequestKind,
}

pub struct App {
    pub screen: Screen,
    pub stack: NavigationStack,
    pub pending: Option<PendingRequest>,
    pub status_message: String,
    next_id: u64,
}

impl App {
    /// Starts on the list view showing `page`.
    pub fn new(page: RecipeList) -> Self {
        let mut app = Self {
            screen: Screen::List(ListScreen {
                id: ScreenId(0),
                page: RecipeList::default(),
                cursor: None,
                selected: 0,
            }),
            stack: NavigationStack::default(),
            pending: None,
            status_message: String::from("Welcome to Cookbook!"),
            next_id: 1,
        };
        if page.dropped > 0 {
            app.status_message = dropped_notice(page.dropped);
        }
        if let Screen::List(list) = &mut app.screen {
            list.page = page;
        }
        app
    }

    /// Starts on an error screen over an empty list, for a first load that
    /// reached the server but failed.
    pub fn with_startup_error(error: ErrorDetail) -> Self {
        let mut app = Self::new(RecipeList::default());
        app.show_error(error, true);
        app
    }

    pub fn is_busy(&self) -> bool {
        self.pending.is_some()
    }

    /// Pulls the detail scroll offset back within `max`, the furthest the
    /// wrapped content can scroll at the current terminal size.
    pub fn clamp_detail_scroll(&mut self, max: u16) {
        if let Screen::Detail(detail) = &mut self.screen {
            detail.scroll = detail.scroll.min(max);
        }
    }

    pub(crate) fn next_screen_id(&mut self) -> ScreenId {
        let id = ScreenId(self.next_id);
        self.next_id += 1;
        id
    }

    pub(crate) fn next_request_id(&mut self) -> RequestId {
        let id = RequestId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Forward navigation: the current screen goes on the stack.
    pub(crate) fn push_screen(&mut self, next: Screen) {
        debug!("Navigate {:?} -> {:?}", self.screen.kind(), next.kind());
        let previous = std::mem::replace(&mut self.screen, next);
        self.stack.push(previous);
    }

    /// Back navigation. Returns `false` at the root.
    pub(crate) fn pop_screen(&mut self) -> bool {
        match self.stack.pop() {
            Some(previous) => {
                debug!("Back {:?} -> {:?}", self.screen.kind(), previous.kind());
                self.screen = previous;
                true
            }
            None => false,
        }
    }

    /// Replaces the current screen with the error screen. With `resumable`
    /// the replaced screen comes back on acknowledgement; otherwise the top
    /// of the stack does. The stack itself is untouched either way.
    pub(crate) fn show_error(&mut self, error: ErrorDetail, resumable: bool) {
        let id = self.next_screen_id();
        let placeholder = Screen::Error(ErrorScreen {
            id,
            error,
            resume: None,
        });
        let previous = std::mem::replace(&mut self.screen, placeholder);
        debug!("Error screen over {:?} (resumable={})", previous.kind(), resumable);
        if resumable && let Screen::Error(err) = &mut self.screen {
            err.resume = Some(Box::new(previous));
        }
    }

    pub(crate) fn new_form(&mut self, mode: FormMode, draft: &RecipeDraft) -> Screen {
        Screen::Form(FormScreen {
            id: self.next_screen_id(),
            mode,
            form: RecipeForm::from_draft(draft),
        })
    }
}

pub(crate) fn dropped_notice(dropped: usize) -> String {
    if dropped == 1 {
        "1 malformed entry hidden".to_string()
    } else {
        format!("{dropped} malformed entries hidden")
    }
}
