//! # Actions
//!
//! Everything that can happen becomes an `Action`.
//! User presses Enter on a recipe? That's `Action::Command(Command::Activate)`.
//! The server answers? That's `Action::Response { request, outcome }`.
//!
//! The `update()` function takes the current state and an action, mutates
//! the state and returns an `Effect` for the adapter to carry out. No I/O
//! happens here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```
//!
//! Transitions that need server data are never applied optimistically:
//! the command only *issues* the request, and the screen changes when the
//! matching response arrives. Responses are matched on both the request id
//! and the screen they were issued from, so anything stale is dropped.
//!
//! `update()` is total: an unknown state/command combination is a no-op.

use log::{debug, info, warn};

use super::error::ErrorDetail;
use super::model::{RecipeDraft, RecipeList};
use super::request::{ApiRequest, Payload, RequestId, RequestKind};
use super::state::{
    App, ConfirmScreen, DetailScreen, FormMode, ListScreen, PendingRequest, Screen, ScreenKind,
    dropped_notice,
};

/// The fixed command vocabulary produced by the dispatcher.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    MoveSelection(i32),
    Activate,
    Back,
    NewItem,
    EditItem,
    DeleteItem,
    ConfirmYes,
    ConfirmNo,
    SubmitForm(RecipeDraft),
    NextPage,
    PrevPage,
    Quit,
    Refresh,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Command(Command),
    Response {
        request: RequestId,
        outcome: Result<Payload, ErrorDetail>,
    },
}

/// Side effects requested by `update()`.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// Run this request and report back with `Action::Response`.
    Request(ApiRequest),
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Command(command) => apply_command(app, command),
        Action::Response { request, outcome } => apply_response(app, request, outcome),
    }
}

// ============================================================================
// Commands
// ============================================================================

fn apply_command(app: &mut App, command: Command) -> Effect {
    if command == Command::Quit {
        info!("Quit requested on {:?}", app.screen.kind());
        app.stack.clear();
        app.pending = None;
        return Effect::Quit;
    }

    // While busy the only thing that gets through is cancellation.
    if let Some(pending) = &app.pending {
        if command == Command::Back {
            info!("Cancelled {} ({:?})", pending.id, pending.kind);
            app.pending = None;
            app.status_message = "Request cancelled".to_string();
        } else {
            debug!("Ignoring {:?} while {} is pending", command, pending.id);
        }
        return Effect::None;
    }

    match (app.screen.kind(), command) {
        (_, Command::MoveSelection(delta)) => {
            move_selection(app, delta);
            Effect::None
        }
        (ScreenKind::List, Command::Activate) => {
            let selected = match &app.screen {
                Screen::List(list) => list.page.items.get(list.selected).map(|s| s.id.clone()),
                _ => None,
            };
            match selected {
                Some(id) => issue(app, RequestKind::FetchRecipe(id)),
                None => Effect::None,
            }
        }
        (ScreenKind::Error, Command::Back) => {
            acknowledge(app);
            Effect::None
        }
        (ScreenKind::Confirm, Command::Back | Command::ConfirmNo) => {
            app.pop_screen();
            Effect::None
        }
        (ScreenKind::Detail | ScreenKind::CreateForm | ScreenKind::EditForm, Command::Back) => {
            app.pop_screen();
            Effect::None
        }
        (ScreenKind::List, Command::Back) => {
            // Nothing to go back to from the root list.
            if !app.pop_screen() {
                debug!("Back at root list ignored");
            }
            Effect::None
        }
        (ScreenKind::List, Command::NewItem) => {
            let form = app.new_form(FormMode::Create, &RecipeDraft::default());
            app.push_screen(form);
            Effect::None
        }
        (ScreenKind::Detail, Command::EditItem) => {
            if let Screen::Detail(detail) = &app.screen {
                let id = detail.recipe.id.clone();
                let draft = RecipeDraft::from(&detail.recipe);
                let form = app.new_form(FormMode::Edit(id), &draft);
                app.push_screen(form);
            }
            Effect::None
        }
        (ScreenKind::Detail, Command::DeleteItem) => {
            if let Screen::Detail(detail) = &app.screen {
                let recipe = detail.recipe.clone();
                let id = app.next_screen_id();
                app.push_screen(Screen::Confirm(ConfirmScreen { id, recipe }));
            }
            Effect::None
        }
        (ScreenKind::Confirm, Command::ConfirmYes) => match &app.screen {
            Screen::Confirm(confirm) => {
                let id = confirm.recipe.id.clone();
                issue(app, RequestKind::Delete(id))
            }
            _ => Effect::None,
        },
        (ScreenKind::CreateForm | ScreenKind::EditForm, Command::SubmitForm(draft)) => {
            match &app.screen {
                Screen::Form(form) => {
                    let kind = match &form.mode {
                        FormMode::Create => RequestKind::Create(draft),
                        FormMode::Edit(id) => RequestKind::Update {
                            id: id.clone(),
                            draft,
                        },
                    };
                    issue(app, kind)
                }
                _ => Effect::None,
            }
        }
        (ScreenKind::List, Command::NextPage) => {
            let next = match &app.screen {
                Screen::List(list) => list.page.next.clone(),
                _ => None,
            };
            match next {
                Some(cursor) => issue(app, RequestKind::FetchPage { cursor: Some(cursor) }),
                None => {
                    app.status_message = "Last page".to_string();
                    Effect::None
                }
            }
        }
        (ScreenKind::List, Command::PrevPage) => {
            let prev = match &app.screen {
                Screen::List(list) => list.page.prev.clone(),
                _ => None,
            };
            match prev {
                Some(cursor) => issue(app, RequestKind::FetchPage { cursor: Some(cursor) }),
                None => {
                    app.status_message = "First page".to_string();
                    Effect::None
                }
            }
        }
        (ScreenKind::List | ScreenKind::Detail, Command::Refresh) => refresh_current(app),
        (kind, command) => {
            debug!("No-op: {:?} on {:?}", command, kind);
            Effect::None
        }
    }
}

fn move_selection(app: &mut App, delta: i32) {
    match &mut app.screen {
        Screen::List(list) if !list.page.is_empty() => {
            let len = list.page.len() as i64;
            list.selected = (list.selected as i64 + delta as i64).rem_euclid(len) as usize;
        }
        // Upper bound depends on the wrapped height; the renderer reports it
        // back through `App::clamp_detail_scroll`.
        Screen::Detail(detail) => {
            let scroll = (detail.scroll as i64 + delta as i64).clamp(0, u16::MAX as i64);
            detail.scroll = scroll as u16;
        }
        Screen::Form(form) => form.form.move_focus(delta),
        _ => {}
    }
}

/// Leaves the error screen for wherever the user was.
fn acknowledge(app: &mut App) {
    let resume = match &mut app.screen {
        Screen::Error(err) => err.resume.take(),
        _ => return,
    };
    match resume {
        Some(screen) => app.screen = *screen,
        None => {
            if !app.pop_screen() {
                let id = app.next_screen_id();
                app.screen = Screen::List(ListScreen {
                    id,
                    page: RecipeList::default(),
                    cursor: None,
                    selected: 0,
                });
            }
        }
    }
}

/// Marks `kind` as the pending request, tagged with the current screen.
fn issue(app: &mut App, kind: RequestKind) -> Effect {
    let id = app.next_request_id();
    let origin = app.screen.id();
    info!("Issuing {}: {}", id, kind.describe());
    app.pending = Some(PendingRequest {
        id,
        origin,
        kind: kind.clone(),
    });
    Effect::Request(ApiRequest { id, kind })
}

/// Re-fetches whatever the current screen shows, without navigating.
fn refresh_current(app: &mut App) -> Effect {
    let kind = match &app.screen {
        Screen::List(list) => RequestKind::FetchPage {
            cursor: list.cursor.clone(),
        },
        Screen::Detail(detail) => RequestKind::FetchRecipe(detail.recipe.id.clone()),
        _ => return Effect::None,
    };
    issue(app, kind)
}

// ============================================================================
// Responses
// ============================================================================

fn apply_response(
    app: &mut App,
    request: RequestId,
    outcome: Result<Payload, ErrorDetail>,
) -> Effect {
    let Some(pending) = app.pending.take_if(|p| p.id == request) else {
        debug!("Discarding stale response {}", request);
        return Effect::None;
    };

    if pending.origin != app.screen.id() {
        debug!(
            "Discarding response {}: issued for a screen that is no longer current",
            request
        );
        return Effect::None;
    }

    match outcome {
        Ok(payload) => apply_payload(app, pending.kind, payload),
        Err(error) => {
            warn!("{} failed: {}", pending.kind.describe(), error);
            // A failed delete drops the confirmation; acknowledging lands on the detail.
            let resumable = !matches!(app.screen, Screen::Confirm(_));
            app.status_message = error.kind.label().to_string();
            app.show_error(error, resumable);
            Effect::None
        }
    }
}

fn apply_payload(app: &mut App, kind: RequestKind, payload: Payload) -> Effect {
    match (kind, payload) {
        (RequestKind::FetchPage { cursor }, Payload::Page(page)) => {
            if let Screen::List(list) = &mut app.screen {
                app.status_message = if page.dropped > 0 {
                    dropped_notice(page.dropped)
                } else {
                    format!("{} recipes", page.len())
                };
                list.selected = list.selected.min(page.len().saturating_sub(1));
                list.page = page;
                list.cursor = cursor;
            }
            Effect::None
        }
        (RequestKind::FetchRecipe(_), Payload::Recipe(recipe)) => {
            app.status_message = recipe.title.clone();
            if let Screen::Detail(detail) = &mut app.screen {
                detail.recipe = recipe;
            } else if matches!(app.screen, Screen::List(_)) {
                let id = app.next_screen_id();
                app.push_screen(Screen::Detail(DetailScreen {
                    id,
                    recipe,
                    scroll: 0,
                }));
            }
            Effect::None
        }
        (RequestKind::Create(_), Payload::Created) => {
            app.pop_screen();
            app.status_message = "Recipe created".to_string();
            refresh_current(app)
        }
        (RequestKind::Update { .. }, Payload::Updated(echoed)) => {
            app.pop_screen();
            app.status_message = "Recipe saved".to_string();
            if let Some(recipe) = echoed
                && let Screen::Detail(detail) = &mut app.screen
            {
                detail.recipe = recipe;
                Effect::None
            } else {
                refresh_current(app)
            }
        }
        (RequestKind::Delete(_), Payload::Deleted) => {
            while !matches!(app.screen, Screen::List(_)) {
                if !app.pop_screen() {
                    break;
                }
            }
            app.status_message = "Recipe deleted".to_string();
            refresh_current(app)
        }
        (kind, payload) => {
            warn!("Unexpected payload {:?} for {:?}", payload, kind);
            app.show_error(
                ErrorDetail::malformed("Server response did not match the request"),
                true,
            );
            Effect::None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::model::RecipeId;
    use crate::test_support::{sample_page, sample_recipe, test_app};

    fn cmd(app: &mut App, command: Command) -> Effect {
        update(app, Action::Command(command))
    }

    fn respond(app: &mut App, effect: &Effect, outcome: Result<Payload, ErrorDetail>) -> Effect {
        let Effect::Request(request) = effect else {
            panic!("expected a request effect, got {effect:?}");
        };
        update(
            app,
            Action::Response {
                request: request.id,
                outcome,
            },
        )
    }

    /// Drives List -> Detail for the selected item.
    fn open_detail(app: &mut App, id: &str, title: &str) {
        let effect = cmd(app, Command::Activate);
        respond(app, &effect, Ok(Payload::Recipe(sample_recipe(id, title))));
        assert_eq!(app.screen.kind(), ScreenKind::Detail);
    }

    fn list(app: &App) -> &ListScreen {
        match &app.screen {
            Screen::List(list) => list,
            other => panic!("expected list, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_move_selection_wraps() {
        let mut app = test_app();
        cmd(&mut app, Command::MoveSelection(1));
        assert_eq!(list(&app).selected, 1);
        cmd(&mut app, Command::MoveSelection(1));
        assert_eq!(list(&app).selected, 0);
        cmd(&mut app, Command::MoveSelection(-1));
        assert_eq!(list(&app).selected, 1);
    }

    #[test]
    fn test_detail_scroll_is_bounded_by_rendered_height() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::MoveSelection(-1));
        assert_eq!(detail_scroll(&app), 0);

        // Wrapped content can be far longer than the entry count.
        cmd(&mut app, Command::MoveSelection(60));
        assert_eq!(detail_scroll(&app), 60);

        app.clamp_detail_scroll(42);
        assert_eq!(detail_scroll(&app), 42);
        cmd(&mut app, Command::MoveSelection(-1));
        assert_eq!(detail_scroll(&app), 41);
    }

    fn detail_scroll(app: &App) -> u16 {
        match &app.screen {
            Screen::Detail(detail) => detail.scroll,
            other => panic!("expected detail, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_move_selection_on_empty_list_is_noop() {
        let mut app = App::new(RecipeList::default());
        assert_eq!(cmd(&mut app, Command::MoveSelection(1)), Effect::None);
        assert_eq!(list(&app).selected, 0);
    }

    #[test]
    fn test_activate_requests_detail_without_navigating() {
        let mut app = test_app();
        cmd(&mut app, Command::MoveSelection(1));
        let effect = cmd(&mut app, Command::Activate);
        match &effect {
            Effect::Request(req) => {
                assert_eq!(req.kind, RequestKind::FetchRecipe(RecipeId::from("2")));
            }
            other => panic!("expected request, got {other:?}"),
        }
        // Not applied optimistically
        assert_eq!(app.screen.kind(), ScreenKind::List);
        assert!(app.is_busy());
        assert!(app.stack.is_empty());
    }

    #[test]
    fn test_detail_shown_after_fetch_succeeds() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        assert_eq!(app.stack.kinds(), vec![ScreenKind::List]);
        assert!(!app.is_busy());
    }

    #[test]
    fn test_commands_ignored_while_busy() {
        let mut app = test_app();
        cmd(&mut app, Command::Activate);
        assert_eq!(cmd(&mut app, Command::NewItem), Effect::None);
        assert_eq!(cmd(&mut app, Command::MoveSelection(1)), Effect::None);
        assert_eq!(app.screen.kind(), ScreenKind::List);
        assert_eq!(list(&app).selected, 0);
        assert!(app.is_busy());
    }

    #[test]
    fn test_back_while_busy_cancels_and_drops_late_response() {
        let mut app = test_app();
        let effect = cmd(&mut app, Command::Activate);
        cmd(&mut app, Command::Back);
        assert!(!app.is_busy());
        assert_eq!(app.status_message, "Request cancelled");

        let before = list(&app).clone();
        respond(
            &mut app,
            &effect,
            Ok(Payload::Recipe(sample_recipe("1", "Pancakes"))),
        );
        assert_eq!(app.screen.kind(), ScreenKind::List);
        assert_eq!(list(&app), &before);
        assert!(app.stack.is_empty());
    }

    #[test]
    fn test_stale_detail_refresh_does_not_touch_list() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        let effect = cmd(&mut app, Command::Refresh);
        cmd(&mut app, Command::Back); // cancel
        cmd(&mut app, Command::Back); // to list
        assert_eq!(app.screen.kind(), ScreenKind::List);
        let before = list(&app).clone();

        respond(
            &mut app,
            &effect,
            Ok(Payload::Recipe(sample_recipe("1", "Changed"))),
        );
        assert_eq!(list(&app), &before);
        assert_eq!(app.screen.kind(), ScreenKind::List);
    }

    #[test]
    fn test_response_for_other_screen_is_discarded() {
        let mut app = test_app();
        let effect = cmd(&mut app, Command::Refresh);
        // Simulate the screen changing under a pending request.
        let id = app.next_screen_id();
        app.screen = Screen::List(ListScreen {
            id,
            page: RecipeList::default(),
            cursor: None,
            selected: 0,
        });
        respond(&mut app, &effect, Ok(Payload::Page(sample_page(&["x"]))));
        assert!(list(&app).page.is_empty());
        assert!(!app.is_busy());
    }

    #[test]
    fn test_back_count_returns_to_initial_list() {
        let mut app = test_app();
        let initial = list(&app).clone();

        open_detail(&mut app, "1", "Pancakes"); // 1
        cmd(&mut app, Command::EditItem); // 2
        assert_eq!(app.screen.kind(), ScreenKind::EditForm);
        cmd(&mut app, Command::Back);
        cmd(&mut app, Command::DeleteItem); // 2 again
        assert_eq!(app.screen.kind(), ScreenKind::Confirm);
        cmd(&mut app, Command::Back);
        cmd(&mut app, Command::Back);
        assert_eq!(list(&app), &initial);

        cmd(&mut app, Command::NewItem);
        cmd(&mut app, Command::Back);
        assert_eq!(list(&app), &initial);
        assert!(app.stack.is_empty());
    }

    #[test]
    fn test_back_at_root_is_noop() {
        let mut app = test_app();
        assert_eq!(cmd(&mut app, Command::Back), Effect::None);
        assert_eq!(app.screen.kind(), ScreenKind::List);
    }

    #[test]
    fn test_pagination_is_lateral() {
        let mut page = sample_page(&["a", "b"]);
        page.next = Some("p2".into());
        let mut app = App::new(page);
        cmd(&mut app, Command::MoveSelection(1));

        let effect = cmd(&mut app, Command::NextPage);
        match &effect {
            Effect::Request(req) => assert_eq!(
                req.kind,
                RequestKind::FetchPage {
                    cursor: Some("p2".into())
                }
            ),
            other => panic!("expected request, got {other:?}"),
        }
        let mut second = sample_page(&["c"]);
        second.prev = Some("p1".into());
        respond(&mut app, &effect, Ok(Payload::Page(second.clone())));

        let shown = list(&app);
        assert_eq!(shown.page, second);
        assert_eq!(shown.cursor.as_deref(), Some("p2"));
        assert_eq!(shown.selected, 0);
        assert!(app.stack.is_empty());
    }

    #[test]
    fn test_next_page_without_cursor_reports_last_page() {
        let mut app = test_app();
        assert_eq!(cmd(&mut app, Command::NextPage), Effect::None);
        assert_eq!(app.status_message, "Last page");
        assert_eq!(cmd(&mut app, Command::PrevPage), Effect::None);
        assert_eq!(app.status_message, "First page");
    }

    #[test]
    fn test_failed_select_shows_error_and_ack_restores_list() {
        let mut app = test_app();
        cmd(&mut app, Command::MoveSelection(1));
        let effect = cmd(&mut app, Command::Activate);
        respond(
            &mut app,
            &effect,
            Err(ErrorDetail::new(ErrorKind::ClientError, "not found").with_status(404)),
        );
        assert_eq!(app.screen.kind(), ScreenKind::Error);
        assert!(app.stack.is_empty());

        // Any other command is ignored until acknowledged
        assert_eq!(cmd(&mut app, Command::NewItem), Effect::None);
        assert_eq!(app.screen.kind(), ScreenKind::Error);

        cmd(&mut app, Command::Back);
        assert_eq!(list(&app).selected, 1);
    }

    #[test]
    fn test_failed_delete_returns_to_same_detail() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::DeleteItem);
        let stack_before = app.stack.clone();

        let effect = cmd(&mut app, Command::ConfirmYes);
        respond(
            &mut app,
            &effect,
            Err(ErrorDetail::new(ErrorKind::ClientError, "conflict").with_status(409)),
        );
        assert_eq!(app.screen.kind(), ScreenKind::Error);
        assert_eq!(app.stack, stack_before);

        cmd(&mut app, Command::Back);
        match &app.screen {
            Screen::Detail(detail) => assert_eq!(detail.recipe.id, RecipeId::from("1")),
            other => panic!("expected detail, got {:?}", other.kind()),
        }
        assert_eq!(app.stack.kinds(), vec![ScreenKind::List]);
    }

    #[test]
    fn test_delete_success_returns_to_list_and_refreshes() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::DeleteItem);
        let effect = cmd(&mut app, Command::ConfirmYes);
        let refresh = respond(&mut app, &effect, Ok(Payload::Deleted));

        assert_eq!(app.screen.kind(), ScreenKind::List);
        assert!(app.stack.is_empty());
        assert_eq!(app.status_message, "Recipe deleted");
        match &refresh {
            Effect::Request(req) => {
                assert_eq!(req.kind, RequestKind::FetchPage { cursor: None })
            }
            other => panic!("expected refresh, got {other:?}"),
        }
        respond(&mut app, &refresh, Ok(Payload::Page(sample_page(&["Soup"]))));
        assert_eq!(list(&app).page.len(), 1);
    }

    #[test]
    fn test_confirm_no_returns_to_detail() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::DeleteItem);
        assert_eq!(cmd(&mut app, Command::ConfirmNo), Effect::None);
        assert_eq!(app.screen.kind(), ScreenKind::Detail);
    }

    #[test]
    fn test_create_submits_and_refetches_list() {
        let mut app = test_app();
        cmd(&mut app, Command::NewItem);
        let draft = RecipeDraft {
            title: "Soup".into(),
            ..Default::default()
        };
        let effect = cmd(&mut app, Command::SubmitForm(draft.clone()));
        match &effect {
            Effect::Request(req) => assert_eq!(req.kind, RequestKind::Create(draft)),
            other => panic!("expected create, got {other:?}"),
        }
        assert_eq!(app.screen.kind(), ScreenKind::CreateForm);

        let refresh = respond(&mut app, &effect, Ok(Payload::Created));
        assert_eq!(app.screen.kind(), ScreenKind::List);
        assert!(matches!(
            &refresh,
            Effect::Request(req) if req.kind == RequestKind::FetchPage { cursor: None }
        ));
    }

    #[test]
    fn test_failed_submit_keeps_form_input() {
        let mut app = test_app();
        cmd(&mut app, Command::NewItem);
        if let Screen::Form(form) = &mut app.screen {
            form.form.title = "Soup".into();
        }
        let draft = match &app.screen {
            Screen::Form(form) => form.form.to_draft(),
            _ => unreachable!(),
        };
        let effect = cmd(&mut app, Command::SubmitForm(draft));
        respond(
            &mut app,
            &effect,
            Err(ErrorDetail::new(ErrorKind::ServerError, "db down").with_status(500)),
        );
        cmd(&mut app, Command::Back);
        match &app.screen {
            Screen::Form(form) => assert_eq!(form.form.title, "Soup"),
            other => panic!("expected form, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_edit_prefills_and_applies_echoed_recipe() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::EditItem);
        match &app.screen {
            Screen::Form(form) => {
                assert_eq!(form.mode, FormMode::Edit(RecipeId::from("1")));
                assert_eq!(form.form.title, "Pancakes");
            }
            other => panic!("expected form, got {:?}", other.kind()),
        }
        let draft = RecipeDraft {
            title: "Crepes".into(),
            ..Default::default()
        };
        let effect = cmd(&mut app, Command::SubmitForm(draft));
        let after = respond(
            &mut app,
            &effect,
            Ok(Payload::Updated(Some(sample_recipe("1", "Crepes")))),
        );
        assert_eq!(after, Effect::None);
        match &app.screen {
            Screen::Detail(detail) => assert_eq!(detail.recipe.title, "Crepes"),
            other => panic!("expected detail, got {:?}", other.kind()),
        }
    }

    #[test]
    fn test_update_without_echo_refetches_detail() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::EditItem);
        let effect = cmd(&mut app, Command::SubmitForm(RecipeDraft::default()));
        let refresh = respond(&mut app, &effect, Ok(Payload::Updated(None)));
        assert_eq!(app.screen.kind(), ScreenKind::Detail);
        assert!(matches!(
            &refresh,
            Effect::Request(req) if req.kind == RequestKind::FetchRecipe(RecipeId::from("1"))
        ));
    }

    #[test]
    fn test_invalid_combinations_are_noops() {
        let mut app = test_app();
        for command in [
            Command::EditItem,
            Command::DeleteItem,
            Command::ConfirmYes,
            Command::ConfirmNo,
            Command::SubmitForm(RecipeDraft::default()),
        ] {
            assert_eq!(cmd(&mut app, command), Effect::None);
            assert_eq!(app.screen.kind(), ScreenKind::List);
        }
    }

    #[test]
    fn test_quit_clears_stack() {
        let mut app = test_app();
        open_detail(&mut app, "1", "Pancakes");
        cmd(&mut app, Command::Refresh);
        assert_eq!(cmd(&mut app, Command::Quit), Effect::Quit);
        assert!(app.stack.is_empty());
        assert!(!app.is_busy());
    }
}
