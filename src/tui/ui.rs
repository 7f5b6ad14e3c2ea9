use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::view::{ViewBody, ViewModel};
use crate::tui::component::Component;
use crate::tui::components::{
    ConfirmDialog, ErrorDialog, RecipeDetail, RecipeForm, RecipeList, TitleBar,
};

/// Draws one frame from the view model: title bar, body, key hints.
///
/// Returns the furthest the detail body can scroll at this frame size, so
/// the caller can keep the stored offset within the wrapped content.
pub fn draw_ui(frame: &mut Frame, view: &ViewModel, spinner_frame: usize) -> Option<u16> {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, help_area] = layout.areas(frame.area());

    TitleBar {
        heading: &view.heading,
        status_message: &view.status,
        busy: view.busy.as_deref(),
        spinner_frame,
    }
    .render(frame, title_area);

    let mut max_scroll = None;
    match &view.body {
        ViewBody::List {
            rows,
            selected,
            has_prev,
            has_next,
        } => RecipeList {
            rows,
            selected: *selected,
            has_prev: *has_prev,
            has_next: *has_next,
        }
        .render(frame, main_area),
        ViewBody::Detail {
            title,
            ingredients,
            steps,
            metadata,
            reviews,
            scroll,
        } => {
            let mut detail = RecipeDetail {
                title,
                ingredients,
                steps,
                metadata,
                reviews,
                scroll: *scroll,
            };
            max_scroll = Some(detail.max_scroll(main_area));
            detail.render(frame, main_area);
        }
        ViewBody::Form { fields } => RecipeForm { fields }.render(frame, main_area),
        ViewBody::Confirm { prompt } => ConfirmDialog { prompt }.render(frame, main_area),
        ViewBody::Error {
            kind,
            message,
            status,
        } => ErrorDialog {
            kind,
            message,
            status: *status,
        }
        .render(frame, main_area),
    }

    frame.render_widget(
        Span::styled(view.help, Style::default().fg(Color::DarkGray)),
        help_area,
    );
    max_scroll
}
