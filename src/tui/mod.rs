//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the view
//! model, translates key events into dispatcher keys and runs the
//! requests `update()` asks for.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Request Lifecycle
//!
//! `Effect::Request` spawns one tokio task that calls the client and sends
//! the outcome back over an mpsc channel as `Action::Response`. The task's
//! abort handle is kept next to the request id; whenever the core stops
//! waiting for that id (cancel, quit) the task is aborted. A response that
//! slips through anyway is discarded by `update()`.
//!
//! ## Redraw Strategy
//!
//! - **Busy**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::sync::{Arc, mpsc};
use std::time::{Duration, Instant};

use tokio::task::AbortHandle;

use crate::api::client::RecipeClient;
use crate::core::action::{Action, Effect, update};
use crate::core::dispatch::{Key, dispatch};
use crate::core::request::{ApiRequest, RequestId};
use crate::core::state::{App, Screen};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// The request currently running on the runtime.
struct InFlight {
    id: RequestId,
    handle: AbortHandle,
}

/// What the event loop does between frames.
struct Runner {
    app: App,
    client: Arc<RecipeClient>,
    tx: mpsc::Sender<Action>,
    in_flight: Option<InFlight>,
}

impl Runner {
    /// Feeds one action through `update()` and carries out the effect.
    /// Returns `true` when the app should exit.
    fn apply(&mut self, action: Action) -> bool {
        let effect = update(&mut self.app, action);
        self.reap_abandoned();
        match effect {
            Effect::None => false,
            Effect::Request(request) => {
                self.in_flight = Some(spawn_request(self.client.clone(), request, self.tx.clone()));
                false
            }
            Effect::Quit => true,
        }
    }

    fn handle_key(&mut self, key: Key) -> bool {
        match dispatch(&self.app, key) {
            Some(command) => {
                debug!("{key:?} → {command:?}");
                self.apply(Action::Command(command))
            }
            None => {
                // Keys the dispatcher leaves alone are text input on a form.
                if !self.app.is_busy()
                    && let Screen::Form(form) = &mut self.app.screen
                {
                    form.form.handle_key(key);
                }
                false
            }
        }
    }

    /// Aborts the running task once the core no longer waits for it.
    fn reap_abandoned(&mut self) {
        let wanted = match (&self.app.pending, &self.in_flight) {
            (Some(pending), Some(running)) => pending.id == running.id,
            _ => false,
        };
        if !wanted && let Some(running) = self.in_flight.take() {
            if !running.handle.is_finished() {
                info!("Aborting abandoned request {}", running.id);
            }
            running.handle.abort();
        }
    }
}

pub fn run(app: App, client: Arc<RecipeClient>) -> std::io::Result<()> {
    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, app, client);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut ratatui::DefaultTerminal,
    app: App,
    client: Arc<RecipeClient>,
) -> std::io::Result<()> {
    // Channel for responses from background tasks
    let (tx, rx) = mpsc::channel();
    let mut runner = Runner {
        app,
        client,
        tx,
        in_flight: None,
    };

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        let busy = runner.app.is_busy();
        if needs_redraw || busy {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let view = runner.app.view_model();
            let mut max_scroll = None;
            terminal.draw(|f| max_scroll = ui::draw_ui(f, &view, spinner_frame))?;
            if let Some(max) = max_scroll {
                runner.app.clamp_detail_scroll(max);
            }
            needs_redraw = false;
        }

        let timeout = if busy {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };

        // Process first event + drain ALL pending events before next draw
        let mut next = poll_event_timeout(timeout)?;
        while let Some(event) = next {
            needs_redraw = true;
            if let TuiEvent::Key(key) = event
                && runner.handle_key(key)
            {
                info!("Quit requested");
                return Ok(());
            }
            next = poll_event_immediate()?;
        }

        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            if let Action::Response { request, .. } = &action {
                debug!("Event loop received response for {request}");
            }
            if runner.apply(action) {
                return Ok(());
            }
        }
    }
}

fn spawn_request(
    client: Arc<RecipeClient>,
    request: ApiRequest,
    tx: mpsc::Sender<Action>,
) -> InFlight {
    info!("Spawning {}: {}", request.id, request.kind.describe());
    let id = request.id;
    let handle = tokio::spawn(async move {
        let outcome = client.execute(&request.kind).await;
        if tx
            .send(Action::Response {
                request: request.id,
                outcome,
            })
            .is_err()
        {
            warn!("Failed to deliver response for {}: receiver dropped", request.id);
        }
    });
    InFlight {
        id,
        handle: handle.abort_handle(),
    }
}
