//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the form, and
//! translates keyboard events into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! - **Animating** (request in flight, toast visible): draws every ~80ms so
//!   the spinner turns and toasts expire on time.
//! - **Idle**: sleeps up to 500ms and only redraws on events.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use crossterm::cursor::{SetCursorStyle, Show};
use crossterm::event::{
    DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture,
};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::core::action::{Action, Effect, update};
use crate::core::state::App;
use crate::core::view::{INPUT_PLACEHOLDER, WEBHOOK_PLACEHOLDER, view};
use crate::request::spawn_request;
use crate::tui::component::EventHandler;
use crate::tui::components::{FieldEvent, ResponsePanelState, TextField, ToneEvent, TonePicker};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Maximum rows the received-text field grows to before scrolling
const TEXT_FIELD_MAX_LINES: u16 = 6;

/// Which part of the form receives keystrokes. Tab order follows the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    WebhookUrl,
    InputText,
    Tones,
    Button,
}

impl Focus {
    const ORDER: [Focus; 4] = [Focus::WebhookUrl, Focus::InputText, Focus::Tones, Focus::Button];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Focus {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Focus {
        Self::ORDER[(self.index() + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub focus: Focus,
    pub url_field: TextField,
    pub text_field: TextField,
    pub response_panel: ResponsePanelState,
}

impl TuiState {
    pub fn new(app: &App) -> Self {
        // Start where the user has something to do
        let focus = if app.input.webhook_url.trim().is_empty() {
            Focus::WebhookUrl
        } else {
            Focus::InputText
        };
        Self {
            focus,
            url_field: TextField::single_line(
                "Webhook URL",
                WEBHOOK_PLACEHOLDER,
                app.input.webhook_url.clone(),
            ),
            text_field: TextField::multiline(
                "Received Text",
                INPUT_PLACEHOLDER,
                app.input.input_text.clone(),
                TEXT_FIELD_MAX_LINES,
            ),
            response_panel: ResponsePanelState::default(),
        }
    }
}

/// What the loop should do after an event has been handled.
#[derive(Debug, PartialEq)]
enum Flow {
    Continue,
    Spawn(Effect),
    Quit,
}

fn flow_of(effect: Effect) -> Flow {
    match effect {
        Effect::None => Flow::Continue,
        Effect::Quit => Flow::Quit,
        spawn @ Effect::SpawnRequest { .. } => Flow::Spawn(spawn),
    }
}

/// Routes one terminal event to the focused component or a global binding.
fn handle_event(app: &mut App, tui: &mut TuiState, event: TuiEvent) -> Flow {
    match event {
        TuiEvent::Resize => Flow::Continue,
        TuiEvent::ForceQuit => flow_of(update(app, Action::Quit)),
        TuiEvent::Escape => {
            if app.notification.is_some() {
                flow_of(update(app, Action::DismissNotification))
            } else {
                flow_of(update(app, Action::Quit))
            }
        }
        TuiEvent::Generate => flow_of(update(app, Action::Submit)),
        TuiEvent::NextField => {
            tui.focus = tui.focus.next();
            Flow::Continue
        }
        TuiEvent::PrevField => {
            tui.focus = tui.focus.prev();
            Flow::Continue
        }
        TuiEvent::ScrollUp | TuiEvent::ScrollDown => {
            tui.response_panel.handle_event(&event);
            Flow::Continue
        }
        _ => match tui.focus {
            Focus::WebhookUrl => match tui.url_field.handle_event(&event) {
                Some(FieldEvent::Changed) => {
                    flow_of(update(app, Action::EditWebhookUrl(tui.url_field.buffer.clone())))
                }
                Some(FieldEvent::Advance) => {
                    tui.focus = tui.focus.next();
                    Flow::Continue
                }
                None => Flow::Continue,
            },
            Focus::InputText => match tui.text_field.handle_event(&event) {
                Some(FieldEvent::Changed) => {
                    flow_of(update(app, Action::EditInputText(tui.text_field.buffer.clone())))
                }
                Some(FieldEvent::Advance) | None => Flow::Continue,
            },
            Focus::Tones => {
                let mut picker = TonePicker::new(view(app, Instant::now()).tones, true);
                match picker.handle_event(&event) {
                    Some(ToneEvent::Select(tone)) => flow_of(update(app, Action::SelectTone(tone))),
                    Some(ToneEvent::Confirm) => {
                        tui.focus = Focus::Button;
                        Flow::Continue
                    }
                    None => Flow::Continue,
                }
            }
            Focus::Button => match event {
                TuiEvent::Submit | TuiEvent::InputChar(' ') => flow_of(update(app, Action::Submit)),
                _ => Flow::Continue,
            },
        },
    }
}

/// Owns the terminal session. Dropping it leaves raw mode and the alternate
/// screen, whichever way `run` exits.
struct TerminalModeGuard;

impl TerminalModeGuard {
    fn enter() -> std::io::Result<(Self, DefaultTerminal)> {
        // Guard first, so a failure below still restores what was changed
        let guard = Self;
        let terminal = ratatui::try_init()?;
        execute!(
            stdout(),
            EnableMouseCapture,
            EnableBracketedPaste,
            Show,                        // Show cursor for field editing
            SetCursorStyle::SteadyBlock, // Non-blinking: avoids blink timer reset from continuous redraws
        )?;
        info!("Terminal modes enabled (mouse, bracketed paste, steady block cursor)");
        Ok((guard, terminal))
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(
            stdout(),
            DisableMouseCapture,
            DisableBracketedPaste,
            SetCursorStyle::DefaultUserShape
        );
        ratatui::restore();
        debug!("Terminal restored");
    }
}

pub fn run(mut app: App) -> std::io::Result<()> {
    let mut tui = TuiState::new(&app);

    let (_terminal_guard, mut terminal) = TerminalModeGuard::enter()?;

    // Channel for actions from request tasks
    let (tx, rx) = mpsc::channel();

    let start_time = Instant::now();
    let mut needs_redraw = true; // Force first frame

    loop {
        update(&mut app, Action::Tick(Instant::now()));

        let animating = app.is_loading() || app.notification.is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            let form = view(&app, Instant::now());
            terminal.draw(|f| ui::draw_ui(f, &form, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short when animating (~12fps), long when idle
        let timeout = if animating {
            Duration::from_millis(80)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain ALL pending events before next draw
        let mut should_quit = false;
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match handle_event(&mut app, &mut tui, event) {
                Flow::Continue => {}
                Flow::Quit => should_quit = true,
                Flow::Spawn(Effect::SpawnRequest { url, payload }) => {
                    spawn_request(app.generator.clone(), url, payload, tx.clone());
                }
                Flow::Spawn(_) => {}
            }
        }

        if should_quit {
            break;
        }

        // Handle request results
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            if matches!(action, Action::RequestSettled(Ok(_))) {
                tui.response_panel = ResponsePanelState::default();
            }
            update(&mut app, action);
        }
    }

    info!("Shutting down");
    Ok(())
}
