use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::view::FormView;
use crate::tui::component::Component;
use crate::tui::components::{
    GenerateButton, ResponsePanel, TitleBar, Toast, TonePicker,
};
use crate::tui::{Focus, TuiState};

/// Screen regions for one frame, top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormAreas {
    pub title: Rect,
    pub url: Rect,
    pub text: Rect,
    pub tones: Rect,
    pub button: Rect,
    pub response: Option<Rect>,
    pub footer: Rect,
}

/// Rows always taken by title, URL field, button and footer.
const FIXED_ROWS: u16 = 1 + 3 + 1 + 1;
/// Smallest response panel: borders plus three lines of reply.
const RESPONSE_MIN_HEIGHT: u16 = 5;
/// A bordered box with a single row of content.
const COLLAPSED_HEIGHT: u16 = 3;

const REPLY_HIDDEN_HINT: &str = "Reply ready but hidden: enlarge the terminal to read it";

/// Splits the screen top to bottom. When a reply exists the text field, then
/// the tone picker, give up rows (down to one content row each) so the
/// response panel keeps at least `RESPONSE_MIN_HEIGHT`.
pub fn form_areas(
    area: Rect,
    mut text_height: u16,
    mut tones_height: u16,
    has_response: bool,
) -> FormAreas {
    use Constraint::{Length, Min};

    if has_response {
        let budget = area.height.saturating_sub(FIXED_ROWS + RESPONSE_MIN_HEIGHT);
        let overflow = (text_height + tones_height).saturating_sub(budget);
        let text_cut = overflow.min(text_height.saturating_sub(COLLAPSED_HEIGHT));
        text_height -= text_cut;
        let tones_cut = (overflow - text_cut).min(tones_height.saturating_sub(COLLAPSED_HEIGHT));
        tones_height -= tones_cut;
    }

    let [title, url, text, tones, button, rest, footer] = Layout::vertical([
        Length(1),
        Length(3),
        Length(text_height),
        Length(tones_height),
        Length(1),
        Min(0),
        Length(1),
    ])
    .areas(area);

    FormAreas {
        title,
        url,
        text,
        tones,
        button,
        response: (has_response && rest.height >= COLLAPSED_HEIGHT).then_some(rest),
        footer,
    }
}

fn footer_hint(focus: Focus, busy: bool) -> &'static str {
    if busy {
        return "Waiting for the webhook...  Esc dismiss/quit  Ctrl+C quit";
    }
    match focus {
        Focus::WebhookUrl => "Tab next  Enter next  Ctrl+G generate  Esc quit",
        Focus::InputText => "Tab next  Enter/Ctrl+J newline  Ctrl+G generate  Esc quit",
        Focus::Tones => "Up/Down or 1-6 pick tone  Tab next  Ctrl+G generate  Esc quit",
        Focus::Button => "Enter generate  Tab next  PgUp/PgDn scroll reply  Esc quit",
    }
}

pub fn draw_ui(frame: &mut Frame, view: &FormView, tui: &mut TuiState, spinner_frame: usize) {
    let area = frame.area();

    tui.url_field.focused = tui.focus == Focus::WebhookUrl;
    tui.text_field.focused = tui.focus == Focus::InputText;

    let mut tone_picker = TonePicker::new(view.tones.clone(), tui.focus == Focus::Tones);
    let areas = form_areas(
        area,
        tui.text_field.height(area.width),
        tone_picker.height(),
        view.response.is_some(),
    );

    let status = if view.button.busy {
        view.button.label.to_string()
    } else {
        String::new()
    };
    TitleBar::new(status).render(frame, areas.title);

    tui.url_field.render(frame, areas.url);
    tui.text_field.render(frame, areas.text);
    tone_picker.render(frame, areas.tones);
    GenerateButton::new(view.button.clone(), tui.focus == Focus::Button, spinner_frame)
        .render(frame, areas.button);

    if let (Some(text), Some(response_area)) = (view.response.as_deref(), areas.response) {
        ResponsePanel::new(text, &mut tui.response_panel).render(frame, response_area);
    }

    let footer = if view.response.is_some() && areas.response.is_none() {
        Span::styled(REPLY_HIDDEN_HINT, Style::default().fg(Color::Yellow))
    } else {
        Span::styled(
            footer_hint(tui.focus, view.button.busy),
            Style::default().fg(Color::DarkGray),
        )
    };
    frame.render_widget(footer, areas.footer);

    if let Some(notification) = &view.notification {
        Toast::new(notification).render(frame, area);
    }
}
