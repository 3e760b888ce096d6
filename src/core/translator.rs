use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::core::{
    msg::{form::FormMsg, history::HistoryMsg, system::SystemMsg, Msg},
    raw_msg::RawMsg,
    state::AppState,
};
use crate::presentation::config::keybindings::Action;

pub const SMALL_STEP: f64 = 1.0;
pub const LARGE_STEP: f64 = 10.0;

/// Translates raw terminal events into domain messages
/// This function is pure and contains no side effects
pub fn translate_raw_to_domain(raw: RawMsg, state: &AppState) -> Vec<Msg> {
    match raw {
        RawMsg::Quit => vec![Msg::System(SystemMsg::Quit)],
        RawMsg::Suspend => vec![Msg::System(SystemMsg::Suspend)],
        RawMsg::Resume => vec![Msg::System(SystemMsg::Resume)],
        RawMsg::Resize(width, height) => vec![Msg::System(SystemMsg::Resize(width, height))],

        RawMsg::Key(key) => translate_key_event(key, state),
        RawMsg::Paste(text) if state.form.is_editing() => {
            vec![Msg::Form(FormMsg::InputText(text))]
        }
        RawMsg::Paste(_) => vec![],

        // Leaving the terminal behaves like leaving the field
        RawMsg::FocusLost if state.form.is_editing() => vec![Msg::Form(FormMsg::CommitEdit)],
        RawMsg::FocusLost => vec![],

        RawMsg::Error(error) => vec![Msg::System(SystemMsg::error("Terminal", error))],

        RawMsg::Tick | RawMsg::Render => vec![],
    }
}

fn translate_key_event(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = key
    {
        return vec![Msg::System(SystemMsg::Quit)];
    }

    if state.form.is_editing() {
        translate_editing_keys(key)
    } else {
        translate_navigate_keys(key, state)
    }
}

/// While a field is being typed into, keys go to the field buffer
fn translate_editing_keys(key: KeyEvent) -> Vec<Msg> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => vec![Msg::Form(FormMsg::CommitEdit)],
        KeyCode::Tab => vec![
            Msg::Form(FormMsg::CommitEdit),
            Msg::Form(FormMsg::FocusNext),
        ],
        KeyCode::BackTab => vec![
            Msg::Form(FormMsg::CommitEdit),
            Msg::Form(FormMsg::FocusPrev),
        ],
        KeyCode::Backspace => vec![Msg::Form(FormMsg::InputBackspace)],
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            vec![Msg::Form(FormMsg::InputChar(c))]
        }
        _ => vec![],
    }
}

fn translate_navigate_keys(key: KeyEvent, state: &AppState) -> Vec<Msg> {
    match state.config.config.keybindings.action_for(key) {
        Some(action) => translate_action_to_msg(action),
        None => vec![],
    }
}

pub fn translate_action_to_msg(action: Action) -> Vec<Msg> {
    let msg = match action {
        Action::Quit => Msg::System(SystemMsg::Quit),
        Action::Suspend => Msg::System(SystemMsg::Suspend),
        Action::FocusNext => Msg::Form(FormMsg::FocusNext),
        Action::FocusPrev => Msg::Form(FormMsg::FocusPrev),
        Action::Increment => Msg::Form(FormMsg::AdjustFocused(SMALL_STEP)),
        Action::Decrement => Msg::Form(FormMsg::AdjustFocused(-SMALL_STEP)),
        Action::IncrementLarge => Msg::Form(FormMsg::AdjustFocused(LARGE_STEP)),
        Action::DecrementLarge => Msg::Form(FormMsg::AdjustFocused(-LARGE_STEP)),
        Action::Edit => Msg::Form(FormMsg::StartEditing),
        Action::AddParticipant => Msg::Form(FormMsg::AddParticipant),
        Action::RemoveParticipant => Msg::Form(FormMsg::RemoveFocusedParticipant),
        Action::Renormalize => Msg::Form(FormMsg::Renormalize),
        Action::SaveSplit => Msg::History(HistoryMsg::Save),
        Action::LoadSplit => Msg::History(HistoryMsg::LoadSelected),
        Action::NextSavedSplit => Msg::History(HistoryMsg::SelectNext),
        Action::PrevSavedSplit => Msg::History(HistoryMsg::SelectPrev),
    };
    vec![msg]
}
