use crate::{
    core::cmd::Cmd,
    core::msg::{form::FormMsg, history::HistoryMsg, system::SystemMsg, Msg},
    core::state::{
        form::{Focus, FormMode},
        AppState,
    },
    domain::{
        split::MAX_PERCENTAGE,
        text::{format_amount, format_number, parse_number, ParsedNumber},
    },
};

/// Elm-like update function
/// Returns new state and list of commands from current state and message
pub fn update(msg: Msg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        Msg::System(system_msg) => {
            let commands = state.system.update(system_msg);
            (state, commands)
        }
        Msg::Form(form_msg) => update_form(form_msg, state),
        Msg::History(history_msg) => update_history(history_msg, state),
    }
}

fn update_form(msg: FormMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        FormMsg::FocusNext => {
            let target = state.form.focus.next(state.split.len());
            move_focus(state, target)
        }
        FormMsg::FocusPrev => {
            let target = state.form.focus.prev(state.split.len());
            move_focus(state, target)
        }
        FormMsg::Focus(target) => {
            let target = target.clamp(state.split.len());
            move_focus(state, target)
        }

        FormMsg::AdjustFocused(delta) => {
            if !state.form.is_editing() {
                adjust_focused(&mut state, delta);
            }
            (state, vec![])
        }

        FormMsg::StartEditing => {
            if !state.form.is_editing() {
                state.form.buffer = editable_text(&state);
                state.form.mode = FormMode::Editing;
            }
            (state, vec![])
        }
        FormMsg::InputChar(c) => {
            if state.form.is_editing() {
                state.form.buffer.push(c);
                apply_live_input(&mut state);
            }
            (state, vec![])
        }
        FormMsg::InputText(text) => {
            if state.form.is_editing() {
                // single-line inputs
                state.form.buffer.extend(text.chars().filter(|c| !c.is_control()));
                apply_live_input(&mut state);
            }
            (state, vec![])
        }
        FormMsg::InputBackspace => {
            if state.form.is_editing() {
                state.form.buffer.pop();
                apply_live_input(&mut state);
            }
            (state, vec![])
        }
        FormMsg::CommitEdit => {
            commit_edit(&mut state);
            (state, vec![])
        }

        FormMsg::AddParticipant => {
            commit_edit(&mut state);
            state.split = state.split.add_participant();
            let name = state
                .split
                .participants
                .last()
                .map(|p| p.name.clone())
                .unwrap_or_default();
            let commands = state.system.update(SystemMsg::message("Added", name));
            (state, commands)
        }
        FormMsg::RemoveFocusedParticipant => match state.form.focus.participant() {
            Some(index) => remove_participant(state, index),
            None => (state, vec![]),
        },
        FormMsg::RemoveParticipant(index) => remove_participant(state, index),

        FormMsg::Renormalize => {
            commit_edit(&mut state);
            state.split = state.split.renormalize();
            (state, vec![])
        }
    }
}

fn update_history(msg: HistoryMsg, mut state: AppState) -> (AppState, Vec<Cmd>) {
    match msg {
        HistoryMsg::Save => {
            // saving leaves the focused share like a blur does
            commit_edit(&mut state);
            if state.form.focus.is_percentage() {
                state.split = state.split.renormalize();
            }
            let validation = state.validation();
            if let Some(error) = validation.first() {
                let commands = state
                    .system
                    .update(SystemMsg::error("Save", error.to_string()));
                return (state, commands);
            }

            state.saved = state.saved.save(&state.split);
            state.form.selected_saved = state.saved.last_index();
            let label = format!("Split {}", state.saved.len());
            let mut commands = state
                .system
                .update(SystemMsg::message("Saved", label.clone()));
            commands.push(Cmd::LogInfo {
                message: format!("Saved {label}: {:?}", state.split),
            });
            (state, commands)
        }

        HistoryMsg::LoadSelected => match state.form.selected_saved {
            Some(index) => load(state, index),
            None => {
                let commands = state
                    .system
                    .update(SystemMsg::error("Load", "no saved split selected"));
                (state, commands)
            }
        },
        HistoryMsg::Load(index) => load(state, index),

        HistoryMsg::SelectNext => {
            let len = state.saved.len();
            if len > 0 {
                state.form.selected_saved = Some(match state.form.selected_saved {
                    Some(index) => (index + 1) % len,
                    None => 0,
                });
            }
            (state, vec![])
        }
        HistoryMsg::SelectPrev => {
            let len = state.saved.len();
            if len > 0 {
                state.form.selected_saved = Some(match state.form.selected_saved {
                    Some(index) => (index + len - 1) % len,
                    None => len - 1,
                });
            }
            (state, vec![])
        }
    }
}

fn load(mut state: AppState, index: usize) -> (AppState, Vec<Cmd>) {
    match state.saved.load(index) {
        Ok(split) => {
            state.split = split;
            state.form.reset_to(&state.split);
            state.form.selected_saved = Some(index);
            let commands = state
                .system
                .update(SystemMsg::message("Loaded", format!("Split {}", index + 1)));
            (state, commands)
        }
        Err(e) => {
            let commands = state.system.update(SystemMsg::error("Load", e.to_string()));
            (state, commands)
        }
    }
}

fn remove_participant(mut state: AppState, index: usize) -> (AppState, Vec<Cmd>) {
    commit_edit(&mut state);
    let before = state.split.len();
    let name = state.split.participant(index).map(|p| p.name.clone());
    state.split = state.split.remove_participant(index);
    if state.split.len() == before {
        // below the minimum: nothing happens
        return (state, vec![]);
    }

    state.form.participant_removed(index, state.split.len());
    let commands = state
        .system
        .update(SystemMsg::message("Removed", name.unwrap_or_default()));
    (state, commands)
}

/// Leaving a percentage input is the point where the split gets
/// renormalized; edits in progress are committed first.
fn move_focus(mut state: AppState, target: Focus) -> (AppState, Vec<Cmd>) {
    commit_edit(&mut state);
    let leaving = state.form.focus;
    state.form.focus = target;
    if leaving.is_percentage() && leaving != target {
        state.split = state.split.renormalize();
    }
    (state, vec![])
}

fn adjust_focused(state: &mut AppState, delta: f64) {
    let focus = state.form.focus;
    let split = std::mem::take(&mut state.split);
    state.split = match focus {
        Focus::BillAmount => {
            let bill_amount = split.bill_amount + delta;
            let split = split.update_bill_amount(bill_amount);
            state.form.bill_input = format_amount(split.bill_amount);
            split
        }
        Focus::TipPercentage => {
            let tip = split.tip_percentage;
            split.update_tip_percentage(tip + delta)
        }
        Focus::ParticipantPercentage(index) => {
            let current = split.participant(index).map_or(0.0, |p| p.percentage);
            split.update_percentage(index, current + delta)
        }
        Focus::ParticipantName(_) => split,
    };
    if !matches!(focus, Focus::ParticipantName(_)) {
        state.form.set_input_message(focus.field(), None);
    }
}

/// Text the buffer starts from when editing the focused input
fn editable_text(state: &AppState) -> String {
    match state.form.focus {
        Focus::BillAmount => {
            let untouched = state.split.bill_amount == 0.0
                && state.form.input_message(Focus::BillAmount.field()).is_none();
            if untouched {
                String::new()
            } else {
                state.form.bill_input.clone()
            }
        }
        Focus::TipPercentage => format_number(state.split.tip_percentage),
        Focus::ParticipantName(index) => state
            .split
            .participant(index)
            .map(|p| p.name.clone())
            .unwrap_or_default(),
        Focus::ParticipantPercentage(index) => state
            .split
            .participant(index)
            .map(|p| format_number(p.percentage))
            .unwrap_or_default(),
    }
}

/// Bill and names follow every keystroke; percentages wait for the commit.
fn apply_live_input(state: &mut AppState) {
    match state.form.focus {
        Focus::BillAmount => {
            state.form.bill_input = state.form.buffer.clone();
            let parsed = parse_number(&state.form.buffer);
            let (value, message) = if parsed.value < 0.0 {
                (0.0, Some("Bill amount must be positive".to_string()))
            } else {
                (parsed.value, parsed.message)
            };
            state.split = std::mem::take(&mut state.split).update_bill_amount(value);
            state.form.set_input_message(Focus::BillAmount.field(), message);
        }
        Focus::ParticipantName(index) => {
            let name = state.form.buffer.clone();
            state.split = std::mem::take(&mut state.split).update_name(index, name);
        }
        Focus::TipPercentage | Focus::ParticipantPercentage(_) => {}
    }
}

/// Out-of-range text becomes 0 like any other invalid input.
fn parse_percentage(text: &str, label: &str) -> ParsedNumber {
    let parsed = parse_number(text);
    if parsed.is_valid() && !(0.0..=MAX_PERCENTAGE).contains(&parsed.value) {
        ParsedNumber {
            value: 0.0,
            message: Some(format!("{label} must be between 0 and 100")),
        }
    } else {
        parsed
    }
}

fn commit_edit(state: &mut AppState) {
    if !state.form.is_editing() {
        return;
    }

    let focus = state.form.focus;
    let buffer = std::mem::take(&mut state.form.buffer);
    state.form.mode = FormMode::Navigate;
    match focus {
        Focus::BillAmount => {
            if state.form.input_message(focus.field()).is_none() {
                state.form.bill_input = format_amount(state.split.bill_amount);
            }
        }
        Focus::ParticipantName(_) => {}
        Focus::TipPercentage => {
            let parsed = parse_percentage(&buffer, "Tip percentage");
            state.split = std::mem::take(&mut state.split).update_tip_percentage(parsed.value);
            state.form.set_input_message(focus.field(), parsed.message);
        }
        Focus::ParticipantPercentage(index) => {
            let parsed = parse_percentage(&buffer, "Percentage");
            state.split = std::mem::take(&mut state.split).update_percentage(index, parsed.value);
            state.form.set_input_message(focus.field(), parsed.message);
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::domain::{SplitConfiguration, SplitField};

    fn run(state: AppState, msgs: impl IntoIterator<Item = Msg>) -> (AppState, Vec<Cmd>) {
        msgs.into_iter()
            .fold((state, vec![]), |(state, mut all), msg| {
                let (state, cmds) = update(msg, state);
                all.extend(cmds);
                (state, all)
            })
    }

    fn form(msg: FormMsg) -> Msg {
        Msg::Form(msg)
    }

    /// Replaces whatever the focused input holds with `text`
    fn type_text(text: &str) -> Vec<Msg> {
        let mut msgs = vec![form(FormMsg::StartEditing)];
        msgs.extend((0..8).map(|_| form(FormMsg::InputBackspace)));
        msgs.extend(text.chars().map(|c| form(FormMsg::InputChar(c))));
        msgs.push(form(FormMsg::CommitEdit));
        msgs
    }

    fn percentages(state: &AppState) -> Vec<f64> {
        state.split.participants.iter().map(|p| p.percentage).collect()
    }

    #[test]
    fn test_update_quit() {
        let (state, cmds) = update(Msg::System(SystemMsg::Quit), AppState::default());

        assert!(state.system.should_quit);
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_typing_bill_amount_updates_split_live() {
        let mut state = AppState::default();
        state.split = state.split.update_tip_percentage(10.0);
        let (state, _) = run(
            state,
            vec![
                form(FormMsg::StartEditing),
                form(FormMsg::InputChar('1')),
                form(FormMsg::InputChar('0')),
                form(FormMsg::InputChar('0')),
            ],
        );

        assert!(state.form.is_editing());
        assert_eq!(state.split.bill_amount, 100.0);
        assert_eq!(state.amounts_owed(), vec![55.0, 55.0]);

        let (state, _) = update(form(FormMsg::CommitEdit), state);
        assert!(!state.form.is_editing());
        assert_eq!(state.form.bill_input, "100.00");
    }

    #[test]
    fn test_invalid_bill_text_is_coerced_with_message() {
        let (state, _) = run(AppState::default(), type_text("12x"));

        assert_eq!(state.split.bill_amount, 0.0);
        assert_eq!(state.form.bill_input, "12x");
        assert_eq!(
            state.form.input_message(SplitField::BillAmount),
            Some("'12x' is not a number")
        );

        // fixing the text clears the message
        let (state, _) = run(
            state,
            vec![
                form(FormMsg::StartEditing),
                form(FormMsg::InputBackspace),
                form(FormMsg::CommitEdit),
            ],
        );
        assert_eq!(state.split.bill_amount, 12.0);
        assert_eq!(state.form.input_message(SplitField::BillAmount), None);
    }

    #[test]
    fn test_negative_bill_is_coerced() {
        let (state, _) = run(AppState::default(), type_text("-5"));

        assert_eq!(state.split.bill_amount, 0.0);
        assert_eq!(
            state.form.input_message(SplitField::BillAmount),
            Some("Bill amount must be positive")
        );
    }

    #[test]
    fn test_editing_name() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantName(1);
        let mut msgs = vec![form(FormMsg::StartEditing)];
        msgs.extend((0.."Person 2".len()).map(|_| form(FormMsg::InputBackspace)));
        let (state, _) = run(state, msgs);

        assert!(state.form.is_editing());
        assert_eq!(state.split.participants[1].name, "");
        assert!(state
            .validation()
            .message_for(SplitField::ParticipantName(1))
            .is_some());

        let (state, _) = run(
            state,
            vec![
                form(FormMsg::InputText("Bob".into())),
                form(FormMsg::CommitEdit),
            ],
        );
        assert_eq!(state.split.participants[1].name, "Bob");
    }

    #[test]
    fn test_percentage_edit_defers_renormalize_until_blur() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantPercentage(0);
        let (state, _) = run(state, type_text("30"));

        assert_eq!(percentages(&state), vec![30.0, 50.0]);

        let (state, _) = update(form(FormMsg::FocusNext), state);
        assert_eq!(state.form.focus, Focus::ParticipantName(1));
        assert_eq!(percentages(&state), vec![30.0, 70.0]);
    }

    #[test]
    fn test_slider_adjust_then_blur() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantPercentage(0);
        let (state, _) = run(
            state,
            vec![
                form(FormMsg::AdjustFocused(10.0)),
                form(FormMsg::AdjustFocused(1.0)),
            ],
        );
        assert_eq!(percentages(&state), vec![61.0, 50.0]);

        let (state, _) = update(form(FormMsg::FocusPrev), state);
        assert_eq!(percentages(&state), vec![61.0, 39.0]);
    }

    #[test]
    fn test_focus_change_between_other_fields_does_not_renormalize() {
        let mut state = AppState::default();
        state.split = state.split.update_percentage(0, 10.0);
        let (state, _) = update(form(FormMsg::FocusNext), state);

        assert_eq!(percentages(&state), vec![10.0, 50.0]);
    }

    #[test]
    fn test_out_of_range_percentage_text_is_coerced() {
        let mut state = AppState::default();
        state.form.focus = Focus::TipPercentage;
        let (state, _) = run(state, type_text("150"));

        assert_eq!(state.split.tip_percentage, 0.0);
        assert_eq!(
            state.form.input_message(SplitField::TipPercentage),
            Some("Tip percentage must be between 0 and 100")
        );

        // the slider clears the message
        let (state, _) = update(form(FormMsg::AdjustFocused(1.0)), state);
        assert_eq!(state.split.tip_percentage, 1.0);
        assert_eq!(state.form.input_message(SplitField::TipPercentage), None);
    }

    #[test]
    fn test_adjust_clamps() {
        let mut state = AppState::default();
        state.form.focus = Focus::TipPercentage;
        let (state, _) = update(form(FormMsg::AdjustFocused(100.0)), state);
        assert_eq!(state.split.tip_percentage, 100.0);

        let mut state = state;
        state.form.focus = Focus::BillAmount;
        let (state, _) = update(form(FormMsg::AdjustFocused(-10.0)), state);
        assert_eq!(state.split.bill_amount, 0.0);
        assert_eq!(state.form.bill_input, "0.00");
    }

    #[test]
    fn test_add_participant() {
        let (state, cmds) = update(form(FormMsg::AddParticipant), AppState::default());

        assert_eq!(state.split.len(), 3);
        assert_eq!(percentages(&state), vec![50.0, 50.0, 0.0]);
        assert_eq!(
            state.system.status_message(),
            Some(&"[Added] Person 3".to_string())
        );
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_remove_participant_below_minimum_is_silent() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantName(0);
        let before = state.split.clone();
        let (state, cmds) = update(form(FormMsg::RemoveFocusedParticipant), state);

        assert_eq!(state.split, before);
        assert!(state.system.status_message().is_none());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_remove_focused_participant() {
        let mut state = AppState::default();
        state.split = state.split.update_percentage(1, 30.0).add_participant();
        assert_eq!(percentages(&state), vec![50.0, 30.0, 20.0]);
        state.form.focus = Focus::ParticipantPercentage(2);

        let (state, _) = update(form(FormMsg::RemoveFocusedParticipant), state);

        assert_eq!(state.split.len(), 2);
        assert_eq!(percentages(&state), vec![50.0, 50.0]);
        assert_eq!(state.form.focus, Focus::ParticipantPercentage(1));
        assert_eq!(
            state.system.status_message(),
            Some(&"[Removed] Person 3".to_string())
        );
    }

    #[test]
    fn test_remove_on_bill_focus_is_noop() {
        let state = AppState::new(SplitConfiguration::default().add_participant());
        let (state, _) = update(form(FormMsg::RemoveFocusedParticipant), state);

        assert_eq!(state.split.len(), 3);
    }

    #[test]
    fn test_explicit_renormalize() {
        let mut state = AppState::default();
        state.split = state.split.update_percentage(0, 25.0);
        let (state, _) = update(form(FormMsg::Renormalize), state);

        assert_eq!(percentages(&state), vec![25.0, 75.0]);
    }

    #[test]
    fn test_save_and_load() {
        let state = AppState::default();
        let (state, cmds) = update(Msg::History(HistoryMsg::Save), state);
        let saved = state.split.clone();

        assert_eq!(state.saved.len(), 1);
        assert_eq!(state.form.selected_saved, Some(0));
        assert_eq!(
            state.system.status_message(),
            Some(&"[Saved] Split 1".to_string())
        );
        assert!(matches!(cmds.as_slice(), [Cmd::LogInfo { .. }]));

        let (state, _) = run(
            state,
            vec![
                form(FormMsg::AddParticipant),
                Msg::History(HistoryMsg::LoadSelected),
            ],
        );
        assert_eq!(state.split, saved);
        assert_eq!(
            state.system.status_message(),
            Some(&"[Loaded] Split 1".to_string())
        );
    }

    #[test]
    fn test_save_renormalizes_focused_share() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantPercentage(0);
        let (state, _) = run(
            state,
            vec![
                form(FormMsg::AdjustFocused(10.0)),
                Msg::History(HistoryMsg::Save),
            ],
        );

        let saved = state.saved.load(0).unwrap();
        let shares: Vec<f64> = saved.participants.iter().map(|p| p.percentage).collect();
        assert_eq!(shares, vec![60.0, 40.0]);
        assert_eq!(saved.percentage_total(), 100.0);
        assert_eq!(state.split, saved);
    }

    #[test]
    fn test_save_commits_typed_share_before_renormalizing() {
        let mut state = AppState::default();
        state.form.focus = Focus::ParticipantPercentage(1);
        let mut msgs = type_text("30");
        msgs.pop();
        msgs.push(Msg::History(HistoryMsg::Save));
        let (state, _) = run(state, msgs);

        assert!(!state.form.is_editing());
        // the last share absorbs the correction
        assert_eq!(percentages(&state), vec![50.0, 50.0]);
        assert_eq!(state.saved.load(0).map(|s| s.is_balanced()), Ok(true));
    }

    #[test]
    fn test_save_rejects_invalid_form() {
        let mut state = AppState::default();
        state.split = state.split.update_name(0, " ");
        let (state, cmds) = update(Msg::History(HistoryMsg::Save), state);

        assert!(state.saved.is_empty());
        assert_eq!(
            state.system.status_message(),
            Some(&"[ERR: Save] Person 1 Name: Name is required".to_string())
        );
        assert!(matches!(cmds.as_slice(), [Cmd::LogError { .. }]));
    }

    #[test]
    fn test_load_out_of_range_reports_not_found() {
        let (state, _) = update(Msg::History(HistoryMsg::Save), AppState::default());
        let saved_before = state.saved.clone();
        let split_before = state.split.clone();

        let (state, cmds) = update(Msg::History(HistoryMsg::Load(5)), state);

        assert_eq!(state.saved, saved_before);
        assert_eq!(state.split, split_before);
        assert_eq!(
            state.system.status_message(),
            Some(&"[ERR: Load] saved split 6 not found (1 saved)".to_string())
        );
        assert_eq!(cmds.len(), 1);
    }

    #[test]
    fn test_load_without_selection() {
        let (state, _) = update(Msg::History(HistoryMsg::LoadSelected), AppState::default());

        assert_eq!(
            state.system.status_message(),
            Some(&"[ERR: Load] no saved split selected".to_string())
        );
    }

    #[test]
    fn test_select_saved_cycles() {
        let (state, _) = run(
            AppState::default(),
            vec![
                Msg::History(HistoryMsg::Save),
                Msg::History(HistoryMsg::Save),
                Msg::History(HistoryMsg::Save),
            ],
        );
        assert_eq!(state.form.selected_saved, Some(2));

        let (state, _) = update(Msg::History(HistoryMsg::SelectNext), state);
        assert_eq!(state.form.selected_saved, Some(0));

        let (state, _) = update(Msg::History(HistoryMsg::SelectPrev), state);
        assert_eq!(state.form.selected_saved, Some(2));
    }

    #[test]
    fn test_select_with_empty_history_is_noop() {
        let (state, _) = update(Msg::History(HistoryMsg::SelectNext), AppState::default());

        assert_eq!(state.form.selected_saved, None);
    }
}
