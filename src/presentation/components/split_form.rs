//! Split form component
//!
//! Renders the active split: bill, tip, one block per participant and the
//! percentage total. Inline messages come from coerced input first and from
//! validation otherwise.

use std::borrow::Cow;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Paragraph},
};

use crate::{
    core::state::{form::Focus, AppState},
    domain::{
        split::MIN_PARTICIPANTS,
        text::{format_amount, format_percentage},
        SplitField, ValidationResult,
    },
    presentation::{
        config::{styles, Action, Styles},
        widgets::{field::FieldWidget, slider::SliderWidget},
    },
};

enum FormRow<'a> {
    Field(FieldWidget<'a>),
    Slider(SliderWidget<'a>),
    Text(Line<'a>),
    Blank,
}

/// Split form component
///
/// Stateless apart from the scroll offset that keeps the focused row visible.
#[derive(Debug, Default)]
pub struct SplitFormComponent {
    offset: usize,
}

impl SplitFormComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&mut self, state: &AppState, frame: &mut Frame, area: Rect) {
        let title_style = state.config.config.styles.style(styles::TITLE);
        let block = Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" Bill Split ", title_style));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let (rows, focused_row) = build_rows(state);
        let height = usize::from(inner.height);
        self.offset = scroll_offset(self.offset, focused_row, height);

        for (y, row) in (inner.top()..inner.bottom()).zip(rows.into_iter().skip(self.offset)) {
            let row_area = Rect::new(inner.x, y, inner.width, 1);
            match row {
                FormRow::Field(field) => frame.render_widget(field, row_area),
                FormRow::Slider(slider) => frame.render_widget(slider, row_area),
                FormRow::Text(line) => frame.render_widget(Paragraph::new(line), row_area),
                FormRow::Blank => {}
            }
        }
    }
}

/// Smallest move that brings `focused` into a window of `height` rows
fn scroll_offset(offset: usize, focused: usize, height: usize) -> usize {
    if height == 0 {
        return offset;
    }
    if focused < offset {
        focused
    } else if focused >= offset + height {
        focused + 1 - height
    } else {
        offset
    }
}

struct RowStyles {
    label: Style,
    focused: Style,
    editing: Style,
    error: Style,
    amount: Style,
    slider: Style,
}

impl RowStyles {
    fn new(config: &Styles) -> Self {
        Self {
            label: Style::default(),
            focused: config.style(styles::FOCUSED),
            editing: config.style(styles::EDITING),
            error: config.style(styles::ERROR),
            amount: config.style(styles::AMOUNT),
            slider: config.style(styles::SLIDER),
        }
    }

    fn label_for(&self, focused: bool) -> Style {
        if focused {
            self.focused
        } else {
            self.label
        }
    }
}

/// Rows of the form and the index of the one holding the focus
fn build_rows(state: &AppState) -> (Vec<FormRow<'_>>, usize) {
    let form = &state.form;
    let split = &state.split;
    let validation = state.validation();
    let row_styles = RowStyles::new(&state.config.config.styles);
    let editing_text = |focus: Focus| form.is_editing() && form.is_focused(focus);
    let message = |field: SplitField| message_for(state, &validation, field);

    let mut rows = Vec::new();
    let mut focused_row = 0;

    // bill
    let bill_focus = Focus::BillAmount;
    if form.is_focused(bill_focus) {
        focused_row = rows.len();
    }
    let bill_value = if editing_text(bill_focus) {
        form.buffer.as_str()
    } else {
        form.bill_input.as_str()
    };
    rows.push(FormRow::Field(text_field(
        "Bill amount ($)",
        bill_value,
        message(SplitField::BillAmount),
        form.is_focused(bill_focus),
        editing_text(bill_focus),
        &row_styles,
    )));

    // tip
    let tip_focus = Focus::TipPercentage;
    if form.is_focused(tip_focus) {
        focused_row = rows.len();
    }
    rows.push(percentage_row(
        "Tip",
        split.tip_percentage,
        form.is_focused(tip_focus),
        editing_text(tip_focus).then_some(form.buffer.as_str()),
        &row_styles,
    ));
    if let Some(message) = message(SplitField::TipPercentage) {
        rows.push(FormRow::Text(Line::styled(message, row_styles.error)));
    }
    rows.push(FormRow::Text(Line::from(vec![
        Span::raw("Total with tip: "),
        Span::styled(
            format!("${}", format_amount(split.total_with_tip())),
            row_styles.amount,
        ),
    ])));

    let remove_hint = state
        .config
        .config
        .keybindings
        .hint_for(Action::RemoveParticipant);
    let amounts = split.amounts_owed();
    for (index, (participant, amount)) in split.participants.iter().zip(amounts).enumerate() {
        rows.push(FormRow::Blank);

        let name_focus = Focus::ParticipantName(index);
        if form.is_focused(name_focus) {
            focused_row = rows.len();
        }
        let name_value = if editing_text(name_focus) {
            form.buffer.as_str()
        } else {
            participant.name.as_str()
        };
        let name_field = text_field(
            format!("#{} Name", index + 1),
            name_value,
            message(SplitField::ParticipantName(index)),
            form.is_focused(name_focus),
            editing_text(name_focus),
            &row_styles,
        );
        rows.push(FormRow::Field(name_field));

        let percentage_focus = Focus::ParticipantPercentage(index);
        if form.is_focused(percentage_focus) {
            focused_row = rows.len();
        }
        rows.push(percentage_row(
            "   Share",
            participant.percentage,
            form.is_focused(percentage_focus),
            editing_text(percentage_focus).then_some(form.buffer.as_str()),
            &row_styles,
        ));

        let mut amount_line = vec![
            Span::raw("   Amount to pay: "),
            Span::styled(format!("${}", format_amount(amount)), row_styles.amount),
        ];
        if let Some(message) = message(SplitField::ParticipantPercentage(index)) {
            amount_line.push(Span::raw("  "));
            amount_line.push(Span::styled(message, row_styles.error));
        }
        rows.push(FormRow::Text(Line::from(amount_line)));

        if let Some(hint) = remove_hint.as_ref().filter(|_| index >= MIN_PARTICIPANTS) {
            rows.push(FormRow::Text(Line::styled(
                format!("   {hint} remove"),
                Style::default().dim(),
            )));
        }
    }

    rows.push(FormRow::Blank);
    let total = split.percentage_total();
    let total_line = if split.is_balanced() {
        Line::from(format!("Total: {}", format_percentage(total)))
    } else {
        Line::styled(
            format!("Total: {} (should be 100%)", format_percentage(total)),
            row_styles.error,
        )
    };
    rows.push(FormRow::Text(total_line));
    if let Some(message) = validation.message_for(SplitField::Participants) {
        rows.push(FormRow::Text(Line::styled(
            message.to_string(),
            row_styles.error,
        )));
    }

    (rows, focused_row)
}

/// Input messages win over validation messages for the same field
fn message_for(
    state: &AppState,
    validation: &ValidationResult,
    field: SplitField,
) -> Option<String> {
    state
        .form
        .input_message(field)
        .or_else(|| validation.message_for(field))
        .map(str::to_string)
}

fn text_field<'a>(
    label: impl Into<Cow<'a, str>>,
    value: &'a str,
    message: Option<String>,
    focused: bool,
    editing: bool,
    row_styles: &RowStyles,
) -> FieldWidget<'a> {
    let value_style = if editing {
        row_styles.editing
    } else {
        Style::default()
    };
    FieldWidget::new(label, value)
        .message(message)
        .editing(editing)
        .label_style(row_styles.label_for(focused))
        .value_style(value_style)
        .message_style(row_styles.error)
}

/// Slider while navigating, text input while its value is being typed
fn percentage_row<'a>(
    label: &'a str,
    value: f64,
    focused: bool,
    buffer: Option<&'a str>,
    row_styles: &RowStyles,
) -> FormRow<'a> {
    match buffer {
        Some(buffer) => FormRow::Field(
            FieldWidget::new(format!("{label} (%)"), buffer)
                .editing(true)
                .label_style(row_styles.label_for(true))
                .value_style(row_styles.editing),
        ),
        None => FormRow::Slider(
            SliderWidget::new(label, value)
                .label_style(row_styles.label_for(focused))
                .style(row_styles.slider),
        ),
    }
}
