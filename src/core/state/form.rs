use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::domain::{text::format_amount, SplitConfiguration, SplitField};

/// Input that currently has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Focus {
    #[default]
    BillAmount,
    TipPercentage,
    ParticipantName(usize),
    ParticipantPercentage(usize),
}

impl Focus {
    /// Bill and tip, then name/percentage pairs per participant
    fn position(self) -> usize {
        match self {
            Focus::BillAmount => 0,
            Focus::TipPercentage => 1,
            Focus::ParticipantName(i) => 2 + 2 * i,
            Focus::ParticipantPercentage(i) => 3 + 2 * i,
        }
    }

    fn from_position(position: usize) -> Self {
        match position {
            0 => Focus::BillAmount,
            1 => Focus::TipPercentage,
            p if p % 2 == 0 => Focus::ParticipantName((p - 2) / 2),
            p => Focus::ParticipantPercentage((p - 3) / 2),
        }
    }

    fn slots(participants: usize) -> usize {
        2 + 2 * participants
    }

    pub fn next(self, participants: usize) -> Self {
        let slots = Self::slots(participants);
        Self::from_position((self.position() + 1) % slots)
    }

    pub fn prev(self, participants: usize) -> Self {
        let slots = Self::slots(participants);
        Self::from_position((self.position() + slots - 1) % slots)
    }

    /// Keeps the focus on an existing input after participants were removed.
    pub fn clamp(self, participants: usize) -> Self {
        let last = Self::slots(participants) - 1;
        Self::from_position(self.position().min(last))
    }

    pub fn participant(self) -> Option<usize> {
        match self {
            Focus::ParticipantName(i) | Focus::ParticipantPercentage(i) => Some(i),
            Focus::BillAmount | Focus::TipPercentage => None,
        }
    }

    pub fn is_percentage(self) -> bool {
        matches!(self, Focus::ParticipantPercentage(_))
    }

    pub fn field(self) -> SplitField {
        match self {
            Focus::BillAmount => SplitField::BillAmount,
            Focus::TipPercentage => SplitField::TipPercentage,
            Focus::ParticipantName(i) => SplitField::ParticipantName(i),
            Focus::ParticipantPercentage(i) => SplitField::ParticipantPercentage(i),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Navigate,
    Editing,
}

/// Form-level state around the active split: focus, the text being typed
/// and messages from coerced input.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub focus: Focus,
    pub mode: FormMode,
    pub buffer: String,
    /// What the user typed for the bill, kept verbatim so invalid text stays
    /// visible next to its message.
    pub bill_input: String,
    pub input_messages: HashMap<SplitField, String>,
    pub selected_saved: Option<usize>,
}

impl FormState {
    pub fn new(split: &SplitConfiguration) -> Self {
        Self {
            bill_input: format_amount(split.bill_amount),
            ..Default::default()
        }
    }

    pub fn is_editing(&self) -> bool {
        self.mode == FormMode::Editing
    }

    pub fn is_focused(&self, focus: Focus) -> bool {
        self.focus == focus
    }

    pub fn input_message(&self, field: SplitField) -> Option<&str> {
        self.input_messages.get(&field).map(String::as_str)
    }

    pub fn set_input_message(&mut self, field: SplitField, message: Option<String>) {
        match message {
            Some(message) => {
                self.input_messages.insert(field, message);
            }
            None => {
                self.input_messages.remove(&field);
            }
        }
    }

    /// Resets everything derived from a configuration, e.g. after loading one.
    pub fn reset_to(&mut self, split: &SplitConfiguration) {
        self.mode = FormMode::Navigate;
        self.buffer.clear();
        self.bill_input = format_amount(split.bill_amount);
        self.input_messages.clear();
        self.focus = self.focus.clamp(split.len());
    }

    /// Keeps input messages attached to the right participant after the one
    /// at `removed` left, and the focus on an existing input.
    pub fn participant_removed(&mut self, removed: usize, participants: usize) {
        let shift = |i: usize| match i.cmp(&removed) {
            Ordering::Less => Some(i),
            Ordering::Equal => None,
            Ordering::Greater => Some(i - 1),
        };
        self.input_messages = self
            .input_messages
            .drain()
            .filter_map(|(field, message)| {
                let field = match field {
                    SplitField::ParticipantName(i) => SplitField::ParticipantName(shift(i)?),
                    SplitField::ParticipantPercentage(i) => {
                        SplitField::ParticipantPercentage(shift(i)?)
                    }
                    other => other,
                };
                Some((field, message))
            })
            .collect();
        self.focus = match self.focus {
            Focus::ParticipantName(i) if i > removed => Focus::ParticipantName(i - 1),
            Focus::ParticipantPercentage(i) if i > removed => Focus::ParticipantPercentage(i - 1),
            focus => focus,
        }
        .clamp(participants);
    }
}
