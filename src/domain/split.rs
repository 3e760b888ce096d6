use serde::{Deserialize, Serialize};

use crate::domain::{
    text::round_cents,
    validation::{FieldError, SplitField, ValidationResult},
};

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PERCENTAGE: f64 = 100.0;
pub const DEFAULT_TIP_PERCENTAGE: f64 = 15.0;

fn clamp_percentage(value: f64) -> f64 {
    if value.is_finite() {
        value.clamp(0.0, MAX_PERCENTAGE)
    } else {
        0.0
    }
}

/// One person sharing the bill
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    pub percentage: f64,
}

impl Participant {
    pub fn new(name: impl Into<String>, percentage: f64) -> Self {
        Self {
            name: name.into(),
            percentage: clamp_percentage(percentage),
        }
    }

    /// Name given to the participant at 1-based `position`
    pub fn generated_name(position: usize) -> String {
        format!("Person {position}")
    }
}

/// Every input describing one bill-splitting scenario.
///
/// Mutating operations consume the configuration and hand back the new one,
/// so the caller always owns exactly one active value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitConfiguration {
    pub bill_amount: f64,
    pub tip_percentage: f64,
    pub participants: Vec<Participant>,
}

impl Default for SplitConfiguration {
    fn default() -> Self {
        Self::with_defaults(0.0, DEFAULT_TIP_PERCENTAGE)
    }
}

impl SplitConfiguration {
    /// Two participants at 50/50 with the given bill and tip
    pub fn with_defaults(bill_amount: f64, tip_percentage: f64) -> Self {
        Self {
            bill_amount: 0.0,
            tip_percentage: 0.0,
            participants: vec![
                Participant::new(Participant::generated_name(1), 50.0),
                Participant::new(Participant::generated_name(2), 50.0),
            ],
        }
        .update_bill_amount(bill_amount)
        .update_tip_percentage(tip_percentage)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn participant(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn can_remove_participant(&self) -> bool {
        self.participants.len() > MIN_PARTICIPANTS
    }

    pub fn add_participant(mut self) -> Self {
        let name = Participant::generated_name(self.participants.len() + 1);
        self.participants.push(Participant::new(name, 0.0));
        self.renormalize()
    }

    /// Removing below [`MIN_PARTICIPANTS`] or at an unknown index leaves the
    /// configuration untouched.
    pub fn remove_participant(mut self, index: usize) -> Self {
        if !self.can_remove_participant() || index >= self.participants.len() {
            log::debug!(
                "Ignoring removal of participant {index} ({} participants)",
                self.participants.len()
            );
            return self;
        }

        self.participants.remove(index);
        self.renormalize()
    }

    /// Sets a percentage without renormalizing; callers renormalize once the
    /// edit is finished.
    pub fn update_percentage(mut self, index: usize, value: f64) -> Self {
        if let Some(participant) = self.participants.get_mut(index) {
            participant.percentage = clamp_percentage(value);
        }
        self
    }

    pub fn update_name(mut self, index: usize, name: impl Into<String>) -> Self {
        if let Some(participant) = self.participants.get_mut(index) {
            participant.name = name.into();
        }
        self
    }

    /// Negative or non-finite amounts become 0.
    pub fn update_bill_amount(mut self, value: f64) -> Self {
        self.bill_amount = if value.is_finite() && value > 0.0 {
            value
        } else {
            0.0
        };
        self
    }

    pub fn update_tip_percentage(mut self, value: f64) -> Self {
        self.tip_percentage = clamp_percentage(value);
        self
    }

    pub fn percentage_total(&self) -> f64 {
        self.participants.iter().map(|p| p.percentage).sum()
    }

    pub fn is_balanced(&self) -> bool {
        (self.percentage_total() - MAX_PERCENTAGE).abs() < f64::EPSILON
    }

    /// Pushes the whole correction onto the last participant:
    /// `last = max(0, 100 - sum(others))`. Others are never touched, so an
    /// excess coming from them cannot be fully absorbed.
    pub fn renormalize(mut self) -> Self {
        if self.is_balanced() {
            return self;
        }

        let Some((last, others)) = self.participants.split_last_mut() else {
            return self;
        };
        let others_total: f64 = others.iter().map(|p| p.percentage).sum();
        let adjusted = (MAX_PERCENTAGE - others_total).max(0.0);
        log::debug!(
            "Renormalizing '{}' from {} to {adjusted}",
            last.name,
            last.percentage
        );
        last.percentage = adjusted;
        self
    }

    pub fn total_with_tip(&self) -> f64 {
        self.bill_amount * (1.0 + self.tip_percentage / 100.0)
    }

    pub fn amount_owed(&self, index: usize) -> Option<f64> {
        self.participants
            .get(index)
            .map(|p| round_cents(self.total_with_tip() * p.percentage / 100.0))
    }

    pub fn amounts_owed(&self) -> Vec<f64> {
        let total = self.total_with_tip();
        self.participants
            .iter()
            .map(|p| round_cents(total * p.percentage / 100.0))
            .collect()
    }

    pub fn validate(&self) -> ValidationResult {
        let mut errors = Vec::new();

        if self.bill_amount.is_nan() || self.bill_amount < 0.0 {
            errors.push(FieldError::new(
                SplitField::BillAmount,
                "Bill amount must be positive",
            ));
        }
        if !(0.0..=MAX_PERCENTAGE).contains(&self.tip_percentage) {
            errors.push(FieldError::new(
                SplitField::TipPercentage,
                "Tip percentage must be between 0 and 100",
            ));
        }
        if self.participants.len() < MIN_PARTICIPANTS {
            errors.push(FieldError::new(
                SplitField::Participants,
                "At least two people are required",
            ));
        }
        for (index, participant) in self.participants.iter().enumerate() {
            if participant.name.trim().is_empty() {
                errors.push(FieldError::new(
                    SplitField::ParticipantName(index),
                    "Name is required",
                ));
            }
            if !(0.0..=MAX_PERCENTAGE).contains(&participant.percentage) {
                errors.push(FieldError::new(
                    SplitField::ParticipantPercentage(index),
                    "Percentage must be between 0 and 100",
                ));
            }
        }

        ValidationResult::new(errors)
    }
}
