use std::fmt;

use serde::{Deserialize, Serialize};

/// Addressable input of a split configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SplitField {
    BillAmount,
    TipPercentage,
    Participants,
    ParticipantName(usize),
    ParticipantPercentage(usize),
}

impl fmt::Display for SplitField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitField::BillAmount => write!(f, "Bill Amount"),
            SplitField::TipPercentage => write!(f, "Tip Percentage"),
            SplitField::Participants => write!(f, "Participants"),
            SplitField::ParticipantName(index) => write!(f, "Person {} Name", index + 1),
            SplitField::ParticipantPercentage(index) => {
                write!(f, "Person {} Percentage", index + 1)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: SplitField,
    pub message: String,
}

impl FieldError {
    pub fn new(field: SplitField, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Per-field messages collected by `SplitConfiguration::validate`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    errors: Vec<FieldError>,
}

impl ValidationResult {
    pub fn new(errors: Vec<FieldError>) -> Self {
        Self { errors }
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn first(&self) -> Option<&FieldError> {
        self.errors.first()
    }

    pub fn message_for(&self, field: SplitField) -> Option<&str> {
        self.errors
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_message_for() {
        let result = ValidationResult::new(vec![
            FieldError::new(SplitField::ParticipantName(1), "Name is required"),
            FieldError::new(SplitField::BillAmount, "Bill amount must be positive"),
        ]);

        assert!(!result.is_valid());
        assert_eq!(
            result.message_for(SplitField::ParticipantName(1)),
            Some("Name is required")
        );
        assert_eq!(result.message_for(SplitField::ParticipantName(0)), None);
        assert_eq!(
            result.first().map(ToString::to_string),
            Some("Person 2 Name: Name is required".to_string())
        );
    }

    #[test]
    fn test_empty_result_is_valid() {
        assert!(ValidationResult::default().is_valid());
    }
}
