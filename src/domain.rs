//! Domain logic
//!
//! This module contains the bill-splitting calculator:
//! - Split configuration and renormalization
//! - Session history of saved splits
//! - Validation and numeric input coercion

pub mod error;
pub mod history;
pub mod split;
pub mod text;
pub mod validation;

pub use error::SplitError;
pub use history::SavedSplits;
pub use split::{Participant, SplitConfiguration};
pub use validation::{FieldError, SplitField, ValidationResult};
