//! Reusable UI widgets
//!
//! Widgets know nothing about `AppState`; components feed them plain values.

pub mod field;
pub mod slider;
pub mod status_bar;
