//! # Billsplit - Bill Splitting TUI
//!
//! A terminal form that splits a bill, tip included, between any number of
//! people by percentage. Built with Rust and Ratatui around an Elm-like
//! architecture.
//!
//! ## Architecture Overview
//!
//! - **Model** (`core::state`): application state
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): pure functions that transform state
//! - **Command** (`core::cmd`): side effects executed by the runner
//! - **View** (`presentation::components`): rendering of the current state
//!
//! The arithmetic lives in [`domain`] and knows nothing about the terminal.
//!
//! ## Example Usage
//!
//! ```rust
//! use billsplit::{
//!     core::{msg::{form::FormMsg, Msg}, state::AppState, update::update},
//!     domain::SplitConfiguration,
//! };
//!
//! let state = AppState::new(SplitConfiguration::with_defaults(100.0, 10.0));
//! assert_eq!(state.amounts_owed(), vec![55.0, 55.0]);
//!
//! let (state, _commands) = update(Msg::Form(FormMsg::AddParticipant), state);
//! assert_eq!(state.split.len(), 3);
//! assert_eq!(state.amounts_owed(), vec![55.0, 55.0, 0.0]);
//! ```
//!
//! ## Modules
//!
//! - [`core`] - State, messages, translation and update
//! - [`domain`] - Split calculator, saved splits, validation
//! - [`infrastructure`] - CLI, configuration, terminal
//! - [`integration`] - Runtime, command execution and the app runner
//! - [`presentation`] - Components, widgets, keybindings and styles
//! - [`utils`] - Logging, panic handling, paths

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
