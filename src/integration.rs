//! Integration layer
//!
//! Glues the pure core to the terminal:
//! - Runtime queueing and processing messages
//! - Command executor
//! - Renderer and the app runner event loop

pub mod app_runner;
pub mod cmd_executor;
pub mod renderer;
pub mod runtime;
