/// State management module
///
/// This module handles all application state, including:
/// - Shared data structures (data.rs)
/// - Encode style configuration (style.rs)
/// - The in-memory session history (history.rs)
/// - Orchestration of validate → encode → append (controller.rs)

pub mod controller;
pub mod data;
pub mod history;
pub mod style;
