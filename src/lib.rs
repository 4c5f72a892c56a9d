//! Quiz Author - Elm-style editor for multiple-choice question widgets
//!
//! This crate provides the document model, the update logic driving it,
//! and the two derived views: block markup for the content pipeline and
//! an HTML preview of the widget.

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod drag;
pub mod markup;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod preview;
pub mod runtime;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::AuthorConfig;
pub use messages::Msg;
pub use model::AppModel;
