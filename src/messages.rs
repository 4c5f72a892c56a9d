//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::drag::RowBounds;
use crate::model::ChoiceField;

/// Document messages (question fields and the choice list)
#[derive(Debug, Clone)]
pub enum DocumentMsg {
    /// Replace the question text
    SetQuestionText(String),
    /// Replace the hint text
    SetHint(String),
    /// Replace the redirect target
    SetRedirect(String),
    /// Append a blank choice with a fresh id
    AddChoice,
    /// Remove a choice by id (no-op if absent)
    RemoveChoice(String),
    /// Replace the text or feedback of a choice
    UpdateChoiceField {
        id: String,
        field: ChoiceField,
        value: String,
    },
    /// Toggle which choice is correct
    SetCorrect(String),
    /// Move the choice at `from` to `to`
    Reorder { from: usize, to: usize },
}

/// Pointer drag messages over the rendered choice rows
#[derive(Debug, Clone)]
pub enum DragMsg {
    /// Pointer pressed on the row at `index`
    Start { index: usize },
    /// Pointer moved over the row at `index`
    Hover {
        index: usize,
        pointer_y: f32,
        row: RowBounds,
    },
    /// Pointer released
    Drop,
}

/// App messages (session lifecycle)
#[derive(Debug, Clone)]
pub enum AppMsg {
    /// Discard the document and start over from the default
    Reset,
    /// Write the current document to storage
    Save,
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Document edits
    Document(DocumentMsg),
    /// Drag-reorder gestures
    Drag(DragMsg),
    /// Session lifecycle
    App(AppMsg),
}

// Convenience constructors for common messages
impl Msg {
    pub fn add_choice() -> Self {
        Msg::Document(DocumentMsg::AddChoice)
    }

    pub fn remove_choice(id: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::RemoveChoice(id.into()))
    }

    pub fn set_text(id: impl Into<String>, value: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::UpdateChoiceField {
            id: id.into(),
            field: ChoiceField::Text,
            value: value.into(),
        })
    }

    pub fn set_feedback(id: impl Into<String>, value: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::UpdateChoiceField {
            id: id.into(),
            field: ChoiceField::Feedback,
            value: value.into(),
        })
    }

    pub fn set_correct(id: impl Into<String>) -> Self {
        Msg::Document(DocumentMsg::SetCorrect(id.into()))
    }

    pub fn reorder(from: usize, to: usize) -> Self {
        Msg::Document(DocumentMsg::Reorder { from, to })
    }
}
