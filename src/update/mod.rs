//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod app;
mod document;
mod drag;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::AppModel;

#[cfg(debug_assertions)]
use crate::tracing::ChoiceOrderSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use app::update_app;
pub use document::update_document;
pub use drag::update_drag;

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

/// Inner update logic (no tracing)
fn update_inner(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Document(m) => document::update_document(model, m),
        Msg::Drag(m) => drag::update_drag(model, m),
        Msg::App(m) => app::update_app(model, m),
    }
}

#[cfg(debug_assertions)]
fn update_traced(model: &mut AppModel, msg: Msg) -> Option<Cmd> {
    // Hover events arrive on every pointer move
    let is_noisy = matches!(&msg, Msg::Drag(crate::messages::DragMsg::Hover { .. }));

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = ChoiceOrderSnapshot::from_document(&model.document);

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(model, msg);

    let after = ChoiceOrderSnapshot::from_document(&model.document);
    if let Some(diff) = before.diff(&after) {
        debug!(target: "choices", %diff, "state changed");
    }

    model.document.assert_invariants_with_context(&msg_name);

    result
}

/// Get a display name for a message type
#[cfg(debug_assertions)]
fn msg_type_name(msg: &Msg) -> String {
    use crate::messages::{AppMsg, DocumentMsg, DragMsg};

    match msg {
        Msg::Document(m) => match m {
            DocumentMsg::SetQuestionText(_) => "Document::SetQuestionText".into(),
            DocumentMsg::SetHint(_) => "Document::SetHint".into(),
            DocumentMsg::SetRedirect(_) => "Document::SetRedirect".into(),
            DocumentMsg::AddChoice => "Document::AddChoice".into(),
            DocumentMsg::RemoveChoice(id) => format!("Document::RemoveChoice({})", id),
            DocumentMsg::UpdateChoiceField { id, field, .. } => {
                format!("Document::UpdateChoiceField({}, {:?})", id, field)
            }
            DocumentMsg::SetCorrect(id) => format!("Document::SetCorrect({})", id),
            DocumentMsg::Reorder { from, to } => format!("Document::Reorder({} -> {})", from, to),
        },
        Msg::Drag(m) => match m {
            DragMsg::Start { index } => format!("Drag::Start({})", index),
            DragMsg::Hover { index, .. } => format!("Drag::Hover({})", index),
            DragMsg::Drop => "Drag::Drop".into(),
        },
        Msg::App(m) => match m {
            AppMsg::Reset => "App::Reset".into(),
            AppMsg::Save => "App::Save".into(),
        },
    }
}
