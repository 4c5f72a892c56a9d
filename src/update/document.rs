//! Document update handlers: question fields and choice list edits

use crate::commands::Cmd;
use crate::messages::DocumentMsg;
use crate::model::AppModel;

/// Handle document messages
///
/// Every applied edit persists the document and redraws the views;
/// edits naming an unknown choice change nothing and return `None`.
pub fn update_document(model: &mut AppModel, msg: DocumentMsg) -> Option<Cmd> {
    match msg {
        DocumentMsg::SetQuestionText(text) => {
            model.document.set_question_text(text);
            model.changed()
        }

        DocumentMsg::SetHint(text) => {
            model.document.set_hint(text);
            model.changed()
        }

        DocumentMsg::SetRedirect(text) => {
            model.document.set_redirect(text);
            model.changed()
        }

        DocumentMsg::AddChoice => {
            let id = model.session.ids.next_choice_id();
            tracing::info!("Added choice {}", id);
            model.document.add_choice(id);
            model.changed()
        }

        DocumentMsg::RemoveChoice(id) => {
            let Some(index) = model.document.position(&id) else {
                tracing::debug!("RemoveChoice: no choice {}", id);
                return None;
            };
            model.document.remove_choice(&id);
            model.drag.row_removed(index);
            tracing::info!("Removed choice {}", id);
            model.changed()
        }

        DocumentMsg::UpdateChoiceField { id, field, value } => {
            if !model.document.update_choice_field(&id, field, value) {
                tracing::debug!("UpdateChoiceField: no choice {}", id);
                return None;
            }
            model.changed()
        }

        DocumentMsg::SetCorrect(id) => {
            if model.document.position(&id).is_none() {
                tracing::debug!("SetCorrect: no choice {}", id);
                return None;
            }
            model.document.set_correct(&id);
            tracing::info!(
                "Correct choice: {}",
                model.document.correct().unwrap_or("(none)")
            );
            model.changed()
        }

        DocumentMsg::Reorder { from, to } => {
            let len = model.document.len();
            if from >= len || to >= len {
                tracing::warn!("Ignoring reorder {} -> {} on {} choices", from, to, len);
                return None;
            }
            model.document.reorder(from, to);
            model.changed()
        }
    }
}
