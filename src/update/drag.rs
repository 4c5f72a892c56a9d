//! Drag-reorder update handler

use crate::commands::Cmd;
use crate::messages::{DocumentMsg, DragMsg};
use crate::model::AppModel;

use super::document::update_document;

pub fn update_drag(model: &mut AppModel, msg: DragMsg) -> Option<Cmd> {
    match msg {
        DragMsg::Start { index } => {
            if index >= model.document.len() {
                return None;
            }
            model.drag.begin(index);
            Some(Cmd::Redraw)
        }
        DragMsg::Hover {
            index,
            pointer_y,
            row,
        } => {
            if index >= model.document.len() {
                return None;
            }
            let (from, to) = model.drag.hover(index, pointer_y, row)?;
            let cmd = update_document(model, DocumentMsg::Reorder { from, to })?;
            model.drag.commit(to);
            Some(cmd)
        }
        DragMsg::Drop => {
            model.drag.drop();
            Some(Cmd::Redraw)
        }
    }
}
