//! App message handlers (session lifecycle)

use crate::commands::Cmd;
use crate::messages::AppMsg;
use crate::model::{AppModel, Document};

/// Handle app messages
pub fn update_app(model: &mut AppModel, msg: AppMsg) -> Option<Cmd> {
    match msg {
        AppMsg::Reset => {
            model.replace_document(Document::default());
            tracing::info!("Document reset to defaults");
            model.changed()
        }

        AppMsg::Save => model.save_command(),
    }
}
