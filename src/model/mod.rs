//! Application model - the complete state of the question editor
//!
//! This module contains all the state types following the Elm Architecture pattern.

pub mod document;
pub mod session;

pub use document::{Choice, ChoiceField, Document, DEFAULT_QUESTION_TEXT};
pub use session::{IdGenerator, QuestionId, Session};

use crate::commands::Cmd;
use crate::config::AuthorConfig;
use crate::drag::DragController;
use crate::markup::{self, AttributeEscaping};
use crate::persistence::{self, SlotStorage};
use crate::preview;

/// The complete application model
#[derive(Debug)]
pub struct AppModel {
    /// The question being edited
    pub document: Document,
    /// Question id and choice id generator
    pub session: Session,
    /// Pointer drag state over the choice rows
    pub drag: DragController,
    /// Storage slot the document is saved to
    pub slot_key: String,
    /// Attribute escaping used by the markup view
    pub escaping: AttributeEscaping,
}

impl AppModel {
    pub fn new(document: Document, session: Session, config: &AuthorConfig) -> Self {
        let mut model = Self {
            document,
            session,
            drag: DragController::new(),
            slot_key: config.storage_key.clone(),
            escaping: AttributeEscaping::from_flag(config.markup.escape_attributes),
        };
        model.register_document_ids();
        model
    }

    /// Start a session from the stored document (or the default one)
    pub fn load(storage: &dyn SlotStorage, config: &AuthorConfig) -> Self {
        let document = persistence::load(storage, &config.storage_key);
        tracing::info!(
            "Loaded document from slot {} ({} choices)",
            config.storage_key,
            document.len()
        );
        Self::new(document, Session::new(), config)
    }

    /// Replace the document, keeping the session
    pub fn replace_document(&mut self, document: Document) {
        self.document = document;
        self.drag.drop();
        self.register_document_ids();
    }

    fn register_document_ids(&mut self) {
        for choice in self.document.choices() {
            self.session.ids.register(&choice.id);
        }
    }

    /// Command writing the current document to its slot
    pub fn save_command(&self) -> Option<Cmd> {
        match persistence::encode(&self.document) {
            Ok(content) => Some(Cmd::Persist {
                key: self.slot_key.clone(),
                content,
            }),
            Err(e) => {
                tracing::warn!("Failed to serialize document: {}", e);
                None
            }
        }
    }

    /// Persist and re-derive views: what every successful mutation returns
    pub fn changed(&self) -> Option<Cmd> {
        let mut cmds = Vec::with_capacity(2);
        cmds.extend(self.save_command());
        cmds.push(Cmd::Redraw);
        Some(Cmd::batch(cmds))
    }

    pub fn question_id(&self) -> &QuestionId {
        &self.session.question_id
    }

    /// Block-markup view of the document
    pub fn markup(&self) -> String {
        markup::to_markup(&self.document, self.question_id(), self.escaping)
    }

    /// HTML preview fragment of the document
    pub fn preview(&self) -> String {
        preview::render_preview(&self.document, self.question_id())
    }
}
