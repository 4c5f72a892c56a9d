//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use quiz_author::commands::Cmd;
use quiz_author::config::AuthorConfig;
use quiz_author::messages::Msg;
use quiz_author::model::{AppModel, Document, Session};
use quiz_author::update::update;

/// Fresh model with deterministic ids
pub fn test_model() -> AppModel {
    AppModel::new(Document::default(), Session::seeded(2024), &AuthorConfig::default())
}

/// Model with `count` blank choices
pub fn model_with_choices(count: usize) -> AppModel {
    let mut model = test_model();
    for _ in 0..count {
        update(&mut model, Msg::add_choice());
    }
    model
}

/// Choice ids in list order
pub fn ids(model: &AppModel) -> Vec<String> {
    model.document.choices().iter().map(|c| c.id.clone()).collect()
}

/// Id of the choice at `index`
pub fn id_at(model: &AppModel, index: usize) -> String {
    model.document.choices()[index].id.clone()
}

/// Apply messages, returning the last command
pub fn run(model: &mut AppModel, msgs: impl IntoIterator<Item = Msg>) -> Option<Cmd> {
    let mut last = None;
    for msg in msgs {
        last = update(model, msg);
    }
    last
}
